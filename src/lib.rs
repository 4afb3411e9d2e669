pub mod db;
pub mod domain;
pub mod dto;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod schema;
pub mod seed;
pub mod services;

#[cfg(feature = "server")]
pub mod routes;

/// Number of products inserted by one call to the populate endpoint.
pub const POPULATE_BATCH_SIZE: usize = 50;

#[cfg(feature = "server")]
pub use server::run;

#[cfg(feature = "server")]
mod server {
    use actix_cors::Cors;
    use actix_web::{App, HttpServer, middleware, web};

    use crate::db::{establish_connection_pool, get_connection, run_migrations};
    use crate::models::config::ServerConfig;
    use crate::repository::DieselRepository;
    use crate::routes::products::{list_products, populate_products, search_products};

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        // Establish Diesel connection pool for the SQLite database.
        let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
            std::io::Error::other(format!("Failed to establish database connection: {e}"))
        })?;

        {
            let mut conn = get_connection(&pool).map_err(|e| {
                std::io::Error::other(format!("Failed to get database connection: {e}"))
            })?;
            run_migrations(&mut conn)
                .map_err(|e| std::io::Error::other(format!("Failed to run migrations: {e}")))?;
        }

        let repo = DieselRepository::new(pool);

        let bind_address = (server_config.address.clone(), server_config.port);
        log::info!(
            "Starting server on {}:{}",
            server_config.address,
            server_config.port
        );

        HttpServer::new(move || {
            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .service(list_products)
                .service(search_products)
                .service(populate_products)
                .app_data(web::Data::new(repo.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}

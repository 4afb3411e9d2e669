use product_catalog::db::{DbPool, establish_connection_pool, run_migrations};
use product_catalog::domain::product::NewProduct;
use product_catalog::repository::{DieselRepository, ProductWriter};
use tempfile::TempDir;

/// SQLite database living in a temporary directory for the duration of a test.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 path"))
            .expect("create connection pool");
        {
            let mut conn = pool.get().expect("get connection");
            run_migrations(&mut conn).expect("run migrations");
        }
        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    #[allow(dead_code)]
    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool.clone())
    }
}

/// Inserts 20 products priced 10 through 29, in descending price order so
/// that insertion order differs from price order.
#[allow(dead_code)]
pub fn seed_priced(repo: &DieselRepository) {
    let products: Vec<NewProduct> = (10..30)
        .rev()
        .map(|price| {
            NewProduct::new(
                format!("Item {price}"),
                format!("Catalog entry priced at {price}"),
                format!("http://img.example/{price}"),
                price,
            )
        })
        .collect();
    assert_eq!(repo.create_products(&products).unwrap(), 20);
}

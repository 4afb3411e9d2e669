use actix_web::{HttpResponse, Responder, get, post, web};

use crate::POPULATE_BATCH_SIZE;
use crate::domain::query::SearchRequest;
use crate::dto::products::{MessageResponse, ProductListResponse, SearchQuery};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::products as product_service;

#[get("/")]
pub async fn list_products(repo: web::Data<DieselRepository>) -> impl Responder {
    match product_service::list_products(repo.get_ref()) {
        Ok(products) => HttpResponse::Ok().json(ProductListResponse { products }),
        Err(err) => error_response(&err),
    }
}

#[get("/api/products/backend")]
pub async fn search_products(
    params: web::Query<SearchQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let request = SearchRequest::from(params.into_inner());

    match product_service::search_products(repo.get_ref(), &request) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(&err),
    }
}

#[post("/api/products/populate")]
pub async fn populate_products(repo: web::Data<DieselRepository>) -> impl Responder {
    match product_service::populate_products(repo.get_ref(), POPULATE_BATCH_SIZE) {
        Ok(_) => HttpResponse::Ok().json(MessageResponse { message: "success" }),
        Err(err) => error_response(&err),
    }
}

use actix_web::{App, http::StatusCode, test, web};
use diesel::RunQueryDsl;
use serde_json::Value;

use product_catalog::domain::query::MAX_PAGE;
use product_catalog::routes::products::{list_products, populate_products, search_products};

mod common;

macro_rules! catalog_app {
    ($repo:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($repo))
                .service(list_products)
                .service(search_products)
                .service(populate_products),
        )
        .await
    };
}

fn prices(body: &Value) -> Vec<i64> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["price"].as_i64().unwrap())
        .collect()
}

#[actix_web::test]
async fn second_ascending_page_holds_tenth_to_eighteenth_cheapest() {
    let test_db = common::TestDb::new("routes_second_page.db");
    let repo = test_db.repo();
    common::seed_priced(&repo);
    let app = catalog_app!(repo);

    let req = test::TestRequest::get()
        .uri("/api/products/backend?page=2&sort=asc")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(prices(&body), (19..=27).collect::<Vec<_>>());
    assert_eq!(body["total"], 20);
    assert_eq!(body["page"], 2);
    assert_eq!(body["last_page"], 3);
}

#[actix_web::test]
async fn unmatched_term_returns_empty_page() {
    let test_db = common::TestDb::new("routes_unmatched.db");
    let repo = test_db.repo();
    common::seed_priced(&repo);
    let app = catalog_app!(repo);

    let req = test::TestRequest::get()
        .uri("/api/products/backend?s=nonexistentterm")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"], serde_json::json!([]));
    assert_eq!(body["total"], 0);
    assert_eq!(body["page"], 1);
    assert_eq!(body["last_page"], 0);
}

#[actix_web::test]
async fn malformed_page_falls_back_to_first_page() {
    let test_db = common::TestDb::new("routes_malformed_page.db");
    let repo = test_db.repo();
    common::seed_priced(&repo);
    let app = catalog_app!(repo);

    let req = test::TestRequest::get()
        .uri("/api/products/backend?page=abc&sort=desc")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["page"], 1);
    assert_eq!(prices(&body), (21..=29).rev().collect::<Vec<_>>());
}

#[actix_web::test]
async fn invalid_pattern_is_a_bad_request() {
    let test_db = common::TestDb::new("routes_invalid_pattern.db");
    let app = catalog_app!(test_db.repo());

    let req = test::TestRequest::get()
        .uri("/api/products/backend?s=%28unclosed")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("invalid search pattern"));
}

#[actix_web::test]
async fn populate_then_list_all() {
    let test_db = common::TestDb::new("routes_populate.db");
    let app = catalog_app!(test_db.repo());

    let req = test::TestRequest::post()
        .uri("/api/products/populate")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "success");

    let req = test::TestRequest::get().uri("/").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let products = body["products"].as_array().unwrap();
    assert_eq!(products.len(), 50);
    assert!(
        products
            .iter()
            .all(|p| (10..100).contains(&p["price"].as_i64().unwrap()))
    );
}

#[actix_web::test]
async fn huge_page_is_capped_and_empty() {
    let test_db = common::TestDb::new("routes_huge_page.db");
    let repo = test_db.repo();
    common::seed_priced(&repo);
    let app = catalog_app!(repo);

    let req = test::TestRequest::get()
        .uri("/api/products/backend?page=9223372036854775807&sort=asc")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"], serde_json::json!([]));
    assert_eq!(body["total"], 20);
    assert_eq!(body["page"], MAX_PAGE);
    assert_eq!(body["last_page"], 3);
}

#[actix_web::test]
async fn storage_failure_is_internal_server_error() {
    let test_db = common::TestDb::new("routes_storage_failure.db");
    {
        let mut conn = test_db.pool().get().unwrap();
        diesel::sql_query("DROP TABLE products")
            .execute(&mut conn)
            .unwrap();
    }
    let app = catalog_app!(test_db.repo());

    for uri in ["/api/products/backend?page=1", "/"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!({ "error": "internal server error" }));
    }
}

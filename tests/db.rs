use product_catalog::db::run_migrations;

mod common;

#[test]
fn test_pool_hands_out_connections() {
    let test_db = common::TestDb::new("test_pool_hands_out_connections.db");
    let conn = test_db.pool().get();
    assert!(conn.is_ok());
}

#[test]
fn test_migrations_are_idempotent() {
    let test_db = common::TestDb::new("test_migrations_are_idempotent.db");
    let mut conn = test_db.pool().get().unwrap();
    assert!(run_migrations(&mut conn).is_ok());
}

use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        product::{NewProduct, Product},
        query::{Predicate, QuerySpec},
    },
    repository::errors::RepositoryResult,
};

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod product;

/// Diesel-backed repository sharing one process-wide connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

pub trait ProductReader {
    /// Number of products matching `filter`, ignoring pagination.
    fn count_products(&self, filter: &Predicate) -> RepositoryResult<usize>;
    /// One page of products selected, ordered and windowed by `spec`.
    fn find_products(&self, spec: &QuerySpec) -> RepositoryResult<Vec<Product>>;
    /// Every stored product in storage order.
    fn list_products(&self) -> RepositoryResult<Vec<Product>>;
}

pub trait ProductWriter {
    fn create_products(&self, new_products: &[NewProduct]) -> RepositoryResult<usize>;
}

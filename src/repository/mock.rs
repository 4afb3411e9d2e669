//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::product::{NewProduct, Product};
use crate::domain::query::{Predicate, QuerySpec};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ProductReader, ProductWriter};

mock! {
    pub Repository {}

    impl ProductReader for Repository {
        fn count_products(&self, filter: &Predicate) -> RepositoryResult<usize>;
        fn find_products(&self, spec: &QuerySpec) -> RepositoryResult<Vec<Product>>;
        fn list_products(&self) -> RepositoryResult<Vec<Product>>;
    }

    impl ProductWriter for Repository {
        fn create_products(&self, new_products: &[NewProduct]) -> RepositoryResult<usize>;
    }
}

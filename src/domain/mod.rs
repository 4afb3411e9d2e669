//! Domain types used by the catalog services.

pub mod product;
pub mod query;

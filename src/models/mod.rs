//! Database models and configuration shared across the catalog.

pub mod config;
pub mod product;

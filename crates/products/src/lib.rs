//! Products domain module.
//!
//! This crate owns the product records and the in-memory store that holds
//! them. No IO, no HTTP.

pub mod product;
pub mod report;
pub mod store;

pub use product::{NewProduct, Product, ProductChanges};
pub use report::StockReport;
pub use store::{IdStrategy, InMemoryProductStore, ProductStore};

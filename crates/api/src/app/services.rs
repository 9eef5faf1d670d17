//! Service layer between the HTTP handlers and the product store.

use std::sync::Arc;

use estoque_core::{DomainError, DomainResult, Entity, ProductId};
use estoque_products::{NewProduct, Product, ProductChanges, ProductStore, StockReport};

/// Shared handle passed to every handler.
#[derive(Clone)]
pub struct AppServices {
    products: Arc<dyn ProductStore>,
}

impl AppServices {
    pub fn new(products: Arc<dyn ProductStore>) -> Self {
        Self { products }
    }

    pub fn products_create(&self, new: NewProduct) -> DomainResult<Product> {
        let product = self.products.create(new).inspect_err(log_rejection)?;
        tracing::info!(product_id = %product.id(), name = product.name(), "product created");
        Ok(product)
    }

    pub fn products_list(&self) -> Vec<Product> {
        self.products.list()
    }

    pub fn products_get(&self, id: &str) -> DomainResult<Product> {
        let id = parse_id(id)?;
        self.products.get(id).inspect_err(log_rejection)
    }

    pub fn products_update(&self, id: &str, changes: ProductChanges) -> DomainResult<Product> {
        let id = parse_id(id)?;
        let product = self.products.update(id, changes).inspect_err(log_rejection)?;
        tracing::info!(product_id = %id, "product updated");
        Ok(product)
    }

    pub fn products_delete(&self, id: &str) -> DomainResult<()> {
        let id = parse_id(id)?;
        self.products.delete(id).inspect_err(log_rejection)?;
        tracing::info!(product_id = %id, "product deleted");
        Ok(())
    }

    pub fn stock_report(&self) -> StockReport {
        self.products.report()
    }

    pub fn products_search(&self, query: Option<&str>) -> DomainResult<Vec<Product>> {
        self.products
            .search_by_name(query.unwrap_or_default())
            .inspect_err(log_rejection)
    }
}

fn parse_id(raw: &str) -> DomainResult<ProductId> {
    raw.parse().inspect_err(log_rejection)
}

fn log_rejection(err: &DomainError) {
    tracing::debug!(error = %err, "request rejected");
}

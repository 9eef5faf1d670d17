//! The product store: an insertion-ordered in-memory collection.

use std::str::FromStr;
use std::sync::{Arc, PoisonError, RwLock};

use estoque_core::{DomainError, DomainResult, Entity, ProductId};

use crate::product::{NewProduct, Product, ProductChanges};
use crate::report::StockReport;

pub const NOT_FOUND_MESSAGE: &str = "Produto não encontrado";
pub const MISSING_QUERY_MESSAGE: &str = "O parâmetro 'nome' é obrigatório na query string.";
pub const NO_MATCHES_MESSAGE: &str = "Nenhum produto encontrado com esse nome.";

/// How the store picks the id of a newly created product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    /// Id of the last stored product + 1, or 1 when empty.
    ///
    /// Deleting the tail and creating again reissues the deleted id.
    #[default]
    LastPlusOne,
    /// Highest id ever issued + 1. Ids are never reissued.
    Monotonic,
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "last-plus-one" => Ok(Self::LastPlusOne),
            "monotonic" => Ok(Self::Monotonic),
            other => Err(format!(
                "unknown id strategy {other:?} (expected last-plus-one or monotonic)"
            )),
        }
    }
}

/// Operations over the product collection.
///
/// Each call is atomic with respect to every other call on the same store.
pub trait ProductStore: Send + Sync {
    fn create(&self, new: NewProduct) -> DomainResult<Product>;
    /// All products in creation order.
    fn list(&self) -> Vec<Product>;
    fn get(&self, id: ProductId) -> DomainResult<Product>;
    fn update(&self, id: ProductId, changes: ProductChanges) -> DomainResult<Product>;
    fn delete(&self, id: ProductId) -> DomainResult<()>;
    fn report(&self) -> StockReport;
    /// Case-insensitive substring match on names, in store order.
    fn search_by_name(&self, query: &str) -> DomainResult<Vec<Product>>;
}

impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    fn create(&self, new: NewProduct) -> DomainResult<Product> {
        (**self).create(new)
    }

    fn list(&self) -> Vec<Product> {
        (**self).list()
    }

    fn get(&self, id: ProductId) -> DomainResult<Product> {
        (**self).get(id)
    }

    fn update(&self, id: ProductId, changes: ProductChanges) -> DomainResult<Product> {
        (**self).update(id, changes)
    }

    fn delete(&self, id: ProductId) -> DomainResult<()> {
        (**self).delete(id)
    }

    fn report(&self) -> StockReport {
        (**self).report()
    }

    fn search_by_name(&self, query: &str) -> DomainResult<Vec<Product>> {
        (**self).search_by_name(query)
    }
}

#[derive(Debug, Default)]
struct Inner {
    products: Vec<Product>,
    highest_issued: Option<ProductId>,
}

impl Inner {
    fn next_id(&self, strategy: IdStrategy) -> ProductId {
        let base = match strategy {
            IdStrategy::LastPlusOne => self.products.last().map(Entity::id),
            IdStrategy::Monotonic => self.highest_issued,
        };
        base.map_or(ProductId::first(), ProductId::next)
    }

    fn position(&self, id: ProductId) -> DomainResult<usize> {
        self.products
            .iter()
            .position(|p| p.id() == id)
            .ok_or_else(|| DomainError::not_found(NOT_FOUND_MESSAGE))
    }
}

/// In-memory store for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    inner: RwLock<Inner>,
    strategy: IdStrategy,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(strategy: IdStrategy) -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
            strategy,
        }
    }

    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    // No operation leaves the collection half-mutated, so a poisoned lock
    // still guards consistent data.
    fn read(&self) -> std::sync::RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ProductStore for InMemoryProductStore {
    fn create(&self, new: NewProduct) -> DomainResult<Product> {
        let (name, quantity, price) = new.validate()?;

        let mut inner = self.write();
        let id = inner.next_id(self.strategy);
        let product = Product::new(id, name, quantity, price);
        inner.products.push(product.clone());
        inner.highest_issued = inner.highest_issued.max(Some(id));

        tracing::debug!(product_id = %id, count = inner.products.len(), "product stored");
        Ok(product)
    }

    fn list(&self) -> Vec<Product> {
        self.read().products.clone()
    }

    fn get(&self, id: ProductId) -> DomainResult<Product> {
        let inner = self.read();
        let idx = inner.position(id)?;
        Ok(inner.products[idx].clone())
    }

    fn update(&self, id: ProductId, changes: ProductChanges) -> DomainResult<Product> {
        let mut inner = self.write();
        let idx = inner.position(id)?;
        let product = &mut inner.products[idx];
        changes.apply_to(product);
        Ok(product.clone())
    }

    fn delete(&self, id: ProductId) -> DomainResult<()> {
        let mut inner = self.write();
        let idx = inner.position(id)?;
        inner.products.remove(idx);
        Ok(())
    }

    fn report(&self) -> StockReport {
        StockReport::from_products(&self.read().products)
    }

    fn search_by_name(&self, query: &str) -> DomainResult<Vec<Product>> {
        if query.is_empty() {
            return Err(DomainError::validation(MISSING_QUERY_MESSAGE));
        }

        let needle = query.to_lowercase();
        let matches: Vec<Product> = self
            .read()
            .products
            .iter()
            .filter(|p| p.matches_name(&needle))
            .cloned()
            .collect();

        if matches.is_empty() {
            return Err(DomainError::empty_result(NO_MATCHES_MESSAGE));
        }
        Ok(matches)
    }
}

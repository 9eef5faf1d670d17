use crate::product::Product;

/// Aggregate figures over every stored product.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StockReport {
    pub total_count: usize,
    pub total_value: f64,
}

impl StockReport {
    pub fn from_products<'a>(products: impl IntoIterator<Item = &'a Product>) -> Self {
        products
            .into_iter()
            .fold(Self::default(), |acc, p| Self {
                total_count: acc.total_count + 1,
                total_value: acc.total_value + p.value(),
            })
    }
}

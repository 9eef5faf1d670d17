use estoque_core::{DomainError, DomainResult, Entity, ProductId};

pub const MISSING_FIELDS_MESSAGE: &str = "Nome, quantidade e preço são obrigatórios";

/// A stored inventory record.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    name: String,
    quantity: f64,
    price: f64,
}

impl Product {
    pub(crate) fn new(id: ProductId, name: String, quantity: f64, price: f64) -> Self {
        Self {
            id,
            name,
            quantity,
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Stock value of this record (`quantity * price`).
    pub fn value(&self) -> f64 {
        self.quantity * self.price
    }

    pub(crate) fn matches_name(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Input for creating a product. Every field is required and must be truthy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewProduct {
    pub name: Option<String>,
    pub quantity: Option<f64>,
    pub price: Option<f64>,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, quantity: f64, price: f64) -> Self {
        Self {
            name: Some(name.into()),
            quantity: Some(quantity),
            price: Some(price),
        }
    }

    /// Checks presence and truthiness of all three fields.
    ///
    /// A quantity or price of `0` counts as missing, same as an empty name.
    pub(crate) fn validate(self) -> DomainResult<(String, f64, f64)> {
        match (
            truthy_text(self.name),
            truthy_number(self.quantity),
            truthy_number(self.price),
        ) {
            (Some(name), Some(quantity), Some(price)) => Ok((name, quantity, price)),
            _ => Err(DomainError::validation(MISSING_FIELDS_MESSAGE)),
        }
    }
}

/// Whole-field replacements applied by an update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub quantity: Option<f64>,
    pub price: Option<f64>,
}

impl ProductChanges {
    /// Overwrite the truthy fields in place; the id is never touched.
    pub(crate) fn apply_to(self, product: &mut Product) {
        if let Some(name) = truthy_text(self.name) {
            product.name = name;
        }
        if let Some(quantity) = truthy_number(self.quantity) {
            product.quantity = quantity;
        }
        if let Some(price) = truthy_number(self.price) {
            product.price = price;
        }
    }
}

fn truthy_text(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn truthy_number(value: Option<f64>) -> Option<f64> {
    value.filter(|n| *n != 0.0 && !n.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pen() -> Product {
        Product::new(ProductId::first(), "Pen".to_string(), 10.0, 2.0)
    }

    #[test]
    fn validate_accepts_all_truthy_fields() {
        let (name, quantity, price) = NewProduct::new("Pen", 10.0, 2.5).validate().unwrap();
        assert_eq!(name, "Pen");
        assert_eq!(quantity, 10.0);
        assert_eq!(price, 2.5);
    }

    #[test]
    fn validate_treats_zero_and_empty_as_missing() {
        let cases = [
            NewProduct::new("", 1.0, 1.0),
            NewProduct::new("Pen", 0.0, 1.0),
            NewProduct::new("Pen", 1.0, 0.0),
            NewProduct::new("Pen", -0.0, 1.0),
            NewProduct::new("Pen", f64::NAN, 1.0),
            NewProduct {
                name: Some("Pen".to_string()),
                quantity: None,
                price: Some(1.0),
            },
            NewProduct::default(),
        ];

        for case in cases {
            let err = case.clone().validate().unwrap_err();
            assert_eq!(err, DomainError::validation(MISSING_FIELDS_MESSAGE), "{case:?}");
        }
    }

    #[test]
    fn validate_allows_negative_numbers() {
        assert!(NewProduct::new("Refund", -1.0, 3.0).validate().is_ok());
    }

    #[test]
    fn changes_overwrite_only_truthy_fields() {
        let mut product = pen();
        ProductChanges {
            name: Some(String::new()),
            quantity: Some(0.0),
            price: Some(3.5),
        }
        .apply_to(&mut product);

        assert_eq!(product.name(), "Pen");
        assert_eq!(product.quantity(), 10.0);
        assert_eq!(product.price(), 3.5);
        assert_eq!(product.id(), ProductId::first());
    }

    #[test]
    fn empty_changes_leave_product_untouched() {
        let mut product = pen();
        ProductChanges::default().apply_to(&mut product);
        assert_eq!(product, pen());
    }

    #[test]
    fn value_is_quantity_times_price() {
        assert_eq!(pen().value(), 20.0);
    }

    #[test]
    fn matches_name_is_substring_on_lowercased_name() {
        let product = Product::new(ProductId::first(), "Ballpoint PEN".to_string(), 1.0, 1.0);
        assert!(product.matches_name("pen"));
        assert!(product.matches_name("point p"));
        assert!(!product.matches_name("pencil"));
    }
}

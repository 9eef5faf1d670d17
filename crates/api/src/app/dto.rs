use serde::{Deserialize, Deserializer};
use serde_json::{Value, json};

use estoque_core::Entity;
use estoque_products::{NewProduct, Product, ProductChanges, StockReport};

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /produtos` and `PUT /produtos/:id`.
///
/// Field names are accepted in English or Portuguese. Each field is read on
/// its own: a value of the wrong type counts as not supplied for that field
/// only.
#[derive(Debug, Default, Deserialize)]
pub struct ProductRequest {
    #[serde(default, alias = "nome", deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, alias = "quantidade", deserialize_with = "lenient_number")]
    pub quantity: Option<f64>,
    #[serde(default, alias = "preco", deserialize_with = "lenient_number")]
    pub price: Option<f64>,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

/// Numbers, or strings holding a finite decimal number (`"5"`, `" 2.5 "`).
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    })
}

impl From<ProductRequest> for NewProduct {
    fn from(req: ProductRequest) -> Self {
        Self {
            name: req.name,
            quantity: req.quantity,
            price: req.price,
        }
    }
}

impl From<ProductRequest> for ProductChanges {
    fn from(req: ProductRequest) -> Self {
        Self {
            name: req.name,
            quantity: req.quantity,
            price: req.price,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub nome: Option<String>,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn product_to_json(p: &Product) -> Value {
    json!({
        "id": p.id().as_u64(),
        "name": p.name(),
        "quantity": number_to_json(p.quantity()),
        "price": number_to_json(p.price()),
    })
}

pub fn products_to_json(products: &[Product]) -> Value {
    Value::Array(products.iter().map(product_to_json).collect())
}

pub fn report_to_json(report: StockReport) -> Value {
    json!({
        "totalCount": report.total_count,
        "totalValue": number_to_json(report.total_value),
    })
}

/// Largest magnitude at which every integer is exactly representable in f64.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Integral values are written as JSON integers (`10`, not `10.0`).
pub fn number_to_json(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        return json!(n as i64);
    }
    serde_json::Number::from_f64(n)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_numbers_serialize_without_fraction() {
        assert_eq!(number_to_json(10.0), json!(10));
        assert_eq!(number_to_json(-3.0), json!(-3));
        assert_eq!(number_to_json(2.5), json!(2.5));
        assert_eq!(number_to_json(1e300), json!(1e300));
        assert_eq!(number_to_json(f64::INFINITY), Value::Null);
    }

    #[test]
    fn request_accepts_portuguese_aliases() {
        let req: ProductRequest =
            serde_json::from_value(json!({"nome": "Caneta", "quantidade": 3, "preco": 1.5})).unwrap();
        assert_eq!(req.name.as_deref(), Some("Caneta"));
        assert_eq!(req.quantity, Some(3.0));
        assert_eq!(req.price, Some(1.5));
    }

    #[test]
    fn wrongly_typed_field_does_not_void_the_others() {
        let req: ProductRequest = serde_json::from_value(
            json!({"name": "Renamed", "quantity": {"n": 5}, "price": [1]}),
        )
        .unwrap();
        assert_eq!(req.name.as_deref(), Some("Renamed"));
        assert!(req.quantity.is_none() && req.price.is_none());

        let req: ProductRequest = serde_json::from_value(json!({"name": 7, "price": 3})).unwrap();
        assert!(req.name.is_none());
        assert_eq!(req.price, Some(3.0));
    }

    #[test]
    fn numeric_strings_are_read_as_numbers() {
        let req: ProductRequest =
            serde_json::from_value(json!({"quantity": "5", "price": " 2.5 "})).unwrap();
        assert_eq!(req.quantity, Some(5.0));
        assert_eq!(req.price, Some(2.5));

        for raw in ["abc", "", "NaN", "inf"] {
            let req: ProductRequest = serde_json::from_value(json!({"quantity": raw})).unwrap();
            assert!(req.quantity.is_none(), "{raw:?}");
        }
    }

    #[test]
    fn request_fields_are_optional() {
        let req: ProductRequest = serde_json::from_value(json!({"price": null})).unwrap();
        assert!(req.name.is_none() && req.quantity.is_none() && req.price.is_none());
    }

    #[test]
    fn report_uses_camel_case_keys() {
        let body = report_to_json(StockReport {
            total_count: 2,
            total_value: 120.0,
        });
        assert_eq!(body, json!({"totalCount": 2, "totalValue": 120}));
    }
}

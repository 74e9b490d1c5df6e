//! Product model

use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::ids::ProductId;

/// A product as returned by `GET /products`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned identifier
    #[serde(rename = "_id")]
    pub id: ProductId,

    /// Stock keeping unit
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub sku: String,

    /// Display name
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub name: String,

    /// Unit price (IDR); shown raw when not numeric
    #[serde(default)]
    pub price: Amount,
}

/// Body of `POST /products`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub sku: String,
    pub name: String,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize() {
        let product: Product = serde_json::from_value(json!({
            "_id": "p1",
            "sku": "SKU-001",
            "name": "Produk A",
            "price": 15000
        }))
        .unwrap();
        assert_eq!(product.id, ProductId::new("p1"));
        assert_eq!(product.price.as_number(), Some(15000.0));
    }

    #[test]
    fn test_non_numeric_price_is_kept() {
        let product: Product = serde_json::from_value(json!({
            "_id": "p2",
            "sku": "SKU-002",
            "name": "Produk B",
            "price": "call us"
        }))
        .unwrap();
        assert_eq!(product.price.display(), "call us");
    }

    #[test]
    fn test_missing_sku_and_null_name_are_blank() {
        let products: Vec<Product> = serde_json::from_value(json!([
            {"_id": "p1", "sku": "SKU-001", "name": "Produk A", "price": 15000},
            {"_id": "p2", "name": null, "price": 2500}
        ]))
        .unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].sku, "");
        assert_eq!(products[1].name, "");
        assert_eq!(products[1].price.as_number(), Some(2500.0));
    }

    #[test]
    fn test_payload_price_is_number() {
        let payload = NewProduct {
            sku: "SKU-001".into(),
            name: "Produk A".into(),
            price: 15000.0,
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"sku": "SKU-001", "name": "Produk A", "price": 15000.0})
        );
    }
}

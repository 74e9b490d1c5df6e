//! Invoice model
//!
//! Invoices are created from a customer and a list of line items. The total
//! is computed by the backend; the client only displays it.

use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::ids::{CustomerId, InvoiceId, ProductId};

/// Status string the backend uses for settled invoices
pub const STATUS_PAID: &str = "paid";

/// One stored line of an invoice
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InvoiceLine {
    #[serde(default)]
    pub product_id: Option<ProductId>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(default)]
    pub quantity: Amount,
    #[serde(default)]
    pub price: Amount,
}

/// An invoice as returned by `GET /invoices`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Server-assigned identifier
    #[serde(rename = "_id")]
    pub id: InvoiceId,

    /// Customer the invoice was issued to
    #[serde(default)]
    pub customer_id: Option<CustomerId>,

    /// Line items, in order
    #[serde(default)]
    pub items: Option<Vec<InvoiceLine>>,

    /// Total computed by the backend
    #[serde(default)]
    pub total: Amount,

    /// Payment status, e.g. "paid"
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub status: String,
}

impl Invoice {
    /// Number of line items (0 when the backend sent none)
    pub fn item_count(&self) -> usize {
        self.items.as_ref().map_or(0, Vec::len)
    }

    /// Whether the invoice is settled
    pub fn is_paid(&self) -> bool {
        self.status == STATUS_PAID
    }
}

/// One line of the `POST /invoices` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewInvoiceItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    pub name: String,
    pub quantity: f64,
    pub price: f64,
}

/// Body of `POST /invoices`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewInvoice {
    pub customer_id: CustomerId,
    pub items: Vec<NewInvoiceItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_paid_invoice() {
        let invoice: Invoice = serde_json::from_value(json!({
            "_id": "i1",
            "customer_id": "c1",
            "items": [
                {"product_id": "p1", "name": "Produk A", "quantity": 1, "price": 15000},
                {"name": "Ongkir", "quantity": 1, "price": 15000}
            ],
            "total": 30000,
            "status": "paid"
        }))
        .unwrap();

        assert!(invoice.is_paid());
        assert_eq!(invoice.item_count(), 2);
        assert_eq!(invoice.total.display(), "30.000");
        assert_eq!(invoice.customer_id, Some(CustomerId::new("c1")));
    }

    #[test]
    fn test_missing_fields_default() {
        let invoice: Invoice = serde_json::from_value(json!({"_id": "i2"})).unwrap();
        assert_eq!(invoice.item_count(), 0);
        assert!(invoice.total.is_missing());
        assert!(!invoice.is_paid());
    }

    #[test]
    fn test_null_status_keeps_the_rest_of_the_list() {
        let invoices: Vec<Invoice> = serde_json::from_value(json!([
            {"_id": "i1", "customer_id": "c1", "total": 30000, "status": "paid"},
            {
                "_id": "i2",
                "customer_id": "c1",
                "items": [{"name": null, "quantity": 1, "price": 500}],
                "total": 500,
                "status": null
            }
        ]))
        .unwrap();
        assert_eq!(invoices.len(), 2);
        assert!(invoices[0].is_paid());
        assert_eq!(invoices[1].status, "");
        assert!(!invoices[1].is_paid());
        assert_eq!(invoices[1].items.as_ref().unwrap()[0].name, "");
    }

    #[test]
    fn test_custom_item_omits_product_id() {
        let payload = NewInvoice {
            customer_id: CustomerId::new("c1"),
            items: vec![NewInvoiceItem {
                product_id: None,
                name: "Jasa pasang".into(),
                quantity: 2.0,
                price: 50000.0,
            }],
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "customer_id": "c1",
                "items": [{"name": "Jasa pasang", "quantity": 2.0, "price": 50000.0}]
            })
        );
    }
}

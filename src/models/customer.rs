//! Customer model

use serde::{Deserialize, Serialize};

use super::ids::CustomerId;

/// A customer as returned by `GET /customers`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Server-assigned identifier
    #[serde(rename = "_id")]
    pub id: CustomerId,

    /// Customer name; blank when the backend has none
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub name: String,

    /// Contact email
    #[serde(default)]
    pub email: Option<String>,

    /// Contact phone number
    #[serde(default)]
    pub phone: Option<String>,

    /// Creation timestamp as sent by the backend
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of `POST /customers`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_minimal() {
        let customer: Customer =
            serde_json::from_value(json!({"_id": "c1", "name": "PT Contoh Jaya"})).unwrap();
        assert_eq!(customer.id, CustomerId::new("c1"));
        assert_eq!(customer.email, None);
        assert_eq!(customer.created_at, None);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let customer: Customer = serde_json::from_value(json!({
            "_id": "c2",
            "name": "CV Maju",
            "email": null,
            "phone": "0812",
            "npwp": "01.234.567.8-901.000"
        }))
        .unwrap();
        assert_eq!(customer.phone.as_deref(), Some("0812"));
        assert_eq!(customer.email, None);
    }

    #[test]
    fn test_null_name_does_not_fail_the_list() {
        let customers: Vec<Customer> = serde_json::from_value(json!([
            {"_id": "c1", "name": "PT Contoh Jaya"},
            {"_id": "c2", "name": null},
            {"_id": "c3"}
        ]))
        .unwrap();
        assert_eq!(customers.len(), 3);
        assert_eq!(customers[1].name, "");
        assert_eq!(customers[2].name, "");
    }

    #[test]
    fn test_payload_shape() {
        let payload = NewCustomer {
            name: "PT Contoh Jaya".into(),
            email: String::new(),
            phone: "0812".into(),
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"name": "PT Contoh Jaya", "email": "", "phone": "0812"})
        );
    }
}

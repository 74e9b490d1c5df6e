//! Typed access to the three REST resources
//!
//! List helpers decode the response array into models; a body of the wrong
//! shape is a `Decode` error. Create helpers return the raw response, which
//! the panels only log.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::backend::Backend;
use crate::error::{ErpError, ErpResult};
use crate::models::{Customer, Invoice, NewCustomer, NewInvoice, NewProduct, Product};

pub const CUSTOMERS_PATH: &str = "/customers";
pub const PRODUCTS_PATH: &str = "/products";
pub const INVOICES_PATH: &str = "/invoices";

async fn list<B, T>(backend: &B, path: &str, resource: &'static str) -> ErpResult<Vec<T>>
where
    B: Backend,
    T: DeserializeOwned,
{
    let body = backend.get(path).await?;
    serde_json::from_value(body).map_err(|e| ErpError::decode(resource, e.to_string()))
}

async fn create<B, T>(backend: &B, path: &str, payload: &T) -> ErpResult<Value>
where
    B: Backend,
    T: Serialize,
{
    let body = serde_json::to_value(payload)?;
    backend.post(path, body).await
}

/// `GET /customers`
pub async fn list_customers<B: Backend>(backend: &B) -> ErpResult<Vec<Customer>> {
    list(backend, CUSTOMERS_PATH, "customers").await
}

/// `POST /customers`
pub async fn create_customer<B: Backend>(backend: &B, payload: &NewCustomer) -> ErpResult<Value> {
    create(backend, CUSTOMERS_PATH, payload).await
}

/// `GET /products`
pub async fn list_products<B: Backend>(backend: &B) -> ErpResult<Vec<Product>> {
    list(backend, PRODUCTS_PATH, "products").await
}

/// `POST /products`
pub async fn create_product<B: Backend>(backend: &B, payload: &NewProduct) -> ErpResult<Value> {
    create(backend, PRODUCTS_PATH, payload).await
}

/// `GET /invoices`
pub async fn list_invoices<B: Backend>(backend: &B) -> ErpResult<Vec<Invoice>> {
    list(backend, INVOICES_PATH, "invoices").await
}

/// `POST /invoices`
pub async fn create_invoice<B: Backend>(backend: &B, payload: &NewInvoice) -> ErpResult<Value> {
    create(backend, INVOICES_PATH, payload).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{Call, FakeBackend};
    use serde_json::json;

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(future)
    }

    #[test]
    fn test_list_decodes_models() {
        let backend = FakeBackend::new();
        backend.on_get(
            PRODUCTS_PATH,
            json!([{"_id": "p1", "sku": "SKU-001", "name": "Produk A", "price": 15000}]),
        );

        let products = block_on(list_products(&backend)).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Produk A");
        assert_eq!(backend.calls(), vec![Call::get(PRODUCTS_PATH)]);
    }

    #[test]
    fn test_wrong_shape_is_decode_error() {
        let backend = FakeBackend::new();
        backend.on_get(CUSTOMERS_PATH, json!({"detail": "Not Found"}));

        let err = block_on(list_customers(&backend)).unwrap_err();
        assert!(matches!(err, ErpError::Decode { resource: "customers", .. }));
    }

    #[test]
    fn test_create_posts_payload() {
        let backend = FakeBackend::new();
        let payload = NewProduct {
            sku: "SKU-001".into(),
            name: "Produk A".into(),
            price: 15000.0,
        };

        block_on(create_product(&backend, &payload)).unwrap();
        assert_eq!(
            backend.calls(),
            vec![Call::post(
                PRODUCTS_PATH,
                json!({"sku": "SKU-001", "name": "Produk A", "price": 15000.0})
            )]
        );
    }
}

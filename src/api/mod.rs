//! REST API client
//!
//! `Backend` is the seam the panels are written against. `HttpBackend` is the
//! production implementation; the resource helpers add typed decoding on top.

pub mod backend;
pub mod client;
pub mod resources;

#[cfg(test)]
pub(crate) mod fake;

pub use backend::Backend;
pub use client::HttpBackend;
pub use resources::{
    create_customer, create_invoice, create_product, list_customers, list_invoices,
    list_products, CUSTOMERS_PATH, INVOICES_PATH, PRODUCTS_PATH,
};

//! Resource models for Linqkeun
//!
//! These are snapshots of records owned by the backend: customers, products
//! and invoices, plus the request bodies used to create them.

pub mod amount;
pub mod customer;
pub mod ids;
pub mod invoice;
pub mod product;

pub use amount::{coerce_number, Amount};
pub use customer::{Customer, NewCustomer};
pub use ids::{CustomerId, InvoiceId, ProductId};
pub use invoice::{Invoice, InvoiceLine, NewInvoice, NewInvoiceItem};
pub use product::{NewProduct, Product};

use serde::{Deserialize, Deserializer};

/// Deserialize a field that the backend may send as `null`, using the
/// type's default in that case. Pair with `#[serde(default)]` so a missing
/// key is accepted too.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

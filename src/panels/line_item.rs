//! Draft invoice line items
//!
//! A line item lives only on the client until the invoice is submitted. It
//! is either linked to a catalogue product or entered by hand. Quantity and
//! price are kept exactly as typed; they are coerced to numbers for the
//! subtotal and when the payload is built.

use super::field::TextField;
use crate::models::amount::number_to_field;
use crate::models::{coerce_number, Amount, NewInvoiceItem, Product, ProductId};

/// Where a line item's name and price came from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ItemSource {
    /// Copied from a catalogue product
    Linked(ProductId),
    /// Typed in by hand
    #[default]
    Custom,
}

/// A partial update for a line item; `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub source: Option<ItemSource>,
    pub name: Option<String>,
    pub quantity: Option<String>,
    pub price: Option<String>,
}

impl ItemPatch {
    pub fn name(value: impl Into<String>) -> Self {
        Self {
            name: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn quantity(value: impl Into<String>) -> Self {
        Self {
            quantity: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn price(value: impl Into<String>) -> Self {
        Self {
            price: Some(value.into()),
            ..Self::default()
        }
    }
}

/// One row of the invoice draft
#[derive(Debug, Clone, PartialEq)]
pub struct LineItemDraft {
    pub source: ItemSource,
    pub name: TextField,
    pub quantity: TextField,
    pub price: TextField,
}

impl Default for LineItemDraft {
    fn default() -> Self {
        Self::blank()
    }
}

impl LineItemDraft {
    /// A fresh custom item: no name, quantity 1, price 0
    pub fn blank() -> Self {
        Self {
            source: ItemSource::Custom,
            name: TextField::new(),
            quantity: TextField::numeric().with_content("1"),
            price: TextField::numeric().with_content("0"),
        }
    }

    /// The linked product, if any
    pub fn product_id(&self) -> Option<&ProductId> {
        match &self.source {
            ItemSource::Linked(id) => Some(id),
            ItemSource::Custom => None,
        }
    }

    /// quantity × price, with non-numeric input counted as 0
    pub fn subtotal(&self) -> f64 {
        coerce_number(self.quantity.value()) * coerce_number(self.price.value())
    }

    /// Merge a partial update into this item
    pub fn apply(&mut self, patch: ItemPatch) {
        if let Some(source) = patch.source {
            self.source = source;
        }
        if let Some(name) = patch.name {
            self.name.set(name);
        }
        if let Some(quantity) = patch.quantity {
            self.quantity.set(quantity);
        }
        if let Some(price) = patch.price {
            self.price.set(price);
        }
    }

    /// Link to `product_id`, copying the product's name and price
    ///
    /// When the product is not in the catalogue the id is still linked and
    /// the name and price are reset.
    pub fn link(&mut self, product_id: ProductId, product: Option<&Product>) {
        let (name, price) = match product {
            Some(p) => (p.name.clone(), price_for_field(&p.price)),
            None => (String::new(), "0".to_string()),
        };
        self.apply(ItemPatch {
            source: Some(ItemSource::Linked(product_id)),
            name: Some(name),
            price: Some(price),
            quantity: None,
        });
    }

    /// Switch to a hand-entered item, keeping the current name and price
    pub fn make_custom(&mut self) {
        self.source = ItemSource::Custom;
    }

    /// Request body for this item, with numbers coerced
    pub fn to_payload(&self) -> NewInvoiceItem {
        NewInvoiceItem {
            product_id: self.product_id().cloned(),
            name: self.name.value().to_string(),
            quantity: coerce_number(self.quantity.value()),
            price: coerce_number(self.price.value()),
        }
    }
}

/// Text to put in the price field when a product is picked
fn price_for_field(price: &Amount) -> String {
    match price {
        Amount::Number(n) => number_to_field(*n),
        other if other.is_missing() => "0".to_string(),
        other => other.display(),
    }
}

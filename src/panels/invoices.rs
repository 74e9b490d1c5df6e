//! Finance panel: invoice drafting and the list of issued invoices
//!
//! The draft is a customer plus an ordered list of line items. Items can be
//! linked to catalogue products or typed in by hand. Nothing is stored until
//! the invoice is submitted; after the POST completes the draft is cleared
//! and everything is reloaded from the backend.

use tracing::{debug, warn};

use super::effects::{Effects, InvoiceData, OutcomeKind};
use super::field::TextField;
use super::line_item::{ItemPatch, LineItemDraft};
use super::mount::{Mount, MountId};
use crate::api::{self, Backend};
use crate::models::{Customer, CustomerId, Invoice, NewInvoice, Product, ProductId};

/// Columns of a line item row, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Product,
    Name,
    Quantity,
    Price,
}

impl ItemField {
    fn next(self) -> Option<Self> {
        match self {
            Self::Product => Some(Self::Name),
            Self::Name => Some(Self::Quantity),
            Self::Quantity => Some(Self::Price),
            Self::Price => None,
        }
    }

    fn prev(self) -> Option<Self> {
        match self {
            Self::Product => None,
            Self::Name => Some(Self::Product),
            Self::Quantity => Some(Self::Name),
            Self::Price => Some(Self::Quantity),
        }
    }
}

/// Which part of the draft has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvoiceFocus {
    #[default]
    Customer,
    Item(usize, ItemField),
}

/// State of a mounted invoices panel
#[derive(Debug)]
pub struct InvoicesPanel {
    mount: Mount,
    pub products: Vec<Product>,
    pub customers: Vec<Customer>,
    pub invoices: Vec<Invoice>,
    pub items: Vec<LineItemDraft>,
    pub customer_id: Option<CustomerId>,
    pub focus: InvoiceFocus,
    pub load_error: Option<String>,
    pub submit_error: Option<String>,
    submit_error_load: u64,
}

impl Default for InvoicesPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl InvoicesPanel {
    pub fn new() -> Self {
        Self {
            mount: Mount::new(),
            products: Vec::new(),
            customers: Vec::new(),
            invoices: Vec::new(),
            items: Vec::new(),
            customer_id: None,
            focus: InvoiceFocus::Customer,
            load_error: None,
            submit_error: None,
            submit_error_load: 0,
        }
    }

    /// Create the panel and start its initial load
    pub fn mount<B: Backend>(effects: &Effects<B>) -> Self {
        let mut panel = Self::new();
        panel.load(effects);
        panel
    }

    pub fn mount_id(&self) -> MountId {
        self.mount.id()
    }

    pub fn in_flight(&self) -> usize {
        self.mount.in_flight()
    }

    /// Fetch products, customers and invoices together
    ///
    /// The three lists are replaced together or not at all.
    pub fn load<B: Backend>(&mut self, effects: &Effects<B>) {
        let seq = self.mount.next_load();
        effects.spawn(&mut self.mount, move |backend| async move {
            let backend = backend.as_ref();
            let result = tokio::try_join!(
                api::list_products(backend),
                api::list_customers(backend),
                api::list_invoices(backend),
            )
            .map(|(products, customers, invoices)| InvoiceData {
                products,
                customers,
                invoices,
            });
            OutcomeKind::InvoicesLoaded { seq, result }
        });
    }

    /// Append a blank custom item and return its index
    pub fn add_item(&mut self) -> usize {
        self.items.push(LineItemDraft::blank());
        self.items.len() - 1
    }

    /// Merge `patch` into the item at `index`
    pub fn update_item(&mut self, index: usize, patch: ItemPatch) {
        if let Some(item) = self.items.get_mut(index) {
            item.apply(patch);
        }
    }

    /// Remove the item at `index`, shifting later items down
    pub fn remove_item(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }
        self.items.remove(index);

        if let InvoiceFocus::Item(at, field) = self.focus {
            self.focus = if self.items.is_empty() {
                InvoiceFocus::Customer
            } else if at > index || at >= self.items.len() {
                InvoiceFocus::Item(at.saturating_sub(1), field)
            } else {
                InvoiceFocus::Item(at, field)
            };
        }
    }

    /// Link the item to a product, or switch it to custom with `None`
    pub fn select_product(&mut self, index: usize, product_id: Option<&ProductId>) {
        let Some(item) = self.items.get_mut(index) else {
            return;
        };
        match product_id {
            Some(id) => {
                let product = self.products.iter().find(|p| &p.id == id);
                item.link(id.clone(), product);
            }
            None => item.make_custom(),
        }
    }

    /// Step the item's product selector through "Custom" and the catalogue
    pub fn cycle_product(&mut self, index: usize, forward: bool) {
        let Some(item) = self.items.get(index) else {
            return;
        };
        let options = self.products.len() + 1;
        let current = item
            .product_id()
            .and_then(|id| self.products.iter().position(|p| &p.id == id))
            .map_or(0, |pos| pos + 1);
        let next = step(current, options, forward);

        let product_id = next
            .checked_sub(1)
            .and_then(|pos| self.products.get(pos))
            .map(|p| p.id.clone());
        self.select_product(index, product_id.as_ref());
    }

    pub fn select_customer(&mut self, customer_id: Option<CustomerId>) {
        self.customer_id = customer_id;
    }

    /// Step the customer selector through "Select customer" and the list
    pub fn cycle_customer(&mut self, forward: bool) {
        let options = self.customers.len() + 1;
        let current = self
            .customer_id
            .as_ref()
            .and_then(|id| self.customers.iter().position(|c| &c.id == id))
            .map_or(0, |pos| pos + 1);
        let next = step(current, options, forward);

        self.customer_id = next
            .checked_sub(1)
            .and_then(|pos| self.customers.get(pos))
            .map(|c| c.id.clone());
    }

    /// The selected customer, if it is in the loaded list
    pub fn selected_customer(&self) -> Option<&Customer> {
        let id = self.customer_id.as_ref()?;
        self.customers.iter().find(|c| &c.id == id)
    }

    /// Name shown for a linked product, or None for custom items
    pub fn product_label(&self, index: usize) -> Option<&str> {
        let id = self.items.get(index)?.product_id()?;
        Some(
            self.products
                .iter()
                .find(|p| &p.id == id)
                .map_or(id.as_str(), |p| p.name.as_str()),
        )
    }

    /// A customer is chosen and there is at least one item
    pub fn can_submit(&self) -> bool {
        self.customer_id.is_some() && !self.items.is_empty()
    }

    /// Create the invoice; returns false when submission is disabled
    pub fn submit<B: Backend>(&mut self, effects: &Effects<B>) -> bool {
        let Some(customer_id) = self.customer_id.clone().filter(|_| !self.items.is_empty())
        else {
            return false;
        };

        let payload = NewInvoice {
            customer_id,
            items: self.items.iter().map(LineItemDraft::to_payload).collect(),
        };
        self.submit_error = None;
        effects.spawn(&mut self.mount, move |backend| async move {
            OutcomeKind::InvoiceCreated(api::create_invoice(backend.as_ref(), &payload).await)
        });
        true
    }

    /// Apply a request outcome addressed to this panel
    pub fn apply<B: Backend>(&mut self, kind: OutcomeKind, effects: &Effects<B>) {
        match kind {
            OutcomeKind::InvoicesLoaded { seq, result } => {
                if !self.mount.is_latest_load(seq) {
                    debug!(seq, "Dropping superseded invoices load");
                    return;
                }
                match result {
                    Ok(data) => {
                        self.products = data.products;
                        self.customers = data.customers;
                        self.invoices = data.invoices;
                        self.load_error = None;
                        if seq > self.submit_error_load {
                            self.submit_error = None;
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, "Failed to load invoice data");
                        self.load_error = Some(e.to_string());
                    }
                }
            }
            OutcomeKind::InvoiceCreated(result) => {
                match result {
                    Ok(body) => debug!(%body, "Invoice created"),
                    Err(e) => {
                        warn!(error = %e, "Failed to create invoice");
                        self.submit_error = Some(e.to_string());
                    }
                }
                self.clear_draft();
                self.load(effects);
                if self.submit_error.is_some() {
                    // survives the reload above, cleared by a later one
                    self.submit_error_load = self.mount.latest_load();
                }
            }
            other => debug!(?other, "Invoices panel ignoring outcome"),
        }
    }

    fn clear_draft(&mut self) {
        self.items.clear();
        self.customer_id = None;
        self.focus = InvoiceFocus::Customer;
    }

    /// Move focus forward through the customer selector and every item cell
    pub fn next_focus(&mut self) {
        self.focus = match self.focus {
            InvoiceFocus::Customer if self.items.is_empty() => InvoiceFocus::Customer,
            InvoiceFocus::Customer => InvoiceFocus::Item(0, ItemField::Product),
            InvoiceFocus::Item(i, field) => match field.next() {
                Some(next) => InvoiceFocus::Item(i, next),
                None if i + 1 < self.items.len() => InvoiceFocus::Item(i + 1, ItemField::Product),
                None => InvoiceFocus::Customer,
            },
        };
    }

    /// Move focus backward, wrapping to the last item's price
    pub fn prev_focus(&mut self) {
        self.focus = match self.focus {
            InvoiceFocus::Customer => match self.items.len() {
                0 => InvoiceFocus::Customer,
                len => InvoiceFocus::Item(len - 1, ItemField::Price),
            },
            InvoiceFocus::Item(i, field) => match field.prev() {
                Some(prev) => InvoiceFocus::Item(i, prev),
                None if i > 0 => InvoiceFocus::Item(i - 1, ItemField::Price),
                None => InvoiceFocus::Customer,
            },
        };
    }

    /// Index of the item that has focus
    pub fn focused_item(&self) -> Option<usize> {
        match self.focus {
            InvoiceFocus::Item(i, _) => Some(i),
            InvoiceFocus::Customer => None,
        }
    }

    /// Whether the customer or a product selector has focus
    pub fn selector_focused(&self) -> bool {
        matches!(
            self.focus,
            InvoiceFocus::Customer | InvoiceFocus::Item(_, ItemField::Product)
        )
    }

    /// The focused text cell, or None when a selector has focus
    pub fn focused_input(&mut self) -> Option<&mut TextField> {
        let InvoiceFocus::Item(i, field) = self.focus else {
            return None;
        };
        let item = self.items.get_mut(i)?;
        match field {
            ItemField::Product => None,
            ItemField::Name => Some(&mut item.name),
            ItemField::Quantity => Some(&mut item.quantity),
            ItemField::Price => Some(&mut item.price),
        }
    }

    /// Cycle whichever selector has focus
    pub fn cycle_selection(&mut self, forward: bool) {
        match self.focus {
            InvoiceFocus::Customer => self.cycle_customer(forward),
            InvoiceFocus::Item(i, ItemField::Product) => self.cycle_product(i, forward),
            InvoiceFocus::Item(..) => {}
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        self.submit_error.as_deref().or(self.load_error.as_deref())
    }
}

fn step(current: usize, len: usize, forward: bool) -> usize {
    if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    }
}

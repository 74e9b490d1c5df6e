//! Resource panels and the tabs that host them
//!
//! Panels hold all client state and know nothing about the terminal. Each
//! resource panel loads its data when mounted, reloads after every mutation,
//! and is dropped when its tab is left.

pub mod customers;
pub mod effects;
pub mod field;
pub mod invoices;
pub mod line_item;
pub mod mount;
pub mod products;

pub use customers::{CustomerField, CustomersPanel};
pub use effects::{Deliver, Effects, InvoiceData, Outcome, OutcomeKind};
pub use field::TextField;
pub use invoices::{InvoiceFocus, InvoicesPanel, ItemField};
pub use line_item::{ItemPatch, ItemSource, LineItemDraft};
pub use mount::{Mount, MountId};
pub use products::{ProductField, ProductsPanel};

use tracing::debug;

use crate::api::Backend;

/// Top-level navigation tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Customers,
    Products,
    Invoices,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Overview, Tab::Customers, Tab::Products, Tab::Invoices];

    /// Label shown in the tab bar
    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Customers => "Sales & CRM",
            Self::Products => "Inventory",
            Self::Invoices => "Finance (Invoices)",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::Overview => 0,
            Self::Customers => 1,
            Self::Products => 2,
            Self::Invoices => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// The panel currently mounted by the shell
#[derive(Debug)]
pub enum Panel {
    Overview,
    Customers(CustomersPanel),
    Products(ProductsPanel),
    Invoices(InvoicesPanel),
}

impl Panel {
    /// Mount the panel for `tab`, starting its initial load
    pub fn mount<B: Backend>(tab: Tab, effects: &Effects<B>) -> Self {
        match tab {
            Tab::Overview => Self::Overview,
            Tab::Customers => Self::Customers(CustomersPanel::mount(effects)),
            Tab::Products => Self::Products(ProductsPanel::mount(effects)),
            Tab::Invoices => Self::Invoices(InvoicesPanel::mount(effects)),
        }
    }

    pub fn tab(&self) -> Tab {
        match self {
            Self::Overview => Tab::Overview,
            Self::Customers(_) => Tab::Customers,
            Self::Products(_) => Tab::Products,
            Self::Invoices(_) => Tab::Invoices,
        }
    }

    /// Id outcomes must carry to be applied; the overview issues no requests
    pub fn mount_id(&self) -> Option<MountId> {
        match self {
            Self::Overview => None,
            Self::Customers(p) => Some(p.mount_id()),
            Self::Products(p) => Some(p.mount_id()),
            Self::Invoices(p) => Some(p.mount_id()),
        }
    }

    /// Reload the panel's data
    pub fn refresh<B: Backend>(&mut self, effects: &Effects<B>) {
        match self {
            Self::Overview => {}
            Self::Customers(p) => p.load(effects),
            Self::Products(p) => p.load(effects),
            Self::Invoices(p) => p.load(effects),
        }
    }

    /// Trigger the panel's primary action; returns whether a request was sent
    pub fn submit<B: Backend>(&mut self, effects: &Effects<B>) -> bool {
        match self {
            Self::Overview => false,
            Self::Customers(p) => p.add(effects),
            Self::Products(p) => p.add(effects),
            Self::Invoices(p) => p.submit(effects),
        }
    }

    /// Latest error to show in the panel's indicator line
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Overview => None,
            Self::Customers(p) => p.error_message(),
            Self::Products(p) => p.error_message(),
            Self::Invoices(p) => p.error_message(),
        }
    }

    /// Apply an outcome if it belongs to this panel instance
    ///
    /// Returns false when the outcome was addressed to a panel that has
    /// since been unmounted.
    pub fn apply<B: Backend>(&mut self, outcome: Outcome, effects: &Effects<B>) -> bool {
        if self.mount_id() != Some(outcome.mount) {
            debug!(mount = ?outcome.mount, "Dropping outcome for unmounted panel");
            return false;
        }
        match self {
            Self::Overview => {}
            Self::Customers(p) => p.apply(outcome.kind, effects),
            Self::Products(p) => p.apply(outcome.kind, effects),
            Self::Invoices(p) => p.apply(outcome.kind, effects),
        }
        true
    }
}

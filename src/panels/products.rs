//! Inventory panel: product catalogue and creation form

use tracing::{debug, warn};

use super::effects::{Effects, OutcomeKind};
use super::field::TextField;
use super::mount::{Mount, MountId};
use crate::api::{self, Backend};
use crate::models::{coerce_number, NewProduct, Product};

/// Initial content of the price field
pub const DEFAULT_PRICE: &str = "0";

/// Fields of the product form, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductField {
    #[default]
    Sku,
    Name,
    Price,
}

impl ProductField {
    pub fn next(self) -> Self {
        match self {
            Self::Sku => Self::Name,
            Self::Name => Self::Price,
            Self::Price => Self::Sku,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Sku => Self::Price,
            Self::Name => Self::Sku,
            Self::Price => Self::Name,
        }
    }
}

/// State of a mounted products panel
#[derive(Debug)]
pub struct ProductsPanel {
    mount: Mount,
    pub products: Vec<Product>,
    pub sku: TextField,
    pub name: TextField,
    pub price: TextField,
    pub focused_field: ProductField,
    pub load_error: Option<String>,
    pub submit_error: Option<String>,
    submit_error_load: u64,
}

impl Default for ProductsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductsPanel {
    pub fn new() -> Self {
        Self {
            mount: Mount::new(),
            products: Vec::new(),
            sku: TextField::new(),
            name: TextField::new(),
            price: TextField::numeric().with_content(DEFAULT_PRICE),
            focused_field: ProductField::Sku,
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

    /// Fetch the product list
    pub fn load<B: Backend>(&mut self, effects: &Effects<B>) {
        let seq = self.mount.next_load();
        effects.spawn(&mut self.mount, move |backend| async move {
            let result = api::list_products(backend.as_ref()).await;
            OutcomeKind::ProductsLoaded { seq, result }
        });
    }

    /// Submit the form; returns false unless both SKU and name are set
    pub fn add<B: Backend>(&mut self, effects: &Effects<B>) -> bool {
        if self.sku.is_empty() || self.name.is_empty() {
            return false;
        }

        let payload = NewProduct {
            sku: self.sku.value().to_string(),
            name: self.name.value().to_string(),
            price: coerce_number(self.price.value()),
        };
        self.submit_error = None;
        effects.spawn(&mut self.mount, move |backend| async move {
            OutcomeKind::ProductCreated(api::create_product(backend.as_ref(), &payload).await)
        });
        true
    }

    /// Apply a request outcome addressed to this panel
    pub fn apply<B: Backend>(&mut self, kind: OutcomeKind, effects: &Effects<B>) {
        match kind {
            OutcomeKind::ProductsLoaded { seq, result } => {
                if !self.mount.is_latest_load(seq) {
                    debug!(seq, "Dropping superseded products load");
                    return;
                }
                match result {
                    Ok(products) => {
                        self.products = products;
                        self.load_error = None;
                        if seq > self.submit_error_load {
                            self.submit_error = None;
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, "Failed to load products");
                        self.load_error = Some(e.to_string());
                    }
                }
            }
            OutcomeKind::ProductCreated(result) => {
                match result {
                    Ok(body) => debug!(%body, "Product created"),
                    Err(e) => {
                        warn!(error = %e, "Failed to create product");
                        self.submit_error = Some(e.to_string());
                    }
                }
                self.reset_form();
                self.load(effects);
                if self.submit_error.is_some() {
                    // survives the reload above, cleared by a later one
                    self.submit_error_load = self.mount.latest_load();
                }
            }
            other => debug!(?other, "Products panel ignoring outcome"),
        }
    }

    fn reset_form(&mut self) {
        self.sku.clear();
        self.name.clear();
        self.price.set(DEFAULT_PRICE);
    }

    /// The field that currently has focus
    pub fn focused_input(&mut self) -> &mut TextField {
        match self.focused_field {
            ProductField::Sku => &mut self.sku,
            ProductField::Name => &mut self.name,
            ProductField::Price => &mut self.price,
        }
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    pub fn error_message(&self) -> Option<&str> {
        self.submit_error.as_deref().or(self.load_error.as_deref())
    }
}

//! Sales & CRM panel: customer list and creation form

use tracing::{debug, warn};

use super::effects::{Effects, OutcomeKind};
use super::field::TextField;
use super::mount::{Mount, MountId};
use crate::api::{self, Backend};
use crate::models::{Customer, NewCustomer};

/// Fields of the customer form, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CustomerField {
    #[default]
    Name,
    Email,
    Phone,
}

impl CustomerField {
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Phone,
            Self::Phone => Self::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Phone,
            Self::Email => Self::Name,
            Self::Phone => Self::Email,
        }
    }
}

/// State of a mounted customers panel
#[derive(Debug)]
pub struct CustomersPanel {
    mount: Mount,
    pub customers: Vec<Customer>,
    pub loading: bool,
    pub name: TextField,
    pub email: TextField,
    pub phone: TextField,
    pub focused_field: CustomerField,
    pub load_error: Option<String>,
    pub submit_error: Option<String>,
    submit_error_load: u64,
}

impl Default for CustomersPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomersPanel {
    /// An unloaded panel; `mount` is what the shell uses
    pub fn new() -> Self {
        Self {
            mount: Mount::new(),
            customers: Vec::new(),
            loading: false,
            name: TextField::new(),
            email: TextField::new(),
            phone: TextField::new(),
            focused_field: CustomerField::Name,
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

    /// Fetch the customer list
    pub fn load<B: Backend>(&mut self, effects: &Effects<B>) {
        self.loading = true;
        let seq = self.mount.next_load();
        effects.spawn(&mut self.mount, move |backend| async move {
            let result = api::list_customers(backend.as_ref()).await;
            OutcomeKind::CustomersLoaded { seq, result }
        });
    }

    /// Submit the form; returns false when the name is empty
    pub fn add<B: Backend>(&mut self, effects: &Effects<B>) -> bool {
        if self.name.is_empty() {
            return false;
        }

        let payload = NewCustomer {
            name: self.name.value().to_string(),
            email: self.email.value().to_string(),
            phone: self.phone.value().to_string(),
        };
        self.submit_error = None;
        effects.spawn(&mut self.mount, move |backend| async move {
            OutcomeKind::CustomerCreated(api::create_customer(backend.as_ref(), &payload).await)
        });
        true
    }

    /// Apply a request outcome addressed to this panel
    pub fn apply<B: Backend>(&mut self, kind: OutcomeKind, effects: &Effects<B>) {
        match kind {
            OutcomeKind::CustomersLoaded { seq, result } => {
                if !self.mount.is_latest_load(seq) {
                    debug!(seq, "Dropping superseded customers load");
                    return;
                }
                self.loading = false;
                match result {
                    Ok(customers) => {
                        self.customers = customers;
                        self.load_error = None;
                        if seq > self.submit_error_load {
                            self.submit_error = None;
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, "Failed to load customers");
                        self.load_error = Some(e.to_string());
                    }
                }
            }
            OutcomeKind::CustomerCreated(result) => {
                match result {
                    Ok(body) => debug!(%body, "Customer created"),
                    Err(e) => {
                        warn!(error = %e, "Failed to create customer");
                        self.submit_error = Some(e.to_string());
                    }
                }
                self.clear_form();
                self.load(effects);
                if self.submit_error.is_some() {
                    // survives the reload above, cleared by a later one
                    self.submit_error_load = self.mount.latest_load();
                }
            }
            other => debug!(?other, "Customers panel ignoring outcome"),
        }
    }

    fn clear_form(&mut self) {
        self.name.clear();
        self.email.clear();
        self.phone.clear();
    }

    /// The field that currently has focus
    pub fn focused_input(&mut self) -> &mut TextField {
        match self.focused_field {
            CustomerField::Name => &mut self.name,
            CustomerField::Email => &mut self.email,
            CustomerField::Phone => &mut self.phone,
        }
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// Most relevant error for the indicator line
    pub fn error_message(&self) -> Option<&str> {
        self.submit_error.as_deref().or(self.load_error.as_deref())
    }
}

//! Application state for the TUI
//!
//! The App owns the mounted panel and the effects handle that panels use to
//! reach the backend. Switching tabs drops the old panel, which aborts its
//! requests, and mounts a fresh one.

use tracing::debug;

use crate::api::Backend;
use crate::panels::{Effects, Outcome, Panel, Tab};

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys navigate between tabs and trigger panel actions
    #[default]
    Normal,
    /// Keys edit the focused form field
    Editing,
}

/// Main application state
pub struct App<B: Backend> {
    /// Handle for spawning backend requests
    pub effects: Effects<B>,

    /// The currently mounted panel
    pub panel: Panel,

    /// Current input mode
    pub input_mode: InputMode,

    /// Whether the help overlay is shown
    pub show_help: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<B: Backend> App<B> {
    /// Create a new App showing the overview
    pub fn new(effects: Effects<B>) -> Self {
        let panel = Panel::mount(Tab::default(), &effects);
        Self {
            effects,
            panel,
            input_mode: InputMode::default(),
            show_help: false,
            should_quit: false,
            status_message: None,
        }
    }

    /// The selected tab
    pub fn active_tab(&self) -> Tab {
        self.panel.tab()
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Switch to a different tab
    ///
    /// Selecting the active tab does nothing; anything else unmounts the
    /// current panel and mounts the new one.
    pub fn switch_tab(&mut self, tab: Tab) {
        if tab == self.active_tab() {
            return;
        }
        debug!(from = ?self.active_tab(), to = ?tab, "Switching tab");
        self.panel = Panel::mount(tab, &self.effects);
        self.input_mode = InputMode::Normal;
        self.clear_status();
    }

    /// Reload the current panel
    pub fn refresh(&mut self) {
        self.panel.refresh(&self.effects);
        if self.active_tab() != Tab::Overview {
            self.set_status("Refreshing...");
        }
    }

    /// Submit the current panel's form
    pub fn submit(&mut self) {
        if self.panel.submit(&self.effects) {
            self.set_status("Submitting...");
        } else if self.active_tab() != Tab::Overview {
            self.set_status(match self.active_tab() {
                Tab::Customers => "Name is required",
                Tab::Products => "SKU and name are required",
                _ => "Select a customer and add at least one item",
            });
        }
    }

    /// Begin editing the current panel's form
    pub fn start_editing(&mut self) {
        if self.active_tab() != Tab::Overview {
            self.input_mode = InputMode::Editing;
        }
    }

    /// Return to normal mode
    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Apply an outcome delivered from the runtime
    ///
    /// Errors are drawn by the panel itself, so any applied outcome ends the
    /// "Submitting..."/"Refreshing..." status.
    pub fn handle_outcome(&mut self, outcome: Outcome) {
        if self.panel.apply(outcome, &self.effects) {
            self.clear_status();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::Call;
    use crate::api::{CUSTOMERS_PATH, PRODUCTS_PATH};
    use crate::panels::testing::Harness;

    #[test]
    fn test_starts_on_overview() {
        let harness = Harness::new();
        let app = App::new(harness.effects.clone());

        assert_eq!(app.active_tab(), Tab::Overview);
        assert_eq!(app.input_mode, InputMode::Normal);
        harness.assert_quiet();
    }

    #[test]
    fn test_switch_tab_mounts_and_loads() {
        let harness = Harness::new();
        let mut app = App::new(harness.effects.clone());

        app.switch_tab(Tab::Customers);
        let outcome = harness.next_outcome();
        assert_eq!(app.panel.mount_id(), Some(outcome.mount));
        app.handle_outcome(outcome);

        assert_eq!(harness.backend.calls(), vec![Call::get(CUSTOMERS_PATH)]);
    }

    #[test]
    fn test_selecting_active_tab_does_nothing() {
        let harness = Harness::new();
        let mut app = App::new(harness.effects.clone());
        app.switch_tab(Tab::Products);
        let mount = app.panel.mount_id();
        harness.next_outcome();

        app.switch_tab(Tab::Products);

        assert_eq!(app.panel.mount_id(), mount);
        harness.assert_quiet();
        assert_eq!(harness.backend.calls(), vec![Call::get(PRODUCTS_PATH)]);
    }

    #[test]
    fn test_outcome_after_switch_is_dropped() {
        let harness = Harness::new();
        let mut app = App::new(harness.effects.clone());
        app.switch_tab(Tab::Customers);
        let stale = harness.next_outcome();

        app.switch_tab(Tab::Products);
        app.handle_outcome(stale);

        assert_eq!(app.active_tab(), Tab::Products);
        let fresh = harness.next_outcome();
        assert_eq!(app.panel.mount_id(), Some(fresh.mount));
    }

    #[test]
    fn test_editing_not_available_on_overview() {
        let harness = Harness::new();
        let mut app = App::new(harness.effects.clone());
        app.start_editing();
        assert_eq!(app.input_mode, InputMode::Normal);

        app.switch_tab(Tab::Customers);
        app.start_editing();
        assert_eq!(app.input_mode, InputMode::Editing);

        app.switch_tab(Tab::Invoices);
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_rejected_submit_sets_status() {
        let harness = Harness::new();
        let mut app = App::new(harness.effects.clone());
        app.switch_tab(Tab::Customers);
        harness.next_outcome();

        app.submit();

        assert_eq!(app.status_message.as_deref(), Some("Name is required"));
        assert_eq!(harness.backend.post_count(), 0);
    }

    #[test]
    fn test_failed_submit_status_and_error_clear() {
        let harness = Harness::new();
        harness.backend.fail_post(CUSTOMERS_PATH, "connection refused");
        let mut app = App::new(harness.effects.clone());
        app.switch_tab(Tab::Customers);
        app.handle_outcome(harness.next_outcome());

        if let Panel::Customers(panel) = &mut app.panel {
            panel.name.set("PT Contoh Jaya");
        }
        app.submit();
        assert_eq!(app.status_message.as_deref(), Some("Submitting..."));

        app.handle_outcome(harness.next_outcome());
        app.handle_outcome(harness.next_outcome());
        assert_eq!(app.status_message, None);
        assert!(app.panel.error_message().is_some());

        app.refresh();
        app.handle_outcome(harness.next_outcome());
        assert_eq!(app.status_message, None);
        assert_eq!(app.panel.error_message(), None);
    }
}

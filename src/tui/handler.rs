//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! input mode, and hands request outcomes to the app.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, InputMode};
use super::event::Event;
use crate::api::Backend;
use crate::panels::{InvoiceFocus, ItemField, Panel, Tab, TextField};

/// Handle an incoming event
pub fn handle_event<B: Backend>(app: &mut App<B>, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key),
        Event::Key(_) => {}
        Event::Outcome(outcome) => app.handle_outcome(outcome),
        Event::Tick | Event::Resize(..) => {}
    }
}

/// Handle a key event
fn handle_key_event<B: Backend>(app: &mut App<B>, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    if app.show_help {
        app.show_help = false;
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Editing => handle_editing_key(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_key<B: Backend>(app: &mut App<B>, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.show_help = true,

        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            if let Some(tab) = Tab::from_index(index) {
                app.switch_tab(tab);
            }
        }
        KeyCode::Left | KeyCode::Char('h') => app.switch_tab(app.active_tab().prev()),
        KeyCode::Right | KeyCode::Char('l') => app.switch_tab(app.active_tab().next()),

        KeyCode::Char('r') => app.refresh(),
        KeyCode::Char('i') | KeyCode::Enter => app.start_editing(),

        KeyCode::Char('n') => {
            if let Panel::Invoices(panel) = &mut app.panel {
                let index = panel.add_item();
                panel.focus = InvoiceFocus::Item(index, ItemField::Product);
                app.input_mode = InputMode::Editing;
            }
        }

        _ => {}
    }
}

/// Handle keys while a form has focus
fn handle_editing_key<B: Backend>(app: &mut App<B>, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => {
            app.stop_editing();
            return;
        }
        KeyCode::Enter => {
            app.submit();
            return;
        }
        _ => {}
    }

    match &mut app.panel {
        Panel::Overview => app.input_mode = InputMode::Normal,
        Panel::Customers(panel) => match key.code {
            KeyCode::Tab => panel.next_field(),
            KeyCode::BackTab => panel.prev_field(),
            _ => edit_text(panel.focused_input(), key),
        },
        Panel::Products(panel) => match key.code {
            KeyCode::Tab => panel.next_field(),
            KeyCode::BackTab => panel.prev_field(),
            _ => edit_text(panel.focused_input(), key),
        },
        Panel::Invoices(panel) => match key.code {
            KeyCode::Char('n') if ctrl => {
                let index = panel.add_item();
                panel.focus = InvoiceFocus::Item(index, ItemField::Product);
            }
            KeyCode::Char('d') if ctrl => {
                if let Some(index) = panel.focused_item() {
                    panel.remove_item(index);
                }
            }
            KeyCode::Tab => panel.next_focus(),
            KeyCode::BackTab => panel.prev_focus(),
            KeyCode::Left | KeyCode::Right if panel.selector_focused() => {
                panel.cycle_selection(key.code == KeyCode::Right);
            }
            _ => {
                if let Some(field) = panel.focused_input() {
                    edit_text(field, key);
                }
            }
        },
    }
}

/// Apply a key to a text field
fn edit_text(field: &mut TextField, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            field.insert(c);
        }
        KeyCode::Backspace => field.backspace(),
        KeyCode::Delete => field.delete(),
        KeyCode::Left => field.move_left(),
        KeyCode::Right => field.move_right(),
        KeyCode::Home => field.move_start(),
        KeyCode::End => field.move_end(),
        _ => {}
    }
}

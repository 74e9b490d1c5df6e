//! Sales & CRM view
//!
//! Customer form on the left, customer table on the right.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use super::{api_hint, render_error};
use crate::api::{Backend, CUSTOMERS_PATH};
use crate::display::timestamp::format_optional_timestamp;
use crate::display::or_dash;
use crate::panels::{CustomerField, CustomersPanel};
use crate::tui::layout::{stack, PanelLayout};
use crate::tui::widgets::{section, LabeledInput, INPUT_HEIGHT};

/// Render the customers panel
pub fn render<B: Backend>(
    frame: &mut Frame,
    panel: &CustomersPanel,
    backend: &B,
    editing: bool,
    area: Rect,
) {
    let block = section("Customers", Some("r Refresh"));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = PanelLayout::new(inner);
    render_form(frame, panel, backend, editing, layout.form);
    render_table(frame, panel, layout.list);
}

fn render_form<B: Backend>(
    frame: &mut Frame,
    panel: &CustomersPanel,
    backend: &B,
    editing: bool,
    area: Rect,
) {
    let rows = stack(area, INPUT_HEIGHT, 3);
    let focus = |field: CustomerField| editing && panel.focused_field == field;

    frame.render_widget(
        LabeledInput::new("Name", &panel.name)
            .placeholder("PT Contoh Jaya")
            .focused(focus(CustomerField::Name)),
        rows[0],
    );
    frame.render_widget(
        LabeledInput::new("Email", &panel.email)
            .placeholder("sales@contoh.co.id")
            .focused(focus(CustomerField::Email)),
        rows[1],
    );
    frame.render_widget(
        LabeledInput::new("Phone", &panel.phone)
            .placeholder("0812xxxx")
            .focused(focus(CustomerField::Phone)),
        rows[2],
    );

    let footer = stack(rows[3], 1, 3);
    let action = if panel.name.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    };
    frame.render_widget(
        Paragraph::new(Line::styled(" Add Customer ", action)),
        footer[0],
    );
    frame.render_widget(api_hint(backend.endpoint(CUSTOMERS_PATH)), footer[1]);
    render_error(frame, panel.error_message(), footer[2]);
}

fn render_table(frame: &mut Frame, panel: &CustomersPanel, area: Rect) {
    if panel.loading {
        frame.render_widget(
            Paragraph::new("Loading...").style(Style::default().fg(Color::Gray)),
            area,
        );
        return;
    }

    let header = Row::new(["Name", "Email", "Phone", "Created"].map(|title| {
        Cell::from(title).style(Style::default().add_modifier(Modifier::BOLD))
    }))
    .style(Style::default().fg(Color::Yellow));

    let rows = panel.customers.iter().map(|customer| {
        Row::new(vec![
            Cell::from(customer.name.as_str()),
            Cell::from(or_dash(customer.email.as_deref())),
            Cell::from(or_dash(customer.phone.as_deref())),
            Cell::from(format_optional_timestamp(customer.created_at.as_deref())),
        ])
    });

    let widths = [
        Constraint::Percentage(30),
        Constraint::Percentage(25),
        Constraint::Percentage(20),
        Constraint::Percentage(25),
    ];
    frame.render_widget(Table::new(rows, widths).header(header), area);
}

//! Finance view
//!
//! Draft editor on the left: customer selector, one row per line item and
//! the create action. Issued invoices on the right.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use super::{api_hint, render_error};
use crate::api::{Backend, INVOICES_PATH};
use crate::display::number::format_number_id;
use crate::panels::{InvoiceFocus, InvoicesPanel, ItemField};
use crate::tui::layout::stack;
use crate::tui::widgets::{section, status_badge, LabeledInput, Selector, INPUT_HEIGHT};

/// Selector text for items not linked to a product
pub const CUSTOM_OPTION: &str = "Custom";

/// Render the invoices panel
pub fn render<B: Backend>(
    frame: &mut Frame,
    panel: &InvoicesPanel,
    backend: &B,
    editing: bool,
    area: Rect,
) {
    let block = section("Invoices", Some("r Refresh"));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(inner);

    render_draft(frame, panel, backend, editing, columns[0]);
    render_table(frame, panel, columns[1]);
}

fn render_draft<B: Backend>(
    frame: &mut Frame,
    panel: &InvoicesPanel,
    backend: &B,
    editing: bool,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(INPUT_HEIGHT), // Customer
            Constraint::Length(1),            // Items heading
            Constraint::Min(INPUT_HEIGHT),    // Items
            Constraint::Length(1),            // Create action
            Constraint::Length(1),            // API hint
            Constraint::Length(1),            // Error
        ])
        .split(area);

    let customer = panel.selected_customer().map(|c| c.name.as_str());
    frame.render_widget(
        Selector::new("Customer", customer, "Select customer")
            .focused(editing && panel.focus == InvoiceFocus::Customer),
        chunks[0],
    );

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Items", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                "  n/Ctrl+N add • Ctrl+D remove",
                Style::default().fg(Color::DarkGray),
            ),
        ])),
        chunks[1],
    );

    render_items(frame, panel, editing, chunks[2]);

    let action = if panel.can_submit() {
        Style::default()
            .fg(Color::White)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(
        Paragraph::new(Line::styled(" Create Invoice ", action)),
        chunks[3],
    );
    frame.render_widget(api_hint(backend.endpoint(INVOICES_PATH)), chunks[4]);
    render_error(frame, panel.error_message(), chunks[5]);
}

fn render_items(frame: &mut Frame, panel: &InvoicesPanel, editing: bool, area: Rect) {
    if panel.items.is_empty() {
        frame.render_widget(
            Paragraph::new("No items yet.").style(Style::default().fg(Color::Gray)),
            area,
        );
        return;
    }

    let visible = usize::from((area.height / INPUT_HEIGHT).max(1));
    let first = panel
        .focused_item()
        .map_or(0, |i| (i + 1).saturating_sub(visible));
    let rows = stack(area, INPUT_HEIGHT, visible);

    for (offset, index) in (first..panel.items.len()).take(visible).enumerate() {
        render_item_row(frame, panel, index, editing, rows[offset]);
    }
}

fn render_item_row(
    frame: &mut Frame,
    panel: &InvoicesPanel,
    index: usize,
    editing: bool,
    area: Rect,
) {
    let item = &panel.items[index];
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(28), // Product
            Constraint::Percentage(30), // Name
            Constraint::Percentage(12), // Qty
            Constraint::Percentage(15), // Price
            Constraint::Percentage(15), // Subtotal
        ])
        .split(area);
    let focus = |field: ItemField| editing && panel.focus == InvoiceFocus::Item(index, field);

    frame.render_widget(
        Selector::new("Product", panel.product_label(index), CUSTOM_OPTION)
            .focused(focus(ItemField::Product)),
        cells[0],
    );
    frame.render_widget(
        LabeledInput::new("Name", &item.name)
            .placeholder("Item name")
            .focused(focus(ItemField::Name)),
        cells[1],
    );
    frame.render_widget(
        LabeledInput::new("Qty", &item.quantity).focused(focus(ItemField::Quantity)),
        cells[2],
    );
    frame.render_widget(
        LabeledInput::new("Price", &item.price).focused(focus(ItemField::Price)),
        cells[3],
    );

    let subtotal = Text::from(vec![
        Line::styled("Subtotal", Style::default().fg(Color::Gray)),
        Line::styled(
            format_number_id(item.subtotal()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ])
    .right_aligned();
    frame.render_widget(Paragraph::new(subtotal), cells[4]);
}

fn render_table(frame: &mut Frame, panel: &InvoicesPanel, area: Rect) {
    let header = Row::new(["Customer", "Items", "Total", "Status"].map(|title| {
        Cell::from(title).style(Style::default().add_modifier(Modifier::BOLD))
    }))
    .style(Style::default().fg(Color::Yellow));

    let rows = panel.invoices.iter().map(|invoice| {
        let customer = invoice
            .customer_id
            .as_ref()
            .map_or_else(String::new, ToString::to_string);
        Row::new(vec![
            Cell::from(customer),
            Cell::from(invoice.item_count().to_string()),
            Cell::from(Text::from(invoice.total.display()).right_aligned()),
            Cell::from(Line::from(status_badge(&invoice.status))),
        ])
    });

    let widths = [
        Constraint::Percentage(35),
        Constraint::Percentage(15),
        Constraint::Percentage(25),
        Constraint::Percentage(25),
    ];
    frame.render_widget(Table::new(rows, widths).header(header), area);
}

#[cfg(test)]
mod tests {
    use crate::api::{CUSTOMERS_PATH, INVOICES_PATH, PRODUCTS_PATH};
    use crate::models::ProductId;
    use crate::panels::testing::Harness;
    use crate::panels::{Panel, Tab};
    use crate::tui::app::App;
    use crate::tui::views::testing::{draw, find, text};
    use ratatui::style::Color;
    use serde_json::json;

    fn loaded_app(harness: &Harness) -> App<crate::api::fake::FakeBackend> {
        harness.backend.on_get(
            PRODUCTS_PATH,
            json!([{"_id": "p1", "sku": "SKU-001", "name": "Produk A", "price": 15000}]),
        );
        harness.backend.on_get(
            CUSTOMERS_PATH,
            json!([{"_id": "c1", "name": "PT Contoh Jaya"}]),
        );
        harness.backend.on_get(
            INVOICES_PATH,
            json!([
                {"_id": "i1", "customer_id": "c1", "items": [{}, {}], "total": 30000, "status": "paid"},
                {"_id": "i2", "customer_id": "c9", "status": "draft"}
            ]),
        );
        let mut app = App::new(harness.effects.clone());
        app.switch_tab(Tab::Invoices);
        app.handle_outcome(harness.next_outcome());
        app
    }

    #[test]
    fn test_empty_draft() {
        let harness = Harness::new();
        let app = loaded_app(&harness);
        let screen = text(&draw(&app, 160, 30));

        assert!(screen.contains("Select customer"));
        assert!(screen.contains("No items yet."));
        assert!(screen.contains("Create Invoice"));
    }

    #[test]
    fn test_invoice_rows_and_badges() {
        let harness = Harness::new();
        let app = loaded_app(&harness);
        let buf = draw(&app, 160, 30);
        let screen = text(&buf);

        assert!(screen.contains("30.000"));
        let (x, y) = find(&buf, " paid ").unwrap();
        assert_eq!(buf[(x + 1, y)].bg, Color::Green);
        let (x, y) = find(&buf, " draft ").unwrap();
        assert_eq!(buf[(x + 1, y)].bg, Color::Blue);
    }

    #[test]
    fn test_linked_item_shows_subtotal() {
        let harness = Harness::new();
        let mut app = loaded_app(&harness);
        if let Panel::Invoices(panel) = &mut app.panel {
            panel.add_item();
            panel.select_product(0, Some(&ProductId::new("p1")));
        }

        let screen = text(&draw(&app, 160, 30));
        assert!(screen.contains("Produk A"));
        assert!(screen.contains("15.000"));
        assert!(!screen.contains("No items yet."));
    }
}

//! Inventory view

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use super::{api_hint, render_error};
use crate::api::{Backend, PRODUCTS_PATH};
use crate::panels::{ProductField, ProductsPanel};
use crate::tui::layout::{stack, PanelLayout};
use crate::tui::widgets::{section, LabeledInput, INPUT_HEIGHT};

/// Render the products panel
pub fn render<B: Backend>(
    frame: &mut Frame,
    panel: &ProductsPanel,
    backend: &B,
    editing: bool,
    area: Rect,
) {
    let block = section("Products", Some("r Refresh"));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = PanelLayout::new(inner);
    render_form(frame, panel, backend, editing, layout.form);
    render_table(frame, panel, layout.list);
}

fn render_form<B: Backend>(
    frame: &mut Frame,
    panel: &ProductsPanel,
    backend: &B,
    editing: bool,
    area: Rect,
) {
    let rows = stack(area, INPUT_HEIGHT, 3);
    let focus = |field: ProductField| editing && panel.focused_field == field;

    frame.render_widget(
        LabeledInput::new("SKU", &panel.sku)
            .placeholder("SKU-001")
            .focused(focus(ProductField::Sku)),
        rows[0],
    );
    frame.render_widget(
        LabeledInput::new("Name", &panel.name)
            .placeholder("Produk A")
            .focused(focus(ProductField::Name)),
        rows[1],
    );
    frame.render_widget(
        LabeledInput::new("Price (IDR)", &panel.price).focused(focus(ProductField::Price)),
        rows[2],
    );

    let footer = stack(rows[3], 1, 3);
    let ready = !panel.sku.is_empty() && !panel.name.is_empty();
    let action = if ready {
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(
        Paragraph::new(Line::styled(" Add Product ", action)),
        footer[0],
    );
    frame.render_widget(api_hint(backend.endpoint(PRODUCTS_PATH)), footer[1]);
    render_error(frame, panel.error_message(), footer[2]);
}

fn render_table(frame: &mut Frame, panel: &ProductsPanel, area: Rect) {
    let header = Row::new(["SKU", "Name", "Price"].map(|title| {
        Cell::from(title).style(Style::default().add_modifier(Modifier::BOLD))
    }))
    .style(Style::default().fg(Color::Yellow));

    let rows = panel.products.iter().map(|product| {
        Row::new(vec![
            Cell::from(product.sku.as_str()),
            Cell::from(product.name.as_str()),
            Cell::from(Text::from(product.price.display()).right_aligned()),
        ])
    });

    let widths = [
        Constraint::Percentage(25),
        Constraint::Percentage(50),
        Constraint::Percentage(25),
    ];
    frame.render_widget(Table::new(rows, widths).header(header), area);
}

#[cfg(test)]
mod tests {
    use crate::api::PRODUCTS_PATH;
    use crate::panels::testing::Harness;
    use crate::panels::Tab;
    use crate::tui::app::App;
    use crate::tui::views::testing::{draw, text};
    use serde_json::json;

    #[test]
    fn test_prices_are_formatted() {
        let harness = Harness::new();
        harness.backend.on_get(
            PRODUCTS_PATH,
            json!([
                {"_id": "p1", "sku": "SKU-001", "name": "Produk A", "price": 15000},
                {"_id": "p2", "sku": "SKU-002", "name": "Produk B", "price": 1234.5},
                {"_id": "p3", "sku": "SKU-003", "name": "Produk C", "price": "nego"}
            ]),
        );
        let mut app = App::new(harness.effects.clone());
        app.switch_tab(Tab::Products);
        app.handle_outcome(harness.next_outcome());

        let screen = text(&draw(&app, 140, 30));
        assert!(screen.contains("15.000"));
        assert!(screen.contains("1.234,5"));
        assert!(screen.contains("nego"));
        assert!(screen.contains("Price (IDR)"));
    }
}

use ratatui::layout::{Constraint, Rect};
use ratatui::style::Modifier;
use ratatui::widgets::{Row, Table};
use ratatui::Frame;

use crate::app::types::Ingredient;
use crate::ui::colors::Colors;
use crate::ui::render::TableSpec;

/// One table row: name, amount with two decimals, unit.
pub fn format_ingredient(i: &Ingredient) -> [String; 3] {
    [i.name.clone(), format!("{:.2}", i.amount), i.unit.clone()]
}

/// Draw the malt table into `area`.
pub fn draw_ingredients(f: &mut Frame, area: Rect, spec: &TableSpec, colors: &Colors) {
    let header = Row::new(spec.header.iter().map(String::as_str))
        .style(colors.block_style().add_modifier(Modifier::BOLD))
        .bottom_margin(1);
    let rows = spec
        .rows
        .iter()
        .map(|r| Row::new(r.iter().map(String::as_str)));
    let widths = [
        Constraint::Percentage(50),
        Constraint::Percentage(25),
        Constraint::Percentage(25),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(colors.block(&spec.title));
    f.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn amounts_have_two_decimals() {
        let row = format_ingredient(&Ingredient::new("Munich", 0.4, "kilograms"));
        assert_eq!(row, ["Munich".to_string(), "0.40".to_string(), "kilograms".to_string()]);
    }

    #[test]
    fn draw_ingredients_smoke_test() {
        let backend = TestBackend::new(60, 8);
        let mut terminal = Terminal::new(backend).expect("failed to create terminal");
        let spec = TableSpec {
            title: "Ingredients".into(),
            header: ["Malt".into(), "Amount".into(), "Unit".into()],
            rows: vec![format_ingredient(&Ingredient::new("Caramalt", 0.2, "kilograms"))],
        };
        terminal
            .draw(|f| draw_ingredients(f, Rect::new(0, 0, 60, 8), &spec, &Colors::default()))
            .expect("failed to draw");
        let buf = terminal.backend().buffer();
        let row: String = (0..60).filter_map(|x| buf.cell((x, 3))).map(|c| c.symbol()).collect();
        assert!(row.contains("Caramalt"), "row was: {}", row);
    }
}

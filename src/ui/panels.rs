use ratatui::layout::Rect;
use ratatui::widgets::{List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::colors::Colors;
use crate::ui::render::{ListSpec, TextSpec};

/// Draw the beer list with the current record highlighted.
pub fn draw_list(f: &mut Frame, area: Rect, spec: &ListSpec, colors: &Colors) {
    let items: Vec<ListItem> = spec.items.iter().map(|s| ListItem::new(s.as_str())).collect();
    let list = List::new(items)
        .block(colors.block(&spec.title))
        .highlight_style(colors.selected_style());
    let mut state = ListState::default().with_selected(Some(spec.selected));
    f.render_stateful_widget(list, area, &mut state);
}

/// Draw a wrapped text field (name, tagline, description).
pub fn draw_text(f: &mut Frame, area: Rect, spec: &TextSpec, colors: &Colors) {
    let paragraph = Paragraph::new(spec.text.as_str())
        .wrap(Wrap { trim: true })
        .block(colors.block(&spec.title));
    f.render_widget(paragraph, area);
}

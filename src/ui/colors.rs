use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};

/// The single foreground/background pair used by every region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub fg: Color,
    pub bg: Color,
}

impl Default for Colors {
    fn default() -> Self {
        Colors::new(Color::Reset)
    }
}

impl Colors {
    /// Yellow on `bg`.
    pub fn new(bg: Color) -> Self {
        Colors { fg: Color::Yellow, bg }
    }

    pub fn block_style(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn text_style(&self) -> Style {
        Style::default().bg(self.bg)
    }

    pub fn selected_style(&self) -> Style {
        Style::default().fg(self.fg).add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    /// Bordered, titled block in the theme colours.
    pub fn block<'a>(&self, title: &'a str) -> Block<'a> {
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(self.block_style())
            .title_style(self.block_style())
            .style(self.text_style())
    }
}

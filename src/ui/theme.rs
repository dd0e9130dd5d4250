use ratatui::style::{Color, Modifier, Style};

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub emphasis: Color, // Yellow
}

impl Theme {
    /// Style for a surface cell with the given bold flag
    pub fn cell_style(&self, bold: bool) -> Style {
        let style = Style::default().fg(self.fg).bg(self.bg);
        if bold {
            style.fg(self.emphasis).add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    emphasis: Color::Rgb(249, 226, 175),
};

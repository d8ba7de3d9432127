//! Terminal styling as a value, not global state. Renderers take a
//! [`Style`] so output piped to a file (or any non-terminal target) can
//! use [`Style::Plain`] and stay byte-clean.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Header,
    Blue,
    Cyan,
    Green,
    Yellow,
    Red,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Ansi,
    Plain,
}

impl Style {
    pub fn code(self, color: Color) -> &'static str {
        match self {
            Style::Plain => "",
            Style::Ansi => match color {
                Color::Header => "\x1b[95m",
                Color::Blue => "\x1b[94m",
                Color::Cyan => "\x1b[96m",
                Color::Green => "\x1b[92m",
                Color::Yellow => "\x1b[93m",
                Color::Red => "\x1b[91m",
                Color::Bold => "\x1b[1m",
            },
        }
    }

    pub fn reset(self) -> &'static str {
        match self {
            Style::Plain => "",
            Style::Ansi => "\x1b[0m",
        }
    }

    pub fn paint(self, color: Color, text: &str) -> String {
        format!("{}{}{}", self.code(color), text, self.reset())
    }

    /// Bold in the given color, used for headers.
    pub fn paint_bold(self, color: Color, text: &str) -> String {
        format!(
            "{}{}{}{}",
            self.code(color),
            self.code(Color::Bold),
            text,
            self.reset()
        )
    }
}

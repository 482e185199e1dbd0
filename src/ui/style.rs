/// Symbolic text styles used in terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Bold,
    Dim,
    Red,
    Green,
    Yellow,
    Cyan,
}

impl Style {
    /// Literal ANSI prefix and suffix wrapped around styled text.
    pub const fn codes(self) -> (&'static str, &'static str) {
        match self {
            Style::Bold => ("\x1b[1m", "\x1b[0m"),
            Style::Dim => ("\x1b[2m", "\x1b[0m"),
            Style::Red => ("\x1b[31m", "\x1b[0m"),
            Style::Green => ("\x1b[32m", "\x1b[0m"),
            Style::Yellow => ("\x1b[33m", "\x1b[0m"),
            Style::Cyan => ("\x1b[36m", "\x1b[0m"),
        }
    }
}

pub fn decorate(style: Style, text: &str, enabled: bool) -> String {
    if !enabled {
        return text.to_string();
    }
    let (prefix, suffix) = style.codes();
    format!("{prefix}{text}{suffix}")
}

/// Styles `text` when stdout is a terminal and `NO_COLOR` is unset.
pub fn paint(style: Style, text: &str) -> String {
    decorate(style, text, colors_enabled())
}

pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

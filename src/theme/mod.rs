//! ANSI styling for arena output
//!
//! A theme either wraps text in escape sequences or passes it through
//! untouched, so the combat loop renders identically (minus color) when
//! writing to a pipe or a test buffer.

const RESET: &str = "\x1b[0m";

/// The styles the combat loop uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Bold green: spawn announcements
    Spawn,
    /// Bold red: attacks and deaths
    Danger,
    /// Bold blue: health readouts
    Health,
    /// Bold yellow: the hero's name
    Hero,
    /// Bold cyan: the kill tally
    Tally,
}

impl Style {
    fn code(self) -> &'static str {
        match self {
            Style::Spawn => "\x1b[1;32m",
            Style::Danger => "\x1b[1;31m",
            Style::Health => "\x1b[1;34m",
            Style::Hero => "\x1b[1;33m",
            Style::Tally => "\x1b[1;36m",
        }
    }
}

/// Color policy for rendered text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    colored: bool,
}

impl Theme {
    /// Theme that emits ANSI escape sequences.
    pub fn colored() -> Self {
        Self { colored: true }
    }

    /// Theme that leaves text unstyled.
    pub fn plain() -> Self {
        Self { colored: false }
    }

    /// Wrap `text` in the escape codes for `style`, or return it verbatim
    /// for a plain theme.
    pub fn paint(&self, style: Style, text: &str) -> String {
        if self.colored {
            format!("{}{}{}", style.code(), text, RESET)
        } else {
            text.to_string()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::colored()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colored_wraps_with_reset() {
        let theme = Theme::colored();
        assert_eq!("\x1b[1;32mspawned\x1b[0m", theme.paint(Style::Spawn, "spawned"));
    }

    #[test]
    fn test_plain_passes_through() {
        let theme = Theme::plain();
        assert_eq!("died", theme.paint(Style::Danger, "died"));
    }
}

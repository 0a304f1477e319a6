//! Help bar widget for displaying keybind hints

use crate::ui::ratatui_adapter::state::Mode;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A keybind hint to display in the help bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// Key combination (e.g., "Enter", "/")
    pub key: String,
    /// Action description (e.g., "select", "search")
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint
    #[must_use]
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Help bar widget that displays keybind hints at the bottom
pub struct HelpBar<'a> {
    /// Hints to display
    hints: &'a [KeyHint],
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    /// Create a new help bar widget
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }

    /// Hints for the current mode and layout
    #[must_use]
    pub fn hints_for(mode: Mode, show_categories: bool, search_enabled: bool) -> Vec<KeyHint> {
        if mode == Mode::Search {
            return vec![
                KeyHint::new("type", "filter"),
                KeyHint::new("ctrl+u", "clear"),
                KeyHint::new("Esc", "done"),
            ];
        }

        let mut hints = vec![KeyHint::new("Enter", "select")];
        if show_categories {
            hints.push(KeyHint::new("Tab", "column"));
        }
        hints.push(KeyHint::new("e", "edit"));
        hints.push(KeyHint::new("d", "delete row"));
        if search_enabled {
            hints.push(KeyHint::new("/", "search"));
        }
        hints.push(KeyHint::new("?", "help"));
        hints.push(KeyHint::new("q", "quit"));
        hints
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", self.theme.dimmed_style()));
            }
            spans.push(Span::styled(hint.key.as_str(), self.theme.cursor_style()));
            spans.push(Span::styled(":", self.theme.dimmed_style()));
            spans.push(Span::raw(hint.action.as_str()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

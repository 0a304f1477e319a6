//! Help overlay widget for displaying full keybind reference

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Help overlay widget that displays a centered help screen
pub struct HelpOverlay<'a> {
    /// Theme for styling
    theme: &'a Theme,
    /// Whether to list the search keys
    search_enabled: bool,
}

impl<'a> HelpOverlay<'a> {
    /// Create a new help overlay
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            search_enabled: false,
        }
    }

    /// Include the search section
    #[must_use]
    pub const fn with_search(mut self, search_enabled: bool) -> Self {
        self.search_enabled = search_enabled;
        self
    }

    /// Calculate centered area for the overlay
    fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
        let popup_layout = Layout::vertical([
            Constraint::Percentage((100 - height_percent) / 2),
            Constraint::Percentage(height_percent),
            Constraint::Percentage((100 - height_percent) / 2),
        ])
        .split(area);

        Layout::horizontal([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(popup_layout[1])[1]
    }

    fn section(&self, title: &'static str) -> [Line<'static>; 3] {
        [
            Line::default(),
            Line::styled(
                title,
                self.theme.cursor_style().add_modifier(Modifier::UNDERLINED),
            ),
            Line::default(),
        ]
    }

    /// Build help content lines
    fn build_content(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        lines.extend(self.section("  Navigation"));
        lines.extend([
            self.help_line("  ↑/↓ k/j", "Move cursor"),
            self.help_line("  Home/End", "Jump to first/last row"),
            self.help_line("  Tab ←/→", "Switch column"),
            self.help_line("  Enter/Space", "Select row"),
        ]);

        lines.extend(self.section("  Editing"));
        lines.extend([
            self.help_line("  e", "Toggle edit mode"),
            self.help_line("  Enter/Space", "Toggle row (edit mode)"),
            self.help_line("  x", "Delete selected rows"),
            self.help_line("  d", "Delete row under cursor"),
        ]);

        if self.search_enabled {
            lines.extend(self.section("  Search"));
            lines.extend([
                self.help_line("  /", "Focus search"),
                self.help_line("  Ctrl+U", "Clear query"),
                self.help_line("  Esc", "Leave search"),
            ]);
        }

        lines.push(Line::default());
        lines.push(self.help_line("  q/Esc", "Quit"));
        lines.push(Line::default());
        lines.push(Line::styled(
            "  Press any key to close",
            self.theme.dimmed_style(),
        ));

        lines
    }

    /// Create a help line with key and description
    fn help_line(&self, key: &'static str, desc: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{key:<16}"), self.theme.info_style()),
            Span::raw(desc),
        ])
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = Self::centered_rect(60, 80, area);

        // Clear the background
        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(" Help ")
            .title_alignment(Alignment::Center);

        Paragraph::new(self.build_content())
            .block(block)
            .render(popup_area, buf);
    }
}

//! Status bar widget: toolbar state and recent messages

use crate::selection::Mode as SelectionMode;
use crate::ui::output::MessageLevel;
use crate::ui::ratatui_adapter::state::StatusMessage;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar widget
///
/// The left side shows the most recent message. The right side stands in
/// for the toolbar: the mode indicator plus, while editing, the delete
/// button, dimmed unless it is enabled.
pub struct StatusBar<'a> {
    /// Messages to display
    messages: &'a [&'a StatusMessage],
    /// Selection mode
    mode: SelectionMode,
    /// Size of the current selection
    selected_count: usize,
    /// Whether the delete button is live
    delete_enabled: bool,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget
    #[must_use]
    pub const fn new(messages: &'a [&'a StatusMessage], mode: SelectionMode, theme: &'a Theme) -> Self {
        Self {
            messages,
            mode,
            selected_count: 0,
            delete_enabled: false,
            theme,
        }
    }

    /// Set the delete button state
    #[must_use]
    pub const fn delete_button(mut self, selected_count: usize, enabled: bool) -> Self {
        self.selected_count = selected_count;
        self.delete_enabled = enabled;
        self
    }

    /// Get style for a message level
    fn style_for_level(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Success => self.theme.success_style(),
            MessageLevel::Error => self.theme.error_style(),
            MessageLevel::Info => self.theme.info_style(),
            MessageLevel::Normal | MessageLevel::Heading => self.theme.normal_style(),
        }
    }

    /// Get prefix for a message level
    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Success => "✓ ",
            MessageLevel::Error => "✗ ",
            MessageLevel::Info => "ℹ ",
            MessageLevel::Normal | MessageLevel::Heading => "",
        }
    }

    fn toolbar_line(&self) -> Line<'static> {
        let editing = self.mode.is_editing();
        let mut spans = vec![Span::styled(
            format!("[{}]", self.mode),
            self.theme.mode_style(editing),
        )];

        if editing {
            let style = if self.delete_enabled {
                self.theme.danger_style()
            } else {
                self.theme.dimmed_style()
            };
            spans.push(Span::raw(" "));
            spans.push(Span::styled(format!("Delete ({})", self.selected_count), style));
        }

        Line::from(spans).right_aligned()
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false))
            .title(" Status ");

        let inner = block.inner(area);
        block.render(area, buf);

        let [left, right] =
            Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)]).areas(inner);

        if let Some(msg) = self.messages.last() {
            let style = self.style_for_level(msg.level);
            let line = Line::from(vec![
                Span::styled(Self::prefix_for_level(msg.level), style),
                Span::styled(msg.text.as_str(), style),
            ]);
            Paragraph::new(line).render(left, buf);
        }

        Paragraph::new(self.toolbar_line()).render(right, buf);
    }
}

//! Detail pane widget

use crate::selection::Detail;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Right-hand pane showing the resolved detail
pub struct DetailPane<'a> {
    detail: &'a Detail,
    /// Active search filter, used for the empty-result message
    search_text: &'a str,
    theme: &'a Theme,
}

impl<'a> DetailPane<'a> {
    /// Create a new detail pane widget
    #[must_use]
    pub const fn new(detail: &'a Detail, theme: &'a Theme) -> Self {
        Self {
            detail,
            search_text: "",
            theme,
        }
    }

    /// Set the active search text
    #[must_use]
    pub const fn search_text(mut self, search_text: &'a str) -> Self {
        self.search_text = search_text;
        self
    }

    fn content(&self) -> (String, Vec<Line<'a>>) {
        match self.detail {
            Detail::Selected(item) => (
                format!(" Details for {} ", item.name),
                vec![
                    Line::styled(item.name.clone(), self.theme.heading_style()),
                    Line::default(),
                    Line::raw(item.description.clone()),
                ],
            ),
            Detail::EditingPlaceholder => (
                " Detail ".to_string(),
                vec![Line::styled("Editing", self.theme.dimmed_style())],
            ),
            Detail::Empty if !self.search_text.is_empty() => (
                " Detail ".to_string(),
                vec![Line::styled(
                    format!("No results for \"{}\"", self.search_text),
                    self.theme.dimmed_style(),
                )],
            ),
            Detail::Empty => (
                " Detail ".to_string(),
                vec![Line::styled("Please select an item", self.theme.dimmed_style())],
            ),
        }
    }
}

impl Widget for DetailPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (title, lines) = self.content();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false))
            .title(title);

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

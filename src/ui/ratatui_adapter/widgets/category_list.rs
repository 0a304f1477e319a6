//! Category sidebar widget

use crate::model::{Category, CategoryId};
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Widget},
};

/// Sidebar listing categories with the selected one highlighted
pub struct CategoryList<'a> {
    categories: &'a [Category],
    selected: Option<CategoryId>,
    cursor: usize,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> CategoryList<'a> {
    /// Create a new category list widget
    #[must_use]
    pub const fn new(categories: &'a [Category], theme: &'a Theme) -> Self {
        Self {
            categories,
            selected: None,
            cursor: 0,
            focused: false,
            theme,
        }
    }

    /// Highlight the selected category
    #[must_use]
    pub const fn selected(mut self, selected: Option<CategoryId>) -> Self {
        self.selected = selected;
        self
    }

    /// Set cursor row
    #[must_use]
    pub const fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    /// Set focus state
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn render_row(&self, category: &'a Category, is_cursor: bool) -> ListItem<'a> {
        let cursor_char = if is_cursor && self.focused { ">" } else { " " };
        let count = format!(" ({})", category.items.len());
        let line = Line::from(vec![
            Span::styled(cursor_char, self.theme.cursor_style()),
            Span::raw(" "),
            Span::raw(category.name.as_str()),
            Span::styled(count, self.theme.dimmed_style()),
        ]);

        if self.selected == Some(category.id) {
            ListItem::new(line).style(self.theme.selected_style())
        } else {
            ListItem::new(line)
        }
    }
}

impl Widget for CategoryList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused))
            .title(" Category ");

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let visible_height = inner.height as usize;
        let start = self.cursor.saturating_sub(visible_height - 1);

        let rows: Vec<ListItem> = self
            .categories
            .iter()
            .enumerate()
            .skip(start)
            .take(visible_height)
            .map(|(row, category)| self.render_row(category, row == self.cursor))
            .collect();

        List::new(rows).render(inner, buf);
    }
}

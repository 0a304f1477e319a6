//! Item list widget for the middle (or left) column

use crate::model::{Item, ItemId};
use crate::selection::Mode as SelectionMode;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};
use std::collections::BTreeSet;

/// Item list widget with cursor and selection indicators
///
/// Browsing highlights the selected row; Editing shows a check mark per
/// member of the working set instead.
pub struct ItemList<'a> {
    items: &'a [Item],
    selected: &'a BTreeSet<ItemId>,
    mode: SelectionMode,
    cursor: usize,
    focused: bool,
    title: String,
    placeholder: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> ItemList<'a> {
    /// Create a new item list widget
    #[must_use]
    pub fn new(items: &'a [Item], selected: &'a BTreeSet<ItemId>, theme: &'a Theme) -> Self {
        Self {
            items,
            selected,
            mode: SelectionMode::Browsing,
            cursor: 0,
            focused: true,
            title: format!(" Items ({}) ", items.len()),
            placeholder: None,
            theme,
        }
    }

    /// Set custom title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = format!(" {} ", title.into());
        self
    }

    /// Set the selection mode the rows are drawn for
    #[must_use]
    pub const fn mode(mut self, mode: SelectionMode) -> Self {
        self.mode = mode;
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

    /// Text shown instead of rows (e.g. when no category is chosen)
    #[must_use]
    pub const fn placeholder(mut self, placeholder: Option<&'a str>) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Render a single item
    fn render_item(&self, item: &'a Item, is_cursor: bool) -> ListItem<'a> {
        let is_selected = self.selected.contains(&item.id);

        let cursor_char = if is_cursor && self.focused { ">" } else { " " };
        let mut spans = vec![
            Span::styled(cursor_char, self.theme.cursor_style()),
            Span::raw(" "),
        ];

        if self.mode.is_editing() {
            let select_char = if is_selected { "✓" } else { " " };
            spans.push(Span::styled(select_char, self.theme.multi_select_style()));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::raw(item.name.as_str()));

        let line = Line::from(spans);
        if is_selected && !self.mode.is_editing() {
            ListItem::new(line).style(self.theme.selected_style())
        } else {
            ListItem::new(line)
        }
    }
}

impl Widget for ItemList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused))
            .title(self.title.as_str());

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        if let Some(placeholder) = self.placeholder {
            Paragraph::new(Line::styled(placeholder, self.theme.dimmed_style()))
                .render(inner, buf);
            return;
        }

        // Scroll just enough to keep the cursor on screen
        let visible_height = inner.height as usize;
        let start = self.cursor.saturating_sub(visible_height - 1);

        let rows: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .skip(start)
            .take(visible_height)
            .map(|(row, item)| self.render_item(item, row == self.cursor))
            .collect();

        List::new(rows).render(inner, buf);
    }
}

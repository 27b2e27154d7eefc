//! Habit list widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget, Wrap},
};

use crate::domain::entities::Habit;
use crate::presentation::theme::Theme;

const EMPTY_STATE_TEXT: &str = "No habits yet. Type a name above and press Enter to add one.";

/// The scrollable habit list, or an empty-state placeholder when there is
/// nothing to show. Rows are resolved from ids to positions here, at render
/// time only.
pub struct HabitList<'a> {
    habits: &'a [Habit],
    theme: &'a Theme,
    focused: bool,
}

impl<'a> HabitList<'a> {
    #[must_use]
    pub const fn new(habits: &'a [Habit], theme: &'a Theme, focused: bool) -> Self {
        Self {
            habits,
            theme,
            focused,
        }
    }

    fn row(&self, habit: &Habit) -> ListItem<'a> {
        let glyph = if habit.is_completed() { "✔" } else { " " };
        let name_style = if habit.is_completed() {
            self.theme.completed_style
        } else {
            Style::default()
        };

        ListItem::new(Line::from(vec![
            Span::styled(format!("[{glyph}] "), Style::default().fg(self.theme.accent)),
            Span::styled(habit.name().to_string(), name_style),
        ]))
    }
}

impl StatefulWidget for HabitList<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ListState) {
        let border_style = if self.focused {
            Style::default().fg(self.theme.accent)
        } else {
            Style::default().fg(ratatui::style::Color::Gray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Habits ");

        if self.habits.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);

            let placeholder = Paragraph::new(EMPTY_STATE_TEXT)
                .style(self.theme.dimmed_style)
                .wrap(Wrap { trim: true });
            placeholder.render(inner, buf);
            return;
        }

        let items: Vec<ListItem<'_>> = self.habits.iter().map(|h| self.row(h)).collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(self.theme.selection_style)
            .highlight_symbol("› ");

        StatefulWidget::render(list, area, buf, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_buffer(habits: &[Habit], selected: Option<usize>) -> Buffer {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 40, 8);
        let mut buf = Buffer::empty(area);
        let mut state = ListState::default();
        state.select(selected);

        HabitList::new(habits, &theme, true).render(area, &mut buf, &mut state);
        buf
    }

    fn buffer_text(buf: &Buffer) -> String {
        let mut text = String::new();
        for y in buf.area.top()..buf.area.bottom() {
            for x in buf.area.left()..buf.area.right() {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_empty_list_renders_placeholder() {
        let text = buffer_text(&render_to_buffer(&[], None));
        assert!(text.contains("No habits yet"));
    }

    #[test]
    fn test_rows_show_names_and_completion() {
        let mut habits = vec![
            Habit::new("Run").unwrap(),
            Habit::new("Swim").unwrap(),
        ];
        habits[1].toggle();

        let text = buffer_text(&render_to_buffer(&habits, Some(0)));

        assert!(text.contains("Run"));
        assert!(text.contains("Swim"));
        assert!(text.contains("[✔]"));
        assert!(!text.contains("No habits yet"));
    }

    #[test]
    fn test_identical_renders_produce_identical_buffers() {
        let habits = vec![Habit::new("Run").unwrap()];

        let first = render_to_buffer(&habits, Some(0));
        let second = render_to_buffer(&habits, Some(0));

        assert_eq!(first, second);
    }
}

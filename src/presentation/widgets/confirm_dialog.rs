//! Deletion confirmation dialog.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

/// Centered modal asking the user to confirm a destructive command.
pub struct ConfirmDialog<'a> {
    message: &'a str,
}

impl<'a> ConfirmDialog<'a> {
    #[must_use]
    pub const fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let max_width = 50.min(area.width.saturating_sub(4));
        let width = u16::try_from(self.message.width())
            .unwrap_or(u16::MAX)
            .saturating_add(4)
            .clamp(20, max_width.max(20));

        let inner_width = width.saturating_sub(2).max(1);
        let content_width = u16::try_from(self.message.width()).unwrap_or(0);
        let message_lines = content_width.div_ceil(inner_width);

        let height = message_lines.saturating_add(4).min(area.height);

        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + area.height.saturating_sub(height) / 2;
        let dialog_area = Rect::new(x, y, width, height);

        let intersection = area.intersection(dialog_area);
        if intersection.area() == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Confirm ")
            .style(Style::default().fg(Color::Red));

        let hint = Line::from(vec![
            Span::styled("[Y]", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("es  "),
            Span::styled("[N]", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("o"),
        ])
        .centered();

        let mut lines = vec![Line::raw(self.message)];
        lines.push(Line::raw(""));
        lines.push(hint);

        let para = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true });

        Clear.render(intersection, buf);
        para.render(intersection, buf);
    }
}

//! Completion progress gauge.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Gauge, Widget},
};

use crate::domain::progress::Progress;
use crate::presentation::theme::Theme;

/// Gauge showing the rounded completion percentage and the raw counts.
pub struct ProgressBar<'a> {
    progress: Progress,
    theme: &'a Theme,
}

impl<'a> ProgressBar<'a> {
    #[must_use]
    pub const fn new(progress: Progress, theme: &'a Theme) -> Self {
        Self { progress, theme }
    }
}

impl Widget for ProgressBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(" Progress ");

        let gauge = Gauge::default()
            .block(block)
            .gauge_style(Style::default().fg(self.theme.accent))
            .ratio(self.progress.ratio())
            .label(self.progress.to_string());

        gauge.render(area, buf);
    }
}

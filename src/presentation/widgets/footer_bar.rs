//! Footer bar with key hints for the focused pane.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::presentation::theme::Theme;

/// Which pane currently receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusContext {
    #[default]
    Input,
    List,
    Confirm,
}

impl FocusContext {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Input => "INPUT",
            Self::List => "LIST",
            Self::Confirm => "CONFIRM",
        }
    }

    const fn hints(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Input => &[
                ("Enter", "submit"),
                ("Esc", "cancel"),
                ("Tab", "list"),
            ],
            Self::List => &[
                ("Space", "toggle"),
                ("e", "edit"),
                ("d", "delete"),
                ("Tab", "input"),
                ("q", "quit"),
            ],
            Self::Confirm => &[("y", "confirm"), ("n", "cancel")],
        }
    }
}

pub struct FooterBar<'a> {
    focus: FocusContext,
    theme: &'a Theme,
}

impl<'a> FooterBar<'a> {
    #[must_use]
    pub const fn new(focus: FocusContext, theme: &'a Theme) -> Self {
        Self { focus, theme }
    }
}

impl Widget for FooterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_style = Style::default()
            .bg(self.theme.accent)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD);

        let mut spans = vec![
            Span::styled(format!(" {} ", self.focus.display_name()), label_style),
            Span::raw(" "),
        ];

        for (key, action) in self.focus.hints() {
            spans.push(Span::styled(
                format!(" {key} "),
                Style::default().fg(Color::White).bg(Color::DarkGray),
            ));
            spans.push(Span::styled(
                format!(" {action}  "),
                self.theme.dimmed_style,
            ));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

//! Status message display.
//!
//! The one place that knows how user-facing messages are shown. Messages
//! persist until the next one replaces them.

use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::{GLOBAL_BORDER, STATUS_ERROR, STATUS_INFO};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Default)]
pub struct StatusLine {
    message: Option<(StatusKind, String)>,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Displays a message to the status area, replacing whatever was there.
    pub fn display_message(&mut self, kind: StatusKind, message: impl Into<String>) {
        self.message = Some((kind, message.into()));
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_ref().map(|(_, text)| text.as_str())
    }

    pub fn kind(&self) -> Option<StatusKind> {
        self.message.as_ref().map(|(kind, _)| *kind)
    }

    pub fn widget(&self) -> Paragraph<'_> {
        let line = match &self.message {
            Some((kind, text)) => {
                let color = match kind {
                    StatusKind::Info => STATUS_INFO,
                    StatusKind::Error => STATUS_ERROR,
                };
                Line::from(Span::styled(text.as_str(), Style::default().fg(color)))
            }
            None => Line::default(),
        };
        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

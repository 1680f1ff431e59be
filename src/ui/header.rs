use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const PIPELINE: [&str; 4] = ["Intent", "Action", "Result", "State"];

/// Title bar. The status dot lights up once the label shows a message.
pub struct Header {
    greeted: bool,
}

impl Header {
    pub fn new(greeted: bool) -> Self {
        Self { greeted }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let dot_style = if self.greeted {
            Style::default().fg(ACCENT)
        } else {
            Style::default().fg(HEADER_SEPARATOR).add_modifier(Modifier::DIM)
        };

        let mut spans = vec![
            Span::styled("  ●  ", dot_style),
            Span::styled("hello-mvi", Style::default().fg(ACCENT)),
            Span::styled("  │  ", separator_style),
        ];
        for (index, stage) in PIPELINE.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(" → ", separator_style));
            }
            spans.push(Span::styled(*stage, text_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

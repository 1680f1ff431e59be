use crate::ui::app::Focus;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const SEPARATOR: &str = " │ ";

/// Key hints for the bottom bar, as (keys, description) pairs.
fn hints(focus: Focus) -> &'static [(&'static str, &'static str)] {
    match focus {
        Focus::TextField => &[("Tab", "Focus"), ("Enter", "Say hello"), ("Esc/Ctrl+Q", "Quit")],
        Focus::Button => &[
            ("Tab", "Focus"),
            ("Space/Enter", "Say hello"),
            ("Esc/Ctrl+Q", "Quit"),
        ],
    }
}

pub struct Footer {
    focus: Focus,
}

impl Footer {
    pub fn new(focus: Focus) -> Self {
        Self { focus }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let key_style = Style::default().fg(ACCENT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![Span::raw(" ")];
        for (index, (keys, description)) in hints(self.focus).iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(SEPARATOR, separator_style));
            }
            spans.push(Span::styled(*keys, key_style));
            spans.push(Span::styled(format!(": {description}"), text_style));
        }

        // Right-align the version; widths are in chars because of the separators
        let version = format!("v{VERSION} ");
        let used: usize = spans.iter().map(|span| span.content.chars().count()).sum();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(used)
            .saturating_sub(version.chars().count());
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(version, text_style));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

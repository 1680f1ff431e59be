use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, ScreenRegions};
use crate::ui::theme::{ACCENT, BUTTON_FOCUSED_BG, FOCUS_BORDER, GLOBAL_BORDER, LABEL_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const BUTTON_TEXT: &str = "Say hello";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let ScreenRegions {
        header,
        text_field,
        button,
        label,
        footer,
    } = layout_regions(area);

    frame.render_widget(Clear, area);
    frame.render_widget(Header::new(!app.label().is_empty()).widget(), header);
    draw_text_field(frame, app, text_field);
    draw_button(frame, app, button);
    draw_label(frame, app, label);
    frame.render_widget(Footer::new(app.focus()).widget(footer), footer);
}

fn draw_text_field(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let focused = app.focus() == Focus::TextField;
    let field = app.text_field();

    // Scroll and cursor are in terminal columns; wide chars take two
    let cursor_column = Span::raw(field.before_cursor()).width();
    let inner_width = area.width.saturating_sub(2) as usize;
    let scroll = cursor_column.saturating_sub(inner_width.saturating_sub(1));

    let widget = Paragraph::new(field.text().to_string())
        .scroll((0, u16::try_from(scroll).unwrap_or(u16::MAX)))
        .block(bordered(" Name ", focused));
    frame.render_widget(widget, area);

    if focused && area.width > 2 && area.height > 2 {
        let offset = (cursor_column - scroll) as u16;
        frame.set_cursor_position((area.x + 1 + offset, area.y + 1));
    }
}

fn draw_button(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let focused = app.focus() == Focus::Button;
    let style = if focused {
        Style::default()
            .bg(BUTTON_FOCUSED_BG)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let widget = Paragraph::new(BUTTON_TEXT)
        .style(style)
        .alignment(Alignment::Center)
        .block(bordered("", focused));
    frame.render_widget(widget, area);
}

fn draw_label(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let widget = Paragraph::new(app.label().to_string())
        .style(Style::default().fg(LABEL_TEXT))
        .block(
            Block::default()
                .title(Span::styled(" Message ", Style::default().fg(ACCENT)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
    frame.render_widget(widget, area);
}

fn bordered(title: &'static str, focused: bool) -> Block<'static> {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

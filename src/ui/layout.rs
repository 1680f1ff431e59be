use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the button, borders included.
pub const BUTTON_WIDTH: u16 = 14;

/// Screen regions of the greeting screen, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenRegions {
    pub header: Rect,
    pub text_field: Rect,
    pub button: Rect,
    pub label: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> ScreenRegions {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(body);

    let button = Rect {
        width: rows[1].width.min(BUTTON_WIDTH),
        ..rows[1]
    };

    ScreenRegions {
        header,
        text_field: rows[0],
        button,
        label: rows[2],
        footer,
    }
}

use crate::ui::app::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || matches!(key.code, KeyCode::Esc) {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::BackTab => app.focus_next(),
        KeyCode::Enter => app.tap_button(),
        KeyCode::Char(' ') if app.focus() == Focus::Button => app.tap_button(),
        _ if app.focus() == Focus::TextField => edit_text_field(app, key),
        _ => {}
    }
}

fn edit_text_field(app: &mut App, key: KeyEvent) {
    let field = app.text_field_mut();
    match key.code {
        KeyCode::Char(ch) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            field.insert_char(ch)
        }
        KeyCode::Backspace => field.backspace(),
        KeyCode::Delete => field.delete(),
        KeyCode::Left => field.move_left(),
        KeyCode::Right => field.move_right(),
        KeyCode::Home => field.move_home(),
        KeyCode::End => field.move_end(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

use crate::ui::app::{App, Screen};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Raw mode swallows SIGINT, so Ctrl+C comes in as a key
    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.screen() {
        Screen::Counter => handle_counter_key(app, key),
        Screen::Settings => handle_settings_key(app, key),
    }
}

fn handle_counter_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => app.increment(),
        KeyCode::Char('-') | KeyCode::Down => app.decrement(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.reset(),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char(' ') => {
            app.toggle_auto_increment()
        }
        KeyCode::Char('s') | KeyCode::Char('S') => app.open_settings(),
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        _ => {}
    }
}

fn handle_settings_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => app.settings_step_down(),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') => app.settings_step_up(),
        KeyCode::Enter => app.settings_apply(),
        KeyCode::Esc | KeyCode::Char('d') | KeyCode::Char('D') => app.close_settings(),
        KeyCode::Char('q') => app.request_quit(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::state::{App, MENU, Screen};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }
    match app.screen {
        Screen::Menu => handle_menu_key(app, key),
        Screen::Form => handle_form_key(app, key),
        Screen::Results => handle_results_key(app, key),
    }
}

fn handle_menu_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Up => app.menu_idx = app.menu_idx.saturating_sub(1),
        KeyCode::Down => {
            app.menu_idx = (app.menu_idx + 1).min(MENU.len().saturating_sub(1));
        }
        KeyCode::Enter => {
            let (_, kind) = MENU[app.menu_idx];
            app.open_form(kind);
        }
        // Digit shortcuts matching the on-screen numbering.
        KeyCode::Char(ch @ '1'..='6') => {
            let index = ch as usize - '1' as usize;
            if index < MENU.len() {
                let (_, kind) = MENU[index];
                app.menu_idx = index;
                app.open_form(kind);
            }
        }
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.back_to_menu(),
        KeyCode::Enter => {
            if app.field_idx + 1 < app.fields.len() {
                app.field_idx += 1;
            } else {
                app.submit();
            }
        }
        KeyCode::Up | KeyCode::BackTab => app.field_idx = app.field_idx.saturating_sub(1),
        KeyCode::Down | KeyCode::Tab => {
            app.field_idx = (app.field_idx + 1).min(app.fields.len().saturating_sub(1));
        }
        KeyCode::Backspace => {
            app.fields[app.field_idx].value.pop();
        }
        KeyCode::Char(ch) => {
            if !key.modifiers.contains(KeyModifiers::CONTROL) {
                app.fields[app.field_idx].value.push(ch);
            }
        }
        _ => {}
    }
}

fn handle_results_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Enter | KeyCode::Esc => app.back_to_menu(),
        _ => {}
    }
}

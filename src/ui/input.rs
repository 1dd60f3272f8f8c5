use crate::api::PostApi;
use crate::ui::app::{App, Focus};
use crate::ui::editor::EditorIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key<A: PostApi>(app: &mut App<A>, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
        app.cycle_focus();
        return;
    }

    match app.focus() {
        Focus::Form => handle_form_key(app, key),
        Focus::Table => handle_table_key(app, key),
    }
}

fn handle_form_key<A: PostApi>(app: &mut App<A>, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            app.submit();
        }
        KeyCode::Esc => app.edit(EditorIntent::Cancel),
        KeyCode::Backspace => app.edit(EditorIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.edit(EditorIntent::Insert(ch))
        }
        _ => {}
    }
}

fn handle_table_key<A: PostApi>(app: &mut App<A>, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Enter | KeyCode::Char('e') => {
            app.edit_selected();
        }
        KeyCode::Delete | KeyCode::Char('d') => {
            app.delete_selected();
        }
        KeyCode::Char('r') => {
            app.refresh();
        }
        KeyCode::Esc => app.edit(EditorIntent::Cancel),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

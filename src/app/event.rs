use super::mode::Mode;
use super::state::{AppState, Route};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> Result<()> {
    if state.show_help {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
        ) {
            state.show_help = false;
        }
        return Ok(());
    }

    match state.mode {
        Mode::Navigate => handle_navigate_mode(key, state),
        Mode::Insert => handle_insert_mode(key, state),
    }
    Ok(())
}

fn handle_navigate_mode(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Char('q') => state.should_quit = true,
        KeyCode::Char('?') => state.show_help = true,
        KeyCode::Tab => {
            let next = match state.route {
                Route::Items => Route::About,
                Route::About => Route::Items,
            };
            state.on_view_activated(next);
        }
        _ => {
            // Everything below acts on the item list
            if state.route != Route::Items {
                return;
            }
            handle_items_key(key, state);
        }
    }
}

fn handle_items_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Char('a') | KeyCode::Char('i') => state.mode = Mode::Insert,
        KeyCode::Char('s') => {
            state.toggle_sort();
            state.set_status(format!("Sorted {}", state.store.sort_order()));
        }
        KeyCode::Char('h') | KeyCode::Left => state.previous_page(),
        KeyCode::Char('l') | KeyCode::Right => state.next_page(),
        KeyCode::Char('g') => state.change_page(1),
        KeyCode::Char('G') => state.change_page(state.total_pages()),
        KeyCode::Char('+') | KeyCode::Char('=') => state.grow_items_per_page(),
        KeyCode::Char('-') => state.shrink_items_per_page(),
        _ => {}
    }
}

fn handle_insert_mode(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Esc => state.mode = Mode::Navigate,
        KeyCode::Enter => state.submit_draft(),
        KeyCode::Backspace => state.delete_draft_char_back(),
        KeyCode::Delete => state.delete_draft_char_forward(),
        KeyCode::Left if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.move_draft_cursor_word_left();
        }
        KeyCode::Right if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.move_draft_cursor_word_right();
        }
        KeyCode::Left => state.move_draft_cursor_left(),
        KeyCode::Right => state.move_draft_cursor_right(),
        KeyCode::Home => state.move_draft_cursor_home(),
        KeyCode::End => state.move_draft_cursor_end(),
        KeyCode::Char(c) => state.insert_draft_char(c),
        _ => {}
    }
}

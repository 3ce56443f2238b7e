//! Keyboard input handling.
//!
//! Maps terminal key events to [`App`] actions. In normal mode keys drive
//! the list; in editing mode they edit the search term.
//!
//! | Mode    | Key               | Action                      |
//! |---------|-------------------|-----------------------------|
//! | normal  | `q` / `Esc`       | quit                        |
//! | normal  | `/` / `i`         | edit the search term        |
//! | normal  | `Enter`           | submit the current term     |
//! | normal  | `j` `k` `g` `G`   | move the selection          |
//! | normal  | `d` / `Delete`    | dismiss the selected story  |
//! | normal  | `s` / `r`         | cycle sort key / reverse    |
//! | normal  | `1`..`5`          | re-run a recent search      |
//! | editing | `Enter`           | submit and leave editing    |
//! | editing | `Esc`             | leave editing               |

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, InputMode};

/// Process a single key event, updating app state accordingly.
///
/// Only reacts to key-press events (ignoring release / repeat) so that each
/// physical keypress triggers exactly one action.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit = true;
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal(app, key.code),
        InputMode::Editing => handle_editing(app, key.code),
    }
}

fn handle_normal(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Char('/') | KeyCode::Char('i') => app.input_mode = InputMode::Editing,
        KeyCode::Enter => {
            app.on_submit();
        }
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Home | KeyCode::Char('g') => app.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.select_last(),
        KeyCode::Delete | KeyCode::Char('d') => app.remove_selected(),
        KeyCode::Char('s') => app.cycle_sort(),
        KeyCode::Char('r') => app.toggle_reverse(),
        KeyCode::Char(c @ '1'..='5') => {
            let index = (c as usize) - ('1' as usize);
            app.select_recent(index);
        }
        _ => {}
    }
}

fn handle_editing(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Enter => {
            if app.on_submit() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Esc => app.input_mode = InputMode::Normal,
        KeyCode::Backspace => {
            let mut term = app.search_term().to_string();
            if term.pop().is_some() {
                app.on_input_change(term);
            }
        }
        KeyCode::Char(c) => {
            let mut term = app.search_term().to_string();
            term.push(c);
            app.on_input_change(term);
        }
        _ => {}
    }
}

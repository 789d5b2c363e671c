//! Event handling for the Hydro Freaks TUI

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use hydro_core::MonsterType;

use crate::app::{App, Screen};

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Quit,
    NeedsRedraw,
}

/// Handle a terminal event
pub fn handle_event(app: &mut App, event: Event) -> EventResult {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key),
        Event::Resize(_, _) => EventResult::NeedsRedraw,
        _ => EventResult::Continue,
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    // Global shortcuts (always work)
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        return EventResult::Quit;
    }

    if app.has_overlay() {
        return handle_overlay_key(app, key);
    }

    match app.screen() {
        Screen::Main => handle_main_menu(app, key),
        Screen::ChooseDrink => handle_choose_drink(app, key),
        Screen::EnterVolume(_) => handle_volume_input(app, key),
        Screen::Collection | Screen::History => handle_read_only(app, key),
        Screen::SelectMonster => handle_select_monster(app, key),
    }
}

/// Any of the usual dismiss keys closes an overlay
fn handle_overlay_key(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Char(' ') => {
            app.close_overlay();
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

fn handle_main_menu(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('1') => {
            app.clear_status();
            app.go_to(Screen::ChooseDrink);
            EventResult::NeedsRedraw
        }
        KeyCode::Char('2') => {
            app.go_to(Screen::Collection);
            EventResult::NeedsRedraw
        }
        KeyCode::Char('3') => {
            app.clear_status();
            app.go_to(Screen::SelectMonster);
            EventResult::NeedsRedraw
        }
        KeyCode::Char('4') => {
            app.go_to(Screen::History);
            EventResult::NeedsRedraw
        }
        KeyCode::Char('?') | KeyCode::F(1) => {
            app.toggle_help();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('0') | KeyCode::Char('q') => EventResult::Quit,
        KeyCode::Char(_) => {
            app.set_status("Invalid option.");
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

fn handle_choose_drink(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('0') | KeyCode::Esc => {
            app.back_to_main();
            EventResult::NeedsRedraw
        }
        KeyCode::Char(c) => {
            match c.to_digit(10) {
                Some(n) => app.choose_drink(n as usize),
                None => app.set_status("Invalid selection."),
            }
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

fn handle_volume_input(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Enter => {
            app.submit_volume();
            EventResult::NeedsRedraw
        }
        KeyCode::Esc => {
            app.go_to(Screen::ChooseDrink);
            EventResult::NeedsRedraw
        }
        KeyCode::Backspace => {
            app.backspace();
            EventResult::NeedsRedraw
        }
        KeyCode::Left => {
            app.cursor_left();
            EventResult::NeedsRedraw
        }
        KeyCode::Right => {
            app.cursor_right();
            EventResult::NeedsRedraw
        }
        KeyCode::Char(c) => {
            app.type_char(c);
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

fn handle_read_only(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('0') | KeyCode::Char('q') => {
            app.back_to_main();
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

fn handle_select_monster(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc | KeyCode::Char('0') | KeyCode::Char('q') => {
            app.back_to_main();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.selection_down();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.selection_up();
            EventResult::NeedsRedraw
        }
        KeyCode::Enter => {
            app.confirm_selection();
            EventResult::NeedsRedraw
        }
        KeyCode::Char(c) => {
            match c
                .to_digit(10)
                .and_then(|n| MonsterType::from_menu_number(n as usize))
            {
                Some(monster) => {
                    app.selection = monster.index();
                    app.select_monster(monster);
                }
                None => app.set_status("Invalid selection."),
            }
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

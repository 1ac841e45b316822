//! Keyboard input dispatch — overlays consume input first, then global
//! keys, then field editing.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use moldrate_core::{parse_or_zero, COMMON_CAVITY_COUNTS};

use crate::app::{AppState, Field, Overlay, PRESETS};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match app.overlay {
        Overlay::CavityPicker => {
            handle_picker(app, key);
            return;
        }
        Overlay::Help => {
            handle_help(app, key);
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys (always available).
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
            return;
        }
        KeyCode::Char('c') => {
            open_picker(app);
            return;
        }
        KeyCode::F(n @ 1..=3) => {
            app.apply_preset(&PRESETS[n as usize - 1]);
            return;
        }
        _ => {}
    }

    // 3. Field editing.
    handle_form_key(app, key);
}

fn handle_form_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => {
            app.focus = app.focus.next();
        }
        KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => {
            app.focus = app.focus.prev();
        }
        KeyCode::Char('h') | KeyCode::Left => {
            app.step_focused(-1);
        }
        KeyCode::Char('l') | KeyCode::Right => {
            app.step_focused(1);
        }
        KeyCode::Char('x') => {
            app.clear_focused();
        }
        KeyCode::Backspace => {
            app.backspace();
        }
        KeyCode::Enter => {
            if app.focus == Field::CavityCount {
                open_picker(app);
            }
        }
        KeyCode::Char(c) => {
            app.push_char(c);
        }
        _ => {}
    }
}

/// Open the quick-pick overlay with the cursor on the current value.
fn open_picker(app: &mut AppState) {
    app.focus = Field::CavityCount;
    let current = parse_or_zero(&app.raw.cavity_count);
    app.picker_cursor = COMMON_CAVITY_COUNTS
        .iter()
        .position(|&c| f64::from(c) == current)
        .unwrap_or(0);
    app.overlay = Overlay::CavityPicker;
}

fn handle_picker(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('c') => {
            app.overlay = Overlay::None;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.picker_cursor + 1 < COMMON_CAVITY_COUNTS.len() {
                app.picker_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.picker_cursor = app.picker_cursor.saturating_sub(1);
        }
        KeyCode::Enter => {
            let count = COMMON_CAVITY_COUNTS[app.picker_cursor];
            app.set_cavity(count);
            app.set_status(format!("{count} cavity mold"));
            app.overlay = Overlay::None;
        }
        _ => {}
    }
}

fn handle_help(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.overlay = Overlay::None;
        }
        KeyCode::F(n @ 1..=3) => {
            app.apply_preset(&PRESETS[n as usize - 1]);
            app.overlay = Overlay::None;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut AppState, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn q_quits() {
        let mut app = AppState::new();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn tab_and_arrows_move_focus() {
        let mut app = AppState::new();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Field::CycleMinutes);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.focus, Field::CycleSeconds);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.focus, Field::CycleMinutes);
    }

    #[test]
    fn picker_opens_on_current_value_and_selects() {
        let mut app = AppState::new();
        app.raw.cavity_count = "8".into();
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.overlay, Overlay::CavityPicker);
        assert_eq!(COMMON_CAVITY_COUNTS[app.picker_cursor], 8);

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.overlay, Overlay::None);
        assert_eq!(app.raw.cavity_count, "12");
    }

    #[test]
    fn picker_escape_leaves_field_untouched() {
        let mut app = AppState::new();
        app.raw.cavity_count = "5".into();
        app.recompute();
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.overlay, Overlay::None);
        assert_eq!(app.raw.cavity_count, "5");
    }

    #[test]
    fn enter_on_cavity_field_opens_picker() {
        let mut app = AppState::new();
        app.focus = Field::CavityCount;
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.overlay, Overlay::CavityPicker);
    }

    #[test]
    fn help_toggles() {
        let mut app = AppState::new();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.overlay, Overlay::Help);
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.overlay, Overlay::None);
    }

    #[test]
    fn function_keys_load_presets() {
        let mut app = AppState::new();
        press(&mut app, KeyCode::F(2));
        assert_eq!(app.raw.cycle_seconds, "45");
        assert_eq!(app.raw.cavity_count, "8");
        assert_eq!(app.raw.running_hours_per_day, "16");
    }
}

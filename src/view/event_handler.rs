// Copyright 2025 Lablup Inc. and Jeongkyu Shin
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tracing::{debug, info};

use crate::app_state::{AppState, Focus};
use crate::draw::state::DrawKind;
use crate::ui::layout::{Control, DrawLayout};

/// What the UI loop should do after an input event was applied to the
/// state. Draws are returned instead of started here because starting one
/// needs the state lock the caller is holding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiAction {
    None,
    Quit,
    Draw(DrawKind),
}

pub fn handle_key_event(key_event: KeyEvent, state: &mut AppState) -> UiAction {
    if key_event.kind == KeyEventKind::Release {
        return UiAction::None;
    }
    if key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c')
    {
        return UiAction::Quit;
    }

    if state.show_help {
        return handle_help_keys(key_event.code, state);
    }
    if state.focus != Focus::None {
        handle_edit_keys(key_event.code, state);
        return UiAction::None;
    }

    match key_event.code {
        KeyCode::Esc | KeyCode::Char('q') => UiAction::Quit,
        KeyCode::Char('t') | KeyCode::Char('T') => UiAction::Draw(DrawKind::Table),
        KeyCode::Char('s') | KeyCode::Char('S') => UiAction::Draw(DrawKind::Seat),
        KeyCode::Char('r') | KeyCode::Char('R') => {
            state.reset();
            info!("results reset");
            UiAction::None
        }
        KeyCode::Tab => {
            state.focus_next();
            UiAction::None
        }
        KeyCode::Char('h') | KeyCode::Char('?') => {
            state.show_help = true;
            state.mark_changed();
            UiAction::None
        }
        _ => UiAction::None,
    }
}

fn handle_help_keys(key_code: KeyCode, state: &mut AppState) -> UiAction {
    match key_code {
        KeyCode::Char('q') => UiAction::Quit,
        KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('?') => {
            state.show_help = false;
            state.mark_changed();
            UiAction::None
        }
        _ => UiAction::None,
    }
}

fn handle_edit_keys(key_code: KeyCode, state: &mut AppState) {
    match key_code {
        KeyCode::Esc => state.cancel_edit(),
        KeyCode::Enter => commit_edit(state),
        KeyCode::Tab => state.focus_next(),
        KeyCode::Backspace => state.pop_edit_char(),
        KeyCode::Up | KeyCode::Char('+') => state.step_focused_bound(1),
        KeyCode::Down => state.step_focused_bound(-1),
        KeyCode::Char(c) => state.push_edit_char(c),
        _ => {}
    }
}

fn commit_edit(state: &mut AppState) {
    match state.commit_edit() {
        Ok(Some((kind, value))) => {
            info!(%kind, value, "bound updated");
            state
                .notifications
                .info(format!("{} max = {value}", kind.label()));
        }
        Ok(None) => {}
        Err(e) => {
            debug!("bound edit rejected: {e}");
            state.notifications.warning(format!("Warning: {e}"));
            state.mark_changed();
        }
    }
}

pub fn handle_mouse_event(
    mouse_event: MouseEvent,
    state: &mut AppState,
    cols: u16,
    rows: u16,
) -> UiAction {
    let MouseEventKind::Down(MouseButton::Left) = mouse_event.kind else {
        return UiAction::None;
    };

    if state.show_help {
        state.show_help = false;
        state.mark_changed();
        return UiAction::None;
    }

    let layout = DrawLayout::compute(cols, rows);
    match layout.hit_test(mouse_event.column, mouse_event.row) {
        Some(Control::BoundInput(kind)) => {
            state.set_focus(match kind {
                DrawKind::Table => Focus::TableMax,
                DrawKind::Seat => Focus::SeatMax,
            });
            UiAction::None
        }
        Some(Control::DrawButton(kind)) => {
            if state.focus != Focus::None {
                state.cancel_edit();
            }
            UiAction::Draw(kind)
        }
        Some(Control::ResetButton) => {
            state.reset();
            info!("results reset");
            UiAction::None
        }
        None => {
            if state.focus != Focus::None {
                state.cancel_edit();
            }
            UiAction::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_draw_keys() {
        let mut state = AppState::default();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('t')), &mut state),
            UiAction::Draw(DrawKind::Table)
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('s')), &mut state),
            UiAction::Draw(DrawKind::Seat)
        );
    }

    #[test]
    fn test_quit_keys() {
        let mut state = AppState::default();
        assert_eq!(handle_key_event(key(KeyCode::Char('q')), &mut state), UiAction::Quit);
        assert_eq!(handle_key_event(key(KeyCode::Esc), &mut state), UiAction::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(ctrl_c, &mut state), UiAction::Quit);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut state = AppState::default();
        let release = KeyEvent {
            code: KeyCode::Char('t'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(handle_key_event(release, &mut state), UiAction::None);
    }

    #[test]
    fn test_reset_key_clears_results() {
        let mut state = AppState::default();
        state.draw.set_result(DrawKind::Table, 3);
        state.draw.set_result(DrawKind::Seat, 4);
        handle_key_event(key(KeyCode::Char('r')), &mut state);
        assert_eq!(state.draw.table, None);
        assert_eq!(state.draw.seat, None);
        assert!(!state.draw.rolling);
    }

    #[test]
    fn test_esc_closes_help_before_quitting() {
        let mut state = AppState::default();
        handle_key_event(key(KeyCode::Char('h')), &mut state);
        assert!(state.show_help);
        assert_eq!(handle_key_event(key(KeyCode::Esc), &mut state), UiAction::None);
        assert!(!state.show_help);
    }

    #[test]
    fn test_draw_keys_ignored_while_help_open() {
        let mut state = AppState::default();
        state.show_help = true;
        assert_eq!(
            handle_key_event(key(KeyCode::Char('t')), &mut state),
            UiAction::None
        );
    }

    #[test]
    fn test_edit_table_max_to_zero_gives_one() {
        let mut state = AppState::default();
        handle_key_event(key(KeyCode::Tab), &mut state);
        handle_key_event(key(KeyCode::Backspace), &mut state);
        handle_key_event(key(KeyCode::Backspace), &mut state);
        handle_key_event(key(KeyCode::Char('0')), &mut state);
        handle_key_event(key(KeyCode::Enter), &mut state);

        assert_eq!(state.draw.table_max(), 1);
        assert_eq!(state.focus, Focus::None);
        assert!(state.notifications.get_current_notification().is_some());
    }

    #[test]
    fn test_edit_keys_do_not_draw() {
        let mut state = AppState::default();
        handle_key_event(key(KeyCode::Tab), &mut state);
        assert_eq!(
            handle_key_event(key(KeyCode::Char('t')), &mut state),
            UiAction::None
        );
        assert_eq!(state.edit_buffer, "30");
    }

    #[test]
    fn test_empty_edit_warns_and_keeps_bound() {
        let mut state = AppState::default();
        handle_key_event(key(KeyCode::Tab), &mut state);
        handle_key_event(key(KeyCode::Tab), &mut state);
        handle_key_event(key(KeyCode::Backspace), &mut state);
        handle_key_event(key(KeyCode::Backspace), &mut state);
        handle_key_event(key(KeyCode::Enter), &mut state);

        assert_eq!(state.draw.seat_max(), 10);
        assert_eq!(state.focus, Focus::SeatMax);
        let message = &state.notifications.get_current_notification().unwrap().message;
        assert!(message.starts_with("Warning"));
    }

    #[test]
    fn test_escape_cancels_edit() {
        let mut state = AppState::default();
        handle_key_event(key(KeyCode::Tab), &mut state);
        handle_key_event(key(KeyCode::Char('5')), &mut state);
        assert_eq!(handle_key_event(key(KeyCode::Esc), &mut state), UiAction::None);
        assert_eq!(state.focus, Focus::None);
        assert_eq!(state.draw.table_max(), 30);
    }

    #[test]
    fn test_arrow_steps_bound() {
        let mut state = AppState::default();
        handle_key_event(key(KeyCode::Tab), &mut state);
        handle_key_event(key(KeyCode::Up), &mut state);
        assert_eq!(state.draw.table_max(), 31);
        handle_key_event(key(KeyCode::Down), &mut state);
        handle_key_event(key(KeyCode::Down), &mut state);
        assert_eq!(state.draw.table_max(), 29);
    }

    #[test]
    fn test_listed_step_keys_change_bound() {
        let mut state = AppState::default();
        handle_key_event(key(KeyCode::Tab), &mut state);
        handle_key_event(key(KeyCode::Char('+')), &mut state);
        assert_eq!(state.draw.table_max(), 31);
        handle_key_event(key(KeyCode::Up), &mut state);
        assert_eq!(state.draw.table_max(), 32);
        handle_key_event(key(KeyCode::Down), &mut state);
        assert_eq!(state.draw.table_max(), 31);
        assert_eq!(state.edit_buffer, "31");
    }

    #[test]
    fn test_minus_after_focus_starts_negative_entry() {
        let mut state = AppState::default();
        handle_key_event(key(KeyCode::Tab), &mut state);
        handle_key_event(key(KeyCode::Char('-')), &mut state);
        assert_eq!(state.edit_buffer, "-");
        assert_eq!(state.draw.table_max(), 30);
        handle_key_event(key(KeyCode::Char('3')), &mut state);
        handle_key_event(key(KeyCode::Enter), &mut state);
        assert_eq!(state.draw.table_max(), 1);
    }

    #[test]
    fn test_typing_after_focus_replaces_bound() {
        let mut state = AppState::default();
        handle_key_event(key(KeyCode::Tab), &mut state);
        handle_key_event(key(KeyCode::Char('5')), &mut state);
        handle_key_event(key(KeyCode::Enter), &mut state);
        assert_eq!(state.draw.table_max(), 5);
    }

    #[test]
    fn test_click_draw_button() {
        let mut state = AppState::default();
        let layout = DrawLayout::compute(80, 24);
        let b = layout.seat_button;
        assert_eq!(
            handle_mouse_event(click(b.center_x(), b.center_y()), &mut state, 80, 24),
            UiAction::Draw(DrawKind::Seat)
        );
    }

    #[test]
    fn test_click_input_focuses_it() {
        let mut state = AppState::default();
        let layout = DrawLayout::compute(80, 24);
        let input = layout.table_input;
        handle_mouse_event(click(input.x + 1, input.y), &mut state, 80, 24);
        assert_eq!(state.focus, Focus::TableMax);
    }

    #[test]
    fn test_click_reset_button() {
        let mut state = AppState::default();
        state.draw.set_result(DrawKind::Seat, 2);
        let r = DrawLayout::compute(80, 24).reset_button;
        handle_mouse_event(click(r.center_x(), r.center_y()), &mut state, 80, 24);
        assert_eq!(state.draw.seat, None);
    }

    #[test]
    fn test_click_outside_cancels_edit() {
        let mut state = AppState::default();
        state.set_focus(Focus::SeatMax);
        handle_mouse_event(click(0, 0), &mut state, 80, 24);
        assert_eq!(state.focus, Focus::None);
    }
}

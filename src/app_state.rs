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

use crate::draw::bounds::{parse_bound, step_bound};
use crate::draw::state::{DrawKind, DrawState};
use crate::error::Result;
use crate::ui::confetti::Confetti;
use crate::ui::notification::NotificationManager;

/// Which bound editor receives typed input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    None,
    TableMax,
    SeatMax,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::None => Focus::TableMax,
            Focus::TableMax => Focus::SeatMax,
            Focus::SeatMax => Focus::None,
        }
    }

    pub fn kind(self) -> Option<DrawKind> {
        match self {
            Focus::None => None,
            Focus::TableMax => Some(DrawKind::Table),
            Focus::SeatMax => Some(DrawKind::Seat),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub draw: DrawState,
    /// Draw currently animating, used to pick the flashing card.
    pub rolling_kind: Option<DrawKind>,
    /// Ticks sampled by the current (or last) draw.
    pub ticks_elapsed: u32,
    pub focus: Focus,
    pub edit_buffer: String,
    /// The buffer still mirrors the stored bound, so the next typed
    /// character starts a new value instead of appending.
    pub replace_on_type: bool,
    pub show_help: bool,
    pub notifications: NotificationManager,
    pub confetti: Confetti,
    /// Bumped on every mutation so the UI loop can skip idle frames.
    pub state_version: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DrawState::new())
    }
}

impl AppState {
    pub fn new(draw: DrawState) -> Self {
        AppState {
            draw,
            rolling_kind: None,
            ticks_elapsed: 0,
            focus: Focus::None,
            edit_buffer: String::new(),
            replace_on_type: false,
            show_help: false,
            notifications: NotificationManager::new(),
            confetti: Confetti::new(),
            state_version: 0,
        }
    }

    pub fn mark_changed(&mut self) {
        self.state_version = self.state_version.wrapping_add(1);
    }

    /// Move focus to the next bound editor, committing nothing. The edit
    /// buffer is preloaded with the newly focused bound.
    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.edit_buffer = match focus.kind() {
            Some(kind) => self.draw.max_for(kind).to_string(),
            None => String::new(),
        };
        self.replace_on_type = focus != Focus::None;
        self.mark_changed();
    }

    pub fn push_edit_char(&mut self, c: char) {
        if self.focus == Focus::None {
            return;
        }
        let at_start = self.replace_on_type || self.edit_buffer.is_empty();
        if !(c.is_ascii_digit() || (c == '-' && at_start)) {
            return;
        }
        if self.replace_on_type {
            self.edit_buffer.clear();
            self.replace_on_type = false;
        }
        if self.edit_buffer.len() < 12 {
            self.edit_buffer.push(c);
            self.mark_changed();
        }
    }

    pub fn pop_edit_char(&mut self) {
        self.replace_on_type = false;
        if self.edit_buffer.pop().is_some() {
            self.mark_changed();
        }
    }

    /// Apply the edit buffer to the focused bound.
    ///
    /// Rejected input leaves the previous bound in place and the editor
    /// focused. On success focus is released.
    pub fn commit_edit(&mut self) -> Result<Option<(DrawKind, u32)>> {
        let Some(kind) = self.focus.kind() else {
            return Ok(None);
        };
        let value = parse_bound(&self.edit_buffer)?;
        self.draw.set_max_for(kind, value as i64);
        self.set_focus(Focus::None);
        Ok(Some((kind, self.draw.max_for(kind))))
    }

    pub fn cancel_edit(&mut self) {
        self.set_focus(Focus::None);
    }

    /// Step the focused bound by `delta` and mirror it in the edit buffer.
    pub fn step_focused_bound(&mut self, delta: i64) {
        let Some(kind) = self.focus.kind() else {
            return;
        };
        let stepped = step_bound(self.draw.max_for(kind), delta);
        self.draw.set_max_for(kind, stepped as i64);
        self.edit_buffer = stepped.to_string();
        self.replace_on_type = true;
        self.mark_changed();
    }

    /// Clear both results. Bounds and any running draw are left alone.
    pub fn reset(&mut self) {
        self.draw.reset();
        self.notifications.clear();
        self.mark_changed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_focus_cycles_through_editors() {
        let mut state = AppState::default();
        state.focus_next();
        assert_eq!(state.focus, Focus::TableMax);
        assert_eq!(state.edit_buffer, "30");
        state.focus_next();
        assert_eq!(state.focus, Focus::SeatMax);
        assert_eq!(state.edit_buffer, "10");
        state.focus_next();
        assert_eq!(state.focus, Focus::None);
        assert!(state.edit_buffer.is_empty());
    }

    #[test]
    fn test_commit_edit_clamps_zero_to_one() {
        let mut state = AppState::default();
        state.set_focus(Focus::TableMax);
        state.edit_buffer.clear();
        state.push_edit_char('0');

        let committed = state.commit_edit().unwrap();

        assert_eq!(committed, Some((DrawKind::Table, 1)));
        assert_eq!(state.draw.table_max(), 1);
        assert_eq!(state.focus, Focus::None);
    }

    #[test]
    fn test_commit_edit_clamps_negative_to_one() {
        let mut state = AppState::default();
        state.set_focus(Focus::SeatMax);
        state.edit_buffer.clear();
        for c in "-4".chars() {
            state.push_edit_char(c);
        }
        state.commit_edit().unwrap();
        assert_eq!(state.draw.seat_max(), 1);
    }

    #[test]
    fn test_commit_empty_edit_keeps_previous_bound() {
        let mut state = AppState::default();
        state.set_focus(Focus::TableMax);
        state.edit_buffer.clear();

        assert!(matches!(state.commit_edit(), Err(Error::InvalidBound(_))));
        assert_eq!(state.draw.table_max(), 30);
        assert_eq!(state.focus, Focus::TableMax);
    }

    #[test]
    fn test_minus_only_accepted_first() {
        let mut state = AppState::default();
        state.set_focus(Focus::TableMax);
        state.edit_buffer.clear();
        for c in "1-2x".chars() {
            state.push_edit_char(c);
        }
        assert_eq!(state.edit_buffer, "12");
    }

    #[test]
    fn test_first_typed_digit_replaces_preloaded_bound() {
        let mut state = AppState::default();
        state.set_focus(Focus::TableMax);
        assert_eq!(state.edit_buffer, "30");
        state.push_edit_char('5');
        state.push_edit_char('0');
        assert_eq!(state.edit_buffer, "50");
        assert_eq!(state.commit_edit().unwrap(), Some((DrawKind::Table, 50)));
    }

    #[test]
    fn test_leading_minus_typed_right_after_focus() {
        let mut state = AppState::default();
        state.set_focus(Focus::SeatMax);
        state.push_edit_char('-');
        state.push_edit_char('2');
        assert_eq!(state.edit_buffer, "-2");
        state.commit_edit().unwrap();
        assert_eq!(state.draw.seat_max(), 1);
    }

    #[test]
    fn test_rejected_char_keeps_preloaded_bound() {
        let mut state = AppState::default();
        state.set_focus(Focus::TableMax);
        state.push_edit_char('x');
        assert_eq!(state.edit_buffer, "30");
        state.push_edit_char('7');
        assert_eq!(state.edit_buffer, "7");
    }

    #[test]
    fn test_backspace_edits_preloaded_bound() {
        let mut state = AppState::default();
        state.set_focus(Focus::TableMax);
        state.pop_edit_char();
        state.push_edit_char('5');
        assert_eq!(state.edit_buffer, "35");
    }

    #[test]
    fn test_typing_without_focus_is_ignored() {
        let mut state = AppState::default();
        state.push_edit_char('5');
        assert!(state.edit_buffer.is_empty());
    }

    #[test]
    fn test_step_focused_bound_never_below_one() {
        let mut state = AppState::new(DrawState::with_bounds(2, 10));
        state.set_focus(Focus::TableMax);
        state.step_focused_bound(-1);
        state.step_focused_bound(-1);
        assert_eq!(state.draw.table_max(), 1);
        assert_eq!(state.edit_buffer, "1");
        state.step_focused_bound(1);
        assert_eq!(state.draw.table_max(), 2);
    }

    #[test]
    fn test_reset_keeps_rolling_and_bounds() {
        let mut state = AppState::default();
        state.draw.set_result(DrawKind::Table, 5);
        state.draw.rolling = true;
        let version = state.state_version;

        state.reset();

        assert_eq!(state.draw.table, None);
        assert!(state.draw.rolling);
        assert_eq!(state.draw.table_max(), 30);
        assert!(state.state_version > version);
    }
}

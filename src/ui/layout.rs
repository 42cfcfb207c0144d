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

//! Screen layout for the draw screen.
//!
//! The renderer and the mouse handler both work from the same
//! [`DrawLayout`] so a click lands on exactly what was drawn.

use crate::draw::state::DrawKind;
use crate::ui::canvas::Rect;

pub const TITLE_Y: u16 = 1;
pub const CARD_Y: u16 = 3;
pub const CARD_HEIGHT: u16 = 9;
pub const CARD_MAX_WIDTH: u16 = 34;
pub const CARD_GAP: u16 = 4;
pub const INPUT_WIDTH: u16 = 12;
pub const BUTTON_HEIGHT: u16 = 3;
pub const RESET_BUTTON_WIDTH: u16 = 16;

/// Anything on screen that reacts to a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    DrawButton(DrawKind),
    BoundInput(DrawKind),
    ResetButton,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawLayout {
    pub cols: u16,
    pub rows: u16,
    pub table_card: Rect,
    pub seat_card: Rect,
    pub table_input: Rect,
    pub seat_input: Rect,
    pub table_button: Rect,
    pub seat_button: Rect,
    pub reset_button: Rect,
    /// Row of the function key bar.
    pub footer_y: u16,
}

impl DrawLayout {
    pub fn compute(cols: u16, rows: u16) -> Self {
        let card_width = (cols.saturating_sub(CARD_GAP + 4) / 2).clamp(4, CARD_MAX_WIDTH);
        let total_width = card_width * 2 + CARD_GAP;
        let left = cols.saturating_sub(total_width) / 2;
        let right = left + card_width + CARD_GAP;

        let table_card = Rect::new(left, CARD_Y, card_width, CARD_HEIGHT);
        let seat_card = Rect::new(right, CARD_Y, card_width, CARD_HEIGHT);

        let input_y = CARD_Y + CARD_HEIGHT + 1;
        let input_width = INPUT_WIDTH.min(card_width);
        let input_x = |card: Rect| card.x + card.width.saturating_sub(input_width);
        let table_input = Rect::new(input_x(table_card), input_y, input_width, 1);
        let seat_input = Rect::new(input_x(seat_card), input_y, input_width, 1);

        let button_y = input_y + 2;
        let table_button = Rect::new(table_card.x, button_y, card_width, BUTTON_HEIGHT);
        let seat_button = Rect::new(seat_card.x, button_y, card_width, BUTTON_HEIGHT);

        let reset_width = RESET_BUTTON_WIDTH.min(cols);
        let reset_button = Rect::new(
            cols.saturating_sub(reset_width) / 2,
            button_y + BUTTON_HEIGHT + 1,
            reset_width,
            BUTTON_HEIGHT,
        );

        Self {
            cols,
            rows,
            table_card,
            seat_card,
            table_input,
            seat_input,
            table_button,
            seat_button,
            reset_button,
            footer_y: rows.saturating_sub(1),
        }
    }

    pub fn card(&self, kind: DrawKind) -> Rect {
        match kind {
            DrawKind::Table => self.table_card,
            DrawKind::Seat => self.seat_card,
        }
    }

    pub fn input(&self, kind: DrawKind) -> Rect {
        match kind {
            DrawKind::Table => self.table_input,
            DrawKind::Seat => self.seat_input,
        }
    }

    pub fn button(&self, kind: DrawKind) -> Rect {
        match kind {
            DrawKind::Table => self.table_button,
            DrawKind::Seat => self.seat_button,
        }
    }

    /// Control under the terminal cell `(x, y)`, if any.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<Control> {
        [DrawKind::Table, DrawKind::Seat]
            .into_iter()
            .find_map(|kind| {
                if self.button(kind).contains(x, y) {
                    Some(Control::DrawButton(kind))
                } else if self.input(kind).contains(x, y) {
                    Some(Control::BoundInput(kind))
                } else {
                    None
                }
            })
            .or_else(|| self.reset_button.contains(x, y).then_some(Control::ResetButton))
    }
}

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

use crossterm::style::Color;

use crate::ui::canvas::{Canvas, Rect};
use crate::ui::text::{display_width, truncate_to_width};

pub const DIGIT_WIDTH: u16 = 3;
pub const DIGIT_HEIGHT: u16 = 5;
const DIGIT_GAP: u16 = 1;

// 3x5 block font, one row per string
const DIGITS: [[&str; 5]; 10] = [
    ["███", "█ █", "█ █", "█ █", "███"],
    ["██ ", " █ ", " █ ", " █ ", "███"],
    ["███", "  █", "███", "█  ", "███"],
    ["███", "  █", "███", "  █", "███"],
    ["█ █", "█ █", "███", "  █", "  █"],
    ["███", "█  ", "███", "  █", "███"],
    ["███", "█  ", "███", "█ █", "███"],
    ["███", "  █", "  █", "  █", "  █"],
    ["███", "█ █", "███", "█ █", "███"],
    ["███", "█ █", "███", "  █", "███"],
];

/// Width in columns of `value` drawn with the block font.
pub fn big_number_width(value: u32) -> u16 {
    let digits = value.to_string().len() as u16;
    digits * DIGIT_WIDTH + digits.saturating_sub(1) * DIGIT_GAP
}

/// Rows of block art for `value`.
pub fn big_number_rows(value: u32) -> [String; DIGIT_HEIGHT as usize] {
    let mut rows: [String; DIGIT_HEIGHT as usize] = Default::default();
    for (i, ch) in value.to_string().chars().enumerate() {
        let Some(digit) = ch.to_digit(10) else {
            continue;
        };
        for (row, line) in rows.iter_mut().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            line.push_str(DIGITS[digit as usize][row]);
        }
    }
    rows
}

/// Result card: bordered box with a label and the drawn value. Values too
/// wide for block digits fall back to plain text. Unset values leave the
/// card blank.
pub fn draw_result_card(
    canvas: &mut Canvas,
    area: Rect,
    label: &str,
    value: Option<u32>,
    value_color: Color,
    border_color: Color,
) {
    canvas.draw_box(area, border_color);
    canvas.put_centered(area, area.y + 1, label, Color::White, None);

    let Some(value) = value else {
        return;
    };
    let inner = Rect::new(area.x + 1, area.y, area.width.saturating_sub(2), area.height);
    let digits_top = area.y + 2;
    if big_number_width(value) <= inner.width && area.height >= DIGIT_HEIGHT + 3 {
        for (i, row) in big_number_rows(value).iter().enumerate() {
            canvas.put_centered(inner, digits_top + i as u16, row, value_color, None);
        }
    } else {
        let text = value.to_string();
        canvas.put_centered(inner, digits_top + DIGIT_HEIGHT / 2, &text, value_color, None);
    }
}

/// Boxed button with a centered label.
pub fn draw_button(canvas: &mut Canvas, area: Rect, label: &str, color: Color) {
    canvas.draw_box(area, color);
    canvas.put_centered(area, area.center_y(), label, color, None);
}

/// Labelled numeric input. The label is drawn to the left of `area`; a
/// focused input shows the edit buffer with a cursor.
pub fn draw_bound_input(
    canvas: &mut Canvas,
    area: Rect,
    label: &str,
    text: &str,
    focused: bool,
) {
    let label_width = display_width(label) as u16 + 1;
    if let Some(label_x) = area.x.checked_sub(label_width) {
        canvas.put_str(label_x, area.y, label, Color::White, None);
    }

    let (fg, bg) = if focused {
        (Color::Black, Some(Color::Cyan))
    } else {
        (Color::Cyan, Some(Color::DarkGrey))
    };
    canvas.fill(area, ' ', fg, bg);
    let shown = if focused {
        format!(" {text}_")
    } else {
        format!(" {text}")
    };
    let shown = truncate_to_width(&shown, area.width as usize);
    canvas.put_str(area.x, area.y, &shown, fg, bg);
}

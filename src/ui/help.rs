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

const KEY_COLUMN_WIDTH: u16 = 14;

fn get_shortcuts() -> Vec<(&'static str, &'static str, bool)> {
    vec![
        ("Draw 抽奖", "", true),
        ("  t", "Draw a table number", false),
        ("  s", "Draw a seat number", false),
        ("  r", "Clear both results", false),
        ("  click", "Press a button or focus a field", false),
        ("", "", false),
        ("Bounds 上限", "", true),
        ("  Tab", "Edit table max, then seat max", false),
        ("  0-9 -", "Type a new bound (replaces it)", false),
        ("  ↑ ↓ / +", "Step the bound by one", false),
        ("  Enter", "Apply (values below 1 become 1)", false),
        ("  Esc", "Cancel the edit", false),
        ("", "", false),
        ("Display", "", true),
        ("  h / ?", "Toggle this help", false),
        ("  q / Esc", "Exit", false),
    ]
}

/// Help popup drawn over the center of the screen.
pub fn draw_help_overlay(canvas: &mut Canvas) {
    let shortcuts = get_shortcuts();
    let popup_width = 52u16.min(canvas.width().saturating_sub(4));
    let popup_height = (shortcuts.len() as u16 + 5).min(canvas.height().saturating_sub(2));
    let popup = Rect::new(
        canvas.width().saturating_sub(popup_width) / 2,
        canvas.height().saturating_sub(popup_height) / 2,
        popup_width,
        popup_height,
    );

    canvas.fill(popup, ' ', Color::White, Some(Color::Black));
    canvas.draw_box(popup, Color::Cyan);
    canvas.put_centered(
        popup,
        popup.y + 1,
        "KEYBOARD SHORTCUTS 快捷键",
        Color::Yellow,
        Some(Color::Black),
    );

    let key_x = popup.x + 2;
    let desc_x = key_x + KEY_COLUMN_WIDTH;
    let last_row = popup.y + popup.height.saturating_sub(2);
    for (i, (key, description, is_header)) in shortcuts.iter().enumerate() {
        let y = popup.y + 3 + i as u16;
        if y >= last_row {
            break;
        }
        let key_color = if *is_header { Color::Cyan } else { Color::Green };
        canvas.put_str(key_x, y, key, key_color, Some(Color::Black));
        canvas.put_str(desc_x, y, description, Color::White, Some(Color::Black));
    }

    canvas.put_centered(
        popup,
        last_row,
        "Press h, ? or ESC to close this help",
        Color::Magenta,
        Some(Color::Black),
    );
}

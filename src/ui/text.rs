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

use std::io::Write;

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

// Display width of a single character. CJK labels take two columns.
pub fn char_display_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}

// Display width of a string in terminal columns
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

// Truncate a string to fit within a given display width. A wide character
// that would straddle the limit is dropped.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = char_display_width(c);
        if current_width + char_width <= max_width {
            result.push(c);
            current_width += char_width;
        } else {
            break;
        }
    }

    result
}

/// Left column at which `text` starts when centered in `width` columns.
pub fn centered_offset(text: &str, width: usize) -> usize {
    width.saturating_sub(display_width(text)) / 2
}

pub fn print_colored_text<W: Write>(
    stdout: &mut W,
    text: &str,
    fg_color: Color,
    bg_color: Option<Color>,
) -> std::io::Result<()> {
    if let Some(bg) = bg_color {
        queue!(
            stdout,
            SetForegroundColor(fg_color),
            SetBackgroundColor(bg),
            Print(text),
            ResetColor
        )
    } else {
        queue!(stdout, SetForegroundColor(fg_color), Print(text), ResetColor)
    }
}

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

//! Cell grid the screen is composed on before it is written out.
//!
//! Widgets draw into a [`Canvas`] in any order; the confetti layer is drawn
//! last so it sits on top. [`Canvas::to_content`] then turns every row into
//! one colored line for the differential renderer.

use crossterm::style::Color;

use crate::ui::buffer::BufferWriter;
use crate::ui::text::{centered_offset, char_display_width, print_colored_text};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Option<Color>,
    /// Right half of a wide character drawn in the previous cell.
    pub continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::White,
            bg: None,
            continuation: false,
        }
    }
}

/// Axis-aligned rectangle in terminal cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && (x as u32) < self.x as u32 + self.width as u32
            && (y as u32) < self.y as u32 + self.height as u32
    }

    pub fn center_x(&self) -> u16 {
        self.x + self.width / 2
    }

    pub fn center_y(&self) -> u16 {
        self.y + self.height / 2
    }
}

pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cell(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Put one character. Wide characters that do not fit are skipped.
    /// Returns the number of columns used.
    pub fn put_char(&mut self, x: u16, y: u16, ch: char, fg: Color, bg: Option<Color>) -> u16 {
        let w = char_display_width(ch) as u16;
        if w == 0 || x as u32 + w as u32 > self.width as u32 || y >= self.height {
            return 0;
        }
        self.clear_wide_neighbor(x, y);
        if let Some(i) = self.index(x, y) {
            self.cells[i] = Cell {
                ch,
                fg,
                bg,
                continuation: false,
            };
        }
        if w == 2 {
            self.clear_wide_neighbor(x + 1, y);
            if let Some(i) = self.index(x + 1, y) {
                self.cells[i] = Cell {
                    ch: ' ',
                    fg,
                    bg,
                    continuation: true,
                };
            }
        }
        w
    }

    // Overwriting half of a wide character blanks the other half.
    fn clear_wide_neighbor(&mut self, x: u16, y: u16) {
        let Some(i) = self.index(x, y) else {
            return;
        };
        if self.cells[i].continuation && x > 0 {
            self.cells[i - 1].ch = ' ';
        } else if let Some(next) = self.index(x + 1, y) {
            if self.cells[next].continuation {
                self.cells[next].continuation = false;
            }
        }
    }

    /// Write a string starting at `(x, y)`, clipped at the right edge.
    /// Returns the number of columns written.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, fg: Color, bg: Option<Color>) -> u16 {
        let mut col = x;
        for ch in text.chars() {
            if col >= self.width {
                break;
            }
            let used = self.put_char(col, y, ch, fg, bg);
            if used == 0 && char_display_width(ch) > 0 {
                break;
            }
            col += used;
        }
        col - x
    }

    /// Write `text` centered inside `area` on row `y`.
    pub fn put_centered(&mut self, area: Rect, y: u16, text: &str, fg: Color, bg: Option<Color>) {
        let offset = centered_offset(text, area.width as usize) as u16;
        self.put_str(area.x + offset, y, text, fg, bg);
    }

    pub fn fill(&mut self, area: Rect, ch: char, fg: Color, bg: Option<Color>) {
        for y in area.y..area.y.saturating_add(area.height).min(self.height) {
            for x in area.x..area.x.saturating_add(area.width).min(self.width) {
                self.put_char(x, y, ch, fg, bg);
            }
        }
    }

    /// Draw a single-line box border around `area`.
    pub fn draw_box(&mut self, area: Rect, fg: Color) {
        if area.width < 2 || area.height < 2 {
            return;
        }
        let right = area.x + area.width - 1;
        let bottom = area.y + area.height - 1;
        for x in area.x + 1..right {
            self.put_char(x, area.y, '─', fg, None);
            self.put_char(x, bottom, '─', fg, None);
        }
        for y in area.y + 1..bottom {
            self.put_char(area.x, y, '│', fg, None);
            self.put_char(right, y, '│', fg, None);
        }
        self.put_char(area.x, area.y, '┌', fg, None);
        self.put_char(right, area.y, '┐', fg, None);
        self.put_char(area.x, bottom, '└', fg, None);
        self.put_char(right, bottom, '┘', fg, None);
    }

    /// Plain text of one row, for tests and logging.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.cell(x, y))
            .filter(|cell| !cell.continuation)
            .map(|cell| cell.ch)
            .collect()
    }

    /// Serialize the grid into colored lines separated by `\r\n`.
    pub fn to_content(&self) -> std::io::Result<String> {
        let mut buffer = BufferWriter::new();
        for y in 0..self.height {
            let mut run = String::new();
            let mut run_style: Option<(Color, Option<Color>)> = None;
            for x in 0..self.width {
                let Some(cell) = self.cell(x, y) else {
                    continue;
                };
                if cell.continuation {
                    continue;
                }
                let style = (cell.fg, cell.bg);
                if run_style != Some(style) {
                    if let Some((fg, bg)) = run_style {
                        print_colored_text(&mut buffer, &run, fg, bg)?;
                    }
                    run.clear();
                    run_style = Some(style);
                }
                run.push(cell.ch);
            }
            if let Some((fg, bg)) = run_style {
                print_colored_text(&mut buffer, &run, fg, bg)?;
            }
            if y + 1 < self.height {
                buffer.push_line_break();
            }
        }
        Ok(buffer.into_content())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_str_clips_at_right_edge() {
        let mut canvas = Canvas::new(5, 1);
        let written = canvas.put_str(2, 0, "Reset", Color::White, None);
        assert_eq!(written, 3);
        assert_eq!(canvas.row_text(0), "  Res");
    }

    #[test]
    fn test_wide_chars_take_two_cells() {
        let mut canvas = Canvas::new(6, 1);
        let written = canvas.put_str(0, 0, "桌号", Color::White, None);
        assert_eq!(written, 4);
        assert!(canvas.cell(1, 0).unwrap().continuation);
        assert_eq!(canvas.row_text(0), "桌号  ");
    }

    #[test]
    fn test_wide_char_not_split_at_edge() {
        let mut canvas = Canvas::new(3, 1);
        canvas.put_str(0, 0, "桌号", Color::White, None);
        assert_eq!(canvas.row_text(0), "桌 ");
    }

    #[test]
    fn test_overwriting_half_of_wide_char_blanks_it() {
        let mut canvas = Canvas::new(4, 1);
        canvas.put_str(0, 0, "座", Color::White, None);
        canvas.put_char(1, 0, '*', Color::Red, None);
        assert_eq!(canvas.row_text(0), " *  ");
    }

    #[test]
    fn test_put_centered() {
        let mut canvas = Canvas::new(10, 1);
        canvas.put_centered(Rect::new(0, 0, 10, 1), 0, "ab", Color::White, None);
        assert_eq!(canvas.row_text(0), "    ab    ");
    }

    #[test]
    fn test_draw_box_corners() {
        let mut canvas = Canvas::new(4, 3);
        canvas.draw_box(Rect::new(0, 0, 4, 3), Color::White);
        assert_eq!(canvas.row_text(0), "┌──┐");
        assert_eq!(canvas.row_text(1), "│  │");
        assert_eq!(canvas.row_text(2), "└──┘");
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(2, 2, 3, 2);
        assert!(rect.contains(2, 2));
        assert!(rect.contains(4, 3));
        assert!(!rect.contains(5, 3));
        assert!(!rect.contains(2, 4));
    }

    #[test]
    fn test_to_content_has_one_line_per_row() {
        let mut canvas = Canvas::new(4, 3);
        canvas.put_str(0, 1, "hey", Color::Green, None);
        let content = canvas.to_content().unwrap();
        assert_eq!(content.lines().count(), 3);
        assert!(content.lines().nth(1).unwrap().contains("hey"));
    }
}

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

use crossterm::{
    cursor, queue,
    style::Print,
    terminal::{size, ClearType},
};
use std::io::{stdout, Write};

use crate::common::config::AppConfig;

/// In-memory sink for queued crossterm commands.
pub struct BufferWriter {
    buffer: String,
}

impl Default for BufferWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl BufferWriter {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(16 * 1024),
        }
    }

    pub fn push_line_break(&mut self) {
        self.buffer.push_str("\r\n");
    }

    pub fn into_content(self) -> String {
        self.buffer
    }
}

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let s = std::str::from_utf8(buf)
            .map_err(|_| std::io::Error::new(std::io::ErrorKind::InvalidData, "Invalid UTF-8"))?;
        self.buffer.push_str(s);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Differential renderer that only rewrites lines whose content changed
/// since the previous frame.
pub struct DifferentialRenderer<W: Write = std::io::Stdout> {
    out: W,
    previous_lines: Vec<String>,
    screen_height: usize,
}

impl DifferentialRenderer {
    pub fn new() -> Self {
        let (_, height) = size().unwrap_or((
            AppConfig::DEFAULT_TERMINAL_WIDTH,
            AppConfig::DEFAULT_TERMINAL_HEIGHT,
        ));
        Self::with_writer(stdout(), height)
    }
}

impl<W: Write> DifferentialRenderer<W> {
    pub fn with_writer(out: W, screen_height: u16) -> Self {
        Self {
            out,
            previous_lines: vec![String::new(); screen_height as usize],
            screen_height: screen_height as usize,
        }
    }

    /// Write `content` and return how many lines were actually redrawn.
    pub fn render_differential(&mut self, content: &str, rows: u16) -> std::io::Result<usize> {
        if rows as usize != self.screen_height {
            self.screen_height = rows as usize;
            self.previous_lines.resize(self.screen_height, String::new());
        }

        let current_lines: Vec<&str> = content.lines().take(self.screen_height).collect();
        let mut redrawn = 0;

        for (line_num, current_line) in current_lines.iter().enumerate() {
            if self.previous_lines[line_num] != *current_line {
                queue!(
                    self.out,
                    cursor::MoveTo(0, line_num as u16),
                    Print(current_line)
                )?;
                redrawn += 1;
            }
        }

        // Clear any remaining lines if the new content is shorter
        for line_num in current_lines.len()..self.screen_height {
            if !self.previous_lines[line_num].is_empty() {
                queue!(
                    self.out,
                    cursor::MoveTo(0, line_num as u16),
                    crossterm::terminal::Clear(ClearType::CurrentLine)
                )?;
                redrawn += 1;
            }
        }

        self.out.flush()?;

        self.previous_lines.clear();
        self.previous_lines
            .extend(current_lines.iter().map(|line| line.to_string()));
        self.previous_lines.resize(self.screen_height, String::new());

        Ok(redrawn)
    }

    /// Force clear the entire screen (use sparingly, e.g., on startup or resize)
    pub fn force_clear(&mut self) -> std::io::Result<()> {
        queue!(self.out, crossterm::terminal::Clear(ClearType::All))?;
        self.out.flush()?;

        self.previous_lines.clear();
        self.previous_lines.resize(self.screen_height, String::new());

        Ok(())
    }
}

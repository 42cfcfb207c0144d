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

use std::fmt;

use crate::common::config::AppConfig;
use crate::draw::bounds::clamp_bound;

/// Which number a draw picks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DrawKind {
    Table,
    Seat,
}

impl DrawKind {
    /// Bilingual label shown on result cards and notifications.
    pub fn label(self) -> &'static str {
        match self {
            DrawKind::Table => "桌号 Table",
            DrawKind::Seat => "座位 Seat",
        }
    }
}

impl fmt::Display for DrawKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawKind::Table => write!(f, "table"),
            DrawKind::Seat => write!(f, "seat"),
        }
    }
}

/// Final value of a completed draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawOutcome {
    pub kind: DrawKind,
    pub value: u32,
}

/// Results and bounds of the draw screen.
///
/// Bounds are private so that nothing can store a bound below 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawState {
    table_max: u32,
    seat_max: u32,
    pub table: Option<u32>,
    pub seat: Option<u32>,
    pub rolling: bool,
}

impl Default for DrawState {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawState {
    pub fn new() -> Self {
        Self::with_bounds(AppConfig::DEFAULT_TABLE_MAX, AppConfig::DEFAULT_SEAT_MAX)
    }

    pub fn with_bounds(table_max: u32, seat_max: u32) -> Self {
        Self {
            table_max: clamp_bound(table_max as i64),
            seat_max: clamp_bound(seat_max as i64),
            table: None,
            seat: None,
            rolling: false,
        }
    }

    pub fn table_max(&self) -> u32 {
        self.table_max
    }

    pub fn seat_max(&self) -> u32 {
        self.seat_max
    }

    pub fn max_for(&self, kind: DrawKind) -> u32 {
        match kind {
            DrawKind::Table => self.table_max,
            DrawKind::Seat => self.seat_max,
        }
    }

    pub fn set_table_max(&mut self, value: i64) {
        self.table_max = clamp_bound(value);
    }

    pub fn set_seat_max(&mut self, value: i64) {
        self.seat_max = clamp_bound(value);
    }

    pub fn set_max_for(&mut self, kind: DrawKind, value: i64) {
        match kind {
            DrawKind::Table => self.set_table_max(value),
            DrawKind::Seat => self.set_seat_max(value),
        }
    }

    pub fn result(&self, kind: DrawKind) -> Option<u32> {
        match kind {
            DrawKind::Table => self.table,
            DrawKind::Seat => self.seat,
        }
    }

    pub fn set_result(&mut self, kind: DrawKind, value: u32) {
        match kind {
            DrawKind::Table => self.table = Some(value),
            DrawKind::Seat => self.seat = Some(value),
        }
    }

    /// Clear both results. Bounds and the rolling flag are left alone.
    pub fn reset(&mut self) {
        self.table = None;
        self.seat = None;
    }
}

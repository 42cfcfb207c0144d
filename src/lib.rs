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

//! Terminal raffle screen.
//!
//! Draws a random table number in `[1, table_max]` or seat number in
//! `[1, seat_max]` with a flashing 50-tick reveal and a confetti burst when
//! the draw lands. See [`draw::DrawController`] for the draw lifecycle.

pub mod app_state;
pub mod cli;
pub mod common;
pub mod draw;
pub mod error;
pub mod logging;
pub mod ui;
pub mod view;

pub use error::{Error, Result};

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

//! Error types for the lucky-draw library.
//!
//! Drawing itself cannot fail. Errors come from user input handed to the
//! bound editors and from the terminal the screen runs in.
//!
//! # Example
//!
//! ```rust
//! use lucky_draw::draw::bounds::parse_bound;
//! use lucky_draw::Error;
//!
//! assert!(matches!(parse_bound("abc"), Err(Error::InvalidBound(_))));
//! ```

use thiserror::Error;

/// The main error type for lucky-draw operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A bound editor received input that is not an integer.
    ///
    /// The previous bound stays in effect when this is returned.
    #[error("Invalid bound: {0:?} is not a number")]
    InvalidBound(String),

    /// The terminal could not be switched into raw mode or the alternate
    /// screen.
    #[error("Terminal unavailable: {0}")]
    Terminal(String),

    /// The log subscriber could not be installed.
    #[error("Logging setup failed: {0}")]
    Logging(String),

    /// An I/O error occurred while rendering or opening the log file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for lucky-draw operations.
pub type Result<T> = std::result::Result<T, Error>;

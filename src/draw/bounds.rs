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

//! Bound editor input handling.
//!
//! Bounds are inclusive upper limits for a draw. The lower limit is always
//! [`AppConfig::MIN_BOUND`], so any bound below it is raised to it.

use crate::common::config::AppConfig;
use crate::error::{Error, Result};

/// Clamp a raw integer into a usable bound.
pub fn clamp_bound(value: i64) -> u32 {
    if value < AppConfig::MIN_BOUND as i64 {
        AppConfig::MIN_BOUND
    } else {
        u32::try_from(value).unwrap_or(u32::MAX)
    }
}

/// Parse the text of a bound editor.
///
/// Zero and negative numbers clamp to 1 and oversized numbers saturate.
/// Empty or non-numeric text is rejected so the caller can keep the bound
/// that was in effect before the edit.
pub fn parse_bound(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    match trimmed.parse::<i64>() {
        Ok(value) => Ok(clamp_bound(value)),
        // Digit-only text too long for i64 is still a number.
        Err(_) if is_signed_digits(trimmed) => Ok(if trimmed.starts_with('-') {
            AppConfig::MIN_BOUND
        } else {
            u32::MAX
        }),
        Err(_) => Err(Error::InvalidBound(input.to_string())),
    }
}

/// Step a bound by `delta`, never going below the minimum.
pub fn step_bound(current: u32, delta: i64) -> u32 {
    clamp_bound(current as i64 + delta)
}

fn is_signed_digits(s: &str) -> bool {
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

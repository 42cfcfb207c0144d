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

use std::path::PathBuf;

use clap::Parser;

use crate::common::config::AppConfig;
use crate::draw::bounds::clamp_bound;
use crate::draw::state::DrawState;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Initial upper bound for table draws. Values below 1 become 1.
    #[arg(long, default_value_t = AppConfig::DEFAULT_TABLE_MAX as i64, allow_negative_numbers = true)]
    pub table_max: i64,
    /// Initial upper bound for seat draws. Values below 1 become 1.
    #[arg(long, default_value_t = AppConfig::DEFAULT_SEAT_MAX as i64, allow_negative_numbers = true)]
    pub seat_max: i64,
    /// Append logs to this file. Logging is off without it because the
    /// terminal belongs to the draw screen.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Draw state the screen starts with.
    pub fn initial_state(&self) -> DrawState {
        DrawState::with_bounds(clamp_bound(self.table_max), clamp_bound(self.seat_max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["lucky-draw"]).unwrap();
        let state = cli.initial_state();
        assert_eq!(state.table_max(), 30);
        assert_eq!(state.seat_max(), 10);
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_bounds_are_clamped() {
        let cli =
            Cli::try_parse_from(["lucky-draw", "--table-max", "-3", "--seat-max", "0"]).unwrap();
        let state = cli.initial_state();
        assert_eq!(state.table_max(), 1);
        assert_eq!(state.seat_max(), 1);
    }

    #[test]
    fn test_non_numeric_bound_is_rejected() {
        assert!(Cli::try_parse_from(["lucky-draw", "--table-max", "many"]).is_err());
    }

    #[test]
    fn test_log_file() {
        let cli = Cli::try_parse_from(["lucky-draw", "--log-file", "/tmp/draw.log"]).unwrap();
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/draw.log")));
    }
}

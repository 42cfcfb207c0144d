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

use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};
use tracing::info;

use crate::app_state::AppState;
use crate::cli::Cli;
use crate::draw::controller::DrawController;
use crate::error::Result;
use crate::view::{terminal_manager::TerminalManager, ui_loop::UiLoop};

/// Open the draw screen and run it until the user quits.
pub async fn run_draw_screen(args: &Cli) -> Result<()> {
    let initial_state = AppState::new(args.initial_state());
    info!(
        table_max = initial_state.draw.table_max(),
        seat_max = initial_state.draw.seat_max(),
        "opening draw screen"
    );
    let app_state = Arc::new(Mutex::new(initial_state));

    let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
    let controller = DrawController::new(Arc::clone(&app_state), outcome_tx);

    // Terminal cleanup is handled by TerminalManager's Drop trait
    let _terminal_manager = TerminalManager::new()?;

    let mut ui_loop = UiLoop::new(app_state, controller, outcome_rx);
    ui_loop.run().await
}

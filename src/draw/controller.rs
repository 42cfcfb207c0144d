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

//! Draw controller and the animated reveal task.
//!
//! A draw is `Idle -> Rolling -> Idle`. Starting one flips the shared
//! `rolling` flag under the state lock and spawns a task that samples a new
//! value every tick. The last tick commits the final value, clears the flag
//! and sends a single [`DrawOutcome`] back to the UI loop, which fires the
//! celebration. There is no cancellation path.

use std::sync::Arc;
use std::time::Duration;

use rand::{rng, Rng};
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, trace, warn};

use crate::app_state::AppState;
use crate::common::config::AppConfig;
use crate::draw::state::{DrawKind, DrawOutcome};

/// Cadence and length of the reveal animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawTiming {
    pub interval: Duration,
    pub ticks: u32,
}

impl Default for DrawTiming {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(AppConfig::FLASH_INTERVAL_MS),
            ticks: AppConfig::FLASH_COUNT,
        }
    }
}

/// Sample a uniform value in `[1, max]`. A zero bound is treated as 1.
pub fn sample_in_bound<R: Rng + ?Sized>(rng: &mut R, max: u32) -> u32 {
    rng.random_range(1..=max.max(AppConfig::MIN_BOUND))
}

#[derive(Clone)]
pub struct DrawController {
    app_state: Arc<Mutex<AppState>>,
    outcomes: mpsc::UnboundedSender<DrawOutcome>,
    timing: DrawTiming,
}

impl DrawController {
    pub fn new(
        app_state: Arc<Mutex<AppState>>,
        outcomes: mpsc::UnboundedSender<DrawOutcome>,
    ) -> Self {
        Self {
            app_state,
            outcomes,
            timing: DrawTiming::default(),
        }
    }

    pub fn with_timing(mut self, timing: DrawTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Start a draw for `kind`.
    ///
    /// Returns `None` without touching the state when a draw (of either
    /// kind) is already rolling. Requests are never queued.
    pub async fn draw(&self, kind: DrawKind) -> Option<JoinHandle<()>> {
        {
            let mut state = self.app_state.lock().await;
            if state.draw.rolling {
                debug!(%kind, "draw ignored, another draw is rolling");
                return None;
            }
            state.draw.rolling = true;
            state.rolling_kind = Some(kind);
            state.ticks_elapsed = 0;
            state.mark_changed();
        }

        info!(%kind, ticks = self.timing.ticks, "draw started");
        let app_state = Arc::clone(&self.app_state);
        let outcomes = self.outcomes.clone();
        let timing = self.timing;
        Some(tokio::spawn(async move {
            run_reveal(app_state, outcomes, kind, timing).await;
        }))
    }
}

async fn run_reveal(
    app_state: Arc<Mutex<AppState>>,
    outcomes: mpsc::UnboundedSender<DrawOutcome>,
    kind: DrawKind,
    timing: DrawTiming,
) {
    let ticks = timing.ticks.max(1);
    let period = timing.interval.max(Duration::from_millis(1));
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    for tick in 1..=ticks {
        ticker.tick().await;

        let mut state = app_state.lock().await;
        // The bound is read every tick so an edit made mid-roll applies to
        // the next sample.
        let max = state.draw.max_for(kind);
        let value = sample_in_bound(&mut rng(), max);
        state.draw.set_result(kind, value);
        state.ticks_elapsed = tick;

        if tick == ticks {
            state.draw.rolling = false;
            state.rolling_kind = None;
            state.mark_changed();
            drop(state);

            info!(%kind, value, "draw finished");
            if outcomes.send(DrawOutcome { kind, value }).is_err() {
                warn!(%kind, "draw outcome dropped, receiver closed");
            }
        } else {
            state.mark_changed();
            trace!(%kind, tick, value, "draw tick");
        }
    }
}

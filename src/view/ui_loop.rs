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

use std::io::{stdout, Write};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event},
    queue,
    terminal::size,
};
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, info};

use crate::app_state::AppState;
use crate::common::config::AppConfig;
use crate::draw::controller::DrawController;
use crate::draw::state::DrawOutcome;
use crate::error::Result;
use crate::ui::buffer::DifferentialRenderer;
use crate::ui::layout::DrawLayout;
use crate::ui::renderer::render_screen;
use crate::view::event_handler::{handle_key_event, handle_mouse_event, UiAction};

pub struct UiLoop {
    app_state: Arc<Mutex<AppState>>,
    controller: DrawController,
    outcomes: mpsc::UnboundedReceiver<DrawOutcome>,
    differential_renderer: DifferentialRenderer,
    last_render_time: Instant,
    last_rendered_version: Option<u64>,
    resize_occurred: bool,
}

impl UiLoop {
    pub fn new(
        app_state: Arc<Mutex<AppState>>,
        controller: DrawController,
        outcomes: mpsc::UnboundedReceiver<DrawOutcome>,
    ) -> Self {
        Self {
            app_state,
            controller,
            outcomes,
            differential_renderer: DifferentialRenderer::new(),
            last_render_time: Instant::now(),
            last_rendered_version: None,
            resize_occurred: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        loop {
            // Handle events with timeout
            if event::poll(Duration::from_millis(AppConfig::EVENT_POLL_TIMEOUT_MS))? {
                let action = self.handle_event(event::read()?).await?;
                match action {
                    UiAction::Quit => break,
                    UiAction::Draw(kind) => {
                        // Dropped silently by the controller while rolling
                        let _ = self.controller.draw(kind).await;
                    }
                    UiAction::None => {}
                }
            }

            while let Ok(outcome) = self.outcomes.try_recv() {
                let (cols, rows) = size()?;
                let mut state = self.app_state.lock().await;
                apply_outcome(&mut state, outcome, cols, rows);
            }

            // Throttle rendering to prevent visual artifacts
            if !self.resize_occurred
                && self.last_render_time.elapsed()
                    < Duration::from_millis(AppConfig::MIN_RENDER_INTERVAL_MS)
            {
                continue;
            }
            self.last_render_time = Instant::now();

            let mut state = self.app_state.lock().await;
            let animating = !state.confetti.is_finished();
            if animating {
                state.confetti.step();
            }
            let notification_expired = state.notifications.update();

            let unchanged = self.last_rendered_version == Some(state.state_version);
            if unchanged && !animating && !notification_expired && !self.resize_occurred {
                continue;
            }

            let (cols, rows) = size()?;
            let content = render_screen(&state, cols, rows).to_content()?;
            self.last_rendered_version = Some(state.state_version);
            drop(state);

            let mut stdout = stdout();
            queue!(stdout, cursor::Hide)?;
            if self.resize_occurred {
                self.differential_renderer.force_clear()?;
                self.resize_occurred = false;
            }
            self.differential_renderer
                .render_differential(&content, rows)?;
            stdout.flush()?;
        }

        info!("draw screen closed");
        Ok(())
    }

    async fn handle_event(&mut self, event: Event) -> Result<UiAction> {
        let action = match event {
            Event::Key(key_event) => {
                let mut state = self.app_state.lock().await;
                handle_key_event(key_event, &mut state)
            }
            Event::Mouse(mouse_event) => {
                let (cols, rows) = size()?;
                let mut state = self.app_state.lock().await;
                handle_mouse_event(mouse_event, &mut state, cols, rows)
            }
            Event::Resize(cols, rows) => {
                debug!(cols, rows, "terminal resized");
                self.resize_occurred = true;
                UiAction::None
            }
            // Focus and paste events are not used
            _ => UiAction::None,
        };
        Ok(action)
    }
}

/// Celebrate a finished draw: one confetti burst from the middle of the
/// drawn card and a notification with the result.
pub fn apply_outcome(state: &mut AppState, outcome: DrawOutcome, cols: u16, rows: u16) {
    let card = DrawLayout::compute(cols, rows).card(outcome.kind);
    state
        .confetti
        .burst(card.center_x() as f32, card.center_y() as f32);
    state
        .notifications
        .celebrate(format!("{} {}!", outcome.kind.label(), outcome.value));
    state.mark_changed();
    info!(kind = %outcome.kind, value = outcome.value, "celebration fired");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::state::DrawKind;

    #[test]
    fn test_apply_outcome_fires_one_burst() {
        let mut state = AppState::default();
        apply_outcome(
            &mut state,
            DrawOutcome {
                kind: DrawKind::Table,
                value: 17,
            },
            80,
            24,
        );

        assert_eq!(state.confetti.burst_count(), 1);
        assert!(!state.confetti.is_finished());
        let message = &state.notifications.get_current_notification().unwrap().message;
        assert_eq!(message, "桌号 Table 17!");
    }

    #[test]
    fn test_apply_outcome_origin_is_drawn_card() {
        let mut state = AppState::default();
        apply_outcome(
            &mut state,
            DrawOutcome {
                kind: DrawKind::Seat,
                value: 3,
            },
            80,
            24,
        );
        let card = DrawLayout::compute(80, 24).seat_card;
        let particle = &state.confetti.particles()[0];
        assert_eq!(particle.x, card.center_x() as f32);
        assert_eq!(particle.y, card.center_y() as f32);
    }
}

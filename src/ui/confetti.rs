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

//! Celebratory particle burst fired once per completed draw.

use crossterm::style::Color;
use rand::{rng, Rng};

use crate::common::config::{AppConfig, ThemeConfig};
use crate::ui::canvas::Canvas;

const GLYPHS: [char; 6] = ['*', '+', 'o', '•', '·', '◆'];
// Terminal cells are roughly twice as tall as wide, so vertical speed is
// kept at about half the horizontal range.
const VELOCITY_X: [f32; 2] = [-1.6, 1.6];
const VELOCITY_Y: [f32; 2] = [-1.2, -0.15];
const HORIZONTAL_DRAG: f32 = 0.97;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Frames left before the particle disappears.
    pub life: u32,
    pub glyph: char,
    pub color: Color,
}

#[derive(Clone, Debug, Default)]
pub struct Confetti {
    particles: Vec<Particle>,
    bursts: u64,
}

impl Confetti {
    pub fn new() -> Self {
        Self::default()
    }

    /// Launch a burst from `(x, y)` using the thread-local RNG.
    pub fn burst(&mut self, x: f32, y: f32) {
        let mut rng = rng();
        self.burst_with(&mut rng, x, y, AppConfig::CONFETTI_PARTICLES);
    }

    /// Launch a burst with a caller-provided RNG. Particles of an unfinished
    /// burst are replaced.
    pub fn burst_with<R: Rng + ?Sized>(&mut self, rng: &mut R, x: f32, y: f32, count: usize) {
        let [min_life, max_life] = AppConfig::CONFETTI_LIFETIME_FRAMES;
        self.particles.clear();
        self.particles.extend((0..count).map(|i| Particle {
            x,
            y,
            vx: rng.random_range(VELOCITY_X[0]..=VELOCITY_X[1]),
            vy: rng.random_range(VELOCITY_Y[0]..=VELOCITY_Y[1]),
            life: rng.random_range(min_life..=max_life),
            glyph: GLYPHS[rng.random_range(0..GLYPHS.len())],
            color: ThemeConfig::confetti_color(i),
        }));
        self.bursts += 1;
    }

    /// Advance one frame and drop particles whose lifetime ran out.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            p.vx *= HORIZONTAL_DRAG;
            p.vy += AppConfig::CONFETTI_GRAVITY;
            p.life = p.life.saturating_sub(1);
        }
        self.particles.retain(|p| p.life > 0);
    }

    pub fn is_finished(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Total bursts launched since the screen opened.
    pub fn burst_count(&self) -> u64 {
        self.bursts
    }

    /// Draw live particles on top of the canvas. Off-screen particles are
    /// clipped.
    pub fn render(&self, canvas: &mut Canvas) {
        for p in &self.particles {
            if p.x < 0.0 || p.y < 0.0 {
                continue;
            }
            let (x, y) = (p.x.round() as u16, p.y.round() as u16);
            if x < canvas.width() && y < canvas.height() {
                canvas.put_char(x, y, p.glyph, p.color, None);
            }
        }
    }
}

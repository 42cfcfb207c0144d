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

use crossterm::style::Color;

use crate::app_state::{AppState, Focus};
use crate::common::config::ThemeConfig;
use crate::draw::state::DrawKind;
use crate::ui::canvas::{Canvas, Rect};
use crate::ui::help::draw_help_overlay;
use crate::ui::layout::{DrawLayout, TITLE_Y};
use crate::ui::text::{display_width, truncate_to_width};
use crate::ui::widgets::{draw_bound_input, draw_button, draw_result_card};

pub const TITLE: &str = "幸运抽奖 Lucky Draw";

fn button_label(kind: DrawKind) -> &'static str {
    match kind {
        DrawKind::Table => "抽桌号 Draw Table",
        DrawKind::Seat => "抽座位 Draw Seat",
    }
}

fn input_label(kind: DrawKind) -> &'static str {
    match kind {
        DrawKind::Table => "桌号上限 Table max",
        DrawKind::Seat => "座位上限 Seat max",
    }
}

/// Compose the full screen for the current state.
pub fn render_screen(state: &AppState, cols: u16, rows: u16) -> Canvas {
    let layout = DrawLayout::compute(cols, rows);
    let mut canvas = Canvas::new(cols, rows);

    canvas.put_centered(
        Rect::new(0, TITLE_Y, cols, 1),
        TITLE_Y,
        TITLE,
        Color::Yellow,
        None,
    );

    for kind in [DrawKind::Table, DrawKind::Seat] {
        draw_kind_section(&mut canvas, &layout, state, kind);
    }

    // Reset stays available while a draw is rolling.
    draw_button(
        &mut canvas,
        layout.reset_button,
        "重置 Reset",
        ThemeConfig::button_color(true),
    );

    state.confetti.render(&mut canvas);

    if state.show_help {
        draw_help_overlay(&mut canvas);
    }

    print_function_keys(&mut canvas, &layout, state);
    canvas
}

fn draw_kind_section(canvas: &mut Canvas, layout: &DrawLayout, state: &AppState, kind: DrawKind) {
    let flashing = state.draw.rolling && state.rolling_kind == Some(kind);
    let value_color = ThemeConfig::result_color(flashing, state.ticks_elapsed);
    let border_color = if flashing { value_color } else { Color::DarkGrey };
    draw_result_card(
        canvas,
        layout.card(kind),
        kind.label(),
        state.draw.result(kind),
        value_color,
        border_color,
    );

    let focused = state.focus.kind() == Some(kind);
    let text = if focused {
        state.edit_buffer.clone()
    } else {
        state.draw.max_for(kind).to_string()
    };
    draw_bound_input(canvas, layout.input(kind), input_label(kind), &text, focused);

    // Both draw buttons share one rolling flag, so both dim together.
    draw_button(
        canvas,
        layout.button(kind),
        button_label(kind),
        ThemeConfig::button_color(!state.draw.rolling),
    );
}

fn print_function_keys(canvas: &mut Canvas, layout: &DrawLayout, state: &AppState) {
    let cols = layout.cols as usize;
    let function_keys = match state.focus {
        Focus::None => "t:Draw Table s:Draw Seat r:Reset Tab:Edit max h:Help q:Exit",
        Focus::TableMax | Focus::SeatMax => {
            "0-9:Type Enter:Apply Esc:Cancel ↑↓:Step Tab:Next field"
        }
    };

    let notification = state.notifications.get_current_notification();
    let notification_len = notification
        .map(|n| display_width(&n.message))
        .unwrap_or(0);

    // Reserve room for the notification on the right
    let available_space = if notification_len > 0 {
        cols.saturating_sub(notification_len + 1)
    } else {
        cols
    };
    let keys = truncate_to_width(function_keys, available_space);
    canvas.put_str(0, layout.footer_y, &keys, Color::DarkGreen, None);

    if let Some(notification) = notification {
        let message = truncate_to_width(&notification.message, cols);
        let x = cols.saturating_sub(display_width(&message)) as u16;
        canvas.put_str(
            x,
            layout.footer_y,
            &message,
            notification.notification_type.color(),
            None,
        );
    }
}

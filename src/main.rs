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

use clap::Parser;
use lucky_draw::cli::Cli;
use lucky_draw::logging::init_logging;
use lucky_draw::view::run_draw_screen;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.log_file.as_deref()) {
        eprintln!("Warning: {e}");
    }

    // Raw mode delivers Ctrl+C as a key press, but SIGTERM still needs the
    // terminal put back before exiting.
    #[cfg(unix)]
    tokio::spawn(async {
        use tokio::signal::unix::{signal, SignalKind};

        if let Ok(mut sigterm) = signal(SignalKind::terminate()) {
            sigterm.recv().await;
            lucky_draw::view::terminal_manager::restore_terminal();
            std::process::exit(0);
        }
    });

    if let Err(e) = run_draw_screen(&cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

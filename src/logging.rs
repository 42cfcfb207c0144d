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

//! Log setup.
//!
//! The draw screen owns stdout, so logs only go to a file named on the
//! command line. `RUST_LOG` overrides the default filter.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::common::config::AppConfig;
use crate::error::{Error, Result};

pub fn open_log_file(path: &Path) -> Result<File> {
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

pub fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| AppConfig::DEFAULT_LOG_FILTER.into())
}

pub fn build_subscriber(
    file: File,
    filter: EnvFilter,
) -> impl tracing::Subscriber + Send + Sync + 'static {
    tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(Mutex::new(file)),
    )
}

/// Install the global subscriber. Without a log file nothing is installed
/// and every `tracing` call is a no-op.
pub fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = open_log_file(path)?;
    build_subscriber(file, default_filter())
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))?;
    tracing::info!(path = %path.display(), "logging started");
    Ok(())
}

/*
 * Copyright (c):
 * 2025 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of ramp-velocity.
 *
 * ramp-velocity is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * ramp-velocity is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with ramp-velocity. If not, see <https://www.gnu.org/licenses/>.
 */

use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use crate::error::AppError;
use crate::settings::Settings;

pub fn parse_level(level: &str) -> Result<LevelFilter, AppError> {
    level.trim().parse::<LevelFilter>().map_err(|_e| AppError::InvalidLogLevel(level.to_string()))
}

/// Install the global subscriber. Logs go to the configured file, or stderr
/// when there isn't one, so stdout only carries the report.
///
/// The returned guard must be held until exit to flush buffered log lines.
pub fn init(settings: &Settings) -> Result<WorkerGuard, AppError> {
    let level = parse_level(settings.log_level())?;
    let (writer, guard) = match settings.log_file() {
        Some(path) => {
            let (directory, file_name) = split_log_path(&path);
            tracing_appender::non_blocking(tracing_appender::rolling::never(directory, file_name))
        }
        None => tracing_appender::non_blocking(std::io::stderr())
    };
    let subscriber = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(level)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).map_err(|e| AppError::Logging(e.to_string()))?;
    Ok(guard)
}

fn split_log_path(path: &Path) -> (PathBuf, PathBuf) {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from(".")
    };
    let file_name = match path.file_name() {
        Some(name) => PathBuf::from(name),
        None => PathBuf::from("ramp_velocity.log")
    };
    (directory, file_name)
}

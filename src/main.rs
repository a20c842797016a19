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

mod error;
mod logging;
mod settings;

use tracing::{info, warn};
use ramp_model::RampCalculation;
use crate::error::AppError;
use crate::settings::Settings;


fn main() -> Result<(), AppError> {
    let settings = Settings::load()?;
    let _log_guard = match logging::init(&settings) {
        Ok(guard) => {
            info!("Logging initialised");
            Some(guard)
        }
        Err(e) => {
            eprintln!("Failed to init logging. {}", e.to_string());
            None
        }
    };

    let calculation = RampCalculation::reference();
    let report = calculation.run();
    println!("{}", report.render(settings.report_precision()));

    if !report.succeeded() {
        warn!("No final velocity for {:?}. {} guard(s) failed", calculation.parameters(), report.errors.len());
    }
    Ok(())
}

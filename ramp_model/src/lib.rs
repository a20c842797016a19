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

pub mod error;
pub mod parameters;
pub mod model;
pub mod calculation;
pub mod report;

pub use error::{RampModelError, Result};
pub use parameters::RampCarParameters;
pub use calculation::RampCalculation;
pub use report::RampReport;

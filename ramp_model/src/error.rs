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

use std::result;
use thiserror::Error;

pub type Result<T> = result::Result<T, RampModelError>;

/// Physical-validity failures raised by the model guards.
///
/// The `Display` text of each variant is what gets printed in the report.
#[derive(Error, Clone, Copy, Debug, PartialEq)]
pub enum RampModelError {
    #[error("Error: Total weight is zero, cannot calculate nF and nR.")]
    ZeroTotalWeight,
    #[error("Error: Denominator is zero or negative, cannot proceed with division.")]
    NonPositiveDenominator { denominator: f64 },
    #[error("Error: Numerator is negative, cannot take square root of negative number.")]
    NegativeNumerator { numerator: f64 },
}

impl RampModelError {
    pub fn kind_str(&self) -> &'static str {
        match self {
            RampModelError::ZeroTotalWeight => "zero total weight",
            RampModelError::NonPositiveDenominator { .. } => "non-positive denominator",
            RampModelError::NegativeNumerator { .. } => "negative numerator",
        }
    }
}

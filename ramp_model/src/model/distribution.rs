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

use tracing::debug;
use utils::units::revolutions_over_distance;
use crate::error::{RampModelError, Result};
use crate::model::load::AxleLoads;

/// Share of the weight carried by each axle and how many turns each axle
/// makes over the run
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WeightDistribution {
    pub front_fraction: f64,
    pub rear_fraction: f64,
    pub front_revolutions: f64,
    pub rear_revolutions: f64,
}

impl WeightDistribution {
    /// Fallback used when the distribution can't be computed
    pub fn zeroed() -> WeightDistribution {
        WeightDistribution {
            front_fraction: 0.0,
            rear_fraction: 0.0,
            front_revolutions: 0.0,
            rear_revolutions: 0.0,
        }
    }
}

/// Work out the per-axle weight fractions and the number of revolutions each
/// axle turns through over `total_distance`.
///
/// Fails with [`RampModelError::ZeroTotalWeight`] when the loads carry no
/// weight at all; callers are expected to fall back to
/// [`WeightDistribution::zeroed`].
pub fn distribute_weight(loads: &AxleLoads,
                         front_radius: f64,
                         rear_radius: f64,
                         total_distance: f64) -> Result<WeightDistribution>
{
    if loads.total_weight == 0.0 {
        return Err(RampModelError::ZeroTotalWeight);
    }
    let distribution = WeightDistribution {
        front_fraction: loads.front / loads.total_weight,
        rear_fraction: loads.rear / loads.total_weight,
        front_revolutions: revolutions_over_distance(total_distance, front_radius),
        rear_revolutions: revolutions_over_distance(total_distance, rear_radius),
    };
    debug!("Weight distribution: {:?}", distribution);
    Ok(distribution)
}

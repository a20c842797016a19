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

use serde::{Deserialize, Serialize};
use crate::model::GRAVITY;

/// The physical constants describing one car and ramp.
///
/// Lengths are in metres, masses in kilograms. Radii are the effective bearing
/// radii used to turn travel distance into shaft revolutions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RampCarParameters {
    pub car_mass: f64,
    pub weight_mass: f64,
    pub front_bearing_radius: f64,
    pub rear_bearing_radius: f64,
    pub pulley_bearing_radius: f64,
    pub pulley_revolutions: f64,
    pub friction_coefficient: f64,
    pub gravity: f64,
    /// Height of the car at the start of the ramp
    pub initial_height: f64,
    /// Drop in height of the car by the end of the ramp
    pub height_change: f64,
    /// Distance between the front and rear axles
    pub wheelbase: f64,
    /// Distance between the rear axle and the attached weight
    pub weight_offset: f64,
    pub total_distance: f64,
}

impl RampCarParameters {
    /// The measured toy car that the reference results were produced from
    pub fn reference() -> RampCarParameters {
        RampCarParameters {
            car_mass: 0.5,
            weight_mass: 2.5,
            front_bearing_radius: 0.013,
            rear_bearing_radius: 0.018,
            pulley_bearing_radius: 0.013,
            pulley_revolutions: 14.0,
            friction_coefficient: 0.1,
            gravity: GRAVITY,
            initial_height: 1.0,
            height_change: 0.5,
            wheelbase: 0.20,
            weight_offset: 0.055,
            total_distance: 5.0,
        }
    }

    pub fn combined_mass(&self) -> f64 {
        self.car_mass + self.weight_mass
    }
}

impl Default for RampCarParameters {
    fn default() -> Self {
        RampCarParameters::reference()
    }
}

#[cfg(test)]
mod tests {
    use crate::parameters::RampCarParameters;

    #[test]
    fn reference_values() {
        let params = RampCarParameters::reference();
        assert_eq!(params.car_mass, 0.5);
        assert_eq!(params.weight_mass, 2.5);
        assert_eq!(params.gravity, 9.81);
        assert_eq!(params.pulley_revolutions, 14.0);
        assert_eq!(params.total_distance, 5.0);
        assert_eq!(params.combined_mass(), 3.0);
        assert_eq!(RampCarParameters::default(), params);
    }
}

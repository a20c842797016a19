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

use tracing::{error, info};
use crate::model::{distribute_weight, friction_loss, solve_axle_loads, solve_final_velocity};
use crate::model::{FrictionInputs, VelocityInputs, WeightDistribution};
use crate::parameters::RampCarParameters;
use crate::report::RampReport;

/// Runs the full load -> distribution -> friction -> velocity chain for one
/// set of parameters.
pub struct RampCalculation {
    params: RampCarParameters,
}

impl RampCalculation {
    pub fn new(params: RampCarParameters) -> RampCalculation {
        RampCalculation { params }
    }

    pub fn reference() -> RampCalculation {
        RampCalculation::new(RampCarParameters::reference())
    }

    pub fn parameters(&self) -> &RampCarParameters {
        &self.params
    }

    /// Guard failures don't abort the run. They are logged, collected in the
    /// report and replaced by zeroed values or a missing velocity.
    pub fn run(&self) -> RampReport {
        let params = &self.params;
        let mut errors = Vec::new();
        info!("Running ramp calculation for {:?}", params);

        let loads = solve_axle_loads(params.car_mass,
                                     params.weight_mass,
                                     params.wheelbase,
                                     params.weight_offset,
                                     params.gravity);

        let distribution = match distribute_weight(&loads,
                                                   params.front_bearing_radius,
                                                   params.rear_bearing_radius,
                                                   params.total_distance) {
            Ok(d) => d,
            Err(e) => {
                error!("Weight distribution failed: {}", e.kind_str());
                errors.push(e);
                WeightDistribution::zeroed()
            }
        };

        let friction_term = friction_loss(&FrictionInputs::from_parameters(params, &distribution));
        let solution = solve_final_velocity(&VelocityInputs::from_parameters(params, friction_term));
        let final_velocity = match solution.velocity {
            Ok(v) => {
                info!("Final velocity {} m/s", v);
                Some(v)
            }
            Err(e) => {
                error!("Velocity solve failed: {}", e.kind_str());
                errors.push(e);
                None
            }
        };

        RampReport {
            loads,
            distribution,
            friction_term,
            numerator: solution.numerator,
            denominator: solution.denominator,
            final_velocity,
            total_distance: params.total_distance,
            errors,
        }
    }
}

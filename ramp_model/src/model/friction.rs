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

use std::f64::consts::PI;
use tracing::debug;
use crate::model::distribution::WeightDistribution;
use crate::parameters::RampCarParameters;

/// Everything needed to estimate the rolling friction losses of the three
/// rotating assemblies (front axle, rear axle, pulley shaft)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrictionInputs {
    pub combined_mass: f64,
    pub front_fraction: f64,
    pub rear_fraction: f64,
    pub front_radius: f64,
    pub rear_radius: f64,
    pub front_revolutions: f64,
    pub rear_revolutions: f64,
    pub pulley_mass: f64,
    pub pulley_radius: f64,
    pub pulley_revolutions: f64,
    pub friction_coefficient: f64,
}

impl FrictionInputs {
    pub fn from_parameters(params: &RampCarParameters,
                           distribution: &WeightDistribution) -> FrictionInputs
    {
        FrictionInputs {
            combined_mass: params.combined_mass(),
            front_fraction: distribution.front_fraction,
            rear_fraction: distribution.rear_fraction,
            front_radius: params.front_bearing_radius,
            rear_radius: params.rear_bearing_radius,
            front_revolutions: distribution.front_revolutions,
            rear_revolutions: distribution.rear_revolutions,
            pulley_mass: params.weight_mass,
            pulley_radius: params.pulley_bearing_radius,
            pulley_revolutions: params.pulley_revolutions,
            friction_coefficient: params.friction_coefficient,
        }
    }
}

/// Cumulative rotational friction loss over the run.
///
/// `2π·μ · (m·f_F·r_F·n_F + m·f_R·r_R·n_R + m_w·r_p·n_p)`
///
/// The pulley term is driven by the attached mass alone and isn't scaled by a
/// weight fraction.
pub fn friction_loss(inputs: &FrictionInputs) -> f64 {
    let front_term = inputs.combined_mass * inputs.front_fraction * inputs.front_radius * inputs.front_revolutions;
    let rear_term = inputs.combined_mass * inputs.rear_fraction * inputs.rear_radius * inputs.rear_revolutions;
    let pulley_term = inputs.pulley_mass * inputs.pulley_radius * inputs.pulley_revolutions;
    let friction_term = (2.0 * PI * inputs.friction_coefficient) * (front_term + rear_term + pulley_term);
    debug!("Friction loss {} (front {}, rear {}, pulley {})", friction_term, front_term, rear_term, pulley_term);
    friction_term
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;
    use crate::model::{FLOAT_TOLERANCE, GRAVITY};
    use crate::model::distribution::{distribute_weight, WeightDistribution};
    use crate::model::friction::{friction_loss, FrictionInputs};
    use crate::model::load::solve_axle_loads;
    use crate::parameters::RampCarParameters;
    use utils::numeric::round_float_to;

    #[test]
    fn reference_friction_term() {
        let params = RampCarParameters::reference();
        let loads = solve_axle_loads(0.5, 2.5, 0.20, 0.055, GRAVITY);
        let distribution = distribute_weight(&loads, 0.013, 0.018, 5.0).unwrap();
        let friction = friction_loss(&FrictionInputs::from_parameters(&params, &distribution));
        assert_eq!(round_float_to(friction, 7), 1.7858849);
    }

    #[test]
    fn frictionless_has_no_loss() {
        let params = RampCarParameters { friction_coefficient: 0.0, ..RampCarParameters::reference() };
        let distribution = WeightDistribution {
            front_fraction: 0.4, rear_fraction: 0.6, front_revolutions: 10.0, rear_revolutions: 8.0
        };
        assert_eq!(friction_loss(&FrictionInputs::from_parameters(&params, &distribution)), 0.0);
    }

    #[test]
    fn zeroed_distribution_leaves_pulley_loss() {
        let params = RampCarParameters::reference();
        let inputs = FrictionInputs::from_parameters(&params, &WeightDistribution::zeroed());
        let expected = 2.0 * PI * 0.1 * (2.5 * 0.013 * 14.0);
        assert!((friction_loss(&inputs) - expected).abs() < FLOAT_TOLERANCE);
    }

    #[test]
    fn from_parameters_maps_fields() {
        let params = RampCarParameters::reference();
        let distribution = WeightDistribution {
            front_fraction: 0.25, rear_fraction: 0.75, front_revolutions: 3.0, rear_revolutions: 2.0
        };
        let inputs = FrictionInputs::from_parameters(&params, &distribution);
        assert_eq!(inputs.combined_mass, 3.0);
        assert_eq!(inputs.pulley_mass, params.weight_mass);
        assert_eq!(inputs.pulley_radius, params.pulley_bearing_radius);
        assert_eq!(inputs.front_revolutions, 3.0);
        assert_eq!(inputs.rear_fraction, 0.75);
    }
}

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

use tracing::{debug, warn};
use crate::error::{RampModelError, Result};
use crate::parameters::RampCarParameters;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VelocityInputs {
    pub weight_mass: f64,
    pub initial_height: f64,
    pub car_mass: f64,
    pub height_change: f64,
    pub gravity: f64,
    pub friction_term: f64,
    pub combined_mass: f64,
}

impl VelocityInputs {
    pub fn from_parameters(params: &RampCarParameters, friction_term: f64) -> VelocityInputs {
        VelocityInputs {
            weight_mass: params.weight_mass,
            initial_height: params.initial_height,
            car_mass: params.car_mass,
            height_change: params.height_change,
            gravity: params.gravity,
            friction_term,
            combined_mass: params.combined_mass(),
        }
    }
}

/// Both halves of the energy balance plus the velocity, if one exists
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VelocitySolution {
    pub numerator: f64,
    pub denominator: f64,
    pub velocity: Result<f64>,
}

/// Solve the energy balance for the exit velocity (m/s).
///
/// The denominator is checked before the numerator, so a run that fails both
/// reports [`RampModelError::NonPositiveDenominator`].
pub fn solve_final_velocity(inputs: &VelocityInputs) -> VelocitySolution {
    let potential = (inputs.weight_mass * inputs.initial_height) - (inputs.car_mass * inputs.height_change);
    let numerator = (2.0 * inputs.gravity * potential) - inputs.friction_term;
    let denominator = inputs.combined_mass;
    debug!("Energy balance numerator {} denominator {}", numerator, denominator);

    let velocity = if denominator <= 0.0 {
        warn!("Denominator {} is not positive", denominator);
        Err(RampModelError::NonPositiveDenominator { denominator })
    } else if numerator < 0.0 {
        warn!("Numerator {} is negative", numerator);
        Err(RampModelError::NegativeNumerator { numerator })
    } else {
        Ok((numerator / denominator).sqrt())
    };
    VelocitySolution { numerator, denominator, velocity }
}

#[cfg(test)]
mod tests {
    use crate::error::RampModelError;
    use crate::model::velocity::{solve_final_velocity, VelocityInputs};
    use crate::parameters::RampCarParameters;
    use utils::numeric::round_float_to;

    fn reference_inputs(friction_term: f64) -> VelocityInputs {
        VelocityInputs::from_parameters(&RampCarParameters::reference(), friction_term)
    }

    #[test]
    fn reference_velocity() {
        let solution = solve_final_velocity(&reference_inputs(1.7858849));
        assert_eq!(round_float_to(solution.numerator, 7), 42.3591151);
        assert_eq!(solution.denominator, 3.0);
        let velocity = solution.velocity.unwrap();
        assert_eq!(round_float_to(velocity, 7), 3.7576196);
    }

    #[test]
    fn no_friction_is_pure_energy_balance() {
        let inputs = VelocityInputs {
            weight_mass: 1.0,
            initial_height: 2.0,
            car_mass: 1.0,
            height_change: 0.0,
            gravity: 10.0,
            friction_term: 0.0,
            combined_mass: 2.0,
        };
        let solution = solve_final_velocity(&inputs);
        assert_eq!(solution.numerator, 40.0);
        assert_eq!(solution.velocity, Ok(20.0_f64.sqrt()));
    }

    #[test]
    fn large_friction_gives_negative_numerator() {
        let solution = solve_final_velocity(&reference_inputs(1000.0));
        assert!(solution.numerator < 0.0);
        match solution.velocity {
            Err(RampModelError::NegativeNumerator { numerator }) => {
                assert_eq!(numerator, solution.numerator);
            }
            other => panic!("Expected NegativeNumerator error, got {:?}", other)
        }
    }

    #[test]
    fn zero_numerator_is_at_rest() {
        let inputs = VelocityInputs {
            weight_mass: 1.0,
            initial_height: 1.0,
            car_mass: 0.0,
            height_change: 0.0,
            gravity: 5.0,
            friction_term: 10.0,
            combined_mass: 1.0,
        };
        let solution = solve_final_velocity(&inputs);
        assert_eq!(solution.velocity, Ok(0.0));
    }

    #[test]
    fn non_positive_denominator() {
        let mut inputs = reference_inputs(1.7858849);
        inputs.combined_mass = 0.0;
        assert_eq!(solve_final_velocity(&inputs).velocity,
                   Err(RampModelError::NonPositiveDenominator { denominator: 0.0 }));

        inputs.combined_mass = -1.0;
        assert_eq!(solve_final_velocity(&inputs).velocity,
                   Err(RampModelError::NonPositiveDenominator { denominator: -1.0 }));
    }

    #[test]
    fn denominator_checked_before_numerator() {
        let mut inputs = reference_inputs(1000.0);
        inputs.combined_mass = 0.0;
        let solution = solve_final_velocity(&inputs);
        assert!(solution.numerator < 0.0);
        assert!(matches!(solution.velocity, Err(RampModelError::NonPositiveDenominator { .. })));
    }
}

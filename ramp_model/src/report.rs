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

use std::fmt::{Display, Formatter};
use itertools::Itertools;
use utils::numeric::format_fixed;
use crate::error::RampModelError;
use crate::model::{AxleLoads, WeightDistribution};

pub const DEFAULT_PRECISION: usize = 7;

/// Every value produced by a [`crate::RampCalculation`] run
#[derive(Clone, Debug, PartialEq)]
pub struct RampReport {
    pub loads: AxleLoads,
    pub distribution: WeightDistribution,
    pub friction_term: f64,
    pub numerator: f64,
    pub denominator: f64,
    pub final_velocity: Option<f64>,
    pub total_distance: f64,
    pub errors: Vec<RampModelError>,
}

impl RampReport {
    pub fn succeeded(&self) -> bool {
        self.final_velocity.is_some()
    }

    /// The console report, one entry per line.
    ///
    /// Computed values are shown with `precision` decimal places apart from
    /// the two raw axle loads at the top and the ramp length.
    pub fn lines(&self, precision: usize) -> Vec<String> {
        let fixed = |value: f64| format_fixed(value, precision);
        let mut lines = vec![
            format!("PR is {}", self.loads.rear),
            format!("PF is {}", self.loads.front),
        ];
        lines.extend(self.errors.iter()
            .filter(|e| matches!(e, RampModelError::ZeroTotalWeight))
            .map(|e| e.to_string()));

        lines.push(format!("Calculated friction term: {}", fixed(self.friction_term)));
        lines.push(format!("Numerator after subtracting friction: {}", fixed(self.numerator)));
        lines.extend(self.errors.iter()
            .filter(|e| !matches!(e, RampModelError::ZeroTotalWeight))
            .map(|e| e.to_string()));

        match self.final_velocity {
            Some(v) => lines.push(format!("The final velocity V2 of the car is: {} m/s", fixed(v))),
            None => lines.push("Calculation of V2 failed due to invalid inputs.".to_string())
        }

        lines.push(format!("The load on the rear axle PR is: {} N", fixed(self.loads.rear)));
        lines.push(format!("The load on the front axle PF is: {} N", fixed(self.loads.front)));
        lines.push(format!("The weight distribution for the front axle is: {}", fixed(self.distribution.front_fraction)));
        lines.push(format!("The weight distribution for the rear axle is: {}", fixed(self.distribution.rear_fraction)));
        lines.push(format!("The revolutions for the front axle are (nF): {}", fixed(self.distribution.front_revolutions)));
        lines.push(format!("The revolutions for the rear axle are (nR): {}", fixed(self.distribution.rear_revolutions)));
        lines.push(format!("Total distance of the ramp: {} meters", self.total_distance));
        lines
    }

    pub fn render(&self, precision: usize) -> String {
        self.lines(precision).iter().join("\n")
    }
}

impl Display for RampReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(DEFAULT_PRECISION))
    }
}

#[cfg(test)]
mod tests {
    use crate::calculation::RampCalculation;
    use crate::parameters::RampCarParameters;
    use crate::report::DEFAULT_PRECISION;

    #[test]
    fn reference_report() {
        let report = RampCalculation::reference().run();
        assert!(report.succeeded());
        let expected = vec![
            "PR is 20.233125000000005",
            "PF is 9.196874999999999",
            "Calculated friction term: 1.7858849",
            "Numerator after subtracting friction: 42.3591151",
            "The final velocity V2 of the car is: 3.7576196 m/s",
            "The load on the rear axle PR is: 20.2331250 N",
            "The load on the front axle PF is: 9.1968750 N",
            "The weight distribution for the front axle is: 0.3125000",
            "The weight distribution for the rear axle is: 0.6875000",
            "The revolutions for the front axle are (nF): 61.2134397",
            "The revolutions for the rear axle are (nR): 44.2097064",
            "Total distance of the ramp: 5 meters",
        ];
        assert_eq!(report.lines(DEFAULT_PRECISION), expected);
        assert_eq!(report.to_string(), expected.join("\n"));
    }

    #[test]
    fn precision_is_configurable() {
        let report = RampCalculation::reference().run();
        let lines = report.lines(2);
        assert_eq!(lines[2], "Calculated friction term: 1.79");
        assert_eq!(lines[4], "The final velocity V2 of the car is: 3.76 m/s");
        assert_eq!(lines[0], "PR is 20.233125000000005");
    }

    #[test]
    fn zero_weight_report() {
        let params = RampCarParameters { gravity: 0.0, ..RampCarParameters::reference() };
        let lines = RampCalculation::new(params).run().lines(DEFAULT_PRECISION);
        assert_eq!(lines[2], "Error: Total weight is zero, cannot calculate nF and nR.");
        assert_eq!(lines[3], "Calculated friction term: 0.2858849");
        assert!(lines.contains(&"The weight distribution for the front axle is: 0.0000000".to_string()));
        assert!(lines.contains(&"The revolutions for the rear axle are (nR): 0.0000000".to_string()));
    }

    #[test]
    fn failed_velocity_report() {
        let params = RampCarParameters { friction_coefficient: 10.0, ..RampCarParameters::reference() };
        let report = RampCalculation::new(params).run();
        assert!(!report.succeeded());
        let lines = report.lines(DEFAULT_PRECISION);
        assert_eq!(lines[4], "Error: Numerator is negative, cannot take square root of negative number.");
        assert_eq!(lines[5], "Calculation of V2 failed due to invalid inputs.");
        assert_eq!(lines.len(), 13);
    }
}

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

/// Weight (N) of `mass` (kg) under `gravity` (m/s^2)
pub fn weight_from_mass(mass: f64, gravity: f64) -> f64 {
    mass * gravity
}

pub fn circumference(radius: f64) -> f64 {
    2.0 * PI * radius
}

/// Number of turns a shaft of `radius` makes while covering `distance`.
///
/// Both values must share a unit. A zero radius gives an infinite count.
pub fn revolutions_over_distance(distance: f64, radius: f64) -> f64 {
    distance / circumference(radius)
}

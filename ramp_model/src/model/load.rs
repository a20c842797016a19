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
use utils::units::weight_from_mass;

/// Static vertical reactions (N) at each axle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxleLoads {
    pub total_weight: f64,
    pub front: f64,
    pub rear: f64,
}

/// Split the weight of the car plus its attached mass between the two axles.
///
/// The car body is assumed to have its centre of gravity halfway along the
/// wheelbase while the attached mass sits `weight_offset` from the rear axle.
/// Taking moments gives the rear reaction and the front reaction is whatever
/// is left of the total weight, so `front + rear == total_weight`.
///
/// A zero `wheelbase` is not checked and yields non-finite loads.
pub fn solve_axle_loads(car_mass: f64,
                        weight_mass: f64,
                        wheelbase: f64,
                        weight_offset: f64,
                        gravity: f64) -> AxleLoads
{
    let car_weight = weight_from_mass(car_mass, gravity);
    let attached_weight = weight_from_mass(weight_mass, gravity);
    let total_weight = car_weight + attached_weight;

    let car_cog_distance = wheelbase / 2.0;
    let moment = (car_weight * car_cog_distance) + (attached_weight * weight_offset);
    let rear = -(moment / wheelbase) + car_weight + attached_weight;
    let front = -rear + car_weight + attached_weight;
    debug!("Axle loads: total {}N, front {}N, rear {}N", total_weight, front, rear);
    AxleLoads { total_weight, front, rear }
}

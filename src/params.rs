use crate::{
    error::{EstimateError, EstimateResult},
    mesh,
    vars::*,
};
use num_traits::Zero;
use std::fmt::Display;

/// reject anything that is not strictly positive, NaN included
pub fn positive<T>(name: &'static str, value: T) -> EstimateResult<T>
where
    T: Zero + PartialOrd + Display + Copy,
{
    if value > T::zero() {
        Ok(value)
    } else {
        Err(EstimateError::InvalidParameter {
            name,
            value: value.to_string(),
        })
    }
}

/// reject negative and non-finite values
pub fn non_negative(name: &'static str, value: f64) -> EstimateResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(EstimateError::InvalidParameter {
            name,
            value: value.to_string(),
        })
    }
}

fn positive_finite(name: &'static str, value: f64) -> EstimateResult<f64> {
    if value.is_finite() {
        positive(name, value)
    } else {
        Err(EstimateError::InvalidParameter {
            name,
            value: value.to_string(),
        })
    }
}

/// time stepping and extent of a single run
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SimulationParameters {
    pub time_step: f64, // seconds
    pub grid_columns: u64,
    pub vertical_levels: u32,
    pub days: f64,
}

impl SimulationParameters {
    pub fn new(
        time_step: f64,
        grid_columns: u64,
        vertical_levels: u32,
        days: f64,
    ) -> EstimateResult<Self> {
        Self {
            time_step,
            grid_columns,
            vertical_levels,
            days,
        }
        .validate()
    }

    /// check a bundle, including one assembled field by field
    pub fn validate(self) -> EstimateResult<Self> {
        positive_finite("time step", self.time_step)?;
        positive("grid columns", self.grid_columns)?;
        positive("vertical levels", self.vertical_levels)?;
        positive_finite("simulation days", self.days)?;
        Ok(self)
    }

    /// take the grid column count from a mesh preset
    pub fn for_mesh(
        key: &str,
        time_step: f64,
        vertical_levels: u32,
        days: f64,
    ) -> EstimateResult<Self> {
        let mesh = mesh::lookup(key)?;
        Self::new(time_step, mesh.grid_columns, vertical_levels, days)
    }

    pub fn total_steps(&self) -> f64 {
        self.days * SECONDS_PER_DAY / self.time_step
    }

    pub fn total_grid_points(&self) -> f64 {
        self.grid_columns as f64 * self.vertical_levels as f64
    }
}

/// number of output fields and how often they are written
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct OutputSpec {
    pub vars_2d: u32,
    pub vars_3d: u32,
    pub outputs_per_day_2d: u32,
    pub outputs_per_day_3d: u32,
}

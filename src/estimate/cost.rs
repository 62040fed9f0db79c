use crate::{
    error::EstimateResult,
    params::{non_negative, positive, SimulationParameters},
    units::{CoreHours, Unit},
};
use log::trace;

/// efficiency measured on a reference run, in core-hours per time step per grid point
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Calibration {
    pub efficiency: f64,
    pub reference: SimulationParameters,
}

impl Calibration {
    pub fn project(&self, params: &SimulationParameters) -> EstimateResult<CoreHours> {
        project(self.efficiency, params)
    }
}

/// derive the cost per time step per grid point from the core-hours a run consumed
pub fn calibrate(
    core_hours: CoreHours,
    params: &SimulationParameters,
) -> EstimateResult<Calibration> {
    let reference = params.validate()?;
    let core_hours = non_negative("total core-hours", core_hours.release())?;
    trace!("calibrating efficiency on {:?}", reference);

    Ok(Calibration {
        efficiency: core_hours / (reference.total_steps() * reference.total_grid_points()),
        reference,
    })
}

/// core-hours needed by a run at the given cost per time step per grid point
pub fn project(efficiency: f64, params: &SimulationParameters) -> EstimateResult<CoreHours> {
    let params = params.validate()?;
    let efficiency = positive("core-hours per step per point", efficiency)?;
    trace!("projecting core-hours for {:?}", params);

    Ok(CoreHours::confine(
        params.total_steps() * params.total_grid_points() * efficiency,
    ))
}

pub fn efficiency(
    total_core_hours: f64,
    time_step: f64,
    grid_columns: u64,
    vertical_levels: u32,
    days: f64,
) -> EstimateResult<f64> {
    //! core-hours per time step per grid point of a finished run
    let params = SimulationParameters::new(time_step, grid_columns, vertical_levels, days)?;
    Ok(calibrate(CoreHours::confine(total_core_hours), &params)?.efficiency)
}

pub fn total_core_hours(
    time_step: f64,
    grid_columns: u64,
    vertical_levels: u32,
    days: f64,
    efficiency: f64,
) -> EstimateResult<f64> {
    //! inverse of `efficiency`
    let params = SimulationParameters::new(time_step, grid_columns, vertical_levels, days)?;
    Ok(project(efficiency, &params)?.release())
}

use crate::{
    estimate::{Calibration, MeshSurveyRow, StorageEstimate},
    mesh,
    params::{OutputSpec, SimulationParameters},
    units::{CoreHours, Unit},
};
use itertools::Itertools;

/* # console summaries */

fn echo(params: &SimulationParameters) -> String {
    format!(
        "time step: {} s\ngrid columns: {}\nvertical levels: {}\nsimulation length: {} days",
        params.time_step, params.grid_columns, params.vertical_levels, params.days
    )
}

pub fn calibration(core_hours: CoreHours, calibration: &Calibration) -> String {
    format!(
        "{}\ntotal core-hours: {:.2}\ncore-hours per time step per grid point: {:e}",
        echo(&calibration.reference),
        core_hours.release(),
        calibration.efficiency
    )
}

pub fn projection(efficiency: f64, params: &SimulationParameters, core_hours: CoreHours) -> String {
    format!(
        "{}\ncore-hours per time step per grid point: {:e}\ntotal core-hours: {}",
        echo(params),
        efficiency,
        core_hours
    )
}

pub fn storage(
    output: &OutputSpec,
    params: &SimulationParameters,
    estimate: &StorageEstimate,
) -> String {
    format!(
        "2D variables: {} at {} outputs per day\n3D variables: {} at {} outputs per day\n{}\n\
         storage of 2D fields: {}\nstorage of 3D fields: {}\ntotal storage: {}",
        output.vars_2d,
        output.outputs_per_day_2d,
        output.vars_3d,
        output.outputs_per_day_3d,
        echo(params),
        estimate.storage_2d,
        estimate.storage_3d,
        estimate.total
    )
}

pub fn survey(rows: &[MeshSurveyRow]) -> String {
    rows.iter()
        .map(|row| {
            format!(
                "{:>8} {:>7.2} km {:>10} columns {:>12.2} Mcore-h {:>10.2} TB",
                row.key,
                row.mesh.spacing_km,
                row.mesh.grid_columns,
                row.core_hours.millions(),
                row.storage.total.release()
            )
        })
        .join("\n")
}

pub fn available_meshes() -> String {
    mesh::keys().join(", ")
}

use crate::{
    error::EstimateResult,
    params::{non_negative, positive, OutputSpec},
    units::{Terabytes, Unit},
    vars::*,
};
use log::trace;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StorageEstimate {
    pub storage_2d: Terabytes,
    pub storage_3d: Terabytes,
    pub total: Terabytes,
}

fn bits_to_terabytes(bits: f64) -> Terabytes {
    Terabytes::confine(bits * TERABYTES_PER_BIT)
}

/// disk space taken by the output of a run
pub fn storage(
    output: &OutputSpec,
    grid_columns: u64,
    vertical_levels: u32,
    days: f64,
) -> EstimateResult<StorageEstimate> {
    let columns = positive("grid columns", grid_columns)? as f64;
    let levels = positive("vertical levels", vertical_levels)? as f64;
    let days = non_negative("simulation days", days)?;
    trace!("estimating storage of {:?}", output);

    let bits_2d = output.vars_2d as f64
        * columns
        * days
        * output.outputs_per_day_2d as f64
        * BITS_PER_VALUE;
    let bits_3d = output.vars_3d as f64
        * columns
        * levels
        * days
        * output.outputs_per_day_3d as f64
        * BITS_PER_VALUE;

    let storage_2d = bits_to_terabytes(bits_2d);
    let storage_3d = bits_to_terabytes(bits_3d);
    Ok(StorageEstimate {
        storage_2d,
        storage_3d,
        total: storage_2d + storage_3d,
    })
}

pub fn storage_estimate(
    vars_2d: u32,
    vars_3d: u32,
    outputs_per_day_2d: u32,
    outputs_per_day_3d: u32,
    grid_columns: u64,
    vertical_levels: u32,
    days: f64,
) -> EstimateResult<(f64, f64, f64)> {
    //! storage of 2D fields, 3D fields and both together, in terabytes
    let estimate = storage(
        &OutputSpec {
            vars_2d,
            vars_3d,
            outputs_per_day_2d,
            outputs_per_day_3d,
        },
        grid_columns,
        vertical_levels,
        days,
    )?;
    Ok((
        estimate.storage_2d.release(),
        estimate.storage_3d.release(),
        estimate.total.release(),
    ))
}

use atmocost::{
    error::{EstimateError, EstimateResult},
    estimate,
    params::{OutputSpec, SimulationParameters},
    report,
    units::{CoreHours, Unit},
    vars::*,
};
use log::{error, info};
use std::process::ExitCode;

fn run() -> EstimateResult<()> {
    // calibrate on the short reference run
    let reference = SimulationParameters::for_mesh(REF_MESH, REF_TIME_STEP, REF_LEVELS, REF_DAYS)?;
    let reference_hours = CoreHours::confine(REF_CORE_HOURS);
    let calibration = estimate::calibrate(reference_hours, &reference)?;
    info!("calibrated on {} mesh", REF_MESH);
    println!("{}\n", report::calibration(reference_hours, &calibration));

    // project to the target run
    let target =
        SimulationParameters::for_mesh(TARGET_MESH, TARGET_TIME_STEP, TARGET_LEVELS, TARGET_DAYS)?;
    let target_hours = calibration.project(&target)?;
    info!("projected core-hours on {} mesh", TARGET_MESH);
    println!(
        "{}\n",
        report::projection(calibration.efficiency, &target, target_hours)
    );

    // output volume
    let output = OutputSpec {
        vars_2d: VARS_2D,
        vars_3d: VARS_3D,
        outputs_per_day_2d: OUTPUTS_PER_DAY_2D,
        outputs_per_day_3d: OUTPUTS_PER_DAY_3D,
    };
    let storage = estimate::storage(
        &output,
        target.grid_columns,
        target.vertical_levels,
        target.days,
    )?;
    println!("{}\n", report::storage(&output, &target, &storage));

    // same run on every preset
    let rows = estimate::survey(
        calibration.efficiency,
        target.time_step,
        target.vertical_levels,
        target.days,
        &output,
    )?;
    println!("{}", report::survey(&rows));
    Ok(())
}

fn main() -> ExitCode {
    pretty_env_logger::init_timed();
    info!("initialising atmocost");
    match run() {
        Ok(()) => {
            info!("estimates completed");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            if let EstimateError::UnknownMeshKey(_) = err {
                error!("available meshes: {}", report::available_meshes());
            }
            ExitCode::FAILURE
        }
    }
}

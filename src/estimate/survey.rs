use crate::{
    error::EstimateResult,
    estimate::{cost, storage},
    mesh::{self, MeshConfig},
    params::{OutputSpec, SimulationParameters},
    units::CoreHours,
};
use log::trace;
use rayon::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct MeshSurveyRow {
    pub key: &'static str,
    pub mesh: MeshConfig,
    pub core_hours: CoreHours,
    pub storage: storage::StorageEstimate,
}

fn survey_mesh(
    key: &'static str,
    mesh: MeshConfig,
    efficiency: f64,
    time_step: f64,
    vertical_levels: u32,
    days: f64,
    output: &OutputSpec,
) -> EstimateResult<MeshSurveyRow> {
    let params = SimulationParameters::new(time_step, mesh.grid_columns, vertical_levels, days)?;
    Ok(MeshSurveyRow {
        key,
        mesh,
        core_hours: cost::project(efficiency, &params)?,
        storage: storage::storage(output, mesh.grid_columns, vertical_levels, days)?,
    })
}

/// project cost and storage of the same run on every mesh preset, coarsest first
pub fn survey(
    efficiency: f64,
    time_step: f64,
    vertical_levels: u32,
    days: f64,
    output: &OutputSpec,
) -> EstimateResult<Vec<MeshSurveyRow>> {
    trace!("surveying {} mesh presets", mesh::presets().len());

    let mut rows = mesh::presets()
        .par_iter()
        .map(|(key, mesh)| {
            survey_mesh(
                *key,
                *mesh,
                efficiency,
                time_step,
                vertical_levels,
                days,
                output,
            )
        })
        .collect::<EstimateResult<Vec<MeshSurveyRow>>>()?;
    rows.sort_by_key(|row| row.mesh.grid_columns);
    Ok(rows)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{error::EstimateError, units::Unit};
    use float_eq::assert_float_eq;
    const REL: f64 = 0.0000_0000_01;

    fn output() -> OutputSpec {
        OutputSpec {
            vars_2d: 15,
            vars_3d: 9,
            outputs_per_day_2d: 24,
            outputs_per_day_3d: 8,
        }
    }

    #[test]
    fn one_row_per_preset() {
        let rows = survey(2.5639208763925117e-09, 20.0, 127, 365.0, &output()).unwrap();
        assert_eq!(rows.len(), mesh::presets().len());
        for pair in rows.windows(2) {
            assert!(pair[0].mesh.grid_columns <= pair[1].mesh.grid_columns);
        }
        assert_eq!(rows[0].key, "480km");
        assert_eq!(rows[rows.len() - 1].key, "3km");
    }

    #[test]
    fn row_matches_direct_estimates() {
        let eff = 2.5639208763925117e-09;
        let rows = survey(eff, 20.0, 127, 365.0, &output()).unwrap();
        let row = rows.iter().find(|row| row.key == "3.75km").unwrap();

        assert_float_eq!(
            row.core_hours.release(),
            cost::total_core_hours(20.0, 41_943_042, 127, 365.0, eff).unwrap(),
            rmax <= REL
        );
        let (_, _, total) =
            storage::storage_estimate(15, 9, 24, 8, 41_943_042, 127, 365.0).unwrap();
        assert_float_eq!(row.storage.total.release(), total, rmax <= REL);
    }

    #[test]
    fn invalid_run_fails_whole_survey() {
        assert!(matches!(
            survey(0.0, 20.0, 127, 365.0, &output()),
            Err(EstimateError::InvalidParameter { .. })
        ));
        assert!(survey(1e-9, 20.0, 0, 365.0, &output()).is_err());
    }
}

pub mod cost;
pub mod storage;
pub mod survey;

pub use cost::{calibrate, efficiency, project, total_core_hours, Calibration};
pub use storage::{storage, storage_estimate, StorageEstimate};
pub use survey::{survey, MeshSurveyRow};

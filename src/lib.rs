pub mod error;
pub mod estimate;
pub mod mesh;
pub mod params;
pub mod report;
pub mod units;
pub mod vars;

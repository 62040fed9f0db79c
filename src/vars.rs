/* # formulas */

pub const SECONDS_PER_DAY: f64 = 86400.0;
pub const BITS_PER_VALUE: f64 = 32.0; // every field is written as a single precision float
pub const TERABYTES_PER_BIT: f64 = 1.25e-13; // 1 TB = 8e12 bits

/* # reference run */

// short run used to calibrate the cost per step per grid point
pub const REF_MESH: &str = "3.75km";
pub const REF_CORE_HOURS: f64 = 236000.0;
pub const REF_TIME_STEP: f64 = 20.0; // seconds
pub const REF_LEVELS: u32 = 127;
pub const REF_DAYS: f64 = 4.0;

/* # target run */

pub const TARGET_MESH: &str = "3.75km";
pub const TARGET_TIME_STEP: f64 = 20.0; // seconds
pub const TARGET_LEVELS: u32 = 127;
pub const TARGET_DAYS: f64 = 365.0;

/* # output */

pub const VARS_2D: u32 = 15;
pub const VARS_3D: u32 = 9;
pub const OUTPUTS_PER_DAY_2D: u32 = 24; // hourly
pub const OUTPUTS_PER_DAY_3D: u32 = 8; // three-hourly

/// Defines the directory where the output files are saved
pub const DEFAULT_OUT_DIR: &str = "/tmp/sofips/results";

/// Defines an auxiliary directory where the test result files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/sofips/test";

/// Gravity acceleration (m/s²) used to convert fractions of g into absolute units
pub const GRAVITY: f64 = 9.81;

/// Default maximum period of the spectrum (s)
pub const DEFAULT_T_MAX: f64 = 6.0;

/// Default period increment (s)
pub const DEFAULT_DT: f64 = 0.01;

/// Default number of decimal digits in tab-separated tables
pub const DEFAULT_PRECISION: usize = 4;

/// Maximum number of samples along the period axis
pub const MAX_NPOINT: usize = 1_000_000;

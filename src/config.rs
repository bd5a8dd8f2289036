use std::path::PathBuf;

/// Table file read at startup, relative to the working directory.
pub const DEFAULT_TABLE_PATH: &str = "NEW_GE_VDAS_HDAS_Channel_ID.csv";

/// A neighbouring boundary closer than this to the input raises a warning.
pub const DEFAULT_PROXIMITY_MM: f64 = 2.0;

/// Slack added to the proximity threshold so decimal inputs such as
/// `12.0 - 10.0` compare as exactly 2mm.
pub const DEFAULT_TOLERANCE_MM: f64 = 1e-6;

/// Built once by `main` with `Default` and owned by the application state.
#[derive(Debug, Clone)]
pub struct CalculatorConfig {
    pub table_path: PathBuf,
    pub proximity_mm: f64,
    pub tolerance_mm: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            table_path: PathBuf::from(DEFAULT_TABLE_PATH),
            proximity_mm: DEFAULT_PROXIMITY_MM,
            tolerance_mm: DEFAULT_TOLERANCE_MM,
        }
    }
}

impl CalculatorConfig {
    /// Whether `distance_mm` counts as "close" under the tolerance policy.
    pub fn is_near(&self, distance_mm: f64) -> bool {
        distance_mm.abs() <= self.proximity_mm + self.tolerance_mm
    }
}

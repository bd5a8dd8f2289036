use crate::config::CalculatorConfig;
use crate::data::model::FrdmTable;
use crate::data::resolver::{Resolution, resolve};
use crate::error::{FrdmError, Result};
use crate::report::{Report, format_resolution};
use crate::scene::{Scene, render};

// ---------------------------------------------------------------------------
// Input → resolution → text → scene
// ---------------------------------------------------------------------------

/// Everything produced by one successful lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub resolution: Resolution,
    pub report: Report,
    pub scene: Scene,
}

/// Largest distance from isocenter accepted from the text field.
pub const MAX_INPUT_MM: f64 = 10_000.0;

/// Parse the text field. Surrounding whitespace is ignored; NaN, infinities
/// and magnitudes past [`MAX_INPUT_MM`] are rejected along with anything
/// non-numeric.
pub fn parse_input(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() && v.abs() <= MAX_INPUT_MM => Ok(v),
        _ => Err(FrdmError::InvalidInput(trimmed.to_string())),
    }
}

/// Run the full pipeline for an already parsed measurement.
pub fn evaluate(
    table: &FrdmTable,
    config: &CalculatorConfig,
    input_mm: f64,
    show_ring: bool,
) -> Result<Calculation> {
    let resolution = resolve(table, config, input_mm)?;
    let report = format_resolution(&resolution);
    let scene = render(table.max_index(), Some(&resolution), show_ring);
    Ok(Calculation {
        resolution,
        report,
        scene,
    })
}

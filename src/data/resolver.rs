use std::fmt;

use crate::config::CalculatorConfig;
use crate::error::{FrdmError, Result};

use super::model::{FrdmTable, TableRow};

// ---------------------------------------------------------------------------
// Resolution result
// ---------------------------------------------------------------------------

/// Which end of the module range a proximity warning concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Low,
    High,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Low => write!(f, "Low"),
            Side::High => write!(f, "High"),
        }
    }
}

/// A neighbouring row lies within the proximity threshold and maps one side
/// to a different module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProximityWarning {
    pub side: Side,
    /// Module index of the neighbouring row on that side.
    pub near_index: u32,
}

/// Outcome of looking up one measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub input_mm: f64,
    /// Position of `row` within the table.
    pub row_index: usize,
    pub row: TableRow,
    /// Upper neighbour first, then lower neighbour; low side before high.
    pub warnings: Vec<ProximityWarning>,
}

impl Resolution {
    /// Module indices that should carry the proximity highlight.
    pub fn near_indices(&self) -> impl Iterator<Item = u32> + '_ {
        self.warnings.iter().map(|w| w.near_index)
    }
}

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

/// Find the row whose interval `[row.mm, next.mm)` contains `input_mm`.
///
/// The final row is open-ended. Inputs below the first boundary are
/// rejected rather than clamped, and non-finite inputs are invalid.
pub fn resolve(table: &FrdmTable, config: &CalculatorConfig, input_mm: f64) -> Result<Resolution> {
    if !input_mm.is_finite() {
        return Err(FrdmError::InvalidInput(input_mm.to_string()));
    }

    let rows = table.rows();
    // Rows at or below the input; boundaries are strictly increasing so the
    // last of them is the first (and only) row whose interval matches.
    let covered = rows.partition_point(|r| r.lower_bound_mm <= input_mm);
    if covered == 0 {
        return Err(FrdmError::OutOfRange {
            input_mm,
            min_mm: table.min_mm(),
        });
    }
    let row_index = covered - 1;
    let current = rows[row_index];

    let above = rows.get(row_index + 1);
    let below = row_index.checked_sub(1).and_then(|i| rows.get(i));

    let mut warnings = Vec::new();
    for neighbour in [above, below].into_iter().flatten() {
        if !config.is_near(neighbour.lower_bound_mm - input_mm) {
            continue;
        }
        if neighbour.low_index != current.low_index {
            warnings.push(ProximityWarning {
                side: Side::Low,
                near_index: neighbour.low_index,
            });
        }
        if neighbour.high_index != current.high_index {
            warnings.push(ProximityWarning {
                side: Side::High,
                near_index: neighbour.high_index,
            });
        }
    }

    log::debug!(
        "{input_mm}mm -> row {row_index} (FRDM {}..{}), {} warning(s)",
        current.low_index,
        current.high_index,
        warnings.len()
    );

    Ok(Resolution {
        input_mm,
        row_index,
        row: current,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(mm: f64, low: u32, high: u32) -> TableRow {
        TableRow {
            lower_bound_mm: mm,
            low_channel: 100.0 - mm,
            high_channel: 100.0 + mm,
            low_index: low,
            high_index: high,
        }
    }

    fn table() -> FrdmTable {
        FrdmTable::new(vec![
            row(0.0, 5, 50),
            row(5.0, 4, 50),
            row(10.0, 3, 50),
            row(12.0, 4, 50),
            row(20.0, 2, 52),
        ])
        .unwrap()
    }

    #[test]
    fn test_interior_value_resolves_containing_row() {
        let config = CalculatorConfig::default();
        let res = resolve(&table(), &config, 7.0).unwrap();
        assert_eq!(res.row_index, 1);
        assert_eq!(res.row.lower_bound_mm, 5.0);
    }

    #[test]
    fn test_exact_boundary_resolves_to_that_row() {
        let config = CalculatorConfig::default();
        let res = resolve(&table(), &config, 10.0).unwrap();
        assert_eq!(res.row_index, 2);
    }

    #[test]
    fn test_proximity_to_upper_neighbour() {
        let config = CalculatorConfig::default();
        let res = resolve(&table(), &config, 11.5).unwrap();
        assert_eq!(res.row.lower_bound_mm, 10.0);
        assert_eq!(
            res.warnings,
            vec![ProximityWarning {
                side: Side::Low,
                near_index: 4
            }]
        );
    }

    #[test]
    fn test_proximity_to_lower_neighbour() {
        let config = CalculatorConfig::default();
        // Row at 12mm resolves; 10mm neighbour is exactly 2mm away.
        let res = resolve(&table(), &config, 12.0).unwrap();
        assert_eq!(res.row_index, 3);
        assert_eq!(
            res.warnings,
            vec![ProximityWarning {
                side: Side::Low,
                near_index: 3
            }]
        );
    }

    #[test]
    fn test_warning_order_upper_then_lower() {
        let config = CalculatorConfig {
            proximity_mm: 10.0,
            ..CalculatorConfig::default()
        };
        let res = resolve(&table(), &config, 12.0).unwrap();
        assert_eq!(
            res.warnings,
            vec![
                ProximityWarning { side: Side::Low, near_index: 2 },
                ProximityWarning { side: Side::High, near_index: 52 },
                ProximityWarning { side: Side::Low, near_index: 3 },
            ]
        );
    }

    #[test]
    fn test_no_warning_when_indices_match() {
        let config = CalculatorConfig::default();
        // 0mm row is 5/50, 5mm row is 4/50: only the low side differs.
        let res = resolve(&table(), &config, 3.5).unwrap();
        assert_eq!(res.warnings.len(), 1);
        assert_eq!(res.warnings[0].side, Side::Low);
    }

    #[test]
    fn test_far_from_neighbours_has_no_warnings() {
        let config = CalculatorConfig::default();
        let res = resolve(&table(), &config, 16.0).unwrap();
        assert!(res.warnings.is_empty());
    }

    #[test]
    fn test_last_row_is_open_ended() {
        let config = CalculatorConfig::default();
        let res = resolve(&table(), &config, 500.0).unwrap();
        assert_eq!(res.row_index, 4);
        assert!(res.warnings.is_empty());
    }

    #[test]
    fn test_below_minimum_is_out_of_range() {
        let config = CalculatorConfig::default();
        let err = resolve(&table(), &config, -0.5).unwrap_err();
        assert_eq!(
            err,
            FrdmError::OutOfRange {
                input_mm: -0.5,
                min_mm: 0.0
            }
        );
    }

    #[test]
    fn test_non_finite_is_invalid() {
        let config = CalculatorConfig::default();
        assert!(matches!(
            resolve(&table(), &config, f64::NAN),
            Err(FrdmError::InvalidInput(_))
        ));
        assert!(matches!(
            resolve(&table(), &config, f64::INFINITY),
            Err(FrdmError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_single_row_table() {
        let config = CalculatorConfig::default();
        let table = FrdmTable::new(vec![row(0.0, 29, 29)]).unwrap();
        let res = resolve(&table, &config, 1.0).unwrap();
        assert_eq!(res.row_index, 0);
        assert!(res.warnings.is_empty());
    }
}

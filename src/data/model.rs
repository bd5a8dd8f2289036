use crate::error::{FrdmError, Result};

// ---------------------------------------------------------------------------
// TableRow – one boundary of the channel table
// ---------------------------------------------------------------------------

/// A single boundary row: from `lower_bound_mm` up to the next row's bound,
/// the detector sees channels `low_channel..high_channel` on modules
/// `low_index..high_index`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableRow {
    pub lower_bound_mm: f64,
    pub low_channel: f64,
    pub high_channel: f64,
    /// 1-based FRDM module on the low side.
    pub low_index: u32,
    /// 1-based FRDM module on the high side.
    pub high_index: u32,
}

// ---------------------------------------------------------------------------
// FrdmTable – the complete validated table
// ---------------------------------------------------------------------------

/// Ordered, non-empty table with strictly increasing boundaries.
/// Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct FrdmTable {
    rows: Vec<TableRow>,
}

impl FrdmTable {
    /// Validate and wrap the rows. Row numbers in errors are 1-based.
    pub fn new(rows: Vec<TableRow>) -> Result<Self> {
        if rows.is_empty() {
            return Err(FrdmError::EmptyTable);
        }

        for (i, row) in rows.iter().enumerate() {
            let row_no = i + 1;
            for (column, value) in [
                ("mm", row.lower_bound_mm),
                ("low ch", row.low_channel),
                ("high ch", row.high_channel),
            ] {
                if !value.is_finite() {
                    return Err(FrdmError::NonFiniteValue { row: row_no, column });
                }
            }
            for (column, value) in [("Low FRDM", row.low_index), ("High FRDM", row.high_index)] {
                if value == 0 {
                    return Err(FrdmError::InvalidIndex {
                        row: row_no,
                        column,
                        value: 0.0,
                    });
                }
            }
        }

        for (i, pair) in rows.windows(2).enumerate() {
            if pair[1].lower_bound_mm <= pair[0].lower_bound_mm {
                return Err(FrdmError::NonIncreasingBoundary {
                    row: i + 2,
                    previous_mm: pair[0].lower_bound_mm,
                    mm: pair[1].lower_bound_mm,
                });
            }
        }

        Ok(FrdmTable { rows })
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false for a constructed table; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Smallest covered measurement.
    pub fn min_mm(&self) -> f64 {
        self.rows[0].lower_bound_mm
    }

    /// Last boundary; inputs at or past it resolve to the final row.
    pub fn max_mm(&self) -> f64 {
        self.rows[self.rows.len() - 1].lower_bound_mm
    }

    /// Highest module number referenced anywhere in the table. This is the
    /// number of cells the diagram draws.
    pub fn max_index(&self) -> u32 {
        self.rows
            .iter()
            .map(|r| r.low_index.max(r.high_index))
            .max()
            .unwrap_or(0)
    }
}

/// Convert a numeric cell into a module index. Spreadsheet exports often
/// write indices as `12.0`, so whole floats are accepted.
pub(crate) fn index_from_cell(row: usize, column: &'static str, value: f64) -> Result<u32> {
    if !value.is_finite() || value.fract() != 0.0 || value < 1.0 || value > u32::MAX as f64 {
        return Err(FrdmError::InvalidIndex { row, column, value });
    }
    Ok(value as u32)
}

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

use super::model::{FrdmTable, TableRow, index_from_cell};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the channel table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with `mm`, `low ch`, `high ch`, `Low FRDM`, `High FRDM`
/// * `.json` – `[{ "mm": 0.0, "low ch": 456.5, ... }, ...]`
pub fn load_file(path: &Path) -> Result<FrdmTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let file = std::fs::File::open(path)
        .with_context(|| format!("opening channel table {}", path.display()))?;

    let table = match ext.as_str() {
        "csv" => read_csv(file),
        "json" => read_json(file),
        other => Err(anyhow!("Unsupported file extension: .{other}")),
    }
    .with_context(|| format!("loading {}", path.display()))?;

    log::info!(
        "Loaded {} table rows from {} ({:.1}mm..{:.1}mm, {} modules)",
        table.len(),
        path.display(),
        table.min_mm(),
        table.max_mm(),
        table.max_index()
    );
    Ok(table)
}

// ---------------------------------------------------------------------------
// Raw record shared by both formats
// ---------------------------------------------------------------------------

/// One record as it appears on disk. Index columns are read as floats since
/// exported tables frequently write `12.0`.
#[derive(Debug, Deserialize)]
struct RawRow {
    mm: f64,
    #[serde(rename = "low ch")]
    low_ch: f64,
    #[serde(rename = "high ch")]
    high_ch: f64,
    #[serde(rename = "Low FRDM")]
    low_frdm: f64,
    #[serde(rename = "High FRDM")]
    high_frdm: f64,
}

fn into_table(raw: Vec<RawRow>) -> Result<FrdmTable> {
    let rows = raw
        .into_iter()
        .enumerate()
        .map(|(i, r)| {
            let row_no = i + 1;
            Ok(TableRow {
                lower_bound_mm: r.mm,
                low_channel: r.low_ch,
                high_channel: r.high_ch,
                low_index: index_from_cell(row_no, "Low FRDM", r.low_frdm)?,
                high_index: index_from_cell(row_no, "High FRDM", r.high_frdm)?,
            })
        })
        .collect::<crate::error::Result<Vec<_>>>()?;

    Ok(FrdmTable::new(rows)?)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one boundary per line.
/// Headers and cells are whitespace-trimmed; extra columns are ignored and
/// column order does not matter.
pub fn read_csv<R: Read>(source: R) -> Result<FrdmTable> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut raw = Vec::new();
    for (row_no, result) in reader.deserialize::<RawRow>().enumerate() {
        let record = result.with_context(|| format!("CSV row {}", row_no + 1))?;
        raw.push(record);
    }

    into_table(raw)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "mm": 0.0, "low ch": 456.5, "high ch": 456.5, "Low FRDM": 29, "High FRDM": 29 },
///   ...
/// ]
/// ```
pub fn read_json<R: Read>(source: R) -> Result<FrdmTable> {
    let raw: Vec<RawRow> = serde_json::from_reader(source).context("parsing JSON")?;
    into_table(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FrdmError;

    const SMALL_CSV: &str = "\
mm,low ch,high ch,Low FRDM,High FRDM
0,456.5,456.5,29,29
5,447.6,465.4,28,30
10,438.7,474.3,28,30
";

    #[test]
    fn test_read_csv_basic() {
        let table = read_csv(SMALL_CSV.as_bytes()).unwrap();
        assert_eq!(table.len(), 3);
        let second = table.rows()[1];
        assert_eq!(second.lower_bound_mm, 5.0);
        assert_eq!(second.low_channel, 447.6);
        assert_eq!(second.low_index, 28);
        assert_eq!(second.high_index, 30);
    }

    #[test]
    fn test_read_csv_reordered_and_extra_columns() {
        let text = "\
High FRDM , note, mm , Low FRDM,high ch,low ch
30.0,edge,2.5,28.0,460.0,452.0
31,,7.5,27,470,442
";
        let table = read_csv(text.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0].high_index, 30);
        assert_eq!(table.rows()[1].low_channel, 442.0);
    }

    #[test]
    fn test_read_csv_missing_column_fails() {
        let text = "mm,low ch,high ch,Low FRDM\n0,1,2,3\n";
        assert!(read_csv(text.as_bytes()).is_err());
    }

    #[test]
    fn test_read_csv_non_numeric_cell_fails() {
        let text = "mm,low ch,high ch,Low FRDM,High FRDM\nabc,1,2,3,4\n";
        let err = read_csv(text.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("CSV row 1"));
    }

    #[test]
    fn test_read_csv_fractional_index_fails() {
        let text = "mm,low ch,high ch,Low FRDM,High FRDM\n0,1,2,3.5,4\n";
        let err = read_csv(text.as_bytes()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FrdmError>(),
            Some(FrdmError::InvalidIndex { row: 1, column: "Low FRDM", .. })
        ));
    }

    #[test]
    fn test_read_csv_decreasing_boundaries_fail() {
        let text = "mm,low ch,high ch,Low FRDM,High FRDM\n5,1,2,3,4\n0,1,2,3,4\n";
        let err = read_csv(text.as_bytes()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FrdmError>(),
            Some(FrdmError::NonIncreasingBoundary { row: 2, .. })
        ));
    }

    #[test]
    fn test_read_csv_header_only_is_empty_table() {
        let text = "mm,low ch,high ch,Low FRDM,High FRDM\n";
        let err = read_csv(text.as_bytes()).unwrap_err();
        assert_eq!(err.downcast_ref::<FrdmError>(), Some(&FrdmError::EmptyTable));
    }

    #[test]
    fn test_read_json_records() {
        let text = r#"[
            {"mm": 0.0, "low ch": 456.5, "high ch": 456.5, "Low FRDM": 29, "High FRDM": 29},
            {"mm": 5.0, "low ch": 447.6, "high ch": 465.4, "Low FRDM": 28.0, "High FRDM": 30}
        ]"#;
        let table = read_json(text.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.max_index(), 30);
    }

    #[test]
    fn test_read_json_not_an_array_fails() {
        assert!(read_json(r#"{"mm": 0}"#.as_bytes()).is_err());
    }

    fn scratch_file(name: &str, body: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("frdm_calc_{}_{name}", std::process::id()));
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_load_file_unsupported_extension_names_path() {
        let path = scratch_file("table.txt", SMALL_CSV);
        let err = load_file(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        let chain = format!("{err:#}");
        assert!(chain.contains("Unsupported file extension: .txt"), "{chain}");
        assert!(chain.contains(&path.display().to_string()), "{chain}");
    }

    #[test]
    fn test_load_file_reads_json_by_extension() {
        let body = r#"[
            {"mm": 0.0, "low ch": 456.5, "high ch": 456.5, "Low FRDM": 29, "High FRDM": 29},
            {"mm": 5.0, "low ch": 447.61, "high ch": 465.39, "Low FRDM": 28, "High FRDM": 30}
        ]"#;
        let path = scratch_file("table.JSON", body);
        let table = load_file(&path);
        std::fs::remove_file(&path).unwrap();
        let table = table.unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[1].high_index, 30);
    }

    #[test]
    fn test_load_file_reads_csv_by_extension() {
        let path = scratch_file("table.csv", SMALL_CSV);
        let table = load_file(&path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(table.unwrap().len(), 3);
    }

    #[test]
    fn test_load_file_missing_path_fails() {
        let err = load_file(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(format!("{err:#}").contains("does/not/exist.csv"));
    }
}

use crate::data::resolver::{ProximityWarning, Resolution};

// ---------------------------------------------------------------------------
// Display text for a resolution
// ---------------------------------------------------------------------------

/// The strings shown in the output and warning regions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub low_text: String,
    pub high_text: String,
    /// `None` when no neighbour is close enough to matter.
    pub warning: Option<String>,
}

pub fn format_resolution(resolution: &Resolution) -> Report {
    let row = &resolution.row;
    let warning = if resolution.warnings.is_empty() {
        None
    } else {
        let sentences: Vec<String> = resolution.warnings.iter().map(warning_sentence).collect();
        Some(format!("WARNING: {}", sentences.join(" ")))
    };

    Report {
        low_text: format!("Low Channel: {:.1} (FRDM {})", row.low_channel, row.low_index),
        high_text: format!("High Channel: {:.1} (FRDM {})", row.high_channel, row.high_index),
        warning,
    }
}

fn warning_sentence(warning: &ProximityWarning) -> String {
    format!(
        "{} channel is close to the edge near FRDM {}.",
        warning.side, warning.near_index
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::TableRow;
    use crate::data::resolver::Side;

    fn resolution(warnings: Vec<ProximityWarning>) -> Resolution {
        Resolution {
            input_mm: 11.5,
            row_index: 2,
            row: TableRow {
                lower_bound_mm: 10.0,
                low_channel: 438.72,
                high_channel: 474.28,
                low_index: 3,
                high_index: 50,
            },
            warnings,
        }
    }

    #[test]
    fn test_channel_text_rounds_to_one_decimal() {
        let report = format_resolution(&resolution(Vec::new()));
        assert_eq!(report.low_text, "Low Channel: 438.7 (FRDM 3)");
        assert_eq!(report.high_text, "High Channel: 474.3 (FRDM 50)");
        assert_eq!(report.warning, None);
    }

    #[test]
    fn test_warning_sentences_are_concatenated() {
        let report = format_resolution(&resolution(vec![
            ProximityWarning {
                side: Side::Low,
                near_index: 4,
            },
            ProximityWarning {
                side: Side::High,
                near_index: 51,
            },
        ]));
        assert_eq!(
            report.warning.as_deref(),
            Some(
                "WARNING: Low channel is close to the edge near FRDM 4. \
                 High channel is close to the edge near FRDM 51."
            )
        );
    }
}

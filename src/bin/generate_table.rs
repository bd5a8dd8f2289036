use anyhow::{Context, Result};
use serde::Serialize;

use frdm_calc::config::DEFAULT_TABLE_PATH;

// 57 modules of 16 channels around channel 456.5, 0.5625mm per channel at
// isocenter, boundaries every 5mm out to 250mm.
const MODULES: u32 = 57;
const CHANNELS_PER_MODULE: f64 = 16.0;
const CENTER_CHANNEL: f64 = 456.5;
const MM_PER_CHANNEL: f64 = 0.5625;
const STEP_MM: f64 = 5.0;
const ROWS: u32 = 51;

#[derive(Serialize)]
struct Record {
    mm: f64,
    #[serde(rename = "low ch")]
    low_ch: f64,
    #[serde(rename = "high ch")]
    high_ch: f64,
    #[serde(rename = "Low FRDM")]
    low_frdm: u32,
    #[serde(rename = "High FRDM")]
    high_frdm: u32,
}

fn module_for_channel(channel: f64) -> u32 {
    let module = ((channel - 1.0) / CHANNELS_PER_MODULE).floor() as i64 + 1;
    module.clamp(1, MODULES as i64) as u32
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_TABLE_PATH.to_string());

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;

    for i in 0..ROWS {
        let mm = f64::from(i) * STEP_MM;
        let offset = mm / MM_PER_CHANNEL;
        let low_ch = CENTER_CHANNEL - offset;
        let high_ch = CENTER_CHANNEL + offset;
        writer.serialize(Record {
            mm,
            low_ch: round2(low_ch),
            high_ch: round2(high_ch),
            low_frdm: module_for_channel(low_ch),
            high_frdm: module_for_channel(high_ch),
        })?;
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {ROWS} boundary rows to {output_path}");
    Ok(())
}

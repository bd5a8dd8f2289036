use anyhow::Context;
use eframe::egui;

use frdm_calc::app::FrdmCalculatorApp;
use frdm_calc::data::loader;
use frdm_calc::state::AppState;
use frdm_calc::CalculatorConfig;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = CalculatorConfig::default();
    let table = loader::load_file(&config.table_path).inspect_err(|e| {
        log::error!("Cannot start without the channel table: {e:#}");
    })?;
    let state = AppState::new(table, config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 700.0])
            .with_min_inner_size([600.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "FRDM Calculator",
        options,
        Box::new(|cc| Ok(Box::new(FrdmCalculatorApp::new(cc, state)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
    .context("running the FRDM Calculator window")
}

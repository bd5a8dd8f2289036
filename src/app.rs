use eframe::egui;

use crate::color::BACKGROUND;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct FrdmCalculatorApp {
    pub state: AppState,
}

impl FrdmCalculatorApp {
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        let mut visuals = egui::Visuals::dark();
        visuals.panel_fill = BACKGROUND;
        visuals.window_fill = BACKGROUND;
        visuals.extreme_bg_color = BACKGROUND;
        cc.egui_ctx.set_visuals(visuals);
        Self { state }
    }
}

impl eframe::App for FrdmCalculatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: input and output ----
        egui::TopBottomPanel::top("top_bar")
            .frame(egui::Frame::side_top_panel(&ctx.style()).inner_margin(10.0))
            .show(ctx, |ui| {
                panels::top_bar(ui, &mut self.state);
            });

        // ---- Warning strip ----
        egui::TopBottomPanel::top("warning_bar")
            .show_separator_line(false)
            .show(ctx, |ui| {
                panels::warning_bar(ui, &self.state);
            });

        // ---- Central panel: module diagram ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::module_diagram(ui, &self.state);
        });
    }
}

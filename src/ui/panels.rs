use eframe::egui::{self, Color32, RichText, Ui};

use crate::color;
use crate::scene::Tone;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar – input, toggle, and output
// ---------------------------------------------------------------------------

/// Render the measurement input, ring toggle, and channel output.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(RichText::new("Input measurement from isocenter (mm):").size(16.0));

        let response = ui.add(
            egui::TextEdit::singleline(&mut state.input_text)
                .font(egui::FontId::proportional(20.0))
                .desired_width(80.0),
        );
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            state.submit();
        }

        let mut show_ring = state.show_ring();
        if ui
            .checkbox(&mut show_ring, RichText::new("Show Ring").size(16.0))
            .changed()
        {
            state.set_show_ring(show_ring);
        }

        ui.add_space(20.0);

        if let Some(calc) = state.calculation() {
            ui.label(
                RichText::new(&calc.report.low_text)
                    .size(20.0)
                    .strong()
                    .color(color::stroke_color(Tone::Low)),
            );
            ui.add_space(10.0);
            ui.label(
                RichText::new(&calc.report.high_text)
                    .size(20.0)
                    .strong()
                    .color(color::stroke_color(Tone::High)),
            );
        }

        if let Some(msg) = &state.status_message {
            ui.add_space(10.0);
            ui.label(RichText::new(msg).size(16.0).strong().color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Warning strip
// ---------------------------------------------------------------------------

/// Render the proximity warning, if the last lookup produced one.
pub fn warning_bar(ui: &mut Ui, state: &AppState) {
    let Some(warning) = state
        .calculation()
        .and_then(|calc| calc.report.warning.as_deref())
    else {
        return;
    };

    ui.add(
        egui::Label::new(RichText::new(warning).size(16.0).strong().color(Color32::RED)).wrap(),
    );
}

use eframe::egui::{Align2, Color32, RichText, Stroke, Ui};
use egui_plot::{Line, Plot, PlotBounds, PlotPoint, PlotPoints, Polygon, Text};

use crate::color;
use crate::scene::{Anchor, Scene, Tone};
use crate::state::AppState;

const RING_SEGMENTS: usize = 180;

// ---------------------------------------------------------------------------
// Module diagram (central panel)
// ---------------------------------------------------------------------------

/// Draw the current scene. The plot is rebuilt from the scene every frame.
pub fn module_diagram(ui: &mut Ui, state: &AppState) {
    let scene = state.scene();

    let mut plot = Plot::new("module_diagram")
        .show_axes(false)
        .show_grid(false)
        .show_background(false)
        .show_x(false)
        .show_y(false)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_double_click_reset(false);
    if scene.equal_aspect {
        plot = plot.data_aspect(1.0);
    }

    plot.show(ui, |plot_ui| {
        draw_scene(plot_ui, scene);
    });
}

fn draw_scene(plot_ui: &mut egui_plot::PlotUi, scene: &Scene) {
    let b = scene.bounds;
    plot_ui.set_plot_bounds(PlotBounds::from_min_max([b.x_min, b.y_min], [b.x_max, b.y_max]));

    let outline = Stroke::new(1.0, color::stroke_color(Tone::Outline));
    for cell in &scene.cells {
        let points: PlotPoints = cell.corners().into_iter().collect();
        plot_ui.polygon(
            Polygon::new(points)
                .fill_color(Color32::TRANSPARENT)
                .stroke(outline),
        );
    }

    for fill in &scene.fills {
        let points: PlotPoints = fill.rect.corners().into_iter().collect();
        plot_ui.polygon(
            Polygon::new(points)
                .fill_color(color::fill_color(fill.tone))
                .stroke(Stroke::NONE),
        );
    }

    if let Some(ring) = &scene.ring {
        let points: PlotPoints = ring.points(RING_SEGMENTS).into_iter().collect();
        plot_ui.line(
            Line::new(points)
                .color(color::stroke_color(Tone::Ring))
                .width(2.0),
        );
    }

    for seg in &scene.segments {
        let points: PlotPoints = vec![seg.from, seg.to].into();
        plot_ui.line(
            Line::new(points)
                .color(color::stroke_color(seg.tone))
                .width(seg.width),
        );
    }

    for label in &scene.labels {
        let anchor = match label.anchor {
            Anchor::Center => Align2::CENTER_CENTER,
            Anchor::Top => Align2::CENTER_TOP,
        };
        plot_ui.text(
            Text::new(
                PlotPoint::new(label.position[0], label.position[1]),
                RichText::new(&label.text).size(label.size),
            )
            .color(color::stroke_color(label.tone))
            .anchor(anchor),
        );
    }
}

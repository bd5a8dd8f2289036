use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::scene::Tone;

/// Window and canvas background.
pub const BACKGROUND: Color32 = Color32::from_rgb(0x2E, 0x2E, 0x2E);

const LOW: Color32 = Color32::from_rgb(0x4A, 0x7D, 0xFF);
const HIGH: Color32 = Color32::from_rgb(0x2E, 0xB8, 0x4B);
const MIDPOINT: Color32 = Color32::from_rgb(0xE5, 0x39, 0x35);
const PRIMARY: Color32 = Color32::from_rgb(0xFF, 0x00, 0x00);
const PROXIMITY: Color32 = Color32::from_rgb(0xFF, 0xFF, 0x00);

// ---------------------------------------------------------------------------
// Tone → Color32
// ---------------------------------------------------------------------------

/// Colour for a stroke or label of the given tone.
pub fn stroke_color(tone: Tone) -> Color32 {
    match tone {
        Tone::Outline | Tone::Ring => Color32::WHITE,
        Tone::Low => LOW,
        Tone::High => HIGH,
        Tone::Midpoint => MIDPOINT,
        Tone::Primary => PRIMARY,
        Tone::Proximity => PROXIMITY,
    }
}

/// Translucent fill for a highlighted module. Proximity fills are lighter
/// and more transparent than the primary ones.
pub fn fill_color(tone: Tone) -> Color32 {
    match tone {
        Tone::Proximity => with_alpha(lighten(PROXIMITY, 0.15), 0.3),
        other => with_alpha(stroke_color(other), 0.5),
    }
}

/// Raise HSL lightness by `amount` (0..1), clamped.
pub fn lighten(color: Color32, amount: f32) -> Color32 {
    let rgb = Srgb::new(
        color.r() as f32 / 255.0,
        color.g() as f32 / 255.0,
        color.b() as f32 / 255.0,
    );
    let mut hsl: Hsl = rgb.into_color();
    hsl.lightness = (hsl.lightness + amount).clamp(0.0, 1.0);
    let out: Srgb = hsl.into_color();
    Color32::from_rgb(
        (out.red * 255.0).round() as u8,
        (out.green * 255.0).round() as u8,
        (out.blue * 255.0).round() as u8,
    )
}

fn with_alpha(color: Color32, alpha: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), (alpha * 255.0).round() as u8)
}

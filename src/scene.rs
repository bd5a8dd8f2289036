use crate::data::resolver::Resolution;

pub const CELL_HEIGHT: f64 = 0.4;
/// Baseline for the mm labels under the row.
pub const LABEL_Y: f64 = -0.05;
pub const TICK_DEPTH: f64 = 0.025;

/// Semantic colour of a shape; the UI maps tones to actual colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Outline,
    Low,
    High,
    Midpoint,
    /// Fill for the computed low/high modules.
    Primary,
    /// Lighter fill for modules named by proximity warnings.
    Proximity,
    Ring,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Rectangle for module `index` (1-based).
    pub fn module(index: u32) -> Self {
        Rect {
            x: f64::from(index) - 1.0,
            y: 0.0,
            width: 1.0,
            height: CELL_HEIGHT,
        }
    }

    /// Corners counter-clockwise from the bottom left.
    pub fn corners(&self) -> [[f64; 2]; 4] {
        [
            [self.x, self.y],
            [self.x + self.width, self.y],
            [self.x + self.width, self.y + self.height],
            [self.x, self.y + self.height],
        ]
    }

    pub fn center(&self) -> [f64; 2] {
        [self.x + self.width / 2.0, self.y + self.height / 2.0]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fill {
    pub index: u32,
    pub rect: Rect,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: [f64; 2],
    pub to: [f64; 2],
    pub tone: Tone,
    pub width: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Center,
    /// Text hangs below the anchor point.
    Top,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub position: [f64; 2],
    pub text: String,
    pub tone: Tone,
    pub anchor: Anchor,
    pub size: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub center: [f64; 2],
    pub radius: f64,
}

impl Ring {
    /// Closed polyline approximating the circle.
    pub fn points(&self, segments: usize) -> Vec<[f64; 2]> {
        (0..=segments)
            .map(|i| {
                let t = i as f64 / segments as f64 * std::f64::consts::TAU;
                [
                    self.center[0] + self.radius * t.cos(),
                    self.center[1] + self.radius * t.sin(),
                ]
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// Everything the canvas draws for one state.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Outlined module cells, `1..=module_count`.
    pub cells: Vec<Rect>,
    pub fills: Vec<Fill>,
    pub segments: Vec<Segment>,
    pub labels: Vec<Label>,
    pub ring: Option<Ring>,
    pub bounds: Bounds,
    /// Keep one x unit equal to one y unit so the ring stays round.
    pub equal_aspect: bool,
}

impl Scene {
    /// Module indices carrying a fill of the given tone, in drawing order.
    pub fn filled_indices(&self, tone: Tone) -> Vec<u32> {
        self.fills
            .iter()
            .filter(|f| f.tone == tone)
            .map(|f| f.index)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Scene construction
// ---------------------------------------------------------------------------

/// Build the full scene: every shape in drawing order plus the view bounds.
/// Without a resolution only the module grid is drawn. Coordinates are in
/// cell units, module `i` occupying `x ∈ [i-1, i]`, `y ∈ [0, CELL_HEIGHT]`.
pub fn render(module_count: u32, resolution: Option<&Resolution>, show_ring: bool) -> Scene {
    let mut scene = base_grid(module_count);
    if let Some(res) = resolution {
        add_highlights(&mut scene, res, show_ring);
    }
    scene
}

fn base_grid(module_count: u32) -> Scene {
    let cells: Vec<Rect> = (1..=module_count).map(Rect::module).collect();
    let labels = cells
        .iter()
        .zip(1..=module_count)
        .map(|(rect, i)| Label {
            position: rect.center(),
            text: i.to_string(),
            tone: Tone::Outline,
            anchor: Anchor::Center,
            size: 20.0,
        })
        .collect();

    Scene {
        cells,
        fills: Vec::new(),
        segments: Vec::new(),
        labels,
        ring: None,
        bounds: Bounds {
            x_min: 0.0,
            x_max: f64::from(module_count),
            y_min: -0.6,
            y_max: 0.8,
        },
        equal_aspect: false,
    }
}

fn add_highlights(scene: &mut Scene, res: &Resolution, show_ring: bool) {
    let low = res.row.low_index;
    let high = res.row.high_index;
    let low_x = f64::from(low);
    let high_x = f64::from(high);

    for index in [low, high] {
        scene.fills.push(Fill {
            index,
            rect: Rect::module(index),
            tone: Tone::Primary,
        });
    }
    for index in res.near_indices() {
        scene.fills.push(Fill {
            index,
            rect: Rect::module(index),
            tone: Tone::Proximity,
        });
    }

    let center_x = (low_x + high_x - 1.0) / 2.0;
    let center_y = CELL_HEIGHT / 2.0;
    let radius = (high_x - low_x).abs() / 2.0;

    if show_ring {
        scene.ring = Some(Ring {
            center: [center_x, center_y],
            radius,
        });
        scene.equal_aspect = true;
        let y_min = f64::min(0.0, center_y - radius);
        let y_max = f64::max(CELL_HEIGHT, center_y + radius);
        let padding = 0.1 * (y_max - y_min);
        scene.bounds.y_min = y_min - padding;
        scene.bounds.y_max = y_max + padding;
    } else {
        scene.bounds.y_min = -0.1;
        scene.bounds.y_max = CELL_HEIGHT + 0.1;
    }

    scene.segments.push(Segment {
        from: [low_x - 1.0, center_y],
        to: [center_x, center_y],
        tone: Tone::Low,
        width: 6.0,
    });
    scene.segments.push(Segment {
        from: [center_x, center_y],
        to: [high_x, center_y],
        tone: Tone::High,
        width: 6.0,
    });

    let single = format!("{:.1}mm", res.input_mm);
    for (x, text, tone) in [
        (low_x - 0.5, single.clone(), Tone::Low),
        (high_x - 0.5, single, Tone::High),
        (center_x, format!("{:.1}mm", res.input_mm * 2.0), Tone::Midpoint),
    ] {
        scene.labels.push(Label {
            position: [x, LABEL_Y],
            text,
            tone,
            anchor: Anchor::Top,
            size: 16.0,
        });
    }

    for x in [low_x - 0.5, high_x - 0.5] {
        scene.segments.push(Segment {
            from: [x, -TICK_DEPTH],
            to: [x, 0.0],
            tone: Tone::Outline,
            width: 1.0,
        });
    }
}

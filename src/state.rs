use crate::config::CalculatorConfig;
use crate::data::model::FrdmTable;
use crate::error::FrdmError;
use crate::pipeline::{Calculation, evaluate, parse_input};
use crate::scene::{Scene, render};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Channel table, loaded once at startup.
    table: FrdmTable,

    config: CalculatorConfig,

    /// Contents of the measurement text field.
    pub input_text: String,

    /// Whether the ring overlay is drawn.
    show_ring: bool,

    /// Last measurement that resolved successfully; reused by the ring toggle.
    last_input: Option<f64>,

    /// Result of the last successful lookup.
    calculation: Option<Calculation>,

    /// Inline error for the most recent submission, if it failed.
    pub status_message: Option<String>,

    /// What the canvas currently shows.
    scene: Scene,
}

impl AppState {
    pub fn new(table: FrdmTable, config: CalculatorConfig) -> Self {
        let scene = render(table.max_index(), None, false);
        Self {
            table,
            config,
            input_text: String::new(),
            show_ring: false,
            last_input: None,
            calculation: None,
            status_message: None,
            scene,
        }
    }

    pub fn show_ring(&self) -> bool {
        self.show_ring
    }

    pub fn last_input(&self) -> Option<f64> {
        self.last_input
    }

    pub fn calculation(&self) -> Option<&Calculation> {
        self.calculation.as_ref()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Parse and resolve the text field. On failure the message is shown
    /// inline and the previous output and diagram stay as they were.
    pub fn submit(&mut self) {
        let outcome = parse_input(&self.input_text)
            .and_then(|mm| evaluate(&self.table, &self.config, mm, self.show_ring));
        let source = format!("{:?}", self.input_text);
        self.apply(outcome, &source);
    }

    /// Flip the ring overlay and redraw with the cached measurement.
    pub fn set_show_ring(&mut self, show_ring: bool) {
        self.show_ring = show_ring;
        match self.last_input {
            Some(mm) => {
                let outcome = evaluate(&self.table, &self.config, mm, show_ring);
                self.apply(outcome, &format!("{mm}mm"));
            }
            None => self.scene = render(self.table.max_index(), None, show_ring),
        }
    }

    /// `source` names the evaluated input in the log.
    fn apply(&mut self, outcome: Result<Calculation, FrdmError>, source: &str) {
        match outcome {
            Ok(calc) => {
                self.last_input = Some(calc.resolution.input_mm);
                self.scene = calc.scene.clone();
                self.calculation = Some(calc);
                self.status_message = None;
            }
            Err(e) => {
                log::warn!("Rejected input {source}: {e}");
                self.status_message = Some(e.to_string());
            }
        }
    }
}

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod scene;
pub mod state;
pub mod ui;

pub use config::CalculatorConfig;
pub use data::model::{FrdmTable, TableRow};
pub use error::{FrdmError, Result};

//! Report renderers, selected by format name.

pub mod json;
pub mod text;

use crate::report::Diagnostic;
use anyhow::{anyhow, Result};

/// Diagnostics of one checked function.
#[derive(Debug)]
pub struct FunctionReport {
    /// Input file, or `<stdin>`.
    pub source: String,
    pub function: String,
    pub line: Option<u32>,
    pub diagnostics: Vec<Diagnostic>,
    /// Whether the batch fix was applied.
    pub fixed: bool,
}

/// Trait for rendering check results into a specific output format.
pub trait Renderer {
    fn render(&self, reports: &[FunctionReport]) -> String;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "text" => Ok(Box::new(text::TextRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use text or json", format)),
    }
}

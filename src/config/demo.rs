use crate::image::synthetic::{gradient, overlay_checker};
use crate::image::{Color, ImageRgb};
use crate::pipeline::{Operation, Pipeline};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct DemoConfig {
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub steps: Vec<Operation>,
    pub output: DemoOutputConfig,
}

impl DemoConfig {
    pub fn pipeline(&self) -> Pipeline {
        Pipeline::new(self.steps.clone())
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: usize,
    pub height: usize,
    pub fill: Color,
    /// Replace the flat `fill` with a red/blue ramp.
    pub gradient: Option<GradientConfig>,
    /// Overlay a checkerboard of `checker.color` cells on the base canvas.
    pub checker: Option<CheckerConfig>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 16,
            height: 16,
            fill: Color::WHITE,
            gradient: None,
            checker: None,
        }
    }
}

impl CanvasConfig {
    pub fn build(&self) -> ImageRgb {
        let base = match &self.gradient {
            Some(g) => gradient(self.width, self.height, g.green),
            None => ImageRgb::filled(self.width, self.height, self.fill),
        };
        match &self.checker {
            Some(checker) => overlay_checker(base, checker.cell.max(1), checker.color),
            None => base,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GradientConfig {
    #[serde(default)]
    pub green: u8,
}

#[derive(Debug, Deserialize)]
pub struct CheckerConfig {
    pub cell: usize,
    pub color: Color,
}

#[derive(Debug, Deserialize)]
pub struct DemoOutputConfig {
    #[serde(rename = "summary_json")]
    pub summary_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<DemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(data: &str) -> Result<DemoConfig, serde_json::Error> {
    serde_json::from_str(data)
}

//! Ordered whole-image operations with per-step timing.
//!
//! A [`Pipeline`] is the configurable face of the mapping functions: each
//! [`Operation`] delegates to one of them and the runner threads the output of
//! one step into the next, recording elapsed time per step.
use crate::blur::image_blur;
use crate::diagnostics::TimingBreakdown;
use crate::gray::make_grayish;
use crate::image::{Color, ImageRgb};
use crate::map::{map_window, Interval, Window};
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Instant;

fn default_passes() -> usize {
    1
}

/// One whole-image step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    /// Copy the image unchanged.
    Identity,
    /// Average the channels of every non-grayish pixel.
    Grayscale,
    /// Apply the 3×3 box blur `passes` times.
    Blur {
        #[serde(default = "default_passes")]
        passes: usize,
    },
    /// Paint every pixel inside the inclusive window with `color`.
    FillWindow {
        x: Interval,
        y: Interval,
        color: Color,
    },
}

impl Operation {
    pub fn label(&self) -> &'static str {
        match self {
            Operation::Identity => "identity",
            Operation::Grayscale => "grayscale",
            Operation::Blur { .. } => "blur",
            Operation::FillWindow { .. } => "fill_window",
        }
    }

    pub fn apply(&self, image: &ImageRgb) -> ImageRgb {
        match *self {
            Operation::Identity => image.clone(),
            Operation::Grayscale => make_grayish(image),
            Operation::Blur { passes } => {
                let mut out = image.clone();
                for _ in 0..passes {
                    out = image_blur(&out);
                }
                out
            }
            Operation::FillWindow { x, y, color } => {
                map_window(image, Window::from_intervals(x, y), |_| color)
            }
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Pipeline {
    pub steps: Vec<Operation>,
}

#[derive(Clone, Debug)]
pub struct PipelineResult {
    pub image: ImageRgb,
    pub timing: TimingBreakdown,
}

impl Pipeline {
    pub fn new(steps: Vec<Operation>) -> Self {
        Self { steps }
    }

    pub fn with_step(mut self, step: Operation) -> Self {
        self.steps.push(step);
        self
    }

    /// Run every step in order. The input is left untouched; an empty
    /// pipeline returns a copy.
    pub fn run(&self, image: &ImageRgb) -> PipelineResult {
        let total_start = Instant::now();
        let mut timing = TimingBreakdown::default();
        let mut current = image.clone();
        for (index, step) in self.steps.iter().enumerate() {
            let start = Instant::now();
            current = step.apply(&current);
            let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
            debug!(
                "Pipeline::run step {} ({}) took {:.3} ms",
                index,
                step.label(),
                elapsed_ms
            );
            timing.push(format!("{index}:{}", step.label()), elapsed_ms);
        }
        timing.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        PipelineResult {
            image: current,
            timing,
        }
    }
}

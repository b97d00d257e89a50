use super::{ImageSummary, TimingBreakdown};
use crate::image::ImageRgb;
use crate::pipeline::PipelineResult;
use serde::{Deserialize, Serialize};

/// Before/after summary of one pipeline run, as written by `hof_demo`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub input: ImageSummary,
    pub output: ImageSummary,
    pub timing: TimingBreakdown,
}

impl RunReport {
    pub fn from_run(input: &ImageRgb, result: &PipelineResult) -> Self {
        Self {
            input: ImageSummary::from_image(input),
            output: ImageSummary::from_image(&result.image),
            timing: result.timing.clone(),
        }
    }
}

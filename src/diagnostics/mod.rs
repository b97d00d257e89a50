//! Reports produced by pipeline runs and the demo binary.
//!
//! `TimingBreakdown` records how long each step took; `ImageSummary` captures
//! coarse image statistics; `RunReport` pairs both for a before/after view.

pub mod report;
pub mod summary;
pub mod timing;

pub use report::RunReport;
pub use summary::ImageSummary;
pub use timing::{StageTiming, TimingBreakdown};

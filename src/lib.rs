//! # RocPr: cutoff-sweep ROC / precision-recall engine
//!
//! Sweeps a classification cutoff across two overlapping Gaussian score
//! distributions (a positive and a negative class), computing a confusion
//! matrix per cutoff from closed-form CDF mass, accumulating the ROC curve,
//! then deriving the precision-recall curve from the accumulated counts.
//!
//! ## Pipeline
//!
//! | Phase | Module | Per-step work |
//! |-------|--------|---------------|
//! | `BuildRoc` | [`engine`] | one cutoff: CDF mass → confusion counts → ROC point |
//! | `CalculatePr` | [`engine`] | one stored ROC point → recall/precision |
//! | `Done` | [`engine`] | terminal; further steps are no-ops |
//!
//! Each [`engine::SweepEngine::step`] call does exactly one unit of O(1)
//! work so a frame-paced consumer sees bounded, uniform latency. The
//! [`runner`] module puts the engine on a paced stepping thread with an
//! edge-triggered pause toggle and hands observers read-only snapshots;
//! [`report`] serializes a sweep to JSON.

pub mod constants;
pub mod distribution;
pub mod engine;
pub mod error;
pub mod report;
pub mod runner;
pub mod types;

pub use distribution::Gaussian;
pub use engine::SweepEngine;
pub use error::{Result, SweepError};
pub use runner::{SweepRunner, SweepSnapshot};
pub use types::{ConfusionCounts, Phase, PrPoint, RocPoint, SweepConfig};

//! Core sweep data types: phase, confusion counts, curve points, configuration.

use serde::Serialize;

use crate::constants::{DEFAULT_POPULATION, DEFAULT_RANGE, DEFAULT_RESOLUTION};
use crate::distribution::Gaussian;
use crate::error::{Result, SweepError};

/// Sweep phase. Strictly linear: `BuildRoc → CalculatePr → Done`, no
/// branching, no re-entry. The enum is closed and matched exhaustively,
/// so no invalid-phase state is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// One cutoff per step: CDF mass → confusion counts → ROC point.
    BuildRoc,
    /// One stored ROC point per step: derive recall/precision.
    CalculatePr,
    /// Terminal. Further steps are no-ops.
    Done,
}

/// Confusion-matrix counts at a single cutoff.
///
/// Invariants: `true_positives + false_negatives == population` and
/// `true_negatives + false_positives == population`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfusionCounts {
    pub true_positives: u32,
    pub false_positives: u32,
    pub true_negatives: u32,
    pub false_negatives: u32,
}

/// One ROC sample: raw counts in population units. Normalizing to rates
/// is a consumer concern (see the report layer).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RocPoint {
    pub false_positives: u32,
    pub true_positives: u32,
}

/// One precision-recall sample. `None` marks an undefined ratio (zero
/// denominator) so consumers can skip the point; defined values lie in
/// [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PrPoint {
    pub recall: Option<f64>,
    pub precision: Option<f64>,
}

/// Fixed sweep configuration, validated once at construction.
///
/// `population` is the sample mass per class: every cutoff splits each
/// class's `population` samples across the two sides of the confusion
/// matrix.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SweepConfig {
    pub positive: Gaussian,
    pub negative: Gaussian,
    pub resolution: usize,
    pub range: f64,
    pub population: u32,
}

impl SweepConfig {
    /// Validate and build a configuration. Zero resolution or population,
    /// or a non-positive/non-finite range, is a contract violation.
    pub fn new(
        positive: Gaussian,
        negative: Gaussian,
        resolution: usize,
        range: f64,
        population: u32,
    ) -> Result<Self> {
        if resolution == 0 {
            return Err(SweepError::InvalidConfig(
                "resolution must be positive".into(),
            ));
        }
        if !range.is_finite() || range <= 0.0 {
            return Err(SweepError::InvalidConfig(format!(
                "range must be positive, got {range}"
            )));
        }
        if population == 0 {
            return Err(SweepError::InvalidConfig(
                "population must be positive".into(),
            ));
        }
        Ok(Self {
            positive,
            negative,
            resolution,
            range,
            population,
        })
    }

    /// Cutoff value for step index `i`: `i * range / resolution`.
    pub fn cutoff(&self, index: usize) -> f64 {
        index as f64 * self.range / self.resolution as f64
    }
}

impl Default for SweepConfig {
    /// Reference configuration: positives at N(3, 1), negatives at N(7, 2),
    /// 300 cutoffs over [0, 10), 9,000 samples per class.
    fn default() -> Self {
        Self {
            positive: Gaussian::new(3.0, 1.0).unwrap(),
            negative: Gaussian::new(7.0, 2.0).unwrap(),
            resolution: DEFAULT_RESOLUTION,
            range: DEFAULT_RANGE,
            population: DEFAULT_POPULATION,
        }
    }
}

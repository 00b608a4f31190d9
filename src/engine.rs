//! The cutoff-sweep state machine.
//!
//! [`SweepEngine`] advances through two linear passes of `resolution` steps
//! each. The first pass maps every cutoff index to confusion-matrix counts
//! via closed-form CDF mass and records an ROC point; the second derives a
//! precision-recall point from each stored ROC point without touching the
//! distributions again. Splitting the passes keeps every `step()` O(1) and
//! uniform, which is what a frame-paced consumer needs.
//!
//! The engine owns all curve state. Consumers read it through the
//! accessors (or through [`crate::runner::SweepRunner::snapshot`] when the
//! engine lives on the stepping thread); nothing here is global.

use crate::distribution::Gaussian;
use crate::types::{ConfusionCounts, Phase, PrPoint, RocPoint, SweepConfig};

/// Class mass below the cutoff, rounded to whole samples.
fn mass_below(class: &Gaussian, cutoff: f64, population: u32) -> u32 {
    (class.cdf(cutoff) * population as f64).round() as u32
}

/// Derive a precision-recall point from accumulated ROC counts.
///
/// `false_negatives` is reconstructed as `population − tp` from the stored
/// point rather than recomputed from the distributions. A zero denominator
/// yields `None` ("undefined"), never NaN.
pub fn precision_recall(point: RocPoint, population: u32) -> PrPoint {
    let tp = point.true_positives;
    debug_assert!(tp <= population);
    let false_negatives = population - tp;

    let predicted_positive = tp + point.false_positives;
    let precision = if predicted_positive == 0 {
        None
    } else {
        Some(tp as f64 / predicted_positive as f64)
    };

    let actual_positive = tp + false_negatives;
    let recall = if actual_positive == 0 {
        None
    } else {
        Some(tp as f64 / actual_positive as f64)
    };

    PrPoint { recall, precision }
}

/// Two-phase sweep engine: builds the ROC sequence, then the PR sequence.
///
/// Both sequences are pre-sized to the configured resolution and filled
/// incrementally; entries beyond [`progress`](Self::progress) are
/// zero-valued until written, and neither sequence is resized or cleared
/// once the engine reaches [`Phase::Done`].
pub struct SweepEngine {
    config: SweepConfig,
    phase: Phase,
    roc_progress: usize,
    pr_progress: usize,
    confusion: ConfusionCounts,
    roc: Vec<RocPoint>,
    pr: Vec<PrPoint>,
}

impl SweepEngine {
    pub fn new(config: SweepConfig) -> Self {
        Self {
            config,
            phase: Phase::BuildRoc,
            roc_progress: 0,
            pr_progress: 0,
            confusion: ConfusionCounts::default(),
            roc: vec![RocPoint::default(); config.resolution],
            pr: vec![PrPoint::default(); config.resolution],
        }
    }

    /// Advance the state machine by exactly one unit of work.
    ///
    /// In `BuildRoc` this computes one cutoff's confusion counts and ROC
    /// point; in `CalculatePr` it derives one PR point; in `Done` it is a
    /// no-op so consumers may keep polling. Each phase takes exactly
    /// `resolution` calls; the transition happens on the last of them.
    pub fn step(&mut self) {
        match self.phase {
            Phase::BuildRoc => {
                let i = self.roc_progress;
                let counts = self.confusion_at(self.config.cutoff(i));
                self.confusion = counts;
                self.roc[i] = RocPoint {
                    false_positives: counts.false_positives,
                    true_positives: counts.true_positives,
                };
                self.roc_progress += 1;
                if self.roc_progress == self.config.resolution {
                    self.phase = Phase::CalculatePr;
                }
            }
            Phase::CalculatePr => {
                let j = self.pr_progress;
                self.pr[j] = precision_recall(self.roc[j], self.config.population);
                self.pr_progress += 1;
                if self.pr_progress == self.config.resolution {
                    self.phase = Phase::Done;
                }
            }
            Phase::Done => {}
        }
    }

    /// Confusion counts for one cutoff from closed-form CDF mass.
    ///
    /// Each class's mass below the cutoff lands on the "predicted
    /// negative" side. A positive class sitting left of the negative class
    /// flips the direction of the comparison, so the sides are swapped to
    /// keep "true positive" meaning "positive sample on the positive side
    /// of the cutoff" regardless of which curve is left on the axis.
    fn confusion_at(&self, cutoff: f64) -> ConfusionCounts {
        let population = self.config.population;

        let mut false_negatives = mass_below(&self.config.positive, cutoff, population);
        let mut true_positives = population - false_negatives;
        let mut true_negatives = mass_below(&self.config.negative, cutoff, population);
        let mut false_positives = population - true_negatives;

        if self.config.positive.mean() < self.config.negative.mean() {
            std::mem::swap(&mut false_negatives, &mut true_positives);
            std::mem::swap(&mut false_positives, &mut true_negatives);
        }

        ConfusionCounts {
            true_positives,
            false_positives,
            true_negatives,
            false_negatives,
        }
    }

    /// Run `step()` until the engine is `Done`.
    pub fn run_to_completion(&mut self) {
        while !self.is_done() {
            self.step();
        }
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Completed steps within the active phase (`resolution` once done).
    pub fn progress(&self) -> usize {
        match self.phase {
            Phase::BuildRoc => self.roc_progress,
            Phase::CalculatePr => self.pr_progress,
            Phase::Done => self.config.resolution,
        }
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Counts from the most recent ROC step (the live confusion matrix).
    pub fn confusion(&self) -> ConfusionCounts {
        self.confusion
    }

    /// ROC sequence, ordered by cutoff index. Entries at and beyond
    /// [`progress`](Self::progress) are zero until written.
    pub fn roc(&self) -> &[RocPoint] {
        &self.roc
    }

    /// PR sequence, derived one-to-one from the ROC sequence.
    pub fn pr(&self) -> &[PrPoint] {
        &self.pr
    }
}

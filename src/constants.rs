//! Default sweep parameters.
//!
//! The reference configuration sweeps cutoffs over [0, 10) at 300 positions
//! with 9,000 simulated samples per class. The population constant is the
//! area scale the confusion counts are expressed in: every cutoff splits
//! each class's 9,000 samples into the two sides of the matrix.

/// Number of cutoff positions in a sweep (one ROC point each).
pub const DEFAULT_RESOLUTION: usize = 300;

/// Width of the cutoff domain: cutoff i sits at `i * range / resolution`.
pub const DEFAULT_RANGE: f64 = 10.0;

/// Simulated sample mass per class (300 positions / 10 units * 300 scale).
pub const DEFAULT_POPULATION: u32 = 9_000;

/// Minimum wall-clock interval between paced steps, in milliseconds.
pub const DEFAULT_STEP_INTERVAL_MS: u64 = 10;

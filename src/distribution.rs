//! Gaussian density and cumulative-distribution evaluation.
//!
//! Provides the [`Gaussian`] score distribution used for both classes, plus
//! the low-level [`erf`]/[`erfc`] helpers behind its CDF. All functions are
//! pure; a `Gaussian` is validated once at construction and immutable after.

use serde::Serialize;
use std::f64::consts::{PI, SQRT_2};

use crate::error::{Result, SweepError};

// ── Numerical helpers ───────────────────────────────────────────────

/// Error function via Abramowitz & Stegun 7.1.26 (max error ~1.5e-7).
pub fn erf(x: f64) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();
    let t = 1.0 / (1.0 + 0.3275911 * x);
    let poly = t
        * (0.254829592
            + t * (-0.284496736 + t * (1.421413741 + t * (-1.453152027 + t * 1.061405429))));
    sign * (1.0 - poly * (-x * x).exp())
}

/// Complementary error function `1 - erf(x)`.
pub fn erfc(x: f64) -> f64 {
    1.0 - erf(x)
}

// ── Gaussian distribution ───────────────────────────────────────────

/// Gaussian score distribution for one class, with mean μ and deviation σ.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Gaussian {
    mean: f64,
    std_dev: f64,
}

impl Gaussian {
    /// Create a new distribution. `std_dev` must be positive and both
    /// parameters finite; anything else is rejected at configuration time
    /// since the density and CDF are undefined for such inputs.
    pub fn new(mean: f64, std_dev: f64) -> Result<Self> {
        if !mean.is_finite() {
            return Err(SweepError::InvalidConfig(format!(
                "Gaussian: mean must be finite, got {mean}"
            )));
        }
        if !std_dev.is_finite() || std_dev <= 0.0 {
            return Err(SweepError::InvalidConfig(format!(
                "Gaussian: std_dev must be positive, got {std_dev}"
            )));
        }
        Ok(Self { mean, std_dev })
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Probability density at `offset` *from the mean*:
    /// `1/(σ·√(2π)) · exp(−offset²/(2σ²))`.
    ///
    /// The mean is applied by the caller as a positional translation, so
    /// curve sampling evaluates `density(x - mean())`.
    pub fn density(&self, offset: f64) -> f64 {
        let norm = 1.0 / (self.std_dev * (2.0 * PI).sqrt());
        norm * (-offset * offset / (2.0 * self.std_dev * self.std_dev)).exp()
    }

    /// Cumulative distribution at `x`: `0.5 · erfc((μ − x) / (σ·√2))`.
    ///
    /// Monotonically non-decreasing in `x`, in [0, 1], ≈0.5 at the mean.
    pub fn cdf(&self, x: f64) -> f64 {
        0.5 * erfc((self.mean - x) / (self.std_dev * SQRT_2))
    }
}

// ── Tests ───────────────────────────────────────────────────────────

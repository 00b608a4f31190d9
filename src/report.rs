//! Sweep report assembly and JSON export.
//!
//! Converts a completed (or partial) sweep into a self-describing,
//! serializable record: configuration echo, ROC counts with normalized
//! rates, PR values with `null` for undefined ratios, and density samples
//! for both class curves. All values are domain units, normalized by
//! population rather than pixels; mapping to screen coordinates stays a
//! consumer concern.

use serde::Serialize;
use std::path::Path;

use crate::distribution::Gaussian;
use crate::engine::SweepEngine;
use crate::error::Result;

/// One ROC entry: raw counts plus population-normalized rates.
#[derive(Serialize)]
pub struct RocEntry {
    pub cutoff: f64,
    pub false_positives: u32,
    pub true_positives: u32,
    pub false_positive_rate: f64,
    pub true_positive_rate: f64,
}

/// One PR entry. Undefined ratios serialize as `null`.
#[derive(Serialize)]
pub struct PrEntry {
    pub cutoff: f64,
    pub recall: Option<f64>,
    pub precision: Option<f64>,
}

/// Density of both class distributions at one axis position.
#[derive(Serialize)]
pub struct CurveSample {
    pub x: f64,
    pub positive: f64,
    pub negative: f64,
}

/// Full sweep export: configuration echo plus the three curve families.
#[derive(Serialize)]
pub struct SweepReport {
    pub resolution: usize,
    pub range: f64,
    pub population: u32,
    pub positive: Gaussian,
    pub negative: Gaussian,
    pub roc: Vec<RocEntry>,
    pub pr: Vec<PrEntry>,
    pub curves: Vec<CurveSample>,
}

/// Assemble a report from the engine's published state.
pub fn build_report(engine: &SweepEngine) -> SweepReport {
    let config = engine.config();
    let population = config.population as f64;

    let roc = engine
        .roc()
        .iter()
        .enumerate()
        .map(|(i, point)| RocEntry {
            cutoff: config.cutoff(i),
            false_positives: point.false_positives,
            true_positives: point.true_positives,
            false_positive_rate: point.false_positives as f64 / population,
            true_positive_rate: point.true_positives as f64 / population,
        })
        .collect();

    let pr = engine
        .pr()
        .iter()
        .enumerate()
        .map(|(j, point)| PrEntry {
            cutoff: config.cutoff(j),
            recall: point.recall,
            precision: point.precision,
        })
        .collect();

    let curves = (0..config.resolution)
        .map(|i| {
            let x = config.cutoff(i);
            CurveSample {
                x,
                positive: config.positive.density(x - config.positive.mean()),
                negative: config.negative.density(x - config.negative.mean()),
            }
        })
        .collect();

    SweepReport {
        resolution: config.resolution,
        range: config.range,
        population: config.population,
        positive: config.positive,
        negative: config.negative,
        roc,
        pr,
        curves,
    }
}

/// Save a report as pretty-printed JSON, creating parent directories.
pub fn save_report(report: &SweepReport, path: &str) -> Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SweepConfig;

    fn completed_engine() -> SweepEngine {
        let mut engine = SweepEngine::new(SweepConfig::default());
        engine.run_to_completion();
        engine
    }

    #[test]
    fn report_covers_every_cutoff() {
        let report = build_report(&completed_engine());
        assert_eq!(report.roc.len(), 300);
        assert_eq!(report.pr.len(), 300);
        assert_eq!(report.curves.len(), 300);
        assert_eq!(report.roc[0].cutoff, 0.0);
        assert!((report.roc[150].cutoff - 5.0).abs() < 1e-12);
    }

    #[test]
    fn rates_normalized_by_population() {
        let report = build_report(&completed_engine());
        for entry in &report.roc {
            assert!((0.0..=1.0).contains(&entry.true_positive_rate));
            assert!((0.0..=1.0).contains(&entry.false_positive_rate));
            assert!(
                (entry.true_positive_rate - entry.true_positives as f64 / 9_000.0).abs() < 1e-12
            );
        }
    }

    #[test]
    fn curve_samples_peak_at_the_means() {
        let report = build_report(&completed_engine());
        // Resolution 300 over range 10 puts samples exactly on x=3 and x=7.
        let peak_pos = report
            .curves
            .iter()
            .max_by(|a, b| a.positive.partial_cmp(&b.positive).unwrap())
            .unwrap();
        let peak_neg = report
            .curves
            .iter()
            .max_by(|a, b| a.negative.partial_cmp(&b.negative).unwrap())
            .unwrap();
        assert!((peak_pos.x - 3.0).abs() < 1e-9);
        assert!((peak_neg.x - 7.0).abs() < 1e-9);
    }

    #[test]
    fn json_roundtrip_preserves_shape() {
        let report = build_report(&completed_engine());
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["resolution"], 300);
        assert_eq!(value["population"], 9_000);
        assert_eq!(value["positive"]["mean"], 3.0);
        assert_eq!(value["roc"].as_array().unwrap().len(), 300);
        assert!(value["pr"][0]["recall"].is_number());
    }

    #[test]
    fn undefined_precision_serializes_as_null() {
        let config = SweepConfig::new(
            Gaussian::new(5.0, 0.5).unwrap(),
            Gaussian::new(8.0, 0.5).unwrap(),
            4,
            10.0,
            1_000,
        )
        .unwrap();
        let mut engine = SweepEngine::new(config);
        engine.run_to_completion();

        let value = serde_json::to_value(build_report(&engine)).unwrap();
        assert!(value["pr"][0]["precision"].is_null());
        assert_eq!(value["pr"][0]["recall"], 0.0);
    }

    #[test]
    fn save_report_writes_parseable_json() {
        let report = build_report(&completed_engine());
        let path = "/tmp/rocpr_test_report/sweep.json";
        save_report(&report, path).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["resolution"], 300);
        assert_eq!(parsed["curves"].as_array().unwrap().len(), 300);

        let _ = std::fs::remove_file(path);
        let _ = std::fs::remove_dir("/tmp/rocpr_test_report");
    }
}

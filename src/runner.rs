//! Paced stepping thread and read-only snapshots.
//!
//! The stepping activity owns exclusive write access to the engine; an
//! observer (renderer, CLI poll loop, test) reads through cloned
//! [`SweepSnapshot`]s. A single mutex guards the boundary between
//! "currently mutating" and "safe to read" and is held only for the
//! duration of one step or one copy. Pacing blocks the stepping thread for
//! the residual of the configured interval with `thread::sleep`, never a
//! spin-wait, and the pause control is an edge-triggered toggle: one call
//! flips paused↔running while the observer keeps reading the last
//! published state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::engine::SweepEngine;
use crate::types::{ConfusionCounts, Phase, PrPoint, RocPoint};

/// Owned copy of the engine's published state at one instant.
#[derive(Debug, Clone)]
pub struct SweepSnapshot {
    pub phase: Phase,
    pub progress: usize,
    pub confusion: ConfusionCounts,
    pub roc: Vec<RocPoint>,
    pub pr: Vec<PrPoint>,
}

struct Shared {
    engine: Mutex<SweepEngine>,
    paused: AtomicBool,
}

/// Handle to a sweep advancing on its own stepping thread.
pub struct SweepRunner {
    shared: Arc<Shared>,
    handle: Option<JoinHandle<()>>,
}

impl SweepRunner {
    /// Move the engine onto a stepping thread that advances it once per
    /// `interval` until it reaches `Done`, then exits.
    pub fn spawn(engine: SweepEngine, interval: Duration) -> Self {
        let shared = Arc::new(Shared {
            engine: Mutex::new(engine),
            paused: AtomicBool::new(false),
        });

        let worker = Arc::clone(&shared);
        let handle = thread::spawn(move || loop {
            if worker.paused.load(Ordering::Acquire) {
                thread::sleep(interval.max(Duration::from_millis(1)));
                continue;
            }
            let started = Instant::now();
            {
                let mut engine = worker.engine.lock().unwrap();
                if engine.is_done() {
                    break;
                }
                engine.step();
            }
            if let Some(remaining) = interval.checked_sub(started.elapsed()) {
                thread::sleep(remaining);
            }
        });

        Self {
            shared,
            handle: Some(handle),
        }
    }

    /// Flip the pause toggle and return the new paused state. While
    /// paused the stepping thread does not advance the engine; snapshots
    /// keep returning the last published state.
    pub fn toggle_pause(&self) -> bool {
        !self.shared.paused.fetch_xor(true, Ordering::AcqRel)
    }

    pub fn is_paused(&self) -> bool {
        self.shared.paused.load(Ordering::Acquire)
    }

    pub fn is_done(&self) -> bool {
        self.shared.engine.lock().unwrap().is_done()
    }

    /// Clone the engine's published state. Locks only long enough to copy.
    pub fn snapshot(&self) -> SweepSnapshot {
        let engine = self.shared.engine.lock().unwrap();
        SweepSnapshot {
            phase: engine.phase(),
            progress: engine.progress(),
            confusion: engine.confusion(),
            roc: engine.roc().to_vec(),
            pr: engine.pr().to_vec(),
        }
    }

    /// Block until the sweep terminates naturally at `Done` and take the
    /// engine back from the stepping thread.
    pub fn into_engine(mut self) -> SweepEngine {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        let shared = Arc::into_inner(self.shared)
            .expect("stepping thread exited, no other owners remain");
        shared.engine.into_inner().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::Gaussian;
    use crate::types::SweepConfig;

    fn small_config(resolution: usize) -> SweepConfig {
        SweepConfig::new(
            Gaussian::new(3.0, 1.0).unwrap(),
            Gaussian::new(7.0, 2.0).unwrap(),
            resolution,
            10.0,
            1_000,
        )
        .unwrap()
    }

    #[test]
    fn runs_to_completion_and_returns_engine() {
        let runner = SweepRunner::spawn(SweepEngine::new(small_config(25)), Duration::ZERO);
        let engine = runner.into_engine();
        assert!(engine.is_done());
        assert_eq!(engine.roc().len(), 25);
        assert!(engine.pr().iter().all(|p| p.recall.is_some()));
    }

    #[test]
    fn snapshot_matches_final_state() {
        let runner = SweepRunner::spawn(SweepEngine::new(small_config(10)), Duration::ZERO);
        while !runner.is_done() {
            thread::sleep(Duration::from_millis(1));
        }
        let snapshot = runner.snapshot();
        assert_eq!(snapshot.phase, Phase::Done);
        assert_eq!(snapshot.progress, 10);
        assert_eq!(snapshot.roc.len(), 10);
        assert_eq!(snapshot.pr.len(), 10);

        let engine = runner.into_engine();
        assert_eq!(snapshot.roc, engine.roc());
        assert_eq!(snapshot.confusion, engine.confusion());
    }

    #[test]
    fn pause_stops_progress_until_resumed() {
        let runner = SweepRunner::spawn(
            SweepEngine::new(small_config(500)),
            Duration::from_millis(1),
        );
        assert!(runner.toggle_pause());
        // Any in-flight step finishes; after that progress must freeze.
        thread::sleep(Duration::from_millis(20));
        let before = runner.snapshot().progress;
        thread::sleep(Duration::from_millis(30));
        let after = runner.snapshot().progress;
        assert_eq!(before, after, "paused sweep advanced");

        assert!(!runner.toggle_pause());
        let engine = runner.into_engine();
        assert!(engine.is_done());
    }

    #[test]
    fn pacing_enforces_minimum_interval() {
        let interval = Duration::from_millis(5);
        let started = Instant::now();
        let runner = SweepRunner::spawn(SweepEngine::new(small_config(5)), interval);
        let _ = runner.into_engine();
        // 10 steps, each followed by the residual sleep; allow generous
        // scheduler slack below the theoretical 50ms.
        assert!(started.elapsed() >= Duration::from_millis(40));
    }
}

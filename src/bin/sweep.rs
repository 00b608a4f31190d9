use std::time::{Duration, Instant};

use rocpr::constants::{
    DEFAULT_POPULATION, DEFAULT_RANGE, DEFAULT_RESOLUTION, DEFAULT_STEP_INTERVAL_MS,
};
use rocpr::report::{build_report, save_report};
use rocpr::{Gaussian, Phase, SweepConfig, SweepEngine, SweepRunner};

struct Args {
    resolution: usize,
    range: f64,
    population: u32,
    positive: (f64, f64),
    negative: (f64, f64),
    interval_ms: u64,
    flat_out: bool,
    output: Option<String>,
}

/// Parse "MEAN,SD" into a pair.
fn parse_pair(s: &str) -> Option<(f64, f64)> {
    let (mean, sd) = s.split_once(',')?;
    Some((mean.trim().parse().ok()?, sd.trim().parse().ok()?))
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut resolution = DEFAULT_RESOLUTION;
    let mut range = DEFAULT_RANGE;
    let mut population = DEFAULT_POPULATION;
    let mut positive = (3.0, 1.0);
    let mut negative = (7.0, 2.0);
    let mut interval_ms = DEFAULT_STEP_INTERVAL_MS;
    let mut flat_out = false;
    let mut output: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--resolution" => {
                i += 1;
                if i < args.len() {
                    resolution = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --resolution value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--range" => {
                i += 1;
                if i < args.len() {
                    range = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --range value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--population" => {
                i += 1;
                if i < args.len() {
                    population = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --population value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--positive" => {
                i += 1;
                if i < args.len() {
                    positive = parse_pair(&args[i]).unwrap_or_else(|| {
                        eprintln!("Invalid --positive value: {} (expected MEAN,SD)", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--negative" => {
                i += 1;
                if i < args.len() {
                    negative = parse_pair(&args[i]).unwrap_or_else(|| {
                        eprintln!("Invalid --negative value: {} (expected MEAN,SD)", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--interval-ms" => {
                i += 1;
                if i < args.len() {
                    interval_ms = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --interval-ms value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--flat-out" => {
                flat_out = true;
            }
            "--output" => {
                i += 1;
                if i < args.len() {
                    output = Some(args[i].clone());
                }
            }
            "--help" | "-h" => {
                println!(
                    "Usage: rocpr-sweep [--resolution N] [--range F] [--population N] [--positive MEAN,SD] [--negative MEAN,SD] [--interval-ms N] [--flat-out] [--output FILE]"
                );
                println!();
                println!("Options:");
                println!("  --resolution N     Number of cutoff positions (default: 300)");
                println!("  --range F          Cutoff domain width, sweeps [0, F) (default: 10)");
                println!("  --population N     Samples per class (default: 9000)");
                println!("  --positive MEAN,SD Positive-class distribution (default: 3,1)");
                println!("  --negative MEAN,SD Negative-class distribution (default: 7,2)");
                println!("  --interval-ms N    Minimum ms between paced steps (default: 10)");
                println!("  --flat-out         Skip pacing, run the sweep inline");
                println!("  --output FILE      Write the JSON report to FILE");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!(
                    "Usage: rocpr-sweep [--resolution N] [--range F] [--population N] [--positive MEAN,SD] [--negative MEAN,SD] [--interval-ms N] [--flat-out] [--output FILE]"
                );
                std::process::exit(1);
            }
        }
        i += 1;
    }

    Args {
        resolution,
        range,
        population,
        positive,
        negative,
        interval_ms,
        flat_out,
        output,
    }
}

fn build_config(args: &Args) -> SweepConfig {
    let positive = Gaussian::new(args.positive.0, args.positive.1).unwrap_or_else(|e| {
        eprintln!("Invalid --positive distribution: {}", e);
        std::process::exit(1);
    });
    let negative = Gaussian::new(args.negative.0, args.negative.1).unwrap_or_else(|e| {
        eprintln!("Invalid --negative distribution: {}", e);
        std::process::exit(1);
    });
    SweepConfig::new(positive, negative, args.resolution, args.range, args.population)
        .unwrap_or_else(|e| {
            eprintln!("Invalid sweep configuration: {}", e);
            std::process::exit(1);
        })
}

fn phase_name(phase: Phase) -> &'static str {
    match phase {
        Phase::BuildRoc => "building ROC",
        Phase::CalculatePr => "deriving PR",
        Phase::Done => "done",
    }
}

fn main() {
    let args = parse_args();
    let config = build_config(&args);

    println!(
        "ROC/PR cutoff sweep ({} cutoffs over [0, {}), {} samples/class)",
        config.resolution, config.range, config.population
    );
    println!(
        "  Positive class: N({}, {})",
        config.positive.mean(),
        config.positive.std_dev()
    );
    println!(
        "  Negative class: N({}, {})",
        config.negative.mean(),
        config.negative.std_dev()
    );
    println!();

    let total_steps = 2 * config.resolution;
    let started = Instant::now();

    let engine = if args.flat_out {
        let mut engine = SweepEngine::new(config);
        engine.run_to_completion();
        engine
    } else {
        println!(
            "Stepping at {} ms/step ({} steps)...",
            args.interval_ms, total_steps
        );
        let runner = SweepRunner::spawn(
            SweepEngine::new(config),
            Duration::from_millis(args.interval_ms),
        );

        // Observation loop: poll published snapshots, report phase changes.
        let mut last_phase = Phase::BuildRoc;
        loop {
            let snapshot = runner.snapshot();
            if snapshot.phase != last_phase {
                println!(
                    "  {:>8.1} ms  {} -> {}",
                    started.elapsed().as_secs_f64() * 1000.0,
                    phase_name(last_phase),
                    phase_name(snapshot.phase)
                );
                last_phase = snapshot.phase;
            }
            if snapshot.phase == Phase::Done {
                break;
            }
            std::thread::sleep(Duration::from_millis(50));
        }
        runner.into_engine()
    };

    let elapsed = started.elapsed();
    let steps_per_sec = total_steps as f64 / elapsed.as_secs_f64();

    let roc = engine.roc();
    let first = roc[0];
    let last = roc[roc.len() - 1];
    let defined_pr = engine.pr().iter().filter(|p| p.precision.is_some()).count();

    println!();
    println!("Results:");
    println!(
        "  ROC start:   fp={} tp={}",
        first.false_positives, first.true_positives
    );
    println!(
        "  ROC end:     fp={} tp={}",
        last.false_positives, last.true_positives
    );
    println!(
        "  PR defined:  {}/{} points",
        defined_pr,
        engine.pr().len()
    );
    println!(
        "  Elapsed:     {:.1} ms ({:.0} steps/sec)",
        elapsed.as_secs_f64() * 1000.0,
        steps_per_sec
    );

    if let Some(ref path) = args.output {
        let report = build_report(&engine);
        if let Err(e) = save_report(&report, path) {
            eprintln!("Failed to write report to {}: {}", path, e);
            std::process::exit(1);
        }
        println!("  Report:      {}", path);
    }
}

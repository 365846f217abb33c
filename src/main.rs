use anyhow::{Context, Result};
use env_logger::Env;
use log::{info, warn};

use wcq_sim::config::RunConfig;
use wcq_sim::simulate::{SimulationReport, Simulator};
use wcq_sim::tables;
use wcq_sim::win_prob::{MatchTable, ModelParams};

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cfg = RunConfig::from_env().context("invalid run configuration")?;
    let tournament = tables::afc_group_c().context("group tables are inconsistent")?;

    let params = ModelParams {
        negatives: cfg.negatives,
        ..ModelParams::default()
    };
    let table = MatchTable::build(&tournament, &params).context("match model rejected")?;

    let seed = cfg.seed_or_random();
    if cfg.seed.is_none() {
        info!("no SIM_SEED set, drew seed {seed}");
    }
    let sim = Simulator::new(&tournament, &table, &cfg.target, seed)?;

    let report = if cfg.print_standings {
        if cfg.threads > 1 {
            warn!("standings output is serial, ignoring {} threads", cfg.threads);
        }
        sim.run_with(cfg.trials, |trial, result| {
            println!("trial {}: {}", trial + 1, result.describe(&tournament));
        })?
    } else if cfg.threads > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(cfg.threads)
            .build()
            .context("build trial pool")?;
        sim.run_parallel(cfg.trials, &pool)?
    } else {
        sim.run(cfg.trials)?
    };

    log_positions(&report);

    for line in report.summary_lines() {
        println!("{line}");
    }

    if cfg.json {
        let json = serde_json::to_string_pretty(&report).context("serialize report")?;
        println!("{json}");
    }

    Ok(())
}

fn log_positions(report: &SimulationReport) {
    for (idx, count) in report.positions.iter().enumerate() {
        info!(
            "{} finished #{}: {:.2}%",
            report.target,
            idx + 1,
            *count as f64 / report.trials.max(1) as f64 * 100.0
        );
    }
}

//! `agvsim` — the AGV fleet dispatch scheduler's command-line entry point.
//!
//! Wires together argument parsing, input loading, the `Scheduler`, and
//! report rendering. See [`cli`] for the flag surface.

mod cli;
mod config;
mod logging;
mod scenario;

use std::fs;

use anyhow::{Context, Result};
use tracing::{info, warn};

use agvsim_dispatch::Scheduler;
use agvsim_payload::PayloadRegistry;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let parsed = match cli::parse_args(&args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("error: {message}");
            cli::print_usage();
            std::process::exit(1);
        }
    };

    logging::init(parsed.verbosity);

    let sim_config = match &parsed.config {
        Some(path) => config::SimulationConfig::from_toml_file(path)
            .with_context(|| format!("loading config file {}", path.display()))?,
        None => config::SimulationConfig::default(),
    };

    let network = match &parsed.network {
        Some(path) => scenario::load_network_toml(path)
            .with_context(|| format!("loading network file {}", path.display()))?,
        None => scenario::default_network(),
    };

    let fleet = match &parsed.fleet {
        Some(path) => scenario::load_fleet_csv(path)
            .with_context(|| format!("loading fleet file {}", path.display()))?,
        None => scenario::default_fleet(),
    };

    let payloads = agvsim_payload::load_payloads_csv(&parsed.payload_file, &network)
        .with_context(|| format!("loading payload file {}", parsed.payload_file.display()))?;
    let total_payloads = payloads.len();
    let registry = PayloadRegistry::new(payloads);

    info!(agvs = fleet.len(), payloads = total_payloads, "starting run");

    let mut scheduler = Scheduler::new(fleet, registry, network);
    scheduler.set_start_time(agvsim_core::SimTime::from_hm(sim_config.sim_start_min / 60, sim_config.sim_start_min % 60));
    scheduler.set_max_stuck(sim_config.max_stuck);
    scheduler.set_fallback_advance_min(sim_config.fallback_advance_min);

    let outcome = scheduler.run().context("running the dispatch scheduler")?;

    if outcome.deadlocked {
        warn!("run terminated in deadlock before all payloads were delivered");
    }

    let log_text: String = outcome
        .execution_log
        .iter()
        .map(|r| format!("{}\n", r.format_line()))
        .collect();
    fs::write(&parsed.log_output, log_text)
        .with_context(|| format!("writing log file {}", parsed.log_output.display()))?;

    let summary = agvsim_report::render_summary(&outcome.metrics, total_payloads);
    fs::write(&parsed.summary_report, summary)
        .with_context(|| format!("writing summary report {}", parsed.summary_report.display()))?;

    let detail = agvsim_report::render_detail(&outcome.metrics, &outcome.execution_log, scheduler.fleet(), total_payloads);
    fs::write(&parsed.detail_report, detail)
        .with_context(|| format!("writing detail report {}", parsed.detail_report.display()))?;

    info!(
        delivered = outcome.metrics.delivered_count(),
        makespan = outcome.metrics.makespan_minutes(),
        "run complete"
    );

    Ok(())
}

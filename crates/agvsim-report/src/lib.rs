//! `agvsim-report` — pure text rendering of run summaries and detail reports.
//!
//! Both [`render_summary`] and [`render_detail`] are pure string builders;
//! neither touches a filesystem. `agvsim-cli` owns writing their output to
//! `summary_report`/`detail_report`.

use std::fmt::Write as _;

use agvsim_fleet::Fleet;
use agvsim_metrics::{Metrics, MoveRecord};

/// Makespan, per-priority average latency, total charge count, and
/// delivered/total payload counts.
pub fn render_summary(metrics: &Metrics, total_payloads: usize) -> String {
    let mut out = String::new();

    writeln!(out, "Makespan: {} minutes", metrics.makespan_minutes()).unwrap();
    writeln!(out, "Delivered: {}/{}", metrics.delivered_count(), total_payloads).unwrap();
    writeln!(out, "Total charges: {}", metrics.total_charge_count()).unwrap();
    writeln!(out, "Average delivery latency by priority:").unwrap();
    for (priority, avg) in metrics.avg_delivery_by_priority() {
        writeln!(out, "  priority {priority}: {avg:.1} min").unwrap();
    }

    out
}

/// The summary, plus a per-AGV breakdown (total hops, total charges, final
/// station) and the full move log in order.
pub fn render_detail(metrics: &Metrics, log: &[MoveRecord], fleet: &Fleet, total_payloads: usize) -> String {
    let mut out = render_summary(metrics, total_payloads);

    writeln!(out).unwrap();
    writeln!(out, "Per-AGV breakdown:").unwrap();
    for agv in fleet.iter() {
        let hops = log.iter().filter(|r| &r.agv_id == agv.id()).count();
        let charges = metrics.charge_counts().get(agv.id()).copied().unwrap_or(0);
        writeln!(
            out,
            "  {}: {} hops, {} charges, final station {}",
            agv.id(),
            hops,
            charges,
            agv.station()
        )
        .unwrap();
    }

    writeln!(out).unwrap();
    writeln!(out, "Move log:").unwrap();
    for record in log {
        writeln!(out, "  {}", record.format_line()).unwrap();
    }

    out
}

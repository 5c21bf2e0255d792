// Statistics collection and reporting for paging sweeps

use crate::models::{Axis, CsvResultRow, Params, PointSummary, Regime};
use paging_rs::TrialOutcome;
use std::io::Write;

/// Running fault totals of one sweep point
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub trials: u64,
    pub optimal: u64,
    pub predictive: u64,
    pub recency: u64,
    pub adaptive: u64,
}

impl Totals {
    /// Add one trial's fault counts
    pub fn record(&mut self, outcome: &TrialOutcome) {
        self.trials += 1;
        self.optimal += outcome.optimal;
        self.predictive += outcome.predictive;
        self.recency += outcome.recency;
        self.adaptive += outcome.adaptive;
    }

    fn mean(&self, total: u64) -> f64 {
        if self.trials > 0 {
            total as f64 / self.trials as f64
        } else {
            0.0
        }
    }

    /// Average the totals into a summary for the given point
    pub fn summarize(&self, axis: Axis, value: f64, params: Params) -> PointSummary {
        PointSummary {
            axis,
            value,
            params,
            trials: self.trials,
            optimal: self.mean(self.optimal),
            predictive: self.mean(self.predictive),
            recency: self.mean(self.recency),
            adaptive: self.mean(self.adaptive),
        }
    }
}

/// Print the sweep results as an aligned table
pub fn print_summary<W: Write>(
    out: &mut W,
    regime: Regime,
    points: &[PointSummary],
) -> std::io::Result<()> {
    writeln!(out, "Paging Sweep Summary ({regime})")?;
    writeln!(out, "====================")?;
    if let Some(first) = points.first() {
        let p = first.params;
        writeln!(
            out,
            "Base: k={} N={} n={} e={} t={} w={} thr={}  (sweeping {})",
            p.k,
            p.universe,
            p.length,
            p.repeat_probability,
            p.noise_probability,
            p.window,
            p.threshold,
            first.axis
        )?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "{:>8} {:>7} {:>10} {:>12} {:>10} {:>10} {:>8} {:>8} {:>9}",
        "Value", "Trials", "OPT", "BlindOracle", "LRU", "Combined", "BO/OPT", "LRU/OPT", "Comb/OPT"
    )?;
    writeln!(out, "{}", "-".repeat(90))?;

    for point in points {
        writeln!(
            out,
            "{:>8} {:>7} {:>10.1} {:>12.1} {:>10.1} {:>10.1} {:>8.3} {:>8.3} {:>9.3}",
            point.value,
            point.trials,
            point.optimal,
            point.predictive,
            point.recency,
            point.adaptive,
            point.ratio(point.predictive),
            point.ratio(point.recency),
            point.ratio(point.adaptive)
        )?;
    }
    Ok(())
}

/// Write the sweep results as CSV
pub fn export_csv<W: Write>(
    out: W,
    regime: Regime,
    points: &[PointSummary],
) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(out);
    for point in points {
        writer.serialize(CsvResultRow::new(regime, point))?;
    }
    writer.flush()?;
    Ok(())
}

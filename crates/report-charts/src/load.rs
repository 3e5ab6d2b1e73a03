// File: crates/report-charts/src/load.rs
// Summary: Reads the per-cycle statistics table from CSV.
//
// One row per (cycle, category):
// cycle,category,cvus,throughput,error_percent,min,avg,max,p10,p50,p90,p95,apdex_score,apdex_t
// Empty or missing numeric columns read as zero. Cycles keep first-appearance order.

use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::stats::{Category, Cycle, ReportStats, StatRecord};

#[derive(Debug, Deserialize)]
struct StatRow {
    cycle: Cycle,
    category: String,
    cvus: u32,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    throughput: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    error_percent: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    min: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    avg: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    max: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    p10: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    p50: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    p90: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    p95: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    apdex_score: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    apdex_t: Option<f64>,
}

impl StatRow {
    fn into_record(self) -> StatRecord {
        let z = |v: Option<f64>| v.unwrap_or(0.0);
        StatRecord::new(self.cvus, z(self.throughput))
            .with_errors(z(self.error_percent))
            .with_delays(z(self.min), z(self.avg), z(self.max))
            .with_percentiles(z(self.p10), z(self.p50), z(self.p90), z(self.p95))
            .with_apdex(z(self.apdex_score), z(self.apdex_t))
    }
}

pub fn load_csv<R: io::Read>(reader: R) -> Result<ReportStats> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut stats = ReportStats::default();
    for row in rdr.deserialize::<StatRow>() {
        let row = row?;
        let category: Category = row.category.parse()?;
        let cycle = row.cycle;
        stats.insert(cycle, category, row.into_record());
    }
    tracing::debug!(cycles = stats.cycles().len(), "statistics loaded");
    Ok(stats)
}

pub fn load_csv_path(path: impl AsRef<Path>) -> Result<ReportStats> {
    let file = std::fs::File::open(path.as_ref())?;
    load_csv(io::BufReader::new(file))
}

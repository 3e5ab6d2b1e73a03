// File: crates/report-charts/src/stats.rs
// Summary: Per-cycle statistic records as handed over by the aggregation step.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::apdex::ApdexRating;
use crate::error::ReportError;

/// One load level of a test run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct Cycle(pub u32);

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Test,
    Page,
    Response,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Test => "test",
            Category::Page => "page",
            Category::Response => "response",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "test" => Ok(Category::Test),
            "page" => Ok(Category::Page),
            "response" => Ok(Category::Response),
            other => Err(ReportError::UnknownCategory(other.to_string())),
        }
    }
}

/// Response-time percentiles, in seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Percentiles {
    pub p10: f64,
    pub p50: f64,
    pub p90: f64,
    pub p95: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Apdex {
    /// Satisfaction score in [0, 1].
    pub score: f64,
    /// Latency threshold T, in seconds.
    pub threshold: f64,
}

impl Apdex {
    pub fn rating(&self) -> ApdexRating {
        ApdexRating::from_score(self.score)
    }
}

/// Statistics of one category for one cycle. Test records only carry
/// throughput and errors; page and response records carry everything.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StatRecord {
    /// Concurrent virtual users of the cycle.
    pub cvus: u32,
    /// Successful tests, pages or requests per second.
    pub throughput: f64,
    pub error_percent: f64,
    pub min: f64,
    pub avg: f64,
    pub max: f64,
    pub percentiles: Percentiles,
    pub apdex: Apdex,
}

impl StatRecord {
    pub fn new(cvus: u32, throughput: f64) -> Self {
        Self { cvus, throughput, ..Self::default() }
    }

    pub fn with_errors(mut self, error_percent: f64) -> Self {
        self.error_percent = error_percent;
        self
    }

    pub fn with_delays(mut self, min: f64, avg: f64, max: f64) -> Self {
        self.min = min;
        self.avg = avg;
        self.max = max;
        self
    }

    pub fn with_percentiles(mut self, p10: f64, p50: f64, p90: f64, p95: f64) -> Self {
        self.percentiles = Percentiles { p10, p50, p90, p95 };
        self
    }

    pub fn with_apdex(mut self, score: f64, threshold: f64) -> Self {
        self.apdex = Apdex { score, threshold };
        self
    }
}

/// The ordered cycles of a run and, per cycle, the record of each category present.
#[derive(Clone, Debug, Default)]
pub struct ReportStats {
    cycles: Vec<Cycle>,
    records: HashMap<Cycle, BTreeMap<Category, StatRecord>>,
}

impl ReportStats {
    /// Empty statistics over `cycles`; repeated ids keep their first position.
    pub fn new(cycles: Vec<Cycle>) -> Self {
        let mut unique = Vec::with_capacity(cycles.len());
        for c in cycles {
            if !unique.contains(&c) {
                unique.push(c);
            }
        }
        Self { cycles: unique, records: HashMap::new() }
    }

    /// Add or replace a record. A cycle not yet listed is appended to the order.
    pub fn insert(&mut self, cycle: Cycle, category: Category, record: StatRecord) {
        if !self.cycles.contains(&cycle) {
            self.cycles.push(cycle);
        }
        self.records.entry(cycle).or_default().insert(category, record);
    }

    pub fn cycles(&self) -> &[Cycle] {
        &self.cycles
    }

    pub fn get(&self, cycle: Cycle, category: Category) -> Option<&StatRecord> {
        self.records.get(&cycle).and_then(|by_cat| by_cat.get(&category))
    }

    /// Records of `category` in cycle order; cycles without one are skipped.
    pub fn records(&self, category: Category) -> impl Iterator<Item = (Cycle, &StatRecord)> + '_ {
        self.cycles.iter().filter_map(move |&c| self.get(c, category).map(|r| (c, r)))
    }

    pub fn count(&self, category: Category) -> usize {
        self.records(category).count()
    }
}

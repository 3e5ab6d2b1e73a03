// File: crates/demo/src/main.rs
// Summary: Demo loads a per-cycle statistics CSV and renders the load-test report charts to PNGs.
// Usage: loadchart-demo [stats.csv] [output_dir] [theme]

use anyhow::{Context, Result};
use loadchart_core::theme;
use loadchart_report::{Category, ChartRenderer, ReportConfig, ReportStats};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let raw = args
        .next()
        .unwrap_or_else(|| concat!(env!("CARGO_MANIFEST_DIR"), "/data/sample_stats.csv").to_string());
    let out_dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("target/report"));
    let theme_name = args.next().unwrap_or_else(|| "light".to_string());

    let path = resolve_path(&raw)?;
    println!("Using input file: {}", path.display());

    let stats = loadchart_report::load_csv_path(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    print_summary(&stats);

    if stats.cycles().is_empty() {
        anyhow::bail!("no cycles loaded, check headers/delimiter.");
    }

    let config = ReportConfig::new(&out_dir).with_theme(theme::find(&theme_name));
    let mut renderer = ChartRenderer::new(config);
    let written = renderer
        .render_all(&stats)
        .with_context(|| format!("rendering charts into '{}'", out_dir.display()))?;

    if written.is_empty() {
        println!("Nothing to plot: every category has fewer than two cycles.");
    }
    for p in &written {
        println!("Wrote {}", p.display());
    }
    Ok(())
}

fn resolve_path(raw: &str) -> Result<PathBuf> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok(p.to_path_buf());
    }
    anyhow::bail!("file not found: {}", p.display());
}

fn print_summary(stats: &ReportStats) {
    println!("Loaded {} cycles", stats.cycles().len());
    for cat in [Category::Test, Category::Page, Category::Response] {
        println!("  {:<8} {} records", cat.as_str(), stats.count(cat));
    }
}

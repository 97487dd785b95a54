use std::fs;

use anyhow::{Context, Result};
use tracing::info;

use crate::chunking::chunking_stats;
use crate::cli::StatsArgs;
use crate::model::ChunkRunReport;

pub fn run(args: StatsArgs) -> Result<()> {
    let raw = fs::read(&args.report)
        .with_context(|| format!("failed to read {}", args.report.display()))?;
    let report: ChunkRunReport = serde_json::from_slice(&raw)
        .with_context(|| format!("failed to parse {}", args.report.display()))?;

    info!(
        report = %args.report.display(),
        generated_at = %report.generated_at,
        source = %report.source_path,
        chunks = report.chunks.len(),
        "loaded chunk run report"
    );

    let stats = chunking_stats(&report.chunks);
    let rendered =
        serde_json::to_string_pretty(&stats).context("failed to render chunking stats")?;
    println!("{rendered}");

    Ok(())
}

use anyhow::{Context, Result};
use tracing::info;

use crate::chunking::{SemanticChunker, chunking_stats};
use crate::cli::ChunkArgs;
use crate::model::{ChunkRunReport, ChunkingConfig, PageInput};
use crate::util::{now_utc_string, read_input, sha256_file, write_json_pretty};

const REPORT_VERSION: u32 = 1;

pub fn run(args: ChunkArgs) -> Result<()> {
    let config = ChunkingConfig {
        max_chunk_size: args.max_chunk_size,
        overlap_size: args.overlap_size,
        table_max_size: args.table_max_size,
        min_chunk_size: args.min_chunk_size,
    };
    let chunker = SemanticChunker::new(config.clone())?;

    let text = read_input(&args.input)?;
    info!(
        input = %args.input.display(),
        bytes = text.len(),
        split_pages = args.split_pages,
        "chunking input"
    );

    let (chunks, page_count) = if args.split_pages {
        let pages = text
            .split('\u{000C}')
            .enumerate()
            .map(|(index, page)| PageInput {
                text: page.to_string(),
                page_number: (index + 1) as u32,
            })
            .collect::<Vec<PageInput>>();
        let page_count = pages.len();
        (chunker.chunk_pages(&pages), page_count)
    } else {
        (chunker.chunk_document(&text, args.page_number), 1)
    };

    let stats = chunking_stats(&chunks);
    let source_sha256 = if args.input.as_os_str() == "-" {
        None
    } else {
        Some(sha256_file(&args.input)?)
    };

    let report = ChunkRunReport {
        report_version: REPORT_VERSION,
        generated_at: now_utc_string(),
        source_path: args.input.display().to_string(),
        source_sha256,
        page_count,
        config,
        stats,
        chunks,
    };

    if let Some(output) = &args.output {
        write_json_pretty(output, &report)?;
        info!(
            output = %output.display(),
            chunks = report.stats.total_chunks,
            pages = page_count,
            "wrote chunk run report"
        );
    } else {
        let rendered =
            serde_json::to_string_pretty(&report).context("failed to render chunk run report")?;
        println!("{rendered}");
        info!(
            chunks = report.stats.total_chunks,
            pages = page_count,
            "chunking complete"
        );
    }

    Ok(())
}

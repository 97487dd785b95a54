use anyhow::{Context, Result};
use tracing::info;

use crate::chunking::{BlockClassifier, CleanOptions, TextCleaner};
use crate::cli::SegmentArgs;
use crate::util::read_input;

pub fn run(args: SegmentArgs) -> Result<()> {
    let cleaner = TextCleaner::new()?;
    let classifier = BlockClassifier::new()?;

    let text = read_input(&args.input)?;
    let cleaned = cleaner.clean(&text, &CleanOptions::default());
    let blocks = classifier.segment_into_blocks(&cleaned);

    info!(
        input = %args.input.display(),
        blocks = blocks.len(),
        "segmented input"
    );

    let rendered =
        serde_json::to_string_pretty(&blocks).context("failed to render content blocks")?;
    println!("{rendered}");

    Ok(())
}

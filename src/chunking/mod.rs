use std::collections::{BTreeMap, HashMap};

use anyhow::{Context, Result};
use regex::Regex;

use crate::model::{
    BlockKind, Chunk, ChunkMetadata, ChunkingConfig, ChunkingStats, ConfidenceLevel, ContentBlock,
    PageInput,
};

/// Block confidence above this maps to the high discrete level.
pub(crate) const HIGH_CONFIDENCE_THRESHOLD: f64 = 0.7;

mod classify;
mod cleaner;
mod pipeline;
mod splitter;
mod stats;
#[cfg(test)]
mod tests;

pub use classify::BlockClassifier;
pub use cleaner::{CleanOptions, TextCleaner};
pub use pipeline::SemanticChunker;
pub use stats::chunking_stats;

use splitter::*;

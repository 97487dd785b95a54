use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Size limits for one chunking invocation. Plain value object, callers
/// override any subset of fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkingConfig {
    pub max_chunk_size: usize,
    pub overlap_size: usize,
    pub table_max_size: usize,
    pub min_chunk_size: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            max_chunk_size: 1000,
            overlap_size: 200,
            table_max_size: 2000,
            min_chunk_size: 100,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Text,
    Table,
    List,
    Heading,
}

impl BlockKind {
    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Text => "text",
            BlockKind::Table => "table",
            BlockKind::List => "list",
            BlockKind::Heading => "heading",
        }
    }
}

/// A classified contiguous span of cleaned source text. Produced by
/// segmentation, consumed once by the chunker, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentBlock {
    pub text: String,
    pub kind: BlockKind,
    pub confidence: f64,
    pub start_line: usize,
    pub end_line: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            ConfidenceLevel::High => "high",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkMetadata {
    pub chunk_index: usize,
    pub page_number: Option<u32>,
    pub content_type: BlockKind,
    pub confidence: ConfidenceLevel,
    pub has_overlap: bool,
    pub original_length: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    pub content: String,
    pub metadata: ChunkMetadata,
}

/// One page of pre-extracted text handed in by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageInput {
    pub text: String,
    pub page_number: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChunkingStats {
    pub total_chunks: usize,
    pub average_chunk_size: f64,
    pub min_chunk_size: usize,
    pub max_chunk_size: usize,
    pub chunks_by_type: BTreeMap<String, usize>,
    pub chunks_by_confidence: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkRunReport {
    pub report_version: u32,
    pub generated_at: String,
    pub source_path: String,
    pub source_sha256: Option<String>,
    pub page_count: usize,
    pub config: ChunkingConfig,
    pub stats: ChunkingStats,
    pub chunks: Vec<Chunk>,
}

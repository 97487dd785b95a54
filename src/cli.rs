use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "semchunk",
    version,
    about = "Semantic document chunking for embedding and retrieval"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Chunk(ChunkArgs),
    Clean(CleanArgs),
    Segment(SegmentArgs),
    Stats(StatsArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ChunkArgs {
    /// Input text file, or `-` for stdin.
    #[arg(long, default_value = "-")]
    pub input: PathBuf,

    /// Write the run report here instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Split input on form-feed page breaks and chunk page by page.
    #[arg(long, default_value_t = false)]
    pub split_pages: bool,

    /// Page number to stamp on every chunk (single-page input only).
    #[arg(long)]
    pub page_number: Option<u32>,

    #[arg(long, default_value_t = 1000)]
    pub max_chunk_size: usize,

    #[arg(long, default_value_t = 200)]
    pub overlap_size: usize,

    #[arg(long, default_value_t = 2000)]
    pub table_max_size: usize,

    #[arg(long, default_value_t = 100)]
    pub min_chunk_size: usize,
}

#[derive(Args, Debug, Clone)]
pub struct CleanArgs {
    /// Input text file, or `-` for stdin.
    #[arg(long, default_value = "-")]
    pub input: PathBuf,

    /// Whitespace and artifact cleanup only.
    #[arg(long, default_value_t = false)]
    pub quick: bool,

    #[arg(long, default_value_t = false)]
    pub keep_page_numbers: bool,

    #[arg(long, default_value_t = false)]
    pub keep_links: bool,

    #[arg(long, default_value_t = false)]
    pub keep_repeated_lines: bool,

    /// Opt-in, lossy OCR confusable-character correction.
    #[arg(long, default_value_t = false)]
    pub fix_ocr: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SegmentArgs {
    /// Input text file, or `-` for stdin.
    #[arg(long, default_value = "-")]
    pub input: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    /// A chunk run report produced by `semchunk chunk`.
    #[arg(long)]
    pub report: PathBuf,
}

use super::*;

const OVERLAP_GUARD_CHARS: usize = 50;

/// The chunking orchestrator: clean, segment, split per block type, index,
/// inject overlap, filter. Stateless across calls and safe to share.
#[derive(Debug)]
pub struct SemanticChunker {
    config: ChunkingConfig,
    cleaner: TextCleaner,
    classifier: BlockClassifier,
    splitter: BlockSplitter,
}

impl SemanticChunker {
    pub fn new(config: ChunkingConfig) -> Result<Self> {
        Ok(Self {
            config,
            cleaner: TextCleaner::new()?,
            classifier: BlockClassifier::new()?,
            splitter: BlockSplitter::new()?,
        })
    }

    /// Chunks one document (or one known page when `page_number` is given).
    /// Never fails: empty or unusable input yields an empty list.
    pub fn chunk_document(&self, text: &str, page_number: Option<u32>) -> Vec<Chunk> {
        // Retrieval defaults: strip boilerplate and page numbers, keep links
        // (they may carry signal), no OCR guessing.
        let options = CleanOptions {
            remove_page_numbers: true,
            remove_links: false,
            remove_repeated_lines: true,
            fix_ocr: false,
        };
        let cleaned = self.cleaner.clean(text, &options);
        let blocks = self.classifier.segment_into_blocks(&cleaned);
        if blocks.is_empty() {
            return Vec::new();
        }

        let mut chunks = Vec::<Chunk>::new();
        let mut next_index = 0usize;

        for block in &blocks {
            let max_size = match block.kind {
                BlockKind::Table => self.config.table_max_size,
                _ => self.config.max_chunk_size,
            };

            let pieces = if char_len(&block.text) <= max_size {
                vec![SplitPiece {
                    content: block.text.clone(),
                    confidence: single_fit_confidence(block.confidence),
                }]
            } else {
                match block.kind {
                    BlockKind::Table => {
                        self.splitter.split_table(&block.text, self.config.table_max_size)
                    }
                    BlockKind::List => {
                        self.splitter.split_list(&block.text, self.config.max_chunk_size)
                    }
                    BlockKind::Text | BlockKind::Heading => self.splitter.split_text(
                        &block.text,
                        block.confidence,
                        self.config.max_chunk_size,
                        self.config.min_chunk_size,
                    ),
                }
            };

            for piece in pieces {
                let original_length = char_len(&piece.content);
                chunks.push(Chunk {
                    content: piece.content,
                    metadata: ChunkMetadata {
                        chunk_index: next_index,
                        page_number,
                        content_type: block.kind,
                        confidence: piece.confidence,
                        has_overlap: false,
                        original_length,
                    },
                });
                next_index += 1;
            }
        }

        self.inject_overlap(&mut chunks);

        // Overlap runs first so it can rescue an otherwise-too-small chunk.
        // A single-chunk document is kept even below the minimum to avoid
        // silent content loss on short input.
        if chunks.len() > 1 {
            chunks.retain(|chunk| char_len(chunk.content.trim()) >= self.config.min_chunk_size);
            for (index, chunk) in chunks.iter_mut().enumerate() {
                chunk.metadata.chunk_index = index;
            }
        }

        chunks
    }

    /// Chunks each page independently, then renumbers indices into a single
    /// global sequence across the whole document.
    pub fn chunk_pages(&self, pages: &[PageInput]) -> Vec<Chunk> {
        let mut chunks = Vec::<Chunk>::new();
        for page in pages {
            chunks.extend(self.chunk_document(&page.text, Some(page.page_number)));
        }

        for (index, chunk) in chunks.iter_mut().enumerate() {
            chunk.metadata.chunk_index = index;
        }

        chunks
    }

    fn inject_overlap(&self, chunks: &mut [Chunk]) {
        if chunks.len() <= 1 || self.config.overlap_size == 0 {
            return;
        }

        // Tails come from the pre-overlap contents so a prepended overlap
        // never cascades into the next chunk.
        let originals = chunks
            .iter()
            .map(|chunk| chunk.content.clone())
            .collect::<Vec<String>>();

        for index in 1..chunks.len() {
            let overlap = tail_chars(&originals[index - 1], self.config.overlap_size);
            if overlap.trim().is_empty() {
                continue;
            }

            let guard = prefix_chars(overlap, OVERLAP_GUARD_CHARS);
            if chunks[index].content.starts_with(guard) {
                continue;
            }

            let combined = format!("{}\n\n{}", overlap, chunks[index].content);
            chunks[index].content = combined;
            chunks[index].metadata.has_overlap = true;
        }
    }
}

fn single_fit_confidence(block_confidence: f64) -> ConfidenceLevel {
    if block_confidence > HIGH_CONFIDENCE_THRESHOLD {
        ConfidenceLevel::High
    } else {
        ConfidenceLevel::Medium
    }
}

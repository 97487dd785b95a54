use super::*;

/// Aggregates an already-produced chunk list. Empty input yields the zeroed
/// default instead of dividing by zero.
pub fn chunking_stats(chunks: &[Chunk]) -> ChunkingStats {
    if chunks.is_empty() {
        return ChunkingStats::default();
    }

    let lengths = chunks
        .iter()
        .map(|chunk| char_len(&chunk.content))
        .collect::<Vec<usize>>();
    let total: usize = lengths.iter().sum();

    let mut chunks_by_type = BTreeMap::<String, usize>::new();
    let mut chunks_by_confidence = BTreeMap::<String, usize>::new();
    for chunk in chunks {
        *chunks_by_type
            .entry(chunk.metadata.content_type.as_str().to_string())
            .or_insert(0) += 1;
        *chunks_by_confidence
            .entry(chunk.metadata.confidence.as_str().to_string())
            .or_insert(0) += 1;
    }

    ChunkingStats {
        total_chunks: chunks.len(),
        average_chunk_size: total as f64 / chunks.len() as f64,
        min_chunk_size: lengths.iter().copied().min().unwrap_or(0),
        max_chunk_size: lengths.iter().copied().max().unwrap_or(0),
        chunks_by_type,
        chunks_by_confidence,
    }
}

use super::*;

/// A split unit before metadata assignment.
#[derive(Debug, Clone)]
pub(crate) struct SplitPiece {
    pub content: String,
    pub confidence: ConfidenceLevel,
}

#[derive(Debug)]
pub(crate) struct BlockSplitter {
    sentence_run: Regex,
    separator_line: Regex,
}

impl BlockSplitter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            sentence_run: Regex::new(r"[^.!?]+[.!?]+")
                .context("failed to compile sentence-run regex")?,
            separator_line: Regex::new(r"[-=]")
                .context("failed to compile separator-line regex")?,
        })
    }

    /// Splits an oversized table block so every piece stays self-describing:
    /// each re-seeds with the header line(s) before appending data rows.
    pub fn split_table(&self, text: &str, table_max_size: usize) -> Vec<SplitPiece> {
        let lines = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect::<Vec<&str>>();
        let Some(first) = lines.first() else {
            return Vec::new();
        };

        let mut header = first.to_string();
        let mut data_start = 1;
        if lines.len() > 1 && self.separator_line.is_match(lines[1]) {
            header.push('\n');
            header.push_str(lines[1]);
            data_start = 2;
        }

        let header_len = char_len(&header);
        let mut pieces = Vec::<SplitPiece>::new();
        let mut current = header.clone();

        for line in &lines[data_start..] {
            let would_be = char_len(&current) + 1 + char_len(line);
            if would_be > table_max_size && char_len(&current) > header_len {
                pieces.push(SplitPiece {
                    content: current,
                    confidence: ConfidenceLevel::High,
                });
                current = header.clone();
            }

            current.push('\n');
            current.push_str(line);
        }

        if char_len(&current) > header_len || pieces.is_empty() {
            pieces.push(SplitPiece {
                content: current,
                confidence: ConfidenceLevel::High,
            });
        }

        pieces
    }

    /// Splits an oversized list block on item boundaries; no item is ever
    /// split mid-line.
    pub fn split_list(&self, text: &str, max_chunk_size: usize) -> Vec<SplitPiece> {
        let mut pieces = Vec::<SplitPiece>::new();
        let mut current = String::new();

        for line in text.lines() {
            let line = line.trim_end();
            if line.trim().is_empty() {
                continue;
            }

            if !current.is_empty() && char_len(&current) + 1 + char_len(line) > max_chunk_size {
                pieces.push(SplitPiece {
                    content: std::mem::take(&mut current),
                    confidence: ConfidenceLevel::High,
                });
            }

            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
        }

        if !current.is_empty() {
            pieces.push(SplitPiece {
                content: current,
                confidence: ConfidenceLevel::High,
            });
        }

        pieces
    }

    /// Splits prose on sentence boundaries. The final remainder is merged
    /// into the previous piece when it falls below the minimum, or kept with
    /// low confidence when it is the only output, rather than dropped.
    pub fn split_text(
        &self,
        text: &str,
        block_confidence: f64,
        max_chunk_size: usize,
        min_chunk_size: usize,
    ) -> Vec<SplitPiece> {
        let confidence = if block_confidence > HIGH_CONFIDENCE_THRESHOLD {
            ConfidenceLevel::High
        } else {
            ConfidenceLevel::Medium
        };

        let sentences = self.split_sentences(text);
        let mut pieces = Vec::<SplitPiece>::new();
        let mut current = String::new();

        for sentence in sentences {
            if !current.is_empty()
                && char_len(&current) + 1 + char_len(&sentence) > max_chunk_size
                && char_len(current.trim()) >= min_chunk_size
            {
                pieces.push(SplitPiece {
                    content: std::mem::take(&mut current),
                    confidence,
                });
            }

            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(&sentence);
        }

        if !current.is_empty() {
            if char_len(current.trim()) >= min_chunk_size {
                pieces.push(SplitPiece {
                    content: current,
                    confidence,
                });
            } else if let Some(last) = pieces.last_mut() {
                last.content.push(' ');
                last.content.push_str(&current);
            } else {
                pieces.push(SplitPiece {
                    content: current,
                    confidence: ConfidenceLevel::Low,
                });
            }
        }

        pieces
    }

    /// Greedy punctuation-based sentence segmentation. A span without any
    /// terminal punctuation is one sentence.
    fn split_sentences(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::<String>::new();
        let mut tail_start = 0usize;

        for found in self.sentence_run.find_iter(text) {
            let sentence = found.as_str().trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            tail_start = found.end();
        }

        let tail = text[tail_start..].trim();
        if !tail.is_empty() {
            sentences.push(tail.to_string());
        }

        sentences
    }
}

pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Last `count` characters of `text`, on char boundaries.
pub(crate) fn tail_chars(text: &str, count: usize) -> &str {
    let total = char_len(text);
    if total <= count {
        return text;
    }

    match text.char_indices().nth(total - count) {
        Some((offset, _)) => &text[offset..],
        None => text,
    }
}

/// First `count` characters of `text`, on char boundaries.
pub(crate) fn prefix_chars(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((offset, _)) => &text[..offset],
        None => text,
    }
}

use super::*;

pub(crate) const HEADING_THRESHOLD: f64 = 0.4;
pub(crate) const TABLE_THRESHOLD: f64 = 0.4;
pub(crate) const LIST_THRESHOLD: f64 = 0.35;

// Heading signal weights.
const HEADING_SHORT_POINTS: f64 = 2.0;
const HEADING_VERY_SHORT_BONUS: f64 = 1.0;
const HEADING_CASING_POINTS: f64 = 2.0;
const HEADING_NO_TERMINAL_POINTS: f64 = 1.0;
const HEADING_KEYWORD_POINTS: f64 = 3.0;
const HEADING_EMPHASIS_POINTS: f64 = 2.0;
const HEADING_MAX_POINTS: f64 = 11.0;

// Table signal weights.
const TABLE_PIPE_POINTS: f64 = 3.0;
const TABLE_PIPE_DENSITY_BONUS: f64 = 2.0;
const TABLE_TAB_POINTS: f64 = 2.0;
const TABLE_GAP_POINTS: f64 = 2.0;
const TABLE_GAP_DENSITY_BONUS: f64 = 1.0;
const TABLE_UNIFORM_WIDTH_POINTS: f64 = 2.0;
const TABLE_NUMERIC_POINTS: f64 = 1.0;
const TABLE_MAX_POINTS: f64 = 13.0;

// List signal weights.
const LIST_NUMBERED_POINTS: f64 = 3.0;
const LIST_NUMBERED_DENSITY_BONUS: f64 = 1.0;
const LIST_BULLET_POINTS: f64 = 3.0;
const LIST_BULLET_DENSITY_BONUS: f64 = 1.0;
const LIST_INDENT_POINTS: f64 = 1.0;
const LIST_MAX_POINTS: f64 = 9.0;

#[derive(Debug)]
pub struct BlockClassifier {
    paragraph_split: Regex,
    page_number_line: Regex,
    boilerplate_line: Regex,
    url_only: Regex,
    email_only: Regex,
    section_keyword: Regex,
    markdown_emphasis: Regex,
    numbered_item: Regex,
    bullet_item: Regex,
    indented_line: Regex,
    wide_gap: Regex,
}

impl BlockClassifier {
    pub fn new() -> Result<Self> {
        Ok(Self {
            paragraph_split: Regex::new(r"\n\s*\n")
                .context("failed to compile paragraph-split regex")?,
            page_number_line: Regex::new(r"(?i)^(page\s+)?\d+(\s*(/|of)\s*\d+)?$")
                .context("failed to compile page-number-line regex")?,
            boilerplate_line: Regex::new(
                r"(?i)(confidential|proprietary|copyright|all rights reserved|©|\b(19|20)\d{2}\b)",
            )
            .context("failed to compile boilerplate-line regex")?,
            url_only: Regex::new(r"^(https?://\S+|www\.\S+)$")
                .context("failed to compile url-only regex")?,
            email_only: Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
                .context("failed to compile email-only regex")?,
            section_keyword: Regex::new(
                r"(?i)^(summary|objective|skills|experience|education|employment|projects|certifications|references|contact|profile|qualifications|achievements|awards|interests|languages|publications)\b",
            )
            .context("failed to compile section-keyword regex")?,
            markdown_emphasis: Regex::new(r"^(#{1,6}\s+.*|\*\*.+\*\*|__.+__)$")
                .context("failed to compile markdown-emphasis regex")?,
            numbered_item: Regex::new(r"^\s*\d+[.)]\s+")
                .context("failed to compile numbered-item regex")?,
            bullet_item: Regex::new(r"^\s*[•◦▪■‣∙·*-]\s+")
                .context("failed to compile bullet-item regex")?,
            indented_line: Regex::new(r"^ {2,}")
                .context("failed to compile indented-line regex")?,
            wide_gap: Regex::new(r" {3,}").context("failed to compile wide-gap regex")?,
        })
    }

    /// First-match-wins classification cascade. Header/footer noise is
    /// force-classified as text with confidence 0 so segmentation drops it.
    pub fn classify(&self, span: &str) -> (BlockKind, f64) {
        let span = span.trim();

        if self.is_header_footer(span) {
            return (BlockKind::Text, 0.0);
        }

        if !span.contains('\n') {
            let score = self.heading_score(span);
            if score > HEADING_THRESHOLD {
                return (BlockKind::Heading, score);
            }
        }

        let table = self.table_score(span);
        if table > TABLE_THRESHOLD {
            return (BlockKind::Table, table);
        }

        let list = self.list_score(span);
        if list > LIST_THRESHOLD {
            return (BlockKind::List, list);
        }

        // Plain prose: maximal confidence that no structural hypothesis fits.
        (BlockKind::Text, 1.0)
    }

    /// Running header, footer, page number, or standalone link noise.
    pub fn is_header_footer(&self, span: &str) -> bool {
        let line = span.trim();
        if line.is_empty() || line.contains('\n') {
            return false;
        }

        if self.page_number_line.is_match(line) {
            return true;
        }

        if line.chars().count() < 30 && self.boilerplate_line.is_match(line) {
            return true;
        }

        self.url_only.is_match(line) || self.email_only.is_match(line)
    }

    /// Heading score for a single-line span, normalized to [0, 1].
    pub fn heading_score(&self, line: &str) -> f64 {
        let line = line.trim();
        if line.is_empty() || line.contains('\n') {
            return 0.0;
        }

        let mut score = 0.0;
        let length = line.chars().count();

        if length < 60 {
            score += HEADING_SHORT_POINTS;
            if length < 40 {
                score += HEADING_VERY_SHORT_BONUS;
            }
        }

        if is_all_caps(line) || is_title_case(line) {
            score += HEADING_CASING_POINTS;
        }

        let terminal = line.chars().last().is_some_and(|last| {
            matches!(last, '.' | '!' | '?' | ',' | ';')
        });
        if !terminal {
            score += HEADING_NO_TERMINAL_POINTS;
        }

        if self.section_keyword.is_match(line) {
            score += HEADING_KEYWORD_POINTS;
        }

        if self.markdown_emphasis.is_match(line) {
            score += HEADING_EMPHASIS_POINTS;
        }

        score / HEADING_MAX_POINTS
    }

    /// Table score over all lines of a span, normalized to [0, 1].
    pub fn table_score(&self, span: &str) -> f64 {
        let lines = span.lines().collect::<Vec<&str>>();
        if lines.is_empty() {
            return 0.0;
        }

        let total = lines.len() as f64;
        let mut score = 0.0;

        let pipe_lines = lines.iter().filter(|line| line.contains('|')).count();
        if pipe_lines >= 3 {
            score += TABLE_PIPE_POINTS;
            if pipe_lines as f64 / total > 0.7 {
                score += TABLE_PIPE_DENSITY_BONUS;
            }
        }

        let tab_lines = lines.iter().filter(|line| line.contains('\t')).count();
        if tab_lines >= 3 {
            score += TABLE_TAB_POINTS;
        }

        let gap_lines = lines
            .iter()
            .filter(|line| self.wide_gap.is_match(line))
            .count();
        if gap_lines >= 3 {
            score += TABLE_GAP_POINTS;
            if gap_lines as f64 / total > 0.6 {
                score += TABLE_GAP_DENSITY_BONUS;
            }
        }

        // Tabular rows tend to have consistent width.
        if lines.len() >= 3 {
            let lengths = lines
                .iter()
                .map(|line| line.chars().count() as f64)
                .collect::<Vec<f64>>();
            let mean = lengths.iter().sum::<f64>() / total;
            let variance = lengths
                .iter()
                .map(|length| (length - mean) * (length - mean))
                .sum::<f64>()
                / total;
            if mean > 0.0 && variance.sqrt() < mean * 0.3 {
                score += TABLE_UNIFORM_WIDTH_POINTS;
            }
        }

        let digit_lines = lines
            .iter()
            .filter(|line| line.chars().any(|character| character.is_ascii_digit()))
            .count();
        if digit_lines as f64 / total > 0.5 {
            score += TABLE_NUMERIC_POINTS;
        }

        score / TABLE_MAX_POINTS
    }

    /// List score over all lines of a span, normalized to [0, 1].
    pub fn list_score(&self, span: &str) -> f64 {
        let lines = span
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect::<Vec<&str>>();
        if lines.is_empty() {
            return 0.0;
        }

        let total = lines.len() as f64;
        let mut score = 0.0;

        let numbered = lines
            .iter()
            .filter(|line| self.numbered_item.is_match(line))
            .count();
        if numbered >= 2 {
            score += LIST_NUMBERED_POINTS;
            if numbered as f64 / total > 0.7 {
                score += LIST_NUMBERED_DENSITY_BONUS;
            }
        }

        let bullets = lines
            .iter()
            .filter(|line| self.bullet_item.is_match(line))
            .count();
        if bullets >= 2 {
            score += LIST_BULLET_POINTS;
            if bullets as f64 / total > 0.7 {
                score += LIST_BULLET_DENSITY_BONUS;
            }
        }

        let indented = lines
            .iter()
            .filter(|line| self.indented_line.is_match(line))
            .count();
        if indented as f64 / total > 0.5 {
            score += LIST_INDENT_POINTS;
        }

        score / LIST_MAX_POINTS
    }

    /// Splits cleaned document text on blank-line boundaries, classifies each
    /// paragraph, and drops noise blocks (confidence 0).
    pub fn segment_into_blocks(&self, text: &str) -> Vec<ContentBlock> {
        let mut blocks = Vec::<ContentBlock>::new();
        let mut current_line = 0usize;

        for paragraph in self.paragraph_split.split(text) {
            let line_count = paragraph.lines().count().max(1);
            let trimmed = paragraph.trim();

            if !trimmed.is_empty() {
                let (kind, confidence) = self.classify(trimmed);
                if confidence > 0.0 {
                    blocks.push(ContentBlock {
                        text: trimmed.to_string(),
                        kind,
                        confidence,
                        start_line: current_line,
                        end_line: current_line + line_count - 1,
                    });
                }
            }

            current_line += line_count + 2;
        }

        blocks
    }
}

fn is_all_caps(line: &str) -> bool {
    let mut saw_alpha = false;
    for character in line.chars() {
        if character.is_lowercase() {
            return false;
        }
        if character.is_alphabetic() {
            saw_alpha = true;
        }
    }
    saw_alpha
}

fn is_title_case(line: &str) -> bool {
    let mut saw_word = false;
    for word in line.split_whitespace() {
        let Some(first) = word.chars().find(|character| character.is_alphabetic()) else {
            continue;
        };
        if !first.is_uppercase() {
            return false;
        }
        saw_word = true;
    }
    saw_word
}

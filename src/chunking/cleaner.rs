use super::*;

/// Toggles for the optional cleanup stages. Whitespace normalization,
/// artifact removal, and list-marker normalization always run.
#[derive(Debug, Clone)]
pub struct CleanOptions {
    pub remove_page_numbers: bool,
    pub remove_links: bool,
    pub remove_repeated_lines: bool,
    pub fix_ocr: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            remove_page_numbers: true,
            remove_links: true,
            remove_repeated_lines: true,
            fix_ocr: false,
        }
    }
}

const REPEATED_LINE_MIN_LEN: usize = 5;
const REPEATED_LINE_MAX_LEN: usize = 99;
const REPEATED_LINE_MAX_OCCURRENCES: usize = 2;

#[derive(Debug)]
pub struct TextCleaner {
    space_runs: Regex,
    tab_runs: Regex,
    blank_runs: Regex,
    invisible_chars: Regex,
    hyphen_wrap: Regex,
    camel_boundary: Regex,
    page_number_line: Regex,
    bare_number_line: Regex,
    url_line: Regex,
    email_line: Regex,
    bullet_marker: Regex,
    numbered_marker: Regex,
    isolated_l: Regex,
    inword_zero: Regex,
    inword_one: Regex,
}

impl TextCleaner {
    pub fn new() -> Result<Self> {
        Ok(Self {
            space_runs: Regex::new(r" {2,}").context("failed to compile space-run regex")?,
            tab_runs: Regex::new(r"\t{2,}").context("failed to compile tab-run regex")?,
            blank_runs: Regex::new(r"\n{4,}").context("failed to compile blank-run regex")?,
            invisible_chars: Regex::new("[\u{200B}\u{200C}\u{200D}\u{FEFF}\u{00AD}]")
                .context("failed to compile invisible-char regex")?,
            hyphen_wrap: Regex::new(r"(\w)-\s+(\w)")
                .context("failed to compile hyphen-wrap regex")?,
            camel_boundary: Regex::new(r"([a-z])([A-Z])")
                .context("failed to compile camel-boundary regex")?,
            page_number_line: Regex::new(r"(?i)^(page\s+)?\d+(\s*(/|of)\s*\d+)?$")
                .context("failed to compile page-number-line regex")?,
            bare_number_line: Regex::new(r"^\d{1,3}$")
                .context("failed to compile bare-number-line regex")?,
            url_line: Regex::new(r"^(https?://\S+|www\.\S+)$")
                .context("failed to compile url-line regex")?,
            email_line: Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
                .context("failed to compile email-line regex")?,
            bullet_marker: Regex::new(r"^\s*[•◦▪■‣∙·*-]\s+")
                .context("failed to compile bullet-marker regex")?,
            numbered_marker: Regex::new(r"^\s*(?P<num>\d+)[.)]\s+")
                .context("failed to compile numbered-marker regex")?,
            isolated_l: Regex::new(r"\bl\b").context("failed to compile isolated-l regex")?,
            inword_zero: Regex::new(r"(?P<a>[A-Za-z])0(?P<b>[A-Za-z])")
                .context("failed to compile in-word-zero regex")?,
            inword_one: Regex::new(r"(?P<a>[A-Za-z])1(?P<b>[A-Za-z])")
                .context("failed to compile in-word-one regex")?,
        })
    }

    /// Full cleanup pipeline. Pure and deterministic; stage order is fixed.
    pub fn clean(&self, text: &str, options: &CleanOptions) -> String {
        let mut text = self.normalize_whitespace(text);
        text = self.remove_artifacts(&text);

        if options.remove_page_numbers {
            text = self.remove_page_number_lines(&text);
        }
        if options.remove_links {
            text = self.remove_link_lines(&text);
        }
        if options.remove_repeated_lines {
            text = self.remove_repeated_lines(&text);
        }

        text = self.normalize_list_markers(&text);

        if options.fix_ocr {
            text = self.fix_ocr_confusables(&text);
        }

        self.normalize_whitespace(&text).trim().to_string()
    }

    /// Cheap pass: whitespace normalization and artifact removal only.
    pub fn quick_clean(&self, text: &str) -> String {
        let normalized = self.normalize_whitespace(text);
        let stripped = self.remove_artifacts(&normalized);
        self.normalize_whitespace(&stripped).trim().to_string()
    }

    fn normalize_whitespace(&self, text: &str) -> String {
        let unified = text.replace("\r\n", "\n").replace('\r', "\n");
        let spaces = self.space_runs.replace_all(&unified, " ");
        let tabs = self.tab_runs.replace_all(&spaces, "\t");
        self.blank_runs.replace_all(&tabs, "\n\n\n").into_owned()
    }

    fn remove_artifacts(&self, text: &str) -> String {
        let stripped = self.invisible_chars.replace_all(text, "");
        let rejoined = self.hyphen_wrap.replace_all(&stripped, "${1}${2}");
        // Lossy: also splits legitimate CamelCase (acronyms, product names).
        let spaced = self.camel_boundary.replace_all(&rejoined, "${1} ${2}");
        spaced.replace('\u{000C}', "\n\n")
    }

    fn remove_page_number_lines(&self, text: &str) -> String {
        self.retain_lines(text, |line| {
            !self.page_number_line.is_match(line) && !self.bare_number_line.is_match(line)
        })
    }

    fn remove_link_lines(&self, text: &str) -> String {
        self.retain_lines(text, |line| {
            !self.url_line.is_match(line) && !self.email_line.is_match(line)
        })
    }

    fn remove_repeated_lines(&self, text: &str) -> String {
        let mut counts = HashMap::<&str, usize>::new();
        for line in text.lines() {
            let trimmed = line.trim();
            let len = trimmed.chars().count();
            if (REPEATED_LINE_MIN_LEN..=REPEATED_LINE_MAX_LEN).contains(&len) {
                *counts.entry(trimmed).or_insert(0) += 1;
            }
        }

        let boilerplate = counts
            .into_iter()
            .filter_map(|(line, count)| {
                (count > REPEATED_LINE_MAX_OCCURRENCES).then(|| line.to_string())
            })
            .collect::<Vec<String>>();

        self.retain_lines(text, |line| !boilerplate.iter().any(|repeat| repeat == line))
    }

    fn normalize_list_markers(&self, text: &str) -> String {
        text.lines()
            .map(|line| {
                if self.numbered_marker.is_match(line) {
                    self.numbered_marker.replace(line, "${num}. ").into_owned()
                } else if self.bullet_marker.is_match(line) {
                    self.bullet_marker.replace(line, "\u{2022} ").into_owned()
                } else {
                    line.to_string()
                }
            })
            .collect::<Vec<String>>()
            .join("\n")
    }

    fn fix_ocr_confusables(&self, text: &str) -> String {
        let fixed = self.isolated_l.replace_all(text, "I");
        let fixed = self.inword_zero.replace_all(&fixed, "${a}o${b}");
        self.inword_one.replace_all(&fixed, "${a}l${b}").into_owned()
    }

    fn retain_lines<F>(&self, text: &str, keep: F) -> String
    where
        F: Fn(&str) -> bool,
    {
        text.lines()
            .filter(|line| {
                let trimmed = line.trim();
                trimmed.is_empty() || keep(trimmed)
            })
            .collect::<Vec<&str>>()
            .join("\n")
    }
}

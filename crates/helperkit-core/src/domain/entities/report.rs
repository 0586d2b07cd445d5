//! Debug report assembly.
//!
//! A [`Report`] is a list of [`ReportSection`]s. Sections are separated by one
//! blank line and the whole text is wrapped in a preformatted-block delimiter
//! pair the host's output layer passes through untouched.

use serde::{Deserialize, Serialize};

/// Rendering options for reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportOptions {
    /// Written before the first section.
    pub open_delimiter: String,
    /// Written after the last section.
    pub close_delimiter: String,
    /// Nesting depth after which structured dumps are summarized.
    pub dump_depth: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            open_delimiter: "<pre>".into(),
            close_delimiter: "</pre>".into(),
            dump_depth: 4,
        }
    }
}

/// An ordered block of lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSection {
    lines: Vec<String>,
}

impl ReportSection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Append multi-line text, one entry per line.
    pub fn push_block(&mut self, block: &str) {
        self.lines.extend(block.lines().map(str::to_string));
    }

    /// Append a blank separator line.
    pub fn push_blank(&mut self) {
        self.lines.push(String::new());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

impl<S: Into<String>> FromIterator<S> for ReportSection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// A complete debug report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    sections: Vec<ReportSection>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, section: ReportSection) {
        self.sections.push(section);
    }

    pub fn sections(&self) -> &[ReportSection] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Join sections with blank lines and wrap them in the delimiters.
    pub fn render(&self, options: &ReportOptions) -> String {
        let body = self
            .sections
            .iter()
            .map(ReportSection::render)
            .collect::<Vec<_>>()
            .join("\n\n");

        format!("{}{}{}", options.open_delimiter, body, options.close_delimiter)
    }
}

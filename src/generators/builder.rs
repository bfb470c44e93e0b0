//! Assembly helpers for generated Python source.
//!
//! Centralizes import deduplication, block layout and identifier
//! normalization so the per-template code only produces content.

use regex::Regex;
use std::sync::OnceLock;

/// Literal typed into text inputs by generated round-trip tests.
pub const PROBE_TEXT: &str = "Test input text";

/// Accumulates import lines and top-level code blocks, then renders a
/// complete Python source file.
#[derive(Default)]
pub struct PySourceBuilder {
    imports: Vec<String>,
    blocks: Vec<String>,
}

impl PySourceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import line, keeping first-seen order and dropping duplicates.
    pub fn import_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        if !self.imports.contains(&line) {
            self.imports.push(line);
        }
    }

    /// Add a top-level block (a def, a fixture, a preamble). Blocks are
    /// separated by blank lines in the rendered file.
    pub fn block(&mut self, text: impl Into<String>) {
        let text = text.into();
        if !text.is_empty() {
            self.blocks.push(text.trim_end().to_string());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.blocks.is_empty()
    }

    pub fn render(&self) -> String {
        let mut sections = Vec::new();
        if !self.imports.is_empty() {
            sections.push(self.imports.join("\n"));
        }
        sections.extend(self.blocks.iter().cloned());
        let mut out = sections.join("\n\n\n");
        out.push('\n');
        out
    }
}

/// Convert an identifier to snake_case.
///
/// Three-stage transform: split before capitalized runs, split
/// lowercase-to-uppercase boundaries, replace remaining non-alphanumerics
/// with underscores, lowercase the result. Deterministic; generated
/// fixture and test names depend on it being stable.
pub fn snake_case(text: &str) -> String {
    static CAPITAL_RUN: OnceLock<Regex> = OnceLock::new();
    static CASE_BOUNDARY: OnceLock<Regex> = OnceLock::new();
    static NON_ALNUM: OnceLock<Regex> = OnceLock::new();

    let capital_run = CAPITAL_RUN.get_or_init(|| Regex::new(r"(.)([A-Z][a-z]+)").unwrap());
    let case_boundary = CASE_BOUNDARY.get_or_init(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());
    let non_alnum = NON_ALNUM.get_or_init(|| Regex::new(r"[^a-zA-Z0-9]").unwrap());

    let stage1 = capital_run.replace_all(text, "${1}_${2}");
    let stage2 = case_boundary.replace_all(&stage1, "${1}_${2}");
    let stage3 = non_alnum.replace_all(&stage2, "_");
    stage3.to_lowercase()
}

/// Fixture name for a class instance: `<snake_case(class)>_instance`.
pub fn instance_fixture_name(class_name: &str) -> String {
    format!("{}_instance", snake_case(class_name))
}

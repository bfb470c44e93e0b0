//! Test generation: transforms an analysis result into pytest source files.

pub mod builder;
pub mod elements;
pub mod fixtures;

use crate::core::{AnalysisResult, GeneratedTestSet};
use crate::generators::builder::snake_case;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub const DEFAULT_MAX_METHOD_TESTS: usize = 5;

/// Generates test code for an analyzed project.
///
/// Reads the analysis result it is given; owns nothing beyond the
/// [`GeneratedTestSet`] it returns.
pub struct TestGenerator<'a> {
    analysis: &'a AnalysisResult,
    max_method_tests: usize,
}

impl<'a> TestGenerator<'a> {
    pub fn new(analysis: &'a AnalysisResult) -> Self {
        Self {
            analysis,
            max_method_tests: DEFAULT_MAX_METHOD_TESTS,
        }
    }

    pub fn with_max_method_tests(mut self, cap: usize) -> Self {
        self.max_method_tests = cap;
        self
    }

    /// Generate the fixture file plus one test file per app/GUI class.
    ///
    /// With `output_dir` the files are also written to disk, overwriting
    /// existing files; without it generation is purely in-memory.
    pub fn generate_tests(&self, output_dir: Option<&Path>) -> Result<GeneratedTestSet> {
        let base = match output_dir {
            Some(dir) => dir.to_path_buf(),
            None => default_output_dir(&self.analysis.project_path),
        };

        let mut files = GeneratedTestSet::new();
        files.insert(
            base.join("conftest.py"),
            fixtures::render_conftest(self.analysis),
        );

        for (_, class) in self.analysis.app_classes() {
            let file_name = format!("test_{}.py", snake_case(&class.name));
            files.insert(
                base.join(file_name),
                class_tests::render_class_tests(self.analysis, class, self.max_method_tests),
            );
        }

        if output_dir.is_some() {
            write_test_files(&files, &base)?;
        }

        Ok(files)
    }
}

/// Default location for generated files: `tests/` beside the project
/// root (or beside a single analyzed file).
fn default_output_dir(project_path: &Path) -> PathBuf {
    if project_path.is_file() {
        project_path
            .parent()
            .unwrap_or(Path::new("."))
            .join("tests")
    } else {
        project_path.join("tests")
    }
}

fn write_test_files(files: &GeneratedTestSet, dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    for (path, content) in files {
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    log::info!("Generated {} test files in {}", files.len(), dir.display());
    Ok(())
}

/// Generate tests for an analyzed project.
pub fn generate_tests(
    analysis: &AnalysisResult,
    output_dir: Option<&Path>,
) -> Result<GeneratedTestSet> {
    TestGenerator::new(analysis).generate_tests(output_dir)
}

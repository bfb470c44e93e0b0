//! Project analysis: file discovery, per-file extraction, classification.

pub mod heuristics;
pub mod python;

use crate::core::{AnalysisResult, GuiFramework};
use crate::io::walker::FileWalker;
use anyhow::{Context, Result};
use chrono::Utc;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Analyzes a Python project tree (or a single file) and builds the
/// inventory consumed by test generation.
///
/// The analyzer owns its inventory mappings for the duration of one
/// `analyze` call; the returned [`AnalysisResult`] is immutable.
pub struct ProjectAnalyzer {
    project_path: PathBuf,
    ignore_patterns: Vec<String>,
}

impl ProjectAnalyzer {
    pub fn new(project_path: impl Into<PathBuf>) -> Self {
        Self {
            project_path: project_path.into(),
            ignore_patterns: Vec::new(),
        }
    }

    /// Additional glob patterns excluded from the walk, on top of the
    /// built-in test/venv exclusions.
    pub fn with_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    /// Perform full analysis of the project.
    ///
    /// Per-file read and parse failures are logged and skipped; the only
    /// fatal error is a project root that cannot be resolved.
    pub fn analyze(&self) -> Result<AnalysisResult> {
        let root = std::fs::canonicalize(&self.project_path).with_context(|| {
            format!(
                "Failed to resolve project path {}",
                self.project_path.display()
            )
        })?;
        log::info!("Analyzing project at {}", root.display());

        let files = FileWalker::new(root.clone())
            .with_ignore_patterns(self.ignore_patterns.clone())
            .walk()?;
        log::info!("Found {} Python files", files.len());

        let single_file = root.is_file();

        let mut gui_framework = None;
        let mut modules = BTreeMap::new();
        let mut classes = BTreeMap::new();
        let mut functions = BTreeMap::new();
        let mut ui_elements = BTreeMap::new();

        for file in &files {
            let analysis = match analyze_one_file(file, &root, single_file) {
                Ok(analysis) => analysis,
                Err(e) => {
                    log::warn!("Error analyzing {}: {:#}", file.display(), e);
                    continue;
                }
            };

            // First framework detected in traversal order wins; the walk
            // is sorted, so detection is deterministic across runs.
            gui_framework = gui_framework.or(analysis.framework);

            let module_name = analysis.module.name.clone();
            for class in analysis.classes {
                for element in &class.ui_elements {
                    ui_elements.insert(
                        format!("{}.{}.{}", module_name, class.name, element.name),
                        element.clone(),
                    );
                }
                classes.insert(format!("{}.{}", module_name, class.name), class);
            }
            for function in analysis.functions {
                functions.insert(format!("{}.{}", module_name, function.name), function);
            }
            modules.insert(module_name, analysis.module);
        }

        classify_app_classes(&mut classes);

        Ok(AnalysisResult {
            project_path: root,
            timestamp: Utc::now(),
            gui_framework,
            modules,
            classes,
            functions,
            ui_elements,
        })
    }
}

fn analyze_one_file(file: &Path, root: &Path, single_file: bool) -> Result<python::FileAnalysis> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let module_name = module_name_for(file, root, single_file);
    python::analyze_source(&content, file, &module_name)
}

/// Dotted module name: path relative to the project root with separators
/// normalized to dots and the extension stripped; bare file stem when
/// analyzing a single file.
fn module_name_for(file: &Path, root: &Path, single_file: bool) -> String {
    if single_file {
        return file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
    }

    let relative = file.strip_prefix(root).unwrap_or(file);
    relative
        .with_extension("")
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(".")
}

/// Flag GUI classes that look like the application itself: an app-like
/// name fragment or a recognized entry-point method. A GUI base class is
/// a precondition; a plain class with a `run` method does not qualify.
fn classify_app_classes(classes: &mut BTreeMap<String, crate::core::ClassRecord>) {
    for class in classes.values_mut() {
        if class.is_gui_class {
            class.is_app_class = heuristics::looks_like_app_class(&class.name, &class.methods);
            if class.is_app_class {
                log::debug!("Detected app class {}.{}", class.module, class.name);
            }
        }
    }
}

/// Analyze a Python project and detect its structure.
pub fn analyze_project(project_path: &Path) -> Result<AnalysisResult> {
    ProjectAnalyzer::new(project_path).analyze()
}

/// Convenience for callers that already track a detected framework.
pub fn framework_name(framework: Option<GuiFramework>) -> &'static str {
    framework.map(|f| f.as_str()).unwrap_or("none detected")
}

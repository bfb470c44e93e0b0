use anyhow::Result;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Directory name fragments excluded from the walk. Matched against each
/// lowercased path component below the project root.
static EXCLUDED_COMPONENT_FRAGMENTS: &[&str] = &["test", "venv", ".env"];

const PYTHON_EXTENSION: &str = "py";

/// Collects the candidate Python source files for an analysis run.
///
/// A root that is itself a `.py` file yields exactly that file; a directory
/// root is walked recursively with test/venv directories excluded. Results
/// are sorted so traversal order is stable across runs.
pub struct FileWalker {
    root: PathBuf,
    ignore_patterns: Vec<String>,
}

impl FileWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            ignore_patterns: vec![],
        }
    }

    pub fn with_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        if self.root.is_file() {
            if has_python_extension(&self.root) {
                return Ok(vec![self.root.clone()]);
            }
            return Ok(vec![]);
        }

        let mut files = Vec::new();
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .build();

        for entry in walker {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && self.should_process(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    fn should_process(&self, path: &Path) -> bool {
        if !has_python_extension(path) {
            return false;
        }

        if self.has_excluded_component(path) {
            return false;
        }

        let path_str = path.to_string_lossy();
        for pattern in &self.ignore_patterns {
            if glob::Pattern::new(pattern)
                .map(|p| p.matches(&path_str))
                .unwrap_or(false)
            {
                return false;
            }
        }

        true
    }

    /// True when any directory component between the root and the file
    /// contains an excluded fragment. The file name itself is not checked,
    /// nor are components of the root path.
    fn has_excluded_component(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        let Some(parent) = relative.parent() else {
            return false;
        };

        parent.components().any(|component| {
            let name = component.as_os_str().to_string_lossy().to_lowercase();
            EXCLUDED_COMPONENT_FRAGMENTS
                .iter()
                .any(|fragment| name.contains(fragment))
        })
    }
}

fn has_python_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy() == PYTHON_EXTENSION)
        .unwrap_or(false)
}

pub mod errors;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Desktop GUI toolkits the analyzer can recognize.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GuiFramework {
    Tkinter,
    Pyqt,
    Wxpython,
    Kivy,
    Pyside,
}

impl GuiFramework {
    pub fn as_str(&self) -> &'static str {
        static DISPLAY_STRINGS: &[(GuiFramework, &str)] = &[
            (GuiFramework::Tkinter, "tkinter"),
            (GuiFramework::Pyqt, "pyqt"),
            (GuiFramework::Wxpython, "wxpython"),
            (GuiFramework::Kivy, "kivy"),
            (GuiFramework::Pyside, "pyside"),
        ];

        DISPLAY_STRINGS
            .iter()
            .find(|(f, _)| f == self)
            .map(|(_, s)| *s)
            .unwrap_or("unknown")
    }

    /// True for the Qt bindings, which share test templates.
    pub fn is_qt_family(&self) -> bool {
        matches!(self, GuiFramework::Pyqt | GuiFramework::Pyside)
    }
}

impl std::fmt::Display for GuiFramework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One analyzed source file.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ModuleRecord {
    pub path: PathBuf,
    pub name: String,
    pub imports: Vec<String>,
    pub classes: Vec<String>,
    pub functions: Vec<String>,
}

/// One class declaration, keyed by `"<module>.<class>"` in the inventory.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ClassRecord {
    pub module: String,
    pub name: String,
    pub docstring: Option<String>,
    pub methods: Vec<String>,
    pub base_classes: Vec<String>,
    pub is_gui_class: bool,
    pub is_app_class: bool,
    pub ui_elements: Vec<UiElementRecord>,
    pub file_path: PathBuf,
    pub line: usize,
}

/// One top-level function declaration.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FunctionRecord {
    pub module: String,
    pub name: String,
    pub docstring: Option<String>,
    pub params: Vec<String>,
    pub file_path: PathBuf,
    pub line: usize,
}

/// A widget-like attribute assigned in a class constructor,
/// keyed by `"<module>.<class>.<attr>"` in the inventory.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UiElementRecord {
    pub name: String,
    /// Type name as written, possibly dotted (`tk.Button`).
    pub element_type: String,
    pub class_name: String,
    pub module: String,
}

impl UiElementRecord {
    /// Trailing segment of the type name, used for test dispatch.
    pub fn base_type(&self) -> &str {
        self.element_type
            .rsplit('.')
            .next()
            .unwrap_or(&self.element_type)
    }
}

/// Aggregate produced by a single analysis run. Immutable once returned.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub project_path: PathBuf,
    pub timestamp: DateTime<Utc>,
    pub gui_framework: Option<GuiFramework>,
    pub modules: BTreeMap<String, ModuleRecord>,
    pub classes: BTreeMap<String, ClassRecord>,
    pub functions: BTreeMap<String, FunctionRecord>,
    pub ui_elements: BTreeMap<String, UiElementRecord>,
}

impl AnalysisResult {
    /// Classes eligible for test generation, in key order.
    pub fn app_classes(&self) -> impl Iterator<Item = (&String, &ClassRecord)> {
        self.classes
            .iter()
            .filter(|(_, class)| class.is_app_class || class.is_gui_class)
    }
}

/// Output of one generation run: file path to generated source text.
pub type GeneratedTestSet = BTreeMap<PathBuf, String>;

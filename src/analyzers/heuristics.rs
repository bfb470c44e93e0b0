//! Static signature tables for GUI framework and widget detection.
//!
//! Matching is deliberately loose: import and base-class names are tested
//! substring-wise, widget type names by exact or dotted-suffix equality.
//! A user class that happens to be named `Frame` will match; missed widgets
//! are tolerated, crashes are not.

use crate::core::GuiFramework;

/// Import and base-class name fragments that identify a framework.
/// Table order is the canonical detection priority.
pub static FRAMEWORK_SIGNATURES: &[(GuiFramework, &[&str])] = &[
    (
        GuiFramework::Tkinter,
        &["tkinter", "tk", "Tk", "Frame", "Label", "Button", "Entry"],
    ),
    (
        GuiFramework::Pyqt,
        &["PyQt", "QApplication", "QMainWindow", "QWidget", "QPushButton"],
    ),
    (
        GuiFramework::Wxpython,
        &["wx", "wxPython", "App", "Frame", "Panel", "Button"],
    ),
    (GuiFramework::Kivy, &["kivy", "App", "Widget", "Label", "Button"]),
    (
        GuiFramework::Pyside,
        &["PySide", "QApplication", "QMainWindow", "QWidget"],
    ),
];

/// Widget type names recognized per framework.
pub static WIDGET_TYPES: &[(GuiFramework, &[&str])] = &[
    (
        GuiFramework::Tkinter,
        &[
            "Button",
            "Label",
            "Entry",
            "Text",
            "Frame",
            "Canvas",
            "Listbox",
            "Menubutton",
            "Menu",
            "Radiobutton",
            "Checkbutton",
            "Scale",
            "Scrollbar",
            "Spinbox",
            "Combobox",
        ],
    ),
    (
        GuiFramework::Pyqt,
        &[
            "QPushButton",
            "QLabel",
            "QLineEdit",
            "QTextEdit",
            "QFrame",
            "QWidget",
            "QListWidget",
            "QMenuBar",
            "QMenu",
            "QRadioButton",
            "QCheckBox",
            "QSlider",
            "QScrollBar",
            "QSpinBox",
            "QComboBox",
        ],
    ),
    (
        GuiFramework::Wxpython,
        &[
            "Button",
            "StaticText",
            "TextCtrl",
            "Panel",
            "Frame",
            "ListBox",
            "MenuBar",
            "Menu",
            "RadioButton",
            "CheckBox",
            "Slider",
            "ScrollBar",
            "SpinCtrl",
            "ComboBox",
        ],
    ),
    (
        GuiFramework::Kivy,
        &[
            "Button",
            "Label",
            "TextInput",
            "Widget",
            "BoxLayout",
            "GridLayout",
            "ListView",
            "Spinner",
            "CheckBox",
            "Slider",
            "ScrollView",
        ],
    ),
    (
        GuiFramework::Pyside,
        &[
            "QPushButton",
            "QLabel",
            "QLineEdit",
            "QTextEdit",
            "QFrame",
            "QWidget",
            "QListWidget",
            "QMenuBar",
            "QMenu",
            "QRadioButton",
            "QCheckBox",
            "QSlider",
            "QScrollBar",
            "QSpinBox",
            "QComboBox",
        ],
    ),
];

/// Class name fragments that suggest an application window or controller.
pub static APP_NAME_FRAGMENTS: &[&str] =
    &["App", "Application", "MainWindow", "Window", "GUI", "Interface"];

/// Method names that suggest an application entry point.
pub static ENTRY_POINT_METHODS: &[&str] =
    &["run", "start", "main", "mainloop", "exec", "exec_", "show"];

/// Match an import name against the framework signature tables.
/// First table containing a matching fragment wins.
pub fn framework_for_import(import_name: &str) -> Option<GuiFramework> {
    FRAMEWORK_SIGNATURES
        .iter()
        .find(|(_, patterns)| patterns.iter().any(|p| import_name.contains(p)))
        .map(|(framework, _)| *framework)
}

/// Match a base-class name (as written, possibly dotted) against the
/// framework signature tables.
pub fn framework_for_base_class(base_name: &str) -> Option<GuiFramework> {
    framework_for_import(base_name)
}

/// True if a constructor type name is a recognized widget type for any
/// framework: exact match, or a dotted name ending in `.<type>`.
pub fn is_widget_type(type_name: &str) -> bool {
    WIDGET_TYPES.iter().any(|(_, types)| {
        types
            .iter()
            .any(|t| type_name == *t || type_name.ends_with(&format!(".{t}")))
    })
}

/// True if a GUI class should additionally be flagged as an app class:
/// app-like name fragment, or an entry-point method.
pub fn looks_like_app_class(class_name: &str, methods: &[String]) -> bool {
    APP_NAME_FRAGMENTS.iter().any(|p| class_name.contains(p))
        || methods
            .iter()
            .any(|m| ENTRY_POINT_METHODS.contains(&m.as_str()))
}

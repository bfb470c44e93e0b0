//! Shared fixture file (`conftest.py`) synthesis.

use crate::core::{AnalysisResult, GuiFramework};
use crate::generators::builder::{instance_fixture_name, PySourceBuilder};
use std::collections::BTreeMap;

/// Framework-specific conftest fragments. One profile per supported
/// toolkit; lookups on an unrecognized framework fall back to empty
/// fragments rather than failing.
struct FrameworkProfile {
    imports: &'static [&'static str],
    hide_lines: &'static [&'static str],
}

static PROFILES: &[(GuiFramework, FrameworkProfile)] = &[
    (
        GuiFramework::Tkinter,
        FrameworkProfile {
            imports: &["import tkinter as tk"],
            hide_lines: &[
                "    app.root.withdraw()  # Hide window during tests",
                "    def process_events():",
                "        app.root.update()",
                "    app.process_events = process_events",
            ],
        },
    ),
    (
        GuiFramework::Pyqt,
        FrameworkProfile {
            imports: &[
                "from PyQt5 import QtWidgets",
                "from PyQt5.QtTest import QTest",
            ],
            hide_lines: &["    app.setVisible(False)  # Hide window during tests"],
        },
    ),
    (
        GuiFramework::Wxpython,
        FrameworkProfile {
            imports: &["import wx"],
            hide_lines: &["    app.Hide()  # Hide window during tests"],
        },
    ),
    (
        GuiFramework::Kivy,
        FrameworkProfile {
            imports: &["from kivy.app import App"],
            hide_lines: &[],
        },
    ),
    (
        GuiFramework::Pyside,
        FrameworkProfile {
            imports: &[
                "from PySide2 import QtWidgets",
                "from PySide2.QtTest import QTest",
            ],
            hide_lines: &["    app.setVisible(False)  # Hide window during tests"],
        },
    ),
];

fn profile_for(framework: GuiFramework) -> Option<&'static FrameworkProfile> {
    PROFILES
        .iter()
        .find(|(f, _)| *f == framework)
        .map(|(_, profile)| profile)
}

/// Render the shared fixture file: imports for every app/GUI class, a
/// sys.path preamble, one instance fixture per class, and a `main_window`
/// resolver fixture when the framework is recognized.
pub fn render_conftest(analysis: &AnalysisResult) -> String {
    let mut builder = PySourceBuilder::new();
    builder.import_line("import pytest");
    builder.import_line("import os");
    builder.import_line("import sys");

    if let Some(profile) = analysis.gui_framework.and_then(profile_for) {
        for line in profile.imports {
            builder.import_line(*line);
        }
    }

    // One import line per module, covering all its qualifying classes.
    let mut by_module: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for (_, class) in analysis.app_classes() {
        by_module
            .entry(class.module.as_str())
            .or_default()
            .push(class.name.as_str());
    }
    for (module, class_names) in &by_module {
        builder.import_line(format!("from {} import {}", module, class_names.join(", ")));
    }

    builder.block(
        r#"# Add project root to Python path
project_root = os.path.abspath(os.path.join(os.path.dirname(__file__), '..'))
if project_root not in sys.path:
    sys.path.insert(0, project_root)"#,
    );

    for (_, class) in analysis.app_classes() {
        builder.block(render_instance_fixture(
            &class.name,
            analysis.gui_framework,
        ));
    }

    if let Some(main_window) = render_main_window_fixture(analysis) {
        builder.block(main_window);
    }

    builder.render()
}

fn render_instance_fixture(class_name: &str, framework: Option<GuiFramework>) -> String {
    let fixture_name = instance_fixture_name(class_name);

    let mut lines = vec![
        "@pytest.fixture".to_string(),
        format!("def {fixture_name}():"),
        format!(r#"    """Fixture to provide a test instance of {class_name}.""""#),
        format!("    app = {class_name}()"),
    ];

    if let Some(profile) = framework.and_then(profile_for) {
        lines.extend(profile.hide_lines.iter().map(|s| s.to_string()));
    }

    lines.extend(
        [
            "    yield app",
            "    # Clean up",
            "    try:",
            "        if hasattr(app, 'shutdown'):",
            "            app.shutdown()",
            "        elif hasattr(app, 'close'):",
            "            app.close()",
            "    except Exception:",
            "        pass",
        ]
        .iter()
        .map(|s| s.to_string()),
    );

    lines.join("\n")
}

/// The `main_window` fixture resolves the application's top-level window
/// from the first qualifying class's instance fixture. Only emitted for
/// frameworks with a known window structure.
fn render_main_window_fixture(analysis: &AnalysisResult) -> Option<String> {
    let framework = analysis.gui_framework?;
    let (_, first_class) = analysis.app_classes().next()?;
    let fixture_name = instance_fixture_name(&first_class.name);

    match framework {
        GuiFramework::Tkinter => Some(format!(
            r#"@pytest.fixture
def main_window({fixture_name}):
    """Fixture to provide the main window of the application."""
    if hasattr({fixture_name}, 'root'):
        return {fixture_name}.root
    elif hasattr({fixture_name}, 'window'):
        return {fixture_name}.window
    elif hasattr({fixture_name}, 'main_window'):
        return {fixture_name}.main_window
    # Assume the app itself is the main window
    return {fixture_name}"#
        )),
        GuiFramework::Pyqt | GuiFramework::Pyside => Some(format!(
            r#"@pytest.fixture
def main_window({fixture_name}):
    """Fixture to provide the main window of the application."""
    # For Qt bindings the app instance is typically the main window
    return {fixture_name}"#
        )),
        _ => None,
    }
}

use deskgen::analyzers::ProjectAnalyzer;
use deskgen::core::GuiFramework;
use indoc::indoc;
use std::fs;
use std::path::Path;

const TK_APP: &str = indoc! {r#"
    import tkinter as tk


    class MyApp(tk.Tk):
        """Small demo application."""

        def __init__(self):
            super().__init__()
            self.title("Demo")
            self.submit = tk.Button(self, text="Go")
            self.name = tk.Entry(self)

        def run(self):
            self.mainloop()
"#};

fn write_file(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_single_tkinter_app_inventory() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "app.py", TK_APP);

    let results = ProjectAnalyzer::new(dir.path()).analyze().unwrap();

    assert_eq!(results.gui_framework, Some(GuiFramework::Tkinter));

    let class = &results.classes["app.MyApp"];
    assert!(class.is_gui_class);
    assert!(class.is_app_class);
    assert_eq!(class.base_classes, vec!["tk.Tk"]);
    assert_eq!(class.methods, vec!["__init__", "run"]);
    assert_eq!(class.docstring.as_deref(), Some("Small demo application."));

    assert_eq!(results.ui_elements.len(), 2);
    assert_eq!(
        results.ui_elements["app.MyApp.submit"].element_type,
        "tk.Button"
    );
    assert_eq!(
        results.ui_elements["app.MyApp.name"].element_type,
        "tk.Entry"
    );
}

#[test]
fn test_single_file_mode_uses_file_stem_as_module() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "app.py", TK_APP);

    let results = ProjectAnalyzer::new(dir.path().join("app.py"))
        .analyze()
        .unwrap();

    assert_eq!(results.gui_framework, Some(GuiFramework::Tkinter));
    assert!(results.classes.contains_key("app.MyApp"));
    assert!(results.modules.contains_key("app"));
}

#[test]
fn test_files_under_test_directories_are_excluded() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "tests/test_helper.py", "import tkinter\n");

    let results = ProjectAnalyzer::new(dir.path()).analyze().unwrap();

    assert!(results.modules.is_empty());
    assert!(results.classes.is_empty());
    assert_eq!(results.gui_framework, None);
}

#[test]
fn test_unparseable_file_does_not_abort_the_run() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "bad.py", "def broken(:\n");
    write_file(dir.path(), "good.py", "import tkinter as tk\n");

    let results = ProjectAnalyzer::new(dir.path()).analyze().unwrap();

    assert!(results.modules.contains_key("good"));
    assert!(!results.modules.contains_key("bad"));
    assert_eq!(results.gui_framework, Some(GuiFramework::Tkinter));
}

#[test]
fn test_analysis_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "app.py", TK_APP);
    write_file(dir.path(), "util.py", "def helper(x):\n    return x\n");

    let analyzer = ProjectAnalyzer::new(dir.path());
    let first = analyzer.analyze().unwrap();
    let second = analyzer.analyze().unwrap();

    assert_eq!(first.gui_framework, second.gui_framework);
    assert_eq!(first.modules, second.modules);
    assert_eq!(first.classes, second.classes);
    assert_eq!(first.functions, second.functions);
    assert_eq!(first.ui_elements, second.ui_elements);
}

#[test]
fn test_framework_detection_follows_traversal_order() {
    let dir = tempfile::tempdir().unwrap();
    // Sorted walk order visits a.py first; its wx import wins.
    write_file(dir.path(), "a.py", "import wx\n");
    write_file(dir.path(), "b.py", "import tkinter\n");

    let results = ProjectAnalyzer::new(dir.path()).analyze().unwrap();
    assert_eq!(results.gui_framework, Some(GuiFramework::Wxpython));
}

#[test]
fn test_element_records_require_a_widget_type_match() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        "panel.py",
        indoc! {"
            import tkinter as tk
            from tkinter import ttk


            class SettingsWindow(tk.Tk):
                def __init__(self):
                    self.mode = ttk.Combobox(self)
                    self.helper = SettingsValidator(self)
        "},
    );

    let results = ProjectAnalyzer::new(dir.path()).analyze().unwrap();

    assert!(results.ui_elements.contains_key("panel.SettingsWindow.mode"));
    assert!(!results.ui_elements.contains_key("panel.SettingsWindow.helper"));
}

#[test]
fn test_plain_class_with_run_method_is_not_an_app_class() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        "worker.py",
        indoc! {"
            class BatchWorker:
                def run(self):
                    pass
        "},
    );

    let results = ProjectAnalyzer::new(dir.path()).analyze().unwrap();

    let class = &results.classes["worker.BatchWorker"];
    assert!(!class.is_gui_class);
    assert!(!class.is_app_class);
}

#[test]
fn test_nested_module_names_are_dotted() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "gui/panels.py", "import tkinter\n");

    let results = ProjectAnalyzer::new(dir.path()).analyze().unwrap();
    assert!(results.modules.contains_key("gui.panels"));
    assert_eq!(results.modules["gui.panels"].imports, vec!["tkinter"]);
}

#[test]
fn test_missing_project_root_is_fatal() {
    let result = ProjectAnalyzer::new("/definitely/not/a/real/path").analyze();
    assert!(result.is_err());
}

#[test]
fn test_top_level_functions_recorded() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        "util.py",
        indoc! {r#"
            def launch(path, debug):
                """Start the app."""
                return path
        "#},
    );

    let results = ProjectAnalyzer::new(dir.path()).analyze().unwrap();
    let function = &results.functions["util.launch"];
    assert_eq!(function.params, vec!["path", "debug"]);
    assert_eq!(function.docstring.as_deref(), Some("Start the app."));
}

use deskgen::analyzers::ProjectAnalyzer;
use deskgen::generators::TestGenerator;
use indoc::indoc;
use std::fs;
use std::path::Path;

const TK_APP: &str = indoc! {r#"
    import tkinter as tk


    class MyApp(tk.Tk):
        """Small demo application."""

        def __init__(self):
            super().__init__()
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

fn file_named<'a>(
    files: &'a deskgen::GeneratedTestSet,
    name: &str,
) -> &'a String {
    files
        .iter()
        .find(|(path, _)| path.file_name().unwrap().to_string_lossy() == name)
        .map(|(_, content)| content)
        .unwrap_or_else(|| panic!("expected generated file {name}"))
}

#[test]
fn test_generated_set_for_tkinter_app() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "app.py", TK_APP);

    let analysis = ProjectAnalyzer::new(dir.path()).analyze().unwrap();
    let files = TestGenerator::new(&analysis).generate_tests(None).unwrap();

    assert_eq!(files.len(), 2);

    let conftest = file_named(&files, "conftest.py");
    assert!(conftest.contains("import tkinter as tk"));
    assert!(conftest.contains("from app import MyApp"));
    assert!(conftest.contains("def my_app_instance():"));
    assert!(conftest.contains("def main_window(my_app_instance):"));
    assert!(conftest.contains("sys.path.insert(0, project_root)"));

    let class_tests = file_named(&files, "test_my_app.py");
    assert!(class_tests.contains("def test_my_app_init(my_app_instance):"));
    assert!(class_tests.contains("def test_my_app_title(my_app_instance, main_window):"));
    assert!(class_tests.contains("def test_my_app_submit(my_app_instance):"));
    assert!(class_tests.contains("def test_my_app_name(my_app_instance):"));
    assert!(class_tests.contains("def test_my_app_run(my_app_instance):"));
    assert!(class_tests.contains(r#"entry.insert(0, "Test input text")"#));
}

#[test]
fn test_method_tests_capped_at_five_alphabetical() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        "board.py",
        indoc! {"
            import tkinter as tk


            class DashboardApp(tk.Tk):
                def __init__(self):
                    super().__init__()

                def zeta(self):
                    pass

                def alpha(self):
                    pass

                def epsilon(self):
                    pass

                def beta(self):
                    pass

                def gamma(self):
                    pass

                def delta(self):
                    pass

                def eta(self):
                    pass
        "},
    );

    let analysis = ProjectAnalyzer::new(dir.path()).analyze().unwrap();
    let files = TestGenerator::new(&analysis).generate_tests(None).unwrap();
    let class_tests = file_named(&files, "test_dashboard_app.py");

    let count = class_tests.matches("method exists.").count();
    assert_eq!(count, 5);
    for expected in ["alpha", "beta", "delta", "epsilon", "eta"] {
        assert!(
            class_tests.contains(&format!("def test_dashboard_app_{expected}(")),
            "missing method test for {expected}"
        );
    }
    assert!(!class_tests.contains("def test_dashboard_app_gamma("));
    assert!(!class_tests.contains("def test_dashboard_app_zeta("));
}

#[test]
fn test_generation_writes_and_overwrites_output_dir() {
    let project = tempfile::tempdir().unwrap();
    write_file(project.path(), "app.py", TK_APP);
    let out = tempfile::tempdir().unwrap();
    let out_dir = out.path().join("generated");

    let analysis = ProjectAnalyzer::new(project.path()).analyze().unwrap();
    let generator = TestGenerator::new(&analysis);

    let first = generator.generate_tests(Some(&out_dir)).unwrap();
    let second = generator.generate_tests(Some(&out_dir)).unwrap();
    assert_eq!(first.keys().collect::<Vec<_>>(), second.keys().collect::<Vec<_>>());

    let mut on_disk: Vec<_> = fs::read_dir(&out_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    on_disk.sort();
    assert_eq!(on_disk, vec!["conftest.py", "test_my_app.py"]);

    for (path, content) in &second {
        assert_eq!(&fs::read_to_string(path).unwrap(), content);
    }
}

#[test]
fn test_in_memory_generation_touches_no_files() {
    let project = tempfile::tempdir().unwrap();
    write_file(project.path(), "app.py", TK_APP);

    let analysis = ProjectAnalyzer::new(project.path()).analyze().unwrap();
    TestGenerator::new(&analysis).generate_tests(None).unwrap();

    assert!(!project.path().join("tests").exists());
}

#[test]
fn test_missing_templates_fall_back_to_construction_test() {
    let project = tempfile::tempdir().unwrap();
    // Kivy has no title or button template; the class still gets its
    // construction test and the rest is silently omitted.
    write_file(
        project.path(),
        "demo.py",
        indoc! {"
            from kivy.app import App


            class DemoApp(App):
                def __init__(self):
                    self.go = Button(self)
        "},
    );

    let analysis = ProjectAnalyzer::new(project.path()).analyze().unwrap();
    assert_eq!(analysis.gui_framework, Some(deskgen::GuiFramework::Kivy));

    let files = TestGenerator::new(&analysis).generate_tests(None).unwrap();
    let class_tests = file_named(&files, "test_demo_app.py");

    assert!(class_tests.contains("def test_demo_app_init(demo_app_instance):"));
    assert!(!class_tests.contains("_title("));
    assert!(!class_tests.contains("def test_demo_app_go("));
}

#[test]
fn test_configured_method_cap_is_honored() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        "board.py",
        indoc! {"
            import tkinter as tk


            class PanelApp(tk.Tk):
                def alpha(self):
                    pass

                def beta(self):
                    pass

                def gamma(self):
                    pass
        "},
    );

    let analysis = ProjectAnalyzer::new(dir.path()).analyze().unwrap();
    let files = TestGenerator::new(&analysis)
        .with_max_method_tests(1)
        .generate_tests(None)
        .unwrap();
    let class_tests = file_named(&files, "test_panel_app.py");

    assert_eq!(class_tests.matches("method exists.").count(), 1);
    assert!(class_tests.contains("def test_panel_app_alpha("));
}

//! Per-file Python source analysis.
//!
//! Parses one source file with `rustpython_parser` and extracts the module
//! inventory: imports, class declarations (with constructor widget scans),
//! and top-level functions. Analysis is purely syntactic; target code is
//! never imported or executed.

use crate::analyzers::heuristics;
use crate::core::{ClassRecord, FunctionRecord, GuiFramework, ModuleRecord, UiElementRecord};
use anyhow::Result;
use rustpython_parser::ast;
use std::path::Path;

/// Everything extracted from a single parsed file, including the first
/// framework signature matched in statement order. The framework candidate
/// is an explicit per-file value merged first-detected-wins by the caller.
#[derive(Debug)]
pub struct FileAnalysis {
    pub module: ModuleRecord,
    pub classes: Vec<ClassRecord>,
    pub functions: Vec<FunctionRecord>,
    pub framework: Option<GuiFramework>,
}

/// Parse Python source into a module AST.
pub fn parse_module(content: &str, path: &Path) -> Result<ast::Mod> {
    rustpython_parser::parse(
        content,
        rustpython_parser::Mode::Module,
        &path.display().to_string(),
    )
    .map_err(|e| anyhow::anyhow!("Python parse error in {}: {:?}", path.display(), e))
}

/// Analyze one source file. Walks the module's immediate children only;
/// constructor bodies are scanned recursively for widget assignments.
pub fn analyze_source(content: &str, path: &Path, module_name: &str) -> Result<FileAnalysis> {
    let parsed = parse_module(content, path)?;

    let mut module = ModuleRecord {
        path: path.to_path_buf(),
        name: module_name.to_string(),
        imports: Vec::new(),
        classes: Vec::new(),
        functions: Vec::new(),
    };
    let mut classes = Vec::new();
    let mut functions = Vec::new();
    let mut framework = None;

    if let ast::Mod::Module(ast::ModModule { body, .. }) = &parsed {
        for stmt in body {
            match stmt {
                ast::Stmt::Import(import) => {
                    for alias in &import.names {
                        let name = alias.name.to_string();
                        framework = framework.or(heuristics::framework_for_import(&name));
                        module.imports.push(name);
                    }
                }
                ast::Stmt::ImportFrom(import_from) => {
                    if let Some(source) = &import_from.module {
                        let name = source.to_string();
                        framework = framework.or(heuristics::framework_for_import(&name));
                        module.imports.push(name);
                    }
                }
                ast::Stmt::ClassDef(class_def) => {
                    let (class, candidate) =
                        analyze_class(class_def, module_name, path, content);
                    framework = framework.or(candidate);
                    module.classes.push(class.name.clone());
                    classes.push(class);
                }
                ast::Stmt::FunctionDef(func_def) => {
                    let function = analyze_function(func_def, module_name, path, content);
                    module.functions.push(function.name.clone());
                    functions.push(function);
                }
                _ => {}
            }
        }
    }

    Ok(FileAnalysis {
        module,
        classes,
        functions,
        framework,
    })
}

fn analyze_class(
    class_def: &ast::StmtClassDef,
    module_name: &str,
    path: &Path,
    source: &str,
) -> (ClassRecord, Option<GuiFramework>) {
    let docstring = extract_docstring(&class_def.body);

    let mut base_classes = Vec::new();
    let mut is_gui_class = false;
    let mut framework = None;

    for base in &class_def.bases {
        if let Some(base_name) = expr_to_name(base) {
            if let Some(matched) = heuristics::framework_for_base_class(&base_name) {
                is_gui_class = true;
                framework = framework.or(Some(matched));
            }
            base_classes.push(base_name);
        }
    }

    let mut methods = Vec::new();
    let mut ui_elements = Vec::new();

    for item in &class_def.body {
        if let ast::Stmt::FunctionDef(method) = item {
            methods.push(method.name.to_string());

            if method.name.as_str() == "__init__" {
                ui_elements.extend(extract_ui_elements(
                    &method.body,
                    class_def.name.as_str(),
                    module_name,
                ));
            }
        }
    }

    let class = ClassRecord {
        module: module_name.to_string(),
        name: class_def.name.to_string(),
        docstring,
        methods,
        base_classes,
        is_gui_class,
        is_app_class: false,
        ui_elements,
        file_path: path.to_path_buf(),
        line: line_number(source, class_def.range.start().to_usize()),
    };

    (class, framework)
}

fn analyze_function(
    func_def: &ast::StmtFunctionDef,
    module_name: &str,
    path: &Path,
    source: &str,
) -> FunctionRecord {
    let params = func_def
        .args
        .args
        .iter()
        .map(|arg| arg.def.arg.to_string())
        .collect();

    FunctionRecord {
        module: module_name.to_string(),
        name: func_def.name.to_string(),
        docstring: extract_docstring(&func_def.body),
        params,
        file_path: path.to_path_buf(),
        line: line_number(source, func_def.range.start().to_usize()),
    }
}

/// Scan a constructor body for `self.<attr> = Ctor(...)` assignments whose
/// callee names a recognized widget type. The scan is a full recursive walk,
/// so widgets created inside conditionals or helper blocks are still found.
fn extract_ui_elements(
    body: &[ast::Stmt],
    class_name: &str,
    module_name: &str,
) -> Vec<UiElementRecord> {
    let mut elements = Vec::new();

    walk_assignments(body, &mut |assign| {
        for target in &assign.targets {
            let attr = match self_attribute_name(target) {
                Some(attr) => attr,
                None => continue,
            };

            let ast::Expr::Call(call) = assign.value.as_ref() else {
                continue;
            };

            match call.func.as_ref() {
                // Direct instantiation: self.button = Button(...)
                ast::Expr::Name(func_name) => {
                    let element_type = func_name.id.to_string();
                    if heuristics::is_widget_type(&element_type) {
                        elements.push(UiElementRecord {
                            name: attr.clone(),
                            element_type,
                            class_name: class_name.to_string(),
                            module: module_name.to_string(),
                        });
                    }
                }
                // Qualified instantiation: self.button = tk.Button(...)
                ast::Expr::Attribute(func_attr) => {
                    if let ast::Expr::Name(obj) = func_attr.value.as_ref() {
                        if heuristics::is_widget_type(func_attr.attr.as_str()) {
                            elements.push(UiElementRecord {
                                name: attr.clone(),
                                element_type: format!("{}.{}", obj.id, func_attr.attr),
                                class_name: class_name.to_string(),
                                module: module_name.to_string(),
                            });
                        }
                    }
                }
                _ => {}
            }
        }
    });

    elements
}

/// Attribute name when the expression is `self.<attr>`, else None.
fn self_attribute_name(expr: &ast::Expr) -> Option<String> {
    if let ast::Expr::Attribute(attr) = expr {
        if let ast::Expr::Name(obj) = attr.value.as_ref() {
            if obj.id.as_str() == "self" {
                return Some(attr.attr.to_string());
            }
        }
    }
    None
}

/// Recursive statement walk applying `visit` to every assignment,
/// descending into compound statement bodies and nested definitions.
fn walk_assignments(stmts: &[ast::Stmt], visit: &mut impl FnMut(&ast::StmtAssign)) {
    for stmt in stmts {
        match stmt {
            ast::Stmt::Assign(assign) => visit(assign),
            ast::Stmt::If(inner) => {
                walk_assignments(&inner.body, visit);
                walk_assignments(&inner.orelse, visit);
            }
            ast::Stmt::While(inner) => {
                walk_assignments(&inner.body, visit);
                walk_assignments(&inner.orelse, visit);
            }
            ast::Stmt::For(inner) => {
                walk_assignments(&inner.body, visit);
                walk_assignments(&inner.orelse, visit);
            }
            ast::Stmt::AsyncFor(inner) => {
                walk_assignments(&inner.body, visit);
                walk_assignments(&inner.orelse, visit);
            }
            ast::Stmt::With(inner) => walk_assignments(&inner.body, visit),
            ast::Stmt::AsyncWith(inner) => walk_assignments(&inner.body, visit),
            ast::Stmt::Try(inner) => {
                walk_assignments(&inner.body, visit);
                for handler in &inner.handlers {
                    let ast::ExceptHandler::ExceptHandler(h) = handler;
                    walk_assignments(&h.body, visit);
                }
                walk_assignments(&inner.orelse, visit);
                walk_assignments(&inner.finalbody, visit);
            }
            ast::Stmt::Match(inner) => {
                for case in &inner.cases {
                    walk_assignments(&case.body, visit);
                }
            }
            ast::Stmt::FunctionDef(inner) => walk_assignments(&inner.body, visit),
            ast::Stmt::AsyncFunctionDef(inner) => walk_assignments(&inner.body, visit),
            ast::Stmt::ClassDef(inner) => walk_assignments(&inner.body, visit),
            _ => {}
        }
    }
}

/// Name of an expression that is a simple name or a dotted attribute access
/// on a simple name (`Tk`, `tk.Tk`), else None.
fn expr_to_name(expr: &ast::Expr) -> Option<String> {
    match expr {
        ast::Expr::Name(name) => Some(name.id.to_string()),
        ast::Expr::Attribute(attr) => {
            if let ast::Expr::Name(obj) = attr.value.as_ref() {
                Some(format!("{}.{}", obj.id, attr.attr))
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Extract docstring from a statement list
fn extract_docstring(body: &[ast::Stmt]) -> Option<String> {
    body.first().and_then(|stmt| {
        if let ast::Stmt::Expr(expr) = stmt {
            if let ast::Expr::Constant(constant) = expr.value.as_ref() {
                if let ast::Constant::Str(s) = &constant.value {
                    return Some(s.to_string());
                }
            }
        }
        None
    })
}

/// 1-based source line for a byte offset.
fn line_number(source: &str, byte_offset: usize) -> usize {
    let end = byte_offset.min(source.len());
    source.as_bytes()[..end]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
        + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::path::PathBuf;

    fn analyze(content: &str) -> FileAnalysis {
        analyze_source(content, &PathBuf::from("app.py"), "app").unwrap()
    }

    #[test]
    fn test_imports_recorded_in_order() {
        let analysis = analyze(indoc! {"
            import os
            import tkinter as tk
            from pathlib import Path
        "});
        assert_eq!(analysis.module.imports, vec!["os", "tkinter", "pathlib"]);
        assert_eq!(analysis.framework, Some(GuiFramework::Tkinter));
    }

    #[test]
    fn test_framework_first_match_wins_within_file() {
        let analysis = analyze(indoc! {"
            import wx
            import tkinter
        "});
        assert_eq!(analysis.framework, Some(GuiFramework::Wxpython));
    }

    #[test]
    fn test_class_with_dotted_gui_base() {
        let analysis = analyze(indoc! {"
            import tkinter as tk

            class MyApp(tk.Tk):
                def __init__(self):
                    super().__init__()
        "});
        let class = &analysis.classes[0];
        assert_eq!(class.name, "MyApp");
        assert_eq!(class.base_classes, vec!["tk.Tk"]);
        assert!(class.is_gui_class);
        assert_eq!(class.line, 3);
    }

    #[test]
    fn test_class_docstring_and_methods() {
        let analysis = analyze(indoc! {r#"
            class Widgetless:
                """A class with no widgets."""

                def alpha(self):
                    pass

                def beta(self):
                    pass
        "#});
        let class = &analysis.classes[0];
        assert_eq!(class.docstring.as_deref(), Some("A class with no widgets."));
        assert_eq!(class.methods, vec!["alpha", "beta"]);
        assert!(!class.is_gui_class);
    }

    #[test]
    fn test_ui_elements_require_widget_type_match() {
        let analysis = analyze(indoc! {"
            import tkinter as tk

            class MyApp(tk.Tk):
                def __init__(self):
                    self.submit = tk.Button(self)
                    self.name = tk.Entry(self)
                    self.helper = Validator(self)
                    self.plain = Button(self)
        "});
        let class = &analysis.classes[0];
        let names: Vec<_> = class.ui_elements.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["submit", "name", "plain"]);
        assert_eq!(class.ui_elements[0].element_type, "tk.Button");
        assert_eq!(class.ui_elements[2].element_type, "Button");
    }

    #[test]
    fn test_ui_elements_found_in_nested_blocks() {
        let analysis = analyze(indoc! {"
            import tkinter as tk

            class MyApp(tk.Tk):
                def __init__(self, compact):
                    if compact:
                        self.small = tk.Label(self)
                    else:
                        for _ in range(1):
                            self.big = tk.Canvas(self)
        "});
        let names: Vec<_> = analysis.classes[0]
            .ui_elements
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["small", "big"]);
    }

    #[test]
    fn test_elements_outside_init_are_ignored() {
        let analysis = analyze(indoc! {"
            import tkinter as tk

            class MyApp(tk.Tk):
                def build(self):
                    self.late = tk.Button(self)
        "});
        assert!(analysis.classes[0].ui_elements.is_empty());
    }

    #[test]
    fn test_top_level_function_params() {
        let analysis = analyze(indoc! {r#"
            def launch(path, debug):
                """Start the app."""
                return path
        "#});
        let function = &analysis.functions[0];
        assert_eq!(function.name, "launch");
        assert_eq!(function.params, vec!["path", "debug"]);
        assert_eq!(function.docstring.as_deref(), Some("Start the app."));
        assert_eq!(function.line, 1);
    }

    #[test]
    fn test_parse_error_is_reported() {
        let result = analyze_source("def broken(:\n", &PathBuf::from("bad.py"), "bad");
        assert!(result.is_err());
    }
}

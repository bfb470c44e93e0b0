//! Report writers for analysis results.

use crate::analyzers::framework_name;
use crate::core::AnalysisResult;
use colored::*;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_results(&mut self, results: &AnalysisResult) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_results(&mut self, results: &AnalysisResult) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(results)?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_results(&mut self, results: &AnalysisResult) -> anyhow::Result<()> {
        self.write_header(results)?;
        self.write_summary(results)?;
        self.write_app_classes(results)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, results: &AnalysisResult) -> anyhow::Result<()> {
        writeln!(self.writer, "# Deskgen Analysis Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            results.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer, "Project: {}", results.project_path.display())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, results: &AnalysisResult) -> anyhow::Result<()> {
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(
            self.writer,
            "| GUI framework | {} |",
            framework_name(results.gui_framework)
        )?;
        writeln!(self.writer, "| Modules | {} |", results.modules.len())?;
        writeln!(self.writer, "| Classes | {} |", results.classes.len())?;
        writeln!(
            self.writer,
            "| App/GUI classes | {} |",
            results.app_classes().count()
        )?;
        writeln!(self.writer, "| UI elements | {} |", results.ui_elements.len())?;
        writeln!(self.writer, "| Functions | {} |", results.functions.len())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_app_classes(&mut self, results: &AnalysisResult) -> anyhow::Result<()> {
        if results.app_classes().count() == 0 {
            return Ok(());
        }

        writeln!(self.writer, "## App Classes")?;
        writeln!(self.writer)?;
        for (key, class) in results.app_classes() {
            writeln!(self.writer, "### {key}")?;
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "Defined in {} (line {})",
                class.file_path.display(),
                class.line
            )?;
            writeln!(self.writer)?;
            if !class.ui_elements.is_empty() {
                for element in &class.ui_elements {
                    writeln!(
                        self.writer,
                        "- `{}`: {}",
                        element.name, element.element_type
                    )?;
                }
                writeln!(self.writer)?;
            }
        }
        Ok(())
    }
}

pub struct TerminalWriter;

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputWriter for TerminalWriter {
    fn write_results(&mut self, results: &AnalysisResult) -> anyhow::Result<()> {
        print_header();
        print_summary(results);
        print_app_classes(results);
        Ok(())
    }
}

fn print_header() {
    println!("{}", "Deskgen Analysis Report".bold().blue());
    println!("{}", "=======================".blue());
    println!();
}

fn print_summary(results: &AnalysisResult) {
    println!("{}", "Summary:".bold());
    println!(
        "  GUI framework: {}",
        framework_name(results.gui_framework).yellow()
    );
    println!("  Modules analyzed: {}", results.modules.len());
    println!("  Classes found: {}", results.classes.len());
    println!("  UI elements found: {}", results.ui_elements.len());
    println!("  Top-level functions: {}", results.functions.len());
    println!();
}

fn print_app_classes(results: &AnalysisResult) {
    let count = results.app_classes().count();
    if count == 0 {
        println!("{}", "No app or GUI classes detected.".yellow());
        return;
    }

    println!("{} ({count}):", "App/GUI classes".bold());
    for (key, class) in results.app_classes() {
        let marker = if class.is_app_class { "app" } else { "gui" };
        println!(
            "  {} [{}] - {} elements, {} methods",
            key.green(),
            marker,
            class.ui_elements.len(),
            class.methods.len()
        );
    }
}

/// Create a writer for the requested format, targeting a file when an
/// output path is given. The terminal format always writes to stdout.
pub fn create_writer(
    format: OutputFormat,
    output: Option<PathBuf>,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    if format == OutputFormat::Terminal && output.is_some() {
        anyhow::bail!("terminal format does not support --output; use json or markdown");
    }

    let sink: Box<dyn Write> = match &output {
        Some(path) => Box::new(std::fs::File::create(path)?),
        None => Box::new(std::io::stdout()),
    };

    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(sink)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new()),
    })
}

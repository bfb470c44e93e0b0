use crate::analyzers::ProjectAnalyzer;
use crate::config;
use crate::core::GeneratedTestSet;
use crate::generators::TestGenerator;
use anyhow::Result;
use colored::*;
use std::path::PathBuf;

pub struct GenerateConfig {
    pub path: PathBuf,
    pub output_dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

pub fn handle_generate(config: GenerateConfig) -> Result<()> {
    let settings = config::load_config(config.config.as_deref())?;

    let analysis = ProjectAnalyzer::new(&config.path)
        .with_ignore_patterns(settings.ignore.patterns)
        .analyze()?;

    let files = TestGenerator::new(&analysis)
        .with_max_method_tests(settings.generation.max_method_tests)
        .generate_tests(config.output_dir.as_deref())?;

    match &config.output_dir {
        Some(dir) => {
            println!(
                "{} {} test files in {}",
                "Generated".green().bold(),
                files.len(),
                dir.display()
            );
        }
        None => print_preview(&files),
    }

    Ok(())
}

/// Dry-run preview: list what would be written, without touching disk.
fn print_preview(files: &GeneratedTestSet) {
    println!(
        "{} ({} files; pass --output-dir to write them):",
        "Would generate".yellow().bold(),
        files.len()
    );
    for (path, content) in files {
        println!("  {} ({} lines)", path.display(), content.lines().count());
    }
}

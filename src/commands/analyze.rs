use crate::analyzers::ProjectAnalyzer;
use crate::config;
use crate::io::output::create_writer;
use anyhow::Result;
use std::path::PathBuf;

pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub format: crate::cli::OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let settings = config::load_config(config.config.as_deref())?;

    let results = ProjectAnalyzer::new(&config.path)
        .with_ignore_patterns(settings.ignore.patterns)
        .analyze()?;

    let mut writer = create_writer(config.format.into(), config.output)?;
    writer.write_results(&results)?;

    Ok(())
}

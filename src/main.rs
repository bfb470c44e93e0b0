use anyhow::Result;
use clap::Parser;
use deskgen::cli::{Cli, Commands};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            format,
            output,
            config,
        } => deskgen::commands::analyze::handle_analyze(build_analyze_config(
            path, format, output, config,
        )),
        Commands::Generate {
            path,
            output_dir,
            config,
        } => deskgen::commands::generate::handle_generate(build_generate_config(
            path, output_dir, config,
        )),
        Commands::Init { force } => deskgen::commands::init::init_config(force),
    }
}

// Pure function to build analyze configuration
fn build_analyze_config(
    path: std::path::PathBuf,
    format: deskgen::cli::OutputFormat,
    output: Option<std::path::PathBuf>,
    config: Option<std::path::PathBuf>,
) -> deskgen::commands::analyze::AnalyzeConfig {
    deskgen::commands::analyze::AnalyzeConfig {
        path,
        format,
        output,
        config,
    }
}

// Pure function to build generate configuration
fn build_generate_config(
    path: std::path::PathBuf,
    output_dir: Option<std::path::PathBuf>,
    config: Option<std::path::PathBuf>,
) -> deskgen::commands::generate::GenerateConfig {
    deskgen::commands::generate::GenerateConfig {
        path,
        output_dir,
        config,
    }
}

// Export modules for library usage
pub mod analyzers;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod generators;
pub mod io;

// Re-export commonly used types
pub use crate::core::{
    AnalysisResult, ClassRecord, FunctionRecord, GeneratedTestSet, GuiFramework, ModuleRecord,
    UiElementRecord,
};

pub use crate::analyzers::{analyze_project, ProjectAnalyzer};

pub use crate::generators::{generate_tests, TestGenerator};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::config::{load_config, DeskgenConfig};

//! Configuration file support (`.deskgen.toml`).
//!
//! The heuristic tables are compiled-in; configuration only tunes walk
//! scope and generation bounds.

use crate::core::errors::Error;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = ".deskgen.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeskgenConfig {
    #[serde(default)]
    pub ignore: IgnoreConfig,

    #[serde(default)]
    pub generation: GenerationConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IgnoreConfig {
    /// Extra glob patterns excluded from the walk.
    #[serde(default)]
    pub patterns: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Cap on method-existence tests per generated class file.
    #[serde(default = "default_max_method_tests")]
    pub max_method_tests: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_method_tests: default_max_method_tests(),
        }
    }
}

fn default_max_method_tests() -> usize {
    crate::generators::DEFAULT_MAX_METHOD_TESTS
}

/// Load configuration. An explicit path must exist; otherwise
/// `.deskgen.toml` in the current directory is used when present, and
/// defaults apply when it is not.
pub fn load_config(path: Option<&Path>) -> Result<DeskgenConfig, Error> {
    let candidate = match path {
        Some(explicit) => {
            if !explicit.is_file() {
                return Err(Error::config(format!(
                    "config file not found: {}",
                    explicit.display()
                )));
            }
            explicit.to_path_buf()
        }
        None => {
            let local = Path::new(CONFIG_FILE_NAME);
            if !local.is_file() {
                return Ok(DeskgenConfig::default());
            }
            local.to_path_buf()
        }
    };

    let content = std::fs::read_to_string(&candidate)?;
    toml::from_str(&content)
        .map_err(|e| Error::config(format!("invalid {}: {}", candidate.display(), e)))
}

/// Default configuration file contents written by `deskgen init`.
pub fn default_config_toml() -> &'static str {
    r#"# Deskgen Configuration

[generation]
max_method_tests = 5

[ignore]
patterns = [
    "build/**",
    "dist/**",
    "docs/**",
]
"#
}

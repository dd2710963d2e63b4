//! Loader for the level RON file at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::LevelConfig;

/// Error type for level loading failures.
#[derive(Debug)]
pub struct LevelLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for LevelLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Load the level configuration from a RON file.
pub fn load_level_config(path: &Path) -> Result<LevelConfig, LevelLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| LevelLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    ron_options()
        .from_str(&contents)
        .map_err(|e| LevelLoadError {
            file: file_name,
            message: format!("Parse error: {}", e),
        })
}

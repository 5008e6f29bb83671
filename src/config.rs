//! Pipeline configuration.
//!
//! `PipelineConfig::default()` is the literal run: numbers `1..=5` with the
//! "Squared Numbers" and "Even Squared Numbers" labels. A TOML file may
//! override any subset of the fields; missing fields keep their defaults.
//!
//! ```toml
//! numbers = [1, 3, 5]
//! squared_label = "Squares"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};

pub const DEFAULT_NUMBERS: [i32; 5] = [1, 2, 3, 4, 5];
pub const DEFAULT_SQUARED_LABEL: &str = "Squared Numbers";
pub const DEFAULT_EVEN_LABEL: &str = "Even Squared Numbers";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    pub numbers: Vec<i32>,
    pub squared_label: String,
    pub even_label: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            numbers: DEFAULT_NUMBERS.to_vec(),
            squared_label: DEFAULT_SQUARED_LABEL.to_string(),
            even_label: DEFAULT_EVEN_LABEL.to_string(),
        }
    }
}

impl PipelineConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| PipelineError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn with_numbers(mut self, numbers: impl Into<Vec<i32>>) -> Self {
        self.numbers = numbers.into();
        self
    }
}

//! Compiler options.
//!
//! Options can be built in code or read from a TOML file:
//!
//! ```toml
//! include_tests = true
//! indent_width = 4
//! references = ["lib/mscorlib.toml", "lib/Widgets.toml"]
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::OptionsError;

const DEFAULT_INDENT_WIDTH: usize = 2;
const MAX_INDENT_WIDTH: usize = 8;

fn default_indent_width() -> usize {
    DEFAULT_INDENT_WIDTH
}

/// Options controlling reference loading and module generation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompilerOptions {
    /// Emit test types and test scaffolding.
    pub include_tests: bool,
    /// Spaces per indentation level in generated script.
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,
    /// Reference metadata files, in the order given.
    pub references: Vec<PathBuf>,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            include_tests: false,
            indent_width: DEFAULT_INDENT_WIDTH,
            references: Vec::new(),
        }
    }
}

impl CompilerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, OptionsError> {
        let options: Self = toml::from_str(text)?;
        options.validate()?;
        Ok(options)
    }

    /// Read options from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, OptionsError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> Result<(), OptionsError> {
        if self.indent_width > MAX_INDENT_WIDTH {
            return Err(OptionsError::InvalidValue {
                name: "indent_width",
                reason: format!("must be at most {MAX_INDENT_WIDTH}, got {}", self.indent_width),
            });
        }
        Ok(())
    }

    // === Builder Methods ===

    /// Enable or disable test emission.
    pub fn with_tests(mut self, include_tests: bool) -> Self {
        self.include_tests = include_tests;
        self
    }

    /// Append a reference path.
    pub fn with_reference(mut self, path: impl Into<PathBuf>) -> Self {
        self.references.push(path.into());
        self
    }

    /// Set the indentation width. Values above the maximum are clamped.
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width.min(MAX_INDENT_WIDTH);
        self
    }
}

//! Reference metadata files.
//!
//! Each reference is described by a TOML manifest:
//!
//! ```toml
//! name = "Foo, Version=1.0.0.0, Culture=neutral, PublicKeyToken=null"
//! references = ["Bar, Version=1.0.0.0, Culture=neutral, PublicKeyToken=null"]
//! attributes = ["System.ScriptAssemblyAttribute"]
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Full type name of the attribute marking an assembly as built for script.
pub const SCRIPT_ASSEMBLY_ATTRIBUTE: &str = "System.ScriptAssemblyAttribute";

/// Errors from reading a metadata file.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("failed to read metadata: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed metadata: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("metadata has an empty assembly name")]
    MissingName,
}

/// Parsed metadata of one referenced assembly.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssemblyMetadata {
    /// Unique full name.
    #[serde(rename = "name")]
    full_name: String,
    /// Full names of the assemblies this one depends on.
    #[serde(default)]
    references: Vec<String>,
    /// Full type names of assembly-level attributes.
    #[serde(default)]
    attributes: Vec<String>,
}

impl AssemblyMetadata {
    /// Create metadata in memory.
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            references: Vec::new(),
            attributes: Vec::new(),
        }
    }

    /// Add a dependency by full name.
    pub fn with_reference(mut self, full_name: impl Into<String>) -> Self {
        self.references.push(full_name.into());
        self
    }

    /// Add an assembly-level attribute.
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attributes.push(attribute.into());
        self
    }

    /// Parse metadata from TOML text.
    pub fn parse(text: &str) -> Result<Self, MetadataError> {
        let metadata: Self = toml::from_str(text)?;
        if metadata.full_name.trim().is_empty() {
            return Err(MetadataError::MissingName);
        }
        Ok(metadata)
    }

    /// Read and parse a metadata file.
    pub fn read(path: &Path) -> Result<Self, MetadataError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn references(&self) -> &[String] {
        &self.references
    }

    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// True if the assembly carries [`SCRIPT_ASSEMBLY_ATTRIBUTE`].
    pub fn is_script_assembly(&self) -> bool {
        self.attributes.iter().any(|a| a == SCRIPT_ASSEMBLY_ATTRIBUTE)
    }
}

//! Error types for the sharpscript back end.
//!
//! ## Error Hierarchy
//!
//! ```text
//! ImportError    - Reference loading and validation errors (with ImportErrorKind)
//! OptionsError   - Compiler option parsing errors
//! ```
//!
//! Import errors are never returned across the resolver boundary. They are
//! reported to an [`ErrorHandler`](crate::ErrorHandler) as they are found and
//! collected so the caller can inspect the full list afterwards.

use std::path::PathBuf;

use thiserror::Error;

// ============================================================================
// Import Errors
// ============================================================================

/// Categories of import errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportErrorKind {
    /// A reference path does not exist.
    MissingFile,
    /// A reference with the same short name was already accepted.
    DuplicateReference,
    /// A reference could not be parsed as metadata.
    LoadFailure,
    /// No core runtime assembly was referenced.
    MissingCoreAssembly,
    /// The core runtime assembly was referenced more than once.
    DuplicateCoreAssembly,
    /// A reference lacks the script assembly marker attribute.
    InvalidScriptAssembly,
}

impl ImportErrorKind {
    /// Returns a human-readable name for this error kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportErrorKind::MissingFile => "missing file",
            ImportErrorKind::DuplicateReference => "duplicate reference",
            ImportErrorKind::LoadFailure => "load failure",
            ImportErrorKind::MissingCoreAssembly => "missing core assembly",
            ImportErrorKind::DuplicateCoreAssembly => "duplicate core assembly",
            ImportErrorKind::InvalidScriptAssembly => "invalid script assembly",
        }
    }
}

impl std::fmt::Display for ImportErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that occur while loading reference metadata.
///
/// The `Display` output is the message reported to the error handler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    /// The referenced file could not be located.
    #[error("The referenced assembly '{}' could not be located.", path.display())]
    MissingFile {
        /// The path as given by the caller.
        path: PathBuf,
    },

    /// A reference with the same short name was already accepted.
    #[error("The referenced assembly '{}' is a duplicate reference.", path.display())]
    DuplicateReference {
        /// The path as given by the caller.
        path: PathBuf,
    },

    /// The file exists but is not readable as reference metadata.
    #[error("The referenced assembly '{}' could not be loaded as an assembly.", path.display())]
    LoadFailure {
        /// The path as given by the caller.
        path: PathBuf,
        /// Why loading failed.
        reason: String,
    },

    /// The core runtime assembly was never referenced.
    #[error("The '{name}' assembly must be referenced.")]
    MissingCoreAssembly {
        /// The reserved core assembly name.
        name: &'static str,
    },

    /// A second core runtime assembly was referenced.
    #[error("The core runtime assembly, {name}.dll must be referenced only once.")]
    DuplicateCoreAssembly {
        /// The reserved core assembly name.
        name: &'static str,
        /// The path of the discarded reference.
        path: PathBuf,
    },

    /// The assembly does not carry the script assembly marker.
    #[error("The assembly '{}' is not a valid script assembly.", path.display())]
    InvalidScriptAssembly {
        /// Absolute path of the offending assembly.
        path: PathBuf,
    },
}

impl ImportError {
    /// Get the kind of this error.
    pub fn kind(&self) -> ImportErrorKind {
        match self {
            ImportError::MissingFile { .. } => ImportErrorKind::MissingFile,
            ImportError::DuplicateReference { .. } => ImportErrorKind::DuplicateReference,
            ImportError::LoadFailure { .. } => ImportErrorKind::LoadFailure,
            ImportError::MissingCoreAssembly { .. } => ImportErrorKind::MissingCoreAssembly,
            ImportError::DuplicateCoreAssembly { .. } => ImportErrorKind::DuplicateCoreAssembly,
            ImportError::InvalidScriptAssembly { .. } => ImportErrorKind::InvalidScriptAssembly,
        }
    }

    /// The file this error is about, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            ImportError::MissingFile { path }
            | ImportError::DuplicateReference { path }
            | ImportError::LoadFailure { path, .. }
            | ImportError::DuplicateCoreAssembly { path, .. }
            | ImportError::InvalidScriptAssembly { path } => Some(path),
            ImportError::MissingCoreAssembly { .. } => None,
        }
    }
}

// ============================================================================
// Options Errors
// ============================================================================

/// Errors that occur while reading compiler options.
#[derive(Debug, Error)]
pub enum OptionsError {
    /// The options file could not be read.
    #[error("failed to read options file: {0}")]
    Io(#[from] std::io::Error),

    /// The options text is not valid TOML for [`CompilerOptions`](crate::CompilerOptions).
    #[error("invalid options: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of range.
    #[error("invalid option '{name}': {reason}")]
    InvalidValue {
        /// The option name.
        name: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

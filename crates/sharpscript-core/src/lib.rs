//! Shared types for the sharpscript back end.
//!
//! ## Modules
//!
//! - [`symbols`]: Read-only symbol model produced by semantic analysis
//! - [`options`]: Compiler options (TOML-loadable)
//! - [`error`]: Error types for reference loading and configuration
//! - [`diagnostics`]: The error-reporting collaborator and a collecting implementation

pub mod diagnostics;
pub mod error;
pub mod options;
pub mod symbols;

pub use diagnostics::{Diagnostic, Diagnostics, ErrorHandler};
pub use error::{ImportError, ImportErrorKind, OptionsError};
pub use options::CompilerOptions;
pub use symbols::{ClassInfo, NamespaceSymbol, SymbolSet, TypeFlags, TypeKind, TypeSymbol, Visibility};

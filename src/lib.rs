//! sharpscript compiler back end.
//!
//! Takes a resolved symbol table and a set of reference metadata files and
//! produces one self-contained script module.
//!
//! ## Crates
//!
//! - [`sharpscript_core`]: Symbol model, options, errors and diagnostics
//! - [`sharpscript_importer`]: Reference loading, validation and dependency order
//! - [`sharpscript_generator`]: Type ordering and module emission
//!
//! [`Compiler`] ties them together.

mod module;

pub use module::{CompileError, Compiler, SymbolAnalyzer};

pub use sharpscript_core::{
    ClassInfo, CompilerOptions, Diagnostic, Diagnostics, ErrorHandler, ImportError,
    ImportErrorKind, NamespaceSymbol, OptionsError, SymbolSet, TypeFlags, TypeKind, TypeSymbol,
    Visibility,
};
pub use sharpscript_generator::{
    ModuleTypes, ScriptGenerator, ScriptWriter, TypeEmitter, compare_types, sort_types,
};
pub use sharpscript_importer::{
    AssemblyMetadata, AssemblyOrder, AssemblySet, CORE_ASSEMBLY_NAME, MetadataError,
    MetadataSource, SCRIPT_ASSEMBLY_ATTRIBUTE, fold_name,
};

//! Reference loading for the sharpscript back end.
//!
//! ## Modules
//!
//! - [`metadata`]: Reference metadata files and the script assembly marker
//! - [`assembly_set`]: Accepted references and their dependency order
//! - [`metadata_source`]: [`MetadataSource`], which loads and validates a reference list

pub mod assembly_set;
pub mod metadata;
pub mod metadata_source;

pub use assembly_set::{AssemblyOrder, AssemblySet, fold_name};
pub use metadata::{AssemblyMetadata, MetadataError, SCRIPT_ASSEMBLY_ATTRIBUTE};
pub use metadata_source::{CORE_ASSEMBLY_NAME, MetadataSource};

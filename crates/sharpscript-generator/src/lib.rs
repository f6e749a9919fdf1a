//! Script module generation for the sharpscript back end.
//!
//! ## Modules
//!
//! - [`writer`]: [`ScriptWriter`], the indenting output sink
//! - [`ordering`]: Emission order of types
//! - [`emitter`]: [`TypeEmitter`], the per-type emission collaborator
//! - [`script_generator`]: [`ScriptGenerator`], which emits the wrapped module

pub mod emitter;
pub mod ordering;
pub mod script_generator;
pub mod writer;

pub use emitter::TypeEmitter;
pub use ordering::{compare_types, sort_types};
pub use script_generator::{ModuleTypes, ScriptGenerator};
pub use writer::ScriptWriter;

//! High-level compilation pipeline.
//!
//! [`Compiler`] runs the back end in order:
//! 1. Load and validate the reference metadata listed in the options
//! 2. Hand the validated references to a [`SymbolAnalyzer`]
//! 3. Generate the script module from the resulting symbol set
//!
//! # Example
//!
//! ```ignore
//! use sharpscript::{Compiler, CompilerOptions, Diagnostics};
//!
//! let options = CompilerOptions::from_file("build.toml")?;
//! let mut diagnostics = Diagnostics::new();
//!
//! let script = Compiler::new(options).compile(&mut analyzer, &mut emitter, &mut diagnostics)?;
//! std::fs::write("app.js", script)?;
//! ```

use sharpscript_core::{CompilerOptions, ErrorHandler, SymbolSet};
use sharpscript_generator::{ScriptGenerator, TypeEmitter};
use sharpscript_importer::MetadataSource;

/// Semantic analysis, run between reference loading and generation.
pub trait SymbolAnalyzer {
    /// Build the program's symbol set against the loaded references.
    ///
    /// Errors are reported to `error_handler`; returning `None` aborts compilation.
    fn analyze(
        &mut self,
        references: &MetadataSource,
        error_handler: &mut dyn ErrorHandler,
    ) -> Option<SymbolSet>;
}

impl<F> SymbolAnalyzer for F
where
    F: FnMut(&MetadataSource, &mut dyn ErrorHandler) -> Option<SymbolSet>,
{
    fn analyze(
        &mut self,
        references: &MetadataSource,
        error_handler: &mut dyn ErrorHandler,
    ) -> Option<SymbolSet> {
        self(references, error_handler)
    }
}

/// Drives reference loading, analysis and generation.
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    options: CompilerOptions,
}

impl Compiler {
    pub fn new(options: CompilerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    /// Load and validate the configured references.
    ///
    /// Returns the loaded references, or the number of errors reported.
    pub fn load_references(
        &self,
        error_handler: &mut dyn ErrorHandler,
    ) -> Result<MetadataSource, CompileError> {
        let mut references = MetadataSource::new();
        if references.load_references(&self.options.references, error_handler) {
            return Err(CompileError::References {
                count: references.errors().len(),
            });
        }
        Ok(references)
    }

    /// Generate the module for an analyzed symbol set. Cannot fail.
    pub fn generate<E: TypeEmitter>(&self, symbols: &SymbolSet, emitter: E) -> String {
        let mut generator = ScriptGenerator::new(self.options.clone(), emitter);
        generator.generate_script(symbols);
        generator.finish()
    }

    /// Run the full pipeline.
    ///
    /// Reference errors abort before analysis, and analysis failure aborts
    /// before generation; in both cases `error_handler` holds the details.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn compile<A, E>(
        &self,
        analyzer: &mut A,
        emitter: E,
        error_handler: &mut dyn ErrorHandler,
    ) -> Result<String, CompileError>
    where
        A: SymbolAnalyzer + ?Sized,
        E: TypeEmitter,
    {
        let references = {
            #[cfg(feature = "profiling")]
            profiling::scope!("references");

            self.load_references(error_handler)?
        };

        let symbols = {
            #[cfg(feature = "profiling")]
            profiling::scope!("analysis");

            analyzer
                .analyze(&references, error_handler)
                .ok_or(CompileError::Analysis)?
        };

        #[cfg(feature = "profiling")]
        profiling::scope!("generation");

        Ok(self.generate(&symbols, emitter))
    }
}

/// Errors that abort compilation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// Reference loading reported errors
    #[error("{count} error(s) while loading references")]
    References { count: usize },

    /// Semantic analysis produced no symbol set
    #[error("semantic analysis failed")]
    Analysis,
}

//! Loading and validating reference metadata.

use std::path::{Path, PathBuf};

use sharpscript_core::{ErrorHandler, ImportError};

use crate::{AssemblyMetadata, AssemblySet, fold_name};

/// Short name of the core runtime assembly.
pub const CORE_ASSEMBLY_NAME: &str = "mscorlib";

/// The validated set of references a compilation runs against.
///
/// Exactly one reference must be the core runtime assembly; the rest are
/// kept in dependency order (producers before consumers).
#[derive(Debug, Default)]
pub struct MetadataSource {
    core_assembly_path: Option<PathBuf>,
    core_assembly_metadata: Option<AssemblyMetadata>,
    assembly_set: AssemblySet,
    assembly_paths: Vec<PathBuf>,
    has_reference_cycle: bool,
    errors: Vec<ImportError>,
}

impl MetadataSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load, validate and order the given references.
    ///
    /// Every problem is reported to `error_handler` as it is found and
    /// loading continues with the next reference. Returns `true` if any
    /// error was reported; [`errors`](Self::errors) then holds the full list.
    #[tracing::instrument(skip_all, fields(references = references.len()))]
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn load_references<P: AsRef<Path>>(
        &mut self,
        references: &[P],
        error_handler: &mut dyn ErrorHandler,
    ) -> bool {
        *self = Self::default();

        for reference in references {
            self.load_reference(reference.as_ref(), error_handler);
        }

        match (&self.core_assembly_path, &self.core_assembly_metadata) {
            (Some(path), Some(metadata)) => {
                if !metadata.is_script_assembly() {
                    let err = ImportError::InvalidScriptAssembly { path: path.clone() };
                    self.report(err, error_handler);
                }
            }
            _ => {
                let err = ImportError::MissingCoreAssembly {
                    name: CORE_ASSEMBLY_NAME,
                };
                self.report(err, error_handler);
            }
        }

        let invalid: Vec<PathBuf> = self
            .assembly_set
            .iter()
            .filter(|(_, metadata)| !metadata.is_script_assembly())
            .map(|(path, _)| path.to_path_buf())
            .collect();
        for path in invalid {
            self.report(ImportError::InvalidScriptAssembly { path }, error_handler);
        }

        let order = self.assembly_set.ordered();
        if order.has_cycle {
            tracing::warn!("reference graph contains a cycle; dependency order is partial");
        }
        self.assembly_paths = order.paths;
        self.has_reference_cycle = order.has_cycle;

        tracing::debug!(
            accepted = self.assembly_paths.len(),
            errors = self.errors.len(),
            "references loaded"
        );

        !self.errors.is_empty()
    }

    fn load_reference(&mut self, reference: &Path, error_handler: &mut dyn ErrorHandler) {
        let assembly_path = match std::path::absolute(reference) {
            Ok(path) if path.is_file() => path,
            _ => {
                let err = ImportError::MissingFile {
                    path: reference.to_path_buf(),
                };
                self.report(err, error_handler);
                return;
            }
        };

        let reference_name = match assembly_path.file_stem() {
            Some(stem) => stem.to_string_lossy().into_owned(),
            None => {
                let err = ImportError::MissingFile {
                    path: reference.to_path_buf(),
                };
                self.report(err, error_handler);
                return;
            }
        };

        if self.assembly_set.is_referenced(&reference_name) {
            let err = ImportError::DuplicateReference {
                path: reference.to_path_buf(),
            };
            self.report(err, error_handler);
            return;
        }

        let metadata = match AssemblyMetadata::read(&assembly_path) {
            Ok(metadata) => metadata,
            Err(e) => {
                let err = ImportError::LoadFailure {
                    path: reference.to_path_buf(),
                    reason: e.to_string(),
                };
                self.report(err, error_handler);
                return;
            }
        };

        if fold_name(&reference_name) == fold_name(CORE_ASSEMBLY_NAME) {
            if self.core_assembly_path.is_some() {
                let err = ImportError::DuplicateCoreAssembly {
                    name: CORE_ASSEMBLY_NAME,
                    path: assembly_path,
                };
                self.report(err, error_handler);
            } else {
                tracing::debug!(path = %assembly_path.display(), "core assembly");
                self.core_assembly_path = Some(assembly_path);
                self.core_assembly_metadata = Some(metadata);
            }
        } else {
            tracing::debug!(name = %reference_name, full_name = metadata.full_name(), "reference");
            self.assembly_set
                .add_assembly(assembly_path, &reference_name, metadata);
        }
    }

    fn report(&mut self, err: ImportError, error_handler: &mut dyn ErrorHandler) {
        tracing::warn!(kind = %err.kind(), "{err}");
        let location = err.path().map(|p| p.display().to_string());
        error_handler.report_error(&err.to_string(), location.as_deref());
        self.errors.push(err);
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Absolute path of the core runtime assembly.
    pub fn core_assembly_path(&self) -> Option<&Path> {
        self.core_assembly_path.as_deref()
    }

    /// Metadata of the core runtime assembly.
    pub fn core_assembly_metadata(&self) -> Option<&AssemblyMetadata> {
        self.core_assembly_metadata.as_ref()
    }

    /// Non-core reference paths, dependencies first.
    pub fn assemblies(&self) -> &[PathBuf] {
        &self.assembly_paths
    }

    /// Metadata of a non-core reference by absolute path.
    pub fn metadata(&self, path: &Path) -> Option<&AssemblyMetadata> {
        self.assembly_set.get(path)
    }

    /// Metadata of a non-core reference by short name (case-insensitive).
    pub fn metadata_by_name(&self, reference_name: &str) -> Option<&AssemblyMetadata> {
        self.assembly_set.get_by_name(reference_name)
    }

    /// Every error reported by the last [`load_references`](Self::load_references).
    pub fn errors(&self) -> &[ImportError] {
        &self.errors
    }

    /// The accepted references depend on each other in a cycle.
    pub fn has_reference_cycle(&self) -> bool {
        self.has_reference_cycle
    }
}

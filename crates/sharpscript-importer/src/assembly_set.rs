//! Accepted non-core references and their dependency order.
//!
//! Ordering uses a `petgraph::DiGraph` with:
//! - Nodes: indices into the accepted reference list
//! - Edges: reference -> dependency, for dependencies present in the set

use std::path::{Path, PathBuf};

use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::{DfsPostOrder, VisitMap};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::AssemblyMetadata;

/// Case-folded key for comparing reference short names.
///
/// Uppercasing maps every Unicode case variant of a letter to one form,
/// including the positional lowercase sigmas.
pub fn fold_name(reference_name: &str) -> String {
    reference_name.to_uppercase()
}

/// One accepted reference.
#[derive(Debug, Clone)]
struct AssemblyEntry {
    path: PathBuf,
    metadata: AssemblyMetadata,
}

/// Result of ordering an [`AssemblySet`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssemblyOrder {
    /// Paths with every dependency before its dependents.
    pub paths: Vec<PathBuf>,
    /// The reference graph contains a cycle. The order is still complete,
    /// but dependencies inside the cycle cannot all precede their users.
    pub has_cycle: bool,
}

/// Working collection of accepted non-core references.
#[derive(Debug, Default)]
pub struct AssemblySet {
    /// Accepted references, in acceptance order.
    entries: Vec<AssemblyEntry>,
    /// Absolute path -> index into `entries`.
    by_path: FxHashMap<PathBuf, usize>,
    /// Folded short name -> index into `entries`.
    by_name: FxHashMap<String, usize>,
    /// Folded short names of every reference seen, for duplicate checks.
    names: FxHashSet<String>,
}

impl AssemblySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a short name was already referenced (case-insensitive).
    pub fn is_referenced(&self, reference_name: &str) -> bool {
        self.names.contains(&fold_name(reference_name))
    }

    /// Add an accepted reference.
    ///
    /// Callers check [`is_referenced`](Self::is_referenced) first; short
    /// names are unique within a set.
    pub fn add_assembly(&mut self, path: PathBuf, reference_name: &str, metadata: AssemblyMetadata) {
        let key = fold_name(reference_name);
        debug_assert!(!self.names.contains(&key), "duplicate reference '{reference_name}'");

        let index = self.entries.len();
        self.by_path.insert(path.clone(), index);
        self.entries.push(AssemblyEntry { path, metadata });
        self.by_name.insert(key.clone(), index);
        self.names.insert(key);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(path, metadata)` in acceptance order.
    pub fn iter(&self) -> impl Iterator<Item = (&Path, &AssemblyMetadata)> {
        self.entries.iter().map(|e| (e.path.as_path(), &e.metadata))
    }

    /// Look up metadata by absolute path.
    pub fn get(&self, path: &Path) -> Option<&AssemblyMetadata> {
        self.by_path.get(path).map(|&i| &self.entries[i].metadata)
    }

    /// Look up metadata by short name (case-insensitive).
    pub fn get_by_name(&self, reference_name: &str) -> Option<&AssemblyMetadata> {
        self.by_name
            .get(&fold_name(reference_name))
            .map(|&i| &self.entries[i].metadata)
    }

    /// Order the references so that every dependency precedes its dependents.
    ///
    /// Dependencies that are not part of this set are ignored. Each node is
    /// marked discovered before its dependencies are explored, so cycles
    /// terminate and every reference appears exactly once.
    pub fn ordered(&self) -> AssemblyOrder {
        let mut graph: DiGraph<usize, ()> = DiGraph::with_capacity(self.entries.len(), 0);
        let mut by_full_name: FxHashMap<&str, NodeIndex> = FxHashMap::default();

        let nodes: Vec<NodeIndex> = (0..self.entries.len()).map(|i| graph.add_node(i)).collect();
        for (entry, &node) in self.entries.iter().zip(&nodes) {
            by_full_name.insert(entry.metadata.full_name(), node);
        }

        for (entry, &node) in self.entries.iter().zip(&nodes) {
            for dependency in entry.metadata.references() {
                if let Some(&target) = by_full_name.get(dependency.as_str()) {
                    graph.add_edge(node, target, ());
                }
            }
        }

        let mut paths = Vec::with_capacity(self.entries.len());
        let mut dfs = DfsPostOrder::empty(&graph);
        for &start in &nodes {
            if dfs.discovered.is_visited(&start) {
                continue;
            }
            dfs.move_to(start);
            while let Some(node) = dfs.next(&graph) {
                paths.push(self.entries[graph[node]].path.clone());
            }
        }

        AssemblyOrder {
            paths,
            has_cycle: is_cyclic_directed(&graph),
        }
    }
}

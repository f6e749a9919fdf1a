//! Symbol model consumed by the module generator.
//!
//! Symbols are produced by semantic analysis and are read-only from the back
//! end's point of view: the generator filters and reorders them but never
//! mutates them.

use bitflags::bitflags;

bitflags! {
    /// Per-type flags recorded by semantic analysis.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TypeFlags: u8 {
        /// Defined by the program being compiled (not only imported).
        const APPLICATION = 1 << 0;
        /// A test type; emitted only when tests are enabled.
        const TEST = 1 << 1;
    }
}

/// Type visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Public,
    Internal,
}

/// Class-only metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ClassInfo {
    /// Base-class hops to the root of the application-visible chain (0 for a root class).
    pub inheritance_depth: u32,
    /// The class only holds top-level functions and is never instantiated.
    pub has_global_methods: bool,
}

/// The kind of a declared type.
///
/// Declaration order is the emission order of the kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Class(ClassInfo),
    Interface,
    Enumeration,
    Delegate,
    /// Struct-like record type.
    Record,
}

impl TypeKind {
    /// Position of this kind in emission order.
    pub fn ordinal(&self) -> u8 {
        match self {
            TypeKind::Class(_) => 0,
            TypeKind::Interface => 1,
            TypeKind::Enumeration => 2,
            TypeKind::Delegate => 3,
            TypeKind::Record => 4,
        }
    }

    /// Check if this is a class.
    pub fn is_class(&self) -> bool {
        matches!(self, TypeKind::Class(_))
    }

    /// Get the class info, if this is a class.
    pub fn as_class(&self) -> Option<&ClassInfo> {
        match self {
            TypeKind::Class(info) => Some(info),
            _ => None,
        }
    }
}

/// A declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSymbol {
    /// Source-level name.
    pub name: String,
    /// Identifier used in generated script, if it differs from `name`.
    pub script_name: Option<String>,
    pub kind: TypeKind,
    pub visibility: Visibility,
    pub flags: TypeFlags,
}

impl TypeSymbol {
    /// Create a public application type.
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            script_name: None,
            kind,
            visibility: Visibility::Public,
            flags: TypeFlags::APPLICATION,
        }
    }

    /// Create a public application class at the given inheritance depth.
    pub fn class(name: impl Into<String>, inheritance_depth: u32) -> Self {
        Self::new(
            name,
            TypeKind::Class(ClassInfo {
                inheritance_depth,
                has_global_methods: false,
            }),
        )
    }

    /// Create a public application interface.
    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Interface)
    }

    /// Create a public application enumeration.
    pub fn enumeration(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Enumeration)
    }

    /// Create a public application delegate.
    pub fn delegate(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Delegate)
    }

    /// Create a public application record.
    pub fn record(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Record)
    }

    // === Builder Methods ===

    /// Mark as internal.
    pub fn internal(mut self) -> Self {
        self.visibility = Visibility::Internal;
        self
    }

    /// Mark as a test type.
    pub fn test(mut self) -> Self {
        self.flags |= TypeFlags::TEST;
        self
    }

    /// Mark as imported (not an application type).
    pub fn imported(mut self) -> Self {
        self.flags.remove(TypeFlags::APPLICATION);
        self
    }

    /// Mark a class as a container for global methods. No effect on other kinds.
    pub fn with_global_methods(mut self) -> Self {
        if let TypeKind::Class(info) = &mut self.kind {
            info.has_global_methods = true;
        }
        self
    }

    /// Set the generated identifier.
    pub fn with_script_name(mut self, script_name: impl Into<String>) -> Self {
        self.script_name = Some(script_name.into());
        self
    }

    // === Queries ===

    /// The identifier used in generated script.
    pub fn generated_name(&self) -> &str {
        self.script_name.as_deref().unwrap_or(&self.name)
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    pub fn is_application_type(&self) -> bool {
        self.flags.contains(TypeFlags::APPLICATION)
    }

    pub fn is_test_type(&self) -> bool {
        self.flags.contains(TypeFlags::TEST)
    }

    /// A class flagged as a test type.
    pub fn is_test_class(&self) -> bool {
        self.kind.is_class() && self.is_test_type()
    }

    /// A class that only holds global methods.
    pub fn has_global_methods(&self) -> bool {
        self.kind.as_class().is_some_and(|info| info.has_global_methods)
    }

    /// Inheritance depth for classes, `None` for other kinds.
    pub fn inheritance_depth(&self) -> Option<u32> {
        self.kind.as_class().map(|info| info.inheritance_depth)
    }
}

/// A named group of types.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NamespaceSymbol {
    pub name: String,
    pub types: Vec<TypeSymbol>,
}

impl NamespaceSymbol {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            types: Vec::new(),
        }
    }

    /// Add a type.
    pub fn with_type(mut self, ty: TypeSymbol) -> Self {
        self.types.push(ty);
        self
    }

    /// True if at least one type is an application type.
    pub fn has_application_types(&self) -> bool {
        self.types.iter().any(TypeSymbol::is_application_type)
    }
}

/// The whole program's symbols.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SymbolSet {
    /// Output module identifier.
    pub script_name: String,
    pub namespaces: Vec<NamespaceSymbol>,
    /// External module dependencies, in discovery order.
    pub dependencies: Vec<String>,
}

impl SymbolSet {
    pub fn new(script_name: impl Into<String>) -> Self {
        Self {
            script_name: script_name.into(),
            namespaces: Vec::new(),
            dependencies: Vec::new(),
        }
    }

    /// Add a namespace.
    pub fn with_namespace(mut self, namespace: NamespaceSymbol) -> Self {
        self.namespaces.push(namespace);
        self
    }

    /// Add an external module dependency.
    pub fn with_dependency(mut self, dependency: impl Into<String>) -> Self {
        self.dependencies.push(dependency.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_ordinals_follow_declaration_order() {
        let kinds = [
            TypeKind::Class(ClassInfo::default()),
            TypeKind::Interface,
            TypeKind::Enumeration,
            TypeKind::Delegate,
            TypeKind::Record,
        ];
        let ordinals: Vec<_> = kinds.iter().map(TypeKind::ordinal).collect();
        assert_eq!(ordinals, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn builder_flags() {
        let ty = TypeSymbol::class("Program", 0)
            .internal()
            .test()
            .with_global_methods();

        assert!(!ty.is_public());
        assert!(ty.is_application_type());
        assert!(ty.is_test_class());
        assert!(ty.has_global_methods());
        assert_eq!(ty.inheritance_depth(), Some(0));
    }

    #[test]
    fn global_methods_only_apply_to_classes() {
        let ty = TypeSymbol::interface("IThing").with_global_methods();
        assert!(!ty.has_global_methods());
        assert!(!ty.is_test_class());
        assert_eq!(ty.inheritance_depth(), None);
    }

    #[test]
    fn generated_name_prefers_script_name() {
        let plain = TypeSymbol::class("Widget", 0);
        assert_eq!(plain.generated_name(), "Widget");

        let renamed = TypeSymbol::class("Widget", 0).with_script_name("widget");
        assert_eq!(renamed.generated_name(), "widget");
    }

    #[test]
    fn namespace_application_types() {
        let imported = NamespaceSymbol::new("System")
            .with_type(TypeSymbol::class("Object", 0).imported());
        assert!(!imported.has_application_types());

        let mixed = imported.with_type(TypeSymbol::class("Widget", 1));
        assert!(mixed.has_application_types());

        assert!(!NamespaceSymbol::new("Empty").has_application_types());
    }

    #[test]
    fn symbol_set_builders() {
        let symbols = SymbolSet::new("app")
            .with_namespace(NamespaceSymbol::new("A").with_type(TypeSymbol::class("X", 0)))
            .with_namespace(NamespaceSymbol::new("B").with_type(TypeSymbol::enumeration("Y")))
            .with_dependency("ss");

        let names: Vec<_> = symbols.namespaces.iter().map(|ns| ns.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
        assert_eq!(symbols.dependencies, ["ss"]);
    }
}

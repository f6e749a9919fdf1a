//! Module generation.
//!
//! [`ScriptGenerator`] turns a [`SymbolSet`] into one AMD-style module:
//!
//! ```text
//! define('<module>', ['<dep>', ...], function(<dep>, ...) {
//!   'use strict';
//!
//!   <type bodies>
//!   var $<module> = ss.module('<module>', <internal types | null>, <public types | null>);
//!
//!   <constructor wiring>
//!   <test scaffolds>
//!
//!   return $<module>;
//! });
//! ```
//!
//! Bodies, registration thunks, constructor wiring and test scaffolds are
//! written by a [`TypeEmitter`]; the generator owns selection, ordering and
//! the module frame.

use sharpscript_core::{CompilerOptions, SymbolSet, TypeKind, TypeSymbol};

use crate::{ScriptWriter, TypeEmitter, sort_types};

/// Types selected for emission, each list in emission order.
#[derive(Debug, Default)]
pub struct ModuleTypes<'a> {
    /// Every selected type, sorted.
    pub types: Vec<&'a TypeSymbol>,
    /// Selected public types, sorted.
    pub public: Vec<&'a TypeSymbol>,
    /// Selected internal types, sorted.
    pub internal: Vec<&'a TypeSymbol>,
}

impl<'a> ModuleTypes<'a> {
    /// Select the types of `symbols` that need code and sort them.
    ///
    /// Skipped: imported types, delegates, test types unless `include_tests`,
    /// and internal enumerations (their values are inlined at use sites).
    pub fn collect(symbols: &'a SymbolSet, include_tests: bool) -> Self {
        let mut selected = Self::default();

        for namespace in &symbols.namespaces {
            if !namespace.has_application_types() {
                continue;
            }
            for ty in &namespace.types {
                if !ty.is_application_type() {
                    continue;
                }
                if ty.kind == TypeKind::Delegate {
                    continue;
                }
                if ty.is_test_type() && !include_tests {
                    continue;
                }
                if ty.kind == TypeKind::Enumeration && !ty.is_public() {
                    continue;
                }

                selected.types.push(ty);
                if ty.is_public() {
                    selected.public.push(ty);
                } else {
                    selected.internal.push(ty);
                }
            }
        }

        sort_types(&mut selected.types);
        sort_types(&mut selected.public);
        sort_types(&mut selected.internal);
        selected
    }
}

/// Generates the script module for a symbol set.
pub struct ScriptGenerator<E> {
    writer: ScriptWriter,
    options: CompilerOptions,
    emitter: E,
}

impl<E: TypeEmitter> ScriptGenerator<E> {
    pub fn new(options: CompilerOptions, emitter: E) -> Self {
        Self {
            writer: ScriptWriter::new(options.indent_width),
            options,
            emitter,
        }
    }

    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    pub fn writer(&self) -> &ScriptWriter {
        &self.writer
    }

    pub fn emitter(&self) -> &E {
        &self.emitter
    }

    /// Consume the generator, returning the generated text.
    pub fn finish(self) -> String {
        self.writer.into_string()
    }

    /// Generate the module for `symbols`.
    #[tracing::instrument(skip_all, fields(module = %symbols.script_name))]
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn generate_script(&mut self, symbols: &SymbolSet) {
        let start_level = self.writer.indent_level();
        let selected = ModuleTypes::collect(symbols, self.options.include_tests);
        let module_name = symbols.script_name.as_str();

        tracing::debug!(
            types = selected.types.len(),
            public = selected.public.len(),
            internal = selected.internal.len(),
            dependencies = symbols.dependencies.len(),
            "generating module"
        );

        self.write_header(module_name, &symbols.dependencies);

        for ty in &selected.types {
            self.emitter.emit_type(&mut self.writer, ty);
        }

        self.write_registration(module_name, &selected);

        for ty in selected.types.iter().filter(|t| t.kind.is_class()) {
            self.emitter.emit_class_constructor(&mut self.writer, ty);
        }

        if self.options.include_tests {
            for ty in selected.types.iter().filter(|t| t.is_test_class()) {
                self.emitter.emit_test_scaffold(&mut self.writer, ty);
            }
        }

        self.writer.new_line();
        self.writer.write_line(&format!("return ${module_name};"));

        self.writer.outdent();
        self.writer.write_line("});");

        debug_assert_eq!(
            self.writer.indent_level(),
            start_level,
            "unbalanced indentation after generating '{module_name}'"
        );
    }

    /// `define(...)` opener and strict-mode marker.
    ///
    /// Names and parameters come from the same slice so position `i` of one
    /// always matches position `i` of the other.
    fn write_header(&mut self, module_name: &str, dependencies: &[String]) {
        let names: Vec<String> = dependencies.iter().map(|d| format!("'{d}'")).collect();

        self.writer.write(&format!(
            "define('{module_name}', [{}], function({}) {{",
            names.join(", "),
            dependencies.join(", ")
        ));
        self.writer.new_line();
        self.writer.indent();
        self.writer.write_line("'use strict';");
        self.writer.new_line();
    }

    fn write_registration(&mut self, module_name: &str, selected: &ModuleTypes<'_>) {
        self.writer
            .write(&format!("var ${module_name} = ss.module('{module_name}',"));
        self.write_registration_bucket(&selected.internal);
        self.writer.write(",");
        self.write_registration_bucket(&selected.public);
        self.writer.write_line(");");
        self.writer.new_line();
    }

    /// Object literal of `name: thunk` entries for one visibility, or `null`.
    ///
    /// Global-method classes are never registered.
    fn write_registration_bucket(&mut self, types: &[&TypeSymbol]) {
        if types.is_empty() {
            self.writer.write(" null");
            return;
        }

        self.writer.new_line();
        self.writer.indent();
        self.writer.write_line("{");
        self.writer.indent();

        let mut first = true;
        for ty in types {
            if ty.has_global_methods() {
                continue;
            }
            if !first {
                self.writer.write_line(",");
            }
            self.writer.write(&format!("{}: ", ty.generated_name()));
            self.emitter.emit_registration(&mut self.writer, ty);
            first = false;
        }

        self.writer.outdent();
        self.writer.new_line();
        self.writer.write("}");
        self.writer.outdent();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sharpscript_core::NamespaceSymbol;

    /// Emitter writing one marker line per call and recording the calls.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl TypeEmitter for Recorder {
        fn emit_type(&mut self, writer: &mut ScriptWriter, ty: &TypeSymbol) {
            self.calls.push(format!("type {}", ty.name));
            writer.write_line(&format!("// type {}", ty.name));
        }

        fn emit_registration(&mut self, writer: &mut ScriptWriter, ty: &TypeSymbol) {
            self.calls.push(format!("reg {}", ty.name));
            writer.write(&format!("${}", ty.generated_name()));
        }

        fn emit_class_constructor(&mut self, writer: &mut ScriptWriter, class: &TypeSymbol) {
            self.calls.push(format!("ctor {}", class.name));
            writer.write_line(&format!("// ctor {}", class.name));
        }

        fn emit_test_scaffold(&mut self, writer: &mut ScriptWriter, class: &TypeSymbol) {
            self.calls.push(format!("test {}", class.name));
            writer.write_line(&format!("// test {}", class.name));
        }
    }

    fn generate(symbols: &SymbolSet, include_tests: bool) -> (String, Vec<String>) {
        let mut recorder = Recorder::default();
        let options = CompilerOptions::default().with_tests(include_tests);
        let mut generator = ScriptGenerator::new(options, &mut recorder);
        generator.generate_script(symbols);
        let output = generator.finish();
        (output, recorder.calls)
    }

    fn calls_with<'a>(calls: &'a [String], prefix: &str) -> Vec<&'a str> {
        calls
            .iter()
            .filter(|c| c.starts_with(prefix))
            .map(String::as_str)
            .collect()
    }

    #[test]
    fn empty_module() {
        let symbols = SymbolSet::new("app");
        let (output, calls) = generate(&symbols, false);

        assert_eq!(
            output,
            "define('app', [], function() {\n\
             \x20 'use strict';\n\
             \n\
             \x20 var $app = ss.module('app', null, null);\n\
             \n\
             \n\
             \x20 return $app;\n\
             });\n"
        );
        assert!(calls.is_empty());
    }

    #[test]
    fn full_module_layout() {
        let symbols = SymbolSet::new("app")
            .with_dependency("ss")
            .with_dependency("jquery")
            .with_namespace(
                NamespaceSymbol::new("App")
                    .with_type(TypeSymbol::class("Helper", 0).internal())
                    .with_type(TypeSymbol::class("Widget", 0)),
            );
        let (output, _) = generate(&symbols, false);

        let expected = "\
define('app', ['ss', 'jquery'], function(ss, jquery) {
  'use strict';

  // type Helper
  // type Widget
  var $app = ss.module('app',
    {
      Helper: $Helper
    },
    {
      Widget: $Widget
    });

  // ctor Helper
  // ctor Widget

  return $app;
});
";
        assert_eq!(output, expected);
    }

    #[test]
    fn public_only_registration() {
        let symbols = SymbolSet::new("app").with_namespace(
            NamespaceSymbol::new("App").with_type(TypeSymbol::class("Widget", 0)),
        );
        let (output, _) = generate(&symbols, false);

        assert!(output.contains("var $app = ss.module('app', null,\n    {\n      Widget: $Widget\n    });"));
    }

    #[test]
    fn registration_entries_are_comma_separated() {
        let symbols = SymbolSet::new("m").with_namespace(
            NamespaceSymbol::new("N")
                .with_type(TypeSymbol::class("A", 0))
                .with_type(TypeSymbol::interface("IB"))
                .with_type(TypeSymbol::enumeration("C")),
        );
        let (output, calls) = generate(&symbols, false);

        assert!(output.contains("      A: $A,\n      IB: $IB,\n      C: $C\n    });"));
        assert_eq!(calls_with(&calls, "reg"), ["reg A", "reg IB", "reg C"]);
    }

    #[test]
    fn bases_before_derived() {
        let symbols = SymbolSet::new("app").with_namespace(
            NamespaceSymbol::new("App")
                .with_type(TypeSymbol::class("Derived", 1))
                .with_type(TypeSymbol::class("Base", 0)),
        );
        let (_, calls) = generate(&symbols, false);

        assert_eq!(calls_with(&calls, "type"), ["type Base", "type Derived"]);
        assert_eq!(calls_with(&calls, "ctor"), ["ctor Base", "ctor Derived"]);
    }

    #[test]
    fn internal_enum_is_skipped() {
        let symbols = SymbolSet::new("app").with_namespace(
            NamespaceSymbol::new("App")
                .with_type(TypeSymbol::enumeration("Hidden").internal())
                .with_type(TypeSymbol::enumeration("Shown")),
        );
        let (output, calls) = generate(&symbols, false);

        assert_eq!(calls, ["type Shown", "reg Shown"]);
        assert!(output.contains("ss.module('app', null,"));
        assert!(!output.contains("Hidden"));
    }

    #[test]
    fn delegates_and_imported_types_are_skipped() {
        let symbols = SymbolSet::new("app")
            .with_namespace(
                NamespaceSymbol::new("App")
                    .with_type(TypeSymbol::delegate("Callback"))
                    .with_type(TypeSymbol::class("Widget", 0))
                    .with_type(TypeSymbol::class("Object", 0).imported()),
            )
            .with_namespace(
                NamespaceSymbol::new("System").with_type(TypeSymbol::class("String", 0).imported()),
            );
        let (_, calls) = generate(&symbols, false);

        assert_eq!(calls, ["type Widget", "reg Widget", "ctor Widget"]);
    }

    #[test]
    fn global_method_classes_are_not_registered() {
        let symbols = SymbolSet::new("app").with_namespace(
            NamespaceSymbol::new("App")
                .with_type(TypeSymbol::class("Program", 0).with_global_methods())
                .with_type(TypeSymbol::class("Widget", 0)),
        );
        let (_, calls) = generate(&symbols, false);

        assert_eq!(calls_with(&calls, "type"), ["type Program", "type Widget"]);
        assert_eq!(calls_with(&calls, "reg"), ["reg Widget"]);
        assert_eq!(calls_with(&calls, "ctor"), ["ctor Program", "ctor Widget"]);
    }

    #[test]
    fn bucket_of_only_global_method_classes_is_empty_literal() {
        let symbols = SymbolSet::new("app").with_namespace(
            NamespaceSymbol::new("App")
                .with_type(TypeSymbol::class("Program", 0).internal().with_global_methods()),
        );
        let (output, _) = generate(&symbols, false);

        assert!(output.contains("ss.module('app',\n    {\n\n    }, null);"));
    }

    #[test]
    fn tests_excluded_by_default() {
        let symbols = SymbolSet::new("app").with_namespace(
            NamespaceSymbol::new("App")
                .with_type(TypeSymbol::class("Widget", 0))
                .with_type(TypeSymbol::class("WidgetTests", 0).test()),
        );

        let (_, calls) = generate(&symbols, false);
        assert!(calls.iter().all(|c| !c.contains("WidgetTests")));

        let (output, calls) = generate(&symbols, true);
        assert_eq!(calls_with(&calls, "test"), ["test WidgetTests"]);
        assert!(output.contains("WidgetTests: $WidgetTests"));
        let scaffold = output.find("// test WidgetTests").expect("scaffold");
        let ctor = output.find("// ctor WidgetTests").expect("ctor");
        assert!(ctor < scaffold);
    }

    #[test]
    fn only_test_classes_get_scaffolds() {
        let symbols = SymbolSet::new("app").with_namespace(
            NamespaceSymbol::new("App")
                .with_type(TypeSymbol::record("Fixture").test())
                .with_type(TypeSymbol::class("Suite", 0).test()),
        );
        let (_, calls) = generate(&symbols, true);
        assert_eq!(calls_with(&calls, "test"), ["test Suite"]);
    }

    #[test]
    fn generated_names_are_used_for_registration() {
        let symbols = SymbolSet::new("app").with_namespace(
            NamespaceSymbol::new("App")
                .with_type(TypeSymbol::class("Widget", 0).with_script_name("UIWidget")),
        );
        let (output, _) = generate(&symbols, false);
        assert!(output.contains("UIWidget: $UIWidget"));
    }

    #[test]
    fn indentation_is_balanced() {
        let symbols = SymbolSet::new("app").with_namespace(
            NamespaceSymbol::new("App")
                .with_type(TypeSymbol::class("A", 0).internal())
                .with_type(TypeSymbol::class("B", 1)),
        );
        let mut generator = ScriptGenerator::new(CompilerOptions::default(), Recorder::default());
        generator.generate_script(&symbols);
        assert_eq!(generator.writer().indent_level(), 0);
        assert!(generator.writer().at_line_start());
        assert_eq!(generator.emitter().calls.len(), 6);
    }

    #[test]
    fn collect_splits_visibility() {
        let symbols = SymbolSet::new("app").with_namespace(
            NamespaceSymbol::new("App")
                .with_type(TypeSymbol::interface("IPublic"))
                .with_type(TypeSymbol::class("Internal", 2).internal())
                .with_type(TypeSymbol::class("Public", 0)),
        );
        let selected = ModuleTypes::collect(&symbols, false);

        let names: Vec<_> = selected.types.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Public", "Internal", "IPublic"]);
        assert_eq!(selected.public.len(), 2);
        assert_eq!(selected.internal.len(), 1);
    }

    #[test]
    fn visibility_lists_are_sorted() {
        let symbols = SymbolSet::new("app").with_namespace(
            NamespaceSymbol::new("App")
                .with_type(TypeSymbol::enumeration("Color"))
                .with_type(TypeSymbol::class("Derived", 1))
                .with_type(TypeSymbol::record("Point").internal())
                .with_type(TypeSymbol::class("Base", 0))
                .with_type(TypeSymbol::class("Helper", 0).internal()),
        );
        let selected = ModuleTypes::collect(&symbols, false);

        let names = |list: &[&TypeSymbol]| -> Vec<String> {
            list.iter().map(|t| t.name.clone()).collect()
        };
        assert_eq!(names(&selected.public), ["Base", "Derived", "Color"]);
        assert_eq!(names(&selected.internal), ["Helper", "Point"]);
    }
}

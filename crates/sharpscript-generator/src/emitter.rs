//! Per-type emission collaborator.

use sharpscript_core::TypeSymbol;

use crate::ScriptWriter;

/// Emits the per-type pieces of a module.
///
/// The module generator decides what is emitted and in which order; an
/// emitter only writes the code for one type at a time. Every method must
/// leave the writer at the indentation depth it found it.
pub trait TypeEmitter {
    /// Emit the full body of a type. Called once per type, in emission order.
    fn emit_type(&mut self, writer: &mut ScriptWriter, ty: &TypeSymbol);

    /// Emit the registration thunk of a type.
    ///
    /// The generator has already written `<name>: ` and ends the entry
    /// itself, so the thunk must not end with a newline.
    fn emit_registration(&mut self, writer: &mut ScriptWriter, ty: &TypeSymbol);

    /// Emit constructor wiring for a class.
    fn emit_class_constructor(&mut self, writer: &mut ScriptWriter, class: &TypeSymbol);

    /// Emit test scaffolding for a test class.
    fn emit_test_scaffold(&mut self, writer: &mut ScriptWriter, class: &TypeSymbol);
}

impl<T: TypeEmitter + ?Sized> TypeEmitter for &mut T {
    fn emit_type(&mut self, writer: &mut ScriptWriter, ty: &TypeSymbol) {
        (**self).emit_type(writer, ty);
    }

    fn emit_registration(&mut self, writer: &mut ScriptWriter, ty: &TypeSymbol) {
        (**self).emit_registration(writer, ty);
    }

    fn emit_class_constructor(&mut self, writer: &mut ScriptWriter, class: &TypeSymbol) {
        (**self).emit_class_constructor(writer, class);
    }

    fn emit_test_scaffold(&mut self, writer: &mut ScriptWriter, class: &TypeSymbol) {
        (**self).emit_test_scaffold(writer, class);
    }
}

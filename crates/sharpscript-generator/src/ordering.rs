//! Emission order of types.
//!
//! Types are grouped by kind, and classes are ordered by inheritance depth.
//! A base class has a strictly smaller depth than any class derived from it,
//! so depth order places every base before its subclasses without walking
//! the hierarchy.

use std::cmp::Ordering;

use sharpscript_core::TypeSymbol;

/// Compare two types for emission order: kind first, then inheritance depth for classes.
pub fn compare_types(x: &TypeSymbol, y: &TypeSymbol) -> Ordering {
    x.kind
        .ordinal()
        .cmp(&y.kind.ordinal())
        .then_with(|| match (x.inheritance_depth(), y.inheritance_depth()) {
            (Some(a), Some(b)) => a.cmp(&b),
            _ => Ordering::Equal,
        })
}

/// Stable-sort types into emission order. Ties keep their input order.
pub fn sort_types(types: &mut [&TypeSymbol]) {
    types.sort_by(|x, y| compare_types(x, y));
}

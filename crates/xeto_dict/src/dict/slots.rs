//! Shared lookup and traversal over parallel code/value slices.
//!
//! Both the inline and the boxed representations store their fields as a
//! `[NameCode]` and a `[Value]` of equal length. Everything that scans
//! fields goes through here, so the fixed arities and the fallback share one
//! implementation.

use std::ops::ControlFlow;

use xeto_names::{NameCode, NameTable};

use crate::Value;

/// Find the value stored under `code`.
///
/// `NameCode::UNKNOWN` never matches and returns before touching the slice.
#[inline]
pub(super) fn find<'a>(names: &[NameCode], vals: &'a [Value], code: NameCode) -> Option<&'a Value> {
    if code.is_unknown() {
        return None;
    }
    names
        .iter()
        .position(|&n| n == code)
        .and_then(|i| vals.get(i))
}

/// Visit every field in construction order.
#[inline]
pub(super) fn each<'a, F>(table: &NameTable, names: &[NameCode], vals: &'a [Value], mut f: F)
where
    F: FnMut(&'a Value, &'static str),
{
    for (&code, val) in names.iter().zip(vals) {
        f(val, table.name(code));
    }
}

/// Visit fields in construction order until the visitor breaks.
#[inline]
pub(super) fn each_while<'a, B, F>(
    table: &NameTable,
    names: &[NameCode],
    vals: &'a [Value],
    mut f: F,
) -> Option<B>
where
    F: FnMut(&'a Value, &'static str) -> ControlFlow<B>,
{
    for (&code, val) in names.iter().zip(vals) {
        if let ControlFlow::Break(result) = f(val, table.name(code)) {
            return Some(result);
        }
    }
    None
}

/// Check the construction invariants: no reserved code, no duplicates.
///
/// Quadratic, so only used in debug assertions.
pub(super) fn well_formed(names: &[NameCode]) -> bool {
    names.iter().enumerate().all(|(i, code)| {
        !code.is_unknown() && !names[..i].contains(code)
    })
}

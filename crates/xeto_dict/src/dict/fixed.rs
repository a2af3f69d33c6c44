//! Inline representation for records of 1 to 8 fields.

use std::ops::ControlFlow;

use xeto_names::{NameCode, SharedNameTable};

use super::{slots, Dict};
use crate::{SchemaRef, Value};

/// Record with exactly `N` fields stored inline.
///
/// The codes and values live in fixed-size arrays inside the record itself,
/// so building one performs a single allocation (the `Arc` in `NameDict`)
/// and lookup scans one contiguous `[NameCode; N]`.
///
/// Only `N` in `1..=8` converts into a `NameDict`.
pub struct FixedDict<const N: usize> {
    table: SharedNameTable,
    names: [NameCode; N],
    vals: [Value; N],
    schema: Option<SchemaRef>,
}

impl<const N: usize> FixedDict<N> {
    pub(crate) fn new(
        table: SharedNameTable,
        names: [NameCode; N],
        vals: [Value; N],
        schema: Option<SchemaRef>,
    ) -> Self {
        debug_assert!(slots::well_formed(&names), "malformed record codes: {names:?}");
        FixedDict {
            table,
            names,
            vals,
            schema,
        }
    }
}

impl<const N: usize> Dict for FixedDict<N> {
    #[inline]
    fn table(&self) -> Option<&SharedNameTable> {
        Some(&self.table)
    }

    #[inline]
    fn schema_ref(&self) -> Option<&SchemaRef> {
        self.schema.as_ref()
    }

    #[inline]
    fn size(&self) -> usize {
        N
    }

    #[inline]
    fn fixed_size(&self) -> Option<usize> {
        Some(N)
    }

    #[inline]
    fn get_code(&self, code: NameCode) -> Option<&Value> {
        slots::find(&self.names, &self.vals, code)
    }

    fn each<'a, F>(&'a self, f: F)
    where
        F: FnMut(&'a Value, &'static str),
    {
        slots::each(&self.table, &self.names, &self.vals, f);
    }

    fn each_while<'a, B, F>(&'a self, f: F) -> Option<B>
    where
        F: FnMut(&'a Value, &'static str) -> ControlFlow<B>,
    {
        slots::each_while(&self.table, &self.names, &self.vals, f)
    }
}

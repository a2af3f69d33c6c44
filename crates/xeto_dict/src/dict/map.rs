//! Fallback representation for records wider than the inline arities.

use std::ops::ControlFlow;

use xeto_names::{NameCode, SharedNameTable};

use super::{slots, Dict};
use crate::{SchemaRef, Value};

/// Record with a variable number of fields in boxed parallel slices.
///
/// Same linear-scan contract as `FixedDict`, bounded by the actual field
/// count instead of a compile-time constant.
pub struct MapDict {
    table: SharedNameTable,
    names: Box<[NameCode]>,
    vals: Box<[Value]>,
    schema: Option<SchemaRef>,
}

impl MapDict {
    pub(crate) fn new(
        table: SharedNameTable,
        names: Box<[NameCode]>,
        vals: Box<[Value]>,
        schema: Option<SchemaRef>,
    ) -> Self {
        debug_assert_eq!(names.len(), vals.len());
        debug_assert!(slots::well_formed(&names), "malformed record codes: {names:?}");
        MapDict {
            table,
            names,
            vals,
            schema,
        }
    }
}

impl Dict for MapDict {
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
        self.names.len()
    }

    /// Not a compile-time constant for this representation.
    #[inline]
    fn fixed_size(&self) -> Option<usize> {
        None
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

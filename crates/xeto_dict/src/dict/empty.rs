//! The zero-field sentinel.

use std::ops::ControlFlow;

use xeto_names::{NameCode, SharedNameTable};

use super::Dict;
use crate::{SchemaRef, Value};

/// The empty record.
///
/// Carries no table and no schema. Every `NameDict::empty()` refers to the
/// single `EMPTY_DICT` instance.
#[derive(Debug)]
pub struct EmptyDict;

pub(super) static EMPTY_DICT: EmptyDict = EmptyDict;

impl Dict for EmptyDict {
    fn table(&self) -> Option<&SharedNameTable> {
        None
    }

    fn schema_ref(&self) -> Option<&SchemaRef> {
        None
    }

    fn size(&self) -> usize {
        0
    }

    fn fixed_size(&self) -> Option<usize> {
        Some(0)
    }

    fn is_empty(&self) -> bool {
        true
    }

    fn get(&self, _name: &str) -> Option<&Value> {
        None
    }

    fn get_code(&self, _code: NameCode) -> Option<&Value> {
        None
    }

    fn each<'a, F>(&'a self, _f: F)
    where
        F: FnMut(&'a Value, &'static str),
    {
    }

    fn each_while<'a, B, F>(&'a self, _f: F) -> Option<B>
    where
        F: FnMut(&'a Value, &'static str) -> ControlFlow<B>,
    {
        None
    }
}

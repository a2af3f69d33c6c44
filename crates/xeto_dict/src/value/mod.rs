//! Record field values.
//!
//! Records hold values opaquely: they compare and return them but never
//! branch on the variant, except for the `id` field which must be a `Ref`.

mod reference;

use std::fmt;
use std::sync::Arc;

use crate::NameDict;

pub use reference::Ref;

/// A field value.
///
/// Cloning is cheap: strings are shared and nested records are handles.
#[derive(Clone, Debug)]
pub enum Value {
    /// Presence-only tag.
    Marker,
    /// Boolean.
    Bool(bool),
    /// Number with optional unit symbol.
    Number(f64, Option<Arc<str>>),
    /// String.
    Str(Arc<str>),
    /// Entity reference.
    Ref(Ref),
    /// Nested record.
    Dict(NameDict),
}

impl Value {
    /// Number with a unit symbol.
    pub fn number_with_unit(val: f64, unit: impl Into<Arc<str>>) -> Self {
        Value::Number(val, Some(unit.into()))
    }

    /// Variant name for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Marker => "Marker",
            Value::Bool(_) => "Bool",
            Value::Number(..) => "Number",
            Value::Str(_) => "Str",
            Value::Ref(_) => "Ref",
            Value::Dict(_) => "Dict",
        }
    }

    #[inline]
    pub fn is_marker(&self) -> bool {
        matches!(self, Value::Marker)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n, _) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_reference(&self) -> Option<&Ref> {
        match self {
            Value::Ref(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&NameDict> {
        match self {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }
}

/// Numbers compare by bit pattern, so equality stays reflexive for NaN.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Marker, Value::Marker) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a, ua), Value::Number(b, ub)) => a.to_bits() == b.to_bits() && ua == ub,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Ref(a), Value::Ref(b)) => a == b,
            (Value::Dict(a), Value::Dict(b)) => a == b,
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n, None)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s.into())
    }
}

impl From<Ref> for Value {
    fn from(r: Ref) -> Self {
        Value::Ref(r)
    }
}

impl From<NameDict> for Value {
    fn from(d: NameDict) -> Self {
        Value::Dict(d)
    }
}

/// Zinc-style literal syntax.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Marker => f.write_str("M"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n, unit) => {
                write!(f, "{n}")?;
                if let Some(unit) = unit {
                    f.write_str(unit)?;
                }
                Ok(())
            }
            Value::Str(s) => write!(f, "{s:?}"),
            Value::Ref(r) => write!(f, "{r}"),
            Value::Dict(d) => write!(f, "{d}"),
        }
    }
}

//! The interned record family.
//!
//! `NameDict` is the handle callers hold. It wraps one of a closed set of
//! representations, chosen once at construction by field count:
//!
//! | Fields | Representation | Storage |
//! |--------|----------------|---------|
//! | 0 | `EmptyDict` | none, shared sentinel |
//! | 1-8 | `FixedDict<N>` | inline `[NameCode; N]` + `[Value; N]` |
//! | 9+ | `MapDict` | boxed slices |
//!
//! Every representation implements `Dict`; `NameDict` forwards to whichever
//! one it holds.

mod empty;
mod fixed;
mod map;
mod slots;

use std::fmt;
use std::ops::ControlFlow;
use std::sync::Arc;

use xeto_names::{NameCode, SharedNameTable};

use crate::{env, DictError, Ref, SchemaRef, Value};

use empty::EMPTY_DICT;
pub use empty::EmptyDict;
pub use fixed::FixedDict;
pub use map::MapDict;

/// Largest field count stored inline.
pub const MAX_FIXED_ARITY: usize = 8;

/// Read-only record contract shared by every representation.
///
/// Implementors supply raw code lookup and traversal; name lookup, the
/// presence checks, identifier access and schema fallback are derived.
pub trait Dict {
    /// Table the stored codes belong to. `None` only for the empty record.
    fn table(&self) -> Option<&SharedNameTable>;

    /// Schema attached at construction, if any.
    fn schema_ref(&self) -> Option<&SchemaRef>;

    /// Number of fields.
    fn size(&self) -> usize;

    /// Field count when it is fixed by the representation, `None` otherwise.
    ///
    /// A pre-sizing hint only.
    fn fixed_size(&self) -> Option<usize>;

    /// Look up a value by code. `NameCode::UNKNOWN` is always absent.
    fn get_code(&self, code: NameCode) -> Option<&Value>;

    /// Call `f(value, name)` for every field in construction order.
    fn each<'a, F>(&'a self, f: F)
    where
        F: FnMut(&'a Value, &'static str);

    /// Call `f(value, name)` in construction order until it breaks.
    ///
    /// Returns the first `Break` payload, or `None` if every call continued.
    fn each_while<'a, B, F>(&'a self, f: F) -> Option<B>
    where
        F: FnMut(&'a Value, &'static str) -> ControlFlow<B>;

    /// True only for the empty sentinel.
    fn is_empty(&self) -> bool {
        false
    }

    /// Look up a value by name.
    ///
    /// Names the table does not know resolve to `NameCode::UNKNOWN` and
    /// return `None` without scanning.
    fn get(&self, name: &str) -> Option<&Value> {
        let code = self.table()?.code(name);
        self.get_code(code)
    }

    /// Look up a value by name, falling back to `def`.
    fn get_or<'a>(&'a self, name: &str, def: &'a Value) -> &'a Value {
        self.get(name).unwrap_or(def)
    }

    /// Look up a value by code, falling back to `def`.
    fn get_code_or<'a>(&'a self, code: NameCode, def: &'a Value) -> &'a Value {
        self.get_code(code).unwrap_or(def)
    }

    fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    fn missing(&self, name: &str) -> bool {
        self.get(name).is_none()
    }

    /// The identifier field.
    ///
    /// Fails with `UnresolvedName("id")` when the record has none.
    fn id(&self) -> Result<&Ref, DictError> {
        match self.get_code(NameCode::ID) {
            Some(Value::Ref(r)) => Ok(r),
            Some(other) => Err(DictError::IdNotRef {
                found: other.kind_name(),
            }),
            None => Err(DictError::unresolved("id")),
        }
    }

    /// Attached schema, or the process-wide default.
    fn schema(&self) -> &SchemaRef {
        match self.schema_ref() {
            Some(schema) => schema,
            None => env::default_schema(),
        }
    }

    /// Name-based access for callers that have no default to offer.
    fn trap(&self, name: &str) -> Result<&Value, DictError> {
        self.get(name).ok_or_else(|| DictError::unresolved(name))
    }

    /// True if any field satisfies `pred`. Stops at the first match.
    fn any<'a, P>(&'a self, mut pred: P) -> bool
    where
        P: FnMut(&'a Value, &'static str) -> bool,
    {
        self.each_while(|val, name| {
            if pred(val, name) {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .is_some()
    }

    /// First field, in construction order, that satisfies `pred`.
    fn find<'a, P>(&'a self, mut pred: P) -> Option<(&'static str, &'a Value)>
    where
        P: FnMut(&'a Value, &'static str) -> bool,
    {
        self.each_while(|val, name| {
            if pred(val, name) {
                ControlFlow::Break((name, val))
            } else {
                ControlFlow::Continue(())
            }
        })
    }

    /// Field names in construction order.
    fn names(&self) -> Vec<&'static str> {
        let mut names = Vec::with_capacity(self.size());
        self.each(|_, name| names.push(name));
        names
    }
}

/// Immutable record handle.
///
/// Cheap to clone (an `Arc` bump) and safe to share across threads; nothing
/// reachable from it is ever mutated.
#[derive(Clone)]
pub struct NameDict(Repr);

#[derive(Clone)]
enum Repr {
    Empty,
    D1(Arc<FixedDict<1>>),
    D2(Arc<FixedDict<2>>),
    D3(Arc<FixedDict<3>>),
    D4(Arc<FixedDict<4>>),
    D5(Arc<FixedDict<5>>),
    D6(Arc<FixedDict<6>>),
    D7(Arc<FixedDict<7>>),
    D8(Arc<FixedDict<8>>),
    Map(Arc<MapDict>),
}

/// Bind `$d` to the held representation and evaluate `$body`.
macro_rules! dispatch {
    ($dict:expr, |$d:ident| $body:expr) => {
        match &$dict.0 {
            Repr::Empty => {
                let $d: &EmptyDict = &EMPTY_DICT;
                $body
            }
            Repr::D1(inner) => {
                let $d: &FixedDict<1> = inner;
                $body
            }
            Repr::D2(inner) => {
                let $d: &FixedDict<2> = inner;
                $body
            }
            Repr::D3(inner) => {
                let $d: &FixedDict<3> = inner;
                $body
            }
            Repr::D4(inner) => {
                let $d: &FixedDict<4> = inner;
                $body
            }
            Repr::D5(inner) => {
                let $d: &FixedDict<5> = inner;
                $body
            }
            Repr::D6(inner) => {
                let $d: &FixedDict<6> = inner;
                $body
            }
            Repr::D7(inner) => {
                let $d: &FixedDict<7> = inner;
                $body
            }
            Repr::D8(inner) => {
                let $d: &FixedDict<8> = inner;
                $body
            }
            Repr::Map(inner) => {
                let $d: &MapDict = inner;
                $body
            }
        }
    };
}

/// `FixedDict<N>` converts into `NameDict` for the inline arities only.
macro_rules! fixed_arities {
    ($($n:tt => $variant:ident),* $(,)?) => {
        $(
            impl From<FixedDict<$n>> for NameDict {
                #[inline]
                fn from(dict: FixedDict<$n>) -> Self {
                    NameDict(Repr::$variant(Arc::new(dict)))
                }
            }
        )*
    };
}

fixed_arities! {
    1 => D1,
    2 => D2,
    3 => D3,
    4 => D4,
    5 => D5,
    6 => D6,
    7 => D7,
    8 => D8,
}

impl From<MapDict> for NameDict {
    fn from(dict: MapDict) -> Self {
        NameDict(Repr::Map(Arc::new(dict)))
    }
}

impl NameDict {
    /// The empty record.
    #[inline]
    pub const fn empty() -> Self {
        NameDict(Repr::Empty)
    }

    /// Build an inline record of exactly `N` fields, `N` in `1..=8`.
    ///
    /// Codes must be unique, issued by `table`, and not `NameCode::UNKNOWN`.
    /// Use `NameDictBuilder` when those properties are not already known.
    pub fn fixed<const N: usize>(
        table: SharedNameTable,
        names: [NameCode; N],
        vals: [Value; N],
        schema: Option<SchemaRef>,
    ) -> Self
    where
        FixedDict<N>: Into<NameDict>,
    {
        FixedDict::new(table, names, vals, schema).into()
    }

    /// Build a record from pairs, picking the representation by count.
    ///
    /// Same preconditions as `fixed`. An empty sequence yields the empty
    /// sentinel and drops `schema`.
    pub fn from_pairs<I>(table: SharedNameTable, pairs: I, schema: Option<SchemaRef>) -> Self
    where
        I: IntoIterator<Item = (NameCode, Value)>,
    {
        let (names, vals): (Vec<NameCode>, Vec<Value>) = pairs.into_iter().unzip();
        Self::from_parts(table, &names, vals, schema)
    }

    /// Build from parallel codes and values of equal length.
    pub(crate) fn from_parts(
        table: SharedNameTable,
        names: &[NameCode],
        vals: Vec<Value>,
        schema: Option<SchemaRef>,
    ) -> Self {
        debug_assert_eq!(names.len(), vals.len());
        match names.len() {
            0 => NameDict::empty(),
            1 => inline::<1>(table, names, vals, schema),
            2 => inline::<2>(table, names, vals, schema),
            3 => inline::<3>(table, names, vals, schema),
            4 => inline::<4>(table, names, vals, schema),
            5 => inline::<5>(table, names, vals, schema),
            6 => inline::<6>(table, names, vals, schema),
            7 => inline::<7>(table, names, vals, schema),
            8 => inline::<8>(table, names, vals, schema),
            _ => MapDict::new(table, names.into(), vals.into_boxed_slice(), schema).into(),
        }
    }

    /// Short name of the held representation: `Empty`, `D1`..`D8` or `Map`.
    pub fn repr_name(&self) -> &'static str {
        match &self.0 {
            Repr::Empty => "Empty",
            Repr::D1(_) => "D1",
            Repr::D2(_) => "D2",
            Repr::D3(_) => "D3",
            Repr::D4(_) => "D4",
            Repr::D5(_) => "D5",
            Repr::D6(_) => "D6",
            Repr::D7(_) => "D7",
            Repr::D8(_) => "D8",
            Repr::Map(_) => "Map",
        }
    }
}

/// Move `N` parallel fields into a `FixedDict<N>`.
///
/// Falls back to `MapDict` if the lengths disagree with `N`.
fn inline<const N: usize>(
    table: SharedNameTable,
    names: &[NameCode],
    vals: Vec<Value>,
    schema: Option<SchemaRef>,
) -> NameDict
where
    FixedDict<N>: Into<NameDict>,
{
    match (<[NameCode; N]>::try_from(names), <[Value; N]>::try_from(vals)) {
        (Ok(names), Ok(vals)) => FixedDict::new(table, names, vals, schema).into(),
        (_, vals) => {
            let vals: Vec<Value> = match vals {
                Ok(vals) => vals.into(),
                Err(vals) => vals,
            };
            MapDict::new(table, names.into(), vals.into_boxed_slice(), schema).into()
        }
    }
}

impl Dict for NameDict {
    #[inline]
    fn table(&self) -> Option<&SharedNameTable> {
        dispatch!(self, |d| d.table())
    }

    #[inline]
    fn schema_ref(&self) -> Option<&SchemaRef> {
        dispatch!(self, |d| d.schema_ref())
    }

    #[inline]
    fn size(&self) -> usize {
        dispatch!(self, |d| d.size())
    }

    #[inline]
    fn fixed_size(&self) -> Option<usize> {
        dispatch!(self, |d| d.fixed_size())
    }

    #[inline]
    fn get_code(&self, code: NameCode) -> Option<&Value> {
        dispatch!(self, |d| d.get_code(code))
    }

    fn each<'a, F>(&'a self, f: F)
    where
        F: FnMut(&'a Value, &'static str),
    {
        dispatch!(self, |d| d.each(f));
    }

    fn each_while<'a, B, F>(&'a self, f: F) -> Option<B>
    where
        F: FnMut(&'a Value, &'static str) -> ControlFlow<B>,
    {
        dispatch!(self, |d| d.each_while(f))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        matches!(self.0, Repr::Empty)
    }
}

impl Default for NameDict {
    fn default() -> Self {
        Self::empty()
    }
}

/// Same names mapped to equal values, in any order.
impl PartialEq for NameDict {
    fn eq(&self, other: &Self) -> bool {
        if self.size() != other.size() {
            return false;
        }
        self.each_while(|val, name| {
            if other.get(name) == Some(val) {
                ControlFlow::Continue(())
            } else {
                ControlFlow::Break(())
            }
        })
        .is_none()
    }
}

impl fmt::Debug for NameDict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.repr_name())?;
        let mut map = f.debug_map();
        self.each(|val, name| {
            map.entry(&name, val);
        });
        map.finish()
    }
}

/// Zinc-style `{name:val, marker}` syntax.
impl fmt::Display for NameDict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        let mut first = true;
        let failed = self.each_while(|val, name| {
            let mut write_field = || -> fmt::Result {
                if !first {
                    f.write_str(", ")?;
                }
                first = false;
                f.write_str(name)?;
                if !val.is_marker() {
                    write!(f, ":{val}")?;
                }
                Ok(())
            };
            match write_field() {
                Ok(()) => ControlFlow::Continue(()),
                Err(err) => ControlFlow::Break(err),
            }
        });
        if let Some(err) = failed {
            return Err(err);
        }
        f.write_str("}")
    }
}

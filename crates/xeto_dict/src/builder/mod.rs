//! Record builder.
//!
//! Stages fields in insertion order, enforces the record invariants that
//! `NameDict`'s constructors only debug-assert, and picks the representation
//! on `build`.

use smallvec::SmallVec;
use xeto_names::{NameCode, SharedNameTable};

use crate::{DictError, NameDict, SchemaRef, Value, MAX_FIXED_ARITY};

/// Assembles a `NameDict` one field at a time.
///
/// # Usage
///
/// ```
/// use xeto_dict::{Dict, NameDictBuilder, Ref, Value};
/// use xeto_names::SharedNameTable;
///
/// let mut builder = NameDictBuilder::new(SharedNameTable::new());
/// builder
///     .add("id", Ref::new("p1"))?
///     .add("point", Value::Marker)?
///     .add("val", 72.5)?;
/// let dict = builder.build();
/// assert_eq!(dict.id()?.id(), "p1");
/// # Ok::<(), xeto_dict::DictError>(())
/// ```
pub struct NameDictBuilder {
    table: SharedNameTable,
    names: SmallVec<[NameCode; MAX_FIXED_ARITY]>,
    vals: SmallVec<[Value; MAX_FIXED_ARITY]>,
    schema: Option<SchemaRef>,
}

impl NameDictBuilder {
    /// Create an empty builder against `table`.
    pub fn new(table: SharedNameTable) -> Self {
        NameDictBuilder {
            table,
            names: SmallVec::new(),
            vals: SmallVec::new(),
            schema: None,
        }
    }

    /// Add a field by name, interning the name if the table lacks it.
    pub fn add(&mut self, name: &str, val: impl Into<Value>) -> Result<&mut Self, DictError> {
        let code = self.table.try_add(name)?;
        self.push(code, val.into())
    }

    /// Add a field by an already-issued code.
    pub fn add_code(&mut self, code: NameCode, val: impl Into<Value>) -> Result<&mut Self, DictError> {
        if code.is_unknown() || self.table.try_name(code).is_none() {
            return Err(DictError::UnknownCode { code });
        }
        self.push(code, val.into())
    }

    /// Attach a schema to the record.
    ///
    /// Dropped if no fields are added: an empty builder yields the shared
    /// empty record, which always reports the process-wide default schema.
    pub fn schema(&mut self, schema: SchemaRef) -> &mut Self {
        self.schema = Some(schema);
        self
    }

    /// Number of staged fields.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    fn push(&mut self, code: NameCode, val: Value) -> Result<&mut Self, DictError> {
        if self.names.contains(&code) {
            return Err(DictError::DuplicateName {
                name: self.table.name(code).to_owned(),
            });
        }
        if code == NameCode::ID && !matches!(val, Value::Ref(_)) {
            return Err(DictError::IdNotRef {
                found: val.kind_name(),
            });
        }
        self.names.push(code);
        self.vals.push(val);
        Ok(self)
    }

    /// Freeze the staged fields into a record.
    #[tracing::instrument(level = "trace", skip_all, fields(size = self.names.len()))]
    pub fn build(self) -> NameDict {
        let NameDictBuilder {
            table,
            names,
            vals,
            schema,
        } = self;
        let dict = NameDict::from_parts(table, &names, vals.into_vec(), schema);
        tracing::trace!(repr = dict.repr_name(), "built record");
        dict
    }
}

impl std::fmt::Debug for NameDictBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NameDictBuilder")
            .field("size", &self.names.len())
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

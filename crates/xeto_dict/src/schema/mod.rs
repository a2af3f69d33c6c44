//! Opaque schema handles.
//!
//! Records carry a schema reference but never interpret it. The only
//! property this crate relies on is its qualified name, used for equality
//! and diagnostics.

use std::fmt;
use std::sync::Arc;

/// Schema metadata a record may be tagged with.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Schema {
    qname: Box<str>,
}

impl Schema {
    /// Qualified name, e.g. `sys::Dict`.
    pub fn qname(&self) -> &str {
        &self.qname
    }
}

/// Shared handle to a `Schema`.
///
/// Cloning is a reference-count bump; many records point at one schema.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SchemaRef(Arc<Schema>);

impl SchemaRef {
    /// Create a handle to a new schema with the given qualified name.
    pub fn new(qname: impl Into<Box<str>>) -> Self {
        SchemaRef(Arc::new(Schema {
            qname: qname.into(),
        }))
    }

    /// True if both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &SchemaRef) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl std::ops::Deref for SchemaRef {
    type Target = Schema;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Debug for SchemaRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SchemaRef({})", self.qname)
    }
}

impl fmt::Display for SchemaRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qname)
    }
}

//! Record errors.
//!
//! Default-valued lookups never fail; absence is reported through `Option`
//! or a caller-supplied default. Only the accessors with no fallback
//! (`id`, `trap`) and the builder return these.

use xeto_names::{NameCode, NameTableError};

/// Error raised by record access or record construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DictError {
    /// The record does not carry the requested field.
    ///
    /// Identifier lookups report the name `"id"`.
    #[error("unresolved name: {name}")]
    UnresolvedName { name: String },

    /// The identifier field holds something other than a `Ref`.
    #[error("'id' must be a Ref, found {found}")]
    IdNotRef { found: &'static str },

    /// A name was added to a builder twice.
    #[error("duplicate name: {name}")]
    DuplicateName { name: String },

    /// A field was added under the reserved unknown code or a code the
    /// table never issued.
    #[error("unknown name code: {}", code.raw())]
    UnknownCode { code: NameCode },

    /// The name table refused to intern a name.
    #[error(transparent)]
    Table(#[from] NameTableError),
}

impl DictError {
    /// Create an unresolved-name error.
    pub fn unresolved(name: impl Into<String>) -> Self {
        DictError::UnresolvedName { name: name.into() }
    }

    /// True for the unresolved-name kind.
    pub fn is_unresolved(&self) -> bool {
        matches!(self, DictError::UnresolvedName { .. })
    }
}

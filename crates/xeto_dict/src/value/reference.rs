//! Identifier values.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Reference to an entity, the value type of the `id` field.
///
/// Equality and hashing use only the identifier; the display string is
/// presentation.
#[derive(Clone)]
pub struct Ref {
    id: Arc<str>,
    dis: Option<Arc<str>>,
}

impl Ref {
    /// Create a reference without a display string.
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Ref {
            id: id.into(),
            dis: None,
        }
    }

    /// Create a reference with a display string.
    pub fn with_dis(id: impl Into<Arc<str>>, dis: impl Into<Arc<str>>) -> Self {
        Ref {
            id: id.into(),
            dis: Some(dis.into()),
        }
    }

    /// The identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The display string, if any.
    pub fn dis(&self) -> Option<&str> {
        self.dis.as_deref()
    }
}

impl PartialEq for Ref {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Ref {}

impl Hash for Ref {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Ref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ref({self})")
    }
}

impl fmt::Display for Ref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.id)?;
        if let Some(dis) = &self.dis {
            write!(f, " {dis:?}")?;
        }
        Ok(())
    }
}

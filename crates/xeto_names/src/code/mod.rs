//! Interned field-name code.
//!
//! Provides a compact 32-bit code that records store in place of the name
//! string itself.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Interned field-name code.
///
/// Codes are only meaningful relative to the `NameTable` that issued them.
/// They are dense: the table hands out `1, 2, 3, ...` in insertion order.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct NameCode(u32);

impl NameCode {
    /// Sentinel for a name the table does not recognize.
    pub const UNKNOWN: NameCode = NameCode(0);

    /// Reserved code of the identifier field `"id"`.
    pub const ID: NameCode = NameCode(1);

    /// Create from raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        NameCode(raw)
    }

    /// Get raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Index into the issuing table's name storage.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// True for the "not recognized" sentinel.
    #[inline]
    pub const fn is_unknown(self) -> bool {
        self.0 == 0
    }
}

impl Hash for NameCode {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl fmt::Debug for NameCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NameCode({})", self.0)
    }
}

impl Default for NameCode {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

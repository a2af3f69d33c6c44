//! Append-only name-interning table.
//!
//! Translates field-name strings to dense `NameCode`s and back. Codes are
//! stable for the lifetime of the table, and every issued code stays
//! resolvable.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::NameCode;

/// Names every table interns at construction, in code order.
///
/// `"id"` must stay first so it lands on `NameCode::ID`.
const WELL_KNOWN: &[&str] = &[
    "id", "dis", "name", "spec", "kind", "val", "unit", "site", "equip", "point",
];

/// Error when adding a name to the table fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameTableError {
    /// The empty string is reserved for `NameCode::UNKNOWN`.
    #[error("cannot intern the empty name")]
    EmptyName,
    /// The table ran out of codes.
    #[error("name table exceeded capacity: {count} names, max is {}", u32::MAX)]
    Overflow { count: usize },
}

/// Lock-protected table contents.
struct TableInner {
    /// Map from name to its code.
    map: FxHashMap<&'static str, NameCode>,
    /// Names indexed by code. Slot 0 holds the empty string.
    names: Vec<&'static str>,
}

impl TableInner {
    fn with_reserved() -> Self {
        let mut inner = Self {
            map: FxHashMap::default(),
            names: Vec::with_capacity(256),
        };
        // Occupy code 0 so no real name is ever issued the sentinel
        inner.map.insert("", NameCode::UNKNOWN);
        inner.names.push("");
        for (i, &name) in WELL_KNOWN.iter().enumerate() {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "WELL_KNOWN is a short constant list"
            )]
            let code = NameCode::from_raw(i as u32 + 1);
            inner.map.insert(name, code);
            inner.names.push(name);
        }
        inner
    }
}

/// Name-interning table shared by every record built against it.
///
/// # Thread Safety
/// A single `RwLock` guards both directions of the mapping. Interned names
/// are leaked to `'static`, so `name()` hands out references that outlive
/// the read guard and readers never block each other.
pub struct NameTable {
    inner: RwLock<TableInner>,
}

impl NameTable {
    /// Create a new table with the well-known names pre-interned.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(TableInner::with_reserved()),
        }
    }

    /// Resolve a name to its code without interning it.
    ///
    /// Returns `NameCode::UNKNOWN` for names the table has never seen.
    #[inline]
    pub fn code(&self, name: &str) -> NameCode {
        self.inner
            .read()
            .map
            .get(name)
            .copied()
            .unwrap_or(NameCode::UNKNOWN)
    }

    /// Try to intern a name, returning its code.
    ///
    /// Interning a name twice returns the same code.
    pub fn try_add(&self, name: &str) -> Result<NameCode, NameTableError> {
        if name.is_empty() {
            return Err(NameTableError::EmptyName);
        }

        // Fast path: already interned
        if let Some(&code) = self.inner.read().map.get(name) {
            return Ok(code);
        }

        // Slow path: need to insert
        let mut guard = self.inner.write();

        // Double-check after acquiring write lock
        if let Some(&code) = guard.map.get(name) {
            return Ok(code);
        }

        let raw = u32::try_from(guard.names.len()).map_err(|_| NameTableError::Overflow {
            count: guard.names.len(),
        })?;
        let code = NameCode::from_raw(raw);

        // Leak the string to get 'static lifetime
        let leaked: &'static str = Box::leak(name.to_owned().into_boxed_str());
        guard.names.push(leaked);
        guard.map.insert(leaked, code);

        Ok(code)
    }

    /// Intern a name, returning its code.
    ///
    /// # Panics
    /// Panics on the empty name or if the table runs out of codes.
    /// Use `try_add` for fallible interning.
    #[inline]
    pub fn add(&self, name: &str) -> NameCode {
        self.try_add(name).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Look up the name for an issued code.
    ///
    /// # Panics
    /// Panics if `code` was never issued by this table.
    #[inline]
    pub fn name(&self, code: NameCode) -> &'static str {
        self.inner.read().names[code.index()]
    }

    /// Look up the name for a code, or `None` if it was never issued.
    pub fn try_name(&self, code: NameCode) -> Option<&'static str> {
        self.inner.read().names.get(code.index()).copied()
    }

    /// Number of issued codes, including the reserved entries.
    ///
    /// A fresh table is never zero-length: code 0 and the well-known names
    /// are always counted. `is_empty` ignores those entries, so a fresh
    /// table reports `is_empty() == true` with a non-zero `len()`.
    pub fn len(&self) -> usize {
        self.inner.read().names.len()
    }

    /// Check if only the reserved entries are present.
    ///
    /// True until the first name outside the well-known set is added.
    pub fn is_empty(&self) -> bool {
        self.len() <= WELL_KNOWN.len() + 1
    }
}

impl Default for NameTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared handle to a name table.
///
/// Records hold one of these rather than owning the table: the table is
/// long-lived and outlives any single record.
#[derive(Clone)]
pub struct SharedNameTable(Arc<NameTable>);

impl SharedNameTable {
    /// Create a new shared table.
    pub fn new() -> Self {
        SharedNameTable(Arc::new(NameTable::new()))
    }

    /// True if both handles refer to the same table.
    #[inline]
    pub fn ptr_eq(&self, other: &SharedNameTable) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for SharedNameTable {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Deref for SharedNameTable {
    type Target = NameTable;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Debug for SharedNameTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SharedNameTable(len={})", self.len())
    }
}

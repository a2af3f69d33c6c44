//! Process-wide record environment.
//!
//! Holds the default schema handed out by `Dict::schema()` for records that
//! carry none.
//!
//! # Initialization Order
//!
//! The default is resolved on first access and cached for the rest of the
//! process. Call `install_default_schema` before any record asks for its
//! schema to override it; after that the slot is frozen. Environment
//! variables are read at most once, during that first resolution.

use std::sync::OnceLock;

use crate::SchemaRef;

/// Environment variable naming the default schema.
pub const DEFAULT_SCHEMA_VAR: &str = "XETO_DEFAULT_SCHEMA";

/// Qualified name used when `XETO_DEFAULT_SCHEMA` is unset.
pub const FALLBACK_SCHEMA: &str = "sys::Dict";

/// Configuration read from the process environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DictConfig {
    /// Qualified name of the schema assumed by untagged records.
    pub default_schema: String,
}

impl DictConfig {
    /// Read configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Blank values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default_schema = lookup(DEFAULT_SCHEMA_VAR)
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| FALLBACK_SCHEMA.to_owned());
        DictConfig { default_schema }
    }
}

impl Default for DictConfig {
    fn default() -> Self {
        DictConfig {
            default_schema: FALLBACK_SCHEMA.to_owned(),
        }
    }
}

// Global slot for the default schema
static DEFAULT_SCHEMA: OnceLock<SchemaRef> = OnceLock::new();

/// Get the process-wide default schema (lazily initialized).
pub fn default_schema() -> &'static SchemaRef {
    DEFAULT_SCHEMA.get_or_init(|| {
        let config = DictConfig::from_env();
        tracing::debug!(schema = %config.default_schema, "resolved default record schema");
        SchemaRef::new(config.default_schema)
    })
}

/// Install the default schema before it is first resolved.
///
/// Returns the rejected schema if a default is already in place.
pub fn install_default_schema(schema: SchemaRef) -> Result<(), SchemaRef> {
    DEFAULT_SCHEMA.set(schema)?;
    tracing::debug!("installed default record schema");
    Ok(())
}

#[cfg(test)]
mod tests;

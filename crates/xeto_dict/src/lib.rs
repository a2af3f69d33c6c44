//! Xeto Dict - immutable tagged records keyed by interned names
//!
//! A `NameDict` maps a fixed set of `NameCode`s to `Value`s. Records are
//! built once and never mutated. The representation is chosen by field count:
//! - 0 fields: the shared empty sentinel
//! - 1-8 fields: `FixedDict<N>`, codes and values stored inline
//! - 9+ fields: `MapDict`, codes and values in boxed parallel slices
//!
//! All representations answer the same `Dict` contract. Lookup is a linear
//! scan over the codes, which for these sizes beats hashing because it
//! touches one small contiguous array.
//!
//! # Example
//!
//! ```
//! use xeto_dict::{Dict, NameDictBuilder, Value};
//! use xeto_names::SharedNameTable;
//!
//! let table = SharedNameTable::new();
//! let mut builder = NameDictBuilder::new(table);
//! builder.add("dis", "Sensor")?.add("val", 72.5)?;
//! let dict = builder.build();
//!
//! assert_eq!(dict.get("dis"), Some(&Value::from("Sensor")));
//! assert!(dict.missing("unit"));
//! # Ok::<(), xeto_dict::DictError>(())
//! ```

mod builder;
mod dict;
pub mod env;
mod error;
mod schema;
pub mod tracing_setup;
mod value;

pub use builder::NameDictBuilder;
pub use dict::{Dict, EmptyDict, FixedDict, MapDict, NameDict, MAX_FIXED_ARITY};
pub use error::DictError;
pub use schema::{Schema, SchemaRef};
pub use value::{Ref, Value};

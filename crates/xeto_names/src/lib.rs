//! Xeto names - interned field names for tagged records
//!
//! This crate contains the two pieces every record shares:
//! - `NameCode`, a compact 32-bit code standing in for a field name
//! - `NameTable`, the append-only table translating names to codes and back
//!
//! # Reserved Codes
//!
//! - `NameCode::UNKNOWN` (0) is never issued to a real name. Lookups that
//!   resolve a name to it must report "absent" without scanning.
//! - `NameCode::ID` (1) is always the code of `"id"`.

mod code;
mod table;

pub use code::NameCode;
pub use table::{NameTable, NameTableError, SharedNameTable};

//! Installing the process-wide default schema.
//!
//! Lives in its own test binary: the default is frozen on first access, so
//! nothing else in this process may touch it first.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use xeto_dict::env::{default_schema, install_default_schema};
use xeto_dict::{Dict, NameDict, SchemaRef, Value};
use xeto_names::SharedNameTable;

#[test]
fn installed_default_applies_to_untagged_records() {
    let custom = SchemaRef::new("acme::Record");
    install_default_schema(custom.clone()).unwrap();
    assert!(default_schema().ptr_eq(&custom));

    let table = SharedNameTable::new();
    let dict = NameDict::from_pairs(table.clone(), [(table.add("site"), Value::Marker)], None);
    assert_eq!(dict.schema().qname(), "acme::Record");
    assert_eq!(NameDict::empty().schema().qname(), "acme::Record");

    // frozen after the first resolution
    let rejected = install_default_schema(SchemaRef::new("other::Record")).unwrap_err();
    assert_eq!(rejected.qname(), "other::Record");
    assert!(default_schema().ptr_eq(&custom));
}

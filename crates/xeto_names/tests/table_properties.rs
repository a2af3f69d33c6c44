//! Property tests for the name table.
//!
//! Checks that interning is idempotent, codes never collide with the
//! reserved sentinel, and every issued code resolves back to its name.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use proptest::prelude::*;
use xeto_names::{NameCode, NameTable};

fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z][a-zA-Z0-9_]{0,12}").expect("valid regex")
}

proptest! {
    #[test]
    fn add_then_name_roundtrips(names in prop::collection::vec(name_strategy(), 0..64)) {
        let table = NameTable::new();
        for name in &names {
            let code = table.add(name);
            prop_assert_ne!(code, NameCode::UNKNOWN);
            prop_assert_eq!(table.name(code), name.as_str());
            prop_assert_eq!(table.code(name), code);
        }
    }

    #[test]
    fn add_is_idempotent(name in name_strategy()) {
        let table = NameTable::new();
        let first = table.add(&name);
        let len = table.len();
        let second = table.add(&name);
        prop_assert_eq!(first, second);
        prop_assert_eq!(table.len(), len);
    }
}

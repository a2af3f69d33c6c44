//! End-to-end record scenarios: a typical point record, the fallback
//! representation, identifier handling and cross-thread sharing.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use xeto_dict::tracing_setup::init_tracing;
use xeto_dict::{Dict, DictError, NameDict, NameDictBuilder, Ref, Value};
use xeto_names::{NameCode, SharedNameTable};

fn sensor(table: &SharedNameTable) -> NameDict {
    let dis = table.add("dis");
    let kind = table.add("kind");
    let val = table.add("val");
    NameDict::fixed(
        table.clone(),
        [dis, kind, val],
        [Value::from("Sensor"), Value::from("Number"), Value::from(72.5)],
        None,
    )
}

#[test]
fn three_field_sensor_record() {
    init_tracing();
    let table = SharedNameTable::new();
    let dict = sensor(&table);

    assert!(dict.has("kind"));
    assert_eq!(dict.get("kind"), Some(&Value::from("Number")));

    let def = Value::from("n/a");
    assert_eq!(dict.get_or("missingTag", &def), &def);
    assert!(dict.missing("missingTag"));
    assert_eq!(dict.size(), 3);
    assert_eq!(dict.fixed_size(), Some(3));

    let mut visited = Vec::new();
    dict.each(|val, name| visited.push((name, val.clone())));
    assert_eq!(
        visited,
        vec![
            ("dis", Value::from("Sensor")),
            ("kind", Value::from("Number")),
            ("val", Value::from(72.5)),
        ]
    );
}

#[test]
fn nine_field_record_uses_fallback() {
    init_tracing();
    let table = SharedNameTable::new();
    let mut builder = NameDictBuilder::new(table.clone());
    for i in 0..9 {
        builder
            .add(&format!("tag{i}"), Value::from(f64::from(i)))
            .unwrap();
    }
    let wide = builder.build();

    assert_eq!(wide.fixed_size(), None);
    assert_eq!(sensor(&table).fixed_size(), Some(3));

    let def = Value::Marker;
    for i in 0..9 {
        let code = table.code(&format!("tag{i}"));
        assert_ne!(code, NameCode::UNKNOWN);
        assert_eq!(wide.get_code_or(code, &def), &Value::from(f64::from(i)));
    }
    assert_eq!(wide.get_code_or(NameCode::UNKNOWN, &def), &def);
    assert_eq!(wide.get_code_or(table.code("dis"), &def), &def);
}

#[test]
fn empty_record_contract() {
    let empty = NameDict::empty();
    assert!(empty.is_empty());
    assert_eq!(empty.size(), 0);
    let def = Value::from(0.0);
    assert_eq!(empty.get_or("dis", &def), &def);
    assert_eq!(empty.get_code_or(NameCode::ID, &def), &def);
    assert_eq!(empty.id().unwrap_err(), DictError::unresolved("id"));
}

#[test]
fn identifier_roundtrip() {
    let table = SharedNameTable::new();
    let site = Ref::with_dis("site-1", "Headquarters");

    let mut builder = NameDictBuilder::new(table.clone());
    builder
        .add("id", site.clone())
        .unwrap()
        .add("site", Value::Marker)
        .unwrap();
    let dict = builder.build();
    let id = dict.id().unwrap();
    assert_eq!(id, &site);
    assert_eq!(id.dis(), Some("Headquarters"));

    let anonymous = sensor(&table);
    match anonymous.id() {
        Err(DictError::UnresolvedName { name }) => assert_eq!(name, "id"),
        other => panic!("expected unresolved id, got {other:?}"),
    }
}

#[test]
fn trap_reports_requested_name() {
    let table = SharedNameTable::new();
    let dict = sensor(&table);
    assert_eq!(dict.trap("dis").unwrap(), &Value::from("Sensor"));
    let err = dict.trap("curVal").unwrap_err();
    assert_eq!(err.to_string(), "unresolved name: curVal");
}

#[test]
fn records_are_shared_across_threads() {
    let table = SharedNameTable::new();
    let dict = sensor(&table);

    let found: Vec<bool> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let dict = dict.clone();
                s.spawn(move || dict.any(|val, _| val.as_number() == Some(72.5)))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(found, vec![true; 4]);
}

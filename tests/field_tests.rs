use std::collections::HashSet;

use pretty_assertions::assert_eq;
use uuid_field::{DbBackend, Uuid, UuidField, UuidFieldErr, Value, ensure_native_adaptation};

const BACKENDS: [DbBackend; 3] = [DbBackend::Postgres, DbBackend::MySql, DbBackend::Sqlite];

#[test]
fn unsupported_versions_are_config_errors() {
    assert!(UuidField::new(1).is_ok());
    assert!(UuidField::new(3).is_ok());
    assert!(UuidField::new(4).is_ok());
    assert!(UuidField::new(5).is_ok());
    for v in [0, 2, 6, 16] {
        assert!(matches!(UuidField::new(v), Err(UuidFieldErr::Config(_))));
    }
}

#[test]
fn v4_values_are_pairwise_distinct() {
    let field = UuidField::new(4).unwrap();
    let mut seen = HashSet::new();
    for _ in 0..10_000 {
        assert!(seen.insert(field.create_uuid().unwrap()));
    }
}

#[test]
fn round_trip_through_every_backend() {
    let generated = [
        UuidField::new(1).unwrap().create_uuid().unwrap(),
        UuidField::new(4).unwrap().create_uuid().unwrap(),
        UuidField::new(5)
            .unwrap()
            .namespace(Uuid::NAMESPACE_URL)
            .name("https://example.org")
            .create_uuid()
            .unwrap(),
        Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap(),
        Uuid::nil(),
    ];
    let field = UuidField::new(4).unwrap();
    for id in generated {
        for backend in BACKENDS {
            let stored = field.get_db_prep_value(&Value::Uuid(id), backend).unwrap();
            assert_eq!(field.try_from_db(Some(&stored)).unwrap(), Some(id));
        }
    }
}

#[test]
fn dashed_and_undashed_inputs_store_identically() {
    let field = UuidField::new(4).unwrap();
    let dashed = Value::Text("550e8400-e29b-41d4-a716-446655440000".to_owned());
    let undashed = Value::Text("550e8400e29b41d4a716446655440000".to_owned());
    let expected = Uuid::parse_str("550e8400e29b41d4a716446655440000").unwrap();

    for backend in BACKENDS {
        let a = field.get_db_prep_value(&dashed, backend).unwrap();
        let b = field.get_db_prep_value(&undashed, backend).unwrap();
        assert_eq!(a, b);
        assert_eq!(field.try_from_db(Some(&a)).unwrap(), Some(expected));
    }
    assert_eq!(
        field.try_from_db(Some(&dashed)).unwrap(),
        field.try_from_db(Some(&undashed)).unwrap()
    );
}

#[test]
fn auto_v4_save_scenario() {
    // a record whose id column is an auto UUID field
    struct Record {
        id: Option<Uuid>,
    }

    let field = UuidField::new(4).unwrap().auto();
    let mut record = Record { id: None };

    // first insert generates and assigns
    let persisted = field.pre_save(&mut record.id, true).unwrap().unwrap();
    let assigned = record.id.expect("attribute holds the generated value");
    assert_eq!(assigned.get_version_num(), 4);

    // re-fetching the row yields the same UUID on every backend
    for backend in BACKENDS {
        let stored = field.get_db_prep_value(&persisted, backend).unwrap();
        let fetched = field.try_from_db(Some(&stored)).unwrap();
        assert_eq!(fetched, Some(assigned));
    }

    // a second save leaves the value alone
    let persisted = field.pre_save(&mut record.id, false).unwrap();
    assert_eq!(persisted, Some(Value::Uuid(assigned)));
    assert_eq!(record.id, Some(assigned));
}

#[test]
fn v5_generation_is_bit_identical() {
    let make = || {
        UuidField::new(5)
            .unwrap()
            .namespace(Uuid::parse_str("6ba7b810-9dad-11d1-80b4-00c04fd430c8").unwrap())
            .name("example")
            .create_uuid()
            .unwrap()
    };
    assert_eq!(make().as_bytes(), make().as_bytes());
}

#[test]
fn db_type_per_backend() {
    let field = UuidField::new(4).unwrap();
    assert_eq!(field.db_type(DbBackend::Postgres).build(), "uuid");
    assert_eq!(field.db_type(DbBackend::MySql).build(), "binary(16)");
    assert_eq!(field.db_type(DbBackend::Sqlite).build(), "char(32)");
}

#[test]
fn native_adaptation_is_idempotent() {
    assert_eq!(
        ensure_native_adaptation(DbBackend::Postgres),
        ensure_native_adaptation(DbBackend::Postgres)
    );
    assert!(!ensure_native_adaptation(DbBackend::Sqlite));
}

#[test]
fn formfield_defaults() {
    let form = UuidField::new(4).unwrap().formfield();
    assert_eq!(form.get_max_length(), 32);
    assert!(form.is_required());

    // auto fields may be left blank
    let form = UuidField::new(4).unwrap().auto().formfield();
    assert!(!form.is_required());
}

#[test]
fn value_to_string_projection() {
    let field = UuidField::new(4).unwrap();
    let id = field.create_uuid().unwrap();
    let s = field.value_to_string(Some(&id));
    assert_eq!(s.len(), 36);
    assert_eq!(Uuid::parse_str(&s).unwrap(), id);
    assert_eq!(field.value_to_string(None), "");
}

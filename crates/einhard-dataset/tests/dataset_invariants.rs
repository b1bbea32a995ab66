//! Invariant tests for datasets and the registry, driven through the public
//! API only.

#![allow(clippy::unwrap_used)]

use einhard_dataset::{Dataset, DatasetError, DatasetRegistry, ErrorKind};
use einhard_types::{DatasetDefinition, DatatypeDefinition, Observation, ObservationValue};

fn obs(cells: &[(&str, ObservationValue)]) -> Observation {
    cells
        .iter()
        .map(|(k, v)| ((*k).to_owned(), v.clone()))
        .collect()
}

/// Three columns: `a` required, `b` omittable, `c` required.
fn mixed_types() -> Vec<DatatypeDefinition> {
    vec![
        DatatypeDefinition::new("a", "integer", false, "first"),
        DatatypeDefinition::new("b", "real", true, "second"),
        DatatypeDefinition::new("c", "discrete", false, "third"),
    ]
}

// =========================================================================
// Scenarios
// =========================================================================

#[test]
fn survey_accepts_age_and_defaults_note_to_null() {
    let types = vec![
        DatatypeDefinition::new("age", "integer", false, ""),
        DatatypeDefinition::new("note", "discrete", true, ""),
    ];
    let mut survey = Dataset::new("survey", &types, Vec::new()).unwrap();

    survey
        .add_observation(obs(&[("age", ObservationValue::Integer(30))]))
        .unwrap();
    assert_eq!(
        survey.observations(),
        vec![obs(&[
            ("age", ObservationValue::Integer(30)),
            ("note", ObservationValue::Absent),
        ])]
    );

    let err = survey
        .add_observation(obs(&[("note", ObservationValue::from("x"))]))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredValue);
    assert_eq!(survey.len(), 1);
}

#[test]
fn standalone_missing_age_leaves_dataset_empty() {
    let types = vec![
        DatatypeDefinition::new("age", "integer", false, ""),
        DatatypeDefinition::new("note", "discrete", true, ""),
    ];
    let mut survey = Dataset::new("survey", &types, Vec::new()).unwrap();
    assert!(survey
        .add_observation(obs(&[("note", ObservationValue::from("x"))]))
        .is_err());
    assert!(survey.is_empty());
}

#[test]
fn string_type_is_not_registered() {
    let types = vec![DatatypeDefinition::new("x", "string", false, "")];
    let err = Dataset::new("bad", &types, Vec::new()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SchemaValidation);
}

#[test]
fn registry_create_replaces_same_name() {
    let mut registry = DatasetRegistry::new();
    let first = DatasetDefinition {
        name: String::from("survey"),
        datatypes: vec![DatatypeDefinition::new("age", "integer", false, "")],
        observations: vec![obs(&[("age", ObservationValue::Integer(1))])],
    };
    let second = DatasetDefinition {
        name: String::from("survey"),
        datatypes: vec![DatatypeDefinition::new("score", "real", true, "")],
        observations: Vec::new(),
    };
    registry.create(first).unwrap();
    registry.create(second.clone()).unwrap();

    let listed = registry.to_definitions();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed.get("survey"), Some(&second));
}

// =========================================================================
// Properties
// =========================================================================

#[test]
fn every_unregistered_type_name_is_rejected() {
    for type_name in ["string", "text", "bool", "float", "int", "Real", " real", "", "discrete "] {
        let types = vec![DatatypeDefinition::new("x", type_name, true, "")];
        let err = Dataset::new("t", &types, Vec::new()).unwrap_err();
        assert!(
            matches!(err, DatasetError::UnknownType { .. }),
            "{type_name:?} should be rejected"
        );
    }
}

#[test]
fn one_bad_type_rejects_even_after_good_ones() {
    let mut types = mixed_types();
    types.push(DatatypeDefinition::new("d", "complex", true, ""));
    assert!(Dataset::new("t", &types, Vec::new())
        .unwrap_err()
        .is_schema_violation());
}

#[test]
fn unknown_column_in_any_initial_row_rejects_construction() {
    let good = obs(&[
        ("a", ObservationValue::Integer(1)),
        ("c", ObservationValue::from("k")),
    ]);
    let mut bad = good.clone();
    bad.insert(String::from("zzz"), ObservationValue::Integer(0));

    for position in 0..3 {
        let mut rows = vec![good.clone(), good.clone()];
        rows.insert(position, bad.clone());
        let err = Dataset::new("t", &mixed_types(), rows).unwrap_err();
        assert!(err.is_schema_violation());
        assert!(matches!(err, DatasetError::InvalidRow { row, .. } if row == position));
    }
}

#[test]
fn append_fails_exactly_when_a_required_cell_is_missing() {
    let values = [
        None,
        Some(ObservationValue::Absent),
        Some(ObservationValue::Integer(7)),
    ];

    for a in &values {
        for b in &values {
            for c in &values {
                let mut row = Observation::new();
                for (key, cell) in [("a", a), ("b", b), ("c", c)] {
                    if let Some(v) = cell {
                        row.insert(key.to_owned(), v.clone());
                    }
                }
                let required_present = [a, c]
                    .iter()
                    .all(|cell| cell.as_ref().is_some_and(|v| !v.is_absent()));

                let mut ds = Dataset::new("t", &mixed_types(), Vec::new()).unwrap();
                let result = ds.add_observation(row);
                assert_eq!(result.is_ok(), required_present, "a={a:?} b={b:?} c={c:?}");
                assert_eq!(ds.len(), usize::from(required_present));
            }
        }
    }
}

#[test]
fn appends_grow_in_call_order_and_failures_do_not_count() {
    let mut ds = Dataset::new("t", &mixed_types(), Vec::new()).unwrap();
    let mut accepted = Vec::new();

    for i in 0..20_i64 {
        let row = if i % 3 == 0 {
            obs(&[("a", ObservationValue::Integer(i))])
        } else {
            obs(&[
                ("a", ObservationValue::Integer(i)),
                ("c", ObservationValue::from(format!("row-{i}"))),
            ])
        };
        if ds.add_observation(row).is_ok() {
            accepted.push(i);
        }
        assert_eq!(ds.len(), accepted.len());
    }

    let stored: Vec<i64> = ds
        .observations()
        .iter()
        .filter_map(|r| r.get("a").and_then(ObservationValue::as_i64))
        .collect();
    assert_eq!(stored, accepted);
}

#[test]
fn serialize_then_deserialize_is_identity() {
    let rows = vec![
        obs(&[
            ("a", ObservationValue::Integer(1)),
            ("b", ObservationValue::Real(0.5)),
            ("c", ObservationValue::from("x")),
        ]),
        obs(&[
            ("a", ObservationValue::Integer(-4)),
            ("c", ObservationValue::from("y")),
        ]),
    ];
    let mut original = Dataset::new("round", &mixed_types(), rows).unwrap();
    original
        .add_observation(obs(&[
            ("a", ObservationValue::Integer(9)),
            ("b", ObservationValue::Absent),
            ("c", ObservationValue::from("z")),
        ]))
        .unwrap();

    let json = serde_json::to_string(&original.to_definition()).unwrap();
    let decoded: DatasetDefinition = serde_json::from_str(&json).unwrap();
    let restored = Dataset::from_definition(decoded).unwrap();

    assert_eq!(restored.name(), original.name());
    assert_eq!(restored.datatypes(), original.datatypes());
    assert_eq!(restored.observations(), original.observations());
}

#[test]
fn every_accepted_real_survives_the_json_round_trip() {
    let candidates = [
        0.0,
        -0.0,
        30.0,
        1e20,
        f64::MAX,
        f64::MIN_POSITIVE,
        f64::NAN,
        f64::INFINITY,
        f64::NEG_INFINITY,
    ];
    let mut ds = Dataset::new("reals", &mixed_types(), Vec::new()).unwrap();

    for value in candidates {
        let row = obs(&[
            ("a", ObservationValue::Integer(1)),
            ("b", ObservationValue::Real(value)),
            ("c", ObservationValue::from("x")),
        ]);
        match ds.add_observation(row) {
            Ok(()) => assert!(value.is_finite()),
            Err(err) => {
                assert!(!value.is_finite());
                assert!(matches!(err, DatasetError::NonFiniteValue { .. }));
            }
        }
    }
    assert_eq!(ds.len(), 6);

    let json = serde_json::to_string(&ds).unwrap();
    let restored: Dataset = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, ds);
}

#[test]
fn table_columns_follow_declared_order() {
    let ds = Dataset::new("t", &mixed_types(), Vec::new()).unwrap();
    let columns: Vec<_> = ds.table().column_names().collect();
    assert_eq!(columns, vec!["a", "b", "c"]);
}

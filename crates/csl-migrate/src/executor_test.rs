use super::*;
use crate::edge::TransformError;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
#[error("boom at {0}")]
struct Boom(&'static str);

fn append(tag: &'static str) -> MigrationEdge {
    MigrationEdge::new("x", "y", tag, move |mut data: Document| {
        data["trail"]
            .as_array_mut()
            .ok_or("trail must be an array")?
            .push(json!(tag));
        Ok(data)
    })
}

#[test]
fn test_empty_path_is_identity() {
    let data = json!({"id": "u1", "nested": {"k": [1, 2, 3]}});
    let result = apply_path("User", data.clone(), &[]).unwrap();
    assert_eq!(result, data);
}

#[test]
fn test_applies_in_path_order() {
    let first = append("first");
    let second = append("second");
    let result = apply_path("S", json!({"trail": []}), &[&first, &second]).unwrap();
    assert_eq!(result, json!({"trail": ["first", "second"]}));
}

#[test]
fn test_failure_stops_chain() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let failing = MigrationEdge::new("B", "C", "fails", |_data: Document| {
        Err::<Document, TransformError>(Box::new(Boom("B")))
    });
    let after = MigrationEdge::new("C", "D", "never runs", move |data: Document| {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(data)
    });
    let before = append("before");

    let err = apply_path("S", json!({"trail": []}), &[&before, &failing, &after]).unwrap_err();

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    match &err {
        MigrateError::Transform {
            schema,
            step,
            from,
            to,
            ..
        } => {
            assert_eq!(schema, "S");
            assert_eq!(*step, 1);
            assert_eq!(from, "B");
            assert_eq!(to, "C");
        }
        other => panic!("expected transform error, got {other:?}"),
    }
}

#[test]
fn test_failure_source_is_original_error() {
    let failing = MigrationEdge::new("A", "B", "fails", |_data: Document| {
        Err::<Document, TransformError>(Box::new(Boom("A")))
    });

    let err = apply_path("S", json!({}), &[&failing]).unwrap_err();
    let source = std::error::Error::source(&err).expect("source preserved");
    assert_eq!(source.downcast_ref::<Boom>().unwrap().0, "A");

    let original = err.into_transform_error().unwrap();
    assert_eq!(original.to_string(), "boom at A");
}

use std::cell::Cell;

use resokerr::{FromDict, MessageTrace, Outcome, Severity, ToDict, UnwrapDictError};
use serde_json::json;

#[test]
fn ok_unwrap_returns_value() {
    for v in [0, 1, -7, i64::MAX] {
        assert_eq!(Outcome::<i64, &str>::ok(v).unwrap(), Ok(v));
    }
}

#[test]
fn ok_unwrap_dict_equals_to_dict() {
    let outcome: Outcome<&str, &str> = Outcome::ok_with("payload", MessageTrace::info("cached"));
    let expected = outcome.to_dict().unwrap();
    assert_eq!(outcome.unwrap_dict().unwrap(), expected);
}

#[test]
fn err_unwrap_or_returns_default() {
    let outcome: Outcome<i32, &str> = Outcome::err("boom");
    assert_eq!(outcome.unwrap_or(5), 5);
    assert_eq!(Outcome::<i32, &str>::ok(1).unwrap_or(5), 1);
}

#[test]
fn err_unwrap_fails_with_error_payload() {
    let err = Outcome::<i32, &str>::err("boom").unwrap().unwrap_err();
    assert_eq!(*err.error(), "boom");
    assert!(err.cause().is_none());
}

#[test]
fn unwrap_error_carries_full_cause_chain() {
    let outcome: Outcome<(), &str> = Outcome::err_with(
        "disk full",
        MessageTrace::error("write failed").with_cause(MessageTrace::info("quota is 10GiB")),
    );

    let err = outcome.unwrap().unwrap_err();

    assert_eq!(*err.error(), "disk full");
    let cause = err.cause().unwrap();
    assert_eq!(cause.text(), "write failed");
    assert_eq!(cause.depth(), 2);
}

#[test]
fn unwrap_or_else_receives_failure() {
    let outcome: Outcome<usize, &str> =
        Outcome::err_with("bad", MessageTrace::error("a").with_cause(MessageTrace::info("b")));
    let depth = outcome.unwrap_or_else(|failure| failure.cause().map_or(0, MessageTrace::depth));
    assert_eq!(depth, 2);
}

#[test]
fn map_applies_on_ok_and_keeps_message() {
    let outcome: Outcome<i32, &str> = Outcome::ok_with(20, MessageTrace::info("fetched"));
    let mapped = outcome.map(|x| x + 22);

    assert_eq!(mapped.value(), Some(&42));
    assert_eq!(mapped.trace(), Some(&MessageTrace::info("fetched")));
}

#[test]
fn map_matches_wrapping_the_mapped_value() {
    let f = |x: i32| x * 3;
    assert_eq!(Outcome::<i32, &str>::ok(4).map(f), Outcome::ok(f(4)));
}

#[test]
fn map_never_invokes_closure_on_err() {
    let calls = Cell::new(0);
    let outcome: Outcome<i32, &str> = Outcome::err_with("nope", MessageTrace::error("why"));
    let expected = outcome.clone();

    let mapped = outcome.map(|x| {
        calls.set(calls.get() + 1);
        x + 1
    });

    assert_eq!(calls.get(), 0);
    assert_eq!(mapped, expected);
}

#[test]
fn map_invokes_closure_once_on_ok() {
    let calls = Cell::new(0);
    let _ = Outcome::<i32, &str>::ok(1).map(|x| {
        calls.set(calls.get() + 1);
        x
    });
    assert_eq!(calls.get(), 1);
}

#[test]
fn map_err_keeps_cause() {
    let outcome: Outcome<(), &str> = Outcome::err_with("io", MessageTrace::error("read failed"));
    let mapped = outcome.map_err(|e| format!("wrapped: {e}"));
    assert_eq!(mapped.error().map(String::as_str), Some("wrapped: io"));
    assert_eq!(mapped.trace().unwrap().text(), "read failed");
}

#[test]
fn flat_map_flattens() {
    let g = |x: i32| x * 2;
    let outcome = Outcome::<i32, &str>::ok(21).flat_map(|x| Outcome::ok(g(x)));
    assert_eq!(outcome, Outcome::ok(42));
}

#[test]
fn flat_map_returns_inner_outcome_directly() {
    let outcome: Outcome<i32, &str> = Outcome::ok_with(1, MessageTrace::info("outer"))
        .flat_map(|x| Outcome::ok_with(x + 1, MessageTrace::success("inner")));
    assert_eq!(outcome.trace(), Some(&MessageTrace::success("inner")));
}

#[test]
fn flat_map_short_circuits_err() {
    let calls = Cell::new(0);
    let outcome: Outcome<i32, &str> = Outcome::err("first");
    let result = outcome.flat_map(|x| {
        calls.set(calls.get() + 1);
        Outcome::<i32, &str>::ok(x)
    });
    assert_eq!(calls.get(), 0);
    assert_eq!(result.error(), Some(&"first"));
}

#[test]
fn flat_map_into_err_serializes_without_trace() {
    let outcome = Outcome::<i32, &str>::ok(42)
        .flat_map(|x| if x > 10 { Outcome::err("too big") } else { Outcome::ok(x) });

    assert_eq!(
        serde_json::Value::Object(outcome.to_dict().unwrap()),
        json!({"status": "err", "error": "too big", "trace": null})
    );
}

#[test]
fn ok_downgrades_error_message_to_warning() {
    let outcome: Outcome<i32, &str> = Outcome::ok_with(1, MessageTrace::error("x"));
    let dict = outcome.to_dict().unwrap();
    assert_eq!(dict["trace"]["severity"], "warning");
    assert!(!outcome.has_errors());
    assert!(outcome.has_warnings());
}

#[test]
fn ok_downgrades_every_entry_in_chain() {
    let message = MessageTrace::info("outer")
        .with_cause(MessageTrace::error("middle").with_cause(MessageTrace::error("root")));
    let outcome: Outcome<(), ()> = Outcome::ok_with((), message);

    let severities: Vec<Severity> =
        outcome.trace().unwrap().iter().map(MessageTrace::severity).collect();
    assert_eq!(severities, [Severity::Info, Severity::Warning, Severity::Warning]);
}

#[test]
fn ok_downgrades_on_later_attach() {
    let outcome: Outcome<i32, &str> =
        Outcome::ok(1).with_info("step 1").attach(MessageTrace::error("step 2"));
    let trace = outcome.trace().unwrap();
    assert_eq!(trace.depth(), 2);
    assert_eq!(trace.root_cause().severity(), Severity::Warning);
    assert!(!outcome.has_errors());
}

#[test]
fn standalone_trace_keeps_error_severity() {
    let trace = MessageTrace::error("x");
    let _ = Outcome::<i32, &str>::ok_with(1, trace.clone());
    assert_eq!(trace.severity(), Severity::Error);
}

#[test]
fn err_keeps_error_severity() {
    let outcome: Outcome<(), &str> = Outcome::err_with("e", MessageTrace::error("x"));
    assert!(outcome.has_errors());
    assert_eq!(outcome.to_dict().unwrap()["trace"]["severity"], "error");
}

#[test]
fn builders_append_in_order() {
    let ok: Outcome<bool, &str> =
        Outcome::ok(true).with_info("Step 1 completed").with_warning("Minor issue detected");
    let texts: Vec<&str> = ok.trace().unwrap().iter().map(MessageTrace::text).collect();
    assert_eq!(texts, ["Step 1 completed", "Minor issue detected"]);
    assert!(ok.has_info());
    assert!(ok.has_warnings());

    let err: Outcome<bool, &str> = Outcome::err("invalid input").with_info("Input received");
    assert!(err.has_info());
    assert!(!err.has_errors());
}

#[test]
fn failure_builders_add_error_entries() {
    let failure = resokerr::Failure::new("invalid input")
        .with_error("Validation failed")
        .with_info("Input received");
    let cause = failure.cause().unwrap();
    assert_eq!(cause.severity(), Severity::Error);
    assert_eq!(cause.cause().unwrap().severity(), Severity::Info);

    let outcome: Outcome<(), &str> = failure.into();
    assert!(outcome.has_errors());
}

#[test]
fn status_accessors() {
    let ok: Outcome<i32, &str> = Outcome::ok(1);
    let err: Outcome<i32, &str> = Outcome::err("e");

    assert!(ok.is_ok() && !ok.is_err());
    assert!(err.is_err() && !err.is_ok());
    assert_eq!(ok.value(), Some(&1));
    assert_eq!(ok.error(), None);
    assert_eq!(err.value(), None);
    assert_eq!(err.error(), Some(&"e"));
    assert!(ok.trace().is_none());
}

#[test]
fn ok_to_dict_with_message() {
    let outcome: Outcome<serde_json::Value, String> = Outcome::ok_with(
        json!({"id": 7}),
        MessageTrace::success("created").with_metadata([("table", "users")]),
    );
    assert_eq!(
        serde_json::Value::Object(outcome.to_dict().unwrap()),
        json!({
            "status": "ok",
            "value": {"id": 7},
            "trace": {
                "severity": "success",
                "text": "created",
                "metadata": {"table": "users"},
                "details": null,
                "cause": null
            }
        })
    );
}

#[test]
fn unit_value_serializes_as_null() {
    let dict = Outcome::<(), ()>::ok(()).to_dict().unwrap();
    assert_eq!(dict["value"], serde_json::Value::Null);
    assert!(!dict.contains_key("error"));
}

#[test]
fn unwrap_dict_on_err_fails_with_unwrap_error() {
    let outcome: Outcome<i32, &str> = Outcome::err_with("bad", MessageTrace::error("why"));
    match outcome.unwrap_dict() {
        Err(UnwrapDictError::Unwrap(err)) => {
            assert_eq!(*err.error(), "bad");
            assert_eq!(err.cause().unwrap().text(), "why");
        },
        other => panic!("expected unwrap failure, got {other:?}"),
    }
}

#[test]
fn unwrap_dict_reports_unserializable_value() {
    use std::collections::BTreeMap;

    // JSON object keys must be strings.
    let mut value = BTreeMap::new();
    value.insert((1, 2), "pair");
    let outcome: Outcome<BTreeMap<(i32, i32), &str>, &str> = Outcome::ok(value);

    assert!(matches!(outcome.unwrap_dict(), Err(UnwrapDictError::Invalid(_))));
}

#[test]
fn unwrap_dict_or_uses_default_on_err() {
    let outcome: Outcome<serde_json::Value, &str> = Outcome::err("missing");
    let value = outcome.unwrap_dict_or(json!({"fallback": true})).unwrap();
    assert_eq!(value, json!({"fallback": true}));

    let scalar = Outcome::<i32, &str>::err("missing").unwrap_dict_or(0).unwrap();
    assert_eq!(scalar, json!(0));
}

#[test]
fn unwrap_dict_or_returns_whole_outcome_on_ok() {
    let outcome: Outcome<i32, &str> = Outcome::ok(3);
    let expected = serde_json::Value::Object(outcome.to_dict().unwrap());
    assert_eq!(outcome.unwrap_dict_or(0).unwrap(), expected);
}

#[test]
fn from_dict_round_trip() {
    let ok: Outcome<Vec<u8>, String> =
        Outcome::ok_with(vec![1, 2, 3], MessageTrace::warning("truncated"));
    let err: Outcome<Vec<u8>, String> = Outcome::err_with(
        "unreachable".to_string(),
        MessageTrace::error("connect").with_cause(MessageTrace::info("dns ok")),
    );

    for outcome in [ok, err] {
        let dict = outcome.to_dict().unwrap();
        assert_eq!(Outcome::<Vec<u8>, String>::from_dict(&dict).unwrap(), outcome);
    }
}

#[test]
fn from_dict_downgrades_external_ok_trace() {
    let dict = json!({
        "status": "ok",
        "value": 1,
        "trace": {"severity": "error", "text": "sneaky"}
    });
    let outcome = Outcome::<i32, String>::from_dict(dict.as_object().unwrap()).unwrap();
    assert_eq!(outcome.trace().unwrap().severity(), Severity::Warning);
}

#[test]
fn from_dict_rejects_wrong_payload_type() {
    let dict = json!({"status": "ok", "value": "not a number", "trace": null});
    let err = Outcome::<i32, String>::from_dict(dict.as_object().unwrap()).unwrap_err();
    assert!(matches!(err, resokerr::ValidationError::Serialization(_)));
}

#[test]
fn serde_round_trip_through_json_text() {
    let outcome: Outcome<String, u16> =
        Outcome::err_with(503, MessageTrace::warning("upstream degraded"));
    let text = serde_json::to_string(&outcome).unwrap();
    let parsed: Outcome<String, u16> = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, outcome);

    let rejected = serde_json::from_str::<Outcome<String, u16>>(r#"{"error": 503}"#);
    assert!(rejected.is_err());
}

#[test]
fn into_result_keeps_trace_on_surviving_side() {
    let outcome: Outcome<i32, &str> = Outcome::err_with("e", MessageTrace::error("why"));
    let failure = outcome.into_result().unwrap_err();
    assert_eq!(failure.cause().unwrap().text(), "why");
}

#[test]
fn result_level_metadata() {
    let outcome: Outcome<i32, &str> =
        Outcome::ok(1).with_metadata([("request_id", "r-17")]).with_info("served from cache");

    assert!(outcome.has_metadata());
    assert_eq!(outcome.metadata().unwrap().get("request_id"), Some(&json!("r-17")));

    let mapped = outcome.map(|x| x + 1);
    assert!(mapped.has_metadata());
    assert!(!Outcome::<i32, &str>::ok(1).has_metadata());
}

#[test]
fn metadata_serializes_only_when_set() {
    let plain = Outcome::<i32, &str>::err("e").to_dict().unwrap();
    assert!(!plain.contains_key("metadata"));

    let tagged: Outcome<i32, String> =
        Outcome::err("e".to_string()).with_metadata([("attempt", 3)]);
    let dict = tagged.to_dict().unwrap();
    assert_eq!(dict["metadata"], json!({"attempt": 3}));
    assert_eq!(Outcome::<i32, String>::from_dict(&dict).unwrap(), tagged);
}

#[test]
fn failure_metadata_survives_attach_and_map_error() {
    let failure = resokerr::Failure::new("bad")
        .with_metadata([("table", "users")])
        .with_error("insert failed")
        .map_error(|e| e.len());
    assert_eq!(failure.metadata().unwrap().get("table"), Some(&json!("users")));
}

#[test]
fn value_and_trace_presence() {
    let ok: Outcome<i32, &str> = Outcome::ok(1);
    let err: Outcome<i32, &str> = Outcome::err_with("e", MessageTrace::error("why"));

    assert!(ok.has_value() && !ok.has_trace());
    assert!(!err.has_value() && err.has_trace());
}

#[test]
fn entries_with_filters_chain_by_severity() {
    let outcome: Outcome<(), &str> = Outcome::err_with(
        "e",
        MessageTrace::error("a")
            .with_cause(MessageTrace::info("b").with_cause(MessageTrace::error("c"))),
    );

    let errors: Vec<&str> =
        outcome.entries_with(Severity::Error).iter().map(|entry| entry.text()).collect();
    assert_eq!(errors, ["a", "c"]);
    assert_eq!(outcome.entries_with(Severity::Warning).len(), 0);
    assert!(Outcome::<(), &str>::ok(()).entries_with(Severity::Info).is_empty());
}

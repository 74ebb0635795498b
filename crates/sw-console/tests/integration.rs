//! End-to-end submit pipeline tests.

use std::collections::BTreeMap;

use sw_console::{RawValue, SubmitRequest, submit_graph};
use sw_graph::{GraphItem, GraphKind};
use sw_store::{GraphStore, InMemoryMetricRegistry};

fn text(value: &str) -> RawValue {
    RawValue::Text(value.to_string())
}

fn base_request(name: &str) -> SubmitRequest {
    let mut fields = BTreeMap::new();
    fields.insert("name".to_string(), text(name));
    fields.insert("width".to_string(), text("900"));
    fields.insert("height".to_string(), text("200"));
    SubmitRequest {
        graph_type: GraphKind::Normal,
        prototype: false,
        fields,
        items: vec![GraphItem::new("cpu load")],
    }
}

fn registry() -> InMemoryMetricRegistry {
    InMemoryMetricRegistry::with_metrics(["cpu load", "memory used"])
}

#[test]
fn accepted_submission_changes_the_fingerprint() {
    let mut store = GraphStore::new();
    let before = store.fingerprint().expect("hash");

    let id = submit_graph(&base_request("CPU usage"), &mut store, &registry()).expect("accept");
    assert_eq!(id.get(), 1);
    assert_ne!(store.fingerprint().expect("hash"), before);
    assert_eq!(store.len(), 1);
}

#[test]
fn zero_items_rejects_with_one_entity_message() {
    let mut store = GraphStore::new();
    let mut request = base_request("Empty item");
    request.items.clear();
    let before = store.fingerprint().expect("hash");

    let rejection = submit_graph(&request, &mut store, &registry()).expect_err("reject");
    assert_eq!(rejection.header, "Cannot add graph");
    assert_eq!(
        rejection.details,
        vec!["Missing items for graph \"Empty item\"."]
    );
    assert_eq!(store.fingerprint().expect("hash"), before);
    assert!(store.is_empty());
}

#[test]
fn field_errors_keep_the_store_untouched() {
    let mut store = GraphStore::new();
    let mut request = base_request("");
    request.fields.insert("width".to_string(), text(""));
    request.fields.insert("height".to_string(), text(""));
    let before = store.fingerprint().expect("hash");

    let rejection = submit_graph(&request, &mut store, &registry()).expect_err("reject");
    assert_eq!(rejection.header, "Page received incorrect data");
    assert_eq!(
        rejection.details,
        vec![
            "Incorrect value for field \"Name\": cannot be empty.",
            "Incorrect value \"0\" for \"Width\" field: must be between 20 and 65535.",
            "Incorrect value \"0\" for \"Height\" field: must be between 20 and 65535.",
        ]
    );
    assert_eq!(store.fingerprint().expect("hash"), before);
}

#[test]
fn unchecked_percentile_never_reaches_validation() {
    let mut store = GraphStore::new();
    let mut request = base_request("CPU usage");
    // Value posted, checkbox off: ignored on submit.
    request
        .fields
        .insert("percent_left".to_string(), text("not a number"));

    assert!(submit_graph(&request, &mut store, &registry()).is_ok());
}

#[test]
fn submission_is_deterministic() {
    let request = {
        let mut request = base_request("Broken");
        request.fields.insert("width".to_string(), text("20,5"));
        request
    };

    let first = submit_graph(&request, &mut GraphStore::new(), &registry()).expect_err("reject");
    let second = submit_graph(&request, &mut GraphStore::new(), &registry()).expect_err("reject");
    assert_eq!(first, second);
}

#[test]
fn prototype_headers_and_discover_flag() {
    let mut store = GraphStore::new();
    let mut request = base_request("Proto {#KEY}");
    request.prototype = true;
    request.items.clear();

    // Discover flag missing: field-level mandatory error.
    let rejection = submit_graph(&request, &mut store, &registry()).expect_err("reject");
    assert_eq!(rejection.header, "Page received incorrect data");
    assert_eq!(rejection.details, vec!["Field \"Discover\" is mandatory."]);

    // With the flag present, the empty item list surfaces instead.
    request
        .fields
        .insert("discover".to_string(), RawValue::Flag(true));
    let rejection = submit_graph(&request, &mut store, &registry()).expect_err("reject");
    assert_eq!(rejection.header, "Cannot add graph prototype");
    assert_eq!(
        rejection.details,
        vec!["Missing items for graph prototype \"Proto {#KEY}\"."]
    );
}

#[test]
fn pie_chart_ignores_percentile_and_axis_fields() {
    let mut store = GraphStore::new();
    let mut request = base_request("Pie of usage");
    request.graph_type = GraphKind::Pie;
    request
        .fields
        .insert("visible_percent_left".to_string(), RawValue::Flag(true));
    request
        .fields
        .insert("percent_left".to_string(), text("oops"));
    request
        .fields
        .insert("ymin_type".to_string(), text("Fixed"));
    request.fields.insert("yaxismin".to_string(), text("bad"));

    let id = submit_graph(&request, &mut store, &registry()).expect("accept");
    let record = store.get(id).expect("row");
    assert_eq!(record.kind, GraphKind::Pie);
    assert_eq!(record.percent_left, None);
}

#[test]
fn axis_branch_switching_does_not_leak_values() {
    let mut store = GraphStore::new();

    // The frontend switched ymin Fixed -> Item -> Fixed; per the branch
    // state machine the fixed input arrives blank and must read mandatory.
    let mut request = base_request("Switched axis");
    request.fields.insert("ymin_type".to_string(), text("Fixed"));
    request.fields.insert("yaxismin".to_string(), text(""));

    let rejection = submit_graph(&request, &mut store, &registry()).expect_err("reject");
    assert_eq!(rejection.details, vec!["Field \"yaxismin\" is mandatory."]);
}

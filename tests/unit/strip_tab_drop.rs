use serde_json::json;

use super::*;
use crate::strip::{DropZoneState, InstanceId, StripInput, TabData};

fn strip_with(instance: &str, titles: &[&str]) -> TabStrip {
    let mut strip = TabStrip::new(instance, 505);
    for title in titles {
        strip.add_tab(Some(TabData::titled(*title)), AddTabOptions::default());
    }
    strip.take_events();
    strip
}

/// Starts dragging the tab titled `title` on `strip` and returns the
/// filled transfer.
fn drag_from(strip: &mut TabStrip, title: &str) -> (TabId, DataTransfer) {
    let id = strip
        .tabs()
        .iter()
        .find(|r| r.title == title)
        .map(|r| r.id)
        .expect("tab present");
    let mut transfer = DataTransfer::new();
    strip.pointer_down(id, 10.0, 10.0);
    assert!(strip.drag_start(id, 10.0, &mut transfer));
    (id, transfer)
}

fn raw_transfer(payload: &str) -> DataTransfer {
    let mut transfer = DataTransfer::new();
    transfer.set_data(TAB_PAYLOAD_TYPE, payload);
    transfer.set_data(source_marker_type(&"elsewhere".into()), "");
    transfer
}

fn titles(strip: &TabStrip) -> Vec<&str> {
    strip.tabs().iter().map(|r| r.title.as_str()).collect()
}

// ── foreign drops ────────────────────────────────────────────────────

#[test]
fn foreign_drop_inserts_a_fresh_active_tab() {
    let mut left = strip_with("left", &["A", "B"]);
    let mut right = strip_with("right", &["X"]);
    let (source_id, transfer) = drag_from(&mut left, "B");

    right.drop_zone_drag_enter(&transfer);
    right.strip_drag_over(&transfer);
    assert!(right.drop_zone().highlighted);
    assert!(right.drop_zone().interactive);

    let id = right.drop_tab(&transfer).expect("tab inserted");
    assert_ne!(id, source_id);
    assert_eq!(titles(&right), vec!["X", "B"]);
    assert_eq!(right.drop_zone(), DropZoneState::default());

    let record = right.tab(id).expect("record");
    assert!(record.active);
    assert_eq!(record.source_instance_id, InstanceId::from("right"));
    assert_eq!(right.active_tab().map(|r| r.id), Some(id));

    let events = right.take_events();
    assert!(matches!(events.first(), Some(StripEvent::TabAdded { record }) if record.id == id));
    let Some(StripEvent::TabInserted { record, payload }) = events.last() else {
        panic!("expected TabInserted last, got {events:?}");
    };
    assert_eq!(record.id, id);
    assert_eq!(payload.id, Some(source_id));
    assert_eq!(payload.source_instance_id, Some(InstanceId::from("left")));

    // The source strip is untouched by the drop.
    assert_eq!(titles(&left), vec!["A", "B"]);
}

#[test]
fn dropped_ids_stay_fresh_and_increasing() {
    let mut strip = strip_with("right", &["X"]);

    let first = strip
        .drop_tab(&raw_transfer(r#"{"id":2,"title":"Y"}"#))
        .expect("tab inserted");
    assert_eq!(first, TabId(3));

    // A source id below the counter leaves minting untouched.
    let second = strip
        .drop_tab(&raw_transfer(r#"{"id":1,"title":"Z"}"#))
        .expect("tab inserted");
    assert_eq!(second, TabId(4));

    let local = strip.add_tab(None, AddTabOptions::default());
    assert_eq!(local, TabId(5));
}

#[test]
fn explicit_null_favicon_beats_configured_default() {
    let mut config = crate::config::StripConfig::default();
    config.tabs.default_favicon = Some("default.png".to_string());
    let mut strip = TabStrip::new("right", 505).with_config(config);

    let bare = strip
        .drop_tab(&raw_transfer(r#"{"title":"T","favicon":null}"#))
        .expect("tab inserted");
    assert_eq!(strip.tab(bare).expect("record").favicon, None);

    let defaulted = strip
        .drop_tab(&raw_transfer(r#"{"title":"T"}"#))
        .expect("tab inserted");
    assert_eq!(
        strip.tab(defaulted).expect("record").favicon.as_deref(),
        Some("default.png")
    );
}

#[test]
fn simple_title_and_favicon_payload_is_accepted() {
    let mut strip = strip_with("right", &["X"]);
    let transfer = raw_transfer(r#"{"title":"Inbox","favicon":"mail.png"}"#);

    let id = strip.drop_tab(&transfer).expect("tab inserted");
    let record = strip.tab(id).expect("record");
    assert_eq!(record.title, "Inbox");
    assert_eq!(record.favicon.as_deref(), Some("mail.png"));
}

#[test]
fn payload_without_title_gets_the_default_title() {
    let mut strip = strip_with("right", &[]);
    let id = strip.drop_tab(&raw_transfer("{}")).expect("tab inserted");
    assert_eq!(strip.tab(id).expect("record").title, "New tab");
}

#[test]
fn host_fields_survive_the_drop() {
    let mut strip = strip_with("right", &[]);
    let transfer = raw_transfer(r#"{"title":"Docs","url":"https://example.com","pinned":true}"#);

    let id = strip.drop_tab(&transfer).expect("tab inserted");
    let record = strip.tab(id).expect("record");
    assert_eq!(record.extra.get("url"), Some(&json!("https://example.com")));
    assert_eq!(record.extra.get("pinned"), Some(&json!(true)));
}

#[test]
fn dispatch_routes_drop_inputs() {
    let mut strip = strip_with("right", &["X"]);
    let transfer = raw_transfer(r#"{"title":"Y"}"#);

    strip.dispatch(StripInput::DropZoneEnter { transfer: &transfer });
    strip.dispatch(StripInput::DragOver { transfer: &transfer });
    strip.dispatch(StripInput::Drop { transfer: &transfer });
    assert_eq!(titles(&strip), vec!["X", "Y"]);
    assert!(!strip.drop_zone().highlighted);
}

// ── ignored drops ────────────────────────────────────────────────────

#[test]
fn own_drag_is_not_dropped_back() {
    let mut strip = strip_with("left", &["A", "B"]);
    let (_, transfer) = drag_from(&mut strip, "A");
    strip.take_events();

    strip.drop_zone_drag_enter(&transfer);
    strip.strip_drag_over(&transfer);
    assert_eq!(strip.drop_zone(), DropZoneState::default());

    assert_eq!(strip.drop_tab(&transfer), None);
    assert_eq!(titles(&strip), vec!["A", "B"]);
    assert!(strip.take_events().is_empty());
}

#[test]
fn malformed_payload_is_a_no_op() {
    let mut strip = strip_with("right", &["X"]);
    for raw in ["{not json", "42", "\"title\""] {
        let transfer = raw_transfer(raw);
        strip.drop_zone_drag_enter(&transfer);
        assert_eq!(strip.drop_tab(&transfer), None, "payload {raw:?}");
    }
    assert_eq!(titles(&strip), vec!["X"]);
    assert!(strip.take_events().is_empty());
}

#[test]
fn empty_payload_is_a_no_op() {
    let mut strip = strip_with("right", &["X"]);
    assert_eq!(strip.drop_tab(&raw_transfer("")), None);
    assert_eq!(titles(&strip), vec!["X"]);
}

#[test]
fn non_tab_drags_are_ignored() {
    let mut strip = strip_with("right", &["X"]);
    let mut transfer = DataTransfer::new();
    transfer.set_data("text/plain", "hello");

    strip.drop_zone_drag_enter(&transfer);
    strip.strip_drag_over(&transfer);
    assert_eq!(strip.drop_zone(), DropZoneState::default());
    assert_eq!(strip.drop_tab(&transfer), None);
}

// ── drop zone ────────────────────────────────────────────────────────

#[test]
fn leaving_the_drop_zone_clears_it() {
    let mut strip = strip_with("right", &[]);
    let transfer = raw_transfer(r#"{"title":"Y"}"#);

    strip.drop_zone_drag_enter(&transfer);
    strip.strip_drag_over(&transfer);
    strip.drop_zone_drag_leave(&transfer);
    assert_eq!(strip.drop_zone(), DropZoneState::default());
}

#[test]
fn drag_over_alone_makes_the_zone_interactive() {
    let mut strip = strip_with("right", &[]);
    strip.strip_drag_over(&raw_transfer(r#"{"title":"Y"}"#));
    let zone = strip.drop_zone();
    assert!(zone.interactive);
    assert!(!zone.highlighted);
}

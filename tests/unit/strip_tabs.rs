use super::*;
use crate::strip::state::InstanceId;

fn record(collection: &mut TabCollection, title: &str) -> TabRecord {
    TabRecord {
        id: collection.mint_id(),
        title: title.to_string(),
        favicon: None,
        source_instance_id: InstanceId::from("test"),
        extra: Default::default(),
        active: false,
        just_added: false,
        just_dragged: false,
    }
}

/// Builds a collection from titles; a trailing `*` marks the active tab.
fn collection(titles: &[&str]) -> TabCollection {
    let mut tabs = TabCollection::new();
    for title in titles {
        let name = title.trim_end_matches('*');
        let rec = record(&mut tabs, name);
        tabs.add(rec, !title.ends_with('*'));
    }
    tabs.take_events();
    tabs
}

fn titles(tabs: &TabCollection) -> Vec<&str> {
    tabs.records().iter().map(|r| r.title.as_str()).collect()
}

fn active_title(tabs: &TabCollection) -> Option<&str> {
    tabs.active().map(|r| r.title.as_str())
}

fn id_of(tabs: &TabCollection, title: &str) -> TabId {
    tabs.records()
        .iter()
        .find(|r| r.title == title)
        .map(|r| r.id)
        .expect("title present")
}

// ── active_index_after_remove ────────────────────────────────────────

#[test]
fn active_moves_to_next_sibling_first() {
    assert_eq!(active_index_after_remove(3, 0), Some(1));
    assert_eq!(active_index_after_remove(3, 1), Some(2));
}

#[test]
fn active_falls_back_to_previous_sibling() {
    assert_eq!(active_index_after_remove(3, 2), Some(1));
}

#[test]
fn removing_only_tab_leaves_nothing_active() {
    assert_eq!(active_index_after_remove(1, 0), None);
}

#[test]
fn invalid_removed_index_returns_none() {
    assert_eq!(active_index_after_remove(0, 0), None);
    assert_eq!(active_index_after_remove(3, 3), None);
}

// ── add ──────────────────────────────────────────────────────────────

#[test]
fn ids_are_minted_monotonically_and_never_reused() {
    let mut tabs = collection(&["A", "B"]);
    let b = id_of(&tabs, "B");
    tabs.remove(b);
    let next = tabs.mint_id();
    assert!(next > b);
    assert_eq!(next, TabId(3));
}

#[test]
fn foreground_add_becomes_the_only_active_tab() {
    let mut tabs = collection(&["A*", "B"]);
    let rec = record(&mut tabs, "C");
    let index = tabs.add(rec, false);
    assert_eq!(index, 2);
    assert_eq!(active_title(&tabs), Some("C"));
    assert_eq!(tabs.records().iter().filter(|r| r.active).count(), 1);
}

#[test]
fn background_add_keeps_current_active_tab() {
    let mut tabs = collection(&["A*"]);
    let rec = record(&mut tabs, "B");
    tabs.add(rec, true);
    assert_eq!(active_title(&tabs), Some("A"));
}

#[test]
fn add_emits_added_then_activated() {
    let mut tabs = TabCollection::new();
    let rec = record(&mut tabs, "A");
    let id = rec.id;
    tabs.add(rec, false);
    let events = tabs.take_events();
    assert_eq!(events.len(), 2);
    assert!(matches!(&events[0], StripEvent::TabAdded { record } if record.id == id));
    assert_eq!(events[1], StripEvent::ActiveTabChanged { id });
}

// ── remove ───────────────────────────────────────────────────────────

#[test]
fn removing_active_tab_activates_next() {
    let mut tabs = collection(&["A*", "B", "C"]);
    let a = id_of(&tabs, "A");
    tabs.remove(a);
    assert_eq!(titles(&tabs), vec!["B", "C"]);
    assert_eq!(active_title(&tabs), Some("B"));
}

#[test]
fn removing_last_active_tab_activates_previous() {
    let mut tabs = collection(&["A", "B*"]);
    let b = id_of(&tabs, "B");
    tabs.remove(b);
    assert_eq!(active_title(&tabs), Some("A"));
}

#[test]
fn removing_inactive_tab_keeps_active() {
    let mut tabs = collection(&["A", "B*", "C"]);
    let c = id_of(&tabs, "C");
    tabs.remove(c);
    assert_eq!(active_title(&tabs), Some("B"));
}

#[test]
fn removing_sole_tab_leaves_no_active() {
    let mut tabs = collection(&["A*"]);
    let a = id_of(&tabs, "A");
    let removed = tabs.remove(a).expect("removed");
    assert_eq!(removed.title, "A");
    assert!(tabs.is_empty());
    assert!(tabs.active().is_none());
}

#[test]
fn remove_emits_activation_before_removal() {
    let mut tabs = collection(&["A*", "B"]);
    let a = id_of(&tabs, "A");
    let b = id_of(&tabs, "B");
    tabs.remove(a);
    let events = tabs.take_events();
    assert_eq!(events[0], StripEvent::ActiveTabChanged { id: b });
    assert!(matches!(&events[1], StripEvent::TabRemoved { record } if record.id == a));
}

#[test]
fn removing_unknown_id_is_a_no_op() {
    let mut tabs = collection(&["A*"]);
    assert!(tabs.remove(TabId(99)).is_none());
    assert!(tabs.take_events().is_empty());
}

// ── reorder ──────────────────────────────────────────────────────────

#[test]
fn forward_reorder_lands_after_destination() {
    let mut tabs = collection(&["A", "B", "C", "D"]);
    assert!(tabs.reorder(0, 2));
    assert_eq!(titles(&tabs), vec!["B", "C", "A", "D"]);
}

#[test]
fn backward_reorder_lands_before_destination() {
    let mut tabs = collection(&["A", "B", "C", "D"]);
    assert!(tabs.reorder(3, 1));
    assert_eq!(titles(&tabs), vec!["A", "D", "B", "C"]);
}

#[test]
fn reorder_emits_indices() {
    let mut tabs = collection(&["A", "B", "C"]);
    let a = id_of(&tabs, "A");
    tabs.reorder(0, 1);
    assert_eq!(
        tabs.take_events(),
        vec![StripEvent::TabReordered {
            id: a,
            origin_index: 0,
            destination_index: 1,
        }]
    );
}

#[test]
fn reorder_out_of_range_or_in_place_is_ignored() {
    let mut tabs = collection(&["A", "B"]);
    assert!(!tabs.reorder(1, 1));
    assert!(!tabs.reorder(0, 5));
    assert!(!tabs.reorder(5, 0));
    assert_eq!(titles(&tabs), vec!["A", "B"]);
    assert!(tabs.take_events().is_empty());
}

#[test]
fn reorder_keeps_the_active_record() {
    let mut tabs = collection(&["A", "B*", "C"]);
    tabs.reorder(1, 2);
    assert_eq!(active_title(&tabs), Some("B"));
    assert_eq!(tabs.active_index(), Some(2));
}

// ── set_active ───────────────────────────────────────────────────────

#[test]
fn set_active_on_active_tab_is_a_no_op() {
    let mut tabs = collection(&["A*", "B"]);
    let a = id_of(&tabs, "A");
    assert!(!tabs.set_active(a));
    assert!(tabs.take_events().is_empty());
}

#[test]
fn set_active_switches_the_single_active_flag() {
    let mut tabs = collection(&["A*", "B"]);
    let b = id_of(&tabs, "B");
    assert!(tabs.set_active(b));
    assert_eq!(active_title(&tabs), Some("B"));
    assert_eq!(tabs.records().iter().filter(|r| r.active).count(), 1);
    assert_eq!(tabs.take_events(), vec![StripEvent::ActiveTabChanged { id: b }]);
}

#[test]
fn set_active_unknown_id_is_ignored() {
    let mut tabs = collection(&["A*"]);
    assert!(!tabs.set_active(TabId(42)));
    assert_eq!(active_title(&tabs), Some("A"));
}

#[test]
fn skip_past_only_moves_the_counter_forward() {
    let mut tabs = TabCollection::new();
    tabs.skip_past(TabId(7));
    assert_eq!(tabs.mint_id(), TabId(8));
    tabs.skip_past(TabId(3));
    assert_eq!(tabs.mint_id(), TabId(9));
}

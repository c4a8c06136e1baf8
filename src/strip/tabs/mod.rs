//! Ordered tab records of one strip.

use tracing::debug;

use crate::strip::state::{StripEvent, TabId, TabRecord};

/// Index that should become active once `removed_index` is gone from a
/// strip of `len_before` tabs, given that `removed_index` was active.
///
/// Prefers the next sibling, which slides into the removed slot, then the
/// previous one.  Returns `None` when nothing is left.
pub(crate) fn active_index_after_remove(len_before: usize, removed_index: usize) -> Option<usize> {
    if removed_index >= len_before {
        return None;
    }
    if removed_index + 1 < len_before {
        Some(removed_index + 1)
    } else if removed_index > 0 {
        Some(removed_index - 1)
    } else {
        None
    }
}

/// The strip's tabs, left to right.
///
/// Ids are unique and at most one record is active.  Every change queues a
/// [`StripEvent`] that the owning strip forwards to its host.
#[derive(Debug)]
pub struct TabCollection {
    records: Vec<TabRecord>,
    next_tab_id: u64,
    pending_events: Vec<StripEvent>,
}

impl Default for TabCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl TabCollection {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_tab_id: 1,
            pending_events: Vec::new(),
        }
    }

    /// Reserves the next id.  Ids are handed out once and never reused.
    pub fn mint_id(&mut self) -> TabId {
        let id = TabId(self.next_tab_id);
        self.next_tab_id += 1;
        id
    }

    /// Moves the id counter past `id`, so the next minted id is greater.
    pub fn skip_past(&mut self, id: TabId) {
        self.next_tab_id = self.next_tab_id.max(id.0.saturating_add(1));
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[TabRecord] {
        &self.records
    }

    pub fn get(&self, id: TabId) -> Option<&TabRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn get_mut(&mut self, id: TabId) -> Option<&mut TabRecord> {
        self.records.iter_mut().find(|record| record.id == id)
    }

    pub fn index_of(&self, id: TabId) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }

    pub fn active(&self) -> Option<&TabRecord> {
        self.records.iter().find(|record| record.active)
    }

    pub fn active_index(&self) -> Option<usize> {
        self.records.iter().position(|record| record.active)
    }

    /// Appends `record` and returns its index.  Unless `background`, the new
    /// tab becomes the only active one.
    pub fn add(&mut self, mut record: TabRecord, background: bool) -> usize {
        debug_assert!(self.get(record.id).is_none(), "duplicate tab id {}", record.id);
        record.active = false;
        let id = record.id;
        self.records.push(record.clone());
        self.pending_events.push(StripEvent::TabAdded { record });
        debug!(tab = %id, background, "tab added");

        if !background {
            self.set_active(id);
        }
        self.records.len() - 1
    }

    /// Removes the tab with `id`.  When it was active, the next tab takes
    /// over, else the previous one.
    pub fn remove(&mut self, id: TabId) -> Option<TabRecord> {
        let index = self.index_of(id)?;

        if self.records[index].active
            && let Some(next_index) = active_index_after_remove(self.records.len(), index)
        {
            let next_id = self.records[next_index].id;
            self.set_active(next_id);
        }

        let record = self.records.remove(index);
        self.pending_events.push(StripEvent::TabRemoved {
            record: record.clone(),
        });
        debug!(tab = %id, index, "tab removed");
        Some(record)
    }

    /// Moves the tab at `origin_index` so it ends up at `destination_index`.
    ///
    /// Moving forward lands the tab after the one currently at
    /// `destination_index`, moving backward lands it before, because taking
    /// the tab out first shifts everything behind it left by one.
    pub fn reorder(&mut self, origin_index: usize, destination_index: usize) -> bool {
        let len = self.records.len();
        if origin_index >= len || destination_index >= len || origin_index == destination_index {
            return false;
        }

        let record = self.records.remove(origin_index);
        let id = record.id;
        self.records.insert(destination_index, record);
        self.pending_events.push(StripEvent::TabReordered {
            id,
            origin_index,
            destination_index,
        });
        debug!(tab = %id, origin_index, destination_index, "tab reordered");
        true
    }

    /// Makes `id` the active tab.  Returns `false` when it already was, or
    /// does not exist.
    pub fn set_active(&mut self, id: TabId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        if self.records[index].active {
            return false;
        }

        for record in &mut self.records {
            record.active = false;
        }
        self.records[index].active = true;
        self.pending_events.push(StripEvent::ActiveTabChanged { id });
        debug!(tab = %id, "active tab changed");
        true
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut TabRecord> {
        self.records.iter_mut()
    }

    /// Drains the notifications queued since the last call.
    pub fn take_events(&mut self) -> Vec<StripEvent> {
        std::mem::take(&mut self.pending_events)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/strip_tabs.rs"]
mod tests;

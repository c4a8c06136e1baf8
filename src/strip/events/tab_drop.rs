use tracing::{debug, warn};

use crate::strip::payload::{DataTransfer, TAB_PAYLOAD_TYPE, TabPayload, source_marker_type};
use crate::strip::state::{StripEvent, TabId};
use crate::strip::{AddTabOptions, TabStrip};

impl TabStrip {
    /// `true` for a tab drag that did not start on this strip.
    fn is_foreign_tab_drag(&self, transfer: &DataTransfer) -> bool {
        transfer.has_type(TAB_PAYLOAD_TYPE)
            && !transfer.has_type(&source_marker_type(&self.instance_id))
    }

    /// A drag entered the drop region.
    pub fn drop_zone_drag_enter(&mut self, transfer: &DataTransfer) {
        if self.is_foreign_tab_drag(transfer) {
            self.drop_zone.highlighted = true;
        }
    }

    /// A drag is hovering anywhere over the strip.  Only foreign tabs make
    /// the drop region take pointer events.
    pub fn strip_drag_over(&mut self, transfer: &DataTransfer) {
        if self.is_foreign_tab_drag(transfer) {
            self.drop_zone.interactive = true;
        }
    }

    /// A drag left the drop region.
    pub fn drop_zone_drag_leave(&mut self, transfer: &DataTransfer) {
        if self.is_foreign_tab_drag(transfer) {
            self.drop_zone.clear();
        }
    }

    /// A drag was released over the drop region.
    ///
    /// A foreign tab becomes a brand new, active tab here and a
    /// [`StripEvent::TabInserted`] is queued.  Own drags and unreadable
    /// payloads leave the strip untouched.
    pub fn drop_tab(&mut self, transfer: &DataTransfer) -> Option<TabId> {
        if !self.is_foreign_tab_drag(transfer) {
            return None;
        }

        let payload = match TabPayload::from_transfer(transfer) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(instance = %self.instance_id, "ignoring tab drop: {err}");
                return None;
            }
        };

        self.drop_zone.clear();
        // The inserted tab must never reuse the id it had on its source strip.
        if let Some(source_id) = payload.id {
            self.tabs.skip_past(source_id);
        }
        let id = self.add_tab(Some(payload.to_tab_data()), AddTabOptions::default());
        let record = self.tabs.get(id)?.clone();
        debug!(
            instance = %self.instance_id,
            tab = %id,
            source = ?payload.source_instance_id,
            "tab inserted from drop"
        );
        self.pending_events
            .push(StripEvent::TabInserted { record, payload });
        Some(id)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/strip_tab_drop.rs"]
mod tests;

use tracing::{debug, trace, warn};

use crate::strip::layout::nearest_index;
use crate::strip::payload::{DataTransfer, TAB_PAYLOAD_TYPE, TabPayload, source_marker_type};
use crate::strip::state::{DragPhase, DragSession, PressState, SettleStep, TabId};
use crate::strip::TabStrip;

impl TabStrip {
    /// Pointer pressed on a tab.  A press always activates the tab, whether
    /// or not a drag follows.
    pub fn pointer_down(&mut self, tab: TabId, x: f64, y: f64) {
        if self.tabs.get(tab).is_none() {
            return;
        }
        self.set_active_tab(tab);
        self.press = Some(PressState {
            tab,
            origin_x: x,
            origin_y: y,
        });
    }

    /// Pointer released without a drag: the press is forgotten.
    pub fn pointer_up(&mut self, tab: TabId) {
        if self.press.is_some_and(|press| press.tab == tab) {
            self.press = None;
        }
    }

    /// Starts dragging `tab`.  Writes the tab payload and the source marker
    /// into `transfer` and freezes the current tab positions for the whole
    /// gesture.  A drag already in progress is ended first.
    ///
    /// `pointer_x` is only used as the origin when no press was recorded.
    pub fn drag_start(&mut self, tab: TabId, pointer_x: f64, transfer: &mut DataTransfer) -> bool {
        let press = self.press.take();
        if self.drag.is_some() {
            self.force_end_drag();
        }

        let Some(origin_index) = self.tabs.index_of(tab) else {
            return false;
        };
        let Some(origin_position) = self.geometry.tab_positions.get(origin_index).copied() else {
            return false;
        };
        let origin_pointer_x = match press {
            Some(press) if press.tab == tab => press.origin_x,
            _ => pointer_x,
        };

        self.write_drag_payload(tab, transfer);
        self.drag = Some(DragSession {
            tab,
            origin_index,
            origin_position_x: f64::from(origin_position),
            origin_pointer_x,
            last_pointer_x: 0.0,
            positions: self.geometry.tab_positions.clone(),
            is_moving: false,
            phase: DragPhase::Dragging,
        });
        debug!(tab = %tab, origin_index, "tab drag started");
        true
    }

    /// Pointer moved during a drag.  Reorders the strip as soon as the tab
    /// is closest to another slot.
    pub fn drag_move(&mut self, tab: TabId, pointer_x: f64) {
        let threshold = self.config.drag.spurious_zero_threshold;
        let Some(session) = self.drag.as_mut() else {
            return;
        };
        if session.tab != tab || session.phase != DragPhase::Dragging {
            return;
        }
        // Some platforms send a trailing move at x = 0 when the drag ends.
        if pointer_x == 0.0 && session.last_pointer_x >= threshold {
            trace!(tab = %tab, "ignoring synthetic drag move at x = 0");
            return;
        }

        session.last_pointer_x = pointer_x;
        session.is_moving = true;
        let current_x = session.current_x(pointer_x);
        let Some(nearest) = nearest_index(current_x, &session.positions) else {
            return;
        };
        let Some(current_index) = self.tabs.index_of(tab) else {
            return;
        };
        let destination_index = nearest.min(self.tabs.len().saturating_sub(1));
        trace!(tab = %tab, current_x, current_index, destination_index, "tab drag move");

        if destination_index != current_index {
            self.tabs.reorder(current_index, destination_index);
            self.flush_tab_events();
            self.layout_tabs();
        }
    }

    /// Drag released.  The tab starts settling back into its slot; the host
    /// drives the rest with [`TabStrip::on_animation_frame`].
    pub fn drag_end(&mut self, tab: TabId, pointer_x: f64) {
        let threshold = self.config.drag.spurious_zero_threshold;
        let Some(session) = self.drag.as_mut() else {
            return;
        };
        if session.tab != tab || session.phase != DragPhase::Dragging {
            return;
        }

        let pointer_x = if pointer_x == 0.0 && session.last_pointer_x >= threshold {
            session.last_pointer_x
        } else {
            pointer_x
        };
        let current_x = session.current_x(pointer_x);
        session.phase = DragPhase::Settling {
            current_x,
            step: SettleStep::Pending,
        };
        debug!(
            tab = %tab,
            origin_index = session.origin_index,
            current_x,
            "tab drag ended"
        );
    }

    /// Advances a settling tab by one animation frame.  Returns `true` while
    /// more frames are needed.
    pub fn on_animation_frame(&mut self) -> bool {
        let Some(session) = self.drag.as_mut() else {
            return false;
        };
        let DragPhase::Settling { current_x, step } = session.phase else {
            return false;
        };

        match step {
            SettleStep::Pending => {
                session.phase = DragPhase::Settling {
                    current_x,
                    step: SettleStep::Released,
                };
                true
            }
            SettleStep::Released => {
                session.phase = DragPhase::Settling {
                    current_x,
                    step: SettleStep::Cleared,
                };
                let tab = session.tab;
                // The tab may have been closed mid-settle.
                if let Some(record) = self.tabs.get_mut(tab) {
                    record.just_dragged = true;
                }
                true
            }
            SettleStep::Cleared => {
                self.finish_settle();
                false
            }
        }
    }

    /// Runs whatever is left of the current drag's end path right away.
    pub(crate) fn force_end_drag(&mut self) {
        let Some(session) = self.drag.as_ref() else {
            return;
        };
        if session.phase == DragPhase::Dragging {
            let tab = session.tab;
            let pointer_x = if session.is_moving {
                session.last_pointer_x
            } else {
                session.origin_pointer_x
            };
            self.drag_end(tab, pointer_x);
        }
        while self.on_animation_frame() {}
    }

    fn finish_settle(&mut self) {
        if let Some(session) = self.drag.take() {
            debug!(tab = %session.tab, "tab drag settled");
        }
        self.layout_tabs();
        self.rebind();
    }

    fn write_drag_payload(&self, tab: TabId, transfer: &mut DataTransfer) {
        transfer.hide_drag_image();
        let Some(record) = self.tabs.get(tab) else {
            return;
        };
        let enrichment = self
            .drag_enricher
            .as_ref()
            .map(|enrich| enrich(record))
            .unwrap_or_default();
        match TabPayload::from_record(record, enrichment).to_json() {
            Ok(json) => transfer.set_data(TAB_PAYLOAD_TYPE, json),
            Err(err) => warn!(tab = %tab, "failed to encode drag payload: {err}"),
        }
        transfer.set_data(source_marker_type(&self.instance_id), "");
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/strip_tab_drag.rs"]
mod tests;

//! Tab strip controller.
//!
//! [`TabStrip`] owns the tab records, recomputes geometry after every
//! structural change and drives the drag state machine from synthetic input
//! events.  Rendering is left to the host, which reads [`TabStrip::tab_visuals`]
//! and drains [`TabStrip::take_events`].

mod events;
pub mod layout;
pub mod payload;
mod state;
mod tabs;
pub mod timers;

use std::time::Instant;

use serde_json::{Map, Value};
use tracing::debug;

use crate::config::StripConfig;

use self::layout::{StripGeometry, TAB_CONTENT_MIN_WIDTH, TabVisual};
use self::state::{DragPhase, DragSession, PressState, SettleStep};
use self::timers::{Clock, SystemClock, TimerQueue, TimerTask};

pub use self::events::StripInput;
pub use self::payload::{DataTransfer, PayloadError, TAB_PAYLOAD_TYPE, TabPayload};
pub use self::state::{
    DragStatus, DropZoneState, InstanceId, StripEvent, TabData, TabId, TabRecord,
};
pub use self::tabs::TabCollection;

/// Host callback adding fields to an outgoing drag payload.
pub type DragEnricher = Box<dyn Fn(&TabRecord) -> Map<String, Value>>;

/// Options for [`TabStrip::add_tab`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddTabOptions {
    /// Mark the tab "just added" for the configured duration.
    pub animate: bool,
    /// Add without activating.
    pub background: bool,
}

impl Default for AddTabOptions {
    fn default() -> Self {
        Self {
            animate: true,
            background: false,
        }
    }
}

/// One tab strip instance.
pub struct TabStrip {
    instance_id: InstanceId,
    config: StripConfig,
    tabs: TabCollection,
    container_width: i32,
    geometry: StripGeometry,
    press: Option<PressState>,
    drag: Option<DragSession>,
    drop_zone: DropZoneState,
    timers: TimerQueue,
    clock: Box<dyn Clock>,
    drag_enricher: Option<DragEnricher>,
    pending_events: Vec<StripEvent>,
}

impl TabStrip {
    /// Creates an empty strip whose tab area is `container_width` wide.
    pub fn new(instance_id: impl Into<InstanceId>, container_width: i32) -> Self {
        let instance_id = instance_id.into();
        debug!(instance = %instance_id, container_width, "tab strip initialized");
        TabStrip {
            instance_id,
            config: StripConfig::default(),
            tabs: TabCollection::new(),
            container_width,
            geometry: StripGeometry::default(),
            press: None,
            drag: None,
            drop_zone: DropZoneState::default(),
            timers: TimerQueue::default(),
            clock: Box::new(SystemClock),
            drag_enricher: None,
            pending_events: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: StripConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Installs a callback whose fields are merged into every outgoing drag
    /// payload (the tab's own fields win on collisions).
    pub fn with_drag_enricher(
        mut self,
        enricher: impl Fn(&TabRecord) -> Map<String, Value> + 'static,
    ) -> Self {
        self.drag_enricher = Some(Box::new(enricher));
        self
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn instance_id(&self) -> &InstanceId {
        &self.instance_id
    }

    pub fn config(&self) -> &StripConfig {
        &self.config
    }

    pub fn tabs(&self) -> &[TabRecord] {
        self.tabs.records()
    }

    pub fn tab(&self, id: TabId) -> Option<&TabRecord> {
        self.tabs.get(id)
    }

    pub fn index_of(&self, id: TabId) -> Option<usize> {
        self.tabs.index_of(id)
    }

    pub fn active_tab(&self) -> Option<&TabRecord> {
        self.tabs.active()
    }

    pub fn has_active_tab(&self) -> bool {
        self.tabs.active().is_some()
    }

    pub fn container_width(&self) -> i32 {
        self.container_width
    }

    /// Geometry of the last layout pass.
    pub fn geometry(&self) -> &StripGeometry {
        &self.geometry
    }

    pub fn drop_zone(&self) -> DropZoneState {
        self.drop_zone
    }

    pub fn drag_status(&self) -> DragStatus {
        match &self.drag {
            Some(session) => match session.phase {
                DragPhase::Dragging => DragStatus::Dragging,
                DragPhase::Settling { .. } => DragStatus::Settling,
            },
            None if self.press.is_some() => DragStatus::Pressed,
            None => DragStatus::Idle,
        }
    }

    /// Tab and pointer position of the pending press, if any.
    pub fn press_origin(&self) -> Option<(TabId, f64, f64)> {
        self.press
            .map(|press| (press.tab, press.origin_x, press.origin_y))
    }

    /// `true` while a dragged tab is visibly being moved around.
    pub fn is_sorting(&self) -> bool {
        self.drag.as_ref().is_some_and(session_shows_drag_styling)
    }

    /// Per-tab render snapshot, left to right.
    pub fn tab_visuals(&self) -> Vec<TabVisual> {
        self.tabs
            .records()
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let content_width = self
                    .geometry
                    .content_widths
                    .get(i)
                    .copied()
                    .unwrap_or(TAB_CONTENT_MIN_WIDTH);
                let x = self.geometry.tab_positions.get(i).copied().unwrap_or_default();
                let mut visual = TabVisual::new(record, content_width, x);
                if let Some(session) = self.drag.as_ref()
                    && session.tab == record.id
                {
                    apply_drag_visual(&mut visual, session);
                }
                visual
            })
            .collect()
    }

    /// Positioning rules for the current layout, scoped to this instance.
    pub fn style_rules(&self) -> String {
        layout::style_rules(&self.instance_id, &self.geometry)
    }

    /// Drains the notifications queued since the last call, oldest first.
    pub fn take_events(&mut self) -> Vec<StripEvent> {
        self.flush_tab_events();
        std::mem::take(&mut self.pending_events)
    }

    // ── Structural operations ────────────────────────────────────────

    /// Appends a tab built from `data` over the configured defaults and
    /// returns its id.
    pub fn add_tab(&mut self, data: Option<TabData>, options: AddTabOptions) -> TabId {
        let data = data.unwrap_or_default();
        let id = self.tabs.mint_id();
        let record = TabRecord {
            id,
            title: data
                .title
                .unwrap_or_else(|| self.config.tabs.default_title.clone()),
            favicon: data
                .favicon
                .unwrap_or_else(|| self.config.tabs.default_favicon.clone()),
            source_instance_id: self.instance_id.clone(),
            extra: data.extra,
            active: false,
            just_added: options.animate,
            just_dragged: false,
        };

        if options.animate {
            let deadline = self.clock.now() + self.config.animation.just_added();
            self.timers.schedule(deadline, TimerTask::ClearJustAdded(id));
        }

        self.tabs.add(record, options.background);
        self.flush_tab_events();
        self.cleanup_previously_dragged_tabs();
        self.layout_tabs();
        self.rebind();
        id
    }

    /// Removes a tab.  If it was active, the tab to its right takes over,
    /// else the one to its left.
    pub fn remove_tab(&mut self, id: TabId) -> Option<TabRecord> {
        let record = self.tabs.remove(id)?;
        self.flush_tab_events();
        self.cleanup_previously_dragged_tabs();
        self.layout_tabs();
        self.rebind();
        Some(record)
    }

    pub fn set_active_tab(&mut self, id: TabId) -> bool {
        let changed = self.tabs.set_active(id);
        self.flush_tab_events();
        changed
    }

    /// Replaces the title and favicon of an existing tab.  Fields missing
    /// from `data` fall back to the configured defaults; an explicit
    /// `Some(None)` favicon clears it.
    pub fn update_tab(&mut self, id: TabId, data: TabData) -> bool {
        let default_title = &self.config.tabs.default_title;
        let default_favicon = &self.config.tabs.default_favicon;
        let Some(record) = self.tabs.get_mut(id) else {
            return false;
        };
        record.title = data.title.unwrap_or_else(|| default_title.clone());
        record.favicon = data.favicon.unwrap_or_else(|| default_favicon.clone());
        record.extra.extend(data.extra);
        true
    }

    /// Container size changed: relayout only, the tabs stay as they are.
    pub fn resize(&mut self, container_width: i32) {
        self.container_width = container_width;
        self.cleanup_previously_dragged_tabs();
        self.layout_tabs();
    }

    // ── Timers ───────────────────────────────────────────────────────

    /// When the host should next call [`TabStrip::run_due_timers`].
    pub fn next_timer_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Expires transient markers whose deadline has passed.  Returns how
    /// many timers fired; timers for removed tabs fire as no-ops.
    pub fn run_due_timers(&mut self) -> usize {
        let due = self.timers.take_due(self.clock.now());
        for task in &due {
            match *task {
                TimerTask::ClearJustAdded(id) => {
                    if let Some(record) = self.tabs.get_mut(id) {
                        record.just_added = false;
                    }
                }
            }
        }
        due.len()
    }

    // ── Internals ────────────────────────────────────────────────────

    fn flush_tab_events(&mut self) {
        self.pending_events.extend(self.tabs.take_events());
    }

    /// Recomputes geometry from the current tab count and container width.
    fn layout_tabs(&mut self) {
        self.geometry = StripGeometry::compute(self.container_width, self.tabs.len());
    }

    /// Drops per-gesture state bound to the old tab order.  A live drag is
    /// ended first so no session outlives the layout it was started on.
    fn rebind(&mut self) {
        self.force_end_drag();
        self.press = None;
    }

    fn cleanup_previously_dragged_tabs(&mut self) {
        for record in self.tabs.iter_mut() {
            record.just_dragged = false;
        }
    }
}

/// Drag classes stay on until the second settle frame.
fn session_shows_drag_styling(session: &DragSession) -> bool {
    session.is_moving
        && match session.phase {
            DragPhase::Dragging => true,
            DragPhase::Settling { step, .. } => step != SettleStep::Cleared,
        }
}

fn apply_drag_visual(visual: &mut TabVisual, session: &DragSession) {
    visual.dragging = session_shows_drag_styling(session);
    match session.phase {
        DragPhase::Dragging
        | DragPhase::Settling {
            step: SettleStep::Pending,
            ..
        } => {
            if session.is_moving {
                visual.left_override = Some(session.origin_position_x);
                visual.transform_override = Some(session.pointer_delta(session.last_pointer_x));
            }
        }
        DragPhase::Settling { current_x, .. } => {
            visual.left_override = Some(0.0);
            visual.transform_override = Some(current_x);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/strip_controller.rs"]
mod tests;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::strip::payload::TabPayload;

/// Identifier of a tab within one strip instance.
///
/// Minted from 1 upwards and never reused, even after the tab is removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(pub u64);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Host-supplied identity of a strip instance.
///
/// Scopes the generated style rules and tags outgoing drags so a strip can
/// recognise its own payloads.  Uniqueness across the process is the
/// host's job.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InstanceId {
    Number(u64),
    Name(String),
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl From<u64> for InstanceId {
    fn from(n: u64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for InstanceId {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<String> for InstanceId {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// Caller-supplied tab fields.  Missing fields fall back to the configured
/// defaults when the tab is created.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TabData {
    pub title: Option<String>,
    /// `None` takes the configured default, `Some(None)` means no favicon.
    pub favicon: Option<Option<String>>,
    /// Host fields carried along with the tab (drag enrichment, routing keys).
    pub extra: Map<String, Value>,
}

impl TabData {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_favicon(mut self, favicon: impl Into<String>) -> Self {
        self.favicon = Some(Some(favicon.into()));
        self
    }

    pub fn without_favicon(mut self) -> Self {
        self.favicon = Some(None);
        self
    }
}

/// One tab owned by a strip.
#[derive(Clone, Debug, PartialEq)]
pub struct TabRecord {
    pub id: TabId,
    pub title: String,
    pub favicon: Option<String>,
    /// Strip that minted this record.
    pub source_instance_id: InstanceId,
    pub extra: Map<String, Value>,
    pub active: bool,
    pub just_added: bool,
    pub just_dragged: bool,
}

/// Notification queued for the host after a structural change.
#[derive(Clone, Debug, PartialEq)]
pub enum StripEvent {
    TabAdded {
        record: TabRecord,
    },
    TabRemoved {
        record: TabRecord,
    },
    ActiveTabChanged {
        id: TabId,
    },
    TabReordered {
        id: TabId,
        origin_index: usize,
        destination_index: usize,
    },
    /// A tab dragged in from another strip instance was inserted.
    TabInserted {
        record: TabRecord,
        payload: TabPayload,
    },
}

/// Externally visible phase of the drag state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragStatus {
    Idle,
    Pressed,
    Dragging,
    Settling,
}

/// Pointer-down recorded on a tab, before any drag starts.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PressState {
    pub(crate) tab: TabId,
    pub(crate) origin_x: f64,
    pub(crate) origin_y: f64,
}

/// Remaining animation frames once the pointer is released.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum SettleStep {
    /// Waiting for the frame that snaps the tab onto its live x.
    Pending,
    /// Tab sits at `current_x` with its drag styling still on.
    Released,
    /// Drag styling is gone; the next frame restores the slot layout.
    Cleared,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum DragPhase {
    Dragging,
    Settling { current_x: f64, step: SettleStep },
}

/// Live drag of one tab, from drag start until the settle completes.
#[derive(Clone, Debug)]
pub(crate) struct DragSession {
    pub(crate) tab: TabId,
    pub(crate) origin_index: usize,
    pub(crate) origin_position_x: f64,
    pub(crate) origin_pointer_x: f64,
    pub(crate) last_pointer_x: f64, // Last accepted drag-move x, feeds the zero guard.
    pub(crate) positions: Vec<i32>, // Tab positions frozen at drag start.
    pub(crate) is_moving: bool,     // True once the first drag-move was accepted.
    pub(crate) phase: DragPhase,
}

impl DragSession {
    /// Pixel offset of the pointer from where the drag began.
    pub(crate) fn pointer_delta(&self, pointer_x: f64) -> f64 {
        pointer_x - self.origin_pointer_x
    }

    /// Absolute x the dragged tab sits at for `pointer_x`.
    pub(crate) fn current_x(&self, pointer_x: f64) -> f64 {
        self.origin_position_x + self.pointer_delta(pointer_x)
    }
}

/// Drop region affordance for foreign tab drags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DropZoneState {
    /// A foreign tab is hovering over the drop region.
    pub highlighted: bool,
    /// The drop region accepts pointer events.
    pub interactive: bool,
}

impl DropZoneState {
    pub(crate) fn clear(&mut self) {
        self.highlighted = false;
        self.interactive = false;
    }
}

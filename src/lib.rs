//! Layout and drag-reorder engine for browser-style tab strips.
//!
//! The crate does not draw anything.  A host translates its pointer, drag and
//! resize events into [`StripInput`]s, renders the [`TabVisual`]s a
//! [`TabStrip`] hands back and reacts to the queued [`StripEvent`]s.

pub mod config;
pub mod strip;

pub use config::StripConfig;
pub use strip::layout::{SizeClass, StripGeometry, TabVisual};
pub use strip::{
    AddTabOptions, DataTransfer, DragStatus, DropZoneState, InstanceId, StripEvent, StripInput,
    TabData, TabId, TabPayload, TabRecord, TabStrip,
};

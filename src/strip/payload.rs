//! Drag payload exchanged between strip instances.
//!
//! A drag carries two entries in its [`DataTransfer`]: the tab itself as
//! JSON under [`TAB_PAYLOAD_TYPE`], and an empty marker keyed by the source
//! instance.  Drop targets can only list entry types until the drop happens,
//! so the marker is what lets a strip spot its own drag early.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::strip::state::{InstanceId, TabData, TabId, TabRecord};

/// Entry type under which the serialized tab travels.
pub const TAB_PAYLOAD_TYPE: &str = "tabstrip/tab";

/// Keys owned by the payload itself; host extras may not shadow them.
const RESERVED_KEYS: [&str; 4] = ["id", "title", "favicon", "sourceInstanceId"];

/// Entry type of the zero-length marker tagging a drag with its source.
pub fn source_marker_type(instance_id: &InstanceId) -> String {
    format!("tabstrip/source-id={instance_id}")
}

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("drag carries no `{TAB_PAYLOAD_TYPE}` entry")]
    Missing,
    #[error("malformed tab payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Serialized tab as it travels through a drag.
///
/// Only `title` and `favicon` are needed to rebuild a tab; `id` and
/// `source_instance_id` describe where it came from.  Any other key is kept
/// in `extra`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabPayload {
    #[serde(default)]
    pub id: Option<TabId>,
    #[serde(default)]
    pub title: Option<String>,
    /// `None` when the key is absent, `Some(None)` for an explicit `null`.
    #[serde(default, deserialize_with = "present_or_null")]
    pub favicon: Option<Option<String>>,
    #[serde(default)]
    pub source_instance_id: Option<InstanceId>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TabPayload {
    /// Builds the payload for `record`, layering `enrichment` under the
    /// record's own fields.
    pub fn from_record(record: &TabRecord, enrichment: Map<String, Value>) -> Self {
        let mut extra = enrichment;
        extra.extend(record.extra.clone());
        extra.retain(|key, _| !RESERVED_KEYS.contains(&key.as_str()));

        Self {
            id: Some(record.id),
            title: Some(record.title.clone()),
            favicon: Some(record.favicon.clone()),
            source_instance_id: Some(record.source_instance_id.clone()),
            extra,
        }
    }

    /// Reads the tab entry of `transfer`.
    pub fn from_transfer(transfer: &DataTransfer) -> Result<Self, PayloadError> {
        let raw = transfer
            .get_data(TAB_PAYLOAD_TYPE)
            .filter(|raw| !raw.is_empty())
            .ok_or(PayloadError::Missing)?;
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<String, PayloadError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Fields for a fresh tab built from this payload.  Identity is not
    /// carried over: the receiving strip mints its own.
    pub fn to_tab_data(&self) -> TabData {
        TabData {
            title: self.title.clone(),
            favicon: self.favicon.clone(),
            extra: self.extra.clone(),
        }
    }
}

/// Keeps a present key apart from a missing one: only called when the key
/// exists, so `null` becomes `Some(None)`.
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// In-process stand-in for a platform drag data store: typed string entries
/// plus the drag-image override.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataTransfer {
    entries: Vec<(String, String)>,
    drag_image_hidden: bool,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `data` under `kind`, replacing any previous entry of that type.
    pub fn set_data(&mut self, kind: impl Into<String>, data: impl Into<String>) {
        let kind = kind.into();
        let data = data.into();
        match self.entries.iter_mut().find(|(k, _)| *k == kind) {
            Some(entry) => entry.1 = data,
            None => self.entries.push((kind, data)),
        }
    }

    pub fn get_data(&self, kind: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == kind)
            .map(|(_, data)| data.as_str())
    }

    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(kind, _)| kind.as_str())
    }

    pub fn has_type(&self, kind: &str) -> bool {
        self.types().any(|k| k == kind)
    }

    /// Replaces the platform drag image with an empty one; the strip draws
    /// the dragged tab itself.
    pub fn hide_drag_image(&mut self) {
        self.drag_image_hidden = true;
    }

    pub fn drag_image_hidden(&self) -> bool {
        self.drag_image_hidden
    }
}

#[cfg(test)]
#[path = "../../tests/unit/strip_payload.rs"]
mod tests;

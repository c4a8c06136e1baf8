use std::fmt::Write;

use serde::Serialize;

use super::width_math::{SizeClass, StripGeometry, tab_outer_width};
use crate::strip::state::{InstanceId, TabId, TabRecord};

/// Render snapshot of one tab, everything an external renderer needs to
/// place and style it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabVisual {
    pub id: TabId,
    pub title: String,
    pub favicon: Option<String>,
    /// Outer width, margins included.
    pub width: i32,
    pub content_width: i32,
    /// Slot x inside the strip.
    pub x: i32,
    pub size_class: SizeClass,
    pub active: bool,
    pub just_added: bool,
    pub just_dragged: bool,
    pub dragging: bool,
    /// Left offset pinned while the tab is being dragged.
    pub left_override: Option<f64>,
    /// Translation replacing the slot x while dragging or settling.
    pub transform_override: Option<f64>,
}

impl TabVisual {
    pub(crate) fn new(record: &TabRecord, content_width: i32, x: i32) -> Self {
        Self {
            id: record.id,
            title: record.title.clone(),
            favicon: record.favicon.clone(),
            width: tab_outer_width(content_width),
            content_width,
            x,
            size_class: SizeClass::for_content_width(content_width),
            active: record.active,
            just_added: record.just_added,
            just_dragged: record.just_dragged,
            dragging: false,
            left_override: None,
            transform_override: None,
        }
    }

    /// Where the renderer should actually draw the tab.
    pub fn effective_x(&self) -> f64 {
        match (self.left_override, self.transform_override) {
            (Some(left), Some(translate)) => left + translate,
            (None, Some(translate)) => translate,
            (Some(left), None) => left + f64::from(self.x),
            (None, None) => f64::from(self.x),
        }
    }
}

/// Selector matching the strip root of `instance_id`.
pub fn instance_selector(instance_id: &InstanceId) -> String {
    format!(".tabstrip[data-instance-id=\"{instance_id}\"]")
}

/// Per-slot positioning rules, scoped so several strips can share a page.
pub fn style_rules(instance_id: &InstanceId, geometry: &StripGeometry) -> String {
    let root = instance_selector(instance_id);
    let mut css = String::new();
    for (i, position) in geometry.tab_positions.iter().enumerate() {
        let _ = writeln!(
            css,
            "{root} .tab:nth-child({}) {{ transform: translate3d({position}px, 0, 0) }}",
            i + 1
        );
    }
    css
}

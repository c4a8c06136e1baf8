use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Host-level behaviour of a strip.  Geometry constants are not part of it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripConfig {
    pub tabs: TabDefaultsConfig,
    pub animation: AnimationConfig,
    pub drag: DragConfig,
}

/// Fields used for a new tab when the caller does not supply them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabDefaultsConfig {
    pub default_title: String,
    pub default_favicon: Option<String>,
}

impl Default for TabDefaultsConfig {
    fn default() -> Self {
        Self {
            default_title: "New tab".to_string(),
            default_favicon: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// How long a freshly added tab keeps its "just added" marker.
    pub just_added_ms: u64,
}

impl AnimationConfig {
    pub fn just_added(&self) -> Duration {
        Duration::from_millis(self.just_added_ms)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self { just_added_ms: 500 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// A drag-move at x = 0 is dropped as synthetic unless the last tracked
    /// x was below this value.
    pub spurious_zero_threshold: f64,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            spurious_zero_threshold: 100.0,
        }
    }
}

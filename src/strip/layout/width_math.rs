//! Pure width allocation for the tab strip.
//!
//! Every function in this module is a pure calculation: given the usable
//! content width of the strip and a tab count it returns widths and
//! positions.  No state, no side effects, so calling it twice with the same
//! inputs always yields the same geometry.

use serde::Serialize;

// ── Constants ────────────────────────────────────────────────────────

/// Margin on each side of a tab's content, taken by the curved edges.
pub const TAB_CONTENT_MARGIN: i32 = 9;

/// Horizontal overlap between the contents of adjacent tabs.
pub const TAB_CONTENT_OVERLAP_DISTANCE: i32 = 1;

/// Minimum tab content width.
pub const TAB_CONTENT_MIN_WIDTH: i32 = 24;

/// Maximum tab content width.
pub const TAB_CONTENT_MAX_WIDTH: i32 = 240;

/// Content width below which a tab renders in the small mode.
pub const TAB_SIZE_SMALL: i32 = 84;

/// Content width below which a tab renders in the smaller mode.
pub const TAB_SIZE_SMALLER: i32 = 60;

/// Content width below which a tab renders in the mini mode.
pub const TAB_SIZE_MINI: i32 = 48;

// ── Size classes ─────────────────────────────────────────────────────

/// Reduced-chrome rendering mode signalled to the renderer.
///
/// Classes are ordered: a `Mini` tab is also `Smaller` and `Small`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SizeClass {
    Regular,
    Small,
    Smaller,
    Mini,
}

impl SizeClass {
    pub fn for_content_width(content_width: i32) -> Self {
        if content_width < TAB_SIZE_MINI {
            Self::Mini
        } else if content_width < TAB_SIZE_SMALLER {
            Self::Smaller
        } else if content_width < TAB_SIZE_SMALL {
            Self::Small
        } else {
            Self::Regular
        }
    }

    pub fn is_small(self) -> bool {
        self >= Self::Small
    }

    pub fn is_smaller(self) -> bool {
        self >= Self::Smaller
    }

    pub fn is_mini(self) -> bool {
        self == Self::Mini
    }
}

// ── Layout functions ─────────────────────────────────────────────────

/// Distributes `container_width` among `tab_count` tabs.
///
/// The floored target width is clamped to
/// `[TAB_CONTENT_MIN_WIDTH, TAB_CONTENT_MAX_WIDTH]`.  Pixels lost to flooring
/// go one at a time to the leftmost tabs, unless the target is already at the
/// maximum.  A non-positive container degrades to minimum-width tabs that
/// overflow the strip.
pub fn tab_content_widths(container_width: i32, tab_count: usize) -> Vec<i32> {
    if tab_count == 0 {
        return Vec::new();
    }

    let count = tab_count as i64;
    let container = i64::from(container_width);
    let margins = 2 * i64::from(TAB_CONTENT_MARGIN);
    let cumulative_overlap = (count - 1) * i64::from(TAB_CONTENT_OVERLAP_DISTANCE);

    let target = (container - margins + cumulative_overlap) as f64 / count as f64;
    let clamped = target.clamp(
        f64::from(TAB_CONTENT_MIN_WIDTH),
        f64::from(TAB_CONTENT_MAX_WIDTH),
    );
    let floored = clamped.floor() as i32;

    let total_using_target = i64::from(floored) * count + margins - cumulative_overlap;
    let mut extra_remaining = container - total_using_target;

    let mut widths = Vec::with_capacity(tab_count);
    for _ in 0..tab_count {
        let extra = if floored < TAB_CONTENT_MAX_WIDTH && extra_remaining > 0 {
            1
        } else {
            0
        };
        widths.push(floored + extra);
        if extra_remaining > 0 {
            extra_remaining -= 1;
        }
    }
    widths
}

/// Returns the x of each tab's content area, accounting for overlap.
pub fn tab_content_positions(content_widths: &[i32]) -> Vec<i32> {
    let mut position = TAB_CONTENT_MARGIN;
    content_widths
        .iter()
        .enumerate()
        .map(|(i, width)| {
            let offset = i as i32 * TAB_CONTENT_OVERLAP_DISTANCE;
            let x = position - offset;
            position += width;
            x
        })
        .collect()
}

/// Returns the x of each tab's outer box (content position minus margin).
pub fn tab_positions(content_positions: &[i32]) -> Vec<i32> {
    content_positions
        .iter()
        .map(|position| position - TAB_CONTENT_MARGIN)
        .collect()
}

/// Outer width of a tab, margins included.
pub fn tab_outer_width(content_width: i32) -> i32 {
    content_width + 2 * TAB_CONTENT_MARGIN
}

/// Geometry of a strip for one `(tab_count, container_width)` pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StripGeometry {
    pub content_widths: Vec<i32>,
    pub content_positions: Vec<i32>,
    pub tab_positions: Vec<i32>,
}

impl StripGeometry {
    pub fn compute(container_width: i32, tab_count: usize) -> Self {
        let content_widths = tab_content_widths(container_width, tab_count);
        let content_positions = tab_content_positions(&content_widths);
        let tab_positions = tab_positions(&content_positions);
        Self {
            content_widths,
            content_positions,
            tab_positions,
        }
    }

    pub fn len(&self) -> usize {
        self.content_widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content_widths.is_empty()
    }

    /// Total width the tabs occupy, end margins included.
    pub fn total_width(&self) -> i64 {
        if self.is_empty() {
            return 0;
        }
        let sum: i64 = self.content_widths.iter().map(|w| i64::from(*w)).sum();
        let overlap = (self.len() as i64 - 1) * i64::from(TAB_CONTENT_OVERLAP_DISTANCE);
        sum + 2 * i64::from(TAB_CONTENT_MARGIN) - overlap
    }
}

// ── Tests ────────────────────────────────────────────────────────────

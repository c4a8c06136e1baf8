mod index_resolver;
mod style;
mod width_math;

pub use index_resolver::nearest_index;
pub use style::{TabVisual, instance_selector, style_rules};
pub use width_math::{
    SizeClass, StripGeometry, TAB_CONTENT_MARGIN, TAB_CONTENT_MAX_WIDTH, TAB_CONTENT_MIN_WIDTH,
    TAB_CONTENT_OVERLAP_DISTANCE, TAB_SIZE_MINI, TAB_SIZE_SMALL, TAB_SIZE_SMALLER,
    tab_content_positions, tab_content_widths, tab_outer_width, tab_positions,
};

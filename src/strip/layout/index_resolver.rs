//! Maps a dragged tab's x-coordinate to the slot it should occupy.

/// Returns the index of the position closest to `x`.
///
/// Ties keep the leftmost candidate.  Returns `None` when `positions` is
/// empty (or `x` is not a number), so callers never index an empty strip.
pub fn nearest_index(x: f64, positions: &[i32]) -> Option<usize> {
    let mut closest = f64::INFINITY;
    let mut closest_index = None;

    for (i, position) in positions.iter().enumerate() {
        let distance = (x - f64::from(*position)).abs();
        if distance < closest {
            closest = distance;
            closest_index = Some(i);
        }
    }

    closest_index
}

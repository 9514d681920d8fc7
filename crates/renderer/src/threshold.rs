use crate::scale::{to_fixed, Scale};

/// Below this maximum the threshold line is not drawn at all.
pub const MIN_THRESHOLD_SCALE: f64 = 2.0;

/// Row whose implied value is closest to `threshold`.
///
/// Only rows `0..grid_height` are candidates (the zero baseline never
/// carries the line).  Equal distances resolve to the lowest row index.
///
/// Distances are compared in fixed point and scaled by `grid_height`:
/// `|max * (grid_height - row) - threshold * grid_height|`.
pub fn locate(scale: &Scale, threshold: f64) -> Option<usize> {
    let max = to_fixed(scale.max_value());
    if max < to_fixed(MIN_THRESHOLD_SCALE) {
        return None;
    }

    let gh = scale.grid_height() as i128;
    let target = to_fixed(threshold) * gh;

    let mut best: Option<(usize, i128)> = None;
    for row in 0..scale.grid_height() {
        let distance = (max * (gh - row as i128) - target).abs();
        match best {
            Some((_, closest)) if distance >= closest => {}
            _ => best = Some((row, distance)),
        }
    }
    best.map(|(row, _)| row)
}

/// Linearly remap `value` from `[in_min, in_max]` to `[out_min, out_max]`.
///
/// The input ranges may be reversed (in_min > in_max), which is how the
/// weight mapping inverts distance into intensity.
pub fn map_range(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Convert a body-part-to-letter distance into a font-weight value.
///
/// Weight runs linearly from `max_weight` at distance 0 down to 0 at
/// `threshold_radius`; at or beyond the threshold the letter is not
/// influenced at all (`None`). Negative distances cannot occur
/// geometrically and are clamped to 0.
pub fn map_weight(distance: f64, threshold_radius: f64, max_weight: f64) -> Option<f64> {
    if distance >= threshold_radius {
        return None;
    }
    let distance = distance.max(0.0);
    let weight = map_range(distance, threshold_radius, 0.0, 0.0, max_weight);
    Some(weight.clamp(0.0, max_weight))
}

#[cfg(test)]
#[path = "../../tests/unit/board/weight.rs"]
mod tests;

//! Progress ring geometry
//!
//! The rank ring is a circle of fixed radius whose outline is revealed by
//! animating `stroke-dashoffset`. An offset equal to the full circumference
//! hides the stroke entirely; an offset of zero draws the whole circle.

use std::f64::consts::PI;

/// Radius of the progress ring, in SVG user units
pub const RING_RADIUS: f64 = 40.0;

/// Circumference of the progress ring (`2·π·r`)
pub const RING_CIRCUMFERENCE: f64 = 2.0 * PI * RING_RADIUS;

/// Name of the keyframe animation driving the ring fill
pub const PROGRESS_ANIMATION_NAME: &str = "rankAnimation";

/// Compute the `stroke-dashoffset` that leaves `value` percent of the ring drawn.
///
/// `value` is clamped to `[0, 100]`; NaN counts as zero progress.
///
/// ```rust
/// use stat_card::progress::{circle_progress_offset, RING_CIRCUMFERENCE};
///
/// assert_eq!(circle_progress_offset(0.0), RING_CIRCUMFERENCE);
/// assert_eq!(circle_progress_offset(100.0), 0.0);
/// ```
pub fn circle_progress_offset(value: f64) -> f64 {
    let value = if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    };
    ((100.0 - value) / 100.0) * RING_CIRCUMFERENCE
}

/// Keyframes animating the ring clockwise from empty to `progress` percent
pub fn progress_keyframes(progress: f64) -> String {
    format!(
        r#"@keyframes {name} {{
  from {{
    stroke-dashoffset: {from};
  }}
  to {{
    stroke-dashoffset: {to};
  }}
}}"#,
        name = PROGRESS_ANIMATION_NAME,
        from = circle_progress_offset(0.0),
        to = circle_progress_offset(progress),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_empty_ring_offset_is_full_circumference() {
        assert!((circle_progress_offset(0.0) - 2.0 * PI * 40.0).abs() < EPSILON);
    }

    #[test]
    fn test_full_ring_offset_is_zero() {
        assert!(circle_progress_offset(100.0).abs() < EPSILON);
    }

    #[test]
    fn test_half_ring() {
        let half = circle_progress_offset(50.0);
        assert!((half - RING_CIRCUMFERENCE / 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_values_below_zero_clamp() {
        for value in [-0.001, -1.0, -50.0, -1e9, f64::NEG_INFINITY] {
            assert_eq!(circle_progress_offset(value), circle_progress_offset(0.0));
        }
    }

    #[test]
    fn test_values_above_hundred_clamp() {
        for value in [100.001, 101.0, 250.0, 1e9, f64::INFINITY] {
            assert_eq!(circle_progress_offset(value), circle_progress_offset(100.0));
        }
    }

    #[test]
    fn test_nan_counts_as_empty() {
        assert_eq!(circle_progress_offset(f64::NAN), circle_progress_offset(0.0));
    }

    #[test]
    fn test_monotonically_non_increasing() {
        let mut previous = circle_progress_offset(0.0);
        for step in 1..=1000 {
            let value = step as f64 / 10.0;
            let offset = circle_progress_offset(value);
            assert!(
                offset <= previous,
                "offset increased at {}: {} > {}",
                value,
                offset,
                previous
            );
            previous = offset;
        }
    }

    #[test]
    fn test_keyframes_span_empty_to_progress() {
        let css = progress_keyframes(100.0);
        assert!(css.starts_with("@keyframes rankAnimation {"));
        assert!(css.contains(&format!("stroke-dashoffset: {};", RING_CIRCUMFERENCE)));
        assert!(css.contains("stroke-dashoffset: 0;"));
    }

    #[test]
    fn test_keyframes_clamp_progress() {
        assert_eq!(progress_keyframes(140.0), progress_keyframes(100.0));
        assert_eq!(progress_keyframes(-3.0), progress_keyframes(0.0));
    }
}

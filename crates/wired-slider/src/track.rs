//! Value <-> percentage <-> pixel offset mapping.
//!
//! These are the only numeric rules of the slider. Painting and drag math both
//! go through them so the knob drawn on screen and the value committed at the
//! end of a drag always agree. Nothing here fails: out-of-range input is
//! coerced, never rejected.

/// Knob radius used when none (or a non-positive one) is configured.
pub const DEFAULT_KNOB_RADIUS: f32 = 10.0;

/// Normalized position of `value` inside `[min, max]`, clamped to `[0, 1]`.
///
/// A degenerate range (`max <= min`) pins the slider at 0.
pub fn percentage_of(value: f32, min: f32, max: f32) -> f32 {
    if max <= min || max.is_nan() || min.is_nan() {
        return 0.0;
    }
    let pct = (value - min) / (max - min);
    if pct.is_nan() {
        return 0.0;
    }
    pct.clamp(0.0, 1.0)
}

/// Whole-pixel knob offset for `pct` along a bar of `bar_width` px.
pub fn offset_of(pct: f32, bar_width: f32) -> f32 {
    (pct * bar_width).round()
}

/// Value under a knob offset. An unusable bar maps everything to `min`.
pub fn value_of(offset_px: f32, bar_width: f32, min: f32, max: f32) -> f32 {
    if bar_width <= 0.0 || bar_width.is_nan() {
        return min;
    }
    min + (offset_px / bar_width) * (max - min)
}

pub fn clamp_offset(offset_px: f32, bar_width: f32) -> f32 {
    offset_px.min(bar_width).max(0.0)
}

/// Distance the knob center can travel: host width minus the knob diameter.
pub fn bar_width_for(host_width: f32, knob_radius: f32) -> f32 {
    (host_width - 2.0 * knob_radius).max(0.0)
}

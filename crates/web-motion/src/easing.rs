//! Easing Curves

/// Cubic ease-out: `1 - (1 - t)^3`, with `t` clamped to [0, 1].
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Fraction of `duration_ms` covered by `elapsed_ms`, clamped to [0, 1].
pub fn progress_fraction(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

/// Value of an ease-out tween from `start` to `end` after `elapsed_ms`.
///
/// Returns exactly `end` once the duration has passed.
pub fn ease_between(start: f64, end: f64, elapsed_ms: f64, duration_ms: f64) -> f64 {
    let t = progress_fraction(elapsed_ms, duration_ms);
    if t >= 1.0 {
        return end;
    }
    start + (end - start) * ease_out_cubic(t)
}

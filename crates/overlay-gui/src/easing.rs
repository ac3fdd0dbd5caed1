//! Easing curves for animation progress
//!
//! Every curve maps 0.0 to 0.0 and 1.0 to 1.0. Some (back, elastic) overshoot
//! in between, which is why animated colors are clamped when packed.

/// Easing function type: takes progress (0.0 to 1.0) and returns eased value
pub type EasingFn = fn(f32) -> f32;

/// Linear interpolation (no easing)
pub fn linear(t: f32) -> f32 {
    t
}

/// Ease in (quadratic) - slow start, accelerating
pub fn ease_in(t: f32) -> f32 {
    t * t
}

/// Ease out (quadratic) - fast start, decelerating
pub fn ease_out(t: f32) -> f32 {
    t * (2.0 - t)
}

/// Ease in-out (quadratic) - slow start and end, fast middle
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// Ease in (cubic)
pub fn ease_in_cubic(t: f32) -> f32 {
    t * t * t
}

/// Ease out (cubic)
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t - 1.0;
    t * t * t + 1.0
}

/// Ease in-out (cubic)
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let t = t - 1.0;
        1.0 + 4.0 * t * t * t
    }
}

/// Ease out with a slight overshoot past the target before settling
pub fn ease_out_back(t: f32) -> f32 {
    const C1: f32 = 1.70158;
    const C3: f32 = C1 + 1.0;
    let t = t - 1.0;
    1.0 + C3 * t * t * t + C1 * t * t
}

/// Bouncing settle at the end
pub fn ease_out_bounce(t: f32) -> f32 {
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;
    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

/// Smooth sine-based ease in-out
pub fn ease_in_out_sine(t: f32) -> f32 {
    -((std::f32::consts::PI * t).cos() - 1.0) / 2.0
}

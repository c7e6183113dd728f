//! Easing curves.
//!
//! Maps linear progress in `[0, 1]` to an eased fraction. Every curve
//! returns exactly `0.0` at `0.0` and exactly `1.0` at `1.0`; in between,
//! `Elastic` and `Back` intentionally leave the unit range.

use std::f32::consts::PI;

/// Which end of the curve the easing is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EaseMode {
    In,
    Out,
    InOut,
}

/// Easing function catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Easing {
    #[default]
    Linear,
    Quadratic(EaseMode),
    Cubic(EaseMode),
    Quartic(EaseMode),
    Quintic(EaseMode),
    Sinusoidal(EaseMode),
    Exponential(EaseMode),
    Circular(EaseMode),
    Elastic(EaseMode),
    Back(EaseMode),
    Bounce(EaseMode),
}

const BACK_OVERSHOOT: f32 = 1.701_58;
const BACK_OVERSHOOT_IN_OUT: f32 = BACK_OVERSHOOT * 1.525;

impl Easing {
    /// Evaluates the curve at `t`.
    ///
    /// `t` is clamped to `[0, 1]` first; the output is not clamped.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        match self {
            Easing::Linear => t,
            Easing::Quadratic(mode) => polynomial(mode, t, 2),
            Easing::Cubic(mode) => polynomial(mode, t, 3),
            Easing::Quartic(mode) => polynomial(mode, t, 4),
            Easing::Quintic(mode) => polynomial(mode, t, 5),
            Easing::Sinusoidal(mode) => sinusoidal(mode, t),
            Easing::Exponential(mode) => exponential(mode, t),
            Easing::Circular(mode) => circular(mode, t),
            Easing::Elastic(mode) => elastic(mode, t),
            Easing::Back(mode) => back(mode, t),
            Easing::Bounce(mode) => bounce(mode, t),
        }
    }
}

fn polynomial(mode: EaseMode, t: f32, power: i32) -> f32 {
    match mode {
        EaseMode::In => t.powi(power),
        EaseMode::Out => 1.0 - (1.0 - t).powi(power),
        EaseMode::InOut => {
            if t < 0.5 {
                0.5 * (2.0 * t).powi(power)
            } else {
                1.0 - 0.5 * (2.0 - 2.0 * t).powi(power)
            }
        }
    }
}

fn sinusoidal(mode: EaseMode, t: f32) -> f32 {
    match mode {
        EaseMode::In => 1.0 - ((1.0 - t) * PI / 2.0).sin(),
        EaseMode::Out => (t * PI / 2.0).sin(),
        EaseMode::InOut => 0.5 * (1.0 - (PI * t).cos()),
    }
}

fn exponential(mode: EaseMode, t: f32) -> f32 {
    match mode {
        EaseMode::In => 1024f32.powf(t - 1.0),
        EaseMode::Out => 1.0 - 2f32.powf(-10.0 * t),
        EaseMode::InOut => {
            let t = t * 2.0;
            if t < 1.0 {
                0.5 * 1024f32.powf(t - 1.0)
            } else {
                0.5 * (2.0 - 2f32.powf(-10.0 * (t - 1.0)))
            }
        }
    }
}

fn circular(mode: EaseMode, t: f32) -> f32 {
    match mode {
        EaseMode::In => 1.0 - (1.0 - t * t).sqrt(),
        EaseMode::Out => {
            let u = t - 1.0;
            (1.0 - u * u).sqrt()
        }
        EaseMode::InOut => {
            let t = t * 2.0;
            if t < 1.0 {
                -0.5 * ((1.0 - t * t).sqrt() - 1.0)
            } else {
                let u = t - 2.0;
                0.5 * ((1.0 - u * u).sqrt() + 1.0)
            }
        }
    }
}

fn elastic(mode: EaseMode, t: f32) -> f32 {
    match mode {
        EaseMode::In => -(2f32.powf(10.0 * (t - 1.0))) * ((t - 1.1) * 5.0 * PI).sin(),
        EaseMode::Out => 2f32.powf(-10.0 * t) * ((t - 0.1) * 5.0 * PI).sin() + 1.0,
        EaseMode::InOut => {
            let t = t * 2.0;
            if t < 1.0 {
                -0.5 * 2f32.powf(10.0 * (t - 1.0)) * ((t - 1.1) * 5.0 * PI).sin()
            } else {
                0.5 * 2f32.powf(-10.0 * (t - 1.0)) * ((t - 1.1) * 5.0 * PI).sin() + 1.0
            }
        }
    }
}

fn back(mode: EaseMode, t: f32) -> f32 {
    match mode {
        EaseMode::In => {
            let s = BACK_OVERSHOOT;
            t * t * ((s + 1.0) * t - s)
        }
        EaseMode::Out => {
            let s = BACK_OVERSHOOT;
            let u = t - 1.0;
            u * u * ((s + 1.0) * u + s) + 1.0
        }
        EaseMode::InOut => {
            let s = BACK_OVERSHOOT_IN_OUT;
            let t = t * 2.0;
            if t < 1.0 {
                0.5 * (t * t * ((s + 1.0) * t - s))
            } else {
                let u = t - 2.0;
                0.5 * (u * u * ((s + 1.0) * u + s) + 2.0)
            }
        }
    }
}

fn bounce_out(t: f32) -> f32 {
    const N: f32 = 7.5625;
    const D: f32 = 2.75;

    if t < 1.0 / D {
        N * t * t
    } else if t < 2.0 / D {
        let u = t - 1.5 / D;
        N * u * u + 0.75
    } else if t < 2.5 / D {
        let u = t - 2.25 / D;
        N * u * u + 0.9375
    } else {
        let u = t - 2.625 / D;
        N * u * u + 0.984_375
    }
}

fn bounce(mode: EaseMode, t: f32) -> f32 {
    match mode {
        EaseMode::In => 1.0 - bounce_out(1.0 - t),
        EaseMode::Out => bounce_out(t),
        EaseMode::InOut => {
            if t < 0.5 {
                (1.0 - bounce_out(1.0 - t * 2.0)) * 0.5
            } else {
                bounce_out(t * 2.0 - 1.0) * 0.5 + 0.5
            }
        }
    }
}

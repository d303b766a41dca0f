// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative transition descriptions.

/// Timing curve of a transition.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// CSS `ease-out`.
    EaseOut,
    /// CSS `cubic-bezier(x1, y1, x2, y2)`.
    CubicBezier {
        /// First control point, x (within `0..=1`).
        x1: f64,
        /// First control point, y.
        y1: f64,
        /// Second control point, x (within `0..=1`).
        x2: f64,
        /// Second control point, y.
        y2: f64,
    },
}

impl Easing {
    /// Shorthand for [`Easing::CubicBezier`].
    pub const fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::CubicBezier { x1, y1, x2, y2 }
    }

    /// Eased progress at linear progress `fraction`.
    ///
    /// `fraction` is clamped to `0..=1`. Curves with overshooting control points may
    /// return values outside `0..=1` in between.
    pub fn sample(self, fraction: f64) -> f64 {
        match self {
            Self::Linear => fraction.clamp(0.0, 1.0),
            Self::EaseOut => solve_cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Self::CubicBezier { x1, y1, x2, y2 } => solve_cubic_bezier(x1, y1, x2, y2, fraction),
        }
    }
}

/// How a render parameter moves to its new value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TransitionSpec {
    /// Jump immediately.
    None,
    /// Animate over a fixed duration.
    Timed {
        /// Duration in milliseconds.
        duration_ms: u64,
        /// Timing curve.
        easing: Easing,
    },
}

impl TransitionSpec {
    /// A timed transition.
    pub const fn timed(duration_ms: u64, easing: Easing) -> Self {
        Self::Timed {
            duration_ms,
            easing,
        }
    }

    /// Duration in milliseconds; zero for [`TransitionSpec::None`].
    pub const fn duration_ms(self) -> u64 {
        match self {
            Self::None => 0,
            Self::Timed { duration_ms, .. } => duration_ms,
        }
    }

    /// Value between `from` and `to` after `elapsed_ms`.
    pub fn interpolate(self, from: f64, to: f64, elapsed_ms: u64) -> f64 {
        match self {
            Self::Timed {
                duration_ms,
                easing,
            } if duration_ms > 0 && elapsed_ms < duration_ms => {
                let progress = easing.sample(elapsed_ms as f64 / duration_ms as f64);
                from + (to - from) * progress
            }
            _ => to,
        }
    }
}

fn solve_cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, fraction: f64) -> f64 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let curve = |a: f64, b: f64, c: f64, t: f64| ((a * t + b) * t + c) * t;
    let slope = |a: f64, b: f64, c: f64, t: f64| (3.0 * a * t + 2.0 * b) * t + c;

    // Newton-Raphson for the parameter whose x matches `fraction`.
    let mut t = fraction;
    let mut converged = false;
    for _ in 0..8 {
        let error = curve(ax, bx, cx, t) - fraction;
        if error.abs() < 1e-7 {
            converged = true;
            break;
        }
        let dx = slope(ax, bx, cx, t);
        if dx.abs() < 1e-7 {
            break;
        }
        t = (t - error / dx).clamp(0.0, 1.0);
    }

    if !converged {
        let (mut low, mut high) = (0.0, 1.0);
        t = fraction;
        for _ in 0..32 {
            let error = curve(ax, bx, cx, t) - fraction;
            if error.abs() < 1e-7 {
                break;
            }
            if error > 0.0 {
                high = t;
            } else {
                low = t;
            }
            t = 0.5 * (low + high);
        }
    }

    curve(ay, by, cy, t)
}

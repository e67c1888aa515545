/// Easing curve mapping normalized progress `t ∈ [0, 1]` to eased progress.
///
/// Polynomial curves are exact. [`Ease::CubicBezier`] follows CSS
/// `cubic-bezier(x1, y1, x2, y2)` semantics and may overshoot `[0, 1]` on the
/// output side (the "back" presets rely on that).
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Identity.
    #[default]
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in-out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in-out.
    InOutCubic,
    /// CSS-style cubic bezier with fixed endpoints `(0,0)` and `(1,1)`.
    CubicBezier {
        /// First control point x (must be in `[0, 1]`).
        x1: f64,
        /// First control point y.
        y1: f64,
        /// Second control point x (must be in `[0, 1]`).
        x2: f64,
        /// Second control point y.
        y2: f64,
    },
}

impl Ease {
    /// Resolve a motion-token easing name.
    ///
    /// Unknown names resolve to [`Ease::Linear`].
    pub fn from_name(name: &str) -> Self {
        let bezier = |x1, y1, x2, y2| Self::CubicBezier { x1, y1, x2, y2 };
        match name.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "linear" => Self::Linear,
            "ease_in" => bezier(0.42, 0.0, 1.0, 1.0),
            "ease_out" => bezier(0.0, 0.0, 0.58, 1.0),
            "ease_in_out" => bezier(0.42, 0.0, 0.58, 1.0),
            "ease_in_back" => bezier(0.6, -0.28, 0.735, 0.045),
            "ease_out_back" => bezier(0.175, 0.885, 0.32, 1.275),
            "ease_in_out_back" => bezier(0.68, -0.55, 0.265, 1.55),
            "ease_out_expo" => bezier(0.16, 1.0, 0.3, 1.0),
            "in_quad" => Self::InQuad,
            "out_quad" => Self::OutQuad,
            "in_out_quad" => Self::InOutQuad,
            "in_cubic" => Self::InCubic,
            "out_cubic" => Self::OutCubic,
            "in_out_cubic" => Self::InOutCubic,
            other => {
                tracing::debug!(name = other, "unknown easing name, using linear");
                Self::Linear
            }
        }
    }

    /// Reject bezier control points whose x lies outside `[0, 1]`.
    pub fn is_valid(self) -> bool {
        match self {
            Self::CubicBezier { x1, y1, x2, y2 } => {
                (0.0..=1.0).contains(&x1)
                    && (0.0..=1.0).contains(&x2)
                    && y1.is_finite()
                    && y2.is_finite()
            }
            _ => true,
        }
    }

    /// Apply the curve; `t` is clamped to `[0, 1]` first.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::CubicBezier { x1, y1, x2, y2 } => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let s = solve_bezier_param(t, x1, x2);
                bezier_component(s, y1, y2)
            }
        }
    }
}

// B(s) for one axis with P0 = 0 and P3 = 1.
fn bezier_component(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_derivative(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

// x(s) is monotonic for x1, x2 in [0, 1]; Newton first, bisection as fallback.
fn solve_bezier_param(x: f64, x1: f64, x2: f64) -> f64 {
    const EPS: f64 = 1e-9;

    let mut s = x;
    for _ in 0..8 {
        let err = bezier_component(s, x1, x2) - x;
        if err.abs() < EPS {
            return s;
        }
        let d = bezier_derivative(s, x1, x2);
        if d.abs() < 1e-6 {
            break;
        }
        s -= err / d;
    }

    let (mut lo, mut hi) = (0.0f64, 1.0f64);
    s = x;
    for _ in 0..64 {
        let v = bezier_component(s, x1, x2);
        if (v - x).abs() < EPS {
            break;
        }
        if v < x {
            lo = s;
        } else {
            hi = s;
        }
        s = 0.5 * (lo + hi);
    }
    s
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;

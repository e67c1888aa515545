use crate::{
    animation::ease::Ease,
    foundation::error::{FramekitError, FramekitResult},
    foundation::math::lerp,
};

/// Behavior outside the breakpoint range, chosen per side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Continue the linear trend of the nearest segment.
    #[default]
    Extend,
    /// Hold the nearest edge output.
    Clamp,
}

/// Edge policies and in-segment easing for [`Interpolator`].
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InterpolateOptions {
    /// Policy for inputs below the first breakpoint.
    #[serde(default)]
    pub left: Extrapolate,
    /// Policy for inputs above the last breakpoint.
    #[serde(default)]
    pub right: Extrapolate,
    /// Curve applied to progress inside each segment.
    #[serde(default)]
    pub easing: Ease,
}

impl InterpolateOptions {
    /// Clamp on both sides.
    pub fn clamped() -> Self {
        Self {
            left: Extrapolate::Clamp,
            right: Extrapolate::Clamp,
            easing: Ease::Linear,
        }
    }

    /// Extend on both sides.
    pub fn extended() -> Self {
        Self::default()
    }

    /// Replace the in-segment easing.
    pub fn with_easing(mut self, easing: Ease) -> Self {
        self.easing = easing;
        self
    }
}

/// Piecewise-linear mapping over validated breakpoints.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Interpolator {
    inputs: Vec<f64>,
    outputs: Vec<f64>,
    options: InterpolateOptions,
}

impl Interpolator {
    /// Validate breakpoints and build the interpolator.
    ///
    /// Inputs must be finite and strictly increasing, outputs finite, both of
    /// the same length (at least two).
    pub fn new(
        inputs: impl Into<Vec<f64>>,
        outputs: impl Into<Vec<f64>>,
        options: InterpolateOptions,
    ) -> FramekitResult<Self> {
        let inputs = inputs.into();
        let outputs = outputs.into();
        validate_breakpoints(&inputs, &outputs)?;
        if !options.easing.is_valid() {
            return Err(FramekitError::animation(
                "cubic-bezier x control points must be within [0, 1]",
            ));
        }
        Ok(Self {
            inputs,
            outputs,
            options,
        })
    }

    /// Breakpoint inputs.
    pub fn inputs(&self) -> &[f64] {
        &self.inputs
    }

    /// Breakpoint outputs.
    pub fn outputs(&self) -> &[f64] {
        &self.outputs
    }

    /// Map `x` through the breakpoints. NaN maps to the first output.
    ///
    /// With both edges clamped, eased values never leave the segment's output range.
    pub fn sample(&self, x: f64) -> f64 {
        let n = self.inputs.len();
        if x.is_nan() {
            return self.outputs[0];
        }

        if x < self.inputs[0] {
            return match self.options.left {
                Extrapolate::Clamp => self.outputs[0],
                Extrapolate::Extend => self.segment_linear(0, x),
            };
        }
        if x > self.inputs[n - 1] {
            return match self.options.right {
                Extrapolate::Clamp => self.outputs[n - 1],
                Extrapolate::Extend => self.segment_linear(n - 2, x),
            };
        }

        let idx = self.inputs.partition_point(|&b| b <= x);
        let seg = idx.saturating_sub(1).min(n - 2);
        let (x0, x1) = (self.inputs[seg], self.inputs[seg + 1]);
        let t = (x - x0) / (x1 - x0);
        let (y0, y1) = (self.outputs[seg], self.outputs[seg + 1]);
        let y = lerp(y0, y1, self.options.easing.apply(t));
        // Overshooting curves stay inside the segment when both edges clamp.
        if self.options.left == Extrapolate::Clamp && self.options.right == Extrapolate::Clamp {
            y.clamp(y0.min(y1), y0.max(y1))
        } else {
            y
        }
    }

    // Unclamped, un-eased trend of one segment.
    fn segment_linear(&self, seg: usize, x: f64) -> f64 {
        let (x0, x1) = (self.inputs[seg], self.inputs[seg + 1]);
        let t = (x - x0) / (x1 - x0);
        lerp(self.outputs[seg], self.outputs[seg + 1], t)
    }
}

/// One-shot interpolation; validates the breakpoints on every call.
///
/// Prefer [`Interpolator`] when the same breakpoints are sampled per frame.
pub fn interpolate(
    x: f64,
    inputs: &[f64],
    outputs: &[f64],
    options: InterpolateOptions,
) -> FramekitResult<f64> {
    Ok(Interpolator::new(inputs, outputs, options)?.sample(x))
}

/// Two-breakpoint interpolation for internally generated spans.
///
/// A degenerate span (`x0 >= x1`) behaves as a step at `x1`.
pub(crate) fn interpolate_span(
    x: f64,
    (x0, x1): (f64, f64),
    (y0, y1): (f64, f64),
    clamp: bool,
) -> f64 {
    if x1 <= x0 {
        return if x < x1 { y0 } else { y1 };
    }
    let mut t = (x - x0) / (x1 - x0);
    if clamp {
        t = t.clamp(0.0, 1.0);
    }
    lerp(y0, y1, t)
}

fn validate_breakpoints(inputs: &[f64], outputs: &[f64]) -> FramekitResult<()> {
    if inputs.len() != outputs.len() {
        return Err(FramekitError::animation(format!(
            "breakpoint length mismatch: {} inputs vs {} outputs",
            inputs.len(),
            outputs.len()
        )));
    }
    if inputs.len() < 2 {
        return Err(FramekitError::animation(
            "interpolation needs at least two breakpoints",
        ));
    }
    if inputs.iter().chain(outputs).any(|v| !v.is_finite()) {
        return Err(FramekitError::animation("breakpoints must be finite"));
    }
    if !inputs.windows(2).all(|w| w[0] < w[1]) {
        return Err(FramekitError::animation(
            "breakpoint inputs must be strictly increasing",
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;

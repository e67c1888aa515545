use crate::{
    foundation::core::Fps,
    foundation::error::{FramekitError, FramekitResult},
    style::variant::NamedVariant,
};

/// Physical parameters of a damped spring moving from 0 toward 1.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    /// Damping coefficient (>= 0).
    pub damping: f64,
    /// Mass (> 0).
    pub mass: f64,
    /// Stiffness (> 0).
    pub stiffness: f64,
    /// Cap progress at 1 instead of overshooting.
    #[serde(default)]
    pub overshoot_clamping: bool,
}

impl Default for SpringConfig {
    fn default() -> Self {
        SpringPreset::Smooth.config()
    }
}

impl SpringConfig {
    /// Build and validate a config without overshoot clamping.
    pub fn new(damping: f64, mass: f64, stiffness: f64) -> FramekitResult<Self> {
        let cfg = Self {
            damping,
            mass,
            stiffness,
            overshoot_clamping: false,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Toggle overshoot clamping.
    pub fn with_overshoot_clamping(mut self, clamp: bool) -> Self {
        self.overshoot_clamping = clamp;
        self
    }

    /// Reject non-finite values, non-positive mass/stiffness and negative damping.
    pub fn validate(&self) -> FramekitResult<()> {
        if ![self.damping, self.mass, self.stiffness]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(FramekitError::animation("spring parameters must be finite"));
        }
        if self.mass <= 0.0 {
            return Err(FramekitError::animation("spring mass must be > 0"));
        }
        if self.stiffness <= 0.0 {
            return Err(FramekitError::animation("spring stiffness must be > 0"));
        }
        if self.damping < 0.0 {
            return Err(FramekitError::animation("spring damping must be >= 0"));
        }
        Ok(())
    }

    /// Undamped angular frequency `sqrt(k / m)` in rad/s.
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Damping ratio `c / (2 sqrt(k m))`; >= 1 means no overshoot.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Progress at `t` seconds after start.
    pub fn progress_at_secs(&self, t: f64) -> f64 {
        if t <= 0.0 || !t.is_finite() {
            return if t == f64::INFINITY { 1.0 } else { 0.0 };
        }

        let omega0 = self.natural_frequency();
        let zeta = self.damping_ratio();

        // Displacement from the target, starting at -1 with zero velocity.
        let offset = if (zeta - 1.0).abs() < 1e-9 {
            -(1.0 + omega0 * t) * (-omega0 * t).exp()
        } else if zeta < 1.0 {
            let omega_d = omega0 * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * omega0 * t).exp();
            -envelope * ((omega_d * t).cos() + (zeta * omega0 / omega_d) * (omega_d * t).sin())
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r_slow = -omega0 * (zeta - root);
            let r_fast = -omega0 * (zeta + root);
            let a = r_fast / (r_slow - r_fast);
            let b = -r_slow / (r_slow - r_fast);
            a * (r_slow * t).exp() + b * (r_fast * t).exp()
        };

        let progress = 1.0 + offset;
        if self.overshoot_clamping {
            progress.min(1.0)
        } else {
            progress
        }
    }
}

/// Named spring presets from the motion design tokens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SpringPreset {
    /// Soft, slow motion.
    Gentle,
    /// Balanced motion used by most entrances.
    #[default]
    Smooth,
    /// Playful overshoot.
    Bouncy,
    /// Quick and clamped.
    Snappy,
    /// Strong elastic overshoot.
    Elastic,
}

impl SpringPreset {
    /// Concrete parameters for this preset.
    pub fn config(self) -> SpringConfig {
        let (damping, mass, stiffness, overshoot_clamping) = match self {
            Self::Gentle => (100.0, 1.0, 100.0, false),
            Self::Smooth => (200.0, 0.5, 200.0, false),
            Self::Bouncy => (15.0, 1.0, 300.0, false),
            Self::Snappy => (300.0, 0.3, 400.0, true),
            Self::Elastic => (8.0, 1.5, 200.0, false),
        };
        SpringConfig {
            damping,
            mass,
            stiffness,
            overshoot_clamping,
        }
    }
}

impl NamedVariant for SpringPreset {
    const ALL: &'static [Self] = &[
        Self::Gentle,
        Self::Smooth,
        Self::Bouncy,
        Self::Snappy,
        Self::Elastic,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Gentle => "gentle",
            Self::Smooth => "smooth",
            Self::Bouncy => "bouncy",
            Self::Snappy => "snappy",
            Self::Elastic => "elastic",
        }
    }
}

crate::style::variant::named_variant_serde!(SpringPreset);

/// Spring progress after `elapsed_frames` at `fps`.
///
/// Negative elapsed frames are the pre-start state and yield 0.
pub fn spring_progress(elapsed_frames: i64, fps: Fps, config: &SpringConfig) -> f64 {
    if elapsed_frames <= 0 {
        return 0.0;
    }
    config.progress_at_secs(fps.frames_to_secs(elapsed_frames as f64))
}

/// First frame from which progress stays within `tolerance` of 1.
///
/// Searches up to ten minutes of frames; `None` means the spring did not settle
/// in that window.
pub fn settle_frames(fps: Fps, config: &SpringConfig, tolerance: f64) -> Option<u64> {
    if config.damping == 0.0 {
        return None;
    }
    let max_frames = fps.secs_to_frames_floor(600.0);
    let tolerance = tolerance.abs();
    let mut last_outside = None;
    for f in 0..=max_frames {
        let p = spring_progress(f as i64, fps, config);
        if (1.0 - p).abs() > tolerance {
            last_outside = Some(f);
        }
    }
    match last_outside {
        Some(f) if f == max_frames => None,
        Some(f) => Some(f + 1),
        None => Some(0),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;

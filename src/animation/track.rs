use std::time::Duration;

use crate::{
    animation::ease::Ease,
    foundation::error::{WaveError, WaveResult},
    surface::wave_surface::WaveSurface,
};

/// The animatable ratios of a [`WaveSurface`], each bound to its typed setter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ratio {
    /// Horizontal phase offset.
    WaveShift,
    /// Fill level.
    WaterLevel,
    /// Wave height.
    Amplitude,
    /// Wavelength.
    WaveLength,
}

impl Ratio {
    /// Surface setter writing this ratio.
    pub fn setter(self) -> fn(&mut WaveSurface, f32) {
        match self {
            Self::WaveShift => WaveSurface::set_wave_shift_ratio,
            Self::WaterLevel => WaveSurface::set_water_level_ratio,
            Self::Amplitude => WaveSurface::set_amplitude_ratio,
            Self::WaveLength => WaveSurface::set_wave_length_ratio,
        }
    }

    /// Current value of this ratio on `surface`.
    pub fn get(self, surface: &WaveSurface) -> f32 {
        match self {
            Self::WaveShift => surface.wave_shift_ratio(),
            Self::WaterLevel => surface.water_level_ratio(),
            Self::Amplitude => surface.amplitude_ratio(),
            Self::WaveLength => surface.wave_length_ratio(),
        }
    }
}

/// What a track does once its duration has elapsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Repeat {
    /// Run once and hold the end value.
    #[default]
    Once,
    /// Jump back to the start and run again, forever.
    Restart,
    /// Run back and forth, forever.
    Reverse,
}

/// One ratio animated from `from` to `to` over `duration_ms`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RatioTrack {
    /// Ratio written on every tick.
    pub ratio: Ratio,
    /// Value at the start of a cycle.
    pub from: f32,
    /// Value at the end of a cycle.
    pub to: f32,
    /// Length of one cycle.
    pub duration_ms: u64,
    /// Curve applied to progress.
    #[serde(default)]
    pub ease: Ease,
    /// Behavior after the first cycle.
    #[serde(default)]
    pub repeat: Repeat,
}

impl RatioTrack {
    /// Reject non-finite endpoints and zero-length repeating cycles.
    pub fn validate(&self) -> WaveResult<()> {
        if !self.from.is_finite() || !self.to.is_finite() {
            return Err(WaveError::animation(format!(
                "{:?} track endpoints must be finite",
                self.ratio
            )));
        }
        if self.duration_ms == 0 && self.repeat != Repeat::Once {
            return Err(WaveError::animation(format!(
                "repeating {:?} track needs a positive duration",
                self.ratio
            )));
        }
        Ok(())
    }

    /// Normalized progress in `[0, 1]` before easing.
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let cycles = elapsed.as_secs_f64() / Duration::from_millis(self.duration_ms).as_secs_f64();
        match self.repeat {
            Repeat::Once => cycles.min(1.0),
            Repeat::Restart => cycles.fract(),
            Repeat::Reverse => {
                let index = cycles.floor();
                let fraction = cycles - index;
                if (index as u64) % 2 == 1 {
                    1.0 - fraction
                } else {
                    fraction
                }
            }
        }
    }

    /// Eased value `elapsed` after start.
    pub fn value_at(&self, elapsed: Duration) -> f32 {
        let t = self.ease.apply(self.progress(elapsed));
        let from = f64::from(self.from);
        let to = f64::from(self.to);
        (from + (to - from) * t) as f32
    }

    /// Value a forced stop settles on.
    pub fn end_value(&self) -> f32 {
        self.to
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/track.rs"]
mod tests;

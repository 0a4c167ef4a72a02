use crate::{
    animation::{
        ease::Ease,
        track::{Ratio, RatioTrack, Repeat},
    },
    foundation::error::WaveResult,
    shape::spec::ShapeKind,
};

const SHIFT_MS: u64 = 1000;
const WATER_LEVEL_MS: u64 = 10_000;
const AMPLITUDE_MS: u64 = 5000;
const LOADING_FILL_MS: u64 = 10_000;

/// The closed set of playback strategies a surface can run.
///
/// Each preset is a table of ratio tracks started and ended together, plus an optional
/// shape it forces on start.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnimatorPreset {
    /// Endless sideways motion with a one-off rise to half full.
    #[default]
    SimpleContinuous,
    /// A circle that fills to the brim over `fill_ms`.
    LoadingPulse {
        /// Time to fill from empty to full.
        #[serde(default = "default_fill_ms")]
        fill_ms: u64,
    },
    /// A full-bleed rectangle that ripples in place without changing level.
    BackgroundRipple {
        /// Period of one full sideways cycle.
        #[serde(default = "default_shift_ms")]
        shift_ms: u64,
    },
}

fn default_fill_ms() -> u64 {
    LOADING_FILL_MS
}

fn default_shift_ms() -> u64 {
    SHIFT_MS
}

impl AnimatorPreset {
    /// Shape kind applied when playback starts, if the preset dictates one.
    pub fn shape(&self) -> Option<ShapeKind> {
        match self {
            Self::SimpleContinuous => None,
            Self::LoadingPulse { .. } => Some(ShapeKind::Circle),
            Self::BackgroundRipple { .. } => Some(ShapeKind::Rectangle),
        }
    }

    /// Tracks started together on `start`.
    pub fn tracks(&self) -> Vec<RatioTrack> {
        match *self {
            Self::SimpleContinuous => vec![
                shift_track(SHIFT_MS),
                water_level_track(0.5, WATER_LEVEL_MS),
                amplitude_track(0.0001, 0.05),
            ],
            Self::LoadingPulse { fill_ms } => vec![
                shift_track(SHIFT_MS),
                water_level_track(1.0, fill_ms),
                amplitude_track(0.0001, 0.05),
            ],
            Self::BackgroundRipple { shift_ms } => {
                vec![shift_track(shift_ms), amplitude_track(0.02, 0.05)]
            }
        }
    }

    /// Validate every track.
    pub fn validate(&self) -> WaveResult<()> {
        for track in self.tracks() {
            track.validate()?;
        }
        Ok(())
    }
}

fn shift_track(duration_ms: u64) -> RatioTrack {
    RatioTrack {
        ratio: Ratio::WaveShift,
        from: 0.0,
        to: 1.0,
        duration_ms,
        ease: Ease::Linear,
        repeat: Repeat::Restart,
    }
}

fn water_level_track(to: f32, duration_ms: u64) -> RatioTrack {
    RatioTrack {
        ratio: Ratio::WaterLevel,
        from: 0.0,
        to,
        duration_ms,
        ease: Ease::Decelerate,
        repeat: Repeat::Once,
    }
}

fn amplitude_track(from: f32, to: f32) -> RatioTrack {
    RatioTrack {
        ratio: Ratio::Amplitude,
        from,
        to,
        duration_ms: AMPLITUDE_MS,
        ease: Ease::Linear,
        repeat: Repeat::Reverse,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/preset.rs"]
mod tests;

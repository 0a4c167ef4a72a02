use std::{path::Path, time::Duration};

use anyhow::Context as _;

use crate::{
    animation::{driver::WaveAnimator, preset::AnimatorPreset, track::RatioTrack},
    foundation::{
        core::{Argb, Canvas, Fps},
        error::{WaveError, WaveResult},
    },
    render::backend::RenderSettings,
    shape::spec::{Border, ShapeKind},
    surface::params::WaveParams,
    texture::generator::{WaveBaseline, WaveColors},
};

/// A serialized wave surface plus the playback window used by the CLI.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WaveConfig {
    /// Surface size.
    pub canvas: Canvas,
    /// Outline of the fill.
    #[serde(default)]
    pub shape: ShapeKind,
    /// Optional stroke.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
    /// Rear band color.
    #[serde(default = "default_behind_color")]
    pub behind_color: Argb,
    /// Front band color.
    #[serde(default = "default_front_color")]
    pub front_color: Argb,
    /// Texture baseline; classic when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline: Option<WaveBaseline>,
    /// Initial ratios.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratios: Option<RatioOverrides>,
    /// Playback preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animator: Option<AnimatorPreset>,
    /// Extra tracks; each replaces the preset's track for the same ratio.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tracks: Vec<RatioTrack>,
    /// Frame rate for timelines.
    #[serde(default)]
    pub fps: Fps,
    /// Timeline length.
    #[serde(default)]
    pub duration_ms: u64,
    /// Frame clear color; transparent when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Argb>,
}

fn default_behind_color() -> Argb {
    WaveColors::default().behind
}

fn default_front_color() -> Argb {
    WaveColors::default().front
}

/// Initial ratio values; unset entries keep the baseline's resting value.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RatioOverrides {
    /// Initial shift.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wave_shift: Option<f32>,
    /// Initial level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_level: Option<f32>,
    /// Initial amplitude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amplitude: Option<f32>,
    /// Initial wavelength.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wave_length: Option<f32>,
}

impl RatioOverrides {
    /// Write the set entries into `params`.
    pub fn apply_to(&self, params: &mut WaveParams) {
        if let Some(v) = self.wave_shift {
            params.set_wave_shift_ratio(v);
        }
        if let Some(v) = self.water_level {
            params.set_water_level_ratio(v);
        }
        if let Some(v) = self.amplitude {
            params.set_amplitude_ratio(v);
        }
        if let Some(v) = self.wave_length {
            params.set_wave_length_ratio(v);
        }
    }

    fn validate(&self) -> WaveResult<()> {
        let all = [
            ("wave_shift", self.wave_shift),
            ("water_level", self.water_level),
            ("amplitude", self.amplitude),
            ("wave_length", self.wave_length),
        ];
        for (name, v) in all {
            if v.is_some_and(|v| !v.is_finite()) {
                return Err(WaveError::validation(format!("ratio {name} must be finite")));
            }
        }
        Ok(())
    }
}

impl WaveConfig {
    /// A resting rectangle of the given size with default colors and no animator.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            shape: ShapeKind::default(),
            border: None,
            behind_color: default_behind_color(),
            front_color: default_front_color(),
            baseline: None,
            ratios: None,
            animator: None,
            tracks: Vec::new(),
            fps: Fps::default(),
            duration_ms: 0,
            background: None,
        }
    }

    /// Parse a JSON document.
    pub fn from_json_str(s: &str) -> WaveResult<Self> {
        serde_json::from_str(s).map_err(|e| WaveError::serde(e.to_string()))
    }

    /// Read and parse a JSON file.
    pub fn from_path(path: &Path) -> WaveResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read wave config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Check fps, baseline, ratios and animation tracks.
    pub fn validate(&self) -> WaveResult<()> {
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(WaveError::validation("fps must have num>0 and den>0"));
        }
        if let Some(baseline) = &self.baseline {
            baseline.validate()?;
        }
        if let Some(ratios) = &self.ratios {
            ratios.validate()?;
        }
        if let Some(animator) = &self.animator {
            animator.validate()?;
        }
        for track in &self.tracks {
            track.validate()?;
        }
        Ok(())
    }

    /// The animator described by `animator` and `tracks`, if either is set.
    pub fn build_animator(&self) -> Option<WaveAnimator> {
        match self.animator {
            Some(preset) => Some(WaveAnimator::new(preset).with_tracks(&self.tracks)),
            None if self.tracks.is_empty() => None,
            None => Some(WaveAnimator::from_tracks(self.tracks.clone())),
        }
    }

    /// Timeline length.
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Frames needed to cover `duration_ms` at `fps`.
    pub fn frame_count(&self) -> u64 {
        self.fps.frames_covering(self.duration())
    }

    /// Backend settings carrying the background color.
    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            clear_rgba: self
                .background
                .map(|c| [c.red(), c.green(), c.blue(), c.alpha()]),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;

use std::time::Duration;

use crate::{
    animation::{preset::AnimatorPreset, track::RatioTrack},
    surface::wave_surface::WaveSurface,
};

/// Plays a set of ratio tracks against a surface on an externally supplied clock.
///
/// `now` is any monotonic timestamp the host uses; only differences matter.
#[derive(Clone, Debug)]
pub struct WaveAnimator {
    preset: Option<AnimatorPreset>,
    tracks: Vec<RatioTrack>,
    started_at: Option<Duration>,
}

impl WaveAnimator {
    /// Animator playing the tracks of `preset`.
    pub fn new(preset: AnimatorPreset) -> Self {
        Self {
            preset: Some(preset),
            tracks: preset.tracks(),
            started_at: None,
        }
    }

    /// Animator playing hand-written tracks; the shape is left alone on start.
    pub fn from_tracks(tracks: Vec<RatioTrack>) -> Self {
        Self {
            preset: None,
            tracks,
            started_at: None,
        }
    }

    /// Replace the track for each overridden ratio, appending ratios not yet animated.
    pub fn with_tracks(mut self, overrides: &[RatioTrack]) -> Self {
        for track in overrides {
            match self.tracks.iter_mut().find(|t| t.ratio == track.ratio) {
                Some(slot) => *slot = *track,
                None => self.tracks.push(*track),
            }
        }
        self
    }

    /// The preset this animator was built from, if any.
    pub fn preset(&self) -> Option<AnimatorPreset> {
        self.preset
    }

    /// Tracks in the order they are applied.
    pub fn tracks(&self) -> &[RatioTrack] {
        &self.tracks
    }

    /// Whether `start` has been called without a matching `end`.
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Start every track together, restarting if already running.
    #[tracing::instrument(skip(self, surface), fields(preset = ?self.preset))]
    pub fn start(&mut self, surface: &mut WaveSurface, now: Duration) {
        surface.set_show_wave(true);
        if let Some(kind) = self.preset.and_then(|p| p.shape()) {
            surface.set_shape_type(kind);
        }
        self.started_at = Some(now);
        self.apply(surface, Duration::ZERO);
        tracing::debug!("animator started");
    }

    /// Apply every track's value at `now`. No-op unless running.
    pub fn tick(&mut self, surface: &mut WaveSurface, now: Duration) {
        let Some(started_at) = self.started_at else {
            return;
        };
        let elapsed = now.saturating_sub(started_at);
        tracing::trace!(elapsed_ms = elapsed.as_millis() as u64, "animator tick");
        self.apply(surface, elapsed);
    }

    /// Jump every track to its end value together and stop.
    pub fn end(&mut self, surface: &mut WaveSurface) {
        for track in &self.tracks {
            (track.ratio.setter())(surface, track.end_value());
        }
        self.started_at = None;
        tracing::debug!(preset = ?self.preset, "animator ended");
    }

    fn apply(&self, surface: &mut WaveSurface, elapsed: Duration) {
        for track in &self.tracks {
            (track.ratio.setter())(surface, track.value_at(elapsed));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/driver.rs"]
mod tests;

use crate::texture::generator::WaveBaseline;

/// The four live ratios of a wave surface.
///
/// Ratios are stored as given: out-of-range values are accepted and extrapolate
/// geometrically. Setters report whether the stored value changed, using plain float
/// inequality, so writing the current value again is a no-op.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveParams {
    wave_shift_ratio: f32,
    water_level_ratio: f32,
    amplitude_ratio: f32,
    wave_length_ratio: f32,
}

impl WaveParams {
    /// Resting parameters for a baseline: no shift, native level, amplitude and wavelength.
    pub fn from_baseline(baseline: &WaveBaseline) -> Self {
        Self {
            wave_shift_ratio: 0.0,
            water_level_ratio: baseline.water_level_ratio,
            amplitude_ratio: baseline.amplitude_ratio,
            wave_length_ratio: baseline.wave_length_ratio,
        }
    }

    /// Horizontal phase offset as a fraction of the surface width.
    pub fn wave_shift_ratio(&self) -> f32 {
        self.wave_shift_ratio
    }

    /// Fill level as a fraction of the surface height (0 empty, 1 full).
    pub fn water_level_ratio(&self) -> f32 {
        self.water_level_ratio
    }

    /// Wave height as a fraction of the surface height.
    pub fn amplitude_ratio(&self) -> f32 {
        self.amplitude_ratio
    }

    /// Wavelength as a fraction of the surface width.
    pub fn wave_length_ratio(&self) -> f32 {
        self.wave_length_ratio
    }

    /// Store the shift; true when it changed.
    pub fn set_wave_shift_ratio(&mut self, v: f32) -> bool {
        replace_if_changed(&mut self.wave_shift_ratio, v)
    }

    /// Store the level; true when it changed.
    pub fn set_water_level_ratio(&mut self, v: f32) -> bool {
        replace_if_changed(&mut self.water_level_ratio, v)
    }

    /// Store the amplitude; true when it changed.
    pub fn set_amplitude_ratio(&mut self, v: f32) -> bool {
        replace_if_changed(&mut self.amplitude_ratio, v)
    }

    /// Store the wavelength; true when it changed.
    pub fn set_wave_length_ratio(&mut self, v: f32) -> bool {
        replace_if_changed(&mut self.wave_length_ratio, v)
    }
}

impl Default for WaveParams {
    fn default() -> Self {
        Self::from_baseline(&WaveBaseline::default())
    }
}

#[allow(clippy::float_cmp)]
fn replace_if_changed(slot: &mut f32, v: f32) -> bool {
    if *slot != v {
        *slot = v;
        true
    } else {
        false
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/params.rs"]
mod tests;

//! Maps live wave ratios onto the texture sampling transform.

use crate::{
    foundation::core::{Affine, Canvas, Vec2},
    surface::params::WaveParams,
    texture::generator::WaveBaseline,
};

/// Decomposed texture-to-surface transform: scale about a horizontal pivot line, then
/// translate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveTransform {
    /// `(wavelength / base wavelength, amplitude / base amplitude)`.
    pub scale: Vec2,
    /// Resting water line in texture space; vertical scaling happens about this row.
    pub pivot_y: f64,
    /// `(shift · width, (base level − level) · height)`.
    pub translate: Vec2,
}

impl WaveTransform {
    /// Decompose the current ratios against the baseline.
    pub fn new(params: &WaveParams, baseline: &WaveBaseline, canvas: Canvas) -> Self {
        let width = f64::from(canvas.width);
        let height = f64::from(canvas.height);

        let scale = Vec2::new(
            f64::from(params.wave_length_ratio()) / f64::from(baseline.wave_length_ratio),
            f64::from(params.amplitude_ratio()) / f64::from(baseline.amplitude_ratio),
        );
        let pivot_y = height * f64::from(baseline.water_level_ratio);
        let translate = Vec2::new(
            f64::from(params.wave_shift_ratio()) * width,
            (f64::from(baseline.water_level_ratio) - f64::from(params.water_level_ratio()))
                * height,
        );

        Self {
            scale,
            pivot_y,
            translate,
        }
    }

    /// Compose into one matrix.
    pub fn to_affine(self) -> Affine {
        let pivot = Vec2::new(0.0, self.pivot_y);
        let t_translate = Affine::translate(self.translate);
        let t_pivot = Affine::translate(pivot);
        let t_unpivot = Affine::translate(-pivot);
        let t_scale = Affine::scale_non_uniform(self.scale.x, self.scale.y);

        // T(translate) * T(pivot) * S(scale) * T(-pivot)
        t_translate * t_pivot * t_scale * t_unpivot
    }
}

/// Sampling transform for the current ratios. Pure: same inputs, same matrix.
pub fn compute_transform(params: &WaveParams, baseline: &WaveBaseline, canvas: Canvas) -> Affine {
    WaveTransform::new(params, baseline, canvas).to_affine()
}

#[cfg(test)]
#[path = "../../tests/unit/transform/pipeline.rs"]
mod tests;

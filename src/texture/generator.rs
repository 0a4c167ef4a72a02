//! Procedural two-band wave texture.
//!
//! One full wavelength of `y = A·sin(ωx) + h` is baked into a premultiplied RGBA8 raster
//! of `width × (height + 1)` pixels. The "behind" band is filled from the curve down to the
//! bottom edge; the "front" band reuses the same curve read at a phase-shifted column and is
//! composited over it. The raster is meant to be sampled with horizontal repeat and vertical
//! clamp, so a horizontal translation by any multiple of `width` is invisible.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::foundation::{
    core::{Argb, Canvas, Rgba8Premul},
    error::{WaveError, WaveResult},
    math::over_premul,
};

static NEXT_TEXTURE_ID: AtomicU64 = AtomicU64::new(1);

/// Ratios baked into every generated texture.
///
/// Changing any of these requires regenerating the texture; the transform pipeline only
/// ever scales and translates relative to them.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WaveBaseline {
    /// Native wavelength as a fraction of the surface width.
    pub wave_length_ratio: f32,
    /// Native amplitude as a fraction of the surface height.
    pub amplitude_ratio: f32,
    /// Resting water line as a fraction of the surface height.
    pub water_level_ratio: f32,
    /// Offset of the front band, as a fraction of the wavelength.
    pub phase_shift_fraction: f32,
}

impl WaveBaseline {
    /// Shallow ripple with a quarter-wavelength band offset.
    pub fn classic() -> Self {
        Self {
            wave_length_ratio: 1.0,
            amplitude_ratio: 0.05,
            water_level_ratio: 0.5,
            phase_shift_fraction: 0.25,
        }
    }

    /// Tall crests with a fifth-wavelength band offset.
    pub fn swell() -> Self {
        Self {
            wave_length_ratio: 1.0,
            amplitude_ratio: 0.45,
            water_level_ratio: 0.5,
            phase_shift_fraction: 0.2,
        }
    }

    /// Reject non-finite ratios, non-positive wavelength or amplitude, and offsets outside `[0, 1)`.
    pub fn validate(&self) -> WaveResult<()> {
        let finite = [
            ("wave_length_ratio", self.wave_length_ratio),
            ("amplitude_ratio", self.amplitude_ratio),
            ("water_level_ratio", self.water_level_ratio),
            ("phase_shift_fraction", self.phase_shift_fraction),
        ];
        for (name, v) in finite {
            if !v.is_finite() {
                return Err(WaveError::validation(format!(
                    "baseline {name} must be finite"
                )));
            }
        }
        if self.wave_length_ratio <= 0.0 {
            return Err(WaveError::validation(
                "baseline wave_length_ratio must be > 0",
            ));
        }
        if self.amplitude_ratio <= 0.0 {
            return Err(WaveError::validation("baseline amplitude_ratio must be > 0"));
        }
        if !(0.0..1.0).contains(&self.phase_shift_fraction) {
            return Err(WaveError::validation(
                "baseline phase_shift_fraction must be in [0, 1)",
            ));
        }
        Ok(())
    }
}

impl Default for WaveBaseline {
    fn default() -> Self {
        Self::classic()
    }
}

/// Colors of the two wave bands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WaveColors {
    /// Color of the rear band.
    pub behind: Argb,
    /// Color of the phase-shifted band drawn on top.
    pub front: Argb,
}

impl Default for WaveColors {
    fn default() -> Self {
        Self {
            behind: Argb(0xFF55_5351),
            front: Argb(0xFF65_6361),
        }
    }
}

/// Identity of one generated texture. Every generation gets a fresh id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub u64);

impl TextureId {
    fn next() -> Self {
        Self(NEXT_TEXTURE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// An immutable wave raster. Replaced wholesale on resize or color change, never edited.
#[derive(Clone, Debug)]
pub struct WaveTexture {
    id: TextureId,
    canvas: Canvas,
    colors: WaveColors,
    baseline: WaveBaseline,
    shift_pixels: u32,
    /// Crest row of the behind band for columns `0..=width`.
    behind: Vec<f32>,
    /// Premultiplied RGBA8, row-major, `width × (height + 1)`.
    rgba8_premul: Vec<u8>,
}

impl WaveTexture {
    /// Identity used by backends to cache uploads.
    pub fn id(&self) -> TextureId {
        self.id
    }

    /// Surface dimensions this texture was generated for.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Band colors baked into the raster.
    pub fn colors(&self) -> WaveColors {
        self.colors
    }

    /// Baseline the raster was generated with.
    pub fn baseline(&self) -> WaveBaseline {
        self.baseline
    }

    /// Raster width in pixels (the surface width).
    pub fn width(&self) -> u32 {
        self.canvas.width
    }

    /// Raster height in pixels (one more than the surface height).
    pub fn height(&self) -> u32 {
        self.canvas.height + 1
    }

    /// Column offset between the behind and front band curves.
    pub fn shift_pixels(&self) -> u32 {
        self.shift_pixels
    }

    /// Crest of the behind band at column `x` in `0..=width`.
    pub fn behind_crest(&self, x: u32) -> f32 {
        self.behind[x as usize]
    }

    /// Crest of the front band at column `x` in `0..=width`.
    pub fn front_crest(&self, x: u32) -> f32 {
        let end_x = self.behind.len();
        self.behind[(x as usize + self.shift_pixels as usize) % end_x]
    }

    /// First filled row for a crest: the first row whose center lies on or below it.
    pub fn top_row(&self, crest: f32) -> u32 {
        fill_start_row(crest, self.height() as usize) as u32
    }

    /// Premultiplied RGBA8 bytes, row-major.
    pub fn as_premul_bytes(&self) -> &[u8] {
        &self.rgba8_premul
    }

    /// Pixel at raster coordinates. Panics when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba8Premul {
        assert!(x < self.width() && y < self.height(), "pixel out of bounds");
        let idx = (y as usize * self.width() as usize + x as usize) * 4;
        let px = &self.rgba8_premul[idx..idx + 4];
        Rgba8Premul {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        }
    }

    /// Sample with horizontal repeat and vertical clamp.
    pub fn sample_tiled(&self, x: i64, y: i64) -> Rgba8Premul {
        let px = x.rem_euclid(i64::from(self.width()));
        let py = y.clamp(0, i64::from(self.height()) - 1);
        self.pixel(px as u32, py as u32)
    }

    /// Straight-alpha copy of the raster, suitable for image export.
    pub fn to_rgba8_straight(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.rgba8_premul.len());
        for px in self.rgba8_premul.chunks_exact(4) {
            let premul = Rgba8Premul {
                r: px[0],
                g: px[1],
                b: px[2],
                a: px[3],
            };
            out.extend_from_slice(&premul.to_straight_rgba());
        }
        out
    }
}

/// Bakes [`WaveTexture`]s for a fixed [`WaveBaseline`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WaveTextureGenerator {
    baseline: WaveBaseline,
}

impl WaveTextureGenerator {
    /// Generator baking the given baseline.
    pub fn new(baseline: WaveBaseline) -> Self {
        Self { baseline }
    }

    /// Baseline baked into every texture.
    pub fn baseline(&self) -> WaveBaseline {
        self.baseline
    }

    /// Generate a texture for `canvas`. Returns `None` for a zero-size canvas.
    #[tracing::instrument(skip(self))]
    pub fn generate(&self, canvas: Canvas, colors: WaveColors) -> Option<WaveTexture> {
        if canvas.is_empty() {
            return None;
        }

        let width = canvas.width as usize;
        let rows = canvas.height as usize + 1;
        let end_x = width + 1;

        let angular_frequency =
            std::f64::consts::TAU / (f64::from(self.baseline.wave_length_ratio) * width as f64);
        let amplitude = f64::from(canvas.height) * f64::from(self.baseline.amplitude_ratio);
        let water_level = f64::from(canvas.height) * f64::from(self.baseline.water_level_ratio);

        let behind: Vec<f32> = (0..end_x)
            .map(|x| (amplitude * (x as f64 * angular_frequency).sin() + water_level) as f32)
            .collect();
        let shift_pixels =
            (f64::from(canvas.width) * f64::from(self.baseline.phase_shift_fraction)).floor() as u32;

        let mut rgba8_premul = vec![0u8; width * rows * 4];
        let behind_px = colors.behind.to_premul().to_array();
        let front_px = colors.front.to_premul().to_array();

        for (x, crest) in behind.iter().take(width).enumerate() {
            fill_column(&mut rgba8_premul, width, rows, x, *crest, behind_px);
        }
        for x in 0..width {
            let crest = behind[(x + shift_pixels as usize) % end_x];
            fill_column(&mut rgba8_premul, width, rows, x, crest, front_px);
        }

        let texture = WaveTexture {
            id: TextureId::next(),
            canvas,
            colors,
            baseline: self.baseline,
            shift_pixels,
            behind,
            rgba8_premul,
        };
        tracing::debug!(id = texture.id.0, width, rows, shift_pixels, "generated wave texture");
        Some(texture)
    }
}

fn fill_start_row(crest: f32, rows: usize) -> usize {
    let start = (f64::from(crest) - 0.5).ceil();
    if start.is_nan() || start <= 0.0 {
        0
    } else {
        (start as usize).min(rows)
    }
}

fn fill_column(data: &mut [u8], width: usize, rows: usize, x: usize, crest: f32, px: [u8; 4]) {
    for y in fill_start_row(crest, rows)..rows {
        let idx = (y * width + x) * 4;
        let dst = [data[idx], data[idx + 1], data[idx + 2], data[idx + 3]];
        data[idx..idx + 4].copy_from_slice(&over_premul(dst, px));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/texture/generator.rs"]
mod tests;

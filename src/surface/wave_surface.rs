use std::{sync::Arc, time::Duration};

use crate::{
    animation::{driver::WaveAnimator, preset::AnimatorPreset},
    config::model::WaveConfig,
    foundation::{
        core::{Argb, Canvas},
        error::WaveResult,
    },
    render::backend::{FrameRGBA, RenderBackend, execute_ops},
    shape::{
        renderer::{DrawOp, WavePaint, compile_shape},
        spec::{Border, ShapeKind, ShapeSpec},
    },
    surface::params::WaveParams,
    texture::generator::{WaveBaseline, WaveColors, WaveTexture, WaveTextureGenerator},
    transform::pipeline::compute_transform,
};

/// A bordered shape filled with an animated two-band wave.
///
/// The surface owns the current texture (replaced wholesale on resize or color change),
/// the live ratios and the shape. It never draws on its own: state changes bump a redraw
/// counter that the host drains with [`WaveSurface::take_redraw`], then calls
/// [`WaveSurface::render`] or [`WaveSurface::draw_ops`].
#[derive(Debug)]
pub struct WaveSurface {
    generator: WaveTextureGenerator,
    canvas: Canvas,
    colors: WaveColors,
    texture: Option<Arc<WaveTexture>>,
    params: WaveParams,
    shape: ShapeSpec,
    show_wave: bool,
    redraws: u64,
    animator: Option<WaveAnimator>,
}

impl WaveSurface {
    /// Unsized, hidden surface on the classic baseline.
    pub fn new() -> Self {
        Self::with_baseline(WaveBaseline::default())
    }

    /// Unsized, hidden surface generating textures for `baseline`.
    pub fn with_baseline(baseline: WaveBaseline) -> Self {
        Self {
            generator: WaveTextureGenerator::new(baseline),
            canvas: Canvas::default(),
            colors: WaveColors::default(),
            texture: None,
            params: WaveParams::from_baseline(&baseline),
            shape: ShapeSpec::default(),
            show_wave: false,
            redraws: 0,
            animator: None,
        }
    }

    /// Build a sized, visible surface from a validated config. The animator, if any, is
    /// installed but not started.
    pub fn from_config(cfg: &WaveConfig) -> WaveResult<Self> {
        cfg.validate()?;

        let mut surface = Self::with_baseline(cfg.baseline.unwrap_or_default());
        surface.shape = ShapeSpec {
            kind: cfg.shape,
            border: cfg.border,
        };
        surface.colors = WaveColors {
            behind: cfg.behind_color,
            front: cfg.front_color,
        };
        if let Some(ratios) = cfg.ratios {
            ratios.apply_to(&mut surface.params);
        }
        surface.show_wave = true;
        surface.animator = cfg.build_animator();
        surface.on_resize(cfg.canvas.width, cfg.canvas.height);
        Ok(surface)
    }

    /// Size from the last resize.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Baseline the textures are generated with.
    pub fn baseline(&self) -> WaveBaseline {
        self.generator.baseline()
    }

    /// Live ratios.
    pub fn params(&self) -> &WaveParams {
        &self.params
    }

    /// Shape and border.
    pub fn shape(&self) -> &ShapeSpec {
        &self.shape
    }

    /// Band colors.
    pub fn colors(&self) -> WaveColors {
        self.colors
    }

    /// The current texture; `None` before the first positive resize.
    pub fn texture(&self) -> Option<&Arc<WaveTexture>> {
        self.texture.as_ref()
    }

    /// Switch outline and request a redraw.
    pub fn set_shape_type(&mut self, kind: ShapeKind) {
        self.shape.kind = kind;
        self.request_redraw();
    }

    /// Set the border and request a redraw.
    pub fn set_border(&mut self, width: u32, color: Argb) {
        self.shape.border = Some(Border { width, color });
        self.request_redraw();
    }

    /// Store new band colors, regenerating the texture if the surface has been sized.
    pub fn set_wave_color(&mut self, behind: Argb, front: Argb) {
        self.colors = WaveColors { behind, front };
        if !self.canvas.is_empty() {
            self.regenerate();
            self.request_redraw();
        }
    }

    /// Toggles the fill. Does not request a redraw by itself.
    pub fn set_show_wave(&mut self, show: bool) {
        self.show_wave = show;
    }

    /// Whether the fill is drawn.
    pub fn show_wave(&self) -> bool {
        self.show_wave
    }

    /// See [`WaveParams::wave_shift_ratio`].
    pub fn wave_shift_ratio(&self) -> f32 {
        self.params.wave_shift_ratio()
    }

    /// Requests a redraw when the value changes.
    pub fn set_wave_shift_ratio(&mut self, v: f32) {
        if self.params.set_wave_shift_ratio(v) {
            self.request_redraw();
        }
    }

    /// See [`WaveParams::water_level_ratio`].
    pub fn water_level_ratio(&self) -> f32 {
        self.params.water_level_ratio()
    }

    /// Requests a redraw when the value changes.
    pub fn set_water_level_ratio(&mut self, v: f32) {
        if self.params.set_water_level_ratio(v) {
            self.request_redraw();
        }
    }

    /// See [`WaveParams::amplitude_ratio`].
    pub fn amplitude_ratio(&self) -> f32 {
        self.params.amplitude_ratio()
    }

    /// Requests a redraw when the value changes.
    pub fn set_amplitude_ratio(&mut self, v: f32) {
        if self.params.set_amplitude_ratio(v) {
            self.request_redraw();
        }
    }

    /// See [`WaveParams::wave_length_ratio`].
    pub fn wave_length_ratio(&self) -> f32 {
        self.params.wave_length_ratio()
    }

    /// Stores the wavelength without requesting a redraw; the next frame picks it up.
    pub fn set_wave_length_ratio(&mut self, v: f32) {
        self.params.set_wave_length_ratio(v);
    }

    /// Host layout callback. Replaces the texture; zero dimensions drop it.
    #[tracing::instrument(skip(self))]
    pub fn on_resize(&mut self, width: u32, height: u32) {
        self.canvas = Canvas::new(width, height);
        self.regenerate();
        if !self.canvas.is_empty() {
            self.request_redraw();
        }
    }

    /// Installed animator, if any.
    pub fn animator(&self) -> Option<&WaveAnimator> {
        self.animator.as_ref()
    }

    /// Install a new animator, ending the current one first.
    pub fn set_animator(&mut self, preset: AnimatorPreset) {
        self.end_animators();
        self.animator = Some(WaveAnimator::new(preset));
    }

    /// Start the installed animator at `now`.
    pub fn start_animators(&mut self, now: Duration) {
        self.with_animator(|animator, surface| animator.start(surface, now));
    }

    /// Tick the installed animator to `now`.
    pub fn advance(&mut self, now: Duration) {
        self.with_animator(|animator, surface| animator.tick(surface, now));
    }

    /// Settle a running animator on its end values. No-op when idle.
    pub fn end_animators(&mut self) {
        self.with_animator(|animator, surface| {
            if animator.is_running() {
                animator.end(surface);
            }
        });
    }

    /// Redraw requests not yet taken by the host.
    pub fn pending_redraws(&self) -> u64 {
        self.redraws
    }

    /// Consume all pending redraw requests, returning whether there were any.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraws) > 0
    }

    /// Draw operations for the current state, border first.
    pub fn draw_ops(&self) -> Vec<DrawOp> {
        let paint = self
            .texture
            .as_ref()
            .filter(|_| self.show_wave)
            .map(|texture| WavePaint {
                texture: Arc::clone(texture),
                transform: compute_transform(&self.params, &self.generator.baseline(), self.canvas),
            });
        compile_shape(self.canvas, &self.shape, paint)
    }

    /// Render the current state as one frame.
    #[tracing::instrument(skip(self, backend), fields(width = self.canvas.width, height = self.canvas.height))]
    pub fn render(&self, backend: &mut dyn RenderBackend) -> WaveResult<FrameRGBA> {
        let ops = self.draw_ops();
        execute_ops(backend, self.canvas, &ops)
    }

    fn regenerate(&mut self) {
        self.texture = self
            .generator
            .generate(self.canvas, self.colors)
            .map(Arc::new);
    }

    fn request_redraw(&mut self) {
        self.redraws += 1;
    }

    fn with_animator(&mut self, f: impl FnOnce(&mut WaveAnimator, &mut Self)) {
        if let Some(mut animator) = self.animator.take() {
            f(&mut animator, self);
            self.animator = Some(animator);
        }
    }
}

impl Default for WaveSurface {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/wave_surface.rs"]
mod tests;

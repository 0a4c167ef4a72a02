//! Wavefill draws an animated "liquid wave" inside a bordered circle or rectangle.
//!
//! A surface owns one procedurally generated two-band wave texture, four live ratios and a
//! shape. Each frame the ratios are mapped to a sampling transform and the shape is compiled
//! into backend-agnostic draw operations:
//!
//! - Size a [`WaveSurface`] with [`WaveSurface::on_resize`] (or build one from a [`WaveConfig`])
//! - Drive its ratios directly or through a [`WaveAnimator`] preset
//! - Render with [`WaveSurface::render`] on a [`RenderBackend`] such as [`CpuBackend`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod config;
pub(crate) mod render;
pub(crate) mod shape;
pub(crate) mod surface;
pub(crate) mod texture;
pub(crate) mod transform;

pub use crate::foundation::core::{Affine, Argb, Canvas, Fps, Point, Rect, Rgba8Premul, Vec2};
pub use crate::foundation::error::{WaveError, WaveResult};

pub use crate::animation::driver::WaveAnimator;
pub use crate::animation::ease::Ease;
pub use crate::animation::preset::AnimatorPreset;
pub use crate::animation::track::{Ratio, RatioTrack, Repeat};
pub use crate::config::model::{RatioOverrides, WaveConfig};
pub use crate::render::backend::{
    BackendKind, FrameRGBA, RenderBackend, RenderSettings, create_backend, execute_ops,
};
pub use crate::render::cpu::CpuBackend;
pub use crate::shape::renderer::{DrawOp, WavePaint, compile_shape};
pub use crate::shape::spec::{Border, ShapeKind, ShapeSpec};
pub use crate::surface::params::WaveParams;
pub use crate::surface::wave_surface::WaveSurface;
pub use crate::texture::generator::{
    TextureId, WaveBaseline, WaveColors, WaveTexture, WaveTextureGenerator,
};
pub use crate::transform::pipeline::{WaveTransform, compute_transform};

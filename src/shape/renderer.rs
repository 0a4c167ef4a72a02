//! Turns a shape spec plus an optional wave paint into backend-agnostic draw operations.
//!
//! The border and the fill are independent operations. The fill is inset by the full
//! border width so the ring never overlaps the wave.

use std::sync::Arc;

use crate::{
    foundation::core::{Affine, Argb, Canvas, Point, Rect},
    shape::spec::{ShapeKind, ShapeSpec},
    texture::generator::WaveTexture,
};

/// A texture fill: the wave raster sampled through `transform` (texture space to surface
/// space), repeating horizontally and clamping vertically.
#[derive(Clone, Debug)]
pub struct WavePaint {
    /// Raster to sample.
    pub texture: Arc<WaveTexture>,
    /// Texture space to surface space.
    pub transform: Affine,
}

/// One backend-agnostic drawing step. Stroke colors are straight alpha.
#[derive(Clone, Debug)]
pub enum DrawOp {
    /// Circle outline.
    StrokeCircle {
        /// Center in surface pixels.
        center: Point,
        /// Radius to the middle of the stroke.
        radius: f64,
        /// Stroke width in pixels.
        width: f64,
        /// Stroke color.
        color: Argb,
    },
    /// Circle filled with the wave.
    FillCircle {
        /// Center in surface pixels.
        center: Point,
        /// Fill radius.
        radius: f64,
        /// Wave fill.
        paint: WavePaint,
    },
    /// Rectangle outline.
    StrokeRect {
        /// Rectangle through the middle of the stroke.
        rect: Rect,
        /// Stroke width in pixels.
        width: f64,
        /// Stroke color.
        color: Argb,
    },
    /// Rectangle filled with the wave.
    FillRect {
        /// Filled area.
        rect: Rect,
        /// Wave fill.
        paint: WavePaint,
    },
}

impl DrawOp {
    /// The texture fill attached to this op, if any.
    pub fn paint(&self) -> Option<&WavePaint> {
        match self {
            Self::FillCircle { paint, .. } | Self::FillRect { paint, .. } => Some(paint),
            Self::StrokeCircle { .. } | Self::StrokeRect { .. } => None,
        }
    }

    /// True for the wave fill ops.
    pub fn is_fill(&self) -> bool {
        self.paint().is_some()
    }
}

/// Draw operations for one frame, border first.
///
/// Without a `wave` paint only the border is emitted. A zero-size canvas yields no ops.
pub fn compile_shape(canvas: Canvas, shape: &ShapeSpec, wave: Option<WavePaint>) -> Vec<DrawOp> {
    if canvas.is_empty() {
        return Vec::new();
    }

    let border_width = shape.border_width();
    let border_color = shape.border.map(|b| b.color);
    let mut ops = Vec::with_capacity(2);

    match shape.kind {
        ShapeKind::Circle => {
            let center = canvas.center();
            let min_side = f64::from(canvas.min_side());

            if let Some(color) = border_color {
                let radius = (min_side - border_width) / 2.0 - 1.0;
                if border_width > 0.0 && radius > 0.0 {
                    ops.push(DrawOp::StrokeCircle {
                        center,
                        radius,
                        width: border_width,
                        color,
                    });
                }
            }

            if let Some(paint) = wave {
                let radius = min_side / 2.0 - border_width;
                if radius > 0.0 {
                    ops.push(DrawOp::FillCircle {
                        center,
                        radius,
                        paint,
                    });
                }
            }
        }
        ShapeKind::Rectangle => {
            let w = f64::from(canvas.width);
            let h = f64::from(canvas.height);

            if let Some(color) = border_color {
                let half = border_width / 2.0;
                // Half-pixel pull on the far edges keeps the stroke on pixel boundaries.
                let rect = Rect::new(half, half, w - half - 0.5, h - half - 0.5);
                if border_width > 0.0 && rect.width() > 0.0 && rect.height() > 0.0 {
                    ops.push(DrawOp::StrokeRect {
                        rect,
                        width: border_width,
                        color,
                    });
                }
            }

            if let Some(paint) = wave {
                let rect = Rect::new(border_width, border_width, w - border_width, h - border_width);
                if rect.width() > 0.0 && rect.height() > 0.0 {
                    ops.push(DrawOp::FillRect { rect, paint });
                }
            }
        }
    }

    ops
}

#[cfg(test)]
#[path = "../../tests/unit/shape/renderer.rs"]
mod tests;

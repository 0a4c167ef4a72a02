use std::sync::Arc;

use kurbo::Shape as _;

use crate::{
    foundation::{
        core::{Affine, Argb, Canvas, Circle, Point, Rect},
        error::{WaveError, WaveResult},
    },
    render::backend::{FrameRGBA, RenderBackend, RenderSettings},
    shape::renderer::{DrawOp, WavePaint},
    texture::generator::{TextureId, WaveTexture},
};

const CIRCLE_TOLERANCE: f64 = 0.1;

/// CPU raster backend.
///
/// The wave texture is uploaded once per [`TextureId`]; uploading a new texture drops the
/// previous one, so a stale raster is never sampled after regeneration.
pub struct CpuBackend {
    settings: RenderSettings,
    texture_cache: Option<(TextureId, vello_cpu::Image)>,
    frame: Option<CpuFrame>,
}

struct CpuFrame {
    canvas: Canvas,
    // `None` for zero-size frames.
    ctx: Option<vello_cpu::RenderContext>,
}

impl CpuBackend {
    /// Backend with no cached texture.
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            texture_cache: None,
            frame: None,
        }
    }

    /// Id of the texture currently uploaded, if any.
    pub fn cached_texture(&self) -> Option<TextureId> {
        self.texture_cache.as_ref().map(|(id, _)| *id)
    }

    fn image_for(&mut self, texture: &WaveTexture) -> WaveResult<vello_cpu::Image> {
        if let Some((id, image)) = &self.texture_cache {
            if *id == texture.id() {
                return Ok(image.clone());
            }
        }

        let pixmap = image_premul_bytes_to_pixmap(
            texture.as_premul_bytes(),
            texture.width(),
            texture.height(),
        )?;
        let image = vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler {
                x_extend: vello_cpu::peniko::Extend::Repeat,
                y_extend: vello_cpu::peniko::Extend::Pad,
                quality: vello_cpu::peniko::ImageQuality::Low,
                ..vello_cpu::peniko::ImageSampler::default()
            },
        };
        tracing::debug!(id = texture.id().0, "uploaded wave texture");
        self.texture_cache = Some((texture.id(), image.clone()));
        Ok(image)
    }
}

impl RenderBackend for CpuBackend {
    fn begin_frame(&mut self, canvas: Canvas) -> WaveResult<()> {
        if canvas.is_empty() {
            self.frame = Some(CpuFrame { canvas, ctx: None });
            return Ok(());
        }

        let (width, height) = canvas_to_u16(canvas)?;
        let mut ctx = vello_cpu::RenderContext::new(width, height);
        if let Some([r, g, b, a]) = self.settings.clear_rgba {
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(width),
                f64::from(height),
            ));
        }
        self.frame = Some(CpuFrame {
            canvas,
            ctx: Some(ctx),
        });
        Ok(())
    }

    fn draw(&mut self, op: &DrawOp) -> WaveResult<()> {
        let image = match op.paint() {
            Some(WavePaint { texture, .. }) => Some(self.image_for(texture)?),
            None => None,
        };

        let frame = self
            .frame
            .as_mut()
            .ok_or_else(|| WaveError::render("draw called before begin_frame"))?;
        let Some(ctx) = frame.ctx.as_mut() else {
            return Ok(());
        };

        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

        match (op, image) {
            (
                DrawOp::StrokeCircle {
                    center,
                    radius,
                    width,
                    color,
                },
                _,
            ) => {
                ctx.set_paint(color_to_cpu(*color));
                ctx.set_stroke(vello_cpu::kurbo::Stroke::new(*width));
                ctx.stroke_path(&circle_to_cpu(*center, *radius));
            }
            (
                DrawOp::StrokeRect {
                    rect,
                    width,
                    color,
                },
                _,
            ) => {
                ctx.set_paint(color_to_cpu(*color));
                ctx.set_stroke(vello_cpu::kurbo::Stroke::new(*width));
                ctx.stroke_rect(&rect_to_cpu(*rect));
            }
            (
                DrawOp::FillCircle {
                    center,
                    radius,
                    paint,
                },
                Some(image),
            ) => {
                ctx.set_paint(image);
                ctx.set_paint_transform(affine_to_cpu(paint.transform));
                ctx.fill_path(&circle_to_cpu(*center, *radius));
            }
            (DrawOp::FillRect { rect, paint }, Some(image)) => {
                ctx.set_paint(image);
                ctx.set_paint_transform(affine_to_cpu(paint.transform));
                ctx.fill_rect(&rect_to_cpu(*rect));
            }
            (DrawOp::FillCircle { .. } | DrawOp::FillRect { .. }, None) => {
                return Err(WaveError::render("fill op without a wave paint"));
            }
        }
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    fn finish(&mut self) -> WaveResult<FrameRGBA> {
        let frame = self
            .frame
            .take()
            .ok_or_else(|| WaveError::render("finish called before begin_frame"))?;
        let Some(mut ctx) = frame.ctx else {
            return Ok(FrameRGBA::empty(frame.canvas));
        };

        let (width, height) = canvas_to_u16(frame.canvas)?;
        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        Ok(FrameRGBA {
            width: frame.canvas.width,
            height: frame.canvas.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

fn canvas_to_u16(canvas: Canvas) -> WaveResult<(u16, u16)> {
    let width: u16 = canvas
        .width
        .try_into()
        .map_err(|_| WaveError::render("surface width exceeds u16"))?;
    let height: u16 = canvas
        .height
        .try_into()
        .map_err(|_| WaveError::render("surface height exceeds u16"))?;
    Ok((width, height))
}

fn color_to_cpu(color: Argb) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(color.red(), color.green(), color.blue(), color.alpha())
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn circle_to_cpu(center: Point, radius: f64) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let path = Circle::new(center, radius).to_path(CIRCLE_TOLERANCE);
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn image_premul_bytes_to_pixmap(
    rgba8_premul: &[u8],
    width: u32,
    height: u32,
) -> WaveResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| WaveError::render("texture width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| WaveError::render("texture height exceeds u16"))?;
    if rgba8_premul.len() != width as usize * height as usize * 4 {
        return Err(WaveError::render("texture byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for px in rgba8_premul.chunks_exact(4) {
        let a = px[3];
        may_have_opacities |= a != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a,
        });
    }

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;

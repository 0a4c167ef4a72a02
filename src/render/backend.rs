use crate::{
    foundation::{
        core::{Canvas, Rgba8Premul},
        error::WaveResult,
    },
    shape::renderer::DrawOp,
};

/// A rendered frame as RGBA8 pixels.
///
/// Frames are **premultiplied alpha** by default. The `premultiplied` flag is included to
/// make this explicit at API boundaries.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// An empty frame for a zero-size surface.
    pub fn empty(canvas: Canvas) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            data: vec![0; canvas.width as usize * canvas.height as usize * 4],
            premultiplied: true,
        }
    }

    /// Pixel at `(x, y)` as stored. Panics when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }

    /// Straight-alpha bytes, as image encoders expect.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        let mut out = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
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

/// A drawing target that executes [`DrawOp`]s for one frame at a time.
pub trait RenderBackend {
    /// Start a new frame of the given size, discarding any previous frame state.
    fn begin_frame(&mut self, canvas: Canvas) -> WaveResult<()>;

    /// Draw one op into the current frame.
    fn draw(&mut self, op: &DrawOp) -> WaveResult<()>;

    /// Finish the current frame and read back its pixels.
    fn finish(&mut self) -> WaveResult<FrameRGBA>;
}

/// Available backend kinds.
#[derive(Clone, Copy, Debug)]
pub enum BackendKind {
    /// CPU raster backend powered by `vello_cpu`.
    Cpu,
}

/// Backend-agnostic settings.
#[derive(Clone, Debug, Default)]
pub struct RenderSettings {
    /// If set, backends clear each frame to this straight RGBA8 color before drawing.
    pub clear_rgba: Option<[u8; 4]>,
}

/// Build a boxed backend of `kind`.
pub fn create_backend(
    kind: BackendKind,
    settings: &RenderSettings,
) -> WaveResult<Box<dyn RenderBackend>> {
    match kind {
        BackendKind::Cpu => Ok(Box::new(crate::render::cpu::CpuBackend::new(
            settings.clone(),
        ))),
    }
}

/// Run `ops` through `backend` as one frame.
pub fn execute_ops<B: RenderBackend + ?Sized>(
    backend: &mut B,
    canvas: Canvas,
    ops: &[DrawOp],
) -> WaveResult<FrameRGBA> {
    backend.begin_frame(canvas)?;
    for op in ops {
        backend.draw(op)?;
    }
    backend.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;

use std::{fmt, str::FromStr, time::Duration};

use crate::foundation::{
    error::{WaveError, WaveResult},
    math::mul_div255_u8,
};

pub use kurbo::{Affine, Circle, Point, Rect, Vec2};

/// Surface dimensions in pixels, set by the host layout pass.
///
/// A zero-size canvas is a valid, degenerate state: nothing is generated or drawn for it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Canvas of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when either side is zero.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Center point in pixel coordinates.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    /// The shorter of the two sides.
    pub fn min_side(self) -> u32 {
        self.width.min(self.height)
    }
}

/// Frame rate as the rational `num / den` frames per second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Frames per `den` seconds.
    pub num: u32,
    /// Seconds per `num` frames.
    pub den: u32,
}

impl Fps {
    /// Validated frame rate; both parts must be non-zero.
    pub fn new(num: u32, den: u32) -> WaveResult<Self> {
        if den == 0 {
            return Err(WaveError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(WaveError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frames per second.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Seconds spanned by `frames` frames.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * f64::from(self.den) / f64::from(self.num)
    }

    /// Wall-clock offset of `frame` from the start of playback.
    pub fn frame_time(self, frame: u64) -> Duration {
        Duration::from_secs_f64(self.frames_to_secs(frame))
    }

    /// Number of frames needed to cover `span`, counting a trailing partial frame.
    pub fn frames_covering(self, span: Duration) -> u64 {
        (span.as_secs_f64() * self.as_f64()).ceil().max(0.0) as u64
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 30, den: 1 }
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    /// Red, premultiplied.
    pub r: u8,
    /// Green, premultiplied.
    pub g: u8,
    /// Blue, premultiplied.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Rgba8Premul {
    /// All channels zero.
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Premultiply straight RGBA, rounding to nearest.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        let premul = |c: u8, a: u8| mul_div255_u8(u16::from(c), u16::from(a));

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    /// Undo premultiplication. Fully transparent pixels map to `[0, 0, 0, 0]`.
    pub fn to_straight_rgba(self) -> [u8; 4] {
        if self.a == 0 {
            return [0, 0, 0, 0];
        }
        let unpremul = |c: u8| -> u8 {
            let v = (u32::from(c) * 255 + u32::from(self.a) / 2) / u32::from(self.a);
            v.min(255) as u8
        };
        [unpremul(self.r), unpremul(self.g), unpremul(self.b), self.a]
    }

    /// Channels as `[r, g, b, a]`.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Host-style packed color, `0xAARRGGBB`.
///
/// Serialized as a `#AARRGGBB` string; `#RRGGBB` is accepted and treated as opaque.
#[derive(Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Argb(pub u32);

impl Argb {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self(0x0000_0000);
    /// Opaque black.
    pub const BLACK: Self = Self(0xFF00_0000);
    /// Opaque white.
    pub const WHITE: Self = Self(0xFFFF_FFFF);

    /// Pack separate channels.
    pub fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(u32::from_be_bytes([a, r, g, b]))
    }

    /// Alpha channel.
    pub fn alpha(self) -> u8 {
        self.0.to_be_bytes()[0]
    }

    /// Red channel.
    pub fn red(self) -> u8 {
        self.0.to_be_bytes()[1]
    }

    /// Green channel.
    pub fn green(self) -> u8 {
        self.0.to_be_bytes()[2]
    }

    /// Blue channel.
    pub fn blue(self) -> u8 {
        self.0.to_be_bytes()[3]
    }

    /// Premultiplied RGBA8 equivalent.
    pub fn to_premul(self) -> Rgba8Premul {
        let [a, r, g, b] = self.0.to_be_bytes();
        Rgba8Premul::from_straight_rgba(r, g, b, a)
    }
}

impl fmt::Debug for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Argb(#{:08X})", self.0)
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl FromStr for Argb {
    type Err = WaveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let parse = |digits: &str| {
            u32::from_str_radix(digits, 16)
                .map_err(|_| WaveError::validation(format!("invalid color '{s}'")))
        };
        match hex.len() {
            6 => Ok(Self(0xFF00_0000 | parse(hex)?)),
            8 => Ok(Self(parse(hex)?)),
            _ => Err(WaveError::validation(format!(
                "color '{s}' must be #RRGGBB or #AARRGGBB"
            ))),
        }
    }
}

impl TryFrom<String> for Argb {
    type Error = WaveError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Argb> for String {
    fn from(value: Argb) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

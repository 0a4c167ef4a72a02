use std::str::FromStr;

use crate::foundation::{
    core::Argb,
    error::{WaveError, WaveResult},
};

/// Outline of the wave fill.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Circle centered in the surface, sized by its shorter side.
    Circle,
    /// The full surface rectangle.
    #[default]
    Rectangle,
}

impl ShapeKind {
    /// Host attribute code for circles.
    pub const CIRCLE_CODE: i32 = 0;
    /// Host attribute code for rectangles.
    pub const RECTANGLE_CODE: i32 = 1;

    /// Host attribute code for this kind.
    pub fn code(self) -> i32 {
        match self {
            Self::Circle => Self::CIRCLE_CODE,
            Self::Rectangle => Self::RECTANGLE_CODE,
        }
    }
}

impl TryFrom<i32> for ShapeKind {
    type Error = WaveError;

    fn try_from(code: i32) -> WaveResult<Self> {
        match code {
            Self::CIRCLE_CODE => Ok(Self::Circle),
            Self::RECTANGLE_CODE => Ok(Self::Rectangle),
            other => Err(WaveError::validation(format!(
                "unsupported shape code {other}"
            ))),
        }
    }
}

impl FromStr for ShapeKind {
    type Err = WaveError;

    fn from_str(s: &str) -> WaveResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "circle" => Ok(Self::Circle),
            "rectangle" | "rect" => Ok(Self::Rectangle),
            other => Err(WaveError::validation(format!(
                "unsupported shape '{other}'"
            ))),
        }
    }
}

/// Stroke drawn around the fill. A zero width draws nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Border {
    /// Stroke width in pixels.
    pub width: u32,
    /// Stroke color.
    pub color: Argb,
}

/// Shape kind plus optional border.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ShapeSpec {
    /// Outline of the fill.
    pub kind: ShapeKind,
    /// Stroke around the fill, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
}

impl ShapeSpec {
    /// Borderless shape of `kind`.
    pub fn new(kind: ShapeKind) -> Self {
        Self { kind, border: None }
    }

    /// Border width in pixels, `0.0` when no border is set.
    pub fn border_width(&self) -> f64 {
        self.border.map_or(0.0, |b| f64::from(b.width))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/spec.rs"]
mod tests;

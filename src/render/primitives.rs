use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn is_transparent(self) -> bool {
        self.alpha <= 0.0
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Stroke pattern for line primitives.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum LineStrokeStyle {
    #[default]
    Solid,
    Dashed { dash_px: f64, gap_px: f64 },
}

impl LineStrokeStyle {
    pub fn validate(self) -> ChartResult<()> {
        if let Self::Dashed { dash_px, gap_px } = self {
            if !dash_px.is_finite() || dash_px <= 0.0 || !gap_px.is_finite() || gap_px < 0.0 {
                return Err(ChartError::InvalidData(
                    "dash pattern must be finite with dash > 0 and gap >= 0".to_owned(),
                ));
            }
        }
        Ok(())
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
    pub stroke_style: LineStrokeStyle,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
            stroke_style: LineStrokeStyle::Solid,
        }
    }

    #[must_use]
    pub const fn with_stroke_style(mut self, stroke_style: LineStrokeStyle) -> Self {
        self.stroke_style = stroke_style;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.stroke_style.validate()?;
        self.color.validate()
    }
}

/// Draw command for one filled rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
    pub corner_radius: f64,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
            corner_radius: 0.0,
        }
    }

    #[must_use]
    pub const fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite()
            || !self.y.is_finite()
            || !self.width.is_finite()
            || !self.height.is_finite()
        {
            return Err(ChartError::InvalidData(
                "rect geometry must be finite".to_owned(),
            ));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(ChartError::InvalidData(
                "rect size must be >= 0".to_owned(),
            ));
        }
        if !self.corner_radius.is_finite() || self.corner_radius < 0.0 {
            return Err(ChartError::InvalidData(
                "rect corner radius must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()
    }
}

/// One color stop of a linear gradient.
///
/// `location` is normalized along the gradient axis (`0.0` leading edge,
/// `1.0` trailing edge).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub location: f64,
    pub color: Color,
}

/// Ordered gradient stops. Most charts carry a handful of points, so stops
/// stay inline up to eight entries.
pub type GradientStops = SmallVec<[GradientStop; 8]>;

/// Horizontal linear gradient resolved to pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGradient {
    pub x_start: f64,
    pub x_end: f64,
    pub stops: GradientStops,
}

impl PixelGradient {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.x_start.is_finite() || !self.x_end.is_finite() {
            return Err(ChartError::InvalidData(
                "gradient extent must be finite".to_owned(),
            ));
        }
        let mut previous = 0.0;
        for stop in &self.stops {
            if !stop.location.is_finite() || !(0.0..=1.0).contains(&stop.location) {
                return Err(ChartError::InvalidData(
                    "gradient stop location must be finite and in [0, 1]".to_owned(),
                ));
            }
            if stop.location < previous {
                return Err(ChartError::InvalidData(
                    "gradient stops must be ordered by location".to_owned(),
                ));
            }
            previous = stop.location;
            stop.color.validate()?;
        }
        Ok(())
    }
}

/// Paint applied to a path primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum PathPaint {
    Fill { gradient: PixelGradient },
    Stroke { gradient: PixelGradient, width: f64 },
}

impl PathPaint {
    #[must_use]
    pub fn gradient(&self) -> &PixelGradient {
        match self {
            Self::Fill { gradient } | Self::Stroke { gradient, .. } => gradient,
        }
    }
}

/// Draw command for a polyline or polygon in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPrimitive {
    pub points: Vec<(f64, f64)>,
    pub closed: bool,
    pub paint: PathPaint,
}

impl PathPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        if self.points.iter().any(|(x, y)| !x.is_finite() || !y.is_finite()) {
            return Err(ChartError::InvalidData(
                "path coordinates must be finite".to_owned(),
            ));
        }
        if let PathPaint::Stroke { width, .. } = self.paint {
            if !width.is_finite() || width <= 0.0 {
                return Err(ChartError::InvalidData(
                    "path stroke width must be finite and > 0".to_owned(),
                ));
            }
        }
        self.paint.gradient().validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

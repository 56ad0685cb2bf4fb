use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::ChartResult;
use crate::render::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Axis-aligned region in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }
}

/// Category identity of a data point: display name plus color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub name: String,
    pub color: Color,
}

impl Legend {
    #[must_use]
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// One plotted value with its axis label and legend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataPoint {
    pub value: f64,
    pub label: String,
    pub legend: Legend,
}

impl ChartDataPoint {
    #[must_use]
    pub fn new(value: f64, label: impl Into<String>, legend: Legend) -> Self {
        Self {
            value,
            label: label.into(),
            legend,
        }
    }

    pub fn from_decimal(value: Decimal, label: impl Into<String>, legend: Legend) -> ChartResult<Self> {
        Ok(Self::new(decimal_to_f64(value, "value")?, label, legend))
    }
}

#[cfg(test)]
mod tests {
    use super::{ChartDataPoint, Legend};
    use crate::render::Color;
    use rust_decimal::Decimal;

    #[test]
    fn from_decimal_keeps_value_and_legend() {
        let legend = Legend::new("sales", Color::rgb(0.1, 0.2, 0.3));
        let point = ChartDataPoint::from_decimal(Decimal::new(1250, 2), "Mon", legend.clone())
            .expect("decimal point");
        assert!((point.value - 12.5).abs() <= 1e-12);
        assert_eq!(point.label, "Mon");
        assert_eq!(point.legend, legend);
    }
}

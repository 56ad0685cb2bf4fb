use serde::{Deserialize, Serialize};

use crate::core::{ChartDataPoint, PixelRect, ValueScale};
use crate::error::{ChartError, ChartResult};

/// Deterministic bar geometry in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub x_left: f64,
    pub x_right: f64,
    pub y_top: f64,
    pub y_bottom: f64,
}

impl BarGeometry {
    #[must_use]
    pub fn width(self) -> f64 {
        self.x_right - self.x_left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.y_bottom - self.y_top
    }
}

/// Horizontal center of each of `count` equal slots across `plot`.
#[must_use]
pub fn slot_centers(count: usize, plot: PixelRect) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let slot = plot.width / count as f64;
    (0..count)
        .map(|index| plot.x + slot * (index as f64 + 0.5))
        .collect()
}

/// Projects bar points into one bar per equal-width slot.
///
/// Each bar spans from the zero baseline to its value and covers
/// `fill_ratio` of its slot. Non-finite values collapse onto the baseline.
pub fn project_value_bars(
    points: &[ChartDataPoint],
    scale: ValueScale,
    plot: PixelRect,
    fill_ratio: f64,
) -> ChartResult<Vec<BarGeometry>> {
    if !fill_ratio.is_finite() || fill_ratio <= 0.0 || fill_ratio > 1.0 {
        return Err(ChartError::InvalidData(
            "bar fill ratio must be finite and in (0, 1]".to_owned(),
        ));
    }

    if points.is_empty() {
        return Ok(Vec::new());
    }

    let baseline_y = scale.value_to_pixel(0.0, plot.y, plot.bottom());
    let half_width = plot.width / points.len() as f64 * fill_ratio * 0.5;

    let bars = slot_centers(points.len(), plot)
        .into_iter()
        .zip(points)
        .map(|(center, point)| {
            let value_y = if point.value.is_finite() {
                scale.value_to_pixel(point.value, plot.y, plot.bottom())
            } else {
                baseline_y
            };
            BarGeometry {
                x_left: center - half_width,
                x_right: center + half_width,
                y_top: value_y.min(baseline_y),
                y_bottom: value_y.max(baseline_y),
            }
        })
        .collect();

    Ok(bars)
}

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LineStrokeStyle};

/// Visual constants used when laying a chart tree out into a render frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameStyle {
    /// Secondary-emphasis color used by the visible grid.
    pub secondary_color: Color,
    pub text_color: Color,
    pub grid_line_width: f64,
    pub grid_dash: LineStrokeStyle,
    pub grid_horizontal_lines: usize,
    pub limit_line_width: f64,
    pub limit_dash: LineStrokeStyle,
    /// Share of each bar slot covered by the bar, in `(0, 1]`.
    pub bar_fill_ratio: f64,
    pub bar_corner_radius: f64,
    pub axis_font_size_px: f64,
    pub axis_tick_count: usize,
    /// Gap between the plot and the axis labels.
    pub axis_gap_px: f64,
    pub label_font_size_px: f64,
    pub label_row_height_px: f64,
    pub legend_font_size_px: f64,
    pub legend_row_height_px: f64,
    pub legend_swatch_px: f64,
    pub legend_entry_gap_px: f64,
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self {
            secondary_color: Color::rgba(0.56, 0.56, 0.58, 1.0),
            text_color: Color::rgb(0.0, 0.0, 0.0),
            grid_line_width: 1.0,
            grid_dash: LineStrokeStyle::Dashed {
                dash_px: 4.0,
                gap_px: 4.0,
            },
            grid_horizontal_lines: 5,
            limit_line_width: 1.5,
            limit_dash: LineStrokeStyle::Dashed {
                dash_px: 6.0,
                gap_px: 3.0,
            },
            bar_fill_ratio: 0.6,
            bar_corner_radius: 2.0,
            axis_font_size_px: 10.0,
            axis_tick_count: 5,
            axis_gap_px: 4.0,
            label_font_size_px: 11.0,
            label_row_height_px: 18.0,
            legend_font_size_px: 12.0,
            legend_row_height_px: 22.0,
            legend_swatch_px: 10.0,
            legend_entry_gap_px: 12.0,
        }
    }
}

impl FrameStyle {
    pub fn validate(self) -> ChartResult<()> {
        self.secondary_color.validate()?;
        self.text_color.validate()?;
        self.grid_dash.validate()?;
        self.limit_dash.validate()?;
        for (name, value) in [
            ("grid_line_width", self.grid_line_width),
            ("limit_line_width", self.limit_line_width),
            ("axis_font_size_px", self.axis_font_size_px),
            ("label_font_size_px", self.label_font_size_px),
            ("legend_font_size_px", self.legend_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "frame style `{name}` must be finite and > 0"
                )));
            }
        }
        for (name, value) in [
            ("bar_corner_radius", self.bar_corner_radius),
            ("axis_gap_px", self.axis_gap_px),
            ("label_row_height_px", self.label_row_height_px),
            ("legend_row_height_px", self.legend_row_height_px),
            ("legend_swatch_px", self.legend_swatch_px),
            ("legend_entry_gap_px", self.legend_entry_gap_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "frame style `{name}` must be finite and >= 0"
                )));
            }
        }
        if !self.bar_fill_ratio.is_finite()
            || self.bar_fill_ratio <= 0.0
            || self.bar_fill_ratio > 1.0
        {
            return Err(ChartError::InvalidData(
                "frame style `bar_fill_ratio` must be in (0, 1]".to_owned(),
            ));
        }
        Ok(())
    }
}

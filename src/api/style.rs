use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ChartStyle;

/// Stroke width used when a stroke drawing mode is requested without one.
pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;

/// Named default preset for chart styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleProfile {
    /// Small-screen preset (watch-class targets).
    Compact,
    #[default]
    Standard,
}

impl StyleProfile {
    /// Picks the preset matching the current compilation target.
    #[must_use]
    pub fn for_target() -> Self {
        if cfg!(target_os = "watchos") {
            Self::Compact
        } else {
            Self::Standard
        }
    }

    #[must_use]
    pub const fn default_min_height(self) -> f64 {
        match self {
            Self::Compact => 50.0,
            Self::Standard => 100.0,
        }
    }

    /// Whether a caller-supplied max-y bound survives construction.
    ///
    /// The compact preset always auto-scales and drops any supplied bound.
    #[must_use]
    pub const fn keeps_max_y(self) -> bool {
        matches!(self, Self::Standard)
    }
}

/// How the line series is painted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DrawingMode {
    /// Closed path filled down to the baseline.
    #[default]
    Fill,
    /// Open path stroked with `width`.
    Stroke {
        #[serde(default = "default_stroke_width")]
        width: f64,
    },
}

fn default_stroke_width() -> f64 {
    DEFAULT_STROKE_WIDTH
}

impl DrawingMode {
    #[must_use]
    pub const fn stroke(width: f64) -> Self {
        Self::Stroke { width }
    }

    #[must_use]
    pub const fn default_stroke() -> Self {
        Self::Stroke {
            width: DEFAULT_STROKE_WIDTH,
        }
    }

    /// Fill closes the path back to the baseline; stroke leaves it open.
    #[must_use]
    pub const fn closes_path(self) -> bool {
        match self {
            Self::Fill => true,
            Self::Stroke { .. } => false,
        }
    }
}

/// Partially specified style. Every absent field falls back to the selected
/// [`StyleProfile`] default.
///
/// This is also the persisted configuration format, see
/// [`BarLineChartStyleOptions::to_json_contract_v1_pretty`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BarLineChartStyleOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_axis: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis_leading_padding: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_labels: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_legends: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drawing: Option<DrawingMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_y: Option<f64>,
}

impl BarLineChartStyleOptions {
    #[must_use]
    pub fn with_min_height(mut self, min_height: f64) -> Self {
        self.min_height = Some(min_height);
        self
    }

    #[must_use]
    pub fn with_show_axis(mut self, show_axis: bool) -> Self {
        self.show_axis = Some(show_axis);
        self
    }

    #[must_use]
    pub fn with_axis_leading_padding(mut self, padding: f64) -> Self {
        self.axis_leading_padding = Some(padding);
        self
    }

    #[must_use]
    pub fn with_show_labels(mut self, show_labels: bool) -> Self {
        self.show_labels = Some(show_labels);
        self
    }

    #[must_use]
    pub fn with_label_count(mut self, label_count: usize) -> Self {
        self.label_count = Some(label_count);
        self
    }

    #[must_use]
    pub fn with_show_legends(mut self, show_legends: bool) -> Self {
        self.show_legends = Some(show_legends);
        self
    }

    #[must_use]
    pub fn with_drawing(mut self, drawing: DrawingMode) -> Self {
        self.drawing = Some(drawing);
        self
    }

    #[must_use]
    pub fn with_max_y(mut self, max_y: f64) -> Self {
        self.max_y = Some(max_y);
        self
    }
}

/// Immutable rendering configuration of a combined bar/line chart.
///
/// Two styles with equal fields are interchangeable; the profile used to
/// build a style is not retained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLineChartStyle {
    min_height: f64,
    show_axis: bool,
    axis_leading_padding: f64,
    show_labels: bool,
    label_count: Option<usize>,
    show_legends: bool,
    drawing: DrawingMode,
    max_y: Option<f64>,
}

impl BarLineChartStyle {
    #[must_use]
    pub fn new(profile: StyleProfile, options: BarLineChartStyleOptions) -> Self {
        let max_y = if profile.keeps_max_y() {
            options.max_y
        } else {
            if let Some(discarded) = options.max_y {
                debug!(
                    ?profile,
                    max_y = discarded,
                    "compact profile ignores max_y and auto-scales"
                );
            }
            None
        };

        Self {
            min_height: options
                .min_height
                .unwrap_or_else(|| profile.default_min_height()),
            show_axis: options.show_axis.unwrap_or(true),
            axis_leading_padding: options.axis_leading_padding.unwrap_or(0.0),
            show_labels: options.show_labels.unwrap_or(true),
            label_count: options.label_count,
            show_legends: options.show_legends.unwrap_or(true),
            drawing: options.drawing.unwrap_or_default(),
            max_y,
        }
    }

    #[must_use]
    pub fn for_profile(profile: StyleProfile) -> Self {
        Self::new(profile, BarLineChartStyleOptions::default())
    }

    /// Fully populated options that rebuild this style under any profile
    /// that keeps `max_y`.
    #[must_use]
    pub fn options(&self) -> BarLineChartStyleOptions {
        BarLineChartStyleOptions {
            min_height: Some(self.min_height),
            show_axis: Some(self.show_axis),
            axis_leading_padding: Some(self.axis_leading_padding),
            show_labels: Some(self.show_labels),
            label_count: self.label_count,
            show_legends: Some(self.show_legends),
            drawing: Some(self.drawing),
            max_y: self.max_y,
        }
    }

    #[must_use]
    pub fn min_height(&self) -> f64 {
        self.min_height
    }

    #[must_use]
    pub fn show_axis(&self) -> bool {
        self.show_axis
    }

    #[must_use]
    pub fn axis_leading_padding(&self) -> f64 {
        self.axis_leading_padding
    }

    #[must_use]
    pub fn show_labels(&self) -> bool {
        self.show_labels
    }

    /// Configured label count; `None` shows one label per bar point.
    #[must_use]
    pub fn label_count(&self) -> Option<usize> {
        self.label_count
    }

    #[must_use]
    pub fn show_legends(&self) -> bool {
        self.show_legends
    }

    #[must_use]
    pub fn drawing(&self) -> DrawingMode {
        self.drawing
    }

    /// Upper bound of the value axis; `None` auto-scales to the data.
    #[must_use]
    pub fn max_y(&self) -> Option<f64> {
        self.max_y
    }
}

impl Default for BarLineChartStyle {
    fn default() -> Self {
        Self::for_profile(StyleProfile::for_target())
    }
}

impl ChartStyle for BarLineChartStyle {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{ChartDataPoint, Legend};
use crate::render::{Color, GradientStop, GradientStops};

/// Horizontal gradient running from the leading to the trailing edge of the
/// plot, independent of pixel geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub stops: GradientStops,
}

impl LinearGradient {
    /// One stop per color, evenly spaced over `[0, 1]` in input order.
    #[must_use]
    pub fn evenly_spaced<I>(colors: I) -> Self
    where
        I: IntoIterator<Item = Color>,
        I::IntoIter: ExactSizeIterator,
    {
        let colors = colors.into_iter();
        let last_index = colors.len().saturating_sub(1);
        let stops = colors
            .enumerate()
            .map(|(index, color)| GradientStop {
                location: if last_index == 0 {
                    0.0
                } else {
                    index as f64 / last_index as f64
                },
                color,
            })
            .collect();
        Self { stops }
    }

    /// Gradient built from each point's legend color.
    #[must_use]
    pub fn from_legends(points: &[ChartDataPoint]) -> Self {
        Self::evenly_spaced(points.iter().map(|point| point.legend.color))
    }

    #[must_use]
    pub fn colors(&self) -> Vec<Color> {
        self.stops.iter().map(|stop| stop.color).collect()
    }
}

/// Bar layer input. The combined chart owns the axis, so `show_axis` is
/// always `false` here.
#[derive(Debug, Clone, PartialEq)]
pub struct BarsNode<'a> {
    pub points: &'a [ChartDataPoint],
    pub limit: Option<&'a ChartDataPoint>,
    pub show_axis: bool,
    pub max_y: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinePathNode<'a> {
    pub points: &'a [ChartDataPoint],
    /// Closed paths return to the baseline and enclose the area under the line.
    pub closed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LinePaint {
    Fill { gradient: LinearGradient },
    Stroke { gradient: LinearGradient, width: f64 },
}

impl LinePaint {
    #[must_use]
    pub fn gradient(&self) -> &LinearGradient {
        match self {
            Self::Fill { gradient } | Self::Stroke { gradient, .. } => gradient,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineNode<'a> {
    pub path: LinePathNode<'a>,
    pub paint: LinePaint,
}

/// Color role of the background grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridTone {
    /// Drawn in the secondary-emphasis color.
    Secondary,
    /// Fully transparent; the grid still reserves its space.
    Transparent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridNode {
    pub tone: GridTone,
    pub dashed: bool,
}

/// Overlapping plot layers: grid behind bars, line over bars.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotNode<'a> {
    pub grid: GridNode,
    pub bars: BarsNode<'a>,
    pub line: LineNode<'a>,
    pub min_height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelsNode<'a> {
    pub points: &'a [ChartDataPoint],
    /// Requested label count, passed through unclamped.
    pub count: usize,
    pub accessibility_hidden: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisNode<'a> {
    pub points: &'a [ChartDataPoint],
    pub limit: Option<&'a ChartDataPoint>,
    pub max_y: Option<f64>,
    pub leading_padding: f64,
    pub accessibility_hidden: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendNode<'a> {
    /// Legend source points: the limit first when present, then the bars.
    pub points: Vec<&'a ChartDataPoint>,
    pub accessibility_hidden: bool,
}

impl LegendNode<'_> {
    /// Distinct legends in first-occurrence order.
    ///
    /// Two legends are the same entry when both name and color match.
    #[must_use]
    pub fn entries(&self) -> Vec<&Legend> {
        let mut distinct: IndexMap<LegendKey<'_>, &Legend> = IndexMap::new();
        for point in &self.points {
            distinct
                .entry(LegendKey::of(&point.legend))
                .or_insert(&point.legend);
        }
        distinct.into_values().collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct LegendKey<'a> {
    name: &'a str,
    rgba: [OrderedFloat<f64>; 4],
}

impl<'a> LegendKey<'a> {
    fn of(legend: &'a Legend) -> Self {
        let color = legend.color;
        Self {
            name: &legend.name,
            rgba: [
                OrderedFloat(color.red),
                OrderedFloat(color.green),
                OrderedFloat(color.blue),
                OrderedFloat(color.alpha),
            ],
        }
    }
}

/// Visual element kinds of a combined chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartElementKind {
    Grid,
    Bars,
    Line,
    Labels,
    Axis,
    Legend,
}

/// Declarative description of one combined chart render.
///
/// Layout: a row holding the chart column (plot, then optional labels) and
/// the optional axis, followed by the optional legend row.
#[derive(Debug, Clone, PartialEq)]
pub struct BarLineChartTree<'a> {
    pub plot: PlotNode<'a>,
    pub labels: Option<LabelsNode<'a>>,
    pub axis: Option<AxisNode<'a>>,
    pub legend: Option<LegendNode<'a>>,
}

impl BarLineChartTree<'_> {
    /// Present elements in stack order.
    #[must_use]
    pub fn elements(&self) -> Vec<ChartElementKind> {
        let mut elements = vec![
            ChartElementKind::Grid,
            ChartElementKind::Bars,
            ChartElementKind::Line,
        ];
        if self.labels.is_some() {
            elements.push(ChartElementKind::Labels);
        }
        if self.axis.is_some() {
            elements.push(ChartElementKind::Axis);
        }
        if self.legend.is_some() {
            elements.push(ChartElementKind::Legend);
        }
        elements
    }

    /// Rows of the outer vertical stack.
    #[must_use]
    pub fn row_count(&self) -> usize {
        1 + usize::from(self.legend.is_some())
    }
}

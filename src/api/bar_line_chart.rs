use tracing::trace;

use crate::core::{ChartDataPoint, Viewport};
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

use super::{
    AxisNode, BarLineChartStyle, BarLineChartTree, BarsNode, DrawingMode, FrameStyle, GridNode,
    GridTone, LabelsNode, LegendNode, LineNode, LinePaint, LinePathNode, LinearGradient, PlotNode,
    StyleEnvironment, build_bar_line_render_frame,
};

/// Combined bar and line chart.
///
/// Holds only its data inputs. The style is resolved from the
/// [`StyleEnvironment`] on every render, so swapping the ambient style between
/// renders changes the output without rebuilding the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BarLineChart {
    bar_points: Vec<ChartDataPoint>,
    line_points: Vec<ChartDataPoint>,
    limit: Option<ChartDataPoint>,
}

impl BarLineChart {
    /// Bar and line series are not required to align in length or domain.
    #[must_use]
    pub fn new(bar_points: Vec<ChartDataPoint>, line_points: Vec<ChartDataPoint>) -> Self {
        Self {
            bar_points,
            line_points,
            limit: None,
        }
    }

    #[must_use]
    pub fn with_limit(mut self, limit: ChartDataPoint) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn bar_points(&self) -> &[ChartDataPoint] {
        &self.bar_points
    }

    #[must_use]
    pub fn line_points(&self) -> &[ChartDataPoint] {
        &self.line_points
    }

    #[must_use]
    pub fn limit(&self) -> Option<&ChartDataPoint> {
        self.limit.as_ref()
    }

    /// Resolves the effective style, falling back to
    /// `BarLineChartStyle::default()` for absent or foreign ambient styles.
    #[must_use]
    pub fn resolve_style(environment: &StyleEnvironment) -> BarLineChartStyle {
        environment.resolve_style::<BarLineChartStyle>()
    }

    /// Resolves the ambient style and composes the chart tree.
    #[must_use]
    pub fn render(&self, environment: &StyleEnvironment) -> BarLineChartTree<'_> {
        let style = Self::resolve_style(environment);
        self.compose(&style)
    }

    /// Composes the chart tree for an explicit style.
    #[must_use]
    pub fn compose(&self, style: &BarLineChartStyle) -> BarLineChartTree<'_> {
        let gradient = LinearGradient::from_legends(&self.line_points);
        let drawing = style.drawing();
        let paint = match drawing {
            DrawingMode::Fill => LinePaint::Fill { gradient },
            DrawingMode::Stroke { width } => LinePaint::Stroke { gradient, width },
        };

        let plot = PlotNode {
            grid: GridNode {
                tone: if style.show_axis() {
                    GridTone::Secondary
                } else {
                    GridTone::Transparent
                },
                dashed: true,
            },
            bars: BarsNode {
                points: &self.bar_points,
                limit: self.limit.as_ref(),
                show_axis: false,
                max_y: style.max_y(),
            },
            line: LineNode {
                path: LinePathNode {
                    points: &self.line_points,
                    closed: drawing.closes_path(),
                },
                paint,
            },
            min_height: style.min_height(),
        };

        let labels = style.show_labels().then(|| LabelsNode {
            points: &self.bar_points,
            count: style.label_count().unwrap_or(self.bar_points.len()),
            accessibility_hidden: true,
        });

        let axis = style.show_axis().then(|| AxisNode {
            points: &self.bar_points,
            limit: self.limit.as_ref(),
            max_y: style.max_y(),
            leading_padding: style.axis_leading_padding(),
            accessibility_hidden: true,
        });

        let legend = style.show_legends().then(|| LegendNode {
            points: self.limit.iter().chain(&self.bar_points).collect(),
            accessibility_hidden: true,
        });

        let tree = BarLineChartTree {
            plot,
            labels,
            axis,
            legend,
        };
        trace!(
            bars = self.bar_points.len(),
            line_points = self.line_points.len(),
            has_limit = self.limit.is_some(),
            elements = ?tree.elements(),
            "composed bar/line chart"
        );
        tree
    }

    /// Composes with the ambient style and lays the result out into a frame.
    pub fn render_frame(
        &self,
        environment: &StyleEnvironment,
        viewport: Viewport,
        frame_style: &FrameStyle,
    ) -> ChartResult<RenderFrame> {
        build_bar_line_render_frame(&self.render(environment), viewport, frame_style)
    }

    /// Full pass: resolve, compose, lay out and hand the frame to `renderer`.
    pub fn render_with<R: Renderer>(
        &self,
        renderer: &mut R,
        environment: &StyleEnvironment,
        viewport: Viewport,
        frame_style: &FrameStyle,
    ) -> ChartResult<()> {
        let frame = self.render_frame(environment, viewport, frame_style)?;
        renderer.render(&frame)
    }
}

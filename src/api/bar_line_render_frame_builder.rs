use tracing::debug;

use crate::core::{
    PixelRect, ValueScale, Viewport, project_line_path, project_value_bars, slot_centers,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    ChartLayerKind, Color, LinePrimitive, LineStrokeStyle, PathPaint, PathPrimitive,
    PixelGradient, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::axis_label_format::format_axis_value;
use super::layout_helpers::{estimate_label_text_width_px, evenly_spread_indices};
use super::{
    AxisNode, BarLineChartTree, FrameStyle, GridNode, GridTone, LabelsNode, LegendNode, LineNode,
    LinePaint, PlotNode,
};

const LEGEND_SWATCH_TEXT_GAP_PX: f64 = 4.0;

/// Lays a composed chart out inside `viewport` and materializes its
/// primitives.
///
/// The plot never gets shorter than the tree's minimum height; when the
/// viewport cannot fit it, the frame viewport grows instead. Bars, limit,
/// line and axis share one value scale. A minimum height too large for a
/// `Viewport` is rejected with [`ChartError::InvalidViewport`].
pub fn build_bar_line_render_frame(
    tree: &BarLineChartTree<'_>,
    viewport: Viewport,
    style: &FrameStyle,
) -> ChartResult<RenderFrame> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    style.validate()?;

    let scale = resolve_shared_scale(&tree.plot);
    let axis_ticks = tree
        .axis
        .as_ref()
        .map(|_| resolve_axis_ticks(scale, style))
        .unwrap_or_default();
    let axis_width = tree
        .axis
        .as_ref()
        .map(|axis| {
            let widest = axis_ticks
                .iter()
                .map(|(_, text)| estimate_label_text_width_px(text, style.axis_font_size_px))
                .fold(0.0, f64::max);
            axis.leading_padding.max(0.0) + style.axis_gap_px + widest
        })
        .unwrap_or(0.0);
    let labels_height = if tree.labels.is_some() {
        style.label_row_height_px
    } else {
        0.0
    };
    let legend_height = if tree.legend.is_some() {
        style.legend_row_height_px
    } else {
        0.0
    };

    let width = f64::from(viewport.width);
    let available_plot_height = f64::from(viewport.height) - labels_height - legend_height;
    let plot_height = available_plot_height.max(tree.plot.min_height).max(0.0);
    let required_height = plot_height + labels_height + legend_height;
    if !required_height.is_finite() || required_height.ceil() > f64::from(u32::MAX) {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: u32::MAX,
        });
    }
    let frame_viewport = if required_height > f64::from(viewport.height) {
        Viewport::new(viewport.width, required_height.ceil() as u32)
    } else {
        viewport
    };
    let plot = PixelRect::new(0.0, 0.0, (width - axis_width).max(0.0), plot_height);

    let mut frame = RenderFrame::new(frame_viewport);
    push_grid(&mut frame, tree.plot.grid, tree.plot.bars.points.len(), plot, style);
    push_bars(&mut frame, &tree.plot, scale, plot, style)?;
    push_line(&mut frame, &tree.plot.line, scale, plot);
    if let Some(labels) = &tree.labels {
        push_labels(&mut frame, labels, plot, style);
    }
    if let Some(axis) = &tree.axis {
        push_axis(&mut frame, axis, &axis_ticks, scale, plot, style);
    }
    if let Some(legend) = &tree.legend {
        let legend_top = plot.bottom() + labels_height;
        push_legend(&mut frame, legend, legend_top, style);
    }

    debug!(
        width = frame_viewport.width,
        height = frame_viewport.height,
        lines = frame.line_count(),
        rects = frame.rect_count(),
        paths = frame.path_count(),
        texts = frame.text_count(),
        "built bar/line render frame"
    );
    Ok(frame)
}

fn resolve_shared_scale(plot: &PlotNode<'_>) -> ValueScale {
    let values = plot
        .bars
        .points
        .iter()
        .chain(plot.bars.limit)
        .chain(plot.line.path.points)
        .map(|point| point.value);
    ValueScale::fit(values, plot.bars.max_y)
}

fn resolve_axis_ticks(scale: ValueScale, style: &FrameStyle) -> Vec<(f64, String)> {
    let ticks = scale.ticks(style.axis_tick_count);
    let (min, max) = scale.domain();
    let step = if ticks.len() > 1 {
        (max - min) / (ticks.len() - 1) as f64
    } else {
        max - min
    };
    ticks
        .into_iter()
        .map(|tick| (tick, format_axis_value(tick, step)))
        .collect()
}

fn grid_color(grid: GridNode, style: &FrameStyle) -> Color {
    match grid.tone {
        GridTone::Secondary => style.secondary_color,
        GridTone::Transparent => Color::TRANSPARENT,
    }
}

fn push_grid(
    frame: &mut RenderFrame,
    grid: GridNode,
    bar_count: usize,
    plot: PixelRect,
    style: &FrameStyle,
) {
    let color = grid_color(grid, style);
    let stroke_style = if grid.dashed {
        style.grid_dash
    } else {
        LineStrokeStyle::Solid
    };

    let rows = style.grid_horizontal_lines;
    for row in 0..rows {
        let y = if rows > 1 {
            plot.y + plot.height * row as f64 / (rows - 1) as f64
        } else {
            plot.y
        };
        frame.push_line(
            ChartLayerKind::Grid,
            LinePrimitive::new(plot.x, y, plot.right(), y, style.grid_line_width, color)
                .with_stroke_style(stroke_style),
        );
    }

    let columns = bar_count.max(1);
    for column in 0..=columns {
        let x = plot.x + plot.width * column as f64 / columns as f64;
        frame.push_line(
            ChartLayerKind::Grid,
            LinePrimitive::new(x, plot.y, x, plot.bottom(), style.grid_line_width, color)
                .with_stroke_style(stroke_style),
        );
    }
}

fn push_bars(
    frame: &mut RenderFrame,
    plot_node: &PlotNode<'_>,
    scale: ValueScale,
    plot: PixelRect,
    style: &FrameStyle,
) -> ChartResult<()> {
    let bars = &plot_node.bars;
    let geometry = project_value_bars(bars.points, scale, plot, style.bar_fill_ratio)?;
    for (bar, point) in geometry.iter().zip(bars.points) {
        frame.push_rect(
            ChartLayerKind::Bars,
            RectPrimitive::new(
                bar.x_left,
                bar.y_top,
                bar.width(),
                bar.height(),
                point.legend.color,
            )
            .with_corner_radius(style.bar_corner_radius.min(bar.width() * 0.5)),
        );
    }

    if let Some(limit) = bars.limit.filter(|limit| limit.value.is_finite()) {
        let y = scale.value_to_pixel(limit.value, plot.y, plot.bottom());
        frame.push_line(
            ChartLayerKind::Bars,
            LinePrimitive::new(
                plot.x,
                y,
                plot.right(),
                y,
                style.limit_line_width,
                limit.legend.color,
            )
            .with_stroke_style(style.limit_dash),
        );
    }
    Ok(())
}

fn push_line(frame: &mut RenderFrame, line: &LineNode<'_>, scale: ValueScale, plot: PixelRect) {
    let points = project_line_path(line.path.points, scale, plot, line.path.closed);
    if points.is_empty() {
        return;
    }

    let gradient = PixelGradient {
        x_start: plot.x,
        x_end: plot.right(),
        stops: line.paint.gradient().stops.clone(),
    };
    let paint = match line.paint {
        LinePaint::Fill { .. } => PathPaint::Fill { gradient },
        LinePaint::Stroke { width, .. } => PathPaint::Stroke { gradient, width },
    };
    frame.push_path(
        ChartLayerKind::Line,
        PathPrimitive {
            points,
            closed: line.path.closed,
            paint,
        },
    );
}

fn push_labels(
    frame: &mut RenderFrame,
    labels: &LabelsNode<'_>,
    plot: PixelRect,
    style: &FrameStyle,
) {
    let centers = slot_centers(labels.points.len(), plot);
    let y = plot.bottom() + (style.label_row_height_px - style.label_font_size_px).max(0.0) * 0.5;
    for index in evenly_spread_indices(labels.points.len(), labels.count) {
        let text = &labels.points[index].label;
        if text.is_empty() {
            continue;
        }
        frame.push_text(
            ChartLayerKind::Labels,
            TextPrimitive::new(
                text.as_str(),
                centers[index],
                y,
                style.label_font_size_px,
                style.text_color,
                TextHAlign::Center,
            ),
        );
    }
}

fn push_axis(
    frame: &mut RenderFrame,
    axis: &AxisNode<'_>,
    ticks: &[(f64, String)],
    scale: ValueScale,
    plot: PixelRect,
    style: &FrameStyle,
) {
    let x = plot.right() + axis.leading_padding.max(0.0) + style.axis_gap_px;
    for (tick, text) in ticks {
        let y = scale.value_to_pixel(*tick, plot.y, plot.bottom()) - style.axis_font_size_px * 0.5;
        frame.push_text(
            ChartLayerKind::Axis,
            TextPrimitive::new(
                text.as_str(),
                x,
                y,
                style.axis_font_size_px,
                style.secondary_color,
                TextHAlign::Left,
            ),
        );
    }
}

fn push_legend(frame: &mut RenderFrame, legend: &LegendNode<'_>, top: f64, style: &FrameStyle) {
    let center_y = top + style.legend_row_height_px * 0.5;
    let mut x = 0.0;
    for entry in legend.entries() {
        frame.push_rect(
            ChartLayerKind::Legend,
            RectPrimitive::new(
                x,
                center_y - style.legend_swatch_px * 0.5,
                style.legend_swatch_px,
                style.legend_swatch_px,
                entry.color,
            )
            .with_corner_radius(style.legend_swatch_px * 0.5),
        );
        x += style.legend_swatch_px + LEGEND_SWATCH_TEXT_GAP_PX;

        if !entry.name.is_empty() {
            frame.push_text(
                ChartLayerKind::Legend,
                TextPrimitive::new(
                    entry.name.as_str(),
                    x,
                    center_y - style.legend_font_size_px * 0.5,
                    style.legend_font_size_px,
                    style.text_color,
                    TextHAlign::Left,
                ),
            );
            x += estimate_label_text_width_px(&entry.name, style.legend_font_size_px);
        }
        x += style.legend_entry_gap_px;
    }
}

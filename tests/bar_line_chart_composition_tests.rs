use bar_line_chart::api::{
    BarLineChart, BarLineChartStyle, BarLineChartStyleOptions, ChartElementKind, DrawingMode,
    GridTone, LinePaint, StyleEnvironment, StyleProfile,
};
use bar_line_chart::core::{ChartDataPoint, Legend};
use bar_line_chart::render::Color;

fn point(value: f64, name: &str, color: Color) -> ChartDataPoint {
    ChartDataPoint::new(value, name, Legend::new(name, color))
}

fn bar_points() -> Vec<ChartDataPoint> {
    vec![
        point(10.0, "bar1", Color::rgb(1.0, 0.0, 0.0)),
        point(20.0, "bar2", Color::rgb(0.0, 1.0, 0.0)),
        point(30.0, "bar3", Color::rgb(0.0, 0.0, 1.0)),
    ]
}

fn line_points() -> Vec<ChartDataPoint> {
    vec![
        point(5.0, "line1", Color::rgb(1.0, 1.0, 0.0)),
        point(15.0, "line2", Color::rgb(0.0, 1.0, 1.0)),
        point(25.0, "line3", Color::rgb(1.0, 0.0, 1.0)),
    ]
}

fn limit_point() -> ChartDataPoint {
    point(40.0, "limit", Color::rgb(0.3, 0.3, 0.3))
}

fn standard(options: BarLineChartStyleOptions) -> BarLineChartStyle {
    BarLineChartStyle::new(StyleProfile::Standard, options)
}

#[test]
fn default_style_end_to_end_composition() {
    let chart = BarLineChart::new(bar_points(), line_points()).with_limit(limit_point());
    let tree = chart.render(&StyleEnvironment::new());

    let bars = &tree.plot.bars;
    assert_eq!(bars.points.len(), 3);
    assert_eq!(bars.limit.map(|limit| limit.value), Some(40.0));
    assert!(!bars.show_axis);
    assert_eq!(bars.max_y, None);

    assert!(tree.plot.line.path.closed);
    match &tree.plot.line.paint {
        LinePaint::Fill { gradient } => assert_eq!(gradient.stops.len(), 3),
        other => panic!("expected fill paint, got {other:?}"),
    }

    assert_eq!(tree.plot.grid.tone, GridTone::Secondary);
    assert!(tree.plot.grid.dashed);

    let axis = tree.axis.as_ref().expect("axis shown by default");
    assert_eq!(axis.leading_padding, 0.0);
    assert!(axis.accessibility_hidden);

    let labels = tree.labels.as_ref().expect("labels shown by default");
    assert_eq!(labels.count, 3);
    assert!(labels.accessibility_hidden);

    let legend = tree.legend.as_ref().expect("legend shown by default");
    let names: Vec<&str> = legend
        .points
        .iter()
        .map(|point| point.legend.name.as_str())
        .collect();
    assert_eq!(names, vec!["limit", "bar1", "bar2", "bar3"]);
    assert!(legend.accessibility_hidden);

    assert_eq!(tree.row_count(), 2);
    assert_eq!(
        tree.elements(),
        vec![
            ChartElementKind::Grid,
            ChartElementKind::Bars,
            ChartElementKind::Line,
            ChartElementKind::Labels,
            ChartElementKind::Axis,
            ChartElementKind::Legend,
        ]
    );
}

#[test]
fn stroke_without_legends_end_to_end_composition() {
    let chart = BarLineChart::new(bar_points(), line_points()).with_limit(limit_point());
    let style = standard(
        BarLineChartStyleOptions::default()
            .with_drawing(DrawingMode::stroke(4.0))
            .with_show_legends(false),
    );
    let tree = chart.compose(&style);

    assert!(!tree.plot.line.path.closed);
    match &tree.plot.line.paint {
        LinePaint::Stroke { width, gradient } => {
            assert_eq!(*width, 4.0);
            assert_eq!(gradient.stops.len(), 3);
        }
        other => panic!("expected stroke paint, got {other:?}"),
    }
    assert!(tree.legend.is_none());
    assert_eq!(tree.row_count(), 1);
    assert!(tree.axis.is_some());
}

#[test]
fn gradient_stops_follow_line_point_legends_in_order() {
    let chart = BarLineChart::new(bar_points(), line_points());
    let tree = chart.compose(&standard(BarLineChartStyleOptions::default()));
    let gradient = tree.plot.line.paint.gradient();

    let expected: Vec<Color> = line_points()
        .iter()
        .map(|point| point.legend.color)
        .collect();
    assert_eq!(gradient.colors(), expected);
    let locations: Vec<f64> = gradient.stops.iter().map(|stop| stop.location).collect();
    assert_eq!(locations, vec![0.0, 0.5, 1.0]);
}

#[test]
fn gradient_ignores_values_when_spacing_stops() {
    let uneven = vec![
        point(1.0, "a", Color::rgb(1.0, 0.0, 0.0)),
        point(1000.0, "b", Color::rgb(0.0, 1.0, 0.0)),
        point(2.0, "c", Color::rgb(0.0, 0.0, 1.0)),
        point(3.0, "d", Color::rgb(0.0, 0.0, 0.0)),
    ];
    let chart = BarLineChart::new(Vec::new(), uneven);
    let tree = chart.compose(&standard(BarLineChartStyleOptions::default()));
    let locations: Vec<f64> = tree
        .plot
        .line
        .paint
        .gradient()
        .stops
        .iter()
        .map(|stop| stop.location)
        .collect();
    assert_eq!(locations.len(), 4);
    for (index, location) in locations.iter().enumerate() {
        assert!((location - index as f64 / 3.0).abs() <= 1e-12);
    }
}

#[test]
fn line_series_may_differ_in_length_from_bars() {
    let chart = BarLineChart::new(bar_points(), line_points()[..1].to_vec());
    let tree = chart.compose(&standard(BarLineChartStyleOptions::default()));
    assert_eq!(tree.plot.bars.points.len(), 3);
    assert_eq!(tree.plot.line.path.points.len(), 1);
    assert_eq!(tree.plot.line.paint.gradient().stops.len(), 1);
}

#[test]
fn configured_label_count_passes_through_unclamped() {
    let chart = BarLineChart::new(bar_points(), line_points());
    let tree = chart.compose(&standard(
        BarLineChartStyleOptions::default().with_label_count(12),
    ));
    assert_eq!(tree.labels.map(|labels| labels.count), Some(12));

    let tree = chart.compose(&standard(
        BarLineChartStyleOptions::default().with_label_count(0),
    ));
    assert_eq!(tree.labels.map(|labels| labels.count), Some(0));
}

#[test]
fn legend_without_limit_lists_bar_points_only() {
    let chart = BarLineChart::new(bar_points(), line_points());
    let tree = chart.compose(&standard(BarLineChartStyleOptions::default()));
    let legend = tree.legend.expect("legend");
    let values: Vec<f64> = legend.points.iter().map(|point| point.value).collect();
    assert_eq!(values, vec![10.0, 20.0, 30.0]);
}

#[test]
fn max_y_passes_through_to_bars_and_axis() {
    let chart = BarLineChart::new(bar_points(), line_points());
    let tree = chart.compose(&standard(
        BarLineChartStyleOptions::default().with_max_y(80.0),
    ));
    assert_eq!(tree.plot.bars.max_y, Some(80.0));
    assert_eq!(tree.axis.map(|axis| axis.max_y), Some(Some(80.0)));
}

#[test]
fn hidden_axis_makes_grid_transparent_but_keeps_it() {
    let chart = BarLineChart::new(bar_points(), line_points());
    let tree = chart.compose(&standard(
        BarLineChartStyleOptions::default().with_show_axis(false),
    ));
    assert!(tree.axis.is_none());
    assert_eq!(tree.plot.grid.tone, GridTone::Transparent);
    assert!(tree.elements().contains(&ChartElementKind::Grid));
}

#[test]
fn toggles_remove_exactly_their_own_element() {
    let chart = BarLineChart::new(bar_points(), line_points()).with_limit(limit_point());
    let all = chart
        .compose(&standard(BarLineChartStyleOptions::default()))
        .elements();

    let cases = [
        (
            BarLineChartStyleOptions::default().with_show_axis(false),
            ChartElementKind::Axis,
        ),
        (
            BarLineChartStyleOptions::default().with_show_labels(false),
            ChartElementKind::Labels,
        ),
        (
            BarLineChartStyleOptions::default().with_show_legends(false),
            ChartElementKind::Legend,
        ),
    ];
    for (options, removed) in cases {
        let elements = chart.compose(&standard(options)).elements();
        let expected: Vec<ChartElementKind> =
            all.iter().copied().filter(|kind| *kind != removed).collect();
        assert_eq!(elements, expected);
    }
}

#[test]
fn empty_inputs_compose_degenerate_chart() {
    let chart = BarLineChart::new(Vec::new(), Vec::new());
    let tree = chart.compose(&standard(BarLineChartStyleOptions::default()));
    assert!(tree.plot.bars.points.is_empty());
    assert!(tree.plot.line.paint.gradient().stops.is_empty());
    assert_eq!(tree.labels.map(|labels| labels.count), Some(0));
    assert_eq!(tree.legend.map(|legend| legend.points.len()), Some(0));
}

#[test]
fn composition_is_idempotent() {
    let chart = BarLineChart::new(bar_points(), line_points()).with_limit(limit_point());
    let environment = StyleEnvironment::new();
    assert_eq!(chart.render(&environment), chart.render(&environment));
}

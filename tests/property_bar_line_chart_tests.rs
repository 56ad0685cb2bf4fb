use bar_line_chart::api::{
    BarLineChart, BarLineChartStyle, BarLineChartStyleOptions, DrawingMode, FrameStyle, LinePaint,
    StyleProfile, build_bar_line_render_frame,
};
use bar_line_chart::core::{ChartDataPoint, Legend, Viewport};
use bar_line_chart::render::{ChartLayerKind, Color};
use proptest::prelude::*;

fn points_from(values: &[f64], tag: &str) -> Vec<ChartDataPoint> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let shade = (index % 10) as f64 / 10.0;
            ChartDataPoint::new(
                *value,
                format!("{tag}{index}"),
                Legend::new(format!("{tag}{index}"), Color::rgb(shade, 1.0 - shade, 0.5)),
            )
        })
        .collect()
}

fn drawing_strategy() -> impl Strategy<Value = DrawingMode> {
    prop_oneof![
        Just(DrawingMode::Fill),
        (0.5f64..10.0).prop_map(DrawingMode::stroke),
    ]
}

proptest! {
    #[test]
    fn max_y_survives_only_on_standard_profile(max_y in -1_000.0f64..1_000.0) {
        let options = BarLineChartStyleOptions::default().with_max_y(max_y);
        let standard = BarLineChartStyle::new(StyleProfile::Standard, options);
        let compact = BarLineChartStyle::new(StyleProfile::Compact, options);
        prop_assert_eq!(standard.max_y(), Some(max_y));
        prop_assert_eq!(compact.max_y(), None);
    }

    #[test]
    fn composition_invariants_hold(
        bar_values in proptest::collection::vec(-500.0f64..500.0, 0..24),
        line_values in proptest::collection::vec(-500.0f64..500.0, 0..24),
        limit in proptest::option::of(-500.0f64..500.0),
        label_count in proptest::option::of(0usize..40),
        drawing in drawing_strategy(),
        show_axis in any::<bool>(),
        show_labels in any::<bool>(),
        show_legends in any::<bool>(),
    ) {
        let bars = points_from(&bar_values, "b");
        let line = points_from(&line_values, "l");
        let mut chart = BarLineChart::new(bars.clone(), line.clone());
        if let Some(limit) = limit {
            chart = chart.with_limit(points_from(&[limit], "limit").remove(0));
        }

        let mut options = BarLineChartStyleOptions::default()
            .with_drawing(drawing)
            .with_show_axis(show_axis)
            .with_show_labels(show_labels)
            .with_show_legends(show_legends);
        if let Some(count) = label_count {
            options = options.with_label_count(count);
        }
        let style = BarLineChartStyle::new(StyleProfile::Standard, options);
        let tree = chart.compose(&style);

        let gradient = tree.plot.line.paint.gradient();
        prop_assert_eq!(gradient.stops.len(), line.len());
        for (stop, point) in gradient.stops.iter().zip(&line) {
            prop_assert_eq!(stop.color, point.legend.color);
        }

        match (&tree.plot.line.paint, drawing) {
            (LinePaint::Fill { .. }, DrawingMode::Fill) => prop_assert!(tree.plot.line.path.closed),
            (LinePaint::Stroke { width, .. }, DrawingMode::Stroke { width: expected }) => {
                prop_assert!(!tree.plot.line.path.closed);
                prop_assert_eq!(*width, expected);
            }
            (paint, mode) => prop_assert!(false, "paint {:?} does not match mode {:?}", paint, mode),
        }

        prop_assert_eq!(tree.axis.is_some(), show_axis);
        prop_assert_eq!(tree.labels.is_some(), show_labels);
        prop_assert_eq!(tree.legend.is_some(), show_legends);

        if let Some(labels) = &tree.labels {
            prop_assert_eq!(labels.count, label_count.unwrap_or(bars.len()));
        }
        if let Some(legend) = &tree.legend {
            let expected_len = bars.len() + usize::from(limit.is_some());
            prop_assert_eq!(legend.points.len(), expected_len);
            if limit.is_some() {
                prop_assert_eq!(legend.points[0].legend.name.as_str(), "limit0");
            }
        }

        let frame = build_bar_line_render_frame(&tree, Viewport::new(640, 360), &FrameStyle::default())
            .expect("frame");
        prop_assert!(frame.validate().is_ok());
        let bars_layer = frame.layer(ChartLayerKind::Bars).expect("bars layer");
        prop_assert_eq!(bars_layer.rects.len(), bars.len());
        for rect in &bars_layer.rects {
            prop_assert!(rect.y >= -1e-9);
            prop_assert!(rect.y + rect.height <= frame.viewport.height as f64 + 1e-9);
        }
    }
}

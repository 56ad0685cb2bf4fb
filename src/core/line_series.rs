use crate::core::{ChartDataPoint, PixelRect, ValueScale, slot_centers};

/// Projects line points onto slot centers across `plot`.
///
/// An open path follows the data points only. A closed path appends the
/// trailing and leading baseline vertices so it encloses the area under the
/// line. Non-finite values collapse onto the baseline.
#[must_use]
pub fn project_line_path(
    points: &[ChartDataPoint],
    scale: ValueScale,
    plot: PixelRect,
    closed: bool,
) -> Vec<(f64, f64)> {
    if points.is_empty() {
        return Vec::new();
    }

    let baseline_y = scale.value_to_pixel(0.0, plot.y, plot.bottom());
    let centers = slot_centers(points.len(), plot);

    let mut path = Vec::with_capacity(points.len() + 2);
    for (x, point) in centers.iter().zip(points) {
        let y = if point.value.is_finite() {
            scale.value_to_pixel(point.value, plot.y, plot.bottom())
        } else {
            baseline_y
        };
        path.push((*x, y));
    }

    if closed {
        path.push((centers[centers.len() - 1], baseline_y));
        path.push((centers[0], baseline_y));
    }

    path
}

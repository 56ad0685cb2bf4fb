pub(super) fn estimate_label_text_width_px(text: &str, font_size_px: f64) -> f64 {
    // Keep this estimate deterministic and backend-independent.
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' => 0.34,
            '-' | '+' | '%' => 0.42,
            ' ' => 0.33,
            _ => 0.58,
        }
    });
    (units * font_size_px).max(font_size_px)
}

/// Picks `min(count, total)` indices spread evenly over `0..total`,
/// always keeping the first and last index when at least two are shown.
pub(super) fn evenly_spread_indices(total: usize, count: usize) -> Vec<usize> {
    let shown = count.min(total);
    match shown {
        0 => Vec::new(),
        1 => vec![0],
        _ if shown == total => (0..total).collect(),
        _ => {
            let last = (total - 1) as f64;
            let step = last / (shown - 1) as f64;
            (0..shown)
                .map(|slot| (slot as f64 * step).round() as usize)
                .collect()
        }
    }
}

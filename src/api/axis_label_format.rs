/// Formats a value-axis tick.
///
/// Precision is the number of decimals the tick step needs (at most six);
/// trailing zeros are trimmed.
pub(super) fn format_axis_value(value: f64, tick_step_abs: f64) -> String {
    if !value.is_finite() {
        return String::from("-");
    }
    let precision = precision_for_step(tick_step_abs);
    let mut text = format!("{value:.precision$}");
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    if text == "-0" {
        text = String::from("0");
    }
    text
}

fn precision_for_step(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    (0..6)
        .find(|precision| {
            let scaled = step * 10_f64.powi(*precision as i32);
            (scaled - scaled.round()).abs() <= 1e-9 * scaled.max(1.0)
        })
        .unwrap_or(6)
}

#[cfg(test)]
mod tests {
    use super::format_axis_value;

    #[test]
    fn tick_text_uses_step_precision() {
        assert_eq!(format_axis_value(40.0, 10.0), "40");
        assert_eq!(format_axis_value(30.0, 7.5), "30");
        assert_eq!(format_axis_value(7.5, 2.5), "7.5");
    }

    #[test]
    fn fractional_steps_keep_needed_decimals() {
        assert_eq!(format_axis_value(0.25, 0.25), "0.25");
        assert_eq!(format_axis_value(0.5, 0.25), "0.5");
    }

    #[test]
    fn negative_zero_and_non_finite_values() {
        assert_eq!(format_axis_value(-0.0, 0.5), "0");
        assert_eq!(format_axis_value(f64::NAN, 1.0), "-");
    }
}

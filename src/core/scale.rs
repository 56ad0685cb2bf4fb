use crate::error::{ChartError, ChartResult};

/// Linear mapping from the value domain onto a vertical pixel span.
///
/// Larger values map closer to the top edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    domain_min: f64,
    domain_max: f64,
}

impl ValueScale {
    pub fn new(domain_min: f64, domain_max: f64) -> ChartResult<Self> {
        if !domain_min.is_finite() || !domain_max.is_finite() || domain_min >= domain_max {
            return Err(ChartError::InvalidData(
                "value domain must be finite with min < max".to_owned(),
            ));
        }

        Ok(Self {
            domain_min,
            domain_max,
        })
    }

    /// Resolves a domain that covers `values` and the zero baseline.
    ///
    /// `max_override` replaces the data maximum when present and finite.
    /// Non-finite values are skipped; a degenerate domain widens to one unit.
    #[must_use]
    pub fn fit(values: impl IntoIterator<Item = f64>, max_override: Option<f64>) -> Self {
        let mut min = 0.0_f64;
        let mut max = f64::NEG_INFINITY;
        for value in values.into_iter().filter(|value| value.is_finite()) {
            min = min.min(value);
            max = max.max(value);
        }
        if let Some(limit) = max_override.filter(|limit| limit.is_finite()) {
            max = limit;
        }
        if !max.is_finite() || max <= min {
            max = min + 1.0;
        }

        Self {
            domain_min: min,
            domain_max: max,
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    /// Maps `value` into `[top, bottom]`, `domain_max` landing on `top`.
    #[must_use]
    pub fn value_to_pixel(self, value: f64, top: f64, bottom: f64) -> f64 {
        let span = self.domain_max - self.domain_min;
        let normalized = (value - self.domain_min) / span;
        bottom - normalized * (bottom - top)
    }

    /// Evenly spaced tick values from `domain_max` down to `domain_min`.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        match count {
            0 => Vec::new(),
            1 => vec![self.domain_max],
            _ => {
                let step = (self.domain_max - self.domain_min) / (count - 1) as f64;
                (0..count)
                    .map(|index| self.domain_max - step * index as f64)
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ValueScale;

    #[test]
    fn fit_includes_zero_baseline() {
        let scale = ValueScale::fit([10.0, 20.0, 30.0], None);
        assert_eq!(scale.domain(), (0.0, 30.0));
    }

    #[test]
    fn fit_honors_max_override() {
        let scale = ValueScale::fit([10.0, 20.0, 30.0], Some(100.0));
        assert_eq!(scale.domain(), (0.0, 100.0));
    }

    #[test]
    fn fit_widens_degenerate_domain() {
        let scale = ValueScale::fit(std::iter::empty(), None);
        assert_eq!(scale.domain(), (0.0, 1.0));
    }

    #[test]
    fn new_rejects_inverted_domain() {
        assert!(ValueScale::new(5.0, 1.0).is_err());
    }

    #[test]
    fn ticks_run_top_down() {
        let scale = ValueScale::new(0.0, 40.0).expect("scale");
        assert_eq!(scale.ticks(5), vec![40.0, 30.0, 20.0, 10.0, 0.0]);
    }
}

use std::any::{Any, type_name};
use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

/// Style value that can be placed into a [`StyleEnvironment`].
///
/// Each chart kind owns one style type; a chart only accepts an ambient style
/// of its own type and falls back to its default otherwise.
pub trait ChartStyle: Any + fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
}

/// Scoped ambient configuration handed to every render call.
///
/// Cloning is cheap. [`StyleEnvironment::scoped`] derives a child scope whose
/// chart style overrides this one; the parent stays untouched, so leaving
/// the child scope restores the outer style.
#[derive(Debug, Clone, Default)]
pub struct StyleEnvironment {
    chart_style: Option<Arc<dyn ChartStyle>>,
}

impl StyleEnvironment {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_chart_style(style: impl ChartStyle) -> Self {
        Self {
            chart_style: Some(Arc::new(style)),
        }
    }

    /// Child scope overriding the chart style.
    #[must_use]
    pub fn scoped(&self, style: impl ChartStyle) -> Self {
        let mut child = self.clone();
        child.chart_style = Some(Arc::new(style));
        child
    }

    /// Child scope with the chart style cleared.
    #[must_use]
    pub fn without_chart_style(&self) -> Self {
        let mut child = self.clone();
        child.chart_style = None;
        child
    }

    #[must_use]
    pub fn chart_style(&self) -> Option<&dyn ChartStyle> {
        self.chart_style.as_deref()
    }

    /// Resolves the ambient chart style as `T`.
    ///
    /// An absent style or a style of another type yields `T::default()`.
    #[must_use]
    pub fn resolve_style<T>(&self) -> T
    where
        T: ChartStyle + Clone + Default,
    {
        let Some(style) = self.chart_style.as_deref() else {
            trace!(expected = type_name::<T>(), "no ambient chart style, using defaults");
            return T::default();
        };

        match style.as_any().downcast_ref::<T>() {
            Some(resolved) => resolved.clone(),
            None => {
                debug!(
                    expected = type_name::<T>(),
                    found = ?style,
                    "ambient chart style has another type, using defaults"
                );
                T::default()
            }
        }
    }
}

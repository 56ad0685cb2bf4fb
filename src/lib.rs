//! bar-line-chart: declarative combined bar and line chart composition.
//!
//! A [`BarLineChart`] resolves its style from a [`StyleEnvironment`] on every
//! render and composes a [`api::BarLineChartTree`]. The tree can be laid out
//! into a backend-agnostic [`render::RenderFrame`] and handed to any
//! [`render::Renderer`].

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{
    BarLineChart, BarLineChartStyle, BarLineChartStyleOptions, DrawingMode, StyleEnvironment,
    StyleProfile,
};
pub use error::{ChartError, ChartResult};

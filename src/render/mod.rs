mod frame;
mod layer_stack;
mod null_renderer;
mod primitives;

pub use frame::{LayerPrimitives, RenderFrame};
pub use layer_stack::ChartLayerKind;
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, GradientStop, GradientStops, LinePrimitive, LineStrokeStyle, PathPaint, PathPrimitive,
    PixelGradient, RectPrimitive, TextHAlign, TextPrimitive,
};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from chart composition.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};

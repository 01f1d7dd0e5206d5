mod frame;
mod layer_stack;
mod null_renderer;
mod primitives;
mod svg_backend;

pub use frame::{LayerPrimitives, RenderFrame};
pub use layer_stack::{CanvasLayerKind, LayerStack};
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, FontWeight, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive,
};
pub use svg_backend::SvgRenderer;

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from scale and layout logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoRenderer};

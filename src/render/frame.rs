use crate::core::{DrawableRegion, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{CanvasLayerKind, LayerStack, LinePrimitive, RectPrimitive, TextPrimitive};

#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: CanvasLayerKind,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    #[must_use]
    pub fn new(kind: CanvasLayerKind) -> Self {
        Self {
            kind,
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.rects.is_empty() && self.texts.is_empty()
    }
}

/// Backend-agnostic chart surface for one draw pass.
///
/// The surface covers the whole container. Primitives are stored in
/// drawable-region coordinates; backends translate them by
/// `(origin_x, origin_y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub origin_x: f64,
    pub origin_y: f64,
    pub layers: Vec<LayerPrimitives>,
}

impl RenderFrame {
    /// Empty frame with one layer per canonical layer kind.
    #[must_use]
    pub fn new(viewport: Viewport, region: DrawableRegion) -> Self {
        Self {
            viewport,
            origin_x: region.origin_x,
            origin_y: region.origin_y,
            layers: LayerStack::canonical()
                .layers
                .into_iter()
                .map(LayerPrimitives::new)
                .collect(),
        }
    }

    pub fn push_line(&mut self, kind: CanvasLayerKind, line: LinePrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.lines.push(line);
        }
    }

    pub fn push_rect(&mut self, kind: CanvasLayerKind, rect: RectPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.rects.push(rect);
        }
    }

    pub fn push_text(&mut self, kind: CanvasLayerKind, text: TextPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.texts.push(text);
        }
    }

    #[must_use]
    pub fn layer(&self, kind: CanvasLayerKind) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.layers.iter().flat_map(|layer| layer.lines.iter())
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.layers.iter().flat_map(|layer| layer.rects.iter())
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.layers.iter().flat_map(|layer| layer.texts.iter())
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.origin_x.is_finite() || !self.origin_y.is_finite() {
            return Err(ChartError::InvalidData(
                "frame origin must be finite".to_owned(),
            ));
        }

        for line in self.lines() {
            line.validate()?;
        }
        for rect in self.rects() {
            rect.validate()?;
        }
        for text in self.texts() {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(LayerPrimitives::is_empty)
    }

    fn layer_mut(&mut self, kind: CanvasLayerKind) -> Option<&mut LayerPrimitives> {
        self.layers.iter_mut().find(|layer| layer.kind == kind)
    }
}

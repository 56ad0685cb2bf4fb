use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{ChartLayerKind, LinePrimitive, PathPrimitive, RectPrimitive, TextPrimitive};

/// Primitives collected for one drawing layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: ChartLayerKind,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub paths: Vec<PathPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    #[must_use]
    pub fn empty(kind: ChartLayerKind) -> Self {
        Self {
            kind,
            lines: Vec::new(),
            rects: Vec::new(),
            paths: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.rects.is_empty()
            && self.paths.is_empty()
            && self.texts.is_empty()
    }
}

/// Backend-agnostic scene for one chart draw pass.
///
/// Layers are kept in back-to-front order; backends draw them sequentially.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub layers: Vec<LayerPrimitives>,
}

impl RenderFrame {
    /// Creates a frame with one empty layer per canonical layer kind.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            layers: ChartLayerKind::CANONICAL_ORDER
                .into_iter()
                .map(LayerPrimitives::empty)
                .collect(),
        }
    }

    pub fn push_line(&mut self, kind: ChartLayerKind, line: LinePrimitive) {
        self.layer_mut(kind).lines.push(line);
    }

    pub fn push_rect(&mut self, kind: ChartLayerKind, rect: RectPrimitive) {
        self.layer_mut(kind).rects.push(rect);
    }

    pub fn push_path(&mut self, kind: ChartLayerKind, path: PathPrimitive) {
        self.layer_mut(kind).paths.push(path);
    }

    pub fn push_text(&mut self, kind: ChartLayerKind, text: TextPrimitive) {
        self.layer_mut(kind).texts.push(text);
    }

    #[must_use]
    pub fn layer(&self, kind: ChartLayerKind) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.lines.len()).sum()
    }

    #[must_use]
    pub fn rect_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.rects.len()).sum()
    }

    #[must_use]
    pub fn path_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.paths.len()).sum()
    }

    #[must_use]
    pub fn text_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.texts.len()).sum()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for layer in &self.layers {
            for line in &layer.lines {
                line.validate()?;
            }
            for rect in &layer.rects {
                rect.validate()?;
            }
            for path in &layer.paths {
                path.validate()?;
            }
            for text in &layer.texts {
                text.validate()?;
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(LayerPrimitives::is_empty)
    }

    fn layer_mut(&mut self, kind: ChartLayerKind) -> &mut LayerPrimitives {
        if let Some(index) = self.layers.iter().position(|layer| layer.kind == kind) {
            return &mut self.layers[index];
        }
        self.layers.push(LayerPrimitives::empty(kind));
        let last = self.layers.len() - 1;
        &mut self.layers[last]
    }
}

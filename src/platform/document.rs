use indexmap::IndexMap;

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::RenderFrame;

/// Host element that can hold at most one chart surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    viewport: Viewport,
    surface: Option<RenderFrame>,
}

impl Container {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            surface: None,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    #[must_use]
    pub fn surface(&self) -> Option<&RenderFrame> {
        self.surface.as_ref()
    }

    #[must_use]
    pub fn surface_count(&self) -> usize {
        usize::from(self.surface.is_some())
    }

    /// Replaces the mounted surface, returning the discarded one.
    pub fn mount(&mut self, frame: RenderFrame) -> Option<RenderFrame> {
        self.surface.replace(frame)
    }
}

/// Headless page: containers addressed by selector, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    containers: IndexMap<String, Container>,
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_container(mut self, selector: impl Into<String>, viewport: Viewport) -> Self {
        self.insert_container(selector, viewport);
        self
    }

    /// Adds an empty container, replacing any container with the same
    /// selector.
    pub fn insert_container(&mut self, selector: impl Into<String>, viewport: Viewport) {
        self.containers
            .insert(selector.into(), Container::new(viewport));
    }

    pub fn container(&self, selector: &str) -> ChartResult<&Container> {
        self.containers
            .get(selector)
            .ok_or_else(|| ChartError::ContainerNotFound {
                selector: selector.to_owned(),
            })
    }

    pub fn container_mut(&mut self, selector: &str) -> ChartResult<&mut Container> {
        self.containers
            .get_mut(selector)
            .ok_or_else(|| ChartError::ContainerNotFound {
                selector: selector.to_owned(),
            })
    }

    pub fn resize_container(&mut self, selector: &str, viewport: Viewport) -> ChartResult<()> {
        self.container_mut(selector)?.set_viewport(viewport);
        Ok(())
    }
}

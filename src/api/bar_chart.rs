use tracing::debug;

use crate::core::{DataPoint, Viewport};
use crate::error::ChartResult;
use crate::platform::Document;
use crate::render::{RenderFrame, Renderer};

use super::bar_frame_builder::build_bar_chart_frame;
use super::{BarChartConfig, BarChartLayout, ChartSnapshot};

/// Bar chart renderer bound to one backend.
///
/// Scales, axes and primitives are rebuilt from scratch on every call; the
/// only state kept between renders is the backend and the configuration.
pub struct BarChart<R: Renderer> {
    renderer: R,
    config: BarChartConfig,
}

impl<R: Renderer> BarChart<R> {
    pub fn new(renderer: R, config: BarChartConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self { renderer, config })
    }

    #[must_use]
    pub fn with_default_config(renderer: R) -> Self {
        Self {
            renderer,
            config: BarChartConfig::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &BarChartConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: BarChartConfig) -> ChartResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub fn layout(&self, viewport: Viewport, data: &[DataPoint]) -> ChartResult<BarChartLayout> {
        BarChartLayout::compute(viewport, data, &self.config)
    }

    pub fn build_frame(&self, viewport: Viewport, data: &[DataPoint]) -> ChartResult<RenderFrame> {
        let layout = self.layout(viewport, data)?;
        Ok(build_bar_chart_frame(&layout, &self.config))
    }

    pub fn snapshot(&self, viewport: Viewport, data: &[DataPoint]) -> ChartResult<ChartSnapshot> {
        Ok(ChartSnapshot::from_layout(&self.layout(viewport, data)?))
    }

    /// Draws `data` into the container named by `selector`, replacing any
    /// surface mounted there before.
    ///
    /// The container is left untouched when layout or the backend fails.
    pub fn render(
        &mut self,
        document: &mut Document,
        selector: &str,
        data: &[DataPoint],
    ) -> ChartResult<()> {
        let viewport = document.container(selector)?.viewport();
        let frame = self.build_frame(viewport, data)?;
        self.renderer.render(&frame)?;

        let container = document.container_mut(selector)?;
        let replaced = container.mount(frame);
        debug!(
            selector,
            width = viewport.width,
            height = viewport.height,
            bars = data.len(),
            replaced_previous = replaced.is_some(),
            "rendered bar chart"
        );
        Ok(())
    }
}

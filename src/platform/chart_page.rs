use std::sync::Arc;

use tracing::debug;

use crate::api::BarChart;
use crate::core::{DataPoint, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{Document, ResizeDispatch, ResizeListener, SubscriptionId, Window};

/// Resize listener that redraws one chart into one container.
pub struct ChartMount<R: Renderer> {
    id: String,
    chart: BarChart<R>,
    selector: String,
    data: Arc<[DataPoint]>,
}

impl<R: Renderer> ChartMount<R> {
    #[must_use]
    pub fn new(chart: BarChart<R>, selector: impl Into<String>, data: Arc<[DataPoint]>) -> Self {
        let selector = selector.into();
        Self {
            id: format!("chart:{selector}"),
            chart,
            selector,
            data,
        }
    }

    #[must_use]
    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn render(&mut self, document: &mut Document) -> ChartResult<()> {
        self.chart.render(document, &self.selector, &self.data)
    }
}

impl<R: Renderer> ResizeListener for ChartMount<R> {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_resize(&mut self, document: &mut Document) -> ChartResult<()> {
        self.render(document)
    }
}

/// Page lifecycle for one chart: initial render on load, redraw on every
/// resize, unsubscribe on unload.
pub struct ChartPage {
    window: Window,
    selector: String,
    subscription: SubscriptionId,
}

impl ChartPage {
    /// Renders once, then attaches the resize subscription.
    ///
    /// Nothing is subscribed when the initial render fails, and the container
    /// is not touched when the selector already has a chart subscribed.
    pub fn load<R: Renderer + 'static>(
        mut window: Window,
        chart: BarChart<R>,
        selector: impl Into<String>,
        data: impl Into<Arc<[DataPoint]>>,
    ) -> ChartResult<Self> {
        let mut mount = ChartMount::new(chart, selector, data.into());
        if window.has_resize_listener(mount.id()) {
            return Err(ChartError::InvalidData(format!(
                "resize listener with id `{}` is already registered",
                mount.id()
            )));
        }
        mount.render(window.document_mut())?;

        let selector = mount.selector().to_owned();
        let subscription = window.add_resize_listener(Box::new(mount))?;
        debug!(selector = %selector, subscription = subscription.get(), "chart page loaded");
        Ok(Self {
            window,
            selector,
            subscription,
        })
    }

    #[must_use]
    pub fn window(&self) -> &Window {
        &self.window
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        self.window.document()
    }

    #[must_use]
    pub fn selector(&self) -> &str {
        &self.selector
    }

    #[must_use]
    pub fn subscription(&self) -> SubscriptionId {
        self.subscription
    }

    /// Resizes the chart container and redraws through the subscription.
    pub fn resize(&mut self, viewport: Viewport) -> ChartResult<ResizeDispatch> {
        self.window.resize_container(&self.selector, viewport)
    }

    /// Detaches the resize subscription and hands the window back.
    #[must_use]
    pub fn unload(mut self) -> Window {
        let removed = self.window.remove_resize_listener(self.subscription);
        debug!(selector = %self.selector, removed, "chart page unloaded");
        self.window
    }
}

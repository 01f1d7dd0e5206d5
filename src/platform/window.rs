use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

use super::Document;

/// Handle returned by `Window::add_resize_listener`. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Callback invoked synchronously for every window resize.
pub trait ResizeListener {
    fn id(&self) -> &str;
    fn on_resize(&mut self, document: &mut Document) -> ChartResult<()>;
}

/// Outcome of one resize dispatch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResizeDispatch {
    pub notified: usize,
    pub failed: Vec<String>,
}

impl ResizeDispatch {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Headless window: owns the page document and the resize listeners.
///
/// Dispatch is synchronous and unthrottled: every resize runs every listener
/// once, in registration order, before returning.
#[derive(Default)]
pub struct Window {
    document: Document,
    listeners: IndexMap<SubscriptionId, Box<dyn ResizeListener>>,
    next_subscription: u64,
}

impl Window {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self {
            document,
            listeners: IndexMap::new(),
            next_subscription: 0,
        }
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    #[must_use]
    pub fn into_document(self) -> Document {
        self.document
    }

    /// Registers a listener with a unique identifier.
    pub fn add_resize_listener(
        &mut self,
        listener: Box<dyn ResizeListener>,
    ) -> ChartResult<SubscriptionId> {
        let listener_id = listener.id().to_owned();
        if listener_id.is_empty() {
            return Err(ChartError::InvalidData(
                "resize listener id must not be empty".to_owned(),
            ));
        }
        if self.has_resize_listener(&listener_id) {
            return Err(ChartError::InvalidData(format!(
                "resize listener with id `{listener_id}` is already registered"
            )));
        }

        let subscription = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.insert(subscription, listener);
        Ok(subscription)
    }

    /// Removes a listener. Returns `true` when it was registered.
    pub fn remove_resize_listener(&mut self, subscription: SubscriptionId) -> bool {
        self.listeners.shift_remove(&subscription).is_some()
    }

    #[must_use]
    pub fn resize_listener_count(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn has_resize_listener(&self, listener_id: &str) -> bool {
        self.listeners
            .values()
            .any(|listener| listener.id() == listener_id)
    }

    /// Applies a new container size, then notifies every resize listener.
    pub fn resize_container(
        &mut self,
        selector: &str,
        viewport: Viewport,
    ) -> ChartResult<ResizeDispatch> {
        self.document.resize_container(selector, viewport)?;
        Ok(self.dispatch_resize())
    }

    /// Notifies every resize listener. Failures are logged and reported but
    /// do not stop the remaining listeners.
    pub fn dispatch_resize(&mut self) -> ResizeDispatch {
        let mut report = ResizeDispatch::default();
        for listener in self.listeners.values_mut() {
            trace!(listener = listener.id(), "dispatch resize");
            report.notified += 1;
            if let Err(err) = listener.on_resize(&mut self.document) {
                warn!(
                    listener = listener.id(),
                    error = %err,
                    "resize listener failed"
                );
                report.failed.push(listener.id().to_owned());
            }
        }
        report
    }
}

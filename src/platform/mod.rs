//! Headless stand-ins for the host page: a document of sized containers and
//! a window that broadcasts resize events.

mod chart_page;
mod document;
mod window;

pub use chart_page::{ChartMount, ChartPage};
pub use document::{Container, Document};
pub use window::{ResizeDispatch, ResizeListener, SubscriptionId, Window};

//! Collapsible panel groups ("accordions") over a [`foldom::Document`].
//!
//! A [`PanelGroup`] finds panel structures in a document, wires ARIA
//! attributes and activation listeners to them, and animates their
//! content height when they open and close.

pub mod a11y;
pub mod animator;
pub mod binder;
pub mod config;
pub mod group;
pub mod panel;
pub mod registry;

pub use animator::{Phase, Step};
pub use binder::EventResult;
pub use config::{ConfigError, GroupConfig, GroupOptions};
pub use group::PanelGroup;
pub use panel::{Panel, PanelId, PanelState};
pub use registry::{Registration, SkipReason, Skipped};

pub mod prelude {
    pub use crate::binder::EventResult;
    pub use crate::config::{GroupConfig, GroupOptions};
    pub use crate::group::PanelGroup;
    pub use crate::panel::{PanelId, PanelState};

    pub use foldom::{Document, Element, Event, Key, MaxHeight};
}

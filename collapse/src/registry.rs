//! Panel discovery.

use foldom::{Document, NodeId, Selector};

use crate::panel::{Panel, PanelState};

/// Class of the header region inside a container.
pub const HEADER_CLASS: &str = "collapse-header";
/// Class of the content region inside a container.
pub const CONTENT_CLASS: &str = "collapse-content";
/// Class of the optional indicator region inside a container.
pub const INDICATOR_CLASS: &str = "collapse-arrow";

/// Why a matched container produced no panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingHeader,
    MissingContent,
}

/// A container that matched the selector but was not registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skipped {
    pub container: NodeId,
    pub reason: SkipReason,
}

/// Outcome of scanning a document for panels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registration {
    pub matched: usize,
    pub skipped: Vec<Skipped>,
}

impl Registration {
    /// Number of panels actually bound.
    pub fn bound(&self) -> usize {
        self.matched - self.skipped.len()
    }
}

/// Scan `doc`, root element included, for containers matching `selector`
/// and build one panel per complete structure, in document order.
///
/// Indices are sequential over accepted containers, so skipped containers
/// leave no gaps in generated ids.
pub fn discover(doc: &Document, selector: &Selector, id_prefix: &str) -> (Vec<Panel>, Registration) {
    let header = Selector::class(HEADER_CLASS);
    let content = Selector::class(CONTENT_CLASS);
    let indicator = Selector::class(INDICATOR_CLASS);

    let root = doc.root();
    let containers: Vec<NodeId> = std::iter::once(root)
        .filter(|&id| doc.matches(id, selector))
        .chain(doc.query_selector_all(root, selector))
        .collect();
    let mut registration = Registration {
        matched: containers.len(),
        skipped: Vec::new(),
    };
    let mut panels = Vec::new();

    for container in containers {
        let Some(header_node) = doc.query_selector(container, &header) else {
            log::debug!("skipping container {container}: no .{HEADER_CLASS}");
            registration.skipped.push(Skipped {
                container,
                reason: SkipReason::MissingHeader,
            });
            continue;
        };
        let Some(content_node) = doc.query_selector(container, &content) else {
            log::debug!("skipping container {container}: no .{CONTENT_CLASS}");
            registration.skipped.push(Skipped {
                container,
                reason: SkipReason::MissingContent,
            });
            continue;
        };

        let index = panels.len();
        panels.push(Panel {
            index,
            id: format!("{id_prefix}-{index}"),
            container,
            header: header_node,
            content: content_node,
            indicator: doc.query_selector(container, &indicator),
            is_open: false,
            state: PanelState::Closed,
            generation: 0,
        });
    }

    (panels, registration)
}

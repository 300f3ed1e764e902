use std::fmt;

use foldom::NodeId;

/// Handle to a panel within its group: the panel's discovery index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelId(pub(crate) usize);

impl PanelId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panel {}", self.0)
    }
}

/// Lifecycle of a panel.
///
/// `Opening` and `Closing` last from the call that starts the animation
/// until its final step runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl PanelState {
    /// True while the panel is open or heading there.
    pub fn is_opening_or_open(self) -> bool {
        matches!(self, PanelState::Opening | PanelState::Open)
    }
}

/// One collapsible unit: a header, a content region and an optional
/// indicator inside a container.
#[derive(Debug, Clone)]
pub struct Panel {
    pub(crate) index: usize,
    pub(crate) id: String,
    pub(crate) container: NodeId,
    pub(crate) header: NodeId,
    pub(crate) content: NodeId,
    pub(crate) indicator: Option<NodeId>,
    pub(crate) is_open: bool,
    pub(crate) state: PanelState,
    /// Bumped whenever a transition starts; steps carrying an older value
    /// are dropped.
    pub(crate) generation: u64,
}

impl Panel {
    pub fn handle(&self) -> PanelId {
        PanelId(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn container(&self) -> NodeId {
        self.container
    }

    pub fn header(&self) -> NodeId {
        self.header
    }

    pub fn content(&self) -> NodeId {
        self.content
    }

    pub fn indicator(&self) -> Option<NodeId> {
        self.indicator
    }

    /// The open flag. Set when an opening starts, cleared when a closing
    /// settles.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Nodes that carry the active class.
    pub(crate) fn marked_nodes(&self) -> impl Iterator<Item = NodeId> {
        [Some(self.container), Some(self.header), self.indicator, Some(self.content)]
            .into_iter()
            .flatten()
    }
}

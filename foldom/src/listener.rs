//! Per-node event listener registrations.

use crate::document::NodeId;
use crate::event::EventType;

/// Handle returned when a listener is attached. Used to detach it and to
/// route dispatched events back to their owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

#[derive(Debug, Clone)]
struct Listener {
    id: ListenerId,
    node: NodeId,
    kind: EventType,
}

#[derive(Debug, Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<Listener>,
}

impl Listeners {
    pub fn add(&mut self, node: NodeId, kind: EventType) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Listener { id, node, kind });
        id
    }

    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|listener| listener.id != id);
        self.entries.len() != before
    }

    pub fn count(&self, node: NodeId) -> usize {
        self.entries.iter().filter(|l| l.node == node).count()
    }

    pub fn total(&self) -> usize {
        self.entries.len()
    }

    /// Listeners on `node` for `kind`, in attachment order.
    pub fn on(&self, node: NodeId, kind: EventType) -> impl Iterator<Item = ListenerId> + '_ {
        self.entries
            .iter()
            .filter(move |l| l.node == node && l.kind == kind)
            .map(|l| l.id)
    }
}

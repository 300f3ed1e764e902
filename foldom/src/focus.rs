use crate::document::{Document, NodeId};

/// Tracks which node is currently focused.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<NodeId>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused node.
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Programmatically focus a node.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: NodeId) -> bool {
        if self.focused == Some(id) {
            return false;
        }
        self.focused = Some(id);
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Focus the next focusable node (Tab navigation).
    /// Returns the newly focused node if focus changed.
    pub fn focus_next(&mut self, doc: &Document) -> Option<NodeId> {
        let focusable = collect_focusable(doc);
        if focusable.is_empty() {
            return None;
        }

        let new_focus = match self.focused {
            None => focusable[0],
            Some(current) => match focusable.iter().position(|&id| id == current) {
                Some(i) => focusable[(i + 1) % focusable.len()],
                None => focusable[0],
            },
        };

        self.focus(new_focus).then_some(new_focus)
    }

    /// Focus the previous focusable node (Shift+Tab navigation).
    /// Returns the newly focused node if focus changed.
    pub fn focus_prev(&mut self, doc: &Document) -> Option<NodeId> {
        let focusable = collect_focusable(doc);
        let last = *focusable.last()?;

        let new_focus = match self.focused {
            None => last,
            Some(current) => match focusable.iter().position(|&id| id == current) {
                Some(0) | None => last,
                Some(i) => focusable[i - 1],
            },
        };

        self.focus(new_focus).then_some(new_focus)
    }
}

/// Nodes reachable by Tab, in document order: those with a non-negative
/// `tabindex`.
pub fn collect_focusable(doc: &Document) -> Vec<NodeId> {
    std::iter::once(doc.root())
        .chain(doc.descendants(doc.root()))
        .filter(|&id| {
            doc.attribute(id, "tabindex")
                .and_then(|value| value.trim().parse::<i32>().ok())
                .is_some_and(|index| index >= 0)
        })
        .collect()
}

//! Arena document built from an [`Element`] tree.
//!
//! The document is the mutable surface a widget works against: attributes,
//! class lists, the inline `max-height` style, natural heights and event
//! listeners. Nodes are addressed by [`NodeId`]; an id that does not belong
//! to the document reads as empty and ignores writes.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use crate::element::{Content, Element};
use crate::event::{Event, EventType};
use crate::listener::{ListenerId, Listeners};
use crate::selector::Selector;
use crate::transitions::{ActiveTransition, TransitionConfig};
use crate::types::MaxHeight;

/// Index of a node in its document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct Node {
    tag: String,
    classes: Vec<String>,
    attributes: HashMap<String, String>,
    text: Option<String>,
    height: u16,
    max_height: MaxHeight,
    transition: Option<TransitionConfig>,
    active_transition: Option<ActiveTransition>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug)]
pub struct Document {
    nodes: Vec<Node>,
    listeners: Listeners,
}

impl Document {
    /// Mount an element tree. The root element becomes [`Document::root`].
    pub fn new(root: Element) -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            listeners: Listeners::default(),
        };
        doc.mount(root, None);
        doc
    }

    fn mount(&mut self, element: Element, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let mut attributes = element.attributes;
        if let Some(element_id) = element.id {
            attributes.insert("id".to_string(), element_id);
        }

        let (text, children) = match element.content {
            Content::None => (None, Vec::new()),
            Content::Text(text) => (Some(text), Vec::new()),
            Content::Children(children) => (None, children),
        };

        self.nodes.push(Node {
            tag: element.tag,
            classes: element.classes,
            attributes,
            text,
            height: element.height,
            max_height: element.max_height,
            transition: element.transition,
            active_transition: None,
            parent,
            children: Vec::new(),
        });

        for child in children {
            let child_id = self.mount(child, Some(id));
            self.nodes[id.0].children.push(child_id);
        }

        id
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    // Tree

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id)?.parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(|n| n.tag.as_str())
    }

    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.node(id)?.text.as_deref()
    }

    /// All descendants of `id` in document (pre-)order, excluding `id`.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev());
        }
        out
    }

    /// True if `node` is `ancestor` or one of its descendants.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    // Selectors

    pub fn matches(&self, id: NodeId, selector: &Selector) -> bool {
        if !self.matches_compound(id, selector) {
            return false;
        }

        // Right to left: each ancestor compound needs a match further up
        let mut current = self.parent(id);
        for ancestor in selector.ancestors.iter().rev() {
            loop {
                let Some(node) = current else {
                    return false;
                };
                current = self.parent(node);
                if self.matches_compound(node, ancestor) {
                    break;
                }
            }
        }
        true
    }

    fn matches_compound(&self, id: NodeId, selector: &Selector) -> bool {
        let Some(node) = self.node(id) else {
            return false;
        };
        selector.matches_parts(
            &node.tag,
            node.attributes.get("id").map(String::as_str),
            &node.classes,
        )
    }

    /// Descendants of `scope` matching `selector`, in document order.
    pub fn query_selector_all(&self, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|&id| self.matches(id, selector))
            .collect()
    }

    /// First descendant of `scope` matching `selector`.
    pub fn query_selector(&self, scope: NodeId, selector: &Selector) -> Option<NodeId> {
        self.descendants(scope)
            .into_iter()
            .find(|&id| self.matches(id, selector))
    }

    pub fn get_element_by_id(&self, element_id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.attributes.get("id").map(String::as_str) == Some(element_id))
            .map(NodeId)
    }

    // Attributes

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.node(id)?.attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: impl Into<String>) {
        if let Some(node) = self.node_mut(id) {
            node.attributes.insert(name.to_string(), value.into());
        }
    }

    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> bool {
        self.node_mut(id)
            .map(|node| node.attributes.remove(name).is_some())
            .unwrap_or(false)
    }

    // Class list

    pub fn classes(&self, id: NodeId) -> &[String] {
        self.node(id).map(|n| n.classes.as_slice()).unwrap_or(&[])
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.classes(id).iter().any(|c| c == class)
    }

    /// Add a class. Returns true if the class list changed.
    pub fn add_class(&mut self, id: NodeId, class: &str) -> bool {
        match self.node_mut(id) {
            Some(node) if !node.classes.iter().any(|c| c == class) => {
                node.classes.push(class.to_string());
                true
            }
            _ => false,
        }
    }

    /// Remove a class. Returns true if the class list changed.
    pub fn remove_class(&mut self, id: NodeId, class: &str) -> bool {
        let Some(node) = self.node_mut(id) else {
            return false;
        };
        let before = node.classes.len();
        node.classes.retain(|c| c != class);
        node.classes.len() != before
    }

    // Style and geometry

    pub fn max_height(&self, id: NodeId) -> MaxHeight {
        self.node(id).map(|n| n.max_height).unwrap_or_default()
    }

    /// Write the inline `max-height` at time `now`.
    ///
    /// With a transition configured, a change between two pixel values
    /// animates from the value currently shown. Any write involving
    /// `none` or an unset value jumps.
    pub fn set_max_height(&mut self, id: NodeId, value: MaxHeight, now: Duration) {
        let Some(node) = self.node_mut(id) else {
            return;
        };

        let previous = node.max_height;
        node.max_height = value;

        let (Some(config), Some(from), Some(to)) = (node.transition, previous.px(), value.px())
        else {
            node.active_transition = None;
            return;
        };

        let from = match node.active_transition {
            Some(running) if !running.is_finished(now) => running.value_at(now),
            _ => from,
        };

        node.active_transition = (from != to).then_some(ActiveTransition {
            from,
            to,
            start: now,
            duration: config.duration,
            easing: config.easing,
        });
    }

    /// Own content height, excluding children.
    pub fn height(&self, id: NodeId) -> u16 {
        self.node(id).map(|n| n.height).unwrap_or(0)
    }

    /// Change the own content height of a node (content reflow).
    pub fn set_height(&mut self, id: NodeId, height: u16) {
        if let Some(node) = self.node_mut(id) {
            node.height = height;
        }
    }

    /// Natural height of a node's content, ignoring its own height limit.
    pub fn scroll_height(&self, id: NodeId) -> u32 {
        let Some(node) = self.node(id) else {
            return 0;
        };
        let own = u32::from(node.height);
        node.children
            .iter()
            .map(|&child| self.visible_height_unanimated(child))
            .fold(own, u32::saturating_add)
    }

    fn visible_height_unanimated(&self, id: NodeId) -> u32 {
        self.max_height(id).clamp(self.scroll_height(id))
    }

    /// Height the node renders at, at time `now`.
    pub fn visible_height(&self, id: NodeId, now: Duration) -> u32 {
        let natural = self.scroll_height(id);
        match self.node(id).and_then(|n| n.active_transition) {
            Some(running) if !running.is_finished(now) => natural.min(running.value_at(now)),
            _ => self.max_height(id).clamp(natural),
        }
    }

    pub fn is_transitioning(&self, id: NodeId, now: Duration) -> bool {
        self.node(id)
            .and_then(|n| n.active_transition)
            .is_some_and(|running| !running.is_finished(now))
    }

    // Listeners

    pub fn add_listener(&mut self, id: NodeId, kind: EventType) -> ListenerId {
        let listener = self.listeners.add(id, kind);
        log::trace!("listener {listener:?} attached to {id} for {kind:?}");
        listener
    }

    pub fn remove_listener(&mut self, listener: ListenerId) -> bool {
        self.listeners.remove(listener)
    }

    pub fn listener_count(&self, id: NodeId) -> usize {
        self.listeners.count(id)
    }

    pub fn total_listeners(&self) -> usize {
        self.listeners.total()
    }

    /// Listeners reached by `event`, from its target up through the
    /// target's ancestors.
    pub fn dispatch(&self, event: &Event) -> Vec<ListenerId> {
        let kind = event.event_type();
        let mut reached = Vec::new();
        let mut current = event.target().filter(|&id| self.node(id).is_some());
        while let Some(id) = current {
            reached.extend(self.listeners.on(id, kind));
            current = self.parent(id);
        }
        reached
    }
}

use crate::document::NodeId;

/// Input events with node targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press event, targeted at the focused node
    Key {
        target: Option<NodeId>,
        key: Key,
        modifiers: Modifiers,
    },
    /// Pointer activation
    Click {
        target: Option<NodeId>,
        button: MouseButton,
    },
}

impl Event {
    pub fn key(target: NodeId, key: Key) -> Self {
        Event::Key {
            target: Some(target),
            key,
            modifiers: Modifiers::new(),
        }
    }

    pub fn click(target: NodeId) -> Self {
        Event::Click {
            target: Some(target),
            button: MouseButton::Left,
        }
    }

    pub fn target(&self) -> Option<NodeId> {
        match self {
            Event::Key { target, .. } | Event::Click { target, .. } => *target,
        }
    }

    pub fn event_type(&self) -> EventType {
        match self {
            Event::Key { .. } => EventType::KeyDown,
            Event::Click { .. } => EventType::Click,
        }
    }
}

/// Event kinds a listener can subscribe to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Click,
    KeyDown,
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

//! Activation handlers on panel headers.

use foldom::{Document, Event, EventType, Key, ListenerId, MouseButton};

use crate::panel::Panel;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored; the host runs its default action.
    Ignored,
    /// Event toggled a panel; the host must suppress its default action
    /// (e.g. page scroll on Space).
    Consumed,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// Listeners attached to one header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub click: ListenerId,
    pub key: ListenerId,
}

/// Attach the click and keydown listeners to the panel's header.
pub fn bind(doc: &mut Document, panel: &Panel) -> Binding {
    Binding {
        click: doc.add_listener(panel.header, EventType::Click),
        key: doc.add_listener(panel.header, EventType::KeyDown),
    }
}

pub fn unbind(doc: &mut Document, binding: Binding) {
    doc.remove_listener(binding.click);
    doc.remove_listener(binding.key);
}

/// Whether `event` activates a header: a primary click, or Enter/Space
/// whatever modifiers are held.
pub fn is_activation(event: &Event) -> bool {
    match event {
        Event::Click { button, .. } => *button == MouseButton::Left,
        Event::Key { key, .. } => matches!(key, Key::Enter | Key::Char(' ')),
    }
}

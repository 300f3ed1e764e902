pub mod document;
pub mod element;
pub mod event;
pub mod focus;
pub mod listener;
pub mod scheduler;
pub mod selector;
pub mod transitions;
pub mod types;

pub use document::{Document, NodeId};
pub use element::Element;
pub use event::{Event, EventType, Key, Modifiers, MouseButton};
pub use focus::{collect_focusable, FocusState};
pub use listener::ListenerId;
pub use scheduler::{Scheduler, VirtualScheduler};
pub use selector::{Selector, SelectorError};
pub use transitions::{Easing, TransitionConfig};
pub use types::*;

//! Group configuration.
//!
//! Callers describe a group with [`GroupOptions`], either in code with the
//! builder methods or deserialized from camelCase keys, then validate it
//! into an immutable [`GroupConfig`].

use std::time::Duration;

use foldom::{Selector, SelectorError};
use serde::Deserialize;
use thiserror::Error;

/// Default selector of panel containers.
pub const DEFAULT_SELECTOR: &str = ".collapse-container";
/// Default class marking open panels.
pub const DEFAULT_ACTIVE_CLASS: &str = "active";
/// Default animation duration.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);
/// Default prefix for generated ids.
pub const DEFAULT_ID_PREFIX: &str = "collapse";
/// Default delay before re-running an interrupted opening.
pub const DEFAULT_RESUME_DELAY: Duration = Duration::from_millis(10);

/// Errors raised while validating [`GroupOptions`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid panel selector: {0}")]
    InvalidSelector(#[from] SelectorError),

    #[error("active class must not be empty")]
    EmptyActiveClass,

    #[error("active class '{0}' must be a single class name")]
    InvalidActiveClass(String),

    #[error("id prefix must not be empty")]
    EmptyIdPrefix,

    #[error("id prefix '{0}' must not contain whitespace")]
    InvalidIdPrefix(String),
}

/// Unvalidated group options. Every field is optional in serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct GroupOptions {
    /// Container selector: compound parts (`tag`, `.class`, `#id`) joined
    /// by descendant combinators. Other combinators are rejected.
    pub selector: String,
    pub active_class: String,
    /// Animation duration in milliseconds.
    pub duration: u64,
    pub multiple: bool,
    pub init_open: bool,
    pub id_prefix: String,
    /// Resume delay in milliseconds.
    pub resume_delay: u64,
}

impl Default for GroupOptions {
    fn default() -> Self {
        Self {
            selector: DEFAULT_SELECTOR.to_string(),
            active_class: DEFAULT_ACTIVE_CLASS.to_string(),
            duration: DEFAULT_DURATION.as_millis() as u64,
            multiple: false,
            init_open: false,
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            resume_delay: DEFAULT_RESUME_DELAY.as_millis() as u64,
        }
    }
}

impl GroupOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = selector.into();
        self
    }

    pub fn active_class(mut self, class: impl Into<String>) -> Self {
        self.active_class = class.into();
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Allow several panels to be open at once.
    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    pub fn init_open(mut self, init_open: bool) -> Self {
        self.init_open = init_open;
        self
    }

    pub fn id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    pub fn resume_delay(mut self, delay: Duration) -> Self {
        self.resume_delay = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Validate into an immutable configuration.
    pub fn build(self) -> Result<GroupConfig, ConfigError> {
        let selector = Selector::parse(&self.selector)?;

        let active_class = self.active_class.trim();
        if active_class.is_empty() {
            return Err(ConfigError::EmptyActiveClass);
        }
        if active_class.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidActiveClass(self.active_class));
        }

        let id_prefix = self.id_prefix.trim();
        if id_prefix.is_empty() {
            return Err(ConfigError::EmptyIdPrefix);
        }
        if id_prefix.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidIdPrefix(self.id_prefix));
        }

        Ok(GroupConfig {
            selector,
            active_class: active_class.to_string(),
            duration: Duration::from_millis(self.duration),
            multiple: self.multiple,
            init_open: self.init_open,
            id_prefix: id_prefix.to_string(),
            resume_delay: Duration::from_millis(self.resume_delay),
        })
    }
}

/// Validated, immutable configuration of a panel group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupConfig {
    selector: Selector,
    active_class: String,
    duration: Duration,
    multiple: bool,
    init_open: bool,
    id_prefix: String,
    resume_delay: Duration,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            selector: Selector::class("collapse-container"),
            active_class: DEFAULT_ACTIVE_CLASS.to_string(),
            duration: DEFAULT_DURATION,
            multiple: false,
            init_open: false,
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            resume_delay: DEFAULT_RESUME_DELAY,
        }
    }
}

impl TryFrom<GroupOptions> for GroupConfig {
    type Error = ConfigError;

    fn try_from(options: GroupOptions) -> Result<Self, Self::Error> {
        options.build()
    }
}

impl GroupConfig {
    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn active_class(&self) -> &str {
        &self.active_class
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn multiple(&self) -> bool {
        self.multiple
    }

    pub fn init_open(&self) -> bool {
        self.init_open
    }

    pub fn id_prefix(&self) -> &str {
        &self.id_prefix
    }

    pub fn resume_delay(&self) -> Duration {
        self.resume_delay
    }
}

use std::collections::HashMap;

use super::Content;
use crate::transitions::TransitionConfig;
use crate::types::MaxHeight;

/// Builder for a document element.
///
/// Elements are plain values until mounted into a [`crate::Document`],
/// which flattens the tree into an arena.
#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: HashMap<String, String>,

    // Content
    pub content: Content,

    // Box
    /// Rows taken by this element's own content, excluding children.
    pub height: u16,
    pub max_height: MaxHeight,
    pub transition: Option<TransitionConfig>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            tag: "div".to_string(),
            id: None,
            classes: Vec::new(),
            attributes: HashMap::new(),
            content: Content::None,
            height: 0,
            max_height: MaxHeight::Unset,
            transition: None,
        }
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn span() -> Self {
        Self::new("span")
    }

    /// A paragraph whose height is its line count.
    pub fn text(content: impl Into<String>) -> Self {
        let content = content.into();
        let lines = content.lines().count().max(1);
        Self {
            tag: "p".to_string(),
            height: u16::try_from(lines).unwrap_or(u16::MAX),
            content: Content::Text(content),
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    // Box
    pub fn height(mut self, height: u16) -> Self {
        self.height = height;
        self
    }

    pub fn max_height(mut self, max_height: MaxHeight) -> Self {
        self.max_height = max_height;
        self
    }

    pub fn transition(mut self, transition: TransitionConfig) -> Self {
        self.transition = Some(transition);
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }
}

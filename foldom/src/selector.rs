//! Selectors: compound parts (`tag`, `.class`, `#id` and combinations such
//! as `div.collapse-container#faq`) joined by descendant combinators, as in
//! `#faq .collapse-container`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors produced while parsing a selector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("selector is empty")]
    Empty,

    #[error("expected a name after '{marker}' at position {position}")]
    MissingName { marker: char, position: usize },

    #[error("unexpected character '{ch}' at position {position}")]
    UnexpectedChar { ch: char, position: usize },

    #[error("selector has more than one #id")]
    DuplicateId,
}

/// A parsed selector. Every present part must match the element itself;
/// each entry of `ancestors` must match some element above it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
    /// Compound selectors to the left of descendant combinators, outermost
    /// first.
    pub ancestors: Vec<Selector>,
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let chars: Vec<char> = input.trim().chars().collect();
        if chars.is_empty() {
            return Err(SelectorError::Empty);
        }

        let mut compounds = Vec::new();
        let mut pos = 0;
        while pos < chars.len() {
            if chars[pos].is_whitespace() {
                pos += 1;
                continue;
            }
            compounds.push(parse_compound(&chars, &mut pos)?);
        }

        let mut selector = compounds.pop().ok_or(SelectorError::Empty)?;
        selector.ancestors = compounds;
        Ok(selector)
    }

    /// Selector matching any element with the given class.
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            classes: vec![name.into()],
            ..Default::default()
        }
    }

    /// Check the rightmost compound against an element's tag, id and class
    /// list. Ancestors are not considered.
    pub fn matches_parts(&self, tag: &str, id: Option<&str>, classes: &[String]) -> bool {
        if let Some(expected) = &self.tag {
            if !expected.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(expected) = &self.id {
            if id != Some(expected.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|class| classes.contains(class))
    }
}

fn parse_compound(chars: &[char], pos: &mut usize) -> Result<Selector, SelectorError> {
    let mut selector = Selector::default();

    // Leading type selector
    let tag = take_name(chars, pos);
    if !tag.is_empty() {
        selector.tag = Some(tag.to_ascii_lowercase());
    }

    while *pos < chars.len() && !chars[*pos].is_whitespace() {
        let marker = chars[*pos];
        if marker != '.' && marker != '#' {
            return Err(SelectorError::UnexpectedChar {
                ch: marker,
                position: *pos,
            });
        }
        *pos += 1;

        let name = take_name(chars, pos);
        if name.is_empty() {
            return Err(SelectorError::MissingName {
                marker,
                position: *pos,
            });
        }

        if marker == '.' {
            if !selector.classes.contains(&name) {
                selector.classes.push(name);
            }
        } else if selector.id.replace(name).is_some() {
            return Err(SelectorError::DuplicateId);
        }
    }

    Ok(selector)
}

fn is_name_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '-' || ch == '_'
}

fn take_name(chars: &[char], pos: &mut usize) -> String {
    let start = *pos;
    while *pos < chars.len() && is_name_char(chars[*pos]) {
        *pos += 1;
    }
    chars[start..*pos].iter().collect()
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ancestor in &self.ancestors {
            write!(f, "{ancestor} ")?;
        }
        if let Some(tag) = &self.tag {
            write!(f, "{tag}")?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        Ok(())
    }
}

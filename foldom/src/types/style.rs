use std::fmt;

/// Inline `max-height` value of an element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MaxHeight {
    /// No inline value (`""`). The element renders at its natural height.
    #[default]
    Unset,
    /// Explicitly unconstrained (`none`).
    None,
    /// Fixed limit in rows.
    Px(u32),
}

impl MaxHeight {
    /// Returns true for a `0px` limit.
    pub fn is_zero(self) -> bool {
        self == MaxHeight::Px(0)
    }

    /// Returns the pixel limit, if any.
    pub fn px(self) -> Option<u32> {
        match self {
            MaxHeight::Px(px) => Some(px),
            _ => None,
        }
    }

    /// Clamp a natural height by this limit.
    pub fn clamp(self, natural: u32) -> u32 {
        match self {
            MaxHeight::Px(px) => natural.min(px),
            MaxHeight::Unset | MaxHeight::None => natural,
        }
    }
}

impl fmt::Display for MaxHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaxHeight::Unset => Ok(()),
            MaxHeight::None => write!(f, "none"),
            MaxHeight::Px(px) => write!(f, "{px}px"),
        }
    }
}

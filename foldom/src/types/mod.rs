mod style;

pub use style::MaxHeight;

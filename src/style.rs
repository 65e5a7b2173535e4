/// Inline CSS rendering of evaluated properties.
pub mod css;

pub mod escape;
pub mod media;
pub mod prefixer;
pub mod property;
pub mod style;
pub mod stylesheet;
mod tree;
pub mod types;
mod writer;

// Re-export commonly used types
pub use escape::escape_class;
pub use property::{Property, PropertyName};
pub use style::{SelectorFn, Style, StyleKind};
pub use stylesheet::StyleSheet;
pub use types::{Declaration, StyleLayer, StyleMeta};

pub mod parser;
pub mod types;

// Re-export main types
pub use parser::{parse, Parser, DEFAULT_SEPARATOR};
pub use types::{leaves, Leaf, Token, TokenContent, TokenKind};

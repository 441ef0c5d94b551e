pub mod config;
pub mod error;
pub mod source;
pub mod tokenizer;

// Re-exports
pub use error::Error;
pub use tokenizer::{tokenize, Position, Token, TokenKind, Tokenizer};

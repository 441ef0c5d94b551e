//! # Tokenizer Component
//!
//! The Tokenizer turns lines of EBNF-like grammar text into a flat, ordered
//! sequence of [`Token`]s carrying their 1-based line and column.
//!
//! ## Component Structure
//!
//! * [`symbol`]: the special characters and their token kinds
//! * [`token`]: [`Token`], [`TokenKind`] and [`Position`]
//! * [`scanner`]: the line scanning state machine ([`Tokenizer`])
//!
//! ## Scanning Rules
//!
//! * Plain spaces outside a quoted literal are skipped.
//! * Every special character (`= , ; | [ ] { } ( ) ' " - * ?`) is emitted as a
//!   one-character token; text gathered before it is flushed as an identifier first.
//! * A quote opens a literal span closed only by the same quote character. Inside
//!   it, spaces and the other quote character are ordinary text.
//! * A token still open at the end of a line is flushed as an identifier. The
//!   literal state, however, carries over to the next line.
//!
//! ## Error Handling
//!
//! Tokenization never fails. Malformed grammar, such as an unterminated literal,
//! shows up as an unusual token sequence for the parser to reject.
//!
//! ## Usage Example
//!
//! ```rust
//! use yantlr::tokenizer::{Tokenizer, TokenKind};
//!
//! let mut tokenizer = Tokenizer::new();
//! let tokens = tokenizer.tokenize(["a = b | c;"]);
//!
//! assert_eq!(tokens.len(), 6);
//! assert_eq!(tokens[3].kind, TokenKind::Alternation);
//! assert_eq!(tokens[3].position.column, 7);
//! ```

pub mod scanner;
pub mod symbol;
pub mod token;

pub use scanner::{tokenize, ScanState, Tokenizer};
pub use token::{Position, Token, TokenKind};

//! # Special Character Handling
//!
//! This module defines the fixed set of punctuation characters recognized in grammar
//! source and the table that maps each of them to a [`TokenKind`].
//!
//! Any character outside this set is ordinary text and is accumulated into the
//! pending identifier (or literal) of the scanner.

use super::token::TokenKind;

pub const EQUALS: char = '=';
pub const COMMA: char = ',';
pub const SEMICOLON: char = ';';
pub const VERTICAL: char = '|';
pub const L_SQUARE_BRACKET: char = '[';
pub const R_SQUARE_BRACKET: char = ']';
pub const L_CURLY_BRACKET: char = '{';
pub const R_CURLY_BRACKET: char = '}';
pub const L_PARENTHESIS: char = '(';
pub const R_PARENTHESIS: char = ')';
pub const QUOTE: char = '\'';
pub const DOUBLE_QUOTE: char = '"';
pub const HYPHEN: char = '-';
pub const ASTERISK: char = '*';
pub const QUESTION_MARK: char = '?';
pub const WHITESPACE: char = ' ';

/// Every character that triggers delimiter handling.
pub const SPECIAL_CHARACTERS: [char; 15] = [
    EQUALS,
    COMMA,
    SEMICOLON,
    VERTICAL,
    L_SQUARE_BRACKET,
    R_SQUARE_BRACKET,
    L_CURLY_BRACKET,
    R_CURLY_BRACKET,
    L_PARENTHESIS,
    R_PARENTHESIS,
    QUOTE,
    DOUBLE_QUOTE,
    HYPHEN,
    ASTERISK,
    QUESTION_MARK,
];

/// Returns `true` if `c` is one of the special characters.
///
/// # Examples
///
/// ```
/// # use yantlr::tokenizer::symbol::is_special;
/// assert!(is_special('='));
/// assert!(is_special('*'));
/// assert!(!is_special(' '));
/// assert!(!is_special('p'));
/// ```
pub fn is_special(c: char) -> bool {
    SPECIAL_CHARACTERS.contains(&c)
}

/// Returns `true` if `c` can open or close a quoted literal span.
pub fn is_quote(c: char) -> bool {
    c == QUOTE || c == DOUBLE_QUOTE
}

/// Maps a special character to the kind of token it produces.
///
/// `*` belongs to the special set but has no kind of its own, so it
/// falls through to [`TokenKind::Unknown`] like any other character.
///
/// # Examples
///
/// ```
/// # use yantlr::tokenizer::symbol::classify;
/// # use yantlr::tokenizer::token::TokenKind;
/// assert_eq!(classify('|'), TokenKind::Alternation);
/// assert_eq!(classify('{'), TokenKind::Repetition);
/// assert_eq!(classify('*'), TokenKind::Unknown);
/// ```
pub fn classify(c: char) -> TokenKind {
    match c {
        EQUALS => TokenKind::Define,
        COMMA => TokenKind::Concat,
        SEMICOLON => TokenKind::Terminator,
        VERTICAL => TokenKind::Alternation,
        L_SQUARE_BRACKET | R_SQUARE_BRACKET => TokenKind::Optional,
        L_CURLY_BRACKET | R_CURLY_BRACKET => TokenKind::Repetition,
        L_PARENTHESIS | R_PARENTHESIS => TokenKind::Group,
        QUOTE | DOUBLE_QUOTE => TokenKind::TerminalQuote,
        QUESTION_MARK => TokenKind::Special,
        HYPHEN => TokenKind::Exception,
        _ => TokenKind::Unknown,
    }
}

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Kind of lexical unit produced by the scanner.
///
/// `Display`, `AsRef<str>` and `FromStr` use the short codes shown in
/// diagnostic listings (`IDEN`, `DEF`, ...).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    AsRefStr,
)]
pub enum TokenKind {
    /// Accumulated text: rule names, literal content
    #[strum(serialize = "IDEN")]
    Identifier,
    /// `=`
    #[strum(serialize = "DEF")]
    Define,
    /// `,`
    #[strum(serialize = "CONCAT")]
    Concat,
    /// `;`
    #[strum(serialize = "TERM")]
    Terminator,
    /// `|`
    #[strum(serialize = "ALTER")]
    Alternation,
    /// `[` and `]`
    #[strum(serialize = "OPT")]
    Optional,
    /// `{` and `}`
    #[strum(serialize = "REP")]
    Repetition,
    /// `(` and `)`
    #[strum(serialize = "GROUP")]
    Group,
    /// `'` and `"`
    #[strum(serialize = "TERMI")]
    TerminalQuote,
    /// `?`
    #[strum(serialize = "SPEC")]
    Special,
    /// `-`
    #[strum(serialize = "EXCEP")]
    Exception,
    #[strum(serialize = "UNK")]
    Unknown,
}

impl TokenKind {
    /// Long, human readable name of the kind.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "Identifier",
            TokenKind::Define => "Define",
            TokenKind::Concat => "Concat",
            TokenKind::Terminator => "Terminator",
            TokenKind::Alternation => "Alternation",
            TokenKind::Optional => "Optional",
            TokenKind::Repetition => "Repetition",
            TokenKind::Group => "Group",
            TokenKind::TerminalQuote => "TerminalQuote",
            TokenKind::Special => "Special",
            TokenKind::Exception => "Exception",
            TokenKind::Unknown => "Unknown",
        }
    }
}

/// 1-based location of a token in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    /// Counted in characters, not bytes.
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line: {}, column: {}", self.line, self.column)
    }
}

/// A classified, positioned unit of grammar text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Sequence number within one tokenizer run, starting at 1.
    pub id: usize,
    pub kind: TokenKind,
    /// Trimmed text of the token. Delimiters carry their own character.
    pub symbol: String,
    pub position: Position,
}

impl Token {
    pub fn new(id: usize, kind: TokenKind, symbol: impl Into<String>, position: Position) -> Self {
        Self {
            id,
            kind,
            symbol: symbol.into(),
            position,
        }
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {:>4} Type: {} Line: {:>2}[{:>2}] Symbol: {}",
            self.id,
            self.kind.as_ref(),
            self.position.line,
            self.position.column,
            self.symbol
        )
    }
}

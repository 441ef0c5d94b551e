use tracing::{debug, trace};

use super::{
    symbol::{classify, is_quote, is_special, WHITESPACE},
    token::{Position, Token, TokenKind},
};

/// Where the scanner stands between two characters.
///
/// A column is recorded as soon as a token opens; it is the column reported for
/// the identifier eventually flushed from the pending text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// No token open, outside any literal.
    Idle,
    /// Gathering text outside a literal.
    Accumulating { start_column: usize },
    /// Inside a span opened by `quote`. A token may or may not be open yet.
    InLiteral {
        quote: char,
        start_column: Option<usize>,
    },
}

impl ScanState {
    pub fn is_quoted(&self) -> bool {
        matches!(self, ScanState::InLiteral { .. })
    }

    pub fn quote(&self) -> Option<char> {
        match self {
            ScanState::InLiteral { quote, .. } => Some(*quote),
            _ => None,
        }
    }

    pub fn start_column(&self) -> Option<usize> {
        match self {
            ScanState::Idle => None,
            ScanState::Accumulating { start_column } => Some(*start_column),
            ScanState::InLiteral { start_column, .. } => *start_column,
        }
    }

    pub fn is_open(&self) -> bool {
        self.start_column().is_some()
    }

    fn open(self, column: usize) -> Self {
        match self {
            ScanState::Idle => ScanState::Accumulating {
                start_column: column,
            },
            ScanState::InLiteral {
                quote,
                start_column: None,
            } => ScanState::InLiteral {
                quote,
                start_column: Some(column),
            },
            open => open,
        }
    }

    fn close(self) -> Self {
        match self {
            ScanState::InLiteral { quote, .. } => ScanState::InLiteral {
                quote,
                start_column: None,
            },
            _ => ScanState::Idle,
        }
    }
}

/// Mutable state of one tokenization run, carried from line to line.
#[derive(Debug)]
struct ScanContext {
    state: ScanState,
    pending: String,
    line: usize,
    next_id: usize,
}

impl ScanContext {
    fn new() -> Self {
        Self {
            state: ScanState::Idle,
            pending: String::new(),
            line: 0,
            next_id: 1,
        }
    }

    /// Turns the pending text into a token and clears it.
    fn emit(&mut self, kind: TokenKind, column: usize) -> Token {
        let symbol = std::mem::take(&mut self.pending);
        let token = Token::new(
            self.next_id,
            kind,
            symbol.trim(),
            Position::new(self.line, column),
        );
        self.next_id += 1;
        trace!("emitted {}", token);
        token
    }

    fn transition(&mut self, next: ScanState) {
        if self.state != next {
            trace!(from = ?self.state, to = ?next, "scan state");
            self.state = next;
        }
    }
}

/// Line oriented tokenizer for EBNF-like grammar text.
///
/// Lines are fed in source order. The scan state (open literal, pending text,
/// token ids) carries over from one line to the next, so feeding lines one by
/// one yields the same tokens as a single [`Tokenizer::tokenize`] call.
#[derive(Debug)]
pub struct Tokenizer {
    context: ScanContext,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            context: ScanContext::new(),
        }
    }

    pub fn state(&self) -> ScanState {
        self.context.state
    }

    /// Number of tokens emitted so far.
    pub fn emitted(&self) -> usize {
        self.context.next_id - 1
    }

    /// Tokenizes every line of `lines`, the first one being line 1.
    #[tracing::instrument(level = "debug", skip(self, lines))]
    pub fn tokenize<I, S>(&mut self, lines: I) -> Vec<Token>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tokens = Vec::new();
        for line in lines {
            tokens.extend(self.feed_line(line.as_ref()));
        }
        debug!(count = tokens.len(), "tokenized");
        tokens
    }

    /// Scans the next line and returns the tokens it produced.
    ///
    /// Only a single trailing space is stripped before scanning. A token still
    /// open at the end of the line is flushed as an identifier, even when its
    /// trimmed text is empty.
    #[tracing::instrument(level = "debug", skip(self, line))]
    pub fn feed_line(&mut self, line: &str) -> Vec<Token> {
        let ctx = &mut self.context;
        ctx.line += 1;

        let line = line.strip_suffix(WHITESPACE).unwrap_or(line);
        let mut tokens = Vec::new();

        for (i, c) in line.chars().enumerate() {
            let column = i + 1;

            if c == WHITESPACE && !ctx.state.is_quoted() {
                continue;
            }

            let opened = ctx.state.open(column);
            ctx.transition(opened);

            if !is_special(c) {
                ctx.pending.push(c);
                continue;
            }

            // Decide where the scanner goes once the delimiter is out.
            let after = if is_quote(c) {
                match ctx.state.quote() {
                    None => ScanState::InLiteral {
                        quote: c,
                        start_column: None,
                    },
                    Some(quote) if quote == c => ScanState::Idle,
                    Some(_) => {
                        ctx.pending.push(c);
                        continue;
                    }
                }
            } else {
                ctx.state.close()
            };

            if !ctx.pending.is_empty() {
                let start = ctx.state.start_column().unwrap_or(column);
                tokens.push(ctx.emit(TokenKind::Identifier, start));
            }

            ctx.transition(after);
            ctx.pending.push(c);
            tokens.push(ctx.emit(classify(c), column));
        }

        if let Some(start) = ctx.state.start_column() {
            tokens.push(ctx.emit(TokenKind::Identifier, start));
            let closed = ctx.state.close();
            ctx.transition(closed);
        }

        debug!(line = ctx.line, count = tokens.len(), "line scanned");
        tokens
    }
}

/// Tokenizes `lines` with a fresh [`Tokenizer`].
///
/// # Examples
///
/// ```
/// # use yantlr::tokenizer::{tokenize, TokenKind};
/// let tokens = tokenize(["digit = \"0\" | \"1\";"]);
/// assert_eq!(tokens[0].kind, TokenKind::Identifier);
/// assert_eq!(tokens[0].symbol, "digit");
/// assert_eq!(tokens.len(), 10);
/// ```
pub fn tokenize<I, S>(lines: I) -> Vec<Token>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Tokenizer::new().tokenize(lines)
}

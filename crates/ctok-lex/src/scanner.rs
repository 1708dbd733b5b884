//! The tokenizing engine.
//!
//! This module contains the DFA state set, the `Scanner` that drives it
//! over a [`CharSource`], and the `tokenize` convenience function.

use std::io::{self, BufRead};

use thiserror::Error;

use crate::classify::Classifier;
use crate::source::CharSource;
use crate::token::Token;

/// Error produced by a scan.
///
/// Malformed input never fails the scan; it degrades into constant
/// tokens or silently dropped fragments. The only failure is an I/O
/// error from the underlying reader.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The underlying reader failed.
    #[error("failed to read source input: {0}")]
    Io(#[from] io::Error),
}

/// States of the token-recognizing DFA.
///
/// Exactly one state is current at any instant; transitions depend only
/// on the current state, the next input character, and the lexeme
/// accumulated so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Dispatch state entered at the top of every pass.
    Start,
    /// Inside a run of digits.
    Number,
    /// Inside an identifier or suffix lexeme.
    Identifier,
    /// Saw one of `+ - & | > < ^`; may double, take `=`, or stand alone.
    DoubleOrEq,
    /// Saw a character that is complete alone or with a trailing `=`.
    EqSuffix,
    /// Saw `>>` or `<<`; may still grow to a three-character operator.
    TripleCandidate,
    /// Saw `/`; could open a comment or resolve to `/` or `/=`.
    SlashDisambiguate,
    /// Inside a `//` comment, discarding to end of line.
    LineComment,
    /// Inside a `/* */` comment body.
    BlockCommentBody,
    /// Saw `*` inside a block comment; `/` closes it.
    BlockCommentStar,
    /// Inside a `"` string literal.
    StringLiteral,
    /// Terminal state; the pass is complete.
    Done,
}

/// Whitespace as the DFA sees it: space, tab, newline, and NUL.
///
/// Carriage returns are stripped with the line terminator by the
/// character source; a bare `\r` inside a line is not whitespace here
/// and becomes a single-character constant token.
fn is_dfa_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\0')
}

/// The DFA-driven tokenizer.
///
/// The scanner pulls characters from its [`CharSource`] strictly in
/// order, using single-level pushback to undo the read that ends a
/// token. Each `Scanner`/`CharSource` pair is an independent instance;
/// nothing is shared between scans.
///
/// # Example
///
/// ```
/// use ctok_lex::{Category, Scanner};
///
/// let mut scanner = Scanner::new("if(x==10){}".as_bytes());
///
/// let token = scanner.next_token().unwrap().unwrap();
/// assert_eq!(token.lexeme, "if");
/// assert_eq!(token.category, Category::Keyword);
/// ```
pub struct Scanner<R> {
    source: CharSource<R>,
    classifier: Classifier,
}

impl<R: BufRead> Scanner<R> {
    /// Creates a scanner over the given reader.
    pub fn new(reader: R) -> Self {
        Self {
            source: CharSource::new(reader),
            classifier: Classifier::new(),
        }
    }

    /// Runs one DFA pass and returns the token it recognized, if any.
    ///
    /// A pass that reaches the terminal state with an empty lexeme
    /// (pure whitespace, or a comment) yields `Ok(None)`. A pass cut
    /// short by end of stream also yields `Ok(None)`: an unterminated
    /// string literal or block comment is dropped, not reported.
    pub fn scan_token(&mut self) -> Result<Option<Token>, ScanError> {
        let mut lexeme = String::new();
        let mut state = State::Start;

        while state != State::Done {
            let Some(c) = self.source.next_char()? else {
                // End of stream mid-pass: pending progress is dropped.
                return Ok(None);
            };
            let mut save = true;

            match state {
                State::Start => {
                    if c.is_ascii_digit() {
                        state = State::Number;
                    } else if c.is_alphabetic() || c == '.' {
                        // A leading dot begins a suffix lexeme.
                        state = State::Identifier;
                    } else if is_dfa_whitespace(c) {
                        save = false;
                        state = State::Done;
                    } else if matches!(c, '!' | '=' | '*') {
                        state = State::EqSuffix;
                    } else if matches!(c, '+' | '-' | '&' | '|' | '>' | '<' | '^') {
                        state = State::DoubleOrEq;
                    } else if c == '/' {
                        state = State::SlashDisambiguate;
                    } else if c == '"' {
                        state = State::StringLiteral;
                    } else {
                        // Any other character is a token by itself.
                        state = State::Done;
                    }
                },
                State::Number => {
                    if !c.is_ascii_digit() {
                        self.source.push_back();
                        save = false;
                        state = State::Done;
                    }
                },
                State::Identifier => {
                    if !c.is_alphanumeric() && c != '_' {
                        self.source.push_back();
                        save = false;
                        state = State::Done;
                    }
                },
                State::StringLiteral => {
                    // The closing quote is part of the lexeme.
                    if c == '"' {
                        state = State::Done;
                    }
                },
                State::EqSuffix => {
                    if c != '=' {
                        self.source.push_back();
                        save = false;
                    }
                    state = State::Done;
                },
                State::DoubleOrEq => match (lexeme.as_str(), c) {
                    ("+", '+') | ("-", '-') | ("|", '|') | ("&", '&') => {
                        state = State::Done;
                    },
                    (">", '>') | ("<", '<') => {
                        state = State::TripleCandidate;
                    },
                    _ => {
                        // Re-enter as EqSuffix and re-read the character
                        // there, so `+=`, `>=`, `^=` and friends resolve
                        // on the next iteration.
                        self.source.push_back();
                        save = false;
                        state = State::EqSuffix;
                    },
                },
                State::TripleCandidate => {
                    let grows = matches!(
                        (lexeme.as_str(), c),
                        (">>", '>' | '=') | ("<<", '<' | '=')
                    );
                    if !grows {
                        self.source.push_back();
                        save = false;
                    }
                    state = State::Done;
                },
                State::SlashDisambiguate => {
                    save = false;
                    match c {
                        '/' => {
                            lexeme.clear();
                            state = State::LineComment;
                        },
                        '*' => {
                            lexeme.clear();
                            state = State::BlockCommentBody;
                        },
                        _ => {
                            // Re-read in EqSuffix: the lexeme stays `/`
                            // and resolves to `/` or `/=`.
                            self.source.push_back();
                            state = State::EqSuffix;
                        },
                    }
                },
                State::LineComment => {
                    save = false;
                    if c == '\n' {
                        state = State::Done;
                    }
                },
                State::BlockCommentBody => {
                    save = false;
                    if c == '*' {
                        state = State::BlockCommentStar;
                    }
                },
                State::BlockCommentStar => {
                    save = false;
                    state = if c == '/' {
                        State::Done
                    } else {
                        State::BlockCommentBody
                    };
                },
                State::Done => unreachable!("scan loop exits on Done"),
            }

            if save {
                lexeme.push(c);
            }
        }

        if lexeme.is_empty() {
            Ok(None)
        } else {
            let category = self.classifier.classify(&lexeme);
            Ok(Some(Token::new(lexeme, category)))
        }
    }

    /// Returns the next token, or `Ok(None)` once the input is exhausted.
    ///
    /// Whitespace-only and comment-only passes are skipped internally.
    pub fn next_token(&mut self) -> Result<Option<Token>, ScanError> {
        loop {
            if self.source.is_at_end() {
                return Ok(None);
            }
            if let Some(token) = self.scan_token()? {
                return Ok(Some(token));
            }
        }
    }

    /// Returns the current source line number (1-based once reading starts).
    pub fn line(&self) -> u32 {
        self.source.line()
    }
}

impl<R: BufRead> Iterator for Scanner<R> {
    type Item = Result<Token, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

/// Tokenizes an entire input and collects the result.
///
/// # Example
///
/// ```
/// use ctok_lex::tokenize;
///
/// let tokens = tokenize("a+=1".as_bytes()).unwrap();
/// let lexemes: Vec<&str> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
/// assert_eq!(lexemes, ["a", "+=", "1"]);
/// ```
pub fn tokenize<R: BufRead>(reader: R) -> Result<Vec<Token>, ScanError> {
    let mut scanner = Scanner::new(reader);
    let mut tokens = Vec::new();
    while let Some(token) = scanner.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}

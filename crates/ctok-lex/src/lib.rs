//! ctok-lex - DFA-based tokenizer for C-like source text
//!
//! This crate recognizes lexical tokens in C-like source text by driving
//! a deterministic finite automaton over a character stream. Each
//! recognized lexeme is classified into one of six grammatical
//! categories: keyword, delimiter, operator, identifier, constant, or
//! file suffix.
//!
//! # Overview
//!
//! Two components make up the crate. The [`CharSource`] wraps any
//! line-oriented reader and exposes one character at a time with a
//! single level of pushback. The [`Scanner`] pulls characters from it,
//! accumulates a candidate lexeme, and walks the [`State`] machine until
//! a token is complete, then classifies it with the [`Classifier`].
//!
//! The scanner never halts on unexpected input: unrecognized characters
//! become constant tokens, and an unterminated string literal or block
//! comment at end of input is silently dropped. The only error it can
//! return is an I/O failure from the underlying reader.
//!
//! # Example Usage
//!
//! ```
//! use ctok_lex::{Category, Scanner};
//!
//! let source = "while (i < 10) i += 1;";
//! let mut scanner = Scanner::new(source.as_bytes());
//!
//! // Tokens one at a time
//! let first = scanner.next_token().unwrap().unwrap();
//! assert_eq!(first.lexeme, "while");
//! assert_eq!(first.category, Category::Keyword);
//!
//! // Or through the iterator
//! for token in scanner {
//!     println!("{}", token.unwrap());
//! }
//! ```
//!
//! # Module Structure
//!
//! - [`source`] - Line-buffered character stream with pushback
//! - [`scanner`] - DFA states and the tokenizing engine
//! - [`token`] - Token and category types
//! - [`classify`] - Static classification tables and lookup
//!
//! # Known Limitations
//!
//! These match the recognized language by design, not by accident:
//! no floating-point numerals (`3.14` is `3` then `.14`), no escape
//! sequences inside string literals, and block comments do not nest.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod scanner;
pub mod source;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use classify::{Classifier, DELIMITERS, KEYWORDS, OPERATORS};
pub use scanner::{tokenize, ScanError, Scanner, State};
pub use source::CharSource;
pub use token::{Category, Token};

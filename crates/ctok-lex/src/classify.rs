//! Lexeme classification.
//!
//! This module holds the three fixed classification tables and the
//! priority-ordered lookup that assigns a category to a completed lexeme.

use rustc_hash::FxHashSet;

use crate::token::Category;

/// Reserved words of the recognized language.
pub const KEYWORDS: &[&str] = &[
    "include", "define", "int", "float", "double", "main", "if", "const", "continue", "default",
    "enum", "extern", "long", "short", "else", "for", "while", "do", "goto", "switch", "case",
    "static", "sizeof", "auto", "break", "return", "struct", "typedef", "void", "unsigned",
    "volatile", "union",
];

/// Delimiter lexemes.
pub const DELIMITERS: &[&str] = &[
    "{", "}", "[", "]", "(", ")", "#", ",", ".", ";", ":", "?",
];

/// Operator lexemes, single and multi character.
pub const OPERATORS: &[&str] = &[
    "+", "-", "%", "*", "/", "|", "&", "~", "!", "&&", "||", "|=", "&=", "^=", "!=", "=", "==",
    ">=", "<=", "++", "--", ">", "<", "/=", "*=", "+=", "-=", "%=", ">>", ">>=", ">>>", "<<",
    "<<<", "<<=",
];

/// Classifies completed lexemes against the fixed tables.
///
/// The three sets are built once and borrowed for the lifetime of the
/// scan; they never change at runtime.
///
/// # Example
///
/// ```
/// use ctok_lex::{Category, Classifier};
///
/// let classifier = Classifier::new();
/// assert_eq!(classifier.classify("while"), Category::Keyword);
/// assert_eq!(classifier.classify(">>="), Category::Operator);
/// assert_eq!(classifier.classify(".txt"), Category::Suffix);
/// ```
pub struct Classifier {
    keywords: FxHashSet<&'static str>,
    delimiters: FxHashSet<&'static str>,
    operators: FxHashSet<&'static str>,
}

impl Classifier {
    /// Builds the classification tables.
    pub fn new() -> Self {
        Self {
            keywords: KEYWORDS.iter().copied().collect(),
            delimiters: DELIMITERS.iter().copied().collect(),
            operators: OPERATORS.iter().copied().collect(),
        }
    }

    /// Assigns a category to a completed lexeme.
    ///
    /// Rules are checked in fixed priority order, first match wins:
    /// keyword set, delimiter set, operator set, then the pattern
    /// "one or more ASCII letters/underscores", then a leading `.`,
    /// else [`Category::Constant`]. Pure function of the lexeme.
    pub fn classify(&self, lexeme: &str) -> Category {
        if self.keywords.contains(lexeme) {
            Category::Keyword
        } else if self.delimiters.contains(lexeme) {
            Category::Delimiter
        } else if self.operators.contains(lexeme) {
            Category::Operator
        } else if !lexeme.is_empty()
            && lexeme.chars().all(|c| c.is_ascii_alphabetic() || c == '_')
        {
            Category::Identifier
        } else if lexeme.starts_with('.') {
            Category::Suffix
        } else {
            Category::Constant
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

//! Token and category definitions.

use std::fmt;

/// Grammatical category assigned to a lexeme.
///
/// Every recognized lexeme belongs to exactly one category. The variants
/// carry no payload; the human-readable label and the numeric class code
/// are presentation concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// A reserved word, e.g. `int`, `while`, `return`.
    Keyword,
    /// A delimiter, e.g. `{`, `;`, `?`.
    Delimiter,
    /// An operator, e.g. `+`, `==`, `>>=`.
    Operator,
    /// A name made of letters and underscores only.
    Identifier,
    /// A numeral, string literal, or any lexeme no other rule matched.
    Constant,
    /// A file-suffix token beginning with `.`, e.g. `.c`.
    Suffix,
}

impl Category {
    /// Returns the numeric class code for this category.
    ///
    /// Codes run from 1 (keyword) to 6 (suffix) and appear in the
    /// rendered token output.
    pub fn code(&self) -> u8 {
        match self {
            Category::Keyword => 1,
            Category::Delimiter => 2,
            Category::Operator => 3,
            Category::Identifier => 4,
            Category::Constant => 5,
            Category::Suffix => 6,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Keyword => "keyword",
            Category::Delimiter => "delimiter",
            Category::Operator => "operator",
            Category::Identifier => "identifier",
            Category::Constant => "constant",
            Category::Suffix => "suffix",
        };
        write!(f, "{}", label)
    }
}

/// A recognized token: the raw lexeme paired with its category.
///
/// Tokens are immutable once produced by the scanner.
///
/// # Example
///
/// ```
/// use ctok_lex::{Category, Token};
///
/// let token = Token::new("while", Category::Keyword);
/// assert_eq!(token.to_string(), "(while , 1)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The raw substring of input text that forms this token.
    pub lexeme: String,
    /// The grammatical class assigned to the lexeme.
    pub category: Category,
}

impl Token {
    /// Creates a new token from a lexeme and its category.
    pub fn new(lexeme: impl Into<String>, category: Category) -> Self {
        Self {
            lexeme: lexeme.into(),
            category,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} , {})", self.lexeme, self.category.code())
    }
}

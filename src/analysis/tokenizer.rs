//! Tokenizer trait and the default word tokenizer.
//!
//! The index does not own normalization. It only requires that the same
//! tokenizer instance (or an equivalently configured one) is used when
//! indexing entities and when generating candidates for a query entity,
//! so that both sides of a lookup see the same terms.
//!
//! # Examples
//!
//! ```
//! use cognate::analysis::tokenizer::{Tokenizer, UnicodeWordTokenizer};
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Vladimir PUTIN").unwrap().collect();
//! assert_eq!(tokens[0].text, "vladimir");
//! assert_eq!(tokens[1].text, "putin");
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Trait for tokenizers that convert text into terms.
///
/// The trait requires `Send + Sync` so a tokenizer can be shared by an
/// index that is queried from multiple threads.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A tokenizer that splits text on Unicode word boundaries (UAX #29)
/// and case-folds every token.
///
/// Punctuation and whitespace segments are dropped. Case folding makes
/// the produced terms directly comparable across records that differ
/// only in capitalization, which is the common situation with names
/// drawn from different source registries.
///
/// # Examples
///
/// ```
/// use cognate::analysis::tokenizer::{Tokenizer, UnicodeWordTokenizer};
///
/// let tokenizer = UnicodeWordTokenizer::new();
/// let tokens: Vec<_> = tokenizer.tokenize("Acme Holdings, Ltd.").unwrap().collect();
/// let terms: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
/// assert_eq!(terms, vec!["acme", "holdings", "ltd"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = text
            .unicode_words()
            .enumerate()
            .map(|(position, word)| Token::new(word.to_lowercase(), position))
            .collect();
        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}

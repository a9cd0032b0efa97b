//! Text analysis seam for Cognate.
//!
//! Tokenization and normalization of raw entity text are owned by the
//! caller: the index only requires that the same [`Tokenizer`] is used
//! for indexing and for querying. This module defines the token types,
//! the tokenizer trait, and a default Unicode word tokenizer suitable
//! for names and free-text identifiers.

pub mod token;
pub mod tokenizer;

pub use token::{Token, TokenStream};
pub use tokenizer::{Tokenizer, UnicodeWordTokenizer};

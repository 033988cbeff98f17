//! Text normalization: transliteration and tokenization (spec §4.1, §4.2).

pub mod tokenize;
pub mod transliterate;

pub use tokenize::{filter_token, tokenize, trim};
pub use transliterate::normalize;

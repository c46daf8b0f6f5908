pub mod pattern;
pub mod unicode;

use serde::{Deserialize, Serialize};

pub use pattern::PatternSegmenter;
pub use unicode::UnicodeSegmenter;

/// A sentence slice of a document
/// `offset` is the byte position of `text` inside the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    pub offset: usize,
    pub text: &'a str,
}

/// Splits raw text into sentences
pub trait SentenceSegmenter {
    fn split_sentences<'a>(&self, text: &'a str) -> Vec<Span<'a>>;
}

/// Splits raw text into word tokens
/// Tokens keep the casing of the source text.
pub trait WordSegmenter {
    fn split_words<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// Segmentation strategy used by the tokenizer
///
/// By implementing this trait, a different segmentation engine can be plugged
/// into `WordAnalyzer<S>` and `Tokenizer`.
pub trait Segmenter: SentenceSegmenter + WordSegmenter {
    /// When true the counting stream is built from the words of each sentence
    /// instead of from the whole document text.
    fn words_from_sentences(&self) -> bool {
        false
    }
}

/// Runtime-selectable segmentation strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// fixed regular expressions
    #[default]
    Pattern,
    /// Unicode UAX #29 segmentation tables
    Unicode,
}

impl SentenceSegmenter for Strategy {
    fn split_sentences<'a>(&self, text: &'a str) -> Vec<Span<'a>> {
        match self {
            Strategy::Pattern => PatternSegmenter.split_sentences(text),
            Strategy::Unicode => UnicodeSegmenter.split_sentences(text),
        }
    }
}

impl WordSegmenter for Strategy {
    fn split_words<'a>(&self, text: &'a str) -> Vec<&'a str> {
        match self {
            Strategy::Pattern => PatternSegmenter.split_words(text),
            Strategy::Unicode => UnicodeSegmenter.split_words(text),
        }
    }
}

impl Segmenter for Strategy {
    fn words_from_sentences(&self) -> bool {
        match self {
            Strategy::Pattern => PatternSegmenter.words_from_sentences(),
            Strategy::Unicode => UnicodeSegmenter.words_from_sentences(),
        }
    }
}

/// true if the span holds at least one alphanumeric character
#[inline]
pub(crate) fn has_alphanumeric(text: &str) -> bool {
    text.chars().any(char::is_alphanumeric)
}

use std::rc::Rc;

use ahash::RandomState;
use serde::Serialize;
use std::collections::HashSet;

/// Shared document name
/// Every sentence of a document points back to the same allocation.
pub type NameRc = Rc<str>;

/// A loaded text document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// unique name, usually the path it was read from
    pub name: NameRc,
    /// raw text
    pub text: String,
}

impl Document {
    pub fn new(name: impl Into<NameRc>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// A sentence taken from one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    /// sentence text with its original casing
    pub text: String,
    /// name of the source document
    pub document: NameRc,
    /// byte offset of `text` in the source document
    pub offset: usize,
    /// case-folded word tokens of `text`
    #[serde(skip)]
    pub words: HashSet<String, RandomState>,
}

impl Sentence {
    /// Check whether the sentence holds the case-folded `word` as a token
    #[inline]
    pub fn contains_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

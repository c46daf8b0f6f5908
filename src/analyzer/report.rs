use indexmap::IndexSet;
use serde::Serialize;

use super::document::{NameRc, Sentence};
use super::matcher::SentenceMatcher;
use super::ranker::WordFrequency;
use super::segment::Segmenter;
use crate::error::Result;

/// Everything known about one ranked word
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordReport {
    /// case-folded word
    pub word: String,
    /// occurrences across all documents
    pub count: u64,
    /// documents with at least one matching sentence, first-seen order
    pub documents: IndexSet<NameRc>,
    /// matching sentences in document-then-position order
    pub sentences: Vec<Sentence>,
}

impl WordReport {
    pub fn new(freq: &WordFrequency, sentences: Vec<Sentence>) -> Self {
        let documents = sentences.iter().map(|s| s.document.clone()).collect();
        Self {
            word: freq.word.clone(),
            count: freq.count,
            documents,
            sentences,
        }
    }
}

/// One report per ranked word, in rank order
pub fn build_reports<S>(ranked: &[WordFrequency], matcher: &SentenceMatcher<'_, S>) -> Result<Vec<WordReport>>
where
    S: Segmenter + ?Sized,
{
    ranked
        .iter()
        .map(|freq| Ok(WordReport::new(freq, matcher.find(&freq.word)?)))
        .collect()
}

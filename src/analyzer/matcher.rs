use serde::{Deserialize, Serialize};

use super::document::{Document, Sentence};
use super::segment::Segmenter;
use super::tokenizer::{TokenizedCorpus, Tokenizer};
use crate::error::Result;
use crate::utils::fold::fold;
use crate::utils::whole_word::WholeWord;

/// How sentences are associated back to a ranked word
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    /// membership in the sentence's pre-tokenized words
    #[default]
    Tokens,
    /// whole-word regex over the re-split raw documents
    Rescan,
}

/// Finds the sentences that contain a word
///
/// Results are in document-then-position order. A sentence that appears
/// verbatim in several documents is returned once per document.
pub struct SentenceMatcher<'a, S: Segmenter + ?Sized> {
    segmenter: &'a S,
    documents: &'a [Document],
    corpus: &'a TokenizedCorpus,
    strategy: MatchStrategy,
}

impl<'a, S: Segmenter + ?Sized> SentenceMatcher<'a, S> {
    /// `corpus` must come from tokenizing `documents` with `segmenter`
    pub fn new(
        segmenter: &'a S,
        documents: &'a [Document],
        corpus: &'a TokenizedCorpus,
        strategy: MatchStrategy,
    ) -> Self {
        Self {
            segmenter,
            documents,
            corpus,
            strategy,
        }
    }

    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    /// Sentences containing `word` as a whole word, ignoring case
    pub fn find(&self, word: &str) -> Result<Vec<Sentence>> {
        match self.strategy {
            MatchStrategy::Tokens => Ok(self.find_by_tokens(word)),
            MatchStrategy::Rescan => self.find_by_rescan(word),
        }
    }

    fn find_by_tokens(&self, word: &str) -> Vec<Sentence> {
        let word = fold(word);
        self.corpus
            .sentences
            .iter()
            .filter(|s| s.contains_word(&word))
            .cloned()
            .collect()
    }

    fn find_by_rescan(&self, word: &str) -> Result<Vec<Sentence>> {
        let pattern = WholeWord::new(word)?;
        let tokenizer = Tokenizer::new(self.segmenter);
        Ok(self
            .documents
            .iter()
            .flat_map(|doc| tokenizer.sentences(doc))
            .filter(|s| pattern.is_match(&s.text))
            .collect())
    }
}

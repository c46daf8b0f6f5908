use tracing::debug;

use super::document::{Document, Sentence};
use super::segment::{Segmenter, Span};
use crate::utils::fold::fold;

/// Output of the tokenizer stage
///
/// Holds everything later stages need, so documents do not have to be
/// re-read:
/// - every case-folded word token, in document order
/// - every sentence, in document-then-position order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenizedCorpus {
    pub words: Vec<String>,
    pub sentences: Vec<Sentence>,
}

impl TokenizedCorpus {
    pub fn word_num(&self) -> usize {
        self.words.len()
    }

    pub fn sentence_num(&self) -> usize {
        self.sentences.len()
    }
}

/// Splits documents into words and sentences with a `Segmenter`
#[derive(Debug)]
pub struct Tokenizer<'s, S: Segmenter + ?Sized> {
    segmenter: &'s S,
}

impl<'s, S: Segmenter + ?Sized> Tokenizer<'s, S> {
    pub fn new(segmenter: &'s S) -> Self {
        Self { segmenter }
    }

    /// Tokenize all documents in order
    pub fn tokenize(&self, documents: &[Document]) -> TokenizedCorpus {
        let mut corpus = TokenizedCorpus::default();
        for doc in documents {
            let start_words = corpus.words.len();
            for span in self.segmenter.split_sentences(&doc.text) {
                let (sentence, words) = self.build_sentence(doc, span);
                if self.segmenter.words_from_sentences() {
                    corpus.words.extend(words);
                }
                corpus.sentences.push(sentence);
            }
            if !self.segmenter.words_from_sentences() {
                corpus.words.extend(
                    self.segmenter
                        .split_words(&doc.text)
                        .into_iter()
                        .map(fold),
                );
            }
            debug!(
                document = %doc.name,
                words = corpus.words.len() - start_words,
                "tokenized document"
            );
        }
        corpus
    }

    /// Sentences of one document
    pub fn sentences(&self, doc: &Document) -> Vec<Sentence> {
        self.segmenter
            .split_sentences(&doc.text)
            .into_iter()
            .map(|span| self.build_sentence(doc, span).0)
            .collect()
    }

    /// Build a sentence and return its folded words in token order
    fn build_sentence(&self, doc: &Document, span: Span<'_>) -> (Sentence, Vec<String>) {
        let words: Vec<String> = self
            .segmenter
            .split_words(span.text)
            .into_iter()
            .map(fold)
            .collect();
        let sentence = Sentence {
            text: span.text.to_string(),
            document: doc.name.clone(),
            offset: span.offset,
            words: words.iter().cloned().collect(),
        };
        (sentence, words)
    }
}

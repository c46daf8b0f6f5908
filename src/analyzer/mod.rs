pub mod document;
pub mod matcher;
pub mod ranker;
pub mod report;
pub mod segment;
pub mod term;
pub mod tokenizer;

use tracing::{debug, info};

use crate::error::{HashtagError, Result};
use document::{Document, NameRc};
use matcher::{MatchStrategy, SentenceMatcher};
use ranker::{rank, WordFrequency};
use report::{build_reports, WordReport};
use segment::{Segmenter, Strategy};
use tokenizer::{TokenizedCorpus, Tokenizer};

/// Word analyzer
/// Holds the documents of one run and turns them into word reports.
///
/// `WordAnalyzer<S>` is generic over the segmentation engine `S`.
/// `Strategy` (the default) picks the engine at runtime.
#[derive(Debug, Clone)]
pub struct WordAnalyzer<S = Strategy>
where
    S: Segmenter,
{
    /// Documents in insertion order
    pub documents: Vec<Document>,
    segmenter: S,
    match_strategy: MatchStrategy,
}

impl<S> WordAnalyzer<S>
where
    S: Segmenter,
{
    /// Create a new WordAnalyzer instance
    pub fn new(segmenter: S) -> Self {
        Self {
            documents: Vec::new(),
            segmenter,
            match_strategy: MatchStrategy::default(),
        }
    }

    /// set the sentence matching strategy
    pub fn with_match_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.match_strategy = strategy;
        self
    }

    /// Add a document
    /// A document with the same name is replaced in place.
    pub fn add_doc(&mut self, name: impl Into<NameRc>, text: impl Into<String>) {
        self.add_document(Document::new(name, text));
    }

    pub fn add_document(&mut self, doc: Document) {
        if let Some(existing) = self.documents.iter_mut().find(|d| d.name == doc.name) {
            debug!(document = %doc.name, "replacing document");
            *existing = doc;
        } else {
            self.documents.push(doc);
        }
    }

    /// Check if a document with the given name exists
    pub fn contains_doc(&self, name: &str) -> bool {
        self.documents.iter().any(|d| &*d.name == name)
    }

    pub fn doc_num(&self) -> usize {
        self.documents.len()
    }

    /// Split every document into words and sentences
    pub fn tokenize(&self) -> TokenizedCorpus {
        Tokenizer::new(&self.segmenter).tokenize(&self.documents)
    }

    /// Top `n` words of the loaded documents
    pub fn rank(&self, n: usize) -> Result<Vec<WordFrequency>> {
        self.check_ready(n)?;
        rank(&self.tokenize().words, n)
    }

    /// Run the whole pipeline
    /// Returns one report per top-`n` word, in rank order.
    pub fn analyze(&self, n: usize) -> Result<Vec<WordReport>> {
        self.check_ready(n)?;
        let corpus = self.tokenize();
        info!(
            documents = self.documents.len(),
            words = corpus.word_num(),
            sentences = corpus.sentence_num(),
            "tokenized corpus"
        );
        let ranked = rank(&corpus.words, n)?;
        let matcher = SentenceMatcher::new(&self.segmenter, &self.documents, &corpus, self.match_strategy);
        let reports = build_reports(&ranked, &matcher)?;
        debug!(reports = reports.len(), strategy = ?matcher.strategy(), "built reports");
        Ok(reports)
    }

    fn check_ready(&self, n: usize) -> Result<()> {
        if n == 0 {
            return Err(HashtagError::invalid_argument(
                "number of words to rank must be greater than zero",
            ));
        }
        if self.documents.is_empty() {
            return Err(HashtagError::invalid_argument("no documents to analyze"));
        }
        Ok(())
    }
}

impl Default for WordAnalyzer<Strategy> {
    fn default() -> Self {
        Self::new(Strategy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::html::highlight;
    use crate::utils::whole_word::WholeWord;

    fn whole_word_check(text: &str, word: &str) -> bool {
        WholeWord::new(word).map(|ww| ww.is_match(text)).unwrap_or(false)
    }

    fn sentence_texts(report: &WordReport) -> Vec<(&str, &str)> {
        report
            .sentences
            .iter()
            .map(|s| (&*s.document, s.text.as_str()))
            .collect()
    }

    #[test]
    fn cat_scenario() {
        let mut analyzer = WordAnalyzer::<Strategy>::default();
        analyzer.add_doc("a.txt", "The cat sat. The dog ran. The cat slept.");
        let reports = analyzer.analyze(2).unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!((reports[0].word.as_str(), reports[0].count), ("the", 3));
        assert_eq!((reports[1].word.as_str(), reports[1].count), ("cat", 2));
        assert_eq!(
            sentence_texts(&reports[1]),
            vec![("a.txt", "The cat sat."), ("a.txt", "The cat slept.")]
        );
    }

    #[test]
    fn birds_scenario_counts_each_document() {
        for strategy in [MatchStrategy::Tokens, MatchStrategy::Rescan] {
            let mut analyzer = WordAnalyzer::<Strategy>::default().with_match_strategy(strategy);
            analyzer.add_doc("one.txt", "Birds fly high.");
            analyzer.add_doc("two.txt", "Birds fly high.");
            let reports = analyzer.analyze(3).unwrap();
            let fly = reports.iter().find(|r| r.word == "fly").unwrap();
            assert_eq!(fly.sentences.len(), 2);
            assert_eq!(fly.documents.len(), 2);
        }
    }

    #[test]
    fn no_false_positive_substrings() {
        let mut analyzer = WordAnalyzer::<Strategy>::default();
        analyzer.add_doc("a.txt", "A cat. A cat. The category is wide. Concatenate it.");
        for strategy in [MatchStrategy::Tokens, MatchStrategy::Rescan] {
            let analyzer = analyzer.clone().with_match_strategy(strategy);
            let reports = analyzer.analyze(10).unwrap();
            for report in &reports {
                for s in &report.sentences {
                    assert!(whole_word_check(&s.text, &report.word), "{} in {}", report.word, s.text);
                }
                let origins: indexmap::IndexSet<NameRc> =
                    report.sentences.iter().map(|s| s.document.clone()).collect();
                assert_eq!(origins, report.documents);
            }
            let cat = reports.iter().find(|r| r.word == "cat").unwrap();
            assert_eq!(cat.sentences.len(), 2);
        }
    }

    #[test]
    fn expanding_case_folds_still_match_and_highlight() {
        for strategy in [MatchStrategy::Tokens, MatchStrategy::Rescan] {
            let mut analyzer = WordAnalyzer::<Strategy>::default().with_match_strategy(strategy);
            analyzer.add_doc("a.txt", "İstanbul is big. İstanbul is old. Go now.");
            let reports = analyzer.analyze(1).unwrap();

            assert_eq!(reports[0].word, "i\u{307}stanbul");
            assert_eq!(reports[0].count, 2);
            assert_eq!(reports[0].sentences.len(), 2, "{strategy:?}");
            let word = WholeWord::new(&reports[0].word).unwrap();
            for s in &reports[0].sentences {
                assert!(highlight(&s.text, &word).starts_with("<b>İstanbul</b> is"), "{strategy:?}");
            }
        }
    }

    #[test]
    fn analysis_is_idempotent() {
        let mut analyzer = WordAnalyzer::new(Strategy::Unicode);
        analyzer.add_doc("a.txt", "It is 3.5 miles. It's far! Is it?");
        analyzer.add_doc("b.txt", "Far away it is.");
        assert_eq!(analyzer.analyze(4).unwrap(), analyzer.analyze(4).unwrap());
    }

    #[test]
    fn large_n_returns_all_words() {
        let mut analyzer = WordAnalyzer::<Strategy>::default();
        analyzer.add_doc("a.txt", "One two two.");
        let reports = analyzer.analyze(100).unwrap();
        let words: Vec<&str> = reports.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["two", "one"]);
    }

    #[test]
    fn invalid_arguments_are_rejected() {
        let analyzer = WordAnalyzer::<Strategy>::default();
        assert!(matches!(
            analyzer.analyze(3),
            Err(HashtagError::InvalidArgument { .. })
        ));
        let mut analyzer = analyzer;
        analyzer.add_doc("a.txt", "Some text.");
        assert!(matches!(
            analyzer.analyze(0),
            Err(HashtagError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn re_adding_a_name_replaces_the_document() {
        let mut analyzer = WordAnalyzer::<Strategy>::default();
        analyzer.add_doc("a.txt", "old old.");
        analyzer.add_doc("b.txt", "other.");
        analyzer.add_doc("a.txt", "new.");
        assert_eq!(analyzer.doc_num(), 2);
        assert!(analyzer.contains_doc("a.txt"));
        assert_eq!(analyzer.documents[0].text, "new.");
        let ranked = analyzer.rank(5).unwrap();
        assert!(ranked.iter().all(|w| w.word != "old"));
    }
}


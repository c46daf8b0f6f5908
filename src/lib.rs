/// This crate finds the most frequent words of a document set and the
/// sentences each of them appears in.
pub mod analyzer;
pub mod config;
pub mod error;
pub mod loader;
pub mod render;
pub mod utils;

/// Word Analyzer
/// The top-level struct of this crate.
/// It holds the documents of one run and turns them into word reports.
///
/// The pipeline runs in four stages:
/// - tokenize every document into case-folded words and sentences
/// - rank the words by frequency, ties in first-seen order
/// - match each ranked word back to the sentences containing it
/// - collect the matches into one `WordReport` per word
///
/// `WordAnalyzer<S>` is generic over the segmentation engine `S`;
/// `Strategy` selects one at runtime.
pub use analyzer::WordAnalyzer;

/// Segmentation engines
/// `Segmenter` splits text into sentences and words.
///
/// Two engines are provided:
/// - Pattern: fixed regular expressions, approximate by nature
/// - Unicode: UAX #29 sentence and word boundaries
///
/// `Strategy` wraps both and is what configuration selects.
pub use analyzer::segment::{PatternSegmenter, Segmenter, SentenceSegmenter, Strategy, UnicodeSegmenter, WordSegmenter};

/// Sentence matching strategy
/// - Tokens: membership in the sentence's pre-tokenized words
/// - Rescan: whole-word regex over the re-split documents
pub use analyzer::matcher::{MatchStrategy, SentenceMatcher};

/// Data model
/// - `Document`: a named text
/// - `Sentence`: a slice of one document with its source name
/// - `WordFrequency`: a ranked word
/// - `WordReport`: a ranked word with its documents and sentences
pub use analyzer::document::{Document, Sentence};
pub use analyzer::ranker::{rank, WordFrequency};
pub use analyzer::report::WordReport;

/// Term Frequency structure
/// Counts term occurrences in first-seen order.
pub use analyzer::term::TermFrequency;

pub use analyzer::tokenizer::{TokenizedCorpus, Tokenizer};
pub use config::Config;
pub use error::{HashtagError, Result};
pub use loader::{load_documents, ReadPolicy};
pub use render::{write_report, ReportFormat};

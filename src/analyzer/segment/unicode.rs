use unicode_segmentation::UnicodeSegmentation;

use super::{has_alphanumeric, Segmenter, SentenceSegmenter, Span, WordSegmenter};

/// Segmenter backed by the Unicode text-segmentation model (UAX #29)
///
/// Handles decimals and contractions, and keeps unterminated trailing text as
/// a sentence. Word bounds that are pure punctuation or whitespace are
/// discarded. The counting stream is taken from the sentences.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSegmenter;

impl SentenceSegmenter for UnicodeSegmenter {
    fn split_sentences<'a>(&self, text: &'a str) -> Vec<Span<'a>> {
        text.split_sentence_bound_indices()
            .filter_map(|(start, raw)| {
                let lead = raw.len() - raw.trim_start().len();
                let trimmed = raw.trim();
                if !has_alphanumeric(trimmed) {
                    return None;
                }
                Some(Span {
                    offset: start + lead,
                    text: trimmed,
                })
            })
            .collect()
    }
}

impl WordSegmenter for UnicodeSegmenter {
    fn split_words<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_word_bounds()
            .filter(|w| has_alphanumeric(w))
            .collect()
    }
}

impl Segmenter for UnicodeSegmenter {
    fn words_from_sentences(&self) -> bool {
        true
    }
}

use once_cell::sync::Lazy;
use regex::Regex;

use super::{has_alphanumeric, Segmenter, SentenceSegmenter, Span, WordSegmenter};

/// shortest run ending in a terminator with no terminator inside
static SENTENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^.?!]*[.?!]").unwrap());

/// capital abbreviation, apostrophe word, plain word (in that priority)
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]\.|\w+'\w+|\w+").unwrap());

/// Regular-expression segmenter
///
/// Sentences end at `.`, `?` or `!`. This breaks on abbreviations ("Dr.") and
/// decimals ("3.14"); such spans are kept as they come out, never rejected.
///
/// Words are one of:
/// - a run of word characters with at most one internal apostrophe ("don't")
/// - a capital letter followed by a period ("U.")
/// - a single letter preceded by whitespace or the start of the text
///
/// Punctuation-adjacent single letters ("(a)") are not counted.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternSegmenter;

impl SentenceSegmenter for PatternSegmenter {
    fn split_sentences<'a>(&self, text: &'a str) -> Vec<Span<'a>> {
        SENTENCE_RE
            .find_iter(text)
            .filter_map(|m| {
                let raw = m.as_str();
                let trimmed = raw.trim_start();
                if !has_alphanumeric(trimmed) {
                    return None;
                }
                Some(Span {
                    offset: m.start() + (raw.len() - trimmed.len()),
                    text: trimmed,
                })
            })
            .collect()
    }
}

impl WordSegmenter for PatternSegmenter {
    fn split_words<'a>(&self, text: &'a str) -> Vec<&'a str> {
        WORD_RE
            .find_iter(text)
            .filter(|m| {
                let mut chars = m.as_str().chars();
                let single = chars.next().is_some() && chars.next().is_none();
                if !single {
                    return true;
                }
                // the match is maximal, so only the left side needs checking
                text[..m.start()]
                    .chars()
                    .next_back()
                    .map_or(true, char::is_whitespace)
            })
            .map(|m| m.as_str())
            .collect()
    }
}

impl Segmenter for PatternSegmenter {}

use std::ops::Range;

use regex::Regex;

use super::fold::{fold, FoldedText};
use crate::error::{HashtagError, Result};

/// regex `\w` minus combining marks
#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Case-insensitive whole-word finder for one word
///
/// Text and word are compared after `fold`, the same rule the tokenizer
/// counts with. An occurrence counts only if the characters on both sides are
/// not word characters (or are string edges), so "cat" never matches
/// "category". The word is escaped before it is compiled.
#[derive(Debug, Clone)]
pub struct WholeWord {
    re: Regex,
}

impl WholeWord {
    pub fn new(word: &str) -> Result<Self> {
        if word.is_empty() {
            return Err(HashtagError::invalid_argument("cannot match an empty word"));
        }
        let re = Regex::new(&regex::escape(&fold(word))).map_err(|source| HashtagError::Pattern {
            word: word.to_string(),
            source,
        })?;
        Ok(Self { re })
    }

    /// Byte ranges of every whole-word occurrence in `text`, left to right
    pub fn find_ranges(&self, text: &str) -> Vec<Range<usize>> {
        let folded = FoldedText::new(text);
        let haystack = folded.as_str();
        let mut ranges = Vec::new();
        let mut start = 0;
        while let Some(m) = self.re.find_at(haystack, start) {
            let found = folded
                .source_range(m.range())
                .filter(|r| Self::bounded(text, r.start, r.end));
            match found {
                Some(range) => {
                    ranges.push(range);
                    start = m.end();
                }
                // retry one character later; a shifted occurrence may still fit
                None => {
                    start = m.start()
                        + haystack[m.start()..]
                            .chars()
                            .next()
                            .map_or(1, char::len_utf8);
                }
            }
            if start > haystack.len() {
                break;
            }
        }
        ranges
    }

    pub fn is_match(&self, text: &str) -> bool {
        !self.find_ranges(text).is_empty()
    }

    fn bounded(text: &str, start: usize, end: usize) -> bool {
        let before = text[..start].chars().next_back().map_or(true, |c| !is_word_char(c));
        let after = text[end..].chars().next().map_or(true, |c| !is_word_char(c));
        before && after
    }
}

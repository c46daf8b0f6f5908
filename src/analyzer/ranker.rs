use serde::Serialize;

use super::term::TermFrequency;
use crate::error::{HashtagError, Result};

/// A ranked word and its count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: u64,
}

/// Rank case-folded words by frequency
///
/// Returns at most `n` entries, most frequent first. Words with equal counts
/// keep the order in which they first appear in `words`.
pub fn rank<T>(words: &[T], n: usize) -> Result<Vec<WordFrequency>>
where
    T: AsRef<str>,
{
    if n == 0 {
        return Err(HashtagError::invalid_argument(
            "number of words to rank must be greater than zero",
        ));
    }
    let freq = TermFrequency::from(words);
    Ok(freq
        .most_common(n)
        .into_iter()
        .map(|(word, count)| WordFrequency { word, count })
        .collect())
}

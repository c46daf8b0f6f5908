use std::ops::Range;

/// Case-fold a word for counting and comparison
///
/// Lowercases one char at a time, so the same rule applies to a lone word and
/// to a word inside running text.
#[inline]
pub fn fold(word: &str) -> String {
    word.chars().flat_map(char::to_lowercase).collect()
}

/// Folded copy of a text that can map folded ranges back to the source
#[derive(Debug, Clone)]
pub struct FoldedText {
    folded: String,
    /// (folded offset, source offset) at the start of every source char, plus the end
    bounds: Vec<(usize, usize)>,
}

impl FoldedText {
    pub fn new(source: &str) -> Self {
        let mut folded = String::with_capacity(source.len());
        let mut bounds = Vec::with_capacity(source.len() + 1);
        for (offset, c) in source.char_indices() {
            bounds.push((folded.len(), offset));
            folded.extend(c.to_lowercase());
        }
        bounds.push((folded.len(), source.len()));
        Self { folded, bounds }
    }

    pub fn as_str(&self) -> &str {
        &self.folded
    }

    /// Source range of a folded range
    /// None if either end falls inside the fold of a single source char.
    pub fn source_range(&self, range: Range<usize>) -> Option<Range<usize>> {
        Some(self.source_offset(range.start)?..self.source_offset(range.end)?)
    }

    fn source_offset(&self, folded: usize) -> Option<usize> {
        self.bounds
            .binary_search_by_key(&folded, |&(f, _)| f)
            .ok()
            .map(|i| self.bounds[i].1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_expands_dotted_capital_i() {
        assert_eq!(fold("İstanbul"), "i\u{307}stanbul");
        assert_eq!(fold("ΟΔΟΣ"), "οδοσ");
        assert_eq!(fold(&fold("İstanbul")), fold("İstanbul"));
    }

    #[test]
    fn maps_ranges_back_to_source() {
        let source = "Go İstanbul";
        let text = FoldedText::new(source);
        assert_eq!(text.as_str(), "go i\u{307}stanbul");
        let start = text.as_str().find('i').unwrap();
        let folded = start..text.as_str().len();
        let range = text.source_range(folded).unwrap();
        assert_eq!(&source[range], "İstanbul");
    }

    #[test]
    fn rejects_ranges_splitting_one_char() {
        let text = FoldedText::new("İx");
        // "i" alone is only part of the fold of "İ"
        assert_eq!(text.source_range(0..1), None);
        assert_eq!(text.source_range(0..3), Some(0..2));
    }
}

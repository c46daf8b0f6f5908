use crate::analyzer::report::WordReport;

/// Plain-text ranking printed to the terminal
pub fn format_stats(requested: usize, reports: &[WordReport]) -> String {
    let mut out = format!("Top {requested} most common words:\nWord : Frequency\n");
    for (rank, report) in reports.iter().enumerate() {
        out.push_str(&format!("{}. {} : {}\n", rank + 1, report.word, report.count));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::ranker::WordFrequency;

    #[test]
    fn lists_words_by_rank() {
        let reports = vec![
            WordReport::new(&WordFrequency { word: "the".into(), count: 3 }, Vec::new()),
            WordReport::new(&WordFrequency { word: "cat".into(), count: 2 }, Vec::new()),
        ];
        assert_eq!(
            format_stats(5, &reports),
            "Top 5 most common words:\nWord : Frequency\n1. the : 3\n2. cat : 2\n"
        );
    }
}

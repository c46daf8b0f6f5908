use std::borrow::Cow;

use crate::analyzer::report::WordReport;
use crate::error::Result;
use crate::utils::whole_word::WholeWord;

const HEAD: &str = "<html>\n<head>\n<meta charset=\"utf-8\"/>\n<style>\n\
table, th, td {\nborder: 1px solid black;\nborder-collapse: collapse;\n} \
th, td {\npadding: 5px;\ntext-align: left;}\n</style>\n</head>\n";

/// Escape text for HTML element content and attribute values
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(&['&', '<', '>', '"', '\''][..]) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Escape `sentence` and wrap every whole-word occurrence in `<b>`
///
/// Matching runs on the raw text, so escape sequences never produce matches.
pub fn highlight(sentence: &str, word: &WholeWord) -> String {
    let mut out = String::with_capacity(sentence.len() + 16);
    let mut last = 0;
    for range in word.find_ranges(sentence) {
        out.push_str(&escape(&sentence[last..range.start]));
        out.push_str("<b>");
        out.push_str(&escape(&sentence[range.clone()]));
        out.push_str("</b>");
        last = range.end;
    }
    out.push_str(&escape(&sentence[last..]));
    out
}

/// Render the reports as one HTML table
pub fn render_html(title: &str, reports: &[WordReport]) -> Result<String> {
    let mut html = String::from(HEAD);
    html.push_str("<body>\n");
    html.push_str(&format!("<h2>{}</h2>\n", escape(title)));
    html.push_str("<table style=\"width:100%\">\n");
    html.push_str(
        "<tr>\n<th>Word(#)</th>\n<th>Documents</th>\n<th>Sentences containing the word</th>\n</tr>\n",
    );
    for report in reports {
        render_row(&mut html, report)?;
    }
    html.push_str("</table>\n</body>\n</html>\n");
    Ok(html)
}

fn render_row(html: &mut String, report: &WordReport) -> Result<()> {
    let word = WholeWord::new(&report.word)?;
    let documents = report
        .documents
        .iter()
        .map(|d| escape(d).into_owned())
        .collect::<Vec<_>>()
        .join(", ");

    html.push_str("<tr>\n");
    html.push_str(&format!(
        "<td valign=\"top\">{} ({})</td>\n",
        escape(&report.word),
        report.count
    ));
    html.push_str(&format!("<td valign=\"top\">{documents}</td>\n"));
    html.push_str("<td>\n");
    for sentence in &report.sentences {
        html.push_str(&highlight(&sentence.text, &word));
        html.push_str("<br>\n");
    }
    html.push_str("</td>\n</tr>\n");
    Ok(())
}

//! HTML rendering of a session view.

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use headlines::constants::{MAX_TIMEOUT_SECS, MIN_TIMEOUT_SECS};

use crate::session::{Notice, ResultRow};

/// Everything one page render needs.
#[derive(Debug, Clone)]
pub struct PageView {
    pub headlines: Vec<String>,
    pub api_url: String,
    pub timeout_secs: u64,
    pub notice: Option<Notice>,
    pub results: Option<Vec<ResultRow>>,
}

const STYLE: &str = "
body { font-family: system-ui, sans-serif; margin: 0; display: flex; }
aside { width: 18rem; padding: 1rem; background: #f4f4f6; min-height: 100vh; }
main { flex: 1; padding: 1rem 2rem; }
.row { display: flex; gap: .5rem; margin-bottom: .4rem; }
.row input[type=text] { flex: 1; }
.controls { display: flex; gap: .5rem; margin: .5rem 0 1rem; }
.notice { padding: .6rem .8rem; border-radius: 4px; margin: .8rem 0; }
.success { background: #e3f6e5; }
.warning { background: #fff5d6; }
.error { background: #fde2e1; }
table { border-collapse: collapse; width: 100%; }
th, td { border: 1px solid #ddd; padding: .3rem .5rem; text-align: left; }
";

pub fn render_page(view: &PageView) -> String {
    let mut html = String::new();

    let _ = write!(
        html,
        "<!doctype html><html><head><meta charset=\"utf-8\">\
         <title>Headline Scoring</title><style>{STYLE}</style></head><body>"
    );

    render_settings(&mut html, view);

    html.push_str("<main><h1>Headline Sentiment Scoring</h1>");
    html.push_str("<p>Edit headlines, remove lines, then score them against the scoring API.</p>");

    render_headlines(&mut html, &view.headlines);
    render_bulk(&mut html);

    if let Some(notice) = &view.notice {
        let _ = write!(
            html,
            "<div class=\"notice {}\">{}</div>",
            notice.level.css_class(),
            encode_text(&notice.text)
        );
    }

    if let Some(rows) = &view.results {
        render_results(&mut html, rows);
    }

    html.push_str("</main></body></html>");
    html
}

fn render_settings(html: &mut String, view: &PageView) {
    let _ = write!(
        html,
        "<aside><h2>API Settings</h2>\
         <form method=\"post\" action=\"/settings\">\
         <label>Base URL<br><input type=\"text\" name=\"api_url\" value=\"{}\"></label><br><br>\
         <label>Timeout (seconds)<br>\
         <input type=\"number\" name=\"timeout_secs\" min=\"{}\" max=\"{}\" value=\"{}\"></label><br><br>\
         <button type=\"submit\">Save settings</button></form></aside>",
        encode_double_quoted_attribute(&view.api_url),
        MIN_TIMEOUT_SECS,
        MAX_TIMEOUT_SECS,
        view.timeout_secs
    );
}

fn render_headlines(html: &mut String, headlines: &[String]) {
    html.push_str("<h2>Headlines</h2><form method=\"post\" action=\"/headlines\">");
    // Implicit submission (Enter in a field) uses the first submit button.
    html.push_str("<button name=\"action\" value=\"save\" hidden aria-hidden=\"true\"></button>");
    html.push_str(
        "<div class=\"controls\">\
         <button name=\"action\" value=\"add\">Add Headline</button>\
         <button name=\"action\" value=\"remove_empty\">Remove Empty</button>\
         <button name=\"action\" value=\"clear\">Clear All</button></div>",
    );

    for (idx, headline) in headlines.iter().enumerate() {
        let _ = write!(
            html,
            "<div class=\"row\"><label for=\"h{idx}\">Headline {}</label>\
             <input type=\"text\" id=\"h{idx}\" name=\"headline\" value=\"{}\">\
             <button name=\"delete\" value=\"{idx}\">Delete</button></div>",
            idx + 1,
            encode_double_quoted_attribute(headline)
        );
    }

    html.push_str(
        "<div class=\"controls\">\
         <button name=\"action\" value=\"save\">Save edits</button>\
         <button name=\"action\" value=\"score\"><strong>Score Headlines</strong></button></div>\
         </form>",
    );
}

fn render_bulk(html: &mut String) {
    html.push_str(
        "<details><summary>Bulk Paste Headlines</summary>\
         <form method=\"post\" action=\"/bulk\">\
         <textarea name=\"text\" rows=\"6\" cols=\"80\" placeholder=\"Paste one headline per line\"></textarea><br>\
         <button type=\"submit\">Load Pasted Lines</button></form></details>",
    );
}

fn render_results(html: &mut String, rows: &[ResultRow]) {
    html.push_str("<table><thead><tr><th>headline</th><th>label</th></tr></thead><tbody>");
    for row in rows {
        let _ = write!(
            html,
            "<tr><td>{}</td><td>{}</td></tr>",
            encode_text(&row.headline),
            encode_text(&row.label)
        );
    }
    html.push_str("</tbody></table>");
}

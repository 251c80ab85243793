//! Markdown-subset formatter: assistant text to HTML fragments for display.
//!
//! Handles bold, italic, links, headers, `- ` lists, and line breaks — nothing
//! more. Rule order is load-bearing: bold before italic (so consumed `**` pairs
//! are not re-matched as single `*`), longest header marker first (so `#` does
//! not swallow `###` lines), and headers/lists before the final newline
//! conversion (line-anchored rules need the newlines still present).
//!
//! Pre-existing HTML in the source text is passed through unescaped; completion
//! output is treated as trusted display content. Known gap.

use once_cell::sync::Lazy;
use regex::Regex;

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.*?)\*").unwrap());
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").unwrap());
static H3: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^### (.*?)$").unwrap());
static H2: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^## (.*?)$").unwrap());
static H1: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^# (.*?)$").unwrap());
static LIST_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^- (.*?)$").unwrap());
static ITEM_GAP: Lazy<Regex> = Lazy::new(|| Regex::new(r"</li>\s*<li>").unwrap());
static ITEM_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:<li>.*?</li>)+").unwrap());

/// Formats one block of assistant-authored text into an HTML fragment.
///
/// Applies, in order: bold, italic, links, headers (h3/h2/h1), list items,
/// list grouping (each run of adjacent items wrapped in one `<ul>`), then
/// remaining newlines to `<br>`. Text without markers passes through unchanged
/// apart from the newline conversion.
pub fn format_message(text: &str) -> String {
    let text = BOLD.replace_all(text, "<strong>$1</strong>");
    let text = ITALIC.replace_all(&text, "<em>$1</em>");
    let text = LINK.replace_all(&text, r#"<a href="$2" target="_blank">$1</a>"#);

    let text = H3.replace_all(&text, "<h3>$1</h3>");
    let text = H2.replace_all(&text, "<h2>$1</h2>");
    let text = H1.replace_all(&text, "<h1>$1</h1>");

    let text = LIST_ITEM.replace_all(&text, "<li>$1</li>");
    // Collapse whitespace between adjacent items so one run matches as a unit.
    let text = ITEM_GAP.replace_all(&text, "</li><li>");
    let text = ITEM_RUN.replace_all(&text, |caps: &regex::Captures| {
        format!("<ul>{}</ul>", &caps[0])
    });

    text.replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through_modulo_newline_conversion() {
        assert_eq!(format_message("hello world"), "hello world");
        assert_eq!(format_message("line one\nline two"), "line one<br>line two");
    }

    #[test]
    fn bold_and_italic_wrap_their_spans() {
        assert_eq!(format_message("**hi**"), "<strong>hi</strong>");
        assert_eq!(format_message("*hi*"), "<em>hi</em>");
        assert_eq!(
            format_message("mix **b** and *i* inline"),
            "mix <strong>b</strong> and <em>i</em> inline"
        );
    }

    /// Bold resolves before italic: the lone `*` inside a consumed `**` pair is
    /// not independently italicized.
    #[test]
    fn bold_consumes_markers_before_italic() {
        let html = format_message("**a * b**");
        assert_eq!(html, "<strong>a * b</strong>");
        assert!(!html.contains("<em>"));
    }

    #[test]
    fn links_open_in_a_new_browsing_context() {
        assert_eq!(
            format_message("[Rust Book](https://doc.rust-lang.org/book/)"),
            r#"<a href="https://doc.rust-lang.org/book/" target="_blank">Rust Book</a>"#
        );
    }

    #[test]
    fn headers_map_by_marker_length() {
        assert_eq!(format_message("# Title"), "<h1>Title</h1>");
        assert_eq!(format_message("## Section"), "<h2>Section</h2>");
        assert_eq!(format_message("### Detail"), "<h3>Detail</h3>");
    }

    /// Longest marker first: a `###` line must not be eaten by the `#` rule.
    #[test]
    fn triple_hash_line_is_not_swallowed_by_single_hash_rule() {
        let html = format_message("### Week 1\nbody");
        assert_eq!(html, "<h3>Week 1</h3><br>body");
        assert!(!html.contains("<h1>"));
    }

    #[test]
    fn header_only_matches_at_line_start() {
        assert_eq!(format_message("not a # header"), "not a # header");
    }

    /// Three adjacent items produce exactly one wrapping list, items in order.
    #[test]
    fn adjacent_list_items_grouped_into_one_list() {
        let html = format_message("- a\n- b\n- c");
        assert_eq!(html, "<ul><li>a</li><li>b</li><li>c</li></ul>");
        assert_eq!(html.matches("<ul>").count(), 1);
    }

    /// Items separated by a non-item line form two independent lists.
    #[test]
    fn separated_item_runs_form_separate_lists() {
        let html = format_message("- a\ntext\n- b");
        assert_eq!(
            html,
            "<ul><li>a</li></ul><br>text<br><ul><li>b</li></ul>"
        );
        assert_eq!(html.matches("<ul>").count(), 2);
    }

    #[test]
    fn inline_emphasis_survives_inside_list_items_and_headers() {
        assert_eq!(
            format_message("- **bold** item"),
            "<ul><li><strong>bold</strong> item</li></ul>"
        );
        assert_eq!(
            format_message("## *soft* title"),
            "<h2><em>soft</em> title</h2>"
        );
    }

    #[test]
    fn existing_html_is_not_escaped() {
        assert_eq!(format_message("<b>raw</b>"), "<b>raw</b>");
    }

    #[test]
    fn mixed_document_formats_every_rule_once() {
        let input = "# Plan\n**Module 1**: basics\n- read\n- practice\nSee [docs](https://example.com)";
        let html = format_message(input);
        assert!(html.starts_with("<h1>Plan</h1><br>"));
        assert!(html.contains("<strong>Module 1</strong>: basics<br>"));
        assert!(html.contains("<ul><li>read</li><li>practice</li></ul>"));
        assert!(html.contains(r#"<a href="https://example.com" target="_blank">docs</a>"#));
        assert!(!html.contains('\n'));
    }
}

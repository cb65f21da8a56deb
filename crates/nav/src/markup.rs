//! Markup-producing helpers shared by the report pages.
//!
//! Caller-supplied labels and urls are interpolated verbatim — all current
//! inputs are trusted, hard-coded page content.

use pages::PageDescriptor;
use std::fmt::Write;

/// A breadcrumb ancestor: display label plus link target.
#[derive(Clone, Copy, Debug)]
pub struct Crumb<'a> {
    pub name: &'a str,
    pub url: &'a str,
}

pub fn breadcrumb_fragment(current_label: &str, parents: &[Crumb<'_>]) -> String {
    let mut out = String::from("<a href=\"index.html\">Home</a>");
    for parent in parents {
        let _ = write!(
            out,
            " &gt; <a href=\"{}\">{}</a>",
            parent.url, parent.name
        );
    }
    let _ = write!(out, " &gt; <span>{current_label}</span>");
    out
}

pub fn page_nav_fragment(
    prev: Option<&PageDescriptor>,
    next: Option<&PageDescriptor>,
) -> String {
    let mut out = String::new();
    match prev {
        Some(page) => {
            let _ = write!(
                out,
                "<a href=\"{}\" class=\"nav-button secondary\">← Previous: {}</a>",
                page.url, page.name
            );
        }
        None => out.push_str("<div></div>"),
    }
    match next {
        Some(page) => {
            let _ = write!(
                out,
                "<a href=\"{}\" class=\"nav-button\">Next: {} →</a>",
                page.url, page.name
            );
        }
        None => out.push_str("<div></div>"),
    }
    out
}

pub fn status_badge(status: &str, text: &str) -> String {
    format!("<span class=\"status-badge status-{status}\">{text}</span>")
}

/// No escaping and no column-count validation; rows are rendered as given.
pub fn comparison_table(rows: &[Vec<&str>], headers: &[&str]) -> String {
    let mut out = String::from("<table class=\"comparison-table\"><thead><tr>");
    for header in headers {
        let _ = write!(out, "<th>{header}</th>");
    }
    out.push_str("</tr></thead><tbody>");
    for row in rows {
        out.push_str("<tr>");
        for cell in row {
            let _ = write!(out, "<td>{cell}</td>");
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
    out
}

//! Markup-fragment tokenizer and tree builder with a constrained, practical
//! tag-name character set.
//!
//! Supported tag-name characters (ASCII only): `[A-Za-z0-9:_-]`. Attribute
//! names use the same ASCII character class.
//!
//! This is not an HTML5 parser and does not try to be: the page fixtures and
//! every fragment the markup helpers emit stay inside this subset. Known
//! intentional limitations:
//! - No rawtext handling (`<script>`/`<style>` content is not special-cased).
//! - An end tag with no matching open element closes everything open.
//! - Entity decoding is the narrow named subset in `entities.rs`.

use crate::entities::decode_entities;
use crate::{Id, Node};
use memchr::memchr;

const COMMENT_START: &str = "<!--";
const COMMENT_END: &str = "-->";

#[derive(Debug)]
enum Token {
    Doctype(String),
    StartTag {
        name: String,
        attributes: Vec<(String, Option<String>)>,
        self_closing: bool,
    },
    EndTag(String),
    Comment(String),
    Text(String),
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b':'
}

fn is_void_element(name: &str) -> bool {
    matches!(
        name,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

fn starts_with_ignore_ascii_case_at(haystack: &[u8], start: usize, needle: &[u8]) -> bool {
    haystack.len() >= start + needle.len()
        && haystack[start..start + needle.len()].eq_ignore_ascii_case(needle)
}

fn tokenize(input: &str) -> Vec<Token> {
    let mut out = Vec::new();
    let bytes = input.as_bytes();
    let mut i = 0;
    // Scans by byte; slices are only cut at ASCII structural bytes, so the
    // endpoints stay UTF-8 char boundaries.
    while i < bytes.len() {
        if bytes[i] != b'<' {
            let start = i;
            i = match memchr(b'<', &bytes[i..]) {
                Some(rel) => i + rel,
                None => bytes.len(),
            };
            let decoded = decode_entities(&input[start..i]);
            if !decoded.is_empty() {
                out.push(Token::Text(decoded));
            }
            continue;
        }
        if input[i..].starts_with(COMMENT_START) {
            let body_start = i + COMMENT_START.len();
            match input[body_start..].find(COMMENT_END) {
                Some(end) => {
                    out.push(Token::Comment(input[body_start..body_start + end].to_string()));
                    i = body_start + end + COMMENT_END.len();
                }
                None => {
                    out.push(Token::Comment(input[body_start..].to_string()));
                    i = bytes.len();
                }
            }
            continue;
        }
        if starts_with_ignore_ascii_case_at(bytes, i, b"<!doctype") {
            let rest = &input[i + 2..];
            match rest.find('>') {
                Some(end) => {
                    out.push(Token::Doctype(rest[..end].trim().to_string()));
                    i += 2 + end + 1;
                }
                None => break,
            }
            continue;
        }
        if i + 2 <= bytes.len() && bytes[i + 1] == b'/' {
            let start = i + 2;
            let mut j = start;
            while j < bytes.len() && is_name_byte(bytes[j]) {
                j += 1;
            }
            let name = input[start..j].to_ascii_lowercase();
            while j < bytes.len() && bytes[j] != b'>' {
                j += 1;
            }
            if j < bytes.len() {
                j += 1;
            }
            out.push(Token::EndTag(name));
            i = j;
            continue;
        }
        let start = i + 1;
        let mut j = start;
        while j < bytes.len() && is_name_byte(bytes[j]) {
            j += 1;
        }
        if j == start {
            // Bare '<' that opens nothing; emit as text.
            out.push(Token::Text("<".to_string()));
            i += 1;
            continue;
        }
        let name = input[start..j].to_ascii_lowercase();
        let (attributes, self_closing, next) = tokenize_attributes(input, j);
        log::trace!(target: "dom.fragment", "start tag <{name}> ({} attrs)", attributes.len());
        out.push(Token::StartTag {
            name,
            attributes,
            self_closing,
        });
        i = next;
    }
    out
}

fn tokenize_attributes(input: &str, from: usize) -> (Vec<(String, Option<String>)>, bool, usize) {
    let bytes = input.as_bytes();
    let len = bytes.len();
    let mut attributes = Vec::new();
    let mut self_closing = false;
    let mut k = from;
    loop {
        while k < len && bytes[k].is_ascii_whitespace() {
            k += 1;
        }
        if k >= len {
            break;
        }
        if bytes[k] == b'/' {
            self_closing = true;
            k += 1;
            continue;
        }
        if bytes[k] == b'>' {
            k += 1;
            break;
        }
        let name_start = k;
        while k < len && is_name_byte(bytes[k]) {
            k += 1;
        }
        if k == name_start {
            // Unparseable byte inside a tag; skip it rather than loop forever.
            k += 1;
            continue;
        }
        let attr_name = input[name_start..k].to_ascii_lowercase();
        while k < len && bytes[k].is_ascii_whitespace() {
            k += 1;
        }
        if k < len && bytes[k] == b'=' {
            k += 1;
            while k < len && bytes[k].is_ascii_whitespace() {
                k += 1;
            }
            if k < len && (bytes[k] == b'"' || bytes[k] == b'\'') {
                let quote = bytes[k];
                k += 1;
                let value_start = k;
                while k < len && bytes[k] != quote {
                    k += 1;
                }
                let value = decode_entities(&input[value_start..k]);
                if k < len {
                    k += 1;
                }
                attributes.push((attr_name, Some(value)));
            } else {
                let value_start = k;
                while k < len && !bytes[k].is_ascii_whitespace() && bytes[k] != b'>' && bytes[k] != b'/' {
                    k += 1;
                }
                attributes.push((attr_name, Some(decode_entities(&input[value_start..k]))));
            }
        } else {
            attributes.push((attr_name, None));
        }
    }
    (attributes, self_closing, k)
}

fn parse_inline_style(value: &str) -> Vec<(String, String)> {
    value
        .split(';')
        .filter_map(|decl| {
            let (k, v) = decl.split_once(':')?;
            let k = k.trim();
            let v = v.trim();
            (!k.is_empty() && !v.is_empty()).then(|| (k.to_string(), v.to_string()))
        })
        .collect()
}

fn attach(roots: &mut Vec<Node>, open: &mut [Node], node: Node) {
    match open.last_mut() {
        Some(top) => {
            if let Some(children) = top.children_mut() {
                children.push(node);
            }
        }
        None => roots.push(node),
    }
}

fn build(tokens: Vec<Token>) -> (Option<String>, Vec<Node>) {
    let mut doctype = None;
    let mut roots: Vec<Node> = Vec::new();
    let mut open: Vec<Node> = Vec::new();

    for token in tokens {
        match token {
            Token::Doctype(s) => doctype = Some(s),
            Token::Text(text) => {
                attach(&mut roots, &mut open, Node::Text {
                    id: Id::UNSET,
                    text,
                });
            }
            Token::Comment(text) => {
                attach(&mut roots, &mut open, Node::Comment {
                    id: Id::UNSET,
                    text,
                });
            }
            Token::StartTag {
                name,
                mut attributes,
                self_closing,
            } => {
                // An inline `style` attribute becomes structured style entries
                // so the style utilities and snapshots see one source of truth.
                let mut style = Vec::new();
                if let Some(pos) = attributes.iter().position(|(k, _)| k == "style") {
                    let (_, value) = attributes.remove(pos);
                    if let Some(value) = value {
                        style = parse_inline_style(&value);
                    }
                }
                let node = Node::Element {
                    id: Id::UNSET,
                    name: name.clone(),
                    attributes,
                    style,
                    children: Vec::new(),
                };
                if self_closing || is_void_element(&name) {
                    attach(&mut roots, &mut open, node);
                } else {
                    open.push(node);
                }
            }
            Token::EndTag(name) => {
                while let Some(top) = open.pop() {
                    let matched = top.is_element_named(&name);
                    attach(&mut roots, &mut open, top);
                    if matched {
                        break;
                    }
                }
            }
        }
    }
    // Anything left open closes at end of input.
    while let Some(top) = open.pop() {
        attach(&mut roots, &mut open, top);
    }
    (doctype, roots)
}

/// Parse a markup fragment into sibling nodes. Structural ids stay unset;
/// callers re-run `assign_node_ids` on the enclosing tree.
pub fn parse_fragment(input: &str) -> Vec<Node> {
    let (_, roots) = build(tokenize(input));
    roots
}

/// Parse a whole page into a `Document` node.
pub fn parse_document(input: &str) -> Node {
    let (doctype, children) = build(tokenize(input));
    Node::Document {
        id: Id::UNSET,
        doctype,
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom_utils::attr;

    #[test]
    fn parses_nested_elements_and_text() {
        let roots = parse_fragment("<ul><li><a href=\"a.html\">A</a></li></ul>");
        assert_eq!(roots.len(), 1);
        let Node::Element { name, children, .. } = &roots[0] else {
            panic!("expected element");
        };
        assert_eq!(name, "ul");
        let Node::Element { name, children, .. } = &children[0] else {
            panic!("expected li");
        };
        assert_eq!(name, "li");
        let Node::Element { name, children, .. } = &children[0] else {
            panic!("expected a");
        };
        assert_eq!(name, "a");
        let Node::Text { text, .. } = &children[0] else {
            panic!("expected text");
        };
        assert_eq!(text, "A");
    }

    #[test]
    fn parses_attributes_quoted_unquoted_and_bare() {
        let roots =
            parse_fragment("<button data-dropdown='solutions-dropdown' disabled tabindex=2>x</button>");
        let node = &roots[0];
        assert_eq!(attr(node, "data-dropdown"), Some("solutions-dropdown"));
        assert!(crate::dom_utils::has_attr(node, "disabled"));
        assert_eq!(attr(node, "tabindex"), Some("2"));
    }

    #[test]
    fn decodes_entities_in_text_and_attribute_values() {
        let roots = parse_fragment("<span title=\"a &amp; b\"> &gt; </span>");
        let node = &roots[0];
        assert_eq!(attr(node, "title"), Some("a & b"));
        let Node::Element { children, .. } = node else {
            panic!("expected element");
        };
        let Node::Text { text, .. } = &children[0] else {
            panic!("expected text");
        };
        assert_eq!(text, " > ");
    }

    #[test]
    fn void_and_self_closing_elements_take_no_children() {
        let roots = parse_fragment("<div><br><img src=\"x.png\"/><span>y</span></div>");
        let Node::Element { children, .. } = &roots[0] else {
            panic!("expected div");
        };
        assert_eq!(children.len(), 3);
        assert!(children[0].is_element_named("br"));
        assert!(children[1].is_element_named("img"));
        assert!(children[2].is_element_named("span"));
    }

    #[test]
    fn unclosed_elements_close_at_end_of_input() {
        let roots = parse_fragment("<div><span>open");
        assert_eq!(roots.len(), 1);
        let Node::Element { children, .. } = &roots[0] else {
            panic!("expected div");
        };
        assert!(children[0].is_element_named("span"));
    }

    #[test]
    fn comments_and_doctype_are_captured() {
        let doc = parse_document("<!DOCTYPE html><!-- note --><p>t</p>");
        let Node::Document {
            doctype, children, ..
        } = &doc
        else {
            panic!("expected document");
        };
        assert_eq!(doctype.as_deref(), Some("DOCTYPE html"));
        assert!(matches!(&children[0], Node::Comment { text, .. } if text == " note "));
    }

    #[test]
    fn inline_style_attribute_becomes_style_entries() {
        let roots = parse_fragment("<div style=\"display: none; color:#333\">x</div>");
        let Node::Element { style, attributes, .. } = &roots[0] else {
            panic!("expected element");
        };
        assert_eq!(*style, vec![
            ("display".to_string(), "none".to_string()),
            ("color".to_string(), "#333".to_string()),
        ]);
        assert!(!attributes.iter().any(|(k, _)| k == "style"));
    }

    #[test]
    fn multiple_top_level_siblings_are_preserved_in_order() {
        let roots = parse_fragment("<a href=\"p.html\">p</a><div></div><a href=\"n.html\">n</a>");
        assert_eq!(roots.len(), 3);
        assert!(roots[0].is_element_named("a"));
        assert!(roots[1].is_element_named("div"));
        assert!(roots[2].is_element_named("a"));
    }
}

use crate::Node;
use std::fmt;

/// Deterministic line-based DOM rendering for test comparison and the demo
/// binary. Not a stable public format.
///
/// Rendering rules:
/// - Elements show their name plus `id`/`class` attributes and up to three
///   inline style properties.
/// - Text is trimmed and truncated to 40 characters.
/// - Structural ids are omitted so snapshots survive re-numbering.
#[derive(Debug)]
pub struct DomSnapshot {
    lines: Vec<String>,
}

impl DomSnapshot {
    pub fn new(root: &Node) -> Self {
        let mut lines = Vec::new();
        walk(root, 0, &mut lines);
        Self { lines }
    }

    pub fn as_lines(&self) -> &[String] {
        &self.lines
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for DomSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i != 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

fn first_styles(style: &[(String, String)]) -> String {
    style
        .iter()
        .take(3)
        .map(|(k, v)| format!("{k}: {v};"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn truncate(text: &str) -> String {
    let t = text.replace('\n', " ").trim().to_string();
    if t.chars().count() > 40 {
        let cut: String = t.chars().take(40).collect();
        format!("{cut}…")
    } else {
        t
    }
}

fn walk(node: &Node, depth: usize, out: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    match node {
        Node::Document {
            doctype, children, ..
        } => {
            match doctype {
                Some(dt) => out.push(format!("{indent}<!{dt}>")),
                None => out.push(format!("{indent}#document")),
            }
            for c in children {
                walk(c, depth + 1, out);
            }
        }
        Node::Element {
            name,
            attributes,
            style,
            children,
            ..
        } => {
            let mut line = format!("{indent}<{name}");
            for key in ["id", "class"] {
                if let Some(value) = attributes
                    .iter()
                    .find(|(k, _)| k == key)
                    .and_then(|(_, v)| v.as_deref())
                {
                    if !value.is_empty() {
                        line.push_str(&format!(" {key}=\"{value}\""));
                    }
                }
            }
            line.push('>');
            let styles = first_styles(style);
            if !styles.is_empty() {
                line.push_str(&format!("  /* {styles} */"));
            }
            out.push(line);
            for c in children {
                walk(c, depth + 1, out);
            }
        }
        Node::Text { text, .. } => {
            let t = truncate(text);
            if !t.is_empty() {
                out.push(format!("{indent}\"{t}\""));
            }
        }
        Node::Comment { text, .. } => {
            out.push(format!("{indent}<!-- {} -->", truncate(text)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom_utils::{find_by_dom_id_mut, style_set};
    use crate::fragment::parse_document;

    #[test]
    fn renders_elements_text_and_styles() {
        let mut dom = parse_document("<div id=\"box\" class=\"panel\">hello</div>");
        if let Some(node) = find_by_dom_id_mut(&mut dom, "box") {
            style_set(node, "display", "none");
        }
        let snapshot = DomSnapshot::new(&dom);
        let expected: Vec<String> = [
            "#document",
            "  <div id=\"box\" class=\"panel\">  /* display: none; */",
            "    \"hello\"",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        assert_eq!(snapshot.as_lines(), expected.as_slice());
    }
}

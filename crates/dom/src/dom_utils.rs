use crate::{Id, Node};

pub fn attr<'a>(node: &'a Node, name: &str) -> Option<&'a str> {
    match node {
        Node::Element { attributes, .. } => attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .and_then(|(_, v)| v.as_deref()),
        _ => None,
    }
}

pub fn has_attr(node: &Node, name: &str) -> bool {
    match node {
        Node::Element { attributes, .. } => {
            attributes.iter().any(|(k, _)| k.eq_ignore_ascii_case(name))
        }
        _ => false,
    }
}

pub fn set_attr(node: &mut Node, name: &str, value: Option<String>) {
    if let Node::Element { attributes, .. } = node {
        match attributes
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
        {
            Some(slot) => slot.1 = value,
            None => attributes.push((name.to_string(), value)),
        }
    }
}

// -- Class list (whitespace-separated `class` attribute) ---

pub fn has_class(node: &Node, class: &str) -> bool {
    attr(node, "class")
        .map(|v| v.split_whitespace().any(|c| c == class))
        .unwrap_or(false)
}

pub fn add_class(node: &mut Node, class: &str) {
    if has_class(node, class) {
        return;
    }
    let mut value = attr(node, "class").unwrap_or("").to_string();
    if !value.is_empty() {
        value.push(' ');
    }
    value.push_str(class);
    set_attr(node, "class", Some(value));
}

pub fn remove_class(node: &mut Node, class: &str) {
    let Some(current) = attr(node, "class") else {
        return;
    };
    let value = current
        .split_whitespace()
        .filter(|c| *c != class)
        .collect::<Vec<_>>()
        .join(" ");
    set_attr(node, "class", Some(value));
}

/// Returns whether the class is present after the toggle.
pub fn toggle_class(node: &mut Node, class: &str) -> bool {
    if has_class(node, class) {
        remove_class(node, class);
        false
    } else {
        add_class(node, class);
        true
    }
}

// -- Inline style ---

pub fn style_get<'a>(node: &'a Node, property: &str) -> Option<&'a str> {
    match node {
        Node::Element { style, .. } => style
            .iter()
            .rev()
            .find(|(k, _)| k.eq_ignore_ascii_case(property))
            .map(|(_, v)| v.as_str()),
        _ => None,
    }
}

pub fn style_set(node: &mut Node, property: &str, value: &str) {
    if let Node::Element { style, .. } = node {
        match style
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(property))
        {
            Some(slot) => slot.1 = value.to_string(),
            None => style.push((property.to_string(), value.to_string())),
        }
    }
}

pub fn style_clear(node: &mut Node, property: &str) {
    if let Node::Element { style, .. } = node {
        style.retain(|(k, _)| !k.eq_ignore_ascii_case(property));
    }
}

// -- Lookup ---

pub fn find_by_id<'a>(node: &'a Node, id: Id) -> Option<&'a Node> {
    if node.id() == id {
        return Some(node);
    }
    for c in node.children().into_iter().flatten() {
        if let Some(found) = find_by_id(c, id) {
            return Some(found);
        }
    }
    None
}

pub fn find_by_id_mut<'a>(node: &'a mut Node, id: Id) -> Option<&'a mut Node> {
    if node.id() == id {
        return Some(node);
    }
    for c in node.children_mut().into_iter().flatten() {
        if let Some(found) = find_by_id_mut(c, id) {
            return Some(found);
        }
    }
    None
}

/// Lookup by the HTML `id` attribute, not the structural node id.
pub fn find_by_dom_id<'a>(node: &'a Node, dom_id: &str) -> Option<&'a Node> {
    if attr(node, "id") == Some(dom_id) {
        return Some(node);
    }
    for c in node.children().into_iter().flatten() {
        if let Some(found) = find_by_dom_id(c, dom_id) {
            return Some(found);
        }
    }
    None
}

pub fn find_by_dom_id_mut<'a>(node: &'a mut Node, dom_id: &str) -> Option<&'a mut Node> {
    if attr(node, "id") == Some(dom_id) {
        return Some(node);
    }
    for c in node.children_mut().into_iter().flatten() {
        if let Some(found) = find_by_dom_id_mut(c, dom_id) {
            return Some(found);
        }
    }
    None
}

/// Collect structural ids of elements carrying the class, in document order.
pub fn elements_with_class(node: &Node, class: &str, out: &mut Vec<Id>) {
    if has_class(node, class) {
        out.push(node.id());
    }
    for c in node.children().into_iter().flatten() {
        elements_with_class(c, class, out);
    }
}

/// Collect structural ids of elements carrying the attribute, in document order.
pub fn elements_with_attr(node: &Node, name: &str, out: &mut Vec<Id>) {
    if has_attr(node, name) {
        out.push(node.id());
    }
    for c in node.children().into_iter().flatten() {
        elements_with_attr(c, name, out);
    }
}

/// First element (document order) carrying the class, by structural id.
pub fn first_with_class(node: &Node, class: &str) -> Option<Id> {
    let mut out = Vec::new();
    elements_with_class(node, class, &mut out);
    out.first().copied()
}

/// Chain of structural ids from the target up to (and including) the root.
/// Returns `None` when the target is not in the tree.
pub fn ancestor_path(root: &Node, target: Id) -> Option<Vec<Id>> {
    fn walk(node: &Node, target: Id, path: &mut Vec<Id>) -> bool {
        if node.id() == target {
            path.push(node.id());
            return true;
        }
        for c in node.children().into_iter().flatten() {
            if walk(c, target, path) {
                path.push(node.id());
                return true;
            }
        }
        false
    }

    let mut path = Vec::new();
    walk(root, target, &mut path).then_some(path)
}

// -- Mutation ---

pub fn replace_children(node: &mut Node, new_children: Vec<Node>) {
    if let Some(children) = node.children_mut() {
        *children = new_children;
    }
}

pub fn append_child(node: &mut Node, child: Node) {
    if let Some(children) = node.children_mut() {
        children.push(child);
    }
}

pub fn collect_text(children: &[Node], out: &mut String) {
    for c in children {
        match c {
            Node::Text { text, .. } => out.push_str(text),
            Node::Element { children, .. } => collect_text(children, out),
            _ => {}
        }
    }
}

/// Assign structural ids to nodes that still carry `Id::UNSET`.
///
/// Numbering continues past the highest id already present, so running this
/// after a fragment has been spliced in never reuses a live id.
pub fn assign_node_ids(root: &mut Node) {
    fn max_id(node: &Node, max: &mut u32) {
        *max = (*max).max(node.id().0);
        for c in node.children().into_iter().flatten() {
            max_id(c, max);
        }
    }

    fn walk(node: &mut Node, next: &mut u32) {
        if node.id() == Id::UNSET {
            node.set_id(Id(*next));
            *next = next.wrapping_add(1);
        }
        for c in node.children_mut().into_iter().flatten() {
            walk(c, next);
        }
    }

    let mut max = 0;
    max_id(root, &mut max);
    let mut next = max + 1;
    walk(root, &mut next);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::parse_document;

    fn sample() -> Node {
        let mut dom = parse_document(
            r#"<div id="outer" class="box warm"><span id="inner">hi</span></div>"#,
        );
        assign_node_ids(&mut dom);
        dom
    }

    #[test]
    fn class_ops_round_trip() {
        let mut dom = sample();
        let outer = find_by_dom_id_mut(&mut dom, "outer").unwrap();
        assert!(has_class(outer, "warm"));
        assert!(!toggle_class(outer, "warm"));
        assert!(!has_class(outer, "warm"));
        assert!(toggle_class(outer, "open"));
        assert_eq!(attr(outer, "class"), Some("box open"));
    }

    #[test]
    fn remove_class_keeps_other_classes() {
        let mut dom = sample();
        let outer = find_by_dom_id_mut(&mut dom, "outer").unwrap();
        remove_class(outer, "box");
        assert_eq!(attr(outer, "class"), Some("warm"));
    }

    #[test]
    fn style_set_overwrites_and_clear_removes() {
        let mut dom = sample();
        let inner = find_by_dom_id_mut(&mut dom, "inner").unwrap();
        style_set(inner, "background-color", "#f3f4f6");
        style_set(inner, "background-color", "#e5e7eb");
        assert_eq!(style_get(inner, "background-color"), Some("#e5e7eb"));
        style_clear(inner, "background-color");
        assert_eq!(style_get(inner, "background-color"), None);
    }

    #[test]
    fn ancestor_path_runs_target_to_root() {
        let dom = sample();
        let inner = find_by_dom_id(&dom, "inner").unwrap().id();
        let path = ancestor_path(&dom, inner).unwrap();
        assert_eq!(path.first().copied(), Some(inner));
        assert_eq!(path.last().copied(), Some(dom.id()));
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn ancestor_path_missing_target_is_none() {
        let dom = sample();
        assert!(ancestor_path(&dom, Id(9999)).is_none());
    }

    #[test]
    fn assign_node_ids_never_reuses_live_ids() {
        let mut dom = sample();
        let mut before = 0;
        if let Some(outer) = find_by_dom_id(&dom, "outer") {
            before = outer.id().0;
        }
        let spliced = crate::fragment::parse_fragment("<em>new</em>");
        if let Some(outer) = find_by_dom_id_mut(&mut dom, "outer") {
            for n in spliced {
                append_child(outer, n);
            }
        }
        assign_node_ids(&mut dom);

        let mut seen = Vec::new();
        fn collect(node: &Node, seen: &mut Vec<u32>) {
            seen.push(node.id().0);
            for c in node.children().into_iter().flatten() {
                collect(c, seen);
            }
        }
        collect(&dom, &mut seen);
        let unique: std::collections::HashSet<_> = seen.iter().copied().collect();
        assert_eq!(unique.len(), seen.len());
        assert_eq!(find_by_dom_id(&dom, "outer").unwrap().id().0, before);
    }
}

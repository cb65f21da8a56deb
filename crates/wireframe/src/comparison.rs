use dom::dom_utils::{elements_with_class, find_by_id, find_by_id_mut, has_class, style_get, style_set};
use dom::{Id, Node};

pub const CONTAINER_CLASS: &str = "wireframe-container";
pub const CURRENT_CLASS: &str = "active";
pub const PROPOSED_CLASS: &str = "proposed";

fn first_container_with(dom: &Node, extra_class: &str) -> Option<Id> {
    let mut containers = Vec::new();
    elements_with_class(dom, CONTAINER_CLASS, &mut containers);
    containers.into_iter().find(|id| {
        find_by_id(dom, *id)
            .map(|n| has_class(n, extra_class))
            .unwrap_or(false)
    })
}

fn flip_display(dom: &mut Node, id: Id) {
    if let Some(node) = find_by_id_mut(dom, id) {
        let hidden = style_get(node, "display") == Some("none");
        style_set(node, "display", if hidden { "block" } else { "none" });
    }
}

/// Swap visibility of the "current" and "proposed" wireframe views.
///
/// Each side flips on its own inline display state, so the two can
/// desynchronize if something else touched one of them.
pub fn toggle_comparison_view(dom: &mut Node) {
    let current = first_container_with(dom, CURRENT_CLASS);
    let proposed = first_container_with(dom, PROPOSED_CLASS);
    let (Some(current), Some(proposed)) = (current, proposed) else {
        return;
    };
    flip_display(dom, current);
    flip_display(dom, proposed);
}

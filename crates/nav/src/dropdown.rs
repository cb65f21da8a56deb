//! Generic dropdown group for the shared navigation bar.
//!
//! One mutual-exclusion domain: opening a panel closes its group siblings, a
//! document-level click closes everything, and clicks inside a panel stop
//! propagation so the document handler never sees them. The wireframe pages
//! run their own independent group under different attribute/class names.

use dom::dom_utils::{
    attr, elements_with_attr, elements_with_class, find_by_id, find_by_id_mut,
    find_by_dom_id_mut, has_class, remove_class, toggle_class,
};
use dom::{Id, Node};
use events::{Event, EventFlow, EventHandler, EventKind, EventRegistry, TimerQueue};
use std::rc::Rc;

pub const TRIGGER_ATTR: &str = "data-dropdown";
pub const PANEL_CLASS: &str = "dropdown";
pub const ACTIVE_CLASS: &str = "active";

/// Close every open panel in the group, except the one named `keep` (if any).
fn close_open_panels(dom: &mut Node, keep: Option<&str>) {
    let mut panels = Vec::new();
    elements_with_class(dom, PANEL_CLASS, &mut panels);
    for id in panels {
        let skip = keep.is_some()
            && find_by_id(dom, id).and_then(|n| attr(n, "id")) == keep;
        if skip {
            continue;
        }
        if let Some(panel) = find_by_id_mut(dom, id) {
            if has_class(panel, ACTIVE_CLASS) {
                remove_class(panel, ACTIVE_CLASS);
            }
        }
    }
}

/// Click handler for a trigger carrying `data-dropdown`.
struct DropdownTrigger {
    panel_id: String,
}

impl EventHandler for DropdownTrigger {
    fn on_event(
        &self,
        dom: &mut Node,
        _event: &Event,
        flow: &mut EventFlow,
        _timers: &mut TimerQueue,
    ) {
        flow.prevent_default();
        flow.stop_propagation();
        close_open_panels(dom, Some(&self.panel_id));
        if let Some(panel) = find_by_dom_id_mut(dom, &self.panel_id) {
            toggle_class(panel, ACTIVE_CLASS);
        }
    }
}

/// Keeps clicks inside an open panel from reaching the document handler.
struct PanelClickGuard;

impl EventHandler for PanelClickGuard {
    fn on_event(
        &self,
        _dom: &mut Node,
        _event: &Event,
        flow: &mut EventFlow,
        _timers: &mut TimerQueue,
    ) {
        flow.stop_propagation();
    }
}

/// Document-level close-all; runs for any click nothing else swallowed.
struct CloseOpenDropdowns;

impl EventHandler for CloseOpenDropdowns {
    fn on_event(
        &self,
        dom: &mut Node,
        _event: &Event,
        _flow: &mut EventFlow,
        _timers: &mut TimerQueue,
    ) {
        close_open_panels(dom, None);
    }
}

pub fn initialize_dropdowns(dom: &Node, registry: &mut EventRegistry) {
    let mut triggers = Vec::new();
    elements_with_attr(dom, TRIGGER_ATTR, &mut triggers);
    for trigger in triggers {
        let Some(panel_id) = find_by_id(dom, trigger)
            .and_then(|n| attr(n, TRIGGER_ATTR))
            .map(str::to_string)
        else {
            continue;
        };
        registry.on_node(trigger, EventKind::Click, Rc::new(DropdownTrigger { panel_id }));
    }

    registry.on_document(EventKind::Click, Rc::new(CloseOpenDropdowns));

    let mut panels = Vec::new();
    elements_with_class(dom, PANEL_CLASS, &mut panels);
    for panel in panels {
        registry.on_node(panel, EventKind::Click, Rc::new(PanelClickGuard));
    }
}

/// Structural ids of panels currently open in this group, document order.
pub fn open_panels(dom: &Node) -> Vec<Id> {
    let mut panels = Vec::new();
    elements_with_class(dom, PANEL_CLASS, &mut panels);
    panels
        .into_iter()
        .filter(|id| {
            find_by_id(dom, *id)
                .map(|n| has_class(n, ACTIVE_CLASS))
                .unwrap_or(false)
        })
        .collect()
}

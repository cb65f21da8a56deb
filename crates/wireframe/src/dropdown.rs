//! Dropdown group for the wireframe demo pages.
//!
//! Same mutual-exclusion algorithm as the main navigation group, but a fully
//! independent domain: its own trigger attribute and panel class, so both
//! groups can sit on one page without interfering. The wireframe variant
//! additionally paints the trigger button (inline background/border) to track
//! open and hover state.

use dom::dom_utils::{
    attr, elements_with_attr, elements_with_class, find_by_id, find_by_id_mut,
    find_by_dom_id, find_by_dom_id_mut, has_class, remove_class, style_clear, style_get,
    style_set, toggle_class,
};
use dom::{Id, Node};
use events::{Event, EventFlow, EventHandler, EventKind, EventRegistry, TimerQueue};
use std::rc::Rc;

pub const TRIGGER_ATTR: &str = "data-dropdown-wireframe";
pub const PANEL_CLASS: &str = "wireframe-dropdown";
pub const ACTIVE_CLASS: &str = "active";

pub const ACTIVE_BACKGROUND: &str = "#e5e7eb";
pub const ACTIVE_BORDER: &str = "#9ca3af";
pub const HOVER_BACKGROUND: &str = "#f3f4f6";
pub const DEFAULT_BORDER: &str = "#d1d5db";

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

struct WireframeTrigger {
    trigger: Id,
    panel_id: String,
}

impl EventHandler for WireframeTrigger {
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

        let Some(panel) = find_by_dom_id_mut(dom, &self.panel_id) else {
            return;
        };
        let open = toggle_class(panel, ACTIVE_CLASS);

        if let Some(button) = find_by_id_mut(dom, self.trigger) {
            if open {
                style_set(button, "background-color", ACTIVE_BACKGROUND);
                style_set(button, "border-color", ACTIVE_BORDER);
            } else {
                style_clear(button, "background-color");
                style_set(button, "border-color", DEFAULT_BORDER);
            }
        }
    }
}

struct HoverEnter {
    trigger: Id,
}

impl EventHandler for HoverEnter {
    fn on_event(
        &self,
        dom: &mut Node,
        _event: &Event,
        _flow: &mut EventFlow,
        _timers: &mut TimerQueue,
    ) {
        if let Some(button) = find_by_id_mut(dom, self.trigger) {
            // Only when nothing painted the button already (open state wins).
            if style_get(button, "background-color").is_none() {
                style_set(button, "background-color", HOVER_BACKGROUND);
            }
        }
    }
}

struct HoverLeave {
    trigger: Id,
    panel_id: String,
}

impl EventHandler for HoverLeave {
    fn on_event(
        &self,
        dom: &mut Node,
        _event: &Event,
        _flow: &mut EventFlow,
        _timers: &mut TimerQueue,
    ) {
        let open = find_by_dom_id(dom, &self.panel_id)
            .map(|panel| has_class(panel, ACTIVE_CLASS))
            .unwrap_or(false);
        if open {
            return;
        }
        if let Some(button) = find_by_id_mut(dom, self.trigger) {
            style_clear(button, "background-color");
            style_set(button, "border-color", DEFAULT_BORDER);
        }
    }
}

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

/// Document-level close-all: shuts every panel and repaints every trigger to
/// its resting state, whatever state it was in.
struct CloseWireframeDropdowns;

impl EventHandler for CloseWireframeDropdowns {
    fn on_event(
        &self,
        dom: &mut Node,
        _event: &Event,
        _flow: &mut EventFlow,
        _timers: &mut TimerQueue,
    ) {
        close_open_panels(dom, None);

        let mut triggers = Vec::new();
        elements_with_attr(dom, TRIGGER_ATTR, &mut triggers);
        for trigger in triggers {
            if let Some(button) = find_by_id_mut(dom, trigger) {
                style_clear(button, "background-color");
                style_set(button, "border-color", DEFAULT_BORDER);
            }
        }
    }
}

pub fn initialize_wireframe_dropdowns(dom: &Node, registry: &mut EventRegistry) {
    let mut triggers = Vec::new();
    elements_with_attr(dom, TRIGGER_ATTR, &mut triggers);
    for trigger in triggers {
        let Some(panel_id) = find_by_id(dom, trigger)
            .and_then(|n| attr(n, TRIGGER_ATTR))
            .map(str::to_string)
        else {
            continue;
        };
        registry.on_node(
            trigger,
            EventKind::Click,
            Rc::new(WireframeTrigger {
                trigger,
                panel_id: panel_id.clone(),
            }),
        );
        registry.on_node(trigger, EventKind::MouseEnter, Rc::new(HoverEnter { trigger }));
        registry.on_node(
            trigger,
            EventKind::MouseLeave,
            Rc::new(HoverLeave { trigger, panel_id }),
        );
    }

    registry.on_document(EventKind::Click, Rc::new(CloseWireframeDropdowns));

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

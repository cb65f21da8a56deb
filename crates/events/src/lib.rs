//! Event dispatch for the headless page runtime.
//!
//! Handlers are registered at setup time and never change afterwards, so
//! dispatch borrows the registry immutably while handlers mutate the DOM and
//! the timer queue. Per-element handlers run in registration order, the event
//! bubbles to ancestors, and document-level handlers run last unless some
//! handler stopped propagation — the outside-click dropdown design depends on
//! exactly that ordering.

mod timers;

pub use crate::timers::{TimerAction, TimerHandle, TimerQueue};

use dom::dom_utils::ancestor_path;
use dom::{Id, Node};
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    MouseEnter,
    MouseLeave,
}

#[derive(Clone, Copy, Debug)]
pub struct Event {
    pub kind: EventKind,
    /// `None` models an interaction that hits no element (an "outside" click).
    pub target: Option<Id>,
}

impl Event {
    pub fn click(target: Id) -> Self {
        Self {
            kind: EventKind::Click,
            target: Some(target),
        }
    }

    pub fn outside_click() -> Self {
        Self {
            kind: EventKind::Click,
            target: None,
        }
    }
}

#[derive(Debug, Default)]
pub struct EventFlow {
    propagation_stopped: bool,
    default_prevented: bool,
}

impl EventFlow {
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

pub trait EventHandler {
    fn on_event(&self, dom: &mut Node, event: &Event, flow: &mut EventFlow, timers: &mut TimerQueue);
}

#[derive(Default)]
pub struct EventRegistry {
    node_handlers: Vec<(Id, EventKind, Rc<dyn EventHandler>)>,
    document_handlers: Vec<(EventKind, Rc<dyn EventHandler>)>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_node(&mut self, target: Id, kind: EventKind, handler: Rc<dyn EventHandler>) {
        self.node_handlers.push((target, kind, handler));
    }

    pub fn on_document(&mut self, kind: EventKind, handler: Rc<dyn EventHandler>) {
        self.document_handlers.push((kind, handler));
    }

    fn node_handlers_for(&self, target: Id, kind: EventKind) -> impl Iterator<Item = &Rc<dyn EventHandler>> {
        self.node_handlers
            .iter()
            .filter(move |(id, k, _)| *id == target && *k == kind)
            .map(|(_, _, h)| h)
    }
}

/// Dispatch an event: target handlers, bubble through ancestors, then
/// document handlers, honoring `stop_propagation` at each level.
pub fn dispatch(
    dom: &mut Node,
    registry: &EventRegistry,
    timers: &mut TimerQueue,
    event: Event,
) -> EventFlow {
    let mut flow = EventFlow::default();
    log::trace!(target: "events.dispatch", "dispatch {:?} target {:?}", event.kind, event.target);

    if let Some(target) = event.target {
        let path = ancestor_path(dom, target).unwrap_or_default();
        for id in path {
            for handler in registry.node_handlers_for(id, event.kind) {
                handler.on_event(dom, &event, &mut flow, timers);
            }
            if flow.propagation_stopped() {
                return flow;
            }
        }
    }
    for (kind, handler) in &registry.document_handlers {
        if *kind == event.kind {
            handler.on_event(dom, &event, &mut flow, timers);
        }
    }
    flow
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom::dom_utils::{assign_node_ids, find_by_dom_id};
    use dom::parse_document;
    use std::cell::RefCell;

    fn page() -> Node {
        let mut dom = parse_document(
            "<div id=\"outer\"><button id=\"trigger\">go</button></div><div id=\"aside\"></div>",
        );
        assign_node_ids(&mut dom);
        dom
    }

    struct Recording {
        label: &'static str,
        seen: Rc<RefCell<Vec<&'static str>>>,
        stop: bool,
    }

    impl EventHandler for Recording {
        fn on_event(&self, _dom: &mut Node, _event: &Event, flow: &mut EventFlow, _timers: &mut TimerQueue) {
            self.seen.borrow_mut().push(self.label);
            if self.stop {
                flow.stop_propagation();
            }
        }
    }

    fn recorder(
        label: &'static str,
        seen: &Rc<RefCell<Vec<&'static str>>>,
        stop: bool,
    ) -> Rc<dyn EventHandler> {
        Rc::new(Recording {
            label,
            seen: Rc::clone(seen),
            stop,
        })
    }

    #[test]
    fn handlers_run_target_first_then_bubble_then_document() {
        let mut dom = page();
        let trigger = find_by_dom_id(&dom, "trigger").unwrap().id();
        let outer = find_by_dom_id(&dom, "outer").unwrap().id();

        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut registry = EventRegistry::new();
        registry.on_node(trigger, EventKind::Click, recorder("first", &seen, false));
        registry.on_node(trigger, EventKind::Click, recorder("second", &seen, false));
        registry.on_node(outer, EventKind::Click, recorder("outer", &seen, false));
        registry.on_document(EventKind::Click, recorder("document", &seen, false));

        let mut timers = TimerQueue::new();
        dispatch(&mut dom, &registry, &mut timers, Event::click(trigger));
        assert_eq!(*seen.borrow(), ["first", "second", "outer", "document"]);
    }

    #[test]
    fn stop_propagation_suppresses_ancestors_and_document() {
        let mut dom = page();
        let trigger = find_by_dom_id(&dom, "trigger").unwrap().id();
        let outer = find_by_dom_id(&dom, "outer").unwrap().id();

        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut registry = EventRegistry::new();
        registry.on_node(trigger, EventKind::Click, recorder("target", &seen, true));
        registry.on_node(outer, EventKind::Click, recorder("outer", &seen, false));
        registry.on_document(EventKind::Click, recorder("document", &seen, false));

        let mut timers = TimerQueue::new();
        let flow = dispatch(&mut dom, &registry, &mut timers, Event::click(trigger));
        assert!(flow.propagation_stopped());
        assert_eq!(*seen.borrow(), ["target"]);
    }

    #[test]
    fn outside_click_reaches_only_document_handlers() {
        let mut dom = page();
        let trigger = find_by_dom_id(&dom, "trigger").unwrap().id();

        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut registry = EventRegistry::new();
        registry.on_node(trigger, EventKind::Click, recorder("target", &seen, false));
        registry.on_document(EventKind::Click, recorder("document", &seen, false));

        let mut timers = TimerQueue::new();
        dispatch(&mut dom, &registry, &mut timers, Event::outside_click());
        assert_eq!(*seen.borrow(), ["document"]);
    }

    #[test]
    fn handlers_for_other_kinds_do_not_fire() {
        let mut dom = page();
        let trigger = find_by_dom_id(&dom, "trigger").unwrap().id();

        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut registry = EventRegistry::new();
        registry.on_node(trigger, EventKind::MouseEnter, recorder("enter", &seen, false));
        registry.on_node(trigger, EventKind::Click, recorder("click", &seen, false));

        let mut timers = TimerQueue::new();
        dispatch(
            &mut dom,
            &registry,
            &mut timers,
            Event {
                kind: EventKind::MouseEnter,
                target: Some(trigger),
            },
        );
        assert_eq!(*seen.borrow(), ["enter"]);
    }
}

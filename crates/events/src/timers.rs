use crate::{Event, EventRegistry, dispatch};
use dom::dom_utils::{find_by_dom_id, find_by_dom_id_mut, style_clear, style_set};
use dom::Node;

/// A scheduled effect, as data. Elements are addressed by their HTML `id`
/// attribute; a missing element makes the fired action a silent no-op.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TimerAction {
    SetStyle {
        elem: String,
        property: String,
        value: String,
    },
    ClearStyle {
        elem: String,
        property: String,
    },
    Click {
        elem: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct TimerEntry {
    due_ms: u64,
    seq: u64,
    action: TimerAction,
}

/// Manually advanced timer queue. Entries fire in `(due, seq)` order, so two
/// entries due at the same instant fire in scheduling order. There is no wall
/// clock anywhere; tests and the demo binary own time.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now_ms: u64,
    next_seq: u64,
    entries: Vec<TimerEntry>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    pub fn schedule(&mut self, delay_ms: u64, action: TimerAction) -> TimerHandle {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(TimerEntry {
            due_ms: self.now_ms + delay_ms,
            seq,
            action,
        });
        TimerHandle(seq)
    }

    /// Returns whether the entry was still pending.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.seq != handle.0);
        self.entries.len() != before
    }

    /// Advance the clock, firing every entry that falls due. An entry
    /// scheduled by a fired action runs within the same call when its own
    /// due time is inside the window.
    pub fn advance(&mut self, dom: &mut Node, registry: &EventRegistry, delta_ms: u64) {
        let target = self.now_ms + delta_ms;
        loop {
            let next = self
                .entries
                .iter()
                .enumerate()
                .filter(|(_, e)| e.due_ms <= target)
                .min_by_key(|(_, e)| (e.due_ms, e.seq))
                .map(|(i, _)| i);
            let Some(index) = next else {
                break;
            };
            let entry = self.entries.swap_remove(index);
            self.now_ms = self.now_ms.max(entry.due_ms);
            self.run(dom, registry, entry.action);
        }
        self.now_ms = target;
    }

    fn run(&mut self, dom: &mut Node, registry: &EventRegistry, action: TimerAction) {
        match action {
            TimerAction::SetStyle {
                elem,
                property,
                value,
            } => {
                if let Some(node) = find_by_dom_id_mut(dom, &elem) {
                    style_set(node, &property, &value);
                }
            }
            TimerAction::ClearStyle { elem, property } => {
                if let Some(node) = find_by_dom_id_mut(dom, &elem) {
                    style_clear(node, &property);
                }
            }
            TimerAction::Click { elem } => {
                let Some(target) = find_by_dom_id(dom, &elem).map(|n| n.id()) else {
                    return;
                };
                dispatch(dom, registry, self, Event::click(target));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EventFlow, EventHandler, EventKind};
    use dom::dom_utils::{assign_node_ids, find_by_dom_id, style_get};
    use dom::parse_document;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn page() -> Node {
        let mut dom = parse_document("<button id=\"b\">x</button>");
        assign_node_ids(&mut dom);
        dom
    }

    fn set_style(elem: &str, property: &str, value: &str) -> TimerAction {
        TimerAction::SetStyle {
            elem: elem.to_string(),
            property: property.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn entries_fire_in_due_then_seq_order() {
        let mut dom = page();
        let registry = EventRegistry::new();
        let mut timers = TimerQueue::new();
        timers.schedule(500, set_style("b", "color", "late"));
        timers.schedule(100, set_style("b", "color", "early"));
        timers.schedule(100, set_style("b", "order", "second-at-100"));

        timers.advance(&mut dom, &registry, 200);
        let node = find_by_dom_id(&dom, "b").unwrap();
        assert_eq!(style_get(node, "color"), Some("early"));
        assert_eq!(style_get(node, "order"), Some("second-at-100"));
        assert_eq!(timers.pending(), 1);

        timers.advance(&mut dom, &registry, 300);
        let node = find_by_dom_id(&dom, "b").unwrap();
        assert_eq!(style_get(node, "color"), Some("late"));
        assert_eq!(timers.pending(), 0);
        assert_eq!(timers.now_ms(), 500);
    }

    #[test]
    fn cancel_removes_a_pending_entry() {
        let mut dom = page();
        let registry = EventRegistry::new();
        let mut timers = TimerQueue::new();
        let handle = timers.schedule(100, set_style("b", "color", "never"));
        assert!(timers.cancel(handle));
        assert!(!timers.cancel(handle));
        timers.advance(&mut dom, &registry, 200);
        let node = find_by_dom_id(&dom, "b").unwrap();
        assert_eq!(style_get(node, "color"), None);
    }

    #[test]
    fn fired_click_action_reenters_dispatch() {
        struct ScheduleOnClick;
        impl EventHandler for ScheduleOnClick {
            fn on_event(
                &self,
                _dom: &mut Node,
                _event: &Event,
                _flow: &mut EventFlow,
                timers: &mut TimerQueue,
            ) {
                timers.schedule(50, TimerAction::SetStyle {
                    elem: "b".to_string(),
                    property: "color".to_string(),
                    value: "clicked".to_string(),
                });
            }
        }

        let mut dom = page();
        let target = find_by_dom_id(&dom, "b").unwrap().id();
        let mut registry = EventRegistry::new();
        registry.on_node(target, EventKind::Click, Rc::new(ScheduleOnClick));

        let mut timers = TimerQueue::new();
        timers.schedule(100, TimerAction::Click {
            elem: "b".to_string(),
        });

        // The style entry is scheduled at 100 + 50; one advance covers both.
        timers.advance(&mut dom, &registry, 200);
        let node = find_by_dom_id(&dom, "b").unwrap();
        assert_eq!(style_get(node, "color"), Some("clicked"));
    }

    #[test]
    fn actions_on_missing_elements_are_silent_noops() {
        let mut dom = page();
        let registry = EventRegistry::new();
        let mut timers = TimerQueue::new();
        timers.schedule(10, set_style("ghost", "color", "x"));
        timers.schedule(10, TimerAction::Click {
            elem: "ghost".to_string(),
        });
        timers.advance(&mut dom, &registry, 20);
        assert_eq!(timers.pending(), 0);
    }

    struct Counter(Rc<RefCell<u32>>);
    impl EventHandler for Counter {
        fn on_event(
            &self,
            _dom: &mut Node,
            _event: &Event,
            _flow: &mut EventFlow,
            _timers: &mut TimerQueue,
        ) {
            *self.0.borrow_mut() += 1;
        }
    }

    #[test]
    fn click_entries_due_in_window_each_dispatch_once() {
        let mut dom = page();
        let target = find_by_dom_id(&dom, "b").unwrap().id();
        let count = Rc::new(RefCell::new(0));
        let mut registry = EventRegistry::new();
        registry.on_node(target, EventKind::Click, Rc::new(Counter(Rc::clone(&count))));

        let mut timers = TimerQueue::new();
        timers.schedule(10, TimerAction::Click {
            elem: "b".to_string(),
        });
        timers.schedule(20, TimerAction::Click {
            elem: "b".to_string(),
        });
        timers.advance(&mut dom, &registry, 50);
        assert_eq!(*count.borrow(), 2);
    }
}

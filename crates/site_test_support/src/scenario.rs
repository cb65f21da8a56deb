//! TOML-described interaction scenarios.
//!
//! A scenario is an ordered list of steps; each step performs at most one
//! interaction (click / outside click / hover / unhover / clock advance) and
//! then checks its expectations against the DOM. Panels are judged open by
//! their `active` class, which both dropdown groups use.

use dom::dom_utils::{find_by_dom_id, has_class, style_get};
use dom::Node;
use events::{Event, EventKind, EventRegistry, TimerQueue, dispatch};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default, rename = "step")]
    pub steps: Vec<ScenarioStep>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioStep {
    pub click: Option<String>,
    #[serde(default)]
    pub outside_click: bool,
    pub hover: Option<String>,
    pub unhover: Option<String>,
    pub advance_ms: Option<u64>,
    #[serde(default)]
    pub expect_open: Vec<String>,
    #[serde(default)]
    pub expect_closed: Vec<String>,
    #[serde(default)]
    pub expect_style: Vec<StyleExpectation>,
}

#[derive(Debug, Deserialize)]
pub struct StyleExpectation {
    pub elem: String,
    pub property: String,
    /// Omitted value means "expect the property to be absent".
    pub value: Option<String>,
}

pub fn parse_scenario(text: &str) -> Result<Scenario, toml::de::Error> {
    toml::from_str(text)
}

pub fn run_scenario(
    dom: &mut Node,
    registry: &EventRegistry,
    timers: &mut TimerQueue,
    scenario: &Scenario,
) -> Result<(), String> {
    for (index, step) in scenario.steps.iter().enumerate() {
        let at = |what: &str| format!("{}: step {}: {what}", scenario.name, index + 1);

        if let Some(elem) = &step.click {
            let target = find_by_dom_id(dom, elem)
                .map(|n| n.id())
                .ok_or_else(|| at(&format!("click target `{elem}` not in page")))?;
            dispatch(dom, registry, timers, Event::click(target));
        }
        if step.outside_click {
            dispatch(dom, registry, timers, Event::outside_click());
        }
        if let Some(elem) = &step.hover {
            let target = find_by_dom_id(dom, elem)
                .map(|n| n.id())
                .ok_or_else(|| at(&format!("hover target `{elem}` not in page")))?;
            dispatch(dom, registry, timers, Event {
                kind: EventKind::MouseEnter,
                target: Some(target),
            });
        }
        if let Some(elem) = &step.unhover {
            let target = find_by_dom_id(dom, elem)
                .map(|n| n.id())
                .ok_or_else(|| at(&format!("unhover target `{elem}` not in page")))?;
            dispatch(dom, registry, timers, Event {
                kind: EventKind::MouseLeave,
                target: Some(target),
            });
        }
        if let Some(delta) = step.advance_ms {
            timers.advance(dom, registry, delta);
        }

        for elem in &step.expect_open {
            let open = find_by_dom_id(dom, elem)
                .map(|n| has_class(n, "active"))
                .unwrap_or(false);
            if !open {
                return Err(at(&format!("expected `{elem}` open")));
            }
        }
        for elem in &step.expect_closed {
            let open = find_by_dom_id(dom, elem)
                .map(|n| has_class(n, "active"))
                .unwrap_or(false);
            if open {
                return Err(at(&format!("expected `{elem}` closed")));
            }
        }
        for expectation in &step.expect_style {
            let node = find_by_dom_id(dom, &expectation.elem)
                .ok_or_else(|| at(&format!("style target `{}` not in page", expectation.elem)))?;
            let actual = style_get(node, &expectation.property);
            if actual != expectation.value.as_deref() {
                return Err(at(&format!(
                    "`{}` {}: expected {:?}, actual {:?}",
                    expectation.elem, expectation.property, expectation.value, actual
                )));
            }
        }
    }
    Ok(())
}

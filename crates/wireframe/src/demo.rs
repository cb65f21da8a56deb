//! Scripted "guided tour" sequences for the wireframe pages.
//!
//! A tour is data: timed steps relative to the start of the run. The fixed
//! tours narrate a specific flow over hard-coded element ids; they are
//! narration aids, not a general-purpose API. Steps over missing elements
//! silently do nothing, like every other lookup here.

use crate::highlight::{DEFAULT_HIGHLIGHT_MS, HIGHLIGHT_SHADOW, HIGHLIGHT_TRANSITION, highlight_demo};
use dom::Node;
use events::{TimerAction, TimerHandle, TimerQueue};

#[derive(Clone, Copy, Debug)]
pub enum StepAction {
    Highlight {
        elem: &'static str,
        duration_ms: u64,
    },
    Click {
        elem: &'static str,
    },
}

#[derive(Clone, Copy, Debug)]
pub struct Step {
    pub at_ms: u64,
    pub action: StepAction,
}

#[derive(Clone, Copy, Debug)]
pub struct Choreography {
    pub name: &'static str,
    pub steps: &'static [Step],
}

pub const ENTERPRISE_FLOW: Choreography = Choreography {
    name: "enterprise-flow",
    steps: &[
        Step {
            at_ms: 0,
            action: StepAction::Highlight {
                elem: "solutions-dropdown-button",
                duration_ms: DEFAULT_HIGHLIGHT_MS,
            },
        },
        Step {
            at_ms: 1000,
            action: StepAction::Click {
                elem: "solutions-dropdown-button",
            },
        },
        Step {
            at_ms: 1500,
            action: StepAction::Highlight {
                elem: "solutions-by-team",
                duration_ms: DEFAULT_HIGHLIGHT_MS,
            },
        },
    ],
};

pub const HR_FLOW: Choreography = Choreography {
    name: "hr-flow",
    steps: &[
        Step {
            at_ms: 0,
            action: StepAction::Highlight {
                elem: "solutions-dropdown-button",
                duration_ms: DEFAULT_HIGHLIGHT_MS,
            },
        },
        Step {
            at_ms: 1000,
            action: StepAction::Click {
                elem: "solutions-dropdown-button",
            },
        },
        Step {
            at_ms: 1500,
            action: StepAction::Highlight {
                elem: "hr-team-link",
                duration_ms: DEFAULT_HIGHLIGHT_MS,
            },
        },
    ],
};

pub const PLATFORM_FEATURES: Choreography = Choreography {
    name: "platform-features",
    steps: &[
        Step {
            at_ms: 0,
            action: StepAction::Highlight {
                elem: "platform-dropdown-button",
                duration_ms: DEFAULT_HIGHLIGHT_MS,
            },
        },
        Step {
            at_ms: 1000,
            action: StepAction::Click {
                elem: "platform-dropdown-button",
            },
        },
        Step {
            at_ms: 1500,
            action: StepAction::Highlight {
                elem: "enterprise-features",
                duration_ms: DEFAULT_HIGHLIGHT_MS,
            },
        },
    ],
};

/// Schedule a tour's steps against the timer queue. Steps at offset zero run
/// immediately (the tours open with an instant highlight); everything else is
/// queued up front at its cumulative offset. Returns every scheduled handle
/// so a caller can cancel the tour as a set.
pub fn run(dom: &mut Node, timers: &mut TimerQueue, tour: &Choreography) -> Vec<TimerHandle> {
    let mut handles = Vec::new();
    for step in tour.steps {
        match step.action {
            StepAction::Highlight { elem, duration_ms } => {
                if step.at_ms == 0 {
                    if let Some(handle) = highlight_demo(dom, timers, elem, duration_ms) {
                        handles.push(handle);
                    }
                } else {
                    handles.push(timers.schedule(step.at_ms, TimerAction::SetStyle {
                        elem: elem.to_string(),
                        property: "box-shadow".to_string(),
                        value: HIGHLIGHT_SHADOW.to_string(),
                    }));
                    handles.push(timers.schedule(step.at_ms, TimerAction::SetStyle {
                        elem: elem.to_string(),
                        property: "transition".to_string(),
                        value: HIGHLIGHT_TRANSITION.to_string(),
                    }));
                    handles.push(timers.schedule(
                        step.at_ms + duration_ms,
                        TimerAction::ClearStyle {
                            elem: elem.to_string(),
                            property: "box-shadow".to_string(),
                        },
                    ));
                }
            }
            StepAction::Click { elem } => {
                handles.push(timers.schedule(step.at_ms, TimerAction::Click {
                    elem: elem.to_string(),
                }));
            }
        }
    }
    handles
}

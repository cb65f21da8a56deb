use dom::Node;
use dom::dom_utils::{find_by_dom_id_mut, style_set};
use events::{TimerAction, TimerHandle, TimerQueue};

pub const HIGHLIGHT_SHADOW: &str = "0 0 0 3px #fbbf24";
pub const HIGHLIGHT_TRANSITION: &str = "box-shadow 0.3s ease";
pub const DEFAULT_HIGHLIGHT_MS: u64 = 2000;

/// Outline the element now and schedule the outline's removal.
///
/// Fire-and-forget: calling this again on the same element before the first
/// clear fires leaves both clears queued, and the earlier one can strip the
/// outline a newer call just applied. The returned handle lets a caller
/// cancel its own clear if it cares.
pub fn highlight_demo(
    dom: &mut Node,
    timers: &mut TimerQueue,
    elem_id: &str,
    duration_ms: u64,
) -> Option<TimerHandle> {
    let node = find_by_dom_id_mut(dom, elem_id)?;
    style_set(node, "box-shadow", HIGHLIGHT_SHADOW);
    style_set(node, "transition", HIGHLIGHT_TRANSITION);
    Some(timers.schedule(duration_ms, TimerAction::ClearStyle {
        elem: elem_id.to_string(),
        property: "box-shadow".to_string(),
    }))
}

pub mod comparison;
pub mod demo;
pub mod dropdown;
pub mod highlight;

pub use crate::comparison::toggle_comparison_view;
pub use crate::demo::{Choreography, ENTERPRISE_FLOW, HR_FLOW, PLATFORM_FEATURES, Step, StepAction};
pub use crate::dropdown::initialize_wireframe_dropdowns;
pub use crate::highlight::{DEFAULT_HIGHLIGHT_MS, highlight_demo};

use dom::Node;
use events::EventRegistry;

/// Dropdown behavior for the wireframe pages; the one-time setup those pages
/// run on load. Tours and the comparison toggle are invoked explicitly.
#[derive(Default)]
pub struct WireframeController;

impl WireframeController {
    pub fn new() -> Self {
        Self
    }

    pub fn install(&self, dom: &Node, registry: &mut EventRegistry) {
        dropdown::initialize_wireframe_dropdowns(dom, registry);
    }
}

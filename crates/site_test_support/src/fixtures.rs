//! Shared page fixtures for integration tests and the demo binary.
//!
//! These mirror the markup contract the real pages honor: a `nav-menu`
//! container, optional breadcrumb and page-navigation containers, dropdown
//! triggers with their panels, and the wireframe comparison views.

use dom::dom_utils::assign_node_ids;
use dom::{Node, parse_document};

pub const REPORT_PAGE: &str = r##"<!DOCTYPE html>
<html>
<head><title>Findings Summary</title></head>
<body>
<nav class="main-nav"><ul class="nav-menu"></ul></nav>
<div class="breadcrumb-path"></div>
<main>
  <button id="chapter-button" data-dropdown="chapter-dropdown">Chapters</button>
  <div id="chapter-dropdown" class="dropdown">
    <a id="chapter-methods" href="findings-summary.html#methods">Methods</a>
    <a id="chapter-results" href="findings-summary.html#results">Results</a>
  </div>
  <button id="export-button" data-dropdown="export-dropdown">Export</button>
  <div id="export-dropdown" class="dropdown">
    <a id="export-pdf" href="#">Download PDF</a>
  </div>
  <section id="summary-body"></section>
</main>
<div class="page-navigation"></div>
</body>
</html>"##;

pub const WIREFRAME_PAGE: &str = r##"<!DOCTYPE html>
<html>
<head><title>Proposed Navigation Wireframe</title></head>
<body>
<header class="wireframe-header">
  <button id="solutions-dropdown-button" data-dropdown-wireframe="solutions-dropdown">Solutions</button>
  <div id="solutions-dropdown" class="wireframe-dropdown">
    <a id="solutions-by-team" href="#">Solutions by Team</a>
    <a id="hr-team-link" href="#">HR Teams</a>
  </div>
  <button id="platform-dropdown-button" data-dropdown-wireframe="platform-dropdown">Platform</button>
  <div id="platform-dropdown" class="wireframe-dropdown">
    <a id="enterprise-features" href="#">Enterprise Features</a>
  </div>
</header>
<div id="current-view" class="wireframe-container active">Current navigation</div>
<div id="proposed-view" class="wireframe-container proposed" style="display: none">Proposed navigation</div>
</body>
</html>"##;

pub fn report_page() -> Node {
    let mut dom = parse_document(REPORT_PAGE);
    assign_node_ids(&mut dom);
    dom
}

pub fn wireframe_page() -> Node {
    let mut dom = parse_document(WIREFRAME_PAGE);
    assign_node_ids(&mut dom);
    dom
}

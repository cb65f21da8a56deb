//! Replays a short scripted session over the report fixtures and prints DOM
//! snapshots between phases. Narration output only; tests are the contract.

use dom::dom_utils::{assign_node_ids, find_by_dom_id};
use dom::{DomSnapshot, Node, parse_document};
use events::{Event, EventRegistry, TimerQueue, dispatch};
use nav::markup::Crumb;
use nav::{Location, NavigationController};
use wireframe::{ENTERPRISE_FLOW, WireframeController, demo, toggle_comparison_view};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

const REPORT_PAGE: &str = r#"<!DOCTYPE html>
<body>
<nav class="main-nav"><ul class="nav-menu"></ul></nav>
<div class="breadcrumb-path"></div>
<main>
  <button id="chapter-button" data-dropdown="chapter-dropdown">Chapters</button>
  <div id="chapter-dropdown" class="dropdown">
    <a id="chapter-methods" href="findings-summary.html#methods">Methods</a>
  </div>
</main>
<div class="page-navigation"></div>
</body>"#;

const WIREFRAME_PAGE: &str = r##"<!DOCTYPE html>
<body>
<header class="wireframe-header">
  <button id="solutions-dropdown-button" data-dropdown-wireframe="solutions-dropdown">Solutions</button>
  <div id="solutions-dropdown" class="wireframe-dropdown">
    <a id="solutions-by-team" href="#">Solutions by Team</a>
    <a id="hr-team-link" href="#">HR Teams</a>
  </div>
</header>
<div id="current-view" class="wireframe-container active">Current navigation</div>
<div id="proposed-view" class="wireframe-container proposed" style="display: none">Proposed navigation</div>
</body>"##;

fn main() {
    report_walkthrough();
    wireframe_walkthrough();
}

fn heading(title: &str) {
    println!("\n== {title} ==");
}

fn click(dom: &mut Node, registry: &EventRegistry, timers: &mut TimerQueue, elem: &str) {
    if let Some(target) = find_by_dom_id(dom, elem).map(|n| n.id()) {
        dispatch(dom, registry, timers, Event::click(target));
    }
}

fn report_walkthrough() {
    let mut dom = parse_document(REPORT_PAGE);
    assign_node_ids(&mut dom);
    let mut registry = EventRegistry::new();
    let mut timers = TimerQueue::new();

    let controller = NavigationController::new();
    let location = Location::parse("http://localhost/findings-summary.html");
    controller.install(&mut dom, location.as_ref(), &mut registry);
    controller.generate_breadcrumbs(&mut dom, "Findings Summary", &[Crumb {
        name: "Wireframes",
        url: "wireframes/index.html",
    }]);
    controller.generate_page_navigation(&mut dom, "findings");

    if let Some((prev, next)) = pages::neighbors("findings") {
        let prev = prev.map(|p| p.name).unwrap_or("(start)");
        let next = next.map(|p| p.name).unwrap_or("(end)");
        println!("reading order: {prev} <- Findings Summary -> {next}");
    }

    heading("report page after install");
    println!("{}", DomSnapshot::new(&dom));

    click(&mut dom, &registry, &mut timers, "chapter-button");
    heading("chapters dropdown open");
    println!("{}", DomSnapshot::new(&dom));

    dispatch(&mut dom, &registry, &mut timers, Event::outside_click());
    heading("after outside click");
    println!("{}", DomSnapshot::new(&dom));
}

fn wireframe_walkthrough() {
    let mut dom = parse_document(WIREFRAME_PAGE);
    assign_node_ids(&mut dom);
    let mut registry = EventRegistry::new();
    let mut timers = TimerQueue::new();

    WireframeController::new().install(&dom, &mut registry);

    heading("wireframe page after install");
    println!("{}", DomSnapshot::new(&dom));

    demo::run(&mut dom, &mut timers, &ENTERPRISE_FLOW);
    heading("enterprise tour: opening highlight");
    println!("{}", DomSnapshot::new(&dom));

    timers.advance(&mut dom, &registry, 1000);
    heading("enterprise tour: dropdown opened at 1000ms");
    println!("{}", DomSnapshot::new(&dom));

    timers.advance(&mut dom, &registry, 2500);
    heading("enterprise tour: settled at 3500ms");
    println!("{}", DomSnapshot::new(&dom));

    toggle_comparison_view(&mut dom);
    heading("comparison view toggled");
    println!("{}", DomSnapshot::new(&dom));
}

use crate::dropdown;
use crate::location::Location;
use crate::markup::{self, Crumb};
use dom::dom_utils::{
    add_class, assign_node_ids, attr, find_by_id, find_by_id_mut, first_with_class, remove_class,
    replace_children,
};
use dom::{Id, Node, parse_fragment};
use events::EventRegistry;
use pages::{NAVIGATION_PAGES, PageDescriptor, ROOT_PAGE_URL};
use std::fmt::Write;

pub const NAV_MENU_CLASS: &str = "nav-menu";
pub const BREADCRUMB_CLASS: &str = "breadcrumb-path";
pub const PAGE_NAV_CLASS: &str = "page-navigation";
pub const ACTIVE_LINK_CLASS: &str = "active";

/// Builds and maintains the shared navigation bar and the per-page rendering
/// helpers. Stateless beyond the page list it was constructed over; every
/// method takes the target DOM explicitly.
///
/// All lookup failures degrade to silent no-ops — a page without the expected
/// container simply does not get that region updated.
pub struct NavigationController {
    pages: &'static [PageDescriptor],
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationController {
    pub fn new() -> Self {
        Self {
            pages: NAVIGATION_PAGES,
        }
    }

    pub fn pages(&self) -> &'static [PageDescriptor] {
        self.pages
    }

    /// One-time setup, the work the site runs when a document loads.
    pub fn install(&self, dom: &mut Node, location: Option<&Location>, registry: &mut EventRegistry) {
        self.initialize_navigation(dom);
        dropdown::initialize_dropdowns(dom, registry);
        self.set_active_page(dom, location);
    }

    /// Replace the menu container's children with one entry per page.
    /// Idempotent: repeated calls rebuild the same menu.
    pub fn initialize_navigation(&self, dom: &mut Node) {
        let Some(menu) = first_with_class(dom, NAV_MENU_CLASS) else {
            return;
        };
        let mut items = String::new();
        for page in self.pages {
            let _ = write!(
                items,
                "<li><a href=\"{}\" data-page=\"{}\">{}</a></li>",
                page.url, page.id, page.name
            );
        }
        let children = parse_fragment(&items);
        if let Some(node) = find_by_id_mut(dom, menu) {
            replace_children(node, children);
        }
        assign_node_ids(dom);
    }

    /// Mark the menu link(s) matching the location's file name as active.
    /// An empty file name (root or trailing slash) selects the landing page.
    /// Zero or several matches are left exactly as they fall: every match is
    /// marked, nothing else is.
    pub fn set_active_page(&self, dom: &mut Node, location: Option<&Location>) {
        let Some(menu) = first_with_class(dom, NAV_MENU_CLASS) else {
            return;
        };
        let derived = location.map(Location::file_name).unwrap_or("");
        let file_name = if derived.is_empty() {
            ROOT_PAGE_URL
        } else {
            derived
        };

        let mut links = Vec::new();
        if let Some(node) = find_by_id(dom, menu) {
            collect_links(node, &mut links);
        }
        for link in links {
            let Some(node) = find_by_id_mut(dom, link) else {
                continue;
            };
            remove_class(node, ACTIVE_LINK_CLASS);
            if attr(node, "href") == Some(file_name) {
                add_class(node, ACTIVE_LINK_CLASS);
            }
        }
    }

    /// Replace the breadcrumb container's content with the Home → parents →
    /// current chain. Labels and urls go in verbatim.
    pub fn generate_breadcrumbs(&self, dom: &mut Node, current_label: &str, parents: &[Crumb<'_>]) {
        let Some(container) = first_with_class(dom, BREADCRUMB_CLASS) else {
            return;
        };
        let children = parse_fragment(&markup::breadcrumb_fragment(current_label, parents));
        if let Some(node) = find_by_id_mut(dom, container) {
            replace_children(node, children);
        }
        assign_node_ids(dom);
    }

    /// Render previous/next pagination for the given page id. An unknown id
    /// leaves the container's existing content untouched.
    pub fn generate_page_navigation(&self, dom: &mut Node, current_page_id: &str) {
        let Some(container) = first_with_class(dom, PAGE_NAV_CLASS) else {
            return;
        };
        let Some(index) = self.pages.iter().position(|p| p.id == current_page_id) else {
            return;
        };
        let prev = if index > 0 {
            Some(&self.pages[index - 1])
        } else {
            None
        };
        let next = self.pages.get(index + 1);
        let children = parse_fragment(&markup::page_nav_fragment(prev, next));
        if let Some(node) = find_by_id_mut(dom, container) {
            replace_children(node, children);
        }
        assign_node_ids(dom);
    }
}

fn collect_links(node: &Node, out: &mut Vec<Id>) {
    if node.is_element_named("a") {
        out.push(node.id());
    }
    for c in node.children().into_iter().flatten() {
        collect_links(c, out);
    }
}

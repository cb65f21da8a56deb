/// One navigable page of the report site.
///
/// The list order defines both menu rendering order and the previous/next
/// adjacency used for pagination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageDescriptor {
    pub name: &'static str,
    pub url: &'static str,
    pub id: &'static str,
}

/// Landing page used when a location path has no file segment.
pub const ROOT_PAGE_URL: &str = "index.html";

pub const NAVIGATION_PAGES: &[PageDescriptor] = &[
    PageDescriptor {
        name: "Overview",
        url: "index.html",
        id: "index",
    },
    PageDescriptor {
        name: "Evolution",
        url: "navigation-evolution-overview.html",
        id: "evolution",
    },
    PageDescriptor {
        name: "Findings Summary",
        url: "findings-summary.html",
        id: "findings",
    },
    PageDescriptor {
        name: "Content Analysis",
        url: "content-gap-analysis.html",
        id: "content",
    },
    PageDescriptor {
        name: "User Journey Impact",
        url: "user-journey-impact.html",
        id: "journey",
    },
    PageDescriptor {
        name: "Research Insights",
        url: "b2b-research-insights.html",
        id: "research",
    },
    PageDescriptor {
        name: "Solution Design",
        url: "hybrid-solution-design.html",
        id: "solution",
    },
    PageDescriptor {
        name: "Wireframes",
        url: "wireframes/index.html",
        id: "wireframes",
    },
];

pub fn find_index(page_id: &str) -> Option<usize> {
    NAVIGATION_PAGES.iter().position(|p| p.id == page_id)
}

/// Previous and next entries for a page id, or `None` for an unknown id.
pub fn neighbors(
    page_id: &str,
) -> Option<(Option<&'static PageDescriptor>, Option<&'static PageDescriptor>)> {
    let index = find_index(page_id)?;
    let prev = if index > 0 {
        Some(&NAVIGATION_PAGES[index - 1])
    } else {
        None
    };
    let next = NAVIGATION_PAGES.get(index + 1);
    Some((prev, next))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_ids_are_unique() {
        for (i, page) in NAVIGATION_PAGES.iter().enumerate() {
            for other in &NAVIGATION_PAGES[i + 1..] {
                assert_ne!(page.id, other.id);
            }
        }
    }

    #[test]
    fn first_page_has_no_previous() {
        let (prev, next) = neighbors("index").unwrap();
        assert!(prev.is_none());
        assert_eq!(next.unwrap().id, "evolution");
    }

    #[test]
    fn last_page_has_no_next() {
        let (prev, next) = neighbors("wireframes").unwrap();
        assert_eq!(prev.unwrap().id, "solution");
        assert!(next.is_none());
    }

    #[test]
    fn interior_page_has_both_neighbors() {
        let (prev, next) = neighbors("journey").unwrap();
        assert_eq!(prev.unwrap().id, "content");
        assert_eq!(next.unwrap().id, "research");
    }

    #[test]
    fn unknown_page_id_has_no_neighbors() {
        assert!(neighbors("glossary").is_none());
    }
}

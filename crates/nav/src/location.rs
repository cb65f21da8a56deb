use url::Url;

/// Current document location. Only the path matters to the navigation code;
/// the last segment selects which menu entry is "active".
#[derive(Clone, Debug)]
pub struct Location {
    url: Url,
}

impl Location {
    /// Unparseable input yields `None`; callers degrade to no marking.
    pub fn parse(input: &str) -> Option<Self> {
        Url::parse(input).ok().map(|url| Self { url })
    }

    pub fn path(&self) -> &str {
        self.url.path()
    }

    /// Last path segment; empty for a root or trailing-slash path.
    pub fn file_name(&self) -> &str {
        self.url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::Location;

    #[test]
    fn file_name_is_last_segment() {
        let loc = Location::parse("http://localhost/report/findings-summary.html").unwrap();
        assert_eq!(loc.file_name(), "findings-summary.html");
    }

    #[test]
    fn root_and_trailing_slash_yield_empty_file_name() {
        assert_eq!(Location::parse("http://localhost/").unwrap().file_name(), "");
        assert_eq!(
            Location::parse("http://localhost/wireframes/").unwrap().file_name(),
            ""
        );
    }

    #[test]
    fn file_urls_parse_too() {
        let loc = Location::parse("file:///home/user/report/index.html").unwrap();
        assert_eq!(loc.file_name(), "index.html");
    }

    #[test]
    fn garbage_input_is_none() {
        assert!(Location::parse("not a url").is_none());
    }
}

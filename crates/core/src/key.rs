use url::Url;

/// Query parameter carrying the Pixabay API key
pub const KEY_PARAM: &str = "key";

/// Query parameter carrying the search term when it is not passed explicitly
pub const SEARCH_PARAM: &str = "search";

/// Read access to the query string of the current page
pub trait QueryReader {
    /// Returns the first value of the named parameter, if present
    fn query_param(&self, name: &str) -> Option<String>;
}

/// The location of the page the photos are rendered into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    url: Url,
}

impl PageLocation {
    /// Parse an absolute page URL such as `https://example.com/?key=abc`
    pub fn parse(location: &str) -> Result<Self, String> {
        Url::parse(location)
            .map(|url| Self { url })
            .map_err(|e| format!("Invalid page URL '{location}': {e}"))
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }
}

impl QueryReader for PageLocation {
    fn query_param(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
    }
}

/// Retrieve the API key from the page location
///
/// An empty `key` parameter counts as missing.
pub fn get_key_from_location<R: QueryReader + ?Sized>(location: &R) -> Option<String> {
    location.query_param(KEY_PARAM).filter(|key| !key.is_empty())
}

/// Pick the search term: the explicit argument wins, then the `search`
/// parameter of the page location, then the empty string.
pub fn get_search_term<R: QueryReader + ?Sized>(location: &R, explicit: Option<String>) -> String {
    explicit
        .or_else(|| location.query_param(SEARCH_PARAM))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(url: &str) -> PageLocation {
        PageLocation::parse(url).unwrap()
    }

    #[test]
    fn test_get_key_present() {
        let page = location("https://example.com/index.html?key=abc123");
        assert_eq!(get_key_from_location(&page), Some("abc123".to_string()));
    }

    #[test]
    fn test_get_key_absent() {
        let page = location("https://example.com/index.html?search=cats");
        assert_eq!(get_key_from_location(&page), None);
    }

    #[test]
    fn test_get_key_empty_is_missing() {
        let page = location("https://example.com/?key=");
        assert_eq!(get_key_from_location(&page), None);
    }

    #[test]
    fn test_get_key_first_value_wins() {
        let page = location("https://example.com/?key=first&key=second");
        assert_eq!(get_key_from_location(&page), Some("first".to_string()));
    }

    #[test]
    fn test_get_key_decodes_value() {
        let page = location("https://example.com/?key=a%2Bb%20c");
        assert_eq!(get_key_from_location(&page), Some("a+b c".to_string()));
    }

    #[test]
    fn test_get_search_term_explicit_wins() {
        let page = location("https://example.com/?key=k&search=dogs");
        assert_eq!(get_search_term(&page, Some("cats".to_string())), "cats");
    }

    #[test]
    fn test_get_search_term_from_query_string() {
        let page = location("https://example.com/?key=k&search=mountain+lake");
        assert_eq!(get_search_term(&page, None), "mountain lake");
    }

    #[test]
    fn test_get_search_term_defaults_to_empty() {
        let page = location("https://example.com/?key=k");
        assert_eq!(get_search_term(&page, None), "");
    }

    #[test]
    fn test_parse_invalid_location() {
        let result = PageLocation::parse("not a url");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid page URL"));
    }
}

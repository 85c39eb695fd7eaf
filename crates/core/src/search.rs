use serde::{Deserialize, Serialize};
use url::Url;

use crate::key::KEY_PARAM;

/// Pixabay API endpoint
///
/// See https://pixabay.com/api/docs/
pub const PIXABAY_API_BASE: &str = "https://pixabay.com/api/";

/// A single photo search, built once per invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub search: String,
    pub key: String,
}

impl SearchRequest {
    pub fn new(search: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            key: key.into(),
        }
    }
}

/// Generate the URL used to query the Pixabay API
///
/// The search term is passed through untouched; encoding is left to the
/// query string serializer.
pub fn build_search_url(api_base: &str, request: &SearchRequest) -> Result<Url, String> {
    let mut url =
        Url::parse(api_base).map_err(|e| format!("Invalid API base URL '{api_base}': {e}"))?;

    url.query_pairs_mut()
        .append_pair(KEY_PARAM, &request.key)
        .append_pair("q", &request.search)
        // Only high quality photos.
        .append_pair("image_type", "photo")
        .append_pair("editors_choice", "true");

    Ok(url)
}

/// Copy of `url` with the value of the `key` parameter masked, for logs and output
pub fn redact_key(url: &Url) -> String {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == KEY_PARAM {
                "REDACTED".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();

    let mut redacted = url.clone();
    if !pairs.is_empty() {
        redacted.query_pairs_mut().clear().extend_pairs(pairs);
    }
    redacted.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_pairs(url: &Url) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        pairs.sort();
        pairs
    }

    #[test]
    fn test_build_search_url_parameters() {
        let request = SearchRequest::new("cats", "abc123");
        let url = build_search_url(PIXABAY_API_BASE, &request).unwrap();

        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("pixabay.com"));
        assert_eq!(url.path(), "/api/");
        assert_eq!(
            sorted_pairs(&url),
            vec![
                ("editors_choice".to_string(), "true".to_string()),
                ("image_type".to_string(), "photo".to_string()),
                ("key".to_string(), "abc123".to_string()),
                ("q".to_string(), "cats".to_string()),
            ]
        );
    }

    #[test]
    fn test_build_search_url_exact_string() {
        let request = SearchRequest::new("cats", "abc123");
        let url = build_search_url(PIXABAY_API_BASE, &request).unwrap();
        assert_eq!(
            url.as_str(),
            "https://pixabay.com/api/?key=abc123&q=cats&image_type=photo&editors_choice=true"
        );
    }

    #[test]
    fn test_build_search_url_encodes_search() {
        let request = SearchRequest::new("yellow flowers & bees", "k");
        let url = build_search_url(PIXABAY_API_BASE, &request).unwrap();

        assert!(url.as_str().contains("q=yellow+flowers+%26+bees"));
        let q = url
            .query_pairs()
            .find(|(k, _)| k == "q")
            .map(|(_, v)| v.into_owned());
        assert_eq!(q, Some("yellow flowers & bees".to_string()));
    }

    #[test]
    fn test_build_search_url_deterministic() {
        let request = SearchRequest::new("sunset", "key-1");
        let first = build_search_url(PIXABAY_API_BASE, &request).unwrap();
        let second = build_search_url(PIXABAY_API_BASE, &request).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_build_search_url_custom_base() {
        let request = SearchRequest::new("cats", "k");
        let url = build_search_url("http://127.0.0.1:8080/api/", &request).unwrap();
        assert_eq!(url.host_str(), Some("127.0.0.1"));
        assert_eq!(url.port(), Some(8080));
        assert_eq!(url.query_pairs().count(), 4);
    }

    #[test]
    fn test_build_search_url_invalid_base() {
        let request = SearchRequest::new("cats", "k");
        let result = build_search_url("pixabay", &request);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid API base URL"));
    }

    #[test]
    fn test_redact_key() {
        let request = SearchRequest::new("cats", "secret");
        let url = build_search_url(PIXABAY_API_BASE, &request).unwrap();
        let redacted = redact_key(&url);

        assert!(!redacted.contains("secret"));
        assert!(redacted.contains("key=REDACTED"));
        assert!(redacted.contains("q=cats"));
    }
}

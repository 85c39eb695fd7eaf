use scraper::{ElementRef, Html, Selector as CssSelector};
use serde::{Deserialize, Serialize};

/// Page variant: which container receives the photos and which BEM block
/// prefixes the generated class names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Photos,
    List,
}

impl Layout {
    pub fn block(&self) -> &'static str {
        match self {
            Layout::Photos => "photos",
            Layout::List => "list",
        }
    }

    /// CSS selector of the container element
    pub fn selector(&self) -> &'static str {
        match self {
            Layout::Photos => ".photos",
            Layout::List => ".list",
        }
    }

    /// BEM element class, e.g. `photos__image`
    pub fn class(&self, element: &str) -> String {
        format!("{}__{element}", self.block())
    }
}

/// Minimal HTML page holding one empty container for the layout
pub fn default_page(layout: Layout) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Photo search</title>
</head>
<body>
<div class="{}"></div>
</body>
</html>
"#,
        layout.block()
    )
}

fn parse_selector(selector: &str) -> Result<CssSelector, String> {
    CssSelector::parse(selector).map_err(|e| format!("Invalid CSS selector '{selector}': {e:?}"))
}

/// Replace everything inside the first element matching `selector`
///
/// The markup is parsed as an HTML fragment, the way assigning `innerHTML`
/// does, and the whole document is serialized back. Fails when the spliced
/// content would not read back unchanged, e.g. an `<a>` inside a `<tbody>`
/// that the parser moves out of the table.
pub fn replace_container_contents(
    document: &str,
    selector: &str,
    markup: &str,
) -> Result<String, String> {
    let css = parse_selector(selector)?;
    let mut html = Html::parse_document(document);

    let container_id = html
        .select(&css)
        .next()
        .map(|element| element.id())
        .ok_or_else(|| format!("No element matches selector '{selector}'"))?;

    {
        let mut container = html
            .tree
            .get_mut(container_id)
            .ok_or_else(|| format!("Container for '{selector}' vanished from the tree"))?;
        while let Some(mut child) = container.first_child() {
            child.detach();
        }
    }

    let fragment = Html::parse_fragment(markup);

    // Copy the fragment nodes under the container, parent before children.
    let mut pending = vec![(fragment.root_element().id(), container_id)];
    while let Some((source_id, target_id)) = pending.pop() {
        let Some(source) = fragment.tree.get(source_id) else {
            continue;
        };
        for child in source.children() {
            let Some(mut target) = html.tree.get_mut(target_id) else {
                break;
            };
            let copied = target.append(child.value().clone()).id();
            pending.push((child.id(), copied));
        }
    }

    let spliced = html
        .tree
        .get(container_id)
        .and_then(ElementRef::wrap)
        .map(|container| container.inner_html())
        .ok_or_else(|| format!("Container for '{selector}' vanished from the tree"))?;

    let serialized = html.html();
    let reread = container_contents(&serialized, selector)?;
    if reread != spliced {
        return Err(format!(
            "Markup placed in '{selector}' does not survive reparsing the page; \
             the container cannot hold this content"
        ));
    }

    Ok(serialized)
}

/// Inner HTML of the first element matching `selector`
pub fn container_contents(document: &str, selector: &str) -> Result<String, String> {
    let css = parse_selector(selector)?;
    let html = Html::parse_document(document);

    html.select(&css)
        .next()
        .map(|element| element.inner_html())
        .ok_or_else(|| format!("No element matches selector '{selector}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_selectors() {
        assert_eq!(Layout::Photos.selector(), ".photos");
        assert_eq!(Layout::List.selector(), ".list");
        assert_eq!(Layout::List.class("link"), "list__link");
        assert_eq!(Layout::default(), Layout::Photos);
    }

    #[test]
    fn test_default_page_has_empty_container() {
        let page = default_page(Layout::List);
        assert_eq!(container_contents(&page, ".list").unwrap(), "");
        assert!(container_contents(&page, ".photos").is_err());
    }

    #[test]
    fn test_replace_container_contents() {
        let page = default_page(Layout::Photos);
        let document =
            replace_container_contents(&page, ".photos", r#"<a href="l"><img src="s" alt="a"></a>"#)
                .unwrap();

        assert_eq!(
            container_contents(&document, ".photos").unwrap(),
            r#"<a href="l"><img src="s" alt="a"></a>"#
        );
        assert!(document.contains("<title>Photo search</title>"));
    }

    #[test]
    fn test_replace_discards_previous_contents() {
        let page = r#"<html><body><div class="photos"><p>old</p><span>stale</span></div></body></html>"#;
        let document = replace_container_contents(page, ".photos", "<p>new</p>").unwrap();

        assert_eq!(container_contents(&document, ".photos").unwrap(), "<p>new</p>");
        assert!(!document.contains("stale"));
    }

    #[test]
    fn test_replace_only_first_match() {
        let page = r#"<html><body><div class="photos">one</div><div class="photos">two</div></body></html>"#;
        let document = replace_container_contents(page, ".photos", "<b>x</b>").unwrap();

        assert!(document.contains(r#"<div class="photos"><b>x</b></div>"#));
        assert!(document.contains(r#"<div class="photos">two</div>"#));
    }

    #[test]
    fn test_replace_with_empty_markup() {
        let page = r#"<html><body><div class="photos"><p>old</p></div></body></html>"#;
        let document = replace_container_contents(page, ".photos", "").unwrap();
        assert_eq!(container_contents(&document, ".photos").unwrap(), "");
    }

    #[test]
    fn test_replace_keeps_nested_structure() {
        let page = default_page(Layout::Photos);
        let markup = "<ul><li><a href=\"x\">one</a></li><li>two</li></ul>";
        let document = replace_container_contents(&page, ".photos", markup).unwrap();
        assert_eq!(container_contents(&document, ".photos").unwrap(), markup);
    }

    #[test]
    fn test_replace_is_idempotent() {
        let page = default_page(Layout::Photos);
        let markup = "\n  <a href=\"l\" class=\"photos__link\">\n    <img src=\"s\" alt=\"a\" class=\"photos__image\" />\n  </a>\n";

        let once = replace_container_contents(&page, ".photos", markup).unwrap();
        let twice = replace_container_contents(&once, ".photos", markup).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_replace_rejects_table_container() {
        let page = r#"<html><body><table><tbody class="photos"></tbody></table></body></html>"#;
        let result = replace_container_contents(page, ".photos", r#"<a href="l"><img src="s"></a>"#);

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("does not survive reparsing"));
    }

    #[test]
    fn test_replace_rejects_table_container_after_comment() {
        let page = r#"<!-- generated --><table><tbody class="photos"><tr><td>old</td></tr></tbody></table>"#;
        let result = replace_container_contents(page, ".photos", "<p>x</p>");
        assert!(result.is_err());
    }

    #[test]
    fn test_replace_missing_container() {
        let result = replace_container_contents("<html><body></body></html>", ".photos", "x");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("No element matches"));
    }

    #[test]
    fn test_replace_invalid_selector() {
        let result = replace_container_contents("<html></html>", "..photos", "x");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid CSS selector"));
    }
}

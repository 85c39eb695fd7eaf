use crate::prelude::*;
use photogrid_core::page::{container_contents, default_page, replace_container_contents, Layout};
use std::path::PathBuf;

/// Something holding a page whose container content can be replaced
pub trait RenderTarget {
    /// Replace the content of the first element matching `selector` with `markup`
    fn replace_contents(&mut self, selector: &str, markup: &str) -> Result<(), Error>;
}

/// HTML document kept in memory
#[derive(Debug, Clone)]
pub struct Document {
    html: String,
}

impl Document {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    /// Blank page with an empty container for the layout
    pub fn for_layout(layout: Layout) -> Self {
        Self::new(default_page(layout))
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn contents(&self, selector: &str) -> Result<String, Error> {
        container_contents(&self.html, selector).map_err(Error::Render)
    }
}

impl RenderTarget for Document {
    fn replace_contents(&mut self, selector: &str, markup: &str) -> Result<(), Error> {
        self.html = replace_container_contents(&self.html, selector, markup).map_err(Error::Render)?;
        Ok(())
    }
}

/// HTML file rewritten in place
#[derive(Debug, Clone)]
pub struct HtmlFile {
    path: PathBuf,
}

impl HtmlFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RenderTarget for HtmlFile {
    fn replace_contents(&mut self, selector: &str, markup: &str) -> Result<(), Error> {
        let html = std::fs::read_to_string(&self.path).map_err(|e| {
            Error::Render(format!("Failed to read {}: {e}", self.path.display()))
        })?;

        let mut document = Document::new(html);
        document.replace_contents(selector, markup)?;

        std::fs::write(&self.path, document.html()).map_err(|e| {
            Error::Render(format!("Failed to write {}: {e}", self.path.display()))
        })
    }
}

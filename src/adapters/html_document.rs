use crate::core::{HostPage, RenderTarget};
use crate::utils::error::{Result, SiteError};
use lol_html::html_content::ContentType;
use lol_html::{element, rewrite_str, RewriteStrSettings, Selector};
use std::cell::Cell;

/// A host page held as an HTML string and rewritten in place with `lol_html`.
#[derive(Debug, Clone)]
pub struct HtmlDocument {
    html: String,
}

fn checked_selector(field: &str, raw: String) -> Result<String> {
    match raw.parse::<Selector>() {
        Ok(_) => Ok(raw),
        Err(e) => Err(SiteError::InvalidConfigValueError {
            field: field.to_string(),
            value: raw,
            reason: format!("Invalid selector: {}", e),
        }),
    }
}

impl HtmlDocument {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn into_string(self) -> String {
        self.html
    }

    fn count_matches(&self, selector: &str) -> Result<usize> {
        let count = Cell::new(0usize);

        rewrite_str(
            &self.html,
            RewriteStrSettings {
                element_content_handlers: vec![element!(selector, |_el| {
                    count.set(count.get() + 1);
                    Ok(())
                })],
                ..RewriteStrSettings::new()
            },
        )?;

        Ok(count.get())
    }
}

impl HostPage for HtmlDocument {
    fn has_element_with_id(&self, id: &str) -> Result<bool> {
        let selector = checked_selector("container_id", format!("#{}", id))?;
        Ok(self.count_matches(&selector)? > 0)
    }

    fn set_text_by_class(&mut self, class: &str, text: &str) -> Result<usize> {
        let selector = checked_selector("class", format!(".{}", class))?;
        let count = Cell::new(0usize);

        let output = rewrite_str(
            &self.html,
            RewriteStrSettings {
                element_content_handlers: vec![element!(selector, |el| {
                    el.set_inner_content(text, ContentType::Text);
                    count.set(count.get() + 1);
                    Ok(())
                })],
                ..RewriteStrSettings::new()
            },
        )?;

        self.html = output;
        Ok(count.get())
    }

    fn container(&mut self, id: &str) -> Result<Option<Box<dyn RenderTarget + '_>>> {
        if !self.has_element_with_id(id)? {
            return Ok(None);
        }

        Ok(Some(Box::new(Container {
            document: self,
            selector: format!("#{}", id),
        })))
    }
}

struct Container<'a> {
    document: &'a mut HtmlDocument,
    selector: String,
}

impl RenderTarget for Container<'_> {
    // Like getElementById, only the first element with the id is used.
    fn replace_content(&mut self, markup: &str) -> Result<()> {
        let replaced = Cell::new(false);

        let output = rewrite_str(
            &self.document.html,
            RewriteStrSettings {
                element_content_handlers: vec![element!(self.selector.as_str(), |el| {
                    if !replaced.get() {
                        el.set_inner_content(markup, ContentType::Html);
                        replaced.set(true);
                    }
                    Ok(())
                })],
                ..RewriteStrSettings::new()
            },
        )?;

        self.document.html = output;
        Ok(())
    }
}

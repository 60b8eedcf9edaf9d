//! Minimal page shell holding the project container.

use folio_core::{Error, Result};
use folio_dom::{Document, NodeId, Selector, is_void_element};
use serde::{Deserialize, Serialize};

/// Page-level settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageOptions {
    /// Contents of `<title>`.
    pub title: String,
    /// `lang` attribute of `<html>`.
    pub lang: String,
    /// Stylesheet URLs, linked in order.
    pub stylesheets: Vec<String>,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "Projects".to_string(),
            lang: "en".to_string(),
            stylesheets: Vec::new(),
        }
    }
}

/// Build `html > head + body > main > container`, where the container is
/// shaped so that `container` matches it (tag, id and classes; `section`
/// when the selector names no tag).
///
/// # Errors
///
/// Fails when the selector names a void element such as `img`.
pub fn build_page(page: &PageOptions, container: &Selector) -> Result<(Document, NodeId)> {
    let container_tag = container.tag().unwrap_or("section");
    if is_void_element(container_tag) {
        return Err(Error::validation_field(
            "container_selector",
            format!("<{container_tag}> cannot hold project entries"),
        ));
    }

    let mut doc = Document::new();
    let root = doc.root();

    let html = doc.create_element("html");
    doc.set_attribute(html, "lang", &page.lang)?;
    doc.append_child(root, html)?;

    let head = doc.create_element("head");
    let charset = doc.create_element("meta");
    doc.set_attribute(charset, "charset", "utf-8")?;
    doc.append_child(head, charset)?;
    let viewport = doc.create_element("meta");
    doc.set_attribute(viewport, "name", "viewport")?;
    doc.set_attribute(viewport, "content", "width=device-width, initial-scale=1")?;
    doc.append_child(head, viewport)?;
    let title = doc.create_element("title");
    let title_text = doc.create_text(page.title.as_str());
    doc.append_child(title, title_text)?;
    doc.append_child(head, title)?;
    for href in &page.stylesheets {
        let link = doc.create_element("link");
        doc.set_attribute(link, "rel", "stylesheet")?;
        doc.set_attribute(link, "href", href)?;
        doc.append_child(head, link)?;
    }
    doc.append_child(html, head)?;

    let body = doc.create_element("body");
    let main = doc.create_element("main");
    let section = doc.create_element(container_tag);
    if let Some(id) = container.id() {
        doc.set_attribute(section, "id", id)?;
    }
    for class in container.classes() {
        doc.add_class(section, class)?;
    }
    doc.append_child(main, section)?;
    doc.append_child(body, main)?;
    doc.append_child(html, body)?;

    Ok((doc, section))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_matches_selector() {
        let selector = Selector::parse("div#work.project-entries").unwrap();
        let (doc, container) = build_page(&PageOptions::default(), &selector).unwrap();
        assert_eq!(doc.tag_name(container), Some("div"));
        assert_eq!(doc.find(&selector).next(), Some(container));
    }

    #[test]
    fn test_default_container_tag() {
        let selector = Selector::parse(".projects").unwrap();
        let (doc, container) = build_page(&PageOptions::default(), &selector).unwrap();
        assert_eq!(doc.tag_name(container), Some("section"));
    }

    #[test]
    fn test_void_container_rejected() {
        let selector = Selector::parse("img.projects").unwrap();
        let err = build_page(&PageOptions::default(), &selector).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[test]
    fn test_head_contents() {
        let page = PageOptions {
            title: "Angelo & Co".to_string(),
            lang: "en".to_string(),
            stylesheets: vec!["style.css".to_string()],
        };
        let selector = Selector::parse(".projects").unwrap();
        let (doc, _) = build_page(&page, &selector).unwrap();
        let html = doc.to_html();
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\"><head>"));
        assert!(html.contains("<title>Angelo &amp; Co</title>"));
        assert!(html.contains(r#"<link rel="stylesheet" href="style.css">"#));
        assert!(html.contains(r#"<main><section class="projects"></section></main>"#));
    }
}

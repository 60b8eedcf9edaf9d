//! The project renderer.
//!
//! Each record becomes one entry wrapper appended to the container:
//!
//! ```html
//! <div class="project-entries__project">
//!   <h3>Title</h3>
//!   <p>Description with <a href="https://…">links</a></p>
//!   <div><i class="fas fa-hammer"></i> Tech stack</div>
//!   <div><i class="fab fa-github"></i> <a href="repo_url">repo_label</a></div>
//! </div>
//! ```
//!
//! Rendering is append-only. Rendering the same records into the same
//! container twice yields two sets of entries.

use folio_content::{Inline, ProjectRecord};
use folio_core::{Error, Result};
use folio_dom::{Document, NodeId, is_void_element};

use crate::options::{Marker, RenderOptions};

/// Render `records` in order, appending one entry per record to `container`.
///
/// # Errors
///
/// Fails before touching the document if the options are invalid or
/// `container` is not a non-void element of `doc`.
pub fn render(
    doc: &mut Document,
    container: NodeId,
    records: &[ProjectRecord],
    options: &RenderOptions,
) -> Result<()> {
    options.validate()?;
    match doc.element(container) {
        None => {
            return Err(Error::invalid_node(format!(
                "container {container} is not an element of this document"
            )));
        }
        Some(el) if is_void_element(el.tag()) => {
            return Err(Error::invalid_node(format!(
                "container {container} is a <{}> element and cannot hold entries",
                el.tag()
            )));
        }
        Some(_) => {}
    }

    for record in records {
        let entry = build_entry(doc, record, options)?;
        doc.append_child(container, entry)?;
        log::debug!("Rendered project entry '{}'", record.title());
    }

    log::info!("Rendered {} project entries", records.len());
    Ok(())
}

/// Resolve the container from `options.container_selector`, then [`render`].
///
/// # Errors
///
/// Returns [`Error::ContainerNotFound`] when nothing matches the selector;
/// the document is left untouched in that case.
pub fn render_into(
    doc: &mut Document,
    records: &[ProjectRecord],
    options: &RenderOptions,
) -> Result<NodeId> {
    let selector = options.selector()?;
    let container = doc
        .find(&selector)
        .next()
        .ok_or_else(|| Error::ContainerNotFound {
            selector: options.container_selector.clone(),
        })?;
    render(doc, container, records, options)?;
    Ok(container)
}

/// Build one detached entry wrapper for `record`.
pub fn render_entry(
    doc: &mut Document,
    record: &ProjectRecord,
    options: &RenderOptions,
) -> Result<NodeId> {
    options.validate()?;
    build_entry(doc, record, options)
}

fn build_entry(
    doc: &mut Document,
    record: &ProjectRecord,
    options: &RenderOptions,
) -> Result<NodeId> {
    let entry = doc.create_element("div");
    doc.add_class(entry, &options.entry_class)?;

    let heading = doc.create_element(&options.heading_tag);
    append_text(doc, heading, record.title())?;

    let body = doc.create_element("p");
    for inline in record.description().inlines() {
        match inline {
            Inline::Text(text) => append_text(doc, body, text)?,
            Inline::Link { href, text } => {
                let anchor = anchor(doc, href, text)?;
                doc.append_child(body, anchor)?;
            }
        }
    }

    // Text first, then the icon goes in front of it.
    let tech = doc.create_element("div");
    append_text(doc, tech, record.tech_stack())?;
    let icon = marker(doc, &options.tech_icon)?;
    doc.prepend_children(tech, &icon)?;

    let link = doc.create_element("div");
    for node in marker(doc, &options.repo_icon)? {
        doc.append_child(link, node)?;
    }
    let repo = anchor(doc, record.repo_url(), record.repo_label())?;
    doc.append_child(link, repo)?;

    for child in [heading, body, tech, link] {
        doc.append_child(entry, child)?;
    }
    Ok(entry)
}

fn append_text(doc: &mut Document, parent: NodeId, text: &str) -> Result<()> {
    let node = doc.create_text(text);
    doc.append_child(parent, node)
}

fn anchor(doc: &mut Document, href: &str, text: &str) -> Result<NodeId> {
    let a = doc.create_element("a");
    doc.set_attribute(a, "href", href)?;
    append_text(doc, a, text)?;
    Ok(a)
}

/// The icon element and the space after it.
fn marker(doc: &mut Document, marker: &Marker) -> Result<[NodeId; 2]> {
    let icon = doc.create_element("i");
    doc.add_class(icon, marker.classes())?;
    let space = doc.create_text(" ");
    Ok([icon, space])
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn demo() -> ProjectRecord {
        ProjectRecord::new(
            "Demo",
            "A <a href='https://x.test'>tool</a>.",
            "Go",
            "me/demo",
            "https://github.com/me/demo",
        )
        .unwrap()
    }

    fn container(doc: &mut Document) -> NodeId {
        let section = doc.create_element("section");
        doc.add_class(section, "project-entries").unwrap();
        let root = doc.root();
        doc.append_child(root, section).unwrap();
        section
    }

    #[test]
    fn test_entry_markup() {
        let mut doc = Document::new();
        let entry = render_entry(&mut doc, &demo(), &RenderOptions::default()).unwrap();
        assert_eq!(
            doc.outer_html(entry),
            concat!(
                r#"<div class="project-entries__project">"#,
                "<h3>Demo</h3>",
                r#"<p>A <a href="https://x.test">tool</a>.</p>"#,
                r#"<div><i class="fas fa-hammer"></i> Go</div>"#,
                r#"<div><i class="fab fa-github"></i> <a href="https://github.com/me/demo">me/demo</a></div>"#,
                "</div>"
            )
        );
    }

    #[test]
    fn test_entry_is_detached() {
        let mut doc = Document::new();
        let entry = render_entry(&mut doc, &demo(), &RenderOptions::default()).unwrap();
        assert_eq!(doc.parent(entry), None);
    }

    #[test]
    fn test_title_is_escaped_not_interpreted() {
        let record =
            ProjectRecord::new("<b>Bold</b> & co", "d", "Rust", "me/x", "https://x.test").unwrap();
        let mut doc = Document::new();
        let entry = render_entry(&mut doc, &record, &RenderOptions::default()).unwrap();
        let heading = doc.element_children(entry)[0];
        assert_eq!(doc.text_content(heading), "<b>Bold</b> & co");
        assert!(doc.element_children(heading).is_empty());
        assert!(doc.outer_html(heading).contains("&lt;b&gt;Bold&lt;/b&gt; &amp; co"));
    }

    #[test]
    fn test_custom_options_applied() {
        let options = RenderOptions::default()
            .with_entry_class("card")
            .with_heading_tag("h2")
            .with_markers(Marker::new("icon-tools"), Marker::new("icon-repo"));
        let mut doc = Document::new();
        let entry = render_entry(&mut doc, &demo(), &options).unwrap();
        let html = doc.outer_html(entry);
        assert!(html.starts_with(r#"<div class="card"><h2>Demo</h2>"#));
        assert!(html.contains(r#"<i class="icon-tools"></i> Go"#));
        assert!(html.contains(r#"<i class="icon-repo"></i> <a"#));
    }

    #[test]
    fn test_render_rejects_text_container() {
        let mut doc = Document::new();
        let text = doc.create_text("not a container");
        let err = render(&mut doc, text, &[demo()], &RenderOptions::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidNode(_)));
    }

    #[test]
    fn test_render_rejects_void_container() {
        let mut doc = Document::new();
        let img = doc.create_element("img");
        let root = doc.root();
        doc.append_child(root, img).unwrap();
        let err = render(&mut doc, img, &[demo()], &RenderOptions::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidNode(_)));
        assert!(doc.children(img).is_empty());
    }

    #[test]
    fn test_render_invalid_options_leave_document_untouched() {
        let mut doc = Document::new();
        let section = container(&mut doc);
        let options = RenderOptions::default().with_heading_tag("span");
        assert!(render(&mut doc, section, &[demo()], &options).is_err());
        assert!(doc.children(section).is_empty());
    }

    #[test]
    fn test_render_into_missing_container() {
        let mut doc = Document::new();
        let err = render_into(&mut doc, &[demo()], &RenderOptions::default()).unwrap_err();
        match err {
            Error::ContainerNotFound { selector } => assert_eq!(selector, ".project-entries"),
            other => panic!("expected ContainerNotFound, got {other}"),
        }
        assert!(doc.children(doc.root()).is_empty());
    }

    #[test]
    fn test_render_empty_records_appends_nothing() {
        let mut doc = Document::new();
        let section = container(&mut doc);
        render(&mut doc, section, &[], &RenderOptions::default()).unwrap();
        assert!(doc.children(section).is_empty());
    }
}

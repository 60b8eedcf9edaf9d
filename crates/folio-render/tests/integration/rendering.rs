//! End-to-end rendering into a page document.

use folio_content::Catalog;
use folio_dom::Document;
use folio_render::{render, render_into, RenderOptions};

use crate::common::{demo_record, empty_page, entry_parts, first_anchor, numbered_record};

#[test]
fn test_demo_record_renders_single_entry() {
    let (mut doc, container) = empty_page();
    render(&mut doc, container, &[demo_record()], &RenderOptions::default()).unwrap();

    let entries = doc.children(container);
    assert_eq!(entries.len(), 1);
    let entry = entries[0];
    assert!(doc.has_class(entry, "project-entries__project"));

    let [heading, body, tech, link] = entry_parts(&doc, entry);
    assert_eq!(doc.tag_name(heading), Some("h3"));
    assert_eq!(doc.text_content(heading), "Demo");

    assert_eq!(doc.text_content(body), "A tool.");
    let body_link = first_anchor(&doc, body).unwrap();
    assert_eq!(doc.attribute(body_link, "href"), Some("https://x.test"));

    assert!(doc.text_content(tech).contains("Go"));

    let repo = first_anchor(&doc, link).unwrap();
    assert_eq!(doc.attribute(repo, "href"), Some("https://github.com/me/demo"));
    assert_eq!(doc.text_content(repo), "me/demo");
}

#[test]
fn test_tech_marker_precedes_text() {
    let (mut doc, container) = empty_page();
    render(&mut doc, container, &[demo_record()], &RenderOptions::default()).unwrap();

    let [_, _, tech, link] = entry_parts(&doc, doc.children(container)[0]);
    let tech_children = doc.children(tech);
    assert_eq!(doc.tag_name(tech_children[0]), Some("i"));
    assert_eq!(doc.classes(tech_children[0]), vec!["fas", "fa-hammer"]);
    assert_eq!(doc.text_content(tech), " Go");

    let link_children = doc.children(link);
    assert_eq!(doc.classes(link_children[0]), vec!["fab", "fa-github"]);
    assert_eq!(doc.tag_name(*link_children.last().unwrap()), Some("a"));
}

#[test]
fn test_render_twice_duplicates_entries() {
    let (mut doc, container) = empty_page();
    let records = [numbered_record(1), numbered_record(2)];
    let options = RenderOptions::default();

    render(&mut doc, container, &records, &options).unwrap();
    render(&mut doc, container, &records, &options).unwrap();

    let titles: Vec<_> = doc
        .children(container)
        .into_iter()
        .map(|entry| doc.text_content(entry_parts(&doc, entry)[0]))
        .collect();
    assert_eq!(
        titles,
        vec!["Project 1", "Project 2", "Project 1", "Project 2"]
    );
}

#[test]
fn test_render_into_resolves_configured_selector() {
    let mut doc = Document::new();
    let main = doc.create_element("main");
    let decoy = doc.create_element("section");
    doc.add_class(decoy, "project-entries").unwrap();
    let target = doc.create_element("div");
    doc.add_class(target, "projects").unwrap();
    let root = doc.root();
    doc.append_child(root, main).unwrap();
    doc.append_child(main, decoy).unwrap();
    doc.append_child(main, target).unwrap();

    let options = RenderOptions::default()
        .with_container_selector(".projects")
        .with_entry_class("projects__project");
    let container = render_into(&mut doc, &[demo_record()], &options).unwrap();

    assert_eq!(container, target);
    assert!(doc.children(decoy).is_empty());
    assert_eq!(doc.query_selector_all(".projects__project").unwrap().len(), 1);
}

#[test]
fn test_builtin_catalog_page_html() {
    let (mut doc, container) = empty_page();
    let catalog = Catalog::builtin().unwrap();
    render(&mut doc, container, catalog.records(), &RenderOptions::default()).unwrap();

    let html = doc.to_html();
    assert_eq!(html.matches(r#"<div class="project-entries__project">"#).count(), 3);
    assert!(html.contains(
        r#"Redesigned the website of <a href="https://axyl-os.github.io">Axyl</a>, helping"#
    ));
    assert!(html.contains(
        r#"<a href="https://github.com/angelofallars/top-calculator">angelofallars/top-calculator</a>"#
    ));
    assert!(html.find("Landing Page - Axyl") < html.find("Axyl Stats Bot"));
    assert!(html.find("Axyl Stats Bot") < html.find("Calculator</h3>"));
}

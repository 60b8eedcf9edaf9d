//! Shared fixtures for renderer integration tests.

use folio_content::ProjectRecord;
use folio_dom::{Document, NodeId};
use folio_render::{build_page, PageOptions, RenderOptions};

/// The record used throughout the renderer documentation.
pub fn demo_record() -> ProjectRecord {
    ProjectRecord::new(
        "Demo",
        "A <a href='https://x.test'>tool</a>.",
        "Go",
        "me/demo",
        "https://github.com/me/demo",
    )
    .expect("demo record is valid")
}

/// A plain record numbered `n`.
pub fn numbered_record(n: usize) -> ProjectRecord {
    ProjectRecord::new(
        format!("Project {n}"),
        &format!("Description {n}."),
        "Rust",
        format!("me/project-{n}"),
        format!("https://github.com/me/project-{n}"),
    )
    .expect("numbered record is valid")
}

/// A page whose container matches the default selector.
pub fn empty_page() -> (Document, NodeId) {
    let options = RenderOptions::default();
    build_page(&PageOptions::default(), &options.selector().unwrap()).unwrap()
}

/// The four parts of a rendered entry: heading, body, tech, link.
pub fn entry_parts(doc: &Document, entry: NodeId) -> [NodeId; 4] {
    let parts = doc.element_children(entry);
    assert_eq!(parts.len(), 4, "entry should have four element children");
    [parts[0], parts[1], parts[2], parts[3]]
}

/// The `<a>` inside a node, if any.
pub fn first_anchor(doc: &Document, node: NodeId) -> Option<NodeId> {
    doc.descendants(node)
        .find(|&n| doc.tag_name(n) == Some("a"))
}

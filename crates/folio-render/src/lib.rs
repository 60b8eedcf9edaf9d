//! Project renderer for Folio.
//!
//! Turns an ordered list of [`ProjectRecord`](folio_content::ProjectRecord)s
//! into entry blocks appended to a container of a
//! [`Document`](folio_dom::Document). The container is passed in explicitly
//! (or resolved from a configurable selector); the renderer holds no state.
//!
//! # Example
//!
//! ```rust
//! use folio_content::ProjectRecord;
//! use folio_dom::Document;
//! use folio_render::{render, RenderOptions};
//!
//! let record = ProjectRecord::new(
//!     "Demo",
//!     "A <a href='https://x.test'>tool</a>.",
//!     "Go",
//!     "me/demo",
//!     "https://github.com/me/demo",
//! )
//! .unwrap();
//!
//! let mut doc = Document::new();
//! let container = doc.create_element("section");
//! let root = doc.root();
//! doc.append_child(root, container).unwrap();
//!
//! render(&mut doc, container, &[record], &RenderOptions::default()).unwrap();
//! assert_eq!(doc.children(container).len(), 1);
//! ```

pub mod options;
pub mod page;
pub mod renderer;

pub use options::{Marker, RenderOptions};
pub use page::{build_page, PageOptions};
pub use renderer::{render, render_entry, render_into};

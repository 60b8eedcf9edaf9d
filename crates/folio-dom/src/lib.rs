//! In-memory document tree for Folio.
//!
//! This crate is the "document" a renderer writes into: an arena of element
//! and text nodes with just enough DOM surface for building markup, finding
//! a container by selector, and serializing the result as HTML.
//!
//! # Modules
//!
//! - [`document`]: [`Document`] and tree operations
//! - [`node`]: [`NodeId`] handles and node payloads
//! - [`selector`]: Compound selector parsing and matching
//! - [`serialize`]: HTML output and escaping

pub mod document;
pub mod node;
pub mod selector;
pub mod serialize;

pub use document::{Descendants, Document};
pub use node::{ElementData, NodeId, NodeKind};
pub use selector::Selector;
pub use serialize::{escape_attribute, escape_text, is_void_element};

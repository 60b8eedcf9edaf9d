//! The document tree.
//!
//! [`Document`] is an arena of nodes addressed by [`NodeId`] handles. It
//! offers the handful of DOM operations a renderer needs: creating elements
//! and text, appending and prepending children, class and attribute access,
//! `text_content`, and selector queries.
//!
//! ```rust
//! use folio_dom::Document;
//!
//! let mut doc = Document::new();
//! let section = doc.create_element("section");
//! doc.add_class(section, "projects").unwrap();
//! doc.append_child(doc.root(), section).unwrap();
//!
//! let found = doc.query_selector(".projects").unwrap();
//! assert_eq!(found, Some(section));
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use folio_core::{Error, Result};

use crate::node::{ElementData, NodeData, NodeId, NodeKind};
use crate::selector::Selector;

static NEXT_DOCUMENT_ID: AtomicU64 = AtomicU64::new(1);

/// An in-memory document tree.
#[derive(Debug)]
pub struct Document {
    id: u64,
    nodes: Vec<NodeData>,
}

impl Document {
    /// Create an empty document containing only the root node.
    pub fn new() -> Self {
        Self {
            id: NEXT_DOCUMENT_ID.fetch_add(1, Ordering::Relaxed),
            nodes: vec![NodeData::new(NodeKind::Document)],
        }
    }

    /// The document root.
    pub fn root(&self) -> NodeId {
        self.handle(0)
    }

    /// Number of nodes ever created in this document, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the document holds only its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    // ------------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------------

    /// Create a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeKind::Element(ElementData::new(tag)))
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.push(NodeKind::Text(text.into()))
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// A child that is already attached elsewhere is moved.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        let (parent_idx, child_idx) = self.check_insert(parent, child)?;
        self.detach(child_idx);
        self.nodes[parent_idx].children.push(child_idx);
        self.nodes[child_idx].parent = Some(parent_idx);
        Ok(())
    }

    /// Insert `child` as the first child of `parent`.
    pub fn prepend_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        let (parent_idx, child_idx) = self.check_insert(parent, child)?;
        self.detach(child_idx);
        self.nodes[parent_idx].children.insert(0, child_idx);
        self.nodes[child_idx].parent = Some(parent_idx);
        Ok(())
    }

    /// Insert several nodes at the start of `parent`, keeping their order.
    pub fn prepend_children(&mut self, parent: NodeId, children: &[NodeId]) -> Result<()> {
        for child in children.iter().rev() {
            self.prepend_child(parent, *child)?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Attributes and classes
    // ------------------------------------------------------------------------

    /// Set (or replace) an attribute on an element.
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<()> {
        self.element_mut(node)?.set_attribute(name, value);
        Ok(())
    }

    /// Read an attribute of an element. Non-elements have no attributes.
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node)?.attribute(name)
    }

    /// Add one or more whitespace-separated classes to an element.
    pub fn add_class(&mut self, node: NodeId, classes: &str) -> Result<()> {
        let element = self.element_mut(node)?;
        for class in classes.split_whitespace() {
            element.add_class(class);
        }
        Ok(())
    }

    /// Returns `true` if the node is an element listing `class`.
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node).is_some_and(|el| el.has_class(class))
    }

    /// Classes of an element, in attribute order.
    pub fn classes(&self, node: NodeId) -> Vec<&str> {
        self.element(node)
            .map(|el| el.classes().collect())
            .unwrap_or_default()
    }

    // ------------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------------

    /// Node payload, if the handle belongs to this document.
    pub fn kind(&self, node: NodeId) -> Option<&NodeKind> {
        self.index(node).map(|idx| &self.nodes[idx].kind)
    }

    /// Element payload, if the node is an element.
    pub fn element(&self, node: NodeId) -> Option<&ElementData> {
        match self.kind(node)? {
            NodeKind::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Tag name of an element.
    pub fn tag_name(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(ElementData::tag)
    }

    /// Parent of a node, if attached.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        let idx = self.index(node)?;
        self.nodes[idx].parent.map(|p| self.handle(p))
    }

    /// Children of a node, in order.
    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.index(node)
            .map(|idx| {
                self.nodes[idx]
                    .children
                    .iter()
                    .map(|&c| self.handle(c))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Element children only, in order.
    pub fn element_children(&self, node: NodeId) -> Vec<NodeId> {
        self.children(node)
            .into_iter()
            .filter(|&c| self.element(c).is_some())
            .collect()
    }

    /// Concatenated text of the node and all its descendants, in document
    /// order. Mirrors the DOM `textContent` getter.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        if let Some(idx) = self.index(node) {
            self.collect_text(idx, &mut out);
        }
        out
    }

    /// All descendants of `node` in pre-order, excluding `node` itself.
    pub fn descendants(&self, node: NodeId) -> Descendants<'_> {
        let stack: Vec<usize> = self
            .index(node)
            .map(|idx| self.nodes[idx].children.iter().rev().copied().collect())
            .unwrap_or_default();
        Descendants { doc: self, stack }
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    /// First element in document order matching `selector`.
    pub fn query_selector(&self, selector: &str) -> Result<Option<NodeId>> {
        let selector = Selector::parse(selector)?;
        Ok(self.find(&selector).next())
    }

    /// Every element in document order matching `selector`.
    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<NodeId>> {
        let selector = Selector::parse(selector)?;
        Ok(self.find(&selector).collect())
    }

    /// Elements matching an already parsed selector.
    pub fn find<'a>(&'a self, selector: &'a Selector) -> impl Iterator<Item = NodeId> + 'a {
        self.descendants(self.root())
            .filter(move |&n| self.element(n).is_some_and(|el| selector.matches(el)))
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    fn push(&mut self, kind: NodeKind) -> NodeId {
        self.nodes.push(NodeData::new(kind));
        self.handle(self.nodes.len() - 1)
    }

    fn handle(&self, index: usize) -> NodeId {
        NodeId {
            document: self.id,
            index,
        }
    }

    fn index(&self, node: NodeId) -> Option<usize> {
        (node.document == self.id && node.index < self.nodes.len()).then_some(node.index)
    }

    fn checked_index(&self, node: NodeId) -> Result<usize> {
        self.index(node)
            .ok_or_else(|| Error::invalid_node(format!("{node} does not belong to this document")))
    }

    fn element_mut(&mut self, node: NodeId) -> Result<&mut ElementData> {
        let idx = self.checked_index(node)?;
        match &mut self.nodes[idx].kind {
            NodeKind::Element(el) => Ok(el),
            _ => Err(Error::invalid_node(format!("{node} is not an element"))),
        }
    }

    fn check_insert(&self, parent: NodeId, child: NodeId) -> Result<(usize, usize)> {
        let parent_idx = self.checked_index(parent)?;
        let child_idx = self.checked_index(child)?;

        if matches!(self.nodes[parent_idx].kind, NodeKind::Text(_)) {
            return Err(Error::invalid_node(format!(
                "{parent} is a text node and cannot have children"
            )));
        }
        if matches!(self.nodes[child_idx].kind, NodeKind::Document) {
            return Err(Error::invalid_node("the document root cannot be inserted"));
        }

        // Inserting an ancestor (or the node itself) below the parent would
        // create a cycle.
        let mut cursor = Some(parent_idx);
        while let Some(idx) = cursor {
            if idx == child_idx {
                return Err(Error::invalid_node(format!(
                    "{child} is an ancestor of {parent}"
                )));
            }
            cursor = self.nodes[idx].parent;
        }

        Ok((parent_idx, child_idx))
    }

    fn detach(&mut self, child_idx: usize) {
        if let Some(old_parent) = self.nodes[child_idx].parent.take() {
            self.nodes[old_parent].children.retain(|&c| c != child_idx);
        }
    }

    fn collect_text(&self, idx: usize, out: &mut String) {
        match &self.nodes[idx].kind {
            NodeKind::Text(text) => out.push_str(text),
            _ => {
                for &child in &self.nodes[idx].children {
                    self.collect_text(child, out);
                }
            }
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Pre-order iterator over the descendants of a node.
pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<usize>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let idx = self.stack.pop()?;
        self.stack
            .extend(self.doc.nodes[idx].children.iter().rev().copied());
        Some(self.doc.handle(idx))
    }
}

// ============================================================================
// Tests
// ============================================================================

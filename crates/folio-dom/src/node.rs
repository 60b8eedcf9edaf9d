//! Node handles and node payloads.

use std::fmt;

/// Handle to a node inside a [`Document`](crate::Document).
///
/// Handles are cheap to copy. Each handle remembers which document issued
/// it, so passing a handle to another document is detected instead of
/// silently addressing an unrelated node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) document: u64,
    pub(crate) index: usize,
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}@doc{}", self.index, self.document)
    }
}

/// Element tag and attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementData {
    pub(crate) tag: String,
    pub(crate) attributes: Vec<(String, String)>,
}

impl ElementData {
    pub(crate) fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attributes: Vec::new(),
        }
    }

    /// Lowercase tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attributes in insertion order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Look up an attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub(crate) fn set_attribute(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self
                .attributes
                .push((name.to_string(), value.to_string())),
        }
    }

    /// Whitespace-separated entries of the `class` attribute.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attribute("class")
            .unwrap_or_default()
            .split_whitespace()
    }

    /// Returns `true` if the `class` attribute lists `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    pub(crate) fn add_class(&mut self, class: &str) {
        if self.has_class(class) {
            return;
        }
        let joined = match self.attribute("class") {
            Some(existing) if !existing.trim().is_empty() => format!("{} {class}", existing.trim()),
            _ => class.to_string(),
        };
        self.set_attribute("class", &joined);
    }
}

/// What a node holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// The document root. Exactly one per document.
    Document,
    /// An element with a tag and attributes.
    Element(ElementData),
    /// A run of text.
    Text(String),
}

#[derive(Clone, Debug)]
pub(crate) struct NodeData {
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<usize>,
    pub(crate) children: Vec<usize>,
}

impl NodeData {
    pub(crate) fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            parent: None,
            children: Vec::new(),
        }
    }
}

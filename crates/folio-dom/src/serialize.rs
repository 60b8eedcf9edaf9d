//! HTML serialization.
//!
//! Text is escaped for `&`, `<` and `>`; attribute values additionally for
//! `"`. Void elements are written without a closing tag or children.

use std::borrow::Cow;

use crate::document::Document;
use crate::node::{NodeId, NodeKind};

const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// Returns `true` for elements serialized without content or closing tag.
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS
        .iter()
        .any(|void| void.eq_ignore_ascii_case(tag))
}

/// Escape text for use as element content.
pub fn escape_text(text: &str) -> Cow<'_, str> {
    html_escape::encode_text(text)
}

/// Escape text for use inside a double-quoted attribute value.
pub fn escape_attribute(value: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(value)
}

impl Document {
    /// Markup of the node itself and everything below it.
    pub fn outer_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_node(node, &mut out);
        out
    }

    /// Markup of the node's children.
    pub fn inner_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        for child in self.children(node) {
            self.write_node(child, &mut out);
        }
        out
    }

    /// The whole document, prefixed with an HTML5 doctype.
    pub fn to_html(&self) -> String {
        format!("<!DOCTYPE html>\n{}\n", self.inner_html(self.root()))
    }

    fn write_node(&self, node: NodeId, out: &mut String) {
        match self.kind(node) {
            Some(NodeKind::Text(text)) => out.push_str(&escape_text(text)),
            Some(NodeKind::Document) => {
                for child in self.children(node) {
                    self.write_node(child, out);
                }
            }
            Some(NodeKind::Element(el)) => {
                out.push('<');
                out.push_str(el.tag());
                for (name, value) in el.attributes() {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&escape_attribute(value));
                    out.push('"');
                }
                out.push('>');
                if is_void_element(el.tag()) {
                    return;
                }
                for child in self.children(node) {
                    self.write_node(child, out);
                }
                out.push_str("</");
                out.push_str(el.tag());
                out.push('>');
            }
            None => {}
        }
    }
}

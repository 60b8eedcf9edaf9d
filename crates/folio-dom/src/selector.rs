//! Compound selectors.
//!
//! Only single compound selectors are understood: an optional tag name (or
//! `*`), followed by any number of `.class` parts and at most one `#id`.
//! Combinators (descendant, child, sibling) and attribute or pseudo selectors
//! are rejected.
//!
//! ```rust
//! use folio_dom::Selector;
//!
//! let sel: Selector = "section.project-entries".parse().unwrap();
//! assert_eq!(sel.tag(), Some("section"));
//! assert_eq!(sel.classes(), ["project-entries"]);
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use folio_core::{Error, Result};
use regex::Regex;

use crate::node::ElementData;

static COMPOUND_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\*|[A-Za-z][A-Za-z0-9-]*)?((?:[.#][A-Za-z_][A-Za-z0-9_-]*)*)$")
        .expect("Invalid compound selector regex")
});

static PART_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([.#])([A-Za-z_][A-Za-z0-9_-]*)").expect("Invalid selector part regex")
});

/// A parsed compound selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selector {
    source: String,
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Selector {
    /// Parse a selector string.
    pub fn parse(input: &str) -> Result<Self> {
        let source = input.trim();
        if source.is_empty() {
            return Err(Error::invalid_selector(input, "selector is empty"));
        }
        if source.contains(char::is_whitespace) || source.contains(['>', '+', '~', ',']) {
            return Err(Error::invalid_selector(
                input,
                "combinators and selector lists are not supported",
            ));
        }

        let caps = COMPOUND_RE.captures(source).ok_or_else(|| {
            Error::invalid_selector(input, "expected tag, .class and #id parts only")
        })?;

        let tag = caps
            .get(1)
            .map(|m| m.as_str())
            .filter(|t| *t != "*")
            .map(str::to_ascii_lowercase);

        let mut id = None;
        let mut classes = Vec::new();
        for part in PART_RE.captures_iter(caps.get(2).map_or("", |m| m.as_str())) {
            let name = part[2].to_string();
            if &part[1] == "#" {
                if id.is_some() {
                    return Err(Error::invalid_selector(input, "more than one #id part"));
                }
                id = Some(name);
            } else {
                classes.push(name);
            }
        }

        Ok(Self {
            source: source.to_string(),
            tag,
            id,
            classes,
        })
    }

    /// Tag constraint, if any. `*` is reported as `None`.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Id constraint, if any.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Required classes.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Check whether an element satisfies every part of the selector.
    pub fn matches(&self, element: &ElementData) -> bool {
        if let Some(tag) = &self.tag {
            if element.tag() != tag {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if element.attribute("id") != Some(id.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|class| element.has_class(class))
    }
}

impl FromStr for Selector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Presentation settings owned by the surrounding page.

use folio_core::{Error, Result};
use folio_dom::{Selector, is_void_element};
use serde::{Deserialize, Serialize};

/// Default container selector.
pub const DEFAULT_CONTAINER_SELECTOR: &str = ".project-entries";
/// Default class of each rendered project entry.
pub const DEFAULT_ENTRY_CLASS: &str = "project-entries__project";
/// Default heading element.
pub const DEFAULT_HEADING_TAG: &str = "h3";
/// Default icon classes before the tech stack.
pub const DEFAULT_TECH_ICON: &str = "fas fa-hammer";
/// Default icon classes before the repository link.
pub const DEFAULT_REPO_ICON: &str = "fab fa-github";

const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

/// A fixed decorative icon, written as `<i class="…"></i>` plus a space.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Marker {
    classes: String,
}

impl Marker {
    /// Create a marker from whitespace-separated icon classes.
    pub fn new(classes: impl Into<String>) -> Self {
        Self {
            classes: classes.into(),
        }
    }

    /// Icon classes as written.
    pub fn classes(&self) -> &str {
        &self.classes
    }
}

/// Settings for rendering project entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    /// Selector of the container that receives the entries.
    pub container_selector: String,
    /// Class added to each entry wrapper.
    pub entry_class: String,
    /// Heading element for titles (`h1`–`h6`).
    pub heading_tag: String,
    /// Icon in front of the tech stack.
    pub tech_icon: Marker,
    /// Icon in front of the repository link.
    pub repo_icon: Marker,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            container_selector: DEFAULT_CONTAINER_SELECTOR.to_string(),
            entry_class: DEFAULT_ENTRY_CLASS.to_string(),
            heading_tag: DEFAULT_HEADING_TAG.to_string(),
            tech_icon: Marker::new(DEFAULT_TECH_ICON),
            repo_icon: Marker::new(DEFAULT_REPO_ICON),
        }
    }
}

impl RenderOptions {
    /// Replace the container selector.
    pub fn with_container_selector(mut self, selector: impl Into<String>) -> Self {
        self.container_selector = selector.into();
        self
    }

    /// Replace the entry wrapper class.
    pub fn with_entry_class(mut self, class: impl Into<String>) -> Self {
        self.entry_class = class.into();
        self
    }

    /// Replace the heading element.
    pub fn with_heading_tag(mut self, tag: impl Into<String>) -> Self {
        self.heading_tag = tag.into();
        self
    }

    /// Replace both decorative markers.
    pub fn with_markers(mut self, tech: Marker, repo: Marker) -> Self {
        self.tech_icon = tech;
        self.repo_icon = repo;
        self
    }

    /// Parsed container selector.
    pub fn selector(&self) -> Result<Selector> {
        Selector::parse(&self.container_selector)
    }

    /// Check every setting.
    pub fn validate(&self) -> Result<()> {
        let selector = self.selector()?;
        if let Some(tag) = selector.tag().filter(|tag| is_void_element(tag)) {
            return Err(Error::validation_field(
                "container_selector",
                format!("<{tag}> cannot hold project entries"),
            ));
        }

        let class = self.entry_class.trim();
        if class.is_empty() || class.contains(char::is_whitespace) {
            return Err(Error::validation_field(
                "entry_class",
                format!("'{}' must be a single class name", self.entry_class),
            ));
        }
        if !HEADING_TAGS.contains(&self.heading_tag.to_ascii_lowercase().as_str()) {
            return Err(Error::validation_field(
                "heading_tag",
                format!("'{}' is not h1-h6", self.heading_tag),
            ));
        }
        for (field, marker) in [("tech_icon", &self.tech_icon), ("repo_icon", &self.repo_icon)] {
            if marker.classes().trim().is_empty() {
                return Err(Error::validation_field(field, "icon classes must not be empty"));
            }
        }
        Ok(())
    }
}

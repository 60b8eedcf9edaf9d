//! The project record value type.

use folio_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::markup::{is_http_url, Description};

/// One portfolio project.
///
/// Immutable once built: every field is validated on construction and only
/// exposed through accessors. Deserialization goes through the same checks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawProjectRecord", into = "RawProjectRecord")]
pub struct ProjectRecord {
    title: String,
    description: Description,
    tech_stack: String,
    repo_label: String,
    repo_url: String,
}

impl ProjectRecord {
    /// Build a record, validating every field.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the field if any field is blank,
    /// the description contains unsupported markup, or `repo_url` is not an
    /// absolute `http`/`https` URL.
    pub fn new(
        title: impl Into<String>,
        description: &str,
        tech_stack: impl Into<String>,
        repo_label: impl Into<String>,
        repo_url: impl Into<String>,
    ) -> Result<Self> {
        let title = required("title", title.into())?;
        let tech_stack = required("tech_stack", tech_stack.into())?;
        let repo_label = required("repo_label", repo_label.into())?;
        let repo_url = required("repo_url", repo_url.into())?;
        if !is_http_url(&repo_url) {
            return Err(Error::validation_field(
                "repo_url",
                format!("'{repo_url}' is not an absolute http(s) URL"),
            ));
        }
        let description = Description::parse(description).map_err(|e| match e {
            Error::Validation { message, .. } => {
                Error::validation_field("description", format!("{title}: {message}"))
            }
            other => other,
        })?;

        Ok(Self {
            title,
            description,
            tech_stack,
            repo_label,
            repo_url,
        })
    }

    /// Display title. Always rendered as text.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Description with its validated inline links.
    pub fn description(&self) -> &Description {
        &self.description
    }

    /// Free-text list of technologies used.
    pub fn tech_stack(&self) -> &str {
        &self.tech_stack
    }

    /// Label for the repository link, e.g. `owner/name`.
    pub fn repo_label(&self) -> &str {
        &self.repo_label
    }

    /// Absolute repository URL.
    pub fn repo_url(&self) -> &str {
        &self.repo_url
    }
}

/// Unvalidated on-disk shape of a [`ProjectRecord`].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawProjectRecord {
    /// Display title
    pub title: String,
    /// Description markup
    pub description: String,
    /// Technologies used
    pub tech_stack: String,
    /// Repository link label
    pub repo_label: String,
    /// Repository URL
    pub repo_url: String,
}

impl TryFrom<RawProjectRecord> for ProjectRecord {
    type Error = Error;

    fn try_from(raw: RawProjectRecord) -> Result<Self> {
        ProjectRecord::new(
            raw.title,
            &raw.description,
            raw.tech_stack,
            raw.repo_label,
            raw.repo_url,
        )
    }
}

impl From<ProjectRecord> for RawProjectRecord {
    fn from(record: ProjectRecord) -> Self {
        Self {
            title: record.title,
            description: record.description.as_str().to_string(),
            tech_stack: record.tech_stack,
            repo_label: record.repo_label,
            repo_url: record.repo_url,
        }
    }
}

fn required(field: &str, value: String) -> Result<String> {
    if value.trim().is_empty() {
        return Err(Error::validation_field(field, "must not be empty"));
    }
    Ok(value)
}

// ============================================================================
// Tests
// ============================================================================

//! Ordered project catalogs.
//!
//! A [`Catalog`] is the fixed list of records handed to the renderer. The
//! built-in catalog is embedded in the binary; other catalogs are read from
//! TOML files made of `[[project]]` tables:
//!
//! ```toml
//! [[project]]
//! title = "Demo"
//! description = "A <a href='https://x.test'>tool</a>."
//! tech_stack = "Go"
//! repo_label = "me/demo"
//! repo_url = "https://github.com/me/demo"
//! ```

use std::path::Path;

use folio_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::record::ProjectRecord;

const BUILTIN_CATALOG: &str = include_str!("../data/projects.toml");

/// An ordered, immutable list of project records.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    #[serde(default, rename = "project")]
    projects: Vec<ProjectRecord>,
}

impl Catalog {
    /// Wrap an already validated list, keeping its order.
    pub fn new(projects: Vec<ProjectRecord>) -> Self {
        Self { projects }
    }

    /// The catalog embedded in the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Parse a catalog from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::parse(format!("Invalid catalog: {e}")))
    }

    /// Read a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let catalog: Self = toml::from_str(&content)
            .map_err(|e| Error::parse(format!("Invalid catalog {}: {e}", path.display())))?;
        log::info!(
            "Loaded {} project(s) from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Records in catalog order.
    pub fn records(&self) -> &[ProjectRecord] {
        &self.projects
    }

    /// Iterate records in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, ProjectRecord> {
        self.projects.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Returns `true` if the catalog has no records.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ProjectRecord;
    type IntoIter = std::slice::Iter<'a, ProjectRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.projects.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================

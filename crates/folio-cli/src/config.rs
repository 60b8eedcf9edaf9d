//! Folio configuration file.
//!
//! ```toml
//! catalog = "projects.toml"
//!
//! [render]
//! container_selector = ".project-entries"
//! entry_class = "project-entries__project"
//! heading_tag = "h3"
//! tech_icon = "fas fa-hammer"
//! repo_icon = "fab fa-github"
//!
//! [page]
//! title = "Projects"
//! lang = "en"
//! stylesheets = []
//! ```

use folio_core::{ConfigManager, Result};
use folio_render::{PageOptions, RenderOptions};
use serde::{Deserialize, Serialize};

const ENV_CATALOG: &str = "FOLIO_CATALOG";
const ENV_CONTAINER_SELECTOR: &str = "FOLIO_RENDER_CONTAINER_SELECTOR";
const ENV_ENTRY_CLASS: &str = "FOLIO_RENDER_ENTRY_CLASS";
const ENV_HEADING_TAG: &str = "FOLIO_RENDER_HEADING_TAG";
const ENV_PAGE_TITLE: &str = "FOLIO_PAGE_TITLE";

/// Top-level configuration for the `folio` binary.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FolioConfig {
    /// Catalog file to render instead of the built-in one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
    /// Renderer settings.
    pub render: RenderOptions,
    /// Page shell settings.
    pub page: PageOptions,
}

impl ConfigManager for FolioConfig {
    fn project_name() -> &'static str {
        "folio"
    }

    fn apply_env_overrides(&mut self, lookup: &dyn Fn(&str) -> Option<String>) {
        if let Some(catalog) = lookup(ENV_CATALOG) {
            self.catalog = Some(catalog);
        }
        if let Some(selector) = lookup(ENV_CONTAINER_SELECTOR) {
            self.render.container_selector = selector;
        }
        if let Some(class) = lookup(ENV_ENTRY_CLASS) {
            self.render.entry_class = class;
        }
        if let Some(tag) = lookup(ENV_HEADING_TAG) {
            self.render.heading_tag = tag;
        }
        if let Some(title) = lookup(ENV_PAGE_TITLE) {
            self.page.title = title;
        }
    }

    fn to_env_vars(&self) -> Result<Vec<(String, String)>> {
        let mut vars = Vec::new();
        if let Some(catalog) = &self.catalog {
            vars.push((ENV_CATALOG.to_string(), catalog.clone()));
        }
        vars.push((
            ENV_CONTAINER_SELECTOR.to_string(),
            self.render.container_selector.clone(),
        ));
        vars.push((ENV_ENTRY_CLASS.to_string(), self.render.entry_class.clone()));
        vars.push((ENV_HEADING_TAG.to_string(), self.render.heading_tag.clone()));
        vars.push((ENV_PAGE_TITLE.to_string(), self.page.title.clone()));
        Ok(vars)
    }
}

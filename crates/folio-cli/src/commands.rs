//! Handlers for `folio render` and `folio list`.

use std::io::Write;
use std::path::Path;

use folio_content::Catalog;
use folio_render::{build_page, render_into};

use crate::cli::RenderArgs;
use crate::config::FolioConfig;
use crate::error::Result;

/// Pick the catalog: explicit path, then configured path, then built-in.
pub fn load_catalog(config: &FolioConfig, explicit: Option<&Path>) -> Result<Catalog> {
    let catalog = match explicit.or(config.catalog.as_deref().map(Path::new)) {
        Some(path) => Catalog::load(path)?,
        None => {
            log::debug!("Using built-in catalog");
            Catalog::builtin()?
        }
    };
    if catalog.is_empty() {
        log::warn!("Catalog has no projects; the container will stay empty");
    }
    Ok(catalog)
}

/// Render the full page for `catalog` as an HTML string.
pub fn render_page(config: &FolioConfig, catalog: &Catalog) -> Result<String> {
    let selector = config.render.selector()?;
    let (mut doc, _) = build_page(&config.page, &selector)?;
    render_into(&mut doc, catalog.records(), &config.render)?;
    Ok(doc.to_html())
}

/// `folio render`.
pub fn cmd_render(mut config: FolioConfig, args: RenderArgs) -> Result<()> {
    if let Some(selector) = args.selector {
        config.render.container_selector = selector;
    }
    if let Some(class) = args.entry_class {
        config.render.entry_class = class;
    }

    let catalog = load_catalog(&config, args.catalog.as_deref())?;
    let html = render_page(&config, &catalog)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &html).map_err(|e| folio_core::Error::io_with_path(e, path))?;
            log::info!("Wrote {} project(s) to {}", catalog.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// `folio list`.
pub fn cmd_list(config: &FolioConfig, catalog: Option<&Path>, json: bool) -> Result<()> {
    let catalog = load_catalog(config, catalog)?;
    let mut stdout = std::io::stdout().lock();
    for line in list_lines(&catalog, json)? {
        writeln!(stdout, "{line}")?;
    }
    Ok(())
}

/// Lines printed by `folio list`.
pub fn list_lines(catalog: &Catalog, json: bool) -> Result<Vec<String>> {
    if json {
        return Ok(vec![serde_json::to_string_pretty(catalog.records())?]);
    }
    Ok(catalog
        .iter()
        .enumerate()
        .map(|(i, record)| {
            format!(
                "{:>2}. {} [{}] {}",
                i + 1,
                record.title(),
                record.tech_stack(),
                record.repo_url()
            )
        })
        .collect())
}

//! Offline rendering: no database, no copy service, no network.
//!
//! Used by the `render` and `preview` commands to look at templates with a
//! hand-written [`BrandConfig`]. Each template lands in its own directory as
//! `index.html` plus `styles.css`.
//!
//! ```text
//! preview/
//! ├── t1/
//! │   ├── index.html
//! │   └── styles.css
//! ├── t2/
//! └── ...
//! ```
//!
//! Templates are rendered in parallel with [rayon](https://docs.rs/rayon);
//! renderers are pure, so there is nothing to coordinate.

use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

use crate::templates;
use crate::types::{BrandConfig, RenderedPage, TemplateId};

/// One rendered template on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFiles {
    pub template: TemplateId,
    pub dir: PathBuf,
    pub html_bytes: usize,
    pub css_bytes: usize,
}

/// Write `page` as `index.html` + `styles.css` under `dir`.
pub fn write_page(page: &RenderedPage, dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dir)?;
    fs::write(dir.join("index.html"), &page.html)?;
    fs::write(dir.join("styles.css"), &page.css)?;
    Ok(())
}

/// Render `brand` with one template into `dir`.
pub fn render_to_dir(
    template: TemplateId,
    brand: &BrandConfig,
    dir: &Path,
) -> std::io::Result<RenderedFiles> {
    let page = templates::render(template, brand);
    write_page(&page, dir)?;
    Ok(RenderedFiles {
        template,
        dir: dir.to_path_buf(),
        html_bytes: page.html.len(),
        css_bytes: page.css.len(),
    })
}

/// Render `brand` with every template, one subdirectory per template id.
///
/// Results come back in catalogue order regardless of completion order.
pub fn preview_all(brand: &BrandConfig, out: &Path) -> std::io::Result<Vec<RenderedFiles>> {
    TemplateId::ALL
        .par_iter()
        .map(|&id| render_to_dir(id, brand, &out.join(id.as_str())))
        .collect()
}

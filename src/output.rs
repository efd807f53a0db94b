//! CLI output formatting for every command.
//!
//! # Output Format
//!
//! ## Templates
//!
//! ```text
//! 001 t1 Minimal SaaS
//!     Clean, professional design perfect for SaaS and tech companies
//! 005 t5 iGaming Casino (game)
//!     Interactive casino slot machine with animated elements and gaming features
//! ```
//!
//! ## Render / Preview
//!
//! ```text
//! t1 Minimal SaaS → preview/t1
//!     index.html: 9.2 KB
//!     styles.css: 3.1 KB
//! Rendered 7 templates
//! ```
//!
//! ## Export
//!
//! ```text
//! acme (published, t6 via t7) → out/acme
//!     index.html  3f1c…
//!     styles.css  9ab2…
//!     site.json
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use std::path::Path;

use crate::config::AppConfig;
use crate::preview::RenderedFiles;
use crate::publish::Package;
use crate::templates::{TemplateDefinition, lookup};

// ============================================================================
// Shared helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Human-readable byte count: `512 B`, `9.2 KB`, `1.4 MB`.
fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    let b = bytes as f64;
    if b < KB {
        format!("{bytes} B")
    } else if b < KB * KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{:.1} MB", b / (KB * KB))
    }
}

/// First `n` characters of a digest, for display.
fn short_digest(digest: &str, n: usize) -> String {
    let short: String = digest.chars().take(n).collect();
    if short.len() < digest.len() {
        format!("{short}\u{2026}")
    } else {
        short
    }
}

// ============================================================================
// templates
// ============================================================================

pub fn format_templates(templates: &[TemplateDefinition]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, t) in templates.iter().enumerate() {
        let kind = if t.interactive { " (game)" } else { "" };
        lines.push(format!("{} {} {}{}", format_index(i + 1), t.id, t.name, kind));
        lines.push(format!("{}{}", indent(1), t.description));
    }
    lines
}

pub fn print_templates(templates: &[TemplateDefinition]) {
    for line in format_templates(templates) {
        println!("{}", line);
    }
}

// ============================================================================
// render / preview
// ============================================================================

pub fn format_rendered(files: &[RenderedFiles]) -> Vec<String> {
    let mut lines = Vec::new();
    for f in files {
        lines.push(format!(
            "{} {} \u{2192} {}",
            f.template,
            lookup(f.template).name,
            f.dir.display()
        ));
        lines.push(format!("{}index.html: {}", indent(1), format_size(f.html_bytes)));
        lines.push(format!("{}styles.css: {}", indent(1), format_size(f.css_bytes)));
    }
    let noun = if files.len() == 1 { "template" } else { "templates" };
    lines.push(format!("Rendered {} {}", files.len(), noun));
    lines
}

pub fn print_rendered(files: &[RenderedFiles]) {
    for line in format_rendered(files) {
        println!("{}", line);
    }
}

// ============================================================================
// export
// ============================================================================

pub fn format_export(package: &Package, dir: &Path) -> Vec<String> {
    let m = &package.manifest;
    let via = if m.template_id == m.renderer_id {
        m.template_id.to_string()
    } else {
        format!("{} via {}", m.template_id, m.renderer_id)
    };
    let mut lines = vec![format!(
        "{} ({}, {}) \u{2192} {}",
        m.slug,
        m.status,
        via,
        dir.display()
    )];
    for file in &m.files {
        lines.push(format!(
            "{}{}  {}",
            indent(1),
            file.name,
            short_digest(&file.sha256, 12)
        ));
    }
    lines.push(format!("{}site.json", indent(1)));
    lines
}

pub fn print_export(package: &Package, dir: &Path) {
    for line in format_export(package, dir) {
        println!("{}", line);
    }
}

// ============================================================================
// check-config
// ============================================================================

pub fn format_config_summary(config: &AppConfig) -> Vec<String> {
    vec![
        format!("server: {}", config.server.bind_address()),
        format!("database: {}", config.database.path),
        format!(
            "colors: {} / {} / {}",
            config.colors.primary, config.colors.secondary, config.colors.accent
        ),
        format!("copy: {} ({})", config.copy.model, config.copy.endpoint),
        format!("{}api key from ${}", indent(1), config.copy.api_key_env),
        format!("auth: {} token(s)", config.auth.tokens.len()),
    ]
}

pub fn print_config_summary(config: &AppConfig) {
    for line in format_config_summary(config) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================

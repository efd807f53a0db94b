//! Landing page templates.
//!
//! Every template is a pure function `fn(&BrandConfig) -> RenderedPage`:
//! no I/O, no shared state, byte-identical output for identical input. The
//! [`registry`] lists them in catalogue order and [`lookup`] maps a
//! [`TemplateId`] to its definition. Adding a template means one new
//! `TemplateId` variant, one module here and one registry entry.
//!
//! ## Catalogue
//!
//! | Id | Module | Kind |
//! |----|--------|------|
//! | t1 | [`minimal_saas`] | static |
//! | t2 | [`bold_marketing`] | static |
//! | t3 | [`lead_generation`] | static, lead-capture form |
//! | t4 | [`casino_gaming`] | static |
//! | t5 | [`igaming_slots`] | game: single-line reels |
//! | t6 | [`rollover_slots`] | game: three rollover lines |
//! | t7 | [`bonanza_slots`] | game: 3×3 grid |
//!
//! ## Shared contract
//!
//! - Complete document: doctype, `<title>` = `"{brand} - {headline}"`, a
//!   `<style>` block carrying the CSS, a `<body>`.
//! - CSS starts with the `:root { --brand-* }` block from
//!   [`generate_css_variables`]; colors also appear inline as plain values.
//! - No logo URL → no logo element at all.
//! - No CTA URL → the call to action is a button that does nothing.
//! - Brand text goes through maud escaping, or [`js_string`] inside scripts.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.

pub mod bold_marketing;
pub mod bonanza_slots;
pub mod casino_gaming;
pub mod igaming_slots;
pub mod lead_generation;
pub mod minimal_saas;
pub mod rollover_slots;
pub mod slots;

use maud::{DOCTYPE, Markup, PreEscaped, html};
use serde::Serialize;

use crate::palette::generate_css_variables;
use crate::types::{BrandConfig, RenderedPage, TemplateId};

/// Renderer signature shared by every template.
pub type RenderFn = fn(&BrandConfig) -> RenderedPage;

/// One catalogue entry.
pub struct TemplateDefinition {
    pub id: TemplateId,
    pub name: &'static str,
    pub description: &'static str,
    /// Game templates embed a slot machine script.
    pub interactive: bool,
    pub render: RenderFn,
}

impl TemplateDefinition {
    pub fn summary(&self) -> TemplateSummary {
        TemplateSummary {
            id: self.id,
            name: self.name,
            description: self.description,
            interactive: self.interactive,
        }
    }
}

/// Serializable view of a [`TemplateDefinition`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateSummary {
    pub id: TemplateId,
    pub name: &'static str,
    pub description: &'static str,
    pub interactive: bool,
}

/// Ordered by [`TemplateId`] discriminant; [`lookup`] indexes into it.
static REGISTRY: [TemplateDefinition; 7] = [
    TemplateDefinition {
        id: TemplateId::T1,
        name: "Minimal SaaS",
        description: "Clean, professional design perfect for SaaS and tech companies",
        interactive: false,
        render: minimal_saas::render,
    },
    TemplateDefinition {
        id: TemplateId::T2,
        name: "Bold Marketing",
        description: "Eye-catching design with strong visual impact for marketing campaigns",
        interactive: false,
        render: bold_marketing::render,
    },
    TemplateDefinition {
        id: TemplateId::T3,
        name: "Lead Generation",
        description: "Conversion-focused design with prominent forms and CTAs",
        interactive: false,
        render: lead_generation::render,
    },
    TemplateDefinition {
        id: TemplateId::T4,
        name: "Casino Gaming",
        description: "High-energy casino design with vibrant colors and gaming elements",
        interactive: false,
        render: casino_gaming::render,
    },
    TemplateDefinition {
        id: TemplateId::T5,
        name: "iGaming Casino",
        description: "Interactive casino slot machine with animated elements and gaming features",
        interactive: true,
        render: igaming_slots::render,
    },
    TemplateDefinition {
        id: TemplateId::T6,
        name: "Olavivo Casino Slots",
        description: "Interactive 3-line slot machine with animated symbols and casino atmosphere",
        interactive: true,
        render: rollover_slots::render,
    },
    TemplateDefinition {
        id: TemplateId::T7,
        name: "Bonanza Billion Slots",
        description: "3x3 slot grid with row, column and diagonal wins and a jackpot bonus",
        interactive: true,
        render: bonanza_slots::render,
    },
];

/// All templates in catalogue order.
pub fn registry() -> &'static [TemplateDefinition] {
    &REGISTRY
}

/// The definition for `id`. Total: every [`TemplateId`] has a renderer.
pub fn lookup(id: TemplateId) -> &'static TemplateDefinition {
    &REGISTRY[id as usize]
}

/// Render `brand` with template `id`.
pub fn render(id: TemplateId, brand: &BrandConfig) -> RenderedPage {
    (lookup(id).render)(brand)
}

// ============================================================================
// Shared building blocks
// ============================================================================

/// Prepend the brand color variables to a template stylesheet.
pub(crate) fn stylesheet(brand: &BrandConfig, rules: &str) -> String {
    format!("{}\n{}", generate_css_variables(&brand.colors), rules.trim_start())
}

/// Wrap body content in a complete HTML document.
fn base_document(brand: &BrandConfig, css: &str, body_class: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (brand.page_title()) }
                @if let Some(description) = &brand.description {
                    meta name="description" content=(description);
                }
                style { (PreEscaped(css)) }
            }
            body class=[body_class] {
                (content)
            }
        }
    }
}

/// Finish a template: document markup plus the CSS it embeds.
pub(crate) fn page(
    brand: &BrandConfig,
    css: String,
    body_class: Option<&str>,
    content: Markup,
) -> RenderedPage {
    let html = base_document(brand, &css, body_class, content).into_string();
    RenderedPage { html, css }
}

/// Brand logo, or nothing when no logo URL is set.
pub(crate) fn logo(brand: &BrandConfig, class: &str) -> Markup {
    html! {
        @if let Some(url) = &brand.logo_url {
            img class=(class) src=(url) alt=(brand.brand_name);
        }
    }
}

/// Primary call to action.
///
/// With a CTA URL this is a link opening in a new tab; without one it is an
/// inert button (demo mode).
pub(crate) fn cta(brand: &BrandConfig, class: &str, label: &str) -> Markup {
    html! {
        @if let Some(url) = &brand.cta_url {
            a class=(class) href=(url) target="_blank" rel="noopener noreferrer" { (label) }
        } @else {
            button class=(class) type="button" data-demo-cta="true" { (label) }
        }
    }
}

/// Encode `value` as a JavaScript string literal safe to embed in `<script>`.
///
/// JSON quoting plus escapes for `<`, `>`, `&` and the U+2028/U+2029 line
/// separators, so brand text can never close the script element.
pub fn js_string(value: &str) -> String {
    let json = serde_json::Value::String(value.to_string()).to_string();
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{brand_with, sample_brand};

    fn all_pages(brand: &BrandConfig) -> Vec<(TemplateId, RenderedPage)> {
        TemplateId::ALL
            .into_iter()
            .map(|id| (id, render(id, brand)))
            .collect()
    }

    // =========================================================================
    // Registry
    // =========================================================================

    #[test]
    fn lookup_returns_matching_definition() {
        for id in TemplateId::ALL {
            assert_eq!(lookup(id).id, id);
        }
        assert_eq!(registry().len(), TemplateId::ALL.len());
    }

    #[test]
    fn catalogue_names() {
        assert_eq!(lookup(TemplateId::T1).name, "Minimal SaaS");
        assert_eq!(lookup(TemplateId::T6).name, "Olavivo Casino Slots");
        let interactive: Vec<TemplateId> = registry()
            .iter()
            .filter(|t| t.interactive)
            .map(|t| t.id)
            .collect();
        assert_eq!(interactive, vec![TemplateId::T5, TemplateId::T6, TemplateId::T7]);
    }

    #[test]
    fn summary_serializes_id_lowercase() {
        let json = serde_json::to_value(lookup(TemplateId::T3).summary()).unwrap();
        assert_eq!(json["id"], "t3");
        assert_eq!(json["name"], "Lead Generation");
    }

    // =========================================================================
    // Shared contract, checked on every template
    // =========================================================================

    #[test]
    fn rendering_is_deterministic() {
        let brand = sample_brand();
        for (id, first) in all_pages(&brand) {
            let second = render(id, &brand);
            assert_eq!(first, second, "{id} output differs between runs");
        }
    }

    #[test]
    fn every_page_is_a_complete_document() {
        let brand = sample_brand();
        for (id, page) in all_pages(&brand) {
            assert!(page.html.starts_with("<!DOCTYPE html>"), "{id}");
            assert!(
                page.html.contains("<title>Acme - Launch faster</title>"),
                "{id} title"
            );
            assert!(page.html.contains("<body"), "{id} body");
            assert!(page.html.contains(&page.css), "{id} embeds its css");
            assert!(page.css.starts_with(":root {"), "{id} css variables");
        }
    }

    #[test]
    fn every_page_contains_brand_copy_and_colors() {
        let brand = sample_brand();
        for (id, page) in all_pages(&brand) {
            for needle in ["Acme", "Launch faster", "Ship in days, not months", "Start now"] {
                assert!(page.html.contains(needle), "{id} missing {needle:?}");
            }
            assert!(page.html.contains("#3B82F6"), "{id} primary color");
        }
    }

    #[test]
    fn logo_present_renders_img() {
        let brand = brand_with(|b| b.logo_url = Some("https://cdn.example.com/acme.png".into()));
        for (id, page) in all_pages(&brand) {
            assert!(
                page.html.contains(r#"src="https://cdn.example.com/acme.png""#),
                "{id} missing logo"
            );
        }
    }

    #[test]
    fn logo_absent_renders_no_logo_element() {
        let brand = sample_brand();
        for (id, page) in all_pages(&brand) {
            assert!(!page.html.contains("<img"), "{id} has an img without a logo");
        }
    }

    #[test]
    fn cta_url_present_links_out() {
        let brand = brand_with(|b| b.cta_url = Some("https://acme.test/signup".into()));
        for (id, page) in all_pages(&brand) {
            assert!(
                page.html.contains(r#"href="https://acme.test/signup""#),
                "{id} missing CTA link"
            );
            assert!(!page.html.contains("data-demo-cta"), "{id}");
        }
    }

    #[test]
    fn cta_url_absent_is_demo_mode() {
        let brand = sample_brand();
        for (id, page) in all_pages(&brand) {
            assert!(page.html.contains("data-demo-cta"), "{id} demo CTA");
            assert!(!page.html.contains("example.com"), "{id} invents a CTA target");
            assert!(!page.html.contains("window.open(\"http"), "{id}");
        }
    }

    #[test]
    fn brand_text_is_escaped() {
        let brand = brand_with(|b| {
            b.brand_name = "<script>alert(1)</script>".into();
            b.copy.headline = "Fast & \"safe\"".into();
        });
        for (id, page) in all_pages(&brand) {
            assert!(!page.html.contains("<script>alert(1)"), "{id} unescaped brand");
            assert!(page.html.contains("&lt;script&gt;"), "{id}");
        }
    }

    #[test]
    fn description_becomes_meta_tag() {
        let brand = sample_brand();
        let page = render(TemplateId::T1, &brand);
        assert!(page.html.contains(r#"<meta name="description" content="A sample business description long enough.">"#));

        let bare = brand_with(|b| b.description = None);
        assert!(!render(TemplateId::T1, &bare).html.contains(r#"name="description""#));
    }

    // =========================================================================
    // js_string
    // =========================================================================

    #[test]
    fn js_string_quotes_and_escapes() {
        assert_eq!(js_string("Acme"), r#""Acme""#);
        assert_eq!(js_string(r#"a"b\c"#), r#""a\"b\\c""#);
        assert_eq!(
            js_string("</script><b>&"),
            r#""\u003c/script\u003e\u003cb\u003e\u0026""#
        );
        assert_eq!(js_string("x\u{2028}y"), r#""x\u2028y""#);
    }
}

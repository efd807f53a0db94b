//! t1 Minimal SaaS: white page, sticky header, hero, three feature cards,
//! closing call to action.

use maud::html;

use super::{cta, logo, page, stylesheet};
use crate::types::{BrandConfig, RenderedPage};

const RULES: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    line-height: 1.6;
    color: #111827;
    background: #ffffff;
}
.container { max-width: 1120px; margin: 0 auto; padding: 0 1.5rem; }
.site-header {
    position: sticky;
    top: 0;
    background: rgba(255, 255, 255, 0.92);
    border-bottom: 1px solid #e5e7eb;
    backdrop-filter: blur(8px);
}
.site-header .container { display: flex; align-items: center; justify-content: space-between; height: 4rem; }
.brand { display: flex; align-items: center; gap: 0.75rem; font-weight: 700; font-size: 1.25rem; }
.brand-logo { height: 2rem; width: auto; }
.hero { padding: 6rem 0 5rem; text-align: center; }
.hero h1 { font-size: 3rem; line-height: 1.15; font-weight: 800; margin-bottom: 1.25rem; }
.hero p { font-size: 1.25rem; color: #4b5563; max-width: 40rem; margin: 0 auto 2.5rem; }
.cta-button {
    display: inline-block;
    background: var(--brand-primary);
    color: #ffffff;
    border: none;
    border-radius: 0.5rem;
    padding: 0.875rem 2rem;
    font-size: 1.05rem;
    font-weight: 600;
    text-decoration: none;
    cursor: pointer;
    transition: opacity 0.2s;
}
.cta-button:hover { opacity: 0.9; }
.cta-button.small { padding: 0.5rem 1.25rem; font-size: 0.95rem; }
.features { padding: 5rem 0; background: #f9fafb; }
.features h2 { text-align: center; font-size: 2rem; margin-bottom: 3rem; }
.feature-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 2rem; }
.feature-card { background: #ffffff; border-radius: 0.75rem; padding: 2rem; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08); }
.feature-icon {
    width: 3rem;
    height: 3rem;
    border-radius: 0.75rem;
    background: rgba(var(--brand-primary-rgb), 0.12);
    color: var(--brand-primary);
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.5rem;
    margin-bottom: 1rem;
}
.feature-card h3 { font-size: 1.15rem; margin-bottom: 0.5rem; }
.feature-card p { color: #6b7280; }
.closing { padding: 5rem 0; text-align: center; color: #ffffff; }
.closing h2 { font-size: 2.25rem; margin-bottom: 1rem; }
.closing p { opacity: 0.9; margin-bottom: 2rem; }
.closing .cta-button { background: #ffffff; color: var(--brand-primary); }
.site-footer { padding: 2rem 0; text-align: center; color: #9ca3af; font-size: 0.9rem; }
@media (max-width: 640px) { .hero h1 { font-size: 2.25rem; } }
"#;

const FEATURES: [(&str, &str, &str); 3] = [
    ("⚡", "Fast setup", "Get going in minutes with sensible defaults and no busywork."),
    ("🔒", "Secure by default", "Your data stays protected with industry-standard practices."),
    ("📈", "Built to scale", "From the first user to the millionth without a rewrite."),
];

pub fn render(brand: &BrandConfig) -> RenderedPage {
    let css = stylesheet(brand, RULES);
    let closing_style = format!(
        "background: linear-gradient(135deg, {}, {});",
        brand.colors.primary, brand.colors.secondary
    );
    let audience = brand.industry.as_deref().unwrap_or("modern");

    let content = html! {
        header.site-header {
            div.container {
                div.brand {
                    (logo(brand, "brand-logo"))
                    span { (brand.brand_name) }
                }
                (cta(brand, "cta-button small", &brand.copy.cta))
            }
        }
        main {
            section.hero {
                div.container {
                    h1 { (brand.copy.headline) }
                    p { (brand.copy.subheadline) }
                    (cta(brand, "cta-button", &brand.copy.cta))
                }
            }
            section.features {
                div.container {
                    h2 { "Why teams choose " (brand.brand_name) }
                    div.feature-grid {
                        @for (icon, title, text) in FEATURES {
                            div.feature-card {
                                div.feature-icon { (icon) }
                                h3 { (title) }
                                p { (text) }
                            }
                        }
                    }
                }
            }
            section.closing style=(closing_style) {
                div.container {
                    h2 { "Ready to get started?" }
                    p {
                        @if let Some(description) = &brand.description {
                            (description)
                        } @else {
                            "Join " (audience) " teams already working with " (brand.brand_name) "."
                        }
                    }
                    (cta(brand, "cta-button", &brand.copy.cta))
                }
            }
        }
        footer.site-footer {
            div.container {
                "© " (brand.brand_name) ". All rights reserved."
            }
        }
    };

    page(brand, css, Some("template-minimal-saas"), content)
}

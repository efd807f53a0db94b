//! t2 Bold Marketing: gradient split hero, color-block features, pricing
//! cards, FAQ and a dark footer.

use maud::html;

use super::{cta, logo, page, stylesheet};
use crate::types::{BrandConfig, RenderedPage};

const RULES: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    line-height: 1.6;
    color: #111827;
}
.wrap { max-width: 1200px; margin: 0 auto; padding: 0 1rem; }
.hero { color: #ffffff; padding: 5rem 0; }
.hero-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; align-items: center; }
.brand { display: flex; align-items: center; margin-bottom: 1.5rem; }
.brand-logo { height: 2.5rem; margin-right: 1rem; filter: brightness(0) invert(1); }
.brand span { font-size: 1.5rem; font-weight: 700; }
.hero h1 { font-size: 3rem; font-weight: 800; line-height: 1.1; margin-bottom: 1.5rem; }
.hero p { font-size: 1.25rem; margin-bottom: 2rem; opacity: 0.9; }
.hero-visual { background: rgba(255, 255, 255, 0.1); border-radius: 1rem; padding: 2rem; backdrop-filter: blur(10px); }
.hero-visual div { aspect-ratio: 16 / 9; background: rgba(255, 255, 255, 0.2); border-radius: 0.5rem; }
.btn {
    display: inline-block;
    border: none;
    border-radius: 0.5rem;
    padding: 1rem 2rem;
    font-size: 1.125rem;
    font-weight: 700;
    text-decoration: none;
    text-align: center;
    cursor: pointer;
}
.btn-light { background: #ffffff; color: var(--brand-primary); }
.btn-primary { background: var(--brand-primary); color: #ffffff; }
.btn-muted { background: #f3f4f6; color: #111827; }
.btn-block { display: block; width: 100%; padding: 0.75rem; font-size: 1rem; font-weight: 500; }
.blocks { padding: 5rem 0; }
.block-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }
.block { color: #ffffff; padding: 3rem; border-radius: 1rem; }
.block h3 { font-size: 1.875rem; margin-bottom: 1rem; }
.block p { font-size: 1.125rem; opacity: 0.9; }
.pricing { padding: 5rem 0; background: #f9fafb; text-align: center; }
.pricing h2, .faq h2 { font-size: 2.5rem; margin-bottom: 1rem; }
.pricing .lead { font-size: 1.25rem; color: #6b7280; margin-bottom: 4rem; }
.plans { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
.plan { background: #ffffff; padding: 2rem; border-radius: 1rem; box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1); }
.plan h3 { font-size: 1.5rem; margin-bottom: 1rem; }
.plan .price { font-size: 2.5rem; font-weight: 700; color: var(--brand-primary); margin-bottom: 1.5rem; }
.plan .price span { font-size: 1rem; color: #6b7280; }
.plan.featured { background: var(--brand-primary); color: #ffffff; transform: scale(1.05); }
.plan.featured .price, .plan.featured .price span { color: #ffffff; }
.faq { padding: 5rem 0; }
.faq .wrap { max-width: 48rem; }
.faq h2 { text-align: center; margin-bottom: 3rem; }
.faq-item { border-bottom: 1px solid #e5e7eb; padding-bottom: 2rem; margin-bottom: 2rem; }
.faq-item h3 { font-size: 1.25rem; margin-bottom: 1rem; }
.faq-item p { color: #4b5563; }
.site-footer { background: #111827; color: #ffffff; padding: 4rem 0; text-align: center; }
.site-footer .brand { justify-content: center; margin-bottom: 2rem; }
.site-footer p { color: #9ca3af; max-width: 32rem; margin: 0 auto 2rem; }
@media (max-width: 768px) {
    .hero-grid, .block-grid, .plans { grid-template-columns: 1fr; }
    .plan.featured { transform: none; }
}
"#;

pub fn render(brand: &BrandConfig) -> RenderedPage {
    let css = stylesheet(brand, RULES);
    let colors = &brand.colors;
    let hero_style = format!(
        "background: linear-gradient(135deg, {}, {});",
        colors.primary, colors.accent
    );
    let secondary_block = format!("background: {};", colors.secondary);
    let accent_block = format!("background: {};", colors.accent);
    let industry = brand
        .industry
        .as_deref()
        .map(str::to_lowercase)
        .unwrap_or_else(|| "your".to_string());

    let brand_mark = html! {
        div.brand {
            (logo(brand, "brand-logo"))
            span { (brand.brand_name) }
        }
    };

    let content = html! {
        section.hero style=(hero_style) {
            div.wrap.hero-grid {
                div {
                    (brand_mark)
                    h1 { (brand.copy.headline) }
                    p { (brand.copy.subheadline) }
                    (cta(brand, "btn btn-light", &brand.copy.cta))
                }
                div.hero-visual { div {} }
            }
        }
        section.blocks {
            div.wrap.block-grid {
                div.block style=(secondary_block) {
                    h3 { "Premium Quality" }
                    p { "Experience the difference with our industry-leading solutions." }
                }
                div.block style=(accent_block) {
                    h3 { "Fast Results" }
                    p { "See immediate impact with our proven methodology." }
                }
            }
        }
        section.pricing {
            div.wrap {
                h2 { "Choose Your Plan" }
                p.lead { "Get started with " (brand.brand_name) " today" }
                div.plans {
                    div.plan {
                        h3 { "Starter" }
                        div.price { "$99" span { "/mo" } }
                        (cta(brand, "btn btn-muted btn-block", "Get Started"))
                    }
                    div.plan.featured {
                        h3 { "Professional" }
                        div.price { "$199" span { "/mo" } }
                        (cta(brand, "btn btn-light btn-block", &brand.copy.cta))
                    }
                    div.plan {
                        h3 { "Enterprise" }
                        div.price { "$399" span { "/mo" } }
                        (cta(brand, "btn btn-muted btn-block", "Contact Sales"))
                    }
                }
            }
        }
        section.faq {
            div.wrap {
                h2 { "Frequently Asked Questions" }
                div.faq-item {
                    h3 { "How does " (brand.brand_name) " work?" }
                    p {
                        "Our platform provides comprehensive solutions tailored to your specific needs in the "
                        (industry) " industry."
                    }
                }
                div.faq-item {
                    h3 { "What makes you different?" }
                    p { "We combine cutting-edge technology with personalized service to deliver exceptional results for our clients." }
                }
            }
        }
        footer.site-footer {
            div.wrap {
                (brand_mark)
                @if let Some(description) = &brand.description {
                    p { (description) }
                }
                (cta(brand, "btn btn-primary", &brand.copy.cta))
            }
        }
    };

    page(brand, css, Some("template-bold-marketing"), content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{brand_with, sample_brand};

    #[test]
    fn hero_gradient_runs_primary_to_accent() {
        let html = render(&sample_brand()).html;
        assert!(html.contains("linear-gradient(135deg, #3B82F6, #10B981)"));
    }

    #[test]
    fn three_pricing_plans() {
        let html = render(&sample_brand()).html;
        assert_eq!(html.matches(r#"class="price""#).count(), 3);
        assert!(html.contains("Professional"));
    }

    #[test]
    fn faq_mentions_lowercased_industry() {
        let html = render(&brand_with(|b| b.industry = Some("Real Estate".into()))).html;
        assert!(html.contains("in the real estate industry."));
    }

    #[test]
    fn logo_appears_in_hero_and_footer() {
        let brand = brand_with(|b| b.logo_url = Some("https://cdn.test/l.png".into()));
        assert_eq!(render(&brand).html.matches("<img").count(), 2);
    }
}

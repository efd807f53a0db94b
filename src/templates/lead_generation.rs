//! t3 Lead Generation: hero beside a lead-capture form, benefit list, social
//! proof strip, closing call to action.
//!
//! The form never leaves the page: submitting swaps it for a thank-you note.

use maud::{PreEscaped, html};

use super::{cta, logo, page, stylesheet};
use crate::types::{BrandConfig, RenderedPage};

const RULES: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
body {
    font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
    line-height: 1.6;
    color: #1f2937;
    background: #f8fafc;
}
.wrap { max-width: 1140px; margin: 0 auto; padding: 0 1.25rem; }
.topbar { padding: 1.25rem 0; }
.topbar .wrap { display: flex; align-items: center; gap: 0.75rem; font-weight: 700; font-size: 1.2rem; }
.brand-logo { height: 2.25rem; width: auto; }
.hero { padding: 3rem 0 5rem; }
.hero-grid { display: grid; grid-template-columns: 1.1fr 0.9fr; gap: 3rem; align-items: start; }
.eyebrow {
    display: inline-block;
    background: rgba(var(--brand-accent-rgb), 0.15);
    color: var(--brand-accent);
    font-weight: 600;
    font-size: 0.85rem;
    padding: 0.25rem 0.75rem;
    border-radius: 999px;
    margin-bottom: 1rem;
}
.hero h1 { font-size: 2.75rem; line-height: 1.15; margin-bottom: 1rem; }
.hero .sub { font-size: 1.2rem; color: #4b5563; margin-bottom: 1.5rem; }
.benefits { list-style: none; margin-bottom: 2rem; }
.benefits li { padding-left: 1.75rem; position: relative; margin-bottom: 0.6rem; }
.benefits li::before { content: "✓"; position: absolute; left: 0; color: var(--brand-accent); font-weight: 700; }
.lead-card {
    background: #ffffff;
    border-radius: 1rem;
    padding: 2rem;
    box-shadow: 0 20px 40px rgba(15, 23, 42, 0.12);
    border-top: 6px solid var(--brand-primary);
}
.lead-card h2 { font-size: 1.5rem; margin-bottom: 0.5rem; }
.lead-card .hint { color: #6b7280; margin-bottom: 1.5rem; font-size: 0.95rem; }
.field { margin-bottom: 1rem; }
.field label { display: block; font-weight: 600; font-size: 0.9rem; margin-bottom: 0.35rem; }
.field input {
    width: 100%;
    padding: 0.75rem 1rem;
    border: 1px solid #d1d5db;
    border-radius: 0.5rem;
    font-size: 1rem;
}
.field input:focus { outline: 2px solid rgba(var(--brand-primary-rgb), 0.4); border-color: var(--brand-primary); }
.submit {
    width: 100%;
    background: var(--brand-primary);
    color: #ffffff;
    border: none;
    border-radius: 0.5rem;
    padding: 0.9rem;
    font-size: 1.05rem;
    font-weight: 700;
    cursor: pointer;
}
.privacy { margin-top: 0.75rem; font-size: 0.8rem; color: #9ca3af; text-align: center; }
.thanks { display: none; text-align: center; padding: 2rem 0; }
.thanks h3 { font-size: 1.4rem; margin-bottom: 0.5rem; color: var(--brand-primary); }
.lead-card.sent form { display: none; }
.lead-card.sent .thanks { display: block; }
.proof { background: #ffffff; padding: 3rem 0; border-top: 1px solid #e5e7eb; border-bottom: 1px solid #e5e7eb; }
.stats { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; text-align: center; }
.stat strong { display: block; font-size: 2.25rem; color: var(--brand-primary); }
.stat span { color: #6b7280; }
.closing { padding: 4rem 0; text-align: center; }
.closing h2 { font-size: 2rem; margin-bottom: 1.5rem; }
.cta-button {
    display: inline-block;
    background: var(--brand-secondary);
    color: #ffffff;
    border: none;
    border-radius: 0.5rem;
    padding: 0.9rem 2.25rem;
    font-size: 1.05rem;
    font-weight: 700;
    text-decoration: none;
    cursor: pointer;
}
.site-footer { padding: 2rem 0; text-align: center; color: #9ca3af; font-size: 0.85rem; }
@media (max-width: 860px) {
    .hero-grid, .stats { grid-template-columns: 1fr; }
    .hero h1 { font-size: 2.1rem; }
}
"#;

const SCRIPT: &str = r#"
document.getElementById('lead-form').addEventListener('submit', function (event) {
    event.preventDefault();
    if (!this.checkValidity()) {
        this.reportValidity();
        return;
    }
    this.closest('.lead-card').classList.add('sent');
});
"#;

const BENEFITS: [&str; 3] = [
    "Personalized plan within one business day",
    "No commitment and no credit card required",
    "Talk to a specialist, not a sales script",
];

pub fn render(brand: &BrandConfig) -> RenderedPage {
    let css = stylesheet(brand, RULES);

    let content = html! {
        header.topbar {
            div.wrap {
                (logo(brand, "brand-logo"))
                span { (brand.brand_name) }
            }
        }
        main {
            section.hero {
                div.wrap.hero-grid {
                    div {
                        @if let Some(industry) = &brand.industry {
                            span.eyebrow { (industry) }
                        }
                        h1 { (brand.copy.headline) }
                        p.sub { (brand.copy.subheadline) }
                        ul.benefits {
                            @for benefit in BENEFITS {
                                li { (benefit) }
                            }
                        }
                        @if let Some(description) = &brand.description {
                            p { (description) }
                        }
                    }
                    div.lead-card {
                        h2 { "Get your free consultation" }
                        p.hint { "Leave your details and the " (brand.brand_name) " team will reach out." }
                        form id="lead-form" {
                            div.field {
                                label for="lead-name" { "Full name" }
                                input id="lead-name" name="name" type="text" autocomplete="name" required;
                            }
                            div.field {
                                label for="lead-email" { "Work email" }
                                input id="lead-email" name="email" type="email" autocomplete="email" required;
                            }
                            div.field {
                                label for="lead-phone" { "Phone (optional)" }
                                input id="lead-phone" name="phone" type="tel" autocomplete="tel";
                            }
                            button.submit type="submit" { (brand.copy.cta) }
                            p.privacy { "We respect your privacy. Unsubscribe at any time." }
                        }
                        div.thanks {
                            h3 { "Thank you!" }
                            p { "We received your request and will be in touch shortly." }
                        }
                    }
                }
            }
            section.proof {
                div.wrap.stats {
                    div.stat { strong { "10k+" } span { "customers served" } }
                    div.stat { strong { "4.9/5" } span { "average rating" } }
                    div.stat { strong { "24h" } span { "response time" } }
                }
            }
            section.closing {
                div.wrap {
                    h2 { "Not ready to talk yet?" }
                    (cta(brand, "cta-button", &brand.copy.cta))
                }
            }
        }
        footer.site-footer {
            "© " (brand.brand_name)
        }
        script { (PreEscaped(SCRIPT)) }
    };

    page(brand, css, Some("template-lead-generation"), content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{brand_with, sample_brand};

    #[test]
    fn form_has_no_submission_target() {
        let html = render(&sample_brand()).html;
        assert!(html.contains(r#"<form id="lead-form">"#));
        assert!(!html.contains("action="));
        assert!(html.contains("event.preventDefault()"));
    }

    #[test]
    fn form_fields_present() {
        let html = render(&sample_brand()).html;
        for name in [r#"name="name""#, r#"name="email""#, r#"name="phone""#] {
            assert!(html.contains(name), "missing {name}");
        }
    }

    #[test]
    fn industry_badge_is_optional() {
        assert!(render(&sample_brand()).html.contains(r#"<span class="eyebrow">Technology</span>"#));
        let html = render(&brand_with(|b| b.industry = None)).html;
        assert!(!html.contains("eyebrow\">"));
    }
}

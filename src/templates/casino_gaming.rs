//! t4 Casino Gaming: dark neon page with a welcome-bonus hero, game tiles,
//! promotion cards and a responsible-gaming footer. No script.

use maud::html;

use super::{cta, logo, page, stylesheet};
use crate::types::{BrandConfig, RenderedPage};

const RULES: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
body {
    font-family: 'Montserrat', 'Segoe UI', sans-serif;
    line-height: 1.5;
    color: #f9fafb;
    background: radial-gradient(circle at top, #1f1147 0%, #0b0617 60%);
    min-height: 100vh;
}
.wrap { max-width: 1200px; margin: 0 auto; padding: 0 1.25rem; }
.nav { display: flex; align-items: center; justify-content: space-between; padding: 1.25rem 0; }
.brand { display: flex; align-items: center; gap: 0.75rem; font-size: 1.4rem; font-weight: 900; letter-spacing: 0.05em; }
.brand-logo { height: 2.5rem; width: auto; }
.hero { text-align: center; padding: 4rem 0 3rem; }
.bonus-tag {
    display: inline-block;
    padding: 0.4rem 1rem;
    border-radius: 999px;
    background: rgba(var(--brand-accent-rgb), 0.2);
    border: 1px solid var(--brand-accent);
    color: var(--brand-accent);
    font-weight: 700;
    margin-bottom: 1.5rem;
    text-transform: uppercase;
    letter-spacing: 0.08em;
    font-size: 0.85rem;
}
.hero h1 {
    font-size: 3.25rem;
    font-weight: 900;
    line-height: 1.1;
    margin-bottom: 1rem;
    text-shadow: 0 0 20px rgba(var(--brand-primary-rgb), 0.8);
}
.hero p { font-size: 1.25rem; color: #d1d5db; max-width: 42rem; margin: 0 auto 2rem; }
.play-button {
    display: inline-block;
    padding: 1.1rem 2.75rem;
    border-radius: 999px;
    border: none;
    color: #0b0617;
    background: linear-gradient(90deg, var(--brand-accent), var(--brand-primary));
    font-size: 1.2rem;
    font-weight: 900;
    text-transform: uppercase;
    text-decoration: none;
    cursor: pointer;
    box-shadow: 0 0 30px rgba(var(--brand-accent-rgb), 0.6);
    animation: glow 2s ease-in-out infinite;
}
.play-button.small { padding: 0.6rem 1.5rem; font-size: 0.95rem; animation: none; }
.games { padding: 3rem 0; }
.section-title { font-size: 1.75rem; font-weight: 800; margin-bottom: 1.5rem; text-align: center; }
.game-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: 1.25rem; }
.game-tile {
    border-radius: 1rem;
    padding: 1.75rem 1rem;
    text-align: center;
    background: linear-gradient(160deg, rgba(var(--brand-primary-rgb), 0.35), rgba(var(--brand-secondary-rgb), 0.25));
    border: 1px solid rgba(255, 255, 255, 0.08);
    transition: transform 0.2s;
}
.game-tile:hover { transform: translateY(-4px); }
.game-tile .icon { font-size: 2.5rem; display: block; margin-bottom: 0.5rem; }
.game-tile strong { display: block; }
.game-tile small { color: #9ca3af; }
.promos { padding: 3rem 0; }
.promo-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; }
.promo { background: rgba(255, 255, 255, 0.05); border-radius: 1rem; padding: 1.75rem; border-left: 4px solid var(--brand-accent); }
.promo h3 { font-size: 1.2rem; margin-bottom: 0.5rem; }
.promo p { color: #d1d5db; }
.closing { text-align: center; padding: 4rem 0; }
.closing h2 { font-size: 2.25rem; font-weight: 900; margin-bottom: 1.5rem; }
.site-footer { padding: 2rem 0 3rem; text-align: center; color: #6b7280; font-size: 0.85rem; }
.site-footer .age { color: #f87171; font-weight: 900; margin-right: 0.5rem; }
@keyframes glow {
    0%, 100% { box-shadow: 0 0 20px rgba(var(--brand-accent-rgb), 0.5); }
    50% { box-shadow: 0 0 40px rgba(var(--brand-accent-rgb), 0.9); }
}
@media (max-width: 768px) {
    .hero h1 { font-size: 2.25rem; }
    .promo-grid { grid-template-columns: 1fr; }
}
"#;

const GAMES: [(&str, &str, &str); 6] = [
    ("🎰", "Slots", "500+ titles"),
    ("🃏", "Blackjack", "Live tables"),
    ("🎡", "Roulette", "European & American"),
    ("🎲", "Craps", "Classic dice"),
    ("♠️", "Poker", "Daily tournaments"),
    ("💎", "Jackpots", "Progressive prizes"),
];

const PROMOS: [(&str, &str); 3] = [
    ("Welcome Bonus", "100% match on your first deposit plus free spins."),
    ("Weekly Cashback", "Get up to 15% back on your net losses every week."),
    ("VIP Club", "Exclusive rewards, faster withdrawals and a personal host."),
];

pub fn render(brand: &BrandConfig) -> RenderedPage {
    let css = stylesheet(brand, RULES);
    let tile_border = format!("border-color: {};", brand.colors.secondary);

    let content = html! {
        header.wrap.nav {
            div.brand {
                (logo(brand, "brand-logo"))
                span { (brand.brand_name.to_uppercase()) }
            }
            (cta(brand, "play-button small", &brand.copy.cta))
        }
        main {
            section.wrap.hero {
                span.bonus-tag { "🎁 Welcome bonus inside" }
                h1 { (brand.copy.headline) }
                p { (brand.copy.subheadline) }
                (cta(brand, "play-button", &brand.copy.cta))
            }
            section.wrap.games {
                h2.section-title { "Top Games" }
                div.game-grid {
                    @for (icon, name, note) in GAMES {
                        div.game-tile style=(tile_border) {
                            span.icon { (icon) }
                            strong { (name) }
                            small { (note) }
                        }
                    }
                }
            }
            section.wrap.promos {
                h2.section-title { "Promotions" }
                div.promo-grid {
                    @for (title, text) in PROMOS {
                        div.promo {
                            h3 { (title) }
                            p { (text) }
                        }
                    }
                }
            }
            section.wrap.closing {
                h2 { "Your seat at " (brand.brand_name) " is waiting" }
                @if let Some(description) = &brand.description {
                    p { (description) }
                }
            }
        }
        footer.wrap.site-footer {
            span.age { "18+" }
            "Play responsibly. Terms and conditions apply."
        }
    };

    page(brand, css, Some("template-casino-gaming"), content)
}

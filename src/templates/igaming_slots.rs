//! t5 iGaming Casino: a single-line three-reel slot machine with a jackpot
//! modal, above a short feature list and the brand call to action.

use maud::{PreEscaped, html};

use super::{cta, logo, page, slots, stylesheet};
use crate::types::{BrandConfig, RenderedPage};

const SYMBOLS: [&str; 6] = ["🍒", "🍋", "🔔", "⭐", "💎", "7️⃣"];

/// Face shown before the first spin.
const OPENING_REELS: [&str; 3] = ["🍒", "💎", "7️⃣"];

const RULES: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
body {
    font-family: 'Poppins', 'Segoe UI', sans-serif;
    color: #ffffff;
    background: linear-gradient(180deg, #120024 0%, #2a0845 100%);
    min-height: 100vh;
}
.wrap { max-width: 960px; margin: 0 auto; padding: 0 1rem; text-align: center; }
.top { padding: 1.5rem 0; display: flex; justify-content: center; align-items: center; gap: 0.75rem; }
.brand-logo { height: 3rem; width: auto; }
.brand-name { font-size: 1.5rem; font-weight: 800; letter-spacing: 0.1em; }
.hero h1 { font-size: 2.75rem; font-weight: 900; margin-bottom: 0.75rem; color: #ffd700; text-shadow: 0 0 12px rgba(255, 215, 0, 0.6); }
.hero p { font-size: 1.2rem; color: #e9d5ff; margin-bottom: 2rem; }
.machine {
    display: inline-block;
    padding: 2rem;
    border-radius: 1.5rem;
    background: linear-gradient(145deg, var(--brand-primary), var(--brand-secondary));
    border: 5px solid #ffd700;
    box-shadow: 0 0 45px rgba(255, 215, 0, 0.45);
    margin-bottom: 2.5rem;
}
.reels { display: flex; gap: 1rem; background: #0f0f1a; padding: 1.25rem; border-radius: 1rem; margin-bottom: 1.5rem; }
.reel {
    width: 6rem;
    height: 6rem;
    border-radius: 0.75rem;
    background: linear-gradient(180deg, #ffffff, #e5e7eb);
    color: #111827;
    font-size: 3rem;
    display: flex;
    align-items: center;
    justify-content: center;
    box-shadow: inset 0 4px 10px rgba(0, 0, 0, 0.25);
}
.reel.spinning { animation: roll 0.15s linear infinite; }
.spin-button {
    width: 100%;
    padding: 1rem;
    border: 3px solid #ffd700;
    border-radius: 999px;
    background: linear-gradient(90deg, #dc2626, #f97316);
    color: #ffffff;
    font-size: 1.4rem;
    font-weight: 900;
    cursor: pointer;
}
.spin-button:disabled { opacity: 0.6; cursor: wait; }
.message { min-height: 1.5rem; margin-top: 1rem; color: #fde68a; font-weight: 700; }
.features { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; margin-bottom: 2.5rem; }
.feature { background: rgba(255, 255, 255, 0.06); border: 1px solid rgba(255, 215, 0, 0.3); border-radius: 1rem; padding: 1.25rem; }
.feature strong { display: block; font-size: 1.6rem; margin-bottom: 0.25rem; }
.cta-button {
    display: inline-block;
    padding: 1.1rem 3rem;
    border-radius: 999px;
    border: none;
    background: var(--brand-accent);
    color: #ffffff;
    font-size: 1.25rem;
    font-weight: 900;
    text-decoration: none;
    cursor: pointer;
    box-shadow: 0 0 25px rgba(var(--brand-accent-rgb), 0.7);
}
.disclaimer { margin: 2rem 0 3rem; font-size: 0.8rem; color: #a78bfa; }
.modal {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.8);
    display: none;
    align-items: center;
    justify-content: center;
    z-index: 50;
}
.modal.open { display: flex; }
.modal-card {
    background: linear-gradient(135deg, #facc15, #f97316);
    color: #111827;
    padding: 2.5rem;
    border-radius: 1.25rem;
    max-width: 26rem;
    width: 90%;
    text-align: center;
    animation: pop 0.4s ease-out;
}
.modal-card h2 { font-size: 2rem; font-weight: 900; margin-bottom: 0.75rem; }
.modal-card p { margin-bottom: 1.5rem; font-size: 1.1rem; }
.claim { width: 100%; padding: 0.9rem; border: none; border-radius: 0.75rem; background: #16a34a; color: #ffffff; font-weight: 800; font-size: 1.1rem; cursor: pointer; }
.close { margin-top: 0.75rem; background: none; border: none; text-decoration: underline; cursor: pointer; color: #1f2937; }
@keyframes roll { 0% { transform: translateY(-6px); } 50% { transform: translateY(6px); } 100% { transform: translateY(-6px); } }
@keyframes pop { from { transform: scale(0.7); opacity: 0; } to { transform: scale(1); opacity: 1; } }
@media (max-width: 640px) {
    .reel { width: 4.5rem; height: 4.5rem; font-size: 2.25rem; }
    .features { grid-template-columns: 1fr; }
}
"#;

const GAME_SCRIPT: &str = r#"
const JACKPOT_SYMBOL = '7️⃣';
const SPIN_MS = 2000;
let spinCount = 0;
let isSpinning = false;

const reels = Array.from(document.querySelectorAll('.reel'));
const spinButton = document.getElementById('spinButton');
const message = document.getElementById('spinMessage');
const winModal = document.getElementById('winModal');

function finishSpin() {
    const forced = isForcedWin(spinCount);
    const result = reels.map(() => (forced ? JACKPOT_SYMBOL : randomSymbol()));
    reels.forEach((reel, i) => {
        reel.classList.remove('spinning');
        reel.textContent = result[i];
    });

    const lineWin = result.every((symbol) => symbol === result[0]);
    isSpinning = false;
    spinButton.disabled = false;

    if (forced || lineWin) {
        message.textContent = 'JACKPOT!';
        recordOutcome(spinCount, forced ? 'jackpot' : 'win');
        setTimeout(() => winModal.classList.add('open'), 400);
    } else {
        message.textContent = 'So close! Spin again.';
        recordOutcome(spinCount, 'lose');
    }
}

spinButton.addEventListener('click', () => {
    if (isSpinning) return;
    isSpinning = true;
    spinCount++;
    spinButton.disabled = true;
    message.textContent = '';
    setSpinState('spinning');

    reels.forEach((reel) => reel.classList.add('spinning'));
    const ticker = setInterval(() => {
        reels.forEach((reel) => {
            reel.textContent = randomSymbol();
        });
    }, 90);

    setTimeout(() => {
        clearInterval(ticker);
        finishSpin();
    }, SPIN_MS);
});

document.getElementById('claimButton').addEventListener('click', openCta);
document.getElementById('closeModal').addEventListener('click', () => {
    winModal.classList.remove('open');
});
setSpinState('idle');
"#;

pub fn render(brand: &BrandConfig) -> RenderedPage {
    let css = stylesheet(brand, RULES);
    let script = format!("{}{}", slots::prelude(brand, &SYMBOLS), GAME_SCRIPT);
    let machine_style = format!("border-color: {};", brand.colors.accent);

    let content = html! {
        header.wrap.top {
            (logo(brand, "brand-logo"))
            span.brand-name { (brand.brand_name.to_uppercase()) }
        }
        main.wrap {
            section.hero {
                h1 { (brand.copy.headline) }
                p { (brand.copy.subheadline) }
            }
            div.machine style=(machine_style) {
                div.reels {
                    @for symbol in OPENING_REELS {
                        div.reel { (symbol) }
                    }
                }
                button.spin-button id="spinButton" type="button" { "🎰 SPIN" }
                p.message id="spinMessage" {}
            }
            section.features {
                div.feature { strong { "⚡" } "Instant withdrawals" }
                div.feature { strong { "🎁" } "Daily free spins" }
                div.feature { strong { "🛡️" } "Licensed & secure" }
            }
            (cta(brand, "cta-button", &brand.copy.cta))
            @if let Some(description) = &brand.description {
                p.disclaimer { (description) }
            }
            p.disclaimer { "18+ only. Gamble responsibly. Terms & conditions apply." }
        }
        div.modal id="winModal" {
            div.modal-card {
                h2 { "🎉 JACKPOT! 🎉" }
                p { "You unlocked the " (brand.brand_name) " welcome bonus!" }
                button.claim id="claimButton" type="button" { (brand.copy.cta) }
                button.close id="closeModal" type="button" { "Close" }
            }
        }
        script { (PreEscaped(script)) }
    };

    page(brand, css, Some("template-igaming-slots"), content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_brand;

    #[test]
    fn single_line_of_three_reels() {
        let html = render(&sample_brand()).html;
        assert_eq!(html.matches(r#"<div class="reel">"#).count(), 3);
    }

    #[test]
    fn script_forces_win_on_second_spin() {
        let html = render(&sample_brand()).html;
        assert!(html.contains("const FORCED_WIN_ATTEMPT = 2;"));
        assert!(html.contains("const forced = isForcedWin(spinCount);"));
    }

    #[test]
    fn claim_button_uses_guarded_cta() {
        let html = render(&sample_brand()).html;
        assert!(html.contains("addEventListener('click', openCta)"));
        assert!(html.contains("const ctaUrl = null;"));
    }

    #[test]
    fn script_is_embedded_once() {
        let html = render(&sample_brand()).html;
        assert_eq!(html.matches("<script>").count(), 1);
    }
}

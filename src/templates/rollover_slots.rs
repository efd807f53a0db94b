//! t6 Olavivo Casino Slots: three rollover lines of three symbols in a gold
//! cabinet, a bonus countdown, feature badges and a prize modal.

use maud::{PreEscaped, html};

use super::{cta, logo, page, slots, stylesheet};
use crate::types::{BrandConfig, RenderedPage};

const SYMBOLS: [&str; 6] = ["💎", "🎰", "🍒", "🏆", "💰", "⭐"];

const OPENING_LINES: [[&str; 3]; 3] = [["💎", "🎰", "🍒"], ["🏆", "💰", "⭐"], ["💎", "🎰", "🍒"]];

/// Seconds on the bonus countdown (5:55).
const BONUS_SECONDS: u32 = 355;

const RULES: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
body {
    font-family: 'Orbitron', 'Segoe UI', monospace;
    background: linear-gradient(145deg, #1a0f08, #2c1810);
    color: #ffffff;
    min-height: 100vh;
    overflow-x: hidden;
}
.container {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    padding: 20px;
    max-width: 1200px;
    margin: 0 auto;
}
.header { text-align: center; margin-bottom: 40px; }
.brand-logo { height: 3.5rem; width: auto; margin-bottom: 1rem; }
.main-title {
    font-size: 2.5rem;
    font-weight: 900;
    color: #ffd700;
    text-shadow: 2px 2px 4px rgba(0, 0, 0, 0.8);
    margin-bottom: 20px;
    animation: pulse 2s infinite;
}
.subtitle { font-size: 1.2rem; margin-bottom: 20px; }
.bonus-timer {
    display: inline-block;
    padding: 10px 20px;
    border-radius: 25px;
    font-weight: bold;
    background: linear-gradient(45deg, var(--brand-primary), var(--brand-accent));
    box-shadow: 0 4px 15px rgba(var(--brand-primary-rgb), 0.4);
}
.slot-machine {
    background: linear-gradient(145deg, #1a0f08, #2c1810);
    border: 6px solid #ffd700;
    border-radius: 25px;
    padding: 40px;
    box-shadow: 0 0 50px rgba(255, 215, 0, 0.6);
    margin-bottom: 40px;
}
.prize-display { display: flex; justify-content: center; gap: 30px; margin-bottom: 30px; }
.prize-item { padding: 15px; border-radius: 15px; text-align: center; border: 3px solid; min-width: 100px; font-weight: bold; }
.prize-item.first { background: var(--brand-accent); border-color: rgba(255, 255, 255, 0.4); }
.prize-item.second { background: var(--brand-secondary); border-color: rgba(255, 255, 255, 0.4); }
.slot-game { background: rgba(0, 0, 0, 0.6); border-radius: 20px; padding: 30px; }
.rollover-line {
    display: flex;
    gap: 20px;
    justify-content: center;
    margin-bottom: 15px;
    padding: 15px;
    background: linear-gradient(145deg, #0a0a0a, #1a1a1a);
    border: 3px solid #ffd700;
    border-radius: 15px;
}
.rollover-symbol {
    width: 80px;
    height: 80px;
    background: linear-gradient(145deg, #2a2a2a, #1a1a1a);
    border: 2px solid #ffd700;
    border-radius: 12px;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 2rem;
}
.rollover-symbol.spinning { animation: flip 0.1s linear infinite; }
.spin-button {
    width: 100%;
    background: linear-gradient(45deg, #dc2626, #ef4444);
    color: #ffffff;
    border: 3px solid #ffd700;
    border-radius: 15px;
    padding: 20px;
    font-size: 1.5rem;
    font-weight: 900;
    cursor: pointer;
    margin-top: 20px;
}
.spin-button:disabled { opacity: 0.5; cursor: not-allowed; }
.features { display: flex; gap: 30px; margin-bottom: 40px; flex-wrap: wrap; justify-content: center; }
.feature-item {
    background: rgba(0, 0, 0, 0.7);
    border: 2px solid #ffd700;
    border-radius: 15px;
    padding: 20px;
    text-align: center;
    min-width: 150px;
    color: #ffd700;
    font-weight: bold;
}
.cta-section { text-align: center; }
.cta-button {
    display: inline-block;
    background: linear-gradient(45deg, #ffd700, #ffa500);
    color: #000000;
    border: 3px solid #ffd700;
    border-radius: 15px;
    padding: 20px 40px;
    font-size: 1.5rem;
    font-weight: 900;
    text-decoration: none;
    cursor: pointer;
    box-shadow: 0 0 30px rgba(255, 215, 0, 0.6);
    animation: pulse 2s infinite;
}
.disclaimer { color: #888888; font-size: 0.8rem; margin-top: 20px; }
.modal {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.8);
    display: none;
    align-items: center;
    justify-content: center;
    z-index: 50;
}
.modal.open { display: flex; animation: fadeIn 0.5s ease-out; }
.win-content {
    background: linear-gradient(135deg, #facc15, #f97316);
    padding: 2rem;
    border-radius: 1rem;
    text-align: center;
    max-width: 28rem;
    margin: 0 1rem;
    color: #000000;
    animation: bounce 1s infinite;
}
.win-content h2 { font-size: 1.9rem; font-weight: 900; margin-bottom: 1rem; }
.win-content p { font-size: 1.2rem; margin-bottom: 0.5rem; }
.win-amount { font-weight: 900; font-size: 1.5rem; color: #166534; }
.claim {
    width: 100%;
    margin-top: 1rem;
    background: #16a34a;
    color: #ffffff;
    border: none;
    border-radius: 0.5rem;
    padding: 0.75rem 2rem;
    font-size: 1.1rem;
    font-weight: bold;
    cursor: pointer;
}
.close { display: block; margin: 1rem auto 0; background: none; border: none; text-decoration: underline; cursor: pointer; }
@keyframes pulse { 0%, 100% { transform: scale(1); } 50% { transform: scale(1.05); } }
@keyframes flip { 0% { transform: rotateY(0deg); } 100% { transform: rotateY(360deg); } }
@keyframes fadeIn { from { opacity: 0; transform: scale(0.8); } to { opacity: 1; transform: scale(1); } }
@keyframes bounce { 0%, 100% { transform: translateY(0); } 40% { transform: translateY(-20px); } 70% { transform: translateY(-10px); } }
@media (max-width: 768px) {
    .main-title { font-size: 2rem; }
    .rollover-symbol { width: 60px; height: 60px; font-size: 1.5rem; }
    .features { gap: 15px; }
    .feature-item { min-width: 120px; padding: 15px; }
}
"#;

const GAME_SCRIPT: &str = r#"
const JACKPOT_SYMBOL = '🏆';
const SPIN_MS = 2000;
let spinCount = 0;
let isSpinning = false;

const spinButton = document.getElementById('spinButton');
const winModal = document.getElementById('winModal');
const cells = Array.from(document.querySelectorAll('.rollover-symbol'));
const lines = Array.from(document.querySelectorAll('.rollover-line')).map((line) =>
    Array.from(line.querySelectorAll('.rollover-symbol'))
);

function settle() {
    const forced = isForcedWin(spinCount);
    cells.forEach((cell) => {
        cell.classList.remove('spinning');
        cell.textContent = forced ? JACKPOT_SYMBOL : randomSymbol();
    });

    const lineWin = lines.some((line) => line.every((cell) => cell.textContent === line[0].textContent));
    spinButton.textContent = 'ROLL TO WIN!';
    spinButton.disabled = false;
    isSpinning = false;

    if (forced || lineWin) {
        recordOutcome(spinCount, forced ? 'jackpot' : 'win');
        setTimeout(() => winModal.classList.add('open'), 500);
    } else {
        recordOutcome(spinCount, 'lose');
    }
}

spinButton.addEventListener('click', () => {
    if (isSpinning) return;
    isSpinning = true;
    spinCount++;
    spinButton.textContent = 'SPINNING...';
    spinButton.disabled = true;
    setSpinState('spinning');

    cells.forEach((cell) => cell.classList.add('spinning'));
    const ticker = setInterval(() => {
        cells.forEach((cell) => {
            cell.textContent = randomSymbol();
        });
    }, 100);

    setTimeout(() => {
        clearInterval(ticker);
        settle();
    }, SPIN_MS);
});

document.getElementById('claimButton').addEventListener('click', openCta);
document.getElementById('closeModal').addEventListener('click', () => {
    winModal.classList.remove('open');
});

const timer = document.getElementById('bonusTimer');
let remaining = Number(timer.dataset.seconds);
setInterval(() => {
    remaining = remaining > 0 ? remaining - 1 : Number(timer.dataset.seconds);
    const minutes = Math.floor(remaining / 60);
    const seconds = String(remaining % 60).padStart(2, '0');
    timer.textContent = '⏰ Bonus expires: ' + minutes + ':' + seconds;
}, 1000);
setSpinState('idle');
"#;

fn countdown_label(total_seconds: u32) -> String {
    format!("⏰ Bonus expires: {}:{:02}", total_seconds / 60, total_seconds % 60)
}

pub fn render(brand: &BrandConfig) -> RenderedPage {
    let css = stylesheet(brand, RULES);
    let script = format!("{}{}", slots::prelude(brand, &SYMBOLS), GAME_SCRIPT);
    let cabinet_glow = format!("box-shadow: 0 0 50px {};", brand.colors.primary.with_alpha(0.6));

    let content = html! {
        div.container {
            header.header {
                (logo(brand, "brand-logo"))
                h1.main-title { "🏆 " (brand.copy.headline) " 🏆" }
                p.subtitle { (brand.copy.subheadline) }
                div.bonus-timer id="bonusTimer" data-seconds=(BONUS_SECONDS) {
                    (countdown_label(BONUS_SECONDS))
                }
            }
            div.slot-machine style=(cabinet_glow) {
                div.prize-display {
                    div.prize-item.first { "🎁" br; "WIN $5,000" }
                    div.prize-item.second { "💎" br; "MIN $1,000" }
                }
                div.slot-game {
                    @for line in OPENING_LINES {
                        div.rollover-line {
                            @for symbol in line {
                                div.rollover-symbol { (symbol) }
                            }
                        }
                    }
                    button.spin-button id="spinButton" type="button" { "ROLL TO WIN!" }
                }
            }
            div.features {
                div.feature-item { "💎" br; "Instant Payouts" }
                div.feature-item { "🎁" br; "Welcome Bonus" }
                div.feature-item { "🏆" br; "24/7 Support" }
            }
            div.cta-section {
                (cta(brand, "cta-button", &format!("🏆 {} 🏆", brand.copy.cta)))
                p.disclaimer { "18+ only. Gamble Responsibly. Terms & Conditions Apply." }
            }
        }
        div.modal id="winModal" {
            div.win-content {
                h2 { "🎉 CONGRATULATIONS! 🎉" }
                p { "You won " span.win-amount { "$1,000" } "!" }
                p { "🎁 Plus 50 FREE SPINS at " (brand.brand_name) "!" }
                button.claim id="claimButton" type="button" { "CLAIM YOUR PRIZE NOW!" }
                button.close id="closeModal" type="button" { "Close" }
            }
        }
        script { (PreEscaped(script)) }
    };

    page(brand, css, Some("template-rollover-slots"), content)
}

//! t7 Bonanza Billion Slots: a 3×3 slot grid beside a control panel with bet
//! and balance readouts. Rows, columns and diagonals pay out; the jackpot
//! fills the grid with diamonds and opens the bonus modal.
//!
//! Sites rendered by this template are stored under template id `t6`; see
//! [`TemplateId::storage_id`](crate::types::TemplateId::storage_id).

use maud::{PreEscaped, html};

use super::{cta, logo, page, slots, stylesheet};
use crate::types::{BrandConfig, RenderedPage};

const SYMBOLS: [&str; 7] = ["💎", "🍒", "🔔", "🍋", "⭐", "🍊", "🍇"];

const OPENING_GRID: [&str; 9] = ["🍒", "💎", "🔔", "⭐", "🍀", "🍇", "💰", "🍋", "🍒"];

pub const STARTING_BALANCE: u32 = 1000;
pub const BET: u32 = 10;
pub const JACKPOT_PAYOUT: u32 = 10_000;

const RULES: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
body {
    font-family: 'Inter', sans-serif;
    line-height: 1.6;
    color: #ffffff;
    background: radial-gradient(circle at 30% 20%, rgba(var(--brand-primary-rgb), 0.35), transparent 55%), #000000;
    min-height: 100vh;
}
.stage { min-height: 100vh; position: relative; overflow: hidden; }
.orb { position: absolute; border-radius: 50%; animation: pulse 2s infinite; }
.orb.a { top: 5rem; left: 5rem; width: 8rem; height: 8rem; background: rgba(250, 204, 21, 0.2); }
.orb.b { top: 10rem; right: 8rem; width: 6rem; height: 6rem; background: rgba(var(--brand-accent-rgb), 0.2); }
.orb.c { bottom: 8rem; left: 10rem; width: 7rem; height: 7rem; background: rgba(var(--brand-primary-rgb), 0.2); }
.orb.d { bottom: 5rem; right: 5rem; width: 5rem; height: 5rem; background: rgba(var(--brand-secondary-rgb), 0.2); }
.masthead { position: relative; z-index: 10; text-align: center; padding: 2rem 0; }
.logo-frame {
    display: inline-block;
    margin-bottom: 1.5rem;
    padding: 1rem;
    border-radius: 1rem;
    background: rgba(255, 255, 255, 0.1);
    border: 1px solid rgba(250, 204, 21, 0.3);
}
.brand-logo { height: 4rem; width: auto; max-width: 200px; display: block; }
.masthead h1 { font-size: 3rem; font-weight: 900; color: #facc15; margin-bottom: 1rem; }
.masthead .tagline { font-size: 1.5rem; font-weight: 700; color: #a5f3fc; }
.masthead .sub { color: #e5e7eb; margin-top: 0.5rem; }
.arena {
    position: relative;
    z-index: 10;
    display: flex;
    justify-content: center;
    gap: 2rem;
    flex-wrap: wrap;
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 1rem 2rem;
}
.slot-machine, .game-controls {
    background: linear-gradient(to bottom, #475569, #334155);
    border: 4px solid #facc15;
    border-radius: 1.5rem;
    padding: 1.5rem;
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
}
.game-controls { min-width: 280px; }
.panel-title { text-align: center; margin-bottom: 1.5rem; color: #facc15; font-weight: 900; }
.panel-title h2 { font-size: 1.5rem; }
.panel-title h3 { font-size: 1.25rem; }
.slot-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 0.5rem;
    background: #475569;
    padding: 1rem;
    border-radius: 0.75rem;
}
.slot-square {
    width: 5rem;
    height: 5rem;
    border-radius: 0.75rem;
    background: linear-gradient(to bottom, #fb923c, #eab308);
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.875rem;
    transition: transform 0.2s;
}
.slot-square.spinning { animation: spin 0.5s ease-in-out infinite; }
.slot-square.winning {
    background: linear-gradient(to bottom, #fbbf24, #f59e0b);
    transform: scale(1.1);
    box-shadow: 0 0 30px rgba(255, 215, 0, 1);
}
.control-display {
    background: rgba(71, 85, 105, 0.8);
    border: 2px solid #64748b;
    border-radius: 0.75rem;
    padding: 1rem;
    margin-bottom: 1rem;
    color: #facc15;
    font-weight: 700;
    text-align: center;
    font-size: 1.125rem;
}
.spin-button {
    width: 100%;
    background: linear-gradient(to right, #f97316, #eab308);
    color: #ffffff;
    font-weight: 900;
    font-size: 1.25rem;
    padding: 1rem;
    border-radius: 9999px;
    border: none;
    cursor: pointer;
    transition: transform 0.2s;
}
.spin-button:hover { transform: scale(1.05); }
.spin-button:disabled { opacity: 0.7; transform: scale(0.95); cursor: wait; }
.cta-row { margin-top: 1rem; text-align: center; }
.cta-button {
    display: inline-block;
    width: 100%;
    padding: 0.85rem;
    border-radius: 9999px;
    border: 2px solid #facc15;
    background: var(--brand-accent);
    color: #ffffff;
    font-weight: 800;
    text-decoration: none;
    cursor: pointer;
}
.footer-note { position: relative; z-index: 10; text-align: center; padding: 2rem 0; }
.disclaimer {
    display: inline-block;
    background: linear-gradient(to right, rgba(31, 41, 55, 0.9), rgba(17, 24, 39, 0.9));
    border: 1px solid rgba(75, 85, 99, 0.5);
    border-radius: 0.5rem;
    padding: 0.75rem 1.5rem;
    color: #facc15;
    font-size: 0.875rem;
    font-weight: 600;
}
.disclaimer .age { color: #f87171; font-weight: 900; }
.modal {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.8);
    display: none;
    align-items: center;
    justify-content: center;
    z-index: 10000;
}
.modal.open { display: flex; }
.bonus-card {
    position: relative;
    background: linear-gradient(135deg, #1e3a5f, #2c5282, #3182ce);
    padding: 50px;
    border-radius: 25px;
    text-align: center;
    border: 4px solid #ffd700;
    box-shadow: 0 0 80px rgba(255, 215, 0, 0.6);
    max-width: 600px;
    width: 90%;
}
.bonus-card h2 { font-size: 2.5rem; margin-bottom: 20px; color: #ffd700; }
.bonus-card p { font-size: 1.2rem; margin-bottom: 30px; }
.claim {
    background: linear-gradient(135deg, #00ff88 0%, #32cd32 50%, #228b22 100%);
    color: #000000;
    font-size: 1.4rem;
    font-weight: 800;
    padding: 18px 44px;
    border: 3px solid #ffffff;
    border-radius: 60px;
    text-transform: uppercase;
    letter-spacing: 2px;
    cursor: pointer;
}
.close { position: absolute; top: 15px; right: 25px; background: none; border: none; color: #aaaaaa; font-size: 28px; font-weight: bold; cursor: pointer; }
@keyframes pulse { 0%, 100% { opacity: 1; } 50% { opacity: 0.5; } }
@keyframes spin { 0% { transform: rotateY(0deg); } 50% { transform: rotateY(180deg); } 100% { transform: rotateY(360deg); } }
"#;

const GAME_SCRIPT: &str = r#"
const JACKPOT_SYMBOL = '💎';
const SPIN_MS = 2500;
const REEL_STAGGER_MS = 500;
const WIN_PATTERNS = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8],
    [0, 3, 6], [1, 4, 7], [2, 5, 8],
    [0, 4, 8], [2, 4, 6],
];
const PAYOUTS = { '💎': 10000, '🔔': 5000, '⭐': 3000, '🍒': 2000, '🍋': 1500, '🍊': 1000, '🍇': 500 };

class SlotGame {
    constructor() {
        this.squares = Array.from({ length: 9 }, (_, i) => document.getElementById('slot' + i));
        this.reels = [0, 1, 2].map((r) => this.squares.slice(r * 3, r * 3 + 3));
        this.balance = Number(document.getElementById('balance').dataset.start);
        this.bet = Number(document.getElementById('bet').dataset.bet);
        this.spinCount = 0;
        this.isSpinning = false;
        this.button = document.getElementById('spinButton');
        this.button.addEventListener('click', () => this.spin());
        this.updateDisplay();
        setSpinState('idle');
    }

    spin() {
        if (this.isSpinning) return;
        if (this.balance < this.bet) {
            document.getElementById('spinMessage').textContent = 'Insufficient balance!';
            return;
        }
        this.isSpinning = true;
        this.balance -= this.bet;
        this.spinCount++;
        this.updateDisplay();
        this.button.disabled = true;
        setSpinState('spinning');
        this.clearHighlight();
        this.squares.forEach((square) => square.classList.add('spinning'));
        setTimeout(() => this.stopSpin(), SPIN_MS);
    }

    stopSpin() {
        const forced = isForcedWin(this.spinCount);
        this.reels.forEach((reel, index) => {
            setTimeout(() => {
                reel.forEach((square) => {
                    square.classList.remove('spinning');
                    square.textContent = forced ? JACKPOT_SYMBOL : randomSymbol();
                });
                if (index === this.reels.length - 1) {
                    setTimeout(() => this.settle(forced), 300);
                }
            }, index * REEL_STAGGER_MS);
        });
    }

    settle(forced) {
        this.isSpinning = false;
        this.button.disabled = false;
        const symbols = this.squares.map((square) => square.textContent);
        const winning = WIN_PATTERNS.filter(
            ([a, b, c]) => symbols[a] === symbols[b] && symbols[b] === symbols[c]
        );

        if (forced) {
            this.squares.forEach((square) => square.classList.add('winning'));
            this.award(PAYOUTS[JACKPOT_SYMBOL]);
            recordOutcome(this.spinCount, 'jackpot');
        } else if (winning.length > 0) {
            winning.flat().forEach((i) => this.squares[i].classList.add('winning'));
            this.award(PAYOUTS[symbols[winning[0][0]]] || 0);
            recordOutcome(this.spinCount, 'win');
        } else {
            recordOutcome(this.spinCount, 'lose');
        }
    }

    award(amount) {
        this.balance += amount;
        this.updateDisplay();
        setTimeout(() => {
            document.getElementById('winModal').classList.add('open');
            this.clearHighlight();
        }, SPIN_MS);
    }

    clearHighlight() {
        this.squares.forEach((square) => square.classList.remove('winning'));
    }

    updateDisplay() {
        document.getElementById('balance').textContent = 'BALANCE: $' + this.balance.toLocaleString('en-US');
    }
}

document.getElementById('claimButton').addEventListener('click', openCta);
document.getElementById('closeModal').addEventListener('click', () => {
    document.getElementById('winModal').classList.remove('open');
});
document.getElementById('winModal').addEventListener('click', (event) => {
    if (event.target.id === 'winModal') {
        event.target.classList.remove('open');
    }
});
document.getElementById('bonusTitle').textContent = '🎉 ' + brandName.toUpperCase() + ' JACKPOT!';

new SlotGame();
"#;

/// `1000` → `"1,000"`.
fn dollars(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn render(brand: &BrandConfig) -> RenderedPage {
    let css = stylesheet(brand, RULES);
    let script = format!("{}{}", slots::prelude(brand, &SYMBOLS), GAME_SCRIPT);
    let shouted = brand.brand_name.to_uppercase();
    let machine_border = format!("border-color: {};", brand.colors.accent);

    let content = html! {
        div.stage {
            div.orb.a {}
            div.orb.b {}
            div.orb.c {}
            div.orb.d {}
            header.masthead {
                @if brand.logo_url.is_some() {
                    div.logo-frame { (logo(brand, "brand-logo")) }
                }
                h1 { "💎 " (shouted) " 💎" }
                p.tagline { "⭐ " (brand.copy.headline) " ⭐" }
                p.sub { (brand.copy.subheadline) }
            }
            main.arena {
                div.slot-machine style=(machine_border) {
                    div.panel-title {
                        h2 { (shouted) }
                        h3 { "SLOTS" }
                    }
                    div.slot-grid id="slotGrid" {
                        @for (i, symbol) in OPENING_GRID.iter().enumerate() {
                            div.slot-square id={ "slot" (i) } { (symbol) }
                        }
                    }
                }
                div.game-controls {
                    div.panel-title { h2 { "GAME CONTROLS" } }
                    div.control-display id="bet" data-bet=(BET) { "BET: $" (dollars(BET)) }
                    div.control-display id="balance" data-start=(STARTING_BALANCE) {
                        "BALANCE: $" (dollars(STARTING_BALANCE))
                    }
                    button.spin-button id="spinButton" type="button" { "🎰 SPIN TO WIN" }
                    p.panel-title id="spinMessage" {}
                    div.cta-row { (cta(brand, "cta-button", &brand.copy.cta)) }
                }
            }
            div.footer-note {
                p.disclaimer {
                    span.age { "18+" }
                    " • Gamble Responsibly • Terms Apply"
                }
            }
        }
        div.modal id="winModal" {
            div.bonus-card {
                button.close id="closeModal" type="button" { "×" }
                h2 id="bonusTitle" { "🎉 JACKPOT!" }
                p {
                    strong { "JACKPOT BONUS UNLOCKED!" }
                    br;
                    "You've unlocked a $" (dollars(JACKPOT_PAYOUT)) " win. Claim your welcome bonus and keep winning!"
                }
                button.claim id="claimButton" type="button" { "🎁 " (brand.copy.cta) }
            }
        }
        script { (PreEscaped(script)) }
    };

    page(brand, css, Some("template-bonanza-slots"), content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{brand_with, sample_brand};

    #[test]
    fn grid_has_nine_addressable_squares() {
        let html = render(&sample_brand()).html;
        for i in 0..9 {
            assert!(html.contains(&format!(r#"id="slot{i}""#)), "slot{i}");
        }
        assert!(!html.contains(r#"id="slot9""#));
    }

    #[test]
    fn controls_show_bet_and_balance() {
        let html = render(&sample_brand()).html;
        assert!(html.contains("BET: $10"));
        assert!(html.contains("BALANCE: $1,000"));
    }

    #[test]
    fn script_checks_all_eight_patterns() {
        let html = render(&sample_brand()).html;
        assert!(html.contains("[0, 4, 8], [2, 4, 6]"));
        assert!(html.contains("const forced = isForcedWin(this.spinCount);"));
    }

    #[test]
    fn logo_frame_only_with_logo() {
        assert!(!render(&sample_brand()).html.contains(r#"class="logo-frame""#));
        let brand = brand_with(|b| b.logo_url = Some("https://cdn.test/l.png".into()));
        assert!(render(&brand).html.contains(r#"class="logo-frame""#));
    }

    #[test]
    fn dollars_groups_thousands() {
        assert_eq!(dollars(10), "10");
        assert_eq!(dollars(1000), "1,000");
        assert_eq!(dollars(10_000), "10,000");
        assert_eq!(dollars(1_234_567), "1,234,567");
    }
}

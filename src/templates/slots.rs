//! Script plumbing shared by the game templates (t5, t6, t7).
//!
//! Each game renders its own markup and reel logic but takes three things
//! from here so the contract is identical everywhere:
//!
//! - [`FORCED_WIN_ATTEMPT`]: spin number that always lands a jackpot. Every
//!   other spin is random.
//! - `openCta()`: opens the CTA URL in a new tab, or does nothing in demo
//!   mode.
//! - `recordOutcome()`: publishes the last result on `document.body.dataset`
//!   (`spinCount`, `lastOutcome`, `spinState`) for automated checks.
//!
//! Games use the same element ids: `spinButton`, `winModal` (shown by adding
//! the `open` class), `claimButton` and `closeModal`.

use super::js_string;
use crate::types::BrandConfig;

/// The spin that is scripted to win.
pub const FORCED_WIN_ATTEMPT: u32 = 2;

/// JavaScript array literal of reel symbols.
pub fn symbols_literal(symbols: &[&str]) -> String {
    let items: Vec<String> = symbols.iter().map(|s| js_string(s)).collect();
    format!("[{}]", items.join(", "))
}

/// Constants and helpers every game script starts with.
pub fn prelude(brand: &BrandConfig, symbols: &[&str]) -> String {
    let cta_url = brand
        .cta_url
        .as_deref()
        .map(js_string)
        .unwrap_or_else(|| "null".to_string());
    format!(
        r#"const FORCED_WIN_ATTEMPT = {FORCED_WIN_ATTEMPT};
const SYMBOLS = {symbols};
const ctaUrl = {cta_url};
const brandName = {brand_name};

function isForcedWin(spinCount) {{
    return spinCount === FORCED_WIN_ATTEMPT;
}}

function randomSymbol() {{
    return SYMBOLS[Math.floor(Math.random() * SYMBOLS.length)];
}}

function openCta() {{
    if (ctaUrl) {{
        window.open(ctaUrl, '_blank', 'noopener');
    }}
}}

function setSpinState(state) {{
    document.body.dataset.spinState = state;
}}

function recordOutcome(spinCount, outcome) {{
    document.body.dataset.spinCount = String(spinCount);
    document.body.dataset.lastOutcome = outcome;
    setSpinState('idle');
}}
"#,
        symbols = symbols_literal(symbols),
        brand_name = js_string(&brand.brand_name),
    )
}

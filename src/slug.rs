//! URL slugs for public pages.
//!
//! A slug is derived from the brand name and is the only public handle of a
//! site (`/sites/{slug}`). Derivation is pure; uniqueness is the store's job:
//! it inserts [`candidate`]`(base, 1)`, and on a UNIQUE conflict retries with
//! attempt 2, 3, … until a row goes in.
//!
//! ## Examples
//!
//! - `"Acme"` → `acme`
//! - `"Joe's Café & Bar"` → `joe-s-caf-bar`
//! - `"  --Big   Win!!--"` → `big-win`
//! - `"日本"` → `site`

/// Longest slug ever produced, retry suffix included.
pub const MAX_SLUG_LEN: usize = 48;

/// Used when the brand name has no ASCII letters or digits.
pub const FALLBACK_SLUG: &str = "site";

/// Lowercase ASCII alphanumerics separated by single dashes.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    let slug = truncate(&slug, MAX_SLUG_LEN);
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

/// The slug to try on the `attempt`-th insert (1-based).
///
/// Attempt 1 is the base itself; later attempts append `-{attempt}`, cutting
/// the base short when needed so the result stays within [`MAX_SLUG_LEN`].
pub fn candidate(base: &str, attempt: u32) -> String {
    if attempt <= 1 {
        return base.to_string();
    }
    let suffix = format!("-{attempt}");
    let head = truncate(base, MAX_SLUG_LEN - suffix.len());
    let head = if head.is_empty() { FALLBACK_SLUG } else { head };
    format!("{head}{suffix}")
}

/// Longest `-{attempt}` suffix [`candidate`] can append (`-4294967295`).
const MAX_SUFFIX_LEN: usize = 11;

/// Leading text shared by every candidate of `base`.
///
/// Cutting the base short for a long suffix never goes below this, so a
/// prefix match finds all earlier attempts.
pub fn candidate_prefix(base: &str) -> &str {
    truncate(base, MAX_SLUG_LEN - MAX_SUFFIX_LEN)
}

/// The attempt number that produced `slug` from `base`, if any.
pub fn attempt_of(base: &str, slug: &str) -> Option<u32> {
    if slug == base {
        return Some(1);
    }
    let (_, suffix) = slug.rsplit_once('-')?;
    let attempt: u32 = suffix.parse().ok()?;
    (attempt >= 2 && candidate(base, attempt) == slug).then_some(attempt)
}

/// Cut to at most `max` bytes (slugs are ASCII) without a trailing dash.
fn truncate(slug: &str, max: usize) -> &str {
    let cut = &slug[..slug.len().min(max)];
    cut.trim_end_matches('-')
}

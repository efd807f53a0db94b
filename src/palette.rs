//! Brand color palette.
//!
//! Every page is painted from three colors: `primary`, `secondary` and
//! `accent`. This module owns:
//!
//! - [`HexColor`]: the `#RRGGBB` value type. Parsing is the only way in, so
//!   any `HexColor` that reaches a renderer is already well-formed and safe to
//!   interpolate into CSS.
//! - [`generate_css_variables`]: the `:root { --brand-* }` block every
//!   template prepends to its stylesheet.
//! - [`ColorResolver`]: defaults → colors extracted from the logo →
//!   explicit per-channel preferences.
//!
//! ## Resolution order
//!
//! ```text
//! defaults (config)  ──overlay──▶  logo extraction  ──overlay──▶  preferences
//!   always present                 best effort,                  field by field
//!                                  failure = skip
//! ```
//!
//! Extraction never aborts a generation request. A network error, a non-2xx
//! response, an oversized body or an undecodable image is logged at `warn`
//! and the defaults stay in place.
//!
//! ## Extraction
//!
//! [`dominant_palette`] downsamples the logo to at most 64×64, quantizes each
//! opaque pixel to 4 bits per channel and ranks the buckets by frequency.
//! Near-white and near-black pixels are ignored (they are almost always
//! background or outline, not brand color).
//!
//! | Channel | Pick |
//! |---|---|
//! | primary | most frequent bucket |
//! | secondary | most frequent bucket at least [`MIN_SECONDARY_DISTANCE`] away from primary |
//! | accent | most saturated remaining bucket (saturation ≥ 0.25) |
//!
//! A channel with no candidate is left unset and keeps its default.

use async_trait::async_trait;
use image::DynamicImage;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::config::ExtractionConfig;

/// Minimum RGB distance between the extracted primary and secondary colors.
pub const MIN_SECONDARY_DISTANCE: f32 = 64.0;

/// Longest edge the logo is reduced to before counting colors.
const SAMPLE_EDGE: u32 = 64;

const MIN_ACCENT_SATURATION: f32 = 0.25;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid hex color {0:?}: expected #RRGGBB")]
pub struct InvalidColor(pub String);

/// A validated `#RRGGBB` color, normalized to uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Parse `#RRGGBB` (case-insensitive, surrounding whitespace ignored).
    ///
    /// Shorthand `#RGB`, named colors and `rgb()` are rejected.
    pub fn parse(value: &str) -> Result<Self, InvalidColor> {
        let digits = value
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| InvalidColor(value.to_string()))?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(InvalidColor(value.to_string()));
        }
        Ok(Self(format!("#{}", digits.to_ascii_uppercase())))
    }

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(format!("#{r:02X}{g:02X}{b:02X}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&self.0[range], 16).unwrap_or_default()
        };
        (channel(1..3), channel(3..5), channel(5..7))
    }

    /// CSS `rgba()` expression for this color at the given opacity.
    pub fn with_alpha(&self, alpha: f32) -> String {
        let (r, g, b) = self.rgb();
        format!("rgba({r}, {g}, {b}, {alpha})")
    }
}

impl TryFrom<String> for HexColor {
    type Error = InvalidColor;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The three brand colors every template is painted with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub primary: HexColor,
    pub secondary: HexColor,
    pub accent: HexColor,
}

impl Palette {
    /// Blue / slate / emerald. Used when the config does not override it.
    pub fn stock() -> Self {
        Self {
            primary: HexColor::from_rgb(0x3B, 0x82, 0xF6),
            secondary: HexColor::from_rgb(0x6B, 0x72, 0x80),
            accent: HexColor::from_rgb(0x10, 0xB9, 0x81),
        }
    }

    /// Replace every channel that `overrides` sets; keep the rest.
    pub fn overlay(mut self, overrides: &PartialPalette) -> Self {
        if let Some(primary) = &overrides.primary {
            self.primary = primary.clone();
        }
        if let Some(secondary) = &overrides.secondary {
            self.secondary = secondary.clone();
        }
        if let Some(accent) = &overrides.accent {
            self.accent = accent.clone();
        }
        self
    }
}

/// A palette where any channel may be missing: user preferences, or the
/// subset of channels a logo yielded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialPalette {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<HexColor>,
}

impl PartialPalette {
    pub fn is_empty(&self) -> bool {
        self.primary.is_none() && self.secondary.is_none() && self.accent.is_none()
    }
}

/// Generate the CSS custom properties shared by every template.
///
/// Each color is emitted twice: as a hex value and as an `r, g, b` triplet so
/// stylesheets can write `rgba(var(--brand-primary-rgb), 0.2)`.
pub fn generate_css_variables(palette: &Palette) -> String {
    let triplet = |color: &HexColor| {
        let (r, g, b) = color.rgb();
        format!("{r}, {g}, {b}")
    };
    format!(
        r#":root {{
    --brand-primary: {primary};
    --brand-secondary: {secondary};
    --brand-accent: {accent};
    --brand-primary-rgb: {primary_rgb};
    --brand-secondary-rgb: {secondary_rgb};
    --brand-accent-rgb: {accent_rgb};
}}"#,
        primary = palette.primary,
        secondary = palette.secondary,
        accent = palette.accent,
        primary_rgb = triplet(&palette.primary),
        secondary_rgb = triplet(&palette.secondary),
        accent_rgb = triplet(&palette.accent),
    )
}

// =============================================================================
// Logo extraction
// =============================================================================

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("failed to fetch logo: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("logo request returned HTTP {0}")]
    Status(u16),
    #[error("logo is larger than {limit} bytes")]
    TooLarge { limit: usize },
    #[error("failed to decode logo: {0}")]
    Decode(#[from] image::ImageError),
    #[error("logo has no usable colors")]
    NoColors,
    #[error("palette worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

/// Source of colors for a logo URL.
#[async_trait]
pub trait PaletteExtractor: Send + Sync {
    async fn extract(&self, logo_url: &str) -> Result<PartialPalette, ExtractError>;
}

/// Production extractor: HTTP fetch with a size cap, then [`dominant_palette`].
pub struct ImagePaletteExtractor {
    client: reqwest::Client,
    max_bytes: usize,
}

impl ImagePaletteExtractor {
    pub fn new(config: &ExtractionConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            max_bytes: config.max_bytes,
        })
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>, ExtractError> {
        let mut response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ExtractError::Status(response.status().as_u16()));
        }
        let limit = self.max_bytes;
        if response.content_length().is_some_and(|len| len > limit as u64) {
            return Err(ExtractError::TooLarge { limit });
        }
        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            body.extend_from_slice(&chunk);
            if body.len() > limit {
                return Err(ExtractError::TooLarge { limit });
            }
        }
        Ok(body)
    }
}

#[async_trait]
impl PaletteExtractor for ImagePaletteExtractor {
    async fn extract(&self, logo_url: &str) -> Result<PartialPalette, ExtractError> {
        let bytes = self.fetch(logo_url).await?;
        tokio::task::spawn_blocking(move || {
            let image = image::load_from_memory(&bytes)?;
            dominant_palette(&image)
        })
        .await?
    }
}

type Rgb = (u8, u8, u8);

/// Rank the logo's colors and pick primary/secondary/accent.
///
/// Pure and deterministic: bucket ties are broken by color value so the same
/// image always yields the same palette.
pub fn dominant_palette(image: &DynamicImage) -> Result<PartialPalette, ExtractError> {
    let sample = if image.width() > SAMPLE_EDGE || image.height() > SAMPLE_EDGE {
        image.thumbnail(SAMPLE_EDGE, SAMPLE_EDGE).to_rgba8()
    } else {
        image.to_rgba8()
    };

    let mut buckets: HashMap<Rgb, u32> = HashMap::new();
    for pixel in sample.pixels() {
        let [r, g, b, a] = pixel.0;
        if a < 128 || is_near_white(r, g, b) || is_near_black(r, g, b) {
            continue;
        }
        *buckets.entry((quantize(r), quantize(g), quantize(b))).or_default() += 1;
    }

    let mut ranked: Vec<(Rgb, u32)> = buckets.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let (primary, _) = *ranked.first().ok_or(ExtractError::NoColors)?;
    let secondary = ranked
        .iter()
        .skip(1)
        .map(|(color, _)| *color)
        .find(|color| distance(*color, primary) >= MIN_SECONDARY_DISTANCE);
    let accent = ranked
        .iter()
        .filter(|(color, _)| *color != primary && Some(*color) != secondary)
        .filter(|(color, _)| saturation(*color) >= MIN_ACCENT_SATURATION)
        .max_by(|a, b| {
            saturation(a.0)
                .total_cmp(&saturation(b.0))
                .then(a.1.cmp(&b.1))
                .then(b.0.cmp(&a.0))
        })
        .map(|(color, _)| *color);

    let to_hex = |(r, g, b): Rgb| HexColor::from_rgb(r, g, b);
    Ok(PartialPalette {
        primary: Some(to_hex(primary)),
        secondary: secondary.map(to_hex),
        accent: accent.map(to_hex),
    })
}

/// Reduce to 4 bits and spread back over 0..=255 (`0xA7` → `0xAA`).
fn quantize(channel: u8) -> u8 {
    let high = channel & 0xF0;
    high | (high >> 4)
}

fn is_near_white(r: u8, g: u8, b: u8) -> bool {
    r > 0xE8 && g > 0xE8 && b > 0xE8
}

fn is_near_black(r: u8, g: u8, b: u8) -> bool {
    r < 0x18 && g < 0x18 && b < 0x18
}

fn distance(a: Rgb, b: Rgb) -> f32 {
    let d = |x: u8, y: u8| (x as f32 - y as f32).powi(2);
    (d(a.0, b.0) + d(a.1, b.1) + d(a.2, b.2)).sqrt()
}

fn saturation((r, g, b): Rgb) -> f32 {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    if max == 0 {
        0.0
    } else {
        (max - min) as f32 / max as f32
    }
}

// =============================================================================
// Resolver
// =============================================================================

/// Resolves the palette for one generation request.
///
/// Holds the defaults by value; every call starts from a fresh clone so no
/// request can observe another request's colors.
pub struct ColorResolver {
    defaults: Palette,
    extractor: Arc<dyn PaletteExtractor>,
}

impl ColorResolver {
    pub fn new(defaults: Palette, extractor: Arc<dyn PaletteExtractor>) -> Self {
        Self {
            defaults,
            extractor,
        }
    }

    pub fn defaults(&self) -> &Palette {
        &self.defaults
    }

    pub async fn resolve(&self, logo_url: Option<&str>, preferences: &PartialPalette) -> Palette {
        let mut palette = self.defaults.clone();
        if let Some(url) = logo_url {
            match self.extractor.extract(url).await {
                Ok(extracted) => {
                    tracing::debug!(logo_url = url, ?extracted, "extracted logo colors");
                    palette = palette.overlay(&extracted);
                }
                Err(error) => {
                    tracing::warn!(logo_url = url, %error, "color extraction failed, keeping defaults");
                }
            }
        }
        palette.overlay(preferences)
    }
}

//! # Pagesmith
//!
//! A marketing landing-page generator. A brand (name, industry, description,
//! optional logo and preferred colors) is merged into one of seven fixed
//! templates and rendered to a self-contained HTML document plus its CSS.
//! Generated pages are stored, can be published under a public slug, and can
//! be exported as a static package.
//!
//! # Architecture: One Request, One Pipeline
//!
//! ```text
//! authenticate → organization → colors → copy → render → slug + persist
//!    (auth)        (store)     (palette) (copywriter) (templates)  (store)
//! ```
//!
//! Everything outside [`templates`] is plumbing around a pure core: a
//! renderer is `fn(&BrandConfig) -> RenderedPage` and produces byte-identical
//! output for identical input. Generation is orchestrated by [`generate`];
//! everything after it (reads, publishing, the public route, export) lives
//! in [`publish`].
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | `BrandConfig`, `Site`, `TemplateId` and the other shared records |
//! | [`templates`] | Template registry and the seven renderers |
//! | [`palette`] | `#RRGGBB` colors, CSS variables, logo color extraction, color resolution |
//! | [`copywriter`] | AI marketing copy behind the `CopyGenerator` trait |
//! | [`slug`] | Brand name → URL-safe slug |
//! | [`store`] | SQLite persistence (organizations, sites, visits) |
//! | [`auth`] | Bearer-token identity |
//! | [`generate`] | Request validation and the generation pipeline |
//! | [`publish`] | Owner-scoped reads, publishing, public pages, export packages |
//! | [`api`] | axum routes and the JSON envelope |
//! | [`server`] | Production wiring and the listening socket |
//! | [`preview`] | Offline rendering for the CLI |
//! | [`config`] | Layered `pagesmith.toml` loading and validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! Pages are generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Brand text is auto-escaped on interpolation; the few
//! values that land inside inline scripts go through
//! [`templates::js_string`]. There is no template directory to ship.
//!
//! ## Collaborators Are Traits
//!
//! Identity ([`auth::Authenticator`]), copywriting
//! ([`copywriter::CopyGenerator`]) and logo extraction
//! ([`palette::PaletteExtractor`]) each have one production implementation
//! and are swapped for stubs in tests. Storage is a concrete SQLite
//! [`store::Store`]; tests run it in memory.
//!
//! ## Degrade on Colors, Fail on Copy
//!
//! A logo whose colors cannot be extracted leaves the default palette in
//! place. Copy is required content: a failing or malformed answer from the
//! copy service aborts the request before the site is written.
//!
//! ## Storage Id vs Renderer Id
//!
//! The schema only admits `t1`..`t6` as `template_id`, so `t7` sites are
//! stored under `t6`. The template that actually rendered the page is kept
//! as `renderer_id`; see [`types::TemplateId::storage_id`].

pub mod api;
pub mod auth;
pub mod config;
pub mod copywriter;
pub mod generate;
pub mod output;
pub mod palette;
pub mod preview;
pub mod publish;
pub mod server;
pub mod slug;
pub mod store;
pub mod templates;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;

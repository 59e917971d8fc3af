//! # Diwan
//!
//! Content manager and page generator for the Diwan Arabic science glossary
//! platform. Two JSON files are the data source: glossary terms and articles
//! are appended to flat collections under `data/`, and each record is
//! rendered into a standalone HTML page that drops into the existing static
//! site.
//!
//! # Architecture: Validate → Persist → Render
//!
//! Every add operation moves through three steps:
//!
//! ```text
//! 1. Validate   draft     →  Category check against the fixed table
//! 2. Persist    record    →  data/terms.json | data/articles.json
//! 3. Render     record    →  term-<slug>.html | article-<slug>.html
//! ```
//!
//! Validation happens before anything touches disk, so a bad draft leaves
//! both the collections and the pages directory untouched. Persistence is
//! whole-file read-modify-write — acceptable for a single-operator tool,
//! documented as unsafe under concurrent writers.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`category`] | Fixed table of the six scientific domains (slug, names, badge tag) |
//! | [`slug`] | Unicode-aware slugification and page filename derivation |
//! | [`types`] | Stored record shapes, draft input shapes, stats |
//! | [`store`] | JSON-backed append-only content store |
//! | [`generate`] | Maud page rendering for terms and articles |
//! | [`refresh`] | Print-only placeholders for cross-page regeneration |
//! | [`config`] | Optional `config.toml` (site name, contact, directories) |
//! | [`output`] | CLI output formatting — pure `format_*` + `print_*` wrappers |
//! | [`prompt`] | Interactive add flows and the main menu loop |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Malformed markup is a build error, template variables
//! are Rust expressions, and all interpolation is auto-escaped — which is
//! what makes it safe to pour operator-supplied Arabic prose straight into
//! the page templates.
//!
//! ## Unicode Slugs
//!
//! Titles are mostly Arabic, so slugs keep any Unicode word character
//! rather than transliterating to ASCII. `نظرية الكم` becomes
//! `نظرية-الكم` and its page `term-نظرية-الكم.html`. Slugs are never
//! checked for uniqueness: colliding titles share a filename and the later
//! page wins. That matches how the platform has always behaved and is
//! documented in [`store`].
//!
//! ## Append-Only Collections
//!
//! Records are never updated or deleted. Corrections are made by hand in
//! the JSON files; the tool only appends. This keeps the store a pair of
//! human-readable files an editor can always inspect and fix.

pub mod category;
pub mod config;
pub mod generate;
pub mod output;
pub mod prompt;
pub mod refresh;
pub mod slug;
pub mod store;
pub mod types;

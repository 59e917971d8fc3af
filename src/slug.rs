//! Title-to-slug conversion and page filename derivation.
//!
//! Titles on this platform are mostly Arabic, so the slug alphabet cannot be
//! restricted to ASCII: any Unicode word character survives. The rules are:
//!
//! 1. Strip everything that is not a word character, whitespace, or `-`
//! 2. Collapse runs of whitespace and underscores into a single `-`
//! 3. Trim leading/trailing dashes and lowercase the result
//!
//! The conversion is deterministic and idempotent — slugifying a slug yields
//! the same slug. No uniqueness check exists anywhere: two titles that
//! slugify identically produce colliding filenames and the later page
//! silently overwrites the earlier one (see `store` docs).

use regex::Regex;
use std::sync::LazyLock;

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s-]").unwrap());
static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s_]+").unwrap());

/// Derive a filesystem/URL-safe slug from a human-readable title.
pub fn slugify(title: &str) -> String {
    let stripped = NON_WORD.replace_all(title, "");
    let dashed = SEPARATORS.replace_all(&stripped, "-");
    dashed.trim_matches('-').to_lowercase()
}

/// Filename of a term page: `term-<slug>.html`.
pub fn term_filename(slug: &str) -> String {
    format!("term-{slug}.html")
}

/// Filename of an article page: `article-<slug>.html`.
pub fn article_filename(slug: &str) -> String {
    format!("article-{slug}.html")
}

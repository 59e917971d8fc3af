//! Record types persisted to the JSON data files.
//!
//! `Term` and `Article` are the stored shapes — caller-supplied fields plus
//! the derived `slug`/`filename`/`date` the store fills in on add. The
//! `*Draft` types are the input shapes: no derived fields, and the category
//! still a raw string so the store can validate it against the fixed table.
//!
//! Records are append-only. There are no update or delete operations, so the
//! stored shapes never change after they are written.

use crate::category::Category;
use serde::{Deserialize, Serialize};

/// A titled block of prose. Terms use these as examples, articles as sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub content: String,
}

/// A glossary term as stored in `terms.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Term {
    /// Arabic title — the page heading and the slug source.
    pub title_ar: String,
    /// English title, shown in the term info card.
    pub title_en: String,
    pub category: Category,
    /// Scientific definition.
    pub definition: String,
    /// Simplified explanation.
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub slug: String,
    /// `term-<slug>.html`
    pub filename: String,
    /// Creation date in Arabic-Indic digits, `٢٠٢٦/٨/٢٨` style.
    pub date: String,
}

/// An article as stored in `articles.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub category: Category,
    /// Introduction paragraph, rendered as the article lead.
    pub intro: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<Section>,
    /// Estimated reading time in minutes.
    pub reading_time: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub slug: String,
    /// `article-<slug>.html`
    pub filename: String,
    pub date: String,
}

/// Input for [`crate::store::ContentStore::add_term`].
#[derive(Debug, Clone, Default)]
pub struct TermDraft {
    pub title_ar: String,
    pub title_en: String,
    /// Category slug; validated against [`Category::ALL`] on add.
    pub category: String,
    pub definition: String,
    pub explanation: String,
    pub examples: Vec<Section>,
    pub image: Option<String>,
}

/// Input for [`crate::store::ContentStore::add_article`].
#[derive(Debug, Clone, Default)]
pub struct ArticleDraft {
    pub title: String,
    pub category: String,
    pub intro: String,
    pub sections: Vec<Section>,
    /// Minutes; `None` falls back to the store default of 10.
    pub reading_time: Option<u32>,
    pub image: Option<String>,
}

/// Collection counts reported by `stats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub terms_count: usize,
    pub articles_count: usize,
    pub categories_count: usize,
}

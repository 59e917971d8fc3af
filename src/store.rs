//! JSON-backed content store.
//!
//! Two append-only collections — terms and articles — persisted as pretty
//! UTF-8 JSON arrays under the data directory. Writes are whole-file
//! read-modify-write: the collection is loaded, the new record appended, and
//! the file rewritten. There is no locking and no transactional guarantee;
//! two concurrent writers can lose an append. The tool is built for
//! single-operator interactive use, so that limitation is accepted rather
//! than engineered around.
//!
//! Adding a record validates the category, derives `slug`/`filename`/`date`,
//! persists the enriched record, writes its HTML page, and runs the
//! [`crate::refresh`] placeholder hooks. Validation happens before any file
//! is touched — an invalid category leaves both the collection and the pages
//! directory unchanged.
//!
//! Slugs are not checked for uniqueness: two titles that slugify identically
//! share a filename and the later page overwrites the earlier one.

use crate::category::Category;
use crate::config::SiteConfig;
use crate::generate::{self, GenerateError};
use crate::refresh;
use crate::slug::{article_filename, slugify, term_filename};
use crate::types::{Article, ArticleDraft, Stats, Term, TermDraft};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Reading time applied when a draft does not carry a usable value.
pub const DEFAULT_READING_TIME: u32 = 10;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("unknown category \"{given}\"; available categories: {}", .allowed.join(", "))]
    InvalidCategory {
        given: String,
        allowed: Vec<&'static str>,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("page generation error: {0}")]
    Generate(#[from] GenerateError),
}

/// Handle on the platform's content: the JSON collections plus the pages
/// directory HTML is emitted into.
pub struct ContentStore {
    terms_file: PathBuf,
    articles_file: PathBuf,
    pages_dir: PathBuf,
    config: SiteConfig,
}

impl ContentStore {
    /// Open the store rooted at `base_dir`, creating the data directory and
    /// empty collections on first use.
    pub fn open(base_dir: &Path, config: &SiteConfig) -> Result<ContentStore, StoreError> {
        let data_dir = base_dir.join(&config.data_dir);
        fs::create_dir_all(&data_dir)?;
        let pages_dir = base_dir.join(&config.pages_dir);
        fs::create_dir_all(&pages_dir)?;

        let store = ContentStore {
            terms_file: data_dir.join("terms.json"),
            articles_file: data_dir.join("articles.json"),
            pages_dir,
            config: config.clone(),
        };
        if !store.terms_file.exists() {
            save_collection::<Term>(&store.terms_file, &[])?;
        }
        if !store.articles_file.exists() {
            save_collection::<Article>(&store.articles_file, &[])?;
        }
        Ok(store)
    }

    /// Validate, enrich, and append a term; write its page; run the refresh
    /// hooks. Returns the generated filename.
    pub fn add_term(&self, draft: TermDraft) -> Result<String, StoreError> {
        let category = validate_category(&draft.category)?;

        let slug = slugify(&draft.title_ar);
        let term = Term {
            title_ar: draft.title_ar,
            title_en: draft.title_en,
            category,
            definition: draft.definition,
            explanation: draft.explanation,
            examples: draft.examples,
            image: draft.image,
            filename: term_filename(&slug),
            slug,
            date: current_date_arabic(),
        };

        let mut terms: Vec<Term> = load_collection(&self.terms_file)?;
        terms.push(term.clone());
        save_collection(&self.terms_file, &terms)?;

        generate::write_term_page(&term, &self.config, &self.pages_dir)?;
        refresh::after_term_added(term.category, &self.stats()?);

        Ok(term.filename)
    }

    /// Same contract as [`Self::add_term`], targeting the articles
    /// collection. Missing reading time defaults to
    /// [`DEFAULT_READING_TIME`].
    pub fn add_article(&self, draft: ArticleDraft) -> Result<String, StoreError> {
        let category = validate_category(&draft.category)?;

        let slug = slugify(&draft.title);
        let article = Article {
            title: draft.title,
            category,
            intro: draft.intro,
            sections: draft.sections,
            reading_time: draft.reading_time.unwrap_or(DEFAULT_READING_TIME),
            image: draft.image,
            filename: article_filename(&slug),
            slug,
            date: current_date_arabic(),
        };

        let mut articles: Vec<Article> = load_collection(&self.articles_file)?;
        articles.push(article.clone());
        save_collection(&self.articles_file, &articles)?;

        generate::write_article_page(&article, &self.config, &self.pages_dir)?;
        refresh::after_article_added(&self.stats()?);

        Ok(article.filename)
    }

    /// Collection counts. Loads both files in full — fine at this scale.
    pub fn stats(&self) -> Result<Stats, StoreError> {
        let terms: Vec<Term> = load_collection(&self.terms_file)?;
        let articles: Vec<Article> = load_collection(&self.articles_file)?;
        Ok(Stats {
            terms_count: terms.len(),
            articles_count: articles.len(),
            categories_count: Category::ALL.len(),
        })
    }

    /// All stored terms, oldest first.
    pub fn terms(&self) -> Result<Vec<Term>, StoreError> {
        load_collection(&self.terms_file)
    }

    /// All stored articles, oldest first.
    pub fn articles(&self) -> Result<Vec<Article>, StoreError> {
        load_collection(&self.articles_file)
    }
}

fn validate_category(slug: &str) -> Result<Category, StoreError> {
    Category::from_slug(slug).ok_or_else(|| StoreError::InvalidCategory {
        given: slug.to_string(),
        allowed: Category::all_slugs(),
    })
}

fn load_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn save_collection<T: Serialize>(path: &Path, items: &[T]) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(items)?;
    fs::write(path, json)?;
    Ok(())
}

/// Today's date as `٢٠٢٦/٨/٢٨` — `YYYY/M/D` with every digit converted to
/// its Arabic-Indic form.
fn current_date_arabic() -> String {
    let today = time::OffsetDateTime::now_utc().date();
    format_date_arabic(today.year(), today.month() as u8, today.day())
}

fn format_date_arabic(year: i32, month: u8, day: u8) -> String {
    to_arabic_digits(&format!("{year}/{month}/{day}"))
}

fn to_arabic_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            // U+0660 is ARABIC-INDIC DIGIT ZERO
            Some(d) => char::from_u32(0x0660 + d).unwrap_or(c),
            None => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Section;
    use tempfile::TempDir;

    fn open_store(tmp: &TempDir) -> ContentStore {
        ContentStore::open(tmp.path(), &SiteConfig::default()).unwrap()
    }

    fn term_draft(title_ar: &str, category: &str) -> TermDraft {
        TermDraft {
            title_ar: title_ar.to_string(),
            title_en: "Quantum Theory".to_string(),
            category: category.to_string(),
            definition: "التعريف العلمي".to_string(),
            explanation: "شرح مبسط".to_string(),
            examples: vec![Section {
                title: "مثال".to_string(),
                content: "محتوى المثال".to_string(),
            }],
            image: None,
        }
    }

    fn article_draft(title: &str) -> ArticleDraft {
        ArticleDraft {
            title: title.to_string(),
            category: "energy".to_string(),
            intro: "مقدمة".to_string(),
            sections: vec![],
            reading_time: None,
            image: None,
        }
    }

    #[test]
    fn open_creates_empty_collections() {
        let tmp = TempDir::new().unwrap();
        let store = open_store(&tmp);
        assert!(tmp.path().join("data/terms.json").exists());
        assert!(tmp.path().join("data/articles.json").exists());
        let stats = store.stats().unwrap();
        assert_eq!(stats.terms_count, 0);
        assert_eq!(stats.articles_count, 0);
        assert_eq!(stats.categories_count, 6);
    }

    #[test]
    fn reopen_keeps_existing_data() {
        let tmp = TempDir::new().unwrap();
        open_store(&tmp)
            .add_term(term_draft("نظرية الكم", "physics"))
            .unwrap();
        // Opening again must not reset the collections
        let store = open_store(&tmp);
        assert_eq!(store.stats().unwrap().terms_count, 1);
    }

    #[test]
    fn add_term_appends_one_enriched_record() {
        let tmp = TempDir::new().unwrap();
        let store = open_store(&tmp);

        let filename = store.add_term(term_draft("نظرية الكم", "physics")).unwrap();
        assert_eq!(filename, "term-نظرية-الكم.html");

        let terms = store.terms().unwrap();
        assert_eq!(terms.len(), 1);
        let term = &terms[0];
        assert_eq!(term.title_ar, "نظرية الكم");
        assert_eq!(term.category, Category::Physics);
        assert_eq!(term.slug, "نظرية-الكم");
        assert_eq!(term.filename, filename);
        assert!(!term.date.is_empty());
    }

    #[test]
    fn add_term_writes_html_page() {
        let tmp = TempDir::new().unwrap();
        let store = open_store(&tmp);
        let filename = store.add_term(term_draft("نظرية الكم", "physics")).unwrap();
        let page = std::fs::read_to_string(tmp.path().join(&filename)).unwrap();
        assert!(page.contains("نظرية الكم"));
        assert!(page.contains("التعريف العلمي"));
    }

    #[test]
    fn invalid_category_fails_before_any_write() {
        let tmp = TempDir::new().unwrap();
        let store = open_store(&tmp);
        let before = std::fs::read_to_string(tmp.path().join("data/terms.json")).unwrap();

        let err = store
            .add_term(term_draft("نظرية الكم", "astrology"))
            .unwrap_err();
        match err {
            StoreError::InvalidCategory { given, allowed } => {
                assert_eq!(given, "astrology");
                assert_eq!(allowed.len(), 6);
                assert!(allowed.contains(&"physics"));
            }
            other => panic!("expected InvalidCategory, got {other:?}"),
        }

        // Collection untouched, no page written
        let after = std::fs::read_to_string(tmp.path().join("data/terms.json")).unwrap();
        assert_eq!(before, after);
        assert!(!tmp.path().join("term-نظرية-الكم.html").exists());
    }

    #[test]
    fn add_article_defaults_reading_time() {
        let tmp = TempDir::new().unwrap();
        let store = open_store(&tmp);
        store.add_article(article_draft("مقال بلا وقت")).unwrap();

        let articles = store.articles().unwrap();
        assert_eq!(articles[0].reading_time, DEFAULT_READING_TIME);
    }

    #[test]
    fn add_article_keeps_provided_reading_time() {
        let tmp = TempDir::new().unwrap();
        let store = open_store(&tmp);
        let mut draft = article_draft("مقال موقوت");
        draft.reading_time = Some(25);
        store.add_article(draft).unwrap();
        assert_eq!(store.articles().unwrap()[0].reading_time, 25);
    }

    #[test]
    fn invalid_article_category_rejected() {
        let tmp = TempDir::new().unwrap();
        let store = open_store(&tmp);
        let mut draft = article_draft("مقال");
        draft.category = "alchemy".to_string();
        assert!(matches!(
            store.add_article(draft),
            Err(StoreError::InvalidCategory { .. })
        ));
        assert_eq!(store.stats().unwrap().articles_count, 0);
    }

    #[test]
    fn stats_counts_both_collections() {
        let tmp = TempDir::new().unwrap();
        let store = open_store(&tmp);
        store.add_term(term_draft("مصطلح أول", "physics")).unwrap();
        store.add_term(term_draft("مصطلح ثان", "chemistry")).unwrap();
        store.add_term(term_draft("مصطلح ثالث", "biology")).unwrap();
        store.add_article(article_draft("مقال أول")).unwrap();
        store.add_article(article_draft("مقال ثان")).unwrap();

        let stats = store.stats().unwrap();
        assert_eq!(stats.terms_count, 3);
        assert_eq!(stats.articles_count, 2);
        assert_eq!(stats.categories_count, 6);
    }

    #[test]
    fn persisted_json_is_pretty_and_unescaped() {
        let tmp = TempDir::new().unwrap();
        let store = open_store(&tmp);
        store.add_term(term_draft("نظرية الكم", "physics")).unwrap();
        let raw = std::fs::read_to_string(tmp.path().join("data/terms.json")).unwrap();
        assert!(raw.contains("نظرية الكم"));
        assert!(!raw.contains("\\u"));
        assert!(raw.contains("\n  "));
    }

    #[test]
    fn colliding_slugs_share_a_filename() {
        let tmp = TempDir::new().unwrap();
        let store = open_store(&tmp);
        // "نظرية  الكم" collapses to the same slug as "نظرية الكم"
        let first = store.add_term(term_draft("نظرية الكم", "physics")).unwrap();
        let second = store
            .add_term(term_draft("نظرية  الكم", "chemistry"))
            .unwrap();
        assert_eq!(first, second);
        // Both records stored, page reflects the later write
        assert_eq!(store.terms().unwrap().len(), 2);
        let page = std::fs::read_to_string(tmp.path().join(&second)).unwrap();
        assert!(page.contains("الكيمياء"));
    }

    #[test]
    fn arabic_date_digits() {
        assert_eq!(format_date_arabic(2026, 8, 28), "٢٠٢٦/٨/٢٨");
        assert_eq!(to_arabic_digits("0123456789"), "٠١٢٣٤٥٦٧٨٩");
    }
}

//! End-to-end add flow: open a store in a temp dir, add records through the
//! batch API, and check the persisted JSON and generated pages together.

use diwan::config::SiteConfig;
use diwan::store::ContentStore;
use diwan::types::{ArticleDraft, Section, TermDraft};
use tempfile::TempDir;

fn draft_term(title_ar: &str, category: &str) -> TermDraft {
    TermDraft {
        title_ar: title_ar.to_string(),
        title_en: "Renewable Energy".to_string(),
        category: category.to_string(),
        definition: "طاقة مستمدة من مصادر طبيعية متجددة".to_string(),
        explanation: "طاقة لا تنفد مثل الشمس والرياح".to_string(),
        examples: vec![Section {
            title: "الطاقة الشمسية".to_string(),
            content: "تحويل ضوء الشمس إلى كهرباء".to_string(),
        }],
        image: Some("renewable.jpg".to_string()),
    }
}

#[test]
fn term_round_trip_through_store_and_page() {
    let tmp = TempDir::new().unwrap();
    let config = SiteConfig::default();
    let store = ContentStore::open(tmp.path(), &config).unwrap();

    let filename = store
        .add_term(draft_term("الطاقة المتجددة", "energy"))
        .unwrap();
    assert_eq!(filename, "term-الطاقة-المتجددة.html");

    // Persisted JSON holds the enriched record
    let raw = std::fs::read_to_string(tmp.path().join("data/terms.json")).unwrap();
    assert!(raw.contains("الطاقة المتجددة"));
    assert!(raw.contains("\"slug\": \"الطاقة-المتجددة\""));
    assert!(raw.contains("\"filename\": \"term-الطاقة-المتجددة.html\""));

    // Generated page carries the record fields and the site chrome
    let page = std::fs::read_to_string(tmp.path().join(&filename)).unwrap();
    assert!(page.contains("الطاقة المتجددة"));
    assert!(page.contains("الطاقة الشمسية"));
    assert!(page.contains("images/renewable.jpg"));
    assert!(page.contains(&config.site_name));

    // Reopening sees the same state
    let reopened = ContentStore::open(tmp.path(), &config).unwrap();
    assert_eq!(reopened.stats().unwrap().terms_count, 1);
}

#[test]
fn article_round_trip_and_stats() {
    let tmp = TempDir::new().unwrap();
    let config = SiteConfig::default();
    let store = ContentStore::open(tmp.path(), &config).unwrap();

    let filename = store
        .add_article(ArticleDraft {
            title: "مستقبل الهيدروجين الأخضر".to_string(),
            category: "energy".to_string(),
            intro: "مقدمة عن الهيدروجين".to_string(),
            sections: vec![
                Section {
                    title: "الإنتاج".to_string(),
                    content: "التحليل الكهربائي للماء".to_string(),
                },
                Section {
                    title: "التخزين".to_string(),
                    content: "تحديات الضغط والتبريد".to_string(),
                },
            ],
            reading_time: Some(8),
            image: None,
        })
        .unwrap();
    assert_eq!(filename, "article-مستقبل-الهيدروجين-الأخضر.html");

    let page = std::fs::read_to_string(tmp.path().join(&filename)).unwrap();
    assert!(page.contains("الإنتاج"));
    assert!(page.contains("التخزين"));

    let stats = store.stats().unwrap();
    assert_eq!(stats.articles_count, 1);
    assert_eq!(stats.terms_count, 0);
    assert_eq!(stats.categories_count, 6);
}

#[test]
fn custom_pages_dir_receives_pages() {
    let tmp = TempDir::new().unwrap();
    let config = SiteConfig {
        pages_dir: "site".to_string(),
        ..SiteConfig::default()
    };
    let store = ContentStore::open(tmp.path(), &config).unwrap();
    let filename = store.add_term(draft_term("مصطلح", "physics")).unwrap();
    assert!(tmp.path().join("site").join(&filename).exists());
}

//! Cross-page regeneration hooks.
//!
//! The platform's listing pages (category pages, the terms and articles
//! indexes, the homepage counters) are still maintained by hand. These hooks
//! sit on the write path where regeneration will eventually happen, but for
//! now they only announce what they would rebuild — no files are touched.
//!
//! Each hook follows the `format_*`/`print_*` split used across the CLI:
//! pure formatting functions returning lines, thin wrappers doing the I/O.

use crate::category::Category;
use crate::types::Stats;

/// Hooks run after a term is persisted: its category page, the terms index,
/// and the homepage counters.
pub fn after_term_added(category: Category, stats: &Stats) {
    print_lines(format_category_page_refresh(category));
    print_lines(format_terms_index_refresh());
    print_lines(format_homepage_stats_refresh(stats));
}

/// Hooks run after an article is persisted: the articles index and the
/// homepage counters.
pub fn after_article_added(stats: &Stats) {
    print_lines(format_articles_index_refresh());
    print_lines(format_homepage_stats_refresh(stats));
}

pub fn format_category_page_refresh(category: Category) -> Vec<String> {
    vec![format!(
        "تحديث صفحة الفئة: {} (سيتم تنفيذ هذا لاحقاً)",
        category.name_ar()
    )]
}

pub fn format_terms_index_refresh() -> Vec<String> {
    vec!["تحديث صفحة قائمة المصطلحات (سيتم تنفيذ هذا لاحقاً)".to_string()]
}

pub fn format_articles_index_refresh() -> Vec<String> {
    vec!["تحديث صفحة قائمة المقالات (سيتم تنفيذ هذا لاحقاً)".to_string()]
}

pub fn format_homepage_stats_refresh(stats: &Stats) -> Vec<String> {
    vec![
        "الإحصائيات الجديدة:".to_string(),
        format!("    المصطلحات: {}", stats.terms_count),
        format!("    المقالات: {}", stats.articles_count),
    ]
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_refresh_names_the_category() {
        let lines = format_category_page_refresh(Category::Biology);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("الأحياء"));
    }

    #[test]
    fn homepage_refresh_reports_counts() {
        let stats = Stats {
            terms_count: 3,
            articles_count: 2,
            categories_count: 6,
        };
        let lines = format_homepage_stats_refresh(&stats);
        assert!(lines.iter().any(|l| l.contains("3")));
        assert!(lines.iter().any(|l| l.contains("2")));
    }
}

//! CLI output formatting.
//!
//! Every block of user-facing text the tool prints is built here. Each block
//! has a `format_*` function (returns `Vec<String>`) for testability and a
//! `print_*` wrapper that writes to stdout. Format functions are pure — no
//! I/O, no side effects.

use crate::category::Category;
use crate::types::{ArticleDraft, Stats, TermDraft};

const RULE: &str = "==================================================";

/// The available-categories table: slug column and Arabic display name.
pub fn format_categories() -> Vec<String> {
    let mut lines = vec!["المجالات العلمية المتاحة:".to_string(), RULE.to_string()];
    for category in Category::ALL {
        lines.push(format!("  {:<15} -> {}", category.slug(), category.name_ar()));
    }
    lines.push(RULE.to_string());
    lines
}

/// The platform stats block.
pub fn format_stats(site_name: &str, stats: &Stats) -> Vec<String> {
    vec![
        format!("إحصائيات منصة {site_name}"),
        RULE.to_string(),
        format!("  المجالات العلمية: {}", stats.categories_count),
        format!("  المصطلحات: {}", stats.terms_count),
        format!("  المقالات: {}", stats.articles_count),
        RULE.to_string(),
    ]
}

/// Pre-confirmation summary for a term about to be saved.
pub fn format_term_summary(draft: &TermDraft, category: Category) -> Vec<String> {
    vec![
        RULE.to_string(),
        "ملخص المصطلح:".to_string(),
        format!("  العنوان: {}", draft.title_ar),
        format!("  المجال: {}", category.name_ar()),
        format!("  عدد الأمثلة: {}", draft.examples.len()),
        RULE.to_string(),
    ]
}

/// Pre-confirmation summary for an article about to be saved.
pub fn format_article_summary(draft: &ArticleDraft, category: Category) -> Vec<String> {
    use crate::store::DEFAULT_READING_TIME;
    vec![
        RULE.to_string(),
        "ملخص المقال:".to_string(),
        format!("  العنوان: {}", draft.title),
        format!("  المجال: {}", category.name_ar()),
        format!("  عدد الأقسام: {}", draft.sections.len()),
        format!(
            "  وقت القراءة: {} دقيقة",
            draft.reading_time.unwrap_or(DEFAULT_READING_TIME)
        ),
        RULE.to_string(),
    ]
}

/// Confirmation printed after a record and its page are written.
pub fn format_record_added(kind: &str, title: &str, filename: &str) -> Vec<String> {
    vec![
        format!("تم إضافة {kind}: {title}"),
        format!("الملف: {filename}"),
    ]
}

pub fn print_categories() {
    print_lines(format_categories());
}

pub fn print_stats(site_name: &str, stats: &Stats) {
    print_lines(format_stats(site_name, stats));
}

pub fn print_term_summary(draft: &TermDraft, category: Category) {
    print_lines(format_term_summary(draft, category));
}

pub fn print_article_summary(draft: &ArticleDraft, category: Category) {
    print_lines(format_article_summary(draft, category));
}

pub fn print_record_added(kind: &str, title: &str, filename: &str) {
    print_lines(format_record_added(kind, title, filename));
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}

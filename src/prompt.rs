//! Interactive collection flows.
//!
//! The add flows mirror the shape of the records: sequential prompts for
//! each required field, an open-ended title/content loop terminated by an
//! empty title for examples and sections, optional fields skipped on empty
//! input, and an explicit confirmation before anything is persisted.
//! Declining the confirmation writes nothing.
//!
//! Category selection uses a `Select` over the fixed table, so an invalid
//! category cannot be entered interactively; the store still validates for
//! programmatic callers.

use crate::category::Category;
use crate::config::SiteConfig;
use crate::output;
use crate::store::{ContentStore, StoreError};
use crate::types::{ArticleDraft, Section, TermDraft};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("prompt error: {0}")]
    Dialoguer(#[from] dialoguer::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The main menu loop: add term / add article / stats / categories / exit.
pub fn menu_loop(store: &ContentStore, config: &SiteConfig) -> Result<(), PromptError> {
    let theme = ColorfulTheme::default();
    let items = [
        "إضافة مصطلح جديد",
        "إضافة مقال جديد",
        "عرض الإحصائيات",
        "عرض المجالات المتاحة",
        "خروج",
    ];
    loop {
        let choice = Select::with_theme(&theme)
            .with_prompt("القائمة الرئيسية")
            .items(&items)
            .default(0)
            .interact()?;
        match choice {
            0 => {
                add_term_flow(store)?;
            }
            1 => {
                add_article_flow(store)?;
            }
            2 => output::print_stats(&config.site_name, &store.stats()?),
            3 => output::print_categories(),
            _ => {
                println!("شكراً لاستخدامك نظام إدارة المحتوى!");
                return Ok(());
            }
        }
    }
}

/// Collect, confirm, and persist a term. Returns the generated filename, or
/// `None` if the operator declined the confirmation.
pub fn add_term_flow(store: &ContentStore) -> Result<Option<String>, PromptError> {
    let theme = ColorfulTheme::default();
    println!("إضافة مصطلح جديد");
    output::print_categories();

    let title_ar: String = required(&theme, "العنوان بالعربية")?;
    let title_en: String = required(&theme, "English Title")?;
    let category = select_category(&theme)?;
    let definition: String = required(&theme, "التعريف العلمي")?;
    let explanation: String = required(&theme, "شرح مبسط")?;
    let examples = collect_sections(&theme, "مثال")?;
    let image = optional(&theme, "اسم ملف الصورة (اختياري)")?;

    let draft = TermDraft {
        title_ar,
        title_en,
        category: category.slug().to_string(),
        definition,
        explanation,
        examples,
        image,
    };

    output::print_term_summary(&draft, category);
    if !confirm(&theme, "هل تريد حفظ المصطلح؟")? {
        println!("تم الإلغاء");
        return Ok(None);
    }

    let title = draft.title_ar.clone();
    let filename = store.add_term(draft)?;
    output::print_record_added("المصطلح", &title, &filename);
    Ok(Some(filename))
}

/// Collect, confirm, and persist an article. Same contract as
/// [`add_term_flow`].
pub fn add_article_flow(store: &ContentStore) -> Result<Option<String>, PromptError> {
    let theme = ColorfulTheme::default();
    println!("إضافة مقال جديد");
    output::print_categories();

    let title: String = required(&theme, "عنوان المقال")?;
    let category = select_category(&theme)?;
    let intro: String = required(&theme, "مقدمة المقال")?;
    let sections = collect_sections(&theme, "قسم")?;
    // Unparsable or empty input falls back to the store default
    let reading_time = optional(&theme, "وقت القراءة المتوقع (بالدقائق)")?
        .and_then(|s| s.parse::<u32>().ok());
    let image = optional(&theme, "اسم ملف الصورة (اختياري)")?;

    let draft = ArticleDraft {
        title,
        category: category.slug().to_string(),
        intro,
        sections,
        reading_time,
        image,
    };

    output::print_article_summary(&draft, category);
    if !confirm(&theme, "هل تريد حفظ المقال؟")? {
        println!("تم الإلغاء");
        return Ok(None);
    }

    let title = draft.title.clone();
    let filename = store.add_article(draft)?;
    output::print_record_added("المقال", &title, &filename);
    Ok(Some(filename))
}

fn select_category(theme: &ColorfulTheme) -> Result<Category, PromptError> {
    let labels: Vec<String> = Category::ALL
        .iter()
        .map(|c| format!("{:<15} {}", c.slug(), c.name_ar()))
        .collect();
    let idx = Select::with_theme(theme)
        .with_prompt("المجال")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(Category::ALL[idx])
}

/// Repeated title/content prompts, terminated by an empty title.
fn collect_sections(theme: &ColorfulTheme, label: &str) -> Result<Vec<Section>, PromptError> {
    let mut sections = Vec::new();
    println!("{label}: اضغط Enter بدون كتابة للإنهاء");
    loop {
        let title: String = Input::with_theme(theme)
            .with_prompt(format!("{} {} - العنوان", label, sections.len() + 1))
            .allow_empty(true)
            .interact_text()?;
        if title.trim().is_empty() {
            break;
        }
        let content: String = Input::with_theme(theme)
            .with_prompt(format!("{} {} - المحتوى", label, sections.len() + 1))
            .interact_text()?;
        sections.push(Section {
            title: title.trim().to_string(),
            content: content.trim().to_string(),
        });
    }
    Ok(sections)
}

fn required(theme: &ColorfulTheme, prompt: &str) -> Result<String, PromptError> {
    let value: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .interact_text()?;
    Ok(value.trim().to_string())
}

fn optional(theme: &ColorfulTheme, prompt: &str) -> Result<Option<String>, PromptError> {
    let value: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    let trimmed = value.trim();
    Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
}

fn confirm(theme: &ColorfulTheme, prompt: &str) -> Result<bool, PromptError> {
    Ok(Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}

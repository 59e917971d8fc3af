//! HTML page generation.
//!
//! Renders a validated record into a complete standalone HTML document and
//! writes it next to the other site pages. One page per record:
//!
//! - **Term pages** (`term-<slug>.html`): definition, simplified explanation,
//!   optional image, example blocks, and an info card with category and date
//! - **Article pages** (`article-<slug>.html`): introduction lead followed by
//!   the article's section blocks
//!
//! Every page carries the shared site chrome — RTL navbar, breadcrumb hero,
//! and footer — so it drops into the existing static site as-is. Styling
//! comes from the Bootstrap RTL CDN build plus the site's `styles.css`;
//! nothing is bundled.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping, so
//! user-supplied titles and content are always interpolated escaped.
//!
//! Writes overwrite any existing file with the same name; slug collisions
//! are not detected (see `store`).

use crate::config::SiteConfig;
use crate::types::{Article, Term};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const COPY_LINK_JS: &str = include_str!("../static/page.js");

/// Which navbar entry renders highlighted.
#[derive(Clone, Copy, PartialEq)]
enum NavPage {
    Terms,
    Articles,
}

/// Render a term page and write it to `pages_dir/<filename>`.
pub fn write_term_page(
    term: &Term,
    config: &SiteConfig,
    pages_dir: &Path,
) -> Result<PathBuf, GenerateError> {
    let path = pages_dir.join(&term.filename);
    fs::write(&path, render_term_page(term, config).into_string())?;
    Ok(path)
}

/// Render an article page and write it to `pages_dir/<filename>`.
pub fn write_article_page(
    article: &Article,
    config: &SiteConfig,
    pages_dir: &Path,
) -> Result<PathBuf, GenerateError> {
    let path = pages_dir.join(&article.filename);
    fs::write(&path, render_article_page(article, config).into_string())?;
    Ok(path)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document: RTL Arabic page with the CDN stylesheet
/// stack (Bootstrap RTL, Font Awesome, Tajawal) and the shared site scripts.
fn base_document(title: &str, config: &SiteConfig, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="ar" dir="rtl" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - " (config.site_name) }
                link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/css/bootstrap.rtl.min.css";
                link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.2/css/all.min.css";
                link rel="preconnect" href="https://fonts.googleapis.com";
                link rel="preconnect" href="https://fonts.gstatic.com" crossorigin;
                link href="https://fonts.googleapis.com/css2?family=Tajawal:wght@400;500;700;900&display=swap" rel="stylesheet";
                link rel="stylesheet" href="styles.css";
            }
            body {
                (content)
                script src="https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/js/bootstrap.bundle.min.js" {}
                script src="script.js" {}
                script { (PreEscaped(COPY_LINK_JS)) }
            }
        }
    }
}

/// Renders the sticky site navbar with the active entry highlighted.
fn site_header(config: &SiteConfig, active: NavPage) -> Markup {
    let nav_link = |href: &str, label: &str, page: Option<NavPage>| {
        let is_active = page == Some(active);
        html! {
            li.nav-item {
                a.nav-link.active[is_active] href=(href) { (label) }
            }
        }
    };

    html! {
        header.bg-white.shadow-sm.sticky-top {
            nav.navbar.navbar-expand-lg {
                div.container {
                    a.navbar-brand.d-flex.align-items-center href="index.html" {
                        img src="images/logos/logo_ar.PNG" alt=(config.site_name) style="height: 50px;";
                        span.fw-bold.fs-3 style="color: #0a2351; margin-right: 120px;" { (config.site_name) }
                    }
                    button.navbar-toggler type="button" data-bs-toggle="collapse" data-bs-target="#navbarNav" {
                        span.navbar-toggler-icon {}
                    }
                    div.collapse.navbar-collapse #navbarNav {
                        ul.navbar-nav.ms-auto {
                            (nav_link("index.html", "الرئيسية", None))
                            (nav_link("index.html#about", "عن المنصة", None))
                            (nav_link("categories.html", "المجالات العلمية", None))
                            (nav_link("terms-list.html", "المصطلحات", Some(NavPage::Terms)))
                            (nav_link("articles.html", "المقالات", Some(NavPage::Articles)))
                        }
                        div.d-flex.gap-2 {
                            button.btn.btn-outline-primary data-bs-toggle="modal" data-bs-target="#newsletterModal" {
                                i.fas.fa-envelope {} " انضم إلينا"
                            }
                            button.btn.btn-primary data-bs-toggle="modal" data-bs-target="#knowledgeModal" {
                                i.fas.fa-share-alt {} " شارك معرفتك"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Renders the colored hero band: breadcrumb trail, category badge, page
/// title, and the copy-link button.
fn page_hero(title: &str, badge: Markup, crumbs: Markup) -> Markup {
    html! {
        section.term-page-header {
            div.container {
                nav aria-label="breadcrumb" {
                    ol.breadcrumb {
                        (crumbs)
                        li.breadcrumb-item.active.text-white-50 aria-current="page" { (title) }
                    }
                }
                div.row.align-items-center {
                    div.col-md-8 {
                        (badge)
                        h1.term-page-title { (title) }
                    }
                    div.col-md-4.text-md-end.mt-3.mt-md-0 {
                        button.btn.btn-light onclick="copyPageLink()" {
                            i.fas.fa-share-alt {} " نسخ الرابط"
                        }
                    }
                }
            }
        }
    }
}

fn crumb(href: String, label: &str) -> Markup {
    html! {
        li.breadcrumb-item { a.text-white href=(href) { (label) } }
    }
}

/// Renders the site footer with quick links and contact address.
fn site_footer(config: &SiteConfig) -> Markup {
    html! {
        footer.bg-dark.text-white.py-5 {
            div.container {
                div.row {
                    div.col-md-4.mb-4 {
                        h5.fw-bold.mb-3 { (config.site_name) }
                        p { "منصة علمية متخصصة في توحيد وتوثيق المصطلحات العلمية باللغة العربية" }
                    }
                    div.col-md-4.mb-4 {
                        h5.fw-bold.mb-3 { "روابط سريعة" }
                        ul.list-unstyled {
                            li { a.text-white-50.text-decoration-none href="index.html" { "الرئيسية" } }
                            li { a.text-white-50.text-decoration-none href="index.html#about" { "عن المنصة" } }
                            li { a.text-white-50.text-decoration-none href="categories.html" { "المجالات العلمية" } }
                            li { a.text-white-50.text-decoration-none href="terms-list.html" { "المصطلحات" } }
                        }
                    }
                    div.col-md-4.mb-4 {
                        h5.fw-bold.mb-3 { "تواصل معنا" }
                        p.text-white-50 { (config.contact_email) }
                    }
                }
                hr.my-4.bg-white-50;
                div.text-center {
                    p.mb-0 { "© ٢٠٢٥ " (config.site_name) ". جميع الحقوق محفوظة." }
                }
            }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders a complete term page document.
pub fn render_term_page(term: &Term, config: &SiteConfig) -> Markup {
    let category = term.category;

    let badge = html! {
        span.badge.bg-light.text-primary.mb-2 { (category.name_ar()) }
    };
    let crumbs = html! {
        (crumb("index.html".to_string(), "الرئيسية"))
        (crumb(format!("category-{}.html", category.slug()), category.name_ar()))
    };

    let content = html! {
        (site_header(config, NavPage::Terms))
        (page_hero(&term.title_ar, badge, crumbs))
        section.py-5 {
            div.container {
                div.row {
                    div.col-lg-8 {
                        div.term-section {
                            h2.term-section-title { "التعريف العلمي" }
                            p { (term.definition) }
                            @if let Some(image) = &term.image {
                                div.term-image-large {
                                    img.img-fluid.rounded src={ "images/" (image) } alt=(term.title_ar);
                                }
                            }
                        }
                        div.term-section {
                            h2.term-section-title { "شرح مبسط" }
                            p { (term.explanation) }
                        }
                        div.term-section {
                            h2.term-section-title { "أمثلة للتوضيح" }
                            @for example in &term.examples {
                                h3.mt-4.mb-3 { (example.title) }
                                p { (example.content) }
                            }
                        }
                    }
                    div.col-lg-4 {
                        div.term-section.mb-4 {
                            h3.term-section-title { "معلومات المصطلح" }
                            table.table {
                                tbody {
                                    tr {
                                        th { "المجال" }
                                        td { (category.name_ar()) }
                                    }
                                    tr {
                                        th { "الاسم بالإنجليزية" }
                                        td { (term.title_en) }
                                    }
                                    tr {
                                        th { "تاريخ الإضافة" }
                                        td { (term.date) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        (site_footer(config))
    };

    base_document(&term.title_ar, config, content)
}

/// Renders a complete article page document.
pub fn render_article_page(article: &Article, config: &SiteConfig) -> Markup {
    let category = article.category;

    let badge = html! {
        span class={ "badge bg-light text-" (category.tag()) " mb-2" } { (category.name_ar()) }
    };
    let crumbs = html! {
        (crumb("index.html".to_string(), "الرئيسية"))
        (crumb("articles.html".to_string(), "المقالات"))
        (crumb(format!("category-{}.html", category.slug()), category.name_ar()))
    };

    let content = html! {
        (site_header(config, NavPage::Articles))
        (page_hero(&article.title, badge, crumbs))
        section.py-5 {
            div.container {
                div.row {
                    div.col-lg-8.mx-auto {
                        article.article-content {
                            p.text-muted.mb-4 {
                                i.fas.fa-clock {}
                                " وقت القراءة: " (article.reading_time) " دقائق"
                            }
                            h2.fw-bold.mb-4 { "مقدمة" }
                            p.lead { (article.intro) }
                            @for section in &article.sections {
                                h2.fw-bold.mb-4.mt-5 { (section.title) }
                                p { (section.content) }
                            }
                        }
                    }
                }
            }
        }
        (site_footer(config))
    };

    base_document(&article.title, config, content)
}

// ============================================================================
// Tests
// ============================================================================

//! The fixed table of scientific domains.
//!
//! Every term and article belongs to exactly one of six domains. The table is
//! process-wide immutable configuration: slug (used in JSON and in
//! `category-<slug>.html` links), Arabic and English display names, and a
//! visual tag driving the badge color on rendered pages.
//!
//! Records store the category by slug, so [`Category`] serializes as its
//! lowercase slug string and round-trips through the JSON data files.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six scientific domains content can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Physics,
    Chemistry,
    Biology,
    Energy,
    Engineering,
    Nature,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 6] = [
        Category::Physics,
        Category::Chemistry,
        Category::Biology,
        Category::Energy,
        Category::Engineering,
        Category::Nature,
    ];

    /// URL/JSON identifier.
    pub fn slug(self) -> &'static str {
        match self {
            Category::Physics => "physics",
            Category::Chemistry => "chemistry",
            Category::Biology => "biology",
            Category::Energy => "energy",
            Category::Engineering => "engineering",
            Category::Nature => "nature",
        }
    }

    /// Arabic display name, used throughout the rendered pages.
    pub fn name_ar(self) -> &'static str {
        match self {
            Category::Physics => "الفيزياء",
            Category::Chemistry => "الكيمياء",
            Category::Biology => "الأحياء",
            Category::Energy => "الطاقة",
            Category::Engineering => "الهندسة",
            Category::Nature => "الطبيعة",
        }
    }

    /// English display name.
    pub fn name_en(self) -> &'static str {
        match self {
            Category::Physics => "Physics",
            Category::Chemistry => "Chemistry",
            Category::Biology => "Biology",
            Category::Energy => "Energy",
            Category::Engineering => "Engineering",
            Category::Nature => "Nature",
        }
    }

    /// Bootstrap color word for category badges.
    pub fn tag(self) -> &'static str {
        match self {
            Category::Physics => "primary",
            Category::Chemistry => "success",
            Category::Biology => "info",
            Category::Energy => "warning",
            Category::Engineering => "danger",
            Category::Nature => "secondary",
        }
    }

    /// Look up a category by its slug.
    pub fn from_slug(slug: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.slug() == slug)
    }

    /// Slugs of every category, for validation error messages.
    pub fn all_slugs() -> Vec<&'static str> {
        Category::ALL.iter().map(|c| c.slug()).collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_slug(s).ok_or(())
    }
}

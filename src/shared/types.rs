use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::shared::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

// =============================================================================
// LANGUAGE
// =============================================================================

/// Site language. English is left-to-right, Dhivehi (Thaana script) right-to-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Dv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Dv => "dv",
        }
    }

    /// Native display name
    pub fn name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Dv => "ދިވެހި",
        }
    }

    pub fn direction(&self) -> TextDirection {
        match self {
            Language::En => TextDirection::Ltr,
            Language::Dv => TextDirection::Rtl,
        }
    }

    /// Pick a language from a locale tag such as `dv-MV` or `en_US.UTF-8`
    pub fn detect(locale: &str) -> Language {
        if locale.trim().to_lowercase().starts_with("dv") {
            Language::Dv
        } else {
            Language::En
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "en" => Ok(Language::En),
            "dv" => Ok(Language::Dv),
            other => Err(format!("unsupported language '{}'", other)),
        }
    }
}

// =============================================================================
// BILINGUAL TEXT
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BilingualText {
    pub en: String,
    pub dv: String,
}

impl BilingualText {
    pub fn new(en: impl Into<String>, dv: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            dv: dv.into(),
        }
    }

    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::Dv => &self.dv,
        }
    }

    /// Both languages present after trimming
    pub fn is_complete(&self) -> bool {
        !self.en.trim().is_empty() && !self.dv.trim().is_empty()
    }

    pub fn trimmed(&self) -> Self {
        Self {
            en: self.en.trim().to_string(),
            dv: self.dv.trim().to_string(),
        }
    }

    /// Case-insensitive substring match against either language.
    /// `query` must already be lowercased.
    pub fn contains_lowercase(&self, query: &str) -> bool {
        self.en.to_lowercase().contains(query) || self.dv.to_lowercase().contains(query)
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// 1-indexed page window over an in-memory list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn new(page: usize, per_page: usize) -> Self {
        Self { page, per_page }
    }

    /// Clamped page size (respects MAX_PAGE_SIZE)
    pub fn limit(&self) -> usize {
        self.per_page.clamp(1, MAX_PAGE_SIZE)
    }

    pub fn offset(&self) -> usize {
        (self.page.max(1) - 1).saturating_mul(self.limit())
    }

    pub fn total_pages(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.limit())
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = (start + self.limit()).min(items.len());
        &items[start..end]
    }
}

// =============================================================================
// SORTING
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Apply the direction to an ascending comparison
    pub fn apply(self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_detect() {
        assert_eq!(Language::detect("dv-MV"), Language::Dv);
        assert_eq!(Language::detect("DV"), Language::Dv);
        assert_eq!(Language::detect("en_US.UTF-8"), Language::En);
        assert_eq!(Language::detect(""), Language::En);
    }

    #[test]
    fn test_language_parse_and_direction() {
        assert_eq!("dv".parse::<Language>(), Ok(Language::Dv));
        assert!("fr".parse::<Language>().is_err());
        assert_eq!(Language::Dv.direction(), TextDirection::Rtl);
        assert_eq!(Language::En.direction(), TextDirection::Ltr);
    }

    #[test]
    fn test_bilingual_completeness() {
        assert!(BilingualText::new("Politics", "ސިޔާސީ").is_complete());
        assert!(!BilingualText::new("Politics", "   ").is_complete());
        assert!(!BilingualText::default().is_complete());
    }

    #[test]
    fn test_bilingual_search_matches_either_language() {
        let text = BilingualText::new("Climate Bill", "ޖައްވު");
        assert!(text.contains_lowercase("climate"));
        assert!(text.contains_lowercase("ޖައްވު"));
        assert!(!text.contains_lowercase("sports"));
    }

    #[test]
    fn test_pagination_window() {
        let items: Vec<u32> = (0..45).collect();
        let page = Pagination::new(3, 20);

        assert_eq!(page.offset(), 40);
        assert_eq!(page.slice(&items), &[40, 41, 42, 43, 44]);
        assert_eq!(page.total_pages(items.len()), 3);
        assert!(Pagination::new(9, 20).slice(&items).is_empty());
    }

    #[test]
    fn test_pagination_clamps_zero_values() {
        let page = Pagination::new(0, 0);
        assert_eq!(page.offset(), 0);
        assert_eq!(page.limit(), 1);
    }

    #[test]
    fn test_pagination_huge_page_saturates() {
        let items: Vec<u32> = (0..5).collect();
        let page = Pagination::new(usize::MAX, MAX_PAGE_SIZE);

        assert_eq!(page.offset(), usize::MAX);
        assert!(page.slice(&items).is_empty());
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::features::articles::models::{Article, ArticleStatus};
use crate::features::articles::ArticleService;
use crate::features::authors::AuthorService;
use crate::features::categories::CategoryService;
use crate::shared::constants::DEFAULT_PAGE_SIZE;
use crate::shared::types::{Pagination, SortDirection};

// =============================================================================
// FILTERS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Draft,
    Published,
    Scheduled,
}

impl StatusFilter {
    pub fn matches(&self, status: ArticleStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Draft => status == ArticleStatus::Draft,
            StatusFilter::Published => status == ArticleStatus::Published,
            StatusFilter::Scheduled => status == ArticleStatus::Scheduled,
        }
    }
}

/// Inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        at >= self.start && at <= self.end
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleFilter {
    pub status: StatusFilter,
    pub category_id: Option<String>,
    pub search_query: String,
    pub date_range: Option<DateRange>,
}

impl ArticleFilter {
    pub fn is_active(&self) -> bool {
        self.status != StatusFilter::All
            || self.category_id.is_some()
            || !self.search_query.trim().is_empty()
            || self.date_range.is_some()
    }

    /// Search covers bilingual title, summary and author name
    pub fn matches(&self, article: &Article, authors: &AuthorService) -> bool {
        if !self.status.matches(article.status) {
            return false;
        }

        if let Some(category_id) = &self.category_id {
            if article.category_id != *category_id {
                return false;
            }
        }

        if let Some(range) = &self.date_range {
            if !range.contains(article.display_date()) {
                return false;
            }
        }

        let query = self.search_query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }

        article.title.contains_lowercase(&query)
            || article.summary.contains_lowercase(&query)
            || authors
                .get_by_id(&article.author_id)
                .is_some_and(|a| a.name.contains_lowercase(&query))
    }
}

// =============================================================================
// SORTING
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Title,
    #[default]
    PublishedAt,
    Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortState {
    /// Clicking the active column flips its direction; a new column starts descending
    pub fn toggle(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.flipped();
        } else {
            self.field = field;
            self.direction = SortDirection::Desc;
        }
    }

    /// Title and category compare the lowercased English text
    pub fn sort(&self, articles: &mut [&Article], categories: &CategoryService) {
        let category_name = |article: &Article| {
            categories
                .get_by_id(&article.category_id)
                .map(|c| c.name.en.to_lowercase())
                .unwrap_or_default()
        };

        articles.sort_by(|a, b| {
            let ordering = match self.field {
                SortField::Title => a.title.en.to_lowercase().cmp(&b.title.en.to_lowercase()),
                SortField::PublishedAt => a.published_at.cmp(&b.published_at),
                SortField::Category => category_name(*a).cmp(&category_name(*b)),
            };
            self.direction.apply(ordering)
        });
    }
}

// =============================================================================
// VIEW STATE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    List,
    Calendar,
    Grid,
}

/// Header checkbox state for the visible rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionState {
    None,
    Some,
    All,
}

/// UI state of the admin articles page
#[derive(Debug, Clone, PartialEq)]
pub struct AdminViewState {
    filter: ArticleFilter,
    selected: Vec<String>,
    pub view_mode: ViewMode,
    pub sort: SortState,
    current_page: usize,
    per_page: usize,
}

impl Default for AdminViewState {
    fn default() -> Self {
        Self {
            filter: ArticleFilter::default(),
            selected: Vec::new(),
            view_mode: ViewMode::default(),
            sort: SortState::default(),
            current_page: 1,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

impl AdminViewState {
    pub fn filter(&self) -> &ArticleFilter {
        &self.filter
    }

    // Every filter change returns to the first page

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.filter.status = status;
        self.current_page = 1;
    }

    pub fn set_category_filter(&mut self, category_id: Option<String>) {
        self.filter.category_id = category_id;
        self.current_page = 1;
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.filter.search_query = query.into();
        self.current_page = 1;
    }

    pub fn set_date_range(&mut self, range: Option<DateRange>) {
        self.filter.date_range = range;
        self.current_page = 1;
    }

    pub fn reset_filters(&mut self) {
        self.filter = ArticleFilter::default();
        self.current_page = 1;
    }

    // Selection

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn toggle_selection(&mut self, id: &str) {
        match self.selected.iter().position(|s| s == id) {
            Some(index) => {
                self.selected.remove(index);
            }
            None => self.selected.push(id.to_string()),
        }
    }

    /// Replace the selection, dropping duplicate ids
    pub fn select_all<S: AsRef<str>>(&mut self, ids: &[S]) {
        self.selected.clear();
        for id in ids {
            if !self.is_selected(id.as_ref()) {
                self.selected.push(id.as_ref().to_string());
            }
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    /// Header checkbox state for the rows currently shown. Selected ids that
    /// are hidden by the filter do not count.
    pub fn selection_state<S: AsRef<str>>(&self, visible_ids: &[S]) -> SelectionState {
        let selected_visible = visible_ids
            .iter()
            .filter(|id| self.is_selected(id.as_ref()))
            .count();

        if selected_visible == 0 {
            SelectionState::None
        } else if selected_visible == visible_ids.len() {
            SelectionState::All
        } else {
            SelectionState::Some
        }
    }

    // Paging

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn set_current_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
        self.current_page = 1;
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.current_page, self.per_page)
    }

    /// Filtered and sorted articles for the table, before paging
    pub fn apply<'a>(
        &self,
        articles: &'a ArticleService,
        authors: &AuthorService,
        categories: &CategoryService,
    ) -> Vec<&'a Article> {
        let mut visible: Vec<&Article> = articles
            .list()
            .iter()
            .filter(|a| self.filter.matches(a, authors))
            .collect();
        self.sort.sort(&mut visible, categories);
        visible
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::features::admin::models::SelectionState;
use crate::features::articles::models::{Article, ArticleStatus};
use crate::features::authors::models::Author;
use crate::features::categories::models::Category;

/// Bulk menu of the articles table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulkAction {
    Publish,
    Draft,
    Delete,
}

impl std::fmt::Display for BulkAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BulkAction::Publish => write!(f, "publish"),
            BulkAction::Draft => write!(f, "draft"),
            BulkAction::Delete => write!(f, "delete"),
        }
    }
}

// =============================================================================
// ARTICLE TABLE DTOs
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRowDto {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub status: ArticleStatus,
    pub category_name: String,
    pub category_color: Option<String>,
    pub author_name: String,
    pub published_at: DateTime<Utc>,
    pub scheduled_for: Option<DateTime<Utc>>,
    pub selected: bool,
    pub edit_route: String,
}

impl ArticleRowDto {
    pub fn new(
        article: &Article,
        category: Option<&Category>,
        author: Option<&Author>,
        selected: bool,
    ) -> Self {
        Self {
            id: article.id.clone(),
            title: article.title.en.clone(),
            slug: article.slug.clone(),
            status: article.status,
            category_name: category.map(|c| c.name.en.clone()).unwrap_or_default(),
            category_color: category.map(|c| c.color.clone()),
            author_name: author.map(|a| a.name.en.clone()).unwrap_or_default(),
            published_at: article.published_at,
            scheduled_for: article.scheduled_for,
            selected,
            edit_route: article.edit_route(),
        }
    }
}

/// One page of the filtered, sorted articles table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePageDto {
    pub items: Vec<ArticleRowDto>,
    /// Rows matching the filter, across all pages
    pub total_items: usize,
    /// Every article in the store
    pub total_articles: usize,
    pub page: usize,
    pub total_pages: usize,
    /// Header checkbox state for the rows on this page
    pub selection: SelectionState,
}

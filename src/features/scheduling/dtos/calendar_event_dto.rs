use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::features::articles::models::{Article, ArticleStatus};
use crate::features::categories::models::Category;
use crate::shared::constants::DEFAULT_CATEGORY_COLOR;

/// One article on the editorial calendar
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEventDto {
    pub article_id: String,
    pub title: String,
    /// Scheduled date, or the publish date for unscheduled articles
    pub start: DateTime<Utc>,
    pub color: String,
    pub status: ArticleStatus,
    pub category_name: String,
    pub slug: String,
    pub edit_route: String,
}

impl CalendarEventDto {
    /// Articles whose category is missing get the default color and no category name
    pub fn from_article(article: &Article, category: Option<&Category>) -> Self {
        Self {
            article_id: article.id.clone(),
            title: article.title.en.clone(),
            start: article.display_date(),
            color: category
                .map(|c| c.color.clone())
                .unwrap_or_else(|| DEFAULT_CATEGORY_COLOR.to_string()),
            status: article.status,
            category_name: category.map(|c| c.name.en.clone()).unwrap_or_default(),
            slug: article.slug.clone(),
            edit_route: article.edit_route(),
        }
    }
}

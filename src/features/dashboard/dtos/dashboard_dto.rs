use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::features::articles::models::{Article, ArticleStatus};

/// Articles per category for the dashboard bar chart
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdownDto {
    pub category: String,
    pub count: usize,
    pub color: String,
}

/// Admin dashboard header counters
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsDto {
    pub total_articles: usize,
    pub published_articles: usize,
    pub draft_articles: usize,
    pub scheduled_articles: usize,
    /// Published within the last seven days
    pub articles_this_week: usize,
    /// Published since the start of the month
    pub articles_this_month: usize,
    pub total_comments: usize,
    pub total_reactions: u64,
    pub category_breakdown: Vec<CategoryBreakdownDto>,
}

/// Row of the "recent articles" list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentArticleDto {
    pub id: String,
    pub title: String,
    pub status: ArticleStatus,
    pub last_activity: DateTime<Utc>,
    pub comment_count: usize,
    pub reaction_count: u64,
    pub edit_route: String,
}

impl From<&Article> for RecentArticleDto {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id.clone(),
            title: article.title.en.clone(),
            status: article.status,
            last_activity: article.last_activity(),
            comment_count: article.comments.len(),
            reaction_count: article.reactions.total(),
            edit_route: article.edit_route(),
        }
    }
}

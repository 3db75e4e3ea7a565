use chrono::{DateTime, Utc};

use crate::features::articles::ArticleService;
use crate::features::categories::CategoryService;
use crate::features::dashboard::dtos::{CategoryBreakdownDto, DashboardStatsDto, RecentArticleDto};
use crate::shared::dates::{start_of_month, start_of_week_window};

/// Number of rows in the dashboard "recent articles" list
const RECENT_ARTICLES_LIMIT: usize = 10;

/// Read-only admin dashboard queries
pub struct DashboardService;

impl DashboardService {
    // ========================================================================
    // Summary
    // ========================================================================

    pub fn stats(
        articles: &ArticleService,
        categories: &CategoryService,
        now: DateTime<Utc>,
    ) -> DashboardStatsDto {
        let week_start = start_of_week_window(now);
        let month_start = start_of_month(now);
        let published_since = |from: DateTime<Utc>| {
            articles
                .list()
                .iter()
                .filter(|a| a.published_at >= from && a.published_at <= now)
                .count()
        };

        DashboardStatsDto {
            total_articles: articles.len(),
            published_articles: articles.published().len(),
            draft_articles: articles.drafts().len(),
            scheduled_articles: articles.scheduled().len(),
            articles_this_week: published_since(week_start),
            articles_this_month: published_since(month_start),
            total_comments: articles.total_comments(),
            total_reactions: articles.total_reactions(),
            category_breakdown: Self::category_breakdown(articles, categories),
        }
    }

    /// Categories that hold at least one article, largest first. Ties keep
    /// category list order.
    pub fn category_breakdown(
        articles: &ArticleService,
        categories: &CategoryService,
    ) -> Vec<CategoryBreakdownDto> {
        let counts = articles.counts_by_category();

        let mut breakdown: Vec<CategoryBreakdownDto> = categories
            .list()
            .iter()
            .filter_map(|category| {
                counts.get(&category.id).map(|&count| CategoryBreakdownDto {
                    category: category.name.en.clone(),
                    count,
                    color: category.color.clone(),
                })
            })
            .collect();
        breakdown.sort_by(|a, b| b.count.cmp(&a.count));
        breakdown
    }

    // ========================================================================
    // Recent activity
    // ========================================================================

    pub fn recent_articles(articles: &ArticleService) -> Vec<RecentArticleDto> {
        articles
            .recent(RECENT_ARTICLES_LIMIT)
            .into_iter()
            .map(RecentArticleDto::from)
            .collect()
    }
}

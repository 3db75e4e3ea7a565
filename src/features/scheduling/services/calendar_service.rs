use chrono::{DateTime, NaiveDate, Utc};

use crate::core::error::{AppError, Result};
use crate::features::admin::models::ArticleFilter;
use crate::features::articles::models::Article;
use crate::features::articles::ArticleService;
use crate::features::authors::AuthorService;
use crate::features::categories::CategoryService;
use crate::features::scheduling::dtos::CalendarEventDto;
use crate::shared::dates::day_of;

/// Editorial calendar over the article store
pub struct CalendarService;

impl CalendarService {
    pub fn events(articles: &ArticleService, categories: &CategoryService) -> Vec<CalendarEventDto> {
        articles
            .list()
            .iter()
            .map(|a| CalendarEventDto::from_article(a, categories.get_by_id(&a.category_id)))
            .collect()
    }

    /// Events for the articles the admin filter keeps
    pub fn events_matching(
        articles: &ArticleService,
        categories: &CategoryService,
        authors: &AuthorService,
        filter: &ArticleFilter,
    ) -> Vec<CalendarEventDto> {
        articles
            .list()
            .iter()
            .filter(|a| filter.matches(a, authors))
            .map(|a| CalendarEventDto::from_article(a, categories.get_by_id(&a.category_id)))
            .collect()
    }

    /// Events whose start falls in `[from, to)`, earliest first
    pub fn events_between(
        articles: &ArticleService,
        categories: &CategoryService,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Vec<CalendarEventDto> {
        let mut events: Vec<CalendarEventDto> = Self::events(articles, categories)
            .into_iter()
            .filter(|e| e.start >= from && e.start < to)
            .collect();
        events.sort_by_key(|e| e.start);
        events
    }

    /// Articles shown on `date` (UTC) in the calendar
    pub fn articles_on_day(articles: &ArticleService, date: NaiveDate) -> Vec<&Article> {
        articles
            .list()
            .iter()
            .filter(|a| day_of(a.display_date()) == date)
            .collect()
    }

    /// Drag-and-drop reschedule from the calendar
    pub fn reschedule(articles: &mut ArticleService, id: &str, when: DateTime<Utc>) -> Result<()> {
        if !articles.reschedule(id, when) {
            return Err(AppError::NotFound(format!("Article '{}' not found", id)));
        }

        tracing::info!("Article rescheduled: id={}, scheduled_for={}", id, when);
        Ok(())
    }
}

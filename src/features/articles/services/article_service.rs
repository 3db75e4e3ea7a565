use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::articles::dtos::CreateArticleDto;
use crate::features::articles::models::{Article, ArticleStatus, ArticleUpdate};
use crate::features::authors::AuthorService;
use crate::features::categories::CategoryService;
use crate::features::engagement::models::{Comment, CommentAuthor, ReactionType};
use crate::shared::types::BilingualText;

/// Owned, in-memory repository of articles
#[derive(Debug, Clone, Default)]
pub struct ArticleService {
    articles: Vec<Article>,
}

impl ArticleService {
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }

    pub fn list(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    pub fn get_by_slug(&self, slug: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.slug == slug)
    }

    pub fn by_category(&self, category_id: &str) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|a| a.category_id == category_id)
            .collect()
    }

    pub fn by_author(&self, author_id: &str) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|a| a.author_id == author_id)
            .collect()
    }

    pub fn ids_in_category(&self, category_id: &str) -> Vec<String> {
        self.by_category(category_id)
            .into_iter()
            .map(|a| a.id.clone())
            .collect()
    }

    pub fn featured(&self) -> Vec<&Article> {
        self.articles.iter().filter(|a| a.featured).collect()
    }

    pub fn with_status(&self, status: ArticleStatus) -> Vec<&Article> {
        self.articles.iter().filter(|a| a.status == status).collect()
    }

    pub fn drafts(&self) -> Vec<&Article> {
        self.with_status(ArticleStatus::Draft)
    }

    pub fn published(&self) -> Vec<&Article> {
        self.with_status(ArticleStatus::Published)
    }

    pub fn scheduled(&self) -> Vec<&Article> {
        self.with_status(ArticleStatus::Scheduled)
    }

    /// Most recently edited first
    pub fn recent(&self, limit: usize) -> Vec<&Article> {
        let mut articles: Vec<&Article> = self.articles.iter().collect();
        articles.sort_by_key(|a| std::cmp::Reverse(a.last_activity()));
        articles.truncate(limit);
        articles
    }

    /// Article ids keyed by category id
    pub fn counts_by_category(&self) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for article in &self.articles {
            *counts.entry(article.category_id.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Reader search: case-insensitive substring over bilingual title,
    /// summary, category name, author name and tags
    pub fn search(
        &self,
        query: &str,
        categories: &CategoryService,
        authors: &AuthorService,
    ) -> Vec<&Article> {
        let query = query.to_lowercase();

        self.articles
            .iter()
            .filter(|article| {
                let title_match = article.title.contains_lowercase(&query);
                let summary_match = article.summary.contains_lowercase(&query);
                let category_match = categories
                    .get_by_id(&article.category_id)
                    .is_some_and(|c| c.name.contains_lowercase(&query));
                let author_match = authors
                    .get_by_id(&article.author_id)
                    .is_some_and(|a| a.name.contains_lowercase(&query));
                let tags_match = article.tags.iter().any(|t| t.contains_lowercase(&query));

                title_match || summary_match || category_match || author_match || tags_match
            })
            .collect()
    }

    // =========================================================================
    // EDITOR
    // =========================================================================

    pub fn create(&mut self, article: Article) {
        tracing::debug!("Article created: id={}, slug={}", article.id, article.slug);
        self.articles.push(article);
    }

    /// Validate editor input and create the article. Category and author
    /// existence are checked by the admin service.
    pub fn create_checked(&mut self, dto: CreateArticleDto) -> Result<String> {
        dto.validate()?;

        if !dto.title.is_complete() {
            return Err(AppError::Validation(
                "Please provide the title in both English and Dhivehi".to_string(),
            ));
        }
        if self.get_by_slug(dto.slug.trim()).is_some() {
            return Err(AppError::Conflict(format!(
                "Article slug '{}' is already in use",
                dto.slug.trim()
            )));
        }
        if dto.status == ArticleStatus::Scheduled && dto.scheduled_for.is_none() {
            return Err(AppError::Validation(
                "Scheduled articles require a publish date".to_string(),
            ));
        }

        let id = format!("article-{}", Uuid::now_v7());
        self.create(dto.into_article(id.clone(), Utc::now()));

        Ok(id)
    }

    /// Apply field changes and record the edit. Returns `false` when the id is unknown.
    pub fn update(&mut self, id: &str, updates: &[ArticleUpdate], editor: Option<&str>) -> bool {
        let Some(article) = self.articles.iter_mut().find(|a| a.id == id) else {
            return false;
        };

        for update in updates {
            article.apply(update);
        }

        let now = Utc::now();
        article.updated_at = Some(now);
        article.last_edited_at = Some(now);
        if let Some(editor) = editor {
            article.last_edited_by = Some(editor.to_string());
        }

        true
    }

    pub fn update_status(&mut self, id: &str, status: ArticleStatus) -> bool {
        self.update(id, &[ArticleUpdate::Status(status)], None)
    }

    /// Returns how many of `ids` were found and updated
    pub fn bulk_update_status<S: AsRef<str>>(&mut self, ids: &[S], status: ArticleStatus) -> usize {
        let updated = ids
            .iter()
            .filter(|id| self.update_status(id.as_ref(), status))
            .count();

        tracing::info!("Bulk status update: status={}, updated={}", status, updated);
        updated
    }

    pub fn delete(&mut self, id: &str) -> Option<Article> {
        let position = self.articles.iter().position(|a| a.id == id)?;
        Some(self.articles.remove(position))
    }

    /// Returns how many articles were removed
    pub fn bulk_delete<S: AsRef<str>>(&mut self, ids: &[S]) -> usize {
        let before = self.articles.len();
        self.articles
            .retain(|a| !ids.iter().any(|id| id.as_ref() == a.id));
        let removed = before - self.articles.len();

        tracing::info!("Bulk delete: removed={}", removed);
        removed
    }

    /// Point the given articles at `category_id`; returns how many changed
    pub fn reassign_category<S: AsRef<str>>(&mut self, ids: &[S], category_id: &str) -> usize {
        let mut reassigned = 0;
        for article in self
            .articles
            .iter_mut()
            .filter(|a| ids.iter().any(|id| id.as_ref() == a.id))
        {
            article.category_id = category_id.to_string();
            reassigned += 1;
        }

        tracing::debug!(
            "Articles reassigned: category_id={}, count={}",
            category_id,
            reassigned
        );
        reassigned
    }

    // =========================================================================
    // SCHEDULING
    // =========================================================================

    /// Move an article to a new publish date and mark it scheduled
    pub fn reschedule(&mut self, id: &str, when: DateTime<Utc>) -> bool {
        self.update(
            id,
            &[
                ArticleUpdate::ScheduledFor(Some(when)),
                ArticleUpdate::Status(ArticleStatus::Scheduled),
            ],
            None,
        )
    }

    /// Publish every scheduled article whose date has arrived. The publish
    /// date becomes the scheduled date. Returns the promoted ids.
    pub fn publish_due(&mut self, now: DateTime<Utc>) -> Vec<String> {
        let mut promoted = Vec::new();

        for article in self.articles.iter_mut() {
            let due = article
                .scheduled_for
                .is_some_and(|when| when <= now);
            if article.status != ArticleStatus::Scheduled || !due {
                continue;
            }

            article.status = ArticleStatus::Published;
            article.published_at = article.scheduled_for.unwrap_or(now);
            article.updated_at = Some(now);
            promoted.push(article.id.clone());
        }

        promoted
    }

    // =========================================================================
    // ENGAGEMENT
    // =========================================================================

    /// Returns the new count for `kind`, or `None` for an unknown article
    pub fn react(&mut self, id: &str, kind: ReactionType) -> Option<u64> {
        self.articles
            .iter_mut()
            .find(|a| a.id == id)
            .map(|a| a.reactions.add(kind))
    }

    pub fn add_comment(
        &mut self,
        article_id: &str,
        author: CommentAuthor,
        content: BilingualText,
    ) -> Result<String> {
        if author.name.trim().is_empty() {
            return Err(AppError::Validation("Please provide your name".to_string()));
        }
        if content.en.trim().is_empty() && content.dv.trim().is_empty() {
            return Err(AppError::Validation("Comment cannot be empty".to_string()));
        }

        let article = self
            .articles
            .iter_mut()
            .find(|a| a.id == article_id)
            .ok_or_else(|| AppError::NotFound(format!("Article '{}' not found", article_id)))?;

        let id = format!("comment-{}", Uuid::now_v7());
        article.comments.push(Comment {
            id: id.clone(),
            article_id: article_id.to_string(),
            author,
            content: content.trimmed(),
            timestamp: Utc::now(),
        });

        Ok(id)
    }

    pub fn total_comments(&self) -> usize {
        self.articles.iter().map(|a| a.comments.len()).sum()
    }

    pub fn total_reactions(&self) -> u64 {
        self.articles.iter().map(|a| a.reactions.total()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::categories::models::NewCategory;
    use crate::shared::test_helpers::{article, author};
    use chrono::{Duration, TimeZone};

    fn service() -> ArticleService {
        let mut draft = article("a2", "education-reform", "cat-local", "w2");
        draft.status = ArticleStatus::Draft;
        ArticleService::new(vec![
            article("a1", "climate-bill", "cat-politics", "w1"),
            draft,
            article("a3", "startup-funding", "cat-business", "w1"),
        ])
    }

    #[test]
    fn test_status_views() {
        let service = service();
        assert_eq!(service.drafts().len(), 1);
        assert_eq!(service.published().len(), 2);
        assert!(service.scheduled().is_empty());
    }

    #[test]
    fn test_missing_status_deserializes_as_published() {
        let json = serde_json::to_value(article("a9", "x", "c", "w")).unwrap();
        let mut object = json.as_object().unwrap().clone();
        object.remove("status");

        let parsed: Article = serde_json::from_value(serde_json::Value::Object(object)).unwrap();
        assert_eq!(parsed.status, ArticleStatus::Published);
    }

    #[test]
    fn test_search_covers_names_and_tags() {
        let mut service = service();
        service.update(
            "a3",
            &[ArticleUpdate::Tags(vec![BilingualText::new("Economy", "އިޤްތިޞާދު")])],
            None,
        );

        let mut categories = CategoryService::new(Vec::new());
        let politics_id = categories.create_category(NewCategory::new(
            BilingualText::new("Politics", "ސިޔާސީ"),
            "politics",
        ));
        service.reassign_category(&["a1"], &politics_id);

        let mut sarah = author("w2", "sarah-johnson");
        sarah.name = BilingualText::new("Sarah Johnson", "ސާރާ");
        let authors = AuthorService::new(vec![sarah]);

        let ids = |found: Vec<&Article>| found.into_iter().map(|a| a.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(service.search("POLITICS", &categories, &authors)), vec!["a1"]);
        assert_eq!(ids(service.search("sarah", &categories, &authors)), vec!["a2"]);
        assert_eq!(ids(service.search("economy", &categories, &authors)), vec!["a3"]);
        assert!(service.search("cricket", &categories, &authors).is_empty());
    }

    #[test]
    fn test_bulk_operations() {
        let mut service = service();

        assert_eq!(service.bulk_update_status(&["a1", "a2", "missing"], ArticleStatus::Draft), 2);
        assert_eq!(service.drafts().len(), 2);

        assert_eq!(service.bulk_delete(&["a1", "a3"]), 2);
        assert_eq!(service.len(), 1);
        assert!(service.get_by_id("a2").is_some());
    }

    #[test]
    fn test_reassign_category() {
        let mut service = service();
        let ids = service.ids_in_category("cat-politics");

        assert_eq!(service.reassign_category(&ids, "uncategorized"), 1);
        assert!(service.by_category("cat-politics").is_empty());
        assert_eq!(service.counts_by_category().get("uncategorized"), Some(&1));
    }

    #[test]
    fn test_update_records_editor() {
        let mut service = service();
        assert!(service.update("a1", &[ArticleUpdate::Featured(true)], Some("editor-1")));

        let updated = service.get_by_id("a1").unwrap();
        assert!(updated.featured);
        assert_eq!(updated.last_edited_by.as_deref(), Some("editor-1"));
        assert!(updated.last_edited_at.is_some());
        assert!(!service.update("missing", &[], None));
    }

    #[test]
    fn test_reschedule_and_publish_due() {
        let mut service = service();
        let now = Utc.with_ymd_and_hms(2024, 2, 1, 9, 0, 0).unwrap();
        let past = now - Duration::hours(2);
        let future = now + Duration::days(1);

        assert!(service.reschedule("a1", past));
        assert!(service.reschedule("a2", future));
        assert!(!service.reschedule("missing", past));

        assert_eq!(service.publish_due(now), vec!["a1".to_string()]);
        let published = service.get_by_id("a1").unwrap();
        assert_eq!(published.status, ArticleStatus::Published);
        assert_eq!(published.published_at, past);
        assert_eq!(service.get_by_id("a2").unwrap().status, ArticleStatus::Scheduled);

        // nothing left due
        assert!(service.publish_due(now).is_empty());
    }

    #[test]
    fn test_recent_orders_by_last_activity() {
        let mut service = service();
        service.update("a1", &[ArticleUpdate::Featured(false)], None);

        let recent = service.recent(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, "a1");
    }

    #[test]
    fn test_engagement_counters() {
        let mut service = service();
        assert_eq!(service.react("a1", ReactionType::Like), Some(1));
        assert_eq!(service.react("a1", ReactionType::Like), Some(2));
        assert_eq!(service.react("missing", ReactionType::Like), None);

        let comment = service.add_comment(
            "a1",
            CommentAuthor {
                name: "Aisha".to_string(),
                avatar: None,
            },
            BilingualText::new("Great news", ""),
        );
        assert!(comment.is_ok());
        assert_eq!(service.total_comments(), 1);
        assert_eq!(service.total_reactions(), 2);
    }

    #[test]
    fn test_add_comment_validation() {
        let mut service = service();
        let reader = CommentAuthor {
            name: "Reader".to_string(),
            avatar: None,
        };

        assert!(matches!(
            service.add_comment("a1", reader.clone(), BilingualText::new(" ", " ")),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            service.add_comment("missing", reader, BilingualText::new("Hi", "")),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_create_checked() {
        let mut service = service();
        let mut dto = CreateArticleDto {
            slug: "new-harbour".to_string(),
            title: BilingualText::new("New harbour", "އައު ބަނދަރު"),
            subtitle: None,
            summary: BilingualText::new("Summary", "ޚުލާސާ"),
            body: BilingualText::new("<p>Body</p>", "<p>ބޮޑީ</p>"),
            cover_image: "https://images.example.com/harbour.jpg".to_string(),
            category_id: "cat-local".to_string(),
            author_id: "w1".to_string(),
            featured: false,
            status: ArticleStatus::Scheduled,
            scheduled_for: None,
            tags: Vec::new(),
            video_url: None,
            meta_description: None,
            keywords: Vec::new(),
            og_image: None,
            edited_by: Some("editor-1".to_string()),
        };

        assert!(matches!(
            service.create_checked(dto.clone()),
            Err(AppError::Validation(_))
        ));

        let when = Utc.with_ymd_and_hms(2030, 5, 1, 8, 0, 0).unwrap();
        dto.scheduled_for = Some(when);
        let id = service.create_checked(dto.clone()).unwrap();
        let created = service.get_by_id(&id).unwrap();
        assert_eq!(created.status, ArticleStatus::Scheduled);
        assert_eq!(created.published_at, when);
        assert_eq!(created.published_by, None);

        assert!(matches!(
            service.create_checked(dto),
            Err(AppError::Conflict(_))
        ));
    }
}

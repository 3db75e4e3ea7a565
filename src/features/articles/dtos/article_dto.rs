use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::features::articles::models::{Article, ArticleStatus};
use crate::features::engagement::models::Reactions;
use crate::shared::types::BilingualText;

/// Request DTO for the article editor (create)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleDto {
    #[validate(
        length(min = 1, max = 200, message = "Please provide a slug"),
        regex(
            path = "*crate::shared::validation::SLUG_REGEX",
            message = "Slug must be lowercase letters, digits and single hyphens"
        )
    )]
    pub slug: String,

    pub title: BilingualText,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<BilingualText>,

    pub summary: BilingualText,

    pub body: BilingualText,

    #[validate(url(message = "Cover image must be a valid URL"))]
    pub cover_image: String,

    #[validate(length(min = 1, message = "Please choose a category"))]
    pub category_id: String,

    #[validate(length(min = 1, message = "Please choose an author"))]
    pub author_id: String,

    #[serde(default)]
    pub featured: bool,

    #[serde(default = "default_status")]
    pub status: ArticleStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_for: Option<DateTime<Utc>>,

    #[serde(default)]
    pub tags: Vec<BilingualText>,

    #[validate(url(message = "Video URL must be a valid URL"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<BilingualText>,

    #[serde(default)]
    pub keywords: Vec<String>,

    #[validate(url(message = "Social image must be a valid URL"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,

    #[validate(length(max = 128, message = "Editor name must not exceed 128 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edited_by: Option<String>,
}

fn default_status() -> ArticleStatus {
    ArticleStatus::Draft
}

impl CreateArticleDto {
    /// Build the stored article. Published articles record the editor as publisher.
    pub fn into_article(self, id: String, now: DateTime<Utc>) -> Article {
        let published_at = match self.status {
            ArticleStatus::Scheduled => self.scheduled_for.unwrap_or(now),
            _ => now,
        };
        let published_by = (self.status == ArticleStatus::Published)
            .then(|| self.edited_by.clone())
            .flatten();

        Article {
            id,
            slug: self.slug.trim().to_string(),
            title: self.title.trimmed(),
            subtitle: self.subtitle.map(|s| s.trimmed()),
            summary: self.summary.trimmed(),
            body: self.body,
            cover_image: self.cover_image,
            category_id: self.category_id,
            author_id: self.author_id,
            published_at,
            updated_at: Some(now),
            featured: self.featured,
            status: self.status,
            has_video: self.video_url.is_some(),
            video_url: self.video_url,
            tags: self.tags,
            related_articles: Vec::new(),
            scheduled_for: self.scheduled_for,
            last_edited_at: Some(now),
            last_edited_by: self.edited_by,
            published_by,
            meta_description: self.meta_description,
            keywords: self.keywords,
            og_image: self.og_image,
            reactions: Reactions::default(),
            comments: Vec::new(),
        }
    }
}

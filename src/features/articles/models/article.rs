use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::features::engagement::models::{Comment, Reactions};
use crate::shared::types::BilingualText;

/// Editorial state. Articles without a status in seed data are published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    Draft,
    #[default]
    Published,
    Scheduled,
}

impl std::fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArticleStatus::Draft => write!(f, "draft"),
            ArticleStatus::Published => write!(f, "published"),
            ArticleStatus::Scheduled => write!(f, "scheduled"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub slug: String,
    pub title: BilingualText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<BilingualText>,
    pub summary: BilingualText,
    pub body: BilingualText,
    pub cover_image: String,
    pub category_id: String,
    pub author_id: String,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub status: ArticleStatus,
    #[serde(default)]
    pub has_video: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<BilingualText>,
    #[serde(default)]
    pub related_articles: Vec<String>,

    // Scheduling
    #[serde(default)]
    pub scheduled_for: Option<DateTime<Utc>>,

    // Tracking
    #[serde(default)]
    pub last_edited_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_edited_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_by: Option<String>,

    // SEO
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<BilingualText>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,

    // Engagement
    #[serde(default)]
    pub reactions: Reactions,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Article {
    /// Date shown on the editorial calendar
    pub fn display_date(&self) -> DateTime<Utc> {
        self.scheduled_for.unwrap_or(self.published_at)
    }

    /// Most recent editorial activity, used for "recent articles"
    pub fn last_activity(&self) -> DateTime<Utc> {
        self.last_edited_at
            .or(self.updated_at)
            .unwrap_or(self.published_at)
    }

    /// Public URL
    pub fn route(&self) -> String {
        format!("/article/{}", self.slug)
    }

    pub fn edit_route(&self) -> String {
        format!("/admin/articles/{}/edit", self.id)
    }

    pub(in crate::features::articles) fn apply(&mut self, update: &ArticleUpdate) {
        match update {
            ArticleUpdate::Slug(slug) => self.slug = slug.clone(),
            ArticleUpdate::Title(title) => self.title = title.clone(),
            ArticleUpdate::Subtitle(subtitle) => self.subtitle = subtitle.clone(),
            ArticleUpdate::Summary(summary) => self.summary = summary.clone(),
            ArticleUpdate::Body(body) => self.body = body.clone(),
            ArticleUpdate::CoverImage(image) => self.cover_image = image.clone(),
            ArticleUpdate::Category(category_id) => self.category_id = category_id.clone(),
            ArticleUpdate::Author(author_id) => self.author_id = author_id.clone(),
            ArticleUpdate::Featured(featured) => self.featured = *featured,
            ArticleUpdate::Status(status) => self.status = *status,
            ArticleUpdate::ScheduledFor(when) => self.scheduled_for = *when,
            ArticleUpdate::Tags(tags) => self.tags = tags.clone(),
            ArticleUpdate::Video(url) => {
                self.has_video = url.is_some();
                self.video_url = url.clone();
            }
            ArticleUpdate::MetaDescription(meta) => self.meta_description = meta.clone(),
            ArticleUpdate::Keywords(keywords) => self.keywords = keywords.clone(),
            ArticleUpdate::OgImage(image) => self.og_image = image.clone(),
        }
    }
}

/// A single field change for `ArticleService::update`
#[derive(Debug, Clone, PartialEq)]
pub enum ArticleUpdate {
    Slug(String),
    Title(BilingualText),
    Subtitle(Option<BilingualText>),
    Summary(BilingualText),
    Body(BilingualText),
    CoverImage(String),
    Category(String),
    Author(String),
    Featured(bool),
    Status(ArticleStatus),
    ScheduledFor(Option<DateTime<Utc>>),
    Tags(Vec<BilingualText>),
    Video(Option<String>),
    MetaDescription(Option<BilingualText>),
    Keywords(Vec<String>),
    OgImage(Option<String>),
}

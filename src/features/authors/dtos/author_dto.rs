use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::features::authors::models::SocialLinks;
use crate::shared::types::BilingualText;

/// Request DTO for the author form
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuthorDto {
    #[validate(
        length(min = 1, max = 100, message = "Please provide a slug"),
        regex(
            path = "*crate::shared::validation::SLUG_REGEX",
            message = "Slug must be lowercase letters, digits and single hyphens"
        )
    )]
    pub slug: String,

    pub name: BilingualText,

    #[serde(default)]
    pub bio: BilingualText,

    #[validate(url(message = "Photo must be a valid URL"))]
    pub photo: String,

    #[validate(url(message = "Twitter must be a valid URL"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,

    #[validate(url(message = "LinkedIn must be a valid URL"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,

    #[validate(url(message = "Facebook must be a valid URL"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl CreateAuthorDto {
    pub fn social_links(&self) -> SocialLinks {
        SocialLinks {
            twitter: self.twitter.clone(),
            linkedin: self.linkedin.clone(),
            facebook: self.facebook.clone(),
            email: self.email.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopContributorDto {
    pub author_id: String,
    pub name: BilingualText,
    pub article_count: usize,
}

/// Counters for the authors admin page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorStatsDto {
    pub total_authors: usize,
    pub active_authors: usize,
    pub deleted_authors: usize,
    /// Added since the start of the current month
    pub recently_added_count: usize,
    pub top_contributor: Option<TopContributorDto>,
    /// Rounded to one decimal, over active authors
    pub average_articles_per_author: f64,
}

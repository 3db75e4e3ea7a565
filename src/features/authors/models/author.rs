use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::types::BilingualText;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Writer profile. Deletion is soft: `is_deleted` hides the profile but keeps
/// it available for restoring and for article bylines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: String,
    pub slug: String,
    pub name: BilingualText,
    pub bio: BilingualText,
    pub photo: String,
    #[serde(default)]
    pub social_links: SocialLinks,
    #[serde(default = "default_created_at")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_deleted: bool,
}

/// Profiles seeded without a creation date count as created on 2024-01-01
fn default_created_at() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(1_704_067_200, 0).unwrap_or_default()
}

impl Author {
    /// Public profile URL
    pub fn route(&self) -> String {
        format!("/writers/{}", self.slug)
    }

    pub(in crate::features::authors) fn apply(&mut self, update: &AuthorUpdate) {
        match update {
            AuthorUpdate::Slug(slug) => self.slug = slug.clone(),
            AuthorUpdate::Name(name) => self.name = name.clone(),
            AuthorUpdate::Bio(bio) => self.bio = bio.clone(),
            AuthorUpdate::Photo(photo) => self.photo = photo.clone(),
            AuthorUpdate::SocialLinks(links) => self.social_links = links.clone(),
        }
    }
}

/// A single field change for `AuthorService::update`
#[derive(Debug, Clone, PartialEq)]
pub enum AuthorUpdate {
    Slug(String),
    Name(BilingualText),
    Bio(BilingualText),
    Photo(String),
    SocialLinks(SocialLinks),
}

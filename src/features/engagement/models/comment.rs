use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::types::BilingualText;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentAuthor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Reader comment on an article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub article_id: String,
    pub author: CommentAuthor,
    pub content: BilingualText,
    pub timestamp: DateTime<Utc>,
}

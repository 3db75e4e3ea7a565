use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::constants::{DEFAULT_CATEGORY_COLOR, UNCATEGORIZED_ID, UNCATEGORIZED_SLUG};
use crate::shared::types::BilingualText;

/// A node in the category hierarchy.
///
/// `parent_id` is read-only outside the categories feature: re-parenting goes
/// through `CategoryService::move_category_to_parent`, which rejects cycles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: BilingualText,
    pub slug: String,
    pub color: String,
    parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<BilingualText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub order: i32,
    pub is_active: bool,
    pub is_special: bool,
    #[serde(default)]
    pub special_page_route: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

impl Category {
    pub fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_deref()
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    pub fn is_uncategorized(&self) -> bool {
        self.id == UNCATEGORIZED_ID
    }

    /// Public URL of the listing page, or the bespoke route for special categories
    pub fn route(&self) -> String {
        match (&self.is_special, &self.special_page_route) {
            (true, Some(route)) if !route.trim().is_empty() => route.clone(),
            _ => format!("/category/{}", self.slug),
        }
    }

    pub(in crate::features::categories) fn from_new(
        id: String,
        data: NewCategory,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: data.name,
            slug: data.slug,
            color: data.color,
            parent_id: data.parent_id,
            description: data.description,
            icon: data.icon,
            order: data.order,
            is_active: data.is_active,
            is_special: data.is_special,
            special_page_route: data.special_page_route,
            created_at: now,
            updated_at: now,
            created_by: data.created_by,
        }
    }

    pub(in crate::features::categories) fn set_parent(
        &mut self,
        parent_id: Option<String>,
        now: DateTime<Utc>,
    ) {
        self.parent_id = parent_id;
        self.updated_at = now;
    }

    /// The reserved fallback category. Hidden from pickers but never deleted.
    pub fn uncategorized(now: DateTime<Utc>) -> Self {
        Self::from_new(
            UNCATEGORIZED_ID.to_string(),
            NewCategory {
                is_active: false,
                order: i32::MAX,
                ..NewCategory::new(
                    BilingualText::new("Uncategorized", "ވަކި ބައެއް ނޫން"),
                    UNCATEGORIZED_SLUG,
                )
            },
            now,
        )
    }

    pub(in crate::features::categories) fn apply(&mut self, update: &CategoryUpdate) {
        match update {
            CategoryUpdate::Name(name) => self.name = name.clone(),
            CategoryUpdate::Slug(slug) => self.slug = slug.clone(),
            CategoryUpdate::Color(color) => self.color = color.clone(),
            CategoryUpdate::Description(description) => self.description = description.clone(),
            CategoryUpdate::Icon(icon) => self.icon = icon.clone(),
            CategoryUpdate::Order(order) => self.order = *order,
            CategoryUpdate::Active(active) => self.is_active = *active,
            CategoryUpdate::Special { route } => {
                self.is_special = true;
                self.special_page_route = Some(route.clone());
            }
            CategoryUpdate::Route(route) => {
                if self.is_special {
                    self.special_page_route = Some(route.clone());
                }
            }
            CategoryUpdate::NotSpecial => {
                self.is_special = false;
                self.special_page_route = None;
            }
        }
    }
}

/// Data for creating a new category (id and timestamps are assigned by the store)
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: BilingualText,
    pub slug: String,
    pub color: String,
    pub parent_id: Option<String>,
    pub description: Option<BilingualText>,
    pub icon: Option<String>,
    pub order: i32,
    pub is_active: bool,
    pub is_special: bool,
    pub special_page_route: Option<String>,
    pub created_by: Option<String>,
}

impl NewCategory {
    /// Active, root-level, non-special category with the default color
    pub fn new(name: BilingualText, slug: impl Into<String>) -> Self {
        Self {
            name,
            slug: slug.into(),
            color: DEFAULT_CATEGORY_COLOR.to_string(),
            parent_id: None,
            description: None,
            icon: None,
            order: 0,
            is_active: true,
            is_special: false,
            special_page_route: None,
            created_by: None,
        }
    }

    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }
}

/// A single field change for `CategoryService::update_category`.
/// Re-parenting is not an update, see `CategoryService::move_category_to_parent`.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryUpdate {
    Name(BilingualText),
    Slug(String),
    Color(String),
    Description(Option<BilingualText>),
    Icon(Option<String>),
    Order(i32),
    Active(bool),
    Special { route: String },
    /// New route for a category that is already special; ignored otherwise
    Route(String),
    NotSpecial,
}

/// Outcome of `CategoryService::can_delete_category`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletionCheck {
    pub can_delete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl DeletionCheck {
    pub fn allowed() -> Self {
        Self {
            can_delete: true,
            reason: None,
        }
    }

    pub fn denied(reason: impl Into<String>) -> Self {
        Self {
            can_delete: false,
            reason: Some(reason.into()),
        }
    }
}

/// Admin list filter for the categories page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Active,
    Inactive,
    Special,
}

impl CategoryFilter {
    pub fn matches(&self, category: &Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Active => category.is_active,
            CategoryFilter::Inactive => !category.is_active,
            CategoryFilter::Special => category.is_special,
        }
    }
}

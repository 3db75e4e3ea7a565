use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::features::categories::models::{Category, CategoryUpdate, NewCategory};
use crate::shared::constants::DEFAULT_CATEGORY_COLOR;
use crate::shared::types::BilingualText;
use crate::shared::validation::generate_slug;

/// Request DTO for the category form (create)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryDto {
    pub name: BilingualText,

    #[validate(
        length(min = 1, max = 100, message = "Please provide a slug"),
        regex(
            path = "*crate::shared::validation::SLUG_REGEX",
            message = "Slug must be lowercase letters, digits and single hyphens"
        )
    )]
    pub slug: String,

    #[validate(regex(
        path = "*crate::shared::validation::HEX_COLOR_REGEX",
        message = "Color must be a hex value such as #0F8A2F"
    ))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<BilingualText>,

    #[validate(length(max = 32, message = "Icon must not exceed 32 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default)]
    pub order: i32,

    #[serde(default = "default_true")]
    pub is_active: bool,

    #[serde(default)]
    pub is_special: bool,

    #[validate(regex(
        path = "*crate::shared::validation::ROUTE_REGEX",
        message = "Route must be an absolute path such as /elections"
    ))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_page_route: Option<String>,
}

fn default_true() -> bool {
    true
}

impl CreateCategoryDto {
    pub fn new(name: BilingualText, slug: impl Into<String>) -> Self {
        Self {
            name,
            slug: slug.into(),
            color: None,
            parent_id: None,
            description: None,
            icon: None,
            order: 0,
            is_active: true,
            is_special: false,
            special_page_route: None,
        }
    }

    /// Form defaults with the slug derived from the English name
    pub fn from_name(name: BilingualText) -> Self {
        let slug = generate_slug(&name.en);
        Self::new(name, slug)
    }

    /// Surrounding whitespace removed from the text fields the form validates
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trimmed(),
            slug: self.slug.trim().to_string(),
            color: self.color.map(|c| c.trim().to_string()),
            special_page_route: self.special_page_route.map(|r| r.trim().to_string()),
            ..self
        }
    }

    /// Trimmed store input. Blank descriptions are dropped, the route is kept
    /// only for special categories.
    pub fn into_new_category(self) -> NewCategory {
        NewCategory {
            name: self.name.trimmed(),
            slug: self.slug.trim().to_string(),
            color: self
                .color
                .unwrap_or_else(|| DEFAULT_CATEGORY_COLOR.to_string()),
            parent_id: self.parent_id,
            description: self
                .description
                .map(|d| d.trimmed())
                .filter(|d| !d.en.is_empty() || !d.dv.is_empty()),
            icon: self.icon.filter(|i| !i.trim().is_empty()),
            order: self.order,
            is_active: self.is_active,
            is_special: self.is_special,
            special_page_route: if self.is_special {
                self.special_page_route.map(|r| r.trim().to_string())
            } else {
                None
            },
            created_by: None,
        }
    }
}

/// Request DTO for the category form (edit). Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<BilingualText>,

    #[validate(
        length(min = 1, max = 100, message = "Please provide a slug"),
        regex(
            path = "*crate::shared::validation::SLUG_REGEX",
            message = "Slug must be lowercase letters, digits and single hyphens"
        )
    )]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[validate(regex(
        path = "*crate::shared::validation::HEX_COLOR_REGEX",
        message = "Color must be a hex value such as #0F8A2F"
    ))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<BilingualText>,

    #[validate(length(max = 32, message = "Icon must not exceed 32 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_special: Option<bool>,

    #[validate(regex(
        path = "*crate::shared::validation::ROUTE_REGEX",
        message = "Route must be an absolute path such as /elections"
    ))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_page_route: Option<String>,
}

impl UpdateCategoryDto {
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.map(|n| n.trimmed()),
            slug: self.slug.map(|s| s.trim().to_string()),
            color: self.color.map(|c| c.trim().to_string()),
            special_page_route: self.special_page_route.map(|r| r.trim().to_string()),
            ..self
        }
    }

    /// Convert into tagged field changes, in a stable order
    pub fn into_updates(self) -> Vec<CategoryUpdate> {
        let mut updates = Vec::new();

        if let Some(name) = self.name {
            updates.push(CategoryUpdate::Name(name.trimmed()));
        }
        if let Some(slug) = self.slug {
            updates.push(CategoryUpdate::Slug(slug.trim().to_string()));
        }
        if let Some(color) = self.color {
            updates.push(CategoryUpdate::Color(color));
        }
        if let Some(description) = self.description {
            let description = description.trimmed();
            let empty = description.en.is_empty() && description.dv.is_empty();
            updates.push(CategoryUpdate::Description((!empty).then_some(description)));
        }
        if let Some(icon) = self.icon {
            let icon = icon.trim().to_string();
            updates.push(CategoryUpdate::Icon((!icon.is_empty()).then_some(icon)));
        }
        if let Some(order) = self.order {
            updates.push(CategoryUpdate::Order(order));
        }
        if let Some(active) = self.is_active {
            updates.push(CategoryUpdate::Active(active));
        }
        match (self.is_special, self.special_page_route) {
            (Some(false), _) => updates.push(CategoryUpdate::NotSpecial),
            (Some(true), route) => updates.push(CategoryUpdate::Special {
                route: route.unwrap_or_default().trim().to_string(),
            }),
            (None, Some(route)) => updates.push(CategoryUpdate::Route(route.trim().to_string())),
            (None, None) => {}
        }

        updates
    }
}

/// Category node of the tree projection (children sorted by `order`)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTreeDto {
    #[serde(flatten)]
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_count: Option<usize>,
    pub children: Vec<CategoryTreeDto>,
}

impl CategoryTreeDto {
    /// Build tree from flat list of categories, starting at the roots
    pub fn build_tree(categories: &[Category]) -> Vec<CategoryTreeDto> {
        Self::build_level(categories, None, None)
    }

    /// Same as `build_tree`, attaching per-category article counts
    pub fn build_tree_with_counts(
        categories: &[Category],
        counts: &HashMap<String, usize>,
    ) -> Vec<CategoryTreeDto> {
        Self::build_level(categories, None, Some(counts))
    }

    fn build_level(
        all_categories: &[Category],
        parent_id: Option<&str>,
        counts: Option<&HashMap<String, usize>>,
    ) -> Vec<CategoryTreeDto> {
        let mut level: Vec<&Category> = all_categories
            .iter()
            .filter(|c| c.parent_id() == parent_id)
            .collect();
        level.sort_by_key(|c| c.order);

        level
            .into_iter()
            .map(|category| CategoryTreeDto {
                category: category.clone(),
                article_count: counts.map(|m| m.get(&category.id).copied().unwrap_or(0)),
                children: Self::build_level(all_categories, Some(&category.id), counts),
            })
            .collect()
    }

    /// Number of nodes in this subtree, including itself
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(|c| c.node_count()).sum::<usize>()
    }

    /// Pre-order traversal with depth (roots at depth 0)
    pub fn flatten(nodes: &[CategoryTreeDto]) -> Vec<(usize, &Category)> {
        fn walk<'a>(nodes: &'a [CategoryTreeDto], depth: usize, out: &mut Vec<(usize, &'a Category)>) {
            for node in nodes {
                out.push((depth, &node.category));
                walk(&node.children, depth + 1, out);
            }
        }

        let mut out = Vec::new();
        walk(nodes, 0, &mut out);
        out
    }
}

/// Counters shown above the admin category tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryStatsDto {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub special: usize,
}

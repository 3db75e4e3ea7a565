use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{
    CategoryStatsDto, CategoryTreeDto, CreateCategoryDto, UpdateCategoryDto,
};
use crate::features::categories::models::{
    Category, CategoryFilter, CategoryUpdate, DeletionCheck, NewCategory,
};
use crate::shared::constants::UNCATEGORIZED_ID;

/// Owned, in-memory repository of categories.
///
/// The list is the only source of truth. Tree and path views are derived
/// from `parent_id` on every call.
#[derive(Debug, Clone)]
pub struct CategoryService {
    categories: Vec<Category>,
}

impl Default for CategoryService {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl CategoryService {
    pub fn new(categories: Vec<Category>) -> Self {
        let mut service = Self { categories };
        service.ensure_uncategorized();
        service
    }

    /// Replace the whole list (e.g. from seed data)
    pub fn initialize(&mut self, categories: Vec<Category>) {
        self.categories = categories;
        self.ensure_uncategorized();
        tracing::debug!("Categories initialized: count={}", self.categories.len());
    }

    fn ensure_uncategorized(&mut self) {
        if self.get_by_id(UNCATEGORIZED_ID).is_none() {
            self.categories.push(Category::uncategorized(Utc::now()));
        }
    }

    pub fn list(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    // =========================================================================
    // CRUD
    // =========================================================================

    /// Append a new category and return its id. No parent or slug checks are
    /// made here; use `create_checked` for form input.
    pub fn create_category(&mut self, data: NewCategory) -> String {
        let id = format!("category-{}", Uuid::now_v7());
        let category = Category::from_new(id.clone(), data, Utc::now());

        tracing::debug!("Category created: id={}, slug={}", id, category.slug);
        self.categories.push(category);

        id
    }

    /// Apply field changes and refresh `updated_at`. Returns `false` (and
    /// changes nothing) when the id is unknown.
    pub fn update_category(&mut self, id: &str, updates: &[CategoryUpdate]) -> bool {
        let Some(category) = self.categories.iter_mut().find(|c| c.id == id) else {
            tracing::debug!("Category update ignored, not found: id={}", id);
            return false;
        };

        for update in updates {
            category.apply(update);
        }
        category.updated_at = Utc::now();

        true
    }

    /// Remove a category, promoting its direct children to its own parent.
    /// The reserved uncategorized category is never removed.
    pub fn delete_category(&mut self, id: &str) -> Option<Category> {
        if id == UNCATEGORIZED_ID {
            tracing::warn!("Refusing to delete the reserved uncategorized category");
            return None;
        }

        let position = self.categories.iter().position(|c| c.id == id)?;
        let removed = self.categories.remove(position);
        let new_parent = removed.parent_id().map(str::to_string);
        let now = Utc::now();

        let mut promoted = 0;
        for child in self
            .categories
            .iter_mut()
            .filter(|c| c.parent_id() == Some(id))
        {
            child.set_parent(new_parent.clone(), now);
            promoted += 1;
        }

        tracing::debug!(
            "Category deleted: id={}, promoted_children={}",
            removed.id,
            promoted
        );

        Some(removed)
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    pub fn get_by_id(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn get_by_slug(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    pub fn active(&self) -> Vec<&Category> {
        self.categories.iter().filter(|c| c.is_active).collect()
    }

    pub fn special(&self) -> Vec<&Category> {
        self.categories.iter().filter(|c| c.is_special).collect()
    }

    pub fn roots(&self) -> Vec<&Category> {
        self.children(None)
    }

    /// Direct children of `parent_id` (`None` = roots), sorted by `order`
    pub fn children(&self, parent_id: Option<&str>) -> Vec<&Category> {
        let mut children: Vec<&Category> = self
            .categories
            .iter()
            .filter(|c| c.parent_id() == parent_id)
            .collect();
        children.sort_by_key(|c| c.order);
        children
    }

    pub fn filter(&self, filter: CategoryFilter) -> Vec<&Category> {
        self.categories.iter().filter(|c| filter.matches(c)).collect()
    }

    pub fn stats(&self) -> CategoryStatsDto {
        CategoryStatsDto {
            total: self.categories.len(),
            active: self.categories.iter().filter(|c| c.is_active).count(),
            inactive: self.categories.iter().filter(|c| !c.is_active).count(),
            special: self.categories.iter().filter(|c| c.is_special).count(),
        }
    }

    // =========================================================================
    // HIERARCHY
    // =========================================================================

    pub fn get_category_tree(&self) -> Vec<CategoryTreeDto> {
        CategoryTreeDto::build_tree(&self.categories)
    }

    pub fn get_category_tree_with_counts(
        &self,
        counts: &HashMap<String, usize>,
    ) -> Vec<CategoryTreeDto> {
        CategoryTreeDto::build_tree_with_counts(&self.categories, counts)
    }

    /// Breadcrumb from the root down to `id`. Empty for an unknown id.
    /// The walk is bounded by the category count.
    pub fn get_category_path(&self, id: &str) -> Vec<&Category> {
        let mut path = Vec::new();
        let mut current = self.get_by_id(id);

        while let Some(category) = current {
            if path.len() >= self.categories.len() {
                tracing::warn!("Category path walk exceeded bound: id={}", id);
                break;
            }
            path.push(category);
            current = category.parent_id().and_then(|p| self.get_by_id(p));
        }

        path.reverse();
        path
    }

    /// Re-parent a category. Returns `false` without changes when the move
    /// would create a cycle, or when either id is unknown.
    pub fn move_category_to_parent(&mut self, id: &str, new_parent_id: Option<&str>) -> bool {
        if self.has_circular_dependency(id, new_parent_id) {
            tracing::warn!(
                "Move blocked by circular dependency: id={}, new_parent={:?}",
                id,
                new_parent_id
            );
            return false;
        }

        if let Some(parent) = new_parent_id {
            if self.get_by_id(parent).is_none() {
                tracing::warn!("Move blocked, parent not found: id={}, new_parent={}", id, parent);
                return false;
            }
        }

        let Some(category) = self.categories.iter_mut().find(|c| c.id == id) else {
            return false;
        };
        category.set_parent(new_parent_id.map(str::to_string), Utc::now());

        tracing::debug!("Category moved: id={}, new_parent={:?}", id, new_parent_id);
        true
    }

    /// True iff making `new_parent_id` the parent of `id` would put `id`
    /// among its own ancestors. Moving to the root level never does.
    pub fn has_circular_dependency(&self, id: &str, new_parent_id: Option<&str>) -> bool {
        let Some(mut current) = new_parent_id else {
            return false;
        };

        for _ in 0..=self.categories.len() {
            if current == id {
                return true;
            }
            match self.get_by_id(current).and_then(|c| c.parent_id()) {
                Some(parent) => current = parent,
                None => return false,
            }
        }

        // Bound exhausted: the existing chain already loops
        true
    }

    // =========================================================================
    // ORDERING
    // =========================================================================

    /// Set `order` to each id's position in `ordered_ids`. This is a global
    /// reindex, not scoped to a sibling group. Unlisted categories keep their order.
    pub fn reorder_categories<S: AsRef<str>>(&mut self, ordered_ids: &[S]) {
        let positions: HashMap<&str, i32> = ordered_ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.as_ref(), i as i32))
            .collect();
        let now = Utc::now();

        for category in self.categories.iter_mut() {
            if let Some(&order) = positions.get(category.id.as_str()) {
                category.order = order;
                category.updated_at = now;
            }
        }
    }

    /// Move a category to `new_position` among its siblings and reindex that
    /// sibling group from 0. Positions past the end append.
    pub fn reorder_within_parent(&mut self, id: &str, new_position: usize) {
        let Some(category) = self.get_by_id(id) else {
            return;
        };

        let mut siblings: Vec<String> = self
            .children(category.parent_id())
            .into_iter()
            .filter(|c| c.id != id)
            .map(|c| c.id.clone())
            .collect();
        siblings.insert(new_position.min(siblings.len()), id.to_string());

        let now = Utc::now();
        for category in self.categories.iter_mut() {
            if let Some(index) = siblings.iter().position(|s| *s == category.id) {
                category.order = index as i32;
                category.updated_at = now;
            }
        }
    }

    // =========================================================================
    // VALIDATION
    // =========================================================================

    /// Exact, case-sensitive comparison
    pub fn is_slug_unique(&self, slug: &str, exclude_id: Option<&str>) -> bool {
        !self
            .categories
            .iter()
            .any(|c| c.slug == slug && Some(c.id.as_str()) != exclude_id)
    }

    pub fn can_delete_category(&self, id: &str) -> DeletionCheck {
        if self.get_by_id(id).is_none() {
            return DeletionCheck::denied("Category not found");
        }

        if id == UNCATEGORIZED_ID {
            return DeletionCheck::denied("Cannot delete the default uncategorized category");
        }

        // Articles are reassigned and children promoted by the caller/store
        DeletionCheck::allowed()
    }

    /// Form checks for a candidate category: bilingual name, unique slug,
    /// route for special categories
    fn check_form(&self, candidate: &Category, exclude_id: Option<&str>) -> Result<()> {
        if !candidate.name.is_complete() {
            return Err(AppError::Validation(
                "Please provide both English and Dhivehi names".to_string(),
            ));
        }

        if candidate.slug.trim().is_empty() {
            return Err(AppError::Validation("Please provide a slug".to_string()));
        }

        if !self.is_slug_unique(&candidate.slug, exclude_id) {
            return Err(AppError::Conflict(
                "This slug is already in use. Please choose another.".to_string(),
            ));
        }

        let has_route = candidate
            .special_page_route
            .as_deref()
            .is_some_and(|r| !r.trim().is_empty());
        if candidate.is_special && !has_route {
            return Err(AppError::Validation(
                "Special categories require a route path".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate form input, then create. The parent, when given, must exist.
    pub fn create_checked(&mut self, dto: CreateCategoryDto) -> Result<String> {
        let dto = dto.trimmed();
        dto.validate()?;

        let data = dto.into_new_category();
        if let Some(parent_id) = data.parent_id.as_deref() {
            if self.get_by_id(parent_id).is_none() {
                return Err(AppError::NotFound(format!(
                    "Parent category '{}' not found",
                    parent_id
                )));
            }
        }

        let candidate = Category::from_new(String::new(), data.clone(), Utc::now());
        self.check_form(&candidate, None)?;

        let id = self.create_category(data);
        tracing::info!("Category created: id={}, slug={}", id, candidate.slug);

        Ok(id)
    }

    /// Validate the merged result of an edit, then apply it
    pub fn update_checked(&mut self, id: &str, dto: UpdateCategoryDto) -> Result<()> {
        let dto = dto.trimmed();
        dto.validate()?;

        let mut candidate = self
            .get_by_id(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", id)))?;

        let updates = dto.into_updates();
        for update in &updates {
            candidate.apply(update);
        }
        self.check_form(&candidate, Some(id))?;

        self.update_category(id, &updates);
        tracing::info!("Category updated: id={}, changes={}", id, updates.len());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::new_category;
    use crate::shared::types::BilingualText;
    use tokio_test::{assert_err, assert_ok};

    fn ids<'a>(categories: &[&'a Category]) -> Vec<&'a str> {
        categories.iter().map(|c| c.id.as_str()).collect()
    }

    /// Root(order 0) with Child1(order 0) and Child2(order 1)
    fn family() -> (CategoryService, String, String, String) {
        let mut service = CategoryService::new(Vec::new());
        let root = service.create_category(new_category("root"));
        let child2 = service.create_category(new_category("child-2").with_parent(&root).with_order(1));
        let child1 = service.create_category(new_category("child-1").with_parent(&root).with_order(0));
        (service, root, child1, child2)
    }

    #[test]
    fn test_new_service_always_has_uncategorized() {
        let service = CategoryService::new(Vec::new());
        let uncategorized = service.get_by_id(UNCATEGORIZED_ID).unwrap();

        assert!(!uncategorized.is_active);
        assert!(uncategorized.is_root());
        assert_eq!(service.len(), 1);
    }

    #[test]
    fn test_create_assigns_id_and_timestamps() {
        let mut service = CategoryService::new(Vec::new());
        let id = service.create_category(new_category("tech"));
        let created = service.get_by_id(&id).unwrap();

        assert!(id.starts_with("category-"));
        assert_eq!(created.slug, "tech");
        assert_eq!(created.created_at, created.updated_at);
    }

    #[test]
    fn test_update_merges_fields_and_refreshes_timestamp() {
        let mut service = CategoryService::new(Vec::new());
        let id = service.create_category(new_category("tech"));
        let before = service.get_by_id(&id).unwrap().updated_at;

        assert!(service.update_category(
            &id,
            &[CategoryUpdate::Active(false), CategoryUpdate::Color("#000000".into())]
        ));

        let updated = service.get_by_id(&id).unwrap();
        assert!(!updated.is_active);
        assert_eq!(updated.color, "#000000");
        assert_eq!(updated.slug, "tech");
        assert!(updated.updated_at >= before);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut service = CategoryService::new(Vec::new());
        let snapshot = service.list().to_vec();

        assert!(!service.update_category("missing", &[CategoryUpdate::Order(3)]));
        assert_eq!(service.list(), snapshot.as_slice());
    }

    #[test]
    fn test_tree_orders_children() {
        let (service, root, child1, child2) = family();
        let tree = service.get_category_tree();

        let root_node = tree.iter().find(|n| n.category.id == root).unwrap();
        let children: Vec<&str> = root_node.children.iter().map(|n| n.category.id.as_str()).collect();
        assert_eq!(children, vec![child1.as_str(), child2.as_str()]);
    }

    #[test]
    fn test_tree_contains_every_category() {
        let (mut service, root, child1, _) = family();
        service.create_category(new_category("grandchild").with_parent(&child1));
        service.create_category(new_category("other-root").with_order(-1));
        service.reorder_within_parent(&root, 0);

        let tree = service.get_category_tree();
        let total: usize = tree.iter().map(|n| n.node_count()).sum();
        assert_eq!(total, service.len());

        // every sibling group ascending by order
        fn sorted(nodes: &[CategoryTreeDto]) -> bool {
            nodes.windows(2).all(|w| w[0].category.order <= w[1].category.order)
                && nodes.iter().all(|n| sorted(&n.children))
        }
        assert!(sorted(&tree));
    }

    #[test]
    fn test_tree_with_counts() {
        let (service, root, child1, _) = family();
        let counts = HashMap::from([(child1.clone(), 4)]);
        let tree = service.get_category_tree_with_counts(&counts);

        let root_node = tree.iter().find(|n| n.category.id == root).unwrap();
        assert_eq!(root_node.article_count, Some(0));
        assert_eq!(root_node.children[0].article_count, Some(4));
    }

    #[test]
    fn test_path_runs_root_to_leaf() {
        let (mut service, root, child1, _) = family();
        let leaf = service.create_category(new_category("leaf").with_parent(&child1));

        let path = service.get_category_path(&leaf);
        assert_eq!(ids(&path), vec![root.as_str(), child1.as_str(), leaf.as_str()]);
        assert!(service.get_category_path("missing").is_empty());
    }

    #[test]
    fn test_self_parenting_is_circular() {
        let (service, root, child1, _) = family();
        assert!(service.has_circular_dependency(&root, Some(&root)));
        assert!(service.has_circular_dependency(&child1, Some(&child1)));
    }

    #[test]
    fn test_descendant_parent_is_circular() {
        let (mut service, root, child1, child2) = family();
        let grandchild = service.create_category(new_category("grandchild").with_parent(&child1));

        assert!(service.has_circular_dependency(&root, Some(&grandchild)));
        assert!(service.has_circular_dependency(&child1, Some(&grandchild)));
        assert!(!service.has_circular_dependency(&child2, Some(&grandchild)));
        assert!(!service.has_circular_dependency(&grandchild, Some(&child2)));
        assert!(!service.has_circular_dependency(&child1, None));
    }

    #[test]
    fn test_move_under_descendant_is_rejected() {
        let mut service = CategoryService::new(Vec::new());
        let tech = service.create_category(new_category("tech"));
        let ai = service.create_category(new_category("ai").with_parent(&tech));
        let snapshot = service.list().to_vec();

        assert!(!service.move_category_to_parent(&tech, Some(&ai)));
        assert_eq!(service.get_by_id(&tech).unwrap().parent_id(), None);
        assert_eq!(service.list(), snapshot.as_slice());
    }

    #[test]
    fn test_move_to_valid_parent_and_back_to_root() {
        let (mut service, root, child1, child2) = family();

        assert!(service.move_category_to_parent(&child2, Some(&child1)));
        assert_eq!(service.get_by_id(&child2).unwrap().parent_id(), Some(child1.as_str()));
        assert_eq!(service.get_category_path(&child2).len(), 3);

        assert!(service.move_category_to_parent(&child2, None));
        assert!(service.get_by_id(&child2).unwrap().is_root());
        assert!(service.get_by_id(&root).unwrap().is_root());
    }

    #[test]
    fn test_move_to_unknown_parent_is_rejected() {
        let (mut service, _, child1, _) = family();
        assert!(!service.move_category_to_parent(&child1, Some("missing")));
        assert!(!service.move_category_to_parent("missing", None));
    }

    #[test]
    fn test_every_chain_terminates_after_moves() {
        let (mut service, root, child1, child2) = family();
        let leaf = service.create_category(new_category("leaf").with_parent(&child2));

        // a mix of allowed and rejected moves
        service.move_category_to_parent(&root, Some(&leaf));
        service.move_category_to_parent(&child2, Some(&child1));
        service.move_category_to_parent(&child1, Some(&leaf));
        service.move_category_to_parent(&leaf, Some(&root));

        let n = service.len();
        for category in service.list() {
            let mut current = category;
            let mut steps = 0;
            while let Some(parent) = current.parent_id() {
                current = service.get_by_id(parent).unwrap();
                steps += 1;
                assert!(steps <= n, "cycle reachable from {}", category.id);
            }
        }
    }

    #[test]
    fn test_delete_promotes_children_one_level() {
        let (mut service, root, child1, child2) = family();
        let grandchild = service.create_category(new_category("grandchild").with_parent(&child1));
        let middle = service.create_category(new_category("middle").with_parent(&root));
        service.move_category_to_parent(&child1, Some(&middle));
        service.move_category_to_parent(&child2, Some(&middle));

        let removed = service.delete_category(&middle).unwrap();
        assert_eq!(removed.id, middle);
        assert!(service.get_by_id(&middle).is_none());
        assert_eq!(service.get_by_id(&child1).unwrap().parent_id(), Some(root.as_str()));
        assert_eq!(service.get_by_id(&child2).unwrap().parent_id(), Some(root.as_str()));
        // not re-linked beyond one level
        assert_eq!(service.get_by_id(&grandchild).unwrap().parent_id(), Some(child1.as_str()));
    }

    #[test]
    fn test_delete_root_promotes_children_to_roots() {
        let (mut service, root, child1, child2) = family();
        service.delete_category(&root);

        assert!(service.get_by_id(&child1).unwrap().is_root());
        assert!(service.get_by_id(&child2).unwrap().is_root());
    }

    #[test]
    fn test_uncategorized_cannot_be_deleted() {
        let mut service = CategoryService::new(Vec::new());
        let check = service.can_delete_category(UNCATEGORIZED_ID);

        assert!(!check.can_delete);
        assert!(check.reason.is_some());
        assert!(service.delete_category(UNCATEGORIZED_ID).is_none());
        assert!(service.get_by_id(UNCATEGORIZED_ID).is_some());
    }

    #[test]
    fn test_can_delete_regular_and_unknown() {
        let (service, root, _, _) = family();
        assert_eq!(service.can_delete_category(&root), DeletionCheck::allowed());
        assert_eq!(
            service.can_delete_category("missing"),
            DeletionCheck::denied("Category not found")
        );
    }

    #[test]
    fn test_slug_uniqueness() {
        let mut service = CategoryService::new(Vec::new());
        let politics = service.create_category(new_category("politics"));
        let sports = service.create_category(new_category("sports"));

        assert!(!service.is_slug_unique("politics", None));
        assert!(!service.is_slug_unique("politics", Some(&sports)));
        assert!(service.is_slug_unique("politics", Some(&politics)));
        assert!(service.is_slug_unique("Politics", None));
        assert!(service.is_slug_unique("business", None));
    }

    #[test]
    fn test_reorder_is_global() {
        let (mut service, root, child1, child2) = family();
        service.reorder_categories(&[child2.as_str(), root.as_str(), child1.as_str()]);

        assert_eq!(service.get_by_id(&child2).unwrap().order, 0);
        assert_eq!(service.get_by_id(&root).unwrap().order, 1);
        assert_eq!(service.get_by_id(&child1).unwrap().order, 2);
        assert_eq!(service.get_by_id(UNCATEGORIZED_ID).unwrap().order, i32::MAX);
    }

    #[test]
    fn test_reorder_within_parent() {
        let (mut service, root, child1, child2) = family();
        let child3 = service.create_category(new_category("child-3").with_parent(&root).with_order(7));

        service.reorder_within_parent(&child3, 0);
        assert_eq!(
            ids(&service.children(Some(&root))),
            vec![child3.as_str(), child1.as_str(), child2.as_str()]
        );
        assert_eq!(service.get_by_id(&child2).unwrap().order, 2);

        service.reorder_within_parent(&child3, 99);
        assert_eq!(
            ids(&service.children(Some(&root))),
            vec![child1.as_str(), child2.as_str(), child3.as_str()]
        );
        assert_eq!(service.get_by_id(&root).unwrap().order, 0);
    }

    #[test]
    fn test_filters_and_stats() {
        let (mut service, root, _, _) = family();
        let mut elections = new_category("elections");
        elections.is_special = true;
        elections.special_page_route = Some("/elections".to_string());
        let elections = service.create_category(elections);
        service.update_category(&root, &[CategoryUpdate::Active(false)]);

        let stats = service.stats();
        assert_eq!(stats.total, 5);
        assert_eq!(stats.inactive, 2);
        assert_eq!(stats.active, 3);
        assert_eq!(stats.special, 1);
        assert_eq!(ids(&service.special()), vec![elections.as_str()]);
        assert_eq!(service.filter(CategoryFilter::Inactive).len(), 2);
        assert_eq!(service.get_by_id(&elections).unwrap().route(), "/elections");
    }

    #[test]
    fn test_create_checked_rejects_incomplete_and_duplicate() {
        let mut service = CategoryService::new(Vec::new());
        assert_ok!(service.create_checked(CreateCategoryDto::new(
            BilingualText::new("Politics", "ސިޔާސީ"),
            "politics",
        )));

        let missing_dv = CreateCategoryDto::new(BilingualText::new("Sports", " "), "sports");
        assert!(matches!(
            service.create_checked(missing_dv),
            Err(AppError::Validation(_))
        ));

        let duplicate = CreateCategoryDto::new(BilingualText::new("Politics", "ސިޔާސީ"), "politics");
        assert!(matches!(
            service.create_checked(duplicate),
            Err(AppError::Conflict(_))
        ));
    }

    #[test]
    fn test_create_checked_special_requires_route_and_known_parent() {
        let mut service = CategoryService::new(Vec::new());

        let mut special = CreateCategoryDto::new(BilingualText::new("Elections", "އިންތިޚާބު"), "elections");
        special.is_special = true;
        assert!(matches!(
            service.create_checked(special.clone()),
            Err(AppError::Validation(_))
        ));
        special.special_page_route = Some("/elections".to_string());
        assert_ok!(service.create_checked(special));

        let mut orphan = CreateCategoryDto::new(BilingualText::new("AI", "އޭއައި"), "ai");
        orphan.parent_id = Some("missing".to_string());
        assert!(matches!(
            service.create_checked(orphan),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_update_checked_allows_own_slug_and_rejects_taken_one() {
        let mut service = CategoryService::new(Vec::new());
        let politics = service.create_category(new_category("politics"));
        service.create_category(new_category("sports"));

        let keep_slug = UpdateCategoryDto {
            slug: Some("politics".to_string()),
            name: Some(BilingualText::new("World Politics", "ސިޔާސީ")),
            ..Default::default()
        };
        assert_ok!(service.update_checked(&politics, keep_slug));
        assert_eq!(service.get_by_id(&politics).unwrap().name.en, "World Politics");

        let taken = UpdateCategoryDto {
            slug: Some("sports".to_string()),
            ..Default::default()
        };
        assert_err!(service.update_checked(&politics, taken));
        assert_eq!(service.get_by_id(&politics).unwrap().slug, "politics");

        assert!(matches!(
            service.update_checked("missing", UpdateCategoryDto::default()),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_create_checked_trims_padded_slug() {
        let mut service = CategoryService::new(Vec::new());

        let id = assert_ok!(service.create_checked(CreateCategoryDto::new(
            BilingualText::new(" Sports ", "ކުޅިވަރު"),
            " sports ",
        )));
        let created = service.get_by_id(&id).unwrap();
        assert_eq!(created.slug, "sports");
        assert_eq!(created.name.en, "Sports");

        let padded = UpdateCategoryDto {
            slug: Some("  team-sports ".to_string()),
            ..Default::default()
        };
        assert_ok!(service.update_checked(&id, padded));
        assert_eq!(service.get_by_id(&id).unwrap().slug, "team-sports");
    }

    #[test]
    fn test_update_checked_route_alone_keeps_regular_category() {
        let mut service = CategoryService::new(Vec::new());
        let sports = service.create_category(new_category("sports"));

        let route_only = UpdateCategoryDto {
            special_page_route: Some("/sports-hub".to_string()),
            ..Default::default()
        };
        assert_ok!(service.update_checked(&sports, route_only));
        let sports_category = service.get_by_id(&sports).unwrap();
        assert!(!sports_category.is_special);
        assert_eq!(sports_category.special_page_route, None);
        assert_eq!(sports_category.route(), "/category/sports");

        let mut special = CreateCategoryDto::new(BilingualText::new("Elections", "އިންތިޚާބު"), "elections");
        special.is_special = true;
        special.special_page_route = Some("/elections".to_string());
        let elections = assert_ok!(service.create_checked(special));

        let moved = UpdateCategoryDto {
            special_page_route: Some("/elections-2024".to_string()),
            ..Default::default()
        };
        assert_ok!(service.update_checked(&elections, moved));
        assert_eq!(service.get_by_id(&elections).unwrap().route(), "/elections-2024");
    }
}

use crate::core::error::{AppError, Result};
use crate::core::state::SharedNewsroom;
use crate::features::admin::dtos::{ArticlePageDto, ArticleRowDto, BulkAction};
use crate::features::admin::models::AdminViewState;
use crate::features::articles::dtos::CreateArticleDto;
use crate::features::articles::models::ArticleStatus;
use crate::features::scheduling::dtos::CalendarEventDto;
use crate::features::scheduling::CalendarService;
use crate::shared::constants::UNCATEGORIZED_ID;

/// Admin operations that span more than one store
pub struct AdminService {
    newsroom: SharedNewsroom,
}

impl AdminService {
    pub fn new(newsroom: SharedNewsroom) -> Self {
        Self { newsroom }
    }

    // =========================================================================
    // CATEGORIES
    // =========================================================================

    /// Delete a category after moving its articles to uncategorized.
    /// Returns how many articles were reassigned.
    pub async fn delete_category(&self, id: &str) -> Result<usize> {
        let mut newsroom = self.newsroom.write().await;

        let check = newsroom.categories.can_delete_category(id);
        if !check.can_delete {
            let reason = check.reason.unwrap_or_default();
            tracing::warn!("Category delete refused: id={}, reason={}", id, reason);
            return Err(if newsroom.categories.get_by_id(id).is_none() {
                AppError::NotFound(reason)
            } else {
                AppError::Forbidden(reason)
            });
        }

        let article_ids = newsroom.articles.ids_in_category(id);
        let reassigned = newsroom
            .articles
            .reassign_category(&article_ids, UNCATEGORIZED_ID);

        newsroom.categories.delete_category(id).ok_or_else(|| {
            tracing::error!("Category vanished during delete: id={}", id);
            AppError::Internal(format!("Failed to delete category '{}'", id))
        })?;

        tracing::info!(
            "Category deleted: id={}, reassigned_articles={}",
            id,
            reassigned
        );
        Ok(reassigned)
    }

    /// Checked re-parenting for the tree editor's drag and drop
    pub async fn move_category(&self, id: &str, new_parent_id: Option<&str>) -> Result<()> {
        let mut newsroom = self.newsroom.write().await;

        if newsroom.categories.get_by_id(id).is_none() {
            return Err(AppError::NotFound(format!("Category '{}' not found", id)));
        }
        if let Some(parent) = new_parent_id {
            if newsroom.categories.get_by_id(parent).is_none() {
                return Err(AppError::NotFound(format!(
                    "Parent category '{}' not found",
                    parent
                )));
            }
        }
        if newsroom.categories.has_circular_dependency(id, new_parent_id) {
            return Err(AppError::Conflict(
                "Cannot move a category under itself or one of its descendants".to_string(),
            ));
        }

        if !newsroom.categories.move_category_to_parent(id, new_parent_id) {
            return Err(AppError::Internal(format!("Failed to move category '{}'", id)));
        }
        Ok(())
    }

    // =========================================================================
    // ARTICLES
    // =========================================================================

    /// Editor save: the category must exist and the author must be active
    pub async fn create_article(&self, dto: CreateArticleDto) -> Result<String> {
        let mut newsroom = self.newsroom.write().await;

        if newsroom.categories.get_by_id(&dto.category_id).is_none() {
            return Err(AppError::BadRequest(format!(
                "Category '{}' does not exist",
                dto.category_id
            )));
        }
        match newsroom.authors.get_by_id(&dto.author_id) {
            Some(author) if !author.is_deleted => {}
            _ => {
                return Err(AppError::BadRequest(format!(
                    "Author '{}' is not available",
                    dto.author_id
                )))
            }
        }

        let id = newsroom.articles.create_checked(dto)?;
        tracing::info!("Article created: id={}", id);
        Ok(id)
    }

    /// Apply a bulk action to the current selection and clear it.
    /// Returns how many articles were affected.
    pub async fn bulk_action(&self, view: &mut AdminViewState, action: BulkAction) -> Result<usize> {
        if view.selected().is_empty() {
            return Err(AppError::BadRequest(
                "Select at least one article".to_string(),
            ));
        }

        let mut newsroom = self.newsroom.write().await;
        let affected = match action {
            BulkAction::Publish => newsroom
                .articles
                .bulk_update_status(view.selected(), ArticleStatus::Published),
            BulkAction::Draft => newsroom
                .articles
                .bulk_update_status(view.selected(), ArticleStatus::Draft),
            BulkAction::Delete => newsroom.articles.bulk_delete(view.selected()),
        };

        tracing::info!(
            "Bulk action applied: action={}, selected={}, affected={}",
            action,
            view.selected().len(),
            affected
        );
        view.clear_selection();
        Ok(affected)
    }

    /// The current page of the articles table
    pub async fn list_articles(&self, view: &AdminViewState) -> ArticlePageDto {
        let newsroom = self.newsroom.read().await;

        let visible = view.apply(&newsroom.articles, &newsroom.authors, &newsroom.categories);
        let pagination = view.pagination();

        let page_rows = pagination.slice(&visible);
        let page_ids: Vec<&str> = page_rows.iter().map(|a| a.id.as_str()).collect();

        let items = page_rows
            .iter()
            .map(|article| {
                ArticleRowDto::new(
                    article,
                    newsroom.categories.get_by_id(&article.category_id),
                    newsroom.authors.get_by_id(&article.author_id),
                    view.is_selected(&article.id),
                )
            })
            .collect();

        ArticlePageDto {
            items,
            total_items: visible.len(),
            total_articles: newsroom.articles.len(),
            page: view.current_page(),
            total_pages: pagination.total_pages(visible.len()),
            selection: view.selection_state(&page_ids),
        }
    }

    /// Calendar view of the articles page, honouring the same filters as the table
    pub async fn calendar_events(&self, view: &AdminViewState) -> Vec<CalendarEventDto> {
        let newsroom = self.newsroom.read().await;
        CalendarService::events_matching(
            &newsroom.articles,
            &newsroom.categories,
            &newsroom.authors,
            view.filter(),
        )
    }

    // =========================================================================
    // AUTHORS
    // =========================================================================

    pub async fn delete_author(&self, id: &str) -> Result<()> {
        let mut newsroom = self.newsroom.write().await;
        if !newsroom.authors.soft_delete(id) {
            return Err(AppError::NotFound(format!("Author '{}' not found", id)));
        }
        tracing::info!("Author soft-deleted: id={}", id);
        Ok(())
    }

    pub async fn restore_author(&self, id: &str) -> Result<()> {
        let mut newsroom = self.newsroom.write().await;
        if !newsroom.authors.restore(id) {
            return Err(AppError::NotFound(format!("Author '{}' not found", id)));
        }
        tracing::info!("Author restored: id={}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::{Newsroom, SharedNewsroom};
    use crate::features::articles::ArticleService;
    use crate::features::authors::AuthorService;
    use crate::features::categories::CategoryService;
    use crate::shared::test_helpers::{article, author, new_category};
    use crate::features::admin::models::{SelectionState, StatusFilter};
    use crate::shared::types::BilingualText;
    use tokio_test::{assert_err, assert_ok};

    struct Fixture {
        shared: SharedNewsroom,
        service: AdminService,
        politics: String,
        elections: String,
    }

    fn fixture() -> Fixture {
        let mut categories = CategoryService::new(Vec::new());
        let politics = categories.create_category(new_category("politics"));
        let elections = categories.create_category(new_category("elections").with_parent(politics.clone()));

        let articles = ArticleService::new(vec![
            article("a1", "climate-bill", &politics, "w1"),
            article("a2", "budget", &politics, "w1"),
            article("a3", "poll", &elections, "w1"),
        ]);

        let shared = Newsroom {
            categories,
            articles,
            authors: AuthorService::new(vec![author("w1", "sarah-johnson")]),
            ..Newsroom::default()
        }
        .shared();

        Fixture {
            service: AdminService::new(shared.clone()),
            shared,
            politics,
            elections,
        }
    }

    #[tokio::test]
    async fn test_delete_category_reassigns_articles() {
        let f = fixture();

        let reassigned = assert_ok!(f.service.delete_category(&f.politics).await);
        assert_eq!(reassigned, 2);

        let newsroom = f.shared.read().await;
        assert!(newsroom.categories.get_by_id(&f.politics).is_none());
        assert_eq!(newsroom.articles.by_category(UNCATEGORIZED_ID).len(), 2);
        // child promoted to root
        assert!(newsroom.categories.get_by_id(&f.elections).unwrap().is_root());
        assert_eq!(newsroom.articles.by_category(&f.elections).len(), 1);
    }

    #[tokio::test]
    async fn test_delete_category_errors() {
        let f = fixture();

        assert!(matches!(
            f.service.delete_category(UNCATEGORIZED_ID).await,
            Err(AppError::Forbidden(_))
        ));
        assert!(matches!(
            f.service.delete_category("missing").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_move_category() {
        let f = fixture();

        assert!(matches!(
            f.service.move_category(&f.politics, Some(&f.elections)).await,
            Err(AppError::Conflict(_))
        ));
        assert!(matches!(
            f.service.move_category(&f.elections, Some("missing")).await,
            Err(AppError::NotFound(_))
        ));

        assert_ok!(f.service.move_category(&f.elections, None).await);
        assert!(f
            .shared
            .read()
            .await
            .categories
            .get_by_id(&f.elections)
            .unwrap()
            .is_root());
    }

    #[tokio::test]
    async fn test_bulk_action_requires_selection() {
        let f = fixture();
        let mut view = AdminViewState::default();

        assert!(matches!(
            f.service.bulk_action(&mut view, BulkAction::Publish).await,
            Err(AppError::BadRequest(_))
        ));
    }

    #[tokio::test]
    async fn test_bulk_actions_clear_selection() {
        let f = fixture();
        let mut view = AdminViewState::default();

        view.select_all(&["a1", "a2"]);
        assert_eq!(assert_ok!(f.service.bulk_action(&mut view, BulkAction::Draft).await), 2);
        assert!(view.selected().is_empty());
        assert_eq!(f.shared.read().await.articles.drafts().len(), 2);

        view.toggle_selection("a1");
        view.toggle_selection("missing");
        assert_eq!(assert_ok!(f.service.bulk_action(&mut view, BulkAction::Delete).await), 1);
        assert_eq!(f.shared.read().await.articles.len(), 2);
    }

    #[tokio::test]
    async fn test_list_articles_pages_and_marks_selection() {
        let f = fixture();
        let mut view = AdminViewState::default();
        view.set_per_page(2);
        view.toggle_selection("a3");

        let first = f.service.list_articles(&view).await;
        assert_eq!(first.items.len(), 2);
        assert_eq!(first.total_items, 3);
        assert_eq!(first.total_pages, 2);

        view.set_current_page(2);
        let second = f.service.list_articles(&view).await;
        assert_eq!(second.items.len(), 1);

        let selected: Vec<bool> = first
            .items
            .iter()
            .chain(second.items.iter())
            .filter(|row| row.id == "a3")
            .map(|row| row.selected)
            .collect();
        assert_eq!(selected, vec![true]);
    }

    #[tokio::test]
    async fn test_list_articles_reports_page_selection() {
        let f = fixture();
        let mut view = AdminViewState::default();

        view.select_all(&["a1", "a2", "a3"]);
        assert_eq!(f.service.list_articles(&view).await.selection, SelectionState::All);

        view.set_category_filter(Some(f.elections.clone()));
        view.toggle_selection("a3");
        let page = f.service.list_articles(&view).await;
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.selection, SelectionState::None);
    }

    #[tokio::test]
    async fn test_calendar_events_follow_filters() {
        let f = fixture();
        let mut view = AdminViewState::default();
        assert_eq!(f.service.calendar_events(&view).await.len(), 3);

        view.set_category_filter(Some(f.elections.clone()));
        let events = f.service.calendar_events(&view).await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].article_id, "a3");

        view.reset_filters();
        view.set_status_filter(StatusFilter::Draft);
        assert!(f.service.calendar_events(&view).await.is_empty());
    }

    #[tokio::test]
    async fn test_create_article_checks_references() {
        let f = fixture();
        let dto = CreateArticleDto {
            slug: "new-harbour".to_string(),
            title: BilingualText::new("New harbour", "އައު ބަނދަރު"),
            subtitle: None,
            summary: BilingualText::new("Summary", "ޚުލާސާ"),
            body: BilingualText::new("<p>Body</p>", "<p>ބޮޑީ</p>"),
            cover_image: "https://images.example.com/harbour.jpg".to_string(),
            category_id: "missing".to_string(),
            author_id: "w1".to_string(),
            featured: false,
            status: ArticleStatus::Draft,
            scheduled_for: None,
            tags: Vec::new(),
            video_url: None,
            meta_description: None,
            keywords: Vec::new(),
            og_image: None,
            edited_by: None,
        };

        assert_err!(f.service.create_article(dto.clone()).await);

        assert_ok!(f.service.delete_author("w1").await);
        let with_category = CreateArticleDto {
            category_id: f.politics.clone(),
            ..dto
        };
        assert_err!(f.service.create_article(with_category.clone()).await);

        assert_ok!(f.service.restore_author("w1").await);
        let id = assert_ok!(f.service.create_article(with_category).await);
        assert!(f.shared.read().await.articles.get_by_id(&id).is_some());
    }
}

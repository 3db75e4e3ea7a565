mod admin_view;

pub use admin_view::{
    AdminViewState, ArticleFilter, DateRange, SelectionState, SortField, SortState, StatusFilter,
    ViewMode,
};

/// Default page size for the admin articles table
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: usize = 100;

// =============================================================================
// CATEGORY CONSTANTS
// =============================================================================

/// Reserved fallback category for articles whose category was deleted
pub const UNCATEGORIZED_ID: &str = "uncategorized";

pub const UNCATEGORIZED_SLUG: &str = "uncategorized";

/// Badge color used when none is supplied
pub const DEFAULT_CATEGORY_COLOR: &str = "#6B7280";

// =============================================================================
// PREFERENCES
// =============================================================================

/// Storage key for the reader's language preference
pub const LANGUAGE_STORAGE_KEY: &str = "newsapp-language";

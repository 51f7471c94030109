pub const DEFAULT_PER_PAGE: u64 = 9;
pub const MAX_PER_PAGE: u64 = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRecipesInput {
    pub query: String,
    pub page: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GetLibraryFilter {
    pub search: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

/// Resolved page request: 1-based page, bounded page size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryPage {
    pub search: Option<String>,
    pub page: u64,
    pub per_page: u64,
}

impl From<GetLibraryFilter> for LibraryPage {
    fn from(filter: GetLibraryFilter) -> Self {
        Self {
            search: filter
                .search
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            page: filter.page.unwrap_or(1).max(1),
            per_page: filter
                .per_page
                .unwrap_or(DEFAULT_PER_PAGE)
                .clamp(1, MAX_PER_PAGE),
        }
    }
}

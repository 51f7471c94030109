use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SearchRecipesValidator {
    #[validate(length(min = 1, message = "Query de busca é necessária"))]
    pub query: String,

    #[serde(default)]
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: Option<u32>,
}

#[derive(Debug, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetLibraryQuery {
    /// Matches title or ingredients, case-insensitively.
    pub search: Option<String>,
    /// 1-based page number.
    pub page: Option<u64>,
    /// Page size, 9 by default and at most 50.
    pub per_page: Option<u64>,
}

use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use temai_core::domain::library::{
    entities::LibraryRecipe, ports::LibraryService, value_objects::GetLibraryFilter,
};
use utoipa::ToSchema;

use crate::application::http::{
    library::validators::GetLibraryQuery,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LibraryResponse {
    pub items: Vec<LibraryRecipe>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

#[utoipa::path(
    get,
    path = "",
    tag = "library",
    summary = "Browse the recipe library",
    description = "Newest first. An empty library is seeded with sample recipes on first read.",
    params(GetLibraryQuery),
    responses(
        (status = 200, body = LibraryResponse),
        (status = 500, body = ApiErrorResponse)
    ),
)]
pub async fn get_library(
    State(state): State<AppState>,
    Query(query): Query<GetLibraryQuery>,
) -> Result<Response<LibraryResponse>, ApiError> {
    let page = state
        .service
        .list_library(GetLibraryFilter {
            search: query.search,
            page: query.page,
            per_page: query.per_page,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(LibraryResponse {
        items: page.items,
        page: page.page,
        per_page: page.per_page,
        total: page.total,
    }))
}

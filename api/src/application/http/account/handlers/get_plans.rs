use axum::extract::State;
use serde::Serialize;
use temai_core::domain::account::{entities::Plan, ports::AccountService};
use utoipa::ToSchema;

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct PlansResponse {
    pub data: Vec<Plan>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "account",
    summary = "Subscription plans",
    responses(
        (status = 200, body = PlansResponse)
    ),
)]
pub async fn get_plans(State(state): State<AppState>) -> Response<PlansResponse> {
    Response::OK(PlansResponse {
        data: state.service.list_plans(),
    })
}

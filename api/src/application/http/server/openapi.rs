use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

use crate::application::http::{
    account::router::{AccountApiDoc, PlanApiDoc},
    authentication::router::AuthenticationApiDoc,
    health::router::HealthApiDoc,
    library::router::{LibraryApiDoc, SearchApiDoc},
    photo::router::PhotoApiDoc,
    recipe_suggestion::router::RecipeSuggestionApiDoc,
    user_recipe::router::UserRecipeApiDoc,
};

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "TemAi API"
    ),
    modifiers(&BearerAuth),
    nest(
        (path = "/api/generate-recipe", api = RecipeSuggestionApiDoc),
        (path = "/api", api = SearchApiDoc),
        (path = "/library", api = LibraryApiDoc),
        (path = "/me/recipes", api = UserRecipeApiDoc),
        (path = "/me", api = AccountApiDoc),
        (path = "/plans", api = PlanApiDoc),
        (path = "/auth", api = AuthenticationApiDoc),
        (path = "/photos", api = PhotoApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;

use chrono::Utc;
use tracing::{error, info};
use uuid::Uuid;

use crate::domain::{
    account::ports::UserAccountRepository,
    authentication::{entities::Session, ports::IdentityProvider},
    badge::{
        entities::{Badge, BadgeKind},
        ports::BadgeRepository,
    },
    common::{entities::app_errors::CoreError, non_blank, services::Service},
    health::ports::HealthCheckRepository,
    library::ports::LibraryRecipeRepository,
    photo::ports::ObjectStoragePort,
    suggestion::{entities::RecipeSuggestion, ports::CompletionClient},
    user_recipe::{
        entities::UserRecipe,
        ports::{UserRecipeRepository, UserRecipeService},
        value_objects::{CreateUserRecipeInput, GetUserRecipesFilter},
    },
};

impl<L, UR, A, B, C, I, O, HC> Service<L, UR, A, B, C, I, O, HC>
where
    L: LibraryRecipeRepository,
    UR: UserRecipeRepository,
    A: UserAccountRepository,
    B: BadgeRepository,
    C: CompletionClient,
    I: IdentityProvider,
    O: ObjectStoragePort,
    HC: HealthCheckRepository,
{
    async fn award_badges(&self, owner_id: Uuid) -> Result<Vec<Badge>, CoreError> {
        let count = self.user_recipe_repository.count_by_owner(owner_id).await?;
        let owned: Vec<BadgeKind> = self
            .badge_repository
            .list_by_user(owner_id)
            .await?
            .into_iter()
            .map(|badge| badge.badge_type)
            .collect();

        let earned = BadgeKind::newly_earned(count, &owned);
        if earned.is_empty() {
            return Ok(Vec::new());
        }

        let now = Utc::now();
        let badges = earned
            .into_iter()
            .map(|kind| Badge::new(owner_id, kind, now))
            .collect();
        self.badge_repository.create_many(badges).await
    }

    async fn store_recipe(&self, recipe: UserRecipe) -> Result<UserRecipe, CoreError> {
        let owner_id = recipe.owner_id;
        let recipe = self.user_recipe_repository.create(recipe).await?;

        // The recipe is already stored; a badge failure must not undo that.
        match self.award_badges(owner_id).await {
            Ok(awarded) if !awarded.is_empty() => {
                let kinds: Vec<&str> = awarded.iter().map(|b| b.badge_type.as_str()).collect();
                info!(user_id = %owner_id, badges = ?kinds, "badges awarded");
            }
            Ok(_) => {}
            Err(e) => error!(user_id = %owner_id, error = %e, "failed to award badges"),
        }

        Ok(recipe.with_resolved_photo())
    }
}

impl<L, UR, A, B, C, I, O, HC> UserRecipeService for Service<L, UR, A, B, C, I, O, HC>
where
    L: LibraryRecipeRepository,
    UR: UserRecipeRepository,
    A: UserAccountRepository,
    B: BadgeRepository,
    C: CompletionClient,
    I: IdentityProvider,
    O: ObjectStoragePort,
    HC: HealthCheckRepository,
{
    async fn create_recipe(
        &self,
        session: Session,
        input: CreateUserRecipeInput,
    ) -> Result<UserRecipe, CoreError> {
        let recipe = UserRecipe::new(
            session.user_id,
            &input.title,
            &input.ingredients,
            &input.instructions,
            input.photo_url,
            Utc::now(),
        )?;

        self.store_recipe(recipe).await
    }

    async fn list_recipes(
        &self,
        session: Session,
        filter: GetUserRecipesFilter,
    ) -> Result<Vec<UserRecipe>, CoreError> {
        let search = non_blank(filter.search.as_deref()).map(str::to_string);
        let recipes = self
            .user_recipe_repository
            .list_by_owner(session.user_id, search)
            .await?;

        Ok(recipes
            .into_iter()
            .map(UserRecipe::with_resolved_photo)
            .collect())
    }

    async fn save_suggestion(
        &self,
        session: Session,
        suggestion: RecipeSuggestion,
    ) -> Result<UserRecipe, CoreError> {
        let recipe = UserRecipe::from_suggestion(session.user_id, suggestion, Utc::now())?;
        self.store_recipe(recipe).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::services::test_support::{Mocks, session};

    fn input(title: &str) -> CreateUserRecipeInput {
        CreateUserRecipeInput {
            title: title.to_string(),
            ingredients: "2 ovos".to_string(),
            instructions: "Bata e frite".to_string(),
            photo_url: None,
        }
    }

    #[tokio::test]
    async fn first_recipe_awards_first_badge() {
        let mut mocks = Mocks::new();
        mocks
            .user_recipes
            .expect_create()
            .times(1)
            .returning(|recipe| Box::pin(async move { Ok(recipe) }));
        mocks
            .user_recipes
            .expect_count_by_owner()
            .returning(|_| Box::pin(async move { Ok(1) }));
        mocks
            .badges
            .expect_list_by_user()
            .returning(|_| Box::pin(async move { Ok(vec![]) }));
        mocks
            .badges
            .expect_create_many()
            .withf(|badges| {
                badges.len() == 1 && badges[0].badge_type == BadgeKind::PrimeiraReceita
            })
            .times(1)
            .returning(|badges| Box::pin(async move { Ok(badges) }));

        let recipe = mocks
            .into_service()
            .create_recipe(session(), input("Omelete"))
            .await
            .unwrap();

        assert_eq!(recipe.owner_id, session().user_id);
        assert!(recipe.photo_url.is_some());
    }

    #[tokio::test]
    async fn owned_badges_are_not_recreated() {
        let mut mocks = Mocks::new();
        mocks
            .user_recipes
            .expect_create()
            .returning(|recipe| Box::pin(async move { Ok(recipe) }));
        mocks
            .user_recipes
            .expect_count_by_owner()
            .returning(|_| Box::pin(async move { Ok(5) }));
        mocks.badges.expect_list_by_user().returning(|user_id| {
            Box::pin(async move {
                Ok(vec![Badge::new(
                    user_id,
                    BadgeKind::PrimeiraReceita,
                    Utc::now(),
                )])
            })
        });
        mocks.badges.expect_create_many().never();

        let result = mocks
            .into_service()
            .create_recipe(session(), input("Omelete"))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn badge_failure_does_not_fail_the_create() {
        let mut mocks = Mocks::new();
        mocks
            .user_recipes
            .expect_create()
            .returning(|recipe| Box::pin(async move { Ok(recipe) }));
        mocks.user_recipes.expect_count_by_owner().returning(|_| {
            Box::pin(async move { Err(CoreError::StorageError("timeout".to_string())) })
        });

        let result = mocks
            .into_service()
            .create_recipe(session(), input("Omelete"))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn blank_title_never_reaches_storage() {
        let mut mocks = Mocks::new();
        mocks.user_recipes.expect_create().never();

        let result = mocks
            .into_service()
            .create_recipe(session(), input("   "))
            .await;
        assert!(matches!(result, Err(CoreError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn list_is_scoped_to_the_caller() {
        let mut mocks = Mocks::new();
        let owner = session().user_id;
        mocks
            .user_recipes
            .expect_list_by_owner()
            .withf(move |owner_id, search| *owner_id == owner && search.as_deref() == Some("bolo"))
            .returning(|owner_id, _| {
                Box::pin(async move {
                    Ok(vec![UserRecipe::new(
                        owner_id,
                        "Bolo de milho",
                        "milho",
                        "asse",
                        None,
                        Utc::now(),
                    )?])
                })
            });

        let recipes = mocks
            .into_service()
            .list_recipes(
                session(),
                GetUserRecipesFilter {
                    search: Some(" bolo ".into()),
                },
            )
            .await
            .unwrap();

        assert_eq!(recipes.len(), 1);
        assert!(recipes[0].photo_url.as_deref().unwrap().contains("photo-1578985545062"));
    }

    #[tokio::test]
    async fn suggestion_is_saved_with_numbered_steps() {
        let mut mocks = Mocks::new();
        mocks
            .user_recipes
            .expect_create()
            .withf(|recipe| recipe.instructions == "1. Cozinhe\n2. Sirva")
            .returning(|recipe| Box::pin(async move { Ok(recipe) }));
        mocks
            .user_recipes
            .expect_count_by_owner()
            .returning(|_| Box::pin(async move { Ok(0) }));
        mocks
            .badges
            .expect_list_by_user()
            .returning(|_| Box::pin(async move { Ok(vec![]) }));

        let recipe = mocks
            .into_service()
            .save_suggestion(
                session(),
                RecipeSuggestion {
                    name: "Sopa de abóbora".into(),
                    ingredients: vec!["abóbora".into()],
                    steps: vec!["Cozinhe".into(), "Sirva".into()],
                    prep_time: None,
                    difficulty: None,
                    image: Some("https://images.unsplash.com/photo-x".into()),
                },
            )
            .await
            .unwrap();

        assert_eq!(recipe.photo_url.as_deref(), Some("https://images.unsplash.com/photo-x"));
    }
}

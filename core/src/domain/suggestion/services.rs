use chrono::Utc;
use tracing::{info, warn};

use crate::domain::{
    account::ports::UserAccountRepository,
    authentication::{entities::Session, ports::IdentityProvider},
    badge::ports::BadgeRepository,
    common::{
        entities::app_errors::CoreError, non_blank, policies::ensure_policy, services::Service,
    },
    health::ports::HealthCheckRepository,
    library::ports::LibraryRecipeRepository,
    photo::ports::ObjectStoragePort,
    suggestion::{
        entities::{AudioClip, AudioSuggestions, RecipeSuggestion},
        extractor::extract_records,
        image_tagger::recipe_image_url,
        ports::{CompletionClient, RecipeSuggestionService},
        prompts::generation_request,
        value_objects::GenerateRecipesInput,
    },
    user_recipe::ports::UserRecipeRepository,
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
    async fn suggest(&self, input: GenerateRecipesInput) -> Result<Vec<RecipeSuggestion>, CoreError> {
        let request = generation_request(input.ingredients.as_deref(), input.image)?;
        let reply = self.completion_client.complete(request).await?;

        let recipes: Vec<RecipeSuggestion> = extract_records::<RecipeSuggestion>(Some(&reply))
            .into_iter()
            .filter(|recipe| !recipe.name.is_empty())
            .map(|mut recipe| {
                recipe.image = Some(recipe_image_url(&recipe.name));
                recipe
            })
            .collect();

        info!(count = recipes.len(), "recipes generated");
        Ok(recipes)
    }
}

impl<L, UR, A, B, C, I, O, HC> RecipeSuggestionService for Service<L, UR, A, B, C, I, O, HC>
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
    async fn generate_recipes(
        &self,
        input: GenerateRecipesInput,
    ) -> Result<Vec<RecipeSuggestion>, CoreError> {
        self.suggest(input).await
    }

    async fn generate_recipes_from_audio(
        &self,
        session: Session,
        clip: AudioClip,
    ) -> Result<AudioSuggestions, CoreError> {
        if clip.data.is_empty() {
            return Err(CoreError::InvalidRequest("empty audio clip".to_string()));
        }

        let account = self.load_account(&session).await?;
        ensure_policy(
            self.policy.can_use_audio(&account, Utc::now()),
            "audio input requires premium access",
        )?;

        let transcript = self.completion_client.transcribe(clip).await?;
        let Some(ingredients) = non_blank(Some(&transcript)).map(str::to_string) else {
            warn!(user_id = %session.user_id, "transcription came back empty");
            return Err(CoreError::InvalidRequest(
                "Não foi possível entender o áudio".to_string(),
            ));
        };

        let recipes = self
            .suggest(GenerateRecipesInput {
                ingredients: Some(ingredients.clone()),
                image: None,
            })
            .await?;

        Ok(AudioSuggestions {
            transcript: ingredients,
            recipes,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::domain::{
        account::entities::{SubscriptionStatus, UserAccount},
        common::services::test_support::{Mocks, session},
        suggestion::entities::ImageReference,
    };

    const REPLY: &str = r#"Aqui estão as receitas:
```json
[
  {"nome": "Bolo de banana", "ingredientes": ["banana", "ovos"], "modo_preparo": ["Misture", "Asse"], "tempo_preparo": "40 minutos", "dificuldade": "Fácil"},
  {"nome": "Vitamina", "ingredientes": "banana, leite", "modo_preparo": "Bata tudo"},
  {"descricao": "sem nome"}
]
```"#;

    fn clip() -> AudioClip {
        AudioClip {
            file_name: "audio.webm".into(),
            mime_type: "audio/webm".into(),
            data: vec![1, 2, 3],
        }
    }

    fn account(status: SubscriptionStatus, started: chrono::DateTime<Utc>) -> UserAccount {
        let mut account =
            UserAccount::new_trial(session().user_id, "c@example.com".into(), "C".into(), started);
        account.subscription_status = status;
        account
    }

    #[tokio::test]
    async fn generates_tagged_recipes_from_text() {
        let mut mocks = Mocks::new();
        mocks
            .completion
            .expect_complete()
            .withf(|request| {
                request.prompt.contains("banana, ovos") && request.temperature == Some(0.8)
            })
            .times(1)
            .returning(|_| Box::pin(async move { Ok(REPLY.to_string()) }));

        let recipes = mocks
            .into_service()
            .generate_recipes(GenerateRecipesInput {
                ingredients: Some("banana, ovos".into()),
                image: None,
            })
            .await
            .unwrap();

        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].steps, vec!["Misture", "Asse"]);
        assert_eq!(recipes[1].ingredients, vec!["banana, leite"]);
        assert!(recipes[0]
            .image
            .as_deref()
            .unwrap()
            .contains("photo-1578985545062-69928b1d9587"));
        assert!(recipes.iter().all(|r| r.image.is_some()));
    }

    #[tokio::test]
    async fn image_request_carries_the_image() {
        let mut mocks = Mocks::new();
        mocks
            .completion
            .expect_complete()
            .withf(|request| {
                request.image == Some(ImageReference::Url("https://cdn/foto.jpg".into()))
                    && request.system_instruction.is_none()
            })
            .returning(|_| Box::pin(async move { Ok(REPLY.to_string()) }));

        let recipes = mocks
            .into_service()
            .generate_recipes(GenerateRecipesInput {
                ingredients: None,
                image: Some(ImageReference::Url("https://cdn/foto.jpg".into())),
            })
            .await
            .unwrap();

        assert_eq!(recipes.len(), 2);
    }

    #[tokio::test]
    async fn invalid_request_makes_no_outbound_call() {
        let mut mocks = Mocks::new();
        mocks.completion.expect_complete().never();

        let result = mocks
            .into_service()
            .generate_recipes(GenerateRecipesInput {
                ingredients: Some("  ".into()),
                image: None,
            })
            .await;

        assert!(matches!(result, Err(CoreError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn unparseable_reply_yields_no_recipes() {
        let mut mocks = Mocks::new();
        mocks
            .completion
            .expect_complete()
            .returning(|_| Box::pin(async move { Ok("Desculpe, não entendi.".to_string()) }));

        let recipes = mocks
            .into_service()
            .generate_recipes(GenerateRecipesInput {
                ingredients: Some("arroz".into()),
                image: None,
            })
            .await
            .unwrap();

        assert!(recipes.is_empty());
    }

    #[tokio::test]
    async fn upstream_failure_is_propagated() {
        let mut mocks = Mocks::new();
        mocks.completion.expect_complete().returning(|_| {
            Box::pin(async move { Err(CoreError::UpstreamError("503".to_string())) })
        });

        let result = mocks
            .into_service()
            .generate_recipes(GenerateRecipesInput {
                ingredients: Some("arroz".into()),
                image: None,
            })
            .await;

        assert_eq!(result, Err(CoreError::UpstreamError("503".to_string())));
    }

    #[tokio::test]
    async fn audio_is_transcribed_then_generated() {
        let mut mocks = Mocks::new();
        let premium = account(SubscriptionStatus::Premium, Utc::now());
        mocks.accounts.expect_get_by_id().returning(move |_| {
            let premium = premium.clone();
            Box::pin(async move { Ok(Some(premium)) })
        });
        mocks
            .completion
            .expect_transcribe()
            .times(1)
            .returning(|_| Box::pin(async move { Ok(" banana e ovos ".to_string()) }));
        mocks
            .completion
            .expect_complete()
            .withf(|request| request.prompt.contains("banana e ovos"))
            .times(1)
            .returning(|_| Box::pin(async move { Ok(REPLY.to_string()) }));

        let result = mocks
            .into_service()
            .generate_recipes_from_audio(session(), clip())
            .await
            .unwrap();

        assert_eq!(result.transcript, "banana e ovos");
        assert_eq!(result.recipes.len(), 2);
    }

    #[tokio::test]
    async fn expired_trial_cannot_use_audio() {
        let mut mocks = Mocks::new();
        let expired = account(SubscriptionStatus::Trial, Utc::now() - Duration::days(4));
        mocks.accounts.expect_get_by_id().returning(move |_| {
            let expired = expired.clone();
            Box::pin(async move { Ok(Some(expired)) })
        });
        mocks.completion.expect_transcribe().never();
        mocks.completion.expect_complete().never();

        let result = mocks
            .into_service()
            .generate_recipes_from_audio(session(), clip())
            .await;

        assert!(matches!(result, Err(CoreError::Forbidden(_))));
    }
}

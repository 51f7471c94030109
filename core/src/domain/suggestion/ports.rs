use crate::domain::{
    authentication::entities::Session,
    common::entities::app_errors::CoreError,
    suggestion::{
        entities::{AudioClip, AudioSuggestions, CompletionRequest, RecipeSuggestion},
        value_objects::GenerateRecipesInput,
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait RecipeSuggestionService: Send + Sync {
    fn generate_recipes(
        &self,
        input: GenerateRecipesInput,
    ) -> impl Future<Output = Result<Vec<RecipeSuggestion>, CoreError>> + Send;

    /// Premium only: transcribes the clip and generates from the transcript.
    fn generate_recipes_from_audio(
        &self,
        session: Session,
        clip: AudioClip,
    ) -> impl Future<Output = Result<AudioSuggestions, CoreError>> + Send;
}

/// Outbound chat-completion API. One call per invocation, no retry.
#[cfg_attr(test, mockall::automock)]
pub trait CompletionClient: Send + Sync {
    /// Returns the raw text of the first choice.
    fn complete(
        &self,
        request: CompletionRequest,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn transcribe(&self, clip: AudioClip)
    -> impl Future<Output = Result<String, CoreError>> + Send;
}

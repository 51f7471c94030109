use crate::{
    domain::common::{TemaiConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{
        account::repositories::user_account_repository::PostgresUserAccountRepository,
        badge::repositories::badge_repository::PostgresBadgeRepository,
        db::postgres::Postgres,
        health::repositories::health_check_repository::PostgresHealthCheckRepository,
        identity::supabase_auth::SupabaseIdentityProvider,
        library::repositories::library_recipe_repository::PostgresLibraryRecipeRepository,
        llm::openai_client::OpenAiCompletionClient,
        object_storage::minio::MinioObjectStorage,
        user_recipe::repositories::user_recipe_repository::PostgresUserRecipeRepository,
    },
};

pub type TemaiService = Service<
    PostgresLibraryRecipeRepository,
    PostgresUserRecipeRepository,
    PostgresUserAccountRepository,
    PostgresBadgeRepository,
    OpenAiCompletionClient,
    SupabaseIdentityProvider,
    MinioObjectStorage,
    PostgresHealthCheckRepository,
>;

pub async fn create_service(config: TemaiConfig) -> Result<TemaiService, CoreError> {
    let postgres = Postgres::new(&config.database).await.map_err(|e| {
        tracing::error!("Failed to initialize database: {}", e);
        CoreError::StorageError(e.to_string())
    })?;
    let db = postgres.get_db();

    let object_storage = MinioObjectStorage::new(&config.object_storage);
    if let Err(e) = object_storage.ensure_bucket().await {
        tracing::warn!("Photo bucket is not ready, uploads will fail until it is: {}", e);
    }

    Ok(Service::new(
        PostgresLibraryRecipeRepository::new(db.clone()),
        PostgresUserRecipeRepository::new(db.clone()),
        PostgresUserAccountRepository::new(db.clone()),
        PostgresBadgeRepository::new(db.clone()),
        OpenAiCompletionClient::new(&config.completion)?,
        SupabaseIdentityProvider::new(&config.identity)?,
        object_storage,
        PostgresHealthCheckRepository::new(db),
    ))
}

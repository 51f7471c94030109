use std::time::Duration;

use tracing::info;

use crate::domain::{
    account::ports::UserAccountRepository,
    authentication::{entities::Session, ports::IdentityProvider},
    badge::ports::BadgeRepository,
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    library::ports::LibraryRecipeRepository,
    photo::{
        entities::UploadedPhoto,
        ports::{ObjectStoragePort, PhotoService},
        value_objects::UploadPhotoInput,
    },
    suggestion::ports::CompletionClient,
    user_recipe::ports::UserRecipeRepository,
};

/// Presigned download URLs stay valid for a week.
pub const PHOTO_URL_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

impl<L, UR, A, B, C, I, O, HC> PhotoService for Service<L, UR, A, B, C, I, O, HC>
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
    async fn upload_photo(
        &self,
        session: Session,
        input: UploadPhotoInput,
    ) -> Result<UploadedPhoto, CoreError> {
        input.validate()?;

        let bucket = self.object_storage.bucket_name();
        let object_key = input.object_key(session.user_id);

        self.object_storage
            .put_object(&bucket, &object_key, input.data, &input.mime_type)
            .await?;

        let presigned = self
            .object_storage
            .presign_get_url(&bucket, &object_key, PHOTO_URL_TTL)
            .await?;

        info!(user_id = %session.user_id, object_key = %object_key, "photo uploaded");

        Ok(UploadedPhoto {
            object_key,
            url: presigned.url,
            expires_in_seconds: presigned.expires_in_seconds,
        })
    }
}

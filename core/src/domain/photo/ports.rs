use std::time::Duration;

use bytes::Bytes;

use crate::domain::{
    authentication::entities::Session,
    common::entities::app_errors::CoreError,
    photo::{
        entities::{PresignedUrl, UploadedPhoto},
        value_objects::UploadPhotoInput,
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait PhotoService: Send + Sync {
    /// Stores the image and returns a time-limited download URL.
    fn upload_photo(
        &self,
        session: Session,
        input: UploadPhotoInput,
    ) -> impl Future<Output = Result<UploadedPhoto, CoreError>> + Send;
}

/// Port for object storage operations (MinIO/S3)
#[cfg_attr(test, mockall::automock)]
pub trait ObjectStoragePort: Send + Sync {
    /// Bucket holding user photos
    fn bucket_name(&self) -> String;

    fn put_object(
        &self,
        bucket: &str,
        object_key: &str,
        payload: Bytes,
        content_type: &str,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn presign_get_url(
        &self,
        bucket: &str,
        object_key: &str,
        expires_in: Duration,
    ) -> impl Future<Output = Result<PresignedUrl, CoreError>> + Send;
}

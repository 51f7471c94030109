use bytes::Bytes;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::domain::common::entities::app_errors::CoreError;

pub const MAX_PHOTO_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPhotoInput {
    pub file_name: Option<String>,
    pub mime_type: String,
    pub data: Bytes,
}

impl UploadPhotoInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.mime_type.starts_with("image/") {
            return Err(CoreError::InvalidRequest(format!(
                "unsupported content type: {}",
                self.mime_type
            )));
        }
        if self.data.is_empty() {
            return Err(CoreError::InvalidRequest("empty upload".to_string()));
        }
        if self.data.len() > MAX_PHOTO_BYTES {
            return Err(CoreError::PayloadTooLarge(MAX_PHOTO_BYTES));
        }
        Ok(())
    }

    /// Content-addressed key under the owner's prefix.
    pub fn object_key(&self, owner_id: Uuid) -> String {
        let digest = Sha256::digest(&self.data);
        format!("{}/{}.{}", owner_id, hex::encode(digest), self.extension())
    }

    fn extension(&self) -> String {
        let subtype = self
            .mime_type
            .split_once('/')
            .map(|(_, sub)| sub.split(';').next().unwrap_or(sub).trim())
            .unwrap_or_default();

        match subtype {
            "jpeg" | "pjpeg" => "jpg".to_string(),
            "svg+xml" => "svg".to_string(),
            sub if !sub.is_empty() && sub.chars().all(|c| c.is_ascii_alphanumeric()) => {
                sub.to_string()
            }
            _ => self
                .file_name
                .as_deref()
                .and_then(|name| name.rsplit_once('.'))
                .map(|(_, ext)| ext.to_ascii_lowercase())
                .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
                .unwrap_or_else(|| "bin".to_string()),
        }
    }
}

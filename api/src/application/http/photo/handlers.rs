pub mod upload_photo;

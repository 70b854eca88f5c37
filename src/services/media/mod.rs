pub mod cloudinary_service;
#[cfg(test)]
pub mod recording_uploader;

pub use cloudinary_service::{CloudinaryUploader, MediaUploader};

//! 미디어 업로드(Cloudinary) 설정

use std::env;

pub struct CloudinaryConfig;

impl CloudinaryConfig {
    pub fn cloud_name() -> String {
        env::var("CLOUDINARY_CLOUD_NAME")
            .expect("CLOUDINARY_CLOUD_NAME must be set")
    }

    pub fn api_key() -> String {
        env::var("CLOUDINARY_API_KEY")
            .expect("CLOUDINARY_API_KEY must be set")
    }

    pub fn api_secret() -> String {
        env::var("CLOUDINARY_API_SECRET")
            .expect("CLOUDINARY_API_SECRET must be set")
    }

    /// 업로드 대상 폴더 (선택사항)
    pub fn folder() -> Option<String> {
        env::var("CLOUDINARY_FOLDER")
            .ok()
            .filter(|folder| !folder.trim().is_empty())
    }

    pub fn api_base() -> String {
        env::var("CLOUDINARY_API_BASE")
            .unwrap_or_else(|_| "https://api.cloudinary.com".to_string())
    }
}

//! # 미디어 업로드 서비스
//!
//! 업로드 대기 파일([`StagedFile`])을 Cloudinary에 서명 업로드합니다.
//!
//! ## 업로드 요청
//!
//! ```text
//! POST {CLOUDINARY_API_BASE}/v1_1/{cloud_name}/auto/upload
//! multipart: file, api_key, timestamp, [folder], signature
//! ```
//!
//! `signature`는 서명 대상 파라미터를 이름순으로 `key=value`로 이어 붙이고
//! `&`로 연결한 문자열 뒤에 API secret을 붙여 SHA-1 16진수로 계산합니다.
//!
//! 업로더는 `StagedFile`을 소유권째 받으므로, 업로드 결과와 무관하게
//! 함수가 끝나면 임시 파일이 삭제됩니다.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha1::{Digest, Sha1};
use crate::{
    config::CloudinaryConfig,
    core::{AppError, AppResult, ErrorContext},
    domain::models::media::{StagedFile, UploadedMedia},
};

/// 미디어 업로드 trait
///
/// 구현체는 전달받은 파일을 업로드 후 (성공/실패 모두) 삭제합니다.
#[async_trait]
pub trait MediaUploader: Send + Sync {
    async fn upload(&self, file: StagedFile) -> AppResult<UploadedMedia>;
}

/// Cloudinary 업로드 응답 중 사용하는 필드
#[derive(Debug, Deserialize)]
struct CloudinaryUploadResponse {
    secure_url: Option<String>,
    url: Option<String>,
    public_id: Option<String>,
}

/// Cloudinary 서명 업로드 클라이언트
pub struct CloudinaryUploader {
    client: reqwest::Client,
    api_base: String,
    cloud_name: String,
    api_key: String,
    api_secret: String,
    folder: Option<String>,
}

impl CloudinaryUploader {
    pub fn new(
        api_base: String,
        cloud_name: String,
        api_key: String,
        api_secret: String,
        folder: Option<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
            cloud_name,
            api_key,
            api_secret,
            folder,
        }
    }

    /// 환경 변수 설정으로 업로더를 생성합니다.
    pub fn from_config() -> Self {
        Self::new(
            CloudinaryConfig::api_base(),
            CloudinaryConfig::cloud_name(),
            CloudinaryConfig::api_key(),
            CloudinaryConfig::api_secret(),
            CloudinaryConfig::folder(),
        )
    }

    fn upload_url(&self) -> String {
        format!("{}/v1_1/{}/auto/upload", self.api_base, self.cloud_name)
    }

    /// 업로드 파라미터 서명
    pub fn sign(params: &[(&str, String)], api_secret: &str) -> String {
        let mut sorted: Vec<&(&str, String)> = params.iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(b.0));

        let to_sign = sorted
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("&");

        let mut hasher = Sha1::new();
        hasher.update(to_sign.as_bytes());
        hasher.update(api_secret.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

#[async_trait]
impl MediaUploader for CloudinaryUploader {
    async fn upload(&self, file: StagedFile) -> AppResult<UploadedMedia> {
        let bytes = tokio::fs::read(file.path())
            .await
            .with_context(|| format!("업로드 파일 읽기 실패 ({})", file.file_name()))?;

        let mut part = Part::bytes(bytes).file_name(file.file_name().to_string());
        if let Some(content_type) = file.content_type() {
            part = part
                .mime_str(content_type)
                .map_err(|e| AppError::ValidationError(format!("잘못된 파일 형식입니다: {}", e)))?;
        }

        let mut params = vec![("timestamp", Utc::now().timestamp().to_string())];
        if let Some(folder) = &self.folder {
            params.push(("folder", folder.clone()));
        }
        let signature = Self::sign(&params, &self.api_secret);

        let mut form = Form::new()
            .part("file", part)
            .text("api_key", self.api_key.clone())
            .text("signature", signature);
        for (key, value) in params {
            form = form.text(key, value);
        }

        let response = self.client
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Cloudinary 업로드 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Cloudinary 업로드 실패: {}", error_text
            )));
        }

        let uploaded = response
            .json::<CloudinaryUploadResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Cloudinary 응답 파싱 실패: {}", e)))?;

        let url = uploaded.secure_url
            .or(uploaded.url)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| AppError::ExternalServiceError("Cloudinary 응답에 URL이 없습니다".to_string()))?;

        log::debug!(
            "미디어 업로드 완료: {} (public_id: {}, {} bytes)",
            url,
            uploaded.public_id.as_deref().unwrap_or("-"),
            file.size()
        );

        Ok(UploadedMedia { url })
    }
}

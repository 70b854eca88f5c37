//! 테스트용 업로더
//!
//! 업로드 요청을 기록하고, 지정한 파일 이름은 실패시킵니다.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Mutex;
use async_trait::async_trait;
use crate::core::{AppError, AppResult};
use crate::domain::models::media::{StagedFile, UploadedMedia};
use crate::services::media::MediaUploader;

#[derive(Default)]
pub struct RecordingUploader {
    uploads: Mutex<Vec<(String, PathBuf)>>,
    failing: HashSet<String>,
}

impl RecordingUploader {
    pub fn new() -> Self {
        Self::default()
    }

    /// 주어진 파일 이름의 업로드를 실패시킵니다.
    pub fn failing_for(names: &[&str]) -> Self {
        Self {
            uploads: Mutex::new(Vec::new()),
            failing: names.iter().map(|name| name.to_string()).collect(),
        }
    }

    pub fn url_for(file_name: &str) -> String {
        format!("https://media.test/{}", file_name)
    }

    /// 업로드 시도된 파일 이름 (순서대로)
    pub fn uploaded_names(&self) -> Vec<String> {
        self.uploads.lock().unwrap().iter().map(|(name, _)| name.clone()).collect()
    }

    /// 업로드 시도된 임시 파일 경로
    pub fn uploaded_paths(&self) -> Vec<PathBuf> {
        self.uploads.lock().unwrap().iter().map(|(_, path)| path.clone()).collect()
    }
}

#[async_trait]
impl MediaUploader for RecordingUploader {
    async fn upload(&self, file: StagedFile) -> AppResult<UploadedMedia> {
        let name = file.file_name().to_string();
        self.uploads.lock().unwrap().push((name.clone(), file.path().to_path_buf()));

        if self.failing.contains(&name) {
            return Err(AppError::ExternalServiceError(format!("upload rejected: {}", name)));
        }

        Ok(UploadedMedia {
            url: Self::url_for(&name),
        })
    }
}

//! 업로드 대기 중인 임시 파일과 업로드 결과
//!
//! multipart 요청의 파일 파트는 임시 파일로 저장된 뒤 [`StagedFile`]로 감싸집니다.
//! `StagedFile`은 임시 파일을 소유하며, 값이 drop되는 순간 디스크에서 삭제됩니다.
//! 업로더는 파일을 소비(move)하므로 업로드 성공/실패와 무관하게 파일이 정리되고,
//! 업로드 전에 요청이 실패해도 폼이 drop되면서 같은 방식으로 정리됩니다.

use std::path::Path;
use actix_multipart::form::tempfile::TempFile;
use tempfile::NamedTempFile;
use crate::core::{AppError, AppResult};

/// 업로드 대기 중인 임시 파일
#[derive(Debug)]
pub struct StagedFile {
    file: NamedTempFile,
    file_name: Option<String>,
    content_type: Option<String>,
    size: usize,
}

impl StagedFile {
    pub fn new(
        file: NamedTempFile,
        file_name: Option<String>,
        content_type: Option<String>,
        size: usize,
    ) -> Self {
        Self {
            file,
            file_name,
            content_type,
            size,
        }
    }

    /// multipart 파일 파트를 업로드 대기 파일로 변환합니다.
    ///
    /// 빈 파일 파트(브라우저가 파일 선택 없이 보낸 파트)는 `None`으로 취급하고,
    /// `max_size` 바이트를 넘는 파일은 `ValidationError`로 거부합니다.
    /// 거부된 임시 파일은 drop되면서 삭제됩니다.
    pub fn from_temp_file(temp: TempFile, field: &str, max_size: usize) -> AppResult<Option<Self>> {
        if temp.size == 0 {
            return Ok(None);
        }

        if temp.size > max_size {
            return Err(AppError::ValidationError(format!(
                "{} 파일은 최대 {}MB까지 업로드할 수 있습니다",
                field,
                max_size / (1024 * 1024)
            )));
        }

        Ok(Some(Self::new(
            temp.file,
            temp.file_name,
            temp.content_type.map(|mime| mime.to_string()),
            temp.size,
        )))
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// 원본 파일 이름 (없으면 "upload")
    pub fn file_name(&self) -> &str {
        self.file_name.as_deref().unwrap_or("upload")
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

/// 업로드가 완료된 미디어
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedMedia {
    /// 영구 접근 URL
    pub url: String,
}

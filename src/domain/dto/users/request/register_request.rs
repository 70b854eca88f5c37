//! # 회원가입 요청 DTO
//!
//! 회원가입은 `multipart/form-data`로 요청됩니다.
//!
//! | 파트 | 종류 | 필수 |
//! |------|------|------|
//! | `fullName` | 텍스트 | ✅ |
//! | `email` | 텍스트 | ✅ |
//! | `username` | 텍스트 | ✅ |
//! | `password` | 텍스트 | ✅ |
//! | `avatar` | 파일 | ✅ |
//! | `coverImage` | 파일 | ❌ |
//!
//! 텍스트 파트가 빠져도 추출 단계에서는 실패하지 않고 빈 문자열로 변환되며,
//! 필수 여부 검증은 서비스 계층에서 필드 순서대로 수행됩니다.
//! 파일 파트는 임시 파일로 저장된 뒤 [`StagedFile`]로 감싸지며,
//! 파일 하나의 크기 제한(`UPLOAD_MAX_FILE_SIZE_MB`)은 이 변환 단계에서 검사합니다.

use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};
use crate::core::AppResult;
use crate::domain::models::media::StagedFile;

/// multipart 회원가입 폼
#[derive(MultipartForm)]
pub struct RegisterUserForm {
    #[multipart(rename = "fullName")]
    pub full_name: Option<Text<String>>,
    pub email: Option<Text<String>>,
    pub username: Option<Text<String>>,
    pub password: Option<Text<String>>,
    pub avatar: Option<TempFile>,
    #[multipart(rename = "coverImage")]
    pub cover_image: Option<TempFile>,
}

/// 회원가입 요청
///
/// 비밀번호를 포함하므로 `Debug`를 구현하지 않습니다.
pub struct RegisterUserRequest {
    pub full_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub avatar: Option<StagedFile>,
    pub cover_image: Option<StagedFile>,
}

impl RegisterUserRequest {
    /// multipart 폼을 요청으로 변환합니다.
    ///
    /// 파일 하나가 `max_file_size` 바이트를 넘으면 `ValidationError`입니다.
    pub fn from_form(form: RegisterUserForm, max_file_size: usize) -> AppResult<Self> {
        let text = |field: Option<Text<String>>| field.map(|t| t.into_inner()).unwrap_or_default();

        let avatar = form.avatar
            .map(|file| StagedFile::from_temp_file(file, "avatar", max_file_size))
            .transpose()?
            .flatten();
        let cover_image = form.cover_image
            .map(|file| StagedFile::from_temp_file(file, "coverImage", max_file_size))
            .transpose()?
            .flatten();

        Ok(Self {
            full_name: text(form.full_name),
            email: text(form.email),
            username: text(form.username),
            password: text(form.password),
            avatar,
            cover_image,
        })
    }
}

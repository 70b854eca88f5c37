//! 인증 요청관련 DTO
//!
//! 로그인과 토큰 갱신 요청 정보를 매핑합니다.
use serde::Deserialize;
use validator::{Validate, ValidationError};
use crate::utils::string_utils::deserialize_optional_string;

/// 로그인 요청 구조체
///
/// 사용자명 또는 이메일 중 하나는 반드시 있어야 합니다.
/// 공백뿐인 사용자명/이메일은 역직렬화 단계에서 `None`으로 정리됩니다.
#[derive(Deserialize, Validate)]
#[validate(schema(function = "validate_login_identifier"))]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub username: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub email: Option<String>,

    #[validate(
        required(message = "비밀번호를 입력해주세요"),
        length(min = 1, message = "비밀번호를 입력해주세요")
    )]
    pub password: Option<String>,
}

fn validate_login_identifier(req: &LoginRequest) -> Result<(), ValidationError> {
    if req.username.is_none() && req.email.is_none() {
        return Err(ValidationError::new("identifier_required")
            .with_message("사용자명 또는 이메일을 입력해주세요".into()));
    }
    Ok(())
}

/// 리프레시 토큰 요청 구조체
///
/// 쿠키에 리프레시 토큰이 없을 때 본문으로 전달할 수 있습니다.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub refresh_token: Option<String>,
}

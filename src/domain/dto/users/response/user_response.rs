use serde::Serialize;
use crate::domain::entities::users::UserProfile;

/// 사용자 응답 DTO
///
/// 클라이언트에 노출되는 유일한 사용자 표현입니다.
/// 비밀번호와 리프레시 토큰 필드는 존재하지 않습니다.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub avatar: String,
    pub cover_image: String,
    /// RFC 3339
    pub created_at: String,
    pub updated_at: String,
}

impl From<UserProfile> for UserResponse {
    fn from(profile: UserProfile) -> Self {
        let UserProfile {
            id,
            username,
            email,
            full_name,
            avatar,
            cover_image,
            created_at,
            updated_at,
        } = profile;

        Self {
            id: id.to_hex(),
            username,
            email,
            full_name,
            avatar,
            cover_image,
            created_at: created_at.try_to_rfc3339_string().unwrap_or_default(),
            updated_at: updated_at.try_to_rfc3339_string().unwrap_or_default(),
        }
    }
}

/// 로그인 응답 DTO (JWT 토큰 포함)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub refresh_token: String,
}

//! User Entity Implementation
//!
//! `users` 컬렉션 문서와 1:1로 대응되는 사용자 엔티티와,
//! 비밀번호/리프레시 토큰을 제외한 공개 프로젝션을 정의합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// MongoDB 문서 필드명은 camelCase를 사용합니다.
/// 이 타입은 비밀번호 해시와 리프레시 토큰을 포함하므로 클라이언트 응답에
/// 직접 사용하지 않습니다. 응답에는 [`UserProfile`]을 사용합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자명 (unique, 소문자로 저장)
    pub username: String,
    /// 이메일 (unique)
    pub email: String,
    /// 표시 이름
    pub full_name: String,
    /// bcrypt 해시된 비밀번호
    pub password: String,
    /// 아바타 이미지 URL (필수)
    pub avatar: String,
    /// 커버 이미지 URL (없으면 빈 문자열)
    #[serde(default)]
    pub cover_image: String,
    /// 현재 리프레시 토큰 (세션이 없으면 필드 자체가 없음)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 생성
    ///
    /// 사용자명은 소문자로 정규화되고, 커버 이미지가 없으면 빈 문자열로 저장됩니다.
    pub fn new(
        full_name: String,
        email: String,
        username: &str,
        password_hash: String,
        avatar: String,
        cover_image: Option<String>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            username: username.to_lowercase(),
            email,
            full_name,
            password: password_hash,
            avatar,
            cover_image: cover_image.unwrap_or_default(),
            refresh_token: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

/// 사용자 공개 프로젝션
///
/// `password`, `refreshToken` 필드를 제외한 사용자 문서입니다.
/// 저장소는 이 타입으로 역직렬화할 때 두 필드를 프로젝션에서 제외합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub avatar: String,
    #[serde(default)]
    pub cover_image: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl UserProfile {
    /// 저장된 사용자에서 공개 프로젝션을 만듭니다.
    ///
    /// ID가 없는 (아직 저장되지 않은) 사용자는 `None`을 반환합니다.
    pub fn from_user(user: &User) -> Option<Self> {
        Some(Self {
            id: user.id?,
            username: user.username.clone(),
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            avatar: user.avatar.clone(),
            cover_image: user.cover_image.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        })
    }
}

//! # 사용자 리포지토리 구현
//!
//! `users` 컬렉션에 대한 MongoDB 기반 [`UserStore`] 구현입니다.
//!
//! ## 인덱스
//!
//! | 이름 | 키 | 옵션 |
//! |------|----|------|
//! | `email_unique` | `email` | unique |
//! | `username_unique` | `username` | unique |
//! | `created_at_desc` | `createdAt: -1` | |
//!
//! 유니크 인덱스 위반(E11000)은 `ConflictError`로 변환되므로,
//! 중복 검사와 생성 사이에 끼어든 동시 가입도 409로 응답됩니다.

use std::sync::Arc;
use async_trait::async_trait;
use log::debug;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime, Document},
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};
use crate::{
    core::{AppError, AppResult},
    db::Database,
    domain::entities::users::{User, UserProfile},
    repositories::users::UserStore,
};

const COLLECTION_NAME: &str = "users";
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 사용자 데이터 액세스 리포지토리
///
/// ```rust,ignore
/// let database = Arc::new(Database::new().await?);
/// let repo = UserRepository::new(database);
/// repo.create_indexes().await?;
///
/// let user = repo.find_by_username_or_email(Some("ab"), None).await?;
/// ```
pub struct UserRepository {
    db: Arc<Database>,
}

impl UserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection<T: Send + Sync>(&self) -> Collection<T> {
        self.db.get_database().collection::<T>(COLLECTION_NAME)
    }

    /// 공개 프로젝션에서 제외할 필드
    fn profile_projection() -> Document {
        doc! { "password": 0, "refreshToken": 0 }
    }

    /// 유니크 인덱스를 생성합니다. 서버 시작 시 한 번 호출됩니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let collection = self.collection::<User>();

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "createdAt": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        collection
            .create_indexes([email_index, username_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

/// MongoDB 쓰기 에러가 유니크 인덱스 위반인지 확인합니다.
fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == DUPLICATE_KEY_CODE,
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

/// 사용자명/이메일 OR 조회 필터
///
/// 조건이 하나도 없으면 `None`을 반환합니다.
fn identity_filter(username: Option<&str>, email: Option<&str>) -> Option<Document> {
    let mut conditions = Vec::new();

    if let Some(username) = username {
        conditions.push(doc! { "username": username.to_lowercase() });
    }
    if let Some(email) = email {
        conditions.push(doc! { "email": email });
    }

    if conditions.is_empty() {
        None
    } else {
        Some(doc! { "$or": conditions })
    }
}

/// 리프레시 토큰 갱신 문서
fn refresh_token_update(token: Option<&str>) -> Document {
    let now = DateTime::now();

    match token {
        Some(token) => doc! { "$set": { "refreshToken": token, "updatedAt": now } },
        None => doc! { "$unset": { "refreshToken": 1 }, "$set": { "updatedAt": now } },
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_username_or_email(
        &self,
        username: Option<&str>,
        email: Option<&str>,
    ) -> AppResult<Option<User>> {
        let Some(filter) = identity_filter(username, email) else {
            return Ok(None);
        };

        self.collection::<User>()
            .find_one(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        let result = self.collection::<User>()
            .insert_one(&user)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ConflictError("이미 존재하는 사용자명 또는 이메일입니다".to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        let id = result.inserted_id.as_object_id()
            .ok_or_else(|| AppError::InternalError("생성된 사용자 ID를 확인할 수 없습니다".to_string()))?;

        debug!("사용자 문서 생성: {}", id);
        user.id = Some(id);

        Ok(user)
    }

    async fn find_profile_by_id(&self, id: &ObjectId) -> AppResult<Option<UserProfile>> {
        self.collection::<UserProfile>()
            .find_one(doc! { "_id": *id })
            .projection(Self::profile_projection())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        self.collection::<User>()
            .find_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn set_refresh_token(&self, id: &ObjectId, token: Option<&str>) -> AppResult<()> {
        self.collection::<User>()
            .update_one(doc! { "_id": *id }, refresh_token_update(token))
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

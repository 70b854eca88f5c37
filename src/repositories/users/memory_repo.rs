//! 테스트용 메모리 사용자 저장소
//!
//! MongoDB 유니크 인덱스와 같은 규칙(사용자명, 이메일 유일성)을 적용합니다.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};
use crate::core::{AppError, AppResult};
use crate::domain::entities::users::{User, UserProfile};
use crate::repositories::users::UserStore;

#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
    hide_profiles: AtomicBool,
    blind_lookups: AtomicBool,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 이후 프로필 조회가 항상 `None`을 반환하도록 합니다.
    pub fn hide_profiles(&self) {
        self.hide_profiles.store(true, Ordering::SeqCst);
    }

    /// 이후 사용자명/이메일 조회가 항상 `None`을 반환하도록 합니다.
    ///
    /// 중복 검사를 통과한 뒤 생성 단계에서 유니크 제약에 걸리는 동시 가입을 재현합니다.
    pub fn blind_lookups(&self) {
        self.blind_lookups.store(true, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn find_by_username(&self, username: &str) -> Option<User> {
        self.users.lock().unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_username_or_email(
        &self,
        username: Option<&str>,
        email: Option<&str>,
    ) -> AppResult<Option<User>> {
        if self.blind_lookups.load(Ordering::SeqCst) {
            return Ok(None);
        }

        let username = username.map(str::to_lowercase);
        let users = self.users.lock().unwrap();

        Ok(users
            .iter()
            .find(|u| {
                username.as_deref() == Some(u.username.as_str()) || email == Some(u.email.as_str())
            })
            .cloned())
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();

        if users.iter().any(|u| u.username == user.username || u.email == user.email) {
            return Err(AppError::ConflictError("이미 존재하는 사용자명 또는 이메일입니다".to_string()));
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());

        Ok(user)
    }

    async fn find_profile_by_id(&self, id: &ObjectId) -> AppResult<Option<UserProfile>> {
        if self.hide_profiles.load(Ordering::SeqCst) {
            return Ok(None);
        }

        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .find(|u| u.id.as_ref() == Some(id))
            .and_then(UserProfile::from_user))
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id.as_ref() == Some(id)).cloned())
    }

    async fn set_refresh_token(&self, id: &ObjectId, token: Option<&str>) -> AppResult<()> {
        let mut users = self.users.lock().unwrap();

        if let Some(user) = users.iter_mut().find(|u| u.id.as_ref() == Some(id)) {
            user.refresh_token = token.map(str::to_string);
            user.updated_at = DateTime::now();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(username: &str, email: &str) -> User {
        User::new(
            "A B".to_string(),
            email.to_string(),
            username,
            "hash".to_string(),
            "https://media.test/avatar.png".to_string(),
            None,
        )
    }

    #[actix_web::test]
    async fn test_create_enforces_uniqueness() {
        let store = InMemoryUserStore::new();
        store.create(user("AB", "a@b.com")).await.unwrap();

        let same_username = store.create(user("ab", "other@b.com")).await;
        assert!(matches!(same_username, Err(AppError::ConflictError(_))));

        let same_email = store.create(user("other", "a@b.com")).await;
        assert!(matches!(same_email, Err(AppError::ConflictError(_))));

        assert_eq!(store.len(), 1);
    }

    #[actix_web::test]
    async fn test_lookup_by_username_is_case_insensitive() {
        let store = InMemoryUserStore::new();
        store.create(user("ab", "a@b.com")).await.unwrap();

        let found = store.find_by_username_or_email(Some("AB"), None).await.unwrap();
        assert!(found.is_some());

        let missing = store.find_by_username_or_email(None, None).await.unwrap();
        assert!(missing.is_none());
    }

    #[actix_web::test]
    async fn test_refresh_token_set_and_clear() {
        let store = InMemoryUserStore::new();
        let id = store.create(user("ab", "a@b.com")).await.unwrap().id.unwrap();

        store.set_refresh_token(&id, Some("token")).await.unwrap();
        assert_eq!(store.find_by_id(&id).await.unwrap().unwrap().refresh_token.as_deref(), Some("token"));

        store.set_refresh_token(&id, None).await.unwrap();
        assert!(store.find_by_id(&id).await.unwrap().unwrap().refresh_token.is_none());
    }
}

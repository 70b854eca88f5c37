//! 사용자 영속성 인터페이스
//!
//! 서비스 계층은 구체 저장소가 아니라 이 trait에 의존합니다.
//! 운영 환경에서는 [`UserRepository`](super::UserRepository)(MongoDB)가,
//! 테스트에서는 메모리 저장소가 주입됩니다.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::core::AppResult;
use crate::domain::entities::users::{User, UserProfile};

/// 사용자 저장소 trait
///
/// 구현체는 사용자명과 이메일의 유일성을 보장해야 하며,
/// 유일성 위반은 `AppError::ConflictError`로 보고합니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 사용자명 또는 이메일이 일치하는 사용자를 조회합니다.
    ///
    /// 두 값 중 `None`인 조건은 무시합니다. 둘 다 `None`이면 `Ok(None)`입니다.
    async fn find_by_username_or_email(
        &self,
        username: Option<&str>,
        email: Option<&str>,
    ) -> AppResult<Option<User>>;

    /// 새 사용자를 저장하고 ID가 채워진 사용자를 반환합니다.
    async fn create(&self, user: User) -> AppResult<User>;

    /// 비밀번호와 리프레시 토큰을 제외한 공개 프로젝션을 조회합니다.
    async fn find_profile_by_id(&self, id: &ObjectId) -> AppResult<Option<UserProfile>>;

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>>;

    /// 리프레시 토큰을 설정하거나 (`None`이면) 제거합니다.
    ///
    /// 사용자가 존재하지 않아도 에러가 아닙니다.
    async fn set_refresh_token(&self, id: &ObjectId, token: Option<&str>) -> AppResult<()>;
}

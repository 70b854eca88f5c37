//! # 사용자 계정 서비스 구현
//!
//! 회원가입, 로그인, 로그아웃, 토큰 갱신의 비즈니스 흐름을 담당합니다.
//! 저장소([`UserStore`])와 업로더([`MediaUploader`])는 trait 객체로 주입되므로
//! 테스트에서는 메모리 구현으로 교체됩니다.
//!
//! ## 회원가입 순서
//!
//! ```text
//! 1. 필수 필드 검증 (fullName → email → username → password)   400
//! 2. 사용자명/이메일 중복 검사                                   409
//! 3. 아바타 파일 존재 확인                                       400
//! 4. 아바타 업로드 (실패 시 400), 커버 이미지 업로드 (실패 허용)
//! 5. 비밀번호 해싱 후 저장 (유니크 인덱스 위반 시 409)
//! 6. 공개 프로젝션 재조회                                        500
//! ```
//!
//! 업로드는 중복 검사와 아바타 확인이 끝난 뒤에만 수행됩니다.
//! 중간에 실패하면 아직 업로드되지 않은 임시 파일은 drop되면서 삭제됩니다.

use std::sync::Arc;
use log::{info, warn};
use mongodb::bson::oid::ObjectId;
use validator::Validate;
use crate::{
    core::{AppError, AppResult},
    domain::{
        dto::users::request::{LoginRequest, RegisterUserRequest},
        entities::users::{User, UserProfile},
        models::media::StagedFile,
        models::token::TokenPair,
    },
    repositories::users::UserStore,
    services::{
        auth::{PasswordService, TokenService},
        media::MediaUploader,
    },
    utils::string_utils::{validate_required_fields, validate_required_string},
};

/// 로그인 결과
#[derive(Debug)]
pub struct LoginResult {
    pub user: UserProfile,
    pub tokens: TokenPair,
}

/// 사용자 계정 비즈니스 로직 서비스
pub struct UserService {
    store: Arc<dyn UserStore>,
    uploader: Arc<dyn MediaUploader>,
    passwords: PasswordService,
    tokens: Arc<TokenService>,
}

impl UserService {
    pub fn new(
        store: Arc<dyn UserStore>,
        uploader: Arc<dyn MediaUploader>,
        passwords: PasswordService,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            store,
            uploader,
            passwords,
            tokens,
        }
    }

    /// 회원가입
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 필수 필드 누락, 아바타 누락, 아바타 업로드 실패
    /// * `ConflictError` - 사용자명 또는 이메일 중복
    /// * `InternalError` - 생성 직후 재조회 실패
    pub async fn register(&self, request: RegisterUserRequest) -> AppResult<UserProfile> {
        let RegisterUserRequest {
            full_name,
            email,
            username,
            password,
            avatar,
            cover_image,
        } = request;

        let [full_name, email, username] = validate_required_fields([
            (full_name.as_str(), "fullName"),
            (email.as_str(), "email"),
            (username.as_str(), "username"),
        ])?;
        validate_required_string(&password, "password")?;
        let username = username.to_lowercase();

        if self.store
            .find_by_username_or_email(Some(&username), Some(&email))
            .await?
            .is_some()
        {
            return Err(AppError::ConflictError("이미 존재하는 사용자명 또는 이메일입니다".to_string()));
        }

        let avatar = avatar
            .ok_or_else(|| AppError::ValidationError("아바타 파일은 필수입니다".to_string()))?;

        let avatar = self.uploader.upload(avatar).await.map_err(|e| {
            warn!("아바타 업로드 실패 ({}): {}", username, e);
            AppError::ValidationError("아바타 업로드에 실패했습니다".to_string())
        })?;

        let cover_image = self.upload_optional(cover_image, &username).await;

        let password_hash = self.passwords.hash(&password).await?;
        let user = User::new(full_name, email, &username, password_hash, avatar.url, cover_image);

        let created = self.store.create(user).await?;
        let id = created.id
            .ok_or_else(|| AppError::InternalError("사용자 등록 중 오류가 발생했습니다".to_string()))?;

        let profile = self.store
            .find_profile_by_id(&id)
            .await?
            .ok_or_else(|| AppError::InternalError("사용자 등록 중 오류가 발생했습니다".to_string()))?;

        info!("회원가입 완료: {} ({})", profile.username, id);
        Ok(profile)
    }

    /// 선택 파일 업로드. 실패는 기록만 하고 `None`으로 처리합니다.
    async fn upload_optional(&self, file: Option<StagedFile>, username: &str) -> Option<String> {
        let file = file?;

        match self.uploader.upload(file).await {
            Ok(media) => Some(media.url),
            Err(e) => {
                warn!("커버 이미지 업로드 실패, 빈 값으로 저장합니다 ({}): {}", username, e);
                None
            }
        }
    }

    /// 로그인
    ///
    /// 사용자명(소문자 비교) 또는 이메일로 사용자를 찾고, 비밀번호가 일치하면
    /// 새 토큰 쌍을 발급하여 리프레시 토큰을 저장합니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 사용자명/이메일 또는 비밀번호 누락
    /// * `NotFound` - 사용자 없음
    /// * `AuthenticationError` - 비밀번호 불일치 (토큰은 변경되지 않음)
    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResult> {
        request.validate()?;

        let LoginRequest { username, email, password } = request;
        let password = password.unwrap_or_default();

        let user = self.store
            .find_by_username_or_email(username.as_deref(), email.as_deref())
            .await?
            .ok_or_else(|| AppError::NotFound("사용자가 존재하지 않습니다".to_string()))?;

        if !self.passwords.verify(&password, &user.password).await? {
            warn!("로그인 실패 (비밀번호 불일치): {}", user.username);
            return Err(AppError::AuthenticationError("비밀번호가 올바르지 않습니다".to_string()));
        }

        let id = user.id
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

        let tokens = self.tokens.generate_token_pair(&user)?;
        self.store.set_refresh_token(&id, Some(&tokens.refresh_token)).await?;

        let profile = self.store
            .find_profile_by_id(&id)
            .await?
            .ok_or_else(|| AppError::InternalError("사용자 정보를 불러오지 못했습니다".to_string()))?;

        info!("로그인 성공: {}", profile.username);
        Ok(LoginResult { user: profile, tokens })
    }

    /// 로그아웃
    ///
    /// 저장된 리프레시 토큰을 제거합니다. 세션이 없어도 성공합니다.
    pub async fn logout(&self, user_id: &str) -> AppResult<()> {
        let id = Self::parse_user_id(user_id)?;
        self.store.set_refresh_token(&id, None).await?;

        info!("로그아웃: {}", user_id);
        Ok(())
    }

    /// 리프레시 토큰으로 새 토큰 쌍을 발급합니다.
    ///
    /// 제시된 토큰은 저장된 토큰과 같아야 하며, 성공하면 저장된 토큰이 교체됩니다.
    pub async fn refresh_access_token(&self, refresh_token: Option<String>) -> AppResult<TokenPair> {
        let refresh_token = refresh_token
            .ok_or_else(|| AppError::AuthenticationError("리프레시 토큰이 없습니다".to_string()))?;

        let claims = self.tokens.verify_refresh_token(&refresh_token)?;
        let id = Self::parse_user_id(&claims.sub)?;

        let user = self.store
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::AuthenticationError("유효하지 않은 리프레시 토큰입니다".to_string()))?;

        if user.refresh_token.as_deref() != Some(refresh_token.as_str()) {
            warn!("저장된 토큰과 다른 리프레시 토큰 사용: {}", user.username);
            return Err(AppError::AuthenticationError(
                "리프레시 토큰이 만료되었거나 이미 사용되었습니다".to_string()
            ));
        }

        let tokens = self.tokens.generate_token_pair(&user)?;
        self.store.set_refresh_token(&id, Some(&tokens.refresh_token)).await?;

        info!("토큰 갱신: {}", user.username);
        Ok(tokens)
    }

    fn parse_user_id(user_id: &str) -> AppResult<ObjectId> {
        ObjectId::parse_str(user_id)
            .map_err(|_| AppError::AuthenticationError("유효하지 않은 사용자 ID입니다".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::users::memory_repo::InMemoryUserStore;
    use crate::services::media::recording_uploader::RecordingUploader;
    use crate::services::users::fixtures::{staged_file, test_token_service};

    struct Harness {
        service: UserService,
        store: Arc<InMemoryUserStore>,
        uploader: Arc<RecordingUploader>,
    }

    fn harness_with(uploader: RecordingUploader) -> Harness {
        let store = Arc::new(InMemoryUserStore::new());
        let uploader = Arc::new(uploader);
        let service = UserService::new(
            store.clone(),
            uploader.clone(),
            PasswordService::new(4),
            Arc::new(test_token_service()),
        );

        Harness { service, store, uploader }
    }

    fn harness() -> Harness {
        harness_with(RecordingUploader::new())
    }

    fn request(username: &str, email: &str) -> RegisterUserRequest {
        RegisterUserRequest {
            full_name: "A B".to_string(),
            email: email.to_string(),
            username: username.to_string(),
            password: "p1".to_string(),
            avatar: Some(staged_file("avatar.png")),
            cover_image: None,
        }
    }

    fn login_request(username: Option<&str>, email: Option<&str>, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.map(str::to_string),
            email: email.map(str::to_string),
            password: Some(password.to_string()),
        }
    }

    #[actix_web::test]
    async fn test_register_creates_lowercased_user() {
        let h = harness();

        let profile = h.service.register(request("AB", "a@b.com")).await.unwrap();

        assert_eq!(profile.username, "ab");
        assert_eq!(profile.avatar, RecordingUploader::url_for("avatar.png"));
        assert_eq!(profile.cover_image, "");

        let stored = h.store.find_by_username("ab").unwrap();
        assert_ne!(stored.password, "p1");
        assert!(stored.refresh_token.is_none());
    }

    #[actix_web::test]
    async fn test_register_trims_text_fields() {
        let h = harness();
        let mut req = request("  AB ", " a@b.com ");
        req.full_name = "  A B  ".to_string();

        let profile = h.service.register(req).await.unwrap();

        assert_eq!(profile.username, "ab");
        assert_eq!(profile.email, "a@b.com");
        assert_eq!(profile.full_name, "A B");
    }

    #[actix_web::test]
    async fn test_register_requires_every_text_field() {
        for field in ["fullName", "email", "username", "password"] {
            let h = harness();
            let mut req = request("ab", "a@b.com");
            match field {
                "fullName" => req.full_name = "   ".to_string(),
                "email" => req.email = String::new(),
                "username" => req.username = " ".to_string(),
                _ => req.password = String::new(),
            }

            let result = h.service.register(req).await;

            match result {
                Err(AppError::ValidationError(msg)) => assert!(msg.starts_with(field)),
                _ => panic!("Expected ValidationError for {}", field),
            }
            assert_eq!(h.store.len(), 0);
            assert!(h.uploader.uploaded_names().is_empty());
        }
    }

    #[actix_web::test]
    async fn test_register_duplicate_skips_upload() {
        let h = harness();
        h.service.register(request("ab", "a@b.com")).await.unwrap();

        let same_username = h.service.register(request("AB", "other@b.com")).await;
        assert!(matches!(same_username, Err(AppError::ConflictError(_))));

        let same_email = h.service.register(request("other", "a@b.com")).await;
        assert!(matches!(same_email, Err(AppError::ConflictError(_))));

        assert_eq!(h.store.len(), 1);
        assert_eq!(h.uploader.uploaded_names().len(), 1);
    }

    #[actix_web::test]
    async fn test_register_conflict_at_create_is_conflict_error() {
        let h = harness();
        h.service.register(request("ab", "a@b.com")).await.unwrap();
        h.store.blind_lookups();

        let result = h.service.register(request("AB", "other@b.com")).await;

        assert!(matches!(result, Err(AppError::ConflictError(_))));
        assert_eq!(h.store.len(), 1);
    }

    #[actix_web::test]
    async fn test_register_requires_avatar() {
        let h = harness();
        let cover = staged_file("cover.png");
        let cover_path = cover.path().to_path_buf();

        let mut req = request("ab", "a@b.com");
        req.avatar = None;
        req.cover_image = Some(cover);

        let result = h.service.register(req).await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert!(h.uploader.uploaded_names().is_empty());
        assert!(!cover_path.exists());
        assert_eq!(h.store.len(), 0);
    }

    #[actix_web::test]
    async fn test_register_avatar_upload_failure_is_validation_error() {
        let h = harness_with(RecordingUploader::failing_for(&["avatar.png"]));

        let result = h.service.register(request("ab", "a@b.com")).await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert_eq!(h.store.len(), 0);
    }

    #[actix_web::test]
    async fn test_register_tolerates_cover_upload_failure() {
        let h = harness_with(RecordingUploader::failing_for(&["cover.png"]));
        let mut req = request("ab", "a@b.com");
        req.cover_image = Some(staged_file("cover.png"));

        let profile = h.service.register(req).await.unwrap();

        assert_eq!(profile.cover_image, "");
        assert_eq!(h.uploader.uploaded_names(), vec!["avatar.png", "cover.png"]);
    }

    #[actix_web::test]
    async fn test_register_stores_cover_url() {
        let h = harness();
        let mut req = request("ab", "a@b.com");
        req.cover_image = Some(staged_file("cover.png"));

        let profile = h.service.register(req).await.unwrap();

        assert_eq!(profile.cover_image, RecordingUploader::url_for("cover.png"));
    }

    #[actix_web::test]
    async fn test_register_removes_staged_files() {
        let h = harness();
        let mut req = request("ab", "a@b.com");
        req.cover_image = Some(staged_file("cover.png"));

        h.service.register(req).await.unwrap();

        let paths = h.uploader.uploaded_paths();
        assert_eq!(paths.len(), 2);
        assert!(paths.iter().all(|path| !path.exists()));
    }

    #[actix_web::test]
    async fn test_register_fails_when_profile_missing() {
        let h = harness();
        h.store.hide_profiles();

        let result = h.service.register(request("ab", "a@b.com")).await;

        assert!(matches!(result, Err(AppError::InternalError(_))));
    }

    #[actix_web::test]
    async fn test_login_issues_and_persists_tokens() {
        let h = harness();
        h.service.register(request("ab", "a@b.com")).await.unwrap();

        let result = h.service.login(login_request(Some("AB"), None, "p1")).await.unwrap();

        assert_eq!(result.user.username, "ab");
        let stored = h.store.find_by_username("ab").unwrap();
        assert_eq!(stored.refresh_token.as_deref(), Some(result.tokens.refresh_token.as_str()));

        let claims = test_token_service().verify_access_token(&result.tokens.access_token).unwrap();
        assert_eq!(claims.sub, result.user.id.to_hex());
    }

    #[actix_web::test]
    async fn test_login_by_email() {
        let h = harness();
        h.service.register(request("ab", "a@b.com")).await.unwrap();

        assert!(h.service.login(login_request(None, Some("a@b.com"), "p1")).await.is_ok());
    }

    #[actix_web::test]
    async fn test_login_wrong_password_keeps_token() {
        let h = harness();
        h.service.register(request("ab", "a@b.com")).await.unwrap();
        let first = h.service.login(login_request(Some("ab"), None, "p1")).await.unwrap();

        let result = h.service.login(login_request(Some("ab"), None, "wrong")).await;

        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
        let stored = h.store.find_by_username("ab").unwrap();
        assert_eq!(stored.refresh_token.as_deref(), Some(first.tokens.refresh_token.as_str()));
    }

    #[actix_web::test]
    async fn test_login_unknown_user_and_missing_identifier() {
        let h = harness();

        let unknown = h.service.login(login_request(Some("nobody"), None, "p1")).await;
        assert!(matches!(unknown, Err(AppError::NotFound(_))));

        let missing = h.service.login(login_request(None, None, "p1")).await;
        assert!(matches!(missing, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_logout_clears_token_and_is_idempotent() {
        let h = harness();
        h.service.register(request("ab", "a@b.com")).await.unwrap();
        let login = h.service.login(login_request(Some("ab"), None, "p1")).await.unwrap();
        let user_id = login.user.id.to_hex();

        h.service.logout(&user_id).await.unwrap();
        assert!(h.store.find_by_username("ab").unwrap().refresh_token.is_none());

        h.service.logout(&user_id).await.unwrap();
    }

    #[actix_web::test]
    async fn test_refresh_rotates_stored_token() {
        let h = harness();
        h.service.register(request("ab", "a@b.com")).await.unwrap();
        let login = h.service.login(login_request(Some("ab"), None, "p1")).await.unwrap();

        let rotated = h.service
            .refresh_access_token(Some(login.tokens.refresh_token.clone()))
            .await
            .unwrap();

        assert_ne!(rotated.refresh_token, login.tokens.refresh_token);
        let stored = h.store.find_by_username("ab").unwrap();
        assert_eq!(stored.refresh_token.as_deref(), Some(rotated.refresh_token.as_str()));

        let stale = h.service.refresh_access_token(Some(login.tokens.refresh_token)).await;
        assert!(matches!(stale, Err(AppError::AuthenticationError(_))));
    }

    #[actix_web::test]
    async fn test_refresh_after_logout_is_rejected() {
        let h = harness();
        h.service.register(request("ab", "a@b.com")).await.unwrap();
        let login = h.service.login(login_request(Some("ab"), None, "p1")).await.unwrap();
        h.service.logout(&login.user.id.to_hex()).await.unwrap();

        let result = h.service.refresh_access_token(Some(login.tokens.refresh_token)).await;
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));

        let missing = h.service.refresh_access_token(None).await;
        assert!(matches!(missing, Err(AppError::AuthenticationError(_))));
    }
}

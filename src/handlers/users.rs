//! # User Account HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/users/register` | multipart 회원가입 | 201 Created |
//! | `POST` | `/api/v1/users/login` | 로그인, 토큰 쿠키 설정 | 200 OK |
//! | `POST` | `/api/v1/users/logout` | 로그아웃, 토큰 쿠키 삭제 (인증 필요) | 200 OK |
//! | `POST` | `/api/v1/users/refresh-token` | 토큰 갱신 | 200 OK |
//!
//! 핸들러는 에러를 직접 처리하지 않고 `?`로 전파합니다.
//! 성공 응답은 [`ApiResponse`] envelope, 실패 응답은 `AppError`의 에러 envelope입니다.

use actix_multipart::form::MultipartForm;
use actix_web::{cookie::Cookie, post, web, HttpRequest, HttpResponse};
use serde_json::json;
use crate::{
    config::{CookieConfig, UploadConfig},
    core::AppError,
    domain::{
        dto::users::{
            request::{LoginRequest, RefreshTokenRequest, RegisterUserForm, RegisterUserRequest},
            response::{LoginResponse, UserResponse},
        },
        dto::ApiResponse,
        models::auth::AuthenticatedUser,
        models::token::TokenPair,
    },
    middlewares::AuthMiddleware,
    services::users::UserService,
};

/// 토큰 쿠키 (`HttpOnly`, `Secure`, path `/`)
fn token_cookie(name: &'static str, value: String) -> Cookie<'static> {
    Cookie::build(name, value)
        .path("/")
        .http_only(true)
        .secure(CookieConfig::secure())
        .finish()
}

fn auth_cookies(tokens: &TokenPair) -> [Cookie<'static>; 2] {
    [
        token_cookie(CookieConfig::ACCESS_TOKEN, tokens.access_token.clone()),
        token_cookie(CookieConfig::REFRESH_TOKEN, tokens.refresh_token.clone()),
    ]
}

/// 같은 속성의 만료 쿠키
fn removal_cookies() -> [Cookie<'static>; 2] {
    [CookieConfig::ACCESS_TOKEN, CookieConfig::REFRESH_TOKEN].map(|name| {
        let mut cookie = token_cookie(name, String::new());
        cookie.make_removal();
        cookie
    })
}

/// multipart 추출 실패를 ValidationError로 변환합니다.
///
/// `MultipartFormConfig` 에러 핸들러를 거친 에러는 메시지를 그대로 사용합니다.
fn multipart_rejection(err: actix_web::Error) -> AppError {
    match err.as_error::<AppError>() {
        Some(app_error) => AppError::ValidationError(app_error.client_message()),
        None => AppError::ValidationError(format!("잘못된 multipart 요청입니다: {}", err)),
    }
}

/// 회원가입
///
/// 텍스트 필드 `fullName`, `email`, `username`, `password`와
/// 파일 필드 `avatar`(필수), `coverImage`(선택)를 받습니다.
///
/// multipart가 아닌 본문은 추출기 설정과 무관하게 400 에러 envelope으로 응답합니다.
#[post("/register")]
pub async fn register_user(
    user_service: web::Data<UserService>,
    form: Result<MultipartForm<RegisterUserForm>, actix_web::Error>,
) -> Result<HttpResponse, AppError> {
    let MultipartForm(form) = form.map_err(multipart_rejection)?;

    let request = RegisterUserRequest::from_form(form, UploadConfig::max_file_size())?;
    let profile = user_service.register(request).await?;

    Ok(ApiResponse::created(UserResponse::from(profile), "회원가입이 완료되었습니다").into_response())
}

/// 로그인
///
/// 본문과 쿠키 모두에 액세스/리프레시 토큰을 담아 응답합니다.
#[post("/login")]
pub async fn login_user(
    user_service: web::Data<UserService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let result = user_service.login(payload.into_inner()).await?;
    let cookies = auth_cookies(&result.tokens);

    let response = LoginResponse {
        user: UserResponse::from(result.user),
        access_token: result.tokens.access_token,
        refresh_token: result.tokens.refresh_token,
    };

    Ok(ApiResponse::ok(response, "로그인에 성공했습니다").respond_with(cookies))
}

/// 로그아웃
#[post("/logout", wrap = "AuthMiddleware::required()")]
pub async fn logout_user(
    user_service: web::Data<UserService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    user_service.logout(&user.user_id).await?;

    Ok(ApiResponse::ok(json!({}), "로그아웃되었습니다").respond_with(removal_cookies()))
}

/// 토큰 갱신
///
/// 리프레시 토큰은 `refreshToken` 쿠키에서 먼저 찾고, 없으면 JSON 본문에서 찾습니다.
#[post("/refresh-token")]
pub async fn refresh_access_token(
    req: HttpRequest,
    user_service: web::Data<UserService>,
    payload: Option<web::Json<RefreshTokenRequest>>,
) -> Result<HttpResponse, AppError> {
    let refresh_token = req
        .cookie(CookieConfig::REFRESH_TOKEN)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty())
        .or_else(|| payload.and_then(|body| body.into_inner().refresh_token));

    let tokens = user_service.refresh_access_token(refresh_token).await?;
    let cookies = auth_cookies(&tokens);

    Ok(ApiResponse::ok(tokens, "액세스 토큰이 갱신되었습니다").respond_with(cookies))
}

//! # Route Configuration
//!
//! | 메서드 | 경로 | 인증 |
//! |--------|------|------|
//! | `GET` | `/health` | |
//! | `POST` | `/api/v1/users/register` | |
//! | `POST` | `/api/v1/users/login` | |
//! | `POST` | `/api/v1/users/logout` | 액세스 토큰 (쿠키 또는 Bearer) |
//! | `POST` | `/api/v1/users/refresh-token` | 리프레시 토큰 (쿠키 또는 본문) |
//!
//! ```bash
//! curl -X POST http://localhost:8000/api/v1/users/register \
//!   -F fullName="A B" -F email=a@b.com -F username=AB -F password=p1 \
//!   -F avatar=@avatar.png
//!
//! curl -X POST http://localhost:8000/api/v1/users/login \
//!   -H "Content-Type: application/json" \
//!   -d '{"username":"ab","password":"p1"}'
//! ```

use crate::domain::dto::ApiResponse;
use crate::handlers;
use actix_web::web;
use serde_json::json;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// 사용자 계정 라우트
///
/// 로그아웃 핸들러는 `AuthMiddleware`로 보호됩니다.
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .service(handlers::users::register_user)
            .service(handlers::users::login_user)
            .service(handlers::users::logout_user)
            .service(handlers::users::refresh_access_token)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    ApiResponse::ok(
        json!({
            "status": "healthy",
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }),
        "OK",
    )
    .into_response()
}

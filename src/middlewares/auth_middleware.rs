//! # 인증 미들웨어
//!
//! 보호된 라우트에 액세스 토큰 검증을 적용합니다.
//!
//! 토큰은 다음 순서로 찾습니다.
//!
//! 1. `accessToken` 쿠키
//! 2. `Authorization: Bearer <token>` 헤더
//!
//! 검증에 성공하면 [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)를
//! 요청 extensions에 저장하고, 실패하면 401 에러 envelope으로 응답합니다.
//!
//! ```rust,ignore
//! web::resource("/logout")
//!     .wrap(AuthMiddleware::required())
//!     .route(web::post().to(logout_user))
//! ```

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// 액세스 토큰 필수 미들웨어
///
/// `TokenService`는 `app_data`에 `web::Data<TokenService>`로 등록되어 있어야 합니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthMiddleware;

impl AuthMiddleware {
    pub fn required() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

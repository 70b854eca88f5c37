use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use crate::core::AppError;

/// 액세스 토큰에서 추출된 사용자 정보
///
/// [`AuthMiddleware`](crate::middlewares::AuthMiddleware)가 요청 extensions에 저장하고,
/// 핸들러는 추출자로 꺼내 사용합니다.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID
    pub user_id: String,
    pub username: String,
    pub email: String,
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "인증되지 않은 요청입니다".to_string()
            ).into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_extracts_user_from_extensions() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(AuthenticatedUser {
            user_id: "507f1f77bcf86cd799439011".to_string(),
            username: "ab".to_string(),
            email: "a@b.com".to_string(),
        });

        let user = AuthenticatedUser::extract(&req).await.unwrap();
        assert_eq!(user.user_id, "507f1f77bcf86cd799439011");
    }

    #[actix_web::test]
    async fn test_missing_user_is_unauthorized() {
        let req = TestRequest::default().to_http_request();
        let err = AuthenticatedUser::extract(&req).await.unwrap_err();

        assert_eq!(
            err.as_response_error().status_code(),
            actix_web::http::StatusCode::UNAUTHORIZED
        );
    }
}

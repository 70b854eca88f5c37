use actix_web::cookie::Cookie;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;

/// API 성공 응답 envelope
///
/// 모든 성공 응답은 `{ statusCode, data, message, success }` 형태로 직렬화됩니다.
/// `success`는 `statusCode < 400`에서 파생되며, 에러 응답은
/// [`AppError`](crate::core::AppError)의 `ResponseError` 구현이 담당합니다.
///
/// ```rust,ignore
/// ApiResponse::created(user, "회원가입이 완료되었습니다").into_response()
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub data: T,
    pub message: String,
    pub success: bool,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(status: StatusCode, data: T, message: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            data,
            message: message.into(),
            success: status.as_u16() < 400,
        }
    }

    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, data, message)
    }

    pub fn created(data: T, message: impl Into<String>) -> Self {
        Self::new(StatusCode::CREATED, data, message)
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::OK)
    }

    /// envelope의 상태 코드로 HTTP 응답을 만듭니다.
    pub fn into_response(self) -> HttpResponse {
        self.respond_with(Vec::new())
    }

    /// 쿠키를 함께 설정한 HTTP 응답을 만듭니다.
    pub fn respond_with<'c>(self, cookies: impl IntoIterator<Item = Cookie<'c>>) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status());

        for cookie in cookies {
            builder.cookie(cookie);
        }

        builder.json(self)
    }
}

//! # Application Error Handling System
//!
//! 서비스 전역에서 사용하는 통합 에러 타입과 에러 응답 변환을 담당합니다.
//! 핸들러는 에러를 직접 잡지 않고 `?`로 전파하며, 모든 에러는
//! [`actix_web::ResponseError`] 구현 한 곳에서 동일한 에러 envelope으로 변환됩니다.
//!
//! ## 에러 envelope
//!
//! ```json
//! {
//!   "statusCode": 409,
//!   "message": "이미 존재하는 사용자입니다",
//!   "success": false,
//!   "errors": []
//! }
//! ```
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 필수 필드 누락, 아바타 누락/업로드 실패 |
//! | `AuthenticationError` | 401 Unauthorized | 비밀번호 불일치, 토큰 오류 |
//! | `NotFound` | 404 Not Found | 로그인 대상 사용자 없음 |
//! | `ConflictError` | 409 Conflict | 사용자명/이메일 중복 |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 오류 |
//! | `ExternalServiceError` | 500 Internal Server Error | 미디어 업로드 서비스 오류 |
//! | `InternalError` | 500 Internal Server Error | 생성 후 재조회 실패 등 |

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
/// HTTP 에러 envelope으로 자동 변환됩니다.
///
/// ## 에러 변환 패턴
///
/// ```rust,ignore
/// collection.find_one(filter).await
///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
///
/// let user = store.find_by_username_or_email(username, email).await?
///     .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400)
    ///
    /// 필수 필드 누락, 아바타 파일 누락, 아바타 업로드 실패가 여기에 속합니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409)
    ///
    /// 사전 중복 검사와 저장소의 유니크 제약 위반 모두 이 변형으로 변환됩니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 외부 서비스 에러 (500)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// 에러 응답 envelope
///
/// 모든 실패 응답은 이 구조체 하나로 직렬화됩니다.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    pub status_code: u16,
    pub message: String,
    pub success: bool,
    pub errors: Vec<String>,
}

impl AppError {
    /// 클라이언트에 노출할 메시지
    ///
    /// 5xx 에러는 내부 상세 정보를 숨기고 고정 메시지를 사용합니다.
    pub fn client_message(&self) -> String {
        match self {
            AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::ConflictError(msg)
            | AppError::AuthenticationError(msg) => msg.clone(),
            AppError::InternalError(msg) => msg.clone(),
            AppError::DatabaseError(_) | AppError::ExternalServiceError(_) => {
                "요청을 처리하는 중 서버 오류가 발생했습니다".to_string()
            }
        }
    }

    pub fn envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope {
            status_code: self.status_code().as_u16(),
            message: self.client_message(),
            success: false,
            errors: Vec::new(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 `AppError` 변형을 상태 코드와 에러 envelope으로 변환합니다.
    /// 5xx 에러는 원인을 서버 로그에만 남깁니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::debug!("요청 실패 ({}): {}", status.as_u16(), self);
        }

        HttpResponse::build(status).json(self.envelope())
    }
}

/// `validator` 검증 실패를 ValidationError로 변환합니다.
///
/// 필드별 메시지를 필드 이름 순으로 정렬해 하나의 메시지로 합칩니다.
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.errors().iter().collect();
        fields.sort_by(|a, b| a.0.cmp(b.0));

        let messages: Vec<String> = fields
            .into_iter()
            .flat_map(|(field, kind)| match kind {
                validator::ValidationErrorsKind::Field(errs) => errs
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("{} 값이 올바르지 않습니다", field))
                    })
                    .collect::<Vec<_>>(),
                _ => vec![format!("{} 값이 올바르지 않습니다", field)],
            })
            .collect();

        AppError::ValidationError(messages.join(", "))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let bytes = tokio::fs::read(path).await
///     .with_context(|| format!("업로드 파일 읽기 실패 ({})", name))?;
/// ```
pub trait ErrorContext<T> {
    /// 클로저로 지연 평가된 컨텍스트와 함께 에러를 InternalError로 변환합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

/// JSON 본문 추출 실패를 에러 envelope으로 변환합니다.
///
/// `web::JsonConfig::error_handler`에 등록됩니다.
pub fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    AppError::ValidationError(format!("잘못된 JSON 요청입니다: {}", err)).into()
}

/// multipart 폼 추출 실패를 에러 envelope으로 변환합니다.
pub fn multipart_error_handler(
    err: actix_multipart::MultipartError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    AppError::ValidationError(format!("잘못된 multipart 요청입니다: {}", err)).into()
}

//! # 문자열 유틸리티
//!
//! 요청 입력값을 정리하고 필수 여부를 검증하는 공통 함수들입니다.

use serde::Deserialize;
use crate::core::AppError;

/// 필수 문자열 필드 검증 및 정리
///
/// 빈 문자열이나 공백만 있는 경우 ValidationError를 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(validate_required_string("  Hello  ", "fullName").unwrap(), "Hello");
/// assert!(validate_required_string("   ", "fullName").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            format!("{}은(는) 필수입니다", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

/// 여러 필수 필드를 순서대로 검증합니다.
///
/// 첫 번째로 비어 있는 필드에서 ValidationError를 반환하며,
/// 모두 유효하면 정리된 값을 입력 순서대로 돌려줍니다.
pub fn validate_required_fields<const N: usize>(
    fields: [(&str, &str); N],
) -> Result<[String; N], AppError> {
    let mut cleaned: [String; N] = std::array::from_fn(|_| String::new());

    for (slot, (value, field_name)) in cleaned.iter_mut().zip(fields) {
        *slot = validate_required_string(value, field_name)?;
    }

    Ok(cleaned)
}

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 옵션으로 반환합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// JSON 역직렬화 시 빈 문자열이나 공백만 있는 문자열을 None으로 변환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 후 Some으로 반환합니다.
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct LoginRequest {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     username: Option<String>,
/// }
///
/// // {"username": "  ab  "} → Some("ab")
/// // {"username": "   "}    → None
/// // {"username": null}     → None
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string() {
        assert_eq!(validate_required_string("Hello", "name").unwrap(), "Hello");
        assert_eq!(validate_required_string("  World  ", "name").unwrap(), "World");

        assert!(validate_required_string("", "name").is_err());
        assert!(validate_required_string("   ", "name").is_err());
        assert!(validate_required_string("\t\n", "name").is_err());
    }

    #[test]
    fn test_validate_required_fields_reports_first_missing() {
        let result = validate_required_fields([
            ("A B", "fullName"),
            ("  ", "email"),
            ("", "username"),
        ]);

        match result {
            Err(AppError::ValidationError(msg)) => assert!(msg.starts_with("email")),
            _ => panic!("Expected ValidationError"),
        }
    }

    #[test]
    fn test_validate_required_fields_trims_all() {
        let [full_name, email] =
            validate_required_fields([(" A B ", "fullName"), ("a@b.com ", "email")]).unwrap();

        assert_eq!(full_name, "A B");
        assert_eq!(email, "a@b.com");
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            optional_field: Option<String>,
        }

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": "  안녕하세요  "}"#).unwrap();
        assert_eq!(result.optional_field, Some("안녕하세요".to_string()));

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": "\t\n  "}"#).unwrap();
        assert_eq!(result.optional_field, None);

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": null}"#).unwrap();
        assert_eq!(result.optional_field, None);

        let result: TestStruct = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(result.optional_field, None);
    }
}

use serde::{Deserialize, Serialize};

use crate::domain::dto::users::request::FieldRule;

/// 성공 결과 메시지
pub const VALID_USER_MESSAGE: &str = "Usuário válido";

/// 사용자 검증 결과 DTO
///
/// 표준 출력으로 내보내는 유일한 JSON 객체입니다.
/// 키 순서는 `valid`, `message`, `errors`이며 비어 있는 항목은 생략됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,

    /// 성공 메시지 또는 실패 상세 (디코딩/실행 실패 시)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// 실패한 필드 규칙 메시지 (이름 → 이메일 → 나이 순)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// 모든 규칙을 통과한 결과
    pub fn valid_user() -> Self {
        Self {
            valid: true,
            message: Some(VALID_USER_MESSAGE.to_string()),
            errors: Vec::new(),
        }
    }

    /// 실패한 규칙 목록으로 결과 생성
    ///
    /// 규칙이 하나도 없으면 성공 결과를 반환합니다.
    pub fn from_failures(failures: &[FieldRule]) -> Self {
        if failures.is_empty() {
            return Self::valid_user();
        }

        Self {
            valid: false,
            message: None,
            errors: failures.iter().map(|rule| rule.message().to_string()).collect(),
        }
    }

    /// 메시지 하나만 담은 실패 결과
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
            errors: Vec::new(),
        }
    }

    /// JSON 디코딩 실패 결과
    pub fn invalid_json(detail: &str) -> Self {
        Self::failure(format!("JSON inválido: {}", detail))
    }

    /// 한 줄 JSON 문자열로 직렬화
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_user_json() {
        let json = ValidationResult::valid_user().to_json().unwrap();
        assert_eq!(json, r#"{"valid":true,"message":"Usuário válido"}"#);
    }

    #[test]
    fn test_failures_json_omits_message() {
        let result = ValidationResult::from_failures(&[FieldRule::AgeMaximum]);
        assert_eq!(
            result.to_json().unwrap(),
            r#"{"valid":false,"errors":["Idade deve ser realista (máximo 120 anos)"]}"#
        );
    }

    #[test]
    fn test_empty_failures_is_valid() {
        assert_eq!(ValidationResult::from_failures(&[]), ValidationResult::valid_user());
    }

    #[test]
    fn test_invalid_json_result() {
        let result = ValidationResult::invalid_json("EOF while parsing a value at line 1 column 0");
        assert!(!result.valid);
        assert!(result.errors.is_empty());
        assert_eq!(
            result.to_json().unwrap(),
            r#"{"valid":false,"message":"JSON inválido: EOF while parsing a value at line 1 column 0"}"#
        );
    }

    #[test]
    fn test_deserialize_with_missing_optional_fields() {
        let result: ValidationResult = serde_json::from_str(r#"{"valid":false,"errors":["x"]}"#).unwrap();
        assert_eq!(result.message, None);
        assert_eq!(result.errors, vec!["x".to_string()]);

        let result: ValidationResult = serde_json::from_str(r#"{"valid":true,"message":"Usuário válido"}"#).unwrap();
        assert_eq!(result, ValidationResult::valid_user());
    }
}

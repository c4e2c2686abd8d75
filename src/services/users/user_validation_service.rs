//! # 사용자 검증 서비스 구현
//!
//! 원시 JSON 텍스트를 사용자 레코드로 디코딩하고 필드 규칙을 적용하는
//! 핵심 비즈니스 로직을 구현합니다.
//!
//! ```text
//! raw text ──► decode ──► UserRequest ──► validate ──► ValidationResult
//!                │
//!                └── AppError::DecodeError (JSON 구문/타입 오류)
//! ```
//!
//! 서비스는 상태를 갖지 않습니다. 같은 입력에 대해 항상 같은 결과를 반환하며,
//! 모든 필드 규칙을 평가한 뒤 실패 사유를 한꺼번에 보고합니다.

use log::debug;
use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use crate::{
    core::errors::{AppError, AppResult},
    domain::dto::users::{
        request::{FieldRule, UserRequest},
        response::ValidationResult,
    },
};

/// 사용자 검증 비즈니스 로직 서비스
///
/// ## 주요 책임
///
/// 1. **디코딩**: JSON 텍스트 → `UserRequest`
///    - 누락/`null` 필드는 기본값, 알 수 없는 필드는 무시
///    - 구문 또는 타입 오류는 `AppError::DecodeError`
/// 2. **검증**: `UserRequest` → `ValidationResult`
///    - 이름, 이메일, 나이 규칙을 독립적으로 모두 평가
///    - 실패 메시지를 이름 → 이메일 → 나이 순으로 수집
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use crate::services::users::UserValidationService;
///
/// let service = UserValidationService::new();
/// let user = service.decode(r#"{"name":"Ana","email":"ana@example.com","idade":25}"#)?;
/// let result = service.validate(&user);
/// assert!(result.valid);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct UserValidationService;

impl UserValidationService {
    pub fn new() -> Self {
        Self
    }

    /// JSON 텍스트를 사용자 레코드로 디코딩
    ///
    /// # 반환값
    ///
    /// * `Ok(UserRequest)` - 구조적으로 유효한 레코드 (비즈니스 규칙은 미검증)
    /// * `Err(AppError::DecodeError)` - JSON이 아니거나, 객체가 아니거나, 필드 타입이 맞지 않음
    pub fn decode(&self, raw: &str) -> AppResult<UserRequest> {
        self.decode_bytes(raw.as_bytes())
    }

    /// 바이트 페이로드를 사용자 레코드로 디코딩
    ///
    /// 잘못된 UTF-8도 JSON 구문 오류와 같이 `DecodeError`로 보고됩니다.
    /// 최상위 값은 반드시 객체여야 하며, 중복 키는 마지막 값을 사용합니다.
    pub fn decode_bytes(&self, raw: &[u8]) -> AppResult<UserRequest> {
        let value = serde_json::from_slice::<Value>(raw).map_err(decode_error)?;

        if !value.is_object() {
            let detail = format!("invalid type: {}, expected a JSON object", json_kind(&value));
            debug!("사용자 JSON 디코딩 실패: {}", detail);
            return Err(AppError::DecodeError(detail));
        }

        UserRequest::deserialize(value).map_err(decode_error)
    }

    /// 사용자 레코드에 필드 규칙을 적용
    ///
    /// 실패한 규칙이 없으면 `{valid: true, message: "Usuário válido"}`를,
    /// 그렇지 않으면 실패 메시지 목록을 담은 `{valid: false, errors: [...]}`를 반환합니다.
    pub fn validate(&self, user: &UserRequest) -> ValidationResult {
        let failures = self.failed_rules(user);

        debug!("사용자 검증 완료 - 실패 규칙 {}개", failures.len());

        ValidationResult::from_failures(&failures)
    }

    /// 실패한 규칙을 보고 순서대로 반환
    pub fn failed_rules(&self, user: &UserRequest) -> Vec<FieldRule> {
        let errors = match user.validate() {
            Ok(()) => return Vec::new(),
            Err(errors) => errors,
        };

        let field_errors = errors.field_errors();
        let mut failures: Vec<FieldRule> = field_errors
            .values()
            .flat_map(|errors| errors.iter())
            .filter_map(|error| FieldRule::from_code(&error.code))
            .collect();
        failures.sort();
        failures
    }

    /// 디코딩과 검증을 한 번에 수행
    ///
    /// 디코딩 실패만 `Err`가 되며, 규칙 위반은 `Ok(ValidationResult)`로 보고됩니다.
    pub fn process_json(&self, raw: &str) -> AppResult<ValidationResult> {
        self.process_bytes(raw.as_bytes())
    }

    /// 바이트 페이로드에 대해 디코딩과 검증을 수행
    pub fn process_bytes(&self, raw: &[u8]) -> AppResult<ValidationResult> {
        let user = self.decode_bytes(raw)?;
        Ok(self.validate(&user))
    }
}

fn decode_error(e: serde_json::Error) -> AppError {
    debug!("사용자 JSON 디코딩 실패: {}", e);
    AppError::DecodeError(e.to_string())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

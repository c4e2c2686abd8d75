//! # 사용자 검증 요청 DTO
//!
//! 검증 대상 사용자 레코드의 JSON 구조와 필드별 검증 규칙을 정의합니다.
//!
//! ## 검증 규칙
//!
//! ### 이름 (`name`)
//! - 앞뒤 공백 제거 후 비어 있으면 실패
//! - 최소 2자 (유니코드 코드 포인트 기준)
//!
//! ### 이메일 (`email`)
//! - 앞뒤 공백 제거 후 비어 있으면 실패
//! - `^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$` 패턴 일치
//!
//! ### 나이 (`idade`)
//! - 18 이상 120 이하
//!
//! ## JSON 예제
//!
//! ```json
//! { "name": "Ana", "email": "ana@example.com", "idade": 25 }
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::utils::string_utils::{char_count, deserialize_null_default};

/// 이름 최소 길이 (코드 포인트 기준)
pub const MIN_NAME_CHARS: usize = 2;

/// 허용 최소 나이
pub const MIN_AGE: i64 = 18;

/// 허용 최대 나이
pub const MAX_AGE: i64 = 120;

/// 이메일 형식 정규식 (프로세스 전역에서 한 번만 컴파일)
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("EMAIL_REGEX is a valid regex pattern")
});

/// 필드 검증 실패 사유
///
/// 선언 순서가 곧 보고 순서입니다: 이름, 이메일, 나이 순으로 정렬됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldRule {
    NameRequired,
    NameTooShort,
    EmailRequired,
    EmailFormat,
    AgeMinimum,
    AgeMaximum,
}

impl FieldRule {
    /// 모든 규칙 (보고 순서)
    pub const ALL: [FieldRule; 6] = [
        FieldRule::NameRequired,
        FieldRule::NameTooShort,
        FieldRule::EmailRequired,
        FieldRule::EmailFormat,
        FieldRule::AgeMinimum,
        FieldRule::AgeMaximum,
    ];

    /// `ValidationError`에 기록되는 에러 코드
    pub fn code(self) -> &'static str {
        match self {
            FieldRule::NameRequired => "name_required",
            FieldRule::NameTooShort => "name_too_short",
            FieldRule::EmailRequired => "email_required",
            FieldRule::EmailFormat => "email_format",
            FieldRule::AgeMinimum => "age_minimum",
            FieldRule::AgeMaximum => "age_maximum",
        }
    }

    /// 결과 JSON에 출력되는 메시지
    pub fn message(self) -> &'static str {
        match self {
            FieldRule::NameRequired => "Nome é obrigatório",
            FieldRule::NameTooShort => "Nome deve ter pelo menos 2 caracteres",
            FieldRule::EmailRequired => "E-mail é obrigatório",
            FieldRule::EmailFormat => "E-mail deve ter formato válido",
            FieldRule::AgeMinimum => "Idade deve ser maior ou igual a 18 anos",
            FieldRule::AgeMaximum => "Idade deve ser realista (máximo 120 anos)",
        }
    }

    /// 에러 코드로부터 규칙을 찾습니다.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rule| rule.code() == code)
    }

    fn into_error(self) -> ValidationError {
        ValidationError::new(self.code()).with_message(self.message().into())
    }
}

/// 사용자 검증 요청 DTO
///
/// 누락된 필드와 `null` 필드는 기본값(빈 문자열, 0)으로 채워집니다.
/// 알 수 없는 필드는 무시됩니다. 디코딩 단계에서는 비즈니스 규칙을 확인하지 않으며,
/// `validate()` 호출 시 필드별 규칙이 모두 평가됩니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct UserRequest {
    /// 사용자 이름
    #[serde(deserialize_with = "deserialize_null_default")]
    #[validate(custom(function = "validate_name"))]
    pub name: String,

    /// 이메일 주소
    #[serde(deserialize_with = "deserialize_null_default")]
    #[validate(custom(function = "validate_email"))]
    pub email: String,

    /// 나이 (JSON 키: `idade`)
    #[serde(rename = "idade", deserialize_with = "deserialize_null_default")]
    #[validate(custom(function = "validate_age"))]
    pub age: i64,
}

impl UserRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age,
        }
    }
}

/// 이름 규칙 판정
pub fn check_name(name: &str) -> Option<FieldRule> {
    let name = name.trim();
    if name.is_empty() {
        return Some(FieldRule::NameRequired);
    }
    if char_count(name) < MIN_NAME_CHARS {
        return Some(FieldRule::NameTooShort);
    }
    None
}

/// 이메일 규칙 판정
pub fn check_email(email: &str) -> Option<FieldRule> {
    let email = email.trim();
    if email.is_empty() {
        return Some(FieldRule::EmailRequired);
    }
    if !EMAIL_REGEX.is_match(email) {
        return Some(FieldRule::EmailFormat);
    }
    None
}

/// 나이 규칙 판정
pub fn check_age(age: i64) -> Option<FieldRule> {
    if age < MIN_AGE {
        return Some(FieldRule::AgeMinimum);
    }
    if age > MAX_AGE {
        return Some(FieldRule::AgeMaximum);
    }
    None
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    check_name(name).map_or(Ok(()), |rule| Err(rule.into_error()))
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    check_email(email).map_or(Ok(()), |rule| Err(rule.into_error()))
}

fn validate_age(age: i64) -> Result<(), ValidationError> {
    check_age(age).map_or(Ok(()), |rule| Err(rule.into_error()))
}

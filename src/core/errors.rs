//! # Application Error Handling System
//!
//! 검증기 바이너리와 서브프로세스 클라이언트가 공유하는 통합 에러 처리 시스템입니다.
//! `thiserror`로 각 실패 유형을 열거형 변형으로 표현하고,
//! 프로세스 종료 코드와 표준 에러 출력 메시지로 변환합니다.
//!
//! ## 에러 분류
//!
//! | AppError | 종료 코드 | 사용 시나리오 |
//! |----------|-----------|---------------|
//! | `UsageError` | 1 | 잘못된 `--mode`, 누락된 `--input` |
//! | `DecodeError` | 1 | 형식이 잘못된 JSON 페이로드 |
//! | `IoError` | 1 | 표준 입출력 읽기/쓰기 실패 |
//! | `SerializationError` | 1 | 결과 JSON 인코딩 실패 |
//! | `ExternalProcessError` | 1 | 검증기 프로세스 실행 실패 |
//! | `TimeoutError` | 1 | 검증기 프로세스 시간 초과 |
//! | `InternalError` | 1 | 예상치 못한 오류 |
//!
//! 비즈니스 규칙 위반(예: 나이 17세)은 에러가 아닙니다.
//! `valid: false`를 담은 정상 결과로 출력되고 종료 코드는 0입니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! fn read_payload(mode: &str, input: &str) -> AppResult<String> {
//!     match mode {
//!         "single" if input.is_empty() => Err(AppError::UsageError(
//!             "Input JSON é obrigatório no modo single".to_string(),
//!         )),
//!         "single" => Ok(input.to_string()),
//!         other => Err(AppError::UsageError(format!("Modo inválido: {}", other))),
//!     }
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 검증 실행 중 발생할 수 있는 모든 종류의 실패를 포괄하는 열거형입니다.
/// `Display` 구현은 그대로 표준 에러 출력에 사용됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// CLI 사용법 에러
    ///
    /// 알 수 없는 모드이거나 `single` 모드에서 `--input`이 비어 있는 경우입니다.
    /// JSON은 출력되지 않습니다.
    #[error("{0}")]
    UsageError(String),

    /// JSON 디코딩 에러
    ///
    /// 내부 값은 `serde_json` 파서의 에러 메시지입니다.
    /// 표준 출력에는 `"JSON inválido: " + 메시지`를 담은 결과가 출력됩니다.
    #[error("JSON inválido: {0}")]
    DecodeError(String),

    /// 표준 입출력 에러
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// 결과 직렬화 에러
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// 외부 검증기 프로세스 에러
    #[error("External process error: {0}")]
    ExternalProcessError(String),

    /// 외부 검증기 프로세스 시간 초과
    #[error("Timeout after {0} ms")]
    TimeoutError(u64),

    /// 내부 에러
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 프로세스 종료 코드를 반환합니다.
    ///
    /// 바이너리가 보고하는 모든 실패는 종료 코드 1을 사용합니다.
    /// clap이 직접 처리하는 인자 파싱 실패(종료 코드 2)는 여기에 해당하지 않습니다.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// 디코딩 에러인지 확인합니다.
    pub fn is_decode_error(&self) -> bool {
        matches!(self, AppError::DecodeError(_))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::SerializationError(e.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_error_display() {
        let error = AppError::UsageError("Modo inválido: batch".to_string());

        assert_eq!(error.to_string(), "Modo inválido: batch");
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_decode_error_display() {
        let error = AppError::DecodeError("expected value at line 1 column 1".to_string());

        assert!(error.is_decode_error());
        assert_eq!(
            error.to_string(),
            "JSON inválido: expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let error: AppError = io.into();

        assert!(matches!(error, AppError::IoError(_)));
        assert!(!error.is_decode_error());
    }

    #[test]
    fn test_serde_error_conversion() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: AppError = parse_error.into();

        assert!(matches!(error, AppError::SerializationError(_)));
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }

    #[test]
    fn test_error_with_context_closure() {
        let result: Result<(), &str> = Err("spawn failed");
        let app_result = result.with_context(|| format!("executando {}", "./user_validator"));

        if let Err(AppError::InternalError(msg)) = app_result {
            assert_eq!(msg, "executando ./user_validator: spawn failed");
        } else {
            panic!("Expected InternalError");
        }
    }
}

//! 실행 환경 및 클라이언트 설정 관리 모듈
//!
//! 프로필, 로깅, 검증기 서브프로세스 클라이언트 관련 설정을 관리합니다.

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use log::error;

/// 기본 로그 필터 (표준 출력 JSON과 섞이지 않도록 경고 이상만 표준 에러로 출력)
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// 기본 검증기 실행 파일 경로
pub const DEFAULT_VALIDATOR_PATH: &str = "./user_validator";

/// 기본 검증기 실행 제한 시간 (밀리초)
pub const DEFAULT_VALIDATOR_TIMEOUT_MS: u64 = 5000;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - `.env.dev`
    Development,
    /// 테스트 환경 - `.env.test`
    Test,
    /// 프로덕션 환경 - `.env.prod`
    Production,
    /// 알 수 없는 프로필 - 기본 `.env`
    Unspecified,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `PROFILE` 환경 변수를 확인하며, 설정되지 않은 경우 `Development`를 사용합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let env = Environment::current();
    /// if let Some(file) = env.env_file() {
    ///     dotenv::from_filename(file).ok();
    /// }
    /// ```
    pub fn current() -> Self {
        Self::from_str(&env::var("PROFILE").unwrap_or_else(|_| "dev".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// # Arguments
    ///
    /// * `s` - 프로필 이름 문자열 (대소문자 무관)
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "production" | "prod" => Environment::Production,
            _ => Environment::Unspecified,
        }
    }

    /// 환경별 설정 파일 이름을 반환합니다.
    ///
    /// `None`이면 기본 `.env` 파일을 사용합니다.
    pub fn env_file(&self) -> Option<&'static str> {
        match self {
            Environment::Development => Some(".env.dev"),
            Environment::Test => Some(".env.test"),
            Environment::Production => Some(".env.prod"),
            Environment::Unspecified => None,
        }
    }
}

/// 로깅 설정
pub struct LogConfig;

impl LogConfig {
    /// `RUST_LOG`가 없을 때 사용할 기본 필터를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `LOG_FILTER`: 커스텀 기본 필터 (기본값: "warn")
    pub fn default_filter() -> String {
        env::var("LOG_FILTER").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string())
    }
}

/// 검증기 서브프로세스 클라이언트 설정
pub struct ClientConfig;

impl ClientConfig {
    /// 검증기 실행 파일 경로를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `VALIDATOR_PATH`: 실행 파일 경로 (기본값: "./user_validator")
    pub fn executable_path() -> String {
        env::var("VALIDATOR_PATH").unwrap_or_else(|_| DEFAULT_VALIDATOR_PATH.to_string())
    }

    /// 검증기 실행 제한 시간(밀리초)을 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `VALIDATOR_TIMEOUT_MS`: 제한 시간 (기본값: 5000)
    pub fn timeout_ms() -> u64 {
        parse_env_or("VALIDATOR_TIMEOUT_MS", DEFAULT_VALIDATOR_TIMEOUT_MS)
    }

    /// 제한 시간을 `Duration`으로 반환합니다.
    pub fn timeout() -> Duration {
        Duration::from_millis(Self::timeout_ms())
    }
}

/// 환경 변수를 파싱하고, 없거나 파싱에 실패하면 기본값을 반환합니다.
fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => parse_or(key, &raw, default),
        Err(_) => default,
    }
}

fn parse_or<T>(key: &str, raw: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    raw.trim().parse::<T>().unwrap_or_else(|e| {
        error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("dev"), Environment::Development);
        assert_eq!(Environment::from_str("Development"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("PROD"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Unspecified);
    }

    #[test]
    fn test_env_file_for_each_environment() {
        assert_eq!(Environment::Development.env_file(), Some(".env.dev"));
        assert_eq!(Environment::Test.env_file(), Some(".env.test"));
        assert_eq!(Environment::Production.env_file(), Some(".env.prod"));
        assert_eq!(Environment::Unspecified.env_file(), None);
    }

    #[test]
    fn test_parse_or_falls_back_on_garbage() {
        assert_eq!(parse_or("VALIDATOR_TIMEOUT_MS", "250", 5000u64), 250);
        assert_eq!(parse_or("VALIDATOR_TIMEOUT_MS", " 250 ", 5000u64), 250);
        assert_eq!(parse_or("VALIDATOR_TIMEOUT_MS", "abc", 5000u64), 5000);
        assert_eq!(parse_or("VALIDATOR_TIMEOUT_MS", "-1", 5000u64), 5000);
    }

    #[test]
    fn test_client_config_defaults() {
        if env::var("VALIDATOR_PATH").is_err() {
            assert_eq!(ClientConfig::executable_path(), DEFAULT_VALIDATOR_PATH);
        }

        if env::var("VALIDATOR_TIMEOUT_MS").is_err() {
            assert_eq!(ClientConfig::timeout(), Duration::from_millis(5000));
        }

        if env::var("LOG_FILTER").is_err() {
            assert_eq!(LogConfig::default_filter(), "warn");
        }
    }
}

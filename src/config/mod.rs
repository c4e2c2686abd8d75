//! # Configuration Module
//!
//! 검증기 바이너리와 서브프로세스 클라이언트의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`app_config`] - 실행 프로필, 로깅, 클라이언트 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 프로필 (.env.dev / .env.test / .env.prod 선택)
//! export PROFILE="dev"
//!
//! # 로깅 (RUST_LOG가 우선)
//! export LOG_FILTER="warn"
//!
//! # 서브프로세스 클라이언트
//! export VALIDATOR_PATH="./user_validator"
//! export VALIDATOR_TIMEOUT_MS="5000"
//! ```

pub mod app_config;

pub use app_config::*;

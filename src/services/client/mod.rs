//! 검증기 서브프로세스 클라이언트 모듈
//!
//! 검증기 바이너리를 외부 프로세스로 실행하고 결과를 해석합니다.

pub mod validation_client;

pub use validation_client::ValidationClient;

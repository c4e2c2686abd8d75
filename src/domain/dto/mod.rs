//! # Data Transfer Objects (DTO) Module
//!
//! 프로세스 경계(표준 입력, CLI 인자, 표준 출력)를 넘나드는 데이터 구조를 정의합니다.
//! `serde`로 JSON 필드를 매핑하고 `validator`로 입력값을 검증합니다.

pub mod users;

//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 길이 계산, 줄바꿈 제거, null 허용 역직렬화
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::char_count;
//!
//! let name = "  Zé  ".trim();
//! assert_eq!(char_count(name), 2);
//! ```

pub mod string_utils;

//! # 문자열 유틸리티
//!
//! 필드 검증과 JSON 역직렬화에서 공통으로 사용하는 문자열 처리 함수들입니다.

use serde::Deserialize;

/// 문자 수를 유니코드 코드 포인트 단위로 셉니다
///
/// 바이트 길이가 아닌 `char` 개수를 반환하므로 `"Zé"`는 2입니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::char_count;
///
/// assert_eq!(char_count("Zé"), 2);
/// assert_eq!("Zé".len(), 3);
/// ```
pub fn char_count(value: &str) -> usize {
    value.chars().count()
}

/// 입력 끝의 줄바꿈 바이트(`\n`, `\r\n`)를 제거합니다
///
/// 표준 입력에서 한 줄을 바이트 단위로 읽은 뒤 사용합니다. 다른 공백은 유지합니다.
/// UTF-8 검사는 하지 않으므로 잘못된 바이트는 그대로 JSON 디코더에 전달됩니다.
pub fn strip_line_ending(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\n")
        .map(|rest| rest.strip_suffix(b"\r").unwrap_or(rest))
        .unwrap_or(line)
}

/// null 값을 기본값으로 바꾸는 serde deserializer
///
/// JSON의 `null`을 해당 타입의 `Default` 값(빈 문자열, 0)으로 변환합니다.
/// 필드 누락은 컨테이너의 `#[serde(default)]`가 처리하고,
/// 명시적인 `null`은 이 함수가 처리합니다.
///
/// # 예제
/// ```rust,ignore
/// use serde::Deserialize;
/// use crate::utils::string_utils::deserialize_null_default;
///
/// #[derive(Deserialize)]
/// struct User {
///     #[serde(deserialize_with = "deserialize_null_default")]
///     name: String,
/// }
///
/// // JSON: {"name": null} → ""
/// // JSON: {"name": "Ana"} → "Ana"
/// ```
pub fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let opt = Option::<T>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_count_is_rune_aware() {
        assert_eq!(char_count(""), 0);
        assert_eq!(char_count("Jo"), 2);
        assert_eq!(char_count("Zé"), 2);
        assert_eq!(char_count("Ã"), 1);
        assert_eq!(char_count("😀"), 1);
    }

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending(b"{\"a\":1}\n"), b"{\"a\":1}");
        assert_eq!(strip_line_ending(b"{\"a\":1}\r\n"), b"{\"a\":1}");
        assert_eq!(strip_line_ending(b"{\"a\":1}"), b"{\"a\":1}");
        assert_eq!(strip_line_ending(b"  x  \n"), b"  x  ");
        assert_eq!(strip_line_ending(b"\xff\n"), b"\xff");
        assert_eq!(strip_line_ending(b""), b"");
    }

    #[test]
    fn test_deserialize_null_default() {
        use serde::Deserialize;

        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(default, deserialize_with = "deserialize_null_default")]
            text: String,
            #[serde(default, deserialize_with = "deserialize_null_default")]
            number: i64,
        }

        let json = r#"{"text": null, "number": null}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.text, "");
        assert_eq!(result.number, 0);

        let json = r#"{"text": "  Olá  ", "number": 42}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.text, "  Olá  ");
        assert_eq!(result.number, 42);

        let json = r#"{}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.text, "");
        assert_eq!(result.number, 0);

        // 타입이 맞지 않으면 여전히 에러
        let json = r#"{"text": 5}"#;
        assert!(serde_json::from_str::<TestStruct>(json).is_err());
    }
}

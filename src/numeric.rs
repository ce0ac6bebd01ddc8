//! 입력 파싱과 표시용 포맷 헬퍼.
//!
//! 계산 코어는 "값 없음"을 오류가 아닌 정상 상태로 다룬다. 비어 있거나
//! 숫자가 아닌 입력은 `None`으로, 출력의 `None`은 자리표시자 문자열로
//! 변환되어 0이나 NaN이 화면에 나타나지 않게 한다.

/// 값이 없을 때 표시하는 자리표시자.
pub const PLACEHOLDER: &str = "–";

/// 입력 문자열을 관대하게 f64로 파싱한다.
///
/// 앞쪽에서 숫자로 해석되는 가장 긴 접두부를 취한다 (`"120kt"` → 120).
/// 비어 있거나 숫자가 아니거나 유한하지 않으면 `None`을 반환한다.
pub fn parse_field(text: &str) -> Option<f64> {
    let s = text.trim();
    if s.is_empty() {
        return None;
    }
    let mut best = None;
    for end in 1..=s.len() {
        if !s.is_char_boundary(end) {
            continue;
        }
        if let Ok(v) = s[..end].parse::<f64>() {
            if v.is_finite() {
                best = Some(v);
            }
        }
    }
    best
}

/// 값을 고정 소수점 자리수로 포맷한다. 값이 없거나 유한하지 않으면
/// 자리표시자를 반환한다.
pub fn format_fixed(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.decimals$}"),
        _ => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_prefixed_numbers() {
        assert_eq!(parse_field("1013"), Some(1013.0));
        assert_eq!(parse_field("  -4.5 "), Some(-4.5));
        assert_eq!(parse_field("120kt"), Some(120.0));
        assert_eq!(parse_field("1.5e2x"), Some(150.0));
    }

    #[test]
    fn rejects_empty_and_non_numeric() {
        assert_eq!(parse_field(""), None);
        assert_eq!(parse_field("   "), None);
        assert_eq!(parse_field("abc"), None);
        assert_eq!(parse_field("inf"), None);
        assert_eq!(parse_field("NaN"), None);
    }

    #[test]
    fn formats_absent_as_placeholder() {
        assert_eq!(format_fixed(None, 1), PLACEHOLDER);
        assert_eq!(format_fixed(Some(f64::NAN), 0), PLACEHOLDER);
        assert_eq!(format_fixed(Some(f64::INFINITY), 0), PLACEHOLDER);
        assert_eq!(format_fixed(Some(29.9212), 3), "29.921");
        assert_eq!(format_fixed(Some(3048.0), 1), "3048.0");
    }
}

//! 비행시간 표기 변환: "시:분" ↔ 십진 시간.

/// "H:MM" 형태의 문자열을 십진 시간으로 변환한다.
///
/// 콜론으로 나뉜 두 부분이 모두 정수로 파싱돼야 하며, 그렇지 않으면
/// 값 없음으로 처리한다. 음수 시간은 의미가 없으므로 역시 `None`이다.
pub fn hhmm_to_decimal_hours(text: &str) -> Option<f64> {
    let mut parts = text.trim().split(':');
    let hours: u32 = parts.next()?.trim().parse().ok()?;
    let minutes: u32 = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(f64::from(hours) + f64::from(minutes) / 60.0)
}

/// 십진 시간을 "H:MM" 문자열로 변환한다. 분은 두 자리로 0을 채운다.
///
/// 분이 60으로 반올림되면 시간으로 올림한다 (1.999 → "2:00").
pub fn decimal_hours_to_hhmm(hours: f64) -> Option<String> {
    if !hours.is_finite() || hours < 0.0 {
        return None;
    }
    let mut h = hours.floor() as u64;
    let mut m = ((hours - hours.floor()) * 60.0).round() as u64;
    if m == 60 {
        h += 1;
        m = 0;
    }
    Some(format!("{h}:{m:02}"))
}

/// 십진 시간의 표시용 소수점 자리수.
pub const DECIMAL_HOURS_DISPLAY_DECIMALS: usize = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hhmm_to_decimal() {
        assert_eq!(hhmm_to_decimal_hours("1:30"), Some(1.5));
        assert_eq!(hhmm_to_decimal_hours(" 2:45 "), Some(2.75));
        assert_eq!(hhmm_to_decimal_hours("0:00"), Some(0.0));
    }

    #[test]
    fn invalid_time_split_is_absent() {
        assert_eq!(hhmm_to_decimal_hours("130"), None);
        assert_eq!(hhmm_to_decimal_hours("1:2:3"), None);
        assert_eq!(hhmm_to_decimal_hours("1:xx"), None);
        assert_eq!(hhmm_to_decimal_hours(""), None);
        assert_eq!(hhmm_to_decimal_hours("-1:30"), None);
    }

    #[test]
    fn decimal_to_hhmm() {
        assert_eq!(decimal_hours_to_hhmm(1.75).as_deref(), Some("1:45"));
        assert_eq!(decimal_hours_to_hhmm(2.0).as_deref(), Some("2:00"));
        assert_eq!(decimal_hours_to_hhmm(0.05).as_deref(), Some("0:03"));
    }

    #[test]
    fn minute_overflow_carries_into_hour() {
        assert_eq!(decimal_hours_to_hhmm(1.9999).as_deref(), Some("2:00"));
    }

    #[test]
    fn negative_and_non_finite_are_absent() {
        assert_eq!(decimal_hours_to_hhmm(-0.5), None);
        assert_eq!(decimal_hours_to_hhmm(f64::NAN), None);
    }

    #[test]
    fn roundtrip_within_rounding() {
        let dec = hhmm_to_decimal_hours("3:20").unwrap();
        // 표시 반올림(2자리)을 거쳐 되돌려도 같은 시:분이 나온다.
        let rounded = (dec * 100.0).round() / 100.0;
        assert_eq!(decimal_hours_to_hhmm(rounded).as_deref(), Some("3:20"));
    }
}

use serde::{Deserialize, Serialize};

/// 속도 단위. 내부 기준은 km/h이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedUnit {
    Knot,
    KilometerPerHour,
    MilePerHour,
}

pub const KMH_PER_KNOT: f64 = 1.852;
pub const KMH_PER_MPH: f64 = 1.609344;

fn to_kmh(value: f64, unit: SpeedUnit) -> f64 {
    match unit {
        SpeedUnit::KilometerPerHour => value,
        SpeedUnit::Knot => value * KMH_PER_KNOT,
        SpeedUnit::MilePerHour => value * KMH_PER_MPH,
    }
}

fn from_kmh(value_kmh: f64, unit: SpeedUnit) -> f64 {
    match unit {
        SpeedUnit::KilometerPerHour => value_kmh,
        SpeedUnit::Knot => value_kmh / KMH_PER_KNOT,
        SpeedUnit::MilePerHour => value_kmh / KMH_PER_MPH,
    }
}

/// 속도를 다른 단위로 변환한다.
pub fn convert_speed(value: f64, from: SpeedUnit, to: SpeedUnit) -> f64 {
    let kmh = to_kmh(value, from);
    from_kmh(kmh, to)
}

impl SpeedUnit {
    /// 표시용 소수점 자리수. 세 단위 모두 1자리이다.
    pub fn display_decimals(&self) -> usize {
        1
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            SpeedUnit::Knot => "kt",
            SpeedUnit::KilometerPerHour => "km/h",
            SpeedUnit::MilePerHour => "mph",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knots_to_kmh_and_mph() {
        let kmh = convert_speed(100.0, SpeedUnit::Knot, SpeedUnit::KilometerPerHour);
        assert!((kmh - 185.2).abs() < 1e-9);
        let mph = convert_speed(100.0, SpeedUnit::Knot, SpeedUnit::MilePerHour);
        assert!((mph - 115.08).abs() < 0.005, "mph={mph}");
    }

    #[test]
    fn repeated_roundtrip_does_not_drift() {
        // 표시 반올림(1자리)을 거치며 왕복해도 오차가 누적 증폭되지 않는다.
        let mut kt = 123.4;
        for _ in 0..10 {
            let kmh = convert_speed(kt, SpeedUnit::Knot, SpeedUnit::KilometerPerHour);
            let rounded = (kmh * 10.0).round() / 10.0;
            kt = convert_speed(rounded, SpeedUnit::KilometerPerHour, SpeedUnit::Knot);
            kt = (kt * 10.0).round() / 10.0;
        }
        assert!((kt - 123.4).abs() <= 0.1, "kt={kt}");
    }
}

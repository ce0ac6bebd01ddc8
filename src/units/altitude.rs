use serde::{Deserialize, Serialize};

/// 고도 단위. 내부 기준은 미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AltitudeUnit {
    Feet,
    Meter,
}

pub const METERS_PER_FOOT: f64 = 0.3048;

fn to_meter(value: f64, unit: AltitudeUnit) -> f64 {
    match unit {
        AltitudeUnit::Meter => value,
        AltitudeUnit::Feet => value * METERS_PER_FOOT,
    }
}

fn from_meter(value_m: f64, unit: AltitudeUnit) -> f64 {
    match unit {
        AltitudeUnit::Meter => value_m,
        AltitudeUnit::Feet => value_m / METERS_PER_FOOT,
    }
}

/// 고도를 다른 단위로 변환한다.
pub fn convert_altitude(value: f64, from: AltitudeUnit, to: AltitudeUnit) -> f64 {
    let m = to_meter(value, from);
    from_meter(m, to)
}

impl AltitudeUnit {
    /// 표시용 소수점 자리수.
    pub fn display_decimals(&self) -> usize {
        match self {
            AltitudeUnit::Feet => 0,
            AltitudeUnit::Meter => 1,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            AltitudeUnit::Feet => "ft",
            AltitudeUnit::Meter => "m",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_thousand_feet_in_meters() {
        let m = convert_altitude(10_000.0, AltitudeUnit::Feet, AltitudeUnit::Meter);
        assert!((m - 3048.0).abs() < 1e-9);
    }

    #[test]
    fn exact_roundtrip() {
        let m = convert_altitude(10_000.0, AltitudeUnit::Feet, AltitudeUnit::Meter);
        let ft = convert_altitude(m, AltitudeUnit::Meter, AltitudeUnit::Feet);
        assert!((ft - 10_000.0).abs() < 1e-9);
    }
}

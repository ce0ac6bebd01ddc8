use serde::{Deserialize, Serialize};

/// 기압 단위. 내부 기준은 hPa이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    HectoPascal,
    InchOfMercury,
}

/// 1 inHg에 해당하는 hPa. 고도계 셋팅 변환에 쓰는 값이다.
pub const HPA_PER_INHG: f64 = 33.8638866667;

fn to_hpa(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::HectoPascal => value,
        PressureUnit::InchOfMercury => value * HPA_PER_INHG,
    }
}

fn from_hpa(value_hpa: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::HectoPascal => value_hpa,
        PressureUnit::InchOfMercury => value_hpa / HPA_PER_INHG,
    }
}

/// 기압을 다른 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    let hpa = to_hpa(value, from);
    from_hpa(hpa, to)
}

impl PressureUnit {
    /// 표시용 소수점 자리수.
    pub fn display_decimals(&self) -> usize {
        match self {
            PressureUnit::HectoPascal => 1,
            PressureUnit::InchOfMercury => 3,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            PressureUnit::HectoPascal => "hPa",
            PressureUnit::InchOfMercury => "inHg",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_pressure_to_inhg() {
        let inhg = convert_pressure(
            1013.25,
            PressureUnit::HectoPascal,
            PressureUnit::InchOfMercury,
        );
        assert!((inhg - 29.9213).abs() < 5e-4, "inhg={inhg}");
    }

    #[test]
    fn inhg_roundtrip_within_display_rounding() {
        let inhg = convert_pressure(
            1013.25,
            PressureUnit::HectoPascal,
            PressureUnit::InchOfMercury,
        );
        let back = convert_pressure(
            (inhg * 1000.0).round() / 1000.0,
            PressureUnit::InchOfMercury,
            PressureUnit::HectoPascal,
        );
        assert!((back - 1013.25).abs() < 0.05, "back={back}");
    }
}

//! 밀도고도 어림 계산.
//!
//! DA ≈ PA + 120 × (OAT − ISA 온도). PA는 공항 표고와 고도계 수정치로
//! 구하고, ISA 온도는 1000 ft당 2 °C 감률을 쓴다.

/// 밀도고도 계산 입력.
#[derive(Debug, Clone)]
pub struct DensityAltitudeInput {
    /// 공항 표고 [ft]
    pub field_elevation_ft: f64,
    /// 고도계 수정치 [inHg]. 없으면 표고를 그대로 기압고도로 쓴다.
    pub altimeter_inhg: Option<f64>,
    /// 외기온도 [°C]
    pub oat_c: f64,
}

/// 밀도고도 계산 결과.
#[derive(Debug, Clone)]
pub struct DensityAltitudeReport {
    /// 기압고도 [ft]
    pub pressure_altitude_ft: f64,
    /// 해당 기압고도의 ISA 기준 온도 [°C]
    pub isa_temp_c: f64,
    /// 밀도고도 [ft]
    pub density_altitude_ft: f64,
    /// 이륙 거리 증가 추정 [%]: 1000 ft당 약 10%
    pub takeoff_distance_increase_pct: f64,
}

/// 표준 고도계 수정치 [inHg].
pub const STANDARD_ALTIMETER_INHG: f64 = 29.92;
/// ISA 해면 기준 온도 [°C].
pub const ISA_SEA_LEVEL_TEMP_C: f64 = 15.0;
/// ISA 온도 감률 [°C / 1000 ft].
pub const ISA_LAPSE_C_PER_1000FT: f64 = 2.0;
/// ISA 편차 1 °C당 밀도고도 증가 [ft].
pub const DA_FT_PER_DEG_C: f64 = 120.0;

/// 기압고도, ISA 온도, 밀도고도, 이륙 성능 영향을 계산한다.
///
/// 표고와 외기온도가 유한해야 한다. 고도계 수정치는 선택 입력이며
/// 유한하지 않은 값은 없는 것으로 본다.
pub fn density_altitude(input: DensityAltitudeInput) -> Option<DensityAltitudeReport> {
    let DensityAltitudeInput {
        field_elevation_ft,
        altimeter_inhg,
        oat_c,
    } = input;

    if !field_elevation_ft.is_finite() || !oat_c.is_finite() {
        return None;
    }

    let pressure_altitude_ft = match altimeter_inhg.filter(|v| v.is_finite()) {
        Some(setting) => field_elevation_ft + (STANDARD_ALTIMETER_INHG - setting) * 1000.0,
        None => field_elevation_ft,
    };
    let isa_temp_c =
        ISA_SEA_LEVEL_TEMP_C - ISA_LAPSE_C_PER_1000FT * (pressure_altitude_ft / 1000.0);
    let density_altitude_ft = pressure_altitude_ft + DA_FT_PER_DEG_C * (oat_c - isa_temp_c);
    let takeoff_distance_increase_pct = ((density_altitude_ft / 1000.0) * 10.0).max(0.0);

    Some(DensityAltitudeReport {
        pressure_altitude_ft,
        isa_temp_c,
        density_altitude_ft,
        takeoff_distance_increase_pct,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_day_at_5000_feet() {
        let rep = density_altitude(DensityAltitudeInput {
            field_elevation_ft: 5000.0,
            altimeter_inhg: Some(29.92),
            oat_c: 25.0,
        })
        .unwrap();
        assert!((rep.pressure_altitude_ft - 5000.0).abs() < 1e-9);
        assert!((rep.isa_temp_c - 5.0).abs() < 1e-9);
        assert!((rep.density_altitude_ft - 7400.0).abs() < 1e-9);
        assert!((rep.takeoff_distance_increase_pct - 74.0).abs() < 1e-9);
    }

    #[test]
    fn missing_altimeter_uses_field_elevation() {
        let rep = density_altitude(DensityAltitudeInput {
            field_elevation_ft: 2000.0,
            altimeter_inhg: None,
            oat_c: 11.0,
        })
        .unwrap();
        assert!((rep.pressure_altitude_ft - 2000.0).abs() < 1e-9);
        // ISA 11 °C와 같으므로 DA = PA
        assert!((rep.density_altitude_ft - 2000.0).abs() < 1e-9);
    }

    #[test]
    fn low_pressure_raises_pressure_altitude() {
        let rep = density_altitude(DensityAltitudeInput {
            field_elevation_ft: 1000.0,
            altimeter_inhg: Some(29.42),
            oat_c: 15.0,
        })
        .unwrap();
        assert!((rep.pressure_altitude_ft - 1500.0).abs() < 1e-6);
    }

    #[test]
    fn negative_density_altitude_clamps_impact_to_zero() {
        let rep = density_altitude(DensityAltitudeInput {
            field_elevation_ft: 0.0,
            altimeter_inhg: Some(29.92),
            oat_c: -30.0,
        })
        .unwrap();
        assert!(rep.density_altitude_ft < 0.0);
        assert_eq!(rep.takeoff_distance_increase_pct, 0.0);
    }

    #[test]
    fn non_finite_inputs_are_absent() {
        assert!(density_altitude(DensityAltitudeInput {
            field_elevation_ft: f64::NAN,
            altimeter_inhg: None,
            oat_c: 10.0,
        })
        .is_none());
        // 고도계 필드만 이상하면 없는 값으로 보고 계속 계산한다.
        assert!(density_altitude(DensityAltitudeInput {
            field_elevation_ft: 1000.0,
            altimeter_inhg: Some(f64::NAN),
            oat_c: 10.0,
        })
        .is_some());
    }
}

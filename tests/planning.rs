//! 비행 계획 계산기 통합 테스트.

use pilot_toolkit::planning::{
    density_altitude, estimate_groundspeed, plan_descent, standard_rate_turn, wind_components,
    CrosswindSide, DensityAltitudeInput, DescentInput, TurnInput, WindInput,
};

#[test]
fn descent_from_cruise_to_pattern() {
    let plan = plan_descent(DescentInput {
        cruise_altitude_ft: 9000.0,
        target_altitude_ft: 3000.0,
        groundspeed_kt: 120.0,
    })
    .unwrap();
    assert_eq!(plan.altitude_to_lose_ft, 6000.0);
    assert_eq!(plan.required_vs_fpm, 600.0);
    assert_eq!(plan.tod_distance_nm, 20.0);
    assert_eq!(plan.time_min, 10.0);
}

#[test]
fn descent_holding_on_ground_is_not_an_error() {
    // 대지속도 0은 정지 상태이므로 시간 0의 유효한 결과가 된다.
    let plan = plan_descent(DescentInput {
        cruise_altitude_ft: 5000.0,
        target_altitude_ft: 1000.0,
        groundspeed_kt: 0.0,
    })
    .unwrap();
    assert_eq!(plan.required_vs_fpm, 0.0);
    assert_eq!(plan.time_min, 0.0);

    // 음수 대지속도는 입력 자체가 말이 안 되므로 값 없음.
    assert!(plan_descent(DescentInput {
        cruise_altitude_ft: 5000.0,
        target_altitude_ft: 1000.0,
        groundspeed_kt: -10.0,
    })
    .is_none());
}

#[test]
fn standard_rate_turn_for_typical_tas() {
    let perf = standard_rate_turn(TurnInput {
        tas_kt: 120.0,
        turn_angle_deg: 180.0,
    })
    .unwrap();
    assert_eq!(perf.bank_angle_deg, 17.0);
    assert_eq!(perf.turn_time_s, 60.0);

    let full = standard_rate_turn(TurnInput {
        tas_kt: 120.0,
        turn_angle_deg: 360.0,
    })
    .unwrap();
    assert_eq!(full.turn_time_s, 120.0);

    assert!(standard_rate_turn(TurnInput {
        tas_kt: 0.0,
        turn_angle_deg: 90.0,
    })
    .is_none());
}

#[test]
fn runway_wind_components() {
    // 정풍: 측풍 없음
    let head_on = wind_components(WindInput {
        runway_heading_deg: 90.0,
        wind_direction_deg: 90.0,
        wind_speed_kt: 20.0,
    })
    .unwrap();
    assert!((head_on.headwind_kt - 20.0).abs() < 1e-9);
    assert_eq!(head_on.side, CrosswindSide::None);

    // 왼쪽 40° 사풍
    let quartering = wind_components(WindInput {
        runway_heading_deg: 90.0,
        wind_direction_deg: 50.0,
        wind_speed_kt: 20.0,
    })
    .unwrap();
    assert!((quartering.headwind_kt - 15.32).abs() < 0.005);
    assert!((quartering.crosswind_kt + 12.86).abs() < 0.005);
    assert_eq!(quartering.side, CrosswindSide::FromLeft);

    // 배풍은 음수 맞바람으로 나온다.
    let tail = wind_components(WindInput {
        runway_heading_deg: 90.0,
        wind_direction_deg: 270.0,
        wind_speed_kt: 20.0,
    })
    .unwrap();
    assert!((tail.headwind_kt + 20.0).abs() < 1e-9);

    assert!(wind_components(WindInput {
        runway_heading_deg: 90.0,
        wind_direction_deg: 50.0,
        wind_speed_kt: -5.0,
    })
    .is_none());
}

#[test]
fn groundspeed_estimate_from_wind() {
    assert_eq!(estimate_groundspeed(110.0, 15.0), Some(125.0));
    assert_eq!(estimate_groundspeed(110.0, -20.0), Some(90.0));
    assert_eq!(estimate_groundspeed(f64::NAN, 0.0), None);
}

#[test]
fn hot_high_field_density_altitude() {
    let report = density_altitude(DensityAltitudeInput {
        field_elevation_ft: 5000.0,
        altimeter_inhg: Some(29.92),
        oat_c: 25.0,
    })
    .unwrap();
    assert_eq!(report.pressure_altitude_ft, 5000.0);
    assert_eq!(report.isa_temp_c, 5.0);
    assert_eq!(report.density_altitude_ft, 7400.0);
    assert_eq!(report.takeoff_distance_increase_pct, 74.0);
}

#[test]
fn density_altitude_without_altimeter_setting() {
    // 기압계 설정이 없으면 공항 고도를 기압고도로 그대로 쓴다.
    let report = density_altitude(DensityAltitudeInput {
        field_elevation_ft: 1000.0,
        altimeter_inhg: None,
        oat_c: 13.0,
    })
    .unwrap();
    assert_eq!(report.pressure_altitude_ft, 1000.0);
    assert_eq!(report.isa_temp_c, 13.0);
    assert_eq!(report.density_altitude_ft, 1000.0);
}

#[test]
fn low_pressure_day_raises_pressure_altitude() {
    let report = density_altitude(DensityAltitudeInput {
        field_elevation_ft: 0.0,
        altimeter_inhg: Some(29.42),
        oat_c: 15.0,
    })
    .unwrap();
    assert!((report.pressure_altitude_ft - 500.0).abs() < 1e-6);
}

//! 변환기 시나리오 통합 테스트.
//! 실제 비행 준비에서 나올 법한 값들로 전체 변환 경로를 확인한다.

use pilot_toolkit::numeric::{format_fixed, parse_field};
use pilot_toolkit::units::{
    convert_altitude, convert_distance, convert_fuel, convert_pressure, convert_speed,
    convert_temperature, decimal_hours_to_hhmm, hhmm_to_decimal_hours, AltitudeUnit, DistanceUnit,
    FuelUnit, PressureUnit, SpeedUnit, TemperatureUnit,
};

#[test]
fn altimeter_setting_both_ways() {
    let inhg = convert_pressure(
        1013.25,
        PressureUnit::HectoPascal,
        PressureUnit::InchOfMercury,
    );
    assert!((inhg - 29.9213).abs() < 5e-4, "inhg={inhg}");

    let hpa = convert_pressure(
        29.92,
        PressureUnit::InchOfMercury,
        PressureUnit::HectoPascal,
    );
    assert!((hpa - 1013.2).abs() < 0.05, "hpa={hpa}");
}

#[test]
fn transition_altitude_in_meters() {
    let m = convert_altitude(10_000.0, AltitudeUnit::Feet, AltitudeUnit::Meter);
    assert_eq!(m, 3048.0);
    let ft = convert_altitude(m, AltitudeUnit::Meter, AltitudeUnit::Feet);
    assert_eq!(ft, 10_000.0);
}

#[test]
fn leg_distance_three_units() {
    let km = convert_distance(100.0, DistanceUnit::NauticalMile, DistanceUnit::Kilometer);
    assert!((km - 185.2).abs() < 1e-9);
    let sm = convert_distance(100.0, DistanceUnit::NauticalMile, DistanceUnit::StatuteMile);
    assert!((sm - 115.08).abs() < 0.005, "sm={sm}");
    // km 경유와 직접 변환이 같은 값이어야 한다.
    let sm_via_km = convert_distance(km, DistanceUnit::Kilometer, DistanceUnit::StatuteMile);
    assert!((sm - sm_via_km).abs() < 1e-9);
}

#[test]
fn fuel_load_volume_and_weight() {
    let liters = convert_fuel(50.0, FuelUnit::UsGallon, FuelUnit::Liter);
    assert!((liters - 189.27).abs() < 0.005, "liters={liters}");
    let kg = convert_fuel(50.0, FuelUnit::UsGallon, FuelUnit::Kilogram);
    assert!((kg - 136.27).abs() < 0.005, "kg={kg}");
    let lb = convert_fuel(kg, FuelUnit::Kilogram, FuelUnit::Pound);
    assert!((lb - 300.4).abs() < 0.05, "lb={lb}");

    // 중량에서 출발해도 같은 연료량으로 돌아온다.
    let gal = convert_fuel(lb, FuelUnit::Pound, FuelUnit::UsGallon);
    assert!((gal - 50.0).abs() < 1e-9, "gal={gal}");
}

#[test]
fn oat_reports_in_fahrenheit() {
    assert_eq!(
        convert_temperature(15.0, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit),
        59.0
    );
    assert_eq!(
        convert_temperature(-40.0, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit),
        -40.0
    );
}

#[test]
fn groundspeed_unit_chain_has_no_drift() {
    let mut kt = 100.0;
    for _ in 0..100 {
        let kmh = convert_speed(kt, SpeedUnit::Knot, SpeedUnit::KilometerPerHour);
        let mph = convert_speed(kmh, SpeedUnit::KilometerPerHour, SpeedUnit::MilePerHour);
        kt = convert_speed(mph, SpeedUnit::MilePerHour, SpeedUnit::Knot);
    }
    assert!((kt - 100.0).abs() < 1e-6, "kt={kt}");
}

#[test]
fn block_time_conversions() {
    assert_eq!(hhmm_to_decimal_hours("2:30"), Some(2.5));
    assert_eq!(decimal_hours_to_hhmm(1.75).as_deref(), Some("1:45"));
    // 반올림이 60분을 만들면 시로 올린다.
    assert_eq!(decimal_hours_to_hhmm(1.9999).as_deref(), Some("2:00"));
    assert_eq!(hhmm_to_decimal_hours("plan later"), None);
    assert_eq!(decimal_hours_to_hhmm(-0.5), None);
}

#[test]
fn absent_input_stays_absent_through_display() {
    let value = parse_field("  ");
    assert_eq!(value, None);
    let converted = value.map(|v| {
        convert_pressure(v, PressureUnit::HectoPascal, PressureUnit::InchOfMercury)
    });
    assert_eq!(format_fixed(converted, 3), "–");
}

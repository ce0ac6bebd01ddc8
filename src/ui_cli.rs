use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::i18n::{keys, Translator};
use crate::numeric::{self, format_fixed};
use crate::planning::{
    density_altitude, estimate_groundspeed, plan_descent, standard_rate_turn, wind_components,
    CrosswindSide, DensityAltitudeInput, DescentInput, TurnInput, WindInput,
};
use crate::units::{
    convert_altitude, convert_distance, convert_fuel, convert_pressure, convert_speed,
    convert_temperature, decimal_hours_to_hhmm, hhmm_to_decimal_hours, time, AltitudeUnit,
    DistanceUnit, FuelUnit, PressureUnit, SpeedUnit, TemperatureUnit,
};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Converters,
    Descent,
    Turns,
    Winds,
    DensityAltitude,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_CONVERTERS));
    println!("{}", tr.t(keys::MAIN_MENU_DESCENT));
    println!("{}", tr.t(keys::MAIN_MENU_TURNS));
    println!("{}", tr.t(keys::MAIN_MENU_WINDS));
    println!("{}", tr.t(keys::MAIN_MENU_DENSITY_ALTITUDE));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Converters),
            "2" => return Ok(MenuChoice::Descent),
            "3" => return Ok(MenuChoice::Turns),
            "4" => return Ok(MenuChoice::Winds),
            "5" => return Ok(MenuChoice::DensityAltitude),
            "6" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 변환기 메뉴를 처리한다.
pub fn handle_converters(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CONVERTERS_HEADING));
    println!("{}", tr.t(keys::CONVERTERS_OPTIONS));
    println!("{}", tr.t(keys::NOTE_ABSENT_INPUT));
    let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
    match sel.trim() {
        "1" => handle_pressure(tr)?,
        "2" => handle_altitude(tr)?,
        "3" => handle_distance(tr)?,
        "4" => handle_fuel(tr)?,
        "5" => handle_temperature(tr)?,
        "6" => handle_speed(tr)?,
        "7" => handle_time(tr)?,
        _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
    }
    Ok(())
}

fn handle_pressure(tr: &Translator) -> Result<(), AppError> {
    println!("1) hPa  2) inHg");
    let from = match read_line(tr.t(keys::PROMPT_SOURCE_UNIT))?.trim() {
        "2" => PressureUnit::InchOfMercury,
        _ => PressureUnit::HectoPascal,
    };
    let value = read_optional_f64(tr.t(keys::PROMPT_VALUE))?;
    for to in [PressureUnit::HectoPascal, PressureUnit::InchOfMercury] {
        let out = value.map(|v| convert_pressure(v, from, to));
        println!(
            "  {}: {}",
            to.symbol(),
            format_fixed(out, to.display_decimals())
        );
    }
    Ok(())
}

fn handle_altitude(tr: &Translator) -> Result<(), AppError> {
    println!("1) ft  2) m");
    let from = match read_line(tr.t(keys::PROMPT_SOURCE_UNIT))?.trim() {
        "2" => AltitudeUnit::Meter,
        _ => AltitudeUnit::Feet,
    };
    let value = read_optional_f64(tr.t(keys::PROMPT_VALUE))?;
    for to in [AltitudeUnit::Feet, AltitudeUnit::Meter] {
        let out = value.map(|v| convert_altitude(v, from, to));
        println!(
            "  {}: {}",
            to.symbol(),
            format_fixed(out, to.display_decimals())
        );
    }
    Ok(())
}

fn handle_distance(tr: &Translator) -> Result<(), AppError> {
    println!("1) NM  2) km  3) SM");
    let from = match read_line(tr.t(keys::PROMPT_SOURCE_UNIT))?.trim() {
        "2" => DistanceUnit::Kilometer,
        "3" => DistanceUnit::StatuteMile,
        _ => DistanceUnit::NauticalMile,
    };
    let value = read_optional_f64(tr.t(keys::PROMPT_VALUE))?;
    for to in [
        DistanceUnit::NauticalMile,
        DistanceUnit::Kilometer,
        DistanceUnit::StatuteMile,
    ] {
        let out = value.map(|v| convert_distance(v, from, to));
        println!(
            "  {}: {}",
            to.symbol(),
            format_fixed(out, to.display_decimals())
        );
    }
    Ok(())
}

fn handle_fuel(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::FUEL_HINT));
    println!("1) gal  2) L  3) lb  4) kg");
    let from = match read_line(tr.t(keys::PROMPT_SOURCE_UNIT))?.trim() {
        "2" => FuelUnit::Liter,
        "3" => FuelUnit::Pound,
        "4" => FuelUnit::Kilogram,
        _ => FuelUnit::UsGallon,
    };
    let value = read_optional_f64(tr.t(keys::PROMPT_VALUE))?;
    for to in [
        FuelUnit::UsGallon,
        FuelUnit::Liter,
        FuelUnit::Pound,
        FuelUnit::Kilogram,
    ] {
        let out = value.map(|v| convert_fuel(v, from, to));
        println!(
            "  {}: {}",
            to.symbol(),
            format_fixed(out, to.display_decimals())
        );
    }
    Ok(())
}

fn handle_temperature(tr: &Translator) -> Result<(), AppError> {
    println!("1) °C  2) °F");
    let from = match read_line(tr.t(keys::PROMPT_SOURCE_UNIT))?.trim() {
        "2" => TemperatureUnit::Fahrenheit,
        _ => TemperatureUnit::Celsius,
    };
    let value = read_optional_f64(tr.t(keys::PROMPT_VALUE))?;
    for to in [TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit] {
        let out = value.map(|v| convert_temperature(v, from, to));
        println!(
            "  {}: {}",
            to.symbol(),
            format_fixed(out, to.display_decimals())
        );
    }
    Ok(())
}

fn handle_speed(tr: &Translator) -> Result<(), AppError> {
    println!("1) kt  2) km/h  3) mph");
    let from = match read_line(tr.t(keys::PROMPT_SOURCE_UNIT))?.trim() {
        "2" => SpeedUnit::KilometerPerHour,
        "3" => SpeedUnit::MilePerHour,
        _ => SpeedUnit::Knot,
    };
    let value = read_optional_f64(tr.t(keys::PROMPT_VALUE))?;
    for to in [
        SpeedUnit::Knot,
        SpeedUnit::KilometerPerHour,
        SpeedUnit::MilePerHour,
    ] {
        let out = value.map(|v| convert_speed(v, from, to));
        println!(
            "  {}: {}",
            to.symbol(),
            format_fixed(out, to.display_decimals())
        );
    }
    Ok(())
}

fn handle_time(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::TIME_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
    match sel.trim() {
        "2" => {
            let dec = read_optional_f64(tr.t(keys::PROMPT_TIME_DECIMAL))?;
            let hhmm = dec.and_then(decimal_hours_to_hhmm);
            println!(
                "  {}: {}",
                tr.t(keys::TIME_HM_LABEL),
                hhmm.as_deref().unwrap_or(numeric::PLACEHOLDER)
            );
        }
        _ => {
            let text = read_line(tr.t(keys::PROMPT_TIME_HHMM))?;
            let dec = hhmm_to_decimal_hours(&text);
            println!(
                "  {}: {}",
                tr.t(keys::TIME_DEC_LABEL),
                format_fixed(dec, time::DECIMAL_HOURS_DISPLAY_DECIMALS)
            );
        }
    }
    Ok(())
}

/// 하강 계획 메뉴를 처리한다.
pub fn handle_descent(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::DESCENT_HEADING));
    println!("{}", tr.t(keys::DESCENT_HINT));
    let cruise = read_optional_f64(tr.t(keys::PROMPT_CRUISE_ALT))?;
    let target = read_optional_f64(tr.t(keys::PROMPT_TARGET_ALT))?;
    let gs = read_optional_f64(tr.t(keys::PROMPT_GROUNDSPEED))?;

    let plan = match (cruise, target, gs) {
        (Some(cruise_altitude_ft), Some(target_altitude_ft), Some(groundspeed_kt)) => {
            plan_descent(DescentInput {
                cruise_altitude_ft,
                target_altitude_ft,
                groundspeed_kt,
            })
        }
        _ => None,
    };

    println!(
        "  {}: {} ft",
        tr.t(keys::ALT_TO_LOSE),
        format_fixed(plan.as_ref().map(|p| p.altitude_to_lose_ft), 0)
    );
    println!(
        "  {}: {} NM",
        tr.t(keys::TOD_DISTANCE),
        format_fixed(plan.as_ref().map(|p| p.tod_distance_nm), 1)
    );
    println!(
        "  {}: {} fpm",
        tr.t(keys::REQUIRED_VS),
        format_fixed(plan.as_ref().map(|p| p.required_vs_fpm), 0)
    );
    println!(
        "  {}: {} min",
        tr.t(keys::DESCENT_TIME),
        format_fixed(plan.as_ref().map(|p| p.time_min), 1)
    );
    Ok(())
}

/// 표준 선회율 메뉴를 처리한다.
pub fn handle_turns(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::TURNS_HEADING));
    println!("{}", tr.t(keys::TURN_HINT));
    let tas = read_optional_f64(tr.t(keys::PROMPT_TAS))?;
    let angle = read_optional_f64(tr.t(keys::PROMPT_TURN_ANGLE))?;

    let perf = match (tas, angle) {
        (Some(tas_kt), Some(turn_angle_deg)) => standard_rate_turn(TurnInput {
            tas_kt,
            turn_angle_deg,
        }),
        _ => None,
    };

    println!(
        "  {}: {} °",
        tr.t(keys::STD_BANK_ANGLE),
        format_fixed(perf.as_ref().map(|p| p.bank_angle_deg), 1)
    );
    println!(
        "  {}: {} s",
        tr.t(keys::TURN_TIME),
        format_fixed(perf.as_ref().map(|p| p.turn_time_s), 0)
    );
    Ok(())
}

/// 바람 성분과 대지속도 추정 메뉴를 처리한다.
pub fn handle_winds(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::WINDS_HEADING));
    let rwy = read_optional_f64(tr.t(keys::PROMPT_RUNWAY_HEADING))?;
    let dir = read_optional_f64(tr.t(keys::PROMPT_WIND_DIR))?;
    let spd = read_optional_f64(tr.t(keys::PROMPT_WIND_SPEED))?;

    let comps = match (rwy, dir, spd) {
        (Some(runway_heading_deg), Some(wind_direction_deg), Some(wind_speed_kt)) => {
            wind_components(WindInput {
                runway_heading_deg,
                wind_direction_deg,
                wind_speed_kt,
            })
        }
        _ => None,
    };

    println!(
        "  {}: {} kt",
        tr.t(keys::HEADWIND_COMP),
        format_fixed(comps.as_ref().map(|c| c.headwind_kt), 0)
    );
    match comps {
        Some(ref c) => println!(
            "  {}: {} kt ({})",
            tr.t(keys::CROSSWIND_COMP),
            format_fixed(Some(c.crosswind_kt.abs()), 0),
            tr.t(side_key(c.side))
        ),
        None => println!(
            "  {}: {}",
            tr.t(keys::CROSSWIND_COMP),
            numeric::PLACEHOLDER
        ),
    }

    println!("{}", tr.t(keys::GS_ESTIMATE_HEADING));
    println!("{}", tr.t(keys::GS_ESTIMATE_HINT));
    let tas = read_optional_f64(tr.t(keys::PROMPT_TAS))?;
    let head = read_optional_f64(tr.t(keys::PROMPT_HEADWIND))?;
    let gs = match (tas, head) {
        (Some(t), Some(h)) => estimate_groundspeed(t, h),
        _ => None,
    };
    println!(
        "  {}: {} kt",
        tr.t(keys::GS_ESTIMATE_RESULT),
        format_fixed(gs, 0)
    );
    Ok(())
}

fn side_key(side: CrosswindSide) -> &'static str {
    match side {
        CrosswindSide::None => keys::WIND_SIDE_NONE,
        CrosswindSide::FromRight => keys::WIND_SIDE_FROM_RIGHT,
        CrosswindSide::FromLeft => keys::WIND_SIDE_FROM_LEFT,
    }
}

/// 밀도고도 메뉴를 처리한다.
pub fn handle_density_altitude(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::DA_HEADING));
    println!("{}", tr.t(keys::DA_HINT));
    let elev = read_optional_f64(tr.t(keys::PROMPT_FIELD_ELEV))?;
    let altimeter = read_optional_f64(tr.t(keys::PROMPT_ALTIMETER))?;
    let oat = read_optional_f64(tr.t(keys::PROMPT_OAT))?;

    let report = match (elev, oat) {
        (Some(field_elevation_ft), Some(oat_c)) => density_altitude(DensityAltitudeInput {
            field_elevation_ft,
            altimeter_inhg: altimeter,
            oat_c,
        }),
        _ => None,
    };

    println!(
        "  {}: {} ft",
        tr.t(keys::PA_LABEL),
        format_fixed(report.as_ref().map(|r| r.pressure_altitude_ft), 0)
    );
    println!(
        "  {}: {} °C",
        tr.t(keys::ISA_TEMP_LABEL),
        format_fixed(report.as_ref().map(|r| r.isa_temp_c), 1)
    );
    println!(
        "  {}: {} ft",
        tr.t(keys::DA_LABEL),
        format_fixed(report.as_ref().map(|r| r.density_altitude_ft), 0)
    );
    println!(
        "  {}: ≈ {} %",
        tr.t(keys::PERF_IMPACT),
        format_fixed(
            report.as_ref().map(|r| r.takeoff_distance_increase_pct),
            0
        )
    );
    Ok(())
}

/// 설정 메뉴를 처리한다. 언어가 바뀌었으면 true를 반환한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_THEME), cfg.theme.as_str());
    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_LANGUAGE),
        cfg.language
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => Ok(false),
        "1" => {
            cfg.theme = cfg.theme.toggled();
            println!("{}", tr.t(keys::SETTINGS_SAVED));
            Ok(false)
        }
        "2" => {
            println!("{}", tr.t(keys::SETTINGS_LANGUAGE_OPTIONS));
            let lang = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
            let changed = match lang.trim() {
                "1" => {
                    cfg.language = "en".to_string();
                    true
                }
                "2" => {
                    cfg.language = "ko".to_string();
                    true
                }
                "3" => {
                    cfg.language = "auto".to_string();
                    true
                }
                _ => {
                    println!("{}", tr.t(keys::SETTINGS_INVALID));
                    false
                }
            };
            if changed {
                println!("{}", tr.t(keys::SETTINGS_SAVED));
            }
            Ok(changed)
        }
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            Ok(false)
        }
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

/// 숫자 입력을 읽는다. 비어 있거나 숫자가 아니면 값 없음으로 돌려준다.
fn read_optional_f64(prompt: &str) -> Result<Option<f64>, AppError> {
    let s = read_line(prompt)?;
    Ok(numeric::parse_field(&s))
}

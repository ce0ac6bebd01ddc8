#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.
//!
//! 각 변환 그룹은 연결된 입력 필드 집합이다. 마지막으로 고친 필드가
//! 기준이 되어 나머지 필드를 다시 채운다. 빈 입력은 형제 필드도 비운다.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};

use pilot_toolkit::{
    config::{self, Config, Theme},
    i18n::{self, keys, Translator},
    numeric::{format_fixed, parse_field, PLACEHOLDER},
    planning::{
        density_altitude, estimate_groundspeed, plan_descent, standard_rate_turn,
        wind_components, CrosswindSide, DensityAltitudeInput, DescentInput, TurnInput, WindInput,
    },
    units::{
        convert_altitude, convert_distance, convert_fuel, convert_pressure, convert_speed,
        convert_temperature, decimal_hours_to_hhmm, hhmm_to_decimal_hours, time, AltitudeUnit,
        DistanceUnit, FuelUnit, PressureUnit, SpeedUnit, TemperatureUnit,
    },
};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en/ko)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_inner_size([760.0, 640.0]);
    if let Some(icon) = icon_data {
        viewport = viewport.with_icon(icon);
    }
    let native = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }

    eframe::run_native(
        "Pilot Toolkit",
        native,
        Box::new(move |cc| {
            let font_error = setup_fonts(&cc.egui_ctx).err();
            Box::new(GuiApp::new(app_cfg.clone(), font_error))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글 표시가 가능한 시스템 폰트를 찾아 적용한다.
/// 모두 실패하면 Err를 반환해 설정에서 사용자 지정 폰트를 고르게 한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let candidates = [
        "assets/fonts/malgun.ttf",
        "C:/Windows/Fonts/malgun.ttf",
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
        "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    ];
    for path in candidates {
        if Path::new(path).exists() {
            let bytes =
                fs::read(path).map_err(|e| format!("Failed to read font file: {e}"))?;
            apply_font_bytes(ctx, bytes, "system_cjk");
            return Ok(());
        }
    }
    Err("no CJK-capable font found".to_string())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Converters,
    Descent,
    Turns,
    Winds,
    DensityAltitude,
}

struct GuiApp {
    cfg: Config,
    tr: Translator,
    tab: Tab,
    show_settings_modal: bool,
    custom_font_path: String,
    font_load_error: Option<String>,
    pending_font: Option<Vec<u8>>,

    // 변환기 필드 버퍼
    press_hpa: String,
    press_inhg: String,
    alt_ft: String,
    alt_m: String,
    dist_nm: String,
    dist_km: String,
    dist_sm: String,
    fuel_gal: String,
    fuel_l: String,
    fuel_lb: String,
    fuel_kg: String,
    temp_c: String,
    temp_f: String,
    speed_kt: String,
    speed_kmh: String,
    speed_mph: String,
    time_hm: String,
    time_dec: String,

    // 계산기 입력 버퍼 (출력은 매 프레임 다시 계산)
    descent_cruise: String,
    descent_target: String,
    descent_gs: String,
    turn_tas: String,
    turn_angle: String,
    wind_rwy: String,
    wind_dir: String,
    wind_speed: String,
    gs_tas: String,
    gs_head: String,
    da_elev: String,
    da_altset: String,
    da_oat: String,
}

impl GuiApp {
    fn new(cfg: Config, font_load_error: Option<String>) -> Self {
        let code = i18n::resolve_language(&cfg.language, None);
        let tr = Translator::new_with_pack(&code, None);
        Self {
            cfg,
            tr,
            tab: Tab::Converters,
            show_settings_modal: false,
            custom_font_path: String::new(),
            font_load_error,
            pending_font: None,
            press_hpa: String::new(),
            press_inhg: String::new(),
            alt_ft: String::new(),
            alt_m: String::new(),
            dist_nm: String::new(),
            dist_km: String::new(),
            dist_sm: String::new(),
            fuel_gal: String::new(),
            fuel_l: String::new(),
            fuel_lb: String::new(),
            fuel_kg: String::new(),
            temp_c: String::new(),
            temp_f: String::new(),
            speed_kt: String::new(),
            speed_kmh: String::new(),
            speed_mph: String::new(),
            time_hm: String::new(),
            time_dec: String::new(),
            descent_cruise: String::new(),
            descent_target: String::new(),
            descent_gs: String::new(),
            turn_tas: String::new(),
            turn_angle: String::new(),
            wind_rwy: String::new(),
            wind_dir: String::new(),
            wind_speed: String::new(),
            gs_tas: String::new(),
            gs_head: String::new(),
            da_elev: String::new(),
            da_altset: String::new(),
            da_oat: String::new(),
        }
    }

    fn set_language(&mut self, code: &str) {
        self.cfg.language = code.to_string();
        let resolved = i18n::resolve_language(code, None);
        self.tr = Translator::new_with_pack(&resolved, None);
        let _ = self.cfg.save();
    }

    fn toggle_theme(&mut self) {
        self.cfg.theme = self.cfg.theme.toggled();
        let _ = self.cfg.save();
    }

    // ---- 그룹 동기화: 마지막으로 고친 필드 기준으로 형제 필드를 다시 채운다 ----

    fn sync_pressure(&mut self, from: PressureUnit) {
        let source = match from {
            PressureUnit::HectoPascal => &self.press_hpa,
            PressureUnit::InchOfMercury => &self.press_inhg,
        };
        let value = parse_field(source);
        for to in [PressureUnit::HectoPascal, PressureUnit::InchOfMercury] {
            if to == from {
                continue;
            }
            let text = fill(value.map(|v| convert_pressure(v, from, to)), to.display_decimals());
            match to {
                PressureUnit::HectoPascal => self.press_hpa = text,
                PressureUnit::InchOfMercury => self.press_inhg = text,
            }
        }
    }

    fn sync_altitude(&mut self, from: AltitudeUnit) {
        let source = match from {
            AltitudeUnit::Feet => &self.alt_ft,
            AltitudeUnit::Meter => &self.alt_m,
        };
        let value = parse_field(source);
        for to in [AltitudeUnit::Feet, AltitudeUnit::Meter] {
            if to == from {
                continue;
            }
            let text = fill(value.map(|v| convert_altitude(v, from, to)), to.display_decimals());
            match to {
                AltitudeUnit::Feet => self.alt_ft = text,
                AltitudeUnit::Meter => self.alt_m = text,
            }
        }
    }

    fn sync_distance(&mut self, from: DistanceUnit) {
        let source = match from {
            DistanceUnit::NauticalMile => &self.dist_nm,
            DistanceUnit::Kilometer => &self.dist_km,
            DistanceUnit::StatuteMile => &self.dist_sm,
        };
        let value = parse_field(source);
        for to in [
            DistanceUnit::NauticalMile,
            DistanceUnit::Kilometer,
            DistanceUnit::StatuteMile,
        ] {
            if to == from {
                continue;
            }
            let text = fill(value.map(|v| convert_distance(v, from, to)), to.display_decimals());
            match to {
                DistanceUnit::NauticalMile => self.dist_nm = text,
                DistanceUnit::Kilometer => self.dist_km = text,
                DistanceUnit::StatuteMile => self.dist_sm = text,
            }
        }
    }

    fn sync_fuel(&mut self, from: FuelUnit) {
        let source = match from {
            FuelUnit::UsGallon => &self.fuel_gal,
            FuelUnit::Liter => &self.fuel_l,
            FuelUnit::Pound => &self.fuel_lb,
            FuelUnit::Kilogram => &self.fuel_kg,
        };
        let value = parse_field(source);
        for to in [
            FuelUnit::UsGallon,
            FuelUnit::Liter,
            FuelUnit::Pound,
            FuelUnit::Kilogram,
        ] {
            if to == from {
                continue;
            }
            let text = fill(value.map(|v| convert_fuel(v, from, to)), to.display_decimals());
            match to {
                FuelUnit::UsGallon => self.fuel_gal = text,
                FuelUnit::Liter => self.fuel_l = text,
                FuelUnit::Pound => self.fuel_lb = text,
                FuelUnit::Kilogram => self.fuel_kg = text,
            }
        }
    }

    fn sync_temperature(&mut self, from: TemperatureUnit) {
        let source = match from {
            TemperatureUnit::Celsius => &self.temp_c,
            TemperatureUnit::Fahrenheit => &self.temp_f,
        };
        let value = parse_field(source);
        for to in [TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit] {
            if to == from {
                continue;
            }
            let text = fill(
                value.map(|v| convert_temperature(v, from, to)),
                to.display_decimals(),
            );
            match to {
                TemperatureUnit::Celsius => self.temp_c = text,
                TemperatureUnit::Fahrenheit => self.temp_f = text,
            }
        }
    }

    fn sync_speed(&mut self, from: SpeedUnit) {
        let source = match from {
            SpeedUnit::Knot => &self.speed_kt,
            SpeedUnit::KilometerPerHour => &self.speed_kmh,
            SpeedUnit::MilePerHour => &self.speed_mph,
        };
        let value = parse_field(source);
        for to in [
            SpeedUnit::Knot,
            SpeedUnit::KilometerPerHour,
            SpeedUnit::MilePerHour,
        ] {
            if to == from {
                continue;
            }
            let text = fill(value.map(|v| convert_speed(v, from, to)), to.display_decimals());
            match to {
                SpeedUnit::Knot => self.speed_kt = text,
                SpeedUnit::KilometerPerHour => self.speed_kmh = text,
                SpeedUnit::MilePerHour => self.speed_mph = text,
            }
        }
    }

    fn sync_time_from_hhmm(&mut self) {
        self.time_dec = match hhmm_to_decimal_hours(&self.time_hm) {
            Some(dec) => format_fixed(Some(dec), time::DECIMAL_HOURS_DISPLAY_DECIMALS),
            None => String::new(),
        };
    }

    fn sync_time_from_decimal(&mut self) {
        self.time_hm = parse_field(&self.time_dec)
            .and_then(decimal_hours_to_hhmm)
            .unwrap_or_default();
    }

    // ---- 화면 ----

    fn ui_top_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading(self.tr.t(keys::APP_TITLE));
            ui.label(self.tr.t(keys::APP_SUBTITLE));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let theme_icon = match self.cfg.theme {
                    Theme::Dark => "☀",
                    Theme::Light => "🌙",
                };
                if ui.button(theme_icon).clicked() {
                    self.toggle_theme();
                }
                if ui
                    .selectable_label(self.tr.language() == i18n::Language::Ko, "KO")
                    .clicked()
                {
                    self.set_language("ko");
                }
                if ui
                    .selectable_label(self.tr.language() == i18n::Language::En, "EN")
                    .clicked()
                {
                    self.set_language("en");
                }
                if ui.button("⚙").clicked() {
                    self.show_settings_modal = true;
                }
            });
        });
        ui.separator();
        ui.horizontal(|ui| {
            ui.selectable_value(
                &mut self.tab,
                Tab::Converters,
                tab_label(self.tr.t(keys::CONVERTERS_HEADING)),
            );
            ui.selectable_value(
                &mut self.tab,
                Tab::Descent,
                tab_label(self.tr.t(keys::DESCENT_HEADING)),
            );
            ui.selectable_value(
                &mut self.tab,
                Tab::Turns,
                tab_label(self.tr.t(keys::TURNS_HEADING)),
            );
            ui.selectable_value(
                &mut self.tab,
                Tab::Winds,
                tab_label(self.tr.t(keys::WINDS_HEADING)),
            );
            ui.selectable_value(
                &mut self.tab,
                Tab::DensityAltitude,
                tab_label(self.tr.t(keys::DA_HEADING)),
            );
        });
    }

    fn ui_converters(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.tr.t(keys::PRESSURE_TITLE));
        egui::Grid::new("pressure").num_columns(4).show(ui, |ui| {
            ui.label("hPa");
            if ui.text_edit_singleline(&mut self.press_hpa).changed() {
                self.sync_pressure(PressureUnit::HectoPascal);
            }
            ui.label("inHg");
            if ui.text_edit_singleline(&mut self.press_inhg).changed() {
                self.sync_pressure(PressureUnit::InchOfMercury);
            }
            ui.end_row();
        });

        ui.separator();
        ui.heading(self.tr.t(keys::ALTITUDE_TITLE));
        egui::Grid::new("altitude").num_columns(4).show(ui, |ui| {
            ui.label(self.tr.t(keys::FEET_LABEL));
            if ui.text_edit_singleline(&mut self.alt_ft).changed() {
                self.sync_altitude(AltitudeUnit::Feet);
            }
            ui.label(self.tr.t(keys::METERS_LABEL));
            if ui.text_edit_singleline(&mut self.alt_m).changed() {
                self.sync_altitude(AltitudeUnit::Meter);
            }
            ui.end_row();
        });

        ui.separator();
        ui.heading(self.tr.t(keys::DISTANCE_TITLE));
        egui::Grid::new("distance").num_columns(6).show(ui, |ui| {
            ui.label("NM");
            if ui.text_edit_singleline(&mut self.dist_nm).changed() {
                self.sync_distance(DistanceUnit::NauticalMile);
            }
            ui.label("km");
            if ui.text_edit_singleline(&mut self.dist_km).changed() {
                self.sync_distance(DistanceUnit::Kilometer);
            }
            ui.label("SM");
            if ui.text_edit_singleline(&mut self.dist_sm).changed() {
                self.sync_distance(DistanceUnit::StatuteMile);
            }
            ui.end_row();
        });

        ui.separator();
        ui.heading(self.tr.t(keys::FUEL_TITLE));
        ui.label(self.tr.t(keys::FUEL_HINT));
        egui::Grid::new("fuel").num_columns(8).show(ui, |ui| {
            ui.label("gal");
            if ui.text_edit_singleline(&mut self.fuel_gal).changed() {
                self.sync_fuel(FuelUnit::UsGallon);
            }
            ui.label("L");
            if ui.text_edit_singleline(&mut self.fuel_l).changed() {
                self.sync_fuel(FuelUnit::Liter);
            }
            ui.label("lb");
            if ui.text_edit_singleline(&mut self.fuel_lb).changed() {
                self.sync_fuel(FuelUnit::Pound);
            }
            ui.label("kg");
            if ui.text_edit_singleline(&mut self.fuel_kg).changed() {
                self.sync_fuel(FuelUnit::Kilogram);
            }
            ui.end_row();
        });

        ui.separator();
        ui.heading(self.tr.t(keys::TEMPERATURE_TITLE));
        egui::Grid::new("temperature").num_columns(4).show(ui, |ui| {
            ui.label("°C");
            if ui.text_edit_singleline(&mut self.temp_c).changed() {
                self.sync_temperature(TemperatureUnit::Celsius);
            }
            ui.label("°F");
            if ui.text_edit_singleline(&mut self.temp_f).changed() {
                self.sync_temperature(TemperatureUnit::Fahrenheit);
            }
            ui.end_row();
        });

        ui.separator();
        ui.heading(self.tr.t(keys::SPEED_TITLE));
        egui::Grid::new("speed").num_columns(6).show(ui, |ui| {
            ui.label("kt");
            if ui.text_edit_singleline(&mut self.speed_kt).changed() {
                self.sync_speed(SpeedUnit::Knot);
            }
            ui.label("km/h");
            if ui.text_edit_singleline(&mut self.speed_kmh).changed() {
                self.sync_speed(SpeedUnit::KilometerPerHour);
            }
            ui.label("mph");
            if ui.text_edit_singleline(&mut self.speed_mph).changed() {
                self.sync_speed(SpeedUnit::MilePerHour);
            }
            ui.end_row();
        });

        ui.separator();
        ui.heading(self.tr.t(keys::TIME_TITLE));
        egui::Grid::new("time").num_columns(4).show(ui, |ui| {
            ui.label(self.tr.t(keys::TIME_HM_LABEL));
            if ui.text_edit_singleline(&mut self.time_hm).changed() {
                self.sync_time_from_hhmm();
            }
            ui.label(self.tr.t(keys::TIME_DEC_LABEL));
            if ui.text_edit_singleline(&mut self.time_dec).changed() {
                self.sync_time_from_decimal();
            }
            ui.end_row();
        });
    }

    fn ui_descent(&mut self, ui: &mut egui::Ui) {
        ui.label(self.tr.t(keys::DESCENT_HINT));
        egui::Grid::new("descent_in").num_columns(2).show(ui, |ui| {
            ui.label(self.tr.t(keys::PROMPT_CRUISE_ALT));
            ui.text_edit_singleline(&mut self.descent_cruise);
            ui.end_row();
            ui.label(self.tr.t(keys::PROMPT_TARGET_ALT));
            ui.text_edit_singleline(&mut self.descent_target);
            ui.end_row();
            ui.label(self.tr.t(keys::PROMPT_GROUNDSPEED));
            ui.text_edit_singleline(&mut self.descent_gs);
            ui.end_row();
        });

        let plan = match (
            parse_field(&self.descent_cruise),
            parse_field(&self.descent_target),
            parse_field(&self.descent_gs),
        ) {
            (Some(cruise_altitude_ft), Some(target_altitude_ft), Some(groundspeed_kt)) => {
                plan_descent(DescentInput {
                    cruise_altitude_ft,
                    target_altitude_ft,
                    groundspeed_kt,
                })
            }
            _ => None,
        };

        ui.separator();
        egui::Grid::new("descent_out").num_columns(2).show(ui, |ui| {
            ui.label(self.tr.t(keys::ALT_TO_LOSE));
            ui.label(format!(
                "{} ft",
                format_fixed(plan.as_ref().map(|p| p.altitude_to_lose_ft), 0)
            ));
            ui.end_row();
            ui.label(self.tr.t(keys::TOD_DISTANCE));
            ui.label(format!(
                "{} NM",
                format_fixed(plan.as_ref().map(|p| p.tod_distance_nm), 1)
            ));
            ui.end_row();
            ui.label(self.tr.t(keys::REQUIRED_VS));
            ui.label(format!(
                "{} fpm",
                format_fixed(plan.as_ref().map(|p| p.required_vs_fpm), 0)
            ));
            ui.end_row();
            ui.label(self.tr.t(keys::DESCENT_TIME));
            ui.label(format!(
                "{} min",
                format_fixed(plan.as_ref().map(|p| p.time_min), 1)
            ));
            ui.end_row();
        });
    }

    fn ui_turns(&mut self, ui: &mut egui::Ui) {
        ui.label(self.tr.t(keys::TURN_HINT));
        egui::Grid::new("turn_in").num_columns(2).show(ui, |ui| {
            ui.label(self.tr.t(keys::PROMPT_TAS));
            ui.text_edit_singleline(&mut self.turn_tas);
            ui.end_row();
            ui.label(self.tr.t(keys::PROMPT_TURN_ANGLE));
            ui.text_edit_singleline(&mut self.turn_angle);
            ui.end_row();
        });

        let perf = match (parse_field(&self.turn_tas), parse_field(&self.turn_angle)) {
            (Some(tas_kt), Some(turn_angle_deg)) => standard_rate_turn(TurnInput {
                tas_kt,
                turn_angle_deg,
            }),
            _ => None,
        };

        ui.separator();
        egui::Grid::new("turn_out").num_columns(2).show(ui, |ui| {
            ui.label(self.tr.t(keys::STD_BANK_ANGLE));
            ui.label(format!(
                "{} °",
                format_fixed(perf.as_ref().map(|p| p.bank_angle_deg), 1)
            ));
            ui.end_row();
            ui.label(self.tr.t(keys::TURN_TIME));
            ui.label(format!(
                "{} s",
                format_fixed(perf.as_ref().map(|p| p.turn_time_s), 0)
            ));
            ui.end_row();
        });
    }

    fn ui_winds(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("wind_in").num_columns(2).show(ui, |ui| {
            ui.label(self.tr.t(keys::PROMPT_RUNWAY_HEADING));
            ui.text_edit_singleline(&mut self.wind_rwy);
            ui.end_row();
            ui.label(self.tr.t(keys::PROMPT_WIND_DIR));
            ui.text_edit_singleline(&mut self.wind_dir);
            ui.end_row();
            ui.label(self.tr.t(keys::PROMPT_WIND_SPEED));
            ui.text_edit_singleline(&mut self.wind_speed);
            ui.end_row();
        });

        let comps = match (
            parse_field(&self.wind_rwy),
            parse_field(&self.wind_dir),
            parse_field(&self.wind_speed),
        ) {
            (Some(runway_heading_deg), Some(wind_direction_deg), Some(wind_speed_kt)) => {
                wind_components(WindInput {
                    runway_heading_deg,
                    wind_direction_deg,
                    wind_speed_kt,
                })
            }
            _ => None,
        };

        ui.separator();
        egui::Grid::new("wind_out").num_columns(2).show(ui, |ui| {
            ui.label(self.tr.t(keys::HEADWIND_COMP));
            ui.label(format!(
                "{} kt",
                format_fixed(comps.as_ref().map(|c| c.headwind_kt), 0)
            ));
            ui.end_row();
            ui.label(self.tr.t(keys::CROSSWIND_COMP));
            match comps {
                Some(ref c) => ui.label(format!(
                    "{} kt ({})",
                    format_fixed(Some(c.crosswind_kt.abs()), 0),
                    self.tr.t(side_key(c.side))
                )),
                None => ui.label(PLACEHOLDER),
            };
            ui.end_row();
        });

        ui.separator();
        ui.heading(tab_label(self.tr.t(keys::GS_ESTIMATE_HEADING)));
        ui.label(self.tr.t(keys::GS_ESTIMATE_HINT));
        egui::Grid::new("gs_in").num_columns(2).show(ui, |ui| {
            ui.label(self.tr.t(keys::PROMPT_TAS));
            ui.text_edit_singleline(&mut self.gs_tas);
            ui.end_row();
            ui.label(self.tr.t(keys::PROMPT_HEADWIND));
            ui.text_edit_singleline(&mut self.gs_head);
            ui.end_row();
        });

        let gs = match (parse_field(&self.gs_tas), parse_field(&self.gs_head)) {
            (Some(t), Some(h)) => estimate_groundspeed(t, h),
            _ => None,
        };
        ui.label(format!(
            "{}: {} kt",
            self.tr.t(keys::GS_ESTIMATE_RESULT),
            format_fixed(gs, 0)
        ));
    }

    fn ui_density_altitude(&mut self, ui: &mut egui::Ui) {
        ui.label(self.tr.t(keys::DA_HINT));
        egui::Grid::new("da_in").num_columns(2).show(ui, |ui| {
            ui.label(self.tr.t(keys::PROMPT_FIELD_ELEV));
            ui.text_edit_singleline(&mut self.da_elev);
            ui.end_row();
            ui.label(self.tr.t(keys::PROMPT_ALTIMETER));
            ui.text_edit_singleline(&mut self.da_altset);
            ui.end_row();
            ui.label(self.tr.t(keys::PROMPT_OAT));
            ui.text_edit_singleline(&mut self.da_oat);
            ui.end_row();
        });

        let report = match (parse_field(&self.da_elev), parse_field(&self.da_oat)) {
            (Some(field_elevation_ft), Some(oat_c)) => density_altitude(DensityAltitudeInput {
                field_elevation_ft,
                altimeter_inhg: parse_field(&self.da_altset),
                oat_c,
            }),
            _ => None,
        };

        ui.separator();
        egui::Grid::new("da_out").num_columns(2).show(ui, |ui| {
            ui.label(self.tr.t(keys::PA_LABEL));
            ui.label(format!(
                "{} ft",
                format_fixed(report.as_ref().map(|r| r.pressure_altitude_ft), 0)
            ));
            ui.end_row();
            ui.label(self.tr.t(keys::ISA_TEMP_LABEL));
            ui.label(format!(
                "{} °C",
                format_fixed(report.as_ref().map(|r| r.isa_temp_c), 1)
            ));
            ui.end_row();
            ui.label(self.tr.t(keys::DA_LABEL));
            ui.label(format!(
                "{} ft",
                format_fixed(report.as_ref().map(|r| r.density_altitude_ft), 0)
            ));
            ui.end_row();
            ui.label(self.tr.t(keys::PERF_IMPACT));
            ui.label(format!(
                "≈ {} %",
                format_fixed(report.as_ref().map(|r| r.takeoff_distance_increase_pct), 0)
            ));
            ui.end_row();
        });
    }

    fn ui_settings_modal(&mut self, ctx: &egui::Context) {
        let mut open = self.show_settings_modal;
        egui::Window::new(tab_label(self.tr.t(keys::SETTINGS_HEADING)))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(self.tr.t(keys::SETTINGS_THEME));
                    let mut theme = self.cfg.theme;
                    ui.radio_value(&mut theme, Theme::Light, "light");
                    ui.radio_value(&mut theme, Theme::Dark, "dark");
                    if theme != self.cfg.theme {
                        self.cfg.theme = theme;
                        let _ = self.cfg.save();
                    }
                });
                ui.horizontal(|ui| {
                    ui.label(self.tr.t(keys::SETTINGS_LANGUAGE));
                    if ui
                        .selectable_label(self.cfg.language == "en", "English")
                        .clicked()
                    {
                        self.set_language("en");
                    }
                    if ui
                        .selectable_label(self.cfg.language == "ko", "한국어")
                        .clicked()
                    {
                        self.set_language("ko");
                    }
                    if ui
                        .selectable_label(self.cfg.language == "auto", "auto")
                        .clicked()
                    {
                        self.set_language("auto");
                    }
                });
                ui.horizontal(|ui| {
                    ui.label(self.tr.t(keys::SETTINGS_FONT));
                    if ui.button(self.tr.t(keys::SETTINGS_FONT_PICK)).clicked() {
                        if let Some(path) = FileDialog::new()
                            .add_filter("font", &["ttf", "otf", "ttc"])
                            .pick_file()
                        {
                            match fs::read(&path) {
                                Ok(bytes) => {
                                    self.custom_font_path =
                                        path.to_string_lossy().to_string();
                                    self.pending_font = Some(bytes);
                                    self.font_load_error = None;
                                }
                                Err(e) => {
                                    self.font_load_error = Some(e.to_string());
                                }
                            }
                        }
                    }
                    if !self.custom_font_path.is_empty() {
                        ui.label(&self.custom_font_path);
                    }
                });
                if self.font_load_error.is_some() {
                    ui.colored_label(
                        egui::Color32::YELLOW,
                        self.tr.t(keys::SETTINGS_FONT_ERROR),
                    );
                }
            });
        self.show_settings_modal = open;
    }
}

fn side_key(side: CrosswindSide) -> &'static str {
    match side {
        CrosswindSide::None => keys::WIND_SIDE_NONE,
        CrosswindSide::FromRight => keys::WIND_SIDE_FROM_RIGHT,
        CrosswindSide::FromLeft => keys::WIND_SIDE_FROM_LEFT,
    }
}

/// CLI용 구획 제목("\n-- 제목 --")에서 탭 라벨만 뽑는다.
fn tab_label(heading: &str) -> String {
    heading.trim().trim_matches('-').trim().to_string()
}

fn fill(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.decimals$}"),
        _ => String::new(),
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        match self.cfg.theme {
            Theme::Dark => ctx.set_visuals(egui::Visuals::dark()),
            Theme::Light => ctx.set_visuals(egui::Visuals::light()),
        }
        if let Some(bytes) = self.pending_font.take() {
            apply_font_bytes(ctx, bytes, "custom_font");
        }

        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            self.ui_top_bar(ui);
        });
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.small(self.tr.t(keys::FOOTER_NOTE));
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.tab {
                Tab::Converters => self.ui_converters(ui),
                Tab::Descent => self.ui_descent(ui),
                Tab::Turns => self.ui_turns(ui),
                Tab::Winds => self.ui_winds(ui),
                Tab::DensityAltitude => self.ui_density_altitude(ui),
            });
        });

        if self.show_settings_modal {
            self.ui_settings_modal(ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> GuiApp {
        GuiApp::new(Config::default(), None)
    }

    #[test]
    fn editing_hpa_fills_inhg() {
        let mut app = app();
        app.press_hpa = "1013.25".to_string();
        app.sync_pressure(PressureUnit::HectoPascal);
        assert_eq!(app.press_inhg, "29.921");
    }

    #[test]
    fn clearing_a_field_clears_its_siblings() {
        let mut app = app();
        app.dist_nm = "100".to_string();
        app.sync_distance(DistanceUnit::NauticalMile);
        assert_eq!(app.dist_km, "185.20");
        assert_eq!(app.dist_sm, "115.08");

        app.dist_nm.clear();
        app.sync_distance(DistanceUnit::NauticalMile);
        assert!(app.dist_km.is_empty());
        assert!(app.dist_sm.is_empty());
    }

    #[test]
    fn fuel_group_recomputes_from_kilograms() {
        let mut app = app();
        app.fuel_kg = "72".to_string();
        app.sync_fuel(FuelUnit::Kilogram);
        assert_eq!(app.fuel_l, "100.0");
        assert_eq!(app.fuel_gal, "26.42");
        assert_eq!(app.fuel_lb, "158.7");
    }

    #[test]
    fn time_fields_stay_consistent() {
        let mut app = app();
        app.time_hm = "1:45".to_string();
        app.sync_time_from_hhmm();
        assert_eq!(app.time_dec, "1.75");

        app.time_dec = "2.50".to_string();
        app.sync_time_from_decimal();
        assert_eq!(app.time_hm, "2:30");

        app.time_hm = "nonsense".to_string();
        app.sync_time_from_hhmm();
        assert!(app.time_dec.is_empty());
    }
}

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const APP_TITLE: &str = "general.app_title";
    pub const APP_SUBTITLE: &str = "general.app_subtitle";
    pub const FOOTER_NOTE: &str = "general.footer_note";
    pub const NOTE_ABSENT_INPUT: &str = "general.note_absent_input";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CONVERTERS: &str = "main_menu.converters";
    pub const MAIN_MENU_DESCENT: &str = "main_menu.descent";
    pub const MAIN_MENU_TURNS: &str = "main_menu.turns";
    pub const MAIN_MENU_WINDS: &str = "main_menu.winds";
    pub const MAIN_MENU_DENSITY_ALTITUDE: &str = "main_menu.density_altitude";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const CONVERTERS_HEADING: &str = "converters.heading";
    pub const CONVERTERS_OPTIONS: &str = "converters.options";
    pub const PROMPT_SOURCE_UNIT: &str = "converters.prompt_source_unit";
    pub const PROMPT_VALUE: &str = "converters.prompt_value";
    pub const PRESSURE_TITLE: &str = "converters.pressure_title";
    pub const ALTITUDE_TITLE: &str = "converters.altitude_title";
    pub const DISTANCE_TITLE: &str = "converters.distance_title";
    pub const FUEL_TITLE: &str = "converters.fuel_title";
    pub const FUEL_HINT: &str = "converters.fuel_hint";
    pub const TEMPERATURE_TITLE: &str = "converters.temperature_title";
    pub const SPEED_TITLE: &str = "converters.speed_title";
    pub const TIME_TITLE: &str = "converters.time_title";
    pub const TIME_OPTIONS: &str = "converters.time_options";
    pub const PROMPT_TIME_HHMM: &str = "converters.prompt_time_hhmm";
    pub const PROMPT_TIME_DECIMAL: &str = "converters.prompt_time_decimal";
    pub const TIME_HM_LABEL: &str = "converters.time_hm_label";
    pub const TIME_DEC_LABEL: &str = "converters.time_dec_label";
    pub const FEET_LABEL: &str = "converters.feet_label";
    pub const METERS_LABEL: &str = "converters.meters_label";

    pub const DESCENT_HEADING: &str = "descent.heading";
    pub const DESCENT_HINT: &str = "descent.hint";
    pub const PROMPT_CRUISE_ALT: &str = "descent.prompt_cruise_alt";
    pub const PROMPT_TARGET_ALT: &str = "descent.prompt_target_alt";
    pub const PROMPT_GROUNDSPEED: &str = "descent.prompt_groundspeed";
    pub const ALT_TO_LOSE: &str = "descent.alt_to_lose";
    pub const TOD_DISTANCE: &str = "descent.tod_distance";
    pub const REQUIRED_VS: &str = "descent.required_vs";
    pub const DESCENT_TIME: &str = "descent.time";

    pub const TURNS_HEADING: &str = "turns.heading";
    pub const TURN_HINT: &str = "turns.hint";
    pub const PROMPT_TAS: &str = "turns.prompt_tas";
    pub const PROMPT_TURN_ANGLE: &str = "turns.prompt_turn_angle";
    pub const STD_BANK_ANGLE: &str = "turns.std_bank_angle";
    pub const TURN_TIME: &str = "turns.time";

    pub const WINDS_HEADING: &str = "winds.heading";
    pub const PROMPT_RUNWAY_HEADING: &str = "winds.prompt_runway_heading";
    pub const PROMPT_WIND_DIR: &str = "winds.prompt_wind_dir";
    pub const PROMPT_WIND_SPEED: &str = "winds.prompt_wind_speed";
    pub const HEADWIND_COMP: &str = "winds.headwind_comp";
    pub const CROSSWIND_COMP: &str = "winds.crosswind_comp";
    pub const WIND_SIDE_NONE: &str = "winds.side_none";
    pub const WIND_SIDE_FROM_RIGHT: &str = "winds.side_from_right";
    pub const WIND_SIDE_FROM_LEFT: &str = "winds.side_from_left";
    pub const GS_ESTIMATE_HEADING: &str = "winds.gs_estimate_heading";
    pub const GS_ESTIMATE_HINT: &str = "winds.gs_estimate_hint";
    pub const PROMPT_HEADWIND: &str = "winds.prompt_headwind";
    pub const GS_ESTIMATE_RESULT: &str = "winds.gs_estimate_result";

    pub const DA_HEADING: &str = "density_altitude.heading";
    pub const DA_HINT: &str = "density_altitude.hint";
    pub const PROMPT_FIELD_ELEV: &str = "density_altitude.prompt_field_elev";
    pub const PROMPT_ALTIMETER: &str = "density_altitude.prompt_altimeter";
    pub const PROMPT_OAT: &str = "density_altitude.prompt_oat";
    pub const PA_LABEL: &str = "density_altitude.pa_label";
    pub const ISA_TEMP_LABEL: &str = "density_altitude.isa_temp_label";
    pub const DA_LABEL: &str = "density_altitude.da_label";
    pub const PERF_IMPACT: &str = "density_altitude.perf_impact";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_THEME: &str = "settings.current_theme";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_LANGUAGE_OPTIONS: &str = "settings.language_options";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const SETTINGS_THEME: &str = "settings.theme";
    pub const SETTINGS_LANGUAGE: &str = "settings.language";
    pub const SETTINGS_FONT: &str = "settings.font";
    pub const SETTINGS_FONT_PICK: &str = "settings.font_pick";
    pub const SETTINGS_FONT_ERROR: &str = "settings.font_error";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Ko,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ko => "ko",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(en/ko)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 한국어 번역이 없으면 영어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::Ko => ko(key).unwrap_or_else(|| en(key)),
            Language::En => en(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "en" | "en-us" | "en-uk" => Some("en".into()),
        "ko" | "ko-kr" => Some("ko".into()),
        "auto" | "" => None,
        other if other.starts_with("en") => Some("en".into()),
        other if other.starts_with("ko") => Some("ko".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "en" => Some("en".into()),
        "ko" => Some("ko".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn en(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        APP_TITLE => "Pilot Toolkit",
        APP_SUBTITLE => "Quick rules of thumb and conversions for pilots",
        FOOTER_NOTE => {
            "For training and quick planning only. Always cross check with certified performance data and avionics."
        }
        NOTE_ABSENT_INPUT => "Note: empty or non-numeric input leaves the result blank (–).",
        MAIN_MENU_TITLE => "\n=== Pilot Toolkit ===",
        MAIN_MENU_CONVERTERS => "1) Converters",
        MAIN_MENU_DESCENT => "2) Descent planning",
        MAIN_MENU_TURNS => "3) Standard rate turn",
        MAIN_MENU_WINDS => "4) Winds and groundspeed",
        MAIN_MENU_DENSITY_ALTITUDE => "5) Density altitude",
        MAIN_MENU_SETTINGS => "6) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        CONVERTERS_HEADING => "\n-- Converters --",
        CONVERTERS_OPTIONS => {
            "1) Pressure  2) Altitude  3) Distance  4) Fuel and weight  5) Temperature  6) Speed  7) Time"
        }
        PROMPT_SOURCE_UNIT => "Unit of the value you enter: ",
        PROMPT_VALUE => "Value: ",
        PRESSURE_TITLE => "Pressure",
        ALTITUDE_TITLE => "Altitude",
        DISTANCE_TITLE => "Distance",
        FUEL_TITLE => "Fuel and weight",
        FUEL_HINT => "Uses approx avgas density 6 lb/gal (0.72 kg/L) for volume to weight.",
        TEMPERATURE_TITLE => "Temperature",
        SPEED_TITLE => "Speed",
        TIME_TITLE => "Time",
        TIME_OPTIONS => "1) HH:MM -> decimal hours  2) decimal hours -> HH:MM",
        PROMPT_TIME_HHMM => "Time (HH:MM): ",
        PROMPT_TIME_DECIMAL => "Decimal hours: ",
        TIME_HM_LABEL => "HH:MM",
        TIME_DEC_LABEL => "Decimal hours",
        FEET_LABEL => "Feet",
        METERS_LABEL => "Meters",
        DESCENT_HEADING => "\n-- Descent planning --",
        DESCENT_HINT => {
            "Rule of thumb: VS ≈ GS × 5 for about a 3° path, ToD ≈ altitude to lose / 300 (ft to NM)."
        }
        PROMPT_CRUISE_ALT => "Cruise altitude (ft): ",
        PROMPT_TARGET_ALT => "Target altitude (ft): ",
        PROMPT_GROUNDSPEED => "Groundspeed (kt): ",
        ALT_TO_LOSE => "Altitude to lose",
        TOD_DISTANCE => "ToD distance",
        REQUIRED_VS => "Required VS",
        DESCENT_TIME => "Descent time",
        TURNS_HEADING => "\n-- Standard rate turn --",
        TURN_HINT => "Bank for standard rate: bank ≈ TAS / 10 + 5 degrees.",
        PROMPT_TAS => "TAS (kt): ",
        PROMPT_TURN_ANGLE => "Turn angle (deg): ",
        STD_BANK_ANGLE => "Standard rate bank",
        TURN_TIME => "Time to turn",
        WINDS_HEADING => "\n-- Headwind and crosswind --",
        PROMPT_RUNWAY_HEADING => "Runway heading (deg): ",
        PROMPT_WIND_DIR => "Wind direction (deg): ",
        PROMPT_WIND_SPEED => "Wind speed (kt): ",
        HEADWIND_COMP => "Headwind component",
        CROSSWIND_COMP => "Crosswind component",
        WIND_SIDE_NONE => "none",
        WIND_SIDE_FROM_RIGHT => "from right",
        WIND_SIDE_FROM_LEFT => "from left",
        GS_ESTIMATE_HEADING => "\n-- Groundspeed estimate --",
        GS_ESTIMATE_HINT => "GS ≈ TAS + headwind (negative for tailwind).",
        PROMPT_HEADWIND => "Headwind (+) / tailwind (-): ",
        GS_ESTIMATE_RESULT => "Estimated groundspeed",
        DA_HEADING => "\n-- Density altitude --",
        DA_HINT => {
            "Approximation: DA ≈ PA + 120 × (OAT − ISA temp). Pressure altitude from field elevation and altimeter."
        }
        PROMPT_FIELD_ELEV => "Field elevation (ft): ",
        PROMPT_ALTIMETER => "Altimeter (inHg, enter to skip): ",
        PROMPT_OAT => "Outside air temp (°C): ",
        PA_LABEL => "Pressure altitude",
        ISA_TEMP_LABEL => "ISA temp at field",
        DA_LABEL => "Density altitude",
        PERF_IMPACT => "Estimated takeoff distance increase",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_THEME => "Current theme:",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_OPTIONS => "1) Toggle theme  2) Change language",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_LANGUAGE_OPTIONS => "1) English  2) 한국어  3) auto",
        SETTINGS_INVALID => "Invalid input; settings unchanged.",
        SETTINGS_SAVED => "Settings saved.",
        SETTINGS_THEME => "Theme",
        SETTINGS_LANGUAGE => "Language",
        SETTINGS_FONT => "Font",
        SETTINGS_FONT_PICK => "Choose font file…",
        SETTINGS_FONT_ERROR => "No CJK-capable font found; Korean text may not render.",
        _ => "[missing translation]",
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        APP_TITLE => "파일럿 도구",
        APP_SUBTITLE => "파일럿을 위한 간단한 계산과 단위 변환",
        FOOTER_NOTE => "훈련·간단 계획용 참고 도구입니다. 항상 항공기 성능표와 장비로 교차 확인하세요.",
        NOTE_ABSENT_INPUT => "참고: 비어 있거나 숫자가 아닌 입력은 결과를 비워 둡니다(–).",
        MAIN_MENU_TITLE => "\n=== 파일럿 도구 ===",
        MAIN_MENU_CONVERTERS => "1) 변환기",
        MAIN_MENU_DESCENT => "2) 하강 계획",
        MAIN_MENU_TURNS => "3) 표준 선회율",
        MAIN_MENU_WINDS => "4) 바람·대지속도",
        MAIN_MENU_DENSITY_ALTITUDE => "5) 밀도고도",
        MAIN_MENU_SETTINGS => "6) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        CONVERTERS_HEADING => "\n-- 변환기 --",
        CONVERTERS_OPTIONS => "1) 기압  2) 고도  3) 거리  4) 연료·중량  5) 기온  6) 속도  7) 시간",
        PROMPT_SOURCE_UNIT => "입력할 값의 단위: ",
        PROMPT_VALUE => "값 입력: ",
        PRESSURE_TITLE => "기압",
        ALTITUDE_TITLE => "고도",
        DISTANCE_TITLE => "거리",
        FUEL_TITLE => "연료와 중량",
        FUEL_HINT => "연료 밀도는 대략 6 lb/gal (0.72 kg/L)로 가정해서 부피와 중량을 변환합니다.",
        TEMPERATURE_TITLE => "기온",
        SPEED_TITLE => "속도",
        TIME_TITLE => "시간",
        TIME_OPTIONS => "1) 시:분 -> 십진 시간  2) 십진 시간 -> 시:분",
        PROMPT_TIME_HHMM => "시간 (시:분): ",
        PROMPT_TIME_DECIMAL => "십진 시간: ",
        TIME_HM_LABEL => "시:분",
        TIME_DEC_LABEL => "시간(소수)",
        FEET_LABEL => "피트",
        METERS_LABEL => "미터",
        DESCENT_HEADING => "\n-- 하강 계획 --",
        DESCENT_HINT => "기본 감: VS ≈ GS × 5 정도면 3° 프로파일, ToD ≈ 내려야 할 고도(ft) ÷ 300 (NM).",
        PROMPT_CRUISE_ALT => "순항 고도 (ft): ",
        PROMPT_TARGET_ALT => "목표 고도 (ft): ",
        PROMPT_GROUNDSPEED => "대지속도 (kt): ",
        ALT_TO_LOSE => "내려야 할 고도",
        TOD_DISTANCE => "하강 시작 거리",
        REQUIRED_VS => "필요 침하율",
        DESCENT_TIME => "하강 시간",
        TURNS_HEADING => "\n-- 표준 선회율 --",
        TURN_HINT => "표준 선회율 은행각: 대략 bank ≈ TAS ÷ 10 + 5 (deg).",
        PROMPT_TAS => "TAS (kt): ",
        PROMPT_TURN_ANGLE => "선회 각도 (deg): ",
        STD_BANK_ANGLE => "표준 선회율 은행각",
        TURN_TIME => "선회 시간",
        WINDS_HEADING => "\n-- 맞바람·측풍 성분 --",
        PROMPT_RUNWAY_HEADING => "활주로 방위 (deg): ",
        PROMPT_WIND_DIR => "풍향 (deg): ",
        PROMPT_WIND_SPEED => "풍속 (kt): ",
        HEADWIND_COMP => "맞바람 성분",
        CROSSWIND_COMP => "측풍 성분",
        WIND_SIDE_NONE => "없음",
        WIND_SIDE_FROM_RIGHT => "오른쪽에서",
        WIND_SIDE_FROM_LEFT => "왼쪽에서",
        GS_ESTIMATE_HEADING => "\n-- 대지속도 추정 --",
        GS_ESTIMATE_HINT => "GS ≈ TAS + 맞바람 (뒷바람은 음수).",
        PROMPT_HEADWIND => "맞바람(+) / 뒷바람(−): ",
        GS_ESTIMATE_RESULT => "대지속도 추정값",
        DA_HEADING => "\n-- 밀도고도 --",
        DA_HINT => "근사식: DA ≈ PA + 120 × (OAT − ISA 온도). PA는 공항 고도와 기압계 설정으로 계산합니다.",
        PROMPT_FIELD_ELEV => "공항 고도 (ft): ",
        PROMPT_ALTIMETER => "기압계 설정 (inHg, 없으면 엔터): ",
        PROMPT_OAT => "외기온도 (°C): ",
        PA_LABEL => "기압고도",
        ISA_TEMP_LABEL => "ISA 기준 온도",
        DA_LABEL => "밀도고도",
        PERF_IMPACT => "이륙 거리 증가 추정",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_THEME => "현재 테마:",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_OPTIONS => "1) 테마 전환  2) 언어 변경",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_LANGUAGE_OPTIONS => "1) English  2) 한국어  3) auto",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        SETTINGS_THEME => "테마",
        SETTINGS_LANGUAGE => "언어",
        SETTINGS_FONT => "글꼴",
        SETTINGS_FONT_PICK => "글꼴 파일 선택…",
        SETTINGS_FONT_ERROR => "한글 글꼴을 찾지 못했습니다. 한글이 깨질 수 있습니다.",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_is_the_fallback_language() {
        let tr = Translator::new("fr");
        assert_eq!(tr.language(), Language::En);
        assert_eq!(tr.t(keys::APP_TITLE), "Pilot Toolkit");
    }

    #[test]
    fn korean_lookup_and_fallback() {
        let tr = Translator::new("ko-KR");
        assert_eq!(tr.language(), Language::Ko);
        assert_eq!(tr.t(keys::APP_TITLE), "파일럿 도구");
        // 한국어 테이블에 없는 키는 영어로 폴백한다.
        assert_eq!(tr.t("no.such.key"), "[missing translation]");
    }

    #[test]
    fn resolve_prefers_cli_then_config() {
        assert_eq!(resolve_language("ko", Some("en")), "ko");
        assert_eq!(resolve_language("auto", Some("en")), "en");
        assert_eq!(resolve_language("EN-us", None), "en");
    }

    #[test]
    fn flat_toml_pack_parses_nested_tables() {
        let map = parse_toml_to_map("[general]\napp_title = \"Test\"\n").unwrap();
        assert_eq!(map.get("general.app_title").map(String::as_str), Some("Test"));
    }
}

//! 하강 계획 어림 계산.
//!
//! VS ≈ GS × 5 [fpm]이면 약 3° 강하 경로, ToD ≈ 내려야 할 고도(ft) ÷ 300 [NM].

/// 하강 계획 계산 입력.
#[derive(Debug, Clone)]
pub struct DescentInput {
    /// 순항 고도 [ft]
    pub cruise_altitude_ft: f64,
    /// 목표 고도 [ft]
    pub target_altitude_ft: f64,
    /// 대지속도 [kt]
    pub groundspeed_kt: f64,
}

/// 하강 계획 계산 결과.
#[derive(Debug, Clone)]
pub struct DescentPlan {
    /// 내려야 할 고도 [ft]
    pub altitude_to_lose_ft: f64,
    /// 하강 시작 거리 [NM]
    pub tod_distance_nm: f64,
    /// 필요 침하율 [fpm]
    pub required_vs_fpm: f64,
    /// 하강 시간 [min]
    pub time_min: f64,
}

/// 3° 경로 기준 VS 배수: VS[fpm] ≈ GS[kt] × 5.
pub const VS_PER_GS: f64 = 5.0;
/// ft → NM 환산 어림값: 1 NM 전진당 약 300 ft 강하.
pub const FT_PER_NM_DESCENT: f64 = 300.0;

/// 하강 계획을 계산한다.
///
/// 대지속도가 음수이거나 입력이 유한하지 않으면 값 없음. 대지속도 0은
/// VS=0, 하강 시간 0으로 계산된다 (무한대나 값 없음이 아니다).
pub fn plan_descent(input: DescentInput) -> Option<DescentPlan> {
    let DescentInput {
        cruise_altitude_ft,
        target_altitude_ft,
        groundspeed_kt,
    } = input;

    if !cruise_altitude_ft.is_finite()
        || !target_altitude_ft.is_finite()
        || !groundspeed_kt.is_finite()
        || groundspeed_kt < 0.0
    {
        return None;
    }

    let altitude_to_lose_ft = (cruise_altitude_ft - target_altitude_ft).max(0.0);
    let required_vs_fpm = groundspeed_kt * VS_PER_GS;
    let tod_distance_nm = altitude_to_lose_ft / FT_PER_NM_DESCENT;
    let time_min = if altitude_to_lose_ft > 0.0 && required_vs_fpm > 0.0 {
        altitude_to_lose_ft / required_vs_fpm
    } else {
        0.0
    };

    Some(DescentPlan {
        altitude_to_lose_ft,
        tod_distance_nm,
        required_vs_fpm,
        time_min,
    })
}

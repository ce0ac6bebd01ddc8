//! 활주로 기준 바람 성분과 대지속도 추정.

/// 측풍이 불어오는 쪽.
///
/// 상대각의 사인 부호에서 나온다: 기수 기준 오른쪽 바람이 양수.
/// |측풍| < 0.5 kt이면 사실상 정풍/배풍으로 보고 None을 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrosswindSide {
    None,
    FromLeft,
    FromRight,
}

/// 바람 성분 계산 입력.
#[derive(Debug, Clone)]
pub struct WindInput {
    /// 활주로 방위 [deg]
    pub runway_heading_deg: f64,
    /// 풍향 [deg]
    pub wind_direction_deg: f64,
    /// 풍속 [kt]
    pub wind_speed_kt: f64,
}

/// 바람 성분 계산 결과.
#[derive(Debug, Clone)]
pub struct WindComponents {
    /// 맞바람 성분 [kt]. 배풍이면 음수.
    pub headwind_kt: f64,
    /// 측풍 성분 [kt]. 부호 유지(오른쪽 양수). 표시할 때는 절대값을 쓴다.
    pub crosswind_kt: f64,
    /// 측풍 방향 판정.
    pub side: CrosswindSide,
}

/// 판정 기준 미만의 측풍은 "없음"으로 처리한다 [kt].
const CROSSWIND_DEADBAND_KT: f64 = 0.5;

/// 활주로 방위, 풍향, 풍속으로 맞바람/측풍 성분을 계산한다.
///
/// 풍속이 음수이거나 입력이 유한하지 않으면 값 없음이다.
pub fn wind_components(input: WindInput) -> Option<WindComponents> {
    let WindInput {
        runway_heading_deg,
        wind_direction_deg,
        wind_speed_kt,
    } = input;

    if !runway_heading_deg.is_finite()
        || !wind_direction_deg.is_finite()
        || !wind_speed_kt.is_finite()
        || wind_speed_kt < 0.0
    {
        return None;
    }

    let relative_deg = (wind_direction_deg - runway_heading_deg).rem_euclid(360.0);
    let relative = relative_deg.to_radians();
    let headwind_kt = wind_speed_kt * relative.cos();
    let crosswind_kt = wind_speed_kt * relative.sin();

    let side = if crosswind_kt.abs() < CROSSWIND_DEADBAND_KT {
        CrosswindSide::None
    } else if crosswind_kt > 0.0 {
        CrosswindSide::FromRight
    } else {
        CrosswindSide::FromLeft
    };

    Some(WindComponents {
        headwind_kt,
        crosswind_kt,
        side,
    })
}

/// 대지속도 어림: GS ≈ TAS + 맞바람 성분 (배풍은 음수로 넣는다).
pub fn estimate_groundspeed(tas_kt: f64, headwind_kt: f64) -> Option<f64> {
    if !tas_kt.is_finite() || !headwind_kt.is_finite() {
        return None;
    }
    Some(tas_kt + headwind_kt)
}

//! 표준 선회율(3°/s) 어림 계산.

/// 표준 선회율 계산 입력.
#[derive(Debug, Clone)]
pub struct TurnInput {
    /// 진대기속도 [kt]
    pub tas_kt: f64,
    /// 선회 각도 [deg]
    pub turn_angle_deg: f64,
}

/// 표준 선회율 계산 결과.
#[derive(Debug, Clone)]
pub struct TurnPerformance {
    /// 표준 선회율 은행각 [deg]
    pub bank_angle_deg: f64,
    /// 선회 소요 시간 [s]
    pub turn_time_s: f64,
}

/// 표준 선회율 [deg/s].
pub const STANDARD_RATE_DEG_PER_S: f64 = 3.0;

/// 표준 선회율 선회의 은행각과 소요 시간을 계산한다.
///
/// 은행각 어림식: bank ≈ TAS ÷ 10 + 5. TAS와 선회 각도는 0보다 커야
/// 하며, 그렇지 않으면 값 없음이다.
pub fn standard_rate_turn(input: TurnInput) -> Option<TurnPerformance> {
    let TurnInput {
        tas_kt,
        turn_angle_deg,
    } = input;

    if !tas_kt.is_finite() || tas_kt <= 0.0 || !turn_angle_deg.is_finite() || turn_angle_deg <= 0.0
    {
        return None;
    }

    Some(TurnPerformance {
        bank_angle_deg: tas_kt / 10.0 + 5.0,
        turn_time_s: turn_angle_deg / STANDARD_RATE_DEG_PER_S,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_at_120_knots() {
        let perf = standard_rate_turn(TurnInput {
            tas_kt: 120.0,
            turn_angle_deg: 180.0,
        })
        .unwrap();
        assert!((perf.bank_angle_deg - 17.0).abs() < 1e-9);
        assert!((perf.turn_time_s - 60.0).abs() < 1e-9);
    }

    #[test]
    fn full_circle_takes_two_minutes() {
        let perf = standard_rate_turn(TurnInput {
            tas_kt: 100.0,
            turn_angle_deg: 360.0,
        })
        .unwrap();
        assert!((perf.turn_time_s - 120.0).abs() < 1e-9);
    }

    #[test]
    fn zero_or_negative_inputs_are_absent() {
        assert!(standard_rate_turn(TurnInput {
            tas_kt: 0.0,
            turn_angle_deg: 90.0,
        })
        .is_none());
        assert!(standard_rate_turn(TurnInput {
            tas_kt: 120.0,
            turn_angle_deg: -90.0,
        })
        .is_none());
        assert!(standard_rate_turn(TurnInput {
            tas_kt: f64::INFINITY,
            turn_angle_deg: 90.0,
        })
        .is_none());
    }
}

use serde::{Deserialize, Serialize};

/// 거리 단위. 내부 기준은 km이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceUnit {
    NauticalMile,
    Kilometer,
    StatuteMile,
}

pub const KM_PER_NAUTICAL_MILE: f64 = 1.852;
pub const KM_PER_STATUTE_MILE: f64 = 1.609344;

fn to_km(value: f64, unit: DistanceUnit) -> f64 {
    match unit {
        DistanceUnit::Kilometer => value,
        DistanceUnit::NauticalMile => value * KM_PER_NAUTICAL_MILE,
        DistanceUnit::StatuteMile => value * KM_PER_STATUTE_MILE,
    }
}

fn from_km(value_km: f64, unit: DistanceUnit) -> f64 {
    match unit {
        DistanceUnit::Kilometer => value_km,
        DistanceUnit::NauticalMile => value_km / KM_PER_NAUTICAL_MILE,
        DistanceUnit::StatuteMile => value_km / KM_PER_STATUTE_MILE,
    }
}

/// 거리를 다른 단위로 변환한다.
pub fn convert_distance(value: f64, from: DistanceUnit, to: DistanceUnit) -> f64 {
    let km = to_km(value, from);
    from_km(km, to)
}

impl DistanceUnit {
    /// 표시용 소수점 자리수. 세 단위 모두 2자리로 통일한다.
    pub fn display_decimals(&self) -> usize {
        2
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            DistanceUnit::NauticalMile => "NM",
            DistanceUnit::Kilometer => "km",
            DistanceUnit::StatuteMile => "SM",
        }
    }
}

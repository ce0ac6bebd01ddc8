use serde::{Deserialize, Serialize};

/// 연료량/중량 단위. 내부 기준은 리터이다.
///
/// 부피↔중량 변환에는 AvGas 근사 밀도 0.72 kg/L (약 6 lb/gal)을 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelUnit {
    UsGallon,
    Liter,
    Pound,
    Kilogram,
}

pub const LITERS_PER_US_GALLON: f64 = 3.78541;
pub const KG_PER_POUND: f64 = 0.45359237;
/// AvGas 근사 밀도 [kg/L].
pub const AVGAS_DENSITY_KG_PER_L: f64 = 0.72;

fn to_liters(value: f64, unit: FuelUnit) -> f64 {
    match unit {
        FuelUnit::Liter => value,
        FuelUnit::UsGallon => value * LITERS_PER_US_GALLON,
        FuelUnit::Kilogram => value / AVGAS_DENSITY_KG_PER_L,
        FuelUnit::Pound => value * KG_PER_POUND / AVGAS_DENSITY_KG_PER_L,
    }
}

fn from_liters(value_l: f64, unit: FuelUnit) -> f64 {
    match unit {
        FuelUnit::Liter => value_l,
        FuelUnit::UsGallon => value_l / LITERS_PER_US_GALLON,
        FuelUnit::Kilogram => value_l * AVGAS_DENSITY_KG_PER_L,
        FuelUnit::Pound => value_l * AVGAS_DENSITY_KG_PER_L / KG_PER_POUND,
    }
}

/// 연료량을 다른 단위로 변환한다.
pub fn convert_fuel(value: f64, from: FuelUnit, to: FuelUnit) -> f64 {
    let liters = to_liters(value, from);
    from_liters(liters, to)
}

impl FuelUnit {
    /// 표시용 소수점 자리수.
    pub fn display_decimals(&self) -> usize {
        match self {
            FuelUnit::UsGallon => 2,
            FuelUnit::Liter | FuelUnit::Pound | FuelUnit::Kilogram => 1,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            FuelUnit::UsGallon => "gal",
            FuelUnit::Liter => "L",
            FuelUnit::Pound => "lb",
            FuelUnit::Kilogram => "kg",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallons_to_liters_and_weight() {
        let liters = convert_fuel(10.0, FuelUnit::UsGallon, FuelUnit::Liter);
        assert!((liters - 37.8541).abs() < 1e-9);
        let kg = convert_fuel(10.0, FuelUnit::UsGallon, FuelUnit::Kilogram);
        assert!((kg - 27.255).abs() < 0.005, "kg={kg}");
        let lb = convert_fuel(10.0, FuelUnit::UsGallon, FuelUnit::Pound);
        assert!((lb - 60.086).abs() < 0.005, "lb={lb}");
    }

    #[test]
    fn pound_roundtrip_within_display_rounding() {
        let lb = convert_fuel(100.0, FuelUnit::Liter, FuelUnit::Pound);
        let rounded = (lb * 10.0).round() / 10.0;
        let back = convert_fuel(rounded, FuelUnit::Pound, FuelUnit::Liter);
        assert!((back - 100.0).abs() < 0.1, "back={back}");
    }
}

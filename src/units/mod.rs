//! 단위 정의 및 변환 모듈 모음.
//!
//! 각 그룹은 내부 기준 단위(허브)를 하나 두고, 어느 필드를 고치든
//! 허브를 거쳐 나머지 필드를 다시 계산한다.

pub mod altitude;
pub mod distance;
pub mod fuel;
pub mod pressure;
pub mod speed;
pub mod temperature;
pub mod time;

pub use altitude::{convert_altitude, AltitudeUnit};
pub use distance::{convert_distance, DistanceUnit};
pub use fuel::{convert_fuel, FuelUnit};
pub use pressure::{convert_pressure, PressureUnit};
pub use speed::{convert_speed, SpeedUnit};
pub use temperature::{convert_temperature, TemperatureUnit};
pub use time::{decimal_hours_to_hhmm, hhmm_to_decimal_hours};

//! 비행 계획용 어림 계산 모듈을 모아둔다.
//! 하강 계획, 표준 선회율, 바람 성분/대지속도, 밀도고도로 구성한다.
//!
//! 모든 계산은 입력 구조체를 받아 `Option<결과>`를 돌려준다. 가드 조건에
//! 걸리면(유한하지 않은 값, 음수 속도 등) 결과 전체가 값 없음이 되고,
//! 일부 필드만 채워진 결과는 만들지 않는다.

pub mod density_altitude;
pub mod descent;
pub mod turn;
pub mod wind;

pub use density_altitude::{density_altitude, DensityAltitudeInput, DensityAltitudeReport};
pub use descent::{plan_descent, DescentInput, DescentPlan};
pub use turn::{standard_rate_turn, TurnInput, TurnPerformance};
pub use wind::{estimate_groundspeed, wind_components, CrosswindSide, WindComponents, WindInput};

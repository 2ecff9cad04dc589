// ==========================================
// 건설 공정일수 산정 시스템 - 엔진 계층
// ==========================================
// 물량 → 일수 산정의 비즈니스 규칙. 전 연산이 전역(total)이다:
// 모든 공개 연산은 모든 입력에 값을 돌려주고, "계산할 것 없음"은 0 이다.
// 정상 경로에서 예외를 던지지 않는다.
// ==========================================

pub mod aggregation;
pub mod duration;
pub mod floor_taxonomy;
pub mod quantity;

pub use aggregation::{ItemCalculation, PlanEngine};
pub use duration::{DurationCalculator, EquipmentConstraints};
pub use floor_taxonomy::{FloorTaxonomy, FloorTaxonomyResolver, StandardFloor};
pub use quantity::{QuantityRef, QuantityResolver};

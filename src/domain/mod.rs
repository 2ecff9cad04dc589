// ==========================================
// 건설 공정일수 산정 시스템 - 영역 계층
// ==========================================
// 엔티티와 타입 정의. 비즈니스 규칙은 engine 계층에 둔다.
// ==========================================

pub mod building;
pub mod floor;
pub mod plan;
pub mod types;

pub use building::{Building, BuildingMeta, MaterialQuantities, TradeRecord};
pub use floor::{normalize_floor_label, normalize_rooftop_label, Floor, FloorRef};
pub use plan::{CategoryPlan, FloorScopePlan, ProcessPlan};
pub use types::{FloorClass, LevelType, MaterialField, ProcessCategory, ProcessType, SpecialRow};

// ==========================================
// 건설 공정일수 산정 시스템 - 저장소 계층
// ==========================================
// 외부 협력자: 계획 영속화. 산정 코어의 일부가 아니다.
// ==========================================

pub mod error;
pub mod plan_store;

pub use error::{StoreError, StoreResult};
pub use plan_store::{MemoryPlanStore, PlanStore, SqlitePlanStore};

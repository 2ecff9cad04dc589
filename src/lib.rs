// ==========================================
// 건설 공정일수 산정 시스템 - 핵심 라이브러리
// ==========================================
// 물량(형틀 면적·철근 톤수·콘크리트 체적) 기반 공정별 직접 작업일수 산정,
// 분류·동 단위 집계, 계획자 재지정의 연쇄 재계산을 담당한다.
// 시스템 정위: 의사결정 지원 (최종 판단은 계획자)
// ==========================================

// ==========================================
// 모듈 선언
// ==========================================

// 영역 계층 - 엔티티와 타입
pub mod domain;

// 카탈로그 - 공정 모듈 정적 테이블
pub mod catalog;

// 엔진 계층 - 비즈니스 규칙
pub mod engine;

// 저장소 계층 - 계획 영속화
pub mod repository;

// 가져오기 계층 - 외부 데이터
pub mod importer;

// 설정 계층 - 엔진 설정
pub mod config;

// 로그 시스템
pub mod logging;

// ==========================================
// 핵심 타입 재수출
// ==========================================

// 영역 타입
pub use domain::types::{
    FloorClass, LevelType, MaterialField, ProcessCategory, ProcessType, SpecialRow,
};

// 영역 엔티티
pub use domain::{
    Building, BuildingMeta, CategoryPlan, Floor, FloorRef, FloorScopePlan, MaterialQuantities,
    ProcessPlan, TradeRecord,
};

// 카탈로그
pub use catalog::{
    DurationMode, ProcessModule, ProcessModuleCatalog, ProcessModuleItem, CATALOG_VERSION,
};

// 엔진
pub use engine::{
    DurationCalculator, EquipmentConstraints, FloorTaxonomy, FloorTaxonomyResolver,
    ItemCalculation, PlanEngine, QuantityRef, QuantityResolver, StandardFloor,
};

// 저장소
pub use repository::{MemoryPlanStore, PlanStore, SqlitePlanStore, StoreError};

// 설정
pub use config::EngineConfig;

// ==========================================
// 상수 정의
// ==========================================

// 시스템 버전
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 시스템 이름
pub const APP_NAME: &str = "건설 공정일수 산정 시스템";

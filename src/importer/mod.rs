// ==========================================
// 건설 공정일수 산정 시스템 - 가져오기 계층
// ==========================================
// 외부 데이터(CSV 물량표) → Building 변환
// ==========================================

pub mod building_importer;
pub mod error;

pub use building_importer::BuildingImporter;
pub use error::{ImportError, ImportResult};

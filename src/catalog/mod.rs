// ==========================================
// 건설 공정일수 산정 시스템 - 공정 모듈 카탈로그
// ==========================================
// (공정 분류, 공법) 쌍별 작업 항목의 정적 버전 테이블.
// 읽기 전용 - 엔진은 카탈로그를 절대 변경하지 않는다.
// 미인식 조합은 None 을 돌려주고, 호출부는 항목 0개(0일)로 본다.
// ==========================================

mod data;

use crate::domain::types::{MaterialField, ProcessCategory, ProcessType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// 카탈로그 버전 (생산성 기준표 개정 시 올린다)
pub const CATALOG_VERSION: &str = "2026-01";

// ==========================================
// DurationMode - 일수 산정 모드
// ==========================================
// 세 모드는 상호 배타적 폐쇄 집합이다. 선택 필드 유무로 판별하던 방식을
// 태그 합(union) 타입으로 바꿔 컴파일 타임에 전수 처리를 강제한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum DurationMode {
    /// 고정 일수: 물량과 무관한 상수
    FixedDays { days: f64 },
    /// 장비 기준 산정: 장비 대수 = ceil(물량 / 기준량), 동 메타의 보유 대수로 상한
    EquipmentBased {
        quantity_reference: String,
        calculation_base: f64,
        workers_per_unit: f64,
    },
    /// 생산성 기준 산정: 투입 인원 = 총인원 / 장비(조) 수
    ProductivityBased { quantity_reference: String },
}

// ==========================================
// ProcessModuleItem - 작업 항목
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessModuleItem {
    pub id: String,          // 항목 ID (재지정 키의 구성 요소)
    pub work_item: String,   // 작업 항목명
    pub unit: String,        // 단위 (㎡/톤/㎥/식)
    pub daily_productivity: f64, // 1인 1일 생산성 (고정 모드는 0)
    pub equipment_count: u32,    // 고정 조(組)·장비 수 (생산성 모드)
    pub indirect_days: f64,      // 간접 일수 (양생 등, 직접일수 산정에는 불참)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indirect_work_item: Option<String>,
    /// 행 번호 산출이 불안정한 항목은 층 라벨 직접 조회로 고정한다
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor_label: Option<String>,
    pub mode: DurationMode,
}

impl ProcessModuleItem {
    /// 항목이 읽는 자재 필드 (단위 + 항목명 관례의 단일 창구)
    pub fn material_field(&self) -> Option<MaterialField> {
        MaterialField::for_item(&self.work_item, &self.unit)
    }

    /// 모드가 들고 있는 물량 참조식
    pub fn quantity_reference(&self) -> Option<&str> {
        match &self.mode {
            DurationMode::FixedDays { .. } => None,
            DurationMode::EquipmentBased { quantity_reference, .. }
            | DurationMode::ProductivityBased { quantity_reference } => {
                Some(quantity_reference.as_str())
            }
        }
    }
}

// ==========================================
// ProcessModule - (분류, 공법)별 항목 묶음
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessModule {
    pub category: ProcessCategory,
    pub process_type: ProcessType,
    pub items: Vec<ProcessModuleItem>,
}

// ==========================================
// ProcessModuleCatalog - 카탈로그 조회
// ==========================================
pub struct ProcessModuleCatalog {
    modules: HashMap<(ProcessCategory, ProcessType), ProcessModule>,
}

impl ProcessModuleCatalog {
    /// 내장 카탈로그 (프로세스 전역에서 1회 구성)
    pub fn builtin() -> &'static ProcessModuleCatalog {
        static CATALOG: OnceLock<ProcessModuleCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| {
            let mut modules = HashMap::new();
            for module in data::builtin_modules() {
                modules.insert((module.category, module.process_type), module);
            }
            ProcessModuleCatalog { modules }
        })
    }

    /// 순수 조회: 미인식 조합 → None (오류 아님)
    pub fn get_module(
        &self,
        category: ProcessCategory,
        process_type: ProcessType,
    ) -> Option<&ProcessModule> {
        self.modules.get(&(category, process_type))
    }

    /// 분류의 허용 공법 중 실제 카탈로그에 존재하는 것
    pub fn available_process_types(&self, category: ProcessCategory) -> Vec<ProcessType> {
        category
            .allowed_process_types()
            .iter()
            .copied()
            .filter(|pt| self.modules.contains_key(&(category, *pt)))
            .collect()
    }
}

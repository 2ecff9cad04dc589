// ==========================================
// 건설 공정일수 산정 시스템 - 공정 계획 영역 모델
// ==========================================
// ProcessPlan 은 동(棟)별 가변 상태이며 통째 교체(copy-on-write)로만 바뀐다.
// 불변식: total_days 는 processes 와 층 구성의 순수 함수다.
//         증분 수정 금지 - 트리거마다 전체 재합산한다.
// ==========================================

use crate::domain::building::MaterialQuantities;
use crate::domain::types::{ProcessCategory, ProcessType};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// FloorScopePlan - 층 범위 계획
// ==========================================
// 지하층/옥탑층: 층별 공법 선택 허용. 기준층: 전개 층별 일수만 기록.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorScopePlan {
    pub process_type: ProcessType,
    pub days: i64, // 층 범위 합산 일수 (합산 후 절사된 값)
}

// ==========================================
// CategoryPlan - 공정 분류 계획
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPlan {
    pub days: i64,                 // 분류 합계 일수
    pub process_type: ProcessType, // 분류 대표 공법
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floors: Option<BTreeMap<String, FloorScopePlan>>, // 층별 반복 분류만
}

impl CategoryPlan {
    pub fn zeroed(category: ProcessCategory) -> Self {
        Self {
            days: 0,
            process_type: category.default_process_type(),
            floors: if category.iterates_per_floor() {
                Some(BTreeMap::new())
            } else {
                None
            },
        }
    }
}

// ==========================================
// ProcessPlan - 공정 계획
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessPlan {
    pub building_id: String,
    pub processes: BTreeMap<ProcessCategory, CategoryPlan>,
    /// 항목별 직접 작업일수 재지정. 키 형식: "<분류>-<층라벨|빈문자>-<항목ID>"
    /// 키의 존재 자체가 재지정 상태다. 0 이하 입력은 키 삭제로 처리되므로
    /// "0 재지정"과 "재지정 없음"은 의도적으로 구분되지 않는다.
    pub item_direct_work_days_overrides: BTreeMap<String, f64>,
    /// 지하층 특수 행(주차장/가시설 3단)의 사용자 입력 물량
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub special_row_quantities: BTreeMap<String, MaterialQuantities>,
    pub total_days: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl ProcessPlan {
    /// 영(0) 초기화 계획 - 동을 처음 불러올 때 생성
    pub fn zeroed(building_id: &str, now: NaiveDateTime) -> Self {
        let mut processes = BTreeMap::new();
        for category in ProcessCategory::ALL {
            processes.insert(category, CategoryPlan::zeroed(category));
        }
        Self {
            building_id: building_id.to_string(),
            processes,
            item_direct_work_days_overrides: BTreeMap::new(),
            special_row_quantities: BTreeMap::new(),
            total_days: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// 재지정 복합 키 (외부 직렬화 형식 유지)
    pub fn override_key(category: ProcessCategory, floor_label: Option<&str>, item_id: &str) -> String {
        format!("{}-{}-{}", category.as_str(), floor_label.unwrap_or(""), item_id)
    }

    /// 항목 재지정 조회 (키 존재 시에만 Some)
    pub fn override_for(
        &self,
        category: ProcessCategory,
        floor_label: Option<&str>,
        item_id: &str,
    ) -> Option<f64> {
        self.item_direct_work_days_overrides
            .get(&Self::override_key(category, floor_label, item_id))
            .copied()
    }

    /// 분류의 선택 공법 (층별 선택이 있으면 그 층 우선)
    pub fn process_type_for(
        &self,
        category: ProcessCategory,
        floor_label: Option<&str>,
    ) -> ProcessType {
        let plan = match self.processes.get(&category) {
            Some(p) => p,
            None => return category.default_process_type(),
        };
        if let (Some(label), Some(floors)) = (floor_label, plan.floors.as_ref()) {
            if let Some(floor_plan) = floors.get(label) {
                return floor_plan.process_type;
            }
        }
        plan.process_type
    }

    /// 특수 행 물량 조회 (미입력 → 0 물량)
    pub fn special_quantities(
        &self,
        key: &str,
    ) -> MaterialQuantities {
        self.special_row_quantities
            .get(key)
            .copied()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_key_format() {
        assert_eq!(
            ProcessPlan::override_key(ProcessCategory::Basement, Some("B1"), "item-3"),
            "지하층-B1-item-3"
        );
        assert_eq!(
            ProcessPlan::override_key(ProcessCategory::Foundation, None, "item-1"),
            "기초--item-1"
        );
    }

    #[test]
    fn zeroed_plan_has_all_categories() {
        let plan = ProcessPlan::zeroed("bld-1", chrono::NaiveDate::from_ymd_opt(2026, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(plan.processes.len(), ProcessCategory::ALL.len());
        assert_eq!(plan.total_days, 0);
        assert!(plan.processes[&ProcessCategory::Basement].floors.is_some());
        assert!(plan.processes[&ProcessCategory::Foundation].floors.is_none());
    }
}

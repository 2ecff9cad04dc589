// ==========================================
// 건설 공정일수 산정 시스템 - 일수 산정기
// ==========================================
// 순수 함수: (작업 항목, 해석된 물량, 장비 제약) → 직접 작업일수.
// 세 모드는 DurationMode 로 전수·배타 처리된다.
// 주의: 항목 일수는 개별 절사하지 않는다 - 절사는 스코프 합산 시 한 번만.
// ==========================================

use crate::catalog::{DurationMode, ProcessModuleItem};
use crate::config::EngineConfig;
use crate::domain::building::BuildingMeta;
use tracing::trace;

// ==========================================
// EquipmentConstraints - 장비 제약
// ==========================================
// 동 메타(펌프카 보유 대수 등)에서 나오는 장비 모드 상한
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EquipmentConstraints {
    pub max_equipment_count: Option<u32>,
    /// 항목의 기준량이 0 이하일 때 쓰는 대체 기준량
    pub fallback_calculation_base: Option<f64>,
}

impl EquipmentConstraints {
    /// 동 메타 + 엔진 설정에서 제약 구성 (메타 우선)
    pub fn from_meta(meta: &BuildingMeta, config: &EngineConfig) -> Self {
        Self {
            max_equipment_count: meta.max_pump_cars.or(config.default_max_pump_cars),
            fallback_calculation_base: meta
                .pump_car_base_m3
                .or(Some(config.default_pump_car_base_m3)),
        }
    }

    /// 상한 없음 (단위 테스트용)
    pub fn unbounded() -> Self {
        Self::default()
    }
}

// ==========================================
// DurationCalculator - 일수 산정기
// ==========================================
pub struct DurationCalculator;

impl DurationCalculator {
    /// 항목 1건의 직접 작업일수
    pub fn direct_work_days(
        item: &ProcessModuleItem,
        quantity: f64,
        constraints: &EquipmentConstraints,
    ) -> f64 {
        let quantity = quantity.max(0.0);
        let days = match &item.mode {
            // 고정 모드: 물량 무시
            DurationMode::FixedDays { days } => *days,

            // 장비 모드: 장비 대수 = ceil(물량/기준량), 보유 대수로 상한
            DurationMode::EquipmentBased {
                calculation_base,
                workers_per_unit,
                ..
            } => {
                let equipment_count =
                    Self::equipment_count(quantity, *calculation_base, constraints);
                let daily_input_workers = equipment_count as f64 * workers_per_unit;
                if daily_input_workers > 0.0 && item.daily_productivity > 0.0 {
                    (quantity / item.daily_productivity / daily_input_workers).ceil()
                } else {
                    0.0
                }
            }

            // 생산성 모드: 투입 인원 = 총인원 / 고정 조 수
            DurationMode::ProductivityBased { .. } => {
                if item.daily_productivity <= 0.0 {
                    return 0.0;
                }
                let total_workers = quantity / item.daily_productivity;
                let crew_count = item.equipment_count.max(1) as f64;
                let daily_input_workers = if total_workers == 0.0 {
                    0.0
                } else {
                    total_workers / crew_count
                };
                if daily_input_workers > 0.0 {
                    (quantity / item.daily_productivity / daily_input_workers).ceil()
                } else {
                    0.0
                }
            }
        };
        trace!(item_id = %item.id, quantity, days, "항목 일수 산정");
        days
    }

    /// 장비 대수: ceil(물량 / 기준량), 상한 절단
    pub fn equipment_count(
        quantity: f64,
        calculation_base: f64,
        constraints: &EquipmentConstraints,
    ) -> u32 {
        let base = if calculation_base > 0.0 {
            calculation_base
        } else {
            match constraints.fallback_calculation_base {
                Some(b) if b > 0.0 => b,
                _ => return 0,
            }
        };
        let count = (quantity / base).ceil().max(0.0) as u32;
        match constraints.max_equipment_count {
            Some(max) => count.min(max),
            None => count,
        }
    }

    /// 총 작업일수 = 직접 + 간접 (양생 등) - 표시용, 합산에는 직접일수만 쓴다
    pub fn total_work_days(
        item: &ProcessModuleItem,
        quantity: f64,
        constraints: &EquipmentConstraints,
    ) -> f64 {
        Self::direct_work_days(item, quantity, constraints) + item.indirect_days
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DurationMode;

    fn equipment_item(base: f64, workers: f64, productivity: f64) -> ProcessModuleItem {
        ProcessModuleItem {
            id: "t-1".to_string(),
            work_item: "콘크리트 타설".to_string(),
            unit: "㎥".to_string(),
            daily_productivity: productivity,
            equipment_count: 1,
            indirect_days: 0.0,
            indirect_work_item: None,
            floor_label: None,
            mode: DurationMode::EquipmentBased {
                quantity_reference: "G1".to_string(),
                calculation_base: base,
                workers_per_unit: workers,
            },
        }
    }

    #[test]
    fn equipment_mode_with_fleet_cap() {
        // 120㎥, 기준 60㎥ → 2대, 상한 2 유지, 투입 6인, ceil(120/20/6) = 1
        let item = equipment_item(60.0, 3.0, 20.0);
        let constraints = EquipmentConstraints {
            max_equipment_count: Some(2),
            fallback_calculation_base: None,
        };
        assert_eq!(
            DurationCalculator::equipment_count(120.0, 60.0, &constraints),
            2
        );
        assert_eq!(
            DurationCalculator::direct_work_days(&item, 120.0, &constraints),
            1.0
        );
    }

    #[test]
    fn equipment_mode_cap_binds() {
        let constraints = EquipmentConstraints {
            max_equipment_count: Some(2),
            fallback_calculation_base: None,
        };
        // ceil(600/60) = 10 이지만 보유 대수 2로 절단
        assert_eq!(
            DurationCalculator::equipment_count(600.0, 60.0, &constraints),
            2
        );
    }

    #[test]
    fn equipment_mode_zero_quantity() {
        let item = equipment_item(60.0, 3.0, 20.0);
        // 물량 0 → 장비 0대 → 투입 0인 → 0일
        assert_eq!(
            DurationCalculator::direct_work_days(&item, 0.0, &EquipmentConstraints::unbounded()),
            0.0
        );
    }

    #[test]
    fn productivity_mode_equals_crew_count() {
        // 투입 인원 = 총인원/조수 이므로 일수는 조 수로 수렴한다
        let item = ProcessModuleItem {
            id: "t-2".to_string(),
            work_item: "철근 배근".to_string(),
            unit: "톤".to_string(),
            daily_productivity: 2.5,
            equipment_count: 2,
            indirect_days: 0.0,
            indirect_work_item: None,
            floor_label: None,
            mode: DurationMode::ProductivityBased {
                quantity_reference: "F2".to_string(),
            },
        };
        let days =
            DurationCalculator::direct_work_days(&item, 100.0, &EquipmentConstraints::unbounded());
        assert_eq!(days, 2.0);
    }

    #[test]
    fn fixed_mode_ignores_quantity() {
        let item = ProcessModuleItem {
            id: "t-3".to_string(),
            work_item: "먹매김".to_string(),
            unit: "식".to_string(),
            daily_productivity: 0.0,
            equipment_count: 1,
            indirect_days: 1.0,
            indirect_work_item: Some("양생".to_string()),
            floor_label: None,
            mode: DurationMode::FixedDays { days: 1.5 },
        };
        let c = EquipmentConstraints::unbounded();
        assert_eq!(DurationCalculator::direct_work_days(&item, 0.0, &c), 1.5);
        assert_eq!(DurationCalculator::direct_work_days(&item, 999.0, &c), 1.5);
        assert_eq!(DurationCalculator::total_work_days(&item, 0.0, &c), 2.5);
    }
}

// ==========================================
// 건설 공정일수 산정 시스템 - 재지정·집계 엔진
// ==========================================
// 항목 재지정 맵을 관리하고, 재지정/공법 변경/물량 수정 때마다
// 분류·층 합계와 총일수를 결정론적으로 재계산한다.
// 규약:
//  - 모든 변이는 통째 교체(copy-on-write): 입력 계획은 불변
//  - 트리거마다 전체 재합산 - 저장된 days 를 입력으로 재사용하지 않는다
//  - 스코프 합계는 합산 후 한 번만 내림(floor) 절사
//  - 재지정 키의 존재 자체가 재지정 상태: 0 이하 입력은 키 삭제
// ==========================================

use crate::catalog::{ProcessModuleCatalog, ProcessModuleItem};
use crate::config::EngineConfig;
use crate::domain::building::{Building, MaterialQuantities};
use crate::domain::floor::normalize_floor_label;
use crate::domain::plan::{CategoryPlan, FloorScopePlan, ProcessPlan};
use crate::domain::types::{MaterialField, ProcessCategory, ProcessType, SpecialRow};
use crate::engine::duration::{DurationCalculator, EquipmentConstraints};
use crate::engine::floor_taxonomy::{FloorTaxonomy, FloorTaxonomyResolver};
use crate::engine::quantity::QuantityResolver;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

// ==========================================
// 스코프 물량 문맥 (내부)
// ==========================================
// 항목 물량이 어디서 오는지 스코프 종류별로 고정한다
enum ScopeQuantity<'a> {
    /// 스칼라 분류: 항목의 층 라벨 → 참조식 순으로 해석
    Scalar,
    /// 층 스코프: 층 라벨 직접 조회 (+지하층 특수 행 공제)
    Floor {
        label: &'a str,
        range_floor_id: Option<&'a str>,
        deduction: Option<MaterialQuantities>,
    },
    /// 특수 행 스코프: 계획에 입력된 물량만 읽는다
    Special { key: String },
}

// ==========================================
// ItemCalculation - 항목별 산정 내역
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct ItemCalculation {
    pub item_id: String,
    pub work_item: String,
    pub unit: String,
    pub quantity: f64,
    pub direct_work_days: f64, // 재지정이 있으면 그 값
    pub overridden: bool,
    pub indirect_days: f64,
    pub indirect_work_item: Option<String>,
}

// ==========================================
// PlanEngine - 재지정·집계 엔진
// ==========================================
pub struct PlanEngine {
    catalog: &'static ProcessModuleCatalog,
    config: EngineConfig,
}

impl PlanEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            catalog: ProcessModuleCatalog::builtin(),
            config,
        }
    }

    // ==========================================
    // 계획 수명주기
    // ==========================================

    /// 동을 처음 불러올 때의 초기 계획 (영 초기화 후 즉시 재계산)
    pub fn init_plan(&self, building: &Building) -> ProcessPlan {
        let plan = ProcessPlan::zeroed(&building.id, chrono::Utc::now().naive_utc());
        self.recalculate(building, &plan)
    }

    /// 전체 재계산: 모든 스코프의 days 와 총일수를 입력에서 다시 만든다
    pub fn recalculate(&self, building: &Building, plan: &ProcessPlan) -> ProcessPlan {
        let taxonomy = FloorTaxonomyResolver::resolve(building);
        let constraints = EquipmentConstraints::from_meta(&building.meta, &self.config);

        let mut next = plan.clone();
        let mut total: i64 = 0;

        for category in ProcessCategory::ALL {
            let category_plan = self.recalc_category(building, plan, &taxonomy, &constraints, category);
            total += category_plan.days;
            next.processes.insert(category, category_plan);
        }

        next.total_days = total;
        next.updated_at = chrono::Utc::now().naive_utc();
        info!(building_id = %building.id, total_days = total, "공정 계획 재계산");
        next
    }

    /// 총일수만 필요할 때의 순수 계산 (결정론·멱등)
    pub fn compute_total_days(&self, building: &Building, plan: &ProcessPlan) -> i64 {
        self.recalculate(building, plan).total_days
    }

    // ==========================================
    // 변이 연산 (모두 통째 교체 + 전체 재합산)
    // ==========================================

    /// 공법 변경. 지하층/옥탑층은 floor_label 로 층별 선택을 지원한다.
    ///
    /// 허용되지 않는 (분류, 공법) 조합은 무시하고 기존 계획을 돌려준다.
    pub fn set_process_type(
        &self,
        building: &Building,
        plan: &ProcessPlan,
        category: ProcessCategory,
        process_type: ProcessType,
        floor_label: Option<&str>,
    ) -> ProcessPlan {
        if !category.allowed_process_types().contains(&process_type) {
            warn!(category = %category, process_type = %process_type, "허용되지 않는 공법 - 무시");
            return plan.clone();
        }

        let mut next = plan.clone();
        let entry = next
            .processes
            .entry(category)
            .or_insert_with(|| CategoryPlan::zeroed(category));

        match floor_label {
            Some(label) if category.iterates_per_floor() && category != ProcessCategory::Standard => {
                let label = if category == ProcessCategory::Rooftop {
                    crate::domain::floor::normalize_rooftop_label(label)
                } else {
                    normalize_floor_label(label)
                };
                entry
                    .floors
                    .get_or_insert_with(BTreeMap::new)
                    .entry(label)
                    .and_modify(|f| f.process_type = process_type)
                    .or_insert(FloorScopePlan {
                        process_type,
                        days: 0,
                    });
            }
            _ => {
                entry.process_type = process_type;
            }
        }

        self.recalculate(building, &next)
    }

    /// 항목 직접일수 재지정
    ///
    /// 0 이하(또는 비정상) 값은 키를 제거해 계산값으로 되돌린다.
    /// 기준층 재지정은 대표 층 라벨 하나로 공유된다 - 어느 층에서 바꿔도
    /// 모든 기준층의 해당 항목에 적용된다.
    pub fn set_item_override(
        &self,
        building: &Building,
        plan: &ProcessPlan,
        category: ProcessCategory,
        floor_label: Option<&str>,
        item_id: &str,
        value: f64,
    ) -> ProcessPlan {
        let mut next = plan.clone();
        let key_label = self.override_floor_label(building, category, floor_label);
        let key = ProcessPlan::override_key(category, key_label.as_deref(), item_id);

        let clamped = if value.is_finite() { value.trunc() } else { 0.0 };
        if clamped > 0.0 {
            debug!(key = %key, value = clamped, "항목 재지정 설정");
            next.item_direct_work_days_overrides.insert(key, clamped);
        } else {
            debug!(key = %key, "항목 재지정 해제");
            next.item_direct_work_days_overrides.remove(&key);
        }

        self.recalculate(building, &next)
    }

    /// 지하층 특수 행(주차장/가시설 3단) 물량 입력
    ///
    /// 전 필드 0 입력은 행 삭제와 같다.
    pub fn set_special_row_quantities(
        &self,
        building: &Building,
        plan: &ProcessPlan,
        basement_floor_label: &str,
        row: SpecialRow,
        quantities: MaterialQuantities,
    ) -> ProcessPlan {
        let mut next = plan.clone();
        let label = normalize_floor_label(basement_floor_label);
        let key = row.quantity_key(&label);

        // 음수 입력 방어: set() 이 0 미만을 절단한다
        let mut clean = MaterialQuantities::default();
        for field in [
            MaterialField::GangForm,
            MaterialField::AluminumForm,
            MaterialField::Formwork,
            MaterialField::StripClean,
            MaterialField::Rebar,
            MaterialField::Concrete,
        ] {
            clean.set(field, quantities.get(field));
        }

        if clean == MaterialQuantities::default() {
            next.special_row_quantities.remove(&key);
        } else {
            next.special_row_quantities.insert(key, clean);
        }

        self.recalculate(building, &next)
    }

    // ==========================================
    // 조회 연산
    // ==========================================

    /// 스코프의 항목별 산정 내역 (표시·검증용)
    pub fn scope_breakdown(
        &self,
        building: &Building,
        plan: &ProcessPlan,
        category: ProcessCategory,
        floor_label: Option<&str>,
    ) -> Vec<ItemCalculation> {
        let taxonomy = FloorTaxonomyResolver::resolve(building);
        let constraints = EquipmentConstraints::from_meta(&building.meta, &self.config);
        let process_type = plan.process_type_for(category, floor_label);
        let module = match self.catalog.get_module(category, process_type) {
            Some(m) => m,
            None => return Vec::new(),
        };

        let owned_label = floor_label.map(normalize_floor_label);
        let (quantity, key_label) =
            self.scope_context(building, plan, &taxonomy, category, owned_label.as_deref());

        module
            .items
            .iter()
            .map(|item| {
                let q = self.item_quantity(building, plan, item, &quantity);
                let computed = DurationCalculator::direct_work_days(item, q, &constraints);
                let overridden = plan.override_for(category, key_label.as_deref(), &item.id);
                ItemCalculation {
                    item_id: item.id.clone(),
                    work_item: item.work_item.clone(),
                    unit: item.unit.clone(),
                    quantity: q,
                    direct_work_days: overridden.unwrap_or(computed),
                    overridden: overridden.is_some(),
                    indirect_days: item.indirect_days,
                    indirect_work_item: item.indirect_work_item.clone(),
                }
            })
            .collect()
    }

    /// 지하층 본체의 표시 물량: 원 물량 - 특수 행 물량 (0 미만 절단)
    pub fn basement_floor_quantities(
        &self,
        building: &Building,
        plan: &ProcessPlan,
        floor_label: &str,
    ) -> MaterialQuantities {
        let label = normalize_floor_label(floor_label);
        let raw = building
            .trade_row_by_floor(&label, None)
            .map(|r| r.quantities)
            .unwrap_or_default();
        match self.special_deduction(plan, &label) {
            Some(deduction) => raw.subtract(&deduction),
            None => raw,
        }
    }

    // ==========================================
    // 내부: 분류별 재계산
    // ==========================================

    fn recalc_category(
        &self,
        building: &Building,
        plan: &ProcessPlan,
        taxonomy: &FloorTaxonomy,
        constraints: &EquipmentConstraints,
        category: ProcessCategory,
    ) -> CategoryPlan {
        match category {
            // 스칼라 분류: 단일 스코프
            ProcessCategory::StripConcrete
            | ProcessCategory::Foundation
            | ProcessCategory::Setting
            | ProcessCategory::Ph => {
                let process_type = plan.process_type_for(category, None);
                let days = self.scope_days(
                    building,
                    plan,
                    constraints,
                    category,
                    process_type,
                    None,
                    &ScopeQuantity::Scalar,
                );
                CategoryPlan {
                    days,
                    process_type,
                    floors: None,
                }
            }

            // 지하층: 층별 반복 + 특수 행 스코프
            ProcessCategory::Basement => {
                let mut floors = BTreeMap::new();
                let mut sum = 0i64;
                for label in &taxonomy.basement {
                    let process_type = plan.process_type_for(category, Some(label));
                    let deduction = self.special_deduction(plan, label);
                    let days = self.scope_days(
                        building,
                        plan,
                        constraints,
                        category,
                        process_type,
                        Some(label),
                        &ScopeQuantity::Floor {
                            label,
                            range_floor_id: None,
                            deduction,
                        },
                    );
                    sum += days;
                    floors.insert(label.clone(), FloorScopePlan { process_type, days });

                    // 특수 행: 입력된 물량이 있을 때만 자체 스코프가 된다
                    for row in SpecialRow::ALL {
                        let key = row.quantity_key(label);
                        if !plan.special_row_quantities.contains_key(&key) {
                            continue;
                        }
                        let scope_label = row.scope_label(label);
                        let days = self.scope_days(
                            building,
                            plan,
                            constraints,
                            category,
                            process_type,
                            Some(&scope_label),
                            &ScopeQuantity::Special { key },
                        );
                        sum += days;
                        floors.insert(scope_label, FloorScopePlan { process_type, days });
                    }
                }
                CategoryPlan {
                    days: sum,
                    process_type: plan.process_type_for(category, None),
                    floors: Some(floors),
                }
            }

            // 기준층: 전개 층별 반복, 재지정은 대표 층 라벨로 공유
            ProcessCategory::Standard => {
                let process_type = plan.process_type_for(category, None);
                let representative = taxonomy.standard_representative().map(|s| s.to_string());
                let mut floors = BTreeMap::new();
                let mut sum = 0i64;
                for floor in &taxonomy.standard {
                    let days = self.scope_days(
                        building,
                        plan,
                        constraints,
                        category,
                        process_type,
                        representative.as_deref(),
                        &ScopeQuantity::Floor {
                            label: &floor.label,
                            range_floor_id: floor.range_floor_id.as_deref(),
                            deduction: None,
                        },
                    );
                    sum += days;
                    floors.insert(floor.label.clone(), FloorScopePlan { process_type, days });
                }
                CategoryPlan {
                    days: sum,
                    process_type,
                    floors: Some(floors),
                }
            }

            // 옥탑층: 층별 반복
            ProcessCategory::Rooftop => {
                let mut floors = BTreeMap::new();
                let mut sum = 0i64;
                for label in &taxonomy.rooftop {
                    let process_type = plan.process_type_for(category, Some(label));
                    let days = self.scope_days(
                        building,
                        plan,
                        constraints,
                        category,
                        process_type,
                        Some(label),
                        &ScopeQuantity::Floor {
                            label,
                            range_floor_id: None,
                            deduction: None,
                        },
                    );
                    sum += days;
                    floors.insert(label.clone(), FloorScopePlan { process_type, days });
                }
                CategoryPlan {
                    days: sum,
                    process_type: plan.process_type_for(category, None),
                    floors: Some(floors),
                }
            }
        }
    }

    /// 스코프 합계: 항목별(재지정 우선) 일수의 합을 한 번만 내림 절사
    fn scope_days(
        &self,
        building: &Building,
        plan: &ProcessPlan,
        constraints: &EquipmentConstraints,
        category: ProcessCategory,
        process_type: ProcessType,
        override_floor_label: Option<&str>,
        quantity: &ScopeQuantity<'_>,
    ) -> i64 {
        let module = match self.catalog.get_module(category, process_type) {
            Some(m) => m,
            None => return 0, // 미인식 조합 = 항목 0개
        };

        let sum: f64 = module
            .items
            .iter()
            .map(|item| {
                match plan.override_for(category, override_floor_label, &item.id) {
                    Some(overridden) => overridden,
                    None => {
                        let q = self.item_quantity(building, plan, item, quantity);
                        DurationCalculator::direct_work_days(item, q, constraints)
                    }
                }
            })
            .sum();

        sum.floor() as i64
    }

    /// 항목 물량 해석의 단일 창구
    fn item_quantity(
        &self,
        building: &Building,
        plan: &ProcessPlan,
        item: &ProcessModuleItem,
        scope: &ScopeQuantity<'_>,
    ) -> f64 {
        match scope {
            ScopeQuantity::Floor {
                label,
                range_floor_id,
                deduction,
            } => {
                let field = match item.material_field() {
                    Some(f) => f,
                    None => return 0.0,
                };
                let raw =
                    QuantityResolver::resolve_from_floor(building, label, field, *range_floor_id);
                match deduction {
                    Some(d) => (raw - d.get(field)).max(0.0),
                    None => raw,
                }
            }
            ScopeQuantity::Special { key } => match item.material_field() {
                Some(field) => plan.special_quantities(key).get(field),
                None => 0.0,
            },
            ScopeQuantity::Scalar => {
                if let Some(floor_label) = item.floor_label.as_deref() {
                    match item.material_field() {
                        Some(field) => QuantityResolver::resolve_from_floor(
                            building,
                            floor_label,
                            field,
                            None,
                        ),
                        None => 0.0,
                    }
                } else if let Some(reference) = item.quantity_reference() {
                    QuantityResolver::resolve_by_reference(building, reference, &item.unit)
                } else {
                    0.0
                }
            }
        }
    }

    /// 층의 특수 행 공제량 (입력된 행들의 물량 합)
    fn special_deduction(
        &self,
        plan: &ProcessPlan,
        floor_label: &str,
    ) -> Option<MaterialQuantities> {
        let mut total = MaterialQuantities::default();
        let mut any = false;
        for row in SpecialRow::ALL {
            if let Some(q) = plan.special_row_quantities.get(&row.quantity_key(floor_label)) {
                any = true;
                total.gang_form += q.gang_form;
                total.aluminum_form += q.aluminum_form;
                total.formwork += q.formwork;
                total.strip_clean += q.strip_clean;
                total.rebar += q.rebar;
                total.concrete += q.concrete;
            }
        }
        any.then_some(total)
    }

    /// 재지정 키에 들어갈 층 라벨 (기준층은 대표 층으로 접합)
    fn override_floor_label(
        &self,
        building: &Building,
        category: ProcessCategory,
        floor_label: Option<&str>,
    ) -> Option<String> {
        if category == ProcessCategory::Standard {
            let taxonomy = FloorTaxonomyResolver::resolve(building);
            return taxonomy.standard_representative().map(|s| s.to_string());
        }
        floor_label.map(normalize_floor_label)
    }

    /// 스코프 조회용 문맥 구성 (scope_breakdown 전용)
    fn scope_context<'a>(
        &self,
        _building: &Building,
        plan: &ProcessPlan,
        taxonomy: &'a FloorTaxonomy,
        category: ProcessCategory,
        floor_label: Option<&'a str>,
    ) -> (ScopeQuantity<'a>, Option<String>) {
        match (category, floor_label) {
            (ProcessCategory::Basement, Some(label)) => {
                // 특수 행 스코프 라벨인지 먼저 확인
                for row in SpecialRow::ALL {
                    if let Some(parent) = label.strip_suffix(row.as_str()) {
                        let parent = parent.trim();
                        let key = row.quantity_key(parent);
                        if plan.special_row_quantities.contains_key(&key) {
                            return (ScopeQuantity::Special { key }, Some(label.to_string()));
                        }
                    }
                }
                (
                    ScopeQuantity::Floor {
                        label,
                        range_floor_id: None,
                        deduction: self.special_deduction(plan, label),
                    },
                    Some(label.to_string()),
                )
            }
            (ProcessCategory::Standard, Some(label)) => {
                let range_floor_id = taxonomy
                    .standard_floor(label)
                    .and_then(|f| f.range_floor_id.as_deref());
                (
                    ScopeQuantity::Floor {
                        label,
                        range_floor_id,
                        deduction: None,
                    },
                    taxonomy.standard_representative().map(|s| s.to_string()),
                )
            }
            (ProcessCategory::Rooftop, Some(label)) => (
                ScopeQuantity::Floor {
                    label,
                    range_floor_id: None,
                    deduction: None,
                },
                Some(label.to_string()),
            ),
            _ => (ScopeQuantity::Scalar, None),
        }
    }
}

impl Default for PlanEngine {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 건설 공정일수 산정 시스템 - 카탈로그 정적 데이터
// ==========================================
// 생산성 수치는 표준품셈 기반 사내 기준표에서 가져온 값이다.
// 행 번호 참조(예: "F2")는 평탄화 물량표의 1-기반 행:
//   1행 버림, 2행 기초, 이후 지하층(깊은 층부터)/셋팅층/기준층/최상층/PH/옥탑 순.
// 행 산출이 불안정한 분류(지하/옥탑/범위 전개 층)는 참조식 대신
// 층 라벨 직접 조회(floor_label 또는 범위 스코프)로 해석된다.
// ==========================================

use super::{DurationMode, ProcessModule, ProcessModuleItem};
use crate::domain::types::{ProcessCategory, ProcessType};

// ==========================================
// 항목 구성 도우미
// ==========================================

fn fixed(id: &str, work_item: &str, unit: &str, days: f64) -> ProcessModuleItem {
    ProcessModuleItem {
        id: id.to_string(),
        work_item: work_item.to_string(),
        unit: unit.to_string(),
        daily_productivity: 0.0,
        equipment_count: 1,
        indirect_days: 0.0,
        indirect_work_item: None,
        floor_label: None,
        mode: DurationMode::FixedDays { days },
    }
}

fn productivity(
    id: &str,
    work_item: &str,
    unit: &str,
    reference: &str,
    daily_productivity: f64,
    equipment_count: u32,
) -> ProcessModuleItem {
    ProcessModuleItem {
        id: id.to_string(),
        work_item: work_item.to_string(),
        unit: unit.to_string(),
        daily_productivity,
        equipment_count,
        indirect_days: 0.0,
        indirect_work_item: None,
        floor_label: None,
        mode: DurationMode::ProductivityBased {
            quantity_reference: reference.to_string(),
        },
    }
}

fn equipment(
    id: &str,
    work_item: &str,
    unit: &str,
    reference: &str,
    daily_productivity: f64,
    calculation_base: f64,
    workers_per_unit: f64,
) -> ProcessModuleItem {
    ProcessModuleItem {
        id: id.to_string(),
        work_item: work_item.to_string(),
        unit: unit.to_string(),
        daily_productivity,
        equipment_count: 1,
        indirect_days: 0.0,
        indirect_work_item: None,
        floor_label: None,
        mode: DurationMode::EquipmentBased {
            quantity_reference: reference.to_string(),
            calculation_base,
            workers_per_unit,
        },
    }
}

fn with_indirect(mut item: ProcessModuleItem, days: f64, work_item: &str) -> ProcessModuleItem {
    item.indirect_days = days;
    item.indirect_work_item = Some(work_item.to_string());
    item
}

fn pinned(mut item: ProcessModuleItem, floor_label: &str) -> ProcessModuleItem {
    item.floor_label = Some(floor_label.to_string());
    item
}

// ==========================================
// 내장 모듈 테이블
// ==========================================

pub(super) fn builtin_modules() -> Vec<ProcessModule> {
    vec![
        strip_concrete_basic(),
        foundation_basic(),
        basement_basic(),
        setting_basic(),
        standard_cycle4(),
        standard_cycle5(),
        standard_cycle6(),
        standard_cycle7(),
        ph_basic(),
        rooftop_basic(),
    ]
}

// ----- 버림 -----
fn strip_concrete_basic() -> ProcessModule {
    ProcessModule {
        category: ProcessCategory::StripConcrete,
        process_type: ProcessType::Basic,
        items: vec![
            fixed("버림-01", "터파기 바닥 정리", "식", 1.0),
            with_indirect(
                equipment("버림-02", "버림 콘크리트 타설", "㎥", "G1", 45.0, 250.0, 3.0),
                1.0,
                "버림 양생",
            ),
        ],
    }
}

// ----- 기초 -----
fn foundation_basic() -> ProcessModule {
    ProcessModule {
        category: ProcessCategory::Foundation,
        process_type: ProcessType::Basic,
        items: vec![
            fixed("기초-01", "기초 먹매김", "식", 1.0),
            productivity("기초-02", "기초 철근 배근", "톤", "F2", 2.5, 2),
            productivity("기초-03", "기초 측면 형틀 설치", "㎡", "D2", 12.0, 1),
            with_indirect(
                equipment("기초-04", "기초 콘크리트 타설", "㎥", "G2", 50.0, 500.0, 4.0),
                3.0,
                "기초 양생",
            ),
            fixed("기초-05", "되메우기 및 정리", "식", 2.0),
        ],
    }
}

// ----- 지하층 (층별 스코프에서 층 라벨 조회로 해석) -----
fn basement_basic() -> ProcessModule {
    ProcessModule {
        category: ProcessCategory::Basement,
        process_type: ProcessType::Basic,
        items: vec![
            fixed("지하-01", "먹매김", "식", 0.5),
            productivity("지하-02", "벽체·기둥 철근 배근", "톤", "지하층", 2.5, 2),
            productivity("지하-03", "벽체·슬라브 형틀 설치", "㎡", "지하층", 10.0, 1),
            with_indirect(
                equipment("지하-04", "콘크리트 타설", "㎥", "지하층", 50.0, 500.0, 4.0),
                2.0,
                "양생",
            ),
            productivity("지하-05", "형틀 해체 및 정리", "㎡", "지하층", 30.0, 1),
        ],
    }
}

// ----- 셋팅층 -----
fn setting_basic() -> ProcessModule {
    ProcessModule {
        category: ProcessCategory::Setting,
        process_type: ProcessType::Basic,
        items: vec![
            fixed("셋팅-01", "셋팅층 먹매김", "식", 1.0),
            pinned(
                productivity("셋팅-02", "셋팅층 철근 배근", "톤", "셋팅층", 2.5, 2),
                "셋팅층",
            ),
            pinned(
                productivity("셋팅-03", "셋팅층 형틀 설치", "㎡", "셋팅층", 10.0, 1),
                "셋팅층",
            ),
            pinned(
                with_indirect(
                    equipment("셋팅-04", "셋팅층 콘크리트 타설", "㎥", "셋팅층", 45.0, 400.0, 3.0),
                    2.0,
                    "양생",
                ),
                "셋팅층",
            ),
        ],
    }
}

// ----- 기준층 사이클 (전 항목 고정 일수, 합계 = 사이클 일수) -----
fn standard_cycle4() -> ProcessModule {
    ProcessModule {
        category: ProcessCategory::Standard,
        process_type: ProcessType::Cycle4,
        items: vec![
            fixed("기준4-01", "먹매김·갱폼 인양", "식", 0.5),
            fixed("기준4-02", "벽체 철근·알폼 설치", "식", 1.0),
            fixed("기준4-03", "슬라브 알폼·철근 배근", "식", 1.5),
            fixed("기준4-04", "콘크리트 타설", "식", 1.0),
        ],
    }
}

fn standard_cycle5() -> ProcessModule {
    ProcessModule {
        category: ProcessCategory::Standard,
        process_type: ProcessType::Cycle5,
        items: vec![
            fixed("기준5-01", "먹매김·갱폼 인양", "식", 1.0),
            fixed("기준5-02", "벽체 철근·알폼 설치", "식", 1.5),
            fixed("기준5-03", "슬라브 알폼 설치", "식", 1.0),
            fixed("기준5-04", "슬라브 철근 배근", "식", 0.5),
            fixed("기준5-05", "콘크리트 타설", "식", 1.0),
        ],
    }
}

fn standard_cycle6() -> ProcessModule {
    ProcessModule {
        category: ProcessCategory::Standard,
        process_type: ProcessType::Cycle6,
        items: vec![
            fixed("기준6-01", "먹매김·갱폼 인양", "식", 1.0),
            fixed("기준6-02", "벽체 철근 배근", "식", 1.0),
            fixed("기준6-03", "벽체 알폼 설치", "식", 1.0),
            fixed("기준6-04", "슬라브 알폼 설치", "식", 1.0),
            fixed("기준6-05", "슬라브 철근 배근", "식", 1.0),
            fixed("기준6-06", "콘크리트 타설", "식", 1.0),
        ],
    }
}

fn standard_cycle7() -> ProcessModule {
    ProcessModule {
        category: ProcessCategory::Standard,
        process_type: ProcessType::Cycle7,
        items: vec![
            fixed("기준7-01", "먹매김·갱폼 인양", "식", 1.0),
            fixed("기준7-02", "벽체 철근 배근", "식", 1.0),
            fixed("기준7-03", "벽체 알폼 설치", "식", 1.0),
            fixed("기준7-04", "슬라브 알폼 설치", "식", 1.0),
            fixed("기준7-05", "슬라브 철근 배근", "식", 1.0),
            fixed("기준7-06", "콘크리트 타설", "식", 1.0),
            fixed("기준7-07", "마감 정리", "식", 1.0),
        ],
    }
}

// ----- PH층 -----
fn ph_basic() -> ProcessModule {
    ProcessModule {
        category: ProcessCategory::Ph,
        process_type: ProcessType::Basic,
        items: vec![
            fixed("PH-01", "PH층 먹매김", "식", 0.5),
            pinned(productivity("PH-02", "PH층 철근 배근", "톤", "PH층", 2.5, 2), "PH"),
            pinned(productivity("PH-03", "PH층 형틀 설치", "㎡", "PH층", 10.0, 1), "PH"),
            pinned(
                with_indirect(
                    equipment("PH-04", "PH층 콘크리트 타설", "㎥", "PH층", 45.0, 300.0, 3.0),
                    2.0,
                    "양생",
                ),
                "PH",
            ),
        ],
    }
}

// ----- 옥탑층 (층별 스코프) -----
fn rooftop_basic() -> ProcessModule {
    ProcessModule {
        category: ProcessCategory::Rooftop,
        process_type: ProcessType::Basic,
        items: vec![
            fixed("옥탑-01", "옥탑 먹매김", "식", 0.5),
            productivity("옥탑-02", "옥탑 철근 배근", "톤", "옥탑층", 2.5, 2),
            productivity("옥탑-03", "옥탑 형틀 설치", "㎡", "옥탑층", 10.0, 1),
            with_indirect(
                equipment("옥탑-04", "옥탑 콘크리트 타설", "㎥", "옥탑층", 45.0, 300.0, 3.0),
                2.0,
                "양생",
            ),
            productivity("옥탑-05", "옥탑 형틀 해체·정리", "㎡", "옥탑층", 30.0, 1),
        ],
    }
}

// ==========================================
// 전체 흐름 E2E 테스트
// ==========================================
// CSV 가져오기 → 초기 계획 산정 → 공법 변경·재지정 →
// SQLite 저장 → 재기동 후 로드 → 재계산 일치 확인
// ==========================================

use gongjeong_planner::importer::BuildingImporter;
use gongjeong_planner::{
    logging, BuildingMeta, PlanEngine, PlanStore, ProcessCategory, ProcessType, SqlitePlanStore,
};

const TRADE_CSV: &str = "\
floor_label,floor_class,level_type,floor_number,trade_group,gang_form,aluminum_form,formwork,strip_clean,rebar,concrete
기초,기초,지하,0,버림,0,0,0,0,0,450
기초,기초,지하,0,기초,0,0,520,0,180,1400
B1,지하층,지하,1,지하층,0,0,500,500,60,600
셋팅층,셋팅층,지상,1,셋팅층,0,0,1800,0,70,650
2~5F 기준층,기준층,지상,2,기준층,800,1600,0,0,45,380
PH,PH층,지상,6,PH층,0,0,400,0,12,90
옥탑1,옥탑층,지상,7,옥탑층,0,0,260,260,8,60
";

fn import_building() -> gongjeong_planner::Building {
    BuildingImporter::import_reader(
        TRADE_CSV.as_bytes(),
        "bld-201",
        "201동",
        BuildingMeta {
            core_count: 1,
            pump_car_base_m3: None,
            max_pump_cars: Some(2),
            unit_composition: Some("59B×2".to_string()),
        },
    )
    .unwrap()
}

#[test]
fn import_plan_override_persist_reload() {
    logging::init_test();

    let building = import_building();
    let engine = PlanEngine::new();

    // 초기 산정: 버림 3 / 기초 10 / 지하층 6 / 셋팅층 7 /
    //            기준층 24 (4개층 × 6일) / PH층 4 / 옥탑층 5
    let plan = engine.init_plan(&building);
    assert_eq!(plan.processes[&ProcessCategory::Standard].days, 24);
    assert_eq!(plan.total_days, 59);

    // 기준층을 5일 사이클로 전환: 4개층 × 5일
    let plan = engine.set_process_type(
        &building,
        &plan,
        ProcessCategory::Standard,
        ProcessType::Cycle5,
        None,
    );
    assert_eq!(plan.processes[&ProcessCategory::Standard].days, 20);
    assert_eq!(plan.total_days, 55);

    // 타설 항목 재지정 (1일 → 2일): 층당 6일로
    let plan = engine.set_item_override(
        &building,
        &plan,
        ProcessCategory::Standard,
        Some("3F"),
        "기준5-05",
        2.0,
    );
    assert_eq!(plan.processes[&ProcessCategory::Standard].days, 24);
    assert_eq!(plan.total_days, 59);

    // 저장 후 재기동 시나리오
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("plans.db");
    {
        let store = SqlitePlanStore::open(db_path.to_str().unwrap()).unwrap();
        store.set(&building.id, &plan).unwrap();
    }

    let store = SqlitePlanStore::open(db_path.to_str().unwrap()).unwrap();
    let loaded = store.get(&building.id).unwrap().unwrap();
    assert_eq!(loaded, plan);

    // 로드된 계획을 다시 돌려도 같은 결과 (재지정·공법 선택이 살아 있다)
    let recalced = engine.recalculate(&building, &loaded);
    assert_eq!(recalced.processes, plan.processes);
    assert_eq!(recalced.total_days, 59);
    assert_eq!(
        recalced.processes[&ProcessCategory::Standard].process_type,
        ProcessType::Cycle5
    );
}

#[test]
fn quantity_change_after_reload_cascades() {
    let mut building = import_building();
    let engine = PlanEngine::new();
    let plan = engine.init_plan(&building);

    // 타설 물량 600 → 1800: 장비 모드 항목이 연쇄 재계산된다
    for record in &mut building.floor_trades {
        if record.floor_label == "B1" {
            record.quantities.concrete = 1800.0;
        }
    }
    // 지하-04: 필요 4대 → 상한 2대, 투입 8인, ceil(1800/50/8) = 5 (기존 2)
    let recalced = engine.recalculate(&building, &plan);
    assert_eq!(
        recalced.processes[&ProcessCategory::Basement].days,
        plan.processes[&ProcessCategory::Basement].days + 3
    );
    assert_eq!(recalced.total_days, plan.total_days + 3);
}

// ==========================================
// 계획 저장소 테스트 (메모리 + SQLite)
// ==========================================


use gongjeong_planner::{
    MemoryPlanStore, PlanEngine, PlanStore, ProcessCategory, SqlitePlanStore,
};
use test_helpers::sample_building;

fn stores() -> Vec<(&'static str, Box<dyn PlanStore>)> {
    vec![
        ("memory", Box::new(MemoryPlanStore::new())),
        (
            "sqlite",
            Box::new(SqlitePlanStore::open(":memory:").unwrap()),
        ),
    ]
}

#[test]
fn get_after_set_returns_equal_plan() {
    let building = sample_building();
    let engine = PlanEngine::new();
    let plan = engine.init_plan(&building);

    for (name, store) in stores() {
        store.set(&building.id, &plan).unwrap();
        let loaded = store.get(&building.id).unwrap().unwrap();
        assert_eq!(loaded, plan, "{} 저장소 왕복 불일치", name);
    }
}

#[test]
fn unknown_building_returns_none() {
    for (name, store) in stores() {
        assert!(store.get("없는-동").unwrap().is_none(), "{}", name);
    }
}

#[test]
fn set_replaces_existing_plan() {
    let building = sample_building();
    let engine = PlanEngine::new();
    let plan = engine.init_plan(&building);
    let overridden = engine.set_item_override(
        &building,
        &plan,
        ProcessCategory::Foundation,
        None,
        "기초-02",
        5.0,
    );

    for (name, store) in stores() {
        store.set(&building.id, &plan).unwrap();
        store.set(&building.id, &overridden).unwrap();
        let loaded = store.get(&building.id).unwrap().unwrap();
        assert_eq!(loaded.total_days, overridden.total_days, "{}", name);
        assert_eq!(loaded.item_direct_work_days_overrides.len(), 1, "{}", name);
    }
}

#[test]
fn delete_and_list() {
    let building = sample_building();
    let engine = PlanEngine::new();
    let plan = engine.init_plan(&building);

    for (name, store) in stores() {
        store.set("bld-101", &plan).unwrap();
        store.set("bld-102", &plan).unwrap();
        assert_eq!(
            store.list_building_ids().unwrap(),
            vec!["bld-101".to_string(), "bld-102".to_string()],
            "{}",
            name
        );
        store.delete("bld-101").unwrap();
        assert_eq!(
            store.list_building_ids().unwrap(),
            vec!["bld-102".to_string()],
            "{}",
            name
        );
        // 없는 동 삭제는 무해
        store.delete("bld-999").unwrap();
    }
}

#[test]
fn sqlite_store_survives_reopen() {
    let building = sample_building();
    let engine = PlanEngine::new();
    let plan = engine.init_plan(&building);

    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("plans.db");
    let db_path = db_path.to_str().unwrap();

    {
        let store = SqlitePlanStore::open(db_path).unwrap();
        store.set(&building.id, &plan).unwrap();
    }
    let store = SqlitePlanStore::open(db_path).unwrap();
    let loaded = store.get(&building.id).unwrap().unwrap();
    assert_eq!(loaded, plan);
}

#[test]
fn plan_json_uses_korean_category_labels() {
    // 저장 형식 안정성: 분류 키는 한글 라벨, 필드는 camelCase
    let building = sample_building();
    let engine = PlanEngine::new();
    let plan = engine.init_plan(&building);

    let json = serde_json::to_string(&plan).unwrap();
    assert!(json.contains("\"기준층\""));
    assert!(json.contains("\"버림\""));
    assert!(json.contains("\"totalDays\""));
    assert!(json.contains("\"processType\""));

    let back: gongjeong_planner::ProcessPlan = serde_json::from_str(&json).unwrap();
    assert_eq!(back, plan);
}

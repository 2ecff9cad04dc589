// ==========================================
// 동 물량표 가져오기 테스트
// ==========================================

use gongjeong_planner::importer::{BuildingImporter, ImportError};
use gongjeong_planner::{BuildingMeta, FloorClass, LevelType};

const HEADER: &str =
    "floor_label,floor_class,level_type,floor_number,trade_group,gang_form,aluminum_form,formwork,strip_clean,rebar,concrete";

fn meta() -> BuildingMeta {
    BuildingMeta {
        core_count: 1,
        pump_car_base_m3: None,
        max_pump_cars: Some(2),
        unit_composition: None,
    }
}

fn import(csv: &str) -> Result<gongjeong_planner::Building, ImportError> {
    BuildingImporter::import_reader(csv.as_bytes(), "bld-1", "1동", meta())
}

#[test]
fn imports_rows_into_building() {
    let csv = format!(
        "{HEADER}\n\
         기초,기초,지하,0,버림,0,0,0,0,0,450\n\
         기초,기초,지하,0,기초,0,0,520,0,180,1400\n\
         B1,지하층,지하,1,지하층,0,0,500,500,60,600\n\
         셋팅층,셋팅층,지상,1,셋팅층,0,0,1800,0,70,650\n"
    );
    let building = import(&csv).unwrap();

    assert_eq!(building.id, "bld-1");
    // 기초 라벨 2행은 층 1개로 합쳐진다
    assert_eq!(building.floors.len(), 3);
    assert_eq!(building.floor_trades.len(), 4);

    let b1 = building
        .floors
        .iter()
        .find(|f| f.floor_label == "B1")
        .unwrap();
    assert_eq!(b1.floor_class, FloorClass::Basement);
    assert_eq!(b1.level_type, LevelType::BelowGrade);

    // 행 순서 보존: 1행 버림, 2행 기초
    assert_eq!(building.trade_row(1).unwrap().trade_group, "버림");
    assert_eq!(building.trade_row(2).unwrap().quantities.rebar, 180.0);
    assert_eq!(
        building.trade_row_by_floor("B1", None).unwrap().quantities.concrete,
        600.0
    );
}

#[test]
fn core_prefixed_label_shares_floor_id() {
    let csv = format!(
        "{HEADER}\n\
         B1,지하층,지하,1,지하층,0,0,500,500,60,600\n\
         코어1-B1,지하층,지하,1,지하층,0,0,120,120,10,80\n"
    );
    let building = import(&csv).unwrap();

    // 정규화 라벨이 같으므로 층은 1개, 물량 행은 2개
    assert_eq!(building.floors.len(), 1);
    assert_eq!(building.floor_trades.len(), 2);
    assert_eq!(
        building.floor_trades[0].floor_id,
        building.floor_trades[1].floor_id
    );
    // 가져온 행의 라벨은 정규화되어 저장된다
    assert_eq!(building.floor_trades[1].floor_label, "B1");
}

#[test]
fn rejects_negative_quantity_with_line_number() {
    let csv = format!(
        "{HEADER}\n\
         기초,기초,지하,0,버림,0,0,0,0,0,450\n\
         B1,지하층,지하,1,지하층,0,0,-10,0,60,600\n"
    );
    match import(&csv) {
        Err(ImportError::InvalidRow { line, message }) => {
            assert_eq!(line, 3);
            assert!(message.contains("formwork"), "{}", message);
        }
        other => panic!("InvalidRow 기대, 실제: {:?}", other.map(|b| b.id)),
    }
}

#[test]
fn rejects_empty_floor_label() {
    let csv = format!(
        "{HEADER}\n\
         ,지하층,지하,1,지하층,0,0,500,500,60,600\n"
    );
    match import(&csv) {
        Err(ImportError::InvalidRow { line, .. }) => assert_eq!(line, 2),
        other => panic!("InvalidRow 기대, 실제: {:?}", other.map(|b| b.id)),
    }
}

#[test]
fn level_type_falls_back_to_class() {
    // level_type 미기재: 지하층 → 지하, 기준층 → 지상
    let csv = format!(
        "{HEADER}\n\
         B1,지하층,,1,지하층,0,0,500,500,60,600\n\
         5F,기준층,,5,기준층,0,0,0,0,45,380\n"
    );
    let building = import(&csv).unwrap();
    assert_eq!(building.floors[0].level_type, LevelType::BelowGrade);
    assert_eq!(building.floors[1].level_type, LevelType::AboveGrade);
}

#[test]
fn unrecognized_class_becomes_normal() {
    let csv = format!(
        "{HEADER}\n\
         기계실,기계실,지상,1,기타,0,0,100,0,5,50\n"
    );
    let building = import(&csv).unwrap();
    assert_eq!(building.floors[0].floor_class, FloorClass::Normal);
}

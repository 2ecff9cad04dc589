// ==========================================
// 층 분류 해석기 통합 테스트
// ==========================================
// 1. 의미 그룹 분류와 정렬
// 2. 코어 접두어 정규화와 중복 탈락
// 3. 범위 표기 전개 (최상층 제외)
// 4. 옥탑 PHN 동의어
// ==========================================


use gongjeong_planner::{FloorTaxonomyResolver, Floor, FloorClass, LevelType};
use test_helpers::sample_building;

#[test]
fn classifies_sample_building() {
    let building = sample_building();
    let taxonomy = FloorTaxonomyResolver::resolve(&building);

    assert_eq!(taxonomy.foundation, vec!["기초"]);
    // 집계 순서: 낮은 색인 → 높은 색인
    assert_eq!(taxonomy.basement, vec!["B1", "B2"]);
    // 표시 순서: 깊은 층 먼저
    assert_eq!(taxonomy.basement_display(), vec!["B2", "B1"]);
    assert_eq!(taxonomy.setting, vec!["셋팅층"]);
    assert_eq!(taxonomy.ph, vec!["PH"]);
    // PHN 동의어가 옥탑N 으로 통일된다
    assert_eq!(taxonomy.rooftop, vec!["옥탑1"]);
}

#[test]
fn core_prefixed_duplicate_is_dropped() {
    let building = sample_building();
    let taxonomy = FloorTaxonomyResolver::resolve(&building);

    // "코어1-B1" 은 정규화 후 "B1" 과 같은 층: 먼저 만난 층이 유효
    assert_eq!(
        taxonomy.basement.iter().filter(|l| *l == "B1").count(),
        1
    );
}

#[test]
fn range_is_expanded_per_integer() {
    let building = sample_building();
    let taxonomy = FloorTaxonomyResolver::resolve(&building);

    // 2~14F 전개 13개층 + 최상층 15F
    assert_eq!(taxonomy.standard.len(), 14);
    assert_eq!(taxonomy.standard[0].label, "2F");
    assert_eq!(taxonomy.standard[0].range_floor_id.as_deref(), Some("flr-std-2"));
    assert_eq!(taxonomy.standard_representative(), Some("2F"));

    let top = taxonomy.standard.last().unwrap();
    assert_eq!(top.label, "15F");
    assert!(top.is_top);
    assert!(top.range_floor_id.is_none());
}

#[test]
fn range_expansion_excludes_independent_top_floor() {
    // 범위가 최상층 번호를 덮어도 그 번호는 전개에서 빠진다
    let mut building = sample_building();
    building.floors.iter_mut().for_each(|f| {
        if f.id == "flr-std" {
            f.floor_label = "2~15F 기준층".to_string();
        }
    });
    let taxonomy = FloorTaxonomyResolver::resolve(&building);

    // 15F 는 최상층 레코드 하나만 남아야 한다
    let count_15f = taxonomy.standard.iter().filter(|f| f.label == "15F").count();
    assert_eq!(count_15f, 1);
    assert!(taxonomy.standard.iter().find(|f| f.label == "15F").unwrap().is_top);
    assert_eq!(taxonomy.standard.len(), 14);
}

#[test]
fn empty_building_resolves_to_empty_taxonomy() {
    let mut building = sample_building();
    building.floors.clear();
    let taxonomy = FloorTaxonomyResolver::resolve(&building);

    assert!(taxonomy.basement.is_empty());
    assert!(taxonomy.standard.is_empty());
    assert!(taxonomy.rooftop.is_empty());
    assert!(taxonomy.standard_representative().is_none());
}

#[test]
fn rooftop_sorted_by_trailing_number() {
    let mut building = sample_building();
    building.floors.push(Floor {
        id: "flr-rt2".to_string(),
        floor_label: "옥탑2".to_string(),
        floor_number: 18,
        floor_class: FloorClass::Rooftop,
        level_type: LevelType::AboveGrade,
    });
    let taxonomy = FloorTaxonomyResolver::resolve(&building);
    assert_eq!(taxonomy.rooftop, vec!["옥탑1", "옥탑2"]);
}

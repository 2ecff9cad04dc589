// ==========================================
// 물량 해석기 통합 테스트
// ==========================================
// 계약: 해석 불가·데이터 부재 → 0, 절대 오류 없음
// ==========================================


use gongjeong_planner::{MaterialField, QuantityRef, QuantityResolver};
use test_helpers::sample_building;

#[test]
fn resolves_row_reference() {
    let building = sample_building();
    // G1 = 1행(버림) 콘크리트
    assert_eq!(
        QuantityResolver::resolve_by_reference(&building, "G1", "㎥"),
        450.0
    );
    // F2 = 2행(기초) 철근
    assert_eq!(
        QuantityResolver::resolve_by_reference(&building, "F2", "톤"),
        180.0
    );
}

#[test]
fn applies_ratio_suffix() {
    let building = sample_building();
    assert_eq!(
        QuantityResolver::resolve_by_reference(&building, "G2*0.5", "㎥"),
        700.0
    );
}

#[test]
fn missing_row_resolves_to_zero() {
    let building = sample_building();
    assert_eq!(
        QuantityResolver::resolve_by_reference(&building, "G99", "㎥"),
        0.0
    );
}

#[test]
fn malformed_reference_falls_back_to_trade_group() {
    let building = sample_building();
    // "셋팅층" 은 참조식 문법이 아니므로 공종 그룹 폴백: 단위가 필드를 고른다
    assert_eq!(
        QuantityResolver::resolve_by_reference(&building, "셋팅층", "톤"),
        70.0
    );
    assert_eq!(
        QuantityResolver::resolve_by_reference(&building, "셋팅층", "㎥"),
        650.0
    );
    // 그룹도 없으면 0
    assert_eq!(
        QuantityResolver::resolve_by_reference(&building, "없는 그룹", "톤"),
        0.0
    );
    // 단위를 필드로 바꿀 수 없으면 0
    assert_eq!(
        QuantityResolver::resolve_by_reference(&building, "셋팅층", "식"),
        0.0
    );
}

#[test]
fn resolves_from_floor_label() {
    let building = sample_building();
    assert_eq!(
        QuantityResolver::resolve_from_floor(&building, "B1", MaterialField::Formwork, None),
        500.0
    );
    // 코어 접두어가 붙은 라벨도 같은 층으로 조회된다
    assert_eq!(
        QuantityResolver::resolve_from_floor(&building, "코어1-B1", MaterialField::Formwork, None),
        500.0
    );
    // 부재 → 0
    assert_eq!(
        QuantityResolver::resolve_from_floor(&building, "B9", MaterialField::Formwork, None),
        0.0
    );
}

#[test]
fn range_floor_id_disambiguates_expanded_floors() {
    let building = sample_building();
    assert_eq!(
        QuantityResolver::resolve_from_floor(
            &building,
            "3F",
            MaterialField::Concrete,
            Some("flr-std-3")
        ),
        380.0
    );
    // 라벨은 맞지만 ID 가 다른 레코드는 건너뛴다
    assert_eq!(
        QuantityResolver::resolve_from_floor(
            &building,
            "3F",
            MaterialField::Concrete,
            Some("flr-std-99")
        ),
        0.0
    );
}

#[test]
fn reference_round_trip() {
    for (field, row, ratio) in [
        (MaterialField::Concrete, 1, 1.0),
        (MaterialField::Rebar, 12, 0.5),
        (MaterialField::GangForm, 7, 0.25),
    ] {
        let original = QuantityRef { field, row, ratio };
        assert_eq!(QuantityRef::parse(&original.format()), Some(original));
    }
}

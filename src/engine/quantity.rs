// ==========================================
// 건설 공정일수 산정 시스템 - 물량 해석기
// ==========================================
// 두 진입점:
//  - resolve_by_reference: 참조식 "<열문자><행번호>[*비율]" (예: "F12*0.5")
//  - resolve_from_floor:   (층 라벨, 자재 필드) 직접 조회
// 계약: 해석 불가/데이터 부재는 전부 0.0 - 절대 오류를 내지 않는다.
// 반환 물량은 항상 음수가 아니다.
// ==========================================

use crate::domain::building::Building;
use crate::domain::types::MaterialField;
use tracing::trace;

// ==========================================
// QuantityRef - 물량 참조식
// ==========================================
// 문법 (비트 단위 일치 요구): ^[A-Z]\d+(\*[\d.]+)?$
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityRef {
    pub field: MaterialField,
    pub row: usize, // 평탄화 물량표의 1-기반 행 번호
    pub ratio: f64, // 기본 1.0
}

impl QuantityRef {
    /// 참조식 해석. 문법 위반 또는 미정의 열 문자는 None (폴백 경로로)
    pub fn parse(reference: &str) -> Option<QuantityRef> {
        let s = reference.trim();
        let mut chars = s.chars();
        let letter = chars.next()?;
        if !letter.is_ascii_uppercase() {
            return None;
        }
        let rest = chars.as_str();

        let digit_count = rest.chars().take_while(|c| c.is_ascii_digit()).count();
        if digit_count == 0 {
            return None;
        }
        let row: usize = rest[..digit_count].parse().ok()?;
        let tail = &rest[digit_count..];

        let ratio = if tail.is_empty() {
            1.0
        } else {
            let body = tail.strip_prefix('*')?;
            if body.is_empty() || !body.chars().all(|c| c.is_ascii_digit() || c == '.') {
                return None;
            }
            body.parse::<f64>().ok()?
        };

        let field = MaterialField::from_column_letter(letter)?;
        Some(QuantityRef { field, row, ratio })
    }

    /// 참조식 문자열 생성 (parse 와 왕복 일치)
    pub fn format(&self) -> String {
        if (self.ratio - 1.0).abs() < f64::EPSILON {
            format!("{}{}", self.field.column_letter(), self.row)
        } else {
            format!("{}{}*{}", self.field.column_letter(), self.row, self.ratio)
        }
    }
}

// ==========================================
// QuantityResolver - 물량 해석기
// ==========================================
// 무상태 순수 조회
pub struct QuantityResolver;

impl QuantityResolver {
    /// 참조식으로 물량 해석
    ///
    /// 해석 실패 시 참조식 원문을 공종 그룹명으로 보고 폴백 조회한다.
    /// 이때 읽을 자재 필드는 항목 단위(unit)로 정한다. 어디에도 없으면 0.
    pub fn resolve_by_reference(building: &Building, reference: &str, unit: &str) -> f64 {
        if let Some(parsed) = QuantityRef::parse(reference) {
            let value = building
                .trade_row(parsed.row)
                .map(|r| r.quantities.get(parsed.field) * parsed.ratio)
                .unwrap_or(0.0);
            trace!(reference, value, "참조식 해석");
            return value.max(0.0);
        }

        // 폴백: 공종 그룹명 조회
        let value = match MaterialField::from_unit(unit) {
            Some(field) => building
                .trade_row_by_group(reference)
                .map(|r| r.quantities.get(field))
                .unwrap_or(0.0),
            None => 0.0,
        };
        trace!(reference, unit, value, "참조식 폴백 해석");
        value.max(0.0)
    }

    /// (층 라벨, 자재 필드) 직접 조회 - 행 번호 산출을 우회한다
    ///
    /// 지하층/옥탑층/범위 전개 층처럼 행 번호가 불안정한 경우에 쓴다.
    /// `range_floor_id` 는 범위 전개로 라벨이 겹칠 때 레코드를 구분한다.
    pub fn resolve_from_floor(
        building: &Building,
        floor_label: &str,
        field: MaterialField,
        range_floor_id: Option<&str>,
    ) -> f64 {
        let value = building
            .trade_row_by_floor(floor_label, range_floor_id)
            .map(|r| r.quantities.get(field))
            .unwrap_or(0.0);
        trace!(floor_label, field = %field, value, "층 물량 조회");
        value.max(0.0)
    }
}

// ==========================================
// 건설 공정일수 산정 시스템 - 층 분류 해석기
// ==========================================
// 동의 원시 층 목록을 의미 그룹(지하/기초/기준/셋팅/옥탑 등)으로 분류하고
// 정규화·중복 제거·정렬된 층 라벨 수열을 만든다.
// 규약:
//  - 코어 접두어(코어N-)는 분류 전에 제거
//  - 정규화 라벨이 같으면 같은 층: 먼저 만난 층이 유효, 중복은 조용히 탈락
//  - 범위 표기("2~14F 기준층")는 정수별 합성 층으로 전개하되
//    최상층으로 별도 분류된 층 번호는 제외
//  - 옥탑층은 옥탑N 으로 통일 (PHN 동의어 허용)
// ==========================================

use crate::domain::building::Building;
use crate::domain::floor::{normalize_floor_label, normalize_rooftop_label};
use crate::domain::types::FloorClass;
use std::collections::HashSet;
use tracing::debug;

// ==========================================
// StandardFloor - 전개된 기준층
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardFloor {
    pub label: String,                 // "5F"
    pub floor_number: i32,
    pub range_floor_id: Option<String>, // 범위 전개로 생긴 합성 층의 구분자
    pub is_top: bool,                  // 최상층 여부
}

// ==========================================
// FloorTaxonomy - 분류 결과
// ==========================================
// 지하층은 집계용 낮은 색인→높은 색인 순서로 담는다
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FloorTaxonomy {
    pub foundation: Vec<String>,
    pub basement: Vec<String>,
    pub setting: Vec<String>,
    pub normal: Vec<String>,
    pub standard: Vec<StandardFloor>,
    pub ph: Vec<String>,
    pub rooftop: Vec<String>,
}

impl FloorTaxonomy {
    /// 표시용 지하층 순서 (높은 색인 → 낮은 색인, 깊은 층 먼저)
    pub fn basement_display(&self) -> Vec<String> {
        self.basement.iter().rev().cloned().collect()
    }

    /// 기준층 재지정 공유 키가 되는 대표 층 라벨 (첫 전개 층)
    pub fn standard_representative(&self) -> Option<&str> {
        self.standard.first().map(|f| f.label.as_str())
    }

    /// 라벨로 기준층 레코드 조회
    pub fn standard_floor(&self, label: &str) -> Option<&StandardFloor> {
        self.standard.iter().find(|f| f.label == label)
    }
}

// ==========================================
// FloorTaxonomyResolver - 해석기
// ==========================================
// 무상태 - 모든 입력은 인자로 받는다
pub struct FloorTaxonomyResolver;

impl FloorTaxonomyResolver {
    /// 동의 층 목록을 분류한다
    pub fn resolve(building: &Building) -> FloorTaxonomy {
        let mut taxonomy = FloorTaxonomy::default();
        let mut seen: HashSet<String> = HashSet::new();

        // 1차 통과: 최상층 번호 수집 (범위 전개 제외 대상)
        let top_numbers: HashSet<i32> = building
            .floors
            .iter()
            .filter(|f| f.floor_class == FloorClass::Top)
            .map(|f| f.floor_number)
            .collect();

        let mut basement: Vec<(i32, String)> = Vec::new();
        let mut standard: Vec<StandardFloor> = Vec::new();
        let mut rooftop: Vec<(i32, String)> = Vec::new();

        for floor in &building.floors {
            match floor.floor_class {
                FloorClass::Foundation => {
                    let label = normalize_floor_label(&floor.floor_label);
                    if seen.insert(label.clone()) {
                        taxonomy.foundation.push(label);
                    }
                }
                FloorClass::Basement => {
                    let label = normalize_floor_label(&floor.floor_label);
                    if seen.insert(label.clone()) {
                        basement.push((floor.floor_number, label));
                    }
                }
                FloorClass::Setting => {
                    let label = normalize_floor_label(&floor.floor_label);
                    if seen.insert(label.clone()) {
                        taxonomy.setting.push(label);
                    }
                }
                FloorClass::Normal => {
                    let label = normalize_floor_label(&floor.floor_label);
                    if seen.insert(label.clone()) {
                        taxonomy.normal.push(label);
                    }
                }
                FloorClass::Ph => {
                    let label = normalize_floor_label(&floor.floor_label);
                    if seen.insert(label.clone()) {
                        taxonomy.ph.push(label);
                    }
                }
                FloorClass::Rooftop => {
                    let label = normalize_rooftop_label(&floor.floor_label);
                    if seen.insert(label.clone()) {
                        let index = trailing_number(&label).unwrap_or(floor.floor_number);
                        rooftop.push((index, label));
                    }
                }
                FloorClass::Standard => {
                    let label = normalize_floor_label(&floor.floor_label);
                    if let Some((from, to)) = parse_range_label(&label) {
                        // 범위 전개: 정수별 합성 층, 최상층 번호는 제외
                        for n in from..=to {
                            if top_numbers.contains(&n) {
                                continue;
                            }
                            let expanded = format!("{}F", n);
                            if seen.insert(expanded.clone()) {
                                standard.push(StandardFloor {
                                    label: expanded,
                                    floor_number: n,
                                    range_floor_id: Some(format!("{}-{}", floor.id, n)),
                                    is_top: false,
                                });
                            }
                        }
                    } else if seen.insert(label.clone()) {
                        standard.push(StandardFloor {
                            label,
                            floor_number: floor.floor_number,
                            range_floor_id: None,
                            is_top: false,
                        });
                    }
                }
                FloorClass::Top => {
                    let label = normalize_floor_label(&floor.floor_label);
                    if seen.insert(label.clone()) {
                        standard.push(StandardFloor {
                            label,
                            floor_number: floor.floor_number,
                            range_floor_id: None,
                            is_top: true,
                        });
                    }
                }
            }
        }

        basement.sort_by_key(|(n, _)| *n);
        standard.sort_by_key(|f| f.floor_number);
        rooftop.sort_by_key(|(n, _)| *n);

        taxonomy.basement = basement.into_iter().map(|(_, l)| l).collect();
        taxonomy.standard = standard;
        taxonomy.rooftop = rooftop.into_iter().map(|(_, l)| l).collect();

        debug!(
            building_id = %building.id,
            basement = taxonomy.basement.len(),
            standard = taxonomy.standard.len(),
            rooftop = taxonomy.rooftop.len(),
            "층 분류 완료"
        );

        taxonomy
    }
}

/// 범위 표기 해석: "2~14F 기준층" → (2, 14)
fn parse_range_label(label: &str) -> Option<(i32, i32)> {
    let head = label.split_whitespace().next()?;
    let (from_part, to_part) = head.split_once('~')?;
    let from: i32 = from_part.trim().parse().ok()?;
    let to_digits: String = to_part.chars().take_while(|c| c.is_ascii_digit()).collect();
    let to: i32 = to_digits.parse().ok()?;
    if from > to {
        return None;
    }
    Some((from, to))
}

/// 라벨 끝의 숫자 (옥탑N 정렬용)
fn trailing_number(label: &str) -> Option<i32> {
    let digits: String = label
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_range_labels() {
        assert_eq!(parse_range_label("2~14F 기준층"), Some((2, 14)));
        assert_eq!(parse_range_label("2~14F"), Some((2, 14)));
        assert_eq!(parse_range_label("5F"), None);
        assert_eq!(parse_range_label("14~2F"), None);
    }

    #[test]
    fn trailing_number_of_rooftop_label() {
        assert_eq!(trailing_number("옥탑1"), Some(1));
        assert_eq!(trailing_number("옥탑12"), Some(12));
        assert_eq!(trailing_number("옥탑"), None);
    }
}

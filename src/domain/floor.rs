// ==========================================
// 건설 공정일수 산정 시스템 - 층 영역 모델
// ==========================================
// 층 라벨 정규화 규칙: 선행 코어 태그(코어N-)를 제거한 라벨이 동일하면
// 집계상 같은 층이다 (먼저 만난 층이 유효, 중복은 조용히 탈락)
// ==========================================

use crate::domain::types::{FloorClass, LevelType};
use serde::{Deserialize, Serialize};

// ==========================================
// Floor - 층
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Floor {
    pub id: String,           // 층 ID
    pub floor_label: String,  // 층 라벨 (코어 접두어 포함 가능)
    pub floor_number: i32,    // 층 번호 (level_type 별 유일)
    pub floor_class: FloorClass,
    pub level_type: LevelType,
}

impl Floor {
    /// 코어 접두어를 제거한 정규화 라벨
    pub fn normalized_label(&self) -> String {
        normalize_floor_label(&self.floor_label)
    }
}

// ==========================================
// FloorRef - 구조적 층 참조
// ==========================================
// 문자열 키/정규식 행 매핑 대신 (분류, 색인)으로 층을 가리킨다
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorRef {
    pub class: FloorClass,
    pub index: i32, // 지하층은 B{index}, 지상층은 {index}F
}

impl FloorRef {
    pub fn new(class: FloorClass, index: i32) -> Self {
        Self { class, index }
    }

    /// 표시용 라벨
    pub fn label(&self) -> String {
        match self.class {
            FloorClass::Basement => format!("B{}", self.index),
            FloorClass::Rooftop => format!("옥탑{}", self.index),
            FloorClass::Standard | FloorClass::Top => format!("{}F", self.index),
            other => other.as_str().to_string(),
        }
    }
}

// ==========================================
// 층 라벨 정규화
// ==========================================

/// 선행 구조 코어 태그(`코어N-`)를 제거한다
///
/// 예: "코어2-B1" → "B1", "코어1-3F" → "3F". 태그가 없으면 그대로 반환.
pub fn normalize_floor_label(label: &str) -> String {
    let trimmed = label.trim();
    if let Some(rest) = trimmed.strip_prefix("코어") {
        // 숫자는 ASCII 이므로 문자 수 = 바이트 오프셋
        let digits = rest.chars().take_while(|c| c.is_ascii_digit()).count();
        if digits > 0 {
            if let Some(tail) = rest[digits..].strip_prefix('-') {
                return tail.trim().to_string();
            }
        }
    }
    trimmed.to_string()
}

/// 옥탑층 라벨 정규화: `PHN` 표기를 동의어로 받아 `옥탑N` 으로 맞춘다
pub fn normalize_rooftop_label(label: &str) -> String {
    let normalized = normalize_floor_label(label);
    if let Some(rest) = normalized.strip_prefix("PH") {
        if !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()) {
            return format!("옥탑{}", rest);
        }
    }
    normalized
}

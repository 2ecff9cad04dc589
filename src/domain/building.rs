// ==========================================
// 건설 공정일수 산정 시스템 - 동(棟) 영역 모델
// ==========================================
// Building 은 엔진의 읽기 전용 입력이다. 엔진은 절대 변경하지 않는다.
// floor_trades 는 평탄화된 물량표: 1-기반 행 번호가 참조식의 행이다.
// ==========================================

use crate::domain::floor::{normalize_floor_label, Floor};
use crate::domain::types::MaterialField;
use serde::{Deserialize, Serialize};

// ==========================================
// MaterialQuantities - 자재별 물량
// ==========================================
// 모든 물량은 음수가 될 수 없다
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialQuantities {
    pub gang_form: f64,     // 갱폼 (㎡)
    pub aluminum_form: f64, // 알폼 (㎡)
    pub formwork: f64,      // 형틀 (㎡)
    pub strip_clean: f64,   // 해체·정리 (㎡)
    pub rebar: f64,         // 철근 (톤)
    pub concrete: f64,      // 콘크리트 (㎥)
}

impl MaterialQuantities {
    pub fn get(&self, field: MaterialField) -> f64 {
        match field {
            MaterialField::GangForm => self.gang_form,
            MaterialField::AluminumForm => self.aluminum_form,
            MaterialField::Formwork => self.formwork,
            MaterialField::StripClean => self.strip_clean,
            MaterialField::Rebar => self.rebar,
            MaterialField::Concrete => self.concrete,
        }
    }

    pub fn set(&mut self, field: MaterialField, value: f64) {
        let v = value.max(0.0);
        match field {
            MaterialField::GangForm => self.gang_form = v,
            MaterialField::AluminumForm => self.aluminum_form = v,
            MaterialField::Formwork => self.formwork = v,
            MaterialField::StripClean => self.strip_clean = v,
            MaterialField::Rebar => self.rebar = v,
            MaterialField::Concrete => self.concrete = v,
        }
    }

    /// 차감 (각 필드 0 미만 절단) - 지하층 특수 행 공제에 사용
    pub fn subtract(&self, other: &MaterialQuantities) -> MaterialQuantities {
        MaterialQuantities {
            gang_form: (self.gang_form - other.gang_form).max(0.0),
            aluminum_form: (self.aluminum_form - other.aluminum_form).max(0.0),
            formwork: (self.formwork - other.formwork).max(0.0),
            strip_clean: (self.strip_clean - other.strip_clean).max(0.0),
            rebar: (self.rebar - other.rebar).max(0.0),
            concrete: (self.concrete - other.concrete).max(0.0),
        }
    }
}

// ==========================================
// TradeRecord - 물량표 한 행
// ==========================================
// floor_label 은 저장 시점에 정규화되어 있다고 가정하되,
// 조회 측에서 다시 정규화하여 방어한다
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRecord {
    pub floor_id: String,           // 층 ID (범위 전개 층 구분용)
    pub floor_label: String,        // 층 라벨
    pub trade_group: String,        // 공종 그룹 (버림/기초/지하층/...)
    pub quantities: MaterialQuantities,
}

// ==========================================
// BuildingMeta - 동 메타데이터
// ==========================================
// 장비 산정 모드의 상한(펌프카 대수 등)이 여기서 나온다
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingMeta {
    pub core_count: u32,                    // 구조 코어 수
    pub pump_car_base_m3: Option<f64>,      // 펌프카 1대 기준 타설량 (㎥)
    pub max_pump_cars: Option<u32>,         // 펌프카 보유 대수 상한
    pub unit_composition: Option<String>,   // 세대 구성
}

impl Default for BuildingMeta {
    fn default() -> Self {
        Self {
            core_count: 1,
            pump_car_base_m3: None,
            max_pump_cars: None,
            unit_composition: None,
        }
    }
}

// ==========================================
// Building - 동
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    pub id: String,
    pub name: String,
    pub floors: Vec<Floor>,
    pub floor_trades: Vec<TradeRecord>,
    pub meta: BuildingMeta,
}

impl Building {
    /// 1-기반 행 번호로 물량표 행 조회
    pub fn trade_row(&self, row: usize) -> Option<&TradeRecord> {
        if row == 0 {
            return None;
        }
        self.floor_trades.get(row - 1)
    }

    /// 정규화 라벨로 물량표 행 조회 (첫 일치 행)
    ///
    /// `floor_id` 가 주어지면 범위 전개로 라벨이 겹치는 행을 구분한다.
    pub fn trade_row_by_floor(
        &self,
        floor_label: &str,
        floor_id: Option<&str>,
    ) -> Option<&TradeRecord> {
        let wanted = normalize_floor_label(floor_label);
        self.floor_trades.iter().find(|r| {
            if let Some(id) = floor_id {
                if r.floor_id != id {
                    return false;
                }
            }
            normalize_floor_label(&r.floor_label) == wanted
        })
    }

    /// 공종 그룹명으로 물량표 행 조회 (참조식 해석 실패 시 폴백)
    pub fn trade_row_by_group(&self, trade_group: &str) -> Option<&TradeRecord> {
        let wanted = trade_group.trim();
        self.floor_trades
            .iter()
            .find(|r| r.trade_group.trim() == wanted)
    }
}

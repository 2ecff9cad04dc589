// ==========================================
// 건설 공정일수 산정 시스템 - 영역 타입 정의
// ==========================================
// 층 분류 / 공정 분류 / 자재 필드의 폐쇄적 열거형
// 직렬화 형식: 한글 라벨 (기존 저장 계획과 호환)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 층 분류 (Floor Class)
// ==========================================
// 코어 접두어(코어N-)는 분류 전에 반드시 제거한다
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FloorClass {
    #[serde(rename = "기초")]
    Foundation, // 기초/버림
    #[serde(rename = "지하")]
    Basement, // 지하층
    #[serde(rename = "셋팅층")]
    Setting, // 셋팅층
    #[serde(rename = "기준층")]
    Standard, // 기준층 (범위 표기 허용: "2~14F 기준층")
    #[serde(rename = "최상층")]
    Top, // 최상층 (기준층 집계에 포함)
    #[serde(rename = "PH층")]
    Ph, // PH층
    #[serde(rename = "옥탑층")]
    Rooftop, // 옥탑층 (옥탑N / PHN 표기)
    #[serde(rename = "일반층")]
    Normal, // 일반층
}

impl FloorClass {
    /// 저장용 한글 라벨
    pub fn as_str(&self) -> &'static str {
        match self {
            FloorClass::Foundation => "기초",
            FloorClass::Basement => "지하",
            FloorClass::Setting => "셋팅층",
            FloorClass::Standard => "기준층",
            FloorClass::Top => "최상층",
            FloorClass::Ph => "PH층",
            FloorClass::Rooftop => "옥탑층",
            FloorClass::Normal => "일반층",
        }
    }

    /// 한글 라벨에서 분류 해석 (미인식 → 일반층)
    pub fn from_label(s: &str) -> Self {
        match s.trim() {
            "기초" => FloorClass::Foundation,
            "지하" | "지하층" => FloorClass::Basement,
            "셋팅층" => FloorClass::Setting,
            "기준층" => FloorClass::Standard,
            "최상층" => FloorClass::Top,
            "PH층" => FloorClass::Ph,
            "옥탑층" | "옥탑" => FloorClass::Rooftop,
            _ => FloorClass::Normal,
        }
    }
}

impl fmt::Display for FloorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 지상/지하 구분 (Level Type)
// ==========================================
// 불변식: 한 동 내에서 floor_number 는 level_type 별로 유일
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LevelType {
    #[serde(rename = "지상")]
    AboveGrade,
    #[serde(rename = "지하")]
    BelowGrade,
}

impl fmt::Display for LevelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelType::AboveGrade => write!(f, "지상"),
            LevelType::BelowGrade => write!(f, "지하"),
        }
    }
}

// ==========================================
// 공정 분류 (Process Category)
// ==========================================
// 고정 열거 - 집계 순서는 선언 순서를 따른다
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProcessCategory {
    #[serde(rename = "버림")]
    StripConcrete, // 버림 콘크리트
    #[serde(rename = "기초")]
    Foundation, // 기초
    #[serde(rename = "지하층")]
    Basement, // 지하층 (층별 반복)
    #[serde(rename = "셋팅층")]
    Setting, // 셋팅층
    #[serde(rename = "기준층")]
    Standard, // 기준층 (층별 반복, 사이클 공법)
    #[serde(rename = "PH층")]
    Ph, // PH층
    #[serde(rename = "옥탑층")]
    Rooftop, // 옥탑층 (층별 반복)
}

impl ProcessCategory {
    /// 전체 공정 분류 (집계 순서)
    pub const ALL: [ProcessCategory; 7] = [
        ProcessCategory::StripConcrete,
        ProcessCategory::Foundation,
        ProcessCategory::Basement,
        ProcessCategory::Setting,
        ProcessCategory::Standard,
        ProcessCategory::Ph,
        ProcessCategory::Rooftop,
    ];

    /// 저장용 한글 라벨
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessCategory::StripConcrete => "버림",
            ProcessCategory::Foundation => "기초",
            ProcessCategory::Basement => "지하층",
            ProcessCategory::Setting => "셋팅층",
            ProcessCategory::Standard => "기준층",
            ProcessCategory::Ph => "PH층",
            ProcessCategory::Rooftop => "옥탑층",
        }
    }

    /// 한글 라벨에서 해석
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim() {
            "버림" => Some(ProcessCategory::StripConcrete),
            "기초" => Some(ProcessCategory::Foundation),
            "지하층" => Some(ProcessCategory::Basement),
            "셋팅층" => Some(ProcessCategory::Setting),
            "기준층" => Some(ProcessCategory::Standard),
            "PH층" => Some(ProcessCategory::Ph),
            "옥탑층" => Some(ProcessCategory::Rooftop),
            _ => None,
        }
    }

    /// 분류별 허용 공법
    ///
    /// 기준층만 N일 사이클 4종을 지원하고, 나머지는 기본형 하나뿐이다.
    pub fn allowed_process_types(&self) -> &'static [ProcessType] {
        match self {
            ProcessCategory::Standard => &[
                ProcessType::Cycle4,
                ProcessType::Cycle5,
                ProcessType::Cycle6,
                ProcessType::Cycle7,
            ],
            _ => &[ProcessType::Basic],
        }
    }

    /// 분류별 기본 공법
    pub fn default_process_type(&self) -> ProcessType {
        match self {
            ProcessCategory::Standard => ProcessType::Cycle6,
            _ => ProcessType::Basic,
        }
    }

    /// 층별 반복 집계 여부 (지하층/옥탑층은 층 단위, 기준층은 전개 층 단위)
    pub fn iterates_per_floor(&self) -> bool {
        matches!(
            self,
            ProcessCategory::Basement | ProcessCategory::Standard | ProcessCategory::Rooftop
        )
    }
}

impl fmt::Display for ProcessCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 공법 (Process Type)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessType {
    #[serde(rename = "기본")]
    Basic, // 기본형 (사이클 외 전 분류)
    #[serde(rename = "4일 사이클")]
    Cycle4,
    #[serde(rename = "5일 사이클")]
    Cycle5,
    #[serde(rename = "6일 사이클")]
    Cycle6,
    #[serde(rename = "7일 사이클")]
    Cycle7,
}

impl ProcessType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessType::Basic => "기본",
            ProcessType::Cycle4 => "4일 사이클",
            ProcessType::Cycle5 => "5일 사이클",
            ProcessType::Cycle6 => "6일 사이클",
            ProcessType::Cycle7 => "7일 사이클",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim() {
            "기본" => Some(ProcessType::Basic),
            "4일 사이클" => Some(ProcessType::Cycle4),
            "5일 사이클" => Some(ProcessType::Cycle5),
            "6일 사이클" => Some(ProcessType::Cycle6),
            "7일 사이클" => Some(ProcessType::Cycle7),
            _ => None,
        }
    }

    /// 사이클 일수 (기본형은 None)
    pub fn cycle_days(&self) -> Option<u32> {
        match self {
            ProcessType::Basic => None,
            ProcessType::Cycle4 => Some(4),
            ProcessType::Cycle5 => Some(5),
            ProcessType::Cycle6 => Some(6),
            ProcessType::Cycle7 => Some(7),
        }
    }
}

impl fmt::Display for ProcessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 자재 필드 (Material Field)
// ==========================================
// 물량 참조식의 열 문자와 1:1 대응: B갱폼 C알폼 D형틀 E해체정리 F철근 G콘크리트
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MaterialField {
    GangForm,     // 갱폼 (㎡)
    AluminumForm, // 알폼 (㎡)
    Formwork,     // 형틀 (㎡)
    StripClean,   // 해체·정리 (㎡)
    Rebar,        // 철근 (톤)
    Concrete,     // 콘크리트 (㎥)
}

impl MaterialField {
    /// 참조식 열 문자
    pub fn column_letter(&self) -> char {
        match self {
            MaterialField::GangForm => 'B',
            MaterialField::AluminumForm => 'C',
            MaterialField::Formwork => 'D',
            MaterialField::StripClean => 'E',
            MaterialField::Rebar => 'F',
            MaterialField::Concrete => 'G',
        }
    }

    /// 열 문자 → 자재 필드
    pub fn from_column_letter(c: char) -> Option<Self> {
        match c {
            'B' => Some(MaterialField::GangForm),
            'C' => Some(MaterialField::AluminumForm),
            'D' => Some(MaterialField::Formwork),
            'E' => Some(MaterialField::StripClean),
            'F' => Some(MaterialField::Rebar),
            'G' => Some(MaterialField::Concrete),
            _ => None,
        }
    }

    /// 단위 → 자재 필드 (참조식 해석 실패 시 공종 폴백에서 사용)
    pub fn from_unit(unit: &str) -> Option<Self> {
        match unit.trim() {
            "㎡" | "m2" | "M2" => Some(MaterialField::Formwork),
            "톤" | "ton" | "TON" | "t" => Some(MaterialField::Rebar),
            "㎥" | "m3" | "M3" => Some(MaterialField::Concrete),
            _ => None,
        }
    }

    /// 작업 항목명 + 단위 → 자재 필드
    ///
    /// ㎡ 단위는 항목명 키워드로 갱폼/알폼/해체정리/형틀을 구분한다.
    /// 호출부마다 흩어져 있던 관례를 이 한 곳으로 모은다.
    pub fn for_item(work_item: &str, unit: &str) -> Option<Self> {
        match Self::from_unit(unit) {
            Some(MaterialField::Formwork) => {
                if work_item.contains("갱폼") {
                    Some(MaterialField::GangForm)
                } else if work_item.contains("알폼") || work_item.contains("알루미늄") {
                    Some(MaterialField::AluminumForm)
                } else if work_item.contains("해체") || work_item.contains("정리") {
                    Some(MaterialField::StripClean)
                } else {
                    Some(MaterialField::Formwork)
                }
            }
            other => other,
        }
    }
}

impl fmt::Display for MaterialField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaterialField::GangForm => write!(f, "갱폼"),
            MaterialField::AluminumForm => write!(f, "알폼"),
            MaterialField::Formwork => write!(f, "형틀"),
            MaterialField::StripClean => write!(f, "해체·정리"),
            MaterialField::Rebar => write!(f, "철근"),
            MaterialField::Concrete => write!(f, "콘크리트"),
        }
    }
}

// ==========================================
// 특수 행 (Special Row)
// ==========================================
// 지하층 전용 의사(pseudo) 행: 물량은 사용자가 직접 입력하고,
// 해당 층 본체 물량에서 차감하여 이중 계상을 막는다
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialRow {
    #[serde(rename = "주차장 구간")]
    Parking,
    #[serde(rename = "가시설 3단 구간")]
    TempFacility3,
}

impl SpecialRow {
    pub const ALL: [SpecialRow; 2] = [SpecialRow::Parking, SpecialRow::TempFacility3];

    pub fn as_str(&self) -> &'static str {
        match self {
            SpecialRow::Parking => "주차장 구간",
            SpecialRow::TempFacility3 => "가시설 3단 구간",
        }
    }

    /// 특수 행 물량 맵 키: "<층라벨>-<행라벨>"
    pub fn quantity_key(&self, floor_label: &str) -> String {
        format!("{}-{}", floor_label, self.as_str())
    }

    /// 층일수 집계에서 쓰는 의사 층 라벨: "<층라벨> <행라벨>"
    pub fn scope_label(&self, floor_label: &str) -> String {
        format!("{} {}", floor_label, self.as_str())
    }
}

impl fmt::Display for SpecialRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

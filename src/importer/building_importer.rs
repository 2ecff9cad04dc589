// ==========================================
// 건설 공정일수 산정 시스템 - 동 물량표 가져오기
// ==========================================
// CSV 한 행 = (층, 공종 그룹) 물량 레코드.
// 층 목록은 레코드에서 유도한다 (정규화 라벨 기준 중복 제거, 먼저 만난 행 유효).
// 열: floor_label, floor_class, level_type, floor_number, trade_group,
//     gang_form, aluminum_form, formwork, strip_clean, rebar, concrete
// ==========================================

use crate::domain::building::{Building, BuildingMeta, MaterialQuantities, TradeRecord};
use crate::domain::floor::{normalize_floor_label, Floor};
use crate::domain::types::{FloorClass, LevelType};
use crate::importer::error::{ImportError, ImportResult};
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::info;
use uuid::Uuid;

// ==========================================
// CSV 행 구조
// ==========================================
#[derive(Debug, Deserialize)]
struct TradeCsvRow {
    floor_label: String,
    floor_class: String,
    #[serde(default)]
    level_type: String,
    floor_number: i32,
    trade_group: String,
    #[serde(default)]
    gang_form: f64,
    #[serde(default)]
    aluminum_form: f64,
    #[serde(default)]
    formwork: f64,
    #[serde(default)]
    strip_clean: f64,
    #[serde(default)]
    rebar: f64,
    #[serde(default)]
    concrete: f64,
}

// ==========================================
// BuildingImporter - 가져오기
// ==========================================
pub struct BuildingImporter;

impl BuildingImporter {
    /// CSV 파일에서 동 구성
    pub fn import_csv(
        path: &Path,
        building_id: &str,
        building_name: &str,
        meta: BuildingMeta,
    ) -> ImportResult<Building> {
        let file = std::fs::File::open(path)?;
        Self::import_reader(file, building_id, building_name, meta)
    }

    /// 임의 리더에서 동 구성
    pub fn import_reader<R: Read>(
        reader: R,
        building_id: &str,
        building_name: &str,
        meta: BuildingMeta,
    ) -> ImportResult<Building> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut floors: Vec<Floor> = Vec::new();
        let mut floor_ids: HashMap<String, String> = HashMap::new();
        let mut trades: Vec<TradeRecord> = Vec::new();

        for (index, result) in csv_reader.deserialize::<TradeCsvRow>().enumerate() {
            let line = index + 2; // 1행은 헤더
            let row = result?;

            if row.floor_label.is_empty() {
                return Err(ImportError::InvalidRow {
                    line,
                    message: "floor_label 이 비어 있음".to_string(),
                });
            }
            for (name, value) in [
                ("gang_form", row.gang_form),
                ("aluminum_form", row.aluminum_form),
                ("formwork", row.formwork),
                ("strip_clean", row.strip_clean),
                ("rebar", row.rebar),
                ("concrete", row.concrete),
            ] {
                if value < 0.0 {
                    return Err(ImportError::InvalidRow {
                        line,
                        message: format!("{} 물량이 음수임: {}", name, value),
                    });
                }
            }

            let floor_class = FloorClass::from_label(&row.floor_class);
            let level_type = match row.level_type.trim() {
                "지상" => LevelType::AboveGrade,
                "지하" => LevelType::BelowGrade,
                // 미기재 시 분류에서 유도
                _ => match floor_class {
                    FloorClass::Basement | FloorClass::Foundation => LevelType::BelowGrade,
                    _ => LevelType::AboveGrade,
                },
            };

            let normalized = normalize_floor_label(&row.floor_label);
            let floor_id = floor_ids
                .entry(normalized.clone())
                .or_insert_with(|| {
                    let id = Uuid::new_v4().to_string();
                    floors.push(Floor {
                        id: id.clone(),
                        floor_label: row.floor_label.clone(),
                        floor_number: row.floor_number,
                        floor_class,
                        level_type,
                    });
                    id
                })
                .clone();

            trades.push(TradeRecord {
                floor_id,
                floor_label: normalized,
                trade_group: row.trade_group,
                quantities: MaterialQuantities {
                    gang_form: row.gang_form,
                    aluminum_form: row.aluminum_form,
                    formwork: row.formwork,
                    strip_clean: row.strip_clean,
                    rebar: row.rebar,
                    concrete: row.concrete,
                },
            });
        }

        info!(
            building_id,
            floors = floors.len(),
            trades = trades.len(),
            "동 물량표 가져오기 완료"
        );

        Ok(Building {
            id: building_id.to_string(),
            name: building_name.to_string(),
            floors,
            floor_trades: trades,
            meta,
        })
    }
}

// ==========================================
// 건설 공정일수 산정 시스템 - 엔진 설정
// ==========================================
// 동 메타데이터가 비워둔 장비 한도의 기본값.
// JSON 파일로 덮어쓸 수 있다 (부재 시 내장 기본값 사용).
// ==========================================

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

// ==========================================
// EngineConfig - 엔진 설정
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// 펌프카 1대 기준 타설량 (㎥) - 항목 기준량이 0 이하일 때의 대체값
    pub default_pump_car_base_m3: f64,
    /// 펌프카 보유 대수 상한 기본값 (None 이면 무제한)
    pub default_max_pump_cars: Option<u32>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_pump_car_base_m3: 300.0,
            default_max_pump_cars: None,
        }
    }
}

impl EngineConfig {
    /// JSON 설정 파일 적재
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("설정 파일을 읽을 수 없음: {}", path.display()))?;
        let config: EngineConfig = serde_json::from_str(&raw)
            .with_context(|| format!("설정 파일 해석 실패: {}", path.display()))?;
        info!(path = %path.display(), "엔진 설정 적재");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let c = EngineConfig::default();
        assert_eq!(c.default_pump_car_base_m3, 300.0);
        assert!(c.default_max_pump_cars.is_none());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let c: EngineConfig = serde_json::from_str(r#"{"defaultMaxPumpCars": 2}"#).unwrap();
        assert_eq!(c.default_max_pump_cars, Some(2));
        assert_eq!(c.default_pump_car_base_m3, 300.0);
    }
}

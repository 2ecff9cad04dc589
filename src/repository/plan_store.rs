// ==========================================
// 건설 공정일수 산정 시스템 - 계획 저장소
// ==========================================
// ProcessPlan 의 영속화 경계. 엔진은 이 인터페이스 뒤의 구현을 모른다.
// 계획은 항상 통째로 읽고 통째로 쓴다 (copy-on-write 규율과 일치).
// ==========================================

use crate::domain::plan::ProcessPlan;
use crate::repository::error::{StoreError, StoreResult};
use rusqlite::{params, Connection};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::debug;

// ==========================================
// PlanStore - 저장소 인터페이스
// ==========================================
pub trait PlanStore {
    /// 동 ID 로 계획 조회 (없으면 None - 호출부가 기본 계획을 만든다)
    fn get(&self, building_id: &str) -> StoreResult<Option<ProcessPlan>>;

    /// 계획 저장 (동 ID 당 1건, 통째 교체)
    fn set(&self, building_id: &str, plan: &ProcessPlan) -> StoreResult<()>;

    /// 계획 삭제 (동 폐기 시)
    fn delete(&self, building_id: &str) -> StoreResult<()>;

    /// 저장된 동 ID 목록
    fn list_building_ids(&self) -> StoreResult<Vec<String>>;
}

// ==========================================
// MemoryPlanStore - 메모리 저장소
// ==========================================
// 테스트·단일 세션용
#[derive(Default)]
pub struct MemoryPlanStore {
    plans: Mutex<HashMap<String, ProcessPlan>>,
}

impl MemoryPlanStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> StoreResult<std::sync::MutexGuard<'_, HashMap<String, ProcessPlan>>> {
        self.plans
            .lock()
            .map_err(|e| StoreError::LockError(e.to_string()))
    }
}

impl PlanStore for MemoryPlanStore {
    fn get(&self, building_id: &str) -> StoreResult<Option<ProcessPlan>> {
        Ok(self.lock()?.get(building_id).cloned())
    }

    fn set(&self, building_id: &str, plan: &ProcessPlan) -> StoreResult<()> {
        self.lock()?.insert(building_id.to_string(), plan.clone());
        Ok(())
    }

    fn delete(&self, building_id: &str) -> StoreResult<()> {
        self.lock()?.remove(building_id);
        Ok(())
    }

    fn list_building_ids(&self) -> StoreResult<Vec<String>> {
        let mut ids: Vec<String> = self.lock()?.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }
}

// ==========================================
// SqlitePlanStore - SQLite 저장소
// ==========================================
// 동 ID 를 키로 계획 JSON 을 한 행에 담는다
pub struct SqlitePlanStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqlitePlanStore {
    /// 연결을 받아 저장소 구성 (스키마 없으면 생성)
    pub fn new(conn: Arc<Mutex<Connection>>) -> StoreResult<Self> {
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// 파일 경로로 열기
    pub fn open(db_path: &str) -> StoreResult<Self> {
        let conn = Connection::open(db_path)?;
        // 연결별 PRAGMA 통일
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Self::new(Arc::new(Mutex::new(conn)))
    }

    fn get_conn(&self) -> StoreResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| StoreError::LockError(e.to_string()))
    }

    fn init_schema(&self) -> StoreResult<()> {
        let conn = self.get_conn()?;
        conn.execute_batch(
            r#"CREATE TABLE IF NOT EXISTS process_plan (
                building_id TEXT PRIMARY KEY,
                plan_json   TEXT NOT NULL,
                updated_at  TEXT NOT NULL
            );"#,
        )?;
        Ok(())
    }
}

impl PlanStore for SqlitePlanStore {
    fn get(&self, building_id: &str) -> StoreResult<Option<ProcessPlan>> {
        let conn = self.get_conn()?;
        let json: Option<String> = match conn.query_row(
            "SELECT plan_json FROM process_plan WHERE building_id = ?",
            params![building_id],
            |row| row.get(0),
        ) {
            Ok(j) => Some(j),
            Err(rusqlite::Error::QueryReturnedNoRows) => None,
            Err(e) => return Err(e.into()),
        };
        match json {
            Some(j) => Ok(Some(serde_json::from_str(&j)?)),
            None => Ok(None),
        }
    }

    fn set(&self, building_id: &str, plan: &ProcessPlan) -> StoreResult<()> {
        let json = serde_json::to_string(plan)?;
        let conn = self.get_conn()?;
        conn.execute(
            r#"INSERT INTO process_plan (building_id, plan_json, updated_at)
               VALUES (?, ?, ?)
               ON CONFLICT(building_id) DO UPDATE SET
                 plan_json = excluded.plan_json,
                 updated_at = excluded.updated_at"#,
            params![
                building_id,
                json,
                plan.updated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            ],
        )?;
        debug!(building_id, "계획 저장");
        Ok(())
    }

    fn delete(&self, building_id: &str) -> StoreResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            "DELETE FROM process_plan WHERE building_id = ?",
            params![building_id],
        )?;
        Ok(())
    }

    fn list_building_ids(&self) -> StoreResult<Vec<String>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare("SELECT building_id FROM process_plan ORDER BY building_id")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let mut ids = Vec::new();
        for id in rows {
            ids.push(id?);
        }
        Ok(ids)
    }
}

// ==========================================
// 건설 공정일수 산정 시스템 - 저장소 오류 타입
// ==========================================
// 도구: thiserror 파생 매크로
// 산정 코어는 전역(total)이므로 오류는 영속화 경계에만 존재한다
// ==========================================

use thiserror::Error;

/// 계획 저장소 오류
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("데이터베이스 잠금 획득 실패: {0}")]
    LockError(String),

    #[error("데이터베이스 질의 실패: {0}")]
    DatabaseQueryError(String),

    #[error("계획 직렬화 실패: {0}")]
    SerializationError(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        StoreError::DatabaseQueryError(e.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::SerializationError(e.to_string())
    }
}

/// 저장소 결과 타입
pub type StoreResult<T> = Result<T, StoreError>;

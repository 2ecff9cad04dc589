// ==========================================
// 건설 공정일수 산정 시스템 - 가져오기 오류 타입
// ==========================================

use thiserror::Error;

/// 물량표 가져오기 오류
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("파일 읽기 실패: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV 해석 실패: {0}")]
    Csv(#[from] csv::Error),

    #[error("{line}행 데이터 오류: {message}")]
    InvalidRow { line: usize, message: String },
}

pub type ImportResult<T> = Result<T, ImportError>;

//! aspect-guard 핵심 에러 타입.
//!
//! 어댑터 crate는 이 타입을 그대로 반환하고, 바이너리는 `anyhow`로 감싼다.
//! 비율 검사 콜백 자체는 에러를 반환하지 않는다.

use thiserror::Error;

/// 코어 레이어 에러.
#[derive(Debug, Error)]
pub enum CoreError {
    /// 설정값 오류 (파일 파싱, 디렉토리 조회 등)
    #[error("설정 에러: {0}")]
    Config(String),

    /// I/O 에러
    #[error("I/O 에러: {0}")]
    Io(#[from] std::io::Error),

    /// 스크린 캡처 실패
    #[error("캡처 에러: {0}")]
    Capture(String),

    /// 이미지 헤더 읽기 실패
    #[error("이미지 에러: {0}")]
    Image(String),
}

//! 스크린 캡처.
//!
//! xcap 기반 모니터 캡처. 캡처한 이미지의 픽셀 크기만 사용한다.

use aspect_guard_core::error::CoreError;
use aspect_guard_core::models::frame::FrameSize;
use tracing::debug;
use xcap::Monitor;

/// 스크린 캡처 — xcap 기반
pub struct ScreenCapture;

impl ScreenCapture {
    /// 새 캡처 인스턴스 생성
    pub fn new() -> Self {
        Self
    }

    /// 지정 모니터를 캡처해 프레임 크기 반환
    pub fn capture_frame_size(&self, index: usize) -> Result<FrameSize, CoreError> {
        let monitors = Monitor::all()
            .map_err(|e| CoreError::Capture(format!("모니터 목록 조회 실패: {e}")))?;
        let monitor = select_monitor(monitors, index)?;

        let image = monitor
            .capture_image()
            .map_err(|e| CoreError::Capture(format!("스크린 캡처 실패: {e}")))?;

        debug!(index, width = image.width(), height = image.height(), "스크린 캡처 완료");
        Ok(FrameSize::new(image.width(), image.height()))
    }
}

impl Default for ScreenCapture {
    fn default() -> Self {
        Self::new()
    }
}

/// 모니터 목록에서 `index`번째 선택. 범위를 벗어나면 연결된 모니터 수를 알려준다.
fn select_monitor<M>(monitors: Vec<M>, index: usize) -> Result<M, CoreError> {
    let count = monitors.len();
    monitors.into_iter().nth(index).ok_or_else(|| {
        CoreError::Capture(format!(
            "모니터 인덱스 {index} 범위 밖 (연결된 모니터 {count}개)"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_monitor_by_index() {
        let picked = select_monitor(vec!["primary", "secondary"], 1).unwrap();
        assert_eq!(picked, "secondary");
    }

    #[test]
    fn out_of_range_index_reports_monitor_count() {
        let err = select_monitor(vec!["primary", "secondary"], 2).unwrap_err();
        assert!(matches!(err, CoreError::Capture(_)));
        assert_eq!(
            err.to_string(),
            "캡처 에러: 모니터 인덱스 2 범위 밖 (연결된 모니터 2개)"
        );
    }

    #[test]
    fn no_monitors_is_capture_error() {
        let err = select_monitor(Vec::<&str>::new(), 0).unwrap_err();
        assert!(err.to_string().contains("연결된 모니터 0개"));
    }
}

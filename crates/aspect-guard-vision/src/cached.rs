//! 최근 프레임 캐시 컨트롤러.
//!
//! `FrameController` 포트 구현. 외부 프레임워크 없이 검사기를 구동할 때 사용한다.

use aspect_guard_core::models::frame::FrameSize;
use aspect_guard_core::ports::tasker::FrameController;
use parking_lot::RwLock;

/// 마지막으로 저장된 프레임 크기를 캐시하는 컨트롤러
#[derive(Debug, Default)]
pub struct CachedFrameController {
    cached: RwLock<Option<FrameSize>>,
}

impl CachedFrameController {
    /// 빈 캐시로 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 프레임이 이미 캐시된 상태로 생성
    pub fn with_frame(frame: FrameSize) -> Self {
        Self {
            cached: RwLock::new(Some(frame)),
        }
    }

    /// 새 프레임 저장 (이전 프레임 대체)
    pub fn store(&self, frame: FrameSize) {
        *self.cached.write() = Some(frame);
    }

    /// 캐시 비우기
    pub fn clear(&self) {
        *self.cached.write() = None;
    }
}

impl FrameController for CachedFrameController {
    fn cached_frame(&self) -> Option<FrameSize> {
        *self.cached.read()
    }
}

//! 로컬 태스크 러너.
//!
//! `Tasker` 포트 구현. 중지 요청은 플래그로만 기록한다.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use aspect_guard_core::ports::tasker::{FrameController, Tasker};
use tracing::info;

/// 단일 컨트롤러에 바인딩된 로컬 태스크 러너
pub struct LocalTasker {
    controller: Option<Arc<dyn FrameController>>,
    stop_requested: AtomicBool,
}

impl LocalTasker {
    /// 컨트롤러에 바인딩된 태스크 러너 생성
    pub fn new(controller: Arc<dyn FrameController>) -> Self {
        Self {
            controller: Some(controller),
            stop_requested: AtomicBool::new(false),
        }
    }

    /// 컨트롤러 없는 태스크 러너 생성
    pub fn without_controller() -> Self {
        Self {
            controller: None,
            stop_requested: AtomicBool::new(false),
        }
    }

    /// 중지 요청을 받았는지
    pub fn stop_requested(&self) -> bool {
        self.stop_requested.load(Ordering::SeqCst)
    }
}

impl Tasker for LocalTasker {
    fn controller(&self) -> Option<Arc<dyn FrameController>> {
        self.controller.clone()
    }

    fn post_stop(&self) {
        if !self.stop_requested.swap(true, Ordering::SeqCst) {
            info!("태스크 중지 요청 수신");
        }
    }
}

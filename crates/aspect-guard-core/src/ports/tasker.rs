//! 태스크 러너 / 컨트롤러 포트.
//!
//! 구현: 외부 자동화 프레임워크. 로컬 어댑터는 `aspect-guard-app`에 있다.

use std::sync::Arc;

use crate::models::frame::FrameSize;
use crate::models::task::{TaskDetail, TaskEvent};

/// 화면 컨트롤러 — 가장 최근 캡처된 프레임을 캐시한다
pub trait FrameController: Send + Sync {
    /// 가장 최근 캐시된 프레임 크기. 캐시가 비어 있으면 `None`.
    fn cached_frame(&self) -> Option<FrameSize>;
}

/// 태스크 러너
pub trait Tasker: Send + Sync {
    /// 연결된 컨트롤러. 아직 바인딩되지 않았으면 `None`.
    fn controller(&self) -> Option<Arc<dyn FrameController>>;

    /// 실행 중인 태스크 중지 요청 (비동기로 처리될 수 있음)
    fn post_stop(&self);
}

/// 태스크 이벤트 콜백.
///
/// 디스패처가 이벤트마다 호출한다. 구현체는 호출 간 상태를 유지하지 않아야 하며
/// 재진입 호출에도 안전해야 한다.
pub trait TaskEventHandler: Send + Sync {
    fn on_task_event(&self, tasker: &dyn Tasker, event: TaskEvent, detail: &TaskDetail);
}

//! 태스크 이벤트 디스패처.
//!
//! 등록 순서대로 핸들러를 동기 호출한다.

use std::sync::Arc;

use aspect_guard_core::models::task::{TaskDetail, TaskEvent};
use aspect_guard_core::ports::tasker::{TaskEventHandler, Tasker};
use tracing::debug;

/// 태스크 이벤트 핸들러 목록
#[derive(Default)]
pub struct TaskDispatcher {
    handlers: Vec<Arc<dyn TaskEventHandler>>,
}

impl TaskDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// 핸들러 등록
    pub fn register(&mut self, handler: Arc<dyn TaskEventHandler>) {
        self.handlers.push(handler);
    }

    /// 등록된 핸들러 수
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// 모든 핸들러에 이벤트 전달
    pub fn dispatch(&self, tasker: &dyn Tasker, event: TaskEvent, detail: &TaskDetail) {
        debug!(
            task_id = detail.task_id,
            event = ?event,
            handlers = self.handlers.len(),
            "태스크 이벤트 디스패치"
        );
        for handler in &self.handlers {
            handler.on_task_event(tasker, event, detail);
        }
    }
}

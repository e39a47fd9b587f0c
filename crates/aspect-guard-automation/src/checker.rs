//! 화면 비율 검사기.
//!
//! `TaskEventHandler` 포트 구현. Starting 이벤트에서만 동작하며,
//! 컨트롤러나 캐시 프레임이 없으면 에러 로그만 남기고 태스크를 그대로 진행시킨다.
//! 호출 간 상태를 유지하지 않는다.

use std::sync::Arc;

use aspect_guard_core::models::frame::FrameSize;
use aspect_guard_core::models::task::{TaskDetail, TaskEvent};
use aspect_guard_core::ports::notifier::MessageSink;
use aspect_guard_core::ports::tasker::{TaskEventHandler, Tasker};
use aspect_guard_vision::aspect::{self, TARGET_RATIO, TOLERANCE};
use serde::Serialize;
use tracing::{debug, error};

use crate::notifier::StdoutSink;
use crate::warning::mismatch_warning;

/// 검사 1회 결과
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CheckOutcome {
    /// Starting 이외의 이벤트 — 아무것도 하지 않음
    Ignored,
    /// 태스크 러너에 컨트롤러 없음 — 검사 생략
    ControllerMissing,
    /// 캐시된 프레임 없음 — 검사 생략
    FrameMissing,
    /// 16:9 허용 범위 안
    Passed { frame: FrameSize, ratio: f64 },
    /// 불일치 — 경고 출력 + 중지 요청
    Stopped {
        frame: FrameSize,
        /// 0 크기 프레임이면 `None`
        ratio: Option<f64>,
    },
}

impl CheckOutcome {
    /// 태스크 중지를 요청했는지
    pub fn is_stopped(&self) -> bool {
        matches!(self, Self::Stopped { .. })
    }
}

/// 태스크 시작 전 화면 비율 검사기
pub struct AspectRatioChecker {
    sink: Arc<dyn MessageSink>,
}

impl AspectRatioChecker {
    /// 경고 메시지를 `sink`로 출력하는 검사기 생성
    pub fn new(sink: Arc<dyn MessageSink>) -> Self {
        Self { sink }
    }

    /// 이벤트 한 건 검사
    pub fn check(&self, tasker: &dyn Tasker, event: TaskEvent, detail: &TaskDetail) -> CheckOutcome {
        if event != TaskEvent::Starting {
            return CheckOutcome::Ignored;
        }

        debug!(
            task_id = detail.task_id,
            entry = %detail.entry,
            "태스크 실행 전 화면 비율 검사"
        );

        let Some(controller) = tasker.controller() else {
            error!(task_id = detail.task_id, "태스크 러너에서 컨트롤러를 가져오지 못함");
            return CheckOutcome::ControllerMissing;
        };

        let Some(frame) = controller.cached_frame() else {
            error!(task_id = detail.task_id, "캐시된 프레임을 가져오지 못함");
            return CheckOutcome::FrameMissing;
        };

        let (width, height) = (i64::from(frame.width), i64::from(frame.height));
        debug!(width, height, "스크린샷 크기 확인");

        match aspect::normalize(width, height) {
            Some(ratio) if aspect::is_match(width, height) => {
                debug!(width, height, ratio, "해상도 검사 통과: 16:9");
                CheckOutcome::Passed { frame, ratio }
            }
            Some(ratio) => {
                error!(
                    task_id = detail.task_id,
                    entry = %detail.entry,
                    width,
                    height,
                    actual_ratio = ratio,
                    target_ratio = TARGET_RATIO,
                    tolerance = TOLERANCE,
                    "해상도가 16:9가 아님 — 태스크 중지"
                );
                self.stop(tasker);
                CheckOutcome::Stopped {
                    frame,
                    ratio: Some(ratio),
                }
            }
            None => {
                error!(
                    task_id = detail.task_id,
                    entry = %detail.entry,
                    width,
                    height,
                    "프레임 크기가 0 — 태스크 중지"
                );
                self.stop(tasker);
                CheckOutcome::Stopped { frame, ratio: None }
            }
        }
    }

    fn stop(&self, tasker: &dyn Tasker) {
        self.sink.emit(&mismatch_warning());
        tasker.post_stop();
    }
}

impl Default for AspectRatioChecker {
    fn default() -> Self {
        Self::new(Arc::new(StdoutSink))
    }
}

impl TaskEventHandler for AspectRatioChecker {
    fn on_task_event(&self, tasker: &dyn Tasker, event: TaskEvent, detail: &TaskDetail) {
        self.check(tasker, event, detail);
    }
}

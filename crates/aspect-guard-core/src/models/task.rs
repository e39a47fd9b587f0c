//! 태스크 이벤트 모델.
//!
//! 외부 태스크 러너가 태스크 상태 변화마다 `(TaskEvent, TaskDetail)`을 전달한다.

use serde::{Deserialize, Serialize};

/// 태스크 상태 이벤트 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskEvent {
    /// 알 수 없는 상태
    Unknown,
    /// 태스크 시작 직전
    Starting,
    /// 태스크 성공
    Succeeded,
    /// 태스크 실패
    Failed,
}

/// 태스크 상세 정보
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDetail {
    /// 태스크 ID
    pub task_id: u64,
    /// 파이프라인 진입점 이름
    pub entry: String,
}

impl TaskDetail {
    pub fn new(task_id: u64, entry: impl Into<String>) -> Self {
        Self {
            task_id,
            entry: entry.into(),
        }
    }
}

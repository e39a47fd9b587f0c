//! # aspect-guard-core
//!
//! aspect-guard 도메인 모델, 포트(trait) 정의, 에러 타입.
//! 모든 크레이트가 공유하는 핵심 타입과 인터페이스를 제공한다.
//!
//! ## 구조
//!
//! - [`models`] — 프레임 크기, 태스크 이벤트/상세
//! - [`ports`] — 외부 자동화 프레임워크 협력자 인터페이스 (Tasker, FrameController 등)
//! - [`error`] — 핵심 에러 타입 (thiserror)
//! - [`config`] — 설정 구조체 및 로더 (config crate)

pub mod config;
pub mod error;
pub mod models;
pub mod ports;

#[cfg(test)]
mod tests {
    use crate::models::frame::FrameSize;
    use crate::models::task::{TaskDetail, TaskEvent};

    #[test]
    fn task_detail_serde_roundtrip() {
        let detail = TaskDetail::new(42, "StartUp");

        let json = serde_json::to_string(&detail).unwrap();
        let deserialized: TaskDetail = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, detail);
        assert!(json.contains("\"entry\":\"StartUp\""));
    }

    #[test]
    fn task_event_serializes_snake_case() {
        let json = serde_json::to_string(&TaskEvent::Starting).unwrap();
        assert_eq!(json, "\"starting\"");
    }

    #[test]
    fn frame_size_display() {
        assert_eq!(FrameSize::new(1920, 1080).to_string(), "1920x1080");
    }

    #[test]
    fn config_defaults() {
        let config = crate::config::GuardConfig::default();
        assert!(config.guard.enabled);
        assert_eq!(config.log.level, "info");
        assert_eq!(config.capture.monitor_index, 0);
    }
}

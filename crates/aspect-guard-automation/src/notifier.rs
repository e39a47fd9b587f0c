//! 표준 출력 메시지 싱크.

use aspect_guard_core::ports::notifier::MessageSink;

/// 메시지를 stdout에 한 줄로 출력. 호스트 UI가 stdout을 리치 텍스트로 렌더링한다.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl MessageSink for StdoutSink {
    fn emit(&self, message: &str) {
        println!("{message}");
    }
}

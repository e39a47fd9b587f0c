//! 사용자 메시지 출력 포트.
//!
//! 구현: `aspect-guard-automation::notifier::StdoutSink`

/// 사람이 읽는 (리치 텍스트) 메시지를 내보내는 출력 채널
pub trait MessageSink: Send + Sync {
    /// 메시지 한 건 출력
    fn emit(&self, message: &str);
}

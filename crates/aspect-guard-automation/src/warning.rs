//! 비율 불일치 경고 메시지.
//!
//! 호스트 UI용 HTML 스타일 리치 텍스트 (중국어 UI 문구).

/// 권장 해상도 목록
pub const SUPPORTED_RESOLUTIONS: [(u32, u32); 4] =
    [(3840, 2160), (2560, 1440), (1920, 1080), (1280, 720)];

const HEADLINE: &str =
    r#"<span style="color: #ff0000; font-size: 1.8em; font-weight: 900;">🚨 警告：分辨率比例不匹配！🚨</span>"#;
const STOPPED: &str =
    r#"<span style="color: #ff4500; font-size: 1.6em; font-weight: 800;">🚫 任务已强制停止</span>"#;
const ONLY_16X9: &str = r#"<span style="color: #faad14; font-size: 1.4em; font-weight: bold;">💡 MaaEnd 目前 <span style="text-decoration: underline; font-size: 1.1em;">仅支持 16:9</span> 比例。</span>"#;
const ADJUST_PROMPT: &str =
    r#"<span style="font-size: 1.3em; font-weight: bold;">👇 请将分辨率调整为：</span>"#;
const FUTURE: &str =
    r#"<span style="font-size: 1.2em; color: #32cd32; font-weight: bold;">🚀 未来将适配更多比例，敬请期待！</span>"#;

/// 비율 불일치 경고 메시지 생성
pub fn mismatch_warning() -> String {
    let resolutions = SUPPORTED_RESOLUTIONS
        .iter()
        .map(|(w, h)| format!("{w}x{h}"))
        .collect::<Vec<_>>()
        .join(", ");
    let resolution_line = format!(
        r#"<span style="color: #00bfff; font-size: 1.5em; font-weight: 900;">✅ {resolutions}</span>"#
    );

    // 마지막 줄 앞은 빈 줄 하나
    [
        HEADLINE,
        STOPPED,
        ONLY_16X9,
        ADJUST_PROMPT,
        resolution_line.as_str(),
        "",
        FUTURE,
    ]
    .join("<br/>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_lists_supported_resolutions() {
        let message = mismatch_warning();
        assert!(message.contains("✅ 3840x2160, 2560x1440, 1920x1080, 1280x720"));
    }

    #[test]
    fn warning_line_layout() {
        let message = mismatch_warning();
        assert!(message.starts_with(HEADLINE));
        assert!(message.ends_with(&format!("<br/><br/>{FUTURE}")));
        assert_eq!(message.matches("<br/>").count(), 6);
        assert!(message.contains("任务已强制停止"));
        assert!(message.contains("仅支持 16:9"));
    }

    #[test]
    fn supported_resolutions_are_16x9() {
        for (w, h) in SUPPORTED_RESOLUTIONS {
            assert!(aspect_guard_vision::aspect::is_match(w.into(), h.into()));
        }
    }
}

//! # aspect-guard-automation
//!
//! 태스크 시작 전 화면 비율 검사.
//! 태스크 러너의 Starting 이벤트마다 캐시된 프레임을 16:9와 비교하고,
//! 불일치하면 경고 메시지를 출력한 뒤 태스크 중지를 요청한다.

pub mod checker;
pub mod notifier;
pub mod warning;

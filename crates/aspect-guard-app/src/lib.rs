//! # aspect-guard-app
//!
//! aspect-guard CLI의 와이어링 계층.
//! 외부 자동화 프레임워크 대신 로컬 태스크 러너/컨트롤러를 구성하고,
//! 등록된 핸들러에 태스크 이벤트를 디스패치한다.

pub mod cli;
pub mod dispatcher;
pub mod local_tasker;

//! 포트 인터페이스 (trait).
//!
//! 외부 자동화 프레임워크(태스크 러너, 컨트롤러, 출력 채널)를
//! 불투명한 협력자로 표현한다. 바이너리에서 `Arc<dyn T>`로 와이어링한다.
//!
//! 비율 검사는 동기 콜백이므로 모든 포트는 동기 trait이다.

pub mod notifier;
pub mod tasker;

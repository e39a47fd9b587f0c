//! 도메인 모델.
//!
//! 모든 구조체는 serde `Serialize`/`Deserialize`를 구현한다.

pub mod frame;
pub mod task;

//! # aspect-guard-vision
//!
//! 화면 비율 검사와 프레임 크기 어댑터.
//! 비율 정규화/허용 오차 비교, 이미지 파일 헤더 읽기,
//! 최근 프레임 캐시, (선택) 스크린 캡처를 담당한다.

pub mod aspect;
pub mod cached;
#[cfg(feature = "screen")]
pub mod capture;
pub mod image_file;

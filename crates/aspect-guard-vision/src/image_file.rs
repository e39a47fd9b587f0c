//! 이미지 파일에서 프레임 크기 읽기.
//!
//! 헤더만 읽으며 픽셀 데이터는 디코딩하지 않는다.

use std::path::Path;

use aspect_guard_core::error::CoreError;
use aspect_guard_core::models::frame::FrameSize;
use tracing::debug;

/// 이미지 파일의 픽셀 크기
pub fn frame_size_from_file(path: &Path) -> Result<FrameSize, CoreError> {
    let (width, height) = image::image_dimensions(path).map_err(|e| match e {
        image::ImageError::IoError(io) => CoreError::Io(io),
        other => CoreError::Image(format!("{}: {other}", path.display())),
    })?;

    debug!(path = %path.display(), width, height, "이미지 크기 읽기 완료");
    Ok(FrameSize::new(width, height))
}

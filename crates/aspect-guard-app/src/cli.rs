//! CLI 인자 정의와 실행 흐름.
//!
//! 서브커맨드마다 프레임 크기를 구한 뒤 로컬 태스크 러너에 캐시하고,
//! Starting 이벤트를 디스패치해 검사 결과를 종료 코드로 돌려준다.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use aspect_guard_automation::checker::AspectRatioChecker;
use aspect_guard_core::config::GuardConfig;
use aspect_guard_core::models::frame::FrameSize;
use aspect_guard_core::models::task::{TaskDetail, TaskEvent};
use aspect_guard_core::ports::notifier::MessageSink;
use aspect_guard_vision::cached::CachedFrameController;
use aspect_guard_vision::image_file;
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use crate::dispatcher::TaskDispatcher;
use crate::local_tasker::LocalTasker;

/// 로컬 실행 시 태스크 ID
const LOCAL_TASK_ID: u64 = 1;

/// 로그 필터에 포함할 크레이트
const LOG_TARGETS: [&str; 5] = [
    "aspect_guard",
    "aspect_guard_app",
    "aspect_guard_core",
    "aspect_guard_vision",
    "aspect_guard_automation",
];

/// 자동화 태스크 시작 전 화면 비율(16:9) 검사
#[derive(Parser, Debug)]
#[command(name = "aspect-guard")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// 로그 레벨 (trace, debug, info, warn, error). 기본: 설정 파일 값
    #[arg(long, short = 'l', global = true)]
    pub log_level: Option<String>,

    /// 설정 파일 경로 (JSON/TOML). 기본: 플랫폼 설정 디렉토리
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// 태스크 진입점 이름
    #[arg(long, short = 'e', global = true, default_value = "aspect-guard")]
    pub entry: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 지정한 크기의 프레임 검사
    Check {
        #[arg(long)]
        width: u32,
        #[arg(long)]
        height: u32,
    },
    /// 이미지 파일 크기 검사
    Image {
        /// 이미지 파일 경로
        path: PathBuf,
    },
    /// 현재 화면 캡처 크기 검사 (`screen` feature 필요)
    Screen {
        /// 모니터 인덱스. 기본: 설정 파일 값
        #[arg(long, short = 'm')]
        monitor: Option<usize>,
    },
}

/// 검사 후 태스크 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardStatus {
    /// 태스크 계속 진행 (통과 또는 검사 생략)
    Continued,
    /// 태스크 중지 요청됨
    Stopped,
}

impl GuardStatus {
    /// 프로세스 종료 코드 (1은 어댑터/설정 에러용)
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Continued => 0,
            Self::Stopped => 2,
        }
    }
}

/// 크레이트별 로그 필터 문자열
pub fn log_filter(level: &str) -> String {
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// 설정에 따라 핸들러를 등록한 디스패처 생성
pub fn build_dispatcher(config: &GuardConfig, sink: Arc<dyn MessageSink>) -> TaskDispatcher {
    let mut dispatcher = TaskDispatcher::new();
    if config.guard.enabled {
        dispatcher.register(Arc::new(AspectRatioChecker::new(sink)));
    } else {
        info!("화면 비율 검사 비활성화 — 핸들러 미등록");
    }
    dispatcher
}

/// 서브커맨드에 해당하는 프레임 크기
pub fn resolve_frame(command: &Command, config: &GuardConfig) -> Result<FrameSize> {
    match command {
        Command::Check { width, height } => Ok(FrameSize::new(*width, *height)),
        Command::Image { path } => image_file::frame_size_from_file(path)
            .with_context(|| format!("이미지 크기 읽기 실패: {}", path.display())),
        Command::Screen { monitor } => {
            capture_screen(monitor.unwrap_or(config.capture.monitor_index))
        }
    }
}

#[cfg(feature = "screen")]
fn capture_screen(index: usize) -> Result<FrameSize> {
    aspect_guard_vision::capture::ScreenCapture::new()
        .capture_frame_size(index)
        .with_context(|| format!("모니터 {index} 캡처 실패"))
}

#[cfg(not(feature = "screen"))]
fn capture_screen(_index: usize) -> Result<FrameSize> {
    anyhow::bail!("스크린 캡처 미지원 빌드 — `--features screen`으로 다시 빌드하세요")
}

/// 프레임을 캐시한 로컬 태스크 러너로 Starting 이벤트 1회 실행
pub fn run(args: &Args, config: &GuardConfig, sink: Arc<dyn MessageSink>) -> Result<GuardStatus> {
    let frame = resolve_frame(&args.command, config)?;
    debug!(frame = %frame, "프레임 크기 확인");

    let controller = Arc::new(CachedFrameController::with_frame(frame));
    let tasker = LocalTasker::new(controller);
    let dispatcher = build_dispatcher(config, sink);

    let detail = TaskDetail::new(LOCAL_TASK_ID, args.entry.clone());
    dispatcher.dispatch(&tasker, TaskEvent::Starting, &detail);

    let status = if tasker.stop_requested() {
        GuardStatus::Stopped
    } else {
        GuardStatus::Continued
    };
    info!(frame = %frame, status = ?status, "검사 완료");
    Ok(status)
}

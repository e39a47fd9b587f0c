//! aspect-guard 바이너리 진입점.
//!
//! 설정 로드 → tracing 초기화 → 검사 실행 → 종료 코드 반환.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use aspect_guard_app::cli::{self, Args};
use aspect_guard_automation::notifier::StdoutSink;
use aspect_guard_core::config::GuardConfig;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let config = GuardConfig::load(args.config.as_deref()).context("설정 로드 실패")?;

    // stdout은 경고 메시지 채널이므로 로그는 stderr로
    let level = args.log_level.as_deref().unwrap_or(&config.log.level);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli::log_filter(level))),
        )
        .with_writer(std::io::stderr)
        .init();

    let status = cli::run(&args, &config, Arc::new(StdoutSink))?;
    Ok(ExitCode::from(status.exit_code()))
}

//! CLI 종료 코드 통합 테스트.
//!
//! 0 = 계속 진행, 2 = 태스크 중지, 1 = 어댑터/설정 에러.

use std::path::Path;
use std::process::{Command, Output};

use image::{Rgb, RgbImage};

const BIN: &str = env!("CARGO_BIN_EXE_aspect-guard");

/// 사용자 설정 디렉토리에 영향받지 않도록 항상 임시 설정 파일 사용
fn run(config: &Path, args: &[&str]) -> Output {
    Command::new(BIN)
        .arg("--config")
        .arg(config)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("바이너리 실행 실패")
}

fn temp_config(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn matching_resolution_exits_zero() {
    let (_dir, config) = temp_config("{}");
    let output = run(&config, &["check", "--width", "1920", "--height", "1080"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty(), "통과 시 경고 없음");
}

#[test]
fn mismatched_resolution_exits_two_with_warning() {
    let (_dir, config) = temp_config("{}");
    let output = run(&config, &["check", "--width", "1024", "--height", "768"]);

    assert_eq!(output.status.code(), Some(2));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("分辨率比例不匹配"));
    assert!(stdout.contains("1280x720"));
}

#[test]
fn zero_dimension_is_stopped() {
    let (_dir, config) = temp_config("{}");
    let output = run(&config, &["check", "--width", "0", "--height", "1080"]);

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn image_subcommand_reads_file() {
    let (dir, config) = temp_config("{}");
    let image_path = dir.path().join("portrait.png");
    RgbImage::from_pixel(90, 160, Rgb([0, 0, 0]))
        .save(&image_path)
        .unwrap();

    let output = run(&config, &["image", image_path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn missing_image_exits_one() {
    let (dir, config) = temp_config("{}");
    let missing = dir.path().join("missing.png");

    let output = run(&config, &["image", missing.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn disabled_guard_lets_task_continue() {
    let (_dir, config) = temp_config(r#"{ "guard": { "enabled": false } }"#);
    let output = run(&config, &["check", "--width", "1024", "--height", "768"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_config_file_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(
        &dir.path().join("absent.json"),
        &["check", "--width", "1920", "--height", "1080"],
    );
    assert_eq!(output.status.code(), Some(1));
}

#[cfg(not(feature = "screen"))]
#[test]
fn screen_without_feature_exits_one() {
    let (_dir, config) = temp_config("{}");
    let output = run(&config, &["screen"]);
    assert_eq!(output.status.code(), Some(1));
}

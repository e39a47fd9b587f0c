//! 애플리케이션 설정.
//!
//! 검사 활성화 여부, 로그 레벨, 캡처 모니터 등 런타임 설정을 정의한다.
//! 기본값 → 설정 파일(JSON/TOML, 선택) → `ASPECT_GUARD__*` 환경변수 순으로 덮어쓴다.
//!
//! 목표 비율(16:9)과 허용 오차(2%)는 설정 대상이 아니다.

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::CoreError;

/// 설정 파일 이름
const CONFIG_FILE_NAME: &str = "config.json";

/// 환경변수 접두사 (`ASPECT_GUARD__GUARD__ENABLED=false`)
const ENV_PREFIX: &str = "ASPECT_GUARD";

/// 최상위 설정
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuardConfig {
    /// 비율 검사 설정
    #[serde(default)]
    pub guard: GuardSection,
    /// 로그 설정
    #[serde(default)]
    pub log: LogConfig,
    /// 화면 캡처 설정
    #[serde(default)]
    pub capture: CaptureConfig,
}

/// 비율 검사 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuardSection {
    /// false면 디스패처에 검사기를 등록하지 않는다
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for GuardSection {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// 로그 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// 로그 레벨 (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// 화면 캡처 설정
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// 캡처할 모니터 인덱스 (0 = 첫 번째)
    #[serde(default)]
    pub monitor_index: usize,
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl GuardConfig {
    /// 설정 로드.
    ///
    /// `path`가 `None`이면 플랫폼 설정 디렉토리의 `config.json`을 찾고,
    /// 파일이 없으면 기본값을 사용한다. 명시한 경로는 반드시 존재해야 한다.
    pub fn load(path: Option<&Path>) -> Result<Self, CoreError> {
        Self::load_with_env(path, None)
    }

    /// 환경변수 소스를 직접 지정해 설정 로드 (`None`이면 프로세스 환경변수)
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, CoreError> {
        let mut builder = Config::builder();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(CoreError::Config(format!(
                        "설정 파일 없음: {}",
                        path.display()
                    )));
                }
                debug!("설정 파일 로드: {}", path.display());
                builder = builder.add_source(File::from(path).required(true));
            }
            None => {
                if let Some(default_path) = Self::default_config_path() {
                    debug!("기본 설정 파일 확인: {}", default_path.display());
                    builder = builder.add_source(File::from(default_path).required(false));
                }
            }
        }

        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .source(env),
            )
            .build()
            .map_err(|e| CoreError::Config(format!("설정 로드 실패: {e}")))?;

        settings
            .try_deserialize()
            .map_err(|e| CoreError::Config(format!("설정 파싱 실패: {e}")))
    }

    /// 플랫폼별 기본 설정 파일 경로
    /// (Linux: `~/.config/aspect-guard/config.json`)
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "aspect-guard", "aspect-guard")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}

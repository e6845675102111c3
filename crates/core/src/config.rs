//! 설정 관리 — logsynth.toml 파싱 및 검증
//!
//! [`LogSynthConfig`]는 CLI와 파이프라인이 공유하는 최상위 설정입니다.
//!
//! # 설정 로딩 우선순위
//! 1. CLI 인자 (최고 우선)
//! 2. 설정 파일 (`logsynth.toml`)
//! 3. 기본값 (`Default` 구현)
//!
//! 환경변수 오버라이드는 의도적으로 지원하지 않습니다.
//!
//! # 사용 예시
//! ```no_run
//! # fn example() -> Result<(), logsynth_core::error::LogSynthError> {
//! use logsynth_core::config::LogSynthConfig;
//!
//! // 파일에서 로드
//! let config = LogSynthConfig::from_file("logsynth.toml")?;
//!
//! // TOML 문자열에서 직접 파싱
//! let config = LogSynthConfig::parse("[pipeline]\nevent_id_len = 12")?;
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, LogSynthError};
use crate::event::DEFAULT_OBSERVER;

/// SHA-1 16진수 다이제스트의 전체 길이
const SHA1_HEX_LEN: usize = 40;

/// LogSynth 통합 설정
///
/// `logsynth.toml` 파일의 최상위 구조를 나타냅니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogSynthConfig {
    /// 일반 설정
    #[serde(default)]
    pub general: GeneralConfig,
    /// 파이프라인 설정
    #[serde(default)]
    pub pipeline: PipelineSection,
}

/// 일반 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// 로그 레벨 (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_owned()
}

/// 파이프라인 설정 섹션
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSection {
    /// 출력 레코드의 observer.name 값
    #[serde(default = "default_observer")]
    pub observer: String,
    /// event_id 16진수 자릿수
    ///
    /// 실행 중에는 고정이며, 다운스트림 소비자와의 호환을 위해
    /// 기본값 10을 바꾸지 않는 것을 권장합니다.
    #[serde(default = "default_event_id_len")]
    pub event_id_len: usize,
}

impl Default for PipelineSection {
    fn default() -> Self {
        Self {
            observer: default_observer(),
            event_id_len: default_event_id_len(),
        }
    }
}

fn default_observer() -> String {
    DEFAULT_OBSERVER.to_owned()
}

fn default_event_id_len() -> usize {
    10
}

impl LogSynthConfig {
    /// TOML 파일에서 설정을 로드합니다.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LogSynthError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LogSynthError::Config(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                })
            } else {
                LogSynthError::Io(e)
            }
        })?;
        let config = Self::parse(&content)?;
        Ok(config)
    }

    /// 파일이 있으면 로드하고, 없으면 기본값을 반환합니다.
    ///
    /// CLI가 기본 경로(`logsynth.toml`)를 사용할 때의 동작입니다.
    /// 파일이 존재하지만 읽거나 파싱할 수 없으면 에러입니다.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, LogSynthError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "config file absent, using defaults");
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// TOML 문자열에서 설정을 파싱하고 검증합니다.
    pub fn parse(toml_str: &str) -> Result<Self, LogSynthError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| {
            LogSynthError::Config(ConfigError::ParseFailed {
                reason: e.to_string(),
            })
        })?;
        config.validate()?;
        Ok(config)
    }

    /// 설정값의 유효성을 검증합니다.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pipeline.observer.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "pipeline.observer".to_owned(),
                reason: "observer name must not be empty".to_owned(),
            });
        }

        if self.pipeline.event_id_len == 0 {
            return Err(ConfigError::InvalidValue {
                field: "pipeline.event_id_len".to_owned(),
                reason: "event id length must be greater than 0".to_owned(),
            });
        }

        if self.pipeline.event_id_len > SHA1_HEX_LEN {
            return Err(ConfigError::InvalidValue {
                field: "pipeline.event_id_len".to_owned(),
                reason: format!("event id length must not exceed {SHA1_HEX_LEN}"),
            });
        }

        Ok(())
    }
}

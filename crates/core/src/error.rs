//! 에러 타입 — 도메인별 에러 정의

/// LogSynth 최상위 에러 타입
#[derive(Debug, thiserror::Error)]
pub enum LogSynthError {
    /// 설정 관련 에러
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// 파이프라인 처리 에러
    #[error("pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// I/O 에러
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// 설정 관련 에러
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 설정 파일을 찾을 수 없음
    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    /// 설정 파싱 실패
    #[error("failed to parse config: {reason}")]
    ParseFailed { reason: String },

    /// 유효하지 않은 설정 값
    #[error("invalid config value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// 파이프라인 처리 에러
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// 입력 파일을 열거나 읽을 수 없음
    #[error("input error: {path}: {reason}")]
    Input { path: String, reason: String },

    /// 파이프라인 실행 실패 (파싱, 직렬화, 출력 쓰기)
    #[error("run failed: {0}")]
    RunFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound {
            path: "logsynth.toml".to_owned(),
        };
        assert!(err.to_string().contains("logsynth.toml"));
    }

    #[test]
    fn pipeline_error_display() {
        let err = PipelineError::Input {
            path: "/tmp/missing.json".to_owned(),
            reason: "no such file".to_owned(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/missing.json"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn top_level_error_wraps_config() {
        let err: LogSynthError = ConfigError::ParseFailed {
            reason: "bad toml".to_owned(),
        }
        .into();
        assert!(matches!(err, LogSynthError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn top_level_error_wraps_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: LogSynthError = io_err.into();
        assert!(matches!(err, LogSynthError::Io(_)));
    }
}

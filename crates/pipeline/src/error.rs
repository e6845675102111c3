//! 파이프라인 에러 타입
//!
//! [`SynthPipelineError`]는 파이프라인 내부에서 발생하는 모든 에러를 표현합니다.
//! `From<SynthPipelineError> for LogSynthError` 변환이 구현되어 있어
//! 상위 레이어에서 `?` 연산자로 자연스럽게 전파할 수 있습니다.

use logsynth_core::error::{LogSynthError, PipelineError};

/// 파이프라인 도메인 에러
///
/// 입력 읽기, 봉투 파싱, 출력 직렬화/쓰기 등 한 번의 실행 중
/// 발생할 수 있는 모든 치명적 에러 상황을 포괄합니다.
/// NDJSON 개별 라인의 파싱 실패는 에러가 아니라 스킵입니다.
#[derive(Debug, thiserror::Error)]
pub enum SynthPipelineError {
    /// 입력 파일을 열거나 읽을 수 없음
    #[error("input error: {path}: {reason}")]
    Input {
        /// 입력 파일 경로
        path: String,
        /// 실패 사유
        reason: String,
    },

    /// 봉투 형식 최상위 JSON 파싱 실패 (치명적)
    #[error("envelope parse error: {path}: {reason}")]
    Envelope {
        /// 입력 파일 경로
        path: String,
        /// 파싱 실패 사유
        reason: String,
    },

    /// 출력 레코드 직렬화 실패
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// 설정 에러
    #[error("config error: {field}: {reason}")]
    Config {
        /// 설정 필드명
        field: String,
        /// 에러 사유
        reason: String,
    },

    /// I/O 에러 (출력 파일 생성/쓰기 등)
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<SynthPipelineError> for LogSynthError {
    fn from(err: SynthPipelineError) -> Self {
        match err {
            SynthPipelineError::Input { path, reason } => {
                LogSynthError::Pipeline(PipelineError::Input { path, reason })
            }
            other => LogSynthError::Pipeline(PipelineError::RunFailed(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_error_display() {
        let err = SynthPipelineError::Input {
            path: "/tmp/logs.json".to_owned(),
            reason: "permission denied".to_owned(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/logs.json"));
        assert!(msg.contains("permission denied"));
    }

    #[test]
    fn envelope_error_display() {
        let err = SynthPipelineError::Envelope {
            path: "export.json".to_owned(),
            reason: "unexpected end of input".to_owned(),
        };
        assert!(err.to_string().contains("envelope parse error"));
    }

    #[test]
    fn input_error_converts_to_core_input() {
        let err = SynthPipelineError::Input {
            path: "x".to_owned(),
            reason: "y".to_owned(),
        };
        let core: LogSynthError = err.into();
        assert!(matches!(
            core,
            LogSynthError::Pipeline(PipelineError::Input { .. })
        ));
    }

    #[test]
    fn other_errors_convert_to_run_failed() {
        let err = SynthPipelineError::Config {
            field: "event_id_len".to_owned(),
            reason: "zero".to_owned(),
        };
        let core: LogSynthError = err.into();
        assert!(matches!(
            core,
            LogSynthError::Pipeline(PipelineError::RunFailed(_))
        ));
    }
}

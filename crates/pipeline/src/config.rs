//! 파이프라인 설정
//!
//! [`PipelineConfig`]는 core의 [`PipelineSection`](logsynth_core::config::PipelineSection)에서
//! 파생되며, 파이프라인 내부에서 사용하는 값만 담습니다.

use logsynth_core::config::PipelineSection;

use crate::error::SynthPipelineError;

/// SHA-1 16진수 다이제스트의 전체 길이
const SHA1_HEX_LEN: usize = 40;

/// 파이프라인 설정
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// 출력 레코드의 observer.name 값
    pub observer: String,
    /// event_id 16진수 자릿수 (실행 중 고정)
    pub event_id_len: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::from_core(&PipelineSection::default())
    }
}

impl PipelineConfig {
    /// core의 `PipelineSection`에서 파이프라인 설정을 생성합니다.
    pub fn from_core(core: &PipelineSection) -> Self {
        Self {
            observer: core.observer.clone(),
            event_id_len: core.event_id_len,
        }
    }

    /// 설정값의 유효성을 검증합니다.
    ///
    /// core 레이어에서 이미 검증된 값이라도, 파이프라인을 직접 구성하는
    /// 경로(테스트 등)를 위해 여기서 다시 검증합니다.
    pub fn validate(&self) -> Result<(), SynthPipelineError> {
        if self.observer.is_empty() {
            return Err(SynthPipelineError::Config {
                field: "observer".to_owned(),
                reason: "observer name must not be empty".to_owned(),
            });
        }

        if self.event_id_len == 0 || self.event_id_len > SHA1_HEX_LEN {
            return Err(SynthPipelineError::Config {
                field: "event_id_len".to_owned(),
                reason: format!("event id length must be in 1..={SHA1_HEX_LEN}"),
            });
        }

        Ok(())
    }
}

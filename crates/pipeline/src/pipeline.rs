//! 파이프라인 드라이버 -- 읽기/분류/정규화/쓰기의 전체 흐름을 관리합니다.
//!
//! [`SynthPipeline`]은 입력 파일 하나를 출력 파일 하나로 변환하는
//! 단일 패스 실행을 수행합니다. 문서 간 공유 상태는 실행 카운터
//! ([`RunSummary`](logsynth_core::types::RunSummary))뿐입니다.
//!
//! # 내부 아키텍처
//! ```text
//! DocumentReader -> classify -> EventNormalizer -> BufWriter(NDJSON)
//! ```
//!
//! # 에러 전파 정책
//! 개별 NDJSON 라인의 파싱 실패는 리더 단계에서 스킵되지만, 루프 내부의
//! 직렬화/쓰기 실패는 잡지 않고 실행 전체를 중단시킵니다. 출력 핸들은
//! 조기 종료를 포함한 모든 경로에서 스코프 종료와 함께 닫힙니다.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, info};

use logsynth_core::types::RunSummary;

use crate::config::PipelineConfig;
use crate::error::SynthPipelineError;
use crate::normalize::EventNormalizer;
use crate::reader::DocumentReader;
use crate::rule::classify;

/// 파이프라인 드라이버
///
/// # 사용 예시
/// ```no_run
/// # fn example() -> Result<(), logsynth_pipeline::SynthPipelineError> {
/// use logsynth_pipeline::{PipelineConfig, SynthPipeline};
///
/// let pipeline = SynthPipeline::new(PipelineConfig::default())?;
/// let summary = pipeline.run("export.json", "events.ndjson")?;
/// println!("{summary}");
/// # Ok(())
/// # }
/// ```
pub struct SynthPipeline {
    normalizer: EventNormalizer,
}

impl SynthPipeline {
    /// 설정을 검증하고 파이프라인을 생성합니다.
    pub fn new(config: PipelineConfig) -> Result<Self, SynthPipelineError> {
        config.validate()?;
        Ok(Self {
            normalizer: EventNormalizer::new(&config),
        })
    }

    /// 한 번의 end-to-end 실행을 수행합니다.
    ///
    /// 출력 파일은 반복 시작 전에 truncate 모드로 열리므로, 같은 경로로
    /// 재실행하면 이전 내용이 버려집니다. 매칭된 문서마다 JSON 객체
    /// 한 줄이 입력 도착 순서대로 기록됩니다.
    pub fn run(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<RunSummary, SynthPipelineError> {
        let input = input.as_ref();
        let output = output.as_ref();

        // 출력 싱크를 반복 시작 전에 엶 (truncate). 이후의 치명적 입력
        // 에러에서도 핸들은 스코프 종료와 함께 닫힘.
        let mut sink = BufWriter::new(File::create(output)?);

        let reader = DocumentReader::open(input)?;
        info!(
            input = %input.display(),
            format = ?reader.format(),
            "starting pipeline run"
        );

        let mut summary = RunSummary::default();

        for doc in reader {
            summary.record_processed();
            metrics::counter!("logsynth_docs_processed_total").increment(1);

            let Some(rule) = classify(&doc) else {
                continue;
            };

            summary.record_matched();
            metrics::counter!("logsynth_events_matched_total").increment(1);
            debug!(technique = rule.technique, "document matched rule");

            let event = self.normalizer.normalize(&doc, rule);
            let line = serde_json::to_string(&event)?;
            sink.write_all(line.as_bytes())?;
            sink.write_all(b"\n")?;
        }

        sink.flush()?;
        info!(%summary, output = %output.display(), "pipeline run finished");
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn input_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn run_pipeline(content: &str) -> (RunSummary, String) {
        let input = input_file(content);
        let output = tempfile::NamedTempFile::new().unwrap();
        let pipeline = SynthPipeline::new(PipelineConfig::default()).unwrap();
        let summary = pipeline.run(input.path(), output.path()).unwrap();
        let written = std::fs::read_to_string(output.path()).unwrap();
        (summary, written)
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = PipelineConfig {
            observer: String::new(),
            event_id_len: 10,
        };
        assert!(SynthPipeline::new(config).is_err());
    }

    #[test]
    fn empty_input_completes_with_zero_counters() {
        let (summary, written) = run_pipeline("");
        assert_eq!(summary.processed, 0);
        assert_eq!(summary.matched, 0);
        assert!(written.is_empty());
    }

    #[test]
    fn benign_docs_count_processed_only() {
        let (summary, written) =
            run_pipeline("{\"_source\":{\"message\":\"GET /index.html HTTP/1.1\"}}\n");
        assert_eq!(summary.processed, 1);
        assert_eq!(summary.matched, 0);
        assert!(written.is_empty());
    }

    #[test]
    fn matched_doc_emits_one_line() {
        let (summary, written) = run_pipeline(
            "{\"_source\":{\"message\":\"GET /vulnerabilities/exec?cmd=id HTTP/1.1\",\"@timestamp\":\"2024-01-01T00:00:00Z\"}}\n",
        );
        assert_eq!(summary.processed, 1);
        assert_eq!(summary.matched, 1);
        assert_eq!(written.lines().count(), 1);

        let event: serde_json::Value = serde_json::from_str(written.trim()).unwrap();
        assert_eq!(event["event"]["action"], "Command Execution");
        assert_eq!(event["event_id"].as_str().unwrap().len(), 10);
    }

    #[test]
    fn missing_input_file_is_fatal() {
        let output = tempfile::NamedTempFile::new().unwrap();
        let pipeline = SynthPipeline::new(PipelineConfig::default()).unwrap();
        let result = pipeline.run("/nonexistent/input.json", output.path());
        assert!(matches!(result, Err(SynthPipelineError::Input { .. })));
    }

    #[test]
    fn malformed_envelope_is_fatal() {
        let input = input_file("{\"hits\": {");
        let output = tempfile::NamedTempFile::new().unwrap();
        let pipeline = SynthPipeline::new(PipelineConfig::default()).unwrap();
        let result = pipeline.run(input.path(), output.path());
        assert!(matches!(result, Err(SynthPipelineError::Envelope { .. })));
    }
}

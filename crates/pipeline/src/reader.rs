//! 입력 리더 -- 컨테이너 형식 감지 및 문서 이터레이터
//!
//! [`DocumentReader`]는 입력 파일 전체를 메모리로 읽은 뒤 선행 문자로
//! 형식을 판별하고, 문서 단위의 유한/일회성 이터레이터를 제공합니다.
//!
//! # 지원 형식
//! - Elasticsearch `_search` 응답 봉투: 최상위가 `{`로 시작하는 단일 JSON
//!   객체. `hits.hits` 배열의 각 원소가 문서입니다. 최상위 JSON이 깨져
//!   있으면 실행 전체가 치명적 에러입니다 (키 부재는 빈 시퀀스로 완화).
//! - NDJSON: 비어 있지 않은 라인마다 독립된 JSON 값 하나. 파싱에 실패한
//!   라인은 조용히 스킵되며 카운터에 포함되지 않습니다.

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::SynthPipelineError;

/// 감지된 입력 컨테이너 형식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// 비어 있는 입력 (문서 없음)
    Empty,
    /// Elasticsearch `_search` 응답 봉투
    Envelope,
    /// 라인 단위 JSON
    Ndjson,
}

/// 문서 리더
///
/// 파일 하나에서 원시 문서([`serde_json::Value`])의 유한한 시퀀스를
/// 순서대로 산출합니다. 재시작할 수 없으며, 파일 내용은 생성 시점에
/// 전부 읽힙니다 (봉투 파싱도 그 시점에 완료됩니다).
pub struct DocumentReader {
    format: InputFormat,
    inner: ReaderInner,
}

enum ReaderInner {
    Empty,
    /// 봉투의 `hits.hits` 원소들 (이미 파싱 완료)
    Envelope(std::vec::IntoIter<Value>),
    /// NDJSON 라인들 (라인별 지연 파싱)
    Lines(std::vec::IntoIter<String>),
}

impl DocumentReader {
    /// 파일을 열어 형식을 감지하고 리더를 생성합니다.
    ///
    /// 파일이 없거나 읽을 수 없으면 [`SynthPipelineError::Input`],
    /// 봉투 형식의 최상위 JSON이 유효하지 않으면
    /// [`SynthPipelineError::Envelope`]를 반환합니다.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SynthPipelineError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| SynthPipelineError::Input {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_text(&raw, &path.display().to_string())
    }

    /// 이미 읽어들인 텍스트에서 리더를 생성합니다.
    fn from_text(raw: &str, path: &str) -> Result<Self, SynthPipelineError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            debug!(path, "input is empty, yielding no documents");
            return Ok(Self {
                format: InputFormat::Empty,
                inner: ReaderInner::Empty,
            });
        }

        if trimmed.starts_with('{') {
            // 봉투 형식: 최상위 파싱은 즉시 수행되며 실패는 치명적
            let envelope: Value =
                serde_json::from_str(trimmed).map_err(|e| SynthPipelineError::Envelope {
                    path: path.to_owned(),
                    reason: e.to_string(),
                })?;

            let hits = envelope
                .pointer("/hits/hits")
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default();

            debug!(path, hits = hits.len(), "detected envelope input");
            return Ok(Self {
                format: InputFormat::Envelope,
                inner: ReaderInner::Envelope(hits.into_iter()),
            });
        }

        let lines: Vec<String> = trimmed.lines().map(str::to_owned).collect();
        debug!(path, lines = lines.len(), "detected ndjson input");
        Ok(Self {
            format: InputFormat::Ndjson,
            inner: ReaderInner::Lines(lines.into_iter()),
        })
    }

    /// 감지된 입력 형식을 반환합니다.
    pub fn format(&self) -> InputFormat {
        self.format
    }
}

impl Iterator for DocumentReader {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        match &mut self.inner {
            ReaderInner::Empty => None,
            ReaderInner::Envelope(hits) => hits.next(),
            ReaderInner::Lines(lines) => {
                for line in lines.by_ref() {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    match serde_json::from_str(line) {
                        Ok(doc) => return Some(doc),
                        Err(e) => {
                            // 스킵은 에러도 아니고 카운터 대상도 아님
                            debug!(error = %e, "skipping unparseable ndjson line");
                        }
                    }
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(raw: &str) -> DocumentReader {
        DocumentReader::from_text(raw, "test-input").unwrap()
    }

    #[test]
    fn empty_input_yields_nothing() {
        let mut r = reader("");
        assert_eq!(r.format(), InputFormat::Empty);
        assert!(r.next().is_none());
    }

    #[test]
    fn whitespace_only_input_yields_nothing() {
        let mut r = reader("  \n\t  \n");
        assert_eq!(r.format(), InputFormat::Empty);
        assert!(r.next().is_none());
    }

    #[test]
    fn envelope_yields_hits_in_order() {
        let raw = r#"{"hits":{"hits":[
            {"_source":{"message":"first"}},
            {"_source":{"message":"second"}},
            {"_source":{"message":"third"}}
        ]}}"#;
        let r = reader(raw);
        assert_eq!(r.format(), InputFormat::Envelope);
        let docs: Vec<Value> = r.collect();
        assert_eq!(docs.len(), 3);
        assert_eq!(docs[0]["_source"]["message"], "first");
        assert_eq!(docs[2]["_source"]["message"], "third");
    }

    #[test]
    fn envelope_missing_hits_degrades_to_empty() {
        let r = reader(r#"{"took": 3, "timed_out": false}"#);
        assert_eq!(r.format(), InputFormat::Envelope);
        assert_eq!(r.count(), 0);
    }

    #[test]
    fn envelope_hits_not_array_degrades_to_empty() {
        let r = reader(r#"{"hits":{"hits":"oops"}}"#);
        assert_eq!(r.count(), 0);
    }

    #[test]
    fn malformed_envelope_is_fatal() {
        let result = DocumentReader::from_text(r#"{"hits": {"#, "test-input");
        assert!(matches!(
            result,
            Err(SynthPipelineError::Envelope { .. })
        ));
    }

    #[test]
    fn ndjson_yields_one_doc_per_line() {
        let raw = "{\"a\":1}\n{\"a\":2}\n{\"a\":3}";
        let r = reader(raw);
        assert_eq!(r.format(), InputFormat::Ndjson);
        let docs: Vec<Value> = r.collect();
        assert_eq!(docs.len(), 3);
        assert_eq!(docs[1]["a"], 2);
    }

    #[test]
    fn ndjson_skips_blank_lines() {
        let raw = "{\"a\":1}\n\n   \n{\"a\":2}\n";
        let docs: Vec<Value> = reader(raw).collect();
        assert_eq!(docs.len(), 2);
    }

    #[test]
    fn ndjson_skips_unparseable_lines_silently() {
        let raw = "{\"a\":1}\nnot json at all\n{\"a\":2}\n{broken\n{\"a\":3}";
        let docs: Vec<Value> = reader(raw).collect();
        assert_eq!(docs.len(), 3);
        assert_eq!(docs[2]["a"], 3);
    }

    #[test]
    fn ndjson_preserves_file_order() {
        let raw = "{\"n\":\"x\"}\n{\"n\":\"y\"}\n{\"n\":\"z\"}";
        let names: Vec<String> = reader(raw)
            .map(|d| d["n"].as_str().unwrap().to_owned())
            .collect();
        assert_eq!(names, vec!["x", "y", "z"]);
    }

    #[test]
    fn ndjson_non_object_values_are_yielded() {
        // 각 라인은 임의의 JSON 값일 수 있음 (분류기는 비객체를 무매칭 처리)
        let raw = "[1,2,3]\n\"just a string\"\n42";
        let docs: Vec<Value> = reader(raw).collect();
        assert_eq!(docs.len(), 3);
    }

    #[test]
    fn leading_whitespace_before_brace_detects_envelope() {
        let r = reader("  \n\t{\"hits\":{\"hits\":[{\"_source\":{}}]}}");
        assert_eq!(r.format(), InputFormat::Envelope);
        assert_eq!(r.count(), 1);
    }

    #[test]
    fn open_missing_file_is_input_error() {
        let result = DocumentReader::open("/nonexistent/path/logs.json");
        assert!(matches!(result, Err(SynthPipelineError::Input { .. })));
    }

    #[test]
    fn open_reads_real_file() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{{\"_source\":{{\"message\":\"hello\"}}}}").unwrap();
        file.flush().unwrap();

        let docs: Vec<Value> = DocumentReader::open(file.path()).unwrap().collect();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0]["_source"]["message"], "hello");
    }
}

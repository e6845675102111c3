#![doc = include_str!("../README.md")]
//!
//! # 모듈 구성
//!
//! - [`reader`]: 입력 파일 형식 감지 및 문서 이터레이터
//! - [`rule`]: 내장 규칙 테이블 및 분류기 (선언 순서 우선, 첫 매칭 승리)
//! - [`normalize`]: 타임스탬프 해석 및 내용 파생 event_id 생성
//! - [`pipeline`]: 전체 실행 드라이버 (읽기 -> 분류 -> 정규화 -> 쓰기)
//! - [`config`]: 파이프라인 설정 (core 설정에서 파생)
//! - [`error`]: 도메인 에러 타입
//!
//! # 아키텍처
//!
//! ```text
//! DocumentReader -> classify -> EventNormalizer -> NDJSON sink
//!       |              |             |
//!  envelope/ndjson  rule table   sha1 event_id
//! ```

pub mod config;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod reader;
pub mod rule;

// --- 주요 타입 re-export ---

// 파이프라인
pub use pipeline::SynthPipeline;

// 설정
pub use config::PipelineConfig;

// 에러
pub use error::SynthPipelineError;

// 리더
pub use reader::{DocumentReader, InputFormat};

// 규칙
pub use rule::{AttackRule, BUILTIN_RULES, classify};

// 정규화
pub use normalize::EventNormalizer;

//! 이벤트 정규화 -- 타임스탬프 해석 및 내용 파생 event_id 생성
//!
//! [`EventNormalizer`]는 원시 문서와 매칭된 규칙에서
//! [`AttackEvent`](logsynth_core::event::AttackEvent)를 조립합니다.
//!
//! `event_id`는 (원본 메시지 + 해석된 타임스탬프)의 SHA-1 16진수
//! 다이제스트를 고정 길이로 잘라 만든 결정적 식별자입니다. 다운스트림
//! 중복 제거를 위한 것이지 보안 속성이 아니며, 잘린 접두사가 같은
//! 서로 다른 메시지 간 충돌은 허용됩니다.

use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use sha1::{Digest, Sha1};

use logsynth_core::event::{
    ATTACK_FRAMEWORK, AttackEvent, AttackFields, EVENT_CATEGORY, EVENT_TYPE, EventFields,
    LogFields, ObserverFields, ServiceFields,
};

use crate::config::PipelineConfig;
use crate::rule::{AttackRule, message_of};

/// 이벤트 정규화기
///
/// observer 이름과 event_id 길이는 실행 시작 시 고정됩니다.
pub struct EventNormalizer {
    observer: String,
    event_id_len: usize,
}

impl EventNormalizer {
    /// 파이프라인 설정에서 정규화기를 생성합니다.
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            observer: config.observer.clone(),
            event_id_len: config.event_id_len,
        }
    }

    /// 문서와 매칭 규칙에서 정규화된 이벤트를 조립합니다.
    pub fn normalize(&self, doc: &Value, rule: &AttackRule) -> AttackEvent {
        let message = message_of(doc).to_owned();
        let timestamp = resolve_timestamp(doc);
        let event_id = self.event_id(&message, &timestamp);

        AttackEvent {
            timestamp,
            event: EventFields {
                category: EVENT_CATEGORY.to_owned(),
                kind: EVENT_TYPE.to_owned(),
                action: rule.name.to_owned(),
                confidence: rule.confidence,
            },
            attack: AttackFields {
                tactic: rule.tactic.to_owned(),
                technique: rule.technique.to_owned(),
                framework: ATTACK_FRAMEWORK.to_owned(),
            },
            service: ServiceFields {
                name: rule.service.to_owned(),
            },
            log: LogFields { original: message },
            observer: ObserverFields {
                name: self.observer.clone(),
            },
            event_id,
        }
    }

    /// (메시지, 타임스탬프)에서 결정적 식별자를 계산합니다.
    fn event_id(&self, message: &str, timestamp: &str) -> String {
        let mut hasher = Sha1::new();
        hasher.update(message.as_bytes());
        hasher.update(timestamp.as_bytes());
        let digest = hex::encode(hasher.finalize());
        // 설정 검증을 거치지 않은 길이라도 다이제스트 전체 길이에서 멈춤
        let len = digest.len().min(self.event_id_len);
        digest[..len].to_owned()
    }
}

/// 문서의 타임스탬프를 해석합니다.
///
/// `_source.@timestamp`가 문자열로 존재하면 그대로 사용하고,
/// 없으면 현재 UTC 시각을 RFC 3339 + `Z` 형식으로 생성합니다.
fn resolve_timestamp(doc: &Value) -> String {
    doc.pointer("/_source/@timestamp")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_else(|| Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true))
}

//! 출력 레코드 — 정규화된 공격 이벤트
//!
//! [`AttackEvent`]는 파이프라인이 NDJSON으로 기록하는 최종 레코드입니다.
//! 필드 구조는 ECS 스타일의 중첩 객체를 따르며, 직렬화 결과의 키 순서는
//! 구조체 선언 순서와 동일합니다.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Confidence;

// --- 고정 필드 상수 ---

/// 모든 출력 레코드의 event.category 값
pub const EVENT_CATEGORY: &str = "attack";
/// 모든 출력 레코드의 event.type 값
pub const EVENT_TYPE: &str = "web";
/// 공격 분류 체계 이름
pub const ATTACK_FRAMEWORK: &str = "MITRE ATT&CK";
/// 기본 observer 이름
pub const DEFAULT_OBSERVER: &str = "LogSynth";

/// 정규화된 공격 이벤트
///
/// 입력 문서 하나와 매칭된 규칙 하나에서 생성되며, 생성 이후 불변입니다.
/// `event_id`는 (원본 메시지, 타임스탬프)에서 파생된 결정적 식별자입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackEvent {
    /// 이벤트 발생 시각 (원본 `@timestamp` 또는 생성 시각, RFC 3339 + `Z`)
    #[serde(rename = "@timestamp")]
    pub timestamp: String,
    /// 이벤트 분류 필드
    pub event: EventFields,
    /// ATT&CK 분류 필드
    pub attack: AttackFields,
    /// 대상 서비스 필드
    pub service: ServiceFields,
    /// 원본 로그 필드
    pub log: LogFields,
    /// 관측 주체 필드
    pub observer: ObserverFields,
    /// 내용 파생 식별자 (기본 10자리 16진수)
    pub event_id: String,
}

/// `event` 중첩 객체
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFields {
    /// 이벤트 범주 (항상 "attack")
    pub category: String,
    /// 이벤트 유형 (항상 "web")
    #[serde(rename = "type")]
    pub kind: String,
    /// 공격 이름 (규칙의 attack name)
    pub action: String,
    /// 탐지 신뢰도
    pub confidence: Confidence,
}

/// `attack` 중첩 객체
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackFields {
    /// ATT&CK 전술명
    pub tactic: String,
    /// ATT&CK 기법 ID (예: "T1059")
    pub technique: String,
    /// 분류 체계 이름 (항상 "MITRE ATT&CK")
    pub framework: String,
}

/// `service` 중첩 객체
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceFields {
    /// 공격 대상 서비스명
    pub name: String,
}

/// `log` 중첩 객체
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogFields {
    /// 원본 메시지 (대소문자 보존)
    pub original: String,
}

/// `observer` 중첩 객체
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObserverFields {
    /// 관측 주체 이름
    pub name: String,
}

impl fmt::Display for AttackEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AttackEvent[{}] action={} technique={} service={}",
            self.event_id, self.event.action, self.attack.technique, self.service.name,
        )
    }
}
